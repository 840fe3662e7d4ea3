//! Store bindings for the star-schema row types.
//!
//! Each table type carries its DDL, its insert statement, and knows how to
//! bind one row's values in column order. Dates are stored as ISO-8601
//! text: the `Any` driver binds scalar types only, and nothing downstream
//! filters on a raw date column.

use mart_core::schema::{DimCustomer, DimDate, DimProduct, DimSeller, FactOrderItem};
use sqlx::any::{Any, AnyArguments};
use sqlx::query::Query;

/// Shorthand for a dynamically-bound query against the `Any` driver.
pub type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// A star-schema table that can be persisted to the store.
///
/// `INSERT_SQL` uses `$n` placeholders, which both Postgres and SQLite
/// accept.
pub trait MartTable {
    /// Table name in the store.
    const NAME: &'static str;
    /// DDL creating the table from scratch.
    const CREATE_SQL: &'static str;
    /// Insert statement binding one row.
    const INSERT_SQL: &'static str;

    /// Bind this row's values onto `query`, in DDL column order.
    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q>;
}

// ── dim_customers ─────────────────────────────────────────────────────────────

impl MartTable for DimCustomer {
    const NAME: &'static str = "dim_customers";

    const CREATE_SQL: &'static str = "\
        CREATE TABLE dim_customers (
            customer_key            BIGINT PRIMARY KEY,
            customer_id             TEXT NOT NULL,
            customer_unique_id      TEXT NOT NULL,
            customer_zip_code_prefix TEXT NOT NULL,
            customer_city           TEXT NOT NULL,
            customer_state          TEXT NOT NULL,
            effective_start_date    TEXT NOT NULL,
            effective_end_date      TEXT NOT NULL,
            is_current              BOOLEAN NOT NULL
        )";

    const INSERT_SQL: &'static str = "\
        INSERT INTO dim_customers (
            customer_key, customer_id, customer_unique_id,
            customer_zip_code_prefix, customer_city, customer_state,
            effective_start_date, effective_end_date, is_current
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";

    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.customer_key)
            .bind(self.customer_id.clone())
            .bind(self.customer_unique_id.clone())
            .bind(self.customer_zip_code_prefix.clone())
            .bind(self.customer_city.clone())
            .bind(self.customer_state.clone())
            .bind(self.effective_start_date.to_string())
            .bind(self.effective_end_date.to_string())
            .bind(self.is_current)
    }
}

// ── dim_products ──────────────────────────────────────────────────────────────

impl MartTable for DimProduct {
    const NAME: &'static str = "dim_products";

    const CREATE_SQL: &'static str = "\
        CREATE TABLE dim_products (
            product_key                   BIGINT PRIMARY KEY,
            product_id                    TEXT NOT NULL,
            product_category_name         TEXT NOT NULL,
            product_category_name_english TEXT NOT NULL,
            product_name_lenght           DOUBLE PRECISION NOT NULL,
            product_description_lenght    DOUBLE PRECISION NOT NULL,
            product_photos_qty            DOUBLE PRECISION NOT NULL,
            product_weight_g              DOUBLE PRECISION NOT NULL,
            product_length_cm             DOUBLE PRECISION NOT NULL,
            product_height_cm             DOUBLE PRECISION NOT NULL,
            product_width_cm              DOUBLE PRECISION NOT NULL,
            effective_start_date          TEXT NOT NULL,
            effective_end_date            TEXT NOT NULL,
            is_current                    BOOLEAN NOT NULL
        )";

    const INSERT_SQL: &'static str = "\
        INSERT INTO dim_products (
            product_key, product_id,
            product_category_name, product_category_name_english,
            product_name_lenght, product_description_lenght, product_photos_qty,
            product_weight_g, product_length_cm, product_height_cm, product_width_cm,
            effective_start_date, effective_end_date, is_current
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)";

    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.product_key)
            .bind(self.product_id.clone())
            .bind(self.product_category_name.clone())
            .bind(self.product_category_name_english.clone())
            .bind(self.product_name_length)
            .bind(self.product_description_length)
            .bind(self.product_photos_qty)
            .bind(self.product_weight_g)
            .bind(self.product_length_cm)
            .bind(self.product_height_cm)
            .bind(self.product_width_cm)
            .bind(self.effective_start_date.to_string())
            .bind(self.effective_end_date.to_string())
            .bind(self.is_current)
    }
}

// ── dim_sellers ───────────────────────────────────────────────────────────────

impl MartTable for DimSeller {
    const NAME: &'static str = "dim_sellers";

    const CREATE_SQL: &'static str = "\
        CREATE TABLE dim_sellers (
            seller_key             BIGINT PRIMARY KEY,
            seller_id              TEXT NOT NULL,
            seller_zip_code_prefix TEXT NOT NULL,
            seller_city            TEXT NOT NULL,
            seller_state           TEXT NOT NULL,
            effective_start_date   TEXT NOT NULL,
            effective_end_date     TEXT NOT NULL,
            is_current             BOOLEAN NOT NULL
        )";

    const INSERT_SQL: &'static str = "\
        INSERT INTO dim_sellers (
            seller_key, seller_id, seller_zip_code_prefix,
            seller_city, seller_state,
            effective_start_date, effective_end_date, is_current
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.seller_key)
            .bind(self.seller_id.clone())
            .bind(self.seller_zip_code_prefix.clone())
            .bind(self.seller_city.clone())
            .bind(self.seller_state.clone())
            .bind(self.effective_start_date.to_string())
            .bind(self.effective_end_date.to_string())
            .bind(self.is_current)
    }
}

// ── dim_date ──────────────────────────────────────────────────────────────────

impl MartTable for DimDate {
    const NAME: &'static str = "dim_date";

    const CREATE_SQL: &'static str = "\
        CREATE TABLE dim_date (
            date_key    BIGINT PRIMARY KEY,
            full_date   TEXT NOT NULL,
            day         INTEGER NOT NULL,
            month       INTEGER NOT NULL,
            year        INTEGER NOT NULL,
            quarter     INTEGER NOT NULL,
            day_of_week INTEGER NOT NULL,
            day_name    TEXT NOT NULL,
            month_name  TEXT NOT NULL,
            is_weekend  BOOLEAN NOT NULL
        )";

    const INSERT_SQL: &'static str = "\
        INSERT INTO dim_date (
            date_key, full_date, day, month, year, quarter,
            day_of_week, day_name, month_name, is_weekend
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";

    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.date_key)
            .bind(self.full_date.to_string())
            .bind(self.day)
            .bind(self.month)
            .bind(self.year)
            .bind(self.quarter)
            .bind(self.day_of_week)
            .bind(self.day_name.clone())
            .bind(self.month_name.clone())
            .bind(self.is_weekend)
    }
}

// ── fact_order_items ──────────────────────────────────────────────────────────

impl MartTable for FactOrderItem {
    const NAME: &'static str = "fact_order_items";

    const CREATE_SQL: &'static str = "\
        CREATE TABLE fact_order_items (
            order_item_key      BIGINT PRIMARY KEY,
            order_id            TEXT NOT NULL,
            order_item_id       BIGINT NOT NULL,
            customer_key        BIGINT NOT NULL,
            product_key         BIGINT NOT NULL,
            seller_key          BIGINT NOT NULL,
            order_date_key      BIGINT NOT NULL,
            delivered_date_key  BIGINT,
            order_status        TEXT NOT NULL,
            price               DOUBLE PRECISION NOT NULL,
            freight_value       DOUBLE PRECISION NOT NULL,
            total_item_value    DOUBLE PRECISION NOT NULL,
            total_payment_value DOUBLE PRECISION,
            primary_payment_type TEXT,
            total_installments  BIGINT,
            review_score        BIGINT
        )";

    const INSERT_SQL: &'static str = "\
        INSERT INTO fact_order_items (
            order_item_key, order_id, order_item_id,
            customer_key, product_key, seller_key,
            order_date_key, delivered_date_key,
            order_status, price, freight_value, total_item_value,
            total_payment_value, primary_payment_type, total_installments,
            review_score
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)";

    fn bind<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.order_item_key)
            .bind(self.order_id.clone())
            .bind(self.order_item_id)
            .bind(self.customer_key)
            .bind(self.product_key)
            .bind(self.seller_key)
            .bind(self.order_date_key)
            .bind(self.delivered_date_key)
            .bind(self.order_status.clone())
            .bind(self.price)
            .bind(self.freight_value)
            .bind(self.total_item_value)
            .bind(self.total_payment_value)
            .bind(self.primary_payment_type.clone())
            .bind(self.total_installments)
            .bind(self.review_score)
    }
}
