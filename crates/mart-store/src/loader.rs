//! Star-schema persistence.
//!
//! Every table is fully replaced on every run: drop, recreate, then insert
//! in bounded chunks, one transaction per chunk. After all five tables are
//! written their row counts are read back from the store as a verification
//! step. The first failure aborts the remaining loads.

use std::sync::Once;

use mart_core::schema::StarSchema;
use mart_core::Result;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tracing::info;

use crate::table::MartTable;

/// Rows inserted per transaction.
const CHUNK_SIZE: usize = 1000;

static INSTALL_DRIVERS: Once = Once::new();

// ── Connection ────────────────────────────────────────────────────────────────

/// Open a single-connection pool for the store.
///
/// One connection is all the pipeline needs, since the stages run strictly
/// in sequence. It also keeps an in-memory SQLite store alive for the whole
/// session in tests.
pub async fn connect(url: &str) -> Result<AnyPool> {
    INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .connect(url)
        .await?;
    Ok(pool)
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Replace `T`'s table in the store with `rows`.
pub async fn load_table<T: MartTable>(pool: &AnyPool, rows: &[T]) -> Result<()> {
    let drop_sql = format!("DROP TABLE IF EXISTS {}", T::NAME);
    sqlx::query(&drop_sql).execute(pool).await?;
    sqlx::query(T::CREATE_SQL).execute(pool).await?;

    for chunk in rows.chunks(CHUNK_SIZE) {
        let mut tx = pool.begin().await?;
        for row in chunk {
            row.bind(sqlx::query(T::INSERT_SQL)).execute(&mut *tx).await?;
        }
        tx.commit().await?;
    }

    info!("{}: loaded {} rows", T::NAME, rows.len());
    Ok(())
}

/// Current row count of `table` in the store.
pub async fn table_count(pool: &AnyPool, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}

/// Load all five tables, then read each row count back as verification.
pub async fn load_star_schema(pool: &AnyPool, schema: &StarSchema) -> Result<()> {
    load_table(pool, &schema.dim_customers).await?;
    load_table(pool, &schema.dim_products).await?;
    load_table(pool, &schema.dim_sellers).await?;
    load_table(pool, &schema.dim_date).await?;
    load_table(pool, &schema.fact_order_items).await?;

    for table in [
        "dim_customers",
        "dim_products",
        "dim_sellers",
        "dim_date",
        "fact_order_items",
    ] {
        let count = table_count(pool, table).await?;
        info!("{}: {} rows in store", table, count);
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mart_core::schema::{
        scd_effective_end, scd_effective_start, DimCustomer, FactOrderItem, StarSchema,
    };
    use mart_data::dates::build_dim_date;

    // ── Helpers ───────────────────────────────────────────────────────────────

    async fn memory_pool() -> AnyPool {
        connect("sqlite::memory:").await.unwrap()
    }

    fn customer_row(key: i64, id: &str) -> DimCustomer {
        DimCustomer {
            customer_key: key,
            customer_id: id.to_string(),
            customer_unique_id: format!("u-{id}"),
            customer_zip_code_prefix: "01409".to_string(),
            customer_city: "sao paulo".to_string(),
            customer_state: "SP".to_string(),
            effective_start_date: scd_effective_start(),
            effective_end_date: scd_effective_end(),
            is_current: true,
        }
    }

    fn fact_row(key: i64, order_id: &str) -> FactOrderItem {
        FactOrderItem {
            order_item_key: key,
            order_id: order_id.to_string(),
            order_item_id: 1,
            customer_key: 1,
            product_key: 1,
            seller_key: 1,
            order_date_key: 641,
            delivered_date_key: None,
            order_status: "delivered".to_string(),
            price: 50.0,
            freight_value: 10.0,
            total_item_value: 60.0,
            total_payment_value: None,
            primary_payment_type: None,
            total_installments: None,
            review_score: None,
        }
    }

    // ── load_table / table_count ──────────────────────────────────────────────

    #[tokio::test]
    async fn test_round_trip_row_count() {
        let pool = memory_pool().await;
        let rows = vec![customer_row(1, "c1"), customer_row(2, "c2")];

        load_table(&pool, &rows).await.unwrap();

        assert_eq!(table_count(&pool, "dim_customers").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_table() {
        let pool = memory_pool().await;

        load_table(&pool, &[customer_row(1, "c1"), customer_row(2, "c2")])
            .await
            .unwrap();
        load_table(&pool, &[customer_row(1, "c9")]).await.unwrap();

        assert_eq!(table_count(&pool, "dim_customers").await.unwrap(), 1);
        let id: String = sqlx::query_scalar("SELECT customer_id FROM dim_customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(id, "c9");
    }

    #[tokio::test]
    async fn test_chunked_load_crosses_chunk_boundary() {
        let pool = memory_pool().await;
        // The full date dimension is 1461 rows, more than one chunk.
        let rows = build_dim_date();
        assert!(rows.len() > CHUNK_SIZE);

        load_table(&pool, &rows).await.unwrap();

        assert_eq!(
            table_count(&pool, "dim_date").await.unwrap(),
            rows.len() as i64
        );
    }

    #[tokio::test]
    async fn test_fact_nullable_columns_round_trip() {
        let pool = memory_pool().await;

        load_table(&pool, &[fact_row(1, "o1")]).await.unwrap();

        let payment: Option<f64> =
            sqlx::query_scalar("SELECT total_payment_value FROM fact_order_items")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(payment, None);

        let delivered: Option<i64> =
            sqlx::query_scalar("SELECT delivered_date_key FROM fact_order_items")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(delivered, None);
    }

    #[tokio::test]
    async fn test_empty_table_loads_and_counts_zero() {
        let pool = memory_pool().await;

        load_table::<DimCustomer>(&pool, &[]).await.unwrap();

        assert_eq!(table_count(&pool, "dim_customers").await.unwrap(), 0);
    }

    // ── load_star_schema ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_load_star_schema_all_tables_present() {
        let pool = memory_pool().await;
        let schema = StarSchema {
            dim_customers: vec![customer_row(1, "c1")],
            dim_date: build_dim_date(),
            fact_order_items: vec![fact_row(1, "o1")],
            ..Default::default()
        };

        load_star_schema(&pool, &schema).await.unwrap();

        assert_eq!(table_count(&pool, "dim_customers").await.unwrap(), 1);
        assert_eq!(table_count(&pool, "dim_products").await.unwrap(), 0);
        assert_eq!(table_count(&pool, "dim_sellers").await.unwrap(), 0);
        assert_eq!(table_count(&pool, "dim_date").await.unwrap(), 1461);
        assert_eq!(table_count(&pool, "fact_order_items").await.unwrap(), 1);
    }
}
