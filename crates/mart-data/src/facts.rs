//! Fact table assembly.
//!
//! Joins order items to their orders, attaches the per-order payment and
//! review aggregates, resolves every surrogate key by natural-key lookup,
//! and drops rows whose required keys cannot be resolved, reporting the
//! attrition count.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use mart_core::models::RawData;
use mart_core::schema::{DimCustomer, DimDate, DimProduct, DimSeller, FactOrderItem};
use mart_core::{MartError, Result};
use tracing::{info, warn};

use crate::aggregate::{aggregate_payments, dedupe_reviews, PaymentAggregate};

// ── FactBuild ─────────────────────────────────────────────────────────────────

/// The built fact table plus the number of joined rows that were dropped
/// because a required surrogate key did not resolve.
#[derive(Debug, Clone)]
pub struct FactBuild {
    pub rows: Vec<FactOrderItem>,
    pub dropped: usize,
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Source timestamps look like `2017-10-02 10:56:33`, occasionally with a
/// fractional-seconds suffix.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_source_timestamp(raw: &str) -> Result<NaiveDateTime> {
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }
    Err(MartError::TimestampParse(raw.to_string()))
}

// ── Fact builder ──────────────────────────────────────────────────────────────

/// Per-order fields pulled out of the orders table for the item join.
struct OrderInfo<'a> {
    customer_id: &'a str,
    order_status: &'a str,
    order_date: NaiveDate,
    delivered_date: Option<NaiveDate>,
}

/// A joined order item whose key lookups have not been enforced yet.
struct Candidate<'a> {
    order_id: &'a str,
    order_item_id: i64,
    customer_key: Option<i64>,
    product_key: Option<i64>,
    seller_key: Option<i64>,
    order_date_key: Option<i64>,
    delivered_date_key: Option<i64>,
    order_status: &'a str,
    price: f64,
    freight_value: f64,
    payment: Option<&'a PaymentAggregate>,
    review_score: Option<i64>,
}

/// Build `fact_order_items` from the raw datasets and the built dimensions.
///
/// Order items whose order id has no matching order are discarded by the
/// inner join (an item without an order is invalid) and do not count as
/// attrition. Surrogate keys are assigned over the joined rows *before*
/// the required-key filter, so surviving keys are not renumbered.
pub fn build_fact_order_items(
    raw: &RawData,
    dim_customers: &[DimCustomer],
    dim_products: &[DimProduct],
    dim_sellers: &[DimSeller],
    dim_date: &[DimDate],
) -> Result<FactBuild> {
    // Per-order aggregates.
    let payment_aggs = aggregate_payments(&raw.payments);
    let payments_by_order: HashMap<&str, &PaymentAggregate> = payment_aggs
        .iter()
        .map(|agg| (agg.order_id.as_str(), agg))
        .collect();

    let reviews = dedupe_reviews(&raw.reviews);
    let scores_by_order: HashMap<&str, i64> = reviews
        .iter()
        .map(|review| (review.order_id.as_str(), review.review_score))
        .collect();

    // Orders keyed by id, timestamps reduced to dates.
    let mut orders_by_id: HashMap<&str, OrderInfo<'_>> = HashMap::with_capacity(raw.orders.len());
    for order in &raw.orders {
        let order_date = parse_source_timestamp(&order.order_purchase_timestamp)?.date();
        let delivered_date = match order.order_delivered_customer_date.as_deref() {
            Some(raw_ts) => Some(parse_source_timestamp(raw_ts)?.date()),
            None => None,
        };
        orders_by_id
            .entry(order.order_id.as_str())
            .or_insert(OrderInfo {
                customer_id: &order.customer_id,
                order_status: &order.order_status,
                order_date,
                delivered_date,
            });
    }

    // Natural key → surrogate key lookup tables.
    let customer_keys: HashMap<&str, i64> = dim_customers
        .iter()
        .map(|c| (c.customer_id.as_str(), c.customer_key))
        .collect();
    let product_keys: HashMap<&str, i64> = dim_products
        .iter()
        .map(|p| (p.product_id.as_str(), p.product_key))
        .collect();
    let seller_keys: HashMap<&str, i64> = dim_sellers
        .iter()
        .map(|s| (s.seller_id.as_str(), s.seller_key))
        .collect();
    let date_keys: HashMap<NaiveDate, i64> = dim_date
        .iter()
        .map(|d| (d.full_date, d.date_key))
        .collect();

    // Inner join items → orders, then resolve everything else as left joins.
    let mut candidates: Vec<Candidate<'_>> = Vec::with_capacity(raw.order_items.len());
    for item in &raw.order_items {
        let Some(order) = orders_by_id.get(item.order_id.as_str()) else {
            continue;
        };

        candidates.push(Candidate {
            order_id: &item.order_id,
            order_item_id: item.order_item_id,
            customer_key: customer_keys.get(order.customer_id).copied(),
            product_key: product_keys.get(item.product_id.as_str()).copied(),
            seller_key: seller_keys.get(item.seller_id.as_str()).copied(),
            order_date_key: date_keys.get(&order.order_date).copied(),
            delivered_date_key: order
                .delivered_date
                .and_then(|date| date_keys.get(&date).copied()),
            order_status: order.order_status,
            price: item.price,
            freight_value: item.freight_value,
            payment: payments_by_order.get(item.order_id.as_str()).copied(),
            review_score: scores_by_order.get(item.order_id.as_str()).copied(),
        });
    }

    let initial_count = candidates.len();
    let mut rows: Vec<FactOrderItem> = Vec::with_capacity(initial_count);

    for (idx, candidate) in candidates.into_iter().enumerate() {
        let (Some(customer_key), Some(product_key), Some(seller_key), Some(order_date_key)) = (
            candidate.customer_key,
            candidate.product_key,
            candidate.seller_key,
            candidate.order_date_key,
        ) else {
            continue;
        };

        rows.push(FactOrderItem {
            order_item_key: idx as i64 + 1,
            order_id: candidate.order_id.to_string(),
            order_item_id: candidate.order_item_id,
            customer_key,
            product_key,
            seller_key,
            order_date_key,
            delivered_date_key: candidate.delivered_date_key,
            order_status: candidate.order_status.to_string(),
            price: candidate.price,
            freight_value: candidate.freight_value,
            total_item_value: candidate.price + candidate.freight_value,
            total_payment_value: candidate.payment.map(|p| p.total_payment_value),
            primary_payment_type: candidate.payment.map(|p| p.primary_payment_type.clone()),
            total_installments: candidate.payment.map(|p| p.total_installments),
            review_score: candidate.review_score,
        });
    }

    let dropped = initial_count - rows.len();
    info!("fact_order_items: {} rows", rows.len());
    if dropped > 0 {
        warn!("Dropped {} rows with missing keys", dropped);
    }

    Ok(FactBuild { rows, dropped })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
