//! Extraction and transformation layers for the mart pipeline.
//!
//! Responsible for reading the Olist CSV exports into typed records and
//! reshaping them into the star schema: four dimension tables plus the
//! order-item fact table.

pub mod aggregate;
pub mod dates;
pub mod dimensions;
pub mod extract;
pub mod facts;

use mart_core::models::RawData;
use mart_core::schema::StarSchema;
use mart_core::Result;
use tracing::info;

pub use mart_core as core;

/// Build the full star schema from the extracted datasets.
///
/// Runs every dimension builder, then the fact builder, and logs a summary
/// of all five table sizes. Fact rows that fail required-key resolution are
/// dropped and counted inside the fact builder.
pub fn transform_data(raw: &RawData) -> Result<StarSchema> {
    let dim_customers = dimensions::build_dim_customers(&raw.customers);
    let dim_products = dimensions::build_dim_products(&raw.products, &raw.category_translation);
    let dim_sellers = dimensions::build_dim_sellers(&raw.sellers);
    let dim_date = dates::build_dim_date();

    let fact = facts::build_fact_order_items(
        raw,
        &dim_customers,
        &dim_products,
        &dim_sellers,
        &dim_date,
    )?;

    info!(
        "Transformation complete: dim_customers={}, dim_products={}, dim_sellers={}, dim_date={}, fact_order_items={}",
        dim_customers.len(),
        dim_products.len(),
        dim_sellers.len(),
        dim_date.len(),
        fact.rows.len()
    );

    Ok(StarSchema {
        dim_customers,
        dim_products,
        dim_sellers,
        dim_date,
        fact_order_items: fact.rows,
    })
}
