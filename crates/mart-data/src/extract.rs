//! CSV extraction for the mart pipeline.
//!
//! Reads the eight Olist source files into typed record vectors held fully
//! in memory. Loading is all-or-nothing: the first missing or malformed
//! file aborts the extraction with the offending path in the error.

use std::path::{Path, PathBuf};

use mart_core::models::RawData;
use mart_core::{MartError, Result};
use tracing::info;

// ── DatasetPaths ──────────────────────────────────────────────────────────────

/// File location for each logical dataset.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub orders: PathBuf,
    pub order_items: PathBuf,
    pub customers: PathBuf,
    pub products: PathBuf,
    pub sellers: PathBuf,
    pub payments: PathBuf,
    pub reviews: PathBuf,
    pub category_translation: PathBuf,
}

impl DatasetPaths {
    /// Standard Olist export file names under `data_dir`.
    ///
    /// The geolocation dataset is deliberately absent (out of scope).
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            orders: data_dir.join("olist_orders_dataset.csv"),
            order_items: data_dir.join("olist_order_items_dataset.csv"),
            customers: data_dir.join("olist_customers_dataset.csv"),
            products: data_dir.join("olist_products_dataset.csv"),
            sellers: data_dir.join("olist_sellers_dataset.csv"),
            payments: data_dir.join("olist_order_payments_dataset.csv"),
            reviews: data_dir.join("olist_order_reviews_dataset.csv"),
            category_translation: data_dir.join("product_category_name_translation.csv"),
        }
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Load every dataset into memory, failing fast on the first bad file.
///
/// No field-level validation happens here: blank cells simply become
/// `None` on `Option` fields; anything stricter is the transformer's job.
pub fn extract_data(paths: &DatasetPaths) -> Result<RawData> {
    let data = RawData {
        orders: load_csv(&paths.orders, "orders")?,
        order_items: load_csv(&paths.order_items, "order_items")?,
        customers: load_csv(&paths.customers, "customers")?,
        products: load_csv(&paths.products, "products")?,
        sellers: load_csv(&paths.sellers, "sellers")?,
        payments: load_csv(&paths.payments, "payments")?,
        reviews: load_csv(&paths.reviews, "reviews")?,
        category_translation: load_csv(&paths.category_translation, "category_translation")?,
    };

    info!("All datasets extracted successfully");
    Ok(data)
}

/// Read one headered CSV file into typed records.
fn load_csv<T: serde::de::DeserializeOwned>(path: &Path, name: &str) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|source| MartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let columns = reader
        .headers()
        .map_err(|source| MartError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let mut rows: Vec<T> = Vec::new();
    for record in reader.deserialize() {
        let row = record.map_err(|source| MartError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }

    info!("{}: {} rows, {} columns", name, rows.len(), columns);
    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
