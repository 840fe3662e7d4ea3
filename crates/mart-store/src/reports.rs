//! Fixed aggregate reports exported as CSV.
//!
//! Five named queries run against the loaded star schema, each filtered to
//! delivered orders (the business definition of revenue-countable) and
//! each materialised to `<output_dir>/<name>.csv`. Rounded aggregates are
//! cast back to `DOUBLE PRECISION` so the `Any` driver can decode them on
//! both Postgres and SQLite.

use std::path::Path;

use mart_core::Result;
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Column, Row};
use tracing::info;

// ── Report definitions ────────────────────────────────────────────────────────

/// One named report query.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub name: &'static str,
    pub sql: &'static str,
}

/// The fixed report set, run in order.
pub const REPORTS: &[Report] = &[
    Report {
        name: "monthly_revenue",
        sql: "\
            SELECT d.year, d.month, d.month_name,
                   COUNT(DISTINCT f.order_id) AS total_orders,
                   CAST(ROUND(CAST(SUM(f.total_item_value) AS NUMERIC), 2) AS DOUBLE PRECISION) AS total_revenue
            FROM fact_order_items f
            JOIN dim_date d ON f.order_date_key = d.date_key
            WHERE f.order_status = 'delivered'
            GROUP BY d.year, d.month, d.month_name
            ORDER BY d.year, d.month",
    },
    Report {
        name: "category_performance",
        sql: "\
            SELECT p.product_category_name_english AS category,
                   COUNT(*) AS units_sold,
                   CAST(ROUND(CAST(SUM(f.total_item_value) AS NUMERIC), 2) AS DOUBLE PRECISION) AS total_revenue,
                   CAST(ROUND(CAST(AVG(f.review_score) AS NUMERIC), 2) AS DOUBLE PRECISION) AS avg_review
            FROM fact_order_items f
            JOIN dim_products p ON f.product_key = p.product_key
            WHERE f.order_status = 'delivered'
            GROUP BY p.product_category_name_english
            ORDER BY total_revenue DESC",
    },
    Report {
        name: "state_performance",
        sql: "\
            SELECT c.customer_state,
                   COUNT(DISTINCT c.customer_key) AS customers,
                   COUNT(DISTINCT f.order_id) AS orders,
                   CAST(ROUND(CAST(SUM(f.total_item_value) AS NUMERIC), 2) AS DOUBLE PRECISION) AS revenue
            FROM fact_order_items f
            JOIN dim_customers c ON f.customer_key = c.customer_key
            WHERE f.order_status = 'delivered'
            GROUP BY c.customer_state
            ORDER BY revenue DESC",
    },
    Report {
        name: "top_sellers",
        sql: "\
            SELECT s.seller_id, s.seller_state,
                   COUNT(DISTINCT f.order_id) AS orders,
                   CAST(ROUND(CAST(SUM(f.price) AS NUMERIC), 2) AS DOUBLE PRECISION) AS revenue
            FROM fact_order_items f
            JOIN dim_sellers s ON f.seller_key = s.seller_key
            WHERE f.order_status = 'delivered'
            GROUP BY s.seller_id, s.seller_state
            ORDER BY revenue DESC
            LIMIT 50",
    },
    Report {
        name: "payment_methods",
        sql: "\
            SELECT primary_payment_type,
                   COUNT(DISTINCT order_id) AS num_orders,
                   CAST(ROUND(CAST(SUM(total_payment_value) AS NUMERIC), 2) AS DOUBLE PRECISION) AS total_value
            FROM fact_order_items
            WHERE primary_payment_type IS NOT NULL
              AND order_status = 'delivered'
            GROUP BY primary_payment_type
            ORDER BY num_orders DESC",
    },
];

// ── Execution ─────────────────────────────────────────────────────────────────

/// Run every report against the store and export each to a CSV file.
///
/// Reports run strictly in order; the first query or write failure aborts
/// the rest.
pub async fn run_reports(pool: &AnyPool, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    for report in REPORTS {
        let rows = sqlx::query(report.sql).fetch_all(pool).await?;
        let path = output_dir.join(format!("{}.csv", report.name));
        write_report_csv(&path, &rows)?;
        info!("{}: {} rows -> {}", report.name, rows.len(), path.display());
    }

    Ok(())
}

/// Write one result set as CSV with a header row.
///
/// An empty result set produces an empty file: with no rows there is no
/// column metadata to write a header from.
fn write_report_csv(path: &Path, rows: &[AnyRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if let Some(first) = rows.first() {
        writer.write_record(first.columns().iter().map(|c| c.name()))?;
    }
    for row in rows {
        let record: Vec<String> = (0..row.columns().len())
            .map(|idx| cell_to_string(row, idx))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render one result cell as CSV text; NULL becomes the empty string.
///
/// The `Any` driver has no uniform value type, so decoding is tried from
/// the narrowest scalar outward.
fn cell_to_string(row: &AnyRow, idx: usize) -> String {
    if let Ok(value) = row.try_get::<Option<i64>, _>(idx) {
        return value.map(|v| v.to_string()).unwrap_or_default();
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(idx) {
        return value.map(|v| v.to_string()).unwrap_or_default();
    }
    if let Ok(value) = row.try_get::<Option<bool>, _>(idx) {
        return value.map(|v| v.to_string()).unwrap_or_default();
    }
    row.try_get::<Option<String>, _>(idx)
        .ok()
        .flatten()
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
