use chrono::NaiveDate;

// ── SCD placeholder window ────────────────────────────────────────────────────

/// Start of the static validity window attached to every dimension row.
pub fn scd_effective_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 1).expect("static date")
}

/// Far-future end of the static validity window.
pub fn scd_effective_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).expect("static date")
}

// ── Dimension rows ────────────────────────────────────────────────────────────

/// One deduplicated customer with its surrogate key.
#[derive(Debug, Clone, PartialEq)]
pub struct DimCustomer {
    pub customer_key: i64,
    pub customer_id: String,
    pub customer_unique_id: String,
    pub customer_zip_code_prefix: String,
    pub customer_city: String,
    pub customer_state: String,
    pub effective_start_date: NaiveDate,
    pub effective_end_date: NaiveDate,
    pub is_current: bool,
}

/// One deduplicated product, category-translated and null-normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct DimProduct {
    pub product_key: i64,
    pub product_id: String,
    /// `"unknown"` when the source category is missing.
    pub product_category_name: String,
    /// `"unknown"` when no translation exists for the category.
    pub product_category_name_english: String,
    pub product_name_length: f64,
    pub product_description_length: f64,
    pub product_photos_qty: f64,
    pub product_weight_g: f64,
    pub product_length_cm: f64,
    pub product_height_cm: f64,
    pub product_width_cm: f64,
    pub effective_start_date: NaiveDate,
    pub effective_end_date: NaiveDate,
    pub is_current: bool,
}

/// One deduplicated seller with its surrogate key.
#[derive(Debug, Clone, PartialEq)]
pub struct DimSeller {
    pub seller_key: i64,
    pub seller_id: String,
    pub seller_zip_code_prefix: String,
    pub seller_city: String,
    pub seller_state: String,
    pub effective_start_date: NaiveDate,
    pub effective_end_date: NaiveDate,
    pub is_current: bool,
}

/// One calendar day with derived attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct DimDate {
    pub date_key: i64,
    pub full_date: NaiveDate,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub quarter: i32,
    /// Monday = 0 .. Sunday = 6.
    pub day_of_week: i32,
    pub day_name: String,
    pub month_name: String,
    pub is_weekend: bool,
}

// ── Fact row ──────────────────────────────────────────────────────────────────

/// One order line item with all foreign keys resolved.
///
/// The four required keys (customer, product, seller, order date) are
/// non-optional by construction: rows that failed any of those lookups
/// were dropped during the fact build.
#[derive(Debug, Clone, PartialEq)]
pub struct FactOrderItem {
    pub order_item_key: i64,
    pub order_id: String,
    pub order_item_id: i64,
    pub customer_key: i64,
    pub product_key: i64,
    pub seller_key: i64,
    pub order_date_key: i64,
    /// Unresolved for orders still in transit or never delivered.
    pub delivered_date_key: Option<i64>,
    pub order_status: String,
    pub price: f64,
    pub freight_value: f64,
    /// `price + freight_value`.
    pub total_item_value: f64,
    /// Sum over the order's payment rows; absent when none were recorded.
    pub total_payment_value: Option<f64>,
    /// Most frequent payment type for the order.
    pub primary_payment_type: Option<String>,
    pub total_installments: Option<i64>,
    pub review_score: Option<i64>,
}

// ── StarSchema ────────────────────────────────────────────────────────────────

/// The full transformed output: four dimensions and one fact table.
#[derive(Debug, Clone, Default)]
pub struct StarSchema {
    pub dim_customers: Vec<DimCustomer>,
    pub dim_products: Vec<DimProduct>,
    pub dim_sellers: Vec<DimSeller>,
    pub dim_date: Vec<DimDate>,
    pub fact_order_items: Vec<FactOrderItem>,
}
