use serde::Deserialize;

/// One row of `olist_orders_dataset.csv`.
///
/// Timestamps are kept as the raw source strings; the transformer parses
/// the two it needs into dates.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: String,
    /// `YYYY-MM-DD HH:MM:SS` purchase timestamp.
    pub order_purchase_timestamp: String,
    /// Empty for orders that have not reached the customer yet.
    pub order_delivered_customer_date: Option<String>,
}

/// One row of `olist_order_items_dataset.csv`: one line item of an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    /// 1-based position of the item within its order.
    pub order_item_id: i64,
    pub product_id: String,
    pub seller_id: String,
    pub price: f64,
    pub freight_value: f64,
}

/// One row of `olist_customers_dataset.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_unique_id: String,
    /// Kept as text, since prefixes carry leading zeros.
    pub customer_zip_code_prefix: String,
    pub customer_city: String,
    pub customer_state: String,
}

/// One row of `olist_products_dataset.csv`.
///
/// The `lenght` misspellings are the dataset's own column headers.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_category_name: Option<String>,
    #[serde(rename = "product_name_lenght")]
    pub product_name_length: Option<f64>,
    #[serde(rename = "product_description_lenght")]
    pub product_description_length: Option<f64>,
    pub product_photos_qty: Option<f64>,
    pub product_weight_g: Option<f64>,
    pub product_length_cm: Option<f64>,
    pub product_height_cm: Option<f64>,
    pub product_width_cm: Option<f64>,
}

/// One row of `olist_sellers_dataset.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    pub seller_zip_code_prefix: String,
    pub seller_city: String,
    pub seller_state: String,
}

/// One row of `olist_order_payments_dataset.csv`.
///
/// An order may have several payment rows (vouchers, split payments).
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_type: String,
    pub payment_installments: i64,
    pub payment_value: f64,
}

/// One row of `olist_order_reviews_dataset.csv`, projected to the score.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub order_id: String,
    pub review_score: i64,
}

/// One row of `product_category_name_translation.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTranslation {
    pub product_category_name: String,
    pub product_category_name_english: String,
}

/// Every extracted dataset, keyed by field rather than by name string.
#[derive(Debug, Clone, Default)]
pub struct RawData {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
    pub category_translation: Vec<CategoryTranslation>,
}
