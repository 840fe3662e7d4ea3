//! Dimension builders for customers, products and sellers.
//!
//! Each builder deduplicates on the natural key (first occurrence wins, in
//! input order), assigns dense surrogate keys starting at 1, and attaches
//! the static SCD placeholder window.

use std::collections::{HashMap, HashSet};

use mart_core::models::{CategoryTranslation, Customer, Product, Seller};
use mart_core::schema::{
    scd_effective_end, scd_effective_start, DimCustomer, DimProduct, DimSeller,
};
use tracing::info;

/// Category value substituted for missing names and missing translations.
const UNKNOWN_CATEGORY: &str = "unknown";

// ── Customers ─────────────────────────────────────────────────────────────────

/// Deduplicate customers by `customer_id` and key them 1..=N.
pub fn build_dim_customers(customers: &[Customer]) -> Vec<DimCustomer> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<DimCustomer> = Vec::with_capacity(customers.len());

    for customer in customers {
        if !seen.insert(customer.customer_id.as_str()) {
            continue;
        }
        rows.push(DimCustomer {
            customer_key: rows.len() as i64 + 1,
            customer_id: customer.customer_id.clone(),
            customer_unique_id: customer.customer_unique_id.clone(),
            customer_zip_code_prefix: customer.customer_zip_code_prefix.clone(),
            customer_city: customer.customer_city.clone(),
            customer_state: customer.customer_state.clone(),
            effective_start_date: scd_effective_start(),
            effective_end_date: scd_effective_end(),
            is_current: true,
        });
    }

    info!("dim_customers: {} rows", rows.len());
    rows
}

// ── Sellers ───────────────────────────────────────────────────────────────────

/// Deduplicate sellers by `seller_id` and key them 1..=N.
pub fn build_dim_sellers(sellers: &[Seller]) -> Vec<DimSeller> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<DimSeller> = Vec::with_capacity(sellers.len());

    for seller in sellers {
        if !seen.insert(seller.seller_id.as_str()) {
            continue;
        }
        rows.push(DimSeller {
            seller_key: rows.len() as i64 + 1,
            seller_id: seller.seller_id.clone(),
            seller_zip_code_prefix: seller.seller_zip_code_prefix.clone(),
            seller_city: seller.seller_city.clone(),
            seller_state: seller.seller_state.clone(),
            effective_start_date: scd_effective_start(),
            effective_end_date: scd_effective_end(),
            is_current: true,
        });
    }

    info!("dim_sellers: {} rows", rows.len());
    rows
}

// ── Products ──────────────────────────────────────────────────────────────────

/// Build the product dimension with category translation.
///
/// Normalisation order matters and mirrors the load order of the source
/// pipeline: a missing category becomes `"unknown"` *before* the
/// translation lookup, a missing translation becomes `"unknown"` *after*
/// it, and the seven numeric attributes are zero-filled. Deduplication by
/// `product_id` happens last, first occurrence winning.
pub fn build_dim_products(
    products: &[Product],
    translations: &[CategoryTranslation],
) -> Vec<DimProduct> {
    let translation_map: HashMap<&str, &str> = translations
        .iter()
        .map(|t| {
            (
                t.product_category_name.as_str(),
                t.product_category_name_english.as_str(),
            )
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<DimProduct> = Vec::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.product_id.as_str()) {
            continue;
        }

        let category = product
            .product_category_name
            .as_deref()
            .unwrap_or(UNKNOWN_CATEGORY);
        let category_english = translation_map
            .get(category)
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY);

        rows.push(DimProduct {
            product_key: rows.len() as i64 + 1,
            product_id: product.product_id.clone(),
            product_category_name: category.to_string(),
            product_category_name_english: category_english.to_string(),
            product_name_length: product.product_name_length.unwrap_or(0.0),
            product_description_length: product.product_description_length.unwrap_or(0.0),
            product_photos_qty: product.product_photos_qty.unwrap_or(0.0),
            product_weight_g: product.product_weight_g.unwrap_or(0.0),
            product_length_cm: product.product_length_cm.unwrap_or(0.0),
            product_height_cm: product.product_height_cm.unwrap_or(0.0),
            product_width_cm: product.product_width_cm.unwrap_or(0.0),
            effective_start_date: scd_effective_start(),
            effective_end_date: scd_effective_end(),
            is_current: true,
        });
    }

    let distinct_categories: HashSet<&str> = rows
        .iter()
        .map(|r| r.product_category_name_english.as_str())
        .collect();
    info!(
        "dim_products: {} rows, {} distinct categories",
        rows.len(),
        distinct_categories.len()
    );

    rows
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, unique: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            customer_unique_id: unique.to_string(),
            customer_zip_code_prefix: "01409".to_string(),
            customer_city: "sao paulo".to_string(),
            customer_state: "SP".to_string(),
        }
    }

    fn seller(id: &str) -> Seller {
        Seller {
            seller_id: id.to_string(),
            seller_zip_code_prefix: "13023".to_string(),
            seller_city: "campinas".to_string(),
            seller_state: "SP".to_string(),
        }
    }

    fn product(id: &str, category: Option<&str>) -> Product {
        Product {
            product_id: id.to_string(),
            product_category_name: category.map(str::to_string),
            product_name_length: Some(40.0),
            product_description_length: Some(280.0),
            product_photos_qty: Some(1.0),
            product_weight_g: Some(225.0),
            product_length_cm: Some(16.0),
            product_height_cm: Some(10.0),
            product_width_cm: Some(14.0),
        }
    }

    fn translation(pt: &str, en: &str) -> CategoryTranslation {
        CategoryTranslation {
            product_category_name: pt.to_string(),
            product_category_name_english: en.to_string(),
        }
    }

    // ── build_dim_customers ───────────────────────────────────────────────────

    #[test]
    fn test_customers_dense_keys_in_input_order() {
        let rows = build_dim_customers(&[customer("c1", "u1"), customer("c2", "u2")]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer_key, 1);
        assert_eq!(rows[0].customer_id, "c1");
        assert_eq!(rows[1].customer_key, 2);
        assert_eq!(rows[1].customer_id, "c2");
    }

    #[test]
    fn test_customers_dedupe_first_wins() {
        let rows = build_dim_customers(&[
            customer("c1", "first"),
            customer("c1", "second"),
            customer("c2", "u2"),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer_unique_id, "first");
        assert_eq!(rows[1].customer_key, 2);
    }

    #[test]
    fn test_customers_scd_placeholder_window() {
        let rows = build_dim_customers(&[customer("c1", "u1")]);

        assert_eq!(rows[0].effective_start_date.to_string(), "2016-01-01");
        assert_eq!(rows[0].effective_end_date.to_string(), "2099-12-31");
        assert!(rows[0].is_current);
    }

    // ── build_dim_sellers ─────────────────────────────────────────────────────

    #[test]
    fn test_sellers_dedupe_and_keys() {
        let rows = build_dim_sellers(&[seller("s1"), seller("s2"), seller("s1")]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].seller_key, 1);
        assert_eq!(rows[1].seller_key, 2);
        assert!(rows[1].is_current);
    }

    // ── build_dim_products ────────────────────────────────────────────────────

    #[test]
    fn test_products_category_translated() {
        let rows = build_dim_products(
            &[product("p1", Some("perfumaria"))],
            &[translation("perfumaria", "perfumery")],
        );

        assert_eq!(rows[0].product_category_name, "perfumaria");
        assert_eq!(rows[0].product_category_name_english, "perfumery");
    }

    #[test]
    fn test_products_missing_category_is_unknown_both_ways() {
        let rows = build_dim_products(
            &[product("p1", None)],
            &[translation("perfumaria", "perfumery")],
        );

        assert_eq!(rows[0].product_category_name, "unknown");
        assert_eq!(rows[0].product_category_name_english, "unknown");
    }

    #[test]
    fn test_products_untranslated_category_keeps_source_name() {
        let rows = build_dim_products(&[product("p1", Some("bebes"))], &[]);

        assert_eq!(rows[0].product_category_name, "bebes");
        assert_eq!(rows[0].product_category_name_english, "unknown");
    }

    #[test]
    fn test_products_numeric_nulls_zero_filled() {
        let mut p = product("p1", Some("perfumaria"));
        p.product_weight_g = None;
        p.product_photos_qty = None;

        let rows = build_dim_products(&[p], &[]);

        assert_eq!(rows[0].product_weight_g, 0.0);
        assert_eq!(rows[0].product_photos_qty, 0.0);
        // Untouched attributes keep their values.
        assert_eq!(rows[0].product_length_cm, 16.0);
    }

    #[test]
    fn test_products_dedupe_first_wins() {
        let rows = build_dim_products(
            &[
                product("p1", Some("perfumaria")),
                product("p1", Some("bebes")),
            ],
            &[translation("perfumaria", "perfumery")],
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_category_name, "perfumaria");
    }
}
