//! Per-order aggregation of multi-row child records.
//!
//! Payments collapse to one row per order (value and installment sums plus
//! the modal payment type); reviews keep only the first score seen per
//! order. Both preserve first-appearance order of the order ids.

use std::collections::{HashMap, HashSet};

use mart_core::models::{Payment, Review};

// ── PaymentAggregate ──────────────────────────────────────────────────────────

/// Payment totals for a single order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentAggregate {
    pub order_id: String,
    /// Sum of `payment_value` over the order's payment rows.
    pub total_payment_value: f64,
    /// Sum of `payment_installments` over the order's payment rows.
    pub total_installments: i64,
    /// Most frequent `payment_type`; ties go to the type seen first.
    pub primary_payment_type: String,
}

/// Running totals while an order's payment rows are folded in.
#[derive(Debug, Default)]
struct PaymentAccumulator {
    total_value: f64,
    total_installments: i64,
    /// Counts in first-seen order, so the tie-break stays deterministic.
    type_counts: Vec<(String, u32)>,
}

impl PaymentAccumulator {
    fn add(&mut self, payment: &Payment) {
        self.total_value += payment.payment_value;
        self.total_installments += payment.payment_installments;

        match self
            .type_counts
            .iter_mut()
            .find(|(ty, _)| ty == &payment.payment_type)
        {
            Some((_, count)) => *count += 1,
            None => self.type_counts.push((payment.payment_type.clone(), 1)),
        }
    }

    /// Modal payment type: strictly-greater counts win, so the first
    /// entry among tied counts is kept.
    fn primary_type(&self) -> String {
        let mut best: Option<(&str, u32)> = None;
        for (ty, count) in &self.type_counts {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((ty, *count)),
            }
        }
        best.map(|(ty, _)| ty.to_string()).unwrap_or_default()
    }
}

/// Collapse all payment rows into one [`PaymentAggregate`] per order.
///
/// Output order follows the first appearance of each order id in the
/// input slice.
pub fn aggregate_payments(payments: &[Payment]) -> Vec<PaymentAggregate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, PaymentAccumulator)> = Vec::new();

    for payment in payments {
        let slot = match index.get(&payment.order_id) {
            Some(&slot) => slot,
            None => {
                index.insert(payment.order_id.clone(), groups.len());
                groups.push((payment.order_id.clone(), PaymentAccumulator::default()));
                groups.len() - 1
            }
        };
        groups[slot].1.add(payment);
    }

    groups
        .into_iter()
        .map(|(order_id, acc)| PaymentAggregate {
            primary_payment_type: acc.primary_type(),
            total_payment_value: acc.total_value,
            total_installments: acc.total_installments,
            order_id,
        })
        .collect()
}

// ── Review deduplication ──────────────────────────────────────────────────────

/// Keep at most one review per order: the first occurrence wins, any
/// further reviews for the same order id are discarded.
pub fn dedupe_reviews(reviews: &[Review]) -> Vec<Review> {
    let mut seen: HashSet<&str> = HashSet::new();
    reviews
        .iter()
        .filter(|review| seen.insert(review.order_id.as_str()))
        .cloned()
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
