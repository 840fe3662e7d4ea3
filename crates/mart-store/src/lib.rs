//! Persistence and reporting for the mart pipeline.
//!
//! Loads the transformed star schema into a relational store through the
//! `sqlx` `Any` driver (Postgres in production, in-memory SQLite in tests)
//! and runs the fixed aggregate reports, exporting each result set as CSV.

pub mod loader;
pub mod reports;
pub mod table;

pub use mart_core as core;
