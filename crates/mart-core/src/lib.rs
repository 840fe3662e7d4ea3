//! Shared domain types for the e-commerce mart pipeline.
//!
//! Holds the raw source-record types read from the Olist CSV exports, the
//! star-schema row types produced by the transformer, calendar derivations
//! for the date dimension, runtime settings, and the common error type.

pub mod calendar;
pub mod error;
pub mod models;
pub mod schema;
pub mod settings;

pub use error::{MartError, Result};
