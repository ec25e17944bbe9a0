//! Core types for the shopkeep assistant.
//!
//! This crate provides the product catalog, locale vocabularies, configuration,
//! and error handling shared by the routing engine and the command-line front end.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Product catalog and catalog store.
pub mod catalog;
/// Configuration loading and defaults.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Locale-specific vocabularies.
pub mod locale;

pub use catalog::{Catalog, Item};
pub use config::{MatchingConfig, ShopConfig, SimilarityMetric, VocabularyConfig};
pub use error::{Error, Result};
pub use locale::{Locale, Vocabulary};
