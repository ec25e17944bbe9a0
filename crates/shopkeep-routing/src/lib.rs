//! Intent classification and fuzzy catalog matching.
//!
//! [`IntentRouter::answer`] is the entry point: it turns one free-text query into
//! one response string, consulting the catalog through an ordered rule cascade.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Error types for routing
pub mod error;
/// Budget and size extraction
pub mod extract;
/// Response messages and listings
pub mod format;
/// Tokenization and lemmatization
pub mod lexical;
/// Keyword-overlap and similarity matching
pub mod matching;
/// Rule cascade and router
pub mod router;

pub use error::{Result, RoutingError};
pub use extract::{detect_size, extract_budget, extract_sizes};
pub use format::{Messages, ResponseFormatter};
pub use lexical::{Preprocessor, StemmingPreprocessor, Token};
pub use matching::{FuzzyMatcher, MatchKind};
pub use router::{Intent, IntentRouter, Reply, Rule};
