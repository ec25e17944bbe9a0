//! Fuzzy matching of free text against catalog items.
//!
//! An item matches when either the query's content keywords share a lemma with
//! the item projection, or the raw query is similar enough to the projection.
//! Matching is boolean per item; results keep catalog order.

/// String similarity measures
pub mod similarity;

use std::collections::HashSet;
use std::sync::Arc;

use shopkeep_core::{Catalog, Item, MatchingConfig, SimilarityMetric};

use crate::lexical::Preprocessor;

pub use similarity::{gestalt_ratio, similarity};

/// Which strategy accepted an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Query and projection share at least one lemma
    KeywordOverlap,
    /// Similarity ratio reached the threshold
    Similarity,
}

/// Compares queries with item projections.
pub struct FuzzyMatcher {
    preprocessor: Arc<dyn Preprocessor>,
    threshold: f64,
    metric: SimilarityMetric,
}

impl FuzzyMatcher {
    /// Create a matcher with the configured threshold and metric.
    pub fn new(preprocessor: Arc<dyn Preprocessor>, config: &MatchingConfig) -> Self {
        Self {
            preprocessor,
            threshold: config.similarity_threshold,
            metric: config.metric,
        }
    }

    /// Content keywords of the lower-cased query.
    pub fn query_keywords(&self, query: &str) -> HashSet<String> {
        self.preprocessor.content_keywords(&query.to_lowercase())
    }

    /// Whether `keywords` share a lemma with the item projection.
    pub fn keyword_overlap(&self, keywords: &HashSet<String>, item: &Item) -> bool {
        if keywords.is_empty() {
            return false;
        }
        let item_lemmas = self
            .preprocessor
            .alphabetic_lemmas(&item.projection().to_lowercase());
        !keywords.is_disjoint(&item_lemmas)
    }

    /// Similarity between the raw query and the item projection.
    pub fn similarity(&self, query: &str, item: &Item) -> f64 {
        similarity(self.metric, query, &item.projection())
    }

    /// Decide whether `item` matches, reporting the first strategy that accepted it.
    pub fn match_kind(
        &self,
        query: &str,
        keywords: &HashSet<String>,
        item: &Item,
    ) -> Option<MatchKind> {
        if self.keyword_overlap(keywords, item) {
            return Some(MatchKind::KeywordOverlap);
        }
        (self.similarity(query, item) >= self.threshold).then_some(MatchKind::Similarity)
    }

    /// Every matching item, in catalog order.
    pub fn search<'catalog>(&self, query: &str, catalog: &'catalog Catalog) -> Vec<&'catalog Item> {
        let keywords = self.query_keywords(query);
        tracing::debug!("Searching with keywords {keywords:?}");

        catalog.filter_by_predicate(|item| {
            let kind = self.match_kind(query, &keywords, item);
            if let Some(kind) = kind {
                tracing::debug!("{} matched by {kind:?}", item.name);
            }
            kind.is_some()
        })
    }
}
