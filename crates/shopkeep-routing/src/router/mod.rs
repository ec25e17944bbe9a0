//! Intent routing.
//!
//! [`IntentRouter`] runs each query through an ordered list of [`Rule`]s; the
//! first rule that applies produces the response. No state survives between
//! calls, so the same query against the same catalog always gets the same answer.

/// Catalog access and per-query parsing shared by the rules
pub mod context;
/// The rule cascade
pub mod rules;

use core::fmt::{Display, Formatter, Result as FmtResult};
use std::collections::BTreeSet;
use std::sync::Arc;

use shopkeep_core::{Catalog, Item, ShopConfig};

use crate::error::{Result, RoutingError};
use crate::lexical::{Preprocessor, StemmingPreprocessor};

pub use context::{RouterContext, Utterance};
pub use rules::{
    BudgetRule, CatalogRule, PolitenessRule, Rule, SearchRule, SizeRule, default_rules,
};

/// Handling strategy chosen for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Courtesy acknowledgment
    Politeness,
    /// Full catalog listing
    CatalogListing,
    /// Filter by budget
    Budget,
    /// Filter by size
    Size,
    /// Fuzzy search
    Search,
}

impl Display for Intent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Politeness => "politeness",
            Self::CatalogListing => "catalog",
            Self::Budget => "budget",
            Self::Size => "size",
            Self::Search => "search",
        };
        formatter.write_str(name)
    }
}

/// A routed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Rule that answered; `None` when the query was empty
    pub intent: Option<Intent>,
    /// Text shown to the user
    pub text: String,
}

/// Routes free-text queries to catalog answers.
pub struct IntentRouter {
    context: RouterContext,
    preprocessor: Arc<dyn Preprocessor>,
    rules: Vec<Box<dyn Rule>>,
}

impl IntentRouter {
    /// Create a router with the locale's stemming preprocessor and the default rules.
    pub fn new(catalog: Arc<Catalog>, config: &ShopConfig) -> Self {
        Self::with_preprocessor(
            catalog,
            config,
            Arc::new(StemmingPreprocessor::new(config.locale)),
        )
    }

    /// Create a router with a custom preprocessor.
    pub fn with_preprocessor(
        catalog: Arc<Catalog>,
        config: &ShopConfig,
        preprocessor: Arc<dyn Preprocessor>,
    ) -> Self {
        Self {
            context: RouterContext::new(catalog, config, Arc::clone(&preprocessor)),
            preprocessor,
            rules: default_rules(),
        }
    }

    /// Load (or seed) the configured catalog and build a router over it.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be seeded or fails validation.
    pub fn load(config: &ShopConfig) -> Result<Self> {
        let catalog = Catalog::load_or_seed(&config.catalog_path)?;
        Ok(Self::new(Arc::new(catalog), config))
    }

    /// Shared read-only state the rules work against.
    pub fn context(&self) -> &RouterContext {
        &self.context
    }

    /// Decide which intent handles `query` without producing a response.
    ///
    /// # Errors
    /// Returns [`RoutingError::EmptyQuery`] for blank input.
    pub fn classify(&self, query: &str) -> Result<Intent> {
        let utterance = Utterance::parse(query, self.preprocessor.as_ref())
            .ok_or(RoutingError::EmptyQuery)?;
        Ok(self.select_rule(&utterance).intent())
    }

    /// Route `query` and report which intent answered.
    pub fn respond(&self, query: &str) -> Reply {
        let Some(utterance) = Utterance::parse(query, self.preprocessor.as_ref()) else {
            tracing::debug!("Rejected empty query");
            return Reply {
                intent: None,
                text: self.context.formatter().messages().empty_query.to_owned(),
            };
        };

        let rule = self.select_rule(&utterance);
        let intent = rule.intent();
        tracing::debug!("Routed {:?} to {intent}", utterance.raw());

        Reply {
            intent: Some(intent),
            text: rule.handle(&utterance, &self.context),
        }
    }

    /// Answer `query`. Never fails: every input yields a response.
    pub fn answer(&self, query: &str) -> String {
        self.respond(query).text
    }

    /// Items priced at or below `budget`, formatted.
    pub fn filter_by_budget(&self, budget: f64) -> String {
        self.context.filter_by_budget(budget)
    }

    /// Items in any of `sizes`, formatted.
    pub fn filter_by_size(&self, sizes: &BTreeSet<String>) -> String {
        self.context.filter_by_size(sizes)
    }

    /// Items matching `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        self.context.search(query)
    }

    fn select_rule(&self, utterance: &Utterance<'_>) -> &dyn Rule {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(utterance, &self.context))
            .map_or(&SearchRule as &dyn Rule, |rule| rule.as_ref())
    }
}
