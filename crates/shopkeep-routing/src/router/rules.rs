use std::collections::BTreeSet;

use super::Intent;
use super::context::{RouterContext, Utterance};

/// One step of the intent cascade: a predicate and the handler it guards.
pub trait Rule: Send + Sync {
    /// Intent this rule answers.
    fn intent(&self) -> Intent;

    /// Whether this rule claims the utterance.
    fn applies_to(&self, utterance: &Utterance<'_>, context: &RouterContext) -> bool;

    /// Produce the response text.
    fn handle(&self, utterance: &Utterance<'_>, context: &RouterContext) -> String;
}

/// Rules in evaluation order.
///
/// Politeness comes first, so "thanks, show me the catalog" is acknowledged
/// rather than listed. Search is last and always applies.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PolitenessRule),
        Box::new(CatalogRule),
        Box::new(BudgetRule),
        Box::new(SizeRule),
        Box::new(SearchRule),
    ]
}

/// Acknowledges courtesy words.
pub struct PolitenessRule;

impl Rule for PolitenessRule {
    fn intent(&self) -> Intent {
        Intent::Politeness
    }

    fn applies_to(&self, utterance: &Utterance<'_>, context: &RouterContext) -> bool {
        context
            .vocabulary()
            .courtesy_words
            .iter()
            .any(|phrase| utterance.has_phrase(phrase))
    }

    fn handle(&self, _utterance: &Utterance<'_>, context: &RouterContext) -> String {
        context.formatter().messages().acknowledgment.to_owned()
    }
}

/// Lists the whole catalog; ignores everything else in the query.
pub struct CatalogRule;

impl Rule for CatalogRule {
    fn intent(&self) -> Intent {
        Intent::CatalogListing
    }

    fn applies_to(&self, utterance: &Utterance<'_>, context: &RouterContext) -> bool {
        utterance.mentions(&context.vocabulary().catalog_words)
    }

    fn handle(&self, _utterance: &Utterance<'_>, context: &RouterContext) -> String {
        context.list_catalog()
    }
}

/// Filters by the first amount in the query.
pub struct BudgetRule;

impl Rule for BudgetRule {
    fn intent(&self) -> Intent {
        Intent::Budget
    }

    fn applies_to(&self, utterance: &Utterance<'_>, context: &RouterContext) -> bool {
        utterance.mentions(&context.vocabulary().budget_words)
    }

    fn handle(&self, utterance: &Utterance<'_>, context: &RouterContext) -> String {
        match context.extract_budget(utterance.raw()) {
            Some(budget) => context.filter_by_budget(budget),
            None => context.formatter().messages().budget_missing.to_owned(),
        }
    }
}

/// Filters by the first recognized size.
pub struct SizeRule;

impl Rule for SizeRule {
    fn intent(&self) -> Intent {
        Intent::Size
    }

    fn applies_to(&self, utterance: &Utterance<'_>, context: &RouterContext) -> bool {
        utterance.mentions(&context.vocabulary().size_words)
    }

    fn handle(&self, utterance: &Utterance<'_>, context: &RouterContext) -> String {
        match context.detect_size(utterance.raw()) {
            Some(size) => context.filter_by_size(&BTreeSet::from([size])),
            None => context.formatter().messages().size_missing.to_owned(),
        }
    }
}

/// Fuzzy search over the catalog; the fallback.
pub struct SearchRule;

impl Rule for SearchRule {
    fn intent(&self) -> Intent {
        Intent::Search
    }

    fn applies_to(&self, _utterance: &Utterance<'_>, _context: &RouterContext) -> bool {
        true
    }

    fn handle(&self, utterance: &Utterance<'_>, context: &RouterContext) -> String {
        let results = context.search(utterance.raw());
        let messages = context.formatter().messages();
        if results.is_empty() {
            return messages.search_empty.to_owned();
        }
        context.formatter().listing(messages.search_header, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::StemmingPreprocessor;
    use shopkeep_core::{Catalog, Locale, ShopConfig};
    use std::sync::Arc;

    fn context(locale: Locale) -> RouterContext {
        let config = ShopConfig {
            locale,
            ..ShopConfig::default()
        };
        RouterContext::new(
            Arc::new(Catalog::seeded()),
            &config,
            Arc::new(StemmingPreprocessor::new(locale)),
        )
    }

    fn applies(rule: &dyn Rule, query: &str, locale: Locale) -> bool {
        let preprocessor = StemmingPreprocessor::new(locale);
        let utterance = Utterance::parse(query, &preprocessor).unwrap();
        rule.applies_to(&utterance, &context(locale))
    }

    #[test]
    fn test_default_rule_order() {
        let intents: Vec<Intent> = default_rules().iter().map(|rule| rule.intent()).collect();
        assert_eq!(
            intents,
            vec![
                Intent::Politeness,
                Intent::CatalogListing,
                Intent::Budget,
                Intent::Size,
                Intent::Search
            ]
        );
    }

    #[test]
    fn test_politeness_matches_whole_words_only() {
        assert!(applies(&PolitenessRule, "THANKS!", Locale::English));
        assert!(applies(&PolitenessRule, "could you please help", Locale::English));
        assert!(!applies(&PolitenessRule, "greatest jeans", Locale::English));
    }

    #[test]
    fn test_politeness_spanish_phrase() {
        assert!(applies(&PolitenessRule, "Por favor, el catálogo", Locale::Spanish));
        assert!(!applies(&PolitenessRule, "a favor", Locale::Spanish));
    }

    #[test]
    fn test_catalog_rule_accent_insensitive() {
        assert!(applies(&CatalogRule, "show me the catálogo", Locale::English));
        assert!(applies(&CatalogRule, "CATALOG", Locale::English));
        assert!(applies(&CatalogRule, "quiero ver el catálogo", Locale::Spanish));
    }

    #[test]
    fn test_budget_rule_substring() {
        assert!(applies(&BudgetRule, "what are your prices", Locale::English));
        assert!(applies(&BudgetRule, "mi presupuesto es 30", Locale::Spanish));
        assert!(!applies(&BudgetRule, "cheap stuff", Locale::English));
    }

    #[test]
    fn test_budget_rule_without_amount_guides_user() {
        let preprocessor = StemmingPreprocessor::new(Locale::English);
        let utterance = Utterance::parse("what is my budget", &preprocessor).unwrap();
        let text = BudgetRule.handle(&utterance, &context(Locale::English));
        assert!(text.starts_with("Please provide a valid budget"));
    }

    #[test]
    fn test_size_rule_without_size_guides_user() {
        let preprocessor = StemmingPreprocessor::new(Locale::English);
        let utterance = Utterance::parse("which sizes do you have", &preprocessor).unwrap();
        let text = SizeRule.handle(&utterance, &context(Locale::English));
        assert_eq!(text, "Please specify a valid size (S, M, L, XL, etc.).");
    }

    #[test]
    fn test_search_rule_always_applies() {
        assert!(applies(&SearchRule, "anything at all", Locale::English));
    }
}
