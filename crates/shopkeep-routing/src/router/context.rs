use std::collections::BTreeSet;
use std::sync::Arc;

use shopkeep_core::{Catalog, Item, ShopConfig, Vocabulary};

use crate::extract::{detect_size, extract_budget};
use crate::format::ResponseFormatter;
use crate::lexical::{Preprocessor, Token, fold_accents};
use crate::matching::FuzzyMatcher;

/// One non-empty query, tokenized once for every rule to inspect.
#[derive(Debug, Clone)]
pub struct Utterance<'query> {
    raw: &'query str,
    folded: String,
    tokens: Vec<Token>,
}

impl<'query> Utterance<'query> {
    /// Trim and tokenize `raw`; `None` for empty or whitespace-only input.
    pub fn parse<P>(raw: &'query str, preprocessor: &P) -> Option<Self>
    where
        P: Preprocessor + ?Sized,
    {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let lowered = raw.to_lowercase();
        Some(Self {
            raw,
            folded: fold_accents(&lowered),
            tokens: preprocessor.tokenize(&lowered),
        })
    }

    /// Trimmed query as typed.
    pub fn raw(&self) -> &'query str {
        self.raw
    }

    /// Whether any of `words` occurs as a substring, ignoring case and accents.
    pub fn mentions(&self, words: &[String]) -> bool {
        words
            .iter()
            .map(|word| fold_accents(&word.to_lowercase()))
            .any(|word| !word.is_empty() && self.folded.contains(&word))
    }

    /// Whether `phrase` appears as a run of whole tokens, ignoring case.
    pub fn has_phrase(&self, phrase: &str) -> bool {
        let words: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return false;
        }
        self.tokens.windows(words.len()).any(|window| {
            window
                .iter()
                .zip(&words)
                .all(|(token, word)| token.text == *word)
        })
    }
}

/// Read-only state shared by the rules: catalog, vocabularies, matcher, formatter.
pub struct RouterContext {
    catalog: Arc<Catalog>,
    preprocessor: Arc<dyn Preprocessor>,
    matcher: FuzzyMatcher,
    formatter: ResponseFormatter,
    vocabulary: Vocabulary,
    sizes: Vec<String>,
}

impl RouterContext {
    /// Assemble the context from a loaded catalog and configuration.
    pub fn new(
        catalog: Arc<Catalog>,
        config: &ShopConfig,
        preprocessor: Arc<dyn Preprocessor>,
    ) -> Self {
        Self {
            catalog,
            matcher: FuzzyMatcher::new(Arc::clone(&preprocessor), &config.matching),
            preprocessor,
            formatter: ResponseFormatter::new(config.locale),
            vocabulary: config.resolved_vocabulary(),
            sizes: config.size_vocabulary(),
        }
    }

    /// The catalog being queried.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Response formatter for the configured locale.
    pub fn formatter(&self) -> &ResponseFormatter {
        &self.formatter
    }

    /// Intent keywords for the configured locale.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Amount in `text`, if any.
    pub fn extract_budget(&self, text: &str) -> Option<f64> {
        extract_budget(text)
    }

    /// First known size in `text`, in vocabulary order.
    pub fn detect_size(&self, text: &str) -> Option<String> {
        detect_size(self.preprocessor.as_ref(), text, &self.sizes)
    }

    /// Full catalog listing.
    pub fn list_catalog(&self) -> String {
        self.formatter
            .listing(self.formatter.messages().catalog_header, self.catalog.all())
    }

    /// Items priced at or below `budget`, or a message naming the budget.
    pub fn filter_by_budget(&self, budget: f64) -> String {
        let affordable = self.catalog.filter_by_predicate(|item| item.price <= budget);
        tracing::debug!("{} items within budget {budget}", affordable.len());
        if affordable.is_empty() {
            return self.formatter.budget_empty(budget);
        }
        self.formatter
            .listing(&self.formatter.budget_header(budget), affordable)
    }

    /// Items whose size is in `sizes`, or a message naming the sizes.
    pub fn filter_by_size(&self, sizes: &BTreeSet<String>) -> String {
        let wanted: BTreeSet<String> = sizes.iter().map(|size| size.to_uppercase()).collect();
        let matching = self
            .catalog
            .filter_by_predicate(|item| wanted.contains(&item.size.trim().to_uppercase()));
        tracing::debug!("{} items in sizes {wanted:?}", matching.len());
        if matching.is_empty() {
            return self.formatter.size_empty(sizes);
        }
        self.formatter
            .listing(self.formatter.messages().size_header, matching)
    }

    /// Items matching `query` by keyword overlap or similarity, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        self.matcher.search(query, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::StemmingPreprocessor;
    use shopkeep_core::Locale;

    fn context() -> RouterContext {
        RouterContext::new(
            Arc::new(Catalog::seeded()),
            &ShopConfig::default(),
            Arc::new(StemmingPreprocessor::new(Locale::English)),
        )
    }

    #[test]
    fn test_parse_rejects_blank_queries() {
        let preprocessor = StemmingPreprocessor::new(Locale::English);
        for blank in ["", "   ", "\t\n"] {
            assert!(Utterance::parse(blank, &preprocessor).is_none());
        }
    }

    #[test]
    fn test_parse_trims_and_folds() {
        let preprocessor = StemmingPreprocessor::new(Locale::English);
        let utterance = Utterance::parse("  Ver el Catálogo ", &preprocessor).unwrap();
        assert_eq!(utterance.raw(), "Ver el Catálogo");
        assert_eq!(utterance.folded, "ver el catalogo");
        assert!(utterance.mentions(&["CATALOG".to_owned()]));
        assert!(utterance.mentions(&["catálogo".to_owned()]));
        assert!(!utterance.mentions(&[String::new()]));
    }

    #[test]
    fn test_has_phrase_requires_whole_tokens() {
        let preprocessor = StemmingPreprocessor::new(Locale::Spanish);
        let utterance = Utterance::parse("Muéstrame faldas, por favor", &preprocessor).unwrap();
        assert!(utterance.has_phrase("por favor"));
        assert!(utterance.has_phrase("Faldas"));
        assert!(!utterance.has_phrase("favor por"));
        assert!(!utterance.has_phrase("fald"));
        assert!(!utterance.has_phrase("   "));
    }

    #[test]
    fn test_filter_by_budget_inclusive() {
        let text = context().filter_by_budget(19.99);
        assert!(text.contains("Camiseta blanca"));
        assert!(!text.contains("Falda roja"));
    }

    #[test]
    fn test_filter_by_budget_nothing_affordable() {
        assert_eq!(
            context().filter_by_budget(5.0),
            "No products were found within your budget of $5.00."
        );
    }

    #[test]
    fn test_filter_by_size_is_case_insensitive() {
        let sizes = BTreeSet::from(["m".to_owned()]);
        let text = context().filter_by_size(&sizes);
        assert!(text.starts_with("These are the products available in the requested sizes:"));
        assert!(text.contains("Vestido negro"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_filter_by_size_names_missing_sizes() {
        let sizes = BTreeSet::from(["XL".to_owned(), "U".to_owned()]);
        assert_eq!(
            context().filter_by_size(&sizes),
            "No products were found in the requested sizes: U, XL."
        );
    }
}
