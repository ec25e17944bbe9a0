//! Tokenization and lemmatization of user text.
//!
//! The router only depends on the [`Preprocessor`] trait; [`StemmingPreprocessor`]
//! is the bundled implementation.

/// Snowball-based preprocessor
pub mod stemming;
/// Stop-word lists per locale
pub mod stop_words;

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

pub use stemming::StemmingPreprocessor;

/// One word-level token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appeared in the input
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Whether every character is alphabetic
    pub is_alpha: bool,
    /// Whether the token is a stop word
    pub is_stop: bool,
}

/// Splits text into annotated tokens.
///
/// Implementations must be deterministic and free of side effects.
pub trait Preprocessor: Send + Sync {
    /// Tokenize `text`, preserving order.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Lemmas of alphabetic, non-stop tokens: the topical signature of a text.
    fn content_keywords(&self, text: &str) -> HashSet<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| token.is_alpha && !token.is_stop)
            .map(|token| token.lemma)
            .collect()
    }

    /// Lemmas of every alphabetic token, stop words included.
    fn alphabetic_lemmas(&self, text: &str) -> HashSet<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|token| token.is_alpha)
            .map(|token| token.lemma)
            .collect()
    }

    /// Raw surface forms in order.
    fn surface_forms(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }
}

/// Strip diacritics so `catálogo` and `catalogo` compare equal.
pub fn fold_accents(text: &str) -> String {
    text.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("catálogo"), "catalogo");
        assert_eq!(fold_accents("Muéstrame el CATÁLOGO"), "Muestrame el CATALOGO");
        assert_eq!(fold_accents("plain"), "plain");
    }

    #[test]
    fn test_fold_accents_keeps_enye_base_letter() {
        assert_eq!(fold_accents("año"), "ano");
    }
}
