use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};
use shopkeep_core::Locale;
use unicode_segmentation::UnicodeSegmentation as _;

use super::stop_words::stop_words;
use super::{Preprocessor, Token};

/// Splits on Unicode word boundaries and lemmatizes with a Snowball stemmer.
///
/// Punctuation comes out as separate, non-alphabetic tokens; numbers such as
/// `49.99` stay whole. Word bounds keep `size:M` together, so colons are split
/// off afterwards.
pub struct StemmingPreprocessor {
    stemmer: Stemmer,
    stop_words: HashSet<&'static str>,
}

impl StemmingPreprocessor {
    /// Create a preprocessor for `locale`.
    pub fn new(locale: Locale) -> Self {
        let algorithm = match locale {
            Locale::English => Algorithm::English,
            Locale::Spanish => Algorithm::Spanish,
        };
        Self {
            stemmer: Stemmer::create(algorithm),
            stop_words: stop_words(locale),
        }
    }

    fn annotate(&self, surface: &str) -> Token {
        let is_alpha = surface.chars().all(char::is_alphabetic);
        let lowered = surface.to_lowercase();
        let is_stop = self.stop_words.contains(lowered.as_str());
        let lemma = if is_alpha {
            self.stemmer.stem(&lowered).into_owned()
        } else {
            lowered
        };

        Token {
            text: surface.to_owned(),
            lemma,
            is_alpha,
            is_stop,
        }
    }
}

impl Preprocessor for StemmingPreprocessor {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .flat_map(split_colons)
            .map(|segment| self.annotate(segment))
            .collect()
    }
}

fn split_colons(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split_inclusive(':')
        .flat_map(|part| match part.strip_suffix(':') {
            Some(head) => [head, ":"],
            None => [part, ""],
        })
        .filter(|piece| !piece.is_empty())
}
