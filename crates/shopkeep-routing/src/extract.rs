//! Budget and size extraction from raw query text.

use std::collections::BTreeSet;

use crate::lexical::Preprocessor;

/// First whitespace-separated word that reads as an amount, left to right.
///
/// `$` and `,` are stripped before the check, and a single decimal point is allowed.
pub fn extract_budget(text: &str) -> Option<f64> {
    text.split_whitespace().find_map(parse_amount)
}

fn parse_amount(word: &str) -> Option<f64> {
    let cleaned: String = word
        .chars()
        .filter(|ch| !matches!(ch, '$' | ','))
        .collect();
    let without_point = cleaned.replacen('.', "", 1);
    if without_point.is_empty() || !without_point.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

/// Every size from `vocabulary` that appears as a token of the upper-cased text.
pub fn extract_sizes<P>(preprocessor: &P, text: &str, vocabulary: &[String]) -> BTreeSet<String>
where
    P: Preprocessor + ?Sized,
{
    preprocessor
        .surface_forms(&text.to_uppercase())
        .into_iter()
        .filter(|surface| vocabulary.contains(surface))
        .collect()
}

/// First size of `vocabulary`, in vocabulary order, that appears in the text.
///
/// Sizes are compared against whole tokens so that the `S` in `SIZE` or the
/// `L` in `XL` do not count.
pub fn detect_size<P>(preprocessor: &P, text: &str, vocabulary: &[String]) -> Option<String>
where
    P: Preprocessor + ?Sized,
{
    let surfaces = preprocessor.surface_forms(&text.to_uppercase());
    vocabulary
        .iter()
        .find(|size| surfaces.contains(size))
        .cloned()
}
