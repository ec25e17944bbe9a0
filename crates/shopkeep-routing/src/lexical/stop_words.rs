//! High-frequency function words skipped when building content keywords.
//!
//! Catalog projections are never filtered with these lists, so colors and
//! garment names stay informative even when a list happens to contain them.

use std::collections::HashSet;

use shopkeep_core::Locale;

#[rustfmt::skip]
const ENGLISH: &[&str] = &[
    // articles & determiners
    "the", "a", "an", "this", "that", "these", "those",
    // be-verbs
    "is", "are", "was", "were", "be", "been", "being", "am",
    // auxiliaries & modals
    "have", "has", "had", "do", "does", "did",
    "will", "would", "shall", "should", "may", "might", "can", "could", "must",
    // prepositions
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
    "up", "out", "off", "over", "under", "between", "through", "after", "before",
    // conjunctions & negation
    "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "our", "their", "its",
    // interrogatives
    "who", "what", "which", "when", "where", "how", "why",
    // adverbs & quantifiers
    "very", "also", "just", "too", "more", "most", "some", "any", "all", "each",
    "every", "other", "another", "such", "only", "own", "same", "there", "here", "now",
    "something", "anything", "everything", "nothing",
    // request verbs
    "want", "show", "give", "get", "need", "looking", "find", "see",
];

#[rustfmt::skip]
const SPANISH: &[&str] = &[
    // artículos
    "el", "la", "los", "las", "un", "una", "unos", "unas", "lo",
    // preposiciones
    "a", "de", "del", "al", "en", "por", "para", "con", "sin", "sobre", "entre",
    "hasta", "desde", "durante", "contra", "ante",
    // conjunciones
    "y", "e", "o", "u", "ni", "que", "pero", "porque", "como", "cuando", "si",
    // pronombres
    "yo", "tú", "tu", "él", "ella", "nosotros", "ellos", "ellas", "me", "te", "se",
    "nos", "les", "le", "mi", "mis", "tus", "su", "sus", "ti", "mí",
    // demostrativos
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "esto", "eso",
    // verbos frecuentes
    "es", "son", "estar", "hay", "tiene", "tienes", "tengo", "quiero", "busco",
    "muestra", "muéstrame", "muestrame", "ver",
    // cuantificadores
    "más", "muy", "ya", "no", "sí", "todo", "todos", "algo", "nada", "otro", "otra",
    "otros", "otras", "mucho", "muchos", "poco", "también", "qué", "cual", "donde",
];

/// Stop words for `locale`, lower-case.
pub fn stop_words(locale: Locale) -> HashSet<&'static str> {
    let words = match locale {
        Locale::English => ENGLISH,
        Locale::Spanish => SPANISH,
    };
    words.iter().copied().collect()
}
