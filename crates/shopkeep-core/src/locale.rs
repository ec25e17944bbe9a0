use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Language the assistant understands and answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English keywords and messages
    #[default]
    English,
    /// Spanish keywords and messages
    Spanish,
}

/// Words that steer the intent cascade for one locale.
///
/// Every entry is lower-case. Catalog words are also accent-free because the
/// router folds accents before looking for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Courtesy words and phrases that trigger the acknowledgment
    pub courtesy_words: Vec<String>,
    /// Words that ask for the full catalog
    pub catalog_words: Vec<String>,
    /// Words that mark a budget query
    pub budget_words: Vec<String>,
    /// Words that mark a size query
    pub size_words: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

impl Locale {
    /// Intent keywords for this locale.
    pub fn vocabulary(self) -> Vocabulary {
        match self {
            Self::English => Vocabulary {
                courtesy_words: owned(&["thanks", "please", "kind", "great", "excellent"]),
                catalog_words: owned(&["catalog"]),
                budget_words: owned(&["price", "budget"]),
                size_words: owned(&["size"]),
            },
            Self::Spanish => Vocabulary {
                courtesy_words: owned(&["gracias", "por favor", "amable", "genial", "excelente"]),
                catalog_words: owned(&["catalogo"]),
                budget_words: owned(&["precio", "presupuesto"]),
                size_words: owned(&["talla"]),
            },
        }
    }

    /// Stable lower-case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "spanish" | "es" | "espanol" | "español" => Ok(Self::Spanish),
            other => Err(Error::Config(format!("unknown locale: {other}"))),
        }
    }
}
