//! Configuration types for the catalog source, matching policy, and vocabularies.

use crate::error::{Error, Result};
use crate::locale::{Locale, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Similarity ratio an item projection must reach to count as a fuzzy match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Sizes recognized in queries, in the order the size rule scans them.
pub const DEFAULT_SIZES: [&str; 10] = ["S", "M", "L", "XL", "U", "32", "34", "26", "27", "28"];

/// Complete assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Language for keywords, stemming, and messages
    pub locale: Locale,
    /// Path of the JSON catalog file
    pub catalog_path: PathBuf,
    /// Fuzzy matching policy
    pub matching: MatchingConfig,
    /// Vocabulary overrides
    pub vocabulary: VocabularyConfig,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            catalog_path: PathBuf::from("catalog.json"),
            matching: MatchingConfig::default(),
            vocabulary: VocabularyConfig::default(),
        }
    }
}

/// String similarity measure used by the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Ratcliff/Obershelp ratio: twice the matched characters over the total length
    #[default]
    Gestalt,
    /// Normalized Levenshtein similarity
    Levenshtein,
    /// Jaro-Winkler similarity
    JaroWinkler,
}

/// Fuzzy matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity ratio (0.0-1.0) for a fuzzy match
    pub similarity_threshold: f64,
    /// Which similarity measure to use
    pub metric: SimilarityMetric,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            metric: SimilarityMetric::default(),
        }
    }
}

/// Vocabulary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Recognized size tokens, scanned in order
    pub sizes: Vec<String>,
    /// Replaces the locale's courtesy words when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courtesy_words: Option<Vec<String>>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.iter().map(|size| (*size).to_owned()).collect(),
            courtesy_words: None,
        }
    }
}

impl ShopConfig {
    /// Get the default config directory path (`~/.shopkeep`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".shopkeep"))
    }

    /// Get the default config file path (`~/.shopkeep/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location (`~/.shopkeep/config.toml`)
    /// If the config doesn't exist, creates it with default values
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, validated, or created
    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_at(&Self::config_path()?)
    }

    /// Load config from `path`, writing the defaults there first if it is missing.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, validated, or created
    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            let config = Self::default();
            config.save_to_file(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|error| Error::Config(format!("Failed to read config: {error}")))?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        tracing::debug!(
            "Loaded config from {:?}: locale={}, metric={:?}, threshold={}",
            path,
            config.locale,
            config.matching.metric,
            config.matching.similarity_threshold
        );

        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| {
                Error::Config(format!("Failed to create config directory: {error}"))
            })?;
        }

        let contents = toml::to_string_pretty(self)?;

        let header = "# Shopkeep Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))
            .map_err(|error| Error::Config(format!("Failed to write config: {error}")))?;

        Ok(())
    }

    /// Check the values a hand-edited file could get wrong.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        let threshold = self.matching.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::Config(format!(
                "similarity_threshold must be within 0.0..=1.0, got {threshold}"
            )));
        }
        if self.vocabulary.sizes.iter().all(|size| size.trim().is_empty()) {
            return Err(Error::Config("size vocabulary is empty".to_owned()));
        }
        let empty_override = self
            .vocabulary
            .courtesy_words
            .as_ref()
            .is_some_and(|words| words.iter().all(|word| word.trim().is_empty()));
        if empty_override {
            return Err(Error::Config("courtesy_words override is empty".to_owned()));
        }
        Ok(())
    }

    /// Locale vocabulary with the configured overrides applied.
    pub fn resolved_vocabulary(&self) -> Vocabulary {
        let mut vocabulary = self.locale.vocabulary();
        if let Some(words) = &self.vocabulary.courtesy_words {
            vocabulary.courtesy_words = words
                .iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect();
        }
        vocabulary
    }

    /// Configured sizes, upper-cased, in scan order.
    pub fn size_vocabulary(&self) -> Vec<String> {
        self.vocabulary
            .sizes
            .iter()
            .map(|size| size.trim().to_uppercase())
            .filter(|size| !size.is_empty())
            .collect()
    }
}
