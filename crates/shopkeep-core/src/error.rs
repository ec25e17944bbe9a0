use core::result::Result as CoreResult;
use std::io::Error as IoError;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use toml::de::Error as TomlDeError;
use toml::ser::Error as TomlSerError;

/// Result type for core operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] TomlDeError),

    /// TOML serialization failed.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] TomlSerError),

    /// The catalog source could not be read or parsed.
    #[error("Failed to load catalog from {source_name}: {reason}")]
    CatalogLoad {
        /// Where the catalog was read from
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// A catalog entry failed validation.
    #[error("Invalid catalog entry #{index}: {reason}")]
    InvalidItem {
        /// Zero-based position of the entry in the source
        index: usize,
        /// Which rule the entry broke
        reason: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means the catalog is unusable.
    ///
    /// Catalog errors are fatal at startup; there is no partial catalog to fall back to.
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Self::CatalogLoad { .. } | Self::InvalidItem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, from_str};
    use std::io;

    #[test]
    fn test_error_display() {
        let error1 = Error::Config("similarity threshold out of range".to_owned());
        assert_eq!(
            error1.to_string(),
            "Configuration error: similarity threshold out of range"
        );

        let error2 = Error::InvalidItem {
            index: 2,
            reason: "price must be non-negative".to_owned(),
        };
        assert_eq!(
            error2.to_string(),
            "Invalid catalog entry #2: price must be non-negative"
        );

        let error3 = Error::CatalogLoad {
            source_name: "catalog.json".to_owned(),
            reason: "missing field `price`".to_owned(),
        };
        assert_eq!(
            error3.to_string(),
            "Failed to load catalog from catalog.json: missing field `price`"
        );
    }

    #[test]
    fn test_is_catalog_error() {
        let catalog = Error::CatalogLoad {
            source_name: "memory".to_owned(),
            reason: "bad".to_owned(),
        };
        assert!(catalog.is_catalog_error());

        let item = Error::InvalidItem {
            index: 0,
            reason: "empty name".to_owned(),
        };
        assert!(item.is_catalog_error());

        assert!(!Error::Config("bad".to_owned()).is_catalog_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = from_str::<JsonValue>("invalid json").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
