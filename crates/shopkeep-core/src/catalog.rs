//! Product catalog.
//!
//! The catalog is loaded once, validated as a whole, and read-only afterwards.
//! Insertion order is display order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    #[serde(alias = "nombre")]
    pub name: String,
    /// Size label such as `M` or `32`
    #[serde(alias = "talla")]
    pub size: String,
    /// Free-form color
    pub color: String,
    /// Non-negative price
    #[serde(alias = "precio")]
    pub price: f64,
}

impl Item {
    /// Create an item. Validation happens when a catalog is built.
    pub fn new(name: &str, size: &str, color: &str, price: f64) -> Self {
        Self {
            name: name.to_owned(),
            size: size.to_owned(),
            color: color.to_owned(),
            price,
        }
    }

    /// Flattened text the fuzzy matcher compares queries against.
    ///
    /// The price always carries a decimal point: `50.0`, never `50`.
    pub fn projection(&self) -> String {
        format!("{} {} {} {:?}", self.name, self.size, self.color, self.price)
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidItem {
            index,
            reason: reason.to_owned(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.size.trim().is_empty() {
            return Err(invalid("size must not be empty"));
        }
        if !self.price.is_finite() {
            return Err(invalid("price must be a finite number"));
        }
        if self.price < 0.0 {
            return Err(invalid("price must be non-negative"));
        }
        Ok(())
    }
}

/// Ordered, immutable list of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, validating every item first.
    ///
    /// # Errors
    /// Returns [`Error::InvalidItem`] for the first item that breaks the schema;
    /// no catalog is produced in that case.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }
        Ok(Self { items })
    }

    /// The catalog materialized on first run.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Item::new("Vestido negro", "M", "negro", 49.99),
                Item::new("Camiseta blanca", "L", "blanco", 19.99),
                Item::new("Jeans azul", "32", "azul", 39.99),
                Item::new("Falda roja", "S", "rojo", 29.99),
            ],
        }
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    /// Returns [`Error::CatalogLoad`] if the text is not an array of complete
    /// records, or [`Error::InvalidItem`] if a record breaks the schema.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json).map_err(|error| Error::CatalogLoad {
            source_name: source_name.to_owned(),
            reason: error.to_string(),
        })?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its contents are not a valid catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|error| Error::CatalogLoad {
            source_name: source_name.clone(),
            reason: error.to_string(),
        })?;
        let catalog = Self::from_json(&source_name, &json)?;
        tracing::info!("Loaded {} catalog items from {source_name}", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog, first writing the seeded catalog to `path` if nothing is there.
    ///
    /// # Errors
    /// Returns an error if the seed cannot be written or the file cannot be loaded.
    pub fn load_or_seed(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "No catalog at {}, writing the default catalog",
                path.display()
            );
            Self::seeded().save(path)?;
        }
        Self::load(path)
    }

    /// Write the catalog as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Every item in catalog order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Items for which `predicate` holds, in catalog order.
    pub fn filter_by_predicate<P>(&self, mut predicate: P) -> Vec<&Item>
    where
        P: FnMut(&Item) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
