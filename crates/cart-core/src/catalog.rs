//! Catalog items and the fixed catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::ItemId;

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Price as a decimal literal. Kept as text and never parsed.
    pub price: String,
}

impl CatalogItem {
    /// Create a catalog item.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// The fixed, ordered list of items on offer.
///
/// Serializes as a bare array of items, the same shape `from_json` reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

/// On-disk TOML layout: an `[[items]]` table array.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

const REFERENCE_ITEMS: [(u64, &str, &str); 20] = [
    (1, "Laptop", "1200"),
    (2, "Smartphone", "750"),
    (3, "Coffee Maker", "50"),
    (4, "Camera", "500"),
    (5, "Headphones", "35"),
    (6, "Tablet", "300"),
    (7, "Desk Chair", "110"),
    (8, "Television", "650"),
    (9, "Gaming Console", "400"),
    (10, "Blender", "80"),
    (11, "Toaster", "25"),
    (12, "Vacuum Cleaner", "150"),
    (13, "Hiking Boots", "120"),
    (14, "Dining Table", "300"),
    (15, "Refrigerator", "800"),
    (16, "Microwave Oven", "100"),
    (17, "Fitness Tracker", "60"),
    (18, "Sofa", "700"),
    (19, "Washing Machine", "450"),
    (20, "Coffee Table", "120"),
];

impl Catalog {
    /// Build a catalog from items, keeping their order.
    ///
    /// Items are taken as given; duplicate ids are not checked.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The built-in 20 item catalog.
    pub fn reference() -> Self {
        let items = REFERENCE_ITEMS
            .iter()
            .map(|&(id, name, price)| CatalogItem::new(id, name, price))
            .collect();
        Self { items }
    }

    /// Load a catalog from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => Err(CartError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a JSON array of items.
    pub fn from_json(content: &str) -> Result<Self, CartError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML document with an `[[items]]` table array.
    pub fn from_toml(content: &str) -> Result<Self, CartError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self { items: file.items })
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
