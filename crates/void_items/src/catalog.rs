//! Read-only item catalog
//!
//! The catalog owns every [`Item`] definition for the lifetime of a session.
//! It is built once by the application and handed to whatever needs to turn
//! saved item ids back into definitions.

use crate::item::Item;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed catalog data
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two definitions share an id
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

/// Anything that can resolve an item id to its definition
pub trait ItemLookup {
    /// Look up an item by id
    fn lookup(&self, id: &str) -> Option<Arc<Item>>;
}

/// Item catalog
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Arc<Item>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a JSON array of item definitions
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for item in items {
            catalog.register(item)?;
        }
        log::debug!("Loaded item catalog with {} definitions", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Register a definition and return the shared handle to it
    pub fn register(&mut self, item: Item) -> Result<Arc<Item>, CatalogError> {
        if self.items.contains_key(item.id()) {
            return Err(CatalogError::DuplicateId(item.id().to_string()));
        }
        let item = Arc::new(item);
        self.items.insert(item.id().to_string(), Arc::clone(&item));
        Ok(item)
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_item(mut self, item: Item) -> Result<Self, CatalogError> {
        self.register(item)?;
        Ok(self)
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> Option<&Arc<Item>> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all definitions (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.values()
    }
}

impl ItemLookup for ItemCatalog {
    fn lookup(&self, id: &str) -> Option<Arc<Item>> {
        self.items.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EquipmentSlot, ItemCategory};

    const CATALOG: &str = r#"[
        { "id": "iron_sword", "name": "Iron Sword", "category": "WEAPON", "height": 2,
          "value": 100, "weight": 3.5, "equipment_slot": "MAIN_HAND",
          "stats": { "damage": 15, "durability": 100, "attack_speed": 1.2 } },
        { "id": "health_potion", "name": "Health Potion", "category": "CONSUMABLE",
          "max_stack_size": 10, "value": 25 }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = ItemCatalog::from_json_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let sword = catalog.lookup("iron_sword").unwrap();
        assert_eq!(sword.category(), ItemCategory::Weapon);
        assert_eq!(sword.height(), 2);
        assert_eq!(sword.equipment_slot(), Some(EquipmentSlot::MainHand));
        assert_eq!(sword.stats().damage, 15);
        assert!(catalog.lookup("bread").is_none());
    }

    #[test]
    fn test_lookup_shares_definition() {
        let mut catalog = ItemCatalog::new();
        let registered = catalog.register(Item::new("wood", "Wood")).unwrap();

        let looked_up = catalog.lookup("wood").unwrap();
        assert!(Arc::ptr_eq(&registered, &looked_up));
    }

    #[test]
    fn test_duplicate_id() {
        let result = ItemCatalog::new()
            .with_item(Item::new("wood", "Wood"))
            .and_then(|c| c.with_item(Item::new("wood", "Other Wood")));

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "wood"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ItemCatalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
