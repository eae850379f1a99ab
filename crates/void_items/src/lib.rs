//! Void Items - Item Definitions and Stacks
//!
//! Data model shared by the grid inventory and the save system.
//!
//! # Features
//!
//! - Immutable item definitions with size, stack limit, stats and slot affinity
//! - Combat stat bundles with on-hit effects
//! - Clamped item stacks with merge and split
//! - Read-only item catalog, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use void_items::prelude::*;
//!
//! let mut catalog = ItemCatalog::new();
//! let sword = catalog.register(
//!     Item::new("iron_sword", "Iron Sword")
//!         .with_category(ItemCategory::Weapon)
//!         .with_size(1, 2)
//!         .with_stats(ItemStats::weapon(15, 100, 1.2))
//!         .with_equipment_slot(EquipmentSlot::MainHand),
//! )?;
//!
//! let stack = ItemStack::single(sword);
//! ```

pub mod catalog;
pub mod item;
pub mod slot;
pub mod stack;
pub mod stats;

pub mod prelude {
    pub use crate::catalog::{CatalogError, ItemCatalog, ItemLookup};
    pub use crate::item::{Item, ItemCategory, ItemRarity};
    pub use crate::slot::{EquipmentSlot, UnknownSlot};
    pub use crate::stack::ItemStack;
    pub use crate::stats::{ItemStats, WeaponEffect};
}

pub use prelude::*;
