//! Void Grid Inventory - Grid Inventory and Equipment
//!
//! Player-side containers for [`void_items`] stacks.
//!
//! # Features
//!
//! - Fixed-size cell grid with multi-cell items
//! - Deterministic auto-stacking and free-space search
//! - Gold counter that never goes negative
//! - Eleven equipment slots with combined stat bonuses
//! - Optional slot-affinity validation
//! - Mutex-guarded loadout for multi-threaded hosts
//!
//! # Example
//!
//! ```ignore
//! use void_grid_inventory::prelude::*;
//!
//! let mut loadout = Loadout::from_config(&InventoryConfig::default());
//! let overflow = loadout.inventory.add_item(&potion, 15);
//! loadout.equipment.equip(EquipmentSlot::MainHand, Some(sword))?;
//! let bonus = loadout.equipment.total_stats();
//! ```

mod arena;
pub mod config;
pub mod equipment;
pub mod inventory;
pub mod loadout;

pub mod prelude {
    pub use crate::arena::StackHandle;
    pub use crate::config::{ConfigError, InventoryConfig};
    pub use crate::equipment::{EquipError, Equipment};
    pub use crate::inventory::{Inventory, PlaceError, PlaceErrorKind};
    pub use crate::loadout::{Loadout, SharedLoadout};
    pub use void_items::prelude::*;
}

pub use prelude::*;
