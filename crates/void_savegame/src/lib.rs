//! Void Savegame - Character Saves
//!
//! Flattens a [`Loadout`](void_grid_inventory::Loadout) into id/quantity/position
//! records and keeps them in numbered slots on disk.
//!
//! # Example
//!
//! ```ignore
//! use void_savegame::prelude::*;
//!
//! let manager = SaveManager::new("saves").with_format(SaveFormat::Json);
//! let slot = manager.find_slot_for_character("Ayla");
//! manager.save(slot, &save_loadout("Ayla", &loadout))?;
//!
//! let data = manager.load(slot)?;
//! let report = apply_to_loadout(&data, &mut loadout, &catalog);
//! ```

pub mod adapter;
pub mod data;
pub mod manager;

pub mod prelude {
    pub use crate::adapter::{
        apply_to_loadout, restore_equipment, restore_inventory, save_loadout,
        serialize_equipment, serialize_inventory,
    };
    pub use crate::data::{RestoreReport, SaveData, SaveSlotInfo, SavedItemStack, SAVE_VERSION};
    pub use crate::manager::{SaveError, SaveFormat, SaveManager};
}

pub use prelude::*;
