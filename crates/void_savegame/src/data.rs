//! Save records

use serde::{Deserialize, Serialize};
use void_items::EquipmentSlot;

/// Current save data version
pub const SAVE_VERSION: u32 = 1;

/// Current Unix time in seconds
pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// One saved stack.
///
/// Grid records carry the anchor cell and no slot name. Equipment records
/// carry the slot's persistent name, quantity 1, and a zero position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItemStack {
    pub item_id: String,
    pub quantity: u32,
    pub grid_x: i32,
    pub grid_y: i32,
    pub slot_name: Option<String>,
}

impl SavedItemStack {
    /// Record for a stack anchored at `(grid_x, grid_y)`
    pub fn in_grid(item_id: impl Into<String>, quantity: u32, grid_x: i32, grid_y: i32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            grid_x,
            grid_y,
            slot_name: None,
        }
    }

    /// Record for an equipped item
    pub fn equipped(item_id: impl Into<String>, slot: EquipmentSlot) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: 1,
            grid_x: 0,
            grid_y: 0,
            slot_name: Some(slot.name().to_string()),
        }
    }

    pub fn is_equipment(&self) -> bool {
        self.slot_name.is_some()
    }
}

/// A complete character save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub character_name: String,
    pub gold: u32,
    pub inventory_items: Vec<SavedItemStack>,
    pub equipped_items: Vec<SavedItemStack>,
    /// Unix timestamp in seconds
    pub last_saved: u64,
    pub play_time_millis: u64,
    pub version: u32,
}

impl SaveData {
    /// Create an empty save stamped with the current time
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            character_name: character_name.into(),
            gold: 0,
            inventory_items: Vec::new(),
            equipped_items: Vec::new(),
            last_saved: unix_now(),
            play_time_millis: 0,
            version: SAVE_VERSION,
        }
    }

    /// Set play time
    pub fn with_play_time(mut self, millis: u64) -> Self {
        self.play_time_millis = millis;
        self
    }

    /// Set save timestamp
    pub fn with_last_saved(mut self, unix_secs: u64) -> Self {
        self.last_saved = unix_secs;
        self
    }

    /// Total record count, grid and equipment
    pub fn record_count(&self) -> usize {
        self.inventory_items.len() + self.equipped_items.len()
    }
}

/// Summary of a save slot, for a load menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlotInfo {
    pub slot: usize,
    pub character_name: String,
    pub gold: u32,
    pub last_saved: u64,
    pub play_time_millis: u64,
}

impl SaveSlotInfo {
    pub(crate) fn from_data(slot: usize, data: &SaveData) -> Self {
        Self {
            slot,
            character_name: data.character_name.clone(),
            gold: data.gold,
            last_saved: data.last_saved,
            play_time_millis: data.play_time_millis,
        }
    }
}

/// Outcome of applying a save to a loadout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Records turned back into stacks or equipped items
    pub restored: usize,
    /// Records dropped: unknown ids, unknown slots, or no room
    pub skipped: usize,
}

impl RestoreReport {
    /// True when every record was restored
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_data() {
        let save = SaveData::new("Ayla").with_play_time(90_000).with_last_saved(1_700_000_000);

        assert_eq!(save.character_name, "Ayla");
        assert_eq!(save.play_time_millis, 90_000);
        assert_eq!(save.last_saved, 1_700_000_000);
        assert_eq!(save.version, SAVE_VERSION);
        assert_eq!(save.record_count(), 0);
    }

    #[test]
    fn test_equipped_record() {
        let record = SavedItemStack::equipped("iron_sword", EquipmentSlot::MainHand);

        assert_eq!(record.quantity, 1);
        assert_eq!(record.slot_name.as_deref(), Some("MAIN_HAND"));
        assert!(record.is_equipment());
        assert!(!SavedItemStack::in_grid("wood", 3, 1, 2).is_equipment());
    }

    #[test]
    fn test_json_shape() {
        let record = SavedItemStack::in_grid("wood", 3, 1, 2);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "item_id": "wood", "quantity": 3, "grid_x": 1, "grid_y": 2, "slot_name": null
            })
        );
    }

    #[test]
    fn test_report() {
        assert!(RestoreReport::default().is_complete());
        assert!(!RestoreReport { restored: 3, skipped: 1 }.is_complete());
    }
}
