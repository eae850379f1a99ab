//! Save slots on disk

use crate::data::{SaveData, SaveSlotInfo};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Save system errors
#[derive(Debug, Error)]
pub enum SaveError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    /// Save written by a newer version
    #[error("Version mismatch: save version {0}, current version {1}")]
    VersionMismatch(u32, u32),
    /// Slot index outside the configured range
    #[error("Invalid save slot {slot} (have {max_slots})")]
    InvalidSlot { slot: usize, max_slots: usize },
    /// Nothing saved in slot
    #[error("Save slot {0} is empty")]
    SlotNotFound(usize),
}

/// Save file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    /// JSON (human readable)
    Json,
    /// Binary (compact)
    #[default]
    Binary,
}

impl SaveFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "dat",
        }
    }
}

/// Fixed set of numbered character save slots in one directory
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_dir: PathBuf,
    format: SaveFormat,
    version: u32,
    max_slots: usize,
}

impl SaveManager {
    /// Create a manager with binary saves, three slots, and version 1
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            format: SaveFormat::Binary,
            version: crate::data::SAVE_VERSION,
            max_slots: 3,
        }
    }

    /// Set save format
    pub fn with_format(mut self, format: SaveFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the number of slots (at least one)
    pub fn with_max_slots(mut self, max: usize) -> Self {
        self.max_slots = max.max(1);
        self
    }

    /// Set version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn format(&self) -> SaveFormat {
        self.format
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    fn check_slot(&self, slot: usize) -> Result<(), SaveError> {
        if slot >= self.max_slots {
            return Err(SaveError::InvalidSlot {
                slot,
                max_slots: self.max_slots,
            });
        }
        Ok(())
    }

    fn slot_path(&self, slot: usize) -> PathBuf {
        self.save_dir
            .join(format!("save_{}.{}", slot, self.format.extension()))
    }

    /// Write `data` to a slot, stamped with this manager's version
    pub fn save(&self, slot: usize, data: &SaveData) -> Result<(), SaveError> {
        self.check_slot(slot)?;
        fs::create_dir_all(&self.save_dir)?;

        let data = SaveData {
            version: self.version,
            ..data.clone()
        };
        let bytes = match self.format {
            SaveFormat::Json => serde_json::to_vec_pretty(&data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
            SaveFormat::Binary => bincode::serialize(&data)
                .map_err(|e| SaveError::Serialization(e.to_string()))?,
        };

        let path = self.slot_path(slot);
        if let Err(e) = fs::write(&path, bytes) {
            log::error!("Failed to write {}: {}", path.display(), e);
            return Err(e.into());
        }

        log::info!("Saved {} to slot {}", data.character_name, slot);
        Ok(())
    }

    /// Read a slot
    pub fn load(&self, slot: usize) -> Result<SaveData, SaveError> {
        self.check_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotNotFound(slot));
        }

        let bytes = fs::read(&path)?;
        let data: SaveData = match self.format {
            SaveFormat::Json => serde_json::from_slice(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
            SaveFormat::Binary => bincode::deserialize(&bytes)
                .map_err(|e| SaveError::Deserialization(e.to_string()))?,
        };

        if data.version > self.version {
            return Err(SaveError::VersionMismatch(data.version, self.version));
        }

        log::info!("Loaded {} from slot {}", data.character_name, slot);
        Ok(data)
    }

    /// Check if a slot holds a save. Out-of-range slots never do.
    pub fn exists(&self, slot: usize) -> bool {
        slot < self.max_slots && self.slot_path(slot).exists()
    }

    /// Delete a save. Returns whether a file was removed.
    pub fn delete(&self, slot: usize) -> Result<bool, SaveError> {
        self.check_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        log::info!("Deleted save in slot {}", slot);
        Ok(true)
    }

    /// Summary of a slot, or `None` when it is empty or unreadable
    pub fn slot_info(&self, slot: usize) -> Option<SaveSlotInfo> {
        if !self.exists(slot) {
            return None;
        }
        match self.load(slot) {
            Ok(data) => Some(SaveSlotInfo::from_data(slot, &data)),
            Err(e) => {
                log::error!("Failed to read slot {}: {}", slot, e);
                None
            }
        }
    }

    /// Summaries of every slot, in slot order
    pub fn list_slots(&self) -> Vec<Option<SaveSlotInfo>> {
        (0..self.max_slots).map(|slot| self.slot_info(slot)).collect()
    }

    /// Pick the slot to save a character into.
    ///
    /// The slot already holding that character wins, then the first empty
    /// slot, then the slot with the oldest save.
    pub fn find_slot_for_character(&self, character_name: &str) -> usize {
        let mut first_empty = None;
        let mut oldest: Option<(usize, u64)> = None;

        for slot in 0..self.max_slots {
            match self.slot_info(slot) {
                None => {
                    first_empty.get_or_insert(slot);
                }
                Some(info) if info.character_name == character_name => {
                    log::debug!("Found existing save for {} in slot {}", character_name, slot);
                    return slot;
                }
                Some(info) => {
                    if oldest.map_or(true, |(_, saved)| info.last_saved < saved) {
                        oldest = Some((slot, info.last_saved));
                    }
                }
            }
        }

        if let Some(slot) = first_empty {
            log::debug!("Using empty slot {} for {}", slot, character_name);
            return slot;
        }

        let slot = oldest.map_or(0, |(slot, _)| slot);
        log::info!("All slots full, overwriting oldest save in slot {}", slot);
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn fresh_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_save_load_delete() {
        let dir = fresh_dir("void_savegame_manager_basic");
        let manager = SaveManager::new(&dir).with_format(SaveFormat::Json);

        let mut save = SaveData::new("Ayla");
        save.gold = 120;
        manager.save(1, &save).unwrap();
        assert!(manager.exists(1));
        assert!(dir.join("save_1.json").exists());

        let loaded = manager.load(1).unwrap();
        assert_eq!(loaded, save);

        assert!(manager.delete(1).unwrap());
        assert!(!manager.exists(1));
        assert!(!manager.delete(1).unwrap());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_binary_file_name() {
        let dir = fresh_dir("void_savegame_manager_binary");
        let manager = SaveManager::new(&dir);

        manager.save(0, &SaveData::new("Bram")).unwrap();

        assert!(dir.join("save_0.dat").exists());
        assert_eq!(manager.load(0).unwrap().character_name, "Bram");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_slot() {
        let dir = fresh_dir("void_savegame_manager_invalid");
        let manager = SaveManager::new(&dir);

        assert!(matches!(
            manager.save(3, &SaveData::new("Ayla")),
            Err(SaveError::InvalidSlot { slot: 3, max_slots: 3 })
        ));
        assert!(matches!(manager.load(7), Err(SaveError::InvalidSlot { .. })));
        assert!(!manager.exists(3));
        assert!(manager.slot_info(3).is_none());
    }

    #[test]
    fn test_missing_slot() {
        let dir = fresh_dir("void_savegame_manager_missing");
        let manager = SaveManager::new(&dir);

        assert!(matches!(manager.load(2), Err(SaveError::SlotNotFound(2))));
        assert!(manager.slot_info(2).is_none());
    }

    #[test]
    fn test_version_mismatch() {
        let dir = fresh_dir("void_savegame_manager_version");
        let newer = SaveManager::new(&dir).with_version(2);
        newer.save(0, &SaveData::new("Ayla")).unwrap();

        let older = SaveManager::new(&dir);
        assert!(matches!(older.load(0), Err(SaveError::VersionMismatch(2, 1))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupted_slot_reads_as_empty() {
        let dir = fresh_dir("void_savegame_manager_corrupt");
        let manager = SaveManager::new(&dir).with_format(SaveFormat::Json);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("save_0.json"), b"{ not a save").unwrap();

        assert!(matches!(manager.load(0), Err(SaveError::Deserialization(_))));
        assert!(manager.slot_info(0).is_none());
        assert_eq!(manager.find_slot_for_character("Ayla"), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_find_slot_for_character() {
        let dir = fresh_dir("void_savegame_manager_find");
        let manager = SaveManager::new(&dir).with_format(SaveFormat::Json);

        assert_eq!(manager.find_slot_for_character("Ayla"), 0);

        manager.save(0, &SaveData::new("Ayla").with_last_saved(300)).unwrap();
        manager.save(2, &SaveData::new("Bram").with_last_saved(100)).unwrap();
        assert_eq!(manager.find_slot_for_character("Bram"), 2);
        assert_eq!(manager.find_slot_for_character("Cora"), 1);

        manager.save(1, &SaveData::new("Cora").with_last_saved(200)).unwrap();
        assert_eq!(manager.find_slot_for_character("Dain"), 2);
        assert_eq!(manager.find_slot_for_character("Ayla"), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_slots() {
        let dir = fresh_dir("void_savegame_manager_list");
        let manager = SaveManager::new(&dir).with_max_slots(2);
        let mut save = SaveData::new("Ayla").with_play_time(5_000);
        save.gold = 7;
        manager.save(1, &save).unwrap();

        let slots = manager.list_slots();

        assert_eq!(slots.len(), 2);
        assert!(slots[0].is_none());
        let info = slots[1].as_ref().unwrap();
        assert_eq!(info.slot, 1);
        assert_eq!(info.character_name, "Ayla");
        assert_eq!(info.gold, 7);
        assert_eq!(info.play_time_millis, 5_000);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_max_slots_at_least_one() {
        assert_eq!(SaveManager::new(temp_dir()).with_max_slots(0).max_slots(), 1);
    }
}
