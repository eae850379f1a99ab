//! Equipment slots

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use void_items::{EquipmentSlot, Item, ItemStats};

/// Equipment errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipError {
    /// Strict mode only: the item's slot affinity does not match
    #[error("{item_id} cannot be equipped in the {slot} slot")]
    InvalidSlotForItem { item_id: String, slot: EquipmentSlot },
}

/// Items worn by one character, at most one per slot.
///
/// By default any item may go in any slot. Strict mode rejects items whose
/// declared slot does not match the target slot.
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, Arc<Item>>,
    strict: bool,
}

impl Equipment {
    /// Create lenient equipment with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Create equipment that validates slot affinity
    pub fn strict() -> Self {
        Self::new().with_strict_slots(true)
    }

    /// Enable or disable slot affinity validation
    pub fn with_strict_slots(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Put `item` in `slot`, returning whatever was there before.
    ///
    /// `None` empties the slot, same as [`unequip`](Self::unequip). In strict
    /// mode a mismatched item is rejected and the slot is left as it was.
    pub fn equip(
        &mut self,
        slot: EquipmentSlot,
        item: Option<Arc<Item>>,
    ) -> Result<Option<Arc<Item>>, EquipError> {
        let Some(item) = item else {
            return Ok(self.unequip(slot));
        };

        if self.strict && !item.equipment_slot().is_some_and(|affinity| slot.accepts(affinity)) {
            log::warn!("Rejected {} for slot {}", item.id(), slot.name());
            return Err(EquipError::InvalidSlotForItem {
                item_id: item.id().to_string(),
                slot,
            });
        }

        log::debug!("Equipped {} in {}", item.id(), slot.name());
        Ok(self.slots.insert(slot, item))
    }

    /// Empty a slot, returning its item
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Arc<Item>> {
        let item = self.slots.remove(&slot);
        if let Some(item) = &item {
            log::debug!("Unequipped {} from {}", item.id(), slot.name());
        }
        item
    }

    /// Get equipped item in slot
    pub fn get_equipped(&self, slot: EquipmentSlot) -> Option<&Arc<Item>> {
        self.slots.get(&slot)
    }

    /// Check if slot is occupied
    pub fn is_equipped(&self, slot: EquipmentSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Snapshot of every occupied slot. Changing the returned map does not
    /// affect the equipment.
    pub fn all_equipped(&self) -> BTreeMap<EquipmentSlot, Arc<Item>> {
        self.slots.clone()
    }

    /// Occupied slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Arc<Item>)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn equipped_count(&self) -> usize {
        self.slots.len()
    }

    /// Combined stats of everything worn.
    ///
    /// Numeric bonuses are summed. Attack speed is the mean over items with
    /// a positive attack speed (weapons), or 0 when none are worn. On-hit
    /// effects are collected in slot order.
    pub fn total_stats(&self) -> ItemStats {
        let mut total = ItemStats::none();
        let mut speed_sum = 0.0f32;
        let mut speed_count = 0u32;

        for item in self.slots.values() {
            let stats = item.stats();
            total.damage = total.damage.saturating_add(stats.damage);
            total.armor = total.armor.saturating_add(stats.armor);
            total.durability = total.durability.saturating_add(stats.durability);
            total.strength = total.strength.saturating_add(stats.strength);
            total.dexterity = total.dexterity.saturating_add(stats.dexterity);
            total.vitality = total.vitality.saturating_add(stats.vitality);
            total.magic = total.magic.saturating_add(stats.magic);
            if stats.attack_speed > 0.0 {
                speed_sum += stats.attack_speed;
                speed_count += 1;
            }
            total.effects.extend(stats.effects.iter().copied());
        }

        if speed_count > 0 {
            total.attack_speed = speed_sum / speed_count as f32;
        }
        total
    }

    /// Sum of equipped item weights
    pub fn total_weight(&self) -> f32 {
        self.slots.values().map(|item| item.weight()).sum()
    }

    /// Empty every slot
    pub fn clear_all(&mut self) {
        self.slots.clear();
    }
}
