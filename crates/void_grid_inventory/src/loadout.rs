//! Per-player inventory and equipment

use crate::config::InventoryConfig;
use crate::equipment::Equipment;
use crate::inventory::Inventory;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Everything a player carries: the grid and the worn items
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl Loadout {
    pub fn new(inventory: Inventory, equipment: Equipment) -> Self {
        Self {
            inventory,
            equipment,
        }
    }

    /// Build an empty loadout from configuration
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self {
            inventory: Inventory::new(config.grid_width, config.grid_height),
            equipment: Equipment::new().with_strict_slots(config.strict_equipment),
        }
    }

    /// Empty the grid, gold, and every equipment slot
    pub fn clear(&mut self) {
        self.inventory.clear();
        self.equipment.clear_all();
    }
}

/// Loadout shared between threads.
///
/// Every operation locks the inventory and equipment together, so grid scans
/// never interleave with another thread's mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedLoadout {
    inner: Arc<Mutex<Loadout>>,
}

impl SharedLoadout {
    pub fn new(loadout: Loadout) -> Self {
        Self {
            inner: Arc::new(Mutex::new(loadout)),
        }
    }

    /// Lock for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, Loadout> {
        self.inner.lock()
    }

    /// Run `f` with the loadout locked
    pub fn with<R>(&self, f: impl FnOnce(&mut Loadout) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Loadout> for SharedLoadout {
    fn from(loadout: Loadout) -> Self {
        Self::new(loadout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use void_items::{EquipmentSlot, Item, ItemStats};

    #[test]
    fn test_from_config() {
        let config = InventoryConfig::new(4, 3).with_strict_equipment(true);

        let loadout = Loadout::from_config(&config);

        assert_eq!(loadout.inventory.grid_width(), 4);
        assert_eq!(loadout.inventory.grid_height(), 3);
        assert!(loadout.equipment.is_strict());
    }

    #[test]
    fn test_clear() {
        let mut loadout = Loadout::default();
        let sword = Arc::new(
            Item::new("sword", "Sword")
                .with_stats(ItemStats::weapon_default_speed(10, 100))
                .with_equipment_slot(EquipmentSlot::MainHand),
        );
        loadout.inventory.add_item(&sword, 1);
        loadout.inventory.add_gold(50);
        loadout
            .equipment
            .equip(EquipmentSlot::MainHand, Some(sword))
            .unwrap();

        loadout.clear();

        assert!(loadout.inventory.is_empty());
        assert_eq!(loadout.inventory.gold(), 0);
        assert_eq!(loadout.equipment.equipped_count(), 0);
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = SharedLoadout::new(Loadout::from_config(&InventoryConfig::new(10, 10)));
        let potion = Arc::new(Item::new("potion", "Potion").with_max_stack(5));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let potion = Arc::clone(&potion);
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.with(|loadout| loadout.inventory.add_item(&potion, 1));
                        shared.with(|loadout| loadout.inventory.add_gold(1));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let loadout = shared.lock();
        assert_eq!(loadout.inventory.count_item("potion"), 100);
        assert_eq!(loadout.inventory.stack_count(), 20);
        assert_eq!(loadout.inventory.gold(), 100);
    }
}
