//! Conversion between live loadouts and save records
//!
//! Only item ids, quantities, and positions are written. Loading resolves
//! ids through an [`ItemLookup`], so definitions always come from the
//! running game's catalog.

use crate::data::{RestoreReport, SaveData, SavedItemStack};
use void_grid_inventory::{Equipment, Inventory, Loadout};
use void_items::{EquipmentSlot, ItemLookup, ItemStack};

/// One record per placed stack, at its anchor cell.
///
/// The grid is walked column by column, so records come out in the same
/// order the stacking pass of `add_item` visits them.
pub fn serialize_inventory(inventory: &Inventory) -> Vec<SavedItemStack> {
    let mut records = Vec::with_capacity(inventory.stack_count());

    for x in 0..inventory.grid_width() as i32 {
        for y in 0..inventory.grid_height() as i32 {
            let Some(handle) = inventory.handle_at(x, y) else {
                continue;
            };
            if inventory.anchor_of(handle) != Some((x as u32, y as u32)) {
                continue;
            }
            if let Some(stack) = inventory.stack(handle) {
                records.push(SavedItemStack::in_grid(stack.item_id(), stack.quantity(), x, y));
            }
        }
    }

    records
}

/// One record per occupied slot, in slot order
pub fn serialize_equipment(equipment: &Equipment) -> Vec<SavedItemStack> {
    equipment
        .iter()
        .map(|(slot, item)| SavedItemStack::equipped(item.id(), slot))
        .collect()
}

/// Place saved stacks back at their anchors.
///
/// Records with unknown ids, empty quantities, or no room are skipped. The
/// inventory is not cleared first.
pub fn restore_inventory(
    records: &[SavedItemStack],
    inventory: &mut Inventory,
    catalog: &dyn ItemLookup,
) -> RestoreReport {
    let mut report = RestoreReport::default();

    for record in records {
        let Some(item) = catalog.lookup(&record.item_id) else {
            log::warn!("Skipping unknown item {}", record.item_id);
            report.skipped += 1;
            continue;
        };

        let stack = ItemStack::new(item, record.quantity);
        if stack.is_empty() {
            log::warn!("Skipping empty stack of {}", record.item_id);
            report.skipped += 1;
            continue;
        }

        match inventory.place_item(stack, record.grid_x, record.grid_y) {
            Ok(_) => report.restored += 1,
            Err(e) => {
                log::warn!("Skipping saved stack: {}", e);
                report.skipped += 1;
            }
        }
    }

    report
}

/// Replace the worn items with the saved ones.
///
/// Slot affinity is not checked while loading; the equipment keeps its
/// strict flag for later calls.
pub fn restore_equipment(
    records: &[SavedItemStack],
    equipment: &mut Equipment,
    catalog: &dyn ItemLookup,
) -> RestoreReport {
    let mut report = RestoreReport::default();
    let mut restored = Equipment::new();

    for record in records {
        let Some(item) = catalog.lookup(&record.item_id) else {
            log::warn!("Skipping unknown item {}", record.item_id);
            report.skipped += 1;
            continue;
        };
        let Some(slot_name) = record.slot_name.as_deref() else {
            log::warn!("Skipping equipment record for {} without a slot", record.item_id);
            report.skipped += 1;
            continue;
        };
        let slot = match slot_name.parse::<EquipmentSlot>() {
            Ok(slot) => slot,
            Err(e) => {
                log::warn!("Skipping {}: {}", record.item_id, e);
                report.skipped += 1;
                continue;
            }
        };

        match restored.equip(slot, Some(item)) {
            Ok(_) => report.restored += 1,
            Err(e) => {
                log::warn!("Skipping {}: {}", record.item_id, e);
                report.skipped += 1;
            }
        }
    }

    *equipment = restored.with_strict_slots(equipment.is_strict());
    report
}

/// Snapshot a loadout
pub fn save_loadout(character_name: impl Into<String>, loadout: &Loadout) -> SaveData {
    let mut data = SaveData::new(character_name);
    data.gold = loadout.inventory.gold();
    data.inventory_items = serialize_inventory(&loadout.inventory);
    data.equipped_items = serialize_equipment(&loadout.equipment);
    log::debug!(
        "Captured {} with {} gold and {} records",
        data.character_name,
        data.gold,
        data.record_count()
    );
    data
}

/// Restore a loadout from a save.
///
/// The inventory is cleared (which also zeroes gold), the saved stacks are
/// placed, and only then is the saved gold added. Equipment is replaced
/// last.
pub fn apply_to_loadout(
    data: &SaveData,
    loadout: &mut Loadout,
    catalog: &dyn ItemLookup,
) -> RestoreReport {
    loadout.inventory.clear();
    let items = restore_inventory(&data.inventory_items, &mut loadout.inventory, catalog);

    loadout.inventory.add_gold(i64::from(data.gold));
    log::info!(
        "Restored gold for {}: {}",
        data.character_name,
        loadout.inventory.gold()
    );

    let worn = restore_equipment(&data.equipped_items, &mut loadout.equipment, catalog);

    RestoreReport {
        restored: items.restored + worn.restored,
        skipped: items.skipped + worn.skipped,
    }
}
