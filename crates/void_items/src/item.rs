//! Item definitions

use crate::slot::EquipmentSlot;
use crate::stats::ItemStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Swords, axes, bows
    Weapon,
    /// Helmets, chest pieces, boots
    Armor,
    /// Potions, food
    Consumable,
    /// Ore, wood, cloth
    Material,
    /// Pickaxes, fishing rods
    Tool,
    /// Quest items
    Quest,
    /// Everything else
    #[default]
    Misc,
}

impl ItemCategory {
    /// Upper-case label used in item descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "WEAPON",
            Self::Armor => "ARMOR",
            Self::Consumable => "CONSUMABLE",
            Self::Material => "MATERIAL",
            Self::Tool => "TOOL",
            Self::Quest => "QUEST",
            Self::Misc => "MISC",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item rarity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl ItemRarity {
    /// Get color associated with rarity (RGB)
    pub fn color(&self) -> [f32; 3] {
        match self {
            Self::Common => [1.0, 1.0, 1.0],    // White
            Self::Uncommon => [0.0, 1.0, 0.0],  // Green
            Self::Rare => [0.0, 0.0, 1.0],      // Blue
            Self::Epic => [0.5, 0.0, 1.0],      // Purple
            Self::Legendary => [1.0, 0.5, 0.0], // Orange
        }
    }
}

/// Immutable definition of a kind of item.
///
/// Definitions are created once (usually by an [`ItemCatalog`](crate::ItemCatalog))
/// and shared behind an `Arc` by every stack, grid cell and equipment slot
/// that refers to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    id: String,
    name: String,
    description: String,
    category: ItemCategory,
    rarity: ItemRarity,
    width: u32,
    height: u32,
    max_stack_size: u32,
    value: u32,
    weight: f32,
    stats: ItemStats,
    enchantments: Vec<String>,
    equipment_slot: Option<EquipmentSlot>,
}

impl Item {
    /// Create a 1x1, non-stackable item with no stats
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: ItemCategory::default(),
            rarity: ItemRarity::default(),
            width: 1,
            height: 1,
            max_stack_size: 1,
            value: 0,
            weight: 1.0,
            stats: ItemStats::none(),
            enchantments: Vec::new(),
            equipment_slot: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set category
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Set rarity
    pub fn with_rarity(mut self, rarity: ItemRarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set grid footprint in cells. Both sides are at least one cell.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set max stack size (1 = not stackable)
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack_size = max.max(1);
        self
    }

    /// Set base sell value in gold
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Set weight
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Set stat bonuses
    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    /// Append an enchantment label
    pub fn with_enchantment(mut self, label: impl Into<String>) -> Self {
        self.enchantments.push(label.into());
        self
    }

    /// Set the equipment slot this item is worn in
    pub fn with_equipment_slot(mut self, slot: EquipmentSlot) -> Self {
        self.equipment_slot = Some(slot);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn rarity(&self) -> ItemRarity {
        self.rarity
    }

    /// Width in grid cells
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in grid cells
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn stats(&self) -> &ItemStats {
        &self.stats
    }

    /// Enchantment labels in the order they were applied
    pub fn enchantments(&self) -> &[String] {
        &self.enchantments
    }

    pub fn has_enchantments(&self) -> bool {
        !self.enchantments.is_empty()
    }

    /// Slot affinity, if the item can be worn
    pub fn equipment_slot(&self) -> Option<EquipmentSlot> {
        self.equipment_slot
    }

    pub fn is_equippable(&self) -> bool {
        self.equipment_slot.is_some()
    }

    /// Check if stackable
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size > 1
    }

    /// Number of grid cells the item covers
    pub fn area(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// On-disk shape of an item definition. Missing fields take the same
/// defaults as [`Item::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ItemRecord {
    id: String,
    name: String,
    description: String,
    category: ItemCategory,
    rarity: ItemRarity,
    width: u32,
    height: u32,
    max_stack_size: u32,
    value: u32,
    weight: f32,
    stats: ItemStats,
    enchantments: Vec<String>,
    equipment_slot: Option<EquipmentSlot>,
}

impl Default for ItemRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            category: ItemCategory::default(),
            rarity: ItemRarity::default(),
            width: 1,
            height: 1,
            max_stack_size: 1,
            value: 0,
            weight: 1.0,
            stats: ItemStats::none(),
            enchantments: Vec::new(),
            equipment_slot: None,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let mut item = Item::new(record.id, record.name)
            .with_description(record.description)
            .with_category(record.category)
            .with_rarity(record.rarity)
            .with_size(record.width, record.height)
            .with_max_stack(record.max_stack_size)
            .with_value(record.value)
            .with_weight(record.weight)
            .with_stats(record.stats);
        item.enchantments = record.enchantments;
        item.equipment_slot = record.equipment_slot;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iron_sword() -> Item {
        Item::new("iron_sword", "Iron Sword")
            .with_description("A sturdy blade")
            .with_category(ItemCategory::Weapon)
            .with_rarity(ItemRarity::Uncommon)
            .with_size(1, 2)
            .with_value(100)
            .with_weight(3.5)
            .with_stats(ItemStats::weapon(15, 100, 1.2))
            .with_equipment_slot(EquipmentSlot::MainHand)
    }

    #[test]
    fn test_item_defaults() {
        let potion = Item::new("health_potion", "Health Potion")
            .with_category(ItemCategory::Consumable)
            .with_max_stack(10)
            .with_value(25);

        assert_eq!(potion.width(), 1);
        assert_eq!(potion.height(), 1);
        assert_eq!(potion.weight(), 1.0);
        assert!(potion.is_stackable());
        assert!(!potion.stats().has_stats());
        assert!(!potion.has_enchantments());
        assert!(!potion.is_equippable());
        assert_eq!(potion.equipment_slot(), None);
    }

    #[test]
    fn test_weapon_definition() {
        let sword = iron_sword();

        assert_eq!(sword.id(), "iron_sword");
        assert_eq!(sword.height(), 2);
        assert_eq!(sword.area(), 2);
        assert!(!sword.is_stackable());
        assert!(sword.is_equippable());
        assert_eq!(sword.stats().damage, 15);
        assert_eq!(sword.to_string(), "Iron Sword (WEAPON)");
    }

    #[test]
    fn test_degenerate_sizes_are_clamped() {
        let item = Item::new("dust", "Dust").with_size(0, 0).with_max_stack(0);

        assert_eq!(item.width(), 1);
        assert_eq!(item.height(), 1);
        assert_eq!(item.max_stack_size(), 1);
    }

    #[test]
    fn test_huge_area_saturates() {
        let item = Item::new("tarp", "Tarp").with_size(u32::MAX, 2);

        assert_eq!(item.area(), u32::MAX);
    }

    #[test]
    fn test_default_category_and_rarity() {
        assert_eq!(ItemCategory::default(), ItemCategory::Misc);
        assert_eq!(ItemRarity::default(), ItemRarity::Common);
    }

    #[test]
    fn test_enchantments_keep_order() {
        let sword = iron_sword()
            .with_enchantment("Sharpness II")
            .with_enchantment("Fire Aspect");

        assert!(sword.has_enchantments());
        assert_eq!(sword.enchantments(), ["Sharpness II", "Fire Aspect"]);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let item: Item = serde_json::from_str(
            r#"{ "id": "wood", "name": "Wood", "category": "MATERIAL", "max_stack_size": 99, "width": 0 }"#,
        )
        .unwrap();

        assert_eq!(item.category(), ItemCategory::Material);
        assert_eq!(item.max_stack_size(), 99);
        assert_eq!(item.width(), 1);
        assert_eq!(item.weight(), 1.0);
    }
}
