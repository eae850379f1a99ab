//! Equipment slot identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named equipment position. Each slot holds at most one item.
///
/// Ordering follows declaration order, which is also the order equipment is
/// iterated and saved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentSlot {
    MainHand,
    Necklace,
    #[serde(rename = "RING_1")]
    Ring1,
    #[serde(rename = "RING_2")]
    Ring2,
    Torso,
    Legs,
    Boots,
    Helmet,
    Shield,
    CapeBackpack,
    Gloves,
}

/// Unknown slot name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown equipment slot: {0}")]
pub struct UnknownSlot(pub String);

impl EquipmentSlot {
    /// Every slot, in declaration order
    pub const ALL: [EquipmentSlot; 11] = [
        Self::MainHand,
        Self::Necklace,
        Self::Ring1,
        Self::Ring2,
        Self::Torso,
        Self::Legs,
        Self::Boots,
        Self::Helmet,
        Self::Shield,
        Self::CapeBackpack,
        Self::Gloves,
    ];

    /// Persistent name written to save files
    pub fn name(&self) -> &'static str {
        match self {
            Self::MainHand => "MAIN_HAND",
            Self::Necklace => "NECKLACE",
            Self::Ring1 => "RING_1",
            Self::Ring2 => "RING_2",
            Self::Torso => "TORSO",
            Self::Legs => "LEGS",
            Self::Boots => "BOOTS",
            Self::Helmet => "HELMET",
            Self::Shield => "SHIELD",
            Self::CapeBackpack => "CAPE_BACKPACK",
            Self::Gloves => "GLOVES",
        }
    }

    /// Human readable name for UI labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MainHand => "Main Hand",
            Self::Necklace => "Necklace",
            Self::Ring1 => "Ring 1",
            Self::Ring2 => "Ring 2",
            Self::Torso => "Torso",
            Self::Legs => "Legs",
            Self::Boots => "Boots",
            Self::Helmet => "Helmet",
            Self::Shield => "Shield",
            Self::CapeBackpack => "Cape/Backpack",
            Self::Gloves => "Gloves",
        }
    }

    /// Check if this is one of the two ring slots
    pub fn is_ring(&self) -> bool {
        matches!(self, Self::Ring1 | Self::Ring2)
    }

    /// Whether an item declaring `affinity` belongs in this slot.
    /// Ring items fit either ring slot.
    pub fn accepts(&self, affinity: EquipmentSlot) -> bool {
        *self == affinity || (self.is_ring() && affinity.is_ring())
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EquipmentSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for slot in EquipmentSlot::ALL {
            assert_eq!(slot.name().parse::<EquipmentSlot>(), Ok(slot));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "THIRD_HAND".parse::<EquipmentSlot>().unwrap_err();
        assert_eq!(err, UnknownSlot("THIRD_HAND".to_string()));
    }

    #[test]
    fn test_serde_uses_persistent_names() {
        let json = serde_json::to_string(&EquipmentSlot::Ring2).unwrap();
        assert_eq!(json, "\"RING_2\"");

        let slot: EquipmentSlot = serde_json::from_str("\"CAPE_BACKPACK\"").unwrap();
        assert_eq!(slot, EquipmentSlot::CapeBackpack);
        assert_eq!(slot.to_string(), "Cape/Backpack");
    }

    #[test]
    fn test_ring_slots_share_affinity() {
        assert!(EquipmentSlot::Ring2.accepts(EquipmentSlot::Ring1));
        assert!(EquipmentSlot::Ring1.accepts(EquipmentSlot::Ring1));
        assert!(!EquipmentSlot::Helmet.accepts(EquipmentSlot::MainHand));
    }
}
