//! Combat stat bonuses carried by items

use serde::{Deserialize, Serialize};

/// Special effect applied when a weapon lands a hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponEffect {
    /// Drains this much mana from the target
    ManaDrain(f32),
    /// Drains this much stamina from the target
    StaminaDrain(f32),
    /// Heals the attacker by this fraction (0.0 - 1.0) of damage dealt
    LifeSteal(f32),
    /// Poison damage over time
    Poison,
    /// Burn damage
    Fire,
}

/// Bundle of numeric combat bonuses.
///
/// Values may be negative (cursed items). Attack speed is in attacks per
/// second and is zero for anything that is not a weapon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    /// Weapon damage
    pub damage: i32,
    /// Armor protection
    pub armor: i32,
    /// Item durability
    pub durability: i32,
    /// Attacks per second (1.5 = fast, 0.8 = slow)
    pub attack_speed: f32,
    pub strength: i32,
    pub dexterity: i32,
    pub vitality: i32,
    pub magic: i32,
    /// On-hit effects
    pub effects: Vec<WeaponEffect>,
}

impl ItemStats {
    /// Create a stat bundle with every bonus given explicitly
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        damage: i32,
        armor: i32,
        durability: i32,
        attack_speed: f32,
        strength: i32,
        dexterity: i32,
        vitality: i32,
        magic: i32,
    ) -> Self {
        Self {
            damage,
            armor,
            durability,
            attack_speed,
            strength,
            dexterity,
            vitality,
            magic,
            effects: Vec::new(),
        }
    }

    /// All-zero stats
    pub fn none() -> Self {
        Self::default()
    }

    /// Weapon stats
    pub fn weapon(damage: i32, durability: i32, attack_speed: f32) -> Self {
        Self::new(damage, 0, durability, attack_speed, 0, 0, 0, 0)
    }

    /// Weapon stats with the standard attack speed of 1.0
    pub fn weapon_default_speed(damage: i32, durability: i32) -> Self {
        Self::weapon(damage, durability, 1.0)
    }

    /// Armor stats
    pub fn armor(armor: i32, durability: i32) -> Self {
        Self::new(0, armor, durability, 0.0, 0, 0, 0, 0)
    }

    /// Set attribute bonuses
    pub fn with_attributes(mut self, strength: i32, dexterity: i32, vitality: i32, magic: i32) -> Self {
        self.strength = strength;
        self.dexterity = dexterity;
        self.vitality = vitality;
        self.magic = magic;
        self
    }

    /// Add an on-hit effect
    pub fn with_effect(mut self, effect: WeaponEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// True if any combat bonus is positive. Durability and attack speed on
    /// their own do not count.
    pub fn has_stats(&self) -> bool {
        self.damage > 0
            || self.armor > 0
            || self.strength > 0
            || self.dexterity > 0
            || self.vitality > 0
            || self.magic > 0
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Check for an effect kind, ignoring its magnitude
    pub fn has_effect_kind(&self, effect: &WeaponEffect) -> bool {
        self.effects
            .iter()
            .any(|e| std::mem::discriminant(e) == std::mem::discriminant(effect))
    }
}
