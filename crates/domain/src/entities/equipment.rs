//! Equipment catalogs: armor, weapons, and shop stock.

use serde::{Deserialize, Serialize};

use crate::ids::{ArmorId, WeaponId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub id: ArmorId,
    pub name: String,
    #[serde(default)]
    pub armor_bonus: i32,
    #[serde(default)]
    pub gold_value: i32,
}

impl Armor {
    pub fn new(id: ArmorId, name: impl Into<String>, armor_bonus: i32) -> Self {
        Self {
            id,
            name: name.into(),
            armor_bonus,
            gold_value: 0,
        }
    }

    pub fn with_gold_value(mut self, gold_value: i32) -> Self {
        self.gold_value = gold_value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Damage dice as printed, e.g. "1d8"
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub gold_value: i32,
}

impl Weapon {
    pub fn new(id: WeaponId, name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            damage: damage.into(),
            gold_value: 0,
        }
    }

    pub fn with_gold_value(mut self, gold_value: i32) -> Self {
        self.gold_value = gold_value;
        self
    }
}

/// A line of the shop's price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub item_type: String,
    pub name: String,
    pub gold_value: i32,
}
