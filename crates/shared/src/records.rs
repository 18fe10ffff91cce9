//! Reference data records as served by the data service.
//!
//! Records mirror the JSON exactly (snake_case, raw integer ids, optional
//! fields optional). Conversion into domain entities lives in
//! [`crate::conversions`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRecord {
    pub id: i64,
    pub name: String,
    /// Ability name to adjustment; kept loose so one bad entry cannot sink
    /// the whole collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_modifiers: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: i64,
    pub name: String,
    pub hit_die: i64,
    #[serde(alias = "skillPoints")]
    pub skill_points: i32,
    #[serde(default)]
    pub bab_progression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caster_type_id: Option<i64>,
    /// Casting ability name; Charisma when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casting_stat: Option<String>,
    #[serde(default)]
    pub class_skills: Vec<String>,
    #[serde(default)]
    pub starting_weapons: Vec<String>,
    #[serde(default)]
    pub starting_armor: Vec<String>,
    #[serde(default)]
    pub starting_inventory: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: i64,
    pub name: String,
    pub modifying_stat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Slot table with one optional column per spell level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasterTypeRecord {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub spell_level_0: Option<u32>,
    #[serde(default)]
    pub spell_level_1: Option<u32>,
    #[serde(default)]
    pub spell_level_2: Option<u32>,
    #[serde(default)]
    pub spell_level_3: Option<u32>,
    #[serde(default)]
    pub spell_level_4: Option<u32>,
    #[serde(default)]
    pub spell_level_5: Option<u32>,
    #[serde(default)]
    pub spell_level_6: Option<u32>,
    #[serde(default)]
    pub spell_level_7: Option<u32>,
    #[serde(default)]
    pub spell_level_8: Option<u32>,
    #[serde(default)]
    pub spell_level_9: Option<u32>,
}

impl CasterTypeRecord {
    /// The ten columns in spell-level order.
    pub fn columns(&self) -> [Option<u32>; 10] {
        [
            self.spell_level_0,
            self.spell_level_1,
            self.spell_level_2,
            self.spell_level_3,
            self.spell_level_4,
            self.spell_level_5,
            self.spell_level_6,
            self.spell_level_7,
            self.spell_level_8,
            self.spell_level_9,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub spell_level: i64,
    #[serde(default)]
    pub class_lists: Vec<String>,
}

/// Key of a BAB row. The service uses integer ids; older exports use
/// strings such as `"fighter"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressionKey {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProgressionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One row of the BAB table: `{"id": 3, "1": 1, "2": 2, ...}`.
///
/// Level columns usually sit next to the id; a nested `entries` object is
/// accepted as well. Values stay loose until conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabProgressionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProgressionKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entries: BTreeMap<String, serde_json::Value>,
    #[serde(flatten)]
    pub levels: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRecord {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub armor_bonus: i32,
    #[serde(default)]
    pub gold_value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub gold_value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItemRecord {
    #[serde(rename = "type")]
    pub item_type: String,
    pub name: String,
    #[serde(default)]
    pub gold_value: i32,
}

/// Every reference collection in one document.
///
/// The shape of the offline snapshot file; also what the REST source
/// assembles from its individual endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSnapshot {
    pub races: Vec<RaceRecord>,
    pub character_classes: Vec<ClassRecord>,
    pub skills: Vec<SkillRecord>,
    pub stats: Vec<StatRecord>,
    pub feats: Vec<FeatRecord>,
    pub caster_types: Vec<CasterTypeRecord>,
    pub spells: Vec<SpellRecord>,
    pub bab_progressions: Vec<BabProgressionRecord>,
    pub alignments: Vec<AlignmentRecord>,
    pub armor: Vec<ArmorRecord>,
    pub weapons: Vec<WeaponRecord>,
    pub shop_items: Vec<ShopItemRecord>,
}
