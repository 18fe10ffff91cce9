//! Character class entity.

use serde::{Deserialize, Serialize};

use crate::ids::{CasterTypeId, ClassId};
use crate::value_objects::Ability;

/// Casting ability used when a caster class does not name one.
pub const DEFAULT_CASTING_ABILITY: Ability = Ability::Charisma;

/// Whether a class casts spells, and from which slot table and ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CasterProfile {
    #[default]
    None,
    Caster {
        caster_type_id: CasterTypeId,
        casting_ability: Ability,
    },
}

impl CasterProfile {
    pub fn is_caster(&self) -> bool {
        matches!(self, Self::Caster { .. })
    }
}

/// A character class.
///
/// Plain data with no invariants beyond `hit_die > 0`, which is checked where
/// records are converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub id: ClassId,
    pub name: String,
    pub hit_die: u8,
    /// Skill points per level before the Intelligence modifier
    pub skill_points: i32,
    /// Key into the base attack bonus progression table
    pub bab_progression: String,
    #[serde(default)]
    pub caster: CasterProfile,
    /// Skill names that earn the class-skill bonus, in display order
    #[serde(default)]
    pub class_skills: Vec<String>,
    #[serde(default)]
    pub starting_weapons: Vec<String>,
    #[serde(default)]
    pub starting_armor: Vec<String>,
    #[serde(default)]
    pub starting_inventory: Vec<String>,
}

impl CharacterClass {
    pub fn new(
        id: ClassId,
        name: impl Into<String>,
        hit_die: u8,
        skill_points: i32,
        bab_progression: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hit_die,
            skill_points,
            bab_progression: bab_progression.into(),
            caster: CasterProfile::None,
            class_skills: Vec::new(),
            starting_weapons: Vec::new(),
            starting_armor: Vec::new(),
            starting_inventory: Vec::new(),
        }
    }

    pub fn with_class_skill(mut self, skill_name: impl Into<String>) -> Self {
        self.class_skills.push(skill_name.into());
        self
    }

    pub fn with_caster(mut self, caster_type_id: CasterTypeId, casting_ability: Ability) -> Self {
        self.caster = CasterProfile::Caster {
            caster_type_id,
            casting_ability,
        };
        self
    }

    pub fn with_starting_weapon(mut self, name: impl Into<String>) -> Self {
        self.starting_weapons.push(name.into());
        self
    }

    pub fn with_starting_armor(mut self, name: impl Into<String>) -> Self {
        self.starting_armor.push(name.into());
        self
    }

    pub fn with_starting_item(mut self, name: impl Into<String>) -> Self {
        self.starting_inventory.push(name.into());
        self
    }

    /// Class-skill membership, compared without regard to ASCII case.
    pub fn is_class_skill(&self, skill_name: &str) -> bool {
        self.class_skills
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(skill_name.trim()))
    }
}
