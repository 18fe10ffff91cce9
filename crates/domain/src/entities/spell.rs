//! Spells and caster types (spell slot tables).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{CasterTypeId, SpellId};

/// Highest spell level tracked by slot tables and save DCs.
pub const MAX_SPELL_LEVEL: u8 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 0 (cantrip/orison) through 9
    pub spell_level: u8,
    /// Names of the classes whose spell list includes this spell
    #[serde(default)]
    pub class_lists: Vec<String>,
}

impl Spell {
    pub fn new(id: SpellId, name: impl Into<String>, spell_level: u8) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            spell_level,
            class_lists: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn on_list(mut self, class_name: impl Into<String>) -> Self {
        self.class_lists.push(class_name.into());
        self
    }

    /// Whether the named class can learn this spell (ASCII case-insensitive).
    pub fn is_on_list_of(&self, class_name: &str) -> bool {
        self.class_lists
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(class_name.trim()))
    }
}

/// Spell slots per spell level granted by a casting tradition.
///
/// A flat lookup table at its reference level; it is not scaled by
/// character level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasterType {
    pub id: CasterTypeId,
    #[serde(default)]
    pub name: Option<String>,
    /// Spell level to slot count; levels without an entry grant nothing
    #[serde(default)]
    pub slots: BTreeMap<u8, u32>,
}

impl CasterType {
    pub fn new(id: CasterTypeId) -> Self {
        Self {
            id,
            name: None,
            slots: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the slot count for a spell level. Levels above 9 are ignored.
    pub fn with_slots(mut self, spell_level: u8, count: u32) -> Self {
        if spell_level <= MAX_SPELL_LEVEL {
            self.slots.insert(spell_level, count);
        }
        self
    }

    pub fn slots_at(&self, spell_level: u8) -> Option<u32> {
        self.slots.get(&spell_level).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_list_membership_ignores_case() {
        let spell = Spell::new(SpellId::new(1), "Magic Missile", 1)
            .on_list("Wizard")
            .on_list("Sorcerer");
        assert!(spell.is_on_list_of("wizard"));
        assert!(!spell.is_on_list_of("Cleric"));
    }

    #[test]
    fn slot_table_ignores_levels_past_nine() {
        let table = CasterType::new(CasterTypeId::new(1))
            .with_slots(0, 3)
            .with_slots(1, 1)
            .with_slots(10, 4);
        assert_eq!(table.slots_at(0), Some(3));
        assert_eq!(table.slots_at(1), Some(1));
        assert_eq!(table.slots_at(2), None);
        assert_eq!(table.slots_at(10), None);
    }
}
