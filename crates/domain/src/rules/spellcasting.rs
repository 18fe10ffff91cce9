//! Derived spellcasting statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::{CasterProfile, CasterType, CharacterClass, Spell, MAX_SPELL_LEVEL};
use crate::ids::{CasterTypeId, SpellId};
use crate::value_objects::{Ability, AbilityScores};

/// Base of the spell save DC before the casting modifier and spell level.
pub const SPELL_DC_BASE: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnownSpell {
    pub id: SpellId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellcastingStats {
    pub caster_type_id: CasterTypeId,
    pub casting_ability: Ability,
    pub casting_modifier: i32,
    /// Slots per spell level, only for levels the caster table lists
    pub spell_slots: BTreeMap<u8, u32>,
    /// Save DC for each spell level 0..=9
    pub spell_save_dcs: BTreeMap<u8, i32>,
    pub spell_attack_bonus: i32,
    /// Spells on the class list, by level, sorted by name
    pub known_spells: BTreeMap<u8, Vec<KnownSpell>>,
}

impl SpellcastingStats {
    pub fn save_dc(&self, spell_level: u8) -> Option<i32> {
        self.spell_save_dcs.get(&spell_level).copied()
    }

    pub fn slots(&self, spell_level: u8) -> u32 {
        self.spell_slots.get(&spell_level).copied().unwrap_or(0)
    }
}

/// Spellcasting for a class, or `None` for a non-caster.
///
/// A caster whose slot table is missing from the reference data still casts,
/// with no slots.
pub fn spellcasting(
    class: &CharacterClass,
    caster_types: &[CasterType],
    abilities: &AbilityScores,
    spells: &[Spell],
    base_attack_bonus: i32,
) -> Option<SpellcastingStats> {
    let CasterProfile::Caster {
        caster_type_id,
        casting_ability,
    } = class.caster
    else {
        return None;
    };

    let casting_modifier = abilities.modifier(casting_ability);

    let spell_slots = caster_types
        .iter()
        .find(|t| t.id == caster_type_id)
        .map(|t| {
            (0..=MAX_SPELL_LEVEL)
                .filter_map(|level| t.slots_at(level).map(|count| (level, count)))
                .collect()
        })
        .unwrap_or_default();

    let spell_save_dcs = (0..=MAX_SPELL_LEVEL)
        .map(|level| (level, SPELL_DC_BASE + casting_modifier + i32::from(level)))
        .collect();

    Some(SpellcastingStats {
        caster_type_id,
        casting_ability,
        casting_modifier,
        spell_slots,
        spell_save_dcs,
        spell_attack_bonus: base_attack_bonus.saturating_add(casting_modifier),
        known_spells: known_spells(&class.name, spells),
    })
}

/// Spells whose class list names `class_name`, grouped by spell level.
pub fn known_spells(class_name: &str, spells: &[Spell]) -> BTreeMap<u8, Vec<KnownSpell>> {
    let mut grouped: BTreeMap<u8, Vec<KnownSpell>> = BTreeMap::new();
    for spell in spells.iter().filter(|s| s.is_on_list_of(class_name)) {
        grouped.entry(spell.spell_level).or_default().push(KnownSpell {
            id: spell.id,
            name: spell.name.clone(),
        });
    }
    for group in grouped.values_mut() {
        group.sort_by(|a, b| a.name.cmp(&b.name));
    }
    grouped
}
