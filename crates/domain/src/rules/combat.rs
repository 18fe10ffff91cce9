//! Derived combat statistics.
//!
//! A single-level snapshot: hit points are not multiplied by level and base
//! attack bonus is read at a fixed progression entry.

use serde::Serialize;

use crate::entities::{BabProgression, CharacterClass};
use crate::value_objects::{Ability, AbilityScores};

pub const BASE_ARMOR_CLASS: i32 = 10;
pub const TOUCH_AC_OFFSET: i32 = 2;
pub const FLAT_FOOTED_AC_OFFSET: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatStats {
    pub hit_points: i32,
    pub armor_class: i32,
    pub touch_ac: i32,
    pub flat_footed_ac: i32,
    pub initiative: i32,
    pub base_attack_bonus: i32,
    pub melee_attack_bonus: i32,
    pub ranged_attack_bonus: i32,
    pub fortitude_save: i32,
    pub reflex_save: i32,
    pub will_save: i32,
}

/// BAB for a class at the reference entry of its progression; 0 if either
/// the progression or the entry is missing.
pub fn base_attack_bonus(
    class: &CharacterClass,
    progressions: &[BabProgression],
    reference_level: u8,
) -> i32 {
    progressions
        .iter()
        .find(|p| p.matches(&class.bab_progression))
        .and_then(|p| p.bonus_at(reference_level))
        .unwrap_or(0)
}

pub fn combat_stats(
    class: &CharacterClass,
    abilities: &AbilityScores,
    base_attack_bonus: i32,
) -> CombatStats {
    let str_mod = abilities.modifier(Ability::Strength);
    let dex_mod = abilities.modifier(Ability::Dexterity);
    let con_mod = abilities.modifier(Ability::Constitution);
    let wis_mod = abilities.modifier(Ability::Wisdom);

    let armor_class = BASE_ARMOR_CLASS + dex_mod;

    CombatStats {
        hit_points: i32::from(class.hit_die) + con_mod,
        armor_class,
        touch_ac: armor_class - TOUCH_AC_OFFSET,
        flat_footed_ac: armor_class - FLAT_FOOTED_AC_OFFSET,
        initiative: dex_mod,
        base_attack_bonus,
        melee_attack_bonus: base_attack_bonus.saturating_add(str_mod),
        ranged_attack_bonus: base_attack_bonus.saturating_add(dex_mod),
        fortitude_save: con_mod,
        reflex_save: dex_mod,
        will_save: wis_mod,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ClassId;

    fn fighter() -> CharacterClass {
        CharacterClass::new(ClassId::new(1), "Fighter", 8, 4, "fighter")
    }

    #[test]
    fn derives_the_reference_fighter() {
        let abilities = AbilityScores::new()
            .with(Ability::Constitution, 14)
            .with(Ability::Dexterity, 12)
            .with(Ability::Strength, 16)
            .with(Ability::Wisdom, 10);
        let table = vec![BabProgression::new("fighter")
            .with_entry(1, 1)
            .with_entry(2, 2)];

        let bab = base_attack_bonus(&fighter(), &table, 1);
        let stats = combat_stats(&fighter(), &abilities, bab);

        assert_eq!(stats.hit_points, 10);
        assert_eq!(stats.armor_class, 11);
        assert_eq!(stats.touch_ac, 9);
        assert_eq!(stats.flat_footed_ac, 7);
        assert_eq!(stats.base_attack_bonus, 1);
        assert_eq!(stats.melee_attack_bonus, 4);
        assert_eq!(stats.ranged_attack_bonus, 2);
        assert_eq!(stats.fortitude_save, 2);
        assert_eq!(stats.reflex_save, 1);
        assert_eq!(stats.will_save, 0);
        assert_eq!(stats.initiative, 1);
    }

    #[test]
    fn missing_progression_means_zero_bab() {
        assert_eq!(base_attack_bonus(&fighter(), &[], 1), 0);

        let table = vec![BabProgression::new("Fighter").with_entry(2, 2)];
        assert_eq!(base_attack_bonus(&fighter(), &table, 1), 0);
        assert_eq!(base_attack_bonus(&fighter(), &table, 2), 2);
    }

    #[test]
    fn progression_referenced_by_row_id() {
        let mut class = fighter();
        class.bab_progression = "3".to_string();
        let table = vec![
            BabProgression::new("1").with_name("Half").with_entry(1, 0),
            BabProgression::new("3").with_name("Full").with_entry(1, 1),
        ];

        assert_eq!(base_attack_bonus(&class, &table, 1), 1);
    }

    #[test]
    fn low_scores_give_negative_modifiers() {
        let abilities = AbilityScores::new()
            .with(Ability::Constitution, 8)
            .with(Ability::Dexterity, 7);
        let stats = combat_stats(&fighter(), &abilities, 0);
        assert_eq!(stats.hit_points, 7);
        assert_eq!(stats.armor_class, 8);
        assert_eq!(stats.reflex_save, -2);
    }
}
