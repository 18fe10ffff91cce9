//! Race entity - ancestry options with ability adjustments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::RaceId;
use crate::value_objects::{Ability, AbilityScores};

/// A playable race.
///
/// Ability adjustments are applied additively to rolled scores, once per roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    /// Missing entries mean no adjustment
    #[serde(default)]
    pub stat_modifiers: BTreeMap<Ability, i32>,
}

impl Race {
    pub fn new(id: RaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stat_modifiers: BTreeMap::new(),
        }
    }

    pub fn with_modifier(mut self, ability: Ability, value: i32) -> Self {
        self.stat_modifiers.insert(ability, value);
        self
    }

    /// Adjustment for an ability, 0 when unspecified.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.stat_modifiers.get(&ability).copied().unwrap_or(0)
    }

    /// Add this race's adjustments to every ability present in `scores`.
    pub fn apply_to(&self, scores: &AbilityScores) -> AbilityScores {
        scores
            .iter()
            .map(|(ability, score)| (ability, score.saturating_add(self.modifier(ability))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_modifiers_are_zero() {
        let dwarf = Race::new(RaceId::new(2), "Dwarf")
            .with_modifier(Ability::Constitution, 2)
            .with_modifier(Ability::Charisma, -2);
        assert_eq!(dwarf.modifier(Ability::Constitution), 2);
        assert_eq!(dwarf.modifier(Ability::Charisma), -2);
        assert_eq!(dwarf.modifier(Ability::Strength), 0);
    }

    #[test]
    fn apply_only_touches_present_scores() {
        let elf = Race::new(RaceId::new(3), "Elf").with_modifier(Ability::Dexterity, 2);
        let scores = AbilityScores::new()
            .with(Ability::Dexterity, 12)
            .with(Ability::Strength, 10);
        let adjusted = elf.apply_to(&scores);
        assert_eq!(adjusted.score(Ability::Dexterity), Some(14));
        assert_eq!(adjusted.score(Ability::Strength), Some(10));
        assert_eq!(adjusted.len(), 2);
    }
}
