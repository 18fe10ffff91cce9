//! Ability Score Resolver.

use crate::entities::Race;
use crate::value_objects::{roll_four_drop_lowest, Ability, AbilityRoll, AbilityScores};

/// One rolled ability, before and after the race adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolledAbility {
    pub ability: Ability,
    pub roll: AbilityRoll,
    pub racial_modifier: i32,
}

impl RolledAbility {
    pub fn score(&self) -> i32 {
        self.roll.total.saturating_add(self.racial_modifier)
    }
}

/// Roll every ability with 4d6-drop-lowest, in canonical order, and add the
/// race's adjustment once.
pub fn roll_abilities(race: Option<&Race>, d6: &mut impl FnMut() -> i32) -> Vec<RolledAbility> {
    Ability::ALL
        .into_iter()
        .map(|ability| RolledAbility {
            ability,
            roll: roll_four_drop_lowest(d6),
            racial_modifier: race.map(|r| r.modifier(ability)).unwrap_or(0),
        })
        .collect()
}

/// A complete fresh set of six scores.
///
/// Always replaces the whole set, so a re-roll never stacks the race
/// adjustment on top of a previous one.
pub fn roll_ability_scores(race: Option<&Race>, d6: &mut impl FnMut() -> i32) -> AbilityScores {
    roll_abilities(race, d6)
        .into_iter()
        .map(|rolled| (rolled.ability, rolled.score()))
        .collect()
}
