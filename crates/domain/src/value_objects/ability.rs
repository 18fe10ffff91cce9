//! Ability scores and modifiers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Score assumed for an ability that has not been set.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// The six canonical abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities in canonical sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    /// Accepts the full name or the three-letter abbreviation, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ability::ALL
            .into_iter()
            .find(|ability| {
                ability.name().eq_ignore_ascii_case(trimmed)
                    || ability.abbreviation().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

/// Standard ability modifier: `floor((score - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so the floor is taken explicitly
/// (a score of 9 is -1, not 0). Computed in `i64` so any `i32` score works;
/// the result always fits back into `i32`.
pub fn ability_modifier(score: i32) -> i32 {
    (i64::from(score) - i64::from(DEFAULT_ABILITY_SCORE)).div_euclid(2) as i32
}

/// Ability name to score.
///
/// Empty until populated; a full roll always fills all six. Scores are not
/// clamped, manual edits may go negative or implausibly high.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores(BTreeMap<Ability, i32>);

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores with every ability set to the same value.
    pub fn uniform(score: i32) -> Self {
        Ability::ALL.into_iter().map(|a| (a, score)).collect()
    }

    /// Raw score if it has been set.
    pub fn score(&self, ability: Ability) -> Option<i32> {
        self.0.get(&ability).copied()
    }

    /// Score, treating an unset ability as 10.
    pub fn get(&self, ability: Ability) -> i32 {
        self.score(ability).unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        self.0.insert(ability, score);
    }

    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        self.set(ability, score);
        self
    }

    /// True once all six abilities have a score.
    pub fn is_complete(&self) -> bool {
        Ability::ALL.iter().all(|a| self.0.contains_key(a))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.0.iter().map(|(a, s)| (*a, *s))
    }
}

impl FromIterator<(Ability, i32)> for AbilityScores {
    fn from_iter<T: IntoIterator<Item = (Ability, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(3), -4);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(12), 1);
        assert_eq!(ability_modifier(19), 4);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(-3), -7);
    }

    #[test]
    fn modifier_matches_floor_for_wide_range() {
        for score in -40..=60 {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(ability_modifier(score), expected, "score {}", score);
        }
    }

    #[test]
    fn modifier_handles_extreme_scores() {
        assert_eq!(ability_modifier(i32::MIN), -1_073_741_829);
        assert_eq!(ability_modifier(i32::MAX), 1_073_741_818);
    }

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("Strength".parse::<Ability>(), Ok(Ability::Strength));
        assert_eq!("wisdom".parse::<Ability>(), Ok(Ability::Wisdom));
        assert_eq!("CHA".parse::<Ability>(), Ok(Ability::Charisma));
        assert_eq!(" dex ".parse::<Ability>(), Ok(Ability::Dexterity));
        assert!(matches!(
            "Luck".parse::<Ability>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn unset_scores_default_to_ten() {
        let scores = AbilityScores::new().with(Ability::Strength, 16);
        assert_eq!(scores.get(Ability::Strength), 16);
        assert_eq!(scores.get(Ability::Wisdom), 10);
        assert_eq!(scores.modifier(Ability::Wisdom), 0);
        assert_eq!(scores.score(Ability::Wisdom), None);
        assert!(!scores.is_complete());
    }

    #[test]
    fn serializes_as_name_keyed_map() {
        let scores = AbilityScores::new()
            .with(Ability::Strength, 16)
            .with(Ability::Intelligence, 8);
        let json = serde_json::to_value(&scores).expect("serialize");
        assert_eq!(json, serde_json::json!({"Strength": 16, "Intelligence": 8}));
    }
}
