//! Value objects - immutable types defined by their values.

mod ability;
mod dice;

pub use ability::{ability_modifier, Ability, AbilityScores, DEFAULT_ABILITY_SCORE};
pub use dice::{roll_four_drop_lowest, AbilityRoll, ABILITY_DICE};
