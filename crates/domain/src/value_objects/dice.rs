//! Ability dice.
//!
//! The domain never owns a random source. Callers inject a d6 as a closure,
//! which keeps every roll reproducible in tests.

use serde::{Deserialize, Serialize};

/// Dice rolled per ability before the lowest is dropped.
pub const ABILITY_DICE: usize = 4;

/// Result of one "4d6 drop lowest" roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRoll {
    /// Faces in the order they were rolled.
    pub dice: [i32; ABILITY_DICE],
    /// Sum of the three highest faces.
    pub total: i32,
}

impl AbilityRoll {
    /// The face that was discarded.
    pub fn dropped(&self) -> i32 {
        self.dice.iter().copied().min().unwrap_or(0)
    }
}

/// Roll four d6 and keep the highest three.
///
/// Faces outside 1..=6 are clamped so the total always lands in 3..=18.
pub fn roll_four_drop_lowest(d6: &mut impl FnMut() -> i32) -> AbilityRoll {
    let mut dice = [0; ABILITY_DICE];
    for die in dice.iter_mut() {
        *die = d6().clamp(1, 6);
    }

    let mut sorted = dice;
    sorted.sort_unstable();
    let total = sorted[1..].iter().sum();

    AbilityRoll { dice, total }
}
