//! Outcome of a build transition.
//!
//! Constraint violations are not errors: a rejected transition hands back the
//! unchanged build together with the reason, so callers never compare states.

use std::fmt;

use serde::Serialize;

use crate::aggregates::CharacterBuild;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// Level must be at least 1
    InvalidLevel,
    /// A skill cannot hold more ranks than the character has levels
    RankAboveLevel { rank: u8, level: u8 },
    /// The raise costs more than the pool has left
    InsufficientSkillPoints { needed: i32, remaining: i32 },
    NoFeatSlots,
    FeatAlreadySelected,
    /// The id is not present in the loaded reference data
    UnknownReference { kind: &'static str, id: i64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel => f.write_str("level must be at least 1"),
            Self::RankAboveLevel { rank, level } => {
                write!(f, "rank {} exceeds character level {}", rank, level)
            }
            Self::InsufficientSkillPoints { needed, remaining } => write!(
                f,
                "needs {} skill points but only {} remain",
                needed, remaining
            ),
            Self::NoFeatSlots => f.write_str("no feat slots remaining"),
            Self::FeatAlreadySelected => f.write_str("feat already selected"),
            Self::UnknownReference { kind, id } => write!(f, "unknown {} {}", kind, id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Allocation {
    Applied,
    Rejected(RejectReason),
}

impl Allocation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            Self::Applied => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// The build after an operation, and whether the operation took effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub build: CharacterBuild,
    pub outcome: Allocation,
}

impl Transition {
    pub fn applied(build: CharacterBuild) -> Self {
        Self {
            build,
            outcome: Allocation::Applied,
        }
    }

    pub fn rejected(build: CharacterBuild, reason: RejectReason) -> Self {
        Self {
            build,
            outcome: Allocation::Rejected(reason),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.outcome.is_applied()
    }

    pub fn into_parts(self) -> (CharacterBuild, Allocation) {
        (self.build, self.outcome)
    }
}
