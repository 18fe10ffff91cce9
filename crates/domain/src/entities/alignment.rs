use serde::{Deserialize, Serialize};

use crate::ids::AlignmentId;

/// An alignment choice. Selection only, no rules attach to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub id: AlignmentId,
    pub name: String,
}

impl Alignment {
    pub fn new(id: AlignmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
