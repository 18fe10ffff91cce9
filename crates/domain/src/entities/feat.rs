//! Feat entity.
//!
//! Feats carry no prerequisite graph; they are picked up to the number of
//! available slots.

use serde::{Deserialize, Serialize};

use crate::ids::FeatId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feat {
    pub id: FeatId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Feat {
    pub fn new(id: FeatId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
