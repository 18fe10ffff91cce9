//! Tunable constants of the rules engine.

use serde::{Deserialize, Serialize};

use crate::ids::RaceId;

/// Race id of "Human" in the reference data; humans get a bonus feat.
pub const HUMAN_RACE_ID: RaceId = RaceId::new(1);

/// Rules settings the surrounding application may override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Progression entry queried for base attack bonus, regardless of the
    /// character's actual level.
    pub bab_reference_level: u8,
    /// Feat slots every character starts with.
    pub base_feat_slots: i32,
    /// Races granting one extra feat slot.
    pub bonus_feat_races: Vec<RaceId>,
    /// Class names (ASCII case-insensitive) granting one extra feat slot.
    pub bonus_feat_classes: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bab_reference_level: 1,
            base_feat_slots: 1,
            bonus_feat_races: vec![HUMAN_RACE_ID],
            bonus_feat_classes: vec!["Fighter".to_string()],
        }
    }
}

impl RulesConfig {
    pub fn with_bab_reference_level(mut self, level: u8) -> Self {
        self.bab_reference_level = level;
        self
    }

    pub fn with_bonus_feat_races(mut self, races: Vec<RaceId>) -> Self {
        self.bonus_feat_races = races;
        self
    }

    pub fn with_bonus_feat_classes(mut self, classes: Vec<String>) -> Self {
        self.bonus_feat_classes = classes;
        self
    }

    pub(crate) fn race_grants_bonus_feat(&self, race_id: RaceId) -> bool {
        self.bonus_feat_races.contains(&race_id)
    }

    pub(crate) fn class_grants_bonus_feat(&self, class_name: &str) -> bool {
        self.bonus_feat_classes
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(class_name.trim()))
    }
}
