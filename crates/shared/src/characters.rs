//! Character payloads exchanged with the data service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use charforge_domain::{
    AlignmentId, BuildParts, CharacterBuild, CharacterId, ClassId, DomainError, FeatId, RaceId,
    SkillId, StartingEquipment, UserId,
};

use crate::conversions::ability_scores_from_names;

/// A finalized build in the shape `POST /characters/` expects.
///
/// Map keys are strings on the wire: ability names for `stats`, skill ids for
/// `skills`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub character_class_id: Option<i64>,
    #[serde(default)]
    pub alignment_id: Option<i64>,
    #[serde(default)]
    pub race_id: Option<i64>,
    #[serde(default)]
    pub feats: Vec<i64>,
    #[serde(default)]
    pub stats: BTreeMap<String, i32>,
    #[serde(default)]
    pub skills: BTreeMap<String, u8>,
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub armor: Vec<String>,
    #[serde(default)]
    pub inventory_items: Vec<String>,
    #[serde(default)]
    pub money: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl NewCharacter {
    pub fn from_build(build: &CharacterBuild, user_id: Option<UserId>) -> Self {
        Self {
            name: build.name().to_string(),
            level: build.level(),
            character_class_id: build.class_id().map(ClassId::value),
            alignment_id: build.alignment_id().map(AlignmentId::value),
            race_id: build.race_id().map(RaceId::value),
            feats: build.feats().iter().map(|f| f.value()).collect(),
            stats: build
                .abilities()
                .iter()
                .map(|(ability, score)| (ability.name().to_string(), score))
                .collect(),
            skills: build
                .skill_ranks()
                .iter()
                .map(|(id, rank)| (id.to_string(), *rank))
                .collect(),
            user_id: user_id.map(|u| *u.as_uuid()),
            ..Default::default()
        }
    }

    /// Fill the equipment placeholders from a resolved starting kit.
    pub fn with_equipment(mut self, kit: &StartingEquipment) -> Self {
        self.weapons = kit.weapons.iter().map(|w| w.name.clone()).collect();
        self.armor = kit.armor.iter().map(|a| a.name.clone()).collect();
        self.inventory_items = kit.inventory.clone();
        self
    }

    /// Rebuild the working state. Unknown ability names and non-numeric
    /// skill keys are ignored.
    pub fn to_build(&self) -> Result<CharacterBuild, DomainError> {
        let skill_ranks = self
            .skills
            .iter()
            .filter_map(|(key, rank)| {
                key.trim()
                    .parse::<i64>()
                    .ok()
                    .map(|id| (SkillId::new(id), *rank))
            })
            .collect();

        CharacterBuild::from_parts(BuildParts {
            name: self.name.clone(),
            level: self.level,
            class_id: self.character_class_id.map(ClassId::new),
            race_id: self.race_id.map(RaceId::new),
            alignment_id: self.alignment_id.map(AlignmentId::new),
            abilities: ability_scores_from_names(&self.stats).value,
            skill_ranks,
            feats: self.feats.iter().copied().map(FeatId::new).collect(),
        })
    }
}

/// A character as stored by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    #[serde(flatten)]
    pub character: NewCharacter,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CharacterRecord {
    pub fn character_id(&self) -> CharacterId {
        CharacterId::new(self.id)
    }

    pub fn to_build(&self) -> Result<CharacterBuild, DomainError> {
        self.character.to_build()
    }
}

/// Short listing entry for `GET /characters/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: i64,
    pub name: String,
    pub level: u8,
}

impl From<&CharacterRecord> for CharacterSummary {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.character.name.clone(),
            level: record.character.level,
        }
    }
}
