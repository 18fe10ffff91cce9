//! Derived character sheet.
//!
//! Assembles every rules stage into one read-only view of a build. The sheet
//! is recomputed from the build and reference data on demand and never
//! stored.

use serde::Serialize;

use crate::aggregates::CharacterBuild;
use crate::ids::{AlignmentId, ClassId, FeatId, RaceId};
use crate::reference::ReferenceData;
use crate::rules::{
    CombatStats, FeatPool, RulesConfig, RulesEngine, SkillPool, SkillSummary, SpellcastingStats,
    StartingEquipment,
};
use crate::value_objects::Ability;

// =============================================================================
// Sheet sections
// =============================================================================

/// Who the character is, with reference ids resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetIdentity {
    pub name: String,
    pub level: u8,
    pub race_id: Option<RaceId>,
    pub race: Option<String>,
    pub class_id: Option<ClassId>,
    pub class: Option<String>,
    pub alignment_id: Option<AlignmentId>,
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbilityLine {
    pub ability: Ability,
    /// `None` until the score has been rolled or entered
    pub score: Option<i32>,
    pub modifier: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFeat {
    pub id: FeatId,
    /// `None` when the feat is no longer in the reference data
    pub name: Option<String>,
}

// =============================================================================
// Character Sheet
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSheet {
    pub identity: SheetIdentity,
    pub abilities: Vec<AbilityLine>,
    pub skill_points: SkillPool,
    pub feat_slots: FeatPool,
    pub skills: Vec<SkillSummary>,
    pub feats: Vec<SelectedFeat>,
    /// `None` until a class is selected
    pub combat: Option<CombatStats>,
    /// `None` for non-casters
    pub spellcasting: Option<SpellcastingStats>,
    pub equipment: StartingEquipment,
}

impl CharacterSheet {
    pub fn derive(build: &CharacterBuild, reference: &ReferenceData, config: &RulesConfig) -> Self {
        let engine = RulesEngine::new(reference, config);

        let identity = SheetIdentity {
            name: build.name().to_string(),
            level: build.level(),
            race_id: build.race_id(),
            race: engine.race_of(build).map(|r| r.name.clone()),
            class_id: build.class_id(),
            class: engine.class_of(build).map(|c| c.name.clone()),
            alignment_id: build.alignment_id(),
            alignment: build
                .alignment_id()
                .and_then(|id| reference.alignment(id))
                .map(|a| a.name.clone()),
        };

        let abilities = Ability::ALL
            .into_iter()
            .map(|ability| AbilityLine {
                ability,
                score: build.abilities().score(ability),
                modifier: build.abilities().modifier(ability),
            })
            .collect();

        let feats = build
            .feats()
            .iter()
            .map(|id| SelectedFeat {
                id: *id,
                name: reference.feat(*id).map(|f| f.name.clone()),
            })
            .collect();

        Self {
            identity,
            abilities,
            skill_points: engine.skill_pool(build),
            feat_slots: engine.feat_pool(build),
            skills: engine.skill_summaries(build),
            feats,
            combat: engine.combat_stats(build),
            spellcasting: engine.spellcasting(build),
            equipment: engine.starting_equipment(build),
        }
    }
}
