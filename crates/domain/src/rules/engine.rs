//! Rules engine bound to a reference data set.
//!
//! Resolves ids through [`ReferenceData`] and feeds the stage functions. An id
//! missing from the reference data never fails a calculation: pools fall back
//! to zero and derived stats to `None`.

use super::abilities::roll_ability_scores;
use super::allocation::{self, FeatPool, SkillPool};
use super::combat::{self, CombatStats};
use super::config::RulesConfig;
use super::equipment::{self, StartingEquipment};
use super::outcome::{RejectReason, Transition};
use super::skills::{self, SkillSummary};
use super::spellcasting::{self, SpellcastingStats};
use crate::aggregates::CharacterBuild;
use crate::entities::{CharacterClass, Race};
use crate::ids::{AlignmentId, ClassId, FeatId, RaceId, SkillId};
use crate::reference::ReferenceData;

#[derive(Debug, Clone, Copy)]
pub struct RulesEngine<'a> {
    reference: &'a ReferenceData,
    config: &'a RulesConfig,
}

impl<'a> RulesEngine<'a> {
    pub fn new(reference: &'a ReferenceData, config: &'a RulesConfig) -> Self {
        Self { reference, config }
    }

    pub fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    pub fn config(&self) -> &'a RulesConfig {
        self.config
    }

    pub fn class_of(&self, build: &CharacterBuild) -> Option<&'a CharacterClass> {
        build.class_id().and_then(|id| self.reference.class(id))
    }

    pub fn race_of(&self, build: &CharacterBuild) -> Option<&'a Race> {
        build.race_id().and_then(|id| self.reference.race(id))
    }

    // =========================================================================
    // Pools
    // =========================================================================

    pub fn skill_pool(&self, build: &CharacterBuild) -> SkillPool {
        let available = allocation::available_skill_points(
            self.class_of(build),
            build.abilities(),
            build.level(),
        );
        SkillPool::new(available, build)
    }

    pub fn feat_pool(&self, build: &CharacterBuild) -> FeatPool {
        let available =
            allocation::available_feat_slots(self.class_of(build), build.race_id(), self.config);
        FeatPool::new(available, build)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    pub fn select_race(&self, build: CharacterBuild, race_id: RaceId) -> Transition {
        if self.reference.race(race_id).is_none() {
            return unknown(build, "race", race_id.value());
        }
        Transition::applied(build.with_race(race_id))
    }

    pub fn select_class(&self, build: CharacterBuild, class_id: ClassId) -> Transition {
        if self.reference.class(class_id).is_none() {
            return unknown(build, "class", class_id.value());
        }
        Transition::applied(build.change_class(class_id))
    }

    pub fn select_alignment(&self, build: CharacterBuild, alignment_id: AlignmentId) -> Transition {
        if self.reference.alignment(alignment_id).is_none() {
            return unknown(build, "alignment", alignment_id.value());
        }
        Transition::applied(build.with_alignment(alignment_id))
    }

    /// Replace all six scores with a fresh roll, adjusted by the selected race.
    pub fn roll_abilities(
        &self,
        build: CharacterBuild,
        d6: &mut impl FnMut() -> i32,
    ) -> Transition {
        let scores = roll_ability_scores(self.race_of(&build), d6);
        Transition::applied(build.with_abilities(scores))
    }

    pub fn set_level(&self, build: CharacterBuild, level: u8) -> Transition {
        allocation::set_level(build, level)
    }

    pub fn assign_skill_rank(
        &self,
        build: CharacterBuild,
        skill_id: SkillId,
        rank: u8,
    ) -> Transition {
        if self.reference.skill(skill_id).is_none() {
            return unknown(build, "skill", skill_id.value());
        }
        let available = self.skill_pool(&build).available;
        allocation::assign_skill_rank(build, skill_id, rank, available)
    }

    pub fn select_feat(&self, build: CharacterBuild, feat_id: FeatId) -> Transition {
        if self.reference.feat(feat_id).is_none() {
            return unknown(build, "feat", feat_id.value());
        }
        let available = self.feat_pool(&build).available;
        allocation::select_feat(build, feat_id, available)
    }

    pub fn deselect_feat(&self, build: CharacterBuild, feat_id: FeatId) -> Transition {
        allocation::deselect_feat(build, feat_id)
    }

    // =========================================================================
    // Derived statistics
    // =========================================================================

    pub fn base_attack_bonus(&self, class: &CharacterClass) -> i32 {
        combat::base_attack_bonus(
            class,
            &self.reference.bab_progressions,
            self.config.bab_reference_level,
        )
    }

    pub fn combat_stats(&self, build: &CharacterBuild) -> Option<CombatStats> {
        let class = self.class_of(build)?;
        Some(combat::combat_stats(
            class,
            build.abilities(),
            self.base_attack_bonus(class),
        ))
    }

    pub fn spellcasting(&self, build: &CharacterBuild) -> Option<SpellcastingStats> {
        let class = self.class_of(build)?;
        spellcasting::spellcasting(
            class,
            &self.reference.caster_types,
            build.abilities(),
            &self.reference.spells,
            self.base_attack_bonus(class),
        )
    }

    pub fn skill_summaries(&self, build: &CharacterBuild) -> Vec<SkillSummary> {
        skills::skill_summaries(
            &self.reference.skills,
            build,
            &self.reference.stats,
            self.class_of(build),
        )
    }

    pub fn starting_equipment(&self, build: &CharacterBuild) -> StartingEquipment {
        equipment::starting_equipment(self.class_of(build), self.reference)
    }
}

fn unknown(build: CharacterBuild, kind: &'static str, id: i64) -> Transition {
    Transition::rejected(build, RejectReason::UnknownReference { kind, id })
}
