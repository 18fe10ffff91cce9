//! Character creation workflow.
//!
//! Owns the working build for one player. Every choice goes through the
//! rules engine; a rejected choice leaves the build unchanged and returns
//! the reason. Saving posts the finished build and starts over.

mod error;

pub use error::CreationError;

use std::sync::Arc;

use charforge_domain::{
    Ability, Allocation, AlignmentId, CharacterBuild, CharacterSheet, ClassId, FeatId, FeatPool,
    RaceId, ReferenceData, RulesConfig, RulesEngine, SkillId, SkillPool, Transition, UserId,
};
use charforge_shared::{BuildPlan, BuildStep, CharacterRecord, NewCharacter, RejectedStep};

use crate::infrastructure::ports::{CharacterStorePort, RandomPort};

pub struct CharacterCreation {
    reference: Arc<ReferenceData>,
    rules: Arc<RulesConfig>,
    store: Arc<dyn CharacterStorePort>,
    random: Arc<dyn RandomPort>,
    user_id: Option<UserId>,
    build: CharacterBuild,
}

impl CharacterCreation {
    pub fn new(
        reference: Arc<ReferenceData>,
        rules: Arc<RulesConfig>,
        store: Arc<dyn CharacterStorePort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            reference,
            rules,
            store,
            random,
            user_id: None,
            build: CharacterBuild::new(),
        }
    }

    /// Attach saved characters to this user.
    pub fn with_user(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn build(&self) -> &CharacterBuild {
        &self.build
    }

    pub fn skill_pool(&self) -> SkillPool {
        self.engine().skill_pool(&self.build)
    }

    pub fn feat_pool(&self) -> FeatPool {
        self.engine().feat_pool(&self.build)
    }

    pub fn sheet(&self) -> CharacterSheet {
        CharacterSheet::derive(&self.build, &self.reference, &self.rules)
    }

    fn engine(&self) -> RulesEngine<'_> {
        RulesEngine::new(&self.reference, &self.rules)
    }

    fn apply(
        &mut self,
        operation: &'static str,
        step: impl FnOnce(&RulesEngine<'_>, CharacterBuild) -> Transition,
    ) -> Allocation {
        let engine = RulesEngine::new(&self.reference, &self.rules);
        let current = std::mem::take(&mut self.build);
        let (build, outcome) = step(&engine, current).into_parts();
        self.build = build;

        match outcome.reason() {
            None => tracing::debug!(operation, "Build updated"),
            Some(reason) => tracing::debug!(operation, %reason, "Build change rejected"),
        }
        outcome
    }

    // =========================================================================
    // Choices
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.apply("set_name", |_, build| Transition::applied(build.with_name(name)));
    }

    pub fn set_level(&mut self, level: u8) -> Allocation {
        self.apply("set_level", |engine, build| engine.set_level(build, level))
    }

    pub fn select_race(&mut self, race_id: RaceId) -> Allocation {
        self.apply("select_race", |engine, build| {
            engine.select_race(build, race_id)
        })
    }

    pub fn select_class(&mut self, class_id: ClassId) -> Allocation {
        self.apply("select_class", |engine, build| {
            engine.select_class(build, class_id)
        })
    }

    pub fn select_alignment(&mut self, alignment_id: AlignmentId) -> Allocation {
        self.apply("select_alignment", |engine, build| {
            engine.select_alignment(build, alignment_id)
        })
    }

    /// Roll 4d6-drop-lowest for every ability, adjusted by the selected race.
    pub fn roll_abilities(&mut self) -> Allocation {
        let random = Arc::clone(&self.random);
        self.apply("roll_abilities", |engine, build| {
            let mut d6 = || random.gen_range(1, 6);
            engine.roll_abilities(build, &mut d6)
        })
    }

    pub fn set_ability_score(&mut self, ability: Ability, score: i32) {
        self.apply("set_ability_score", |_, build| {
            Transition::applied(build.set_ability_score(ability, score))
        });
    }

    pub fn assign_skill_rank(&mut self, skill_id: SkillId, rank: u8) -> Allocation {
        self.apply("assign_skill_rank", |engine, build| {
            engine.assign_skill_rank(build, skill_id, rank)
        })
    }

    pub fn select_feat(&mut self, feat_id: FeatId) -> Allocation {
        self.apply("select_feat", |engine, build| {
            engine.select_feat(build, feat_id)
        })
    }

    pub fn deselect_feat(&mut self, feat_id: FeatId) -> Allocation {
        self.apply("deselect_feat", |engine, build| {
            engine.deselect_feat(build, feat_id)
        })
    }

    pub fn reset(&mut self) {
        self.build = CharacterBuild::new();
        tracing::debug!("Build reset");
    }

    // =========================================================================
    // Build plans
    // =========================================================================

    /// Apply one plan step. An unknown ability name is an error; rule
    /// violations come back as a rejected allocation.
    pub fn apply_step(&mut self, step: &BuildStep) -> Result<Allocation, CreationError> {
        let outcome = match step {
            BuildStep::Name { name } => {
                self.set_name(name.clone());
                Allocation::Applied
            }
            BuildStep::Level { level } => self.set_level(*level),
            BuildStep::Race { race_id } => self.select_race(RaceId::new(*race_id)),
            BuildStep::Class { class_id } => self.select_class(ClassId::new(*class_id)),
            BuildStep::Alignment { alignment_id } => {
                self.select_alignment(AlignmentId::new(*alignment_id))
            }
            BuildStep::RollAbilities => self.roll_abilities(),
            BuildStep::AbilityScore { ability, score } => {
                let ability: Ability = ability.parse()?;
                self.set_ability_score(ability, *score);
                Allocation::Applied
            }
            BuildStep::SkillRank { skill_id, rank } => {
                self.assign_skill_rank(SkillId::new(*skill_id), *rank)
            }
            BuildStep::SelectFeat { feat_id } => self.select_feat(FeatId::new(*feat_id)),
            BuildStep::DeselectFeat { feat_id } => self.deselect_feat(FeatId::new(*feat_id)),
        };
        Ok(outcome)
    }

    /// Apply every step in order and collect the ones that were refused.
    pub fn apply_plan(&mut self, plan: &BuildPlan) -> Result<Vec<RejectedStep>, CreationError> {
        let mut rejected = Vec::new();
        for (index, step) in plan.steps.iter().enumerate() {
            if let Allocation::Rejected(reason) = self.apply_step(step)? {
                rejected.push(RejectedStep {
                    index,
                    step: step.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(rejected)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Post the finished build with its starting kit, then start a new build.
    ///
    /// The build is kept when the store fails so the player can retry.
    pub async fn save(&mut self) -> Result<CharacterRecord, CreationError> {
        self.build.ensure_complete()?;

        let kit = self.engine().starting_equipment(&self.build);
        let payload = NewCharacter::from_build(&self.build, self.user_id).with_equipment(&kit);
        let record = self.store.create(payload).await?;

        tracing::info!(
            character_id = record.id,
            name = %record.character.name,
            "Character saved"
        );
        self.reset();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::ports::{MockCharacterStorePort, MockRandomPort, RepoError};
    use charforge_domain::RejectReason;
    use charforge_shared::ReferenceSnapshot;

    use crate::use_cases::reference::tests::sample_snapshot;

    fn reference() -> Arc<ReferenceData> {
        Arc::new(sample_snapshot().into_reference_data().value)
    }

    fn creation(store: MockCharacterStorePort) -> CharacterCreation {
        CharacterCreation::new(
            reference(),
            Arc::new(RulesConfig::default()),
            Arc::new(store),
            Arc::new(FixedRandom(4)),
        )
    }

    fn fighter(creation: &mut CharacterCreation) {
        creation.set_name("Valeros");
        assert!(creation.select_race(RaceId::new(1)).is_applied());
        assert!(creation.select_class(ClassId::new(1)).is_applied());
        creation.set_ability_score(Ability::Strength, 16);
        creation.set_ability_score(Ability::Dexterity, 12);
        creation.set_ability_score(Ability::Constitution, 14);
        creation.set_ability_score(Ability::Intelligence, 10);
        creation.set_ability_score(Ability::Wisdom, 10);
        creation.set_ability_score(Ability::Charisma, 8);
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let mut creation = creation(MockCharacterStorePort::new());
        fighter(&mut creation);

        let outcome = creation.assign_skill_rank(SkillId::new(99), 1);

        assert_eq!(
            outcome,
            Allocation::Rejected(RejectReason::UnknownReference {
                kind: "skill",
                id: 99
            })
        );
        assert!(creation.build().skill_ranks().is_empty());
    }

    #[test]
    fn unknown_feat_is_rejected() {
        let mut creation = creation(MockCharacterStorePort::new());
        fighter(&mut creation);

        let outcome = creation.select_feat(FeatId::new(42));

        assert!(!outcome.is_applied());
        assert!(creation.build().feats().is_empty());
    }

    #[test]
    fn human_fighter_gets_three_feat_slots() {
        let mut creation = creation(MockCharacterStorePort::new());
        fighter(&mut creation);

        assert_eq!(creation.feat_pool().available, 3);
        for id in 1..=3 {
            assert!(creation.select_feat(FeatId::new(id)).is_applied());
        }
        assert_eq!(creation.feat_pool().remaining, 0);
        assert!(creation.deselect_feat(FeatId::new(2)).is_applied());
        assert_eq!(creation.feat_pool().remaining, 1);
    }

    #[test]
    fn roll_uses_the_random_port_for_every_die() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(|min, max| *min == 1 && *max == 6)
            .times(24)
            .returning(|_, _| 5);
        let mut creation = CharacterCreation::new(
            reference(),
            Arc::new(RulesConfig::default()),
            Arc::new(MockCharacterStorePort::new()),
            Arc::new(random),
        );
        assert!(creation.select_race(RaceId::new(2)).is_applied());

        assert!(creation.roll_abilities().is_applied());

        let scores = creation.build().abilities();
        assert_eq!(scores.score(Ability::Strength), Some(15));
        assert_eq!(scores.score(Ability::Constitution), Some(17));
        assert_eq!(scores.score(Ability::Charisma), Some(13));
    }

    #[test]
    fn class_change_clears_ranks_but_reselecting_keeps_them() {
        let mut creation = creation(MockCharacterStorePort::new());
        fighter(&mut creation);
        assert!(creation.assign_skill_rank(SkillId::new(1), 1).is_applied());

        assert!(creation.select_class(ClassId::new(1)).is_applied());
        assert_eq!(creation.build().rank(SkillId::new(1)), 1);

        assert!(creation.select_class(ClassId::new(3)).is_applied());
        assert!(creation.build().skill_ranks().is_empty());
    }

    #[tokio::test]
    async fn save_posts_payload_and_resets_build() {
        let mut store = MockCharacterStorePort::new();
        store
            .expect_create()
            .withf(|payload: &NewCharacter| {
                payload.name == "Valeros"
                    && payload.character_class_id == Some(1)
                    && payload.race_id == Some(1)
                    && payload.stats.get("Strength") == Some(&16)
                    && payload.skills.get("1") == Some(&1)
                    && payload.weapons == vec!["Longsword".to_string()]
                    && payload.armor == vec!["Scale Mail".to_string()]
                    && payload.inventory_items == vec!["Backpack".to_string()]
            })
            .times(1)
            .returning(|payload| {
                Ok(CharacterRecord {
                    id: 10,
                    character: payload,
                    created_at: None,
                })
            });

        let mut creation = creation(store);
        fighter(&mut creation);
        assert!(creation.assign_skill_rank(SkillId::new(1), 1).is_applied());

        let record = creation.save().await.expect("saved");

        assert_eq!(record.id, 10);
        assert_eq!(creation.build(), &CharacterBuild::new());
    }

    #[tokio::test]
    async fn save_requires_name_and_class() {
        let mut store = MockCharacterStorePort::new();
        store.expect_create().never();
        let mut creation = creation(store);
        creation.set_name("Nameless Wanderer");

        let err = creation.save().await.expect_err("no class");

        assert!(matches!(err, CreationError::Domain(_)));
        assert_eq!(creation.build().name(), "Nameless Wanderer");
    }

    #[tokio::test]
    async fn failed_save_keeps_the_build() {
        let mut store = MockCharacterStorePort::new();
        store
            .expect_create()
            .returning(|_| Err(RepoError::network("create_character", "timeout")));
        let mut creation = creation(store);
        fighter(&mut creation);

        let err = creation.save().await.expect_err("store down");

        assert!(matches!(err, CreationError::Repo(_)));
        assert_eq!(creation.build().name(), "Valeros");
    }

    #[test]
    fn plan_reports_rejected_steps() {
        let plan = BuildPlan {
            steps: vec![
                BuildStep::Name {
                    name: "Merisiel".to_string(),
                },
                BuildStep::Class { class_id: 3 },
                BuildStep::AbilityScore {
                    ability: "int".to_string(),
                    score: 12,
                },
                BuildStep::SkillRank {
                    skill_id: 2,
                    rank: 2,
                },
                BuildStep::SkillRank {
                    skill_id: 2,
                    rank: 1,
                },
            ],
        };
        let mut creation = creation(MockCharacterStorePort::new());

        let rejected = creation.apply_plan(&plan).expect("plan runs");

        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].index, 3);
        assert_eq!(rejected[0].reason, "rank 2 exceeds character level 1");
        assert_eq!(creation.build().rank(SkillId::new(2)), 1);
        assert_eq!(creation.skill_pool().remaining, 8);
    }

    #[test]
    fn plan_with_unknown_ability_is_an_error() {
        let plan = BuildPlan {
            steps: vec![BuildStep::AbilityScore {
                ability: "Luck".to_string(),
                score: 18,
            }],
        };
        let mut creation = creation(MockCharacterStorePort::new());

        let err = creation.apply_plan(&plan).expect_err("bad ability");
        assert!(matches!(err, CreationError::Domain(_)));
    }

    #[test]
    fn empty_reference_data_still_derives_a_sheet() {
        let mut creation = CharacterCreation::new(
            Arc::new(ReferenceSnapshot::default().into_reference_data().value),
            Arc::new(RulesConfig::default()),
            Arc::new(MockCharacterStorePort::new()),
            Arc::new(FixedRandom(3)),
        );
        assert!(!creation.select_class(ClassId::new(1)).is_applied());
        let sheet = creation.sheet();
        assert!(sheet.combat.is_none());
        assert_eq!(sheet.skill_points.available, 0);
    }
}
