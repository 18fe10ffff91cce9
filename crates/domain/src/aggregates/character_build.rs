//! CharacterBuild aggregate - the working state of character creation
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: every change goes through a method
//! - **Immutable updates**: mutators consume `self` and return the next snapshot
//! - **Explicit reset**: switching class clears skill ranks inside `change_class`
//!
//! Spend limits (skill pool, feat slots) depend on reference data and live in
//! [`crate::rules`]; this type only guarantees its own shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{AlignmentId, ClassId, FeatId, RaceId, SkillId};
use crate::value_objects::{Ability, AbilityScores};

/// The character being built.
///
/// # Invariants
///
/// - `level >= 1`
/// - no skill entry has rank 0 (assigning 0 removes the entry)
/// - `feats` holds no duplicates and keeps selection order
///
/// # Example
///
/// ```
/// use charforge_domain::{Ability, CharacterBuild, ClassId};
///
/// let build = CharacterBuild::new()
///     .with_name("Valeros")
///     .change_class(ClassId::new(1))
///     .set_ability_score(Ability::Strength, 16);
///
/// assert_eq!(build.level(), 1);
/// assert_eq!(build.abilities().get(Ability::Strength), 16);
/// assert_eq!(build.abilities().get(Ability::Wisdom), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBuild {
    name: String,
    level: u8,
    class_id: Option<ClassId>,
    race_id: Option<RaceId>,
    alignment_id: Option<AlignmentId>,
    abilities: AbilityScores,
    skill_ranks: BTreeMap<SkillId, u8>,
    feats: Vec<FeatId>,
}

/// Raw fields of a build, used to restore one from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildParts {
    pub name: String,
    pub level: u8,
    pub class_id: Option<ClassId>,
    pub race_id: Option<RaceId>,
    pub alignment_id: Option<AlignmentId>,
    pub abilities: AbilityScores,
    pub skill_ranks: BTreeMap<SkillId, u8>,
    pub feats: Vec<FeatId>,
}

impl Default for CharacterBuild {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 1,
            class_id: None,
            race_id: None,
            alignment_id: None,
            abilities: AbilityScores::new(),
            skill_ranks: BTreeMap::new(),
            feats: Vec::new(),
        }
    }
}

impl CharacterBuild {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// An empty build: level 1, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a build from stored fields.
    ///
    /// Zero ranks are dropped and duplicate feats collapsed; a level of 0 is
    /// rejected.
    pub fn from_parts(parts: BuildParts) -> Result<Self, DomainError> {
        if parts.level == 0 {
            return Err(DomainError::validation("Character level must be at least 1"));
        }

        let mut feats = Vec::with_capacity(parts.feats.len());
        for feat in parts.feats {
            if !feats.contains(&feat) {
                feats.push(feat);
            }
        }

        Ok(Self {
            name: parts.name,
            level: parts.level,
            class_id: parts.class_id,
            race_id: parts.race_id,
            alignment_id: parts.alignment_id,
            abilities: parts.abilities,
            skill_ranks: parts
                .skill_ranks
                .into_iter()
                .filter(|(_, rank)| *rank > 0)
                .collect(),
            feats,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn class_id(&self) -> Option<ClassId> {
        self.class_id
    }

    #[inline]
    pub fn race_id(&self) -> Option<RaceId> {
        self.race_id
    }

    #[inline]
    pub fn alignment_id(&self) -> Option<AlignmentId> {
        self.alignment_id
    }

    #[inline]
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    #[inline]
    pub fn skill_ranks(&self) -> &BTreeMap<SkillId, u8> {
        &self.skill_ranks
    }

    #[inline]
    pub fn feats(&self) -> &[FeatId] {
        &self.feats
    }

    /// Rank in a skill, 0 when none assigned.
    pub fn rank(&self, skill_id: SkillId) -> u8 {
        self.skill_ranks.get(&skill_id).copied().unwrap_or(0)
    }

    pub fn has_feat(&self, feat_id: FeatId) -> bool {
        self.feats.contains(&feat_id)
    }

    /// Skill points currently invested across all skills.
    pub fn spent_skill_points(&self) -> i32 {
        self.skill_ranks.values().map(|rank| i32::from(*rank)).sum()
    }

    /// Skills whose rank exceeds the current level (possible after lowering it).
    pub fn ranks_over_cap(&self) -> Vec<SkillId> {
        self.skill_ranks
            .iter()
            .filter(|(_, rank)| **rank > self.level)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Whether the build carries what persistence requires: a name and a class.
    pub fn ensure_complete(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if self.class_id.is_none() {
            return Err(DomainError::validation("A class must be selected"));
        }
        Ok(())
    }

    // =========================================================================
    // Immutable updates
    // =========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_race(mut self, race_id: RaceId) -> Self {
        self.race_id = Some(race_id);
        self
    }

    pub fn with_alignment(mut self, alignment_id: AlignmentId) -> Self {
        self.alignment_id = Some(alignment_id);
        self
    }

    /// Select a class.
    ///
    /// Switching to a different class clears every assigned skill rank; the
    /// player re-spends the new class's pool. Re-selecting the current class
    /// keeps them.
    pub fn change_class(mut self, class_id: ClassId) -> Self {
        if self.class_id != Some(class_id) {
            self.skill_ranks.clear();
        }
        self.class_id = Some(class_id);
        self
    }

    /// Replace all ability scores at once (a fresh roll).
    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    /// Overwrite a single score. No clamping.
    pub fn set_ability_score(mut self, ability: Ability, value: i32) -> Self {
        self.abilities.set(ability, value);
        self
    }

    pub(crate) fn with_level(mut self, level: u8) -> Self {
        self.level = level.max(1);
        self
    }

    pub(crate) fn with_rank(mut self, skill_id: SkillId, rank: u8) -> Self {
        if rank == 0 {
            self.skill_ranks.remove(&skill_id);
        } else {
            self.skill_ranks.insert(skill_id, rank);
        }
        self
    }

    pub(crate) fn with_feat(mut self, feat_id: FeatId) -> Self {
        if !self.feats.contains(&feat_id) {
            self.feats.push(feat_id);
        }
        self
    }

    pub(crate) fn without_feat(mut self, feat_id: FeatId) -> Self {
        self.feats.retain(|f| *f != feat_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_build_starts_empty_at_level_one() {
        let build = CharacterBuild::new();
        assert_eq!(build.level(), 1);
        assert!(build.name().is_empty());
        assert!(build.class_id().is_none());
        assert!(build.race_id().is_none());
        assert!(build.abilities().is_empty());
        assert!(build.skill_ranks().is_empty());
        assert!(build.feats().is_empty());
    }

    #[test]
    fn changing_class_clears_ranks() {
        let build = CharacterBuild::new()
            .change_class(ClassId::new(1))
            .with_rank(SkillId::new(3), 1);

        let same = build.clone().change_class(ClassId::new(1));
        assert_eq!(same.rank(SkillId::new(3)), 1);

        let switched = build.change_class(ClassId::new(2));
        assert_eq!(switched.class_id(), Some(ClassId::new(2)));
        assert!(switched.skill_ranks().is_empty());
    }

    #[test]
    fn zero_rank_removes_the_entry() {
        let build = CharacterBuild::new()
            .with_rank(SkillId::new(1), 2)
            .with_rank(SkillId::new(1), 0);
        assert!(build.skill_ranks().is_empty());
        assert_eq!(build.spent_skill_points(), 0);
    }

    #[test]
    fn ability_edits_are_not_clamped() {
        let build = CharacterBuild::new()
            .set_ability_score(Ability::Strength, -4)
            .set_ability_score(Ability::Charisma, 45);
        assert_eq!(build.abilities().get(Ability::Strength), -4);
        assert_eq!(build.abilities().get(Ability::Charisma), 45);
    }

    #[test]
    fn from_parts_rejects_level_zero_and_normalizes() {
        let err = CharacterBuild::from_parts(BuildParts::default()).expect_err("level 0");
        assert!(matches!(err, DomainError::Validation(_)));

        let parts = BuildParts {
            name: "Seoni".into(),
            level: 2,
            skill_ranks: [(SkillId::new(1), 0), (SkillId::new(2), 2)]
                .into_iter()
                .collect(),
            feats: vec![FeatId::new(5), FeatId::new(5), FeatId::new(6)],
            ..Default::default()
        };
        let build = CharacterBuild::from_parts(parts).expect("valid parts");
        assert_eq!(build.skill_ranks().len(), 1);
        assert_eq!(build.feats(), &[FeatId::new(5), FeatId::new(6)]);
    }

    #[test]
    fn ensure_complete_needs_name_and_class() {
        let unnamed = CharacterBuild::new().change_class(ClassId::new(1));
        assert!(unnamed.ensure_complete().is_err());

        let classless = CharacterBuild::new().with_name("Kyra");
        assert!(classless.ensure_complete().is_err());

        let ready = classless.change_class(ClassId::new(1));
        assert!(ready.ensure_complete().is_ok());
    }

    #[test]
    fn ranks_over_cap_after_level_drop() {
        let build = CharacterBuild::new()
            .with_level(3)
            .with_rank(SkillId::new(1), 3)
            .with_rank(SkillId::new(2), 1)
            .with_level(2);
        assert_eq!(build.ranks_over_cap(), vec![SkillId::new(1)]);
    }
}
