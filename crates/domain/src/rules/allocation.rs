//! Resource Allocator: skill point pool, feat slots, and spend limits.
//!
//! Remaining points are always `available - sum(ranks)`, recomputed on read.
//! Lowering a rank therefore refunds exactly what it frees.

use serde::Serialize;

use super::config::RulesConfig;
use super::outcome::{RejectReason, Transition};
use crate::aggregates::CharacterBuild;
use crate::entities::CharacterClass;
use crate::ids::{FeatId, RaceId, SkillId};
use crate::value_objects::{Ability, AbilityScores};

/// `(class skill points + INT modifier) * level`; 0 without a class.
///
/// Very low Intelligence can make this negative. It is reported as-is.
pub fn available_skill_points(
    class: Option<&CharacterClass>,
    abilities: &AbilityScores,
    level: u8,
) -> i32 {
    match class {
        Some(class) => class
            .skill_points
            .saturating_add(abilities.modifier(Ability::Intelligence))
            .saturating_mul(i32::from(level)),
        None => 0,
    }
}

/// Base slots plus one for a bonus-feat race and one for a bonus-feat class.
pub fn available_feat_slots(
    class: Option<&CharacterClass>,
    race_id: Option<RaceId>,
    config: &RulesConfig,
) -> i32 {
    let race_bonus = race_id
        .filter(|id| config.race_grants_bonus_feat(*id))
        .map_or(0, |_| 1);
    let class_bonus = class
        .filter(|c| config.class_grants_bonus_feat(&c.name))
        .map_or(0, |_| 1);
    config.base_feat_slots + race_bonus + class_bonus
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillPool {
    pub available: i32,
    pub spent: i32,
    pub remaining: i32,
}

impl SkillPool {
    pub fn new(available: i32, build: &CharacterBuild) -> Self {
        let spent = build.spent_skill_points();
        Self {
            available,
            spent,
            remaining: available.saturating_sub(spent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatPool {
    pub available: i32,
    pub selected: i32,
    pub remaining: i32,
}

impl FeatPool {
    pub fn new(available: i32, build: &CharacterBuild) -> Self {
        let selected = i32::try_from(build.feats().len()).unwrap_or(i32::MAX);
        Self {
            available,
            selected,
            remaining: available.saturating_sub(selected),
        }
    }
}

/// Change the character level. Ranks are kept even if now over the cap.
pub fn set_level(build: CharacterBuild, level: u8) -> Transition {
    if level == 0 {
        return Transition::rejected(build, RejectReason::InvalidLevel);
    }
    Transition::applied(build.with_level(level))
}

/// Set a skill's rank to `rank`.
///
/// Rejected when `rank` exceeds the level, or when raising the rank would
/// spend more than `available`. Lowering is always allowed.
pub fn assign_skill_rank(
    build: CharacterBuild,
    skill_id: SkillId,
    rank: u8,
    available: i32,
) -> Transition {
    if rank > build.level() {
        let level = build.level();
        return Transition::rejected(build, RejectReason::RankAboveLevel { rank, level });
    }

    let current = build.rank(skill_id);
    if rank > current {
        let needed = i32::from(rank - current);
        let remaining = available.saturating_sub(build.spent_skill_points());
        if needed > remaining {
            return Transition::rejected(
                build,
                RejectReason::InsufficientSkillPoints { needed, remaining },
            );
        }
    }

    Transition::applied(build.with_rank(skill_id, rank))
}

/// Add a feat when a slot is free and it is not already chosen.
pub fn select_feat(build: CharacterBuild, feat_id: FeatId, available: i32) -> Transition {
    if build.has_feat(feat_id) {
        return Transition::rejected(build, RejectReason::FeatAlreadySelected);
    }
    if FeatPool::new(available, &build).remaining <= 0 {
        return Transition::rejected(build, RejectReason::NoFeatSlots);
    }
    Transition::applied(build.with_feat(feat_id))
}

/// Remove a feat. Removing one that is not selected changes nothing.
pub fn deselect_feat(build: CharacterBuild, feat_id: FeatId) -> Transition {
    Transition::applied(build.without_feat(feat_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ClassId;
    use crate::rules::outcome::Allocation;

    fn rogue() -> CharacterClass {
        CharacterClass::new(ClassId::new(4), "Rogue", 8, 2, "medium")
    }

    fn at_level(level: u8) -> CharacterBuild {
        set_level(CharacterBuild::new(), level).build
    }

    #[test]
    fn skill_points_scale_with_int_and_level() {
        let abilities = AbilityScores::new().with(Ability::Intelligence, 14);
        assert_eq!(available_skill_points(Some(&rogue()), &abilities, 3), 12);
    }

    #[test]
    fn skill_points_use_floor_modifier() {
        let abilities = AbilityScores::new().with(Ability::Intelligence, 9);
        assert_eq!(available_skill_points(Some(&rogue()), &abilities, 2), 2);
    }

    #[test]
    fn skill_points_saturate_on_extreme_records() {
        let mut class = rogue();
        class.skill_points = i32::MAX;
        let abilities = AbilityScores::new().with(Ability::Intelligence, 30);
        assert_eq!(available_skill_points(Some(&class), &abilities, 20), i32::MAX);

        class.skill_points = i32::MIN;
        let abilities = AbilityScores::new().with(Ability::Intelligence, 1);
        assert_eq!(available_skill_points(Some(&class), &abilities, 20), i32::MIN);
    }

    #[test]
    fn skill_points_are_zero_without_class() {
        let abilities = AbilityScores::new().with(Ability::Intelligence, 18);
        assert_eq!(available_skill_points(None, &abilities, 5), 0);
    }

    #[test]
    fn feat_slots_follow_race_and_class_table() {
        let config = RulesConfig::default();
        let fighter = CharacterClass::new(ClassId::new(1), "fighter", 10, 2, "full");
        let human = Some(RaceId::new(1));
        let elf = Some(RaceId::new(3));

        assert_eq!(available_feat_slots(Some(&rogue()), elf, &config), 1);
        assert_eq!(available_feat_slots(Some(&rogue()), human, &config), 2);
        assert_eq!(available_feat_slots(Some(&fighter), elf, &config), 2);
        assert_eq!(available_feat_slots(Some(&fighter), human, &config), 3);
        assert_eq!(available_feat_slots(None, None, &config), 1);
    }

    #[test]
    fn level_zero_is_rejected() {
        let t = set_level(CharacterBuild::new(), 0);
        assert_eq!(t.outcome, Allocation::Rejected(RejectReason::InvalidLevel));
        assert_eq!(t.build.level(), 1);
    }

    #[test]
    fn rank_above_level_leaves_build_unchanged() {
        let build = at_level(2);
        let t = assign_skill_rank(build.clone(), SkillId::new(1), 3, 20);
        assert_eq!(
            t.outcome,
            Allocation::Rejected(RejectReason::RankAboveLevel { rank: 3, level: 2 })
        );
        assert_eq!(t.build, build);
    }

    #[test]
    fn raise_beyond_pool_is_rejected() {
        let build = assign_skill_rank(at_level(3), SkillId::new(1), 3, 4).build;
        let t = assign_skill_rank(build.clone(), SkillId::new(2), 2, 4);
        assert_eq!(
            t.outcome,
            Allocation::Rejected(RejectReason::InsufficientSkillPoints {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(t.build, build);
    }

    #[test]
    fn lowering_a_rank_refunds_points() {
        let build = assign_skill_rank(at_level(3), SkillId::new(1), 3, 4).build;
        assert_eq!(SkillPool::new(4, &build).remaining, 1);

        let build = assign_skill_rank(build, SkillId::new(1), 1, 4).build;
        assert_eq!(SkillPool::new(4, &build).remaining, 3);

        let t = assign_skill_rank(build, SkillId::new(2), 3, 4);
        assert!(t.is_applied());
        assert_eq!(SkillPool::new(4, &t.build).remaining, 0);
    }

    #[test]
    fn lowering_is_allowed_with_an_overdrawn_pool() {
        let build = assign_skill_rank(at_level(2), SkillId::new(1), 2, 2).build;
        let t = assign_skill_rank(build, SkillId::new(1), 1, 0);
        assert!(t.is_applied());
        assert_eq!(t.build.rank(SkillId::new(1)), 1);
    }

    #[test]
    fn single_feat_slot_takes_one_pick() {
        let t = select_feat(CharacterBuild::new(), FeatId::new(10), 1);
        assert!(t.is_applied());
        assert_eq!(FeatPool::new(1, &t.build).remaining, 0);

        let after_a = t.build;
        let t = select_feat(after_a.clone(), FeatId::new(11), 1);
        assert_eq!(t.outcome, Allocation::Rejected(RejectReason::NoFeatSlots));
        assert_eq!(t.build, after_a);
    }

    #[test]
    fn duplicate_feat_is_rejected_and_deselect_frees_slot() {
        let build = select_feat(CharacterBuild::new(), FeatId::new(10), 2).build;
        let t = select_feat(build.clone(), FeatId::new(10), 2);
        assert_eq!(
            t.outcome,
            Allocation::Rejected(RejectReason::FeatAlreadySelected)
        );

        let build = deselect_feat(build, FeatId::new(10)).build;
        assert!(build.feats().is_empty());
        assert!(deselect_feat(build, FeatId::new(99)).is_applied());
    }

    #[test]
    fn lowering_level_keeps_ranks_and_overdraws() {
        let build = assign_skill_rank(at_level(3), SkillId::new(1), 3, 12).build;
        let t = set_level(build, 1);
        assert!(t.is_applied());
        assert_eq!(t.build.rank(SkillId::new(1)), 3);
        assert_eq!(t.build.ranks_over_cap(), vec![SkillId::new(1)]);
        assert_eq!(SkillPool::new(2, &t.build).remaining, -1);
    }
}
