//! Skill Valuation.

use serde::Serialize;

use crate::aggregates::CharacterBuild;
use crate::entities::{governing_ability, CharacterClass, Skill, Stat};
use crate::ids::SkillId;
use crate::value_objects::{ability_modifier, Ability, DEFAULT_ABILITY_SCORE};

/// Flat bonus for a class skill with at least one rank.
pub const CLASS_SKILL_BONUS: i32 = 3;

/// `rank + ability modifier + class bonus`.
///
/// The ability comes from the skill's stat row; an unknown row reads a
/// score of 10. The class bonus needs at least one rank.
pub fn final_skill_value(
    skill: &Skill,
    build: &CharacterBuild,
    stats: &[Stat],
    class: Option<&CharacterClass>,
) -> i32 {
    let rank = i32::from(build.rank(skill.id));
    let stat_modifier = stat_modifier(skill, build, stats);
    let class_bonus = if rank >= 1 && is_class_skill(skill, class) {
        CLASS_SKILL_BONUS
    } else {
        0
    };
    rank + stat_modifier + class_bonus
}

fn stat_modifier(skill: &Skill, build: &CharacterBuild, stats: &[Stat]) -> i32 {
    let score = governing_ability(skill, stats)
        .map(|ability| build.abilities().get(ability))
        .unwrap_or(DEFAULT_ABILITY_SCORE);
    ability_modifier(score)
}

fn is_class_skill(skill: &Skill, class: Option<&CharacterClass>) -> bool {
    class.is_some_and(|c| c.is_class_skill(&skill.name))
}

/// One row of the skills table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub skill_id: SkillId,
    pub name: String,
    pub ability: Option<Ability>,
    pub rank: u8,
    pub ability_modifier: i32,
    pub class_skill: bool,
    pub total: i32,
}

/// A summary for every skill, in reference order.
pub fn skill_summaries(
    skills: &[Skill],
    build: &CharacterBuild,
    stats: &[Stat],
    class: Option<&CharacterClass>,
) -> Vec<SkillSummary> {
    skills
        .iter()
        .map(|skill| SkillSummary {
            skill_id: skill.id,
            name: skill.name.clone(),
            ability: governing_ability(skill, stats),
            rank: build.rank(skill.id),
            ability_modifier: stat_modifier(skill, build, stats),
            class_skill: is_class_skill(skill, class),
            total: final_skill_value(skill, build, stats, class),
        })
        .collect()
}
