//! Skill entity and the stat table that ties skills to abilities.

use serde::{Deserialize, Serialize};

use crate::ids::{SkillId, StatId};
use crate::value_objects::Ability;

/// A skill characters can invest ranks in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Stat row whose ability governs this skill
    pub modifying_stat_id: StatId,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>, modifying_stat_id: StatId) -> Self {
        Self {
            id,
            name: name.into(),
            modifying_stat_id,
        }
    }
}

/// A row of the stat table.
///
/// `ability` is `None` when the stored name is not one of the six abilities;
/// skills governed by such a row read a score of 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: StatId,
    pub name: String,
    pub ability: Option<Ability>,
}

impl Stat {
    pub fn new(id: StatId, name: impl Into<String>) -> Self {
        let name = name.into();
        let ability = name.parse().ok();
        Self { id, name, ability }
    }
}

/// Resolve the ability governing a skill through the stat table.
pub fn governing_ability(skill: &Skill, stats: &[Stat]) -> Option<Ability> {
    stats
        .iter()
        .find(|stat| stat.id == skill.modifying_stat_id)
        .and_then(|stat| stat.ability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_rows_parse_ability_names() {
        assert_eq!(
            Stat::new(StatId::new(1), "Strength").ability,
            Some(Ability::Strength)
        );
        assert_eq!(Stat::new(StatId::new(9), "Luck").ability, None);
    }

    #[test]
    fn governing_ability_follows_the_stat_id() {
        let stats = vec![
            Stat::new(StatId::new(1), "Strength"),
            Stat::new(StatId::new(4), "Intelligence"),
        ];
        let appraise = Skill::new(SkillId::new(2), "Appraise", StatId::new(4));
        let orphan = Skill::new(SkillId::new(3), "Orphan", StatId::new(99));
        assert_eq!(
            governing_ability(&appraise, &stats),
            Some(Ability::Intelligence)
        );
        assert_eq!(governing_ability(&orphan, &stats), None);
    }
}
