//! Reference data snapshot.
//!
//! Every collection the rules read, fetched once by the surrounding
//! application. Lookups return `Option`; a dangling id is never an error.

use serde::{Deserialize, Serialize};

use crate::entities::{
    Alignment, Armor, BabProgression, CasterType, CharacterClass, Feat, Race, Skill, Spell, Stat,
    Weapon,
};
use crate::ids::{AlignmentId, ClassId, FeatId, RaceId, SkillId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub races: Vec<Race>,
    pub classes: Vec<CharacterClass>,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
    pub feats: Vec<Feat>,
    pub spells: Vec<Spell>,
    pub caster_types: Vec<CasterType>,
    pub bab_progressions: Vec<BabProgression>,
    pub alignments: Vec<Alignment>,
    pub armor: Vec<Armor>,
    pub weapons: Vec<Weapon>,
}

impl ReferenceData {
    pub fn race(&self, id: RaceId) -> Option<&Race> {
        self.races.iter().find(|r| r.id == id)
    }

    pub fn class(&self, id: ClassId) -> Option<&CharacterClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn feat(&self, id: FeatId) -> Option<&Feat> {
        self.feats.iter().find(|f| f.id == id)
    }

    pub fn alignment(&self, id: AlignmentId) -> Option<&Alignment> {
        self.alignments.iter().find(|a| a.id == id)
    }

    pub fn bab_progression(&self, key: &str) -> Option<&BabProgression> {
        self.bab_progressions.iter().find(|p| p.matches(key))
    }

    pub fn armor_named(&self, name: &str) -> Option<&Armor> {
        self.armor
            .iter()
            .find(|a| a.name.trim().eq_ignore_ascii_case(name.trim()))
    }

    pub fn weapon_named(&self, name: &str) -> Option<&Weapon> {
        self.weapons
            .iter()
            .find(|w| w.name.trim().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ArmorId, WeaponId};

    #[test]
    fn lookups_return_none_for_dangling_ids() {
        let data = ReferenceData {
            races: vec![Race::new(RaceId::new(1), "Human")],
            ..Default::default()
        };
        assert_eq!(
            data.race(RaceId::new(1)).map(|r| r.name.as_str()),
            Some("Human")
        );
        assert!(data.race(RaceId::new(7)).is_none());
        assert!(data.class(ClassId::new(1)).is_none());
    }

    #[test]
    fn named_lookups_ignore_case_and_padding() {
        let data = ReferenceData {
            armor: vec![Armor::new(ArmorId::new(1), "Chain Shirt", 4)],
            weapons: vec![Weapon::new(WeaponId::new(1), "Longsword", "1d8")],
            bab_progressions: vec![BabProgression::new("Full").with_entry(1, 1)],
            ..Default::default()
        };
        assert!(data.armor_named("chain shirt").is_some());
        assert!(data.weapon_named(" LONGSWORD ").is_some());
        assert!(data.weapon_named("Greataxe").is_none());
        assert!(data.bab_progression("full").is_some());
    }
}
