//! CharForge domain: reference entities, the character build, and the rules
//! that derive a character sheet from it.
//!
//! Everything here is synchronous and free of I/O. Dice are injected as
//! closures; reference data is handed in by the caller.

pub mod aggregates;
pub mod character_sheet;
pub mod entities;
pub mod error;
pub mod ids;
pub mod reference;
pub mod rules;
pub mod value_objects;

pub use aggregates::{BuildParts, CharacterBuild};

pub use character_sheet::{AbilityLine, CharacterSheet, SelectedFeat, SheetIdentity};

pub use entities::{
    governing_ability, Alignment, Armor, BabProgression, CasterProfile, CasterType,
    CharacterClass, Feat, Race, ShopItem, Skill, Spell, Stat, Weapon, DEFAULT_CASTING_ABILITY,
    MAX_SPELL_LEVEL,
};

pub use error::DomainError;

pub use ids::{
    AlignmentId, ArmorId, CasterTypeId, CharacterId, ClassId, FeatId, RaceId, SkillId, SpellId,
    StatId, UserId, WeaponId,
};

pub use reference::ReferenceData;

pub use rules::{
    Allocation, CombatStats, FeatPool, KnownSpell, RejectReason, RolledAbility, RulesConfig,
    RulesEngine, SkillPool, SkillSummary, SpellcastingStats, StartingEquipment, Transition,
};

pub use value_objects::{
    ability_modifier, roll_four_drop_lowest, Ability, AbilityRoll, AbilityScores,
    DEFAULT_ABILITY_SCORE,
};
