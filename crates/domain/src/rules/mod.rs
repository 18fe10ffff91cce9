//! The character build rules.
//!
//! Four stages read the same [`CharacterBuild`](crate::CharacterBuild):
//! ability scores, resource allocation, skill valuation, and derived combat
//! and spellcasting statistics. All of it is pure computation.

pub mod abilities;
pub mod allocation;
pub mod combat;
pub mod config;
pub mod engine;
pub mod equipment;
pub mod outcome;
pub mod skills;
pub mod spellcasting;

pub use abilities::{roll_abilities, roll_ability_scores, RolledAbility};
pub use allocation::{
    assign_skill_rank, available_feat_slots, available_skill_points, deselect_feat, select_feat,
    set_level, FeatPool, SkillPool,
};
pub use combat::{base_attack_bonus, combat_stats, CombatStats};
pub use config::{RulesConfig, HUMAN_RACE_ID};
pub use engine::RulesEngine;
pub use equipment::{starting_equipment, StartingEquipment};
pub use outcome::{Allocation, RejectReason, Transition};
pub use skills::{final_skill_value, skill_summaries, SkillSummary, CLASS_SKILL_BONUS};
pub use spellcasting::{known_spells, spellcasting, KnownSpell, SpellcastingStats};
