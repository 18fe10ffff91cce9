//! CharForge Shared - wire contracts
//!
//! This crate holds the types that cross a process boundary:
//! - Reference data records served by the REST data service
//! - The character save payload and stored character records
//! - Build plans and the response envelope used by the CLI
//!
//! # Design Principles
//!
//! 1. **No business logic** - records convert into domain entities and stop there
//! 2. **Raw ids on the wire** - typed ids appear only after conversion
//! 3. **Lenient input** - malformed entries are dropped and reported, never fatal

pub mod characters;
pub mod conversions;
pub mod records;
pub mod requests;
pub mod responses;

pub use characters::{CharacterRecord, CharacterSummary, NewCharacter};
pub use conversions::{
    ability_scores_from_names, bab_progression_from_record, class_from_record, race_from_record,
    ConversionError, Converted,
};
pub use records::{
    AlignmentRecord, ArmorRecord, BabProgressionRecord, CasterTypeRecord, ClassRecord,
    FeatRecord, ProgressionKey, RaceRecord, ReferenceSnapshot, ShopItemRecord, SkillRecord,
    SpellRecord, StatRecord, WeaponRecord,
};
pub use requests::{BuildPlan, BuildStep};
pub use responses::{ErrorCode, PlanReport, RejectedStep, ResponseResult};
