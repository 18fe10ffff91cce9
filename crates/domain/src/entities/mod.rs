//! Domain entities - reference data delivered by the data service

mod alignment;
mod class;
mod equipment;
mod feat;
mod progression;
mod race;
mod skill;
mod spell;

pub use alignment::Alignment;
pub use class::{CasterProfile, CharacterClass, DEFAULT_CASTING_ABILITY};
pub use equipment::{Armor, ShopItem, Weapon};
pub use feat::Feat;
pub use progression::BabProgression;
pub use race::Race;
pub use skill::{governing_ability, Skill, Stat};
pub use spell::{CasterType, Spell, MAX_SPELL_LEVEL};
