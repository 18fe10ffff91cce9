//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Reference data (REST data service or an offline snapshot file)
//! - Character storage (REST data service or in memory)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{CharacterStorePort, ReferenceDataPort};
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use repos::{MockCharacterStorePort, MockReferenceDataPort};
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
