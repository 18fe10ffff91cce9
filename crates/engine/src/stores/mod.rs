//! In-memory state storage modules.
//!
//! Stores keep state for runs without a data service:
//! - `InMemoryCharacterStore` - saved characters for offline runs and tests

pub mod character_store;

pub use character_store::InMemoryCharacterStore;
