//! Aggregates - state owned and mutated by a single workflow

pub mod character_build;

pub use character_build::{BuildParts, CharacterBuild};
