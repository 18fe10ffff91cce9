//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area.
//! Use cases drive the domain rules engine through the infrastructure ports.

pub mod character_sheet;
pub mod creation;
pub mod reference;
pub mod shop;

// Re-export main types
pub use character_sheet::{CharacterSheetError, CharacterSheetUseCases, CharacterView};
pub use creation::{CharacterCreation, CreationError};
pub use reference::ReferenceDataService;
pub use shop::ShopUseCases;
