//! Character sheet operation errors.

use crate::infrastructure::ports::RepoError;
use charforge_domain::{CharacterId, DomainError};

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// The stored record cannot be rebuilt (for example level 0)
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
