//! Character creation errors.

use crate::infrastructure::ports::RepoError;
use charforge_domain::DomainError;

/// Errors that can occur while creating a character.
///
/// Rule violations (a rank above level, no feat slots left) are not errors;
/// they come back as a rejected allocation.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
