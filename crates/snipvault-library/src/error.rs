use snipvault_core::error::CoreError;
use snipvault_core::models::snippet::SnippetId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("snippet not found: {0}")]
    NotFound(SnippetId),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
