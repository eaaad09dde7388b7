use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("snippet name is required")]
    EmptyName,

    #[error("snippet code is required")]
    EmptyCode,
}
