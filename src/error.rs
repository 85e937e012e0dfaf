use thiserror::Error;

/// Domain failures the command layer tells apart when reporting to the user.
/// Carried inside `anyhow::Error` and recovered with `downcast_ref`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    #[error("not signed in (run `campus-circle login` or `campus-circle signup`)")]
    Unauthenticated,

    #[error("no listing with id {0}")]
    NotFound(String),

    #[error("listing {0} belongs to another student")]
    NotOwner(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl MarketError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        MarketError::InvalidInput(message.into())
    }
}
