use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("deck has no cards")]
    EmptyDeck,
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    #[error("conflict: {0}")]
    Conflict(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
}
