//! Shared error types for the services crate.

use thiserror::Error;

use catalog::ImageError;
use guess_core::model::SessionError;

/// Errors emitted by `GameService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("no images found for category: {category}")]
    EmptyCategory { category: String },

    #[error("no session is running")]
    NotPlaying,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Image(#[from] ImageError),
}
