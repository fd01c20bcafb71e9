use thiserror::Error;

use crate::model::CategoryError;
use crate::model::EntryError;
use crate::model::RotationError;
use crate::model::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Rotation(#[from] RotationError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
