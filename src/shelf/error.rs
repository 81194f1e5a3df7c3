use crate::model::{EntityKind, ItemKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("{kind} with ID {id} already exists")]
    DuplicateKey { kind: EntityKind, id: i32 },

    #[error("{kind} with ID {id} doesn't exist")]
    NotFound { kind: EntityKind, id: i32 },

    #[error("Item {id} is a {stored}, not a {requested}")]
    KindMismatch {
        id: i32,
        stored: ItemKind,
        requested: ItemKind,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("End of input")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Errors a menu action reports to the user before carrying on.
    ///
    /// Anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShelfError::DuplicateKey { .. }
                | ShelfError::NotFound { .. }
                | ShelfError::KindMismatch { .. }
                | ShelfError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
