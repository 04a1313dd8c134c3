//! Error kinds surfaced by configuration validation and grid access.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("cell ({x}, {z}) is outside the {width}x{length} grid")]
    OutOfRange { x: usize, z: usize, width: usize, length: usize },
}

impl DungeonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, DungeonError>;
