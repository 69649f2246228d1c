//! Local account errors.

use prost::DecodeError;
use thiserror::Error;

/// Wire codec error variants.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Bytes are not a well-formed tagged record.
    #[error("malformed input")]
    MalformedInput(#[source] DecodeError),
}

impl From<DecodeError> for CodecError {
    fn from(error: DecodeError) -> Self {
        Self::MalformedInput(error)
    }
}

/// Local account validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Username was empty.
    #[error("username is required")]
    MissingUsername,

    /// Username was not a valid login name.
    #[error("username is invalid")]
    InvalidUsername,

    /// SSH key was empty.
    #[error("ssh key is required")]
    MissingSshKey,

    /// SSH key was not a supported public key line.
    #[error("ssh key is invalid")]
    InvalidSshKey,
}
