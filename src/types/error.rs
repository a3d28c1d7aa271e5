//! Error types for the Reclink library.

use thiserror::Error;

/// All errors that can occur in the Reclink library.
#[derive(Error, Debug)]
pub enum ReclinkError {
    /// Raw object carries no `id` entry.
    #[error("Raw object has no 'id' entry")]
    MissingId,

    /// Record id is not a string.
    #[error("Record id must be a string, got {0}")]
    NonStringId(&'static str),

    /// Record id length out of the allowed 1-255 character range.
    #[error("Record id must be 1-255 characters, got length {0}")]
    IdLength(usize),

    /// Record id contains the reserved separator character.
    #[error("Record id {0:?} contains the reserved character '*'")]
    IdReservedChar(String),

    /// Record has no attribute with the requested name.
    #[error("Record {record_id:?} has no attribute {attribute:?}")]
    MissingAttribute {
        record_id: String,
        attribute: String,
    },

    /// A blocking-key extraction produced a non-string value.
    #[error("Blocking key for record {record_id:?} must be a string, got {found}")]
    NonStringKey {
        record_id: String,
        found: &'static str,
    },
}

/// Convenience result type for Reclink operations.
pub type ReclinkResult<T> = Result<T, ReclinkError>;
