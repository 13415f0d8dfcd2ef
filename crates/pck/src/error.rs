//! Error types for PCK archive manipulation.
//!
//! Lookups never fail: a missing entry or property is reported as `None`.
//! The variants here cover misuse of container handles, policy vetoes and
//! caller-supplied parse failures.

use thiserror::Error;

use crate::container::EntryId;
use crate::model::AssetKind;

/// Errors raised while mutating or querying an archive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PckError {
    /// The handle does not refer to an entry of this container (it was removed).
    #[error("entry {id} is not present in this container")]
    UnknownEntry { id: EntryId },

    /// The handle was issued by another container.
    #[error("entry {id} belongs to container #{owner}, not container #{container}")]
    ForeignEntry {
        id: EntryId,
        owner: u32,
        container: u32,
    },

    /// The container rejects a second entry with the same identity.
    #[error("an entry named {name:?} of kind {kind} already exists")]
    DuplicateIdentity { name: String, kind: AssetKind },

    /// A property value could not be parsed by the caller's parse function.
    #[error("property {key:?} has unparseable value {value:?}: {reason}")]
    PropertyParse {
        key: String,
        value: String,
        reason: String,
    },

    /// An integer that does not name any asset kind.
    #[error("invalid asset kind: {value}")]
    InvalidAssetKind { value: u32 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors reported by whole-container validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{count} entries share the identity ({name:?}, {kind})")]
    DuplicateIdentity {
        name: String,
        kind: AssetKind,
        count: usize,
    },

    #[error("entry {entry:?} carries {count} values for single-valued property {key:?}")]
    DuplicatePropertyKey {
        entry: String,
        key: String,
        count: usize,
    },
}

/// Result alias for archive operations.
pub type Result<T> = std::result::Result<T, PckError>;
