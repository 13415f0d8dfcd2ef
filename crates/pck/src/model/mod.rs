//! Data model types for PCK archives.
//!
//! This module contains the building blocks of an archive:
//! - Asset kinds (the frozen type tags)
//! - Properties (ordered string multimaps)
//! - Entries (named, typed payloads)
//! - Payload digests (content equality)

pub mod digest;
pub mod entry;
pub mod kind;
pub mod property;

pub use digest::{PayloadDigest, EMPTY_DIGEST};
pub use entry::{normalize_name, AssetEntry, Identity};
pub use kind::AssetKind;
pub use property::{Property, PropertyList};
