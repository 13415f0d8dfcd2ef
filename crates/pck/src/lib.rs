//! In-memory model of PCK game-asset archives.
//!
//! A PCK archive is an ordered list of packed files. Each file has a name,
//! an [`AssetKind`] tag, a byte payload and an ordered list of string
//! properties that may repeat keys. This crate provides:
//!
//! - [`PropertyList`]: the ordered property multimap (first match wins)
//! - [`AssetEntry`]: one packed file with content-based equality
//! - [`AssetContainer`]: the archive, with `(name, kind)` lookup that stays
//!   consistent when entries are renamed or retyped
//! - [`geometry::ModelDocument`]: the box-model tree stored in `models.bin`
//!
//! Reading and writing the binary format is left to a separate codec that
//! builds on these types.
//!
//! ```
//! use pck::{AssetContainer, AssetKind};
//!
//! let mut pck = AssetContainer::new(3);
//! let mut skin = pck.create_entry("skins\\0.png", AssetKind::Skin).unwrap();
//! skin.set_property("DISPLAYNAME", "Steve");
//! skin.rename("skins/base.png").unwrap();
//!
//! assert!(pck.has_entry("skins/base.png", AssetKind::Skin));
//! assert!(!pck.has_entry("skins/0.png", AssetKind::Skin));
//! ```

pub mod container;
pub mod error;
pub mod geometry;
pub mod limits;
pub mod model;
pub mod validate;

pub use container::{AssetContainer, ContainerConfig, DuplicatePolicy, EntryId, EntryMut};
pub use error::{PckError, Result, ValidationError};
pub use geometry::{ModelBox, ModelDocument, ModelPart, ModelPiece};
pub use model::{
    normalize_name, AssetEntry, AssetKind, Identity, PayloadDigest, Property, PropertyList,
    EMPTY_DIGEST,
};
pub use validate::{validate_container, validate_entry, ValidationRules};
