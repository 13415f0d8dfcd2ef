//! A single packed file.
//!
//! An [`AssetEntry`] on its own is unmanaged: renaming it just rewrites the
//! field. Once moved into an [`AssetContainer`](crate::AssetContainer),
//! identity changes go through [`EntryMut`](crate::EntryMut) so the
//! container's index follows along.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::Result;
use crate::limits::{FOREIGN_PATH_SEPARATOR, PATH_SEPARATOR};
use crate::model::digest::PayloadDigest;
use crate::model::kind::AssetKind;
use crate::model::property::{Property, PropertyList};

/// Rewrites backslashes to the canonical `/` separator.
pub fn normalize_name(name: &str) -> String {
    name.replace(FOREIGN_PATH_SEPARATOR, &PATH_SEPARATOR.to_string())
}

/// The lookup key of an entry: its normalized name and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub name: String,
    pub kind: AssetKind,
}

impl Identity {
    /// Builds an identity, normalizing `name`.
    pub fn new(name: &str, kind: AssetKind) -> Self {
        Self {
            name: normalize_name(name),
            kind,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// One named, typed binary blob with its properties.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    name: String,
    kind: AssetKind,
    payload: Vec<u8>,
    properties: PropertyList,
}

impl AssetEntry {
    /// Creates an entry with an empty payload.
    pub fn new(name: &str, kind: AssetKind) -> Self {
        Self {
            name: normalize_name(name),
            kind,
            payload: Vec::new(),
            properties: PropertyList::new(),
        }
    }

    /// Creates an entry with a zero-filled payload of `size` bytes.
    pub fn with_size(name: &str, kind: AssetKind, size: usize) -> Self {
        let mut entry = Self::new(name, kind);
        entry.payload = vec![0u8; size];
        entry
    }

    /// Normalized entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset kind tag.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// The `(name, kind)` lookup key.
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            kind: self.kind,
        }
    }

    /// Renames an unmanaged entry.
    pub fn rename(&mut self, name: &str) {
        self.name = normalize_name(name);
    }

    /// Changes the kind of an unmanaged entry.
    pub fn retype(&mut self, kind: AssetKind) {
        self.kind = kind;
    }

    pub(crate) fn commit_identity(&mut self, identity: Identity) {
        self.name = identity.name;
        self.kind = identity.kind;
    }

    /// Payload bytes; empty if never set.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Replaces the payload wholesale.
    pub fn set_payload(&mut self, payload: impl Into<Vec<u8>>) {
        self.payload = payload.into();
    }

    /// Takes the payload out, leaving it empty.
    pub fn take_payload(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.payload)
    }

    /// Payload length in bytes.
    pub fn size(&self) -> usize {
        self.payload.len()
    }

    /// SHA-256 digest of the payload.
    pub fn digest(&self) -> PayloadDigest {
        PayloadDigest::of(&self.payload)
    }

    /// Property list of this entry.
    pub fn properties(&self) -> &PropertyList {
        &self.properties
    }

    /// Mutable property list of this entry.
    pub fn properties_mut(&mut self) -> &mut PropertyList {
        &mut self.properties
    }

    /// Replaces the whole property list.
    pub fn set_properties(&mut self, properties: PropertyList) {
        self.properties = properties;
    }

    /// Number of properties, duplicates included.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Appends a property, keeping duplicates.
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.add(key, value);
    }

    /// Upserts a property by key.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.set(key, value);
    }

    /// Value of the first property with this key.
    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// First property with this key.
    pub fn try_get_property(&self, key: &str) -> Option<&Property> {
        self.properties.first(key)
    }

    /// Every property with this key, in insertion order.
    pub fn get_properties(&self, key: &str) -> Vec<&Property> {
        self.properties.get_all(key)
    }

    /// Returns true if any property has this key.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains(key)
    }

    /// Removes the first property with this key.
    pub fn remove_property(&mut self, key: &str) -> Option<Property> {
        self.properties.remove(key)
    }

    /// Removes every property with this key.
    pub fn remove_properties(&mut self, key: &str) -> usize {
        self.properties.remove_all(key)
    }

    /// Removes every property.
    pub fn clear_properties(&mut self) {
        self.properties.clear();
    }

    /// Position of the first property equal to `property`.
    pub fn property_index(&self, property: &Property) -> Option<usize> {
        self.properties.index_of(property)
    }

    /// Overwrites the property at `index`. Returns false if out of range.
    pub fn set_property_at(&mut self, index: usize, property: Property) -> bool {
        self.properties.set_at(index, property)
    }

    /// See [`PropertyList::get_as`].
    pub fn get_property_as<T, E, F>(&self, key: &str, parse: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        self.properties.get_as(key, parse)
    }

    /// See [`PropertyList::get_parsed`].
    pub fn get_property_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.properties.get_parsed(key)
    }
}

/// Content equality: name, kind and payload digest.
///
/// Properties are not compared.
impl PartialEq for AssetEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.payload.len() == other.payload.len()
            && self.digest() == other.digest()
    }
}

impl Eq for AssetEntry {}

impl Hash for AssetEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.payload.len().hash(state);
        self.digest().hash(state);
    }
}
