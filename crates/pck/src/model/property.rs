//! Ordered string properties attached to an asset entry.
//!
//! A [`PropertyList`] is a multimap: keys may repeat, insertion order is
//! preserved, and single-value reads resolve to the first match.

use std::fmt;
use std::str::FromStr;

use crate::error::{PckError, Result};

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    /// Creates a key/value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Property {
    fn from((key, value): (K, V)) -> Self {
        Property::new(key, value)
    }
}

/// Ordered multimap of string properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropertyList {
    entries: Vec<Property>,
}

impl PropertyList {
    /// Creates an empty property list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Duplicate keys are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Property::new(key, value));
    }

    /// Returns the value of the first pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.first(key).map(|p| p.value.as_str())
    }

    /// Returns the first pair with this key.
    pub fn first(&self, key: &str) -> Option<&Property> {
        self.entries.iter().find(|p| p.key == key)
    }

    /// Returns every pair with this key in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&Property> {
        self.entries.iter().filter(|p| p.key == key).collect()
    }

    /// Returns true if more than one pair carries this key.
    pub fn has_duplicates(&self, key: &str) -> bool {
        self.entries.iter().filter(|p| p.key == key).nth(1).is_some()
    }

    /// Replaces the value of the first pair with this key in place,
    /// or appends a new pair if the key is absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.entries.iter_mut().find(|p| p.key == key) {
            existing.value = value;
            return;
        }
        self.entries.push(Property { key, value });
    }

    /// Removes the first pair with this key and returns it.
    pub fn remove(&mut self, key: &str) -> Option<Property> {
        let pos = self.entries.iter().position(|p| p.key == key)?;
        Some(self.entries.remove(pos))
    }

    /// Removes every pair with this key, returning how many were removed.
    pub fn remove_all(&mut self, key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.key != key);
        before - self.entries.len()
    }

    /// Removes the first pair equal to `property` (key and value).
    pub fn remove_pair(&mut self, property: &Property) -> bool {
        match self.index_of(property) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if any pair has this key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|p| p.key == key)
    }

    /// Distinct keys in first-occurrence order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for p in &self.entries {
            if !keys.contains(&p.key.as_str()) {
                keys.push(&p.key);
            }
        }
        keys
    }

    /// Position of the first pair equal to `property`.
    pub fn index_of(&self, property: &Property) -> Option<usize> {
        self.entries.iter().position(|p| p == property)
    }

    /// Overwrites the pair at `index`. Returns false if out of range.
    pub fn set_at(&mut self, index: usize, property: Property) -> bool {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = property;
                true
            }
            None => false,
        }
    }

    /// Reads the first value for `key` and hands it to `parse`.
    ///
    /// Returns `Ok(None)` when the key is absent and
    /// [`PckError::PropertyParse`] when `parse` rejects the value.
    pub fn get_as<T, E, F>(&self, key: &str, parse: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };
        parse(raw).map(Some).map_err(|e| PckError::PropertyParse {
            key: key.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parses the first value for `key` with its [`FromStr`] impl.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.get_as(key, str::parse::<T>)
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.entries
    }

    /// Number of pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<P: Into<Property>> FromIterator<P> for PropertyList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<Property>> Extend<P> for PropertyList {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
