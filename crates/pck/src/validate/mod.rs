//! Whole-archive validation.
//!
//! The container itself tolerates duplicate identities and repeated property
//! keys. This module lets a consumer decide which of those it treats as
//! errors before handing the archive to a codec or exporter.

use std::collections::HashSet;

use crate::container::AssetContainer;
use crate::error::ValidationError;
use crate::limits::SINGLE_VALUED_KEYS;
use crate::model::AssetEntry;

/// Rules applied by [`validate_container`].
#[derive(Debug, Clone)]
pub struct ValidationRules {
    /// Property keys that may appear at most once per entry.
    single_valued: HashSet<String>,
    /// Whether two entries may share a `(name, kind)` identity.
    pub allow_duplicate_identities: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            single_valued: SINGLE_VALUED_KEYS.iter().map(|k| k.to_string()).collect(),
            allow_duplicate_identities: false,
        }
    }
}

impl ValidationRules {
    /// Rules with no single-valued keys and duplicates allowed.
    pub fn permissive() -> Self {
        Self {
            single_valued: HashSet::new(),
            allow_duplicate_identities: true,
        }
    }

    /// Registers a key that may appear at most once per entry.
    pub fn add_single_valued(&mut self, key: impl Into<String>) {
        self.single_valued.insert(key.into());
    }

    pub fn is_single_valued(&self, key: &str) -> bool {
        self.single_valued.contains(key)
    }
}

/// Validates every entry, then the container's identity uniqueness.
///
/// Entries are checked in archive order and the first violation is returned.
pub fn validate_container(
    container: &AssetContainer,
    rules: &ValidationRules,
) -> Result<(), ValidationError> {
    for entry in container.entries() {
        validate_entry(entry, rules)?;
    }

    if !rules.allow_duplicate_identities {
        if let Some((identity, count)) = container.duplicate_identities().into_iter().next() {
            return Err(ValidationError::DuplicateIdentity {
                name: identity.name,
                kind: identity.kind,
                count,
            });
        }
    }

    Ok(())
}

/// Checks that single-valued keys appear at most once on an entry.
pub fn validate_entry(entry: &AssetEntry, rules: &ValidationRules) -> Result<(), ValidationError> {
    for key in entry.properties().keys() {
        if !rules.is_single_valued(key) {
            continue;
        }
        let count = entry.properties().get_all(key).len();
        if count > 1 {
            return Err(ValidationError::DuplicatePropertyKey {
                entry: entry.name().to_string(),
                key: key.to_string(),
                count,
            });
        }
    }
    Ok(())
}
