//! The archive container.
//!
//! An [`AssetContainer`] owns its entries in archive order and keeps an
//! identity index (`(name, kind)` to entries) for lookups. Entries are moved
//! in by value, so an entry can be managed by at most one container at a
//! time; removing it hands ownership back.
//!
//! Identity changes on managed entries go through [`EntryMut`] (or the
//! handle-based [`AssetContainer::rename_entry`]/[`AssetContainer::retype_entry`]).
//! Each change runs in two phases inside a single `&mut` call: the container
//! is notified first and updates (or vetoes) its index, then the entry's field
//! is written. A lookup made right after `rename` returns sees the new name.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace, warn};

use crate::error::{PckError, Result};
use crate::limits::{DEFAULT_PCK_TYPE, XML_VERSION_KEY};
use crate::model::{AssetEntry, AssetKind, Identity, PropertyList};

static NEXT_CONTAINER_ID: AtomicU32 = AtomicU32::new(1);

/// Stable handle to an entry managed by a container.
///
/// Handles survive renames and reordering, and are only valid for the
/// container that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId {
    container: u32,
    serial: u32,
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container, self.serial)
    }
}

/// Whether the container accepts two entries with the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Duplicates are kept; lookups return the first in archive order.
    #[default]
    Allow,
    /// Creating, adding or renaming into an occupied identity fails.
    Reject,
}

/// Container settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Archive format tag, carried through for the codec.
    pub pck_type: i32,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            pck_type: DEFAULT_PCK_TYPE,
            duplicate_policy: DuplicatePolicy::Allow,
        }
    }
}

#[derive(Debug)]
struct Slot {
    id: EntryId,
    entry: AssetEntry,
}

/// An ordered collection of asset entries with identity lookup.
#[derive(Debug)]
pub struct AssetContainer {
    id: u32,
    config: ContainerConfig,
    entries: Vec<Slot>,
    /// Buckets are kept in archive order so the first element is the first match.
    index: HashMap<Identity, Vec<EntryId>>,
    /// Archive position of every managed entry.
    positions: HashMap<EntryId, usize>,
    next_serial: u32,
}

impl Default for AssetContainer {
    fn default() -> Self {
        Self::with_config(ContainerConfig::default())
    }
}

impl AssetContainer {
    /// Creates an empty, permissive container with the given format tag.
    pub fn new(pck_type: i32) -> Self {
        Self::with_config(ContainerConfig {
            pck_type,
            ..ContainerConfig::default()
        })
    }

    /// Creates an empty container with explicit settings.
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
            config,
            entries: Vec::new(),
            index: HashMap::new(),
            positions: HashMap::new(),
            next_serial: 0,
        }
    }

    /// Archive format tag.
    pub fn pck_type(&self) -> i32 {
        self.config.pck_type
    }

    /// Settings this container was built with.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // MEMBERSHIP
    // =========================================================================

    /// Creates an entry, appends it and returns it for population.
    pub fn create_entry(&mut self, name: &str, kind: AssetKind) -> Result<EntryMut<'_>> {
        let id = self.add_entry(AssetEntry::new(name, kind))?;
        let pos = self.entries.len() - 1;
        Ok(EntryMut {
            container: self,
            id,
            pos,
        })
    }

    /// Appends an entry, taking ownership of it.
    pub fn add_entry(&mut self, entry: AssetEntry) -> Result<EntryId> {
        let identity = entry.identity();
        self.check_vacant(&identity)?;

        let id = EntryId {
            container: self.id,
            serial: self.next_serial,
        };
        self.next_serial += 1;

        debug!(entry = %id, identity = %identity, "adding entry");
        self.index.entry(identity).or_default().push(id);
        self.positions.insert(id, self.entries.len());
        self.entries.push(Slot { id, entry });
        Ok(id)
    }

    /// Removes an entry and hands it back unmanaged.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<AssetEntry> {
        let pos = self.locate(id)?;
        let slot = self.entries.remove(pos);
        let identity = slot.entry.identity();
        self.unindex(&identity, id);
        self.positions.remove(&id);
        self.reposition_from(pos);

        debug!(entry = %id, identity = %identity, "removed entry");
        Ok(slot.entry)
    }

    /// Moves an entry to `to_index`, clamped to the last position.
    pub fn move_entry(&mut self, id: EntryId, to_index: usize) -> Result<()> {
        let from = self.locate(id)?;
        let to = to_index.min(self.entries.len() - 1);
        if from == to {
            return Ok(());
        }

        let slot = self.entries.remove(from);
        self.entries.insert(to, slot);
        self.reindex();

        debug!(entry = %id, from, to, "moved entry");
        Ok(())
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Returns true if an entry with this identity exists.
    pub fn has_entry(&self, name: &str, kind: AssetKind) -> bool {
        self.find_entry_id(name, kind).is_some()
    }

    /// Returns the first entry with this identity in archive order.
    pub fn find_entry(&self, name: &str, kind: AssetKind) -> Option<&AssetEntry> {
        self.try_find_entry(name, kind).map(|(_, entry)| entry)
    }

    /// Returns the handle of the first entry with this identity.
    pub fn find_entry_id(&self, name: &str, kind: AssetKind) -> Option<EntryId> {
        self.index
            .get(&Identity::new(name, kind))
            .and_then(|bucket| bucket.first().copied())
    }

    /// Returns the handle and entry of the first match.
    pub fn try_find_entry(
        &self,
        name: &str,
        kind: AssetKind,
    ) -> Option<(EntryId, &AssetEntry)> {
        let id = self.find_entry_id(name, kind)?;
        self.get(id).map(|entry| (id, entry))
    }

    /// Mutable access to the first entry with this identity.
    pub fn find_entry_mut(&mut self, name: &str, kind: AssetKind) -> Option<EntryMut<'_>> {
        let id = self.find_entry_id(name, kind)?;
        self.get_mut(id).ok()
    }

    /// Every entry with this identity, in archive order.
    pub fn find_all(&self, name: &str, kind: AssetKind) -> Vec<&AssetEntry> {
        self.index
            .get(&Identity::new(name, kind))
            .map(|bucket| bucket.iter().filter_map(|id| self.get(*id)).collect())
            .unwrap_or_default()
    }

    /// Returns the entry behind a handle, if this container holds it.
    pub fn get(&self, id: EntryId) -> Option<&AssetEntry> {
        let pos = self.locate(id).ok()?;
        Some(&self.entries[pos].entry)
    }

    /// Mutable access to the entry behind a handle.
    pub fn get_mut(&mut self, id: EntryId) -> Result<EntryMut<'_>> {
        let pos = self.locate(id)?;
        Ok(EntryMut {
            container: self,
            id,
            pos,
        })
    }

    /// Archive position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.locate(id).ok()
    }

    /// Handles and entries in archive order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &AssetEntry)> {
        self.entries.iter().map(|slot| (slot.id, &slot.entry))
    }

    /// Entries in archive order.
    pub fn entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter().map(|slot| &slot.entry)
    }

    /// Entries of one kind, in archive order.
    pub fn entries_of_kind(&self, kind: AssetKind) -> impl Iterator<Item = &AssetEntry> {
        self.entries().filter(move |entry| entry.kind() == kind)
    }

    /// Distinct property keys across every entry, in first-discovery order.
    pub fn list_all_property_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for entry in self.entries() {
            for property in entry.properties() {
                if !keys.contains(&property.key.as_str()) {
                    keys.push(&property.key);
                }
            }
        }
        keys
    }

    /// Identities held by more than one entry, with their counts.
    pub fn duplicate_identities(&self) -> Vec<(Identity, usize)> {
        let mut out: Vec<(Identity, usize)> = Vec::new();
        for slot in &self.entries {
            let identity = slot.entry.identity();
            let count = self.index.get(&identity).map_or(0, Vec::len);
            if count > 1 && !out.iter().any(|(seen, _)| *seen == identity) {
                out.push((identity, count));
            }
        }
        out
    }

    /// The archive's XML version, read from the first entry carrying it.
    pub fn xml_version(&self) -> Result<Option<i32>> {
        match self
            .entries()
            .find(|entry| entry.has_property(XML_VERSION_KEY))
        {
            Some(entry) => entry.get_property_parsed(XML_VERSION_KEY),
            None => Ok(None),
        }
    }

    // =========================================================================
    // IDENTITY CHANGES
    // =========================================================================

    /// Renames the entry behind `id`. See [`EntryMut::rename`].
    pub fn rename_entry(&mut self, id: EntryId, name: &str) -> Result<()> {
        self.get_mut(id)?.rename(name)
    }

    /// Changes the kind of the entry behind `id`. See [`EntryMut::retype`].
    pub fn retype_entry(&mut self, id: EntryId, kind: AssetKind) -> Result<()> {
        self.get_mut(id)?.retype(kind)
    }

    /// Notify-then-commit: updates the index, then writes the entry fields.
    fn change_identity(&mut self, id: EntryId, new: Identity) -> Result<()> {
        let pos = self.identity_changing(id, &new)?;
        self.entries[pos].entry.commit_identity(new);
        Ok(())
    }

    /// Moves `id` to the bucket for `new`, or vetoes the change.
    fn identity_changing(&mut self, id: EntryId, new: &Identity) -> Result<usize> {
        let pos = self.locate(id)?;
        let old = self.entries[pos].entry.identity();
        if old == *new {
            return Ok(pos);
        }
        self.check_vacant(new)?;

        trace!(entry = %id, from = %old, to = %new, "identity changing");
        self.unindex(&old, id);

        let bucket = self.index.get(new);
        let at = bucket.map_or(0, |bucket| {
            bucket.partition_point(|other| self.locate(*other).is_ok_and(|p| p < pos))
        });
        self.index.entry(new.clone()).or_default().insert(at, id);
        Ok(pos)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn check_vacant(&self, identity: &Identity) -> Result<()> {
        if !self.index.contains_key(identity) {
            return Ok(());
        }
        match self.config.duplicate_policy {
            DuplicatePolicy::Reject => Err(PckError::DuplicateIdentity {
                name: identity.name.clone(),
                kind: identity.kind,
            }),
            DuplicatePolicy::Allow => {
                warn!(identity = %identity, "container now holds a duplicate identity");
                Ok(())
            }
        }
    }

    fn locate(&self, id: EntryId) -> Result<usize> {
        if id.container != self.id {
            return Err(PckError::ForeignEntry {
                id,
                owner: id.container,
                container: self.id,
            });
        }
        self.positions
            .get(&id)
            .copied()
            .ok_or(PckError::UnknownEntry { id })
    }

    /// Refreshes recorded positions from `start` to the end.
    fn reposition_from(&mut self, start: usize) {
        for (pos, slot) in self.entries.iter().enumerate().skip(start) {
            self.positions.insert(slot.id, pos);
        }
    }

    fn unindex(&mut self, identity: &Identity, id: EntryId) {
        if let Some(bucket) = self.index.get_mut(identity) {
            bucket.retain(|other| *other != id);
            if bucket.is_empty() {
                self.index.remove(identity);
            }
        }
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.positions.clear();
        for (pos, slot) in self.entries.iter().enumerate() {
            self.positions.insert(slot.id, pos);
            self.index
                .entry(slot.entry.identity())
                .or_default()
                .push(slot.id);
        }
        trace!(entries = self.entries.len(), "rebuilt identity index");
    }
}

/// Mutable access to a managed entry.
///
/// Reads go through `Deref<Target = AssetEntry>`. Writes that touch identity
/// are routed through the owning container so its index stays consistent.
pub struct EntryMut<'a> {
    container: &'a mut AssetContainer,
    id: EntryId,
    pos: usize,
}

impl EntryMut<'_> {
    /// Handle of this entry.
    pub fn id(&self) -> EntryId {
        self.id
    }

    fn entry_mut(&mut self) -> &mut AssetEntry {
        &mut self.container.entries[self.pos].entry
    }

    /// Renames the entry, updating the container index first.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        let new = Identity::new(name, self.kind());
        self.container.change_identity(self.id, new)
    }

    /// Changes the entry's kind, updating the container index first.
    pub fn retype(&mut self, kind: AssetKind) -> Result<()> {
        let new = Identity {
            name: self.name().to_string(),
            kind,
        };
        self.container.change_identity(self.id, new)
    }

    /// Replaces the payload wholesale.
    pub fn set_payload(&mut self, payload: impl Into<Vec<u8>>) {
        self.entry_mut().set_payload(payload);
    }

    /// Takes the payload out, leaving it empty.
    pub fn take_payload(&mut self) -> Vec<u8> {
        self.entry_mut().take_payload()
    }

    /// Property list of this entry.
    pub fn properties_mut(&mut self) -> &mut PropertyList {
        self.entry_mut().properties_mut()
    }

    /// Replaces the whole property list.
    pub fn set_properties(&mut self, properties: PropertyList) {
        self.entry_mut().set_properties(properties);
    }

    /// Appends a property, keeping duplicates.
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entry_mut().add_property(key, value);
    }

    /// Upserts a property by key.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entry_mut().set_property(key, value);
    }
}

impl Deref for EntryMut<'_> {
    type Target = AssetEntry;

    fn deref(&self) -> &AssetEntry {
        &self.container.entries[self.pos].entry
    }
}

impl fmt::Debug for EntryMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryMut")
            .field("id", &self.id)
            .field("entry", &**self)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strict() -> AssetContainer {
        AssetContainer::with_config(ContainerConfig {
            duplicate_policy: DuplicatePolicy::Reject,
            ..ContainerConfig::default()
        })
    }

    #[test]
    fn test_create_then_find_returns_same_entry() {
        let mut pck = AssetContainer::new(3);
        let id = pck.create_entry("skins/0", AssetKind::Skin).unwrap().id();

        let (found, entry) = pck.try_find_entry("skins/0", AssetKind::Skin).unwrap();
        assert_eq!(found, id);
        assert_eq!(entry.name(), "skins/0");
        assert!(pck.find_entry("skins/0", AssetKind::Cape).is_none());
    }

    #[test]
    fn test_rename_updates_index() {
        let mut pck = AssetContainer::default();
        let mut entry = pck.create_entry("old", AssetKind::Texture).unwrap();
        let id = entry.id();
        entry.rename("new").unwrap();
        assert_eq!(entry.name(), "new");

        assert!(!pck.has_entry("old", AssetKind::Texture));
        assert_eq!(pck.find_entry_id("new", AssetKind::Texture), Some(id));
    }

    #[test]
    fn test_rename_normalizes() {
        let mut pck = AssetContainer::default();
        let id = pck.add_entry(AssetEntry::new("a", AssetKind::Texture)).unwrap();
        pck.rename_entry(id, "res\\terrain.png").unwrap();
        assert!(pck.has_entry("res/terrain.png", AssetKind::Texture));
        assert!(pck.has_entry("res\\terrain.png", AssetKind::Texture));
    }

    #[test]
    fn test_retype_updates_index() {
        let mut pck = AssetContainer::default();
        let id = pck.add_entry(AssetEntry::new("a.png", AssetKind::Skin)).unwrap();
        pck.retype_entry(id, AssetKind::Cape).unwrap();

        assert!(!pck.has_entry("a.png", AssetKind::Skin));
        assert_eq!(
            pck.find_entry("a.png", AssetKind::Cape).unwrap().kind(),
            AssetKind::Cape
        );
    }

    #[test]
    fn test_duplicates_first_match_in_archive_order() {
        let mut pck = AssetContainer::default();
        let mut first = AssetEntry::new("dup", AssetKind::Texture);
        first.set_payload(vec![1]);
        let mut second = AssetEntry::new("dup", AssetKind::Texture);
        second.set_payload(vec![2]);

        let first_id = pck.add_entry(first).unwrap();
        pck.add_entry(second).unwrap();

        assert_eq!(pck.find_entry_id("dup", AssetKind::Texture), Some(first_id));
        assert_eq!(pck.find_all("dup", AssetKind::Texture).len(), 2);
        assert_eq!(pck.duplicate_identities().len(), 1);
        assert_eq!(pck.duplicate_identities()[0].1, 2);
    }

    #[test]
    fn test_rename_into_duplicate_keeps_archive_order() {
        let mut pck = AssetContainer::default();
        let early = pck.add_entry(AssetEntry::new("early", AssetKind::Texture)).unwrap();
        let _late = pck.add_entry(AssetEntry::new("target", AssetKind::Texture)).unwrap();

        // `early` precedes `target` in the archive, so it becomes the first match.
        pck.rename_entry(early, "target").unwrap();
        assert_eq!(pck.find_entry_id("target", AssetKind::Texture), Some(early));
    }

    #[test]
    fn test_reject_policy() {
        let mut pck = strict();
        pck.create_entry("a", AssetKind::Audio).unwrap();
        let b = pck.create_entry("b", AssetKind::Audio).unwrap().id();

        assert!(matches!(
            pck.create_entry("a", AssetKind::Audio),
            Err(PckError::DuplicateIdentity { .. })
        ));
        assert!(matches!(
            pck.rename_entry(b, "a"),
            Err(PckError::DuplicateIdentity { .. })
        ));
        // Vetoed renames leave both the entry and the index untouched.
        assert_eq!(pck.get(b).unwrap().name(), "b");
        assert!(pck.has_entry("b", AssetKind::Audio));

        // Renaming to the current identity is not a conflict.
        pck.rename_entry(b, "b").unwrap();
        // Same name, different kind is a distinct identity.
        pck.create_entry("a", AssetKind::Localisation).unwrap();
    }

    #[test]
    fn test_reject_policy_vetoes_retype() {
        let mut pck = strict();
        pck.create_entry("a", AssetKind::Skin).unwrap();
        let mut cape = pck.create_entry("a", AssetKind::Cape).unwrap();

        let result = cape.retype(AssetKind::Skin);
        assert_eq!(
            result,
            Err(PckError::DuplicateIdentity {
                name: "a".to_string(),
                kind: AssetKind::Skin,
            })
        );
        assert_eq!(cape.kind(), AssetKind::Cape);
        let cape_id = cape.id();

        assert!(pck.has_entry("a", AssetKind::Cape));
        assert_eq!(pck.find_entry_id("a", AssetKind::Cape), Some(cape_id));
        assert_eq!(pck.find_all("a", AssetKind::Skin).len(), 1);
    }

    #[test]
    fn test_positions_follow_removal() {
        let mut pck = AssetContainer::default();
        let a = pck.add_entry(AssetEntry::new("a", AssetKind::Texture)).unwrap();
        let b = pck.add_entry(AssetEntry::new("b", AssetKind::Texture)).unwrap();
        let c = pck.add_entry(AssetEntry::new("c", AssetKind::Texture)).unwrap();

        pck.remove_entry(a).unwrap();
        assert_eq!(pck.position(a), None);
        assert_eq!(pck.position(b), Some(0));
        assert_eq!(pck.position(c), Some(1));
        assert_eq!(pck.get(c).unwrap().name(), "c");

        pck.rename_entry(c, "renamed").unwrap();
        assert_eq!(pck.get(c).unwrap().name(), "renamed");
        assert_eq!(pck.get(b).unwrap().name(), "b");
    }

    #[test]
    fn test_remove_entry_returns_unmanaged() {
        let mut pck = AssetContainer::default();
        let id = pck.add_entry(AssetEntry::new("x", AssetKind::Info)).unwrap();
        let mut entry = pck.remove_entry(id).unwrap();

        assert!(pck.is_empty());
        assert!(!pck.has_entry("x", AssetKind::Info));
        assert_eq!(pck.remove_entry(id), Err(PckError::UnknownEntry { id }));

        entry.rename("y");
        assert_eq!(entry.name(), "y");
        assert!(!pck.has_entry("y", AssetKind::Info));
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let mut a = AssetContainer::default();
        let mut b = AssetContainer::default();
        let id = a.add_entry(AssetEntry::new("x", AssetKind::Info)).unwrap();
        b.add_entry(AssetEntry::new("x", AssetKind::Info)).unwrap();

        assert!(matches!(b.rename_entry(id, "z"), Err(PckError::ForeignEntry { .. })));
        assert!(b.get(id).is_none());
        assert!(b.has_entry("x", AssetKind::Info));
    }

    #[test]
    fn test_move_entry_changes_first_match() {
        let mut pck = AssetContainer::default();
        let a = pck.add_entry(AssetEntry::new("dup", AssetKind::Texture)).unwrap();
        let b = pck.add_entry(AssetEntry::new("dup", AssetKind::Texture)).unwrap();
        pck.add_entry(AssetEntry::new("other", AssetKind::Texture)).unwrap();

        pck.move_entry(b, 0).unwrap();
        assert_eq!(pck.position(b), Some(0));
        assert_eq!(pck.position(a), Some(1));
        assert_eq!(pck.find_entry_id("dup", AssetKind::Texture), Some(b));

        pck.move_entry(b, 99).unwrap();
        assert_eq!(pck.position(b), Some(2));
        assert_eq!(pck.find_entry_id("dup", AssetKind::Texture), Some(a));
    }

    #[test]
    fn test_list_all_property_keys() {
        let mut pck = AssetContainer::default();
        let mut skin = pck.create_entry("skin.png", AssetKind::Skin).unwrap();
        skin.add_property("DISPLAYNAME", "Alex");
        skin.add_property("BOX", "HEAD 0 0 0 8 8 8 0 0");
        skin.add_property("BOX", "BODY 0 0 0 8 12 4 16 16");
        let mut info = pck.create_entry("0", AssetKind::Info).unwrap();
        info.add_property("PACKID", "1024");
        info.add_property("DISPLAYNAME", "Pack");

        assert_eq!(pck.list_all_property_keys(), vec!["DISPLAYNAME", "BOX", "PACKID"]);
    }

    #[test]
    fn test_xml_version() {
        let mut pck = AssetContainer::default();
        assert_eq!(pck.xml_version(), Ok(None));
        pck.create_entry("0", AssetKind::Info)
            .unwrap()
            .set_property(XML_VERSION_KEY, "3");
        assert_eq!(pck.xml_version(), Ok(Some(3)));
    }

    #[test]
    fn test_entries_of_kind_and_iteration_order() {
        let mut pck = AssetContainer::default();
        pck.create_entry("a.png", AssetKind::Skin).unwrap();
        pck.create_entry("b.png", AssetKind::Cape).unwrap();
        pck.create_entry("c.png", AssetKind::Skin).unwrap();

        let skins: Vec<_> = pck.entries_of_kind(AssetKind::Skin).map(|e| e.name()).collect();
        assert_eq!(skins, vec!["a.png", "c.png"]);
        let all: Vec<_> = pck.entries().map(|e| e.name()).collect();
        assert_eq!(all, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_payload_through_entry_mut() {
        let mut pck = AssetContainer::default();
        let id = pck.create_entry("audio.pck", AssetKind::Audio).unwrap().id();
        pck.get_mut(id).unwrap().set_payload(vec![9u8; 4]);
        assert_eq!(pck.get(id).unwrap().size(), 4);
        let taken = pck
            .find_entry_mut("audio.pck", AssetKind::Audio)
            .unwrap()
            .take_payload();
        assert_eq!(taken, vec![9u8; 4]);
    }

    proptest! {
        #[test]
        fn test_rename_consistency(
            old in "[a-z]{1,6}(/[a-z]{1,6}){0,2}",
            new in "[a-z]{1,6}(\\\\[a-z]{1,6}){0,2}",
            kind_idx in 0usize..15
        ) {
            prop_assume!(old != new.replace('\\', "/"));
            let kind = AssetKind::ALL[kind_idx];
            let mut pck = AssetContainer::default();
            pck.create_entry("unrelated", kind).unwrap();
            let id = pck.create_entry(&old, kind).unwrap().id();

            pck.rename_entry(id, &new).unwrap();
            prop_assert!(pck.find_entry(&old, kind).is_none());
            prop_assert_eq!(pck.find_entry_id(&new, kind), Some(id));
            prop_assert_eq!(pck.len(), 2);
        }
    }
}
