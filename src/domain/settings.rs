//! In-memory settings model: group -> key -> value.
//!
//! Names and values are raw bytes; nothing is decoded or re-encoded, so a
//! value that is never overridden is written back exactly as it was read.
//! Groups are kept in the order they were first stored. Keys within a group
//! are kept sorted so that repeated merges produce byte-identical output.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Group assigned to entries that appear before any `[group]` header.
pub const DEFAULT_GROUP: &str = "General";

/// Conflict resolution rule applied when a composite key is written twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverridePolicy {
    /// A later value replaces an earlier one (last file wins).
    #[default]
    LastWins,
    /// The first stored value is kept (first file wins).
    FirstWins,
}

impl OverridePolicy {
    /// Map the CLI `--no-override` switch onto a policy.
    pub fn from_no_override(no_override: bool) -> Self {
        if no_override {
            OverridePolicy::FirstWins
        } else {
            OverridePolicy::LastWins
        }
    }
}

/// Relative order in which non-General groups are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Order in which each group first received an entry.
    #[default]
    FirstSeen,
    /// Byte-wise ascending group name.
    Sorted,
}

/// One named group and its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: Vec<u8>,
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl Group {
    fn new(name: &[u8]) -> Self {
        Self { name: name.to_vec(), entries: BTreeMap::new() }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.entries.get(key.as_ref()).map(Vec::as_slice)
    }

    /// Key/value pairs in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The merged settings of one run.
///
/// At most one value is stored per `(group, key)`. A group is only present
/// once it holds at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    groups: Vec<Group>,
    index: HashMap<Vec<u8>, usize>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `(group, key)` subject to `policy`.
    ///
    /// Returns `true` when the value was stored, `false` when an existing
    /// value was kept because of [`OverridePolicy::FirstWins`].
    pub fn set(
        &mut self,
        group: impl AsRef<[u8]>,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
        policy: OverridePolicy,
    ) -> bool {
        let (group, key) = (group.as_ref(), key.as_ref());
        let idx = match self.index.get(group) {
            Some(&idx) => idx,
            None => {
                self.groups.push(Group::new(group));
                self.index.insert(group.to_vec(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        let entries = &mut self.groups[idx].entries;

        if policy == OverridePolicy::FirstWins && entries.contains_key(key) {
            return false;
        }
        entries.insert(key.to_vec(), value.as_ref().to_vec());
        true
    }

    pub fn get(&self, group: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.group(group).and_then(|g| g.get(key))
    }

    pub fn group(&self, name: impl AsRef<[u8]>) -> Option<&Group> {
        self.index.get(name.as_ref()).map(|&idx| &self.groups[idx])
    }

    /// Groups in first-seen order, including [`DEFAULT_GROUP`] if present.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Every `(group, key, value)` triple, group by group.
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8], &[u8])> {
        self.groups
            .iter()
            .flat_map(|g| g.entries().map(move |(k, v)| (g.name.as_slice(), k, v)))
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
