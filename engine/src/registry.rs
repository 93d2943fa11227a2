//! # Lock Registry
//!
//! The single source of truth for all lock state: an append-only arena of
//! [`LockRecord`]s with O(1) lookup by id and by hashlock. Records are
//! never deleted (resolution flips a flag, it does not reclaim the slot),
//! so the registry doubles as the complete audit history of every lock
//! ever created.
//!
//! The hashlock index is what enforces system-wide single-use of a
//! hashlock: as long as any record (Active, Withdrawn, or Refunded)
//! carries a hashlock, no new lock may reuse it.

use std::collections::HashMap;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::id::LockId;
use crate::record::LockRecord;

/// Append-only arena of lock records with id and hashlock indexes.
#[derive(Clone, Debug, Default)]
pub struct LockRegistry {
    arena: Vec<LockRecord>,
    by_id: HashMap<LockId, usize>,
    by_hashlock: HashMap<[u8; 32], LockId>,
}

impl LockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a record exists under this identifier.
    pub fn contains_id(&self, id: &LockId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns `true` if any record, resolved or not, uses this hashlock.
    pub fn contains_hashlock(&self, hashlock: &[u8; 32]) -> bool {
        self.by_hashlock.contains_key(hashlock)
    }

    /// Appends a record. The caller must have checked for id and hashlock
    /// collisions first; a duplicate here is a controller bug.
    pub fn insert(&mut self, record: LockRecord) {
        debug_assert!(!self.contains_id(&record.id));
        debug_assert!(!self.contains_hashlock(&record.hashlock));
        let slot = self.arena.len();
        self.by_id.insert(record.id, slot);
        self.by_hashlock.insert(record.hashlock, record.id);
        self.arena.push(record);
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: &LockId) -> Option<&LockRecord> {
        self.by_id.get(id).map(|slot| &self.arena[*slot])
    }

    /// Looks up a record by identifier for mutation.
    pub fn get_mut(&mut self, id: &LockId) -> Option<&mut LockRecord> {
        self.by_id.get(id).map(|slot| &mut self.arena[*slot])
    }

    /// Looks up a record by its hashlock.
    pub fn get_by_hashlock(&self, hashlock: &[u8; 32]) -> Option<&LockRecord> {
        self.by_hashlock.get(hashlock).and_then(|id| self.get(id))
    }

    /// Returns how many locks have ever been created.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no lock has ever been created.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Rebuilds a registry from records in creation order. Used by serde;
    /// the indexes are derived state and are not persisted.
    fn from_records(records: Vec<LockRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.insert(record);
        }
        registry
    }
}

// Only the arena is durable; both indexes are rebuilt on load.
impl Serialize for LockRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.arena.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LockRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<LockRecord>::deserialize(deserializer)?;
        Ok(Self::from_records(records))
    }
}
