//! The memo of resolved identifiers for one resolver.
//!
//! Population and lookup are sequenced per round: extractors `put` during a
//! pass, then callers `get_or_create`. Entries that existed before the
//! current pass started are sealed and never replaced, which gives
//! last-writer-wins inside one pass and first-writer-wins across passes.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::record::{IdentifierRecord, ScopedKey};

#[derive(Clone, Debug)]
struct Slot {
    record: IdentifierRecord,
    sealed: bool,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<ScopedKey, Slot>,
}

/// Outcome of `SymbolTable::put`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    /// A record written earlier in the same pass was replaced.
    Replaced,
    /// The key was sealed; the table is unchanged.
    Kept,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &ScopedKey) -> Option<&IdentifierRecord> {
        self.entries.get(key).map(|slot| &slot.record)
    }

    /// Seals every existing entry; call before an extraction pass.
    pub fn begin_pass(&mut self) {
        for slot in self.entries.values_mut() {
            slot.sealed = true;
        }
    }

    /// Registers a record found by an extractor.
    pub fn put(&mut self, key: ScopedKey, record: IdentifierRecord) -> PutOutcome {
        match self.entries.get_mut(&key) {
            Some(slot) if slot.sealed => PutOutcome::Kept,
            Some(slot) => {
                trace!(
                    package = %key.owning_package,
                    value = key.value,
                    previous = ?slot.record.symbolic_name(),
                    next = ?record.symbolic_name(),
                    "replacing record written earlier in this pass"
                );
                slot.record = record;
                PutOutcome::Replaced
            }
            None => {
                self.entries.insert(
                    key,
                    Slot {
                        record,
                        sealed: false,
                    },
                );
                PutOutcome::Inserted
            }
        }
    }

    /// Returns the record for `key`, inserting an unqualified one when absent.
    /// The returned entry is sealed.
    pub fn get_or_create(&mut self, key: ScopedKey) -> &IdentifierRecord {
        let value = key.value;
        let slot = self.entries.entry(key).or_insert_with(|| Slot {
            record: IdentifierRecord::unqualified(value),
            sealed: true,
        });
        slot.sealed = true;
        &slot.record
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ScopedKey, &IdentifierRecord)> {
        self.entries.iter().map(|(key, slot)| (key, &slot.record))
    }
}
