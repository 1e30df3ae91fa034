//! Population of the symbol table from a declaration container.
//!
//! `source` walks a syntax tree, `compiled` walks compiled elements. For the
//! same declarations both produce the same keys and symbolic names.

use resmap_common::is_supported_category;
use tracing::trace;

use crate::record::{IdentifierRecord, ScopedKey};
use crate::table::{PutOutcome, SymbolTable};

pub mod compiled;
pub mod source;

pub use compiled::extract_from_compiled;
pub use source::extract_from_source;

/// Counters for one container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Allow-listed category classes visited.
    pub categories: usize,
    pub inserted: usize,
    pub replaced: usize,
    /// Puts ignored because the key was sealed by an earlier pass or lookup.
    pub kept: usize,
    /// Fields in allow-listed categories without an integer constant.
    pub skipped_fields: usize,
}

impl ExtractStats {
    pub fn registered(&self) -> usize {
        self.inserted + self.replaced
    }
}

/// Writes into the table in both representations.
struct Registrar<'t> {
    table: &'t mut SymbolTable,
    container: &'t str,
    referencing_package: &'t str,
    stats: ExtractStats,
}

impl<'t> Registrar<'t> {
    fn new(table: &'t mut SymbolTable, container: &'t str, referencing_package: &'t str) -> Self {
        Self {
            table,
            container,
            referencing_package,
            stats: ExtractStats::default(),
        }
    }

    /// Whether a nested class named `name` is scanned.
    fn enter_category(&mut self, name: &str) -> bool {
        if is_supported_category(name) {
            self.stats.categories += 1;
            true
        } else {
            trace!(container = self.container, category = name, "category not in allow-list");
            false
        }
    }

    fn register(&mut self, category: &str, resource: &str, value: i32) {
        let key = ScopedKey::new(self.referencing_package, value);
        let record = IdentifierRecord::qualified(value, self.container, category, resource);
        match self.table.put(key, record) {
            PutOutcome::Inserted => self.stats.inserted += 1,
            PutOutcome::Replaced => self.stats.replaced += 1,
            PutOutcome::Kept => self.stats.kept += 1,
        }
    }

    fn skip_field(&mut self, category: &str, resource: &str) {
        trace!(
            container = self.container,
            category,
            field = resource,
            "field has no integer constant"
        );
        self.stats.skipped_fields += 1;
    }

    fn finish(self) -> ExtractStats {
        self.stats
    }
}
