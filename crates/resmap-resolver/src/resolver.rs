//! Resolver façade: one instance per build invocation.

use resmap_common::{ResolveError, ResolverConfig};
use resmap_model::{BuildEnvironment, ContainerView, ElementId, PackageQuery};
use tracing::{Level, debug, span};

use crate::discovery::{ContainerReferences, discover_containers};
use crate::extract::{ExtractStats, extract_from_compiled, extract_from_source};
use crate::record::{IdentifierRecord, ScopedKey};
use crate::table::SymbolTable;

/// What one `scan_for_containers` call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Discovery was skipped because the environment has no syntax trees.
    pub degraded: bool,
    pub containers_from_source: usize,
    pub containers_from_compiled: usize,
    pub fields: ExtractStats,
}

impl ScanSummary {
    pub fn containers(&self) -> usize {
        self.containers_from_source + self.containers_from_compiled
    }

    fn absorb(&mut self, from_source: bool, stats: ExtractStats) {
        if from_source {
            self.containers_from_source += 1;
        } else {
            self.containers_from_compiled += 1;
        }
        self.fields.categories += stats.categories;
        self.fields.inserted += stats.inserted;
        self.fields.replaced += stats.replaced;
        self.fields.kept += stats.kept;
        self.fields.skipped_fields += stats.skipped_fields;
    }
}

/// Maps numeric resource ids to symbolic names, scoped by referencing package.
///
/// Each round calls `scan_for_containers` and then `resolve` per id. Access is
/// single-threaded; wrap the resolver in a mutex to share it.
#[derive(Debug, Default)]
pub struct ResourceResolver {
    config: ResolverConfig,
    symbols: SymbolTable,
}

impl ResourceResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            symbols: SymbolTable::new(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Discovers the containers referenced by the configured annotations and
    /// extracts each one into the symbol table.
    ///
    /// Safe to call again in the same round: keys already present are kept.
    pub fn scan_for_containers<E>(&mut self, env: &E) -> Result<ScanSummary, ResolveError>
    where
        E: BuildEnvironment + ?Sized,
    {
        let _span = span!(Level::DEBUG, "scan_for_containers").entered();
        match discover_containers(env, &self.config.annotations) {
            Some(references) => self.scan_containers(env, &references),
            None => Ok(ScanSummary {
                degraded: true,
                ..ScanSummary::default()
            }),
        }
    }

    /// Extracts already-known containers as one pass. This is the entry point
    /// for hosts that find containers without syntax trees.
    ///
    /// Fails on the first container the environment cannot resolve.
    pub fn scan_containers<E>(
        &mut self,
        env: &E,
        references: &ContainerReferences,
    ) -> Result<ScanSummary, ResolveError>
    where
        E: BuildEnvironment + ?Sized,
    {
        self.symbols.begin_pass();
        let mut summary = ScanSummary::default();

        for (package, container, id) in references.iter() {
            let view = env
                .container_view(container)
                .ok_or_else(|| ResolveError::unresolvable_container(container, package, id))?;
            let from_source = view.is_source();
            let stats = match view {
                ContainerView::Source(view) => {
                    extract_from_source(view, container, package, &mut self.symbols)
                }
                ContainerView::Compiled(view) => {
                    extract_from_compiled(view, container, package, &mut self.symbols)
                }
            };
            debug!(
                package,
                container,
                from_source,
                registered = stats.registered(),
                kept = stats.kept,
                skipped = stats.skipped_fields,
                "container extracted"
            );
            summary.absorb(from_source, stats);
        }

        Ok(summary)
    }

    /// The record for `id` as used from `element`'s package.
    ///
    /// Expects `scan_for_containers` to have run this round. An id looked up
    /// before it was extracted stays unqualified for the resolver's lifetime.
    pub fn resolve<E>(&mut self, env: &E, element: ElementId, id: i32) -> IdentifierRecord
    where
        E: PackageQuery + ?Sized,
    {
        let key = ScopedKey::new(env.package_of(element), id);
        self.symbols.get_or_create(key).clone()
    }
}
