//! Resource id resolution.
//!
//! Annotations reference resources as integer constants. This crate maps
//! such a value back to `container.category.name` (for example
//! `com.app.R.layout.item_row`), keyed by the package of the referencing code
//! so per-module containers that reuse values stay apart.
//!
//! - `record` - `IdentifierRecord` and `ScopedKey`
//! - `table` - the memoizing `SymbolTable`
//! - `discovery` - containers referenced from annotation arguments
//! - `extract` - table population from syntax trees or compiled elements
//! - `resolver` - the `ResourceResolver` façade

pub mod record;
pub use record::{IdentifierRecord, ScopedKey};

pub mod table;
pub use table::{PutOutcome, SymbolTable};

pub mod discovery;
pub use discovery::{ContainerReferences, container_of_member, discover_containers};

pub mod extract;
pub use extract::{ExtractStats, extract_from_compiled, extract_from_source};

pub mod resolver;
pub use resolver::{ResourceResolver, ScanSummary};

pub use resmap_common::{ResolveError, ResolverConfig};

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;
#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod table_tests;
#[cfg(test)]
#[path = "../tests/discovery_tests.rs"]
mod discovery_tests;
#[cfg(test)]
#[path = "../tests/extract_tests.rs"]
mod extract_tests;
#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
