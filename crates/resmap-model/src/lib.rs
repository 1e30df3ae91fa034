//! Model of the host build environment handed to the resolver.
//!
//! Two representations of program declarations live here:
//! - `syntax` - arena-allocated syntax trees for declarations compiled in
//!   the current unit, plus a pre-order `walk`
//! - `element` - already-resolved compiled elements (prebuilt dependencies,
//!   and the symbols that syntax references resolve to)
//!
//! `view` wraps either one as a `ContainerView`, and `host` defines the
//! capability traits the resolver consumes together with an in-memory
//! implementation.

pub mod element;
pub use element::{ConstantValue, Element, ElementArena, ElementId, ElementKind};

pub mod syntax;
pub use syntax::{Node, NodeIndex, SyntaxArena, TypeRef, WalkControl, walk};

// Integer literal parsing and constant folding of initializers
pub mod literals;

pub mod view;
pub use view::{CompiledView, ContainerView, SourceView};

pub mod host;
pub use host::{
    AnnotationSource, BuildEnvironment, ElementLookup, InMemoryEnvironment, PackageQuery, UnitId,
};

#[cfg(test)]
#[path = "../tests/literal_tests.rs"]
mod literal_tests;
#[cfg(test)]
#[path = "../tests/element_tests.rs"]
mod element_tests;
#[cfg(test)]
#[path = "../tests/syntax_tests.rs"]
mod syntax_tests;
#[cfg(test)]
#[path = "../tests/host_tests.rs"]
mod host_tests;
