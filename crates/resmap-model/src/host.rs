//! Capabilities the resolver needs from the host build environment.
//!
//! The host has already parsed and attributed everything before a round
//! starts; none of these calls block or perform I/O.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::element::{ElementArena, ElementId};
use crate::syntax::{NodeIndex, SyntaxArena};
use crate::view::{CompiledView, ContainerView, SourceView};

/// Canonical name to container representation.
pub trait ElementLookup {
    /// A syntax tree when the container is declared in source, otherwise the
    /// compiled class, otherwise `None`. Never both for one name.
    fn container_view(&self, qualified_name: &str) -> Option<ContainerView<'_>>;
}

pub trait PackageQuery {
    /// Qualified name of the package enclosing `element`; empty for the
    /// unnamed package.
    fn package_of(&self, element: ElementId) -> &str;
}

pub trait AnnotationSource {
    /// Whether the environment can hand out syntax trees at all.
    fn supports_syntax_trees(&self) -> bool;

    /// Elements carrying `annotation`, in the order the host reports them.
    fn elements_annotated_with(&self, annotation: &str) -> Vec<ElementId>;

    /// The annotation usage's own tree on `element`. Absent when the element
    /// was read from a compiled class.
    fn annotation_tree(&self, element: ElementId, annotation: &str) -> Option<SourceView<'_>>;
}

pub trait BuildEnvironment: ElementLookup + PackageQuery + AnnotationSource {
    fn elements(&self) -> &ElementArena;
}

/// One parsed compilation unit inside an `InMemoryEnvironment`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(pub u32);

#[derive(Clone, Copy, Debug)]
struct TreeRef {
    unit: UnitId,
    node: NodeIndex,
}

#[derive(Clone, Debug)]
struct AnnotatedElement {
    element: ElementId,
    tree: Option<TreeRef>,
}

/// A fully materialized host environment.
#[derive(Debug)]
pub struct InMemoryEnvironment {
    elements: ElementArena,
    units: Vec<SyntaxArena>,
    sources: FxHashMap<String, TreeRef>,
    annotated: IndexMap<String, Vec<AnnotatedElement>>,
    syntax_trees: bool,
}

impl Default for InMemoryEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEnvironment {
    pub fn new() -> Self {
        Self {
            elements: ElementArena::new(),
            units: Vec::new(),
            sources: FxHashMap::default(),
            annotated: IndexMap::new(),
            syntax_trees: true,
        }
    }

    /// An environment whose compiler cannot produce syntax trees.
    pub fn without_syntax_trees() -> Self {
        Self {
            syntax_trees: false,
            ..Self::new()
        }
    }

    pub fn elements_mut(&mut self) -> &mut ElementArena {
        &mut self.elements
    }

    pub fn add_unit(&mut self, arena: SyntaxArena) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(arena);
        id
    }

    pub fn unit(&self, unit: UnitId) -> Option<&SyntaxArena> {
        self.units.get(unit.0 as usize)
    }

    /// Declares that the class `qualified_name` is available as source,
    /// rooted at `root` in `unit`.
    pub fn attach_source(&mut self, qualified_name: &str, unit: UnitId, root: NodeIndex) {
        self.sources
            .insert(qualified_name.to_string(), TreeRef { unit, node: root });
    }

    /// Records that `element` carries `annotation`, with the usage's tree if
    /// it was parsed from source.
    pub fn annotate(
        &mut self,
        element: ElementId,
        annotation: &str,
        tree: Option<(UnitId, NodeIndex)>,
    ) {
        self.annotated
            .entry(annotation.to_string())
            .or_default()
            .push(AnnotatedElement {
                element,
                tree: tree.map(|(unit, node)| TreeRef { unit, node }),
            });
    }

    fn source_view(&self, tree: TreeRef) -> Option<SourceView<'_>> {
        let arena = self.unit(tree.unit)?;
        Some(SourceView {
            arena,
            root: tree.node,
        })
    }
}

impl ElementLookup for InMemoryEnvironment {
    fn container_view(&self, qualified_name: &str) -> Option<ContainerView<'_>> {
        if self.syntax_trees
            && let Some(&tree) = self.sources.get(qualified_name)
            && let Some(view) = self.source_view(tree)
        {
            return Some(ContainerView::Source(view));
        }
        let class = self.elements.find_class(qualified_name)?;
        Some(ContainerView::Compiled(CompiledView {
            elements: &self.elements,
            class,
        }))
    }
}

impl PackageQuery for InMemoryEnvironment {
    fn package_of(&self, element: ElementId) -> &str {
        self.elements
            .package_of(element)
            .map(|pkg| self.elements.simple_name(pkg))
            .unwrap_or("")
    }
}

impl AnnotationSource for InMemoryEnvironment {
    fn supports_syntax_trees(&self) -> bool {
        self.syntax_trees
    }

    fn elements_annotated_with(&self, annotation: &str) -> Vec<ElementId> {
        let mut out: Vec<ElementId> = Vec::new();
        for usage in self.annotated.get(annotation).into_iter().flatten() {
            if !out.contains(&usage.element) {
                out.push(usage.element);
            }
        }
        out
    }

    fn annotation_tree(&self, element: ElementId, annotation: &str) -> Option<SourceView<'_>> {
        if !self.syntax_trees {
            return None;
        }
        let usage = self
            .annotated
            .get(annotation)?
            .iter()
            .find(|usage| usage.element == element)?;
        self.source_view(usage.tree?)
    }
}

impl BuildEnvironment for InMemoryEnvironment {
    fn elements(&self) -> &ElementArena {
        &self.elements
    }
}
