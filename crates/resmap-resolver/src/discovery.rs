//! Finds the declaration containers referenced from annotation arguments.
//!
//! A reference qualifies when its symbol sits two classes deep:
//! member -> category class -> root container (`R.layout.item_row`). The
//! container is recorded under the package of the *annotated* element,
//! which may differ from the container's own package.

use indexmap::IndexMap;
use resmap_model::{BuildEnvironment, ElementArena, ElementId, Node, SourceView, WalkControl, walk};
use tracing::{debug, trace, warn};

/// Referencing package -> container names, in discovery order.
///
/// Each pair remembers the first resource id seen referencing it, for
/// diagnostics.
#[derive(Clone, Debug, Default)]
pub struct ContainerReferences {
    by_package: IndexMap<String, IndexMap<String, Option<i32>>>,
}

impl ContainerReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `container` as referenced from `package`.
    pub fn insert(&mut self, package: &str, container: &str, id: Option<i32>) {
        let slot = self
            .by_package
            .entry(package.to_string())
            .or_default()
            .entry(container.to_string())
            .or_insert(None);
        if slot.is_none() {
            *slot = id;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_package.is_empty()
    }

    /// Number of (package, container) pairs.
    pub fn len(&self) -> usize {
        self.by_package.values().map(IndexMap::len).sum()
    }

    pub fn contains(&self, package: &str, container: &str) -> bool {
        self.by_package
            .get(package)
            .is_some_and(|containers| containers.contains_key(container))
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.by_package.keys().map(String::as_str)
    }

    pub fn containers_for<'a>(&'a self, package: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.by_package
            .get(package)
            .into_iter()
            .flat_map(|containers| containers.keys().map(String::as_str))
    }

    /// `(package, container, first id)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Option<i32>)> {
        self.by_package.iter().flat_map(|(package, containers)| {
            containers
                .iter()
                .map(move |(container, id)| (package.as_str(), container.as_str(), *id))
        })
    }
}

/// The root container a referenced member belongs to, if the member is
/// nested two classes deep.
pub fn container_of_member(elements: &ElementArena, symbol: ElementId) -> Option<ElementId> {
    let category = elements.enclosing(symbol)?;
    let outer = elements.enclosing(category)?;
    elements.enclosing_class(outer)
}

/// Scans the arguments of every usage of `annotations`.
///
/// Returns `None` when the environment cannot supply syntax trees; the caller
/// then has to hand containers to the resolver by other means.
pub fn discover_containers<E>(env: &E, annotations: &[String]) -> Option<ContainerReferences>
where
    E: BuildEnvironment + ?Sized,
{
    if !env.supports_syntax_trees() {
        warn!("syntax trees unavailable, skipping container discovery");
        return None;
    }

    let elements = env.elements();
    let mut references = ContainerReferences::new();
    for annotation in annotations {
        for element in env.elements_annotated_with(annotation) {
            let Some(view) = env.annotation_tree(element, annotation) else {
                // Element read from a compiled class.
                trace!(
                    annotation = %annotation,
                    element = element.0,
                    "no tree for annotation usage"
                );
                continue;
            };
            let package = env.package_of(element);
            collect_references(elements, view, package, &mut references);
        }
    }

    debug!(
        packages = references.by_package.len(),
        containers = references.len(),
        "container discovery finished"
    );
    Some(references)
}

fn collect_references(
    elements: &ElementArena,
    view: SourceView<'_>,
    package: &str,
    references: &mut ContainerReferences,
) {
    walk(view.arena, view.root, |_, node| {
        let symbol = match node {
            Node::Select(select) => select.symbol,
            Node::Ident(ident) => ident.symbol,
            _ => None,
        };
        if let Some(symbol) = symbol
            && let Some(container) = container_of_member(elements, symbol)
        {
            let container = elements.qualified_name(container);
            trace!(
                package,
                container = %container,
                member = elements.simple_name(symbol),
                "container reference"
            );
            references.insert(package, &container, elements.int_constant(symbol));
        }
        WalkControl::Continue
    });
}
