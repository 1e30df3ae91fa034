use crate::BuildEnvironment;
use crate::element::ConstantValue;
use crate::host::{AnnotationSource, ElementLookup, InMemoryEnvironment, PackageQuery};
use crate::syntax::SyntaxArena;
use crate::view::ContainerView;

const ANNOTATION: &str = "com.example.ViewField";

#[test]
fn test_container_view_prefers_source_tree() {
    let mut env = InMemoryEnvironment::new();
    let pkg = env.elements_mut().add_package("com.app");
    env.elements_mut().add_class(pkg, "R");
    let lib = env.elements_mut().add_package("com.lib");
    env.elements_mut().add_class(lib, "R");

    let mut arena = SyntaxArena::new();
    let root = arena.add_class("R", Vec::new());
    let unit = env.add_unit(arena);
    env.attach_source("com.app.R", unit, root);

    assert!(matches!(
        env.container_view("com.app.R"),
        Some(ContainerView::Source(view)) if view.root == root
    ));
    assert!(matches!(
        env.container_view("com.lib.R"),
        Some(ContainerView::Compiled(_))
    ));
    assert!(env.container_view("com.none.R").is_none());
}

#[test]
fn test_package_of_element() {
    let mut env = InMemoryEnvironment::new();
    let pkg = env.elements_mut().add_package("com.app.ui");
    let class = env.elements_mut().add_class(pkg, "Adapter");
    let field = env
        .elements_mut()
        .add_field(class, "HEADER", Some(ConstantValue::Int(1)));
    assert_eq!(env.package_of(field), "com.app.ui");
    assert_eq!(env.package_of(pkg), "com.app.ui");
    assert_eq!(env.elements().qualified_name(field), "com.app.ui.Adapter.HEADER");
}

#[test]
fn test_annotated_elements_and_trees() {
    let mut env = InMemoryEnvironment::new();
    let pkg = env.elements_mut().add_package("com.app");
    let class = env.elements_mut().add_class(pkg, "Adapter");
    let from_source = env.elements_mut().add_field(class, "title", None);
    let from_compiled = env.elements_mut().add_field(class, "icon", None);

    let mut arena = SyntaxArena::new();
    let usage = arena.add_annotation(ANNOTATION, Vec::new());
    let unit = env.add_unit(arena);
    env.annotate(from_source, ANNOTATION, Some((unit, usage)));
    env.annotate(from_compiled, ANNOTATION, None);
    env.annotate(from_source, ANNOTATION, Some((unit, usage)));

    assert_eq!(
        env.elements_annotated_with(ANNOTATION),
        vec![from_source, from_compiled]
    );
    assert!(env.elements_annotated_with("com.example.Other").is_empty());
    assert_eq!(
        env.annotation_tree(from_source, ANNOTATION).map(|v| v.root),
        Some(usage)
    );
    assert!(env.annotation_tree(from_compiled, ANNOTATION).is_none());
}

#[test]
fn test_environment_without_syntax_trees() {
    let mut env = InMemoryEnvironment::without_syntax_trees();
    let pkg = env.elements_mut().add_package("com.app");
    let r = env.elements_mut().add_class(pkg, "R");
    let mut arena = SyntaxArena::new();
    let root = arena.add_class("R", Vec::new());
    let usage = arena.add_annotation(ANNOTATION, Vec::new());
    let unit = env.add_unit(arena);
    env.attach_source("com.app.R", unit, root);
    env.annotate(r, ANNOTATION, Some((unit, usage)));

    assert!(!env.supports_syntax_trees());
    assert!(env.annotation_tree(r, ANNOTATION).is_none());
    assert!(matches!(
        env.container_view("com.app.R"),
        Some(ContainerView::Compiled(_))
    ));
}
