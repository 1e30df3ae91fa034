//! One full build round through the public API.


use fixtures::*;
use resmap_model::{InMemoryEnvironment, SyntaxArena};
use resmap_resolver::{ResolverConfig, ResourceResolver};

#[test]
fn test_layout_reference_resolves_to_container_name() {
    resmap_common::tracing_config::init_tracing();

    // package com.app; public final class R {
    //     public static final class layout { public static final int item_row = 12345; }
    // }
    let mut env = InMemoryEnvironment::new();
    let r = declare_source(&mut env, "com.app", "R", &[("layout", &[("item_row", 12345)])]);
    let item_row = resource(&env, r, "layout", "item_row");

    // package com.app.ui; class Adapter { @ViewType(layout = R.layout.item_row) int row; }
    let element = program_field(&mut env, "com.app.ui", "Adapter", "row");
    annotate_with_reference(&mut env, element, VIEW_TYPE, item_row);

    let mut resolver = ResourceResolver::new(ResolverConfig::default());
    let summary = resolver.scan_for_containers(&env).unwrap();
    assert_eq!(summary.containers(), 1);

    let record = resolver.resolve(&env, element, 12345);
    assert_eq!(record.value(), 12345);
    assert_eq!(record.symbolic_name(), Some("com.app.R.layout.item_row"));
    assert_eq!(record.code(), "com.app.R.layout.item_row");
    assert_eq!(record.numeric_code(), "12345");
}

#[test]
fn test_library_containers_across_modules() {
    let mut env = InMemoryEnvironment::new();
    // App module compiled from source, library module prebuilt.
    let app_r = declare_source(
        &mut env,
        "com.app",
        "R",
        &[("layout", &[("main", 0x7f0b_0001)]), ("string", &[("app_name", 0x7f0f_0001)])],
    );
    let lib_r = declare_compiled(
        &mut env,
        "com.lib",
        "R",
        &[("layout", &[("lib_row", 0x7f0b_0001)]), ("color", &[("accent", 0x7f05_0001)])],
    );
    let main = resource(&env, app_r, "layout", "main");
    let lib_row = resource(&env, lib_r, "layout", "lib_row");
    let accent = resource(&env, lib_r, "color", "accent");

    let app_element = program_field(&mut env, "com.app", "MainAdapter", "main");
    let lib_element = program_field(&mut env, "com.lib", "LibAdapter", "row");
    let lib_color = program_field(&mut env, "com.lib", "LibAdapter", "tint");
    annotate_with_reference(&mut env, app_element, VIEW_TYPE, main);
    annotate_with_reference(&mut env, lib_element, VIEW_TYPE, lib_row);
    annotate_with_reference(&mut env, lib_color, VIEW_FIELD, accent);

    let mut resolver = ResourceResolver::default();
    let summary = resolver.scan_for_containers(&env).unwrap();
    assert_eq!(summary.containers_from_source, 1);
    assert_eq!(summary.containers_from_compiled, 1);

    assert_eq!(
        resolver.resolve(&env, app_element, 0x7f0b_0001).symbolic_name(),
        Some("com.app.R.layout.main")
    );
    assert_eq!(
        resolver.resolve(&env, lib_element, 0x7f0b_0001).symbolic_name(),
        Some("com.lib.R.layout.lib_row")
    );
    assert_eq!(
        resolver.resolve(&env, lib_color, 0x7f05_0001).symbolic_name(),
        Some("com.lib.R.color.accent")
    );
    // The app package never referenced the library container.
    assert!(!resolver.resolve(&env, app_element, 0x7f05_0001).is_qualified());
}

#[test]
fn test_nested_field_annotation_resolves() {
    let mut env = InMemoryEnvironment::new();
    let r = declare_source(&mut env, "com.app", "R", &[("id", &[("title", 0x7f08_0001)])]);
    let title = resource(&env, r, "id", "title");

    // class Adapter { @ViewType(views = { @ViewField(id = R.id.title) }) int row; }
    let element = program_field(&mut env, "com.app.ui", "Adapter", "row");
    let mut arena = SyntaxArena::new();
    let title_ref = reference_expr(&env, &mut arena, title);
    let id_arg = arena.add_argument(Some("id"), title_ref);
    let inner = arena.add_annotation(VIEW_FIELD, vec![id_arg]);
    let views = arena.add_array(vec![inner]);
    let views_arg = arena.add_argument(Some("views"), views);
    let usage = arena.add_annotation(VIEW_TYPE, vec![views_arg]);
    let unit = env.add_unit(arena);
    env.annotate(element, VIEW_TYPE, Some((unit, usage)));

    let mut resolver = ResourceResolver::default();
    let summary = resolver.scan_for_containers(&env).unwrap();
    assert_eq!(summary.containers(), 1);
    assert_eq!(
        resolver.resolve(&env, element, 0x7f08_0001).symbolic_name(),
        Some("com.app.R.id.title")
    );
}
