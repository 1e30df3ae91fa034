use resmap_model::SourceView;
use resmap_model::literals::literal_int_value;
use resmap_model::syntax::FieldDecl;
use tracing::debug;

use super::{ExtractStats, Registrar};
use crate::table::SymbolTable;

/// Registers every `int` field with a literal initializer declared directly
/// in an allow-listed nested class of the container tree `view`.
pub fn extract_from_source(
    view: SourceView<'_>,
    container: &str,
    referencing_package: &str,
    table: &mut SymbolTable,
) -> ExtractStats {
    let mut registrar = Registrar::new(table, container, referencing_package);
    let arena = view.arena;

    let Some(root) = arena.get_class(view.root) else {
        debug!(container, "container tree root is not a class declaration");
        return registrar.finish();
    };

    for &member in &root.members {
        let Some(category) = arena.get_class(member) else {
            continue;
        };
        if !registrar.enter_category(&category.name) {
            continue;
        }
        for &field_idx in &category.members {
            let Some(field) = arena.get_field(field_idx) else {
                continue;
            };
            match int_field_value(view, field) {
                Some(value) => registrar.register(&category.name, &field.name, value),
                None => registrar.skip_field(&category.name, &field.name),
            }
        }
    }

    registrar.finish()
}

fn int_field_value(view: SourceView<'_>, field: &FieldDecl) -> Option<i32> {
    if !field.ty.is_int() {
        return None;
    }
    literal_int_value(view.arena, field.initializer)
}
