use resmap_model::{CompiledView, ElementKind};
use tracing::debug;

use super::{ExtractStats, Registrar};
use crate::table::SymbolTable;

/// Registers every field holding an `int` constant in an allow-listed nested
/// class of the compiled container `view`.
pub fn extract_from_compiled(
    view: CompiledView<'_>,
    container: &str,
    referencing_package: &str,
    table: &mut SymbolTable,
) -> ExtractStats {
    let mut registrar = Registrar::new(table, container, referencing_package);
    let elements = view.elements;

    if elements.kind(view.class) != Some(ElementKind::Class) {
        debug!(container, "compiled container is not a class");
        return registrar.finish();
    }

    for &nested in elements.enclosed(view.class) {
        if elements.kind(nested) != Some(ElementKind::Class) {
            continue;
        }
        let category = elements.simple_name(nested);
        if !registrar.enter_category(category) {
            continue;
        }
        for &member in elements.enclosed(nested) {
            if elements.kind(member) != Some(ElementKind::Field) {
                continue;
            }
            let resource = elements.simple_name(member);
            match elements.int_constant(member) {
                Some(value) => registrar.register(category, resource, value),
                None => registrar.skip_field(category, resource),
            }
        }
    }

    registrar.finish()
}
