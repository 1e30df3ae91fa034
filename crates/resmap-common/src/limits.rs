//! Fixed tables shared by discovery and extraction.

/// Nested class names of a declaration container whose fields are extracted.
///
/// Any other nested class (`styleable`, `raw`, `menu`, ...) contributes nothing.
pub const SUPPORTED_CATEGORIES: &[&str] = &[
    "array", "attr", "bool", "color", "dimen", "drawable", "id", "integer", "string", "layout",
];

/// Annotation types whose arguments are scanned for container references
/// when the configuration does not name its own.
pub const DEFAULT_ANNOTATIONS: &[&str] = &[
    "com.hannesdorfmann.annotatedadapter.annotation.ViewField",
    "com.hannesdorfmann.annotatedadapter.annotation.ViewType",
];

#[inline]
pub fn is_supported_category(name: &str) -> bool {
    SUPPORTED_CATEGORIES.contains(&name)
}
