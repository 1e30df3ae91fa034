use crate::diagnostics::ResolveError;
use crate::limits::is_supported_category;

#[test]
fn test_unresolvable_container_message_names_everything() {
    let err = ResolveError::unresolvable_container("com.lib.R", "com.app.ui", Some(12345));
    let message = err.to_string();
    assert!(message.contains("com.lib.R"));
    assert!(message.contains("com.app.ui"));
    assert!(message.contains("12345"));
    assert_eq!(err.container(), "com.lib.R");
}

#[test]
fn test_unresolvable_container_without_id() {
    let err = ResolveError::unresolvable_container("com.lib.R", "com.app", None);
    assert!(err.to_string().ends_with("(resource id unknown)"));
}

#[test]
fn test_category_allow_list() {
    for name in [
        "array", "attr", "bool", "color", "dimen", "drawable", "id", "integer", "string", "layout",
    ] {
        assert!(is_supported_category(name), "{name} should be supported");
    }
    assert!(!is_supported_category("styleable"));
    assert!(!is_supported_category("raw"));
    assert!(!is_supported_category("Layout"));
}
