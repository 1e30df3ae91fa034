//! Resolved identifiers and the keys they are memoized under.

use serde::Serialize;
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// One resource identifier as handed to the code generator.
///
/// Equality and hashing look only at the numeric value: at runtime these are
/// plain integers, so a qualified and an unqualified record for the same
/// value are interchangeable. No `Display`: callers choose between
/// `numeric_code` and `code`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierRecord {
    value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbolic_name: Option<String>,
}

impl IdentifierRecord {
    /// A record for an id no container declared.
    pub fn unqualified(value: i32) -> Self {
        Self {
            value,
            symbolic_name: None,
        }
    }

    /// `<container>.<category>.<resource>`
    pub fn qualified(value: i32, container: &str, category: &str, resource: &str) -> Self {
        Self {
            value,
            symbolic_name: Some(format!("{container}.{category}.{resource}")),
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn symbolic_name(&self) -> Option<&str> {
        self.symbolic_name.as_deref()
    }

    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.symbolic_name.is_some()
    }

    /// The raw value in decimal.
    pub fn numeric_code(&self) -> String {
        self.value.to_string()
    }

    /// The symbolic name when known, otherwise the decimal value.
    pub fn code(&self) -> Cow<'_, str> {
        match &self.symbolic_name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(self.numeric_code()),
        }
    }
}

impl PartialEq for IdentifierRecord {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for IdentifierRecord {}

impl Hash for IdentifierRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// (referencing package, numeric value).
///
/// The package is that of the code using the id, not of the container that
/// declares it: per-module containers routinely reuse values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopedKey {
    pub owning_package: String,
    pub value: i32,
}

impl ScopedKey {
    pub fn new(owning_package: impl Into<String>, value: i32) -> Self {
        Self {
            owning_package: owning_package.into(),
            value,
        }
    }
}
