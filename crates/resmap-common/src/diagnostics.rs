//! Resolution errors reported to the code generator's caller.

use std::fmt;

/// A fatal failure while resolving the declaration containers of a round.
///
/// Non-constant fields and references that do not point into a container are
/// not errors; they are skipped where they are found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// A container name was discovered but the host environment has neither
    /// a syntax tree nor a compiled class for it.
    UnresolvableContainer {
        /// Fully qualified container name as discovered.
        container: String,
        /// Package of the code that referenced the container.
        package: String,
        /// First resource id seen referencing the container, when the
        /// referenced member carried a constant.
        id: Option<i32>,
    },
}

impl ResolveError {
    pub fn unresolvable_container(
        container: impl Into<String>,
        package: impl Into<String>,
        id: Option<i32>,
    ) -> Self {
        ResolveError::UnresolvableContainer {
            container: container.into(),
            package: package.into(),
            id,
        }
    }

    /// The container name involved in the failure.
    pub fn container(&self) -> &str {
        match self {
            ResolveError::UnresolvableContainer { container, .. } => container,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvableContainer {
                container,
                package,
                id,
            } => {
                write!(
                    f,
                    "cannot resolve declaration container '{container}' \
                     referenced from package '{package}'"
                )?;
                match id {
                    Some(id) => write!(f, " (resource id {id})"),
                    None => write!(f, " (resource id unknown)"),
                }
            }
        }
    }
}

impl std::error::Error for ResolveError {}
