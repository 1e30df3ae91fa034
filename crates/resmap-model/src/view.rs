//! The two representations a declaration container can arrive in.

use crate::element::{ElementArena, ElementId};
use crate::syntax::{NodeIndex, SyntaxArena};

/// A container declared in the current unit: its class declaration node.
#[derive(Clone, Copy, Debug)]
pub struct SourceView<'a> {
    pub arena: &'a SyntaxArena,
    pub root: NodeIndex,
}

/// A container known only as a compiled class element.
#[derive(Clone, Copy, Debug)]
pub struct CompiledView<'a> {
    pub elements: &'a ElementArena,
    pub class: ElementId,
}

#[derive(Clone, Copy, Debug)]
pub enum ContainerView<'a> {
    Source(SourceView<'a>),
    Compiled(CompiledView<'a>),
}

impl ContainerView<'_> {
    pub fn is_source(&self) -> bool {
        matches!(self, ContainerView::Source(_))
    }
}
