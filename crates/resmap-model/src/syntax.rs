//! Syntax trees for declarations available as source.
//!
//! Nodes are stored in a `SyntaxArena` and addressed by `NodeIndex`; parents
//! hold the indices of their children, so trees are built bottom-up with the
//! `add_*` methods. References (`Select`, `Ident`) carry the element they were
//! attributed to by the host compiler, when it got that far.

use crate::element::ElementId;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

/// Declared type of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    Int,
    Long,
    Boolean,
    Named(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, TypeRef::Int)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Long,
    Str,
    Bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
    BitNot,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    BitOr,
    BitAnd,
    Shl,
    Shr,
}

#[derive(Clone, Debug)]
pub struct ClassDecl {
    pub name: String,
    /// Fields and nested classes in declaration order.
    pub members: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    /// `NodeIndex::NONE` when the field has no initializer.
    pub initializer: NodeIndex,
}

/// One annotation usage, `@Type(arg, name = arg)`.
#[derive(Clone, Debug)]
pub struct AnnotationUsage {
    pub type_name: String,
    pub arguments: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct Argument {
    pub name: Option<String>,
    pub value: NodeIndex,
}

/// `target.name`
#[derive(Clone, Debug)]
pub struct Select {
    pub target: NodeIndex,
    pub name: String,
    pub symbol: Option<ElementId>,
}

#[derive(Clone, Debug)]
pub struct Ident {
    pub name: String,
    pub symbol: Option<ElementId>,
}

#[derive(Clone, Debug)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Source text without quotes for strings.
    pub text: String,
}

#[derive(Clone, Debug)]
pub enum Node {
    Class(ClassDecl),
    Field(FieldDecl),
    Annotation(AnnotationUsage),
    Argument(Argument),
    Select(Select),
    Ident(Ident),
    Literal(Literal),
    Unary {
        op: UnaryOp,
        operand: NodeIndex,
    },
    Binary {
        op: BinaryOp,
        left: NodeIndex,
        right: NodeIndex,
    },
    ArrayInit(Vec<NodeIndex>),
}

impl Node {
    /// Direct children in source order.
    pub fn children(&self) -> SmallVec<[NodeIndex; 4]> {
        let mut out: SmallVec<[NodeIndex; 4]> = SmallVec::new();
        match self {
            Node::Class(class) => out.extend(class.members.iter().copied()),
            Node::Field(field) => out.push(field.initializer),
            Node::Annotation(annotation) => out.extend(annotation.arguments.iter().copied()),
            Node::Argument(argument) => out.push(argument.value),
            Node::Select(select) => out.push(select.target),
            Node::Unary { operand, .. } => out.push(*operand),
            Node::Binary { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            Node::ArrayInit(elements) => out.extend(elements.iter().copied()),
            Node::Ident(_) | Node::Literal(_) => {}
        }
        out.retain(|idx| idx.is_some());
        out
    }
}

#[derive(Clone, Debug, Default)]
pub struct SyntaxArena {
    nodes: Vec<Node>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    pub fn get_class(&self, idx: NodeIndex) -> Option<&ClassDecl> {
        match self.get(idx)? {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn get_field(&self, idx: NodeIndex) -> Option<&FieldDecl> {
        match self.get(idx)? {
            Node::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn get_annotation(&self, idx: NodeIndex) -> Option<&AnnotationUsage> {
        match self.get(idx)? {
            Node::Annotation(annotation) => Some(annotation),
            _ => None,
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    pub fn add_class(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(Node::Class(ClassDecl {
            name: name.to_string(),
            members,
        }))
    }

    pub fn add_field(&mut self, name: &str, ty: TypeRef, initializer: NodeIndex) -> NodeIndex {
        self.alloc(Node::Field(FieldDecl {
            name: name.to_string(),
            ty,
            initializer,
        }))
    }

    pub fn add_literal(&mut self, kind: LiteralKind, text: &str) -> NodeIndex {
        self.alloc(Node::Literal(Literal {
            kind,
            text: text.to_string(),
        }))
    }

    /// `int name = <text>;`
    pub fn add_int_field(&mut self, name: &str, literal_text: &str) -> NodeIndex {
        let init = self.add_literal(LiteralKind::Int, literal_text);
        self.add_field(name, TypeRef::Int, init)
    }

    pub fn add_ident(&mut self, name: &str, symbol: Option<ElementId>) -> NodeIndex {
        self.alloc(Node::Ident(Ident {
            name: name.to_string(),
            symbol,
        }))
    }

    pub fn add_select(
        &mut self,
        target: NodeIndex,
        name: &str,
        symbol: Option<ElementId>,
    ) -> NodeIndex {
        self.alloc(Node::Select(Select {
            target,
            name: name.to_string(),
            symbol,
        }))
    }

    pub fn add_unary(&mut self, op: UnaryOp, operand: NodeIndex) -> NodeIndex {
        self.alloc(Node::Unary { op, operand })
    }

    pub fn add_binary(&mut self, op: BinaryOp, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.alloc(Node::Binary { op, left, right })
    }

    pub fn add_array(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(Node::ArrayInit(elements))
    }

    pub fn add_argument(&mut self, name: Option<&str>, value: NodeIndex) -> NodeIndex {
        self.alloc(Node::Argument(Argument {
            name: name.map(str::to_string),
            value,
        }))
    }

    pub fn add_annotation(&mut self, type_name: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.alloc(Node::Annotation(AnnotationUsage {
            type_name: type_name.to_string(),
            arguments,
        }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    SkipChildren,
}

/// Pre-order traversal from `root`, children in declaration order.
///
/// Uses an explicit stack so deeply nested expressions cannot overflow the
/// call stack.
pub fn walk<F>(arena: &SyntaxArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(NodeIndex, &Node) -> WalkControl,
{
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        let Some(node) = arena.get(idx) else {
            continue;
        };
        if visit(idx, node) == WalkControl::SkipChildren {
            continue;
        }
        stack.extend(node.children().into_iter().rev());
    }
}
