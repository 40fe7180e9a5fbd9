//! Node representation consumed by the classifier.
//!
//! The parser builds every node in the same shape: a [`Tag`], a span,
//! an optional scalar payload and an ordered list of children. Typed
//! views over that shape live in [`node`].

use std::rc::Rc;

use crate::span::Span;

pub mod kind;
pub mod node;

mod debug;

pub use kind::{Kind, KindSet, Tag};
pub use node::{FromNode, ListOf, NodeType};

pub type PNode = Rc<Node>;

pub struct Node {
    tag: Tag,
    span: Span,
    value: Value,
    children: Vec<PNode>,
}

/// Scalar payload of a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    /// Identifier name.
    Name(Rc<str>),
    /// String literal contents, quotes removed.
    Str(Rc<str>),
    Int(u64),
    Real(f64),
    Op(Op),
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    IntDiv,
    Mod,
    And,
    Or,
    Not,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
}

impl Node {
    /// General constructor. Prefer the variant-specific ones below.
    pub fn new(tag: Tag, span: Span, value: Value, children: Vec<PNode>) -> PNode {
        Rc::new(Node {
            tag,
            span,
            value,
            children,
        })
    }

    /// A node carrying nothing but its kind.
    pub fn leaf(kind: Kind, span: Span) -> PNode {
        Node::new(Tag::of(kind), span, Value::None, Vec::new())
    }

    /// A node of `kind` with the given children. Its span covers theirs.
    pub fn branch(kind: Kind, children: Vec<PNode>) -> PNode {
        Node::with_children(Tag::of(kind), children)
    }

    pub(crate) fn with_children(tag: Tag, children: Vec<PNode>) -> PNode {
        let span = covering(&children);
        Node::new(tag, span, Value::None, children)
    }

    pub fn identifier(name: &str, span: Span) -> PNode {
        Node::new(
            Tag::of(Kind::Identifier),
            span,
            Value::Name(name.into()),
            Vec::new(),
        )
    }

    pub fn int(value: u64, span: Span) -> PNode {
        Node::new(
            Tag::of(Kind::Number),
            span,
            Value::Int(value),
            Vec::new(),
        )
    }

    pub fn real(value: f64, span: Span) -> PNode {
        Node::new(
            Tag::of(Kind::Number),
            span,
            Value::Real(value),
            Vec::new(),
        )
    }

    pub fn string(value: &str, span: Span) -> PNode {
        Node::new(
            Tag::of(Kind::String),
            span,
            Value::Str(value.into()),
            Vec::new(),
        )
    }

    /// `op operand`, where `op` is [`Op::Plus`] or [`Op::Minus`].
    ///
    /// `span` is the span of the sign itself.
    pub fn sign(op: Op, operand: PNode, span: Span) -> PNode {
        debug_assert!(matches!(op, Op::Plus | Op::Minus));
        let span = span.to(operand.span);
        Node::new(Tag::of(Kind::Sign), span, Value::Op(op), vec![operand])
    }

    /// `lhs op rhs`.
    pub fn binary(op: Op, lhs: PNode, rhs: PNode) -> PNode {
        let span = lhs.span.to(rhs.span);
        Node::new(Tag::of(Kind::Operation), span, Value::Op(op), vec![lhs, rhs])
    }

    /// Wraps a single node, keeping its span.
    pub(crate) fn wrap(tag: Tag, inner: PNode) -> PNode {
        let span = inner.span;
        Node::new(tag, span, Value::None, vec![inner])
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn children(&self) -> &[PNode] {
        &self.children
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&PNode> {
        self.children.get(index)
    }

    /// Identifier name, if this is an identifier.
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            Value::Name(name) => Some(name.as_ref()),
            _ => None,
        }
    }

    /// The operand of a `Sign` node.
    pub fn sign_operand(&self) -> Option<&PNode> {
        if self.tag != Tag::of(Kind::Sign) {
            return None;
        }
        self.children.first()
    }
}

fn covering(children: &[PNode]) -> Span {
    match children {
        [] => Span::empty(),
        [first, rest @ ..] => rest.iter().fold(first.span, |span, c| span.to(c.span)),
    }
}

#[cfg(test)]
mod tests;
