//! Coercing nodes into typed handles.

use crate::{
    ast::{FromNode, ListOf, NodeType, PNode},
    classify::has_type,
    error::Result,
};

/// Result of [`convert_to`], recording which path produced the value.
#[derive(Clone, Debug)]
pub enum Converted<T> {
    /// The source node already was a `T`. It is shared, not copied.
    Reinterpreted(T),
    /// A new `T` was built around the source node by [`FromNode::from_node`].
    Constructed(T),
}

impl<T> Converted<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Converted::Reinterpreted(v) | Converted::Constructed(v) => v,
        }
    }

    #[inline]
    pub fn is_reinterpreted(&self) -> bool {
        matches!(self, Converted::Reinterpreted(_))
    }
}

impl<T> std::ops::Deref for Converted<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Converted::Reinterpreted(v) | Converted::Constructed(v) => v,
        }
    }
}

/// Views `node` as a `T`, building one if necessary.
///
/// - If `node` is a `T`, returns it as [`Converted::Reinterpreted`]. No
///   allocation happens, the returned handle shares `node`.
/// - Otherwise calls [`FromNode::from_node`] exactly once and returns its
///   result as [`Converted::Constructed`]. Its errors are passed through.
pub fn convert_to<T: FromNode>(node: &PNode) -> Result<Converted<T>> {
    if has_type::<T>(node) {
        return Ok(Converted::Reinterpreted(T::reinterpret(node.clone())));
    }

    tracing::trace!(node = %node.tag(), ty = %T::TAG, "convert_to: constructing");
    T::from_node(node).map(Converted::Constructed)
}

/// Wraps `node` in a new one-element list.
pub fn make_list<T: NodeType + Clone>(node: &T) -> ListOf<T> {
    ListOf::new([node.clone()])
}
