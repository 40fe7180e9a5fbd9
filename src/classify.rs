//! Classification queries.
//!
//! Every query looks at the tag of a single node, except the constant rule
//! which may look at the operand of a `Sign`. Queries are total: a target
//! without a table entry is simply not convertible to.

use crate::ast::{
    ListOf, Node, NodeType,
    node::{
        ConstantNode, DeclarationNode, ExpressionNode, IndexTypeNode, ParameterNode,
        SetExpressionNode, StatementNode, VariableNode,
    },
};

pub mod category;
pub mod table;

/// Exact tag equality, regardless of category membership.
#[inline]
pub fn has_type<T: NodeType>(node: &Node) -> bool {
    tracing::trace!(node = %node.tag(), ty = %T::TAG, "has_type");
    node.tag() == T::TAG
}

/// Whether `node` may be treated as a `T`.
///
/// True if `node` is a `T`, or if `T` anchors a category `node` belongs to.
#[inline]
pub fn is_convertible_to<T: NodeType>(node: &Node) -> bool {
    if node.tag() == T::TAG {
        return true;
    }

    match table::coercions_to(T::TAG) {
        Some(coercion) => coercion.test(node),
        None => false,
    }
}

/// Whether anything other than a `T` may be converted to a `T`.
#[inline]
pub fn has_coercions_to<T: NodeType>() -> bool {
    table::has_category_for(T::TAG)
}

/// A list of `T`, or anything convertible to `T`.
#[inline]
pub fn is_list_of<T: NodeType>(node: &Node) -> bool {
    has_type::<ListOf<T>>(node) || is_convertible_to::<T>(node)
}

#[inline]
pub fn is_unpacked_structured_type(node: &Node) -> bool {
    category::UNPACKED_STRUCTURED_TYPE.contains(node)
}

#[inline]
pub fn is_type(node: &Node) -> bool {
    category::TYPE.contains(node)
}

#[inline]
pub fn is_conformant_array_schema(node: &Node) -> bool {
    category::CONFORMANT_ARRAY_SCHEMA.contains(node)
}

#[inline]
pub fn is_parameter_type(node: &Node) -> bool {
    category::PARAMETER_TYPE.contains(node)
}

#[inline]
pub fn is_index_type(node: &Node) -> bool {
    is_convertible_to::<IndexTypeNode>(node)
}

#[inline]
pub fn is_variable(node: &Node) -> bool {
    is_convertible_to::<VariableNode>(node)
}

#[inline]
pub fn is_expression(node: &Node) -> bool {
    is_convertible_to::<ExpressionNode>(node)
}

#[inline]
pub fn is_set_expression(node: &Node) -> bool {
    is_convertible_to::<SetExpressionNode>(node)
}

#[inline]
pub fn is_statement(node: &Node) -> bool {
    is_convertible_to::<StatementNode>(node)
}

#[inline]
pub fn is_parameter(node: &Node) -> bool {
    is_convertible_to::<ParameterNode>(node)
}

#[inline]
pub fn is_declaration(node: &Node) -> bool {
    is_convertible_to::<DeclarationNode>(node)
}

#[inline]
pub fn is_constant(node: &Node) -> bool {
    is_convertible_to::<ConstantNode>(node)
}
