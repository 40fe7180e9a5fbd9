//! Typed handles over [`PNode`].
//!
//! A handle is a `PNode` known to carry a specific [`Tag`]. Handles are
//! cheap to clone and never copy the underlying node.

use std::marker::PhantomData;

use super::{Node, PNode, Tag, Value};
use crate::classify::is_convertible_to;
use crate::error::{Error, Result, error_span};

#[macro_use]
mod macros;

/// A typed view of a node with a statically known tag.
pub trait NodeType: Sized {
    const TAG: Tag;

    /// Views `node` as `Self`. The caller guarantees `node.tag() == Self::TAG`.
    fn reinterpret(node: PNode) -> Self;

    fn node(&self) -> &PNode;

    fn into_node(self) -> PNode;

    /// Views `node` as `Self` iff it carries `Self::TAG`.
    #[inline]
    fn cast(node: &PNode) -> Option<Self> {
        if node.tag() == Self::TAG {
            Some(Self::reinterpret(node.clone()))
        } else {
            None
        }
    }
}

/// Adapter construction of `Self` from a generically-parsed node.
///
/// Anchors and lists build a new node around the source. Concrete variants
/// accept only a node with their own tag and share it. The source node is
/// never copied.
pub trait FromNode: NodeType {
    fn from_node(node: &PNode) -> Result<Self>;
}

fn cannot_convert(node: &Node, to: Tag) -> Error {
    error_span(
        format!("cannot convert `{}` to `{to}`", node.tag()),
        node.span(),
    )
}

declare_node! {
    #[tag(Program)]
    pub struct ProgramNode;

    #[tag(Block)]
    pub struct BlockNode;
}

declare_node! {
    #[tag(RecordType)]
    pub struct RecordTypeNode;

    #[tag(SetType)]
    pub struct SetTypeNode;

    #[tag(FileType)]
    pub struct FileTypeNode;

    #[tag(ArrayType)]
    pub struct ArrayTypeNode;

    #[tag(Subrange)]
    /// `low..high`
    pub struct SubrangeNode;

    #[tag(EnumeratedType)]
    pub struct EnumeratedTypeNode;

    #[tag(PointerType)]
    pub struct PointerTypeNode;

    #[tag(PackedType)]
    pub struct PackedTypeNode;

    #[tag(UCArraySchema)]
    pub struct UCArraySchemaNode;

    #[tag(PCArraySchema)]
    pub struct PCArraySchemaNode;
}

declare_node! {
    #[tag(Identifier)]
    pub struct IdentifierNode;

    #[tag(IndexedVariable)]
    pub struct IndexedVariableNode;

    #[tag(ReferencedVariable)]
    pub struct ReferencedVariableNode;

    #[tag(FieldDesignator)]
    pub struct FieldDesignatorNode;
}

declare_node! {
    #[tag(Operation)]
    pub struct OperationNode;

    #[tag(String)]
    pub struct StringNode;

    #[tag(Number)]
    pub struct NumberNode;

    #[tag(Set)]
    pub struct SetNode;

    #[tag(Sign)]
    pub struct SignNode;

    #[tag(FunctionDesignator)]
    pub struct FunctionDesignatorNode;
}

declare_node! {
    #[tag(AssignmentStatement)]
    pub struct AssignmentStatementNode;

    #[tag(CompoundStatement)]
    pub struct CompoundStatementNode;

    #[tag(Empty)]
    pub struct EmptyNode;

    #[tag(WhileStatement)]
    pub struct WhileStatementNode;

    #[tag(RepeatStatement)]
    pub struct RepeatStatementNode;

    #[tag(ForStatement)]
    pub struct ForStatementNode;

    #[tag(IfThen)]
    pub struct IfThenNode;

    #[tag(IfThenElse)]
    pub struct IfThenElseNode;

    #[tag(WithStatement)]
    pub struct WithStatementNode;

    #[tag(CaseStatement)]
    pub struct CaseStatementNode;

    #[tag(Write)]
    pub struct WriteNode;

    #[tag(WriteLine)]
    pub struct WriteLineNode;
}

declare_node! {
    #[tag(VariableParameter)]
    pub struct VariableParameterNode;

    #[tag(ValueParameter)]
    pub struct ValueParameterNode;

    #[tag(ProcedureHeading)]
    pub struct ProcedureHeadingNode;

    #[tag(FunctionHeading)]
    pub struct FunctionHeadingNode;
}

declare_node! {
    #[tag(VariableSection)]
    pub struct VariableSectionNode;

    #[tag(TypeSection)]
    pub struct TypeSectionNode;

    #[tag(ConstSection)]
    pub struct ConstSectionNode;

    #[tag(Function)]
    pub struct FunctionNode;

    #[tag(FunctionForwardDecl)]
    pub struct FunctionForwardDeclNode;

    #[tag(Procedure)]
    pub struct ProcedureNode;

    #[tag(ProcedureForwardDecl)]
    pub struct ProcedureForwardDeclNode;
}

declare_node! {
    #[tag(ConstDefinition)]
    pub struct ConstDefinitionNode;

    #[tag(TypeDefinition)]
    pub struct TypeDefinitionNode;

    #[tag(VariableDeclaration)]
    pub struct VariableDeclarationNode;

    #[tag(RecordSection)]
    pub struct RecordSectionNode;

    #[tag(CaseLimb)]
    pub struct CaseLimbNode;
}

declare_anchor! {
    #[tag(IndexType)]
    pub struct IndexTypeNode;

    #[tag(Variable)]
    pub struct VariableNode;

    #[tag(Expression)]
    pub struct ExpressionNode;

    #[tag(SetExpression)]
    /// Element of a set constructor: an expression or a subrange.
    pub struct SetExpressionNode;

    #[tag(Statement)]
    pub struct StatementNode;

    #[tag(Parameter)]
    pub struct ParameterNode;

    #[tag(Declaration)]
    pub struct DeclarationNode;

    #[tag(Constant)]
    /// A literal, a constant identifier, or either of those behind one sign.
    pub struct ConstantNode;
}

impl SignNode {
    #[inline]
    pub fn operand(&self) -> Option<&PNode> {
        self.0.sign_operand()
    }
}

/// Ordered sequence of `T` elements, tagged `Tag::list_of(T::TAG)`.
///
/// Elements are stored as [`PNode`]s: a list built through [`FromNode`]
/// may hold nodes that are only *convertible* to `T`.
pub struct ListOf<T> {
    node: PNode,
    _element: PhantomData<T>,
}

impl<T: NodeType> ListOf<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let children = items.into_iter().map(T::into_node).collect();
        Self::reinterpret(Node::with_children(Self::TAG, children))
    }

    #[inline]
    pub fn items(&self) -> &[PNode] {
        self.node.children()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<T: NodeType> NodeType for ListOf<T> {
    const TAG: Tag = Tag::list_of(T::TAG);

    #[inline]
    fn reinterpret(node: PNode) -> Self {
        debug_assert!(node.tag() == Self::TAG);
        debug_assert!(matches!(node.value(), Value::None));
        Self {
            node,
            _element: PhantomData,
        }
    }

    #[inline]
    fn node(&self) -> &PNode {
        &self.node
    }

    #[inline]
    fn into_node(self) -> PNode {
        self.node
    }
}

impl<T: NodeType> FromNode for ListOf<T> {
    /// A one-element list holding `node`, if `node` is convertible to `T`.
    fn from_node(node: &PNode) -> Result<Self> {
        if !is_convertible_to::<T>(node) {
            return cannot_convert(node, Self::TAG).into();
        }

        Ok(Self::reinterpret(Node::with_children(
            Self::TAG,
            vec![node.clone()],
        )))
    }
}

impl<T> Clone for ListOf<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _element: PhantomData,
        }
    }
}

impl<T> std::ops::Deref for ListOf<T> {
    type Target = Node;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl<T> std::fmt::Debug for ListOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.node, f)
    }
}
