//! Category definitions.
//!
//! Each category is a `const`, so composition through [`Category::including`]
//! is flattened during compilation. A category referring to itself, directly
//! or through another, is a cycle between constants and fails to compile.

use crate::ast::{Kind, KindSet, Node, Tag};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Category {
    name: &'static str,
    anchor: Option<Kind>,
    members: KindSet,
}

impl Category {
    const fn new(name: &'static str, anchor: Option<Kind>, members: &[Kind]) -> Category {
        Category {
            name,
            anchor,
            members: KindSet::of(members),
        }
    }

    /// Adds every member of `other`. Its anchor is not a member.
    const fn including(self, other: Category) -> Category {
        Category {
            name: self.name,
            anchor: self.anchor,
            members: self.members.union(other.members),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Kind under which the category is keyed in the conversion table.
    ///
    /// `None` for categories that are only queried directly or used as
    /// building blocks of other categories.
    #[inline]
    pub const fn anchor(&self) -> Option<Kind> {
        self.anchor
    }

    #[inline]
    pub const fn members(&self) -> KindSet {
        self.members
    }

    #[inline]
    pub fn contains(&self, node: &Node) -> bool {
        self.contains_tag(node.tag())
    }

    /// List tags are never members.
    #[inline]
    pub const fn contains_tag(&self, tag: Tag) -> bool {
        match tag.plain() {
            Some(kind) => self.members.contains(kind),
            None => false,
        }
    }
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.name, self.members)
    }
}

pub const UNPACKED_STRUCTURED_TYPE: Category = Category::new(
    "UnpackedStructuredType",
    None,
    &[Kind::RecordType, Kind::SetType, Kind::FileType, Kind::ArrayType],
);

pub const INDEX_TYPE: Category = Category::new(
    "IndexType",
    Some(Kind::IndexType),
    &[Kind::Subrange, Kind::EnumeratedType, Kind::Identifier],
);

pub const TYPE: Category = Category::new("Type", None, &[Kind::PointerType, Kind::PackedType])
    .including(UNPACKED_STRUCTURED_TYPE)
    .including(INDEX_TYPE);

pub const CONFORMANT_ARRAY_SCHEMA: Category = Category::new(
    "ConformantArraySchema",
    None,
    &[Kind::UCArraySchema, Kind::PCArraySchema],
);

pub const PARAMETER_TYPE: Category =
    Category::new("ParameterType", None, &[Kind::Identifier]).including(CONFORMANT_ARRAY_SCHEMA);

pub const VARIABLE: Category = Category::new(
    "Variable",
    Some(Kind::Variable),
    &[
        Kind::Identifier,
        Kind::IndexedVariable,
        Kind::ReferencedVariable,
        Kind::FieldDesignator,
    ],
);

pub const EXPRESSION: Category = Category::new(
    "Expression",
    Some(Kind::Expression),
    &[
        Kind::Operation,
        Kind::String,
        Kind::Number,
        Kind::Set,
        Kind::Sign,
        Kind::FunctionDesignator,
    ],
)
.including(VARIABLE);

pub const SET_EXPRESSION: Category =
    Category::new("SetExpression", Some(Kind::SetExpression), &[Kind::Subrange])
        .including(EXPRESSION);

// `Identifier` and `FunctionDesignator` are also expressions. A bare call
// can't be told apart from a call statement by its shape alone; consumers
// of the classification decide.
pub const STATEMENT: Category = Category::new(
    "Statement",
    Some(Kind::Statement),
    &[
        Kind::AssignmentStatement,
        Kind::CompoundStatement,
        Kind::Empty,
        Kind::WhileStatement,
        Kind::RepeatStatement,
        Kind::ForStatement,
        Kind::Identifier,
        Kind::FunctionDesignator,
        Kind::IfThen,
        Kind::IfThenElse,
        Kind::WithStatement,
        Kind::CaseStatement,
        Kind::Write,
        Kind::WriteLine,
    ],
);

pub const PARAMETER: Category = Category::new(
    "Parameter",
    Some(Kind::Parameter),
    &[
        Kind::VariableParameter,
        Kind::ValueParameter,
        Kind::ProcedureHeading,
        Kind::FunctionHeading,
    ],
);

pub const DECLARATION: Category = Category::new(
    "Declaration",
    Some(Kind::Declaration),
    &[
        Kind::VariableSection,
        Kind::TypeSection,
        Kind::ConstSection,
        Kind::Function,
        Kind::FunctionForwardDecl,
        Kind::Procedure,
        Kind::ProcedureForwardDecl,
    ],
);

/// Kinds which are constants without looking at their children.
///
/// Not part of [`ALL`]: the `Constant` anchor is keyed to a dedicated rule
/// which also accepts a sign in front of one of these.
pub const SURELY_CONSTANT: Category = Category::new(
    "Constant",
    Some(Kind::Constant),
    &[Kind::String, Kind::Number, Kind::Identifier],
);

pub const ALL: &[Category] = &[
    UNPACKED_STRUCTURED_TYPE,
    INDEX_TYPE,
    TYPE,
    CONFORMANT_ARRAY_SCHEMA,
    PARAMETER_TYPE,
    VARIABLE,
    EXPRESSION,
    SET_EXPRESSION,
    STATEMENT,
    PARAMETER,
    DECLARATION,
];
