/// Declares the [`Kind`] enum together with its enumeration helpers.
///
/// Discriminants are explicit, so assigning the same value twice
/// fails to compile.
macro_rules! declare_kinds {
    (
        $(
            $(#[$attr:meta])*
            $name:ident = $value:literal,
        )*
    ) => {
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Kind {
            $(
                $(#[$attr])*
                $name = $value,
            )*
        }

        impl Kind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [Kind] = &[$(Kind::$name,)*];

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Kind::$name => stringify!($name),)*
                }
            }

            #[inline]
            pub const fn from_u8(value: u8) -> Option<Kind> {
                match value {
                    $($value => Some(Kind::$name),)*
                    _ => None,
                }
            }
        }
    };
}

declare_kinds! {
    // 0 is reserved

    // Program structure
    Program = 1,
    Block = 2,

    // reserved: 3-15

    // Types
    RecordType = 16,
    SetType = 17,
    FileType = 18,
    ArrayType = 19,
    Subrange = 20,
    EnumeratedType = 21,
    PointerType = 22,
    PackedType = 23,
    /// Unpacked conformant array schema.
    UCArraySchema = 24,
    /// Packed conformant array schema.
    PCArraySchema = 25,

    // reserved: 26-39

    // Variables
    Identifier = 40,
    IndexedVariable = 41,
    ReferencedVariable = 42,
    FieldDesignator = 43,

    // reserved: 44-55

    // Expressions
    /// Binary or unary (`not`) operation.
    Operation = 56,
    String = 57,
    Number = 58,
    /// Set constructor, `[a, b..c]`.
    Set = 59,
    /// Unary `+`/`-` applied to a single operand.
    Sign = 60,
    FunctionDesignator = 61,

    // reserved: 62-71

    // Statements
    AssignmentStatement = 72,
    CompoundStatement = 73,
    Empty = 74,
    WhileStatement = 75,
    RepeatStatement = 76,
    ForStatement = 77,
    IfThen = 78,
    IfThenElse = 79,
    WithStatement = 80,
    CaseStatement = 81,
    Write = 82,
    WriteLine = 83,

    // reserved: 84-95

    // Parameters
    VariableParameter = 96,
    ValueParameter = 97,
    ProcedureHeading = 98,
    FunctionHeading = 99,

    // reserved: 100-111

    // Declarations
    VariableSection = 112,
    TypeSection = 113,
    ConstSection = 114,
    Function = 115,
    FunctionForwardDecl = 116,
    Procedure = 117,
    ProcedureForwardDecl = 118,

    // reserved: 119-127

    // Declaration parts, never classified
    ConstDefinition = 128,
    TypeDefinition = 129,
    VariableDeclaration = 130,
    RecordSection = 131,
    CaseLimb = 132,

    // reserved: 133-191

    // Category anchors. Each wraps exactly one member node.
    IndexType = 192,
    Variable = 193,
    Expression = 194,
    SetExpression = 195,
    Statement = 196,
    Parameter = 197,
    Declaration = 198,
    Constant = 199,

    // reserved: 200-255
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a node variant.
///
/// Plain variants are named by their [`Kind`]. The list-of-T wrapper for an
/// element kind has its own tag, distinct from the element's.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tag {
    kind: Kind,
    list: bool,
}

impl Tag {
    #[inline]
    pub const fn of(kind: Kind) -> Tag {
        Tag { kind, list: false }
    }

    /// Tag of the list wrapper whose elements are `element`.
    ///
    /// Lists of lists are rejected during const evaluation.
    #[inline]
    pub const fn list_of(element: Tag) -> Tag {
        assert!(!element.list, "lists of lists are not supported");
        Tag {
            kind: element.kind,
            list: true,
        }
    }

    /// The variant kind, or the element kind for list tags.
    #[inline]
    pub const fn kind(self) -> Kind {
        self.kind
    }

    #[inline]
    pub const fn is_list(self) -> bool {
        self.list
    }

    /// Element tag of a list tag.
    #[inline]
    pub const fn element(self) -> Option<Tag> {
        if self.list {
            Some(Tag::of(self.kind))
        } else {
            None
        }
    }

    /// `Some(kind)` iff this is a plain variant tag.
    #[inline]
    pub const fn plain(self) -> Option<Kind> {
        if self.list { None } else { Some(self.kind) }
    }
}

impl From<Kind> for Tag {
    #[inline]
    fn from(value: Kind) -> Self {
        Tag::of(value)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.list {
            write!(f, "ListOf<{}>", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Set of [`Kind`]s, one bit per discriminant.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct KindSet([u64; 4]);

impl KindSet {
    pub const EMPTY: KindSet = KindSet([0; 4]);

    pub const fn of(kinds: &[Kind]) -> KindSet {
        let mut set = KindSet::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    #[inline]
    pub const fn with(self, kind: Kind) -> KindSet {
        let (word, bit) = Self::slot(kind);
        let mut words = self.0;
        words[word] |= bit;
        KindSet(words)
    }

    #[inline]
    pub const fn union(self, other: KindSet) -> KindSet {
        let mut words = self.0;
        let mut i = 0;
        while i < words.len() {
            words[i] |= other.0[i];
            i += 1;
        }
        KindSet(words)
    }

    #[inline]
    pub const fn contains(&self, kind: Kind) -> bool {
        let (word, bit) = Self::slot(kind);
        self.0[word] & bit != 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < self.0.len() {
            n += self.0[i].count_ones() as usize;
            i += 1;
        }
        n
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        Kind::ALL.iter().copied().filter(|kind| self.contains(*kind))
    }

    #[inline]
    const fn slot(kind: Kind) -> (usize, u64) {
        let index = kind as u8 as usize;
        (index / 64, 1 << (index % 64))
    }
}

impl std::fmt::Debug for KindSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::EMPTY, KindSet::with)
    }
}
