macro_rules! declare_node {
    (
        @handle
        #[tag($kind:ident)]
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$attr])*
        #[derive(Clone)]
        #[repr(transparent)]
        $vis struct $name($crate::ast::PNode);

        impl $crate::ast::NodeType for $name {
            const TAG: $crate::ast::Tag = $crate::ast::Tag::of($crate::ast::Kind::$kind);

            #[inline]
            fn reinterpret(node: $crate::ast::PNode) -> Self {
                debug_assert!(node.tag() == <Self as $crate::ast::NodeType>::TAG);
                Self(node)
            }

            #[inline]
            fn node(&self) -> &$crate::ast::PNode {
                &self.0
            }

            #[inline]
            fn into_node(self) -> $crate::ast::PNode {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::ast::Node;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&*self.0, f)
            }
        }
    };

    // matches any number of unit-like structs, each with:
    // - a leading `tag` annotation naming its `Kind`
    // - any other attributes (docs, etc.)
    //
    // Generates a transparent handle over `PNode`, a `NodeType`
    // implementation for it, and a `FromNode` implementation which
    // only accepts nodes already carrying the tag
    (
        $(
            #[tag($kind:ident)]
            $(#[$attr:meta])*
            $vis:vis struct $name:ident;
        )*
    ) => {
        $(
            declare_node! {
                @handle
                #[tag($kind)]
                $(#[$attr])*
                $vis struct $name;
            }

            impl $crate::ast::FromNode for $name {
                fn from_node(node: &$crate::ast::PNode) -> $crate::error::Result<Self> {
                    use $crate::ast::NodeType as _;

                    if node.tag() != Self::TAG {
                        return cannot_convert(node, Self::TAG).into();
                    }

                    Ok(Self(node.clone()))
                }
            }
        )*
    };
}

macro_rules! declare_anchor {
    // same input as `declare_node`
    //
    // Generates the handle, plus a `FromNode` implementation which wraps
    // any member of the anchor's category in a fresh anchor node
    (
        $(
            #[tag($kind:ident)]
            $(#[$attr:meta])*
            $vis:vis struct $name:ident;
        )*
    ) => {
        $(
            declare_node! {
                @handle
                #[tag($kind)]
                $(#[$attr])*
                $vis struct $name;
            }

            impl $name {
                /// The wrapped member node.
                #[inline]
                pub fn inner(&self) -> Option<&$crate::ast::PNode> {
                    self.0.child(0)
                }
            }

            impl $crate::ast::FromNode for $name {
                fn from_node(node: &$crate::ast::PNode) -> $crate::error::Result<Self> {
                    use $crate::ast::NodeType as _;

                    if !$crate::classify::is_convertible_to::<Self>(node) {
                        return cannot_convert(node, Self::TAG).into();
                    }

                    Ok(Self($crate::ast::Node::wrap(Self::TAG, node.clone())))
                }
            }
        )*
    };
}
