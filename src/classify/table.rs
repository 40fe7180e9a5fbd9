//! Conversion table: anchor tag to the rule deciding membership.
//!
//! Built once from [`category::ALL`] on first use and read-only afterwards.

use std::sync::LazyLock;

use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;

use super::category::{self, Category};
use crate::ast::{Kind, KindSet, Node, Tag};

/// How membership in an anchored category is decided.
#[derive(Clone, Copy, Debug)]
pub enum Coercion {
    /// Plain tag membership.
    Members(&'static Category),
    /// The constant rule, which may look through one `Sign`.
    Constant,
}

impl Coercion {
    #[inline]
    pub fn test(self, node: &Node) -> bool {
        match self {
            Coercion::Members(category) => category.contains(node),
            Coercion::Constant => is_constant(node),
        }
    }

    /// Kinds accepted on their tag alone.
    #[inline]
    pub fn members(self) -> KindSet {
        match self {
            Coercion::Members(category) => category.members(),
            Coercion::Constant => category::SURELY_CONSTANT.members(),
        }
    }
}

/// `String`, `Number` or `Identifier`, optionally behind a single sign.
///
/// A sign in front of another sign (`- -5`) is not a constant.
fn is_constant(node: &Node) -> bool {
    let surely_constant = |node: &Node| category::SURELY_CONSTANT.contains(node);

    surely_constant(node)
        || (node.tag() == Tag::of(Kind::Sign)
            && node
                .sign_operand()
                .is_some_and(|operand| surely_constant(operand.as_ref())))
}

static CONVERSIONS: LazyLock<HashMap<Tag, Coercion, FxBuildHasher>> = LazyLock::new(build);

fn build() -> HashMap<Tag, Coercion, FxBuildHasher> {
    let mut table =
        HashMap::with_capacity_and_hasher(category::ALL.len() + 1, FxBuildHasher::default());

    for def in category::ALL {
        let Some(anchor) = def.anchor() else {
            continue;
        };
        let previous = table.insert(Tag::of(anchor), Coercion::Members(def));
        debug_assert!(previous.is_none(), "duplicate anchor {anchor}");
    }

    let previous = table.insert(Tag::of(Kind::Constant), Coercion::Constant);
    debug_assert!(previous.is_none(), "duplicate anchor Constant");

    table
}

#[inline]
pub fn coercions_to(anchor: Tag) -> Option<Coercion> {
    CONVERSIONS.get(&anchor).copied()
}

#[inline]
pub fn has_category_for(anchor: Tag) -> bool {
    CONVERSIONS.contains_key(&anchor)
}

/// Kinds convertible to `anchor` on their tag alone.
///
/// For `Constant` this leaves out signed constants, which depend on the
/// operand.
#[inline]
pub fn members_of(anchor: Tag) -> Option<KindSet> {
    coercions_to(anchor).map(Coercion::members)
}

/// Anchors present in the table, in no particular order.
pub fn anchors() -> impl Iterator<Item = Tag> {
    CONVERSIONS.keys().copied()
}
