//! Classification and coercion of Pascal AST nodes.
//!
//! The parser produces generic node shapes. This crate answers whether a
//! node can be treated as a member of some category (`Expression`,
//! `Statement`, `Constant`, ...) and converts it into a typed handle for
//! that category on demand.

pub mod span;

pub mod error;

pub mod ast;
pub mod classify;
pub mod convert;

pub mod prelude {
    pub use crate::ast::{FromNode, Kind, ListOf, Node, NodeType, PNode, Tag, node::*};
    pub use crate::classify::{has_type, is_convertible_to, is_list_of};
    pub use crate::convert::{Converted, convert_to, make_list};
    pub use crate::error::{Error, Result};
}
