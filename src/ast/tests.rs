use std::rc::Rc;

use super::node::{ExpressionNode, NumberNode, SignNode, StatementNode};
use super::*;
use crate::span::Span;

#[test]
fn kinds_have_distinct_discriminants() {
    let mut seen = KindSet::EMPTY;
    for kind in Kind::ALL {
        assert!(!seen.contains(*kind), "{kind} declared twice");
        seen = seen.with(*kind);
    }
    assert_eq!(seen.len(), Kind::ALL.len());
}

#[test]
fn kind_from_u8_roundtrips_and_rejects_reserved() {
    for kind in Kind::ALL {
        assert_eq!(Kind::from_u8(*kind as u8), Some(*kind));
    }
    assert_eq!(Kind::from_u8(0), None);
    assert_eq!(Kind::from_u8(3), None);
    assert_eq!(Kind::from_u8(255), None);
}

#[test]
fn list_tag_is_distinct_from_element_tag() {
    let number = Tag::of(Kind::Number);
    let list = Tag::list_of(number);

    assert_ne!(list, number);
    assert!(list.is_list());
    assert!(!number.is_list());
    assert_eq!(list.element(), Some(number));
    assert_eq!(number.element(), None);
    assert_eq!(list.plain(), None);
    assert_eq!(number.plain(), Some(Kind::Number));
    assert_eq!(<ListOf<NumberNode>>::TAG, list);
}

#[test]
fn tag_display() {
    assert_eq!(Tag::of(Kind::Number).to_string(), "Number");
    assert_eq!(
        Tag::list_of(Tag::of(Kind::Identifier)).to_string(),
        "ListOf<Identifier>"
    );
}

#[test]
fn kind_set_union_and_iteration() {
    let a = KindSet::of(&[Kind::Number, Kind::String]);
    let b = KindSet::of(&[Kind::String, Kind::Constant]);
    let both = a.union(b);

    assert_eq!(both.len(), 3);
    assert!(both.contains(Kind::Constant));
    assert!(!both.contains(Kind::Identifier));
    assert_eq!(
        both.iter().collect::<Vec<_>>(),
        vec![Kind::String, Kind::Number, Kind::Constant]
    );
    assert!(KindSet::EMPTY.is_empty());
}

#[test]
fn sign_covers_operand() {
    let five = Node::int(5, Span::new(1, 2));
    let neg = Node::sign(Op::Minus, five.clone(), Span::new(0, 1));

    assert_eq!(neg.tag(), Tag::of(Kind::Sign));
    assert_eq!(neg.span(), Span::new(0, 2));
    assert!(Rc::ptr_eq(neg.sign_operand().unwrap(), &five));
    assert!(five.sign_operand().is_none());
}

#[test]
fn branch_span_covers_children() {
    let lhs = Node::identifier("x", Span::new(4, 5));
    let rhs = Node::int(1, Span::new(9, 10));
    let assign = Node::branch(Kind::AssignmentStatement, vec![lhs, rhs]);

    assert_eq!(assign.span(), Span::new(4, 10));
    assert_eq!(assign.children().len(), 2);
    assert_eq!(assign.child(0).and_then(|c| c.name()), Some("x"));
}

#[test]
fn cast_checks_tag() {
    let five = Node::int(5, Span::new(0, 1));

    let number = NumberNode::cast(&five).unwrap();
    assert!(Rc::ptr_eq(number.node(), &five));
    assert!(SignNode::cast(&five).is_none());
    assert!(StatementNode::cast(&five).is_none());
}

#[test]
fn list_holds_elements_in_order() {
    let items = [Node::int(1, Span::new(0, 1)), Node::int(2, Span::new(3, 4))];
    let list = ListOf::new(items.iter().map(|n| NumberNode::cast(n).unwrap()));

    assert_eq!(list.len(), 2);
    assert!(Rc::ptr_eq(&list.items()[0], &items[0]));
    assert!(Rc::ptr_eq(&list.items()[1], &items[1]));
    assert_eq!(list.span(), Span::new(0, 4));
}

#[test]
fn anchor_wraps_member() {
    let five = Node::int(5, Span::new(2, 3));
    let expr = ExpressionNode::from_node(&five).unwrap();

    assert_eq!(expr.tag(), Tag::of(Kind::Expression));
    assert_eq!(expr.span(), five.span());
    assert!(Rc::ptr_eq(expr.inner().unwrap(), &five));
}

#[test]
fn anchor_rejects_non_member() {
    let empty = Node::leaf(Kind::Empty, Span::new(7, 8));
    let err = ExpressionNode::from_node(&empty).unwrap_err();

    assert_eq!(err.message(), "cannot convert `Empty` to `Expression`");
    assert_eq!(err.span(), Span::new(7, 8));
}

#[test]
fn debug_rendering() {
    let neg = Node::sign(Op::Minus, Node::int(5, Span::new(1, 2)), Span::new(0, 1));
    insta::assert_snapshot!(format!("{neg:?}"), @"Sign(Minus, Number(5))");

    let call = Node::branch(
        Kind::FunctionDesignator,
        vec![Node::identifier("f", Span::new(0, 1)), Node::string("hi", Span::new(2, 6))],
    );
    insta::assert_snapshot!(format!("{call:?}"), @r#"FunctionDesignator(Identifier(f), String("hi"))"#);

    let list = ListOf::new([NumberNode::cast(&Node::int(1, Span::new(0, 1))).unwrap()]);
    insta::assert_snapshot!(format!("{list:?}"), @"ListOf<Number>(Number(1))");

    let empty = Node::leaf(Kind::Empty, Span::new(0, 0));
    insta::assert_snapshot!(format!("{empty:?}"), @"Empty");

    let real = Node::real(2.5, Span::new(0, 3));
    insta::assert_snapshot!(format!("{real:?}"), @"Number(2.5)");
}

#[test]
fn variant_accepts_only_its_own_tag() {
    let five = Node::int(5, Span::new(0, 1));
    let number = NumberNode::from_node(&five).unwrap();
    assert!(Rc::ptr_eq(number.node(), &five));

    let x = Node::identifier("x", Span::new(4, 5));
    let err = NumberNode::from_node(&x).unwrap_err();
    assert_eq!(err.message(), "cannot convert `Identifier` to `Number`");
    assert_eq!(err.span(), Span::new(4, 5));

    let neg = Node::sign(Op::Minus, five, Span::new(0, 1));
    assert!(SignNode::from_node(&neg).is_ok());
    assert!(SignNode::from_node(&x).is_err());
}
