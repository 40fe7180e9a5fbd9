use std::{cell::Cell, rc::Rc};

use pascal_ast::{
    ast::{Op, Value},
    prelude::*,
    span::Span,
};

thread_local! {
    static BUILT: Cell<usize> = const { Cell::new(0) };
}

/// Adapter which counts its constructions.
#[derive(Clone)]
struct Counted(PNode);

impl NodeType for Counted {
    const TAG: Tag = Tag::of(Kind::CaseLimb);

    fn reinterpret(node: PNode) -> Self {
        Counted(node)
    }

    fn node(&self) -> &PNode {
        &self.0
    }

    fn into_node(self) -> PNode {
        self.0
    }
}

impl FromNode for Counted {
    fn from_node(node: &PNode) -> Result<Self> {
        BUILT.with(|n| n.set(n.get() + 1));
        Ok(Counted(Node::new(
            Self::TAG,
            node.span(),
            Value::None,
            vec![node.clone()],
        )))
    }
}

fn built() -> usize {
    BUILT.with(|n| n.get())
}

#[test]
fn same_tag_is_reinterpreted() {
    let five = Node::int(5, Span::new(0, 1));
    let count = Rc::strong_count(&five);

    let number = convert_to::<NumberNode>(&five).unwrap();
    assert!(number.is_reinterpreted());
    assert!(Rc::ptr_eq(number.node(), &five));
    assert_eq!(Rc::strong_count(&five), count + 1);

    let expr = convert_to::<ExpressionNode>(&five).unwrap().into_inner();
    let again = convert_to::<ExpressionNode>(expr.node()).unwrap();
    assert!(again.is_reinterpreted());
    assert!(Rc::ptr_eq(again.node(), expr.node()));
}

#[test]
fn variant_rejects_other_tags() {
    let x = Node::identifier("x", Span::new(2, 3));

    let err = convert_to::<NumberNode>(&x).unwrap_err();
    assert_eq!(err.message(), "cannot convert `Identifier` to `Number`");
    assert_eq!(err.span(), Span::new(2, 3));
    assert!(!is_convertible_to::<NumberNode>(&x));

    let ident = convert_to::<IdentifierNode>(&x).unwrap();
    assert!(ident.is_reinterpreted());
    assert_eq!(ident.name(), Some("x"));
}

#[test]
fn different_tag_constructs_once() {
    let x = Node::identifier("x", Span::new(0, 1));
    let before = built();

    let counted = convert_to::<Counted>(&x).unwrap();
    assert!(!counted.is_reinterpreted());
    assert_eq!(built(), before + 1);
    assert!(!Rc::ptr_eq(counted.node(), &x));
    assert!(Rc::ptr_eq(&counted.node().children()[0], &x));

    // already a `Counted`, so no construction
    let node = counted.into_inner().into_node();
    let same = convert_to::<Counted>(&node).unwrap();
    assert!(same.is_reinterpreted());
    assert_eq!(built(), before + 1);
}

#[test]
fn anchors_wrap_members() {
    let x = Node::identifier("x", Span::new(3, 4));

    let stmt = convert_to::<StatementNode>(&x).unwrap();
    let expr = convert_to::<ExpressionNode>(&x).unwrap();
    assert!(!stmt.is_reinterpreted());
    assert!(!expr.is_reinterpreted());
    assert_eq!(stmt.tag(), StatementNode::TAG);
    assert_eq!(expr.tag(), ExpressionNode::TAG);
    assert!(Rc::ptr_eq(stmt.inner().unwrap(), &x));
    assert!(Rc::ptr_eq(expr.inner().unwrap(), &x));
    assert!(!Rc::ptr_eq(stmt.node(), expr.node()));
}

#[test]
fn signed_literal_becomes_constant() {
    let neg = Node::sign(Op::Minus, Node::int(5, Span::new(1, 2)), Span::new(0, 1));

    let constant = convert_to::<ConstantNode>(&neg).unwrap();
    assert!(Rc::ptr_eq(constant.inner().unwrap(), &neg));
    assert_eq!(format!("{:?}", *constant), "Constant(Sign(Minus, Number(5)))");
}

#[test]
fn failed_construction_is_propagated() {
    let src = "const c = - -5;";
    let five = Node::int(5, Span::new(13, 14));
    let inner = Node::sign(Op::Minus, five, Span::new(12, 13));
    let outer = Node::sign(Op::Minus, inner, Span::new(10, 11));

    let err = convert_to::<ConstantNode>(&outer).unwrap_err();
    assert_eq!(err.message(), "cannot convert `Sign` to `Constant`");
    assert_eq!(err.span(), Span::new(10, 14));

    let expected = format!(
        "error: cannot convert `Sign` to `Constant`\n  |\n1 | {src}\n  | {}^^^^",
        " ".repeat(10)
    );
    assert_eq!(err.render(src).to_string(), expected);
}

#[test]
fn list_conversion() {
    let one = Node::int(1, Span::new(0, 1));

    let list = convert_to::<ListOf<ExpressionNode>>(&one).unwrap();
    assert!(!list.is_reinterpreted());
    assert_eq!(list.tag(), Tag::list_of(ExpressionNode::TAG));
    assert_eq!(list.len(), 1);
    assert!(Rc::ptr_eq(&list.items()[0], &one));

    let node = list.into_inner().into_node();
    let same = convert_to::<ListOf<ExpressionNode>>(&node).unwrap();
    assert!(same.is_reinterpreted());

    let empty = Node::leaf(Kind::Empty, Span::new(0, 0));
    let err = convert_to::<ListOf<ExpressionNode>>(&empty).unwrap_err();
    assert_eq!(
        err.message(),
        "cannot convert `Empty` to `ListOf<Expression>`"
    );
}

#[test]
fn make_list_always_allocates() {
    let one = NumberNode::cast(&Node::int(1, Span::new(0, 1))).unwrap();

    let list = make_list(&one);
    assert!(!Rc::ptr_eq(list.node(), one.node()));
    assert_eq!(list.len(), 1);
    assert!(Rc::ptr_eq(&list.items()[0], one.node()));

    let other = make_list(&one);
    assert!(!Rc::ptr_eq(list.node(), other.node()));

    assert!(is_list_of::<NumberNode>(&list));
    assert!(has_type::<ListOf<NumberNode>>(&list));
    assert!(!has_type::<NumberNode>(&list));
}

#[test]
fn convertibility_matches_classification() {
    let nodes = [
        Node::int(1, Span::new(0, 1)),
        Node::string("s", Span::new(0, 3)),
        Node::leaf(Kind::WhileStatement, Span::new(0, 5)),
        Node::leaf(Kind::RecordType, Span::new(0, 6)),
    ];

    for node in &nodes {
        assert_eq!(
            is_convertible_to::<ExpressionNode>(node),
            convert_to::<ExpressionNode>(node).is_ok(),
            "{node:?}"
        );
        assert_eq!(
            is_convertible_to::<StatementNode>(node),
            convert_to::<StatementNode>(node).is_ok(),
            "{node:?}"
        );
    }
}
