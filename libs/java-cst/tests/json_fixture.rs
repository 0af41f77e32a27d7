use java_cst::{CstNode, RuleKind, Span, TerminalKind};

const CAST_ASSIGNMENT: &str = include_str!("fixtures/cast_assignment.json");

#[test]
fn loads_statement_fixture() {
    let stmt = CstNode::from_json(CAST_ASSIGNMENT).unwrap();
    assert!(stmt.is_rule(RuleKind::StatementExpression));
    assert_eq!(stmt.span, Span::new(0, 12));
    assert_eq!(stmt.flattened_text(), "x=(Foo)y;");
}

#[test]
fn fixture_keeps_bop_label_and_cast_shape() {
    let stmt = CstNode::from_json(CAST_ASSIGNMENT).unwrap();
    let assign = stmt.rule(RuleKind::Expression).unwrap();
    let bop = assign.labelled("bop").unwrap();
    assert_eq!(bop.terminal_kind(), Some(TerminalKind::Assign));
    assert_eq!(bop.span, Span::new(2, 3));

    let cast = assign.rule_at(RuleKind::Expression, 1).unwrap();
    assert!(cast.has_terminal(TerminalKind::LParen));
    assert!(cast.has_terminal(TerminalKind::RParen));
    assert_eq!(cast.type_types().count(), 1);
    assert_eq!(cast.rules(RuleKind::Expression).count(), 1);
}

#[test]
fn reserializes_to_equal_tree() {
    let stmt = CstNode::from_json(CAST_ASSIGNMENT).unwrap();
    let again = CstNode::from_json(&stmt.to_json().unwrap()).unwrap();
    assert_eq!(again, stmt);
}

#[test]
fn missing_optional_members_default() {
    let node = CstNode::from_json(r#"{"kind":{"rule":"block"}}"#).unwrap();
    assert!(node.children.is_empty());
    assert!(node.text.is_none());
    assert!(node.field.is_none());
    assert!(node.span.is_empty());
}

#[test]
fn child_spans_nest_in_parents() {
    fn check(node: &CstNode) {
        for child in &node.children {
            assert!(node.span.contains(child.span), "{:?} outside {:?}", child.span, node.span);
            check(child);
        }
    }
    check(&CstNode::from_json(CAST_ASSIGNMENT).unwrap());
}

#[test]
fn spans_slice_the_source() {
    let source = "x = (Foo) y;";
    let stmt = CstNode::from_json(CAST_ASSIGNMENT).unwrap();
    let assign = stmt.rule(RuleKind::Expression).unwrap();
    assert_eq!(assign.span.text(source), Some("x = (Foo) y"));
    assert_eq!(assign.labelled("bop").unwrap().span.text(source), Some("="));
}
