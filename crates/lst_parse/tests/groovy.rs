//! Scripting-dialect round trips: command calls without parentheses,
//! parenthesized call wrappers, and braced closures.

use std::sync::Arc;

use lst_diagnostic::DiagnosticSink;
use lst_parse::host::build::{ident, int, SpanFinder};
use lst_parse::host::{
    HostCall, HostExpr, HostLambda, HostModifiers, HostNamedVar, HostStatement, HostUnit,
    HostVariableDecls, ModifierFlags,
};
use lst_parse::parse_groovy;
use lst_print::print;
use lst_tree::{BinaryOp, CompilationUnit, Expression, Span, Statement};
use lst_types::{SemanticOracle, TypeCache};
use pretty_assertions::assert_eq;

fn parse(source: &str, unit: &HostUnit) -> (CompilationUnit, DiagnosticSink) {
    let oracle = SemanticOracle::new(Arc::new(TypeCache::new()));
    let sink = DiagnosticSink::new();
    let tree = parse_groovy(source, unit, &oracle, &sink);
    (tree, sink)
}

fn script(statements: Vec<HostStatement>) -> HostUnit {
    HostUnit {
        statements,
        ..HostUnit::default()
    }
}

fn call(source: &str, finder: &mut SpanFinder<'_>, name: &str, args: Vec<HostExpr>) -> HostExpr {
    HostExpr::Call(Box::new(HostCall {
        span: Span::new(0, source.trim_end().len() as u32),
        select: None,
        name: name.to_string(),
        name_span: finder
            .peek(name)
            .unwrap_or_else(|| panic!("call name {name:?} not in source")),
        args,
        handle: None,
    }))
}

#[test]
fn command_call_without_parentheses_round_trips() {
    let source = "foo bar, baz\n";
    let mut finder = SpanFinder::new(source);
    finder.span("foo");
    let args = vec![ident(&mut finder, "bar"), ident(&mut finder, "baz")];
    finder.rewind();
    let unit = script(vec![HostStatement::Expr(call(
        source,
        &mut finder,
        "foo",
        args,
    ))]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::Expression(Expression::MethodInvocation(invocation)) = &tree.statements[0].elem
    else {
        panic!("expected an invocation, got {:?}", tree.statements[0].elem);
    };
    assert!(invocation.args.markers.has_omit_parentheses());
}

#[test]
fn explicit_parentheses_round_trip_without_marker() {
    let source = "foo(bar, baz)\n";
    let mut finder = SpanFinder::new(source);
    finder.span("foo");
    let args = vec![ident(&mut finder, "bar"), ident(&mut finder, "baz")];
    finder.rewind();
    let unit = script(vec![HostStatement::Expr(call(
        source,
        &mut finder,
        "foo",
        args,
    ))]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::Expression(Expression::MethodInvocation(invocation)) = &tree.statements[0].elem
    else {
        panic!("expected an invocation, got {:?}", tree.statements[0].elem);
    };
    assert!(!invocation.args.markers.has_omit_parentheses());
}

#[test]
fn parentheses_collapsed_into_the_call_span_are_recovered() {
    // The host front-end reports the call's span as covering the wrapping
    // parentheses; the mapper recovers them as a parentheses node.
    let source = "(foo 1, 2)\n";
    let mut finder = SpanFinder::new(source);
    finder.span("foo");
    let args = vec![int(&mut finder, "1", 1), int(&mut finder, "2", 2)];
    finder.rewind();
    let unit = script(vec![HostStatement::Expr(call(
        source,
        &mut finder,
        "foo",
        args,
    ))]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::Expression(Expression::Parentheses(parens)) = &tree.statements[0].elem else {
        panic!("expected parentheses, got {:?}", tree.statements[0].elem);
    };
    let Expression::MethodInvocation(invocation) = &parens.tree.elem else {
        panic!("expected an invocation inside the parentheses");
    };
    assert!(invocation.args.markers.has_omit_parentheses());
}

#[test]
fn parenthesized_first_argument_stays_a_command_call() {
    let source = "foo (bar), baz\n";
    let mut finder = SpanFinder::new(source);
    finder.span("foo");
    let open = finder.span("(");
    let inner = ident(&mut finder, "bar");
    let close = finder.span(")");
    let first = HostExpr::Paren {
        span: Span::new(open.start, close.end),
        inner: Box::new(inner),
    };
    let second = ident(&mut finder, "baz");
    finder.rewind();
    let unit = script(vec![HostStatement::Expr(call(
        source,
        &mut finder,
        "foo",
        vec![first, second],
    ))]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::Expression(Expression::MethodInvocation(invocation)) = &tree.statements[0].elem
    else {
        panic!("expected an invocation, got {:?}", tree.statements[0].elem);
    };
    assert!(invocation.args.markers.has_omit_parentheses());
    assert!(matches!(
        invocation.args.elems[0].elem,
        Expression::Parentheses(_)
    ));
}

fn def_var(
    source: &str,
    finder: &mut SpanFinder<'_>,
    name: &str,
    init: HostExpr,
) -> HostStatement {
    HostStatement::VarDecls(HostVariableDecls {
        span: Span::new(0, source.trim_end().len() as u32),
        mods: HostModifiers {
            flags: ModifierFlags::DEF,
            annotations: Vec::new(),
        },
        type_ref: None,
        vars: vec![HostNamedVar {
            span: finder.span(name),
            name: name.to_string(),
            init: Some(init),
        }],
    })
}

#[test]
fn implicit_parameter_closure_round_trips() {
    let source = "def run = { it }\n";
    let mut finder = SpanFinder::new(source);
    finder.span("run");
    let open = finder.span("{");
    let body = HostStatement::Expr(ident(&mut finder, "it"));
    let close = finder.span("}");
    let closure = HostExpr::Lambda(Box::new(HostLambda {
        span: Span::new(open.start, close.end),
        params: Vec::new(),
        body,
        ty: None,
    }));
    finder.rewind();
    let unit = script(vec![def_var(source, &mut finder, "run", closure)]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let lambda = closure_of(&tree);
    assert!(lambda.params.params.is_empty());
    let Statement::Block(block) = &lambda.body else {
        panic!("expected a block body");
    };
    assert!(block.markers.has_omit_braces());
}

#[test]
fn explicit_zero_parameter_closure_keeps_its_arrow() {
    let source = "def run = { -> it }\n";
    let mut finder = SpanFinder::new(source);
    finder.span("run");
    let open = finder.span("{");
    let body = HostStatement::Expr(ident(&mut finder, "it"));
    let close = finder.span("}");
    let closure = HostExpr::Lambda(Box::new(HostLambda {
        span: Span::new(open.start, close.end),
        params: Vec::new(),
        body,
        ty: None,
    }));
    finder.rewind();
    let unit = script(vec![def_var(source, &mut finder, "run", closure)]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    // An explicit empty parameter list is distinguishable from `{ it }`.
    let lambda = closure_of(&tree);
    assert_eq!(lambda.params.params.len(), 1);
    assert!(matches!(lambda.params.params[0].elem, Statement::Empty(_)));
}

#[test]
fn closure_with_typed_parameters_round_trips() {
    let source = "def add = { int a, int b -> a + b }\n";
    let mut finder = SpanFinder::new(source);
    finder.span("add");
    let open = finder.span("{");
    let param = |finder: &mut SpanFinder<'_>, name: &str| HostVariableDecls {
        span: finder.peek("int").expect("parameter type"),
        mods: HostModifiers::default(),
        type_ref: Some(lst_parse::host::HostTypeRef::Primitive {
            span: finder.span("int"),
            keyword: "int".to_string(),
        }),
        vars: vec![HostNamedVar {
            span: finder.span(name),
            name: name.to_string(),
            init: None,
        }],
    };
    let params = vec![param(&mut finder, "a"), param(&mut finder, "b")];
    let left = ident(&mut finder, "a");
    let right = ident(&mut finder, "b");
    let body = HostStatement::Expr(HostExpr::Binary {
        span: Span::new(left.span().start, right.span().end),
        op: BinaryOp::Add,
        left: Box::new(left),
        right: Box::new(right),
        ty: None,
    });
    let close = finder.span("}");
    let closure = HostExpr::Lambda(Box::new(HostLambda {
        span: Span::new(open.start, close.end),
        params,
        body,
        ty: None,
    }));
    finder.rewind();
    let unit = script(vec![def_var(source, &mut finder, "add", closure)]);

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let lambda = closure_of(&tree);
    assert_eq!(lambda.params.params.len(), 2);
}

/// The closure initializing the script's single `def` variable.
fn closure_of(tree: &CompilationUnit) -> &lst_tree::Lambda {
    let Statement::VariableDecls(decls) = &tree.statements[0].elem else {
        panic!("expected a variable declaration");
    };
    let init = decls.vars[0]
        .elem
        .initializer
        .as_ref()
        .expect("initializer");
    let Expression::Lambda(lambda) = &init.elem else {
        panic!("expected a closure initializer");
    };
    lambda
}
