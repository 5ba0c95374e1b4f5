//! End-to-end round trips: map a host-parsed file, print it, and compare
//! against the original text byte for byte.

use std::sync::Arc;

use lst_diagnostic::DiagnosticSink;
use lst_parse::host::build::{ident, SpanFinder};
use lst_parse::host::{
    HostAnnotation, HostBlock, HostClassDecl, HostExpr, HostIf, HostImport, HostLiteral,
    HostMethodDecl, HostModifiers, HostNamedVar, HostPackage, HostStatement, HostTypeRef, HostUnit,
    HostVariableDecls, ModifierFlags,
};
use lst_parse::parse_java;
use lst_print::print;
use lst_tree::{BinaryOp, ClassKind, CompilationUnit, Expression, Span, Statement};
use lst_types::{SemanticOracle, TypeCache};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn parse(source: &str, unit: &HostUnit) -> (CompilationUnit, DiagnosticSink) {
    let oracle = SemanticOracle::new(Arc::new(TypeCache::new()));
    let sink = DiagnosticSink::new();
    let tree = parse_java(source, unit, &oracle, &sink);
    (tree, sink)
}

/// A class declaration spanning from the `class` keyword to the end of the
/// text, with the host's canonical (unordered) view of its parts.
fn class(source: &str, name: &str, members: Vec<HostStatement>) -> HostClassDecl {
    let start = source.find("class").expect("class keyword") as u32;
    HostClassDecl {
        span: Span::new(start, source.len() as u32),
        mods: HostModifiers::default(),
        kind: ClassKind::Class,
        name: name.to_string(),
        type_params: Vec::new(),
        extends: None,
        implements: Vec::new(),
        members,
        ty: None,
    }
}

fn field(
    finder: &mut SpanFinder<'_>,
    flags: ModifierFlags,
    annotations: Vec<HostAnnotation>,
    name: &str,
    init_token: &str,
    init_value: i64,
) -> HostStatement {
    HostStatement::VarDecls(HostVariableDecls {
        span: finder.peek("int").expect("field type"),
        mods: HostModifiers { flags, annotations },
        type_ref: Some(HostTypeRef::Primitive {
            span: finder.span("int"),
            keyword: "int".to_string(),
        }),
        vars: vec![HostNamedVar {
            span: finder.span(name),
            name: name.to_string(),
            init: Some(HostExpr::Literal {
                span: finder.span(init_token),
                value: HostLiteral::Int(init_value),
                ty: None,
            }),
        }],
    })
}

#[test]
fn class_with_field_and_comments_round_trips() {
    let source = "\
// A greeting holder.
class Greeting {
    private static final int COUNT = 42; /* answer */
}
";
    let mut finder = SpanFinder::new(source);
    let member = field(
        &mut finder,
        ModifierFlags::PRIVATE | ModifierFlags::STATIC | ModifierFlags::FINAL,
        Vec::new(),
        "COUNT",
        "42",
        42,
    );
    let unit = HostUnit {
        classes: vec![class(source, "Greeting", vec![member])],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::ClassDecl(decl) = &tree.statements[0].elem else {
        panic!("expected a class, got {:?}", tree.statements[0].elem);
    };
    assert!(decl.body.statements[0].markers.has_semicolon());
}

#[test]
fn annotation_before_modifiers_round_trips() {
    let source = "\
class C {
    @Deprecated public static final int X = 1;
}
";
    let mut finder = SpanFinder::new(source);
    let annotation = HostAnnotation {
        span: finder.span("@Deprecated"),
        path: vec!["Deprecated".to_string()],
        args: None,
    };
    let member = field(
        &mut finder,
        ModifierFlags::PUBLIC | ModifierFlags::STATIC | ModifierFlags::FINAL,
        vec![annotation],
        "X",
        "1",
        1,
    );
    let unit = HostUnit {
        classes: vec![class(source, "C", vec![member])],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::ClassDecl(decl) = &tree.statements[0].elem else {
        panic!("expected a class");
    };
    let Statement::VariableDecls(decls) = &decl.body.statements[0].elem else {
        panic!("expected a field");
    };
    assert_eq!(decls.leading_annotations.len(), 1);
    assert!(decls.modifiers.iter().all(|m| m.annotations.is_empty()));
}

#[test]
fn annotation_between_modifiers_round_trips() {
    let source = "\
class C {
    public @Deprecated static final int X = 1;
}
";
    let mut finder = SpanFinder::new(source);
    let annotation = HostAnnotation {
        span: finder.span("@Deprecated"),
        path: vec!["Deprecated".to_string()],
        args: None,
    };
    let member = field(
        &mut finder,
        ModifierFlags::PUBLIC | ModifierFlags::STATIC | ModifierFlags::FINAL,
        vec![annotation],
        "X",
        "1",
        1,
    );
    let unit = HostUnit {
        classes: vec![class(source, "C", vec![member])],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    // The annotation rides on the modifier it follows in the text.
    let Statement::ClassDecl(decl) = &tree.statements[0].elem else {
        panic!("expected a class");
    };
    let Statement::VariableDecls(decls) = &decl.body.statements[0].elem else {
        panic!("expected a field");
    };
    assert!(decls.leading_annotations.is_empty());
    assert_eq!(decls.modifiers[0].annotations.len(), 1);
}

#[test]
fn method_with_control_flow_round_trips() {
    let source = "\
class Calc {
    int max(int a, int b) throws Boom {
        if (a > b) {
            return a;
        }
        return b;
    }
}
";
    let mut finder = SpanFinder::new(source);
    let method_span = finder.peek("int").expect("return type");
    let return_type = HostTypeRef::Primitive {
        span: finder.span("int"),
        keyword: "int".to_string(),
    };
    let param = |finder: &mut SpanFinder<'_>, name: &str| HostVariableDecls {
        span: finder.peek("int").expect("parameter type"),
        mods: HostModifiers::default(),
        type_ref: Some(HostTypeRef::Primitive {
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
    let throws = vec![HostTypeRef::Named {
        span: finder.span("Boom"),
        parts: vec!["Boom".to_string()],
        ty: None,
    }];
    let body_span = finder.span("{");
    let then_open = finder.span("if");
    let cond_left = ident(&mut finder, "a");
    let cond_right = ident(&mut finder, "b");
    let cond = HostExpr::Binary {
        span: Span::new(cond_left.span().start, cond_right.span().end),
        op: BinaryOp::Gt,
        left: Box::new(cond_left),
        right: Box::new(cond_right),
        ty: None,
    };
    let then_block_span = finder.span("{");
    let first_return = finder.span("return");
    let returned_a = ident(&mut finder, "a");
    let then_branch = HostStatement::Block(HostBlock {
        span: then_block_span,
        statements: vec![HostStatement::Return {
            span: first_return,
            expr: Some(returned_a),
        }],
    });
    let second_return = finder.span("return");
    let returned_b = ident(&mut finder, "b");
    let body = HostBlock {
        span: body_span,
        statements: vec![
            HostStatement::If(Box::new(HostIf {
                span: then_open,
                cond,
                then_branch,
                else_branch: None,
            })),
            HostStatement::Return {
                span: second_return,
                expr: Some(returned_b),
            },
        ],
    };
    let method = HostStatement::Method(Box::new(HostMethodDecl {
        span: method_span,
        mods: HostModifiers::default(),
        type_params: Vec::new(),
        return_type: Some(return_type),
        name: "max".to_string(),
        params,
        throws,
        body: Some(body),
        handle: None,
    }));
    let unit = HostUnit {
        classes: vec![class(source, "Calc", vec![method])],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());
}

#[test]
fn reprint_after_reparse_is_identical() {
    let source = "class Stable {\n    int x = 3;\n}\n";
    let mut finder = SpanFinder::new(source);
    let member = field(&mut finder, ModifierFlags::empty(), Vec::new(), "x", "3", 3);
    let unit = HostUnit {
        classes: vec![class(source, "Stable", vec![member])],
        ..HostUnit::default()
    };

    let (first, _) = parse(source, &unit);
    let printed = print(&first);
    assert_eq!(printed, source);
    // The printed text parses against the same host view and prints the
    // same bytes again.
    let (second, sink) = parse(&printed, &unit);
    assert_eq!(print(&second), printed);
    assert!(sink.is_empty());
}

#[test]
fn package_and_static_import_round_trip() {
    let source = "\
package com.example;

import  static  com.example.Util.max ;

class A {}
";
    let mut finder = SpanFinder::new(source);
    let package = HostPackage {
        span: finder.span("package"),
        name: vec!["com".to_string(), "example".to_string()],
    };
    let import = HostImport {
        span: finder.span("import"),
        statik: true,
        path: ["com", "example", "Util", "max"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    };
    let unit = HostUnit {
        package: Some(package),
        imports: vec![import],
        classes: vec![class(source, "A", Vec::new())],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.is_empty());

    let Statement::Import(import) = &tree.statements[1].elem else {
        panic!("expected an import, got {:?}", tree.statements[1].elem);
    };
    assert!(import.statik.is_some());
    assert!(tree.statements[1].markers.has_semicolon());
}

#[test]
fn failed_declaration_still_prints_byte_exact() {
    let source = "class A {} class C {}\n";
    // The host front-end disagrees with the text about the first class's
    // name, so its mapping fails and the text survives verbatim.
    let broken = HostClassDecl {
        span: Span::new(0, 10),
        ..class(source, "B", Vec::new())
    };
    let good = HostClassDecl {
        span: Span::new(11, 21),
        ..class(source, "C", Vec::new())
    };
    let unit = HostUnit {
        classes: vec![broken, good],
        ..HostUnit::default()
    };

    let (tree, sink) = parse(source, &unit);
    assert_eq!(print(&tree), source);
    assert!(sink.has_errors());

    let Statement::Erroneous(erroneous) = &tree.statements[0].elem else {
        panic!("expected erroneous text, got {:?}", tree.statements[0].elem);
    };
    assert_eq!(erroneous.text, "class A {}");
    assert!(matches!(&tree.statements[1].elem, Statement::ClassDecl(_)));
}

#[test]
fn identifier_types_resolve_through_the_oracle() {
    let source = "class C {\n    int x = 7;\n}\n";
    let mut finder = SpanFinder::new(source);
    let member = field(&mut finder, ModifierFlags::empty(), Vec::new(), "x", "7", 7);
    let unit = HostUnit {
        classes: vec![class(source, "C", vec![member])],
        ..HostUnit::default()
    };

    let (tree, _) = parse(source, &unit);
    let Statement::ClassDecl(decl) = &tree.statements[0].elem else {
        panic!("expected a class");
    };
    let Statement::VariableDecls(decls) = &decl.body.statements[0].elem else {
        panic!("expected a field");
    };
    let init = decls.vars[0]
        .elem
        .initializer
        .as_ref()
        .expect("initializer");
    let Expression::Literal(literal) = &init.elem else {
        panic!("expected a literal");
    };
    // No host type handle, so the token kind decides the descriptor.
    assert!(literal.ty.is_some());
}

fn trivia() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\n".to_string()),
            Just("/* note */".to_string()),
            Just("// note\n".to_string()),
        ],
        0..4,
    )
    .prop_map(|pieces| pieces.concat())
}

proptest! {
    // Whatever mix of whitespace and comments separates the tokens, the
    // round trip stays byte-exact.
    #[test]
    fn arbitrary_trivia_round_trips(
        g0 in trivia(),
        g1 in trivia(),
        g2 in trivia(),
        g3 in trivia(),
        g4 in trivia(),
        name in "[A-Z][a-z0-9]{0,6}",
    ) {
        let source = format!("{g0}class {g1}{name}{g2}{{{g3}}}{g4}");
        let unit = HostUnit {
            classes: vec![class(&source, &name, Vec::new())],
            ..HostUnit::default()
        };
        let (tree, sink) = parse(&source, &unit);
        prop_assert_eq!(print(&tree), source);
        prop_assert!(sink.is_empty());
    }
}
