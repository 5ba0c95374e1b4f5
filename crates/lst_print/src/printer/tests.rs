use super::*;
use lst_tree::{
    Block, CompilationUnit, Dialect, Empty, Erroneous, Identifier, Lambda, LambdaParams, Literal,
    LiteralValue, Marker, Markers, MethodInvocation, Space, Statement, TreeId,
};
use pretty_assertions::assert_eq;

fn ident(prefix: &str, name: &str) -> Expression {
    Expression::Identifier(Identifier::new(Space::whitespace(prefix), name))
}

fn unit(dialect: Dialect, statements: Vec<RightPadded<Statement>>, eof: &str) -> CompilationUnit {
    CompilationUnit {
        id: TreeId::random(),
        prefix: Space::empty(),
        markers: Markers::new(),
        dialect,
        statements,
        eof: Space::whitespace(eof),
    }
}

fn invocation(name: &str, args: Container<Expression>) -> Expression {
    Expression::MethodInvocation(Box::new(MethodInvocation {
        id: TreeId::random(),
        prefix: Space::empty(),
        markers: Markers::new(),
        select: None,
        name: Identifier::new(Space::empty(), name),
        args,
        method_type: None,
    }))
}

#[test]
fn semicolon_is_marker_driven() {
    let statement = Statement::Expression(ident("", "x"));
    let with = unit(
        Dialect::Java,
        vec![RightPadded::with_markers(
            statement.clone(),
            Space::empty(),
            Markers::with(Marker::Semicolon),
        )],
        "\n",
    );
    let without = unit(
        Dialect::Java,
        vec![RightPadded::new(statement, Space::empty())],
        "\n",
    );
    assert_eq!(crate::print(&with), "x;\n");
    assert_eq!(crate::print(&without), "x\n");
}

#[test]
fn omitted_parentheses_suppress_parens() {
    let args = Container::with_markers(
        Space::empty(),
        vec![
            RightPadded::new(ident(" ", "bar"), Space::empty()),
            RightPadded::new(ident(" ", "baz"), Space::empty()),
        ],
        Markers::with(Marker::OmitParentheses),
    );
    let call = unit(
        Dialect::Groovy,
        vec![RightPadded::new(
            Statement::Expression(invocation("foo", args)),
            Space::empty(),
        )],
        "",
    );
    assert_eq!(crate::print(&call), "foo bar, baz");
}

#[test]
fn explicit_parentheses_print_with_trailing_comma_marker() {
    let args = Container::new(
        Space::empty(),
        vec![RightPadded::with_markers(
            ident("", "bar"),
            Space::empty(),
            Markers::with(Marker::TrailingComma(Space::whitespace(" "))),
        )],
    );
    let call = unit(
        Dialect::Groovy,
        vec![RightPadded::new(
            Statement::Expression(invocation("foo", args)),
            Space::empty(),
        )],
        "",
    );
    assert_eq!(crate::print(&call), "foo(bar, )");
}

#[test]
fn erroneous_text_prints_verbatim() {
    let statements = vec![RightPadded::new(
        Statement::Erroneous(Erroneous::new(Space::whitespace("\n"), "int int int")),
        Space::empty(),
    )];
    assert_eq!(crate::print(&unit(Dialect::Java, statements, "\n")), "\nint int int\n");
}

#[test]
fn groovy_closure_prints_braces_and_arrow() {
    let body = Statement::Block(Box::new(Block {
        id: TreeId::random(),
        prefix: Space::empty(),
        markers: Markers::with(Marker::OmitBraces),
        statements: vec![RightPadded::new(
            Statement::Expression(ident(" ", "it")),
            Space::empty(),
        )],
        end: Space::whitespace(" "),
    }));
    let closure = Expression::Lambda(Box::new(Lambda {
        id: TreeId::random(),
        prefix: Space::whitespace(" "),
        markers: Markers::new(),
        params: LambdaParams {
            prefix: Space::empty(),
            parenthesized: false,
            params: vec![RightPadded::new(
                Statement::Empty(Empty::new(Space::empty())),
                Space::empty(),
            )],
        },
        arrow: Space::whitespace(" "),
        body,
        ty: None,
    }));
    let tree = unit(
        Dialect::Groovy,
        vec![RightPadded::new(Statement::Expression(closure), Space::empty())],
        "",
    );
    assert_eq!(crate::print(&tree), " { -> it }");
}

#[test]
fn java_lambda_prints_arrow_form() {
    let body = Statement::Expression(Expression::Literal(Literal::new(
        Space::whitespace(" "),
        LiteralValue::Int(1),
        "1",
    )));
    let lambda = Expression::Lambda(Box::new(Lambda {
        id: TreeId::random(),
        prefix: Space::empty(),
        markers: Markers::new(),
        params: LambdaParams {
            prefix: Space::empty(),
            parenthesized: true,
            params: vec![RightPadded::new(
                Statement::Empty(Empty::new(Space::empty())),
                Space::empty(),
            )],
        },
        arrow: Space::whitespace(" "),
        body,
        ty: None,
    }));
    let tree = unit(
        Dialect::Java,
        vec![RightPadded::new(Statement::Expression(lambda), Space::empty())],
        "",
    );
    assert_eq!(crate::print(&tree), "() -> 1");
}
