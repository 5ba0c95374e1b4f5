//! Generic LST traversal.
//!
//! Override `visit_*` methods to act at specific nodes; call the matching
//! `walk_*` function to continue into children. Dialect-specific visitors
//! reuse a base visitor by composition: hold the base, forward everything
//! you do not override (the default methods make the forwarding surface
//! explicit rather than inherited).

use crate::tree::{
    Annotation, Block, ClassDecl, CompilationUnit, Expression, If, Import, Lambda, MethodDecl,
    MethodInvocation, Modifier, NamedVariable, Package, Statement, TypeParameter, TypeTree,
    VariableDecls,
};

/// LST visitor. The tree is immutable during traversal; visitors mutate
/// their own state only.
pub trait TreeVisitor {
    fn visit_unit(&mut self, unit: &CompilationUnit) {
        walk_unit(self, unit);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_type_tree(&mut self, ty: &TypeTree) {
        walk_type_tree(self, ty);
    }

    fn visit_annotation(&mut self, annotation: &Annotation) {
        walk_annotation(self, annotation);
    }

    fn visit_modifier(&mut self, _modifier: &Modifier) {}
}

pub fn walk_unit<V: TreeVisitor + ?Sized>(visitor: &mut V, unit: &CompilationUnit) {
    for stmt in &unit.statements {
        visitor.visit_statement(&stmt.elem);
    }
}

pub fn walk_statement<V: TreeVisitor + ?Sized>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Package(package) => walk_package(visitor, package),
        Statement::Import(import) => walk_import(visitor, import),
        Statement::ClassDecl(class) => walk_class(visitor, class),
        Statement::MethodDecl(method) => walk_method(visitor, method),
        Statement::VariableDecls(vars) => walk_variable_decls(visitor, vars),
        Statement::Block(block) => walk_block(visitor, block),
        Statement::If(if_stmt) => walk_if(visitor, if_stmt),
        Statement::Return(ret) => {
            if let Some(expr) = &ret.expr {
                visitor.visit_expression(expr);
            }
        }
        Statement::Expression(expr) => visitor.visit_expression(expr),
        Statement::Empty(_) | Statement::Erroneous(_) => {}
    }
}

pub fn walk_expression<V: TreeVisitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Identifier(_) | Expression::Literal(_) => {}
        Expression::Binary(binary) => {
            visitor.visit_expression(&binary.left);
            visitor.visit_expression(&binary.right);
        }
        Expression::Unary(unary) => visitor.visit_expression(&unary.expr),
        Expression::Assignment(assign) => {
            visitor.visit_expression(&assign.variable);
            visitor.visit_expression(&assign.assignment.elem);
        }
        Expression::FieldAccess(access) => visitor.visit_expression(&access.target),
        Expression::MethodInvocation(invocation) => walk_invocation(visitor, invocation),
        Expression::Lambda(lambda) => walk_lambda(visitor, lambda),
        Expression::Parentheses(parens) => visitor.visit_expression(&parens.tree.elem),
        Expression::Empty(_) | Expression::Erroneous(_) => {}
    }
}

pub fn walk_type_tree<V: TreeVisitor + ?Sized>(visitor: &mut V, ty: &TypeTree) {
    match ty {
        TypeTree::Identifier(_) => {}
        TypeTree::FieldAccess(access) => visitor.visit_expression(&access.target),
        TypeTree::Parameterized(parameterized) => {
            visitor.visit_type_tree(&parameterized.clazz);
            for arg in &parameterized.type_args.elems {
                visitor.visit_type_tree(&arg.elem);
            }
        }
        TypeTree::Array(array) => visitor.visit_type_tree(&array.element_type),
    }
}

pub fn walk_annotation<V: TreeVisitor + ?Sized>(visitor: &mut V, annotation: &Annotation) {
    visitor.visit_type_tree(&annotation.annotation_type);
    if let Some(args) = &annotation.args {
        for arg in &args.elems {
            visitor.visit_expression(&arg.elem);
        }
    }
}

fn walk_package<V: TreeVisitor + ?Sized>(visitor: &mut V, package: &Package) {
    visitor.visit_expression(&package.expr);
}

fn walk_import<V: TreeVisitor + ?Sized>(visitor: &mut V, import: &Import) {
    visitor.visit_expression(&import.qualid);
}

fn walk_modifiers<V: TreeVisitor + ?Sized>(
    visitor: &mut V,
    annotations: &[Annotation],
    modifiers: &[Modifier],
) {
    for annotation in annotations {
        visitor.visit_annotation(annotation);
    }
    for modifier in modifiers {
        visitor.visit_modifier(modifier);
        for annotation in &modifier.annotations {
            visitor.visit_annotation(annotation);
        }
    }
}

pub fn walk_class<V: TreeVisitor + ?Sized>(visitor: &mut V, class: &ClassDecl) {
    walk_modifiers(visitor, &class.leading_annotations, &class.modifiers);
    if let Some(params) = &class.type_parameters {
        for param in &params.elems {
            walk_type_parameter(visitor, &param.elem);
        }
    }
    if let Some(extends) = &class.extends {
        visitor.visit_type_tree(&extends.elem);
    }
    if let Some(implements) = &class.implements {
        for ty in &implements.elems {
            visitor.visit_type_tree(&ty.elem);
        }
    }
    walk_block(visitor, &class.body);
}

fn walk_type_parameter<V: TreeVisitor + ?Sized>(visitor: &mut V, param: &TypeParameter) {
    for annotation in &param.annotations {
        visitor.visit_annotation(annotation);
    }
    if let Some(bounds) = &param.bounds {
        for bound in &bounds.elems {
            visitor.visit_type_tree(&bound.elem);
        }
    }
}

pub fn walk_method<V: TreeVisitor + ?Sized>(visitor: &mut V, method: &MethodDecl) {
    walk_modifiers(visitor, &method.leading_annotations, &method.modifiers);
    if let Some(ret) = &method.return_type {
        visitor.visit_type_tree(ret);
    }
    for param in &method.params.elems {
        visitor.visit_statement(&param.elem);
    }
    if let Some(throws) = &method.throws {
        for ty in &throws.elems {
            visitor.visit_type_tree(&ty.elem);
        }
    }
    if let Some(body) = &method.body {
        walk_block(visitor, body);
    }
}

fn walk_variable_decls<V: TreeVisitor + ?Sized>(visitor: &mut V, vars: &VariableDecls) {
    walk_modifiers(visitor, &vars.leading_annotations, &vars.modifiers);
    if let Some(ty) = &vars.type_expr {
        visitor.visit_type_tree(ty);
    }
    for var in &vars.vars {
        walk_named_variable(visitor, &var.elem);
    }
}

fn walk_named_variable<V: TreeVisitor + ?Sized>(visitor: &mut V, var: &NamedVariable) {
    if let Some(init) = &var.initializer {
        visitor.visit_expression(&init.elem);
    }
}

pub fn walk_block<V: TreeVisitor + ?Sized>(visitor: &mut V, block: &Block) {
    for stmt in &block.statements {
        visitor.visit_statement(&stmt.elem);
    }
}

fn walk_if<V: TreeVisitor + ?Sized>(visitor: &mut V, if_stmt: &If) {
    visitor.visit_expression(&if_stmt.condition.tree.elem);
    visitor.visit_statement(&if_stmt.then_part.elem);
    if let Some(else_part) = &if_stmt.else_part {
        visitor.visit_statement(&else_part.body.elem);
    }
}

fn walk_invocation<V: TreeVisitor + ?Sized>(visitor: &mut V, invocation: &MethodInvocation) {
    if let Some(select) = &invocation.select {
        visitor.visit_expression(&select.elem);
    }
    for arg in &invocation.args.elems {
        visitor.visit_expression(&arg.elem);
    }
}

fn walk_lambda<V: TreeVisitor + ?Sized>(visitor: &mut V, lambda: &Lambda) {
    for param in &lambda.params.params {
        visitor.visit_statement(&param.elem);
    }
    visitor.visit_statement(&lambda.body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Space;
    use crate::tree::{Identifier, Literal, LiteralValue};

    struct CountIdentifiers {
        count: usize,
    }

    impl TreeVisitor for CountIdentifiers {
        fn visit_expression(&mut self, expr: &Expression) {
            if matches!(expr, Expression::Identifier(_)) {
                self.count += 1;
            }
            walk_expression(self, expr);
        }
    }

    #[test]
    fn counts_identifiers_through_nesting() {
        use crate::pad::{LeftPadded, RightPadded};
        use crate::tree::{Binary, BinaryOp};
        use crate::TreeId;

        let expr = Expression::Binary(Box::new(Binary {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers: crate::Markers::new(),
            left: Expression::Identifier(Identifier::new(Space::empty(), "a")),
            operator: LeftPadded::new(Space::whitespace(" "), BinaryOp::Add),
            right: Expression::Parentheses(Box::new(crate::tree::Parentheses {
                id: TreeId::random(),
                prefix: Space::whitespace(" "),
                markers: crate::Markers::new(),
                tree: RightPadded::new(
                    Expression::Identifier(Identifier::new(Space::empty(), "b")),
                    Space::empty(),
                ),
            })),
            ty: None,
        }));

        let mut visitor = CountIdentifiers { count: 0 };
        visitor.visit_expression(&expr);
        assert_eq!(visitor.count, 2);
    }

    #[test]
    fn literals_are_leaves() {
        let expr = Expression::Literal(Literal::new(
            Space::empty(),
            LiteralValue::Int(1),
            "1",
        ));
        let mut visitor = CountIdentifiers { count: 0 };
        visitor.visit_expression(&expr);
        assert_eq!(visitor.count, 0);
    }
}
