//! The shared base printer.
//!
//! Printing is a pure pre-order walk: each method emits the node's prefix
//! space verbatim, its literal tokens interleaved with recursive prints of
//! padded children, and any marker-driven punctuation (semicolons, omitted
//! parentheses, trailing commas). Every method mirrors exactly what the
//! mapper consumed for the same construct, which is what makes the round
//! trip byte-exact.
//!
//! Dialect differences are overridden methods on [`TreePrinter`]; the
//! default methods are the whole shared grammar, so a dialect printer
//! replaces only what differs and delegates the rest.

#[cfg(test)]
mod tests;

use lst_tree::{
    Annotation, Block, ClassDecl, ClassKind, Container, Expression, Identifier, Lambda, MethodDecl,
    Modifier, RightPadded, Space, Statement, TypeParameter, TypeTree, VariableDecls,
};

/// Append a space's exact bytes.
fn space(out: &mut String, s: &Space) {
    s.print_into(out);
}

pub trait TreePrinter {
    fn print_unit(&self, unit: &lst_tree::CompilationUnit, out: &mut String) {
        space(out, &unit.prefix);
        for statement in &unit.statements {
            self.print_padded_statement(statement, out);
        }
        space(out, &unit.eof);
    }

    fn print_padded_statement(&self, padded: &RightPadded<Statement>, out: &mut String) {
        self.print_statement(&padded.elem, out);
        space(out, &padded.after);
        if padded.markers.has_semicolon() {
            out.push(';');
        }
    }

    fn print_statement(&self, statement: &Statement, out: &mut String) {
        match statement {
            Statement::Package(package) => {
                space(out, &package.prefix);
                out.push_str("package");
                self.print_expression(&package.expr, out);
            }
            Statement::Import(import) => {
                space(out, &import.prefix);
                out.push_str("import");
                if let Some(statik) = &import.statik {
                    space(out, statik);
                    out.push_str("static");
                }
                self.print_expression(&import.qualid, out);
            }
            Statement::ClassDecl(class) => self.print_class(class, out),
            Statement::MethodDecl(method) => self.print_method(method, out),
            Statement::VariableDecls(decls) => self.print_variable_decls(decls, out),
            Statement::Block(block) => self.print_block(block, out),
            Statement::If(conditional) => {
                space(out, &conditional.prefix);
                out.push_str("if");
                let parens = &conditional.condition;
                space(out, &parens.prefix);
                out.push('(');
                self.print_expression(&parens.tree.elem, out);
                space(out, &parens.tree.after);
                out.push(')');
                self.print_padded_statement(&conditional.then_part, out);
                if let Some(else_part) = &conditional.else_part {
                    space(out, &else_part.prefix);
                    out.push_str("else");
                    self.print_padded_statement(&else_part.body, out);
                }
            }
            Statement::Return(ret) => {
                space(out, &ret.prefix);
                out.push_str("return");
                if let Some(expr) = &ret.expr {
                    self.print_expression(expr, out);
                }
            }
            Statement::Expression(expr) => self.print_expression(expr, out),
            Statement::Empty(empty) => space(out, &empty.prefix),
            Statement::Erroneous(erroneous) => {
                space(out, &erroneous.prefix);
                out.push_str(&erroneous.text);
            }
        }
    }

    fn print_block(&self, block: &Block, out: &mut String) {
        space(out, &block.prefix);
        let braced = !block.markers.has_omit_braces();
        if braced {
            out.push('{');
        }
        for statement in &block.statements {
            self.print_padded_statement(statement, out);
        }
        space(out, &block.end);
        if braced {
            out.push('}');
        }
    }

    fn print_class(&self, class: &ClassDecl, out: &mut String) {
        space(out, &class.prefix);
        for annotation in &class.leading_annotations {
            self.print_annotation(annotation, out);
        }
        for modifier in &class.modifiers {
            self.print_modifier(modifier, out);
        }
        space(out, &class.kind_prefix);
        out.push_str(class.kind.token());
        self.print_identifier(&class.name, out);
        if let Some(type_parameters) = &class.type_parameters {
            self.print_type_parameters(type_parameters, out);
        }
        if let Some(extends) = &class.extends {
            space(out, &extends.before);
            out.push_str("extends");
            self.print_type_tree(&extends.elem, out);
        }
        if let Some(implements) = &class.implements {
            space(out, &implements.before);
            out.push_str(if class.kind == ClassKind::Interface {
                "extends"
            } else {
                "implements"
            });
            self.print_bare_type_list(&implements.elems, out);
        }
        self.print_block(&class.body, out);
    }

    fn print_method(&self, method: &MethodDecl, out: &mut String) {
        space(out, &method.prefix);
        for annotation in &method.leading_annotations {
            self.print_annotation(annotation, out);
        }
        for modifier in &method.modifiers {
            self.print_modifier(modifier, out);
        }
        if let Some(type_parameters) = &method.type_parameters {
            self.print_type_parameters(type_parameters, out);
        }
        if let Some(return_type) = &method.return_type {
            self.print_type_tree(return_type, out);
        }
        self.print_identifier(&method.name, out);
        self.print_statement_container(&method.params, out);
        if let Some(throws) = &method.throws {
            space(out, &throws.before);
            out.push_str("throws");
            self.print_bare_type_list(&throws.elems, out);
        }
        if let Some(body) = &method.body {
            self.print_block(body, out);
        }
    }

    fn print_variable_decls(&self, decls: &VariableDecls, out: &mut String) {
        space(out, &decls.prefix);
        for annotation in &decls.leading_annotations {
            self.print_annotation(annotation, out);
        }
        for modifier in &decls.modifiers {
            self.print_modifier(modifier, out);
        }
        if let Some(type_expr) = &decls.type_expr {
            self.print_type_tree(type_expr, out);
        }
        for (i, var) in decls.vars.iter().enumerate() {
            space(out, &var.elem.prefix);
            self.print_identifier(&var.elem.name, out);
            if let Some(initializer) = &var.elem.initializer {
                space(out, &initializer.before);
                out.push('=');
                self.print_expression(&initializer.elem, out);
            }
            space(out, &var.after);
            if i + 1 < decls.vars.len() {
                out.push(',');
            }
        }
    }

    fn print_modifier(&self, modifier: &Modifier, out: &mut String) {
        space(out, &modifier.prefix);
        out.push_str(modifier.keyword.token());
        for annotation in &modifier.annotations {
            self.print_annotation(annotation, out);
        }
    }

    fn print_annotation(&self, annotation: &Annotation, out: &mut String) {
        space(out, &annotation.prefix);
        out.push('@');
        self.print_type_tree(&annotation.annotation_type, out);
        if let Some(args) = &annotation.args {
            self.print_expr_container(args, out);
        }
    }

    fn print_type_parameters(&self, container: &Container<TypeParameter>, out: &mut String) {
        space(out, &container.before);
        out.push('<');
        for (i, param) in container.elems.iter().enumerate() {
            space(out, &param.elem.prefix);
            for annotation in &param.elem.annotations {
                self.print_annotation(annotation, out);
            }
            self.print_identifier(&param.elem.name, out);
            if let Some(bounds) = &param.elem.bounds {
                space(out, &bounds.before);
                out.push_str("extends");
                for (j, bound) in bounds.elems.iter().enumerate() {
                    self.print_type_tree(&bound.elem, out);
                    space(out, &bound.after);
                    if j + 1 < bounds.elems.len() {
                        out.push('&');
                    }
                }
            }
            space(out, &param.after);
            out.push(if i + 1 < container.elems.len() { ',' } else { '>' });
        }
    }

    /// Comma-separated type list with no closing delimiter (`implements`,
    /// `throws`).
    fn print_bare_type_list(&self, elems: &[RightPadded<TypeTree>], out: &mut String) {
        for (i, elem) in elems.iter().enumerate() {
            self.print_type_tree(&elem.elem, out);
            space(out, &elem.after);
            if i + 1 < elems.len() {
                out.push(',');
            }
        }
    }

    fn print_type_tree(&self, tree: &TypeTree, out: &mut String) {
        match tree {
            TypeTree::Identifier(identifier) => self.print_identifier(identifier, out),
            TypeTree::FieldAccess(access) => {
                space(out, &access.prefix);
                self.print_expression(&access.target, out);
                space(out, &access.name.before);
                out.push('.');
                self.print_identifier(&access.name.elem, out);
            }
            TypeTree::Parameterized(parameterized) => {
                space(out, &parameterized.prefix);
                self.print_type_tree(&parameterized.clazz, out);
                let args = &parameterized.type_args;
                space(out, &args.before);
                out.push('<');
                for (i, arg) in args.elems.iter().enumerate() {
                    self.print_type_tree(&arg.elem, out);
                    space(out, &arg.after);
                    out.push(if i + 1 < args.elems.len() { ',' } else { '>' });
                }
            }
            TypeTree::Array(array) => {
                space(out, &array.prefix);
                self.print_type_tree(&array.element_type, out);
                space(out, &array.dimension_before);
                out.push('[');
                space(out, &array.dimension_inner);
                out.push(']');
            }
        }
    }

    fn print_identifier(&self, identifier: &Identifier, out: &mut String) {
        space(out, &identifier.prefix);
        out.push_str(&identifier.simple_name);
    }

    fn print_expression(&self, expr: &Expression, out: &mut String) {
        match expr {
            Expression::Identifier(identifier) => self.print_identifier(identifier, out),
            Expression::Literal(literal) => {
                space(out, &literal.prefix);
                out.push_str(&literal.value_source);
            }
            Expression::Binary(binary) => {
                space(out, &binary.prefix);
                self.print_expression(&binary.left, out);
                space(out, &binary.operator.before);
                out.push_str(binary.operator.elem.token());
                self.print_expression(&binary.right, out);
            }
            Expression::Unary(unary) => {
                space(out, &unary.prefix);
                space(out, &unary.operator.before);
                out.push_str(unary.operator.elem.token());
                self.print_expression(&unary.expr, out);
            }
            Expression::Assignment(assignment) => {
                space(out, &assignment.prefix);
                self.print_expression(&assignment.variable, out);
                space(out, &assignment.assignment.before);
                out.push('=');
                self.print_expression(&assignment.assignment.elem, out);
            }
            Expression::FieldAccess(access) => {
                space(out, &access.prefix);
                self.print_expression(&access.target, out);
                space(out, &access.name.before);
                out.push('.');
                self.print_identifier(&access.name.elem, out);
            }
            Expression::MethodInvocation(invocation) => {
                space(out, &invocation.prefix);
                if let Some(select) = &invocation.select {
                    self.print_expression(&select.elem, out);
                    space(out, &select.after);
                    out.push('.');
                }
                self.print_identifier(&invocation.name, out);
                self.print_expr_container(&invocation.args, out);
            }
            Expression::Lambda(lambda) => self.print_lambda(lambda, out),
            Expression::Parentheses(parens) => {
                space(out, &parens.prefix);
                out.push('(');
                self.print_expression(&parens.tree.elem, out);
                space(out, &parens.tree.after);
                out.push(')');
            }
            Expression::Empty(empty) => space(out, &empty.prefix),
            Expression::Erroneous(erroneous) => {
                space(out, &erroneous.prefix);
                out.push_str(&erroneous.text);
            }
        }
    }

    /// Argument list. An omitted-parentheses marker suppresses both parens
    /// and prints bare comma-separated arguments.
    fn print_expr_container(&self, container: &Container<Expression>, out: &mut String) {
        if container.markers.has_omit_parentheses() {
            for (i, elem) in container.elems.iter().enumerate() {
                self.print_expression(&elem.elem, out);
                space(out, &elem.after);
                if i + 1 < container.elems.len() {
                    out.push(',');
                }
            }
            return;
        }
        space(out, &container.before);
        out.push('(');
        for (i, elem) in container.elems.iter().enumerate() {
            self.print_expression(&elem.elem, out);
            space(out, &elem.after);
            if i + 1 < container.elems.len() {
                out.push(',');
            } else if let Some(trailing) = elem.markers.trailing_comma() {
                out.push(',');
                space(out, trailing);
            }
        }
        out.push(')');
    }

    /// Parenthesized statement list (method parameters).
    fn print_statement_container(&self, container: &Container<Statement>, out: &mut String) {
        space(out, &container.before);
        out.push('(');
        for (i, elem) in container.elems.iter().enumerate() {
            self.print_statement(&elem.elem, out);
            space(out, &elem.after);
            if i + 1 < container.elems.len() {
                out.push(',');
            }
        }
        out.push(')');
    }

    /// Shared-grammar lambda: `(a, b) -> body`. The scripting dialect
    /// overrides this with its braced closure form.
    fn print_lambda(&self, lambda: &Lambda, out: &mut String) {
        space(out, &lambda.prefix);
        space(out, &lambda.params.prefix);
        if lambda.params.parenthesized {
            out.push('(');
        }
        for (i, param) in lambda.params.params.iter().enumerate() {
            self.print_statement(&param.elem, out);
            space(out, &param.after);
            if i + 1 < lambda.params.params.len() {
                out.push(',');
            }
        }
        if lambda.params.parenthesized {
            out.push(')');
        }
        space(out, &lambda.arrow);
        out.push_str("->");
        self.print_statement(&lambda.body, out);
    }
}

/// The shared statically-typed grammar, no overrides.
pub struct JavaPrinter;

impl TreePrinter for JavaPrinter {}
