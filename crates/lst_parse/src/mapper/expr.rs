//! Expression mapping.
//!
//! Composite expressions (binary, assignment, field access, invocation)
//! keep an empty prefix of their own; the leading space belongs to their
//! first child, which is also where the source puts it.

use lst_tree::{
    Assignment, Binary, Container, Empty, Expression, FieldAccess, Lambda, LambdaParams,
    LeftPadded, Literal, LiteralValue, Marker, Markers, MethodInvocation, Parentheses, RightPadded,
    Space, Statement, TreeId,
};
use lst_types::{Primitive, Ty};

use super::{DialectOps, TreeMapper};
use crate::error::MapError;
use crate::host::{HostCall, HostExpr, HostLambda, HostLiteral, HostStatement};

impl<D: DialectOps> TreeMapper<'_, D> {
    pub(crate) fn map_expr(&mut self, expr: &HostExpr) -> Result<Expression, MapError> {
        match expr {
            HostExpr::Literal { span, value, ty } => {
                let prefix = self.cursor.whitespace();
                let token = span.text(self.cursor.source());
                if token.is_empty() {
                    return Err(MapError::UnsupportedNode(
                        "literal without source text".into(),
                    ));
                }
                let at = self.cursor.position();
                let token = token.to_string();
                if self.cursor.skip(&token).is_none() {
                    return Err(MapError::expected(token, at));
                }
                let mut literal = Literal::new(prefix, literal_value(value), token);
                literal.ty = self
                    .resolve(ty.as_ref())
                    .or_else(|| Some(default_literal_ty(value)));
                Ok(Expression::Literal(literal))
            }
            HostExpr::Ident { name, ty, .. } => {
                let mut identifier = self.map_identifier(name)?;
                identifier.ty = self.resolve(ty.as_ref());
                Ok(Expression::Identifier(identifier))
            }
            HostExpr::FieldAccess {
                target, name, ty, ..
            } => {
                let target = self.map_expr(target)?;
                let before = self.cursor.whitespace();
                self.expect(".")?;
                let name = self.map_identifier(name)?;
                Ok(Expression::FieldAccess(Box::new(FieldAccess {
                    id: TreeId::random(),
                    prefix: Space::empty(),
                    markers: Markers::new(),
                    target,
                    name: LeftPadded::new(before, name),
                    ty: self.resolve(ty.as_ref()),
                })))
            }
            HostExpr::Call(call) => D::map_invocation(self, call),
            HostExpr::Binary {
                op,
                left,
                right,
                ty,
                ..
            } => {
                let left = self.map_expr(left)?;
                let before = self.cursor.whitespace();
                self.expect(op.token())?;
                let right = self.map_expr(right)?;
                Ok(Expression::Binary(Box::new(Binary {
                    id: TreeId::random(),
                    prefix: Space::empty(),
                    markers: Markers::new(),
                    left,
                    operator: LeftPadded::new(before, *op),
                    right,
                    ty: self.resolve(ty.as_ref()),
                })))
            }
            HostExpr::Unary { op, expr, ty, .. } => {
                let prefix = self.cursor.whitespace();
                self.expect(op.token())?;
                let operand = self.map_expr(expr)?;
                Ok(Expression::Unary(Box::new(lst_tree::Unary {
                    id: TreeId::random(),
                    prefix,
                    markers: Markers::new(),
                    operator: LeftPadded::new(Space::empty(), *op),
                    expr: operand,
                    ty: self.resolve(ty.as_ref()),
                })))
            }
            HostExpr::Assign {
                target, value, ty, ..
            } => {
                let variable = self.map_expr(target)?;
                let before = self.cursor.whitespace();
                self.expect("=")?;
                let value = self.map_expr(value)?;
                Ok(Expression::Assignment(Box::new(Assignment {
                    id: TreeId::random(),
                    prefix: Space::empty(),
                    markers: Markers::new(),
                    variable,
                    assignment: LeftPadded::new(before, value),
                    ty: self.resolve(ty.as_ref()),
                })))
            }
            HostExpr::Lambda(lambda) => D::map_lambda(self, lambda),
            HostExpr::Paren { inner, .. } => {
                let prefix = self.cursor.whitespace();
                self.expect("(")?;
                let tree = self.map_expr(inner)?;
                let after = self.cursor.whitespace();
                self.expect(")")?;
                Ok(Expression::Parentheses(Box::new(Parentheses {
                    id: TreeId::random(),
                    prefix,
                    markers: Markers::new(),
                    tree: RightPadded::new(tree, after),
                })))
            }
            HostExpr::Error { span } => Ok(Expression::Erroneous(self.map_erroneous(*span))),
        }
    }

    /// Shared-grammar invocation: `select.name(args)` with mandatory parens.
    pub(crate) fn map_invocation_base(&mut self, call: &HostCall) -> Result<Expression, MapError> {
        let select = match &call.select {
            Some(receiver) => {
                let expr = self.map_expr(receiver)?;
                let after = self.cursor.whitespace();
                self.expect(".")?;
                Some(RightPadded::new(expr, after))
            }
            None => None,
        };
        let name = self.map_identifier(&call.name)?;
        let args = self.paren_container_exprs(&call.args)?;
        let method_type = call
            .handle
            .as_ref()
            .and_then(|handle| self.oracle.resolve_method(handle));
        Ok(Expression::MethodInvocation(Box::new(MethodInvocation {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers: Markers::new(),
            select,
            name,
            args,
            method_type,
        })))
    }

    /// Shared-grammar lambda: `(a, b) -> body` or `x -> body`.
    pub(crate) fn map_lambda_base(&mut self, lambda: &HostLambda) -> Result<Expression, MapError> {
        let prefix = self.cursor.whitespace();
        let parenthesized = self.cursor.starts_with("(");
        let params = if parenthesized {
            self.expect("(")?;
            let mut params = Vec::with_capacity(lambda.params.len().max(1));
            if lambda.params.is_empty() {
                let inner = self.cursor.whitespace();
                self.expect(")")?;
                params.push(RightPadded::new(
                    Statement::Empty(Empty::new(inner)),
                    Space::empty(),
                ));
            } else {
                for (i, param) in lambda.params.iter().enumerate() {
                    let decl = self.map_var_decls(param)?;
                    let after = self.cursor.whitespace();
                    self.expect(if i + 1 == lambda.params.len() { ")" } else { "," })?;
                    params.push(RightPadded::new(
                        Statement::VariableDecls(Box::new(decl)),
                        after,
                    ));
                }
            }
            LambdaParams {
                prefix: Space::empty(),
                parenthesized: true,
                params,
            }
        } else {
            let Some(param) = lambda.params.first() else {
                return Err(MapError::UnsupportedNode(
                    "lambda with neither parentheses nor parameters".into(),
                ));
            };
            let decl = self.map_var_decls(param)?;
            LambdaParams {
                prefix: Space::empty(),
                parenthesized: false,
                params: vec![RightPadded::new(
                    Statement::VariableDecls(Box::new(decl)),
                    Space::empty(),
                )],
            }
        };
        let arrow = self.cursor.whitespace();
        self.expect("->")?;
        let body = self.map_lambda_body(&lambda.body)?;
        Ok(Expression::Lambda(Box::new(Lambda {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            params,
            arrow,
            body,
            ty: self.resolve(lambda.ty.as_ref()),
        })))
    }

    pub(crate) fn map_lambda_body(&mut self, body: &HostStatement) -> Result<Statement, MapError> {
        match body {
            HostStatement::Expr(expr) => Ok(Statement::Expression(self.map_expr(expr)?)),
            other => self.map_statement(other),
        }
    }

    /// `(...)` argument expressions; an empty list is a single [`Empty`]
    /// holding the space between the parens, and a trailing separator is
    /// recorded as a [`Marker::TrailingComma`] on the last element.
    pub(crate) fn paren_container_exprs(
        &mut self,
        args: &[HostExpr],
    ) -> Result<Container<Expression>, MapError> {
        let before = self.cursor.whitespace();
        self.expect("(")?;
        let mut elems = Vec::with_capacity(args.len().max(1));
        if args.is_empty() {
            let inner = self.cursor.whitespace();
            self.expect(")")?;
            elems.push(RightPadded::new(
                Expression::Empty(Empty::new(inner)),
                Space::empty(),
            ));
            return Ok(Container::new(before, elems));
        }
        for (i, arg) in args.iter().enumerate() {
            let expr = self.map_expr(arg)?;
            let after = self.cursor.whitespace();
            if i + 1 < args.len() {
                self.expect(",")?;
                elems.push(RightPadded::new(expr, after));
            } else if self.cursor.skip(",").is_some() {
                let trailing = self.cursor.whitespace();
                self.expect(")")?;
                elems.push(RightPadded::with_markers(
                    expr,
                    after,
                    Markers::with(Marker::TrailingComma(trailing)),
                ));
            } else {
                self.expect(")")?;
                elems.push(RightPadded::new(expr, after));
            }
        }
        Ok(Container::new(before, elems))
    }
}

fn literal_value(value: &HostLiteral) -> LiteralValue {
    match value {
        HostLiteral::Bool(b) => LiteralValue::Bool(*b),
        HostLiteral::Char(c) => LiteralValue::Char(*c),
        HostLiteral::Int(i) => LiteralValue::Int(*i),
        HostLiteral::Float(f) => LiteralValue::Float(*f),
        HostLiteral::Str(s) => LiteralValue::Str(s.clone()),
        HostLiteral::Null => LiteralValue::Null,
    }
}

/// Fallback when the host carries no type handle for a literal; the token
/// kind alone determines a primitive descriptor.
fn default_literal_ty(value: &HostLiteral) -> Ty {
    Ty::Primitive(match value {
        HostLiteral::Bool(_) => Primitive::Boolean,
        HostLiteral::Char(_) => Primitive::Char,
        HostLiteral::Int(_) => Primitive::Int,
        HostLiteral::Float(_) => Primitive::Double,
        HostLiteral::Str(_) => Primitive::Str,
        HostLiteral::Null => Primitive::Null,
    })
}
