//! Scripting-dialect overrides.
//!
//! The dialect shares the whole base grammar and replaces exactly two
//! operations: method invocation (command-style calls may omit argument
//! parentheses, and the host front-end collapses parentheses wrapping a
//! whole call into the call's span) and lambda mapping (closures are braced,
//! with an optional arrow after the parameter list).

mod paren;

use lst_tree::{
    Block, Container, Dialect, Empty, Expression, Lambda, LambdaParams, Marker, Markers,
    MethodInvocation, Parentheses, RightPadded, Space, Statement, TreeId,
};

use crate::error::MapError;
use crate::host::{HostCall, HostLambda, HostStatement};
use crate::mapper::{DialectOps, TreeMapper};

pub struct GroovyDialect;

impl DialectOps for GroovyDialect {
    const DIALECT: Dialect = Dialect::Groovy;

    fn map_invocation(
        mapper: &mut TreeMapper<'_, Self>,
        call: &HostCall,
    ) -> Result<Expression, MapError> {
        // Parentheses wrapping the whole call are part of the call's span in
        // the host AST; recover how many layers are shared from the text.
        let mut depth = 0;
        if call.select.is_none() && !call.span.is_synthetic() {
            let checkpoint = mapper.cursor.checkpoint();
            let _ = mapper.cursor.whitespace();
            if mapper.cursor.starts_with("(") {
                let end = (call.span.end as usize).min(mapper.cursor.source().len());
                let snippet = &mapper.cursor.source()[mapper.cursor.position()..end];
                depth = paren::shared_paren_depth(snippet, &call.name);
            }
            mapper.cursor.restore(checkpoint);
        }
        let mut wrappers = Vec::with_capacity(depth);
        for _ in 0..depth {
            let prefix = mapper.cursor.whitespace();
            mapper.expect("(")?;
            wrappers.push(prefix);
        }

        let select = match &call.select {
            Some(receiver) => {
                let expr = mapper.map_expr(receiver)?;
                let after = mapper.cursor.whitespace();
                mapper.expect(".")?;
                Some(RightPadded::new(expr, after))
            }
            None => None,
        };
        let name = mapper.map_identifier(&call.name)?;

        let explicit_parens = {
            let checkpoint = mapper.cursor.checkpoint();
            let _ = mapper.cursor.whitespace();
            let explicit = mapper.cursor.starts_with("(")
                && !paren::group_is_first_argument(mapper.cursor.rest());
            mapper.cursor.restore(checkpoint);
            explicit
        };
        let args = if explicit_parens {
            mapper.paren_container_exprs(&call.args)?
        } else {
            let mut elems = Vec::with_capacity(call.args.len());
            for (i, arg) in call.args.iter().enumerate() {
                let expr = mapper.map_expr(arg)?;
                let after = if i + 1 == call.args.len() {
                    Space::empty()
                } else {
                    let space = mapper.cursor.whitespace();
                    mapper.expect(",")?;
                    space
                };
                elems.push(RightPadded::new(expr, after));
            }
            Container::with_markers(
                Space::empty(),
                elems,
                Markers::with(Marker::OmitParentheses),
            )
        };
        let method_type = call
            .handle
            .as_ref()
            .and_then(|handle| mapper.oracle.resolve_method(handle));

        let mut expr = Expression::MethodInvocation(Box::new(MethodInvocation {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers: Markers::new(),
            select,
            name,
            args,
            method_type,
        }));
        for prefix in wrappers.into_iter().rev() {
            let after = mapper.cursor.whitespace();
            mapper.expect(")")?;
            expr = Expression::Parentheses(Box::new(Parentheses {
                id: TreeId::random(),
                prefix,
                markers: Markers::new(),
                tree: RightPadded::new(expr, after),
            }));
        }
        Ok(expr)
    }

    fn map_lambda(
        mapper: &mut TreeMapper<'_, Self>,
        lambda: &HostLambda,
    ) -> Result<Expression, MapError> {
        let prefix = mapper.cursor.whitespace();
        mapper.expect("{")?;

        let (params, arrow) = if lambda.params.is_empty() {
            // `{ -> ... }` declares zero parameters explicitly; `{ ... }`
            // has no arrow at all. An Empty parameter records the former so
            // the printer knows to emit the arrow.
            let checkpoint = mapper.cursor.checkpoint();
            let space = mapper.cursor.whitespace();
            if mapper.cursor.skip("->").is_some() {
                (
                    LambdaParams {
                        prefix: Space::empty(),
                        parenthesized: false,
                        params: vec![RightPadded::new(
                            Statement::Empty(Empty::new(Space::empty())),
                            Space::empty(),
                        )],
                    },
                    space,
                )
            } else {
                mapper.cursor.restore(checkpoint);
                (
                    LambdaParams {
                        prefix: Space::empty(),
                        parenthesized: false,
                        params: Vec::new(),
                    },
                    Space::empty(),
                )
            }
        } else {
            let mut params = Vec::with_capacity(lambda.params.len());
            for (i, param) in lambda.params.iter().enumerate() {
                let decl = mapper.map_var_decls(param)?;
                let after = if i + 1 == lambda.params.len() {
                    Space::empty()
                } else {
                    let space = mapper.cursor.whitespace();
                    mapper.expect(",")?;
                    space
                };
                params.push(RightPadded::new(
                    Statement::VariableDecls(Box::new(decl)),
                    after,
                ));
            }
            let arrow = mapper.cursor.whitespace();
            mapper.expect("->")?;
            (
                LambdaParams {
                    prefix: Space::empty(),
                    parenthesized: false,
                    params,
                },
                arrow,
            )
        };

        let statements = match &lambda.body {
            HostStatement::Block(block) => mapper.map_padded_statements(&block.statements)?,
            other => {
                let statement = mapper.map_lambda_body(other)?;
                vec![mapper.statement_padding(statement)]
            }
        };
        let end = mapper.cursor.whitespace();
        mapper.expect("}")?;

        // The braces belong to the closure, not the block.
        let body = Statement::Block(Box::new(Block {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers: Markers::with(Marker::OmitBraces),
            statements,
            end,
        }));
        Ok(Expression::Lambda(Box::new(Lambda {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            params,
            arrow,
            body,
            ty: mapper.resolve(lambda.ty.as_ref()),
        })))
    }
}
