//! Statement mapping.

use lst_tree::{
    Block, Else, Empty, If, Markers, Parentheses, Return, RightPadded, Statement, TreeId,
};

use super::{DialectOps, TreeMapper};
use crate::error::MapError;
use crate::host::{HostIf, HostStatement};

impl<D: DialectOps> TreeMapper<'_, D> {
    pub(crate) fn map_statement(&mut self, statement: &HostStatement) -> Result<Statement, MapError> {
        match statement {
            HostStatement::Block(block) => Ok(Statement::Block(Box::new(
                self.map_braced(&block.statements)?,
            ))),
            HostStatement::If(conditional) => {
                Ok(Statement::If(Box::new(self.map_if(conditional)?)))
            }
            HostStatement::Return { expr, .. } => {
                let prefix = self.cursor.whitespace();
                self.expect("return")?;
                let expr = expr.as_ref().map(|e| self.map_expr(e)).transpose()?;
                Ok(Statement::Return(Box::new(Return {
                    id: TreeId::random(),
                    prefix,
                    markers: Markers::new(),
                    expr,
                })))
            }
            HostStatement::Expr(expr) => Ok(Statement::Expression(self.map_expr(expr)?)),
            HostStatement::VarDecls(decls) => Ok(Statement::VariableDecls(Box::new(
                self.map_var_decls(decls)?,
            ))),
            HostStatement::Method(method) => {
                Ok(Statement::MethodDecl(Box::new(self.map_method(method)?)))
            }
            HostStatement::Class(class) => {
                Ok(Statement::ClassDecl(Box::new(self.map_class(class)?)))
            }
            HostStatement::Empty { .. } => {
                // The `;` itself is the statement padding's marker.
                Ok(Statement::Empty(Empty::new(self.cursor.whitespace())))
            }
            HostStatement::Error { span } => Ok(Statement::Erroneous(self.map_erroneous(*span))),
        }
    }

    /// `{ ... }` including both braces.
    pub(crate) fn map_braced(&mut self, statements: &[HostStatement]) -> Result<Block, MapError> {
        let prefix = self.cursor.whitespace();
        self.expect("{")?;
        let statements = self.map_padded_statements(statements)?;
        let end = self.cursor.whitespace();
        self.expect("}")?;
        Ok(Block {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            statements,
            end,
        })
    }

    pub(crate) fn map_padded_statements(
        &mut self,
        statements: &[HostStatement],
    ) -> Result<Vec<RightPadded<Statement>>, MapError> {
        let mut padded = Vec::with_capacity(statements.len());
        for statement in statements {
            let mapped = self.map_statement(statement)?;
            padded.push(self.statement_padding(mapped));
        }
        Ok(padded)
    }

    fn map_if(&mut self, conditional: &HostIf) -> Result<If, MapError> {
        let prefix = self.cursor.whitespace();
        self.expect("if")?;
        let condition_prefix = self.cursor.whitespace();
        self.expect("(")?;
        let condition_expr = self.map_expr(&conditional.cond)?;
        let condition_after = self.cursor.whitespace();
        self.expect(")")?;
        let condition = Parentheses {
            id: TreeId::random(),
            prefix: condition_prefix,
            markers: Markers::new(),
            tree: RightPadded::new(condition_expr, condition_after),
        };
        let then_statement = self.map_statement(&conditional.then_branch)?;
        let then_part = self.statement_padding(then_statement);
        let else_part = match &conditional.else_branch {
            Some(else_branch) => {
                let else_prefix = self.cursor.whitespace();
                self.expect("else")?;
                let body_statement = self.map_statement(else_branch)?;
                Some(Else {
                    id: TreeId::random(),
                    prefix: else_prefix,
                    markers: Markers::new(),
                    body: self.statement_padding(body_statement),
                })
            }
            None => None,
        };
        Ok(If {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            condition,
            then_part,
            else_part,
        })
    }
}
