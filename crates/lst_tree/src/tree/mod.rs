//! The LST node family.
//!
//! One struct per syntactic construct, grouped by category:
//!
//! - `expr`: expressions (identifiers, literals, operators, invocations)
//! - `stmt`: statements and blocks
//! - `decl`: compilation units and declarations
//! - `ty`: type trees appearing in source positions
//!
//! Every node carries a random [`TreeId`], a prefix [`Space`] holding the
//! formatting ahead of its first token, and [`Markers`]. Category enums
//! ([`Expression`], [`Statement`], [`TypeTree`]) are closed; consumers match
//! exhaustively.

mod decl;
mod expr;
mod stmt;
mod ty;

pub use decl::{
    Annotation, ClassDecl, ClassKind, CompilationUnit, Import, MethodDecl, Modifier,
    ModifierKeyword, NamedVariable, Package, TypeParameter, VariableDecls,
};
pub use expr::{
    Assignment, Binary, BinaryOp, Empty, Erroneous, FieldAccess, Identifier, Lambda, LambdaParams,
    Literal, LiteralValue, MethodInvocation, Parentheses, Unary, UnaryOp,
};
pub use stmt::{Block, Else, If, Return};
pub use ty::{ArrayType, ParameterizedType};

use crate::id::TreeId;
use crate::marker::Markers;
use crate::space::Space;

/// Host grammar a compilation unit was produced from. The printer selects
/// dialect-specific overrides based on this.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dialect {
    /// The statically typed general-purpose grammar.
    Java,
    /// The scripting dialect sharing most of the grammar but allowing
    /// command-style calls, closures, and loose top-level statements.
    Groovy,
}

/// Expression nodes.
#[derive(Clone, PartialEq, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Binary(Box<Binary>),
    Unary(Box<Unary>),
    Assignment(Box<Assignment>),
    FieldAccess(Box<FieldAccess>),
    MethodInvocation(Box<MethodInvocation>),
    Lambda(Box<Lambda>),
    Parentheses(Box<Parentheses>),
    Empty(Empty),
    Erroneous(Erroneous),
}

impl Expression {
    pub fn id(&self) -> TreeId {
        match self {
            Expression::Identifier(n) => n.id,
            Expression::Literal(n) => n.id,
            Expression::Binary(n) => n.id,
            Expression::Unary(n) => n.id,
            Expression::Assignment(n) => n.id,
            Expression::FieldAccess(n) => n.id,
            Expression::MethodInvocation(n) => n.id,
            Expression::Lambda(n) => n.id,
            Expression::Parentheses(n) => n.id,
            Expression::Empty(n) => n.id,
            Expression::Erroneous(n) => n.id,
        }
    }

    pub fn prefix(&self) -> &Space {
        match self {
            Expression::Identifier(n) => &n.prefix,
            Expression::Literal(n) => &n.prefix,
            Expression::Binary(n) => &n.prefix,
            Expression::Unary(n) => &n.prefix,
            Expression::Assignment(n) => &n.prefix,
            Expression::FieldAccess(n) => &n.prefix,
            Expression::MethodInvocation(n) => &n.prefix,
            Expression::Lambda(n) => &n.prefix,
            Expression::Parentheses(n) => &n.prefix,
            Expression::Empty(n) => &n.prefix,
            Expression::Erroneous(n) => &n.prefix,
        }
    }

    pub fn prefix_mut(&mut self) -> &mut Space {
        match self {
            Expression::Identifier(n) => &mut n.prefix,
            Expression::Literal(n) => &mut n.prefix,
            Expression::Binary(n) => &mut n.prefix,
            Expression::Unary(n) => &mut n.prefix,
            Expression::Assignment(n) => &mut n.prefix,
            Expression::FieldAccess(n) => &mut n.prefix,
            Expression::MethodInvocation(n) => &mut n.prefix,
            Expression::Lambda(n) => &mut n.prefix,
            Expression::Parentheses(n) => &mut n.prefix,
            Expression::Empty(n) => &mut n.prefix,
            Expression::Erroneous(n) => &mut n.prefix,
        }
    }

    pub fn markers(&self) -> &Markers {
        match self {
            Expression::Identifier(n) => &n.markers,
            Expression::Literal(n) => &n.markers,
            Expression::Binary(n) => &n.markers,
            Expression::Unary(n) => &n.markers,
            Expression::Assignment(n) => &n.markers,
            Expression::FieldAccess(n) => &n.markers,
            Expression::MethodInvocation(n) => &n.markers,
            Expression::Lambda(n) => &n.markers,
            Expression::Parentheses(n) => &n.markers,
            Expression::Empty(n) => &n.markers,
            Expression::Erroneous(n) => &n.markers,
        }
    }
}

/// Statement nodes. Declarations are statements so that a compilation unit
/// can hold its package, imports, classes, and loose script statements in
/// one source-ordered sequence.
#[derive(Clone, PartialEq, Debug)]
pub enum Statement {
    Package(Box<Package>),
    Import(Box<Import>),
    ClassDecl(Box<ClassDecl>),
    MethodDecl(Box<MethodDecl>),
    VariableDecls(Box<VariableDecls>),
    Block(Box<Block>),
    If(Box<If>),
    Return(Box<Return>),
    Expression(Expression),
    Empty(Empty),
    Erroneous(Erroneous),
}

impl Statement {
    pub fn id(&self) -> TreeId {
        match self {
            Statement::Package(n) => n.id,
            Statement::Import(n) => n.id,
            Statement::ClassDecl(n) => n.id,
            Statement::MethodDecl(n) => n.id,
            Statement::VariableDecls(n) => n.id,
            Statement::Block(n) => n.id,
            Statement::If(n) => n.id,
            Statement::Return(n) => n.id,
            Statement::Expression(e) => e.id(),
            Statement::Empty(n) => n.id,
            Statement::Erroneous(n) => n.id,
        }
    }

    pub fn prefix(&self) -> &Space {
        match self {
            Statement::Package(n) => &n.prefix,
            Statement::Import(n) => &n.prefix,
            Statement::ClassDecl(n) => &n.prefix,
            Statement::MethodDecl(n) => &n.prefix,
            Statement::VariableDecls(n) => &n.prefix,
            Statement::Block(n) => &n.prefix,
            Statement::If(n) => &n.prefix,
            Statement::Return(n) => &n.prefix,
            Statement::Expression(e) => e.prefix(),
            Statement::Empty(n) => &n.prefix,
            Statement::Erroneous(n) => &n.prefix,
        }
    }
}

/// Type trees: types as they appear in source positions (variable types,
/// extends clauses, annotation names).
#[derive(Clone, PartialEq, Debug)]
pub enum TypeTree {
    Identifier(Identifier),
    FieldAccess(Box<FieldAccess>),
    Parameterized(Box<ParameterizedType>),
    Array(Box<ArrayType>),
}

impl TypeTree {
    pub fn id(&self) -> TreeId {
        match self {
            TypeTree::Identifier(n) => n.id,
            TypeTree::FieldAccess(n) => n.id,
            TypeTree::Parameterized(n) => n.id,
            TypeTree::Array(n) => n.id,
        }
    }

    pub fn prefix(&self) -> &Space {
        match self {
            TypeTree::Identifier(n) => &n.prefix,
            TypeTree::FieldAccess(n) => &n.prefix,
            TypeTree::Parameterized(n) => &n.prefix,
            TypeTree::Array(n) => &n.prefix,
        }
    }
}
