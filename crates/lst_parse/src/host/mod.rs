//! Closed facade over the host compiler's AST.
//!
//! The mapping visitors never see host compiler internals. A front-end
//! integration lowers the host's tree into this small closed family first;
//! the mapper then dispatches over it with exhaustive matches, so an
//! unhandled node kind is a compile error here rather than a runtime
//! surprise mid-parse.
//!
//! Every node carries a byte [`Span`] into the original text. Spans drive
//! source-order sorting of top-level declarations, annotation position
//! lookup during modifier reordering, and erroneous-fragment capture; a
//! compiler-inserted node with no real position uses [`Span::SYNTHETIC`].
//! Type information rides along as opaque [`HostType`] handles resolved
//! later through a `TypeOracle`.

pub mod build;

use bitflags::bitflags;
use lst_tree::{BinaryOp, ClassKind, Span, UnaryOp};
use lst_types::{HostMethodHandle, HostType};

/// Root of one host-parsed source file.
#[derive(Clone, Debug, Default)]
pub struct HostUnit {
    pub package: Option<HostPackage>,
    pub imports: Vec<HostImport>,
    pub classes: Vec<HostClassDecl>,
    /// Loose top-level statements (scripting dialect only).
    pub statements: Vec<HostStatement>,
    /// Problems the host front-end reported while parsing this file.
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct HostPackage {
    pub span: Span,
    /// Dotted name, split on `.`.
    pub name: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct HostImport {
    pub span: Span,
    pub statik: bool,
    /// Dotted path; the last segment may be `*`.
    pub path: Vec<String>,
}

bitflags! {
    /// Host modifier bit-set. Deliberately positional-order-free: the
    /// reordering pass recovers source order from the text itself.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
    pub struct ModifierFlags: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const NATIVE = 1 << 6;
        const SYNCHRONIZED = 1 << 7;
        const TRANSIENT = 1 << 8;
        const VOLATILE = 1 << 9;
        const STRICTFP = 1 << 10;
        const DEFAULT = 1 << 11;
        /// Scripting-dialect untyped declaration keyword.
        const DEF = 1 << 12;
    }
}

/// Modifier bits plus annotations, both in the host's canonical order.
#[derive(Clone, Debug, Default)]
pub struct HostModifiers {
    pub flags: ModifierFlags,
    pub annotations: Vec<HostAnnotation>,
}

#[derive(Clone, Debug)]
pub struct HostAnnotation {
    /// Span of the whole annotation starting at `@`.
    pub span: Span,
    /// Dotted annotation name, split on `.`.
    pub path: Vec<String>,
    /// `None` when the annotation has no argument list at all.
    pub args: Option<Vec<HostExpr>>,
}

/// A type as written in a source position.
#[derive(Clone, Debug)]
pub enum HostTypeRef {
    Primitive {
        span: Span,
        keyword: String,
    },
    Named {
        span: Span,
        /// Dotted name, split on `.`.
        parts: Vec<String>,
        ty: Option<HostType>,
    },
    Parameterized {
        span: Span,
        base: Box<HostTypeRef>,
        args: Vec<HostTypeRef>,
        ty: Option<HostType>,
    },
    Array {
        span: Span,
        elem: Box<HostTypeRef>,
        ty: Option<HostType>,
    },
}

impl HostTypeRef {
    pub fn span(&self) -> Span {
        match self {
            HostTypeRef::Primitive { span, .. }
            | HostTypeRef::Named { span, .. }
            | HostTypeRef::Parameterized { span, .. }
            | HostTypeRef::Array { span, .. } => *span,
        }
    }

    pub fn ty(&self) -> Option<&HostType> {
        match self {
            HostTypeRef::Primitive { .. } => None,
            HostTypeRef::Named { ty, .. }
            | HostTypeRef::Parameterized { ty, .. }
            | HostTypeRef::Array { ty, .. } => ty.as_ref(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HostTypeParam {
    pub span: Span,
    pub name: String,
    /// Bounds after `extends`, in source order.
    pub bounds: Vec<HostTypeRef>,
}

#[derive(Clone, Debug)]
pub struct HostClassDecl {
    pub span: Span,
    pub mods: HostModifiers,
    pub kind: ClassKind,
    pub name: String,
    pub type_params: Vec<HostTypeParam>,
    pub extends: Option<HostTypeRef>,
    pub implements: Vec<HostTypeRef>,
    pub members: Vec<HostStatement>,
    pub ty: Option<HostType>,
}

#[derive(Clone, Debug)]
pub struct HostMethodDecl {
    pub span: Span,
    pub mods: HostModifiers,
    pub type_params: Vec<HostTypeParam>,
    /// Absent for constructors and scripting-dialect `def` methods.
    pub return_type: Option<HostTypeRef>,
    pub name: String,
    /// Each parameter is a single-variable declaration.
    pub params: Vec<HostVariableDecls>,
    pub throws: Vec<HostTypeRef>,
    /// Absent for abstract and interface methods.
    pub body: Option<HostBlock>,
    pub handle: Option<HostMethodHandle>,
}

#[derive(Clone, Debug)]
pub struct HostVariableDecls {
    pub span: Span,
    pub mods: HostModifiers,
    /// Absent for untyped scripting-dialect declarations.
    pub type_ref: Option<HostTypeRef>,
    pub vars: Vec<HostNamedVar>,
}

#[derive(Clone, Debug)]
pub struct HostNamedVar {
    pub span: Span,
    pub name: String,
    pub init: Option<HostExpr>,
}

#[derive(Clone, Debug)]
pub struct HostBlock {
    pub span: Span,
    pub statements: Vec<HostStatement>,
}

#[derive(Clone, Debug)]
pub struct HostIf {
    pub span: Span,
    pub cond: HostExpr,
    pub then_branch: HostStatement,
    pub else_branch: Option<HostStatement>,
}

#[derive(Clone, Debug)]
pub enum HostStatement {
    Block(HostBlock),
    If(Box<HostIf>),
    Return { span: Span, expr: Option<HostExpr> },
    Expr(HostExpr),
    VarDecls(HostVariableDecls),
    Method(Box<HostMethodDecl>),
    Class(Box<HostClassDecl>),
    Empty { span: Span },
    /// A region the host front-end could not parse; the span covers the
    /// exact unparseable text.
    Error { span: Span },
}

impl HostStatement {
    pub fn span(&self) -> Span {
        match self {
            HostStatement::Block(b) => b.span,
            HostStatement::If(i) => i.span,
            HostStatement::Return { span, .. } => *span,
            HostStatement::Expr(e) => e.span(),
            HostStatement::VarDecls(v) => v.span,
            HostStatement::Method(m) => m.span,
            HostStatement::Class(c) => c.span,
            HostStatement::Empty { span } => *span,
            HostStatement::Error { span } => *span,
        }
    }
}

#[derive(Clone, Debug)]
pub enum HostLiteral {
    Bool(bool),
    Char(char),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

#[derive(Clone, Debug)]
pub struct HostCall {
    pub span: Span,
    /// Receiver ahead of the dot, absent for unqualified calls.
    pub select: Option<HostExpr>,
    pub name: String,
    /// Span of the method name token itself.
    pub name_span: Span,
    pub args: Vec<HostExpr>,
    pub handle: Option<HostMethodHandle>,
}

#[derive(Clone, Debug)]
pub struct HostLambda {
    pub span: Span,
    /// Each parameter is a single-variable declaration.
    pub params: Vec<HostVariableDecls>,
    /// An expression body or a statement block.
    pub body: HostStatement,
    pub ty: Option<HostType>,
}

#[derive(Clone, Debug)]
pub enum HostExpr {
    Literal {
        span: Span,
        value: HostLiteral,
        ty: Option<HostType>,
    },
    Ident {
        span: Span,
        name: String,
        ty: Option<HostType>,
    },
    FieldAccess {
        span: Span,
        target: Box<HostExpr>,
        name: String,
        ty: Option<HostType>,
    },
    Call(Box<HostCall>),
    Binary {
        span: Span,
        op: BinaryOp,
        left: Box<HostExpr>,
        right: Box<HostExpr>,
        ty: Option<HostType>,
    },
    Unary {
        span: Span,
        op: UnaryOp,
        expr: Box<HostExpr>,
        ty: Option<HostType>,
    },
    Assign {
        span: Span,
        target: Box<HostExpr>,
        value: Box<HostExpr>,
        ty: Option<HostType>,
    },
    Lambda(Box<HostLambda>),
    Paren {
        span: Span,
        inner: Box<HostExpr>,
    },
    Error {
        span: Span,
    },
}

impl HostExpr {
    pub fn span(&self) -> Span {
        match self {
            HostExpr::Literal { span, .. }
            | HostExpr::Ident { span, .. }
            | HostExpr::FieldAccess { span, .. }
            | HostExpr::Binary { span, .. }
            | HostExpr::Unary { span, .. }
            | HostExpr::Assign { span, .. }
            | HostExpr::Paren { span, .. }
            | HostExpr::Error { span } => *span,
            HostExpr::Call(c) => c.span,
            HostExpr::Lambda(l) => l.span,
        }
    }
}
