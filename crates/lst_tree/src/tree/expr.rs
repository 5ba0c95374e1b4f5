//! Expression nodes.

use lst_types::{Method, Ty};
use std::sync::Arc;

use crate::id::TreeId;
use crate::marker::Markers;
use crate::pad::{Container, LeftPadded, RightPadded};
use crate::space::Space;

use super::{Expression, Statement};

/// A simple name: variable, field, method, class, or keyword-like token the
/// host treats as a name (`this`, `super`).
#[derive(Clone, PartialEq, Debug)]
pub struct Identifier {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub simple_name: String,
    pub ty: Option<Ty>,
}

impl Identifier {
    pub fn new(prefix: Space, simple_name: impl Into<String>) -> Identifier {
        Identifier {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            simple_name: simple_name.into(),
            ty: None,
        }
    }
}

/// Literal value, with the original token text preserved separately so that
/// `0x1F`, `1_000` and `1e3` print back exactly.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Bool(bool),
    Char(char),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Literal {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub value: LiteralValue,
    /// Exact token text from the source, including quotes and any numeric
    /// suffix or underscore separators.
    pub value_source: String,
    pub ty: Option<Ty>,
}

impl Literal {
    pub fn new(prefix: Space, value: LiteralValue, value_source: impl Into<String>) -> Literal {
        Literal {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            value,
            value_source: value_source.into(),
            ty: None,
        }
    }
}

/// Binary operator tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// The operator's source token.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Binary {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub left: Expression,
    pub operator: LeftPadded<BinaryOp>,
    pub right: Expression,
    pub ty: Option<Ty>,
}

/// Prefix unary operator tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Neg,
    Pos,
}

impl UnaryOp {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Unary {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub operator: LeftPadded<UnaryOp>,
    pub expr: Expression,
    pub ty: Option<Ty>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Assignment {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub variable: Expression,
    /// `before` holds the space ahead of `=`.
    pub assignment: LeftPadded<Expression>,
    pub ty: Option<Ty>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldAccess {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub target: Expression,
    /// `before` holds the space ahead of `.`.
    pub name: LeftPadded<Identifier>,
    pub ty: Option<Ty>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MethodInvocation {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Receiver; `after` holds the space ahead of `.`.
    pub select: Option<RightPadded<Expression>>,
    pub name: Identifier,
    /// Arguments. An [`crate::Marker::OmitParentheses`] marker on the
    /// container suppresses the parentheses when printing.
    pub args: Container<Expression>,
    pub method_type: Option<Arc<Method>>,
}

/// Lambda (or scripting-dialect closure) parameter list.
#[derive(Clone, PartialEq, Debug)]
pub struct LambdaParams {
    pub prefix: Space,
    pub parenthesized: bool,
    pub params: Vec<RightPadded<Statement>>,
}

/// Lambda expression. The scripting dialect prints this as a braced closure
/// via its printer override; the shape is shared.
#[derive(Clone, PartialEq, Debug)]
pub struct Lambda {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub params: LambdaParams,
    /// Space ahead of the arrow token.
    pub arrow: Space,
    pub body: Statement,
    pub ty: Option<Ty>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Parentheses {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` holds the space ahead of `)`.
    pub tree: RightPadded<Expression>,
}

/// A node with no content of its own, e.g. the sole element of an empty
/// argument list.
#[derive(Clone, PartialEq, Debug)]
pub struct Empty {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
}

impl Empty {
    pub fn new(prefix: Space) -> Empty {
        Empty {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
        }
    }
}

/// Verbatim unparseable source text. Prints exactly; carries no semantics.
#[derive(Clone, PartialEq, Debug)]
pub struct Erroneous {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub text: String,
}

impl Erroneous {
    pub fn new(prefix: Space, text: impl Into<String>) -> Erroneous {
        Erroneous {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            text: text.into(),
        }
    }
}
