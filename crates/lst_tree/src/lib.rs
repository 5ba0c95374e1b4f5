//! Lossless semantic tree data model.
//!
//! The tree produced by the mapping visitors in `lst_parse` retains every
//! byte of the original source: whitespace and comments are captured as
//! [`Space`] values attached to each node, punctuation that carries no node
//! of its own (commas, semicolons, `=`, `:`) is represented by padding
//! wrappers, and facts with no structural home (omitted parentheses, a
//! trailing semicolon) live in [`Markers`]. Printing a tree with `lst_print`
//! reproduces the exact input text.
//!
//! # Modules
//!
//! - [`space`]: whitespace-and-comments values
//! - [`marker`]: out-of-band per-node metadata
//! - [`pad`]: left/right padding and delimited containers
//! - [`tree`]: the node family itself
//! - [`line_index`]: byte offset to (line, column) conversion
//! - [`visitor`]: generic traversal with overridable visits

pub mod line_index;
pub mod marker;
pub mod pad;
pub mod space;
pub mod span;
pub mod tree;
pub mod visitor;

mod id;

pub use id::TreeId;
pub use line_index::{LineCol, LineIndex};
pub use marker::{Marker, Markers};
pub use pad::{Container, LeftPadded, RightPadded};
pub use space::{Comment, CommentKind, Space};
pub use span::Span;
pub use tree::{
    Annotation, ArrayType, Assignment, Binary, BinaryOp, Block, ClassDecl, ClassKind,
    CompilationUnit, Dialect, Else, Empty, Erroneous, Expression, FieldAccess, Identifier, If,
    Import, Lambda, LambdaParams, Literal, LiteralValue, MethodDecl, MethodInvocation, Modifier,
    ModifierKeyword, NamedVariable, Package, ParameterizedType, Parentheses, Return, Statement,
    TypeParameter, TypeTree, Unary, UnaryOp, VariableDecls,
};
pub use visitor::TreeVisitor;
