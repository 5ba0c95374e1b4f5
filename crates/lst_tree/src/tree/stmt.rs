//! Statement nodes.

use crate::id::TreeId;
use crate::marker::Markers;
use crate::pad::RightPadded;
use crate::space::Space;

use super::{Expression, Parentheses, Statement};

/// Braced statement sequence.
///
/// `end` is the formatting ahead of the closing `}`. An
/// [`crate::Marker::OmitBraces`] marker means the braces belong to an
/// enclosing construct (closure) and are not printed here.
#[derive(Clone, PartialEq, Debug)]
pub struct Block {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `after` of each element holds the space ahead of a terminating `;`;
    /// the semicolon itself is a marker on the padding.
    pub statements: Vec<RightPadded<Statement>>,
    pub end: Space,
}

#[derive(Clone, PartialEq, Debug)]
pub struct If {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub condition: Parentheses,
    pub then_part: RightPadded<Statement>,
    pub else_part: Option<Else>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Else {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub body: RightPadded<Statement>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Return {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub expr: Option<Expression>,
}
