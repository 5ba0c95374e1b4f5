//! Out-of-band per-node metadata.
//!
//! Markers record facts about a node that its shape cannot express: that an
//! argument list had no parentheses in the source, that a statement was
//! followed by a semicolon, or that the host front-end reported a problem
//! while this node was produced. The printer consults markers to reproduce
//! punctuation exactly; a closed enum keeps that handling exhaustive.

use crate::space::Space;
use smallvec::SmallVec;

/// A single marker value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Marker {
    /// The argument list this marker sits on had no surrounding parentheses
    /// in the source (scripting-dialect command calls: `foo bar, baz`).
    OmitParentheses,
    /// The statement was terminated by an explicit `;`. Without this marker
    /// no semicolon is printed, whatever the statement kind.
    Semicolon,
    /// A block whose braces are not printed (closure bodies own the braces
    /// at the closure level instead).
    OmitBraces,
    /// A delimited list ended with a trailing separator; the space is what
    /// sat between the separator and the closing delimiter.
    TrailingComma(Space),
    /// Non-fatal problem reported while producing this node, carried through
    /// so downstream consumers can surface it.
    ParseWarning { message: String },
}

/// Small set of markers attached to one node or padding wrapper.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Markers {
    markers: SmallVec<[Marker; 2]>,
}

impl Markers {
    pub fn new() -> Markers {
        Markers::default()
    }

    pub fn with(marker: Marker) -> Markers {
        let mut markers = Markers::new();
        markers.add(marker);
        markers
    }

    pub fn add(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn has_omit_parentheses(&self) -> bool {
        self.markers.contains(&Marker::OmitParentheses)
    }

    pub fn has_semicolon(&self) -> bool {
        self.markers.contains(&Marker::Semicolon)
    }

    pub fn has_omit_braces(&self) -> bool {
        self.markers.contains(&Marker::OmitBraces)
    }

    pub fn trailing_comma(&self) -> Option<&Space> {
        self.markers.iter().find_map(|m| match m {
            Marker::TrailingComma(space) => Some(space),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().filter_map(|m| match m {
            Marker::ParseWarning { message } => Some(message.as_str()),
            _ => None,
        })
    }
}
