//! Padding wrappers for delimiter-adjacent children.
//!
//! Separators like `,`, `;`, `=` and `:` carry no LST node of their own, so
//! the whitespace around them is stored on the adjacent child: a
//! [`RightPadded`] element owns the space between itself and a following
//! delimiter, a [`LeftPadded`] element owns the space between a preceding
//! delimiter and itself, and a [`Container`] is a delimited list of
//! right-padded elements plus the space before its opening delimiter.

use crate::marker::Markers;
use crate::space::Space;

/// Element followed by a delimiter it does not own.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RightPadded<T> {
    pub elem: T,
    /// Space between the element and the delimiter.
    pub after: Space,
    pub markers: Markers,
}

impl<T> RightPadded<T> {
    pub fn new(elem: T, after: Space) -> Self {
        RightPadded {
            elem,
            after,
            markers: Markers::new(),
        }
    }

    pub fn with_markers(elem: T, after: Space, markers: Markers) -> Self {
        RightPadded {
            elem,
            after,
            markers,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RightPadded<U> {
        RightPadded {
            elem: f(self.elem),
            after: self.after,
            markers: self.markers,
        }
    }
}

/// Element preceded by a delimiter it does not own.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LeftPadded<T> {
    /// Space between the delimiter and the element.
    pub before: Space,
    pub elem: T,
    pub markers: Markers,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, elem: T) -> Self {
        LeftPadded {
            before,
            elem,
            markers: Markers::new(),
        }
    }
}

/// Delimited, comma-separated list: `( a , b , c )`.
///
/// `before` is the space ahead of the opening delimiter; each element's
/// `after` is the space ahead of the comma (or the closing delimiter, for
/// the last element).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Container<T> {
    pub before: Space,
    pub elems: Vec<RightPadded<T>>,
    pub markers: Markers,
}

impl<T> Container<T> {
    pub fn new(before: Space, elems: Vec<RightPadded<T>>) -> Self {
        Container {
            before,
            elems,
            markers: Markers::new(),
        }
    }

    pub fn with_markers(before: Space, elems: Vec<RightPadded<T>>, markers: Markers) -> Self {
        Container {
            before,
            elems,
            markers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}
