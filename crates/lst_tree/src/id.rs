//! Random tree node identity.

use std::fmt;
use uuid::Uuid;

/// Stable random identity for an LST node.
///
/// Used for equality-independent cross-referencing: two structurally equal
/// nodes from different parses have different ids, and a node keeps its id
/// across transformations that change its content. Never derived from
/// content hashing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TreeId(Uuid);

impl TreeId {
    /// Generate a fresh random id.
    pub fn random() -> TreeId {
        TreeId(Uuid::new_v4())
    }
}

impl fmt::Debug for TreeId {
    // Short form keeps tree dumps readable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.0.simple().to_string();
        write!(f, "TreeId({})", &full[..8])
    }
}
