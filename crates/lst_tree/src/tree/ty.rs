//! Type trees: types as written in source positions.

use lst_types::Ty;

use crate::id::TreeId;
use crate::marker::Markers;
use crate::pad::Container;
use crate::space::Space;

use super::TypeTree;

/// A generic type application: `List<String>`, `Map<K, V>`.
#[derive(Clone, PartialEq, Debug)]
pub struct ParameterizedType {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub clazz: TypeTree,
    /// Arguments between `<` and `>`; the container's `before` is the space
    /// ahead of `<`.
    pub type_args: Container<TypeTree>,
    pub ty: Option<Ty>,
}

/// A single array dimension: `int[]`. Nested arrays nest the node.
#[derive(Clone, PartialEq, Debug)]
pub struct ArrayType {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub element_type: TypeTree,
    /// Space ahead of `[`.
    pub dimension_before: Space,
    /// Space between `[` and `]`.
    pub dimension_inner: Space,
    pub ty: Option<Ty>,
}
