//! Host-independent type descriptors and the oracles that produce them.
//!
//! The mapping visitors in `lst_parse` never look at host compiler type
//! internals directly; they hand opaque [`HostType`] handles to a
//! [`TypeOracle`] and get back interned [`Ty`] descriptors. Descriptors are
//! keyed by a deterministic signature string in a shared, concurrency-safe
//! [`TypeCache`], so the same logical type resolves to the identical
//! `Arc`-backed instance across every file of a parse run; downstream
//! consumers rely on pointer identity as a fast equality path.
//!
//! Two oracle implementations exist: [`SemanticOracle`] maps the host
//! front-end's live semantic model, and [`TableOracle`] resolves types of
//! already-compiled dependencies from a gzip-compressed tab-separated type
//! table without loading the archives themselves.

mod flags;
mod host;
mod intern;
mod oracle;
mod signature;
mod ty;

pub mod descriptor_parse;
pub mod table;

pub use flags::TypeFlags;
pub use host::{
    HostClass, HostClassData, HostMethod, HostMethodHandle, HostType, HostTypeVariable,
};
pub use intern::TypeCache;
pub use oracle::{SemanticOracle, TypeOracle};
pub use signature::{erased_signature, method_signatures, type_signature, CYCLE_MARKER};
pub use table::TableOracle;
pub use ty::{
    ArrayTy, ClassData, ClassTy, ClassTyKind, GenericTy, Method, ParameterizedTy, Primitive, Ty,
    Variable, Variance,
};
