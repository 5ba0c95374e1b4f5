//! Deterministic signature strings.
//!
//! Signatures are the intern keys for type descriptors, computed from the
//! structural shape of a host type before any descriptor is built. The
//! computation must terminate on cyclic shapes (`Node<T extends Node<T>>`):
//! an identity-based in-progress set detects re-entry and emits the `(*)`
//! cycle marker instead of recursing.


use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::host::{HostMethodHandle, HostType};
use crate::ty::Ty;

/// Marker substituted where a signature would otherwise recurse forever.
pub const CYCLE_MARKER: &str = "(*)";

/// Signature of a host type handle.
pub fn type_signature(t: &HostType) -> String {
    let mut visited = FxHashSet::default();
    host_signature(t, &mut visited, false)
}

/// Erased signature: type variables collapse to their leftmost bound,
/// parameterized types to their base.
pub fn erased_signature(t: &HostType) -> String {
    let mut visited = FxHashSet::default();
    host_signature(t, &mut visited, true)
}

/// Resolved and generic signatures of a method handle, in that order.
///
/// The resolved signature erases type variables; the generic signature
/// keeps their names. Both encode declaring type, name, return type, and
/// parameter types.
pub fn method_signatures(handle: &HostMethodHandle) -> (String, String) {
    let resolved = method_signature_with(handle, true);
    let generic = method_signature_with(handle, false);
    (resolved, generic)
}

fn method_signature_with(handle: &HostMethodHandle, erase: bool) -> String {
    let mut visited = FxHashSet::default();
    let declaring = host_signature_base(&handle.declaring, &mut visited);
    let ret = {
        let mut visited = FxHashSet::default();
        host_signature(&handle.method.return_type, &mut visited, erase)
    };
    let params: Vec<String> = handle
        .method
        .parameter_types
        .iter()
        .map(|p| {
            let mut visited = FxHashSet::default();
            host_signature(p, &mut visited, erase)
        })
        .collect();
    format!(
        "{}{{name={},return={},parameters=[{}]}}",
        declaring,
        handle.method.name,
        ret,
        params.join(",")
    )
}

/// Declaring-type position always uses the erased base name.
fn host_signature_base(t: &HostType, visited: &mut FxHashSet<usize>) -> String {
    host_signature(t, visited, true)
}

fn host_signature(t: &HostType, visited: &mut FxHashSet<usize>, erase: bool) -> String {
    match t {
        HostType::Primitive(p) => p.keyword().to_string(),
        HostType::Class(c) => c.name.clone(),
        HostType::Parameterized { base, args } => {
            if erase {
                return base.name.clone();
            }
            let key = Arc::as_ptr(base) as usize;
            if !visited.insert(key) {
                return CYCLE_MARKER.to_string();
            }
            let rendered: Vec<String> = args
                .iter()
                .map(|a| host_signature(a, visited, erase))
                .collect();
            visited.remove(&key);
            format!("{}<{}>", base.name, rendered.join(", "))
        }
        HostType::Array(elem) => format!("{}[]", host_signature(elem, visited, erase)),
        HostType::Variable(v) => {
            let key = Arc::as_ptr(v) as usize;
            if !visited.insert(key) {
                return CYCLE_MARKER.to_string();
            }
            let result = if erase {
                v.bounds()
                    .first()
                    .map_or_else(|| "java.lang.Object".to_string(), |b| {
                        host_signature(b, visited, true)
                    })
            } else {
                let bounds = v.bounds();
                if bounds.is_empty() {
                    format!("Generic{{{}}}", v.name)
                } else {
                    let keyword = match v.variance() {
                        crate::ty::Variance::Contravariant => "super",
                        _ => "extends",
                    };
                    let rendered: Vec<String> = bounds
                        .iter()
                        .map(|b| host_signature(b, visited, false))
                        .collect();
                    format!(
                        "Generic{{{} {} {}}}",
                        v.name,
                        keyword,
                        rendered.join(" & ")
                    )
                }
            };
            visited.remove(&key);
            result
        }
        HostType::Unresolved { name } => name
            .clone()
            .unwrap_or_else(|| "<unresolved>".to_string()),
    }
}

/// Signature of an already-built descriptor. Same grammar as
/// [`type_signature`] so a descriptor's signature equals its intern key.
pub(crate) fn ty_signature(ty: &Ty) -> String {
    let mut visited = FxHashSet::default();
    ty_signature_inner(ty, &mut visited)
}

fn ty_signature_inner(ty: &Ty, visited: &mut FxHashSet<usize>) -> String {
    match ty {
        Ty::Primitive(p) => p.keyword().to_string(),
        Ty::Class(c) => c.fully_qualified_name.clone(),
        Ty::Parameterized(p) => {
            let key = Arc::as_ptr(p) as usize;
            if !visited.insert(key) {
                return CYCLE_MARKER.to_string();
            }
            let base = ty_signature_inner(&p.class, visited);
            let args: Vec<String> = p
                .type_args()
                .iter()
                .map(|a| ty_signature_inner(a, visited))
                .collect();
            visited.remove(&key);
            if args.is_empty() {
                base
            } else {
                format!("{}<{}>", base, args.join(", "))
            }
        }
        Ty::Array(a) => format!("{}[]", ty_signature_inner(&a.elem, visited)),
        Ty::GenericVariable(v) => {
            let key = Arc::as_ptr(v) as usize;
            if !visited.insert(key) {
                return CYCLE_MARKER.to_string();
            }
            let bounds = v.bounds();
            let result = if bounds.is_empty() {
                format!("Generic{{{}}}", v.name)
            } else {
                let keyword = match v.variance() {
                    crate::ty::Variance::Contravariant => "super",
                    _ => "extends",
                };
                let rendered: Vec<String> = bounds
                    .iter()
                    .map(|b| ty_signature_inner(b, visited))
                    .collect();
                format!("Generic{{{} {} {}}}", v.name, keyword, rendered.join(" & "))
            };
            visited.remove(&key);
            result
        }
        Ty::Unknown => "<unknown>".to_string(),
    }
}
