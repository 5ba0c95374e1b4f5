//! Signature-keyed descriptor intern cache.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::ty::{Method, Ty, Variable};

/// Run-scoped, concurrency-safe intern cache.
///
/// One cache is shared by every oracle of a parse run, across files and
/// threads. `intern` has insert-if-absent semantics: when two threads race
/// to intern the same signature, one candidate is discarded and both get
/// the winning instance, so identity-sharing holds (`Arc::ptr_eq` on the
/// contained descriptors).
///
/// The cache is injected explicitly rather than being process-global; parse
/// runs stay independently testable and callers control its lifetime.
#[derive(Default)]
pub struct TypeCache {
    types: DashMap<String, Ty>,
    methods: DashMap<String, Arc<Method>>,
    variables: DashMap<String, Arc<Variable>>,
}

impl TypeCache {
    pub fn new() -> TypeCache {
        TypeCache::default()
    }

    pub fn get(&self, signature: &str) -> Option<Ty> {
        self.types.get(signature).map(|t| t.clone())
    }

    /// Look up `signature`, building a candidate with `make` on a miss.
    ///
    /// Returns the interned descriptor and whether this call created it;
    /// creators are responsible for the second construction phase (member
    /// fill). `make` must not re-enter the cache; two-phase construction
    /// keeps candidate building shallow so it never needs to.
    pub fn intern(&self, signature: &str, make: impl FnOnce() -> Ty) -> (Ty, bool) {
        if let Some(existing) = self.types.get(signature) {
            return (existing.clone(), false);
        }
        let candidate = make();
        match self.types.entry(signature.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => {
                entry.insert(candidate.clone());
                (candidate, true)
            }
        }
    }

    pub fn intern_method(
        &self,
        signature: &str,
        make: impl FnOnce() -> Arc<Method>,
    ) -> Arc<Method> {
        if let Some(existing) = self.methods.get(signature) {
            return existing.clone();
        }
        let candidate = make();
        match self.methods.entry(signature.to_string()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                entry.insert(candidate.clone());
                candidate
            }
        }
    }

    pub fn intern_variable(
        &self,
        signature: &str,
        make: impl FnOnce() -> Arc<Variable>,
    ) -> Arc<Variable> {
        if let Some(existing) = self.variables.get(signature) {
            return existing.clone();
        }
        let candidate = make();
        match self.variables.entry(signature.to_string()) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                entry.insert(candidate.clone());
                candidate
            }
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
