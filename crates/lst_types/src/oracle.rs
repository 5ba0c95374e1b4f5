//! Type oracles: host type handle in, interned descriptor out.

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tracing::warn;

use crate::flags::TypeFlags;
use crate::host::{HostClass, HostMethodHandle, HostType};
use crate::intern::TypeCache;
use crate::signature::{erased_signature, method_signatures, type_signature};
use crate::ty::{
    ArrayTy, ClassData, ClassTy, ClassTyKind, GenericTy, Method, ParameterizedTy, Ty, Variable,
};

/// Maps host type handles to interned descriptors.
///
/// Implementations never fail hard: a handle the oracle cannot map comes
/// back as `None` (caller attaches no type) or as a minimal synthesized
/// descriptor, depending on how much is recoverable.
pub trait TypeOracle: Send + Sync {
    fn resolve(&self, handle: &HostType) -> Option<Ty>;

    fn resolve_method(&self, handle: &HostMethodHandle) -> Option<Arc<Method>>;

    /// Resolve the descriptor for one field of a class-like type.
    fn resolve_variable(&self, owner: &HostType, name: &str) -> Option<Arc<Variable>>;
}

/// Oracle over the host front-end's live semantic model.
///
/// Descriptors intern through the shared [`TypeCache`]; class-like types
/// use two-phase construction (reserve identity, then fill members) so
/// self-referential shapes terminate: by the time a class's own members are
/// resolved, the shallow descriptor is already in the cache and recursive
/// lookups hit it instead of re-entering construction.
pub struct SemanticOracle {
    cache: Arc<TypeCache>,
}

impl SemanticOracle {
    pub fn new(cache: Arc<TypeCache>) -> SemanticOracle {
        SemanticOracle { cache }
    }

    pub fn cache(&self) -> &Arc<TypeCache> {
        &self.cache
    }

    fn map_type(&self, handle: &HostType) -> Ty {
        match handle {
            HostType::Primitive(p) => Ty::Primitive(*p),
            HostType::Class(host_class) => {
                let signature = type_signature(handle);
                let (ty, created) = self.cache.intern(&signature, || {
                    Ty::Class(Arc::new(ClassTy::shallow(
                        host_class.name.clone(),
                        host_class.kind,
                        host_class.flags,
                    )))
                });
                if created {
                    if let Ty::Class(class) = &ty {
                        self.fill_class(class, host_class);
                    }
                }
                ty
            }
            HostType::Parameterized { base, args } => {
                let signature = type_signature(handle);
                let base_ty = self.map_type(&HostType::Class(base.clone()));
                let (ty, created) = self.cache.intern(&signature, || {
                    Ty::Parameterized(Arc::new(ParameterizedTy::reserve(base_ty.clone())))
                });
                if created {
                    if let Ty::Parameterized(parameterized) = &ty {
                        let resolved: Vec<Ty> = args.iter().map(|a| self.map_type(a)).collect();
                        parameterized.fill_args(resolved);
                    }
                }
                ty
            }
            HostType::Array(elem) => {
                let signature = type_signature(handle);
                if let Some(existing) = self.cache.get(&signature) {
                    return existing;
                }
                // Arrays carry no mutable phase; resolve the element first,
                // then intern the finished descriptor.
                let elem_ty = self.map_type(elem);
                let (ty, _) = self
                    .cache
                    .intern(&signature, || Ty::Array(Arc::new(ArrayTy { elem: elem_ty })));
                ty
            }
            HostType::Variable(variable) => {
                let signature = type_signature(handle);
                let (ty, created) = self.cache.intern(&signature, || {
                    Ty::GenericVariable(Arc::new(GenericTy::reserve(variable.name.clone())))
                });
                if created {
                    if let Ty::GenericVariable(generic) = &ty {
                        let bounds: Vec<Ty> =
                            variable.bounds().iter().map(|b| self.map_type(b)).collect();
                        generic.fill_bounds(variable.variance(), bounds);
                    }
                }
                ty
            }
            HostType::Unresolved { name } => self.synthesize_missing(name.as_deref()),
        }
    }

    /// Classpath-missing fallback: a name-only class descriptor with
    /// default (package-private) visibility.
    fn synthesize_missing(&self, name: Option<&str>) -> Ty {
        let fqn = name.unwrap_or("<unresolved>");
        warn!(name = fqn, "type resolution failed; synthesizing descriptor");
        let (ty, _) = self.cache.intern(fqn, || {
            Ty::Class(Arc::new(ClassTy::shallow(
                fqn,
                ClassTyKind::Class,
                TypeFlags::empty(),
            )))
        });
        ty
    }

    fn fill_class(&self, class: &Arc<ClassTy>, host_class: &Arc<HostClass>) {
        let data = host_class.with_data(|d| ClassData {
            supertype: d.supertype.as_ref().map(|s| self.map_type(s)),
            owner: None,
            annotations: Vec::new(),
            interfaces: d.interfaces.iter().map(|i| self.map_type(i)).collect(),
            type_parameters: d
                .type_parameters
                .iter()
                .map(|p| self.map_type(p))
                .collect(),
            members: d
                .fields
                .iter()
                .map(|(name, flags, ty)| {
                    Arc::new(Variable {
                        flags: *flags,
                        name: name.clone(),
                        owner: Ty::Class(class.clone()),
                        ty: self.map_type(ty),
                    })
                })
                .collect(),
            methods: d
                .methods
                .iter()
                .map(|m| {
                    self.build_method(&HostMethodHandle {
                        declaring: HostType::Class(host_class.clone()),
                        method: m.clone(),
                    })
                })
                .collect(),
        });
        class.fill(data);
    }

    fn build_method(&self, handle: &HostMethodHandle) -> Arc<Method> {
        let (resolved, generic) = method_signatures(handle);
        let declaring = self.map_type(&handle.declaring);
        self.cache.intern_method(&resolved, || {
            Arc::new(Method {
                flags: handle.method.flags,
                declaring: declaring.clone(),
                name: handle.method.name.clone(),
                return_ty: self.map_type(&handle.method.return_type),
                parameter_names: handle.method.parameter_names.clone(),
                parameter_types: handle
                    .method
                    .parameter_types
                    .iter()
                    .map(|p| self.map_type(p))
                    .collect(),
                thrown: handle
                    .method
                    .thrown
                    .iter()
                    .map(|t| self.map_type(t))
                    .collect(),
                signature: resolved.clone(),
                generic_signature: generic,
            })
        })
    }
}

impl TypeOracle for SemanticOracle {
    fn resolve(&self, handle: &HostType) -> Option<Ty> {
        Some(self.map_type(handle))
    }

    fn resolve_method(&self, handle: &HostMethodHandle) -> Option<Arc<Method>> {
        Some(self.build_method(handle))
    }

    fn resolve_variable(&self, owner: &HostType, name: &str) -> Option<Arc<Variable>> {
        let owner_ty = self.map_type(owner);
        let key = format!("{}#{}", erased_signature(owner), name);
        let field = match owner {
            HostType::Class(host_class) => host_class.with_data(|d| {
                d.fields
                    .iter()
                    .find(|(field_name, _, _)| field_name == name)
                    .map(|(_, flags, ty)| (*flags, self.map_type(ty)))
            }),
            _ => None,
        };
        let (flags, ty) = field.unwrap_or((TypeFlags::empty(), Ty::Unknown));
        Some(self.cache.intern_variable(&key, || {
            Arc::new(Variable {
                flags,
                name: name.to_string(),
                owner: owner_ty.clone(),
                ty: ty.clone(),
            })
        }))
    }
}
