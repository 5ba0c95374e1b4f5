//! Interned type descriptors.
//!
//! Descriptors are immutable once fully constructed, but classes,
//! parameterized types, and generic variables are built in two phases:
//! identity (name, kind, flags) is fixed when the descriptor is interned,
//! and members/arguments/bounds are filled exactly once afterwards. The
//! two-phase split is what lets a self-referential generic like
//! `class Node<T extends Node<T>>` resolve without infinite recursion: the
//! shallow descriptor is already in the cache when its own bounds are
//! resolved.


use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::flags::TypeFlags;

/// Primitive types, plus the `String`/`null` pseudo-primitives host
/// front-ends treat specially.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    Str,
    Null,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Void => "void",
            Primitive::Str => "String",
            Primitive::Null => "null",
        }
    }

    /// Match a source keyword to a primitive.
    pub fn from_keyword(keyword: &str) -> Option<Primitive> {
        Some(match keyword {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "char" => Primitive::Char,
            "double" => Primitive::Double,
            "float" => Primitive::Float,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "short" => Primitive::Short,
            "void" => Primitive::Void,
            _ => return None,
        })
    }
}

/// Kind of a class-like type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassTyKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Declared variance of a generic type variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

/// A resolved type descriptor.
///
/// Cloning is cheap (`Arc` handles); equality on class-like variants is
/// pointer identity first, signature second. Within one parse run the
/// intern cache guarantees pointer identity for equal signatures.
#[derive(Clone)]
pub enum Ty {
    Primitive(Primitive),
    Class(Arc<ClassTy>),
    Parameterized(Arc<ParameterizedTy>),
    Array(Arc<ArrayTy>),
    GenericVariable(Arc<GenericTy>),
    /// Resolution failed or was skipped; prints nothing, compares equal to
    /// itself only.
    Unknown,
}

impl Ty {
    /// Fast identity comparison; falls back to structural signature
    /// equality for descriptors from different cache generations.
    pub fn is_same(&self, other: &Ty) -> bool {
        match (self, other) {
            (Ty::Primitive(a), Ty::Primitive(b)) => a == b,
            (Ty::Class(a), Ty::Class(b)) => {
                Arc::ptr_eq(a, b) || a.fully_qualified_name == b.fully_qualified_name
            }
            (Ty::Parameterized(a), Ty::Parameterized(b)) => {
                Arc::ptr_eq(a, b) || a.signature() == b.signature()
            }
            (Ty::Array(a), Ty::Array(b)) => Arc::ptr_eq(a, b) || a.elem.is_same(&b.elem),
            (Ty::GenericVariable(a), Ty::GenericVariable(b)) => {
                Arc::ptr_eq(a, b) || a.name == b.name
            }
            (Ty::Unknown, Ty::Unknown) => true,
            _ => false,
        }
    }

    /// The descriptor's signature string (its intern key).
    pub fn signature(&self) -> String {
        crate::signature::ty_signature(self)
    }

    /// Fully-qualified name for class-like descriptors.
    pub fn fully_qualified_name(&self) -> Option<&str> {
        match self {
            Ty::Class(c) => Some(&c.fully_qualified_name),
            Ty::Parameterized(p) => p.class.fully_qualified_name(),
            _ => None,
        }
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({})", self.signature())
    }
}

/// Members of a class descriptor, filled after interning.
#[derive(Default)]
pub struct ClassData {
    pub supertype: Option<Ty>,
    pub owner: Option<Ty>,
    pub annotations: Vec<Ty>,
    pub interfaces: Vec<Ty>,
    pub type_parameters: Vec<Ty>,
    pub members: Vec<Arc<Variable>>,
    pub methods: Vec<Arc<Method>>,
}

/// A class-like type descriptor.
pub struct ClassTy {
    pub fully_qualified_name: String,
    pub kind: ClassTyKind,
    pub flags: TypeFlags,
    data: RwLock<Option<ClassData>>,
}

impl ClassTy {
    /// Create an identity-only descriptor; members are filled later.
    pub fn shallow(
        fully_qualified_name: impl Into<String>,
        kind: ClassTyKind,
        flags: TypeFlags,
    ) -> ClassTy {
        ClassTy {
            fully_qualified_name: fully_qualified_name.into(),
            kind,
            flags,
            data: RwLock::new(None),
        }
    }

    /// Fill members exactly once. Returns false (and discards `data`) if
    /// another filler won; first write wins so readers never observe a
    /// descriptor changing.
    pub fn fill(&self, data: ClassData) -> bool {
        let mut slot = self.data.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some(data);
        true
    }

    pub fn is_filled(&self) -> bool {
        self.data.read().is_some()
    }

    pub fn supertype(&self) -> Option<Ty> {
        self.data.read().as_ref().and_then(|d| d.supertype.clone())
    }

    pub fn owner(&self) -> Option<Ty> {
        self.data.read().as_ref().and_then(|d| d.owner.clone())
    }

    pub fn interfaces(&self) -> Vec<Ty> {
        self.data
            .read()
            .as_ref()
            .map(|d| d.interfaces.clone())
            .unwrap_or_default()
    }

    pub fn type_parameters(&self) -> Vec<Ty> {
        self.data
            .read()
            .as_ref()
            .map(|d| d.type_parameters.clone())
            .unwrap_or_default()
    }

    pub fn members(&self) -> Vec<Arc<Variable>> {
        self.data
            .read()
            .as_ref()
            .map(|d| d.members.clone())
            .unwrap_or_default()
    }

    pub fn methods(&self) -> Vec<Arc<Method>> {
        self.data
            .read()
            .as_ref()
            .map(|d| d.methods.clone())
            .unwrap_or_default()
    }
}

impl fmt::Debug for ClassTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassTy")
            .field("name", &self.fully_qualified_name)
            .field("kind", &self.kind)
            .field("filled", &self.is_filled())
            .finish()
    }
}

/// A generic type application. Arguments are filled after interning so a
/// type can appear in its own arguments.
pub struct ParameterizedTy {
    pub class: Ty,
    args: RwLock<Option<Vec<Ty>>>,
}

impl ParameterizedTy {
    pub fn reserve(class: Ty) -> ParameterizedTy {
        ParameterizedTy {
            class,
            args: RwLock::new(None),
        }
    }

    pub fn fill_args(&self, args: Vec<Ty>) -> bool {
        let mut slot = self.args.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some(args);
        true
    }

    pub fn type_args(&self) -> Vec<Ty> {
        self.args.read().clone().unwrap_or_default()
    }

    pub fn signature(&self) -> String {
        crate::signature::ty_signature(&Ty::Parameterized(Arc::new(ParameterizedTy {
            class: self.class.clone(),
            args: RwLock::new(self.args.read().clone()),
        })))
    }
}

impl fmt::Debug for ParameterizedTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParameterizedTy({})", self.signature())
    }
}

/// An array type descriptor.
#[derive(Debug)]
pub struct ArrayTy {
    pub elem: Ty,
}

/// A generic type variable; bounds are filled after interning (a variable's
/// bound may mention the variable itself).
pub struct GenericTy {
    pub name: String,
    bounds: RwLock<Option<(Variance, Vec<Ty>)>>,
}

impl GenericTy {
    pub fn reserve(name: impl Into<String>) -> GenericTy {
        GenericTy {
            name: name.into(),
            bounds: RwLock::new(None),
        }
    }

    pub fn fill_bounds(&self, variance: Variance, bounds: Vec<Ty>) -> bool {
        let mut slot = self.bounds.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some((variance, bounds));
        true
    }

    pub fn variance(&self) -> Variance {
        self.bounds.read().as_ref().map(|b| b.0).unwrap_or_default()
    }

    pub fn bounds(&self) -> Vec<Ty> {
        self.bounds
            .read()
            .as_ref()
            .map(|b| b.1.clone())
            .unwrap_or_default()
    }
}

impl fmt::Debug for GenericTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericTy({})", self.name)
    }
}

/// A resolved method descriptor.
#[derive(Debug)]
pub struct Method {
    pub flags: TypeFlags,
    pub declaring: Ty,
    pub name: String,
    pub return_ty: Ty,
    pub parameter_names: Vec<String>,
    pub parameter_types: Vec<Ty>,
    pub thrown: Vec<Ty>,
    /// Erased signature: type variables replaced by their leftmost bound.
    pub signature: String,
    /// Signature keeping type-variable names.
    pub generic_signature: String,
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

/// A resolved field/variable descriptor.
#[derive(Debug)]
pub struct Variable {
    pub flags: TypeFlags,
    pub name: String,
    pub owner: Ty,
    pub ty: Ty,
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner.is_same(&other.owner)
    }
}
