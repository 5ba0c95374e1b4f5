//! Host-side type shapes.
//!
//! The host front-end's internal type representation is not stable across
//! compilers, so integrations translate it once into this closed model and
//! the oracles map it onto interned [`crate::Ty`] descriptors. `Arc` sharing
//! matters: a self-referential generic is represented by the same
//! `HostTypeVariable` allocation appearing inside its own bounds, and the
//! signature computation detects the cycle by pointer identity.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::flags::TypeFlags;
use crate::ty::{ClassTyKind, Primitive, Variance};

/// A host type handle as handed to [`crate::TypeOracle::resolve`].
#[derive(Clone, Debug)]
pub enum HostType {
    Primitive(Primitive),
    Class(Arc<HostClass>),
    /// Generic type application; `base` is the raw class.
    Parameterized {
        base: Arc<HostClass>,
        args: Vec<HostType>,
    },
    Array(Box<HostType>),
    Variable(Arc<HostTypeVariable>),
    /// The host failed symbol resolution (missing classpath entry). The
    /// name is whatever the source reference looked like, when recoverable.
    Unresolved { name: Option<String> },
}

/// Structural members of a host class, attached after construction so
/// cyclic shapes (a class referenced from its own members) are expressible.
#[derive(Default)]
pub struct HostClassData {
    pub supertype: Option<HostType>,
    pub interfaces: Vec<HostType>,
    pub type_parameters: Vec<HostType>,
    pub fields: Vec<(String, TypeFlags, HostType)>,
    pub methods: Vec<Arc<HostMethod>>,
}

/// A class as the host front-end sees it.
pub struct HostClass {
    pub name: String,
    pub kind: ClassTyKind,
    pub flags: TypeFlags,
    data: RwLock<HostClassData>,
}

impl HostClass {
    pub fn new(name: impl Into<String>, kind: ClassTyKind, flags: TypeFlags) -> Arc<HostClass> {
        Arc::new(HostClass {
            name: name.into(),
            kind,
            flags,
            data: RwLock::new(HostClassData::default()),
        })
    }

    /// Attach structural members. Intended to be called once by the
    /// integration that built the class; later calls replace the data.
    pub fn set_data(&self, data: HostClassData) {
        *self.data.write() = data;
    }

    pub fn with_data<R>(&self, f: impl FnOnce(&HostClassData) -> R) -> R {
        f(&self.data.read())
    }
}

impl fmt::Debug for HostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostClass({})", self.name)
    }
}

/// A generic type variable on the host side; bounds attach after
/// construction so they can mention the variable itself.
pub struct HostTypeVariable {
    pub name: String,
    bounds: RwLock<(Variance, Vec<HostType>)>,
}

impl HostTypeVariable {
    pub fn new(name: impl Into<String>) -> Arc<HostTypeVariable> {
        Arc::new(HostTypeVariable {
            name: name.into(),
            bounds: RwLock::new((Variance::Invariant, Vec::new())),
        })
    }

    pub fn set_bounds(&self, variance: Variance, bounds: Vec<HostType>) {
        *self.bounds.write() = (variance, bounds);
    }

    pub fn variance(&self) -> Variance {
        self.bounds.read().0
    }

    pub fn bounds(&self) -> Vec<HostType> {
        self.bounds.read().1.clone()
    }
}

impl fmt::Debug for HostTypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTypeVariable({})", self.name)
    }
}

/// A method as the host front-end sees it.
#[derive(Debug)]
pub struct HostMethod {
    pub name: String,
    pub flags: TypeFlags,
    pub parameter_names: Vec<String>,
    pub parameter_types: Vec<HostType>,
    pub return_type: HostType,
    pub thrown: Vec<HostType>,
}

/// A method reference paired with its declaring type, as attached to
/// invocation and declaration nodes in the host facade.
#[derive(Clone, Debug)]
pub struct HostMethodHandle {
    pub declaring: HostType,
    pub method: Arc<HostMethod>,
}
