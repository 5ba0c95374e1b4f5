use super::*;
use crate::host::{HostClassData, HostMethod, HostTypeVariable};
use crate::ty::{Primitive, Variance};
use pretty_assertions::assert_eq;

fn oracle() -> SemanticOracle {
    SemanticOracle::new(Arc::new(TypeCache::new()))
}

fn string_class() -> Arc<HostClass> {
    HostClass::new("java.lang.String", ClassTyKind::Class, TypeFlags::PUBLIC)
}

#[test]
fn resolving_same_class_twice_is_identity_equal() {
    let oracle = oracle();
    // Two independent host handles for the same logical type.
    let a = oracle.resolve(&HostType::Class(string_class()));
    let b = oracle.resolve(&HostType::Class(string_class()));
    let (Some(Ty::Class(a)), Some(Ty::Class(b))) = (a, b) else {
        panic!("expected class descriptors");
    };
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn class_members_are_filled() {
    let oracle = oracle();
    let c = HostClass::new("demo.Point", ClassTyKind::Class, TypeFlags::PUBLIC);
    c.set_data(HostClassData {
        supertype: Some(HostType::Class(HostClass::new(
            "java.lang.Object",
            ClassTyKind::Class,
            TypeFlags::PUBLIC,
        ))),
        fields: vec![(
            "x".into(),
            TypeFlags::PRIVATE,
            HostType::Primitive(Primitive::Int),
        )],
        methods: vec![Arc::new(HostMethod {
            name: "getX".into(),
            flags: TypeFlags::PUBLIC,
            parameter_names: vec![],
            parameter_types: vec![],
            return_type: HostType::Primitive(Primitive::Int),
            thrown: vec![],
        })],
        ..HostClassData::default()
    });
    let Some(Ty::Class(point)) = oracle.resolve(&HostType::Class(c)) else {
        panic!("expected class descriptor");
    };
    assert!(point.is_filled());
    assert_eq!(
        point.supertype().and_then(|s| s.fully_qualified_name().map(String::from)),
        Some("java.lang.Object".to_string())
    );
    assert_eq!(point.members().len(), 1);
    assert_eq!(point.members()[0].name, "x");
    assert_eq!(point.methods().len(), 1);
    assert_eq!(point.methods()[0].name, "getX");
}

#[test]
fn self_typed_field_terminates() {
    // class Linked { Linked next; }
    let oracle = oracle();
    let c = HostClass::new("demo.Linked", ClassTyKind::Class, TypeFlags::PUBLIC);
    c.set_data(HostClassData {
        fields: vec![(
            "next".into(),
            TypeFlags::PRIVATE,
            HostType::Class(c.clone()),
        )],
        ..HostClassData::default()
    });
    let Some(Ty::Class(linked)) = oracle.resolve(&HostType::Class(c)) else {
        panic!("expected class descriptor");
    };
    let members = linked.members();
    let Ty::Class(field_ty) = &members[0].ty else {
        panic!("expected class-typed field");
    };
    assert!(Arc::ptr_eq(&linked, field_ty));
}

#[test]
fn cyclic_generic_resolves_in_bounded_time() {
    // class Node<T extends Node<T>>
    let node = HostClass::new("demo.Node", ClassTyKind::Class, TypeFlags::PUBLIC);
    let t = HostTypeVariable::new("T");
    t.set_bounds(
        Variance::Covariant,
        vec![HostType::Parameterized {
            base: node.clone(),
            args: vec![HostType::Variable(t.clone())],
        }],
    );
    node.set_data(HostClassData {
        type_parameters: vec![HostType::Variable(t.clone())],
        ..HostClassData::default()
    });

    let oracle = oracle();
    let Some(Ty::Class(resolved)) = oracle.resolve(&HostType::Class(node)) else {
        panic!("expected class descriptor");
    };
    let params = resolved.type_parameters();
    assert_eq!(params.len(), 1);
    let Ty::GenericVariable(var) = &params[0] else {
        panic!("expected generic variable");
    };
    assert_eq!(var.name, "T");
    // The bound's signature carries the cycle marker rather than recursing.
    assert!(params[0].signature().contains("(*)"));
}

#[test]
fn unresolved_type_synthesizes_minimal_descriptor() {
    let oracle = oracle();
    let ty = oracle.resolve(&HostType::Unresolved {
        name: Some("com.missing.Dep".into()),
    });
    let Some(Ty::Class(c)) = ty else {
        panic!("expected synthesized class");
    };
    assert_eq!(c.fully_qualified_name, "com.missing.Dep");
    assert!(c.flags.is_package_private());
}

#[test]
fn method_resolution_interns_by_signature() {
    let oracle = oracle();
    let handle = HostMethodHandle {
        declaring: HostType::Class(string_class()),
        method: Arc::new(HostMethod {
            name: "length".into(),
            flags: TypeFlags::PUBLIC,
            parameter_names: vec![],
            parameter_types: vec![],
            return_type: HostType::Primitive(Primitive::Int),
            thrown: vec![],
        }),
    };
    let first = oracle.resolve_method(&handle);
    let second = oracle.resolve_method(&handle);
    let (Some(first), Some(second)) = (first, second) else {
        panic!("expected method descriptors");
    };
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.signature, first.generic_signature);
}

#[test]
fn field_resolution_finds_flags_and_type() {
    let oracle = oracle();
    let c = HostClass::new("demo.Point", ClassTyKind::Class, TypeFlags::PUBLIC);
    c.set_data(HostClassData {
        fields: vec![(
            "x".into(),
            TypeFlags::PRIVATE | TypeFlags::FINAL,
            HostType::Primitive(Primitive::Int),
        )],
        ..HostClassData::default()
    });
    let owner = HostType::Class(c);
    let Some(var) = oracle.resolve_variable(&owner, "x") else {
        panic!("expected variable descriptor");
    };
    assert_eq!(var.name, "x");
    assert!(var.flags.contains(TypeFlags::FINAL));
    assert!(var.ty.is_same(&Ty::Primitive(Primitive::Int)));
}
