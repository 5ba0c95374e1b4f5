//! Compilation units and declarations.

use lst_types::{Method, Ty, Variable};
use std::sync::Arc;

use crate::id::TreeId;
use crate::marker::Markers;
use crate::pad::{Container, LeftPadded, RightPadded};
use crate::space::Space;

use super::{Block, Dialect, Expression, Identifier, Statement, TypeTree};

/// Root of one parsed source file.
///
/// All top-level content (package declaration, imports, classes, and for the
/// scripting dialect loose statements) lives in `statements` in strict
/// source order. `eof` captures the formatting after the last statement.
#[derive(Clone, PartialEq, Debug)]
pub struct CompilationUnit {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub dialect: Dialect,
    pub statements: Vec<RightPadded<Statement>>,
    pub eof: Space,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Package {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Dotted name as an identifier or field-access chain.
    pub expr: Expression,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Import {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// `Some(space)` when this is a static import; the space sits between
    /// `import` and `static`.
    pub statik: Option<Space>,
    /// Dotted name, possibly ending in `*`.
    pub qualid: Expression,
}

/// Declaration kind keyword of a class-like declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    pub fn token(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Annotation => "@interface",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ClassDecl {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Annotations appearing before the first modifier.
    pub leading_annotations: Vec<Annotation>,
    /// Modifiers in original source order, each with any annotations that
    /// trailed it.
    pub modifiers: Vec<Modifier>,
    /// Space ahead of the kind keyword.
    pub kind_prefix: Space,
    pub kind: ClassKind,
    pub name: Identifier,
    pub type_parameters: Option<Container<TypeParameter>>,
    /// `before` holds the space ahead of `extends`.
    pub extends: Option<LeftPadded<TypeTree>>,
    /// `before` holds the space ahead of `implements`.
    pub implements: Option<Container<TypeTree>>,
    pub body: Block,
    pub ty: Option<Ty>,
}

/// Source-ordered modifier keyword with trailing annotations.
#[derive(Clone, PartialEq, Debug)]
pub struct Modifier {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub keyword: ModifierKeyword,
    /// Annotations that appeared between this modifier and the next.
    pub annotations: Vec<Annotation>,
}

/// Modifier keywords across both dialects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModifierKeyword {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
    /// Scripting-dialect untyped declaration keyword.
    Def,
}

impl ModifierKeyword {
    pub fn token(self) -> &'static str {
        match self {
            ModifierKeyword::Public => "public",
            ModifierKeyword::Protected => "protected",
            ModifierKeyword::Private => "private",
            ModifierKeyword::Static => "static",
            ModifierKeyword::Final => "final",
            ModifierKeyword::Abstract => "abstract",
            ModifierKeyword::Native => "native",
            ModifierKeyword::Synchronized => "synchronized",
            ModifierKeyword::Transient => "transient",
            ModifierKeyword::Volatile => "volatile",
            ModifierKeyword::Strictfp => "strictfp",
            ModifierKeyword::Default => "default",
            ModifierKeyword::Def => "def",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Annotation {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    /// Name after `@`: identifier or qualified name.
    pub annotation_type: TypeTree,
    /// `None` when the annotation has no argument list at all (not even
    /// empty parentheses).
    pub args: Option<Container<Expression>>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TypeParameter {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub annotations: Vec<Annotation>,
    pub name: Identifier,
    /// Bounds after `extends`; `before` of the container is the space ahead
    /// of the `extends` keyword.
    pub bounds: Option<Container<TypeTree>>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MethodDecl {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub leading_annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    pub type_parameters: Option<Container<TypeParameter>>,
    /// Absent for constructors and scripting-dialect `def` methods.
    pub return_type: Option<TypeTree>,
    pub name: Identifier,
    /// Parameter declarations; an [`super::Empty`] statement stands in for
    /// `()`.
    pub params: Container<Statement>,
    /// `before` of the container is the space ahead of `throws`.
    pub throws: Option<Container<TypeTree>>,
    /// Absent for abstract/interface methods.
    pub body: Option<Block>,
    pub method_type: Option<Arc<Method>>,
}

/// One declaration statement possibly naming several variables:
/// `int a = 1, b`.
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDecls {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub leading_annotations: Vec<Annotation>,
    pub modifiers: Vec<Modifier>,
    /// Absent for scripting-dialect untyped declarations.
    pub type_expr: Option<TypeTree>,
    /// `after` of each element holds the space ahead of the separating `,`.
    pub vars: Vec<RightPadded<NamedVariable>>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct NamedVariable {
    pub id: TreeId,
    pub prefix: Space,
    pub markers: Markers,
    pub name: Identifier,
    /// `before` holds the space ahead of `=`.
    pub initializer: Option<LeftPadded<Expression>>,
    pub variable_type: Option<Arc<Variable>>,
}
