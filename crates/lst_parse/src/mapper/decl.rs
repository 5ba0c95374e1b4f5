//! Declaration mapping: packages, imports, classes, methods, variables.

use lst_tree::{
    Annotation, Block, ClassDecl, ClassKind, Container, Empty, Expression, FieldAccess, Identifier,
    Import, LeftPadded, Markers, MethodDecl, NamedVariable, Package, RightPadded, Space, Statement,
    TreeId, TypeParameter, TypeTree, VariableDecls,
};
use lst_types::{HostType, Primitive, Ty};

use super::{DialectOps, TreeMapper};
use crate::error::MapError;
use crate::host::{
    HostClassDecl, HostImport, HostMethodDecl, HostPackage, HostTypeParam, HostTypeRef,
    HostVariableDecls,
};

impl<D: DialectOps> TreeMapper<'_, D> {
    pub(crate) fn map_package(&mut self, package: &HostPackage) -> Result<Package, MapError> {
        let prefix = self.cursor.whitespace();
        self.expect("package")?;
        let expr = self.map_dotted(&package.name, None)?;
        Ok(Package {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            expr,
        })
    }

    pub(crate) fn map_import(&mut self, import: &HostImport) -> Result<Import, MapError> {
        let prefix = self.cursor.whitespace();
        self.expect("import")?;
        let statik = if import.statik {
            let space = self.cursor.whitespace();
            self.expect("static")?;
            Some(space)
        } else {
            None
        };
        let qualid = self.map_dotted(&import.path, None)?;
        Ok(Import {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            statik,
            qualid,
        })
    }

    pub(crate) fn map_class(&mut self, class: &HostClassDecl) -> Result<ClassDecl, MapError> {
        self.push_frame("ClassDecl");
        // On failure the frame stays pushed so the diagnostic reported at
        // the unit level still names the enclosing chain; map_unit resets
        // the stack when it recovers.
        let mapped = self.map_class_parts(class)?;
        self.pop_frame();
        Ok(mapped)
    }

    fn map_class_parts(&mut self, class: &HostClassDecl) -> Result<ClassDecl, MapError> {
        let prefix = self.cursor.whitespace();
        let (leading_annotations, modifiers) = self.map_modifiers(&class.mods)?;
        let kind_prefix = self.cursor.whitespace();
        self.expect(class.kind.token())?;
        let name = self.map_identifier(&class.name)?;
        let type_parameters = if class.type_params.is_empty() {
            None
        } else {
            Some(self.type_param_container(&class.type_params)?)
        };
        let extends = match &class.extends {
            Some(supertype) => {
                let before = self.cursor.whitespace();
                self.expect("extends")?;
                Some(LeftPadded::new(before, self.map_type_ref(supertype)?))
            }
            None => None,
        };
        let implements = if class.implements.is_empty() {
            None
        } else {
            let before = self.cursor.whitespace();
            // Interfaces list their supertypes under `extends`.
            self.expect(if class.kind == ClassKind::Interface {
                "extends"
            } else {
                "implements"
            })?;
            Some(Container::new(
                before,
                self.bare_type_list(&class.implements)?,
            ))
        };
        let body = self.map_braced(&class.members)?;
        let ty = self.resolve(class.ty.as_ref());
        Ok(ClassDecl {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            leading_annotations,
            modifiers,
            kind_prefix,
            kind: class.kind,
            name,
            type_parameters,
            extends,
            implements,
            body,
            ty,
        })
    }

    pub(crate) fn map_method(&mut self, method: &HostMethodDecl) -> Result<MethodDecl, MapError> {
        self.push_frame("MethodDecl");
        let mapped = self.map_method_parts(method)?;
        self.pop_frame();
        Ok(mapped)
    }

    fn map_method_parts(&mut self, method: &HostMethodDecl) -> Result<MethodDecl, MapError> {
        let prefix = self.cursor.whitespace();
        let (leading_annotations, modifiers) = self.map_modifiers(&method.mods)?;
        let type_parameters = if method.type_params.is_empty() {
            None
        } else {
            Some(self.type_param_container(&method.type_params)?)
        };
        let return_type = method
            .return_type
            .as_ref()
            .map(|r| self.map_type_ref(r))
            .transpose()?;
        let name = self.map_identifier(&method.name)?;
        let params = self.param_container(&method.params)?;
        let throws = if method.throws.is_empty() {
            None
        } else {
            let before = self.cursor.whitespace();
            self.expect("throws")?;
            Some(Container::new(before, self.bare_type_list(&method.throws)?))
        };
        let body = match &method.body {
            Some(block) => Some(self.map_braced(&block.statements)?),
            None => None,
        };
        let method_type = method
            .handle
            .as_ref()
            .and_then(|handle| self.oracle.resolve_method(handle));
        Ok(MethodDecl {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            leading_annotations,
            modifiers,
            type_parameters,
            return_type,
            name,
            params,
            throws,
            body,
            method_type,
        })
    }

    pub(crate) fn map_var_decls(
        &mut self,
        decls: &HostVariableDecls,
    ) -> Result<VariableDecls, MapError> {
        let prefix = self.cursor.whitespace();
        let (leading_annotations, modifiers) = self.map_modifiers(&decls.mods)?;
        let type_expr = decls
            .type_ref
            .as_ref()
            .map(|r| self.map_type_ref(r))
            .transpose()?;
        let mut vars = Vec::with_capacity(decls.vars.len());
        for (i, var) in decls.vars.iter().enumerate() {
            let var_prefix = self.cursor.whitespace();
            let at = self.cursor.position();
            if self.cursor.skip(&var.name).is_none() {
                return Err(MapError::expected(&*var.name, at));
            }
            let initializer = match &var.init {
                Some(init) => {
                    let before = self.cursor.whitespace();
                    self.expect("=")?;
                    Some(LeftPadded::new(before, self.map_expr(init)?))
                }
                None => None,
            };
            let named = NamedVariable {
                id: TreeId::random(),
                prefix: var_prefix,
                markers: Markers::new(),
                name: Identifier::new(Space::empty(), &var.name),
                initializer,
                variable_type: None,
            };
            let after = if i + 1 == decls.vars.len() {
                Space::empty()
            } else {
                let space = self.cursor.whitespace();
                self.expect(",")?;
                space
            };
            vars.push(RightPadded::new(named, after));
        }
        Ok(VariableDecls {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            leading_annotations,
            modifiers,
            type_expr,
            vars,
        })
    }

    /// Map an annotation starting at the cursor: `@Name` or `@Name(args)`.
    pub(crate) fn map_annotation(
        &mut self,
        annotation: &crate::host::HostAnnotation,
    ) -> Result<Annotation, MapError> {
        let prefix = self.cursor.whitespace();
        self.expect("@")?;
        let name = self.map_dotted(&annotation.path, None)?;
        let annotation_type = expression_to_type_tree(name)?;
        let args = match &annotation.args {
            Some(args) => Some(self.paren_container_exprs(args)?),
            None => None,
        };
        Ok(Annotation {
            id: TreeId::random(),
            prefix,
            markers: Markers::new(),
            annotation_type,
            args,
        })
    }

    /// `<T, U extends Bound & Other>` including the angle brackets.
    fn type_param_container(
        &mut self,
        params: &[HostTypeParam],
    ) -> Result<Container<TypeParameter>, MapError> {
        let before = self.cursor.whitespace();
        self.expect("<")?;
        let mut elems = Vec::with_capacity(params.len());
        for (i, param) in params.iter().enumerate() {
            let mapped = self.map_type_param(param)?;
            let after = self.cursor.whitespace();
            self.expect(if i + 1 == params.len() { ">" } else { "," })?;
            elems.push(RightPadded::new(mapped, after));
        }
        Ok(Container::new(before, elems))
    }

    fn map_type_param(&mut self, param: &HostTypeParam) -> Result<TypeParameter, MapError> {
        let name = self.map_identifier(&param.name)?;
        let bounds = if param.bounds.is_empty() {
            None
        } else {
            let before = self.cursor.whitespace();
            self.expect("extends")?;
            let mut elems = Vec::with_capacity(param.bounds.len());
            for (i, bound) in param.bounds.iter().enumerate() {
                let tree = self.map_type_ref(bound)?;
                let after = if i + 1 == param.bounds.len() {
                    Space::empty()
                } else {
                    let space = self.cursor.whitespace();
                    self.expect("&")?;
                    space
                };
                elems.push(RightPadded::new(tree, after));
            }
            Some(Container::new(before, elems))
        };
        Ok(TypeParameter {
            id: TreeId::random(),
            prefix: Space::empty(),
            markers: Markers::new(),
            annotations: Vec::new(),
            name,
            bounds,
        })
    }

    /// A type as written in source position.
    pub(crate) fn map_type_ref(&mut self, type_ref: &HostTypeRef) -> Result<TypeTree, MapError> {
        match type_ref {
            HostTypeRef::Primitive { keyword, .. } => {
                let mut name = self.map_identifier(keyword)?;
                name.ty = Primitive::from_keyword(keyword).map(Ty::Primitive);
                Ok(TypeTree::Identifier(name))
            }
            HostTypeRef::Named { parts, ty, .. } => {
                let expr = self.map_dotted(parts, ty.as_ref())?;
                expression_to_type_tree(expr)
            }
            HostTypeRef::Parameterized { base, args, ty, .. } => {
                let clazz = self.map_type_ref(base)?;
                let before = self.cursor.whitespace();
                self.expect("<")?;
                let mut elems = Vec::with_capacity(args.len());
                for (i, arg) in args.iter().enumerate() {
                    let tree = self.map_type_ref(arg)?;
                    let after = self.cursor.whitespace();
                    self.expect(if i + 1 == args.len() { ">" } else { "," })?;
                    elems.push(RightPadded::new(tree, after));
                }
                Ok(TypeTree::Parameterized(Box::new(
                    lst_tree::ParameterizedType {
                        id: TreeId::random(),
                        prefix: Space::empty(),
                        markers: Markers::new(),
                        clazz,
                        type_args: Container::new(before, elems),
                        ty: self.resolve(ty.as_ref()),
                    },
                )))
            }
            HostTypeRef::Array { elem, ty, .. } => {
                let element_type = self.map_type_ref(elem)?;
                let dimension_before = self.cursor.whitespace();
                self.expect("[")?;
                let dimension_inner = self.cursor.whitespace();
                self.expect("]")?;
                Ok(TypeTree::Array(Box::new(lst_tree::ArrayType {
                    id: TreeId::random(),
                    prefix: Space::empty(),
                    markers: Markers::new(),
                    element_type,
                    dimension_before,
                    dimension_inner,
                    ty: self.resolve(ty.as_ref()),
                })))
            }
        }
    }

    /// Dotted name (`a.b.c`) as an identifier or field-access chain.
    pub(crate) fn map_dotted(
        &mut self,
        parts: &[String],
        ty: Option<&HostType>,
    ) -> Result<Expression, MapError> {
        let Some((first, rest)) = parts.split_first() else {
            return Err(MapError::UnsupportedNode("empty qualified name".into()));
        };
        let mut expr = Expression::Identifier(self.map_identifier(first)?);
        for part in rest {
            let before = self.cursor.whitespace();
            self.expect(".")?;
            let name = self.map_identifier(part)?;
            expr = Expression::FieldAccess(Box::new(FieldAccess {
                id: TreeId::random(),
                prefix: Space::empty(),
                markers: Markers::new(),
                target: expr,
                name: LeftPadded::new(before, name),
                ty: None,
            }));
        }
        if let Some(resolved) = self.resolve(ty) {
            match &mut expr {
                Expression::Identifier(identifier) => identifier.ty = Some(resolved),
                Expression::FieldAccess(access) => access.ty = Some(resolved),
                _ => {}
            }
        }
        Ok(expr)
    }

    /// Consume the next identifier token, which must be `name`.
    pub(crate) fn map_identifier(&mut self, name: &str) -> Result<Identifier, MapError> {
        let prefix = self.cursor.whitespace();
        let at = self.cursor.position();
        if self.cursor.skip(name).is_none() {
            return Err(MapError::expected(name, at));
        }
        Ok(Identifier::new(prefix, name))
    }

    /// Comma-separated types with no closing delimiter (`implements`,
    /// `throws` lists). The last element's padding stays empty; whatever
    /// follows owns the next space.
    pub(crate) fn bare_type_list(
        &mut self,
        refs: &[HostTypeRef],
    ) -> Result<Vec<RightPadded<TypeTree>>, MapError> {
        let mut elems = Vec::with_capacity(refs.len());
        for (i, type_ref) in refs.iter().enumerate() {
            let tree = self.map_type_ref(type_ref)?;
            let after = if i + 1 == refs.len() {
                Space::empty()
            } else {
                let space = self.cursor.whitespace();
                self.expect(",")?;
                space
            };
            elems.push(RightPadded::new(tree, after));
        }
        Ok(elems)
    }

    /// `(...)` parameter declarations; an empty list is represented by a
    /// single [`Empty`] statement holding the space between the parens.
    fn param_container(
        &mut self,
        params: &[HostVariableDecls],
    ) -> Result<Container<Statement>, MapError> {
        let before = self.cursor.whitespace();
        self.expect("(")?;
        let mut elems = Vec::with_capacity(params.len().max(1));
        if params.is_empty() {
            let inner = self.cursor.whitespace();
            self.expect(")")?;
            elems.push(RightPadded::new(
                Statement::Empty(Empty::new(inner)),
                Space::empty(),
            ));
        } else {
            for (i, param) in params.iter().enumerate() {
                let decl = self.map_var_decls(param)?;
                let after = self.cursor.whitespace();
                self.expect(if i + 1 == params.len() { ")" } else { "," })?;
                elems.push(RightPadded::new(
                    Statement::VariableDecls(Box::new(decl)),
                    after,
                ));
            }
        }
        Ok(Container::new(before, elems))
    }

    pub(crate) fn resolve(&self, handle: Option<&HostType>) -> Option<Ty> {
        handle.and_then(|h| self.oracle.resolve(h))
    }
}

/// Narrow a dotted-name expression to the type-tree family.
pub(crate) fn expression_to_type_tree(expr: Expression) -> Result<TypeTree, MapError> {
    match expr {
        Expression::Identifier(identifier) => Ok(TypeTree::Identifier(identifier)),
        Expression::FieldAccess(access) => Ok(TypeTree::FieldAccess(access)),
        other => Err(MapError::UnsupportedNode(format!(
            "expression {other:?} in type position"
        ))),
    }
}
