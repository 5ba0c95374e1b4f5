//! On-disk type-table consumption.
//!
//! Dependencies that exist only as compiled archives are described by a
//! gzip-compressed tab-separated table with one row per class or member:
//!
//! ```text
//! groupId  artifactId  version  classAccess  className  classSignature
//! classSuperclassSignature  classSuperinterfaceSignatures[|]  access
//! memberName  descriptor  signature  parameterNames[|]  exceptions[|]
//! ```
//!
//! A row with an empty member name declares the class itself. Member types
//! come from JVM descriptors; the generic `signature` column is carried
//! through when present but the erased descriptor drives resolution.
//! Malformed rows are skipped with a warning, never fatal.

#[cfg(test)]
mod tests;

use flate2::read::GzDecoder;
use rustc_hash::FxHashMap;
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::descriptor_parse::DescriptorParser;
use crate::flags::TypeFlags;
use crate::host::{HostMethodHandle, HostType};
use crate::intern::TypeCache;
use crate::oracle::{SemanticOracle, TypeOracle};
use crate::ty::{ClassData, ClassTy, ClassTyKind, Method, Ty, Variable};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read type table: {0}")]
    Io(#[from] std::io::Error),
}

const COLUMN_COUNT: usize = 14;

/// One member row of the table.
#[derive(Debug, Clone)]
pub struct TableMember {
    pub access: TypeFlags,
    pub name: String,
    pub descriptor: String,
    /// Generic signature column; equals the descriptor when the producer
    /// had no generic information.
    pub signature: String,
    pub parameter_names: Vec<String>,
    pub exceptions: Vec<String>,
}

impl TableMember {
    pub fn is_method(&self) -> bool {
        self.descriptor.starts_with('(')
    }
}

/// All rows for one class.
#[derive(Debug, Clone, Default)]
pub struct TableClass {
    pub access: TypeFlags,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub members: Vec<TableMember>,
}

impl TableClass {
    fn kind(&self) -> ClassTyKind {
        if self.access.contains(TypeFlags::ANNOTATION) {
            ClassTyKind::Annotation
        } else if self.access.contains(TypeFlags::INTERFACE) {
            ClassTyKind::Interface
        } else if self.access.contains(TypeFlags::ENUM) {
            ClassTyKind::Enum
        } else {
            ClassTyKind::Class
        }
    }
}

/// Parsed type table, indexed by fully-qualified class name.
#[derive(Debug, Default)]
pub struct TypeTable {
    classes: FxHashMap<String, TableClass>,
}

impl TypeTable {
    /// Read a gzip-compressed table.
    pub fn read(reader: impl Read) -> Result<TypeTable, TableError> {
        Self::read_tsv(BufReader::new(GzDecoder::new(reader)))
    }

    /// Read the uncompressed tab-separated form.
    pub fn read_tsv(reader: impl BufRead) -> Result<TypeTable, TableError> {
        let mut table = TypeTable::default();
        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            if !table.push_row(&line) {
                warn!(line = line_number + 1, "skipping malformed type-table row");
            }
        }
        Ok(table)
    }

    fn push_row(&mut self, line: &str) -> bool {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMN_COUNT {
            return false;
        }
        let Ok(class_access) = columns[3].parse::<u32>() else {
            return false;
        };
        let class_name = normalize_name(columns[4]);
        if class_name.is_empty() {
            return false;
        }
        let entry = self.classes.entry(class_name).or_default();
        entry.access = TypeFlags::from_access(class_access);
        if !columns[6].is_empty() {
            entry.superclass = Some(normalize_name(columns[6]));
        }
        if !columns[7].is_empty() {
            entry.interfaces = columns[7].split('|').map(normalize_name).collect();
        }
        if columns[9].is_empty() {
            return true; // class-only row
        }
        let Ok(member_access) = columns[8].parse::<u32>() else {
            return false;
        };
        entry.members.push(TableMember {
            access: TypeFlags::from_access(member_access),
            name: columns[9].to_string(),
            descriptor: columns[10].to_string(),
            signature: if columns[11].is_empty() {
                columns[10].to_string()
            } else {
                columns[11].to_string()
            },
            parameter_names: split_pipe(columns[12]),
            exceptions: split_pipe(columns[13]).into_iter().map(|e| normalize_name(&e)).collect(),
        });
        true
    }

    pub fn class(&self, fully_qualified_name: &str) -> Option<&TableClass> {
        self.classes.get(fully_qualified_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.replace('/', ".")
}

fn split_pipe(column: &str) -> Vec<String> {
    if column.is_empty() {
        Vec::new()
    } else {
        column.split('|').map(String::from).collect()
    }
}

/// Oracle resolving through a type table first, falling back to the live
/// semantic model for anything the table does not know.
pub struct TableOracle {
    table: TypeTable,
    cache: Arc<TypeCache>,
    inner: SemanticOracle,
}

impl TableOracle {
    pub fn new(table: TypeTable, cache: Arc<TypeCache>) -> TableOracle {
        TableOracle {
            table,
            inner: SemanticOracle::new(cache.clone()),
            cache,
        }
    }

    /// Resolve a class by name from the table, interning the descriptor.
    /// Names absent from the table produce shallow name-only descriptors.
    pub fn resolve_name(&self, fully_qualified_name: &str) -> Ty {
        let Some(table_class) = self.table.class(fully_qualified_name) else {
            let (ty, _) = self.cache.intern(fully_qualified_name, || {
                Ty::Class(Arc::new(ClassTy::shallow(
                    fully_qualified_name,
                    ClassTyKind::Class,
                    TypeFlags::empty(),
                )))
            });
            return ty;
        };
        let (ty, created) = self.cache.intern(fully_qualified_name, || {
            Ty::Class(Arc::new(ClassTy::shallow(
                fully_qualified_name,
                table_class.kind(),
                table_class.access,
            )))
        });
        if created {
            if let Ty::Class(class) = &ty {
                self.fill_from_table(class, table_class);
            }
        }
        ty
    }

    fn fill_from_table(&self, class: &Arc<ClassTy>, table_class: &TableClass) {
        let parser = DescriptorParser::new(&self.cache);
        let owner = Ty::Class(class.clone());
        let mut members = Vec::new();
        let mut methods = Vec::new();
        for member in &table_class.members {
            if member.is_method() {
                match parser.parse_method(&member.descriptor) {
                    Ok((parameter_types, return_ty)) => {
                        let signature = format!(
                            "{}{{name={},return={},parameters=[{}]}}",
                            class.fully_qualified_name,
                            member.name,
                            return_ty.signature(),
                            parameter_types
                                .iter()
                                .map(Ty::signature)
                                .collect::<Vec<_>>()
                                .join(",")
                        );
                        let thrown = member
                            .exceptions
                            .iter()
                            .map(|e| self.resolve_name(e))
                            .collect();
                        methods.push(self.cache.intern_method(&signature, || {
                            Arc::new(Method {
                                flags: member.access,
                                declaring: owner.clone(),
                                name: member.name.clone(),
                                return_ty,
                                parameter_names: member.parameter_names.clone(),
                                parameter_types,
                                thrown,
                                signature: signature.clone(),
                                // Table rows carry erased descriptors only.
                                generic_signature: signature.clone(),
                            })
                        }));
                    }
                    Err(error) => {
                        warn!(
                            class = %class.fully_qualified_name,
                            member = %member.name,
                            %error,
                            "skipping member with malformed descriptor"
                        );
                    }
                }
            } else {
                match parser.parse_field(&member.descriptor) {
                    Ok(field_ty) => {
                        let key =
                            format!("{}#{}", class.fully_qualified_name, member.name);
                        members.push(self.cache.intern_variable(&key, || {
                            Arc::new(Variable {
                                flags: member.access,
                                name: member.name.clone(),
                                owner: owner.clone(),
                                ty: field_ty.clone(),
                            })
                        }));
                    }
                    Err(error) => {
                        warn!(
                            class = %class.fully_qualified_name,
                            member = %member.name,
                            %error,
                            "skipping member with malformed descriptor"
                        );
                    }
                }
            }
        }
        class.fill(ClassData {
            supertype: table_class
                .superclass
                .as_deref()
                .map(|s| self.resolve_name(s)),
            owner: None,
            annotations: Vec::new(),
            interfaces: table_class
                .interfaces
                .iter()
                .map(|i| self.resolve_name(i))
                .collect(),
            type_parameters: Vec::new(),
            members,
            methods,
        });
    }
}

impl TypeOracle for TableOracle {
    fn resolve(&self, handle: &HostType) -> Option<Ty> {
        match handle {
            HostType::Class(host_class) if self.table.class(&host_class.name).is_some() => {
                Some(self.resolve_name(&host_class.name))
            }
            HostType::Unresolved { name: Some(name) } if self.table.class(name).is_some() => {
                Some(self.resolve_name(name))
            }
            other => self.inner.resolve(other),
        }
    }

    fn resolve_method(&self, handle: &HostMethodHandle) -> Option<Arc<Method>> {
        self.inner.resolve_method(handle)
    }

    fn resolve_variable(&self, owner: &HostType, name: &str) -> Option<Arc<Variable>> {
        self.inner.resolve_variable(owner, name)
    }
}
