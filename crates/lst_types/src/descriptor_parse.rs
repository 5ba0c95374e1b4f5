//! JVM descriptor string parsing.
//!
//! The on-disk type table stores member types as class-file descriptors
//! (`(Ljava/lang/String;I)V`). This module turns them into interned [`Ty`]
//! values; classes referenced by descriptor are interned shallow (identity
//! only) and filled later if the table has rows for them.

use thiserror::Error;

use crate::flags::TypeFlags;
use crate::intern::TypeCache;
use crate::ty::{ArrayTy, ClassTy, ClassTyKind, Primitive, Ty};
use std::sync::Arc;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("descriptor ended unexpectedly")]
    UnexpectedEnd,
    #[error("unexpected character {ch:?} at offset {at}")]
    UnexpectedChar { at: usize, ch: char },
    #[error("trailing characters after descriptor")]
    Trailing,
}

/// Parser over one descriptor string, interning through the shared cache.
pub struct DescriptorParser<'a> {
    cache: &'a TypeCache,
}

impl<'a> DescriptorParser<'a> {
    pub fn new(cache: &'a TypeCache) -> DescriptorParser<'a> {
        DescriptorParser { cache }
    }

    /// Parse a field descriptor: a single type.
    pub fn parse_field(&self, descriptor: &str) -> Result<Ty, DescriptorError> {
        let bytes = descriptor.as_bytes();
        let mut pos = 0;
        let ty = self.parse_one(descriptor, bytes, &mut pos)?;
        if pos != bytes.len() {
            return Err(DescriptorError::Trailing);
        }
        Ok(ty)
    }

    /// Parse a method descriptor: parameter types and return type.
    pub fn parse_method(&self, descriptor: &str) -> Result<(Vec<Ty>, Ty), DescriptorError> {
        let bytes = descriptor.as_bytes();
        let mut pos = 0;
        if bytes.first() != Some(&b'(') {
            return Err(DescriptorError::UnexpectedChar {
                at: 0,
                ch: descriptor.chars().next().unwrap_or('\0'),
            });
        }
        pos += 1;
        let mut params = Vec::new();
        while bytes.get(pos) != Some(&b')') {
            if pos >= bytes.len() {
                return Err(DescriptorError::UnexpectedEnd);
            }
            params.push(self.parse_one(descriptor, bytes, &mut pos)?);
        }
        pos += 1; // ')'
        let ret = self.parse_one(descriptor, bytes, &mut pos)?;
        if pos != bytes.len() {
            return Err(DescriptorError::Trailing);
        }
        Ok((params, ret))
    }

    fn parse_one(
        &self,
        descriptor: &str,
        bytes: &[u8],
        pos: &mut usize,
    ) -> Result<Ty, DescriptorError> {
        let Some(&b) = bytes.get(*pos) else {
            return Err(DescriptorError::UnexpectedEnd);
        };
        *pos += 1;
        let ty = match b {
            b'Z' => Ty::Primitive(Primitive::Boolean),
            b'B' => Ty::Primitive(Primitive::Byte),
            b'C' => Ty::Primitive(Primitive::Char),
            b'D' => Ty::Primitive(Primitive::Double),
            b'F' => Ty::Primitive(Primitive::Float),
            b'I' => Ty::Primitive(Primitive::Int),
            b'J' => Ty::Primitive(Primitive::Long),
            b'S' => Ty::Primitive(Primitive::Short),
            b'V' => Ty::Primitive(Primitive::Void),
            b'[' => {
                let elem = self.parse_one(descriptor, bytes, pos)?;
                let signature = format!("{}[]", elem.signature());
                let (ty, _) = self
                    .cache
                    .intern(&signature, || Ty::Array(Arc::new(ArrayTy { elem })));
                ty
            }
            b'L' => {
                let start = *pos;
                while bytes.get(*pos).is_some_and(|&c| c != b';') {
                    *pos += 1;
                }
                if bytes.get(*pos) != Some(&b';') {
                    return Err(DescriptorError::UnexpectedEnd);
                }
                let internal = &descriptor[start..*pos];
                *pos += 1; // ';'
                let fqn = internal.replace('/', ".");
                let (ty, _) = self.cache.intern(&fqn, || {
                    Ty::Class(Arc::new(ClassTy::shallow(
                        fqn.clone(),
                        ClassTyKind::Class,
                        TypeFlags::empty(),
                    )))
                });
                ty
            }
            other => {
                return Err(DescriptorError::UnexpectedChar {
                    at: *pos - 1,
                    ch: other as char,
                })
            }
        };
        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitive_field() {
        let cache = TypeCache::new();
        let ty = DescriptorParser::new(&cache).parse_field("I");
        assert_eq!(ty, Ok(Ty::Primitive(Primitive::Int)));
    }

    #[test]
    fn object_field_normalizes_slashes() {
        let cache = TypeCache::new();
        let ty = DescriptorParser::new(&cache)
            .parse_field("Ljava/lang/String;")
            .ok();
        assert_eq!(
            ty.as_ref().and_then(Ty::fully_qualified_name),
            Some("java.lang.String")
        );
    }

    #[test]
    fn array_field() {
        let cache = TypeCache::new();
        let ty = DescriptorParser::new(&cache).parse_field("[[I");
        assert_eq!(ty.map(|t| t.signature()), Ok("int[][]".to_string()));
    }

    #[test]
    fn method_descriptor() {
        let cache = TypeCache::new();
        let parsed = DescriptorParser::new(&cache).parse_method("(Ljava/lang/String;I)V");
        let (params, ret) = parsed.unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].fully_qualified_name(), Some("java.lang.String"));
        assert!(ret.is_same(&Ty::Primitive(Primitive::Void)));
    }

    #[test]
    fn classes_from_descriptors_intern() {
        let cache = TypeCache::new();
        let parser = DescriptorParser::new(&cache);
        let a = parser.parse_field("Ljava/lang/String;").ok();
        let b = parser.parse_field("Ljava/lang/String;").ok();
        let (Some(Ty::Class(a)), Some(Ty::Class(b))) = (a, b) else {
            panic!("expected classes");
        };
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn malformed_descriptor_is_an_error() {
        let cache = TypeCache::new();
        let parser = DescriptorParser::new(&cache);
        assert_eq!(parser.parse_field("Q"), Err(DescriptorError::UnexpectedChar { at: 0, ch: 'Q' }));
        assert_eq!(parser.parse_field("Ljava/lang/String"), Err(DescriptorError::UnexpectedEnd));
        assert_eq!(parser.parse_field("II"), Err(DescriptorError::Trailing));
    }
}
