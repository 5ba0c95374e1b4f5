//! Access and property flag sets.

use bitflags::bitflags;

bitflags! {
    /// Modifier/access flags on types and members, bit-compatible with JVM
    /// class-file access flags so type-table rows map directly.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u32 {
        const PUBLIC       = 0x0001;
        const PRIVATE      = 0x0002;
        const PROTECTED    = 0x0004;
        const STATIC       = 0x0008;
        const FINAL        = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE     = 0x0040;
        const TRANSIENT    = 0x0080;
        const NATIVE       = 0x0100;
        const INTERFACE    = 0x0200;
        const ABSTRACT     = 0x0400;
        const STRICTFP     = 0x0800;
        const SYNTHETIC    = 0x1000;
        const ANNOTATION   = 0x2000;
        const ENUM         = 0x4000;
    }
}

impl TypeFlags {
    /// Map a raw class-file access value, dropping unknown bits.
    pub fn from_access(access: u32) -> TypeFlags {
        TypeFlags::from_bits_truncate(access)
    }

    /// Package-private: none of the three visibility bits set. This is the
    /// default visibility synthesized descriptors get.
    pub fn is_package_private(self) -> bool {
        !self.intersects(TypeFlags::PUBLIC | TypeFlags::PRIVATE | TypeFlags::PROTECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_mapping_drops_unknown_bits() {
        let flags = TypeFlags::from_access(0x0001 | 0x8000);
        assert_eq!(flags, TypeFlags::PUBLIC);
    }

    #[test]
    fn default_visibility_is_package_private() {
        assert!(TypeFlags::empty().is_package_private());
        assert!(!TypeFlags::PUBLIC.is_package_private());
    }
}
