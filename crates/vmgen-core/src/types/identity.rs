//! Compilation-scoped type handles.

use std::fmt;

use lasso::{Key, Spur};

/// Identifies one compilation pass's type universe.
///
/// Hosts hand out a fresh id per snapshot; identities from different
/// snapshots never compare equal even when their names match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompilationId(u32);

impl CompilationId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CompilationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compilation#{}", self.0)
    }
}

/// Opaque handle to a named type declared in (or referenced by) a compilation.
///
/// Two identities are equal iff they denote the same declared type in the same
/// compilation. The handle is `Copy` and never mutated after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentity {
    compilation: CompilationId,
    key: Spur,
}

impl TypeIdentity {
    /// Build a handle from the owning compilation and the host's interned name key.
    pub fn new(compilation: CompilationId, key: Spur) -> Self {
        Self { compilation, key }
    }

    pub fn compilation(&self) -> CompilationId {
        self.compilation
    }

    pub fn key(&self) -> Spur {
        self.key
    }

    /// True when both handles come from the same compilation.
    pub fn same_compilation(&self, other: &TypeIdentity) -> bool {
        self.compilation == other.compilation
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:type#{}", self.compilation, self.key.into_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lasso::Rodeo;

    #[test]
    fn identities_from_different_compilations_differ() {
        let mut rodeo = Rodeo::default();
        let key = rodeo.get_or_intern("System.Boolean");
        let a = TypeIdentity::new(CompilationId::new(1), key);
        let b = TypeIdentity::new(CompilationId::new(2), key);
        assert_ne!(a, b);
        assert!(!a.same_compilation(&b));
        assert_eq!(a, TypeIdentity::new(CompilationId::new(1), key));
    }

    #[test]
    fn display_includes_compilation() {
        let mut rodeo = Rodeo::default();
        let key = rodeo.get_or_intern("System.Boolean");
        let id = TypeIdentity::new(CompilationId::new(7), key);
        assert!(id.to_string().starts_with("compilation#7:"));
    }
}
