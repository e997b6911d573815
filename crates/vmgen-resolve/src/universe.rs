//! In-memory type universe.
//!
//! Names are interned into a `Rodeo` while the snapshot is assembled, then
//! frozen into a `RodeoReader` so the resolution phase cannot add types.

use std::sync::atomic::{AtomicU32, Ordering};

use lasso::{Rodeo, RodeoReader};
use vmgen_core::{CompilationId, TypeIdentity, TypeUniverse};

static NEXT_COMPILATION: AtomicU32 = AtomicU32::new(1);

/// Collects declared type names and referenced libraries for one compilation.
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    names: Rodeo,
    libraries: Vec<String>,
}

impl UniverseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type by fully-qualified metadata name. Duplicates are ignored.
    pub fn add_type(&mut self, metadata_name: &str) -> &mut Self {
        self.names.get_or_intern(metadata_name);
        self
    }

    pub fn add_library(&mut self, name: &str) -> &mut Self {
        if !self.libraries.iter().any(|l| l == name) {
            self.libraries.push(name.to_string());
        }
        self
    }

    pub fn with_type(mut self, metadata_name: &str) -> Self {
        self.add_type(metadata_name);
        self
    }

    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_type(name.as_ref());
        }
        self
    }

    pub fn with_library(mut self, name: &str) -> Self {
        self.add_library(name);
        self
    }

    /// Freeze the snapshot under a fresh compilation id.
    pub fn freeze(self) -> InMemoryUniverse {
        let id = CompilationId::new(NEXT_COMPILATION.fetch_add(1, Ordering::Relaxed));
        InMemoryUniverse {
            id,
            names: self.names.into_reader(),
            libraries: self.libraries,
        }
    }
}

/// A frozen, read-only type universe.
#[derive(Debug)]
pub struct InMemoryUniverse {
    id: CompilationId,
    names: RodeoReader,
    libraries: Vec<String>,
}

impl InMemoryUniverse {
    pub fn builder() -> UniverseBuilder {
        UniverseBuilder::new()
    }

    /// Number of declared types.
    pub fn type_count(&self) -> usize {
        self.names.len()
    }
}

impl TypeUniverse for InMemoryUniverse {
    fn compilation_id(&self) -> CompilationId {
        self.id
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<TypeIdentity> {
        self.names.get(name).map(|key| TypeIdentity::new(self.id, key))
    }

    fn metadata_name(&self, id: TypeIdentity) -> Option<&str> {
        if id.compilation() != self.id {
            return None;
        }
        self.names.try_resolve(&id.key())
    }

    fn referenced_libraries(&self) -> &[String] {
        &self.libraries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_reverse_lookup() {
        let universe = UniverseBuilder::new()
            .with_type("System.Boolean")
            .with_library("System.Runtime")
            .freeze();
        let id = universe.type_by_metadata_name("System.Boolean").unwrap();
        assert_eq!(universe.metadata_name(id), Some("System.Boolean"));
        assert!(universe.type_by_metadata_name("System.Int32").is_none());
        assert_eq!(universe.referenced_libraries().to_vec(), vec!["System.Runtime".to_string()]);
    }

    #[test]
    fn each_freeze_gets_a_fresh_compilation() {
        let a = UniverseBuilder::new().with_type("System.Boolean").freeze();
        let b = UniverseBuilder::new().with_type("System.Boolean").freeze();
        assert_ne!(a.compilation_id(), b.compilation_id());

        let from_a = a.type_by_metadata_name("System.Boolean").unwrap();
        let from_b = b.type_by_metadata_name("System.Boolean").unwrap();
        assert_ne!(from_a, from_b);
        // A foreign handle never resolves to a name.
        assert_eq!(b.metadata_name(from_a), None);
    }

    #[test]
    fn duplicate_declarations_are_collapsed() {
        let universe = UniverseBuilder::new()
            .with_types(["A.B", "A.B", "A.C"])
            .with_library("Lib")
            .with_library("Lib")
            .freeze();
        assert_eq!(universe.type_count(), 2);
        assert_eq!(universe.referenced_libraries().len(), 1);
    }
}
