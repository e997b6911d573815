//! The host seam: a queryable snapshot of a compilation's visible types.

use crate::types::identity::{CompilationId, TypeIdentity};

/// A frozen view of the types visible to one compilation pass.
///
/// Implemented by the hosting compiler adapter. Every method must be a pure
/// function of the snapshot: resolution relies on repeated queries returning
/// the same answer.
pub trait TypeUniverse {
    /// The compilation this snapshot belongs to.
    fn compilation_id(&self) -> CompilationId;

    /// Look up a declared type by its fully-qualified metadata name.
    fn type_by_metadata_name(&self, name: &str) -> Option<TypeIdentity>;

    /// Reverse lookup, for emitters that need to print a resolved type.
    fn metadata_name(&self, id: TypeIdentity) -> Option<&str>;

    /// Names of the libraries referenced by the compilation.
    fn referenced_libraries(&self) -> &[String];

    /// Whether a type with this name is visible.
    fn contains_type(&self, name: &str) -> bool {
        self.type_by_metadata_name(name).is_some()
    }
}

impl<T: TypeUniverse + ?Sized> TypeUniverse for &T {
    fn compilation_id(&self) -> CompilationId {
        (**self).compilation_id()
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<TypeIdentity> {
        (**self).type_by_metadata_name(name)
    }

    fn metadata_name(&self, id: TypeIdentity) -> Option<&str> {
        (**self).metadata_name(id)
    }

    fn referenced_libraries(&self) -> &[String] {
        (**self).referenced_libraries()
    }
}
