//! Framework-agnostic identities shared by every generation path.

use vmgen_core::constants::{ATTRIBUTE_USAGE, BOOLEAN, PROPERTY_CHANGED, PROPERTY_CHANGING, TASK};
use vmgen_core::{ResolveError, TypeIdentity, TypeUniverse};

/// Standard-library identities. All required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonSymbolTable {
    pub property_changed: TypeIdentity,
    pub property_changing: TypeIdentity,
    pub task: TypeIdentity,
    pub boolean: TypeIdentity,
    pub attribute_usage: TypeIdentity,
}

/// Resolve the common table. A miss means the host standard library is
/// malformed and the pass must abort.
pub fn build_common<U: TypeUniverse + ?Sized>(
    universe: &U,
) -> Result<CommonSymbolTable, ResolveError> {
    Ok(CommonSymbolTable {
        property_changed: require_common(universe, PROPERTY_CHANGED)?,
        property_changing: require_common(universe, PROPERTY_CHANGING)?,
        task: require_common(universe, TASK)?,
        boolean: require_common(universe, BOOLEAN)?,
        attribute_usage: require_common(universe, ATTRIBUTE_USAGE)?,
    })
}

fn require_common<U: TypeUniverse + ?Sized>(
    universe: &U,
    name: &str,
) -> Result<TypeIdentity, ResolveError> {
    universe.type_by_metadata_name(name).ok_or_else(|| {
        tracing::error!(type_name = name, "common type missing from compilation");
        ResolveError::MissingCommonType {
            name: name.to_string(),
        }
    })
}
