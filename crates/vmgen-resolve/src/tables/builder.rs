//! Per-variant symbol table builder.
//!
//! Required identities resolve by fixed name inside the variant's attribute
//! namespace; a miss is configuration-fatal. Optional identities are probed and
//! may independently be absent.

use vmgen_core::constants::{
    CANCELLATION_TOKEN, COMMAND_ATTRIBUTE, DATA_ERROR_INFO, DX_SUPPORT_PARENT_VIEW_MODEL,
    DX_SUPPORT_SERVICES, DX_SUPPORT_UI_SERVICES, MVVM_LIGHT_CLEANUP, MVVM_LIGHT_WPF_RELAY_COMMAND,
    PRISM_ACTIVE_AWARE, PROPERTY_ATTRIBUTE, VIEW_MODEL_ATTRIBUTE,
};
use vmgen_core::{FrameworkVariant, ResolveError, TypeIdentity, TypeUniverse};

use super::{
    DxServices, DxSymbols, FrameworkAttributes, MvvmLightSymbols, PrismSymbols, VariantSymbolTable,
};
use crate::detection::catalog::attribute_namespace;

/// Build the table for one detected variant.
///
/// `None` builds the primary (DevExpress) table: the default attribute
/// namespace doubles as the fallback surface. `is_win_ui` only affects the
/// primary table and selects which service capability group is probed.
pub fn build_table<U: TypeUniverse + ?Sized>(
    variant: FrameworkVariant,
    universe: &U,
    is_win_ui: bool,
) -> Result<VariantSymbolTable, ResolveError> {
    let attributes = resolve_attributes(universe, variant)?;
    let table = match variant {
        FrameworkVariant::Dx | FrameworkVariant::None => {
            VariantSymbolTable::Dx(build_dx(universe, attributes, is_win_ui))
        }
        FrameworkVariant::Prism => VariantSymbolTable::Prism(PrismSymbols {
            attributes,
            active_aware: probe(universe, variant, PRISM_ACTIVE_AWARE),
        }),
        FrameworkVariant::MvvmLight => VariantSymbolTable::MvvmLight(MvvmLightSymbols {
            attributes,
            cleanup: probe(universe, variant, MVVM_LIGHT_CLEANUP),
            wpf_relay_command: probe(universe, variant, MVVM_LIGHT_WPF_RELAY_COMMAND),
        }),
    };
    Ok(table)
}

fn build_dx<U: TypeUniverse + ?Sized>(
    universe: &U,
    attributes: FrameworkAttributes,
    is_win_ui: bool,
) -> DxSymbols {
    let variant = FrameworkVariant::Dx;
    let services = if is_win_ui {
        DxServices::WinUi {
            support_ui_services: probe(universe, variant, DX_SUPPORT_UI_SERVICES),
            cancellation_token: probe(universe, variant, CANCELLATION_TOKEN),
        }
    } else {
        DxServices::Classic {
            support_services: probe(universe, variant, DX_SUPPORT_SERVICES),
            support_parent_view_model: probe(universe, variant, DX_SUPPORT_PARENT_VIEW_MODEL),
        }
    };
    DxSymbols {
        attributes,
        data_error_info: probe(universe, variant, DATA_ERROR_INFO),
        services,
    }
}

fn resolve_attributes<U: TypeUniverse + ?Sized>(
    universe: &U,
    variant: FrameworkVariant,
) -> Result<FrameworkAttributes, ResolveError> {
    let namespace = attribute_namespace(variant);
    Ok(FrameworkAttributes {
        view_model: require(universe, variant, &format!("{namespace}.{VIEW_MODEL_ATTRIBUTE}"))?,
        property: require(universe, variant, &format!("{namespace}.{PROPERTY_ATTRIBUTE}"))?,
        command: require(universe, variant, &format!("{namespace}.{COMMAND_ATTRIBUTE}"))?,
    })
}

fn require<U: TypeUniverse + ?Sized>(
    universe: &U,
    variant: FrameworkVariant,
    name: &str,
) -> Result<TypeIdentity, ResolveError> {
    universe.type_by_metadata_name(name).ok_or_else(|| {
        tracing::error!(%variant, type_name = name, "required attribute type missing for detected variant");
        ResolveError::MissingRequiredType {
            variant,
            name: name.to_string(),
        }
    })
}

fn probe<U: TypeUniverse + ?Sized>(
    universe: &U,
    variant: FrameworkVariant,
    name: &'static str,
) -> Option<TypeIdentity> {
    let found = universe.type_by_metadata_name(name);
    if found.is_none() {
        tracing::debug!(%variant, capability = name, "optional capability absent");
    }
    found
}
