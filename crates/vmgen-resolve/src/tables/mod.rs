//! Symbol tables handed to the generation stage.
//!
//! Each detected variant gets a `VariantSymbolTable`: a tagged union with one
//! payload per framework. Required identities are plain `TypeIdentity` fields;
//! optional capabilities are `Option<TypeIdentity>` and `None` means the
//! dependent feature is simply not generated.

pub mod builder;
pub mod common;

use smallvec::SmallVec;
use vmgen_core::constants::{
    CANCELLATION_TOKEN, DATA_ERROR_INFO, DX_SUPPORT_PARENT_VIEW_MODEL, DX_SUPPORT_SERVICES,
    DX_SUPPORT_UI_SERVICES, MVVM_LIGHT_CLEANUP, MVVM_LIGHT_WPF_RELAY_COMMAND, PRISM_ACTIVE_AWARE,
};
use vmgen_core::{FrameworkVariant, TypeIdentity};

pub use builder::build_table;
pub use common::{build_common, CommonSymbolTable};

/// The three generation attributes every variant ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkAttributes {
    pub view_model: TypeIdentity,
    pub property: TypeIdentity,
    pub command: TypeIdentity,
}

/// DevExpress service capabilities. The two runtime profiles expose disjoint
/// surfaces, so only one group can ever be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DxServices {
    Classic {
        support_services: Option<TypeIdentity>,
        support_parent_view_model: Option<TypeIdentity>,
    },
    WinUi {
        support_ui_services: Option<TypeIdentity>,
        cancellation_token: Option<TypeIdentity>,
    },
}

impl DxServices {
    pub fn is_win_ui(&self) -> bool {
        matches!(self, Self::WinUi { .. })
    }

    /// The services interface of whichever profile is active.
    pub fn services_interface(&self) -> Option<TypeIdentity> {
        match *self {
            Self::Classic {
                support_services, ..
            } => support_services,
            Self::WinUi {
                support_ui_services,
                ..
            } => support_ui_services,
        }
    }

    pub fn parent_view_model(&self) -> Option<TypeIdentity> {
        match *self {
            Self::Classic {
                support_parent_view_model,
                ..
            } => support_parent_view_model,
            Self::WinUi { .. } => None,
        }
    }

    pub fn cancellation_token(&self) -> Option<TypeIdentity> {
        match *self {
            Self::Classic { .. } => None,
            Self::WinUi {
                cancellation_token, ..
            } => cancellation_token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DxSymbols {
    pub attributes: FrameworkAttributes,
    pub data_error_info: Option<TypeIdentity>,
    pub services: DxServices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrismSymbols {
    pub attributes: FrameworkAttributes,
    pub active_aware: Option<TypeIdentity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MvvmLightSymbols {
    pub attributes: FrameworkAttributes,
    pub cleanup: Option<TypeIdentity>,
    /// `RelayCommand` from the WPF-specific command assembly, when referenced.
    pub wpf_relay_command: Option<TypeIdentity>,
}

/// One optional capability slot, named by the type it probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub type_name: &'static str,
    pub identity: Option<TypeIdentity>,
}

/// Per-variant symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSymbolTable {
    Dx(DxSymbols),
    Prism(PrismSymbols),
    MvvmLight(MvvmLightSymbols),
}

impl VariantSymbolTable {
    pub fn attributes(&self) -> &FrameworkAttributes {
        match self {
            Self::Dx(t) => &t.attributes,
            Self::Prism(t) => &t.attributes,
            Self::MvvmLight(t) => &t.attributes,
        }
    }

    /// The framework whose namespace this table was resolved against.
    pub fn variant(&self) -> FrameworkVariant {
        match self {
            Self::Dx(_) => FrameworkVariant::Dx,
            Self::Prism(_) => FrameworkVariant::Prism,
            Self::MvvmLight(_) => FrameworkVariant::MvvmLight,
        }
    }

    pub fn as_dx(&self) -> Option<&DxSymbols> {
        match self {
            Self::Dx(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_prism(&self) -> Option<&PrismSymbols> {
        match self {
            Self::Prism(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_mvvm_light(&self) -> Option<&MvvmLightSymbols> {
        match self {
            Self::MvvmLight(t) => Some(t),
            _ => None,
        }
    }

    /// Every optional capability slot this table probed, resolved or not.
    pub fn capabilities(&self) -> SmallVec<[Capability; 4]> {
        let cap = |type_name: &'static str, identity: Option<TypeIdentity>| Capability {
            type_name,
            identity,
        };
        match self {
            Self::Dx(t) => {
                let mut caps = SmallVec::new();
                caps.push(cap(DATA_ERROR_INFO, t.data_error_info));
                match t.services {
                    DxServices::Classic {
                        support_services,
                        support_parent_view_model,
                    } => {
                        caps.push(cap(DX_SUPPORT_SERVICES, support_services));
                        caps.push(cap(DX_SUPPORT_PARENT_VIEW_MODEL, support_parent_view_model));
                    }
                    DxServices::WinUi {
                        support_ui_services,
                        cancellation_token,
                    } => {
                        caps.push(cap(DX_SUPPORT_UI_SERVICES, support_ui_services));
                        caps.push(cap(CANCELLATION_TOKEN, cancellation_token));
                    }
                }
                caps
            }
            Self::Prism(t) => smallvec::smallvec![cap(PRISM_ACTIVE_AWARE, t.active_aware)],
            Self::MvvmLight(t) => smallvec::smallvec![
                cap(MVVM_LIGHT_CLEANUP, t.cleanup),
                cap(MVVM_LIGHT_WPF_RELAY_COMMAND, t.wpf_relay_command),
            ],
        }
    }
}
