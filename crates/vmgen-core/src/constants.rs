//! Well-known fully-qualified type names probed during resolution.

// Attribute namespaces, one per variant. `None` shares the primary namespace.
pub const DX_ATTRIBUTE_NAMESPACE: &str = "DevExpress.Mvvm.CodeGenerators";
pub const PRISM_ATTRIBUTE_NAMESPACE: &str = "DevExpress.Mvvm.CodeGenerators.Prism";
pub const MVVM_LIGHT_ATTRIBUTE_NAMESPACE: &str = "DevExpress.Mvvm.CodeGenerators.MvvmLight";

// Required attribute type names, relative to the variant namespace.
pub const VIEW_MODEL_ATTRIBUTE: &str = "GenerateViewModelAttribute";
pub const PROPERTY_ATTRIBUTE: &str = "GeneratePropertyAttribute";
pub const COMMAND_ATTRIBUTE: &str = "GenerateCommandAttribute";

// Detection markers: a command implementation shipped by each runtime.
pub const DX_MARKER: &str = "DevExpress.Mvvm.DelegateCommand";
pub const PRISM_MARKER: &str = "Prism.Commands.DelegateCommand";
pub const MVVM_LIGHT_MARKER: &str = "GalaSoft.MvvmLight.Command.RelayCommand";

/// Present only in the classic DevExpress runtime; its absence selects WinUI.
pub const DX_CLASSIC_MARKER: &str = "DevExpress.Mvvm.POCO.ViewModelSource";

// DevExpress optional capabilities.
pub const DATA_ERROR_INFO: &str = "System.ComponentModel.IDataErrorInfo";
pub const DX_SUPPORT_SERVICES: &str = "DevExpress.Mvvm.ISupportServices";
pub const DX_SUPPORT_PARENT_VIEW_MODEL: &str = "DevExpress.Mvvm.ISupportParentViewModel";
pub const DX_SUPPORT_UI_SERVICES: &str = "DevExpress.Mvvm.ISupportUIServices";
pub const CANCELLATION_TOKEN: &str = "System.Threading.CancellationToken";

// Prism optional capabilities.
pub const PRISM_ACTIVE_AWARE: &str = "Prism.IActiveAware";

// MVVM Light optional capabilities.
pub const MVVM_LIGHT_CLEANUP: &str = "GalaSoft.MvvmLight.ICleanup";
pub const MVVM_LIGHT_WPF_RELAY_COMMAND: &str = "GalaSoft.MvvmLight.CommandWpf.RelayCommand";

// Framework-agnostic identities from the hosting standard library.
pub const PROPERTY_CHANGED: &str = "System.ComponentModel.INotifyPropertyChanged";
pub const PROPERTY_CHANGING: &str = "System.ComponentModel.INotifyPropertyChanging";
pub const TASK: &str = "System.Threading.Tasks.Task";
pub const BOOLEAN: &str = "System.Boolean";
pub const ATTRIBUTE_USAGE: &str = "System.AttributeUsageAttribute";

/// Environment variable consulted before the configured tracing filter.
pub const LOG_ENV_VAR: &str = "VMGEN_LOG";

/// Default tracing filter when neither env nor config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";
