pub mod component_name;
pub mod component_version;
pub mod dependency_type;
pub mod settings;

pub use component_name::ComponentName;
pub use component_version::{
    ComponentVersion, ComponentVersionBuilder, VersionSelector, VersionSpec,
};
pub use settings::{ParsedSettings, ResolverSettingName, SettingKey, Settings};

/// Settings keyed by the resolver setting names
pub type ResolverSettings = Settings<ResolverSettingName>;
