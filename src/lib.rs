//! depfilter - Component dependency filtering
//!
//! This library narrows a list of candidate component names down to the ones
//! that apply for a dependency type, using per-type resolver settings and an
//! ignore list. Dependency types without a registered policy pass through.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Component names, versions, settings and filter policies
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use depfilter::prelude::*;
//!
//! let filter = ComponentFilter::new(NullDiagnosticSink);
//! let candidates = vec![
//!     ComponentName::from_path("A").unwrap(),
//!     ComponentName::from_path("B").unwrap(),
//!     ComponentName::from_path("C").unwrap(),
//! ];
//! let ignored = vec![ComponentName::from_path("B").unwrap()];
//!
//! let kept = filter.filter("unknown", candidates, &ResolverSettings::new(), &ignored);
//! let names: Vec<String> = kept.iter().map(ComponentName::name).collect();
//! assert_eq!(names, vec!["A", "C"]);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrDiagnosticSink;
    pub use crate::adapters::outbound::filesystem::{
        ConfigSettingsSource, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::version_control::CachingVersionControlClient;
    pub use crate::application::dto::{
        FilterRequest, FilterResponse, OutputFormat, ResolveResponse, VersionedComponent,
    };
    pub use crate::application::use_cases::{FilterComponentsUseCase, ResolveVersionsUseCase};
    pub use crate::dependency_resolution::domain::{
        ComponentName, ComponentVersion, ResolverSettingName, ResolverSettings, SettingKey,
        Settings, VersionSpec,
    };
    pub use crate::dependency_resolution::policies::{FilterPolicy, PolicyRegistry, Verdict};
    pub use crate::dependency_resolution::services::ComponentFilter;
    pub use crate::ports::outbound::{
        DiagnosticSink, LogLevel, NullDiagnosticSink, OutputPresenter, ResultFormatter, Revision,
        SettingsSource, StaticSettingsSource, VersionControlClient,
    };
    pub use crate::shared::{ResolutionError, Result};
}
