use crate::dependency_resolution::domain::{ComponentName, ComponentVersion};
use crate::ports::outbound::Revision;
use serde::Serialize;

/// A component paired with the version it is requested at
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedComponent {
    pub name: ComponentName,
    pub version: ComponentVersion,
}

impl VersionedComponent {
    pub fn new(name: ComponentName, version: ComponentVersion) -> Self {
        Self { name, version }
    }
}

/// A component whose version selector has been resolved where possible
///
/// `revision` is set only for version-spec selectors; literal versions,
/// build numbers and build filters are resolved later by the build system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedComponent {
    pub name: ComponentName,
    pub version: ComponentVersion,
    pub revision: Option<Revision>,
}

/// ResolveResponse - Response DTO for the version resolution use case
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolveResponse {
    /// Resolved components, in input order
    pub resolved: Vec<ResolvedComponent>,
    pub unresolved: Vec<super::UnresolvedCandidate>,
}
