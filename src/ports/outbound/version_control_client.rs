use crate::dependency_resolution::domain::{ComponentName, VersionSpec};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// A concrete point in version-control history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Revision(pub u64);

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// VersionControlClient port for resolving version specs
///
/// This port abstracts the version-control server. The filtering core never
/// talks to it directly; only the version resolution use case does.
#[async_trait]
pub trait VersionControlClient: Send + Sync {
    /// Resolves a version spec for a component into a concrete revision
    ///
    /// # Errors
    /// Returns an error if the component or spec cannot be resolved
    /// (unknown label, path not found, server unreachable).
    async fn resolve_version_spec(
        &self,
        component: &ComponentName,
        spec: &VersionSpec,
    ) -> Result<Revision>;
}
