use crate::application::dto::{
    ResolveResponse, ResolvedComponent, UnresolvedCandidate, VersionedComponent,
};
use crate::ports::outbound::{DiagnosticSink, VersionControlClient};
use crate::shared::ResolutionError;
use futures::stream::{self, StreamExt};

/// Maximum number of version-spec lookups in flight at once
const MAX_CONCURRENT_RESOLUTIONS: usize = 10;

/// ResolveVersionsUseCase - Resolves version specs into concrete revisions
///
/// Only components addressed by a version spec are sent to the
/// version-control client; every other selector passes through with no
/// revision. A failed lookup omits that component and never aborts the batch.
///
/// # Type Parameters
/// * `VC` - VersionControlClient implementation
/// * `D` - DiagnosticSink implementation
pub struct ResolveVersionsUseCase<VC, D> {
    client: VC,
    sink: D,
}

impl<VC, D> ResolveVersionsUseCase<VC, D>
where
    VC: VersionControlClient,
    D: DiagnosticSink,
{
    pub fn new(client: VC, sink: D) -> Self {
        Self { client, sink }
    }

    /// Executes the resolution; output order follows input order
    pub async fn execute(&self, components: Vec<VersionedComponent>) -> ResolveResponse {
        let total = components.len();

        let outcomes: Vec<Result<ResolvedComponent, UnresolvedCandidate>> =
            stream::iter(components)
                .map(|component| self.resolve_one(component))
                .buffered(MAX_CONCURRENT_RESOLUTIONS)
                .collect()
                .await;

        let mut response = ResolveResponse::default();
        for outcome in outcomes {
            match outcome {
                Ok(resolved) => response.resolved.push(resolved),
                Err(unresolved) => response.unresolved.push(unresolved),
            }
        }

        self.sink.info(&format!(
            "Resolved {} of {} component version(s)",
            response.resolved.len(),
            total
        ));

        response
    }

    async fn resolve_one(
        &self,
        component: VersionedComponent,
    ) -> Result<ResolvedComponent, UnresolvedCandidate> {
        let VersionedComponent { name, version } = component;

        let Some(spec) = version.version_spec() else {
            return Ok(ResolvedComponent {
                name,
                version,
                revision: None,
            });
        };

        match self.client.resolve_version_spec(&name, spec).await {
            Ok(revision) => {
                self.sink
                    .debug(&format!("{} at {} resolved to {}", name, spec, revision));
                Ok(ResolvedComponent {
                    name,
                    version,
                    revision: Some(revision),
                })
            }
            Err(e) => {
                let reason = format!("version spec {} could not be resolved: {:#}", spec, e);
                let error = ResolutionError::unresolved(name.name(), reason.clone());
                self.sink.warn(&format!("{} Skipping.", error));
                Err(UnresolvedCandidate {
                    name: name.name(),
                    reason,
                })
            }
        }
    }
}
