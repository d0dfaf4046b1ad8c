use async_trait::async_trait;
use depfilter::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock VersionControlClient resolving labels from a table
///
/// Changesets resolve to themselves; `Latest` resolves to `head`.
/// Every call is counted, including failing ones.
pub struct MockVersionControlClient {
    pub labels: HashMap<String, u64>,
    pub head: u64,
    pub calls: Arc<AtomicUsize>,
}

impl MockVersionControlClient {
    pub fn new(head: u64) -> Self {
        Self {
            labels: HashMap::new(),
            head,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_label(mut self, label: &str, changeset: u64) -> Self {
        self.labels.insert(label.to_string(), changeset);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionControlClient for MockVersionControlClient {
    async fn resolve_version_spec(
        &self,
        component: &ComponentName,
        spec: &VersionSpec,
    ) -> Result<Revision> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match spec {
            VersionSpec::Latest => Ok(Revision(self.head)),
            VersionSpec::Changeset(changeset) => Ok(Revision(*changeset)),
            VersionSpec::Label(label) => self
                .labels
                .get(label)
                .copied()
                .map(Revision)
                .ok_or_else(|| anyhow::anyhow!("Label '{}' not found for {}", label, component)),
            VersionSpec::Date(_) => anyhow::bail!("Date specs are not supported by the mock"),
        }
    }
}
