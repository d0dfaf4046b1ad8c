use crate::dependency_resolution::domain::{ComponentName, VersionSpec};
use crate::ports::outbound::{Revision, VersionControlClient};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key: canonical component name plus the spec being resolved
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    component: String,
    spec: VersionSpec,
}

/// CachingVersionControlClient wraps a VersionControlClient with an in-memory cache.
///
/// Successful resolutions are cached; failures are not, so a transient
/// server error is retried on the next request. The cache is thread-safe
/// and shared between clones.
///
/// `VersionSpec::Latest` is never cached since its answer moves.
///
/// Lookup and insert are separate steps: sequential requests for a key reach
/// the inner client once, but concurrent misses on the same key may each
/// reach it before the first result is stored.
pub struct CachingVersionControlClient<C: VersionControlClient> {
    inner: Arc<C>,
    cache: Arc<DashMap<CacheKey, Revision>>,
}

impl<C: VersionControlClient> CachingVersionControlClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<C: VersionControlClient> Clone for CachingVersionControlClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cache: Arc::clone(&self.cache),
        }
    }
}

#[async_trait]
impl<C: VersionControlClient> VersionControlClient for CachingVersionControlClient<C> {
    async fn resolve_version_spec(
        &self,
        component: &ComponentName,
        spec: &VersionSpec,
    ) -> Result<Revision> {
        if *spec == VersionSpec::Latest {
            return self.inner.resolve_version_spec(component, spec).await;
        }

        let key = CacheKey {
            component: component.name(),
            spec: spec.clone(),
        };

        if let Some(cached) = self.cache.get(&key) {
            return Ok(*cached);
        }

        let revision = self.inner.resolve_version_spec(component, spec).await?;
        self.cache.insert(key, revision);

        Ok(revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Client that counts calls and fails on the label "Broken"
    struct CountingClient {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl VersionControlClient for CountingClient {
        async fn resolve_version_spec(
            &self,
            _component: &ComponentName,
            spec: &VersionSpec,
        ) -> Result<Revision> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) as u64;
            match spec {
                VersionSpec::Label(label) if label == "Broken" => {
                    anyhow::bail!("server unavailable")
                }
                _ => Ok(Revision(100 + call)),
            }
        }
    }

    fn caching_client() -> (CachingVersionControlClient<CountingClient>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = CachingVersionControlClient::new(CountingClient {
            calls: Arc::clone(&calls),
        });
        (client, calls)
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let (client, calls) = caching_client();
        let name = ComponentName::from_path("$/Core").unwrap();
        let spec = VersionSpec::Label("Release_1".to_string());

        let first = client.resolve_version_spec(&name, &spec).await.unwrap();
        let second = client.resolve_version_spec(&name, &spec).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_keys_distinguish_component_and_spec() {
        let (client, calls) = caching_client();
        let core = ComponentName::from_path("$/Core").unwrap();
        let web = ComponentName::from_path("$/Web").unwrap();

        client
            .resolve_version_spec(&core, &VersionSpec::Changeset(5))
            .await
            .unwrap();
        client
            .resolve_version_spec(&web, &VersionSpec::Changeset(5))
            .await
            .unwrap();
        client
            .resolve_version_spec(&core, &VersionSpec::Changeset(6))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(client.cache_size(), 3);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (client, calls) = caching_client();
        let name = ComponentName::from_path("$/Core").unwrap();
        let spec = VersionSpec::Label("Broken".to_string());

        assert!(client.resolve_version_spec(&name, &spec).await.is_err());
        assert!(client.resolve_version_spec(&name, &spec).await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(client.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_latest_is_not_cached() {
        let (client, calls) = caching_client();
        let name = ComponentName::from_path("$/Core").unwrap();

        client
            .resolve_version_spec(&name, &VersionSpec::Latest)
            .await
            .unwrap();
        client
            .resolve_version_spec(&name, &VersionSpec::Latest)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(client.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let (client, calls) = caching_client();
        let clone = client.clone();
        let name = ComponentName::from_path("$/Core").unwrap();
        let spec = VersionSpec::Changeset(9);

        client.resolve_version_spec(&name, &spec).await.unwrap();
        clone.resolve_version_spec(&name, &spec).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
