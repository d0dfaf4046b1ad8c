use super::build_definition_policy::BuildDefinitionPolicy;
use super::filter_policy::{FilterPolicy, IdentityPolicy};
use super::pattern_policy::PatternPolicy;
use crate::dependency_resolution::domain::dependency_type;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup table from dependency type to filtering policy
///
/// Lookups are case-insensitive. Types without an entry resolve to the
/// fallback policy, which is [`IdentityPolicy`] unless replaced.
#[derive(Clone)]
pub struct PolicyRegistry {
    policies: HashMap<String, Arc<dyn FilterPolicy>>,
    fallback: Arc<dyn FilterPolicy>,
}

impl PolicyRegistry {
    /// Creates a registry with no entries and the identity fallback
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
            fallback: Arc::new(IdentityPolicy),
        }
    }

    /// Creates a registry with the built-in policies
    pub fn with_defaults() -> Self {
        let pattern: Arc<dyn FilterPolicy> = Arc::new(PatternPolicy);

        let mut registry = Self::empty();
        for dependency_type in [
            dependency_type::FILE_SHARE,
            dependency_type::SOURCE_CONTROL,
            dependency_type::SOURCE_CONTROL_MAPPING,
            dependency_type::BINARY_REPOSITORY,
        ] {
            registry.register_shared(dependency_type, Arc::clone(&pattern));
        }
        registry.register(dependency_type::BUILD_RESULT, BuildDefinitionPolicy);
        registry
    }

    /// Registers (or replaces) the policy for a dependency type
    pub fn register<P: FilterPolicy + 'static>(&mut self, dependency_type: &str, policy: P) {
        self.register_shared(dependency_type, Arc::new(policy));
    }

    pub fn register_shared(&mut self, dependency_type: &str, policy: Arc<dyn FilterPolicy>) {
        self.policies
            .insert(dependency_type::normalize(dependency_type), policy);
    }

    pub fn set_fallback(&mut self, policy: Arc<dyn FilterPolicy>) {
        self.fallback = policy;
    }

    /// Returns the registered policy, if any
    pub fn get(&self, dependency_type: &str) -> Option<Arc<dyn FilterPolicy>> {
        self.policies
            .get(&dependency_type::normalize(dependency_type))
            .cloned()
    }

    /// Returns the policy for a type, falling back for unknown types
    pub fn resolve(&self, dependency_type: &str) -> Arc<dyn FilterPolicy> {
        self.get(dependency_type)
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }

    pub fn is_registered(&self, dependency_type: &str) -> bool {
        self.policies
            .contains_key(&dependency_type::normalize(dependency_type))
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<(&String, &'static str)> = self
            .policies
            .iter()
            .map(|(k, v)| (k, v.name()))
            .collect();
        entries.sort();
        f.debug_struct("PolicyRegistry")
            .field("policies", &entries)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
