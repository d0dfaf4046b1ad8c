use serde::Serialize;

/// A candidate that could not be turned into a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedCandidate {
    pub name: String,
    pub reason: String,
}

/// FilterResponse - Response DTO for the component filter use case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResponse {
    pub dependency_type: String,
    /// Surviving component names, in input order
    ///
    /// Canonical names for types with a filtering policy; the caller's
    /// strings, untouched, for pass-through types.
    pub components: Vec<String>,
    /// Candidates removed by the policy, the ignore list, or as unresolved
    pub excluded_count: usize,
    pub unresolved: Vec<UnresolvedCandidate>,
}

impl FilterResponse {
    pub fn component_names(&self) -> Vec<String> {
        self.components.clone()
    }
}
