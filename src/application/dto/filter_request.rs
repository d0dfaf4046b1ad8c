/// FilterRequest - Request DTO for the component filter use case
///
/// Candidates and ignore entries are raw strings as received from the
/// driving adapter; the use case parses them into component names.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    /// Dependency type selecting the filtering policy
    pub dependency_type: String,
    /// Candidate component names in caller order
    pub candidates: Vec<String>,
    /// Component names that are always excluded
    pub ignored: Vec<String>,
}

impl FilterRequest {
    pub fn new(dependency_type: impl Into<String>, candidates: Vec<String>, ignored: Vec<String>) -> Self {
        Self {
            dependency_type: dependency_type.into(),
            candidates,
            ignored,
        }
    }
}
