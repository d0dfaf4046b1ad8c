pub mod build_definition_policy;
pub mod filter_policy;
pub mod name_pattern;
pub mod pattern_policy;
pub mod policy_registry;

pub use build_definition_policy::BuildDefinitionPolicy;
pub use filter_policy::{
    case_sensitivity, fold_case, CandidateCheck, FilterPolicy, IdentityPolicy, Verdict,
};
pub use name_pattern::{NamePattern, NamePatternSet};
pub use pattern_policy::PatternPolicy;
pub use policy_registry::PolicyRegistry;
