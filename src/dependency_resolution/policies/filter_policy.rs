use crate::dependency_resolution::domain::{ComponentName, ResolverSettingName, ResolverSettings};
use crate::ports::outbound::DiagnosticSink;
use std::borrow::Cow;

/// Outcome of checking a single candidate against a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Drop,
    /// The candidate cannot be mapped to a component of this dependency type
    Unresolved(String),
}

/// A policy compiled against one set of resolver settings
pub trait CandidateCheck: Send + Sync {
    fn check(&self, candidate: &ComponentName) -> Verdict;
}

/// Filtering policy for one or more dependency types
///
/// Policies never fail: malformed settings are reported to the sink and
/// replaced with their defaults while preparing the check.
pub trait FilterPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Compiles the settings into a per-candidate check
    fn prepare(
        &self,
        settings: &ResolverSettings,
        sink: &dyn DiagnosticSink,
    ) -> Box<dyn CandidateCheck>;

    /// True when the policy keeps every candidate whatever the settings,
    /// so callers may skip component name validation entirely
    fn passes_everything(&self) -> bool {
        false
    }
}

/// Reads `CaseSensitive`, defaulting to `false` when absent or malformed
pub fn case_sensitivity(settings: &ResolverSettings, sink: &dyn DiagnosticSink) -> bool {
    match settings.get_bool(ResolverSettingName::CaseSensitive) {
        Ok(value) => value.unwrap_or(false),
        Err(e) => {
            sink.warn(&format!("{} Falling back to case-insensitive matching.", e));
            false
        }
    }
}

/// Folds a name for comparison; Unicode lowercase unless case sensitive
///
/// Shared by pattern matching, team project scoping and the ignore list.
pub fn fold_case(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Pass-through policy used for dependency types without a registered policy
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityPolicy;

struct KeepAll;

impl CandidateCheck for KeepAll {
    fn check(&self, _candidate: &ComponentName) -> Verdict {
        Verdict::Keep
    }
}

impl FilterPolicy for IdentityPolicy {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn prepare(
        &self,
        _settings: &ResolverSettings,
        _sink: &dyn DiagnosticSink,
    ) -> Box<dyn CandidateCheck> {
        Box::new(KeepAll)
    }

    fn passes_everything(&self) -> bool {
        true
    }
}
