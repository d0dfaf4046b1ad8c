use super::filter_policy::{case_sensitivity, CandidateCheck, FilterPolicy, Verdict};
use super::name_pattern::NamePatternSet;
use crate::dependency_resolution::domain::{ComponentName, ResolverSettingName, ResolverSettings};
use crate::ports::outbound::DiagnosticSink;

/// Include/exclude wildcard filtering on the canonical component name
///
/// - `IncludeFilter`: when at least one valid pattern is configured, only
///   matching names are kept
/// - `ExcludeFilter`: matching names are dropped
/// - `CaseSensitive`: defaults to `false`
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternPolicy;

struct PatternCheck {
    include: NamePatternSet,
    exclude: NamePatternSet,
}

impl CandidateCheck for PatternCheck {
    fn check(&self, candidate: &ComponentName) -> Verdict {
        let name = candidate.name();

        if !self.include.is_empty() && !self.include.matches_any(&name) {
            return Verdict::Drop;
        }

        if self.exclude.matches_any(&name) {
            return Verdict::Drop;
        }

        Verdict::Keep
    }
}

impl FilterPolicy for PatternPolicy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn prepare(
        &self,
        settings: &ResolverSettings,
        sink: &dyn DiagnosticSink,
    ) -> Box<dyn CandidateCheck> {
        let case_sensitive = case_sensitivity(settings, sink);

        Box::new(PatternCheck {
            include: NamePatternSet::from_setting(
                settings,
                ResolverSettingName::IncludeFilter,
                case_sensitive,
                sink,
            ),
            exclude: NamePatternSet::from_setting(
                settings,
                ResolverSettingName::ExcludeFilter,
                case_sensitive,
                sink,
            ),
        })
    }
}
