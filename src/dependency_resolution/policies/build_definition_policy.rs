use super::filter_policy::{case_sensitivity, fold_case, CandidateCheck, FilterPolicy, Verdict};
use super::name_pattern::NamePatternSet;
use crate::dependency_resolution::domain::{ComponentName, ResolverSettingName, ResolverSettings};
use crate::ports::outbound::DiagnosticSink;

/// Filtering for components produced by builds
///
/// Candidates must be build names; path names are unresolved for this type.
/// `TeamProject` restricts candidates to one team project. Include/exclude
/// patterns apply to the build definition name.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildDefinitionPolicy;

struct BuildCheck {
    team_project: Option<String>,
    case_sensitive: bool,
    include: NamePatternSet,
    exclude: NamePatternSet,
}

impl BuildCheck {
    fn same_team_project(&self, candidate: &str) -> bool {
        match &self.team_project {
            None => true,
            Some(wanted) => {
                fold_case(wanted, self.case_sensitive) == fold_case(candidate, self.case_sensitive)
            }
        }
    }
}

impl CandidateCheck for BuildCheck {
    fn check(&self, candidate: &ComponentName) -> Verdict {
        let (Some(team_project), Some(build_definition)) =
            (candidate.team_project(), candidate.build_definition())
        else {
            return Verdict::Unresolved(
                "not a build component; expected '<team project>::<build definition>'"
                    .to_string(),
            );
        };

        if !self.same_team_project(team_project) {
            return Verdict::Drop;
        }

        if !self.include.is_empty() && !self.include.matches_any(build_definition) {
            return Verdict::Drop;
        }

        if self.exclude.matches_any(build_definition) {
            return Verdict::Drop;
        }

        Verdict::Keep
    }
}

impl FilterPolicy for BuildDefinitionPolicy {
    fn name(&self) -> &'static str {
        "build-definition"
    }

    fn prepare(
        &self,
        settings: &ResolverSettings,
        sink: &dyn DiagnosticSink,
    ) -> Box<dyn CandidateCheck> {
        let case_sensitive = case_sensitivity(settings, sink);
        let team_project = settings
            .get_setting(ResolverSettingName::TeamProject)
            .map(str::trim)
            .filter(|tp| !tp.is_empty())
            .map(String::from);

        Box::new(BuildCheck {
            team_project,
            case_sensitive,
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
