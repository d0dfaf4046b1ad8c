use crate::dependency_resolution::domain::{ComponentName, ResolverSettingName, ResolverSettings};
use crate::dependency_resolution::policies::{
    case_sensitivity, fold_case, PolicyRegistry, Verdict,
};
use crate::ports::outbound::DiagnosticSink;
use crate::shared::ResolutionError;
use std::borrow::Cow;

/// ComponentFilter - Narrows candidate components for a dependency type
///
/// The policy for the dependency type runs first, then the ignore list.
/// Survivors keep their input order. Filtering never fails: malformed
/// settings degrade to defaults and unresolvable candidates are omitted,
/// both reported through the injected [`DiagnosticSink`].
pub struct ComponentFilter<D: DiagnosticSink> {
    registry: PolicyRegistry,
    sink: D,
}

impl<D: DiagnosticSink> ComponentFilter<D> {
    /// Creates a filter using the built-in policies
    pub fn new(sink: D) -> Self {
        Self::with_registry(PolicyRegistry::with_defaults(), sink)
    }

    pub fn with_registry(registry: PolicyRegistry, sink: D) -> Self {
        Self { registry, sink }
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Filters `source_components` for `dependency_type`
    ///
    /// # Arguments
    /// * `dependency_type` - Tag selecting the policy; unknown tags pass through
    /// * `source_components` - Candidates in caller order
    /// * `settings` - Resolver settings for the policy
    /// * `ignored` - Names always excluded, whatever the policy decides
    ///
    /// # Returns
    /// The candidates that passed both the policy and the ignore list
    pub fn filter(
        &self,
        dependency_type: &str,
        source_components: Vec<ComponentName>,
        settings: &ResolverSettings,
        ignored: &[ComponentName],
    ) -> Vec<ComponentName> {
        self.filter_with_report(dependency_type, source_components, settings, ignored)
            .components
    }

    /// Same as [`ComponentFilter::filter`], also returning what was omitted
    pub fn filter_with_report(
        &self,
        dependency_type: &str,
        source_components: Vec<ComponentName>,
        settings: &ResolverSettings,
        ignored: &[ComponentName],
    ) -> FilterOutcome {
        if source_components.is_empty() {
            return FilterOutcome::default();
        }

        let policy = match self.registry.get(dependency_type) {
            Some(policy) => policy,
            None => {
                self.sink.debug(&format!(
                    "No filter policy registered for dependency type '{}'; passing components through",
                    dependency_type
                ));
                self.registry.resolve(dependency_type)
            }
        };

        let settings = self.with_valid_case_sensitivity(settings);
        let check = policy.prepare(&settings, &self.sink);
        let ignore_list = IgnoreList::new(ignored, case_sensitivity(&settings, &self.sink));

        let mut outcome = FilterOutcome::default();
        for candidate in source_components {
            match check.check(&candidate) {
                Verdict::Keep if ignore_list.contains(&candidate) => outcome.ignored += 1,
                Verdict::Keep => outcome.components.push(candidate),
                Verdict::Drop => outcome.dropped += 1,
                Verdict::Unresolved(reason) => {
                    let error = ResolutionError::unresolved(candidate.name(), reason);
                    self.sink.warn(&format!("{} Skipping.", error));
                    outcome.unresolved.push(candidate);
                }
            }
        }

        self.sink.debug(&format!(
            "Policy '{}' for '{}': kept {}, dropped {}, ignored {}, unresolved {}",
            policy.name(),
            dependency_type,
            outcome.components.len(),
            outcome.dropped,
            outcome.ignored,
            outcome.unresolved.len()
        ));

        outcome
    }

    /// True when `dependency_type` keeps every candidate, so candidates need
    /// not be valid component names
    pub fn passes_through(&self, dependency_type: &str) -> bool {
        self.registry.resolve(dependency_type).passes_everything()
    }

    /// Applies only the ignore list to raw candidate strings
    ///
    /// For dependency types that pass everything through: the strings come
    /// back exactly as given, minus those whose trimmed text matches an
    /// ignored canonical name.
    ///
    /// # Returns
    /// The surviving strings in input order and the number ignored
    pub fn pass_through(
        &self,
        dependency_type: &str,
        candidates: Vec<String>,
        settings: &ResolverSettings,
        ignored: &[ComponentName],
    ) -> (Vec<String>, usize) {
        self.sink.debug(&format!(
            "Dependency type '{}' passes components through; only the ignore list applies",
            dependency_type
        ));

        let settings = self.with_valid_case_sensitivity(settings);
        let ignore_list = IgnoreList::new(ignored, case_sensitivity(&settings, &self.sink));

        let total = candidates.len();
        let kept: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| !ignore_list.contains_name(candidate.trim()))
            .collect();
        let ignored_count = total - kept.len();

        (kept, ignored_count)
    }

    /// Replaces a malformed `CaseSensitive` value with its default, reporting it once
    fn with_valid_case_sensitivity<'s>(
        &self,
        settings: &'s ResolverSettings,
    ) -> Cow<'s, ResolverSettings> {
        match settings.get_bool(ResolverSettingName::CaseSensitive) {
            Ok(_) => Cow::Borrowed(settings),
            Err(e) => {
                self.sink
                    .warn(&format!("{} Falling back to case-insensitive matching.", e));
                Cow::Owned(
                    settings
                        .clone()
                        .with_setting(ResolverSettingName::CaseSensitive, "false"),
                )
            }
        }
    }
}

/// Result of a filter run with omission counts
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterOutcome {
    pub components: Vec<ComponentName>,
    /// Candidates rejected by the policy
    pub dropped: usize,
    /// Candidates removed by the ignore list
    pub ignored: usize,
    /// Candidates the policy could not map to a component
    pub unresolved: Vec<ComponentName>,
}

impl FilterOutcome {
    pub fn excluded_count(&self) -> usize {
        self.dropped + self.ignored + self.unresolved.len()
    }
}

struct IgnoreList {
    folded_names: Vec<String>,
    case_sensitive: bool,
}

impl IgnoreList {
    fn new(ignored: &[ComponentName], case_sensitive: bool) -> Self {
        Self {
            folded_names: ignored
                .iter()
                .map(|name| fold_case(&name.name(), case_sensitive).into_owned())
                .collect(),
            case_sensitive,
        }
    }

    fn contains(&self, candidate: &ComponentName) -> bool {
        self.contains_name(&candidate.name())
    }

    fn contains_name(&self, name: &str) -> bool {
        let name = fold_case(name, self.case_sensitive);
        self.folded_names.iter().any(|ignored| *ignored == *name)
    }
}
