use crate::application::dto::{FilterRequest, FilterResponse, UnresolvedCandidate};
use crate::dependency_resolution::domain::{ComponentName, ResolverSettings};
use crate::dependency_resolution::policies::PolicyRegistry;
use crate::dependency_resolution::services::ComponentFilter;
use crate::ports::inbound::ComponentFilterPort;
use crate::ports::outbound::{DiagnosticSink, SettingsSource};
use crate::shared::ResolutionError;

/// FilterComponentsUseCase - Filters raw candidate names for a dependency type
///
/// Parses candidates and ignore entries, loads the resolver settings for the
/// dependency type and runs the [`ComponentFilter`].
///
/// # Type Parameters
/// * `SS` - SettingsSource implementation
/// * `D` - DiagnosticSink implementation
pub struct FilterComponentsUseCase<SS, D: DiagnosticSink> {
    settings_source: SS,
    filter: ComponentFilter<D>,
}

impl<SS, D> FilterComponentsUseCase<SS, D>
where
    SS: SettingsSource,
    D: DiagnosticSink,
{
    /// Creates a new use case with the built-in policies
    pub fn new(settings_source: SS, sink: D) -> Self {
        Self::with_registry(settings_source, PolicyRegistry::with_defaults(), sink)
    }

    pub fn with_registry(settings_source: SS, registry: PolicyRegistry, sink: D) -> Self {
        Self {
            settings_source,
            filter: ComponentFilter::with_registry(registry, sink),
        }
    }

    /// Executes the filter use case
    ///
    /// For dependency types that pass everything through, candidates are
    /// returned exactly as given minus ignored entries; no name validation
    /// takes place. Otherwise candidates are parsed into component names
    /// and invalid ones are reported as unresolved.
    pub fn execute(&self, request: FilterRequest) -> FilterResponse {
        let sink = self.filter.sink();
        let dependency_type = request.dependency_type.trim().to_string();

        let ignored = self.parse_ignored(&request.ignored);
        let settings = self.load_settings(&dependency_type);

        sink.info(&format!(
            "Filtering {} candidate(s) for dependency type '{}'",
            request.candidates.len(),
            dependency_type
        ));

        if self.filter.passes_through(&dependency_type) {
            let (components, excluded_count) = self.filter.pass_through(
                &dependency_type,
                request.candidates,
                &settings,
                &ignored,
            );
            self.report_excluded(excluded_count);

            return FilterResponse {
                dependency_type,
                components,
                excluded_count,
                unresolved: Vec::new(),
            };
        }

        let mut unresolved = Vec::new();
        let mut candidates = Vec::with_capacity(request.candidates.len());
        for raw in &request.candidates {
            match ComponentName::parse(raw) {
                Ok(name) => candidates.push(name),
                Err(e) => {
                    let error = ResolutionError::unresolved(raw.as_str(), e.to_string());
                    sink.warn(&format!("{} Skipping.", error));
                    unresolved.push(UnresolvedCandidate {
                        name: raw.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let outcome = self
            .filter
            .filter_with_report(&dependency_type, candidates, &settings, &ignored);

        let excluded_count = outcome.excluded_count() + unresolved.len();
        unresolved.extend(outcome.unresolved.iter().map(|name| UnresolvedCandidate {
            name: name.name(),
            reason: format!("not resolvable as a '{}' component", dependency_type),
        }));
        self.report_excluded(excluded_count);

        FilterResponse {
            dependency_type,
            components: outcome.components.iter().map(ComponentName::name).collect(),
            excluded_count,
            unresolved,
        }
    }

    /// Parses ignore entries; invalid ones are reported and dropped
    fn parse_ignored(&self, raw_entries: &[String]) -> Vec<ComponentName> {
        raw_entries
            .iter()
            .filter_map(|raw| match ComponentName::parse(raw) {
                Ok(name) => Some(name),
                Err(e) => {
                    self.filter
                        .sink()
                        .warn(&format!("Ignoring invalid ignore-list entry '{}': {}", raw, e));
                    None
                }
            })
            .collect()
    }

    fn report_excluded(&self, excluded_count: usize) {
        if excluded_count > 0 {
            self.filter
                .sink()
                .info(&format!("Excluded {} component(s)", excluded_count));
        }
    }

    /// Loads settings, falling back to empty settings when the source fails
    fn load_settings(&self, dependency_type: &str) -> ResolverSettings {
        match self.settings_source.load_settings(dependency_type) {
            Ok(settings) => settings,
            Err(e) => {
                self.filter.sink().warn(&format!(
                    "Failed to load resolver settings for '{}': {:#}. Using defaults.",
                    dependency_type, e
                ));
                ResolverSettings::new()
            }
        }
    }
}

impl<SS, D> ComponentFilterPort for FilterComponentsUseCase<SS, D>
where
    SS: SettingsSource,
    D: DiagnosticSink,
{
    fn filter_components(&self, request: FilterRequest) -> FilterResponse {
        self.execute(request)
    }
}
