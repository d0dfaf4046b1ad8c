/// Integration tests for the application layer
mod test_utilities;

use depfilter::ports::inbound::ComponentFilterPort;
use depfilter::prelude::*;
use test_utilities::mocks::*;

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn versioned(name: &str, version: ComponentVersion) -> VersionedComponent {
    VersionedComponent::new(ComponentName::parse(name).unwrap(), version)
}

#[test]
fn test_filter_happy_path() {
    let settings_source = MockSettingsSource::new()
        .with_setting("FileShare", ResolverSettingName::ExcludeFilter, "*.Tests;Samples*");
    let sink = MockDiagnosticSink::new();

    let use_case = FilterComponentsUseCase::new(settings_source, sink.clone());
    let response = use_case.execute(FilterRequest::new(
        "FileShare",
        strings(&["Core", "Core.Tests", "SamplesApp", "Web", "Legacy"]),
        strings(&["legacy"]),
    ));

    assert_eq!(response.dependency_type, "FileShare");
    assert_eq!(response.component_names(), vec!["Core", "Web"]);
    assert_eq!(response.excluded_count, 3);
    assert!(response.unresolved.is_empty());
    assert!(sink
        .messages_at(LogLevel::Info)
        .iter()
        .any(|m| m.contains("Filtering 5 candidate(s)")));
}

#[test]
fn test_unknown_type_with_ignore_list() {
    let use_case = FilterComponentsUseCase::new(MockSettingsSource::new(), MockDiagnosticSink::new());

    let response = use_case.execute(FilterRequest::new(
        "unknown",
        strings(&["A", "B", "C"]),
        strings(&["B"]),
    ));

    assert_eq!(response.component_names(), vec!["A", "C"]);
}

#[test]
fn test_unknown_type_returns_raw_candidates() {
    let sink = MockDiagnosticSink::new();
    let use_case = FilterComponentsUseCase::new(MockSettingsSource::new(), sink.clone());
    let long = "x".repeat(300);
    let candidates = vec![
        "  A".to_string(),
        "Lib::Old::X".to_string(),
        "C".to_string(),
        long,
    ];

    let response = use_case.execute(FilterRequest::new("unknown", candidates.clone(), vec![]));

    assert_eq!(response.components, candidates);
    assert_eq!(response.excluded_count, 0);
    assert!(response.unresolved.is_empty());
    assert!(sink.messages_at(LogLevel::Warning).is_empty());
}

#[test]
fn test_non_ascii_ignore_entry_matches_case_insensitively() {
    let use_case = FilterComponentsUseCase::new(MockSettingsSource::new(), MockDiagnosticSink::new());

    let response = use_case.execute(FilterRequest::new(
        "FileShare",
        strings(&["Ärger", "Straße", "Web"]),
        strings(&["ärger", "STRAßE"]),
    ));

    assert_eq!(response.component_names(), vec!["Web"]);
    assert_eq!(response.excluded_count, 2);
}

#[test]
fn test_settings_are_per_dependency_type() {
    let settings_source = MockSettingsSource::new()
        .with_setting("SourceControl", ResolverSettingName::IncludeFilter, "$/Core/*");

    let use_case = FilterComponentsUseCase::new(settings_source, MockDiagnosticSink::new());
    let candidates = strings(&["$/Core/Lib", "$/Web/App"]);

    let scoped = use_case.execute(FilterRequest::new("SourceControl", candidates.clone(), vec![]));
    assert_eq!(scoped.component_names(), vec!["$/Core/Lib"]);

    let unscoped = use_case.execute(FilterRequest::new("FileShare", candidates, vec![]));
    assert_eq!(unscoped.component_names(), vec!["$/Core/Lib", "$/Web/App"]);
}

#[test]
fn test_build_result_with_team_project() {
    let settings_source = MockSettingsSource::new()
        .with_setting("BuildResult", ResolverSettingName::TeamProject, "Tools")
        .with_setting("BuildResult", ResolverSettingName::ExcludeFilter, "*_Experimental");
    let sink = MockDiagnosticSink::new();

    let use_case = FilterComponentsUseCase::new(settings_source, sink.clone());
    let response = use_case.filter_components(FilterRequest::new(
        "BuildResult",
        strings(&["Tools::CI", "Tools::CI_Experimental", "Web::CI", "$/Tools/Lib"]),
        vec![],
    ));

    assert_eq!(response.component_names(), vec!["Tools::CI"]);
    assert_eq!(response.excluded_count, 3);
    assert_eq!(response.unresolved.len(), 1);
    assert_eq!(response.unresolved[0].name, "$/Tools/Lib");
    assert_eq!(sink.messages_at(LogLevel::Warning).len(), 1);
}

#[test]
fn test_malformed_case_sensitive_falls_back_with_warning() {
    let settings_source = MockSettingsSource::new()
        .with_setting("FileShare", ResolverSettingName::CaseSensitive, "sometimes");
    let sink = MockDiagnosticSink::new();

    let use_case = FilterComponentsUseCase::new(settings_source, sink.clone());
    let response = use_case.execute(FilterRequest::new(
        "FileShare",
        strings(&["Core", "Web"]),
        strings(&["CORE"]),
    ));

    assert_eq!(response.component_names(), vec!["Web"]);
    let warnings = sink.messages_at(LogLevel::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("CaseSensitive"));
}

#[test]
fn test_settings_failure_uses_defaults() {
    let sink = MockDiagnosticSink::new();
    let use_case = FilterComponentsUseCase::new(MockSettingsSource::with_failure(), sink.clone());

    let response = use_case.execute(FilterRequest::new(
        "FileShare",
        strings(&["Core", "Web"]),
        vec![],
    ));

    assert_eq!(response.component_names(), vec!["Core", "Web"]);
    assert!(sink
        .get_messages()
        .iter()
        .any(|m| m.starts_with("warning:") && m.contains("Mock settings store failure")));
}

#[test]
fn test_custom_policy_registration() {
    let mut registry = PolicyRegistry::with_defaults();
    registry.register(
        "Nuget",
        depfilter::dependency_resolution::policies::PatternPolicy,
    );
    let settings_source = MockSettingsSource::new()
        .with_setting("Nuget", ResolverSettingName::IncludeFilter, "Contoso.*");

    let use_case =
        FilterComponentsUseCase::with_registry(settings_source, registry, MockDiagnosticSink::new());
    let response = use_case.execute(FilterRequest::new(
        "nuget",
        strings(&["Contoso.Core", "Newtonsoft.Json"]),
        vec![],
    ));

    assert_eq!(response.component_names(), vec!["Contoso.Core"]);
}

#[tokio::test]
async fn test_resolve_versions_happy_path() {
    let client = MockVersionControlClient::new(900)
        .with_label("Release_1", 120)
        .with_label("Release_2", 250);
    let sink = MockDiagnosticSink::new();

    let use_case = ResolveVersionsUseCase::new(client, sink.clone());
    let response = use_case
        .execute(vec![
            versioned("$/Core", ComponentVersion::from_spec(VersionSpec::parse("LRelease_2").unwrap())),
            versioned("$/Web", ComponentVersion::literal("2.0").unwrap()),
            versioned("$/Api", ComponentVersion::from_spec(VersionSpec::Latest)),
        ])
        .await;

    assert!(response.unresolved.is_empty());
    let revisions: Vec<Option<Revision>> = response.resolved.iter().map(|r| r.revision).collect();
    assert_eq!(revisions, vec![Some(Revision(250)), None, Some(Revision(900))]);
    assert!(sink
        .messages_at(LogLevel::Info)
        .iter()
        .any(|m| m.contains("Resolved 3 of 3")));
}

#[tokio::test]
async fn test_resolve_versions_omits_failures_and_keeps_order() {
    let client = MockVersionControlClient::new(10).with_label("Release_1", 5);
    let sink = MockDiagnosticSink::new();

    let use_case = ResolveVersionsUseCase::new(client, sink.clone());
    let response = use_case
        .execute(vec![
            versioned("$/A", ComponentVersion::from_spec(VersionSpec::Changeset(1))),
            versioned("$/B", ComponentVersion::from_spec(VersionSpec::Label("Missing".into()))),
            versioned("$/C", ComponentVersion::from_spec(VersionSpec::Label("Release_1".into()))),
            versioned("$/D", ComponentVersion::from_spec(VersionSpec::Changeset(4))),
        ])
        .await;

    let names: Vec<String> = response.resolved.iter().map(|r| r.name.name()).collect();
    assert_eq!(names, vec!["$/A", "$/C", "$/D"]);
    assert_eq!(response.unresolved.len(), 1);
    assert_eq!(response.unresolved[0].name, "$/B");
    assert_eq!(sink.messages_at(LogLevel::Warning).len(), 1);
}

#[tokio::test]
async fn test_caching_client_calls_inner_once_per_key() {
    let inner = MockVersionControlClient::new(77).with_label("Release_1", 12);
    let calls = inner.calls.clone();
    let client = CachingVersionControlClient::new(inner);

    let use_case = ResolveVersionsUseCase::new(client.clone(), MockDiagnosticSink::new());
    let batch = || {
        vec![
            versioned("$/Core", ComponentVersion::from_spec(VersionSpec::Label("Release_1".into()))),
            versioned("$/Web", ComponentVersion::from_spec(VersionSpec::Changeset(3))),
            versioned("$/Api", ComponentVersion::from_spec(VersionSpec::Latest)),
        ]
    };

    let first = use_case.execute(batch()).await;
    let second = use_case.execute(batch()).await;

    assert_eq!(first, second);
    // Latest is looked up on every run
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 4);
    assert_eq!(client.cache_size(), 2);
}
