use super::filter_policy::fold_case;
use crate::dependency_resolution::domain::{ResolverSettingName, ResolverSettings};
use crate::ports::outbound::DiagnosticSink;
use crate::shared::ResolutionError;

/// Maximum number of patterns honoured per setting
pub const MAX_PATTERNS: usize = 64;

/// Maximum length of a single pattern
pub const MAX_PATTERN_LENGTH: usize = 255;

/// A compiled wildcard pattern matched against component names
///
/// `*` matches zero or more characters and may appear anywhere.
/// Matching is anchored at both ends.
#[derive(Debug, Clone)]
pub struct NamePattern {
    original: String,
    matcher: PatternMatcher,
    case_sensitive: bool,
}

impl NamePattern {
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, ResolutionError> {
        validate_pattern(pattern)?;

        let folded = fold_case(pattern, case_sensitive);
        Ok(Self {
            original: pattern.to_string(),
            matcher: compile_pattern(&folded),
            case_sensitive,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = fold_case(name, self.case_sensitive);
        self.matcher.matches(&name)
    }
}

/// Pattern matcher types for efficient matching
#[derive(Debug, Clone)]
enum PatternMatcher {
    /// "name"
    Exact(String),
    /// "*suffix"
    EndsWith(String),
    /// "prefix*"
    StartsWith(String),
    /// "*middle*"
    Contains(String),
    /// Anything else: literal segments between wildcards, with anchoring flags
    Segments {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s,
            PatternMatcher::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => name.contains(middle.as_str()),
            PatternMatcher::Segments {
                parts,
                anchored_start,
                anchored_end,
            } => match_segments(name, parts, *anchored_start, *anchored_end),
        }
    }
}

fn match_segments(name: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = name;

    for (idx, part) in parts.iter().enumerate() {
        let is_first = idx == 0;
        let is_last = idx == parts.len() - 1;

        if is_first && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(stripped) => rest = stripped,
                None => return false,
            }
        } else if is_last && anchored_end {
            return rest.len() >= part.len() && rest.ends_with(part.as_str());
        } else {
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }

    !anchored_end || rest.is_empty()
}

fn validate_pattern(pattern: &str) -> Result<(), ResolutionError> {
    let reject = |reason: String| {
        Err(ResolutionError::configuration(
            "pattern",
            pattern,
            reason,
        ))
    };

    if pattern.trim().is_empty() {
        return reject("pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return reject(format!(
            "pattern is too long ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if pattern.chars().any(char::is_control) {
        return reject("pattern contains control characters".to_string());
    }

    if pattern.chars().all(|c| c == '*') {
        return reject("pattern cannot contain only wildcards".to_string());
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();
    let starts = pattern.starts_with('*');
    let ends = pattern.ends_with('*');

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if starts => PatternMatcher::EndsWith(pattern[1..].to_string()),
        1 if ends => PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
        2 if starts && ends => PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string()),
        _ => PatternMatcher::Segments {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            anchored_start: !starts,
            anchored_end: !ends,
        },
    }
}

/// Patterns read from one list-valued setting
#[derive(Debug, Clone, Default)]
pub struct NamePatternSet {
    patterns: Vec<NamePattern>,
}

impl NamePatternSet {
    /// Compiles the patterns stored under `key`
    ///
    /// Invalid patterns are reported to `sink` and skipped; patterns past
    /// [`MAX_PATTERNS`] are reported and ignored.
    pub fn from_setting(
        settings: &ResolverSettings,
        key: ResolverSettingName,
        case_sensitive: bool,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let raw = settings.get_list(key);

        if raw.len() > MAX_PATTERNS {
            sink.warn(&format!(
                "{}: {} patterns given, only the first {} are used",
                key,
                raw.len(),
                MAX_PATTERNS
            ));
        }

        let patterns = raw
            .iter()
            .take(MAX_PATTERNS)
            .filter_map(|pattern| match NamePattern::new(pattern, case_sensitive) {
                Ok(compiled) => Some(compiled),
                Err(e) => {
                    sink.warn(&format!("{}: skipping pattern. {}", key, e));
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn matches_any(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}
