use crate::shared::ResolutionError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Maximum length of any version field or token (security limit)
const MAX_VERSION_FIELD_LENGTH: usize = 256;

/// Structured version-control selector for a point-in-time revision
///
/// Textual form follows the version-control convention:
/// `T` (latest), `C<changeset>`, `L<label>`, `D<date>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    Latest,
    Changeset(u64),
    Label(String),
    Date(DateTime<Utc>),
}

impl VersionSpec {
    pub fn parse(text: &str) -> Result<Self, ResolutionError> {
        let text = text.trim();
        let mut chars = text.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| ResolutionError::invalid_selector("version spec cannot be empty"))?;
        let rest = chars.as_str();

        if text.len() > MAX_VERSION_FIELD_LENGTH {
            return Err(ResolutionError::invalid_selector(format!(
                "version spec is too long ({} bytes). Maximum allowed: {} bytes",
                text.len(),
                MAX_VERSION_FIELD_LENGTH
            )));
        }

        match prefix.to_ascii_uppercase() {
            'T' if rest.is_empty() => Ok(VersionSpec::Latest),
            'C' => {
                let changeset: u64 = rest.parse().map_err(|_| {
                    ResolutionError::invalid_selector(format!(
                        "changeset spec '{}' is not a positive number",
                        text
                    ))
                })?;
                if changeset == 0 {
                    return Err(ResolutionError::invalid_selector(
                        "changeset numbers start at 1",
                    ));
                }
                Ok(VersionSpec::Changeset(changeset))
            }
            'L' => {
                if rest.trim().is_empty() {
                    return Err(ResolutionError::invalid_selector(
                        "label spec requires a label name",
                    ));
                }
                Ok(VersionSpec::Label(rest.trim().to_string()))
            }
            'D' => parse_date(rest).map(VersionSpec::Date),
            _ => Err(ResolutionError::invalid_selector(format!(
                "unrecognized version spec '{}'",
                text
            ))),
        }
    }
}

fn parse_date(text: &str) -> Result<DateTime<Utc>, ResolutionError> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Ok(date_time.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ResolutionError::invalid_selector(format!(
                "date spec '{}' is neither YYYY-MM-DD nor RFC 3339",
                text
            ))
        })
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Latest => write!(f, "T"),
            VersionSpec::Changeset(changeset) => write!(f, "C{}", changeset),
            VersionSpec::Label(label) => write!(f, "L{}", label),
            VersionSpec::Date(date) => {
                write!(f, "D{}", date.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

/// The single authoritative way a ComponentVersion addresses a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSelector {
    Literal(String),
    Spec(VersionSpec),
    BuildNumber(String),
    BuildFilter {
        quality: Vec<String>,
        status: Vec<String>,
        tags: Vec<String>,
    },
}

/// ComponentVersion value object
///
/// Built through [`ComponentVersion::builder`]; when several fields are set
/// the highest-priority non-empty one becomes authoritative and the rest
/// are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentVersion {
    selector: VersionSelector,
}

impl ComponentVersion {
    pub fn builder() -> ComponentVersionBuilder {
        ComponentVersionBuilder::default()
    }

    pub fn literal(version: impl Into<String>) -> Result<Self, ResolutionError> {
        Self::builder().version(version).build()
    }

    pub fn from_spec(spec: VersionSpec) -> Self {
        Self {
            selector: VersionSelector::Spec(spec),
        }
    }

    pub fn selector(&self) -> &VersionSelector {
        &self.selector
    }

    pub fn version_spec(&self) -> Option<&VersionSpec> {
        match &self.selector {
            VersionSelector::Spec(spec) => Some(spec),
            _ => None,
        }
    }

    /// Returns the textual form of the authoritative selector
    pub fn version(&self) -> String {
        match &self.selector {
            VersionSelector::Literal(version) => version.clone(),
            VersionSelector::Spec(spec) => spec.to_string(),
            VersionSelector::BuildNumber(number) => number.clone(),
            VersionSelector::BuildFilter {
                quality,
                status,
                tags,
            } => [("quality", quality), ("status", status), ("tags", tags)]
                .iter()
                .filter(|(_, tokens)| !tokens.is_empty())
                .map(|(group, tokens)| format!("{}={}", group, tokens.join(",")))
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

impl fmt::Display for ComponentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())
    }
}

impl Serialize for ComponentVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.version())
    }
}

/// Collects every version field a caller may know about
#[derive(Debug, Default, Clone)]
pub struct ComponentVersionBuilder {
    version: Option<String>,
    version_spec: Option<VersionSpec>,
    build_number: Option<String>,
    build_quality: Vec<String>,
    build_status: Vec<String>,
    build_tags: Vec<String>,
}

impl ComponentVersionBuilder {
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn version_spec(mut self, spec: VersionSpec) -> Self {
        self.version_spec = Some(spec);
        self
    }

    pub fn build_number(mut self, build_number: impl Into<String>) -> Self {
        self.build_number = Some(build_number.into());
        self
    }

    pub fn build_quality<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_quality = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn build_status<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_status = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn build_tags<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_tags = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Picks the authoritative selector: version > spec > build number > quality/status/tags
    ///
    /// # Errors
    /// `InvalidVersionSelector` when no field is populated, or when the
    /// chosen field or token set is malformed.
    pub fn build(self) -> Result<ComponentVersion, ResolutionError> {
        if let Some(version) = non_blank(self.version) {
            let version = check_length("version", version)?;
            return Ok(ComponentVersion {
                selector: VersionSelector::Literal(version),
            });
        }

        if let Some(spec) = self.version_spec {
            return Ok(ComponentVersion::from_spec(spec));
        }

        if let Some(number) = non_blank(self.build_number) {
            let number = check_length("build number", number)?;
            return Ok(ComponentVersion {
                selector: VersionSelector::BuildNumber(number),
            });
        }

        let quality = ordered_token_set("build quality", self.build_quality)?;
        let status = ordered_token_set("build status", self.build_status)?;
        let tags = ordered_token_set("build tags", self.build_tags)?;

        if quality.is_empty() && status.is_empty() && tags.is_empty() {
            return Err(ResolutionError::invalid_selector(
                "no version field is set",
            ));
        }

        Ok(ComponentVersion {
            selector: VersionSelector::BuildFilter {
                quality,
                status,
                tags,
            },
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &str, value: String) -> Result<String, ResolutionError> {
    if value.len() > MAX_VERSION_FIELD_LENGTH {
        return Err(ResolutionError::invalid_selector(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_VERSION_FIELD_LENGTH
        )));
    }
    Ok(value)
}

/// Trims tokens and removes duplicates, keeping first occurrences in order
fn ordered_token_set(field: &str, tokens: Vec<String>) -> Result<Vec<String>, ResolutionError> {
    let mut set: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            return Err(ResolutionError::invalid_selector(format!(
                "{} contains a blank token",
                field
            )));
        }
        let token = check_length(field, token.to_string())?;
        if !set.contains(&token) {
            set.push(token);
        }
    }
    Ok(set)
}
