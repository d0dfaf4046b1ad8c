use crate::shared::ResolutionError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum length of a single name field (security limit)
const MAX_NAME_FIELD_LENGTH: usize = 260;

/// Separator between team project and build definition in a canonical build name
pub const BUILD_NAME_SEPARATOR: &str = "::";

/// ComponentName value object identifying a dependency
///
/// A component is addressed either by a path (file-share name or full
/// source-control path such as `$/Project/Lib`) or by the build that produces
/// it. Identity is the canonical name returned by [`ComponentName::name`].
#[derive(Debug, Clone)]
pub enum ComponentName {
    Path(String),
    Build {
        team_project: String,
        build_definition: String,
    },
}

impl ComponentName {
    /// Creates a path-addressed component name
    pub fn from_path(path: impl Into<String>) -> Result<Self, ResolutionError> {
        let path = validate_field("path", path.into())?;
        if path.contains(BUILD_NAME_SEPARATOR) {
            return Err(ResolutionError::invalid_name(format!(
                "path '{}' must not contain '{}'",
                path, BUILD_NAME_SEPARATOR
            )));
        }
        Ok(ComponentName::Path(path))
    }

    /// Creates a build-addressed component name
    pub fn from_build(
        team_project: impl Into<String>,
        build_definition: impl Into<String>,
    ) -> Result<Self, ResolutionError> {
        let team_project = validate_field("team project", team_project.into())?;
        let build_definition = validate_field("build definition", build_definition.into())?;

        if team_project.contains(BUILD_NAME_SEPARATOR)
            || build_definition.contains(BUILD_NAME_SEPARATOR)
        {
            return Err(ResolutionError::invalid_name(format!(
                "team project and build definition must not contain '{}'",
                BUILD_NAME_SEPARATOR
            )));
        }

        Ok(ComponentName::Build {
            team_project,
            build_definition,
        })
    }

    /// Parses a canonical name back into a ComponentName
    ///
    /// `"Project::Definition"` yields a build name, anything else a path name.
    pub fn parse(text: &str) -> Result<Self, ResolutionError> {
        match text.split_once(BUILD_NAME_SEPARATOR) {
            Some((team_project, build_definition)) => {
                ComponentName::from_build(team_project, build_definition)
            }
            None => ComponentName::from_path(text),
        }
    }

    /// Returns the canonical display name
    pub fn name(&self) -> String {
        match self {
            ComponentName::Path(path) => path.clone(),
            ComponentName::Build {
                team_project,
                build_definition,
            } => format!(
                "{}{}{}",
                team_project, BUILD_NAME_SEPARATOR, build_definition
            ),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            ComponentName::Path(path) => Some(path),
            ComponentName::Build { .. } => None,
        }
    }

    pub fn team_project(&self) -> Option<&str> {
        match self {
            ComponentName::Build { team_project, .. } => Some(team_project),
            ComponentName::Path(_) => None,
        }
    }

    pub fn build_definition(&self) -> Option<&str> {
        match self {
            ComponentName::Build {
                build_definition, ..
            } => Some(build_definition),
            ComponentName::Path(_) => None,
        }
    }

    pub fn is_build(&self) -> bool {
        matches!(self, ComponentName::Build { .. })
    }
}

fn validate_field(field: &str, value: String) -> Result<String, ResolutionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ResolutionError::invalid_name(format!(
            "{} cannot be empty",
            field
        )));
    }

    if trimmed.len() > MAX_NAME_FIELD_LENGTH {
        return Err(ResolutionError::invalid_name(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            trimmed.len(),
            MAX_NAME_FIELD_LENGTH
        )));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(ResolutionError::invalid_name(format!(
            "{} contains control characters",
            field
        )));
    }

    Ok(trimmed.to_string())
}

impl PartialEq for ComponentName {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for ComponentName {}

impl Hash for ComponentName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for ComponentName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}
