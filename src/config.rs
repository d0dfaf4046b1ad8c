//! Configuration file support for depfilter.
//!
//! Provides YAML-based configuration through `depfilter.config.yml` files:
//! the default dependency type, an ignore list, and resolver settings
//! (global, with per-dependency-type overrides).

use serde::Deserialize;
use serde_yaml_ng::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::dependency_resolution::domain::{dependency_type, ResolverSettings};
use crate::shared::security::read_input_file;
use crate::shared::{ResolutionError, Result};

pub const CONFIG_FILENAME: &str = "depfilter.config.yml";

/// Raw setting entries as written in YAML, in key order
pub type SettingEntries = BTreeMap<String, Value>;

/// Top-level configuration file schema.
///
/// Setting values stay raw YAML so one malformed value only drops its own key.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub dependency_type: Option<String>,
    pub ignore: Option<Vec<String>>,
    /// Settings applied to every dependency type.
    pub settings: Option<SettingEntries>,
    /// Per-dependency-type settings, layered over `settings`.
    pub types: Option<BTreeMap<String, Option<SettingEntries>>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, Value>,
}

/// Converts a YAML value into the string form settings store
///
/// Scalars render as text. Lists of scalars are joined with `;`, the
/// separator list-valued settings use. Null, mappings, nested lists and
/// tagged values have no setting form.
pub fn setting_string(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(scalar_string)
            .collect::<Option<Vec<_>>>()
            .map(|items| items.join(";")),
        other => scalar_string(other),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}

fn yaml_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Mapping(_) => "mapping",
        Value::Sequence(_) => "list of non-scalars",
        Value::Tagged(_) => "tagged value",
        _ => "scalar",
    }
}

/// Settings of one config section plus the problems found in it
struct SectionSettings {
    settings: ResolverSettings,
    warnings: Vec<String>,
}

fn parse_section(scope: &str, entries: Option<&SettingEntries>) -> SectionSettings {
    let mut warnings = Vec::new();
    let mut strings = BTreeMap::new();

    for (key, value) in entries.into_iter().flatten() {
        match setting_string(value) {
            Some(text) => {
                strings.insert(key.clone(), text);
            }
            None => {
                let error = ResolutionError::configuration(
                    format!("{}.{}", scope, key),
                    yaml_kind(value),
                    "expected a string, number, boolean or a list of those",
                );
                warnings.push(format!("{} Setting ignored.", error));
            }
        }
    }

    let parsed = ResolverSettings::from_string_map(&strings);
    for key in parsed.unknown_keys {
        warnings.push(format!("Unknown setting '{}.{}' will be ignored.", scope, key));
    }
    for conflict in parsed.conflicts {
        warnings.push(format!("{}: {}", scope, conflict));
    }

    SectionSettings {
        settings: parsed.settings,
        warnings,
    }
}

impl ConfigFile {
    /// Resolver settings for a dependency type: global settings overlaid
    /// with the matching `types` entry (matched case-insensitively).
    ///
    /// When several `types` entries match, the first in sorted order is used.
    pub fn settings_for(&self, dependency_type: &str) -> ResolverSettings {
        let global = parse_section("settings", self.settings.as_ref()).settings;

        let wanted = dependency_type::normalize(dependency_type);
        let overrides = self
            .types
            .iter()
            .flatten()
            .find(|(name, _)| dependency_type::normalize(name) == wanted)
            .map(|(name, entries)| {
                parse_section(&format!("types.{}", name), entries.as_ref()).settings
            });

        match overrides {
            Some(overrides) => global.merged_with(&overrides),
            None => global,
        }
    }

    /// Non-fatal problems worth reporting: unknown fields, unknown or
    /// duplicated setting keys, unusable values and duplicated types.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .unknown_fields
            .keys()
            .map(|key| format!("Unknown config field '{}' will be ignored.", key))
            .collect();

        warnings.extend(parse_section("settings", self.settings.as_ref()).warnings);

        let mut by_type: BTreeMap<String, Vec<&String>> = BTreeMap::new();
        for (type_name, entries) in self.types.iter().flatten() {
            warnings.extend(
                parse_section(&format!("types.{}", type_name), entries.as_ref()).warnings,
            );
            by_type
                .entry(dependency_type::normalize(type_name))
                .or_default()
                .push(type_name);
        }

        for names in by_type.values().filter(|names| names.len() > 1) {
            let listed: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
            warnings.push(format!(
                "Dependency type configured more than once in 'types' ({}); only '{}' is used.",
                listed.join(", "),
                listed[0]
            ));
        }

        warnings.sort();
        warnings
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_input_file(path, "config file").map_err(|e| {
        ResolutionError::ConfigFileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ResolutionError::ConfigFileParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config).map_err(|details| ResolutionError::ConfigFileParse {
        path: path.to_path_buf(),
        details,
    })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    if let Some(ignore) = &config.ignore {
        for (i, entry) in ignore.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(format!("ignore[{}] must not be empty", i));
            }
        }
    }

    if let Some(types) = &config.types {
        if types.keys().any(|name| name.trim().is_empty()) {
            return Err("types must not contain an empty dependency type".to_string());
        }
    }

    if let Some(dependency_type) = &config.dependency_type {
        if dependency_type.trim().is_empty() {
            return Err("dependency_type must not be empty".to_string());
        }
    }

    Ok(())
}
