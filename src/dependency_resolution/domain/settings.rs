use crate::shared::ResolutionError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A closed, enumerated domain of setting keys
pub trait SettingKey: Copy + Ord + fmt::Display + FromStr + Send + Sync + 'static {
    /// Every valid key, in declaration order
    fn all() -> &'static [Self];
}

/// Settings understood by the component filter policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolverSettingName {
    /// Wildcard patterns a component must match to be kept
    IncludeFilter,
    /// Wildcard patterns that drop a component
    ExcludeFilter,
    /// Whether pattern and ignore-list matching is case sensitive
    CaseSensitive,
    /// Team project that build components must belong to
    TeamProject,
}

impl SettingKey for ResolverSettingName {
    fn all() -> &'static [Self] {
        &[
            ResolverSettingName::IncludeFilter,
            ResolverSettingName::ExcludeFilter,
            ResolverSettingName::CaseSensitive,
            ResolverSettingName::TeamProject,
        ]
    }
}

impl ResolverSettingName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverSettingName::IncludeFilter => "IncludeFilter",
            ResolverSettingName::ExcludeFilter => "ExcludeFilter",
            ResolverSettingName::CaseSensitive => "CaseSensitive",
            ResolverSettingName::TeamProject => "TeamProject",
        }
    }
}

impl fmt::Display for ResolverSettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResolverSettingName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_' && *c != '-').collect();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown resolver setting: {}", s))
    }
}

/// Key-value store keyed by an enumerated setting name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings<K: SettingKey> {
    values: BTreeMap<K, String>,
}

impl<K: SettingKey> Default for Settings<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: SettingKey> Settings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a setting
    pub fn add_setting(&mut self, key: K, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn with_setting(mut self, key: K, value: impl Into<String>) -> Self {
        self.add_setting(key, value);
        self
    }

    /// Returns the raw value, or `None` for an absent key
    pub fn get_setting(&self, key: K) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: K) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Layers `other` on top of `self`; keys present in both take `other`'s value
    pub fn merged_with(&self, other: &Settings<K>) -> Settings<K> {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.add_setting(key, value);
        }
        merged
    }

    /// Reads a boolean setting
    ///
    /// Absent keys yield `Ok(None)`. Accepts true/false, yes/no, on/off, 1/0.
    pub fn get_bool(&self, key: K) -> Result<Option<bool>, ResolutionError> {
        let Some(raw) = self.get_setting(key) else {
            return Ok(None);
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => Err(ResolutionError::configuration(
                key.to_string(),
                raw,
                "expected a boolean (true/false)",
            )),
        }
    }

    /// Reads a list setting separated by `;` or `,`, dropping blank items
    pub fn get_list(&self, key: K) -> Vec<String> {
        self.get_setting(key)
            .map(|raw| {
                raw.split([';', ','])
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Builds settings from string-keyed entries
    ///
    /// Keys are matched loosely (case, `_` and `-` ignored), so several raw
    /// keys can name the same setting. The canonical spelling wins; among
    /// other aliases the first in sorted order wins. Each discarded alias is
    /// reported as a `ConfigurationError`.
    pub fn from_string_map(entries: &BTreeMap<String, String>) -> ParsedSettings<K> {
        let mut parsed = ParsedSettings {
            settings: Self::new(),
            unknown_keys: Vec::new(),
            conflicts: Vec::new(),
        };
        let mut sources: BTreeMap<K, &str> = BTreeMap::new();

        for (raw_key, value) in entries {
            let Ok(key) = raw_key.parse::<K>() else {
                parsed.unknown_keys.push(raw_key.clone());
                continue;
            };

            let Some(&kept) = sources.get(&key) else {
                sources.insert(key, raw_key);
                parsed.settings.add_setting(key, value.clone());
                continue;
            };

            let canonical = key.to_string();
            let (winner, loser) = if *raw_key == canonical {
                parsed.settings.add_setting(key, value.clone());
                sources.insert(key, raw_key);
                (raw_key.as_str(), kept)
            } else {
                (kept, raw_key.as_str())
            };

            parsed.conflicts.push(ResolutionError::configuration(
                canonical,
                loser,
                format!("duplicate of '{}'; the value of '{}' is used", winner, winner),
            ));
        }

        parsed
    }
}

/// Settings built from string-keyed entries, with what could not be used
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSettings<K: SettingKey> {
    pub settings: Settings<K>,
    /// Keys that are not part of `K`, sorted
    pub unknown_keys: Vec<String>,
    /// Aliases discarded because another spelling of the same key won
    pub conflicts: Vec<ResolutionError>,
}
