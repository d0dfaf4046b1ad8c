use crate::dependency_resolution::domain::ResolverSettings;
use crate::shared::Result;

/// SettingsSource port for loading resolver settings
///
/// This port abstracts where per-dependency-type resolver settings come from
/// (a config file, a host application's settings store, ...).
pub trait SettingsSource {
    /// Loads the resolver settings that apply to a dependency type
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be read. Callers treat
    /// this as a configuration problem and continue with empty settings.
    fn load_settings(&self, dependency_type: &str) -> Result<ResolverSettings>;
}

/// Settings source backed by a fixed set of settings, the same for every type
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsSource {
    settings: ResolverSettings,
}

impl StaticSettingsSource {
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }
}

impl SettingsSource for StaticSettingsSource {
    fn load_settings(&self, _dependency_type: &str) -> Result<ResolverSettings> {
        Ok(self.settings.clone())
    }
}
