use crate::config::ConfigFile;
use crate::dependency_resolution::domain::ResolverSettings;
use crate::ports::outbound::SettingsSource;
use crate::shared::Result;

/// ConfigSettingsSource adapter serving resolver settings from a loaded config file
///
/// A missing config behaves as an empty one.
#[derive(Debug, Default)]
pub struct ConfigSettingsSource {
    config: ConfigFile,
}

impl ConfigSettingsSource {
    pub fn new(config: ConfigFile) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }
}

impl SettingsSource for ConfigSettingsSource {
    fn load_settings(&self, dependency_type: &str) -> Result<ResolverSettings> {
        Ok(self.config.settings_for(dependency_type))
    }
}
