use depfilter::prelude::*;
use std::collections::HashMap;

/// Mock SettingsSource keyed by dependency type
pub struct MockSettingsSource {
    pub settings: HashMap<String, ResolverSettings>,
    pub should_fail: bool,
}

impl MockSettingsSource {
    pub fn new() -> Self {
        Self {
            settings: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_setting(
        mut self,
        dependency_type: &str,
        key: ResolverSettingName,
        value: &str,
    ) -> Self {
        let entry = self
            .settings
            .remove(dependency_type)
            .unwrap_or_default()
            .with_setting(key, value);
        self.settings.insert(dependency_type.to_string(), entry);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            settings: HashMap::new(),
            should_fail: true,
        }
    }
}

impl SettingsSource for MockSettingsSource {
    fn load_settings(&self, dependency_type: &str) -> Result<ResolverSettings> {
        if self.should_fail {
            anyhow::bail!("Mock settings store failure");
        }
        Ok(self
            .settings
            .get(dependency_type)
            .cloned()
            .unwrap_or_default())
    }
}
