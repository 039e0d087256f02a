use std::env;

use business::domain::settings::source::SettingsSource;

/// Settings source backed by the process-wide environment variable table.
pub struct SettingsSourceEnv;

impl SettingsSource for SettingsSourceEnv {
    fn get(&self, key: &str) -> Option<String> {
        // A non-unicode value reads the same as an unset one.
        env::var(key).ok()
    }
}
