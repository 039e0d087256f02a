use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// Settings for the LLM pipeline, loaded from the process environment.
///
/// Every field is plain text and defaults to the empty string when the
/// corresponding environment variable is unset. `temperature` is kept as
/// text; parsing it is the consumer's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub yaml_config_path: String,
    pub api_key: String,
    pub model_name: String,
    pub temperature: String,
}

impl LlmSettings {
    /// Returns the API key, treating an empty value as missing.
    pub fn require_api_key(&self) -> Result<&str, SettingsError> {
        require(&self.api_key, SettingsError::MissingApiKey)
    }

    /// Returns the model name, treating an empty value as missing.
    pub fn require_model_name(&self) -> Result<&str, SettingsError> {
        require(&self.model_name, SettingsError::MissingModelName)
    }

    /// Returns the YAML configuration path, treating an empty value as missing.
    pub fn require_yaml_config_path(&self) -> Result<&str, SettingsError> {
        require(&self.yaml_config_path, SettingsError::MissingYamlConfigPath)
    }
}

fn require(value: &str, missing: SettingsError) -> Result<&str, SettingsError> {
    if value.is_empty() { Err(missing) } else { Ok(value) }
}
