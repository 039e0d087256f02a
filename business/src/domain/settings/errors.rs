/// Raised by the `require_*` accessors for settings that downstream logic
/// cannot function without. Loading itself never fails; absent variables
/// load as empty strings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings.missing_api_key")]
    MissingApiKey,
    #[error("settings.missing_model_name")]
    MissingModelName,
    #[error("settings.missing_yaml_config_path")]
    MissingYamlConfigPath,
}
