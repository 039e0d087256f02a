use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::settings::keys;
use crate::domain::settings::model::LlmSettings;
use crate::domain::settings::source::SettingsSource;
use crate::domain::settings::use_cases::load::LoadSettingsUseCase;

pub struct LoadSettingsUseCaseImpl {
    pub source: Arc<dyn SettingsSource>,
    pub logger: Arc<dyn Logger>,
}

impl LoadSettingsUseCase for LoadSettingsUseCaseImpl {
    fn execute(&self) -> LlmSettings {
        self.logger
            .debug("Loading LLM settings from configuration source");

        // A variable that is unset loads as the empty string, never as an error.
        let settings = LlmSettings {
            yaml_config_path: self.source.get_or_default(keys::YAML_CONFIG_PATH),
            api_key: self.source.get_or_default(keys::OPENAI_API_KEY),
            model_name: self.source.get_or_default(keys::OPENAI_MODEL_NAME),
            temperature: self.source.get_or_default(keys::LLM_TEMPERATURE),
        };

        self.logger.debug(&format!(
            "Loaded LLM settings for model '{}'",
            settings.model_name
        ));

        settings
    }
}
