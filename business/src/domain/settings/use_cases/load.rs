use crate::domain::settings::model::LlmSettings;

pub trait LoadSettingsUseCase: Send + Sync {
    fn execute(&self) -> LlmSettings;
}
