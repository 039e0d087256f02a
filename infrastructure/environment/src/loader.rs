use std::path::Path;
use std::sync::Arc;

use business::application::settings::load::LoadSettingsUseCaseImpl;
use business::domain::settings::model::LlmSettings;
use business::domain::settings::use_cases::load::LoadSettingsUseCase;
use logger::TracingLogger;
use tracing::{debug, warn};

use crate::env_source::SettingsSourceEnv;

const TARGET: &str = "Environment -- ";

/// Merges `.env` from the working directory into the process environment.
///
/// File values win over variables that are already set. A missing file is
/// skipped silently; the merged variables stay visible to the rest of the
/// process.
pub fn merge_dotenv() {
    match dotenvy::dotenv_override() {
        Ok(path) => debug!(target: TARGET, "merged variables from {}", path.display()),
        Err(e) if e.not_found() => debug!(target: TARGET, "no .env file to merge"),
        Err(e) => warn!(target: TARGET, "skipping unreadable .env file: {e}"),
    }
}

/// Same as [`merge_dotenv`] for an explicit environment file path.
pub fn merge_dotenv_from(path: &Path) {
    match dotenvy::from_path_override(path) {
        Ok(()) => debug!(target: TARGET, "merged variables from {}", path.display()),
        Err(e) if e.not_found() => {
            debug!(target: TARGET, "no environment file at {}", path.display());
        }
        Err(e) => warn!(target: TARGET, "skipping unreadable environment file: {e}"),
    }
}

/// Loads LLM settings from the process environment, merging `.env` from the
/// working directory first.
///
/// Never fails: a variable that is still unset after the merge loads as the
/// empty string.
pub fn load_settings() -> LlmSettings {
    merge_dotenv();
    load_from_process_env()
}

/// Loads LLM settings after merging the environment file at `path`.
pub fn load_settings_from_file(path: &Path) -> LlmSettings {
    merge_dotenv_from(path);
    load_from_process_env()
}

fn load_from_process_env() -> LlmSettings {
    let use_case = LoadSettingsUseCaseImpl {
        source: Arc::new(SettingsSourceEnv),
        logger: Arc::new(TracingLogger),
    };
    use_case.execute()
}
