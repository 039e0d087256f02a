//! Environment variable names consumed by the settings loader.

/// Path to a further YAML configuration file (not read by this layer).
pub const YAML_CONFIG_PATH: &str = "YAML_CONFIG_PATH";

/// Credential for the OpenAI-compatible API.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Identifier of the model used downstream.
pub const OPENAI_MODEL_NAME: &str = "OPENAI_MODEL_NAME";

/// Sampling temperature, kept as text.
pub const LLM_TEMPERATURE: &str = "LLM_TEMPERATURE";
