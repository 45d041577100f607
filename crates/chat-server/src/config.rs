use breeze::weather::DEFAULT_BASE_URL as DEFAULT_WEATHER_URL;

pub const DEFAULT_LLM_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is missing in the environment.")]
    MissingSecret(&'static str),
}

/// Process-wide settings, read once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub weather_api_key: String,
    pub llm_base_url: String,
    pub weather_base_url: String,
}

impl Config {
    /// Read configuration from the environment. Both API keys are required;
    /// startup must abort before serving any session when one is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            weather_api_key: required("WEATHER_API_KEY")?,
            llm_base_url: optional("LLM_BASE_URL", DEFAULT_LLM_BASE_URL),
            weather_base_url: optional("WEATHER_API_URL", DEFAULT_WEATHER_URL),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingSecret(name))
}

fn optional(name: &str, default: &str) -> String {
    let value = std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());
    value.trim_end_matches('/').to_string()
}
