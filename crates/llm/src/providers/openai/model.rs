use std::fmt::Debug;
use strum::{Display, EnumString};

/// Model identifiers accepted by OpenAI-compatible chat endpoints. The Gemini
/// entries target Google's OpenAI-compatibility layer.
#[derive(Debug, EnumString, Display, Clone)]
pub enum OpenAIModel {
    #[strum(serialize = "gpt-4o")]
    GPT4O,
    #[strum(serialize = "gpt-4o-mini")]
    GPT4OMini,
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
}

impl OpenAIModel {
    pub fn supports_tools(&self) -> bool {
        matches!(
            &self,
            OpenAIModel::GPT4O
                | OpenAIModel::GPT4OMini
                | OpenAIModel::Gemini20Flash
                | OpenAIModel::Gemini15Flash
                | OpenAIModel::Gemini15Pro
        )
    }
}
