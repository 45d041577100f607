use strum::{Display, EnumString};

#[derive(Debug, EnumString, Display, Clone)]
pub enum OpenAIAPI {
    #[strum(serialize = "chat/completions")]
    ChatCompletion,
}
