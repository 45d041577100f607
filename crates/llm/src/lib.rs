pub mod common;
pub mod error;
pub mod llm;
mod net;
pub mod providers;
pub(crate) mod utils;

pub use error::{LLMError, LLMProviderError};
pub use llm::{
    ChatCompletionOptions, ChatCompletionResponse, ChatMessage, ChatResponseMessage, ChatRole,
    FunctionTool, Tool, ToolCallFunction, ToolCallRequest, LLM,
};
