mod api;
mod llm;
pub mod model;

pub use llm::{OpenAI, OpenAIError};
pub use model::OpenAIModel;
