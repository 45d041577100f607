//! Umbrella crate: one import surface over the agent core, the LLM providers
//! and the weather tool.

pub use async_trait::async_trait;
pub use breeze_core as core;
pub use breeze_llm as llm;
pub use breeze_weather as weather;

pub use breeze_core::{
    agent::AssistantAgent,
    session::{Session, SessionId, SessionManager},
    tool::ToolT,
    AgentError, SessionError,
};
pub use breeze_llm::{ChatMessage, ChatRole, LLM};
pub use breeze_weather::{WeatherClient, WeatherLookupTool, WeatherQuery, WeatherUnit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_are_usable() {
        let message = ChatMessage::user("hello");
        assert_eq!(message.role, ChatRole::User);

        let client = WeatherClient::new("key");
        let tool = WeatherLookupTool::new(client);
        assert_eq!(tool.name(), "get_weather");
    }
}
