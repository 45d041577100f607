use crate::error::LLMProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::EnumString;

/// Trait for chat-completion backends. The associated error type lets each
/// provider surface its own failure taxonomy while callers stay generic.
#[async_trait]
pub trait LLM: Send + Sync {
    type Error: LLMProviderError + std::error::Error + Send + Sync + 'static;

    /// Sends a chat request without any tool declarations.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        options: Option<ChatCompletionOptions>,
    ) -> Result<ChatCompletionResponse, Self::Error> {
        self.chat_completion_with_tools(messages, None, options)
            .await
    }

    /// Sends a chat request advertising the given tools. The provider may
    /// answer with plain text or with one or more tool-call requests.
    async fn chat_completion_with_tools(
        &self,
        messages: Vec<ChatMessage>,
        tools: Option<&[Tool]>,
        options: Option<ChatCompletionOptions>,
    ) -> Result<ChatCompletionResponse, Self::Error>;

    fn name(&self) -> &'static str;

    fn model_name(&self) -> String;

    fn supports_tools(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatCompletionOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Role of a participant in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumString)]
pub enum ChatRole {
    #[serde(rename = "system")]
    #[strum(serialize = "system")]
    System,
    #[serde(rename = "user")]
    #[strum(serialize = "user")]
    User,
    #[serde(rename = "assistant")]
    #[strum(serialize = "assistant")]
    Assistant,
    #[serde(rename = "tool")]
    #[strum(serialize = "tool")]
    Tool,
}

/// A single message in a chat conversation. Plain user/assistant turns carry
/// only `role` and `content`; the optional fields exist for the tool
/// round-trip messages exchanged with the provider mid-turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system<T: Into<String>>(content: T) -> Self {
        Self::plain(ChatRole::System, content)
    }

    pub fn user<T: Into<String>>(content: T) -> Self {
        Self::plain(ChatRole::User, content)
    }

    pub fn assistant<T: Into<String>>(content: T) -> Self {
        Self::plain(ChatRole::Assistant, content)
    }

    /// An assistant turn that requests tool invocations.
    pub fn assistant_tool_calls<T: Into<String>>(content: T, calls: Vec<ToolCallRequest>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            tool_calls: calls,
            tool_call_id: None,
        }
    }

    /// A tool-role message carrying the result of one tool invocation.
    pub fn tool_result<I: Into<String>, T: Into<String>>(call_id: I, content: T) -> Self {
        Self {
            role: ChatRole::Tool,
            content: content.into(),
            tool_calls: vec![],
            tool_call_id: Some(call_id.into()),
        }
    }

    fn plain<T: Into<String>>(role: ChatRole, content: T) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: vec![],
            tool_call_id: None,
        }
    }
}

/// A tool declaration sent to the provider.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// The type of tool (always "function" today)
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionTool,
}

/// Function definition inside a tool declaration. `parameters` holds the JSON
/// Schema describing the arguments; it is a raw `Value` so tools may use any
/// valid schema.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionTool {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A tool invocation requested by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub id: String,
    pub function: ToolCallFunction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallFunction {
    pub name: String,
    /// Arguments parsed from the provider's JSON-encoded string.
    pub arguments: Value,
}

/// The assistant message returned by a completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponseMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCallRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub model: String,
    pub message: ChatResponseMessage,
    pub done_reason: Option<String>,
}

impl std::fmt::Display for ChatCompletionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_role_serialization() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&ChatRole::System).unwrap(),
            "\"system\""
        );
        assert_eq!(serde_json::to_string(&ChatRole::Tool).unwrap(), "\"tool\"");
    }

    #[test]
    fn test_chat_role_from_str() {
        use std::str::FromStr;
        assert_eq!(ChatRole::from_str("user").unwrap(), ChatRole::User);
        assert_eq!(ChatRole::from_str("assistant").unwrap(), ChatRole::Assistant);
        assert!(ChatRole::from_str("robot").is_err());
    }

    #[test]
    fn test_plain_message_constructors() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.tool_calls.is_empty());
        assert!(msg.tool_call_id.is_none());

        let msg = ChatMessage::assistant("Hi there");
        assert_eq!(msg.role, ChatRole::Assistant);

        let msg = ChatMessage::system("Be helpful");
        assert_eq!(msg.role, ChatRole::System);
    }

    #[test]
    fn test_plain_message_serialization_omits_tool_fields() {
        let msg = ChatMessage::user("What is the weather in Paris?");
        let serialized = serde_json::to_string(&msg).unwrap();
        assert!(!serialized.contains("tool_calls"));
        assert!(!serialized.contains("tool_call_id"));
    }

    #[test]
    fn test_tool_result_message() {
        let msg = ChatMessage::tool_result("call_1", "Weather in Paris: sunny");
        assert_eq!(msg.role, ChatRole::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_1"));

        let serialized = serde_json::to_string(&msg).unwrap();
        assert!(serialized.contains("\"tool_call_id\":\"call_1\""));
    }

    #[test]
    fn test_assistant_tool_calls_message() {
        let call = ToolCallRequest {
            id: "call_9".to_string(),
            function: ToolCallFunction {
                name: "get_weather".to_string(),
                arguments: json!({"location": "Tokyo"}),
            },
        };
        let msg = ChatMessage::assistant_tool_calls("", vec![call]);
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.tool_calls.len(), 1);
        assert_eq!(msg.tool_calls[0].function.name, "get_weather");
    }

    #[test]
    fn test_chat_message_roundtrip() {
        let msg = ChatMessage::user("round trip");
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.role, ChatRole::User);
        assert_eq!(deserialized.content, "round trip");
    }

    #[test]
    fn test_tool_declaration_serialization() {
        let tool = Tool {
            tool_type: "function".to_string(),
            function: FunctionTool {
                name: "get_weather".to_string(),
                description: "Fetch weather".to_string(),
                parameters: json!({"type": "object", "properties": {}}),
            },
        };

        let serialized = serde_json::to_string(&tool).unwrap();
        assert!(serialized.contains("\"type\":\"function\""));
        assert!(serialized.contains("\"name\":\"get_weather\""));
    }

    #[test]
    fn test_response_display() {
        let response = ChatCompletionResponse {
            model: "test-model".to_string(),
            message: ChatResponseMessage {
                role: ChatRole::Assistant,
                content: "It is sunny.".to_string(),
                tool_calls: vec![],
            },
            done_reason: Some("stop".to_string()),
        };
        assert_eq!(response.to_string(), "It is sunny.");
    }
}
