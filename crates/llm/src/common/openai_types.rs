//! Wire types shared by OpenAI-compatible chat-completions endpoints.

use crate::llm::{
    ChatCompletionOptions, ChatMessage, ChatResponseMessage, ChatRole, Tool, ToolCallFunction,
    ToolCallRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIStyleMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<OpenAIStyleToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl From<ChatMessage> for OpenAIStyleMessage {
    fn from(value: ChatMessage) -> Self {
        let role = match value.role {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Tool => "tool",
        };
        let tool_calls = if value.tool_calls.is_empty() {
            None
        } else {
            Some(
                value
                    .tool_calls
                    .into_iter()
                    .map(OpenAIStyleToolCall::from)
                    .collect(),
            )
        };
        Self {
            role: role.to_string(),
            content: Some(value.content),
            tool_calls,
            tool_call_id: value.tool_call_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIStyleTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: OpenAIStyleFunction,
}

impl From<&Tool> for OpenAIStyleTool {
    fn from(value: &Tool) -> Self {
        Self {
            tool_type: value.tool_type.clone(),
            function: OpenAIStyleFunction {
                name: value.function.name.clone(),
                description: value.function.description.clone(),
                parameters: value.function.parameters.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIStyleFunction {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIStyleToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: OpenAIStyleToolCallFunction,
}

impl From<ToolCallRequest> for OpenAIStyleToolCall {
    fn from(value: ToolCallRequest) -> Self {
        Self {
            id: value.id,
            tool_type: "function".to_string(),
            function: OpenAIStyleToolCallFunction {
                name: value.function.name,
                arguments: value.function.arguments.to_string(),
            },
        }
    }
}

impl From<OpenAIStyleToolCall> for ToolCallRequest {
    fn from(value: OpenAIStyleToolCall) -> Self {
        Self {
            id: value.id,
            function: ToolCallFunction {
                name: value.function.name,
                // Providers send arguments as a JSON-encoded string.
                arguments: serde_json::from_str(&value.function.arguments)
                    .unwrap_or(Value::Object(serde_json::Map::new())),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIStyleToolCallFunction {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpenAIStyleChatCompletionRequest {
    pub model: String,
    pub messages: Vec<OpenAIStyleMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAIStyleTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl OpenAIStyleChatCompletionRequest {
    pub fn from_chat_messages(messages: Vec<ChatMessage>, model: String) -> Self {
        Self {
            model,
            messages: messages.into_iter().map(OpenAIStyleMessage::from).collect(),
            tools: None,
            max_tokens: None,
            temperature: None,
            stream: None,
        }
    }

    pub fn set_tools(mut self, tools: Vec<OpenAIStyleTool>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn set_chat_options(mut self, options: ChatCompletionOptions) -> Self {
        self.max_tokens = options.max_tokens;
        self.temperature = options.temperature;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenAIStyleChatChoice {
    pub index: i32,
    pub message: OpenAIStyleResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIStyleResponseMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<OpenAIStyleToolCall>,
}

impl From<OpenAIStyleResponseMessage> for ChatResponseMessage {
    fn from(value: OpenAIStyleResponseMessage) -> Self {
        Self {
            role: ChatRole::from_str(&value.role).unwrap_or(ChatRole::Assistant),
            content: value.content.unwrap_or_default(),
            tool_calls: value
                .tool_calls
                .into_iter()
                .map(ToolCallRequest::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenAIStyleChatCompletionResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<OpenAIStyleChatChoice>,
}

/// Error envelope returned by OpenAI-compatible endpoints.
#[derive(Debug, Deserialize)]
pub struct OpenAIStyleErrorResponse {
    pub error: OpenAIStyleErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIStyleErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<Value>,
}
