//! Scriptable chat-model doubles for exercising agents and sessions without
//! network access.

use async_trait::async_trait;
use breeze_llm::{
    ChatCompletionOptions, ChatCompletionResponse, ChatMessage, ChatResponseMessage, ChatRole,
    LLMProviderError, Tool, ToolCallFunction, ToolCallRequest, LLM,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One canned model turn.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Plain assistant text.
    Text(String),
    /// A single tool invocation.
    ToolCall {
        name: String,
        arguments: serde_json::Value,
    },
    /// Fail the completion with this message.
    Fail(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MockLLMError {
    #[error("mock failure: {0}")]
    Scripted(String),
    #[error("mock exhausted: no scripted replies left")]
    Exhausted,
}

impl LLMProviderError for MockLLMError {}

/// An [`LLM`] that plays back a fixed script and records every message batch
/// it was asked to complete.
#[derive(Debug)]
pub struct MockLLM {
    replies: Mutex<VecDeque<ScriptedReply>>,
    received: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLLM {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Message batches seen so far, one entry per completion call.
    pub fn received(&self) -> Vec<Vec<ChatMessage>> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl LLM for MockLLM {
    type Error = MockLLMError;

    fn name(&self) -> &'static str {
        "MockLLM"
    }

    fn model_name(&self) -> String {
        "mock".to_string()
    }

    fn supports_tools(&self) -> bool {
        true
    }

    async fn chat_completion_with_tools(
        &self,
        messages: Vec<ChatMessage>,
        _tools: Option<&[Tool]>,
        _options: Option<ChatCompletionOptions>,
    ) -> Result<ChatCompletionResponse, Self::Error> {
        if let Ok(mut guard) = self.received.lock() {
            guard.push(messages);
        }

        let reply = match self.replies.lock() {
            Ok(mut guard) => guard.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };

        let message = match reply {
            Some(ScriptedReply::Text(content)) => ChatResponseMessage {
                role: ChatRole::Assistant,
                content,
                tool_calls: Vec::new(),
            },
            Some(ScriptedReply::ToolCall { name, arguments }) => ChatResponseMessage {
                role: ChatRole::Assistant,
                content: String::new(),
                tool_calls: vec![ToolCallRequest {
                    id: format!("call-{}", uuid::Uuid::new_v4()),
                    function: ToolCallFunction { name, arguments },
                }],
            },
            Some(ScriptedReply::Fail(message)) => {
                return Err(MockLLMError::Scripted(message));
            }
            None => return Err(MockLLMError::Exhausted),
        };

        Ok(ChatCompletionResponse {
            model: "mock".to_string(),
            message,
            done_reason: Some("stop".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_plays_in_order() {
        let llm = MockLLM::new(vec![
            ScriptedReply::Text("one".to_string()),
            ScriptedReply::Text("two".to_string()),
        ]);

        let first = llm
            .chat_completion(vec![ChatMessage::user("a")], None)
            .await
            .unwrap();
        assert_eq!(first.message.content, "one");

        let second = llm
            .chat_completion(vec![ChatMessage::user("b")], None)
            .await
            .unwrap();
        assert_eq!(second.message.content, "two");

        assert!(matches!(
            llm.chat_completion(vec![], None).await.unwrap_err(),
            MockLLMError::Exhausted
        ));
    }

    #[tokio::test]
    async fn test_records_batches() {
        let llm = MockLLM::new(vec![ScriptedReply::Text("ok".to_string())]);
        llm.chat_completion(vec![ChatMessage::user("hello")], None)
            .await
            .unwrap();

        let batches = llm.received();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0][0].content, "hello");
    }
}
