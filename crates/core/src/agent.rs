use crate::{
    error::AgentError,
    tool::{ToolCallError, ToolT},
};
use breeze_llm::{ChatMessage, Tool, LLM};
use serde_json::{json, Value};
use std::sync::Arc;

const DEFAULT_MAX_TURNS: usize = 10;

/// A tool-using assistant: a system instruction, an explicit tool list and a
/// chat model. Each call to [`run`](AssistantAgent::run) drives the
/// completion/tool loop until the model produces a plain text answer.
#[derive(Debug)]
pub struct AssistantAgent<L: LLM> {
    name: String,
    instructions: String,
    tools: Vec<Box<dyn ToolT>>,
    llm: Arc<L>,
    max_turns: usize,
}

impl<L: LLM> AssistantAgent<L> {
    pub fn new<T: Into<String>>(name: T, instructions: T, llm: Arc<L>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
            llm,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Register a tool. Tools are only ever attached through this call; there
    /// is no scanning or implicit discovery.
    pub fn with_tool(mut self, tool: Box<dyn ToolT>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn tools(&self) -> &[Box<dyn ToolT>] {
        &self.tools
    }

    fn wire_tools(&self) -> Option<Vec<Tool>> {
        if self.tools.is_empty() || !self.llm.supports_tools() {
            return None;
        }
        Some(self.tools.iter().map(Tool::from).collect())
    }

    fn run_tool(&self, name: &str, args: serde_json::Value) -> String {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            log::warn!("model requested unknown tool: {}", name);
            return json!({ "error": format!("Unknown tool: {}", name) }).to_string();
        };

        match tool.run(args) {
            // String results go to the model verbatim, unquoted.
            Ok(Value::String(text)) => text,
            Ok(result) => result.to_string(),
            Err(ToolCallError::SerdeError(e)) => {
                json!({ "error": format!("Invalid tool arguments: {}", e) }).to_string()
            }
            Err(ToolCallError::RuntimeError(e)) => {
                json!({ "error": e.to_string() }).to_string()
            }
        }
    }

    /// Run one conversation turn over the given history. The history holds
    /// only user and assistant turns; intermediate tool traffic stays inside
    /// this call.
    pub async fn run(&self, history: &[ChatMessage]) -> Result<String, AgentError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(self.instructions.clone()));
        messages.extend_from_slice(history);

        let tools = self.wire_tools();

        for _ in 0..self.max_turns {
            let response = self
                .llm
                .chat_completion_with_tools(messages.clone(), tools.as_deref(), None)
                .await
                .map_err(|e| AgentError::LLMError(e.to_string()))?;

            if response.message.tool_calls.is_empty() {
                return Ok(response.message.content);
            }

            messages.push(ChatMessage::assistant_tool_calls(
                response.message.content.clone(),
                response.message.tool_calls.clone(),
            ));

            for call in response.message.tool_calls {
                log::debug!("tool call: {} ({})", call.function.name, call.id);
                let output = self.run_tool(&call.function.name, call.function.arguments);
                messages.push(ChatMessage::tool_result(call.id, output));
            }
        }

        Err(AgentError::MaxTurnsExceeded {
            max_turns: self.max_turns,
        })
    }
}
