use breeze_llm::{FunctionTool, Tool};
use serde_json::Value;
use std::fmt::Debug;

/// Result of invoking a tool: the JSON payload handed back to the model.
pub type ToolCallResult = Value;

#[derive(Debug, thiserror::Error)]
pub enum ToolCallError {
    #[error("Tool Runtime Error: {0}")]
    RuntimeError(Box<dyn std::error::Error + Send + Sync>),

    #[error("Tool Serde Error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// A callable capability an agent can expose to its model. Implementations
/// describe their argument schema as a JSON Schema object and execute
/// synchronously; the agent runs them between chat-completion rounds.
pub trait ToolT: Send + Sync + Debug {
    /// Name the model uses to address this tool.
    fn name(&self) -> &'static str;
    /// One-line description surfaced in the tool listing.
    fn description(&self) -> &'static str;
    /// JSON Schema for the arguments object.
    fn args_schema(&self) -> Value;
    /// Execute with already-parsed arguments.
    fn run(&self, args: Value) -> Result<ToolCallResult, ToolCallError>;
}

impl From<&Box<dyn ToolT>> for Tool {
    fn from(tool: &Box<dyn ToolT>) -> Self {
        Tool {
            tool_type: "function".to_string(),
            function: FunctionTool {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.args_schema(),
            },
        }
    }
}
