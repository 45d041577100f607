use uuid::Uuid;

/// Errors raised while an agent drives one conversation turn.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    LLMError(String),

    #[error("Maximum tool turns exceeded: {max_turns}")]
    MaxTurnsExceeded { max_turns: usize },
}

/// Errors surfaced at the session boundary.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("{0}")]
    TurnFailed(String),
}
