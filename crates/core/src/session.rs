use crate::{agent::AssistantAgent, error::SessionError};
use breeze_llm::{ChatMessage, ChatRole, LLM};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SessionId = Uuid;

/// One conversation with an agent. History is append-only and holds user and
/// assistant turns exclusively; after N successful exchanges it contains
/// exactly 2N messages. A failed turn keeps the user message and appends
/// nothing else.
#[derive(Debug)]
pub struct Session<L: LLM> {
    id: SessionId,
    agent: Arc<AssistantAgent<L>>,
    history: Vec<ChatMessage>,
}

impl<L: LLM> Session<L> {
    pub fn new(agent: Arc<AssistantAgent<L>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            agent,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Append the user turn, run the agent over the full history and append
    /// the assistant reply. On failure the user turn stays recorded so the
    /// transcript still shows what was asked.
    pub async fn handle_message<T: Into<String>>(
        &mut self,
        text: T,
    ) -> Result<String, SessionError> {
        self.history.push(ChatMessage::user(text.into()));

        match self.agent.run(&self.history).await {
            Ok(reply) => {
                self.history.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                log::error!("session {}: turn failed: {}", self.id, e);
                Err(SessionError::TurnFailed(e.to_string()))
            }
        }
    }

    /// Number of completed user/assistant exchanges.
    pub fn exchanges(&self) -> usize {
        self.history
            .iter()
            .filter(|m| m.role == ChatRole::Assistant)
            .count()
    }
}

/// Concurrent registry of live sessions, keyed by id. Each session sits
/// behind its own lock so turns in different sessions never serialize on
/// each other.
pub struct SessionManager<L: LLM> {
    agent: Arc<AssistantAgent<L>>,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session<L>>>>>,
}

impl<L: LLM> SessionManager<L> {
    pub fn new(agent: AssistantAgent<L>) -> Self {
        Self {
            agent: Arc::new(agent),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create_session(&self) -> SessionId {
        let session = Session::new(self.agent.clone());
        let id = session.id();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        log::info!("session {} created", id);
        id
    }

    pub async fn get_session(
        &self,
        id: SessionId,
    ) -> Result<Arc<Mutex<Session<L>>>, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::SessionNotFound(id))
    }

    pub async fn end_session(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("session {} ended", id))
            .ok_or(SessionError::SessionNotFound(id))
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_test_utils::{MockLLM, ScriptedReply};

    fn manager_with(replies: Vec<ScriptedReply>) -> SessionManager<MockLLM> {
        let llm = Arc::new(MockLLM::new(replies));
        let agent = AssistantAgent::new("assistant", "You are helpful.", llm);
        SessionManager::new(agent)
    }

    #[tokio::test]
    async fn test_history_grows_two_per_exchange() {
        let manager = manager_with(vec![
            ScriptedReply::Text("First answer.".to_string()),
            ScriptedReply::Text("Second answer.".to_string()),
        ]);
        let id = manager.create_session().await;
        let session = manager.get_session(id).await.unwrap();
        let mut session = session.lock().await;

        session.handle_message("one").await.unwrap();
        assert_eq!(session.history().len(), 2);

        session.handle_message("two").await.unwrap();
        assert_eq!(session.history().len(), 4);
        assert_eq!(session.exchanges(), 2);

        assert_eq!(session.history()[0].role, ChatRole::User);
        assert_eq!(session.history()[1].role, ChatRole::Assistant);
        assert_eq!(session.history()[3].content, "Second answer.");
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_only_user_message() {
        let manager = manager_with(vec![
            ScriptedReply::Fail("boom".to_string()),
            ScriptedReply::Text("Recovered.".to_string()),
        ]);
        let id = manager.create_session().await;
        let session = manager.get_session(id).await.unwrap();
        let mut session = session.lock().await;

        let err = session.handle_message("one").await.unwrap_err();
        assert!(matches!(err, SessionError::TurnFailed(_)));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, ChatRole::User);

        // The next turn still works and sees the failed question.
        session.handle_message("two").await.unwrap();
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let manager = manager_with(vec![]);
        let id = manager.create_session().await;
        assert_eq!(manager.session_count().await, 1);

        assert!(manager.get_session(id).await.is_ok());
        manager.end_session(id).await.unwrap();
        assert_eq!(manager.session_count().await, 0);

        let err = manager.get_session(id).await.unwrap_err();
        assert!(matches!(err, SessionError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_session_end_fails() {
        let manager = manager_with(vec![]);
        let err = manager.end_session(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, SessionError::SessionNotFound(_)));
    }
}
