pub mod agent;
mod error;
pub mod session;
pub mod tool;

pub use error::{AgentError, SessionError};
