//! Session and client context.
//!
//! Determines which Kakoune session, client and buffer a command targets.
//! The session priority chain is:
//!
//! 1. Explicit `-s` flag
//! 2. `KKS_SESSION`
//! 3. Git root directory name, when `KKS_USE_GITDIR_SESSIONS` is set
//! 4. `KKS_DEFAULT_SESSION`
//!
//! Resolution always happens before any `kak` process is started.

pub mod env;
pub mod project;
pub mod resolver;

use serde::Serialize;

pub use env::EnvConfig;
pub use resolver::{ContextFlags, ContextSource, Requirements, ResolvedContext};

/// The target of a remote operation.
///
/// Empty strings mean "not set". Built fresh for every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub session: String,
    pub client: String,
    #[serde(skip)]
    pub buffer: String,
}

impl Context {
    /// Create a context for a session and client.
    pub fn new(session: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            client: client.into(),
            buffer: String::new(),
        }
    }

    pub fn has_session(&self) -> bool {
        !self.session.is_empty()
    }

    pub fn has_client(&self) -> bool {
        !self.client.is_empty()
    }

    pub fn has_buffer(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// The same session with no client, for commands that must not be
    /// routed through a client.
    pub fn without_client(&self) -> Self {
        Self {
            session: self.session.clone(),
            client: String::new(),
            buffer: self.buffer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_session_and_client_only() {
        let mut ctx = Context::new("work", "main");
        ctx.buffer = "notes.md".to_string();
        let json: serde_json::Value = serde_json::to_value(&ctx).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["session"], "work");
        assert_eq!(obj["client"], "main");
    }

    #[test]
    fn without_client_keeps_session() {
        let ctx = Context::new("work", "main").without_client();
        assert_eq!(ctx.session, "work");
        assert!(!ctx.has_client());
    }
}
