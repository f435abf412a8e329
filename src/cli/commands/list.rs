//! List command implementation.
//!
//! The `kks list` command prints the running sessions as reported by
//! `kak -l`, unchanged.

use std::io::Write;

use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
#[derive(Debug, Default)]
pub struct ListCommand;

impl ListCommand {
    /// Create a new list command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListCommand {
    fn execute(&self, kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        let sessions = kak.list_sessions()?;
        out.write_all(sessions.as_bytes())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kak::{KakCall, MockKak};

    #[test]
    fn passes_output_through() {
        let kak = MockKak::new().with_sessions("work\nscratch\n");
        let mut out = Vec::new();

        ListCommand::new().execute(&kak, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "work\nscratch\n");
        assert_eq!(kak.calls(), vec![KakCall::ListSessions]);
    }

    #[test]
    fn no_sessions_prints_nothing() {
        let kak = MockKak::new();
        let mut out = Vec::new();
        ListCommand::new().execute(&kak, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn kak_failure_propagates() {
        let kak = MockKak::new().failing("boom");
        let mut out = Vec::new();
        assert!(ListCommand::new().execute(&kak, &mut out).is_err());
    }
}
