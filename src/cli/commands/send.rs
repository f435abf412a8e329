//! Send command implementation.
//!
//! The `kks send` command joins its words with single spaces and sends the
//! result to the session, in the client's context when one is set.

use std::io::Write;

use crate::context::Context;
use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};

/// The send command implementation.
pub struct SendCommand {
    ctx: Context,
    command: String,
}

impl SendCommand {
    /// Create a new send command from the words given on the command line.
    pub fn new(ctx: Context, words: &[String]) -> Self {
        Self {
            ctx,
            command: words.join(" "),
        }
    }

    /// The command string that will be sent.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Command for SendCommand {
    fn execute(&self, kak: &dyn KakClient, _out: &mut dyn Write) -> Result<CommandResult> {
        kak.send(&self.ctx, &self.command)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kak::{KakCall, MockKak};

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joins_words_with_single_spaces() {
        let cmd = SendCommand::new(Context::new("work", ""), &words(&["a", "b", "c"]));
        assert_eq!(cmd.command(), "a b c");
    }

    #[test]
    fn keeps_whitespace_inside_words() {
        let cmd = SendCommand::new(
            Context::new("work", ""),
            &words(&["echo", "two  spaces", "\ttab"]),
        );
        assert_eq!(cmd.command(), "echo two  spaces \ttab");
    }

    #[test]
    fn sends_to_resolved_client() {
        let kak = MockKak::new();
        let ctx = Context::new("work", "main");
        let mut out = Vec::new();

        SendCommand::new(ctx.clone(), &words(&["write-all"]))
            .execute(&kak, &mut out)
            .unwrap();

        assert_eq!(
            kak.calls(),
            vec![KakCall::Send {
                ctx,
                command: "write-all".to_string(),
            }]
        );
    }
}
