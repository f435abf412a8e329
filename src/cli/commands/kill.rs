//! Kill command implementation.
//!
//! The `kks kill` command sends `kill` to the session.

use std::io::Write;

use crate::context::Context;
use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};
use super::send::SendCommand;

/// Command that terminates a session.
pub const KILL_COMMAND: &str = "kill";

/// The kill command implementation.
pub struct KillCommand {
    send: SendCommand,
}

impl KillCommand {
    /// Create a new kill command.
    pub fn new(ctx: Context) -> Self {
        Self {
            send: SendCommand::new(ctx, &[KILL_COMMAND.to_string()]),
        }
    }
}

impl Command for KillCommand {
    fn execute(&self, kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        self.send.execute(kak, out)
    }
}
