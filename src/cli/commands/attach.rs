//! Attach command implementation.
//!
//! The `kks attach` command starts a new interactive client on the session.

use std::io::Write;

use crate::context::Context;
use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};

/// The attach command implementation.
pub struct AttachCommand {
    ctx: Context,
}

impl AttachCommand {
    /// Create a new attach command.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl Command for AttachCommand {
    fn execute(&self, kak: &dyn KakClient, _out: &mut dyn Write) -> Result<CommandResult> {
        kak.connect(&self.ctx.session, None)?;
        Ok(CommandResult::success())
    }
}
