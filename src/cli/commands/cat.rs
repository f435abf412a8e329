//! Cat command implementation.
//!
//! The `kks cat` command prints the content of a buffer. Without `-b` it
//! prints the buffer shown in the client.

use std::io::Write;
use std::path::Path;

use crate::context::Context;
use crate::error::Result;
use crate::kak::{quote, KakClient};

use super::dispatcher::{Command, CommandResult};

/// The cat command implementation.
pub struct CatCommand {
    ctx: Context,
}

/// Write the current buffer into `fifo` without replacing the pipe.
fn write_to(fifo: &Path) -> String {
    format!(
        "write -force -method overwrite {}",
        quote(&fifo.to_string_lossy())
    )
}

impl CatCommand {
    /// Create a new cat command.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// The context and command builder used to dump the buffer.
    fn target(&self) -> Context {
        if self.ctx.has_buffer() {
            // -buffer and -client cannot be combined.
            self.ctx.without_client()
        } else {
            self.ctx.clone()
        }
    }
}

impl Command for CatCommand {
    fn execute(&self, kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        let ctx = self.target();
        let content = if ctx.has_buffer() {
            let buffer = quote(&ctx.buffer);
            kak.capture(&ctx, &|fifo| {
                format!(
                    "evaluate-commands -buffer {} {}",
                    buffer,
                    quote(&write_to(fifo))
                )
            })?
        } else {
            kak.capture(&ctx, &write_to)?
        };

        out.write_all(content.as_bytes())?;
        Ok(CommandResult::success())
    }
}
