//! Edit command implementation.
//!
//! The `kks edit` command opens a file in the session. With a client in
//! context the file opens in that client, otherwise a new client is started.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::Result;
use crate::kak::{quote, KakClient};

use super::dispatcher::{Command, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    ctx: Context,
    file: PathBuf,
}

impl EditCommand {
    /// Create a new edit command.
    ///
    /// A relative `file` is resolved against `cwd`, since the session may
    /// run from another directory.
    pub fn new(ctx: Context, cwd: &Path, file: &str) -> Self {
        Self {
            ctx,
            file: cwd.join(file),
        }
    }

    /// The path that will be opened.
    pub fn file(&self) -> &Path {
        &self.file
    }
}

impl Command for EditCommand {
    fn execute(&self, kak: &dyn KakClient, _out: &mut dyn Write) -> Result<CommandResult> {
        if self.ctx.has_client() {
            let command = format!("edit -existing {}", quote(&self.file.to_string_lossy()));
            kak.send(&self.ctx, &command)?;
        } else {
            kak.connect(&self.ctx.session, Some(&self.file))?;
        }
        Ok(CommandResult::success())
    }
}
