//! `kak` process execution.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::fifo::Fifo;
use super::{capture_result, guard_capture, scoped_command, KakClient};
use crate::context::Context;
use crate::error::{KksError, Result};

/// Runs the real `kak` binary.
///
/// Every call spawns exactly one process and blocks until it exits.
#[derive(Debug, Clone)]
pub struct KakProcess {
    binary: String,
}

impl KakProcess {
    /// Create a runner for `binary` (a name looked up on `PATH`, or a path).
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self) -> Command {
        Command::new(&self.binary)
    }

    fn spawn_error(&self, source: std::io::Error) -> KksError {
        KksError::KakSpawn {
            binary: self.binary.clone(),
            source,
        }
    }

    fn check(&self, description: String, output: Output) -> Result<Output> {
        if output.status.success() {
            Ok(output)
        } else {
            Err(KksError::KakFailed {
                command: description,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl KakClient for KakProcess {
    fn connect(&self, session: &str, file: Option<&Path>) -> Result<()> {
        let mut cmd = self.command();
        cmd.arg("-c").arg(session);
        if let Some(file) = file {
            cmd.arg(file);
        }
        tracing::debug!(binary = %self.binary, session, file = ?file, "connecting client");

        let status = cmd.status().map_err(|e| self.spawn_error(e))?;
        if status.success() {
            Ok(())
        } else {
            Err(KksError::KakFailed {
                command: format!("{} -c {}", self.binary, session),
                code: status.code(),
                stderr: String::new(),
            })
        }
    }

    fn send(&self, ctx: &Context, command: &str) -> Result<()> {
        let input = scoped_command(ctx, command);
        tracing::debug!(binary = %self.binary, session = %ctx.session, %input, "sending command");

        let mut child = self
            .command()
            .arg("-p")
            .arg(&ctx.session)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // kak may exit before reading stdin, its status and stderr say why.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(input.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        self.check(format!("{} -p {}", self.binary, ctx.session), output)?;
        written?;
        Ok(())
    }

    fn capture(&self, ctx: &Context, build: &dyn Fn(&Path) -> String) -> Result<String> {
        let fifo = Fifo::create()?;
        // The client scope goes inside the guard so an unknown client is
        // reported through the FIFO as well.
        let command = guard_capture(fifo.path(), &scoped_command(ctx, &build(fifo.path())));
        self.send(&ctx.without_client(), &command)?;

        // The session opens the pipe for writing once it evaluates the
        // command, so this blocks until the result is available.
        let bytes = fifo.read_to_end()?;
        capture_result(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn list_sessions(&self) -> Result<String> {
        tracing::debug!(binary = %self.binary, "listing sessions");
        let output = self
            .command()
            .arg("-l")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let output = self.check(format!("{} -l", self.binary), output)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
