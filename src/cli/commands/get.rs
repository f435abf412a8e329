//! Get command implementation.
//!
//! The `kks get` command evaluates a query such as `%val{bufname}` in the
//! session and prints one value per line. Buffer lists are rewritten so
//! that each relative buffer name is a path from the caller's directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::{KksError, Result};
use crate::kak::{query, KakClient, SESSION_CWD_QUERY};
use crate::output::{self, relative_path};

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand {
    ctx: Context,
    cwd: PathBuf,
    query: String,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(ctx: Context, cwd: &Path, query: &str) -> Self {
        Self {
            ctx,
            cwd: cwd.to_path_buf(),
            query: query.to_string(),
        }
    }

    /// Evaluate the query and return the lines to print.
    pub fn lines(&self, kak: &dyn KakClient) -> Result<Vec<String>> {
        let values = query(kak, &self.ctx, &self.query)?;

        if !output::is_buflist_query(&self.query)
            || !values.iter().any(|name| output::is_relative_buffer(name))
        {
            return Ok(values);
        }

        let session_cwd = query(kak, &self.ctx, SESSION_CWD_QUERY)?
            .into_iter()
            .next()
            .ok_or_else(|| KksError::InvalidPath {
                path: PathBuf::new(),
                message: "session returned no working directory".to_string(),
            })?;
        let prefix = relative_path(&self.cwd, Path::new(&session_cwd))?;
        tracing::debug!(%session_cwd, prefix = %prefix.display(), "rewriting buffer list");

        Ok(output::prefix_buffers(&values, &prefix))
    }
}

impl Command for GetCommand {
    fn execute(&self, kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        let lines = self.lines(kak)?;
        writeln!(out, "{}", output::render_lines(&lines))?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kak::{KakCall, MockKak};

    fn run(kak: &MockKak, cwd: &str, query: &str) -> Result<String> {
        let mut out = Vec::new();
        GetCommand::new(Context::new("work", ""), Path::new(cwd), query).execute(kak, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_values_one_per_line() {
        let kak = MockKak::new().with_capture("'buf1.txt' 'buf2.txt'");
        assert_eq!(
            run(&kak, "/home/u/proj", "%val{bufname}").unwrap(),
            "buf1.txt\nbuf2.txt\n"
        );
        assert_eq!(kak.calls().len(), 1);
    }

    #[test]
    fn empty_result_prints_empty_line() {
        let kak = MockKak::new().with_capture("");
        assert_eq!(run(&kak, "/home/u/proj", "%opt{filetype}").unwrap(), "\n");
    }

    #[test]
    fn buflist_is_rewritten_relative_to_caller() {
        let kak = MockKak::new()
            .with_capture("'buf1.txt' 'buf2.txt' '*debug*'")
            .with_capture("'/home/u/proj/src'");

        assert_eq!(
            run(&kak, "/home/u/proj", "%val{buflist}").unwrap(),
            "src/buf1.txt\nsrc/buf2.txt\n*debug*\n"
        );

        let calls = kak.calls();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            KakCall::Capture { command, .. } => assert!(command.ends_with("%sh{pwd}")),
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn buflist_from_same_directory_is_unchanged() {
        let kak = MockKak::new()
            .with_capture("'a.txt'")
            .with_capture("'/home/u/proj'");
        assert_eq!(run(&kak, "/home/u/proj", "%val{buflist}").unwrap(), "a.txt\n");
    }

    #[test]
    fn buflist_of_scratch_buffers_skips_cwd_query() {
        let kak = MockKak::new().with_capture("'*scratch*' '*debug*'");
        assert_eq!(
            run(&kak, "/home/u/proj", "%val{buflist}").unwrap(),
            "*scratch*\n*debug*\n"
        );
        assert_eq!(kak.calls().len(), 1);
    }

    #[test]
    fn relative_session_cwd_is_an_error() {
        let kak = MockKak::new()
            .with_capture("'a.txt'")
            .with_capture("'not/absolute'");
        let err = run(&kak, "/home/u/proj", "%val{buflist}").unwrap_err();
        assert!(matches!(err, KksError::InvalidPath { .. }));
    }

    #[test]
    fn missing_session_cwd_is_an_error() {
        let kak = MockKak::new().with_capture("'a.txt'").with_capture("");
        assert!(run(&kak, "/home/u/proj", "%val{buflist}").is_err());
    }

    #[test]
    fn kak_failure_propagates() {
        let kak = MockKak::new().failing("session not found");
        let err = run(&kak, "/home/u/proj", "%val{session}").unwrap_err();
        assert!(matches!(err, KksError::KakFailed { .. }));
    }
}
