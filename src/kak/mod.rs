//! Remote control of Kakoune sessions through the `kak` binary.
//!
//! This module provides:
//! - [`KakClient`] trait, the seam between commands and the `kak` process
//! - [`KakProcess`] which spawns the real binary
//! - [`MockKak`] which records calls for tests
//! - helpers to build commands and evaluate queries on top of the trait

pub mod fifo;
pub mod mock;
pub mod process;
pub mod quoting;

use std::path::Path;

use crate::context::Context;
use crate::error::{KksError, Result};

pub use fifo::Fifo;
pub use mock::{KakCall, MockKak};
pub use process::KakProcess;
pub use quoting::{parse_quoted, quote};

/// Query that returns the session's working directory.
///
/// Relies on the session's own `%sh{}` expansion.
pub const SESSION_CWD_QUERY: &str = "%sh{pwd}";

/// Operations kks performs against a Kakoune session.
///
/// This trait allows mocking `kak` in tests.
pub trait KakClient {
    /// Start an interactive client on `session`, optionally opening `file`.
    fn connect(&self, session: &str, file: Option<&Path>) -> Result<()>;

    /// Send `command` for execution, in the context's client when one is set.
    fn send(&self, ctx: &Context, command: &str) -> Result<()>;

    /// Send the command built by `build` from a FIFO path and return what
    /// the session writes into that FIFO.
    fn capture(&self, ctx: &Context, build: &dyn Fn(&Path) -> String) -> Result<String>;

    /// Raw `kak -l` output.
    fn list_sessions(&self) -> Result<String>;
}

/// Wrap `command` so that it runs in the context's client.
///
/// Without a client the command is returned unchanged and runs in the
/// session's own context.
///
/// # Example
///
/// ```
/// use kks::context::Context;
/// use kks::kak::scoped_command;
///
/// let ctx = Context::new("work", "main");
/// assert_eq!(
///     scoped_command(&ctx, "echo hi"),
///     "evaluate-commands -client 'main' 'echo hi'"
/// );
/// ```
pub fn scoped_command(ctx: &Context, command: &str) -> String {
    if ctx.has_client() {
        format!(
            "evaluate-commands -client {} {}",
            quote(&ctx.client),
            quote(command)
        )
    } else {
        command.to_string()
    }
}

/// The `echo` command that writes `query` into `fifo`.
pub fn echo_to_file(fifo: &Path, query: &str) -> String {
    format!(
        "echo -quoting kakoune -to-file {} {}",
        quote(&fifo.to_string_lossy()),
        query
    )
}

/// What a failed capture writes into the FIFO ahead of the error text.
pub const CAPTURE_ERROR_PREFIX: &str = "kks-error: ";

/// Wrap a capture command so that the FIFO is written even when it fails.
///
/// A command the session rejects never opens the FIFO on its own, so the
/// `catch` branch reports `%val{error}` through it instead.
///
/// # Example
///
/// ```
/// use kks::kak::guard_capture;
/// use std::path::Path;
///
/// assert_eq!(
///     guard_capture(Path::new("/tmp/f"), "echo -to-file '/tmp/f' hi"),
///     "try 'echo -to-file ''/tmp/f'' hi' \
///      catch 'echo -quoting raw -to-file ''/tmp/f'' \"kks-error: %val{error}\"'"
/// );
/// ```
pub fn guard_capture(fifo: &Path, command: &str) -> String {
    let report = format!(
        "echo -quoting raw -to-file {} \"{}%val{{error}}\"",
        quote(&fifo.to_string_lossy()),
        CAPTURE_ERROR_PREFIX
    );
    format!("try {} catch {}", quote(command), quote(&report))
}

/// Map what the session wrote into the FIFO to a result.
pub fn capture_result(output: String) -> Result<String> {
    match output.strip_prefix(CAPTURE_ERROR_PREFIX) {
        Some(message) => Err(KksError::SessionFailed {
            message: message.trim_end().to_string(),
        }),
        None => Ok(output),
    }
}

/// Evaluate `query` in the session and return its values.
///
/// The query is passed through as written, so `%val{buflist}`,
/// `%opt{filetype}` and friends all work.
pub fn query(kak: &dyn KakClient, ctx: &Context, query: &str) -> Result<Vec<String>> {
    let output = kak.capture(ctx, &|fifo| echo_to_file(fifo, query))?;
    Ok(parse_quoted(&output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_command_without_client_is_verbatim() {
        let ctx = Context::new("work", "");
        assert_eq!(scoped_command(&ctx, "write; quit"), "write; quit");
    }

    #[test]
    fn scoped_command_quotes_embedded_quotes() {
        let ctx = Context::new("work", "main");
        assert_eq!(
            scoped_command(&ctx, "echo 'hi'"),
            "evaluate-commands -client 'main' 'echo ''hi'''"
        );
    }

    #[test]
    fn echo_to_file_keeps_query_verbatim() {
        let cmd = echo_to_file(Path::new("/tmp/kks-x/fifo"), "%val{buflist}");
        assert_eq!(
            cmd,
            "echo -quoting kakoune -to-file '/tmp/kks-x/fifo' %val{buflist}"
        );
    }

    #[test]
    fn guard_reports_errors_through_the_fifo() {
        let guarded = guard_capture(Path::new("/tmp/kks-x/fifo"), "echo %val{typo}");
        assert!(guarded.starts_with("try 'echo %val{typo}' catch "));
        assert!(guarded.contains("-to-file ''/tmp/kks-x/fifo''"));
        assert!(guarded.ends_with("\"kks-error: %val{error}\"'"));
    }

    #[test]
    fn capture_result_maps_error_prefix() {
        let err = capture_result("kks-error: no such variable: typo\n".to_string()).unwrap_err();
        match err {
            KksError::SessionFailed { message } => assert_eq!(message, "no such variable: typo"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(capture_result("'a' 'b'".to_string()).unwrap(), "'a' 'b'");
    }

    #[test]
    fn query_parses_captured_output() {
        let kak = MockKak::new().with_capture("'buf1.txt' 'buf2.txt'");
        let ctx = Context::new("work", "");
        let values = query(&kak, &ctx, "%val{buflist}").unwrap();
        assert_eq!(values, vec!["buf1.txt", "buf2.txt"]);

        let calls = kak.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            KakCall::Capture { command, .. } => assert!(command.ends_with("%val{buflist}")),
            other => panic!("unexpected call: {:?}", other),
        }
    }
}
