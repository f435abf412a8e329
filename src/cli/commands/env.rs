//! Env command implementation.
//!
//! The `kks env` command prints the resolved context, as `key: value`
//! lines or as a JSON object.

use std::io::Write;

use crate::context::Context;
use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};

/// The env command implementation.
pub struct EnvCommand {
    ctx: Context,
    json: bool,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(ctx: Context, json: bool) -> Self {
        Self { ctx, json }
    }
}

impl Command for EnvCommand {
    fn execute(&self, _kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        if self.json {
            let json = serde_json::to_string_pretty(&self.ctx)?;
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "session: {}", self.ctx.session)?;
            writeln!(out, "client: {}", self.ctx.client)?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kak::MockKak;

    fn run(ctx: Context, json: bool) -> String {
        let kak = MockKak::new();
        let mut out = Vec::new();
        EnvCommand::new(ctx, json).execute(&kak, &mut out).unwrap();
        assert!(kak.calls().is_empty());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output() {
        assert_eq!(
            run(Context::new("work", "main"), false),
            "session: work\nclient: main\n"
        );
    }

    #[test]
    fn plain_output_with_empty_client() {
        assert_eq!(run(Context::new("work", ""), false), "session: work\nclient: \n");
    }

    #[test]
    fn json_output_has_exactly_session_and_client() {
        let output = run(Context::new("work", "main"), true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["session"], "work");
        assert_eq!(obj["client"], "main");
    }

    #[test]
    fn json_output_is_indented() {
        let output = run(Context::new("work", ""), true);
        assert_eq!(output, "{\n  \"session\": \"work\",\n  \"client\": \"\"\n}\n");
    }
}
