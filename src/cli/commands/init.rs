//! Init command implementation.
//!
//! The `kks init` command prints the bundled Kakoune definitions, meant to
//! be evaluated from kakrc.

use std::io::Write;

use crate::assets;
use crate::error::Result;
use crate::kak::KakClient;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
#[derive(Debug, Default)]
pub struct InitCommand;

impl InitCommand {
    /// Create a new init command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for InitCommand {
    fn execute(&self, _kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult> {
        out.write_all(assets::init_script()?.as_bytes())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kak::MockKak;

    #[test]
    fn prints_script_verbatim() {
        let kak = MockKak::new();
        let mut out = Vec::new();

        InitCommand::new().execute(&kak, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            assets::init_script().unwrap()
        );
        assert!(kak.calls().is_empty());
    }
}
