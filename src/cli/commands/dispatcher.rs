//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandSpec`] static descriptors, one per subcommand
//! - [`CommandDispatcher`] for resolving context and routing subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::Commands;
use crate::context::{Context, ContextFlags, EnvConfig, Requirements, ResolvedContext};
use crate::error::Result;
use crate::kak::KakClient;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `kak` - Client used to reach the Kakoune session
    /// * `out` - Destination for the command's standard output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, kak: &dyn KakClient, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Static description of a subcommand.
///
/// The aliases feed the clap definition in [`crate::cli::args`], and the
/// requirements are checked before the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub requires: Requirements,
}

pub const EDIT: CommandSpec = CommandSpec {
    name: "edit",
    aliases: &["e"],
    requires: Requirements::SESSION,
};

pub const ATTACH: CommandSpec = CommandSpec {
    name: "attach",
    aliases: &["a"],
    requires: Requirements::SESSION,
};

pub const SEND: CommandSpec = CommandSpec {
    name: "send",
    aliases: &["s"],
    requires: Requirements::SESSION,
};

pub const GET: CommandSpec = CommandSpec {
    name: "get",
    aliases: &[],
    requires: Requirements::SESSION,
};

pub const CAT: CommandSpec = CommandSpec {
    name: "cat",
    aliases: &[],
    requires: Requirements::SESSION_AND_BUFFER,
};

pub const LIST: CommandSpec = CommandSpec {
    name: "list",
    aliases: &["l", "ls"],
    requires: Requirements::NONE,
};

pub const KILL: CommandSpec = CommandSpec {
    name: "kill",
    aliases: &["k"],
    requires: Requirements::SESSION,
};

pub const ENV: CommandSpec = CommandSpec {
    name: "env",
    aliases: &[],
    requires: Requirements::SESSION,
};

pub const INIT: CommandSpec = CommandSpec {
    name: "init",
    aliases: &[],
    requires: Requirements::NONE,
};

pub const COMPLETIONS: CommandSpec = CommandSpec {
    name: "completions",
    aliases: &[],
    requires: Requirements::NONE,
};

impl Commands {
    /// The descriptor for this subcommand.
    pub fn spec(&self) -> &'static CommandSpec {
        match self {
            Self::Edit(_) => &EDIT,
            Self::Attach(_) => &ATTACH,
            Self::Send(_) => &SEND,
            Self::Get(_) => &GET,
            Self::Cat(_) => &CAT,
            Self::List => &LIST,
            Self::Kill(_) => &KILL,
            Self::Env(_) => &ENV,
            Self::Init => &INIT,
            Self::Completions(_) => &COMPLETIONS,
        }
    }

    /// The context overrides given on the command line, if this
    /// subcommand accepts any.
    pub fn context_flags(&self) -> Option<ContextFlags<'_>> {
        match self {
            Self::Edit(args) => Some(args.context.flags()),
            Self::Attach(args) => Some(args.context.flags()),
            Self::Send(args) => Some(args.context.flags()),
            Self::Get(args) => Some(args.context.flags()),
            Self::Cat(args) => Some(args.flags()),
            Self::Kill(args) => Some(args.context.flags()),
            Self::Env(args) => Some(args.context.flags()),
            Self::List | Self::Init | Self::Completions(_) => None,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: EnvConfig,
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for an invocation made from `cwd`.
    pub fn new(env: EnvConfig, cwd: PathBuf) -> Self {
        Self { env, cwd }
    }

    /// Resolve the context for `command` and check its requirements.
    ///
    /// Runs before anything is sent to `kak`, so a misconfigured
    /// invocation fails without side effects.
    pub fn resolve(&self, command: &Commands) -> Result<Context> {
        let spec = command.spec();
        match command.context_flags() {
            Some(flags) => {
                ResolvedContext::resolve(&self.env, flags, &self.cwd).require(spec.requires)
            }
            None => Ok(Context::default()),
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Resolves the context, then routes the CLI subcommand to the
    /// appropriate command implementation and executes it.
    pub fn dispatch(
        &self,
        command: &Commands,
        kak: &dyn KakClient,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let ctx = self.resolve(command)?;
        tracing::debug!(command = command.spec().name, ?ctx, "dispatching");

        match command {
            Commands::Edit(args) => {
                let cmd = super::edit::EditCommand::new(ctx, &self.cwd, &args.file);
                cmd.execute(kak, out)
            }
            Commands::Attach(_) => {
                let cmd = super::attach::AttachCommand::new(ctx);
                cmd.execute(kak, out)
            }
            Commands::Send(args) => {
                let cmd = super::send::SendCommand::new(ctx, &args.command);
                cmd.execute(kak, out)
            }
            Commands::Get(args) => {
                let cmd = super::get::GetCommand::new(ctx, &self.cwd, &args.query);
                cmd.execute(kak, out)
            }
            Commands::Cat(_) => {
                let cmd = super::cat::CatCommand::new(ctx);
                cmd.execute(kak, out)
            }
            Commands::List => {
                let cmd = super::list::ListCommand::new();
                cmd.execute(kak, out)
            }
            Commands::Kill(_) => {
                let cmd = super::kill::KillCommand::new(ctx);
                cmd.execute(kak, out)
            }
            Commands::Env(args) => {
                let cmd = super::env::EnvCommand::new(ctx, args.json);
                cmd.execute(kak, out)
            }
            Commands::Init => {
                let cmd = super::init::InitCommand::new();
                cmd.execute(kak, out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(kak, out)
            }
        }
    }
}
