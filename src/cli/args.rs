//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::cli::commands::dispatcher;
use crate::context::ContextFlags;

const AFTER_HELP: &str = "\
ENVIRONMENT VARIABLES:
  KKS_SESSION              Kakoune session
  KKS_CLIENT               Kakoune client
  KKS_DEFAULT_SESSION      Session used when nothing else resolves
  KKS_USE_GITDIR_SESSIONS  Name sessions after the git repository root
  KKS_KAK                  Kakoune binary (default: kak)";

/// Handy Kakoune companion.
#[derive(Debug, Parser)]
#[command(name = "kks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Session and client overrides shared by every session command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContextArgs {
    /// Kakoune session
    #[arg(short, long, value_name = "SESSION")]
    pub session: Option<String>,

    /// Kakoune client
    #[arg(short, long, value_name = "CLIENT")]
    pub client: Option<String>,
}

impl ContextArgs {
    /// Borrow the overrides as resolver flags.
    pub fn flags(&self) -> ContextFlags<'_> {
        ContextFlags {
            session: self.session.as_deref(),
            client: self.client.as_deref(),
            buffer: None,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Edit file
    #[command(visible_aliases = dispatcher::EDIT.aliases.iter().copied())]
    Edit(EditArgs),

    /// Attach to session
    #[command(visible_aliases = dispatcher::ATTACH.aliases.iter().copied())]
    Attach(AttachArgs),

    /// Send command
    #[command(visible_aliases = dispatcher::SEND.aliases.iter().copied())]
    Send(SendArgs),

    /// Get %val{..}, %opt{..} and friends
    Get(GetArgs),

    /// Print buffer content
    Cat(CatArgs),

    /// List sessions and clients
    #[command(visible_aliases = dispatcher::LIST.aliases.iter().copied())]
    List,

    /// Kill session
    #[command(visible_aliases = dispatcher::KILL.aliases.iter().copied())]
    Kill(KillArgs),

    /// Print env
    Env(EnvArgs),

    /// Print Kakoune definitions
    Init,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// File to open
    pub file: String,
}

/// Arguments for the `attach` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AttachArgs {
    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `send` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SendArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Command to send, words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Expression to evaluate, e.g. '%val{buflist}'
    pub query: String,
}

/// Arguments for the `cat` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Buffer to print (default: the client's current buffer)
    #[arg(short, long, value_name = "BUFFER")]
    pub buffer: Option<String>,
}

impl CatArgs {
    pub fn flags(&self) -> ContextFlags<'_> {
        ContextFlags {
            buffer: self.buffer.as_deref(),
            ..self.context.flags()
        }
    }
}

/// Arguments for the `kill` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct KillArgs {
    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Rewrite single-dash long flags accepted by older releases.
///
/// Only `env -json` exists; it becomes `env --json`. Arguments of other
/// subcommands are never touched, so `kks send echo -json` is sent as is.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let subcommand = args
        .iter()
        .skip(1)
        .position(|arg| !arg.to_string_lossy().starts_with('-'))
        .map(|pos| pos + 1);

    if let Some(index) = subcommand {
        if args[index].as_os_str() == "env" {
            for arg in args.iter_mut().skip(index + 1) {
                if arg.as_os_str() == "-json" {
                    *arg = OsString::from("--json");
                }
            }
        }
    }
    args
}
