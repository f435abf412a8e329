//! Command-line interface for kks.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{
    normalize_legacy_flags, AttachArgs, CatArgs, Cli, Commands, CompletionsArgs, ContextArgs,
    EditArgs, EnvArgs, GetArgs, KillArgs, SendArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, CommandSpec};
