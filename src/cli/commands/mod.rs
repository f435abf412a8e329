//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves the
//! session/client context and routes CLI subcommands to their
//! implementations. This allows:
//! - Context resolution and validation before any `kak` process runs
//! - Commands that only see an explicit [`Context`](crate::context::Context)
//! - Testing every command against [`MockKak`](crate::kak::MockKak)

pub mod attach;
pub mod cat;
pub mod completions;
pub mod dispatcher;
pub mod edit;
pub mod env;
pub mod get;
pub mod init;
pub mod kill;
pub mod list;
pub mod send;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, CommandSpec};
