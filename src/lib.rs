//! kks - a handy Kakoune companion.
//!
//! kks drives running Kakoune sessions from the shell: it opens files,
//! sends commands, evaluates `%val{..}`-style queries and lists or kills
//! sessions, all by invoking the `kak` binary.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Session/client resolution from flags and environment
//! - [`kak`] - Talking to sessions through the `kak` binary
//! - [`output`] - Rendering of query results
//! - [`assets`] - Embedded Kakoune integration script
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use kks::context::{ContextFlags, EnvConfig, Requirements, ResolvedContext};
//! use std::path::Path;
//!
//! let env = EnvConfig {
//!     session: "work".to_string(),
//!     ..EnvConfig::default()
//! };
//! let ctx = ResolvedContext::resolve(&env, ContextFlags::default(), Path::new("/"))
//!     .require(Requirements::SESSION)
//!     .unwrap();
//! assert_eq!(ctx.session, "work");
//! ```

pub mod assets;
pub mod cli;
pub mod context;
pub mod error;
pub mod kak;
pub mod output;

pub use error::{KksError, Result};
