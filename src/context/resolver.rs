//! Context resolution.
//!
//! Resolves the target session using the priority chain:
//! 1. Explicit `-s` flag
//! 2. `KKS_SESSION`
//! 3. Git root directory name (when `KKS_USE_GITDIR_SESSIONS` is set)
//! 4. `KKS_DEFAULT_SESSION`
//!
//! The client follows the same chain without the derived steps, and the
//! buffer only ever comes from the `-b` flag.

use std::path::Path;

use super::env::EnvConfig;
use super::project::session_name_for;
use super::Context;
use crate::error::{KksError, Result};

/// How a context value was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    /// Explicitly set via a command-line flag.
    Flag,
    /// Read from a `KKS_*` environment variable.
    Environment,
    /// Derived from the git repository root.
    GitDir,
    /// Taken from `KKS_DEFAULT_SESSION`.
    Default,
    /// Nothing provided a value.
    Unset,
}

impl std::fmt::Display for ContextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "flag"),
            Self::Environment => write!(f, "environment"),
            Self::GitDir => write!(f, "git directory"),
            Self::Default => write!(f, "default session"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

/// Per-invocation flag values. `None` and `Some("")` both mean absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextFlags<'a> {
    pub session: Option<&'a str>,
    pub client: Option<&'a str>,
    pub buffer: Option<&'a str>,
}

/// Which context fields a command cannot run without.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    pub session: bool,
    pub client: bool,
    /// Satisfied by an explicit buffer or by a client, which carries its
    /// current buffer.
    pub buffer: bool,
}

impl Requirements {
    /// No context needed at all.
    pub const NONE: Self = Self {
        session: false,
        client: false,
        buffer: false,
    };

    /// A session is required, client and buffer are optional.
    pub const SESSION: Self = Self {
        session: true,
        client: false,
        buffer: false,
    };

    /// A session plus something to read a buffer from.
    pub const SESSION_AND_BUFFER: Self = Self {
        session: true,
        client: false,
        buffer: true,
    };
}

/// A resolved context with the origin of each value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    /// The merged context.
    pub context: Context,
    /// Where the session came from.
    pub session_source: ContextSource,
    /// Where the client came from.
    pub client_source: ContextSource,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ResolvedContext {
    /// Resolve the context for an invocation made from `cwd`.
    ///
    /// # Example
    ///
    /// ```
    /// use kks::context::{ContextFlags, ContextSource, EnvConfig, ResolvedContext};
    /// use std::path::Path;
    ///
    /// let env = EnvConfig {
    ///     session: "from-env".to_string(),
    ///     ..EnvConfig::default()
    /// };
    /// let flags = ContextFlags {
    ///     session: Some("from-flag"),
    ///     ..ContextFlags::default()
    /// };
    /// let resolved = ResolvedContext::resolve(&env, flags, Path::new("/"));
    /// assert_eq!(resolved.context.session, "from-flag");
    /// assert_eq!(resolved.session_source, ContextSource::Flag);
    /// ```
    pub fn resolve(env: &EnvConfig, flags: ContextFlags<'_>, cwd: &Path) -> Self {
        Self::resolve_with_project(env, flags, || session_name_for(cwd))
    }

    /// Resolve with a custom project lookup (for testing).
    ///
    /// The lookup only runs when git-directory sessions are enabled and
    /// neither a flag nor the environment named a session.
    pub fn resolve_with_project<F>(env: &EnvConfig, flags: ContextFlags<'_>, project: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        let (session, session_source) = if let Some(s) = non_empty(flags.session) {
            (s.to_string(), ContextSource::Flag)
        } else if !env.session.is_empty() {
            (env.session.clone(), ContextSource::Environment)
        } else if let Some(s) = env
            .use_git_dir_sessions
            .then(project)
            .flatten()
            .filter(|s| !s.is_empty())
        {
            (s, ContextSource::GitDir)
        } else if !env.default_session.is_empty() {
            (env.default_session.clone(), ContextSource::Default)
        } else {
            (String::new(), ContextSource::Unset)
        };

        let (client, client_source) = if let Some(c) = non_empty(flags.client) {
            (c.to_string(), ContextSource::Flag)
        } else if !env.client.is_empty() {
            (env.client.clone(), ContextSource::Environment)
        } else {
            (String::new(), ContextSource::Unset)
        };

        let buffer = non_empty(flags.buffer).unwrap_or_default().to_string();

        tracing::debug!(
            %session,
            %session_source,
            %client,
            %client_source,
            %buffer,
            "resolved context"
        );

        Self {
            context: Context {
                session,
                client,
                buffer,
            },
            session_source,
            client_source,
        }
    }

    /// Check the context against a command's requirements.
    ///
    /// # Errors
    ///
    /// Returns `NoSession`, `NoClient` or `NoBuffer` for the first
    /// requirement that is not met.
    pub fn require(self, requirements: Requirements) -> Result<Context> {
        let ctx = self.context;
        if requirements.session && !ctx.has_session() {
            return Err(KksError::NoSession);
        }
        if requirements.client && !ctx.has_client() {
            return Err(KksError::NoClient);
        }
        if requirements.buffer && !ctx.has_buffer() && !ctx.has_client() {
            return Err(KksError::NoBuffer);
        }
        Ok(ctx)
    }
}
