//! Environment variable reader.
//!
//! Reads the `KKS_*` variables into a plain [`EnvConfig`] value. Nothing is
//! validated here; missing variables become empty strings or `false`.

use std::env::VarError;

/// Session name override.
pub const SESSION_VAR: &str = "KKS_SESSION";
/// Client name override.
pub const CLIENT_VAR: &str = "KKS_CLIENT";
/// Session used when nothing else resolves.
pub const DEFAULT_SESSION_VAR: &str = "KKS_DEFAULT_SESSION";
/// Presence-only toggle for git-directory session names.
pub const USE_GITDIR_SESSIONS_VAR: &str = "KKS_USE_GITDIR_SESSIONS";
/// Path or name of the Kakoune binary.
pub const KAK_BINARY_VAR: &str = "KKS_KAK";

/// Binary used when `KKS_KAK` is unset.
pub const DEFAULT_KAK_BINARY: &str = "kak";

/// Environment-derived defaults, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Value of `KKS_SESSION`.
    pub session: String,
    /// Value of `KKS_CLIENT`.
    pub client: String,
    /// Value of `KKS_DEFAULT_SESSION`.
    pub default_session: String,
    /// Whether `KKS_USE_GITDIR_SESSIONS` is present.
    pub use_git_dir_sessions: bool,
    /// Kakoune binary to invoke.
    pub kak_binary: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            session: String::new(),
            client: String::new(),
            default_session: String::new(),
            use_git_dir_sessions: false,
            kak_binary: DEFAULT_KAK_BINARY.to_string(),
        }
    }
}

impl EnvConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Read with a custom env var lookup (for testing).
    ///
    /// # Example
    ///
    /// ```
    /// use kks::context::EnvConfig;
    ///
    /// let env = EnvConfig::from_lookup(|key| match key {
    ///     "KKS_SESSION" => Ok("work".to_string()),
    ///     _ => Err(std::env::VarError::NotPresent),
    /// });
    /// assert_eq!(env.session, "work");
    /// assert!(env.client.is_empty());
    /// assert_eq!(env.kak_binary, "kak");
    /// ```
    pub fn from_lookup<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let read = |key: &str| env_fn(key).unwrap_or_default();

        // Presence is enough, even an empty or non-unicode value counts.
        let use_git_dir_sessions = !matches!(
            env_fn(USE_GITDIR_SESSIONS_VAR),
            Err(VarError::NotPresent)
        );

        let kak_binary = match read(KAK_BINARY_VAR) {
            bin if bin.is_empty() => DEFAULT_KAK_BINARY.to_string(),
            bin => bin,
        };

        Self {
            session: read(SESSION_VAR),
            client: read(CLIENT_VAR),
            default_session: read(DEFAULT_SESSION_VAR),
            use_git_dir_sessions,
            kak_binary,
        }
    }
}
