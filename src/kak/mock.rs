//! Mock `kak` implementation for testing.
//!
//! `MockKak` implements [`KakClient`] and records every call for later
//! assertion. Capture results are queued ahead of time.
//!
//! # Example
//!
//! ```
//! use kks::context::Context;
//! use kks::kak::{KakCall, KakClient, MockKak};
//!
//! let kak = MockKak::new();
//! kak.send(&Context::new("work", ""), "write").unwrap();
//!
//! assert_eq!(
//!     kak.calls(),
//!     vec![KakCall::Send {
//!         ctx: Context::new("work", ""),
//!         command: "write".to_string(),
//!     }]
//! );
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::KakClient;
use crate::context::Context;
use crate::error::{KksError, Result};

/// FIFO path handed to capture builders.
pub const MOCK_FIFO: &str = "/tmp/kks-mock/fifo";

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KakCall {
    Connect {
        session: String,
        file: Option<PathBuf>,
    },
    Send {
        ctx: Context,
        command: String,
    },
    Capture {
        ctx: Context,
        command: String,
    },
    ListSessions,
}

/// Mock `kak` for testing.
#[derive(Debug, Default)]
pub struct MockKak {
    calls: RefCell<Vec<KakCall>>,
    captures: RefCell<VecDeque<String>>,
    sessions: String,
    failure: Option<String>,
}

impl MockKak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the content returned by the next `capture` call.
    ///
    /// Once the queue is empty, captures return an empty string.
    pub fn with_capture(self, output: &str) -> Self {
        self.captures.borrow_mut().push_back(output.to_string());
        self
    }

    /// Set the `kak -l` output.
    pub fn with_sessions(mut self, output: &str) -> Self {
        self.sessions = output.to_string();
        self
    }

    /// Make every call fail as if `kak` exited with status 1.
    pub fn failing(mut self, stderr: &str) -> Self {
        self.failure = Some(stderr.to_string());
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<KakCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: KakCall) -> Result<()> {
        let command = format!("{:?}", call);
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(stderr) => Err(KksError::KakFailed {
                command,
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl KakClient for MockKak {
    fn connect(&self, session: &str, file: Option<&Path>) -> Result<()> {
        self.record(KakCall::Connect {
            session: session.to_string(),
            file: file.map(Path::to_path_buf),
        })
    }

    fn send(&self, ctx: &Context, command: &str) -> Result<()> {
        self.record(KakCall::Send {
            ctx: ctx.clone(),
            command: command.to_string(),
        })
    }

    fn capture(&self, ctx: &Context, build: &dyn Fn(&Path) -> String) -> Result<String> {
        self.record(KakCall::Capture {
            ctx: ctx.clone(),
            command: build(Path::new(MOCK_FIFO)),
        })?;
        Ok(self.captures.borrow_mut().pop_front().unwrap_or_default())
    }

    fn list_sessions(&self) -> Result<String> {
        self.record(KakCall::ListSessions)?;
        Ok(self.sessions.clone())
    }
}
