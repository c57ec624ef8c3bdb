//! Error types for register operations.
//!
//! Every fallible register operation returns [`RegisterError`]. None of them
//! leave a register half-written: a failure means the operation did not
//! happen.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::id::RegisterId;
use crate::register::Kind;

/// Shorthand for results of register operations.
pub type Result<T> = std::result::Result<T, RegisterError>;

/// Why a register operation failed.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Growing a slot array or a slot buffer failed.
    #[error("out of memory growing register storage")]
    Alloc(#[from] TryReserveError),

    /// The register kind does not support the requested operation
    /// (e.g. a direct write into the clipboard register).
    #[error("{op} is not supported by {kind} registers")]
    Unsupported { kind: Kind, op: &'static str },

    /// Append mode was requested on a register that is not a plain text
    /// register.
    #[error("cannot append to {kind} register")]
    AppendUnsupported { kind: Kind },

    /// The size of the requested text range cannot be represented.
    #[error("text range is out of bounds")]
    RangeOverflow,

    /// The clipboard helper failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// The identifier does not refer to any register storage.
    #[error("invalid register {0:?}")]
    InvalidRegister(RegisterId),
}

/// Failure of the external clipboard helper.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The helper program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Talking to the helper over its pipes failed.
    #[error("clipboard I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The helper ran but exited unsuccessfully. `code` is `None` when it
    /// was killed by a signal; `diagnostic` is whatever it wrote to stderr.
    #[error("Command failed {diagnostic}")]
    Failed {
        code: Option<i32>,
        diagnostic: String,
    },
}

impl ClipboardError {
    /// Text suitable for the status line.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Failed { diagnostic, .. } => diagnostic.clone(),
            other => other.to_string(),
        }
    }
}
