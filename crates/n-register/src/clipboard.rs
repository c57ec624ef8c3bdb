//! Clipboard bridge — system clipboard access through a helper program.
//!
//! The `*` register has no storage of its own. Every read runs the helper
//! with `--paste` and captures its stdout; every write runs it with
//! `--copy` and streams the yanked range into its stdin while its stderr is
//! drained on a separate thread, so a chatty helper cannot stall the copy.
//! Both calls block until the helper exits, with no timeout: a hung helper
//! hangs the caller.
//!
//! ```text
//!   read  "*p     helper --paste   ──stdout──▶ register slot
//!   write "*y     document range   ──stdin───▶ helper --copy
//! ```
//!
//! Exit status 0 means success. Anything else is a [`ClipboardError::Failed`]
//! carrying the helper's stderr as the diagnostic.
//!
//! [`MemoryClipboard`] keeps the clipboard in-process, for headless sessions
//! and tests.

use std::cell::RefCell;
use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use log::{debug, warn};

use crate::config::RegisterConfig;
use crate::error::ClipboardError;
use crate::text::{ByteRange, TextSource};

/// Mode flag for reading the clipboard.
const PASTE: &str = "--paste";

/// Mode flag for writing the clipboard.
const COPY: &str = "--copy";

/// Access to a system clipboard.
pub trait Clipboard {
    /// Append the clipboard content to `out`.
    ///
    /// On failure `out` still holds whatever was captured before the helper
    /// gave up (possibly nothing).
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard could not be read.
    fn paste(&self, out: &mut Vec<u8>) -> Result<(), ClipboardError>;

    /// Replace the clipboard content with the bytes of `range` in `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard could not be written.
    fn copy(&self, text: &dyn TextSource, range: ByteRange) -> Result<(), ClipboardError>;
}

// ---------------------------------------------------------------------------
// CommandClipboard
// ---------------------------------------------------------------------------

/// Clipboard backed by an external helper program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Run `program` with `args`, followed by the mode flag.
    #[must_use]
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The helper configured in `config`.
    #[must_use]
    pub fn from_config(config: &RegisterConfig) -> Self {
        Self::new(config.clipboard.clone(), config.clipboard_args.iter().cloned())
    }

    /// The helper program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, mode: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(mode);
        cmd
    }

    fn spawn_error(&self, source: io::Error) -> ClipboardError {
        ClipboardError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Clipboard for CommandClipboard {
    fn paste(&self, out: &mut Vec<u8>) -> Result<(), ClipboardError> {
        debug!("clipboard: {} {PASTE}", self.program);
        let output = self
            .command(PASTE)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;
        out.extend_from_slice(&output.stdout);
        check_exit(output.status, &output.stderr)
    }

    fn copy(&self, text: &dyn TextSource, range: ByteRange) -> Result<(), ClipboardError> {
        debug!("clipboard: {} {COPY} {range:?}", self.program);
        let mut child = self
            .command(COPY)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stderr = child.stderr.take();
        let drain = thread::spawn(move || {
            let mut diagnostic = Vec::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_end(&mut diagnostic);
            }
            diagnostic
        });

        // Dropping stdin at the end of the arm signals end of input.
        let written = match child.stdin.take() {
            Some(mut stdin) => text.write_range(range, &mut stdin),
            None => Ok(()),
        };
        match written {
            // The helper stopped reading; its exit status decides.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = drain.join();
                return Err(ClipboardError::Io(e));
            }
            Ok(()) => {}
        }

        let status = child.wait()?;
        let diagnostic = drain.join().unwrap_or_default();
        check_exit(status, &diagnostic)
    }
}

/// Turn a finished helper into a result.
fn check_exit(status: ExitStatus, stderr: &[u8]) -> Result<(), ClipboardError> {
    if status.success() {
        return Ok(());
    }
    let diagnostic = String::from_utf8_lossy(stderr)
        .trim_end_matches(['\n', '\r'])
        .to_string();
    warn!("clipboard helper exited with {:?}: {diagnostic}", status.code());
    Err(ClipboardError::Failed {
        code: status.code(),
        diagnostic,
    })
}

// ---------------------------------------------------------------------------
// MemoryClipboard
// ---------------------------------------------------------------------------

/// In-process clipboard.
///
/// Stores the copied bytes itself. [`unavailable`](Self::unavailable)
/// builds one that fails every call like a helper that cannot reach a
/// display.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Vec<u8>>,
    failure: Option<String>,
}

impl MemoryClipboard {
    /// An empty, working clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every access fails with `diagnostic`.
    #[must_use]
    pub fn unavailable(diagnostic: impl Into<String>) -> Self {
        Self {
            contents: RefCell::default(),
            failure: Some(diagnostic.into()),
        }
    }

    /// Pre-fill the clipboard.
    #[must_use]
    pub fn with_contents(self, bytes: &[u8]) -> Self {
        *self.contents.borrow_mut() = bytes.to_vec();
        self
    }

    /// Current clipboard content.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.contents.borrow().clone()
    }

    fn check(&self) -> Result<(), ClipboardError> {
        match &self.failure {
            Some(diagnostic) => Err(ClipboardError::Failed {
                code: Some(1),
                diagnostic: diagnostic.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn paste(&self, out: &mut Vec<u8>) -> Result<(), ClipboardError> {
        self.check()?;
        out.extend_from_slice(&self.contents.borrow());
        Ok(())
    }

    fn copy(&self, text: &dyn TextSource, range: ByteRange) -> Result<(), ClipboardError> {
        self.check()?;
        let mut bytes = Vec::new();
        text.write_range(range, &mut bytes)?;
        *self.contents.borrow_mut() = bytes;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
