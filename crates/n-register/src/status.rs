//! Status line messages raised by register operations.
//!
//! Register failures that the user should see (a clipboard helper exiting
//! non-zero) are posted here. The editor drains the message when it redraws
//! the bottom line.

/// The transient message shown on the editor's bottom line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
    is_error: bool,
}

impl StatusLine {
    /// An empty status line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: None,
            is_error: false,
        }
    }

    /// Show an error message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// The current message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the current message is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.is_error
    }

    /// Take the message, leaving the line empty.
    pub fn take(&mut self) -> Option<String> {
        self.is_error = false;
        self.message.take()
    }
}
