//! Register store configuration.
//!
//! | Setting           | Default        | Meaning                                  |
//! |-------------------|----------------|------------------------------------------|
//! | `clipboard`       | `n-clipboard`  | Helper program run for the `*` register  |
//! | `clipboard_args`  | (none)         | Arguments placed before `--copy/--paste` |
//!
//! The helper is fixed at startup; it is never taken from register content
//! or command arguments.

/// Helper program used when nothing else is configured.
pub const DEFAULT_CLIPBOARD: &str = "n-clipboard";

/// Configuration for [`Registers`](crate::table::Registers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    /// Program invoked for clipboard access.
    pub clipboard: String,

    /// Arguments passed before the `--copy` / `--paste` mode flag.
    pub clipboard_args: Vec<String>,
}

impl RegisterConfig {
    /// Use `program` (with leading `args`) as the clipboard helper.
    #[must_use]
    pub fn with_clipboard<I, S>(mut self, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clipboard = program.into();
        self.clipboard_args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            clipboard: DEFAULT_CLIPBOARD.to_string(),
            clipboard_args: Vec::new(),
        }
    }
}
