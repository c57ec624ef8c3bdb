//! # n-register — Register store for n-nvim
//!
//! Registers are the named storage yank, delete and paste go through:
//!
//! - **[`id`]** — `RegisterId` and the name table (`"a`, `"A`, `"*`, `"_` ...)
//! - **[`slots`]** — `SlotArray`, the per-cursor byte buffers of a register
//! - **[`register`]** — `Register` with its four kinds: normal, numbered,
//!   clipboard and blackhole
//! - **[`table`]** — `Registers`, every register of a session, and `Action`,
//!   the register selected for the current command
//! - **[`clipboard`]** — the `Clipboard` trait and its external-helper and
//!   in-memory implementations
//! - **[`text`]** / **[`buffer`]** — `TextSource`, what yanks read from, and a
//!   rope-backed `Buffer` implementing it
//! - **[`selection`]** — multi-cursor selections, for the numbered register
//! - **[`status`]** — the status line clipboard failures are reported on
//! - **[`config`]** — the clipboard helper to run
//! - **[`error`]** — `RegisterError` and `ClipboardError`

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod id;
pub mod register;
pub mod selection;
pub mod slots;
pub mod status;
pub mod table;
pub mod text;

pub use buffer::Buffer;
pub use clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
pub use config::RegisterConfig;
pub use error::{ClipboardError, RegisterError, Result};
pub use id::{RegisterId, Selected};
pub use register::{Env, Kind, Register};
pub use selection::{SelectionCount, Selections};
pub use slots::SlotArray;
pub use status::StatusLine;
pub use table::{Action, RegisterEntry, Registers};
pub use text::{ByteRange, TextSource};
