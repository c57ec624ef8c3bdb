//! Register — storage for yanked and deleted text.
//!
//! Every yank (`y`) and delete (`d`, `x`, `dd`) copies text into a register.
//! Paste (`p`, `P`) reads it back. With several cursors active, each cursor
//! gets its own *slot*: the text under selection N lands in slot N.
//!
//! ## Register kinds
//!
//! All registers share one interface, but what happens behind it depends on
//! the [`Kind`]:
//!
//! - **Normal**: plain byte storage, one buffer per slot.
//! - **Numbered** (`"#`): has no content of its own. Reading slot N yields
//!   the decimal number `N + 1`, so pasting `"#p` across five cursors
//!   numbers them 1 to 5.
//! - **Clipboard** (`"*`): every read and write goes through the system
//!   clipboard helper. The slot buffers are only scratch space for the
//!   latest read.
//! - **Blackhole** (`"_`): writes vanish, reads find nothing.
//!
//! ## Append mode
//!
//! When a register is selected through its uppercase name (`"A`), writes
//! concatenate onto the existing slot content instead of replacing it. Only
//! normal registers can append.

use std::fmt;
use std::io::Write as _;

use log::debug;

use crate::clipboard::Clipboard;
use crate::error::{ClipboardError, RegisterError, Result};
use crate::selection::SelectionCount;
use crate::slots::SlotArray;
use crate::status::StatusLine;
use crate::text::{ByteRange, TextSource};

/// How a register stores (or doesn't store) its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Plain in-memory text.
    Normal,
    /// Computed from the slot number on every read.
    Numbered,
    /// Backed by the system clipboard.
    Clipboard,
    /// Discards everything.
    Blackhole,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Numbered => f.write_str("numbered"),
            Self::Clipboard => f.write_str("clipboard"),
            Self::Blackhole => f.write_str("blackhole"),
        }
    }
}

/// What register operations borrow from the rest of the editor: the
/// clipboard bridge and the status line failures are reported on.
pub struct Env<'a> {
    pub clipboard: &'a dyn Clipboard,
    pub status: &'a mut StatusLine,
}

impl Env<'_> {
    /// Put a clipboard failure in front of the user.
    fn report(&mut self, err: &ClipboardError) {
        self.status.set_error(err.to_string());
    }
}

/// A single register: a kind, one buffer per slot, and the append flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register {
    kind: Kind,
    slots: SlotArray,
    append: bool,
}

impl Register {
    /// Create a register with one empty slot.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            slots: SlotArray::single(),
            append: false,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// The register kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether writes currently append.
    #[inline]
    #[must_use]
    pub const fn is_append(&self) -> bool {
        self.append
    }

    /// Switch append mode on or off for the next writes.
    #[inline]
    pub const fn set_append(&mut self, append: bool) {
        self.append = append;
    }

    /// The underlying slots.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &SlotArray {
        &self.slots
    }

    /// Stored content of a slot without side effects.
    ///
    /// Only normal registers have stored content; every other kind returns
    /// `None`. Use [`slot_get`](Self::slot_get) to read a register the way
    /// a paste does.
    #[must_use]
    pub fn peek(&self, slot: usize) -> Option<&[u8]> {
        match self.kind {
            Kind::Normal => self.slots.get(slot),
            Kind::Numbered | Kind::Clipboard | Kind::Blackhole => None,
        }
    }

    // -- Reading ------------------------------------------------------------

    /// Content of `slot`, or `None` if there is nothing to paste.
    ///
    /// - Normal: the slot's bytes, `None` if the slot was never written.
    /// - Numbered: `slot + 1` in decimal.
    /// - Clipboard: the current clipboard content. A failing helper is
    ///   reported on the status line and whatever it produced is returned.
    /// - Blackhole: always `None`.
    pub fn slot_get(&mut self, slot: usize, env: &mut Env<'_>) -> Option<&[u8]> {
        match self.kind {
            Kind::Normal => self.slots.get(slot),
            Kind::Numbered => {
                // Formatted into slot 0 whatever slot is asked for; the
                // borrow ends before the next read can overwrite it.
                let buf = self.slots.get_mut(0)?;
                buf.clear();
                write!(buf, "{}", slot.saturating_add(1)).ok()?;
                Some(buf.as_slice())
            }
            Kind::Clipboard => {
                let buf = self.slots.get_mut(slot)?;
                buf.clear();
                if let Err(err) = env.clipboard.paste(buf) {
                    env.report(&err);
                }
                Some(buf.as_slice())
            }
            Kind::Blackhole => None,
        }
    }

    /// Content of slot 0.
    pub fn get(&mut self, env: &mut Env<'_>) -> Option<&[u8]> {
        self.slot_get(0, env)
    }

    // -- Writing bytes ------------------------------------------------------

    /// Replace the content of `slot` with `data`, or concatenate onto it in
    /// append mode.
    ///
    /// # Errors
    ///
    /// Only normal registers accept direct writes; every other kind fails
    /// with [`RegisterError::AppendUnsupported`] in append mode and
    /// [`RegisterError::Unsupported`] otherwise. Allocation failure leaves
    /// the slot's previous content in place.
    pub fn slot_put(&mut self, slot: usize, data: &[u8]) -> Result<()> {
        if self.kind != Kind::Normal {
            if self.append {
                return Err(RegisterError::AppendUnsupported { kind: self.kind });
            }
            return Err(RegisterError::Unsupported {
                kind: self.kind,
                op: "put",
            });
        }
        let buf = self.slots.get_or_create(slot)?;
        if self.append {
            buf.try_reserve(data.len())?;
            buf.extend_from_slice(data);
            debug!("register put: {} bytes appended to slot {slot}", data.len());
            return Ok(());
        }
        buf.try_reserve(data.len().saturating_sub(buf.len()))?;
        buf.clear();
        buf.extend_from_slice(data);
        debug!("register put: {} bytes into slot {slot}", data.len());
        Ok(())
    }

    /// Replace the content with `data` and collapse to a single slot.
    ///
    /// # Errors
    ///
    /// See [`slot_put`](Self::slot_put).
    pub fn put(&mut self, data: &[u8]) -> Result<()> {
        self.slot_put(0, data)?;
        self.resize(1)
    }

    /// [`put`](Self::put) for text.
    ///
    /// # Errors
    ///
    /// See [`slot_put`](Self::slot_put).
    pub fn put_str(&mut self, text: &str) -> Result<()> {
        self.put(text.as_bytes())
    }

    // -- Writing document ranges --------------------------------------------

    /// Capture `range` of `text` into `slot`. This is what yank and delete
    /// use.
    ///
    /// In append mode the bytes are concatenated onto the slot. Otherwise a
    /// normal register replaces the slot, a clipboard register sends the
    /// range to the system clipboard, and a blackhole register drops it.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::RangeOverflow`] if `text` cannot produce `range`;
    ///   nothing is modified.
    /// - [`RegisterError::AppendUnsupported`] when appending to anything
    ///   but a normal register.
    /// - [`RegisterError::Unsupported`] for numbered registers.
    /// - [`RegisterError::Clipboard`] if the helper failed; the failure is
    ///   also shown on the status line.
    /// - [`RegisterError::Alloc`] if the slot could not grow.
    pub fn slot_put_range(
        &mut self,
        slot: usize,
        text: &dyn TextSource,
        range: ByteRange,
        env: &mut Env<'_>,
    ) -> Result<()> {
        if self.append {
            return self.slot_append_range(slot, text, range);
        }

        match self.kind {
            Kind::Normal => {
                let len = text.range_size(range).ok_or(RegisterError::RangeOverflow)?;
                let buf = self.slots.get_or_create(slot)?;
                buf.try_reserve(len.saturating_sub(buf.len()))?;
                buf.clear();
                buf.resize(len, 0);
                let copied = text.bytes_get(range.start, buf);
                buf.truncate(copied);
                debug!("register yank: {range:?} ({copied} bytes) into slot {slot}");
                Ok(())
            }
            Kind::Clipboard => {
                text.range_size(range).ok_or(RegisterError::RangeOverflow)?;
                env.clipboard.copy(text, range).map_err(|err| {
                    env.report(&err);
                    RegisterError::from(err)
                })
            }
            Kind::Blackhole => Ok(()),
            Kind::Numbered => Err(RegisterError::Unsupported {
                kind: self.kind,
                op: "put_range",
            }),
        }
    }

    /// Capture `range` into slot 0 and collapse to a single slot.
    ///
    /// # Errors
    ///
    /// See [`slot_put_range`](Self::slot_put_range).
    pub fn put_range(
        &mut self,
        text: &dyn TextSource,
        range: ByteRange,
        env: &mut Env<'_>,
    ) -> Result<()> {
        self.slot_put_range(0, text, range, env)?;
        self.resize(1)
    }

    fn slot_append_range(
        &mut self,
        slot: usize,
        text: &dyn TextSource,
        range: ByteRange,
    ) -> Result<()> {
        if self.kind != Kind::Normal {
            return Err(RegisterError::AppendUnsupported { kind: self.kind });
        }
        let len = text.range_size(range).ok_or(RegisterError::RangeOverflow)?;
        let buf = self.slots.get_or_create(slot)?;
        buf.try_reserve(len)?;
        let old = buf.len();
        buf.resize(old + len, 0);
        let copied = text.bytes_get(range.start, &mut buf[old..]);
        buf.truncate(old + copied);
        debug!("register append: {range:?} ({copied} bytes) onto slot {slot}");
        Ok(())
    }

    // -- Slot management ----------------------------------------------------

    /// How many slots a multi-cursor paste should address.
    ///
    /// For the numbered register this is the number of active selections
    /// (0 without an active view); for every other kind it is the number of
    /// slots currently held.
    #[must_use]
    pub fn count(&self, selections: Option<&dyn SelectionCount>) -> usize {
        match self.kind {
            Kind::Numbered => selections.map_or(0, |s| s.selection_count()),
            Kind::Normal | Kind::Clipboard | Kind::Blackhole => self.slots.len(),
        }
    }

    /// Make the register hold exactly `count` slots. Used after a
    /// multi-cursor command to drop slots left over from a larger selection
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Alloc`] if the slots could not grow.
    pub fn resize(&mut self, count: usize) -> Result<()> {
        self.slots.truncate(count)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
