//! Slot array — the per-selection storage underneath a register.
//!
//! A register holds one byte buffer per *slot*. Single-cursor commands only
//! ever touch slot 0; a multi-cursor yank writes the text under the N-th
//! selection into slot N so that a later multi-cursor paste can hand each
//! cursor its own piece back.
//!
//! # Invariant
//!
//! Every index below [`len`](SlotArray::len) holds a valid (possibly empty)
//! buffer. There are no gaps: writing slot 5 of a one-slot array
//! materializes slots 1–4 as empty buffers. [`ensure_len`] is the only code
//! path that grows the array, so the invariant holds structurally.
//!
//! Growth uses `try_reserve`, which means an allocation failure is reported
//! as an error and leaves the array exactly as it was.
//!
//! [`ensure_len`]: SlotArray::ensure_len

use crate::error::Result;

/// Ordered, growable sequence of byte buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotArray {
    slots: Vec<Vec<u8>>,
}

impl SlotArray {
    /// An array with no slots at all.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// An array with exactly one empty slot, the state every register starts
    /// in.
    #[must_use]
    pub fn single() -> Self {
        Self {
            slots: vec![Vec::new()],
        }
    }

    /// Number of logical slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when there are no slots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Content of slot `index`, or `None` if it was never created.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// Mutable buffer of an existing slot.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vec<u8>> {
        self.slots.get_mut(index)
    }

    /// Buffer of slot `index`, growing the array first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Alloc`](crate::RegisterError::Alloc) if the
    /// array could not grow. The array is unchanged in that case.
    pub fn get_or_create(&mut self, index: usize) -> Result<&mut Vec<u8>> {
        // Saturating: `usize::MAX` slots can never be reserved, so the
        // growth below fails for that index instead of wrapping.
        self.ensure_len(index.saturating_add(1))?;
        Ok(&mut self.slots[index])
    }

    /// Make the array exactly `count` slots long.
    ///
    /// Buffers at index `count` and above are released. Missing slots below
    /// `count` are materialized empty; existing ones keep their content.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Alloc`](crate::RegisterError::Alloc) if the
    /// array had to grow and could not.
    pub fn truncate(&mut self, count: usize) -> Result<()> {
        if count < self.slots.len() {
            self.slots.truncate(count);
            return Ok(());
        }
        self.ensure_len(count)
    }

    /// Grow to at least `len` slots, filling new ones with empty buffers.
    /// Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Alloc`](crate::RegisterError::Alloc) on
    /// allocation failure, before any slot was added.
    pub fn ensure_len(&mut self, len: usize) -> Result<()> {
        let missing = len.saturating_sub(self.slots.len());
        if missing == 0 {
            return Ok(());
        }
        self.slots.try_reserve(missing)?;
        self.slots.resize_with(len, Vec::new);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
