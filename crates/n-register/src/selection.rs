//! Selections — how many cursors a command is distributing over.
//!
//! Multi-cursor commands write one register slot per selection. Registers
//! only need the *number* of active selections (see
//! [`Register::count`](crate::register::Register::count)), which is all the
//! [`SelectionCount`] trait asks for. [`Selections`] is a minimal concrete
//! set of byte ranges, one per cursor.

use crate::text::ByteRange;

/// Anything that can report how many selections are currently active.
pub trait SelectionCount {
    /// Number of concurrently active selections. Never zero for a live view.
    fn selection_count(&self) -> usize;
}

/// An ordered, non-empty set of selections.
///
/// Order is document order as the caller gave them; slot N of a
/// multi-cursor yank corresponds to selection N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    ranges: Vec<ByteRange>,
}

impl Selections {
    /// A single selection covering `range`.
    #[must_use]
    pub fn single(range: ByteRange) -> Self {
        Self {
            ranges: vec![range],
        }
    }

    /// Build from several ranges. Returns `None` for an empty list.
    #[must_use]
    pub fn from_ranges(ranges: Vec<ByteRange>) -> Option<Self> {
        if ranges.is_empty() {
            return None;
        }
        Some(Self { ranges })
    }

    /// All selections in slot order.
    #[must_use]
    pub fn ranges(&self) -> &[ByteRange] {
        &self.ranges
    }

    /// Number of selections.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the set holds no selection. Construction rules this out,
    /// so it is false for every value built through this API.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl SelectionCount for Selections {
    fn selection_count(&self) -> usize {
        self.ranges.len()
    }
}

impl SelectionCount for usize {
    fn selection_count(&self) -> usize {
        *self
    }
}
