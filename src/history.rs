//! Command history with a two-slot ring of line buffers
//!
//! Exactly one slot is the live edit buffer at any time. Rotating after a
//! completed command leaves the previous command in the other slot, visible
//! for one cursor-up recall. Binary commands abandon history entirely and
//! collapse back to slot 0.

use crate::line_buffer::LineBuffer;

/// Number of line buffers kept; effectively one command of history
pub const HISTORY_DEPTH: usize = 2;

/// Ring of line buffers with a rotating current index
pub struct HistoryRing {
    slots: [LineBuffer; HISTORY_DEPTH],
    current: usize,
}

impl HistoryRing {
    /// Create empty ring
    pub const fn new() -> Self {
        Self {
            slots: [LineBuffer::new(), LineBuffer::new()],
            current: 0,
        }
    }

    /// The live edit buffer
    pub fn current(&self) -> &LineBuffer {
        &self.slots[self.current]
    }

    /// The live edit buffer, mutable
    pub fn current_mut(&mut self) -> &mut LineBuffer {
        &mut self.slots[self.current]
    }

    /// Rotate after a completed command. The other slot becomes the live
    /// buffer and is cleared; the completed command stays behind for recall.
    pub fn rotate(&mut self) {
        self.current = (self.current + 1) % HISTORY_DEPTH;
        self.slots[self.current].clear();
    }

    /// Switch the live buffer to the other slot for history recall and
    /// restore the spaces a prior tokenization replaced with NULs.
    ///
    /// Returns the recalled buffer, which is now the live edit buffer.
    pub fn recall(&mut self) -> &LineBuffer {
        self.current = (self.current + 1) % HISTORY_DEPTH;
        self.slots[self.current].restore_spaces();
        &self.slots[self.current]
    }

    /// Drop all history and make a cleared slot 0 the live buffer
    pub fn reset(&mut self) {
        self.current = 0;
        self.slots[0].clear();
    }
}
