//! Line buffer for console input
//!
//! One fixed-capacity buffer holds either a text command line or a decoded
//! binary payload. Text lines are tokenized in place: whitespace runs become
//! NUL separators and the argument slices index straight into the buffer, so
//! no allocation happens on the command path.

/// Line/frame buffer capacity in bytes
pub const BUFFER_SIZE: usize = 64;

/// Upper bound on arguments in one line (every other byte at worst)
pub const ARGC_MAX: usize = BUFFER_SIZE / 2;

/// Arguments produced by tokenizing a line in place.
///
/// The slices borrow the line buffer they were parsed from.
pub struct ArgVector<'a> {
    args: [&'a str; ARGC_MAX],
    count: usize,
}

impl<'a> ArgVector<'a> {
    /// Arguments as a slice
    pub fn as_slice(&self) -> &[&'a str] {
        &self.args[..self.count]
    }

    /// Argument count
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if no arguments were found
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Line input buffer
pub struct LineBuffer {
    buf: [u8; BUFFER_SIZE],
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; BUFFER_SIZE],
            len: 0,
        }
    }

    /// Push a byte; ignored once the buffer is full
    pub fn push(&mut self, c: u8) {
        if self.len < BUFFER_SIZE {
            self.buf[self.len] = c;
            self.len += 1;
        }
    }

    /// Remove last byte
    pub fn backspace(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Set buffer contents from string
    pub fn set(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let copy_len = bytes.len().min(BUFFER_SIZE);
        self.buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
        self.len = copy_len;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the text completion bound (capacity - 1) has been reached
    pub fn is_at_text_capacity(&self) -> bool {
        self.len >= BUFFER_SIZE - 1
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Convert the NUL separators left behind by `tokenize` back to
    /// spaces, so a recalled line can be re-displayed and re-edited.
    pub fn restore_spaces(&mut self) {
        for b in &mut self.buf[..self.len] {
            if *b == 0 {
                *b = b' ';
            }
        }
    }

    /// Tokenize the line in place.
    ///
    /// Whitespace runs are overwritten with NUL separators; each argument
    /// slice points at the start of a non-whitespace run. The buffer keeps
    /// its length so the separated form stays available for history recall.
    pub fn tokenize(&mut self) -> ArgVector<'_> {
        let len = self.len;
        let mut ranges = [(0usize, 0usize); ARGC_MAX];
        let mut count = 0;
        let mut i = 0;

        while i < len {
            // NUL out whitespaces
            while i < len && self.buf[i].is_ascii_whitespace() {
                self.buf[i] = 0;
                i += 1;
            }
            if i >= len {
                break;
            }
            let start = i;
            // Skip non-whitespaces
            while i < len && !self.buf[i].is_ascii_whitespace() {
                i += 1;
            }
            if count < ARGC_MAX {
                ranges[count] = (start, i);
                count += 1;
            }
        }

        let mut args = [""; ARGC_MAX];
        let bytes = &self.buf[..len];
        for (slot, &(start, end)) in args.iter_mut().zip(ranges[..count].iter()) {
            *slot = core::str::from_utf8(&bytes[start..end]).unwrap_or("");
        }

        ArgVector { args, count }
    }
}
