//! Byte-stream ingest state machine
//!
//! A `Session` consumes one byte at a time from whatever transport drains
//! into it and classifies each fresh command as text or binary on its first
//! byte. Text bytes run through the line editor (echo, backspace, escape
//! sequences, history recall); binary bytes run through the hex frame
//! decoder. All parse state lives here, owned by whichever worker context
//! drains the transport.

use core::fmt::Write;

use crate::binary::{BinaryDecoder, DecodeEvent, HexPolicy};
use crate::history::HistoryRing;
use crate::line_buffer::ArgVector;

/// Binary commands start with this marker
pub const BIN_START: u8 = b'$';

/// Text commands end with this byte
pub const TXT_END: u8 = b'\n';

/// ANSI CSI "cursor up", the history recall key
const CURSOR_UP: [u8; ESC_SEQ_LEN] = [0x1B, 0x5B, 0x41];

const ESC_SEQ_LEN: usize = 3;

/// A fully assembled command, borrowed from the session's buffers
pub enum Command<'a> {
    /// Tokenized text line
    Text(ArgVector<'a>),
    /// Decoded binary payload
    Binary(&'a [u8]),
}

/// Active parse mode for the current command
#[derive(Clone, Copy, PartialEq, Eq)]
enum ParseMode {
    Text,
    Binary,
}

/// Which kind of command completed on the previous `feed` call
#[derive(Clone, Copy)]
enum CompletedKind {
    Text,
    Binary,
}

/// Fixed-length escape sequence collector.
///
/// Bytes of a partially collected sequence are buffered and neither echoed
/// nor dispatched; the sequence is consumed atomically once full.
struct EscapeState {
    buf: [u8; ESC_SEQ_LEN],
    remaining: u8,
}

impl EscapeState {
    const fn new() -> Self {
        Self {
            buf: [0; ESC_SEQ_LEN],
            remaining: 0,
        }
    }

    fn idle(&self) -> bool {
        self.remaining == 0
    }

    fn begin(&mut self) {
        self.buf[0] = 0x1B;
        self.remaining = (ESC_SEQ_LEN - 1) as u8;
    }

    /// Collect one byte; returns the full sequence once complete.
    fn collect(&mut self, byte: u8) -> Option<[u8; ESC_SEQ_LEN]> {
        let idx = ESC_SEQ_LEN - self.remaining as usize;
        self.buf[idx] = byte;
        self.remaining -= 1;
        if self.remaining == 0 {
            Some(self.buf)
        } else {
            None
        }
    }
}

/// Per-console parse state: mode, buffers, escape sub-state
pub struct Session {
    history: HistoryRing,
    decoder: BinaryDecoder,
    escape: EscapeState,
    mode: ParseMode,
    /// Completion left over from the previous `feed`, finalized lazily so
    /// the returned `Command` can borrow the buffers.
    pending: Option<CompletedKind>,
    prompt: u8,
}

impl Session {
    /// Create a fresh text-mode session
    pub const fn new(hex_policy: HexPolicy, prompt: u8) -> Self {
        Self {
            history: HistoryRing::new(),
            decoder: BinaryDecoder::new(hex_policy),
            escape: EscapeState::new(),
            mode: ParseMode::Text,
            pending: None,
            prompt,
        }
    }

    /// Process a single input byte.
    ///
    /// Echo and line-editing output goes to `echo`. Returns a completed
    /// command once one has been fully assembled, `None` while more input
    /// is needed.
    pub fn feed(&mut self, byte: u8, echo: &mut dyn Write) -> Option<Command<'_>> {
        self.finish_pending();

        // Classify a fresh command on its first byte. Binary mode discards
        // the marker and abandons text history.
        if self.mode == ParseMode::Text && self.history.current().is_empty() && self.escape.idle()
        {
            if byte == BIN_START {
                self.mode = ParseMode::Binary;
                self.decoder.reset();
                self.history.reset();
                return None;
            }
        }

        match self.mode {
            ParseMode::Binary => match self.decoder.feed(byte, self.history.current_mut()) {
                DecodeEvent::Consumed => None,
                DecodeEvent::Rejected => {
                    // Strict policy dropped the frame; back to a fresh
                    // text session.
                    self.history.reset();
                    self.mode = ParseMode::Text;
                    None
                }
                DecodeEvent::Complete => {
                    self.pending = Some(CompletedKind::Binary);
                    Some(Command::Binary(self.history.current().as_bytes()))
                }
            },
            ParseMode::Text => self.feed_text(byte, echo),
        }
    }

    fn feed_text(&mut self, byte: u8, echo: &mut dyn Write) -> Option<Command<'_>> {
        if !self.escape.idle() {
            if let Some(seq) = self.escape.collect(byte) {
                if seq == CURSOR_UP {
                    self.recall(echo);
                }
                // Unknown escapes are swallowed once fully collected
            }
            return None;
        }

        match byte {
            // Start of an escape sequence
            0x1B => {
                self.escape.begin();
                None
            }

            // Backspace or delete
            0x08 | 0x7F => {
                if !self.history.current().is_empty() {
                    self.history.current_mut().backspace();
                    let _ = write!(echo, "\x08 \x08");
                }
                None
            }

            // End of line
            TXT_END => {
                let _ = echo.write_char(TXT_END as char);
                self.complete_text()
            }

            // Printable character
            0x20..=0x7E => {
                self.history.current_mut().push(byte);
                let _ = echo.write_char(byte as char);
                if self.history.current().is_at_text_capacity() {
                    // Force-complete at capacity - 1, terminator or not
                    self.complete_text()
                } else {
                    None
                }
            }

            _ => None,
        }
    }

    fn complete_text(&mut self) -> Option<Command<'_>> {
        self.pending = Some(CompletedKind::Text);
        Some(Command::Text(self.history.current_mut().tokenize()))
    }

    /// Cursor-up recall: visually erase the current line, rotate to the
    /// other history slot, and re-display its contents if any.
    fn recall(&mut self, echo: &mut dyn Write) {
        let shown = self.history.current().len();
        if shown > 0 {
            // Carriage return puts the cursor at the prompt; overwrite the
            // line with spaces and restore the prompt.
            let _ = echo.write_char('\r');
            for _ in 0..shown + 1 {
                let _ = echo.write_char(' ');
            }
            let _ = echo.write_char('\r');
            let _ = echo.write_char(self.prompt as char);
        }

        let line = self.history.recall();
        if !line.is_empty() {
            let _ = echo.write_str(line.as_str());
        }
    }

    /// Finalize the previous completion before the next byte is parsed:
    /// text rotates the history ring (empty lines do not), binary resets
    /// back to slot 0 and text mode.
    fn finish_pending(&mut self) {
        match self.pending.take() {
            Some(CompletedKind::Text) => {
                if !self.history.current().is_empty() {
                    self.history.rotate();
                }
            }
            Some(CompletedKind::Binary) => {
                self.history.reset();
                self.mode = ParseMode::Text;
            }
            None => {}
        }
    }
}
