//! Length-framed binary command decoder
//!
//! Wire format after the `$` start marker: two hex-ASCII digits encode the
//! payload length `L`, then `2*L` hex digits carry the payload, big nibble
//! first. `$04DEADBEEF` decodes to the 4-byte payload `DE AD BE EF`. The
//! decoder never consumes past the declared length; trailing input starts a
//! fresh session.

use tracing::warn;

use crate::line_buffer::{LineBuffer, BUFFER_SIZE};

/// Handling of non-hex digits inside a frame.
///
/// `Lenient` keeps the legacy behavior of valuing a bad digit as zero.
/// `Strict` drops the whole frame instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Outcome of feeding one byte to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent {
    /// Byte consumed, frame still incomplete
    Consumed,
    /// Frame complete; the payload is in the destination buffer
    Complete,
    /// Frame dropped (strict policy saw a non-hex digit)
    Rejected,
}

enum DecodeState {
    AwaitLength { nibbles_left: u8, value: u8 },
    AwaitBody { nibbles_left: u16, pending: u8 },
}

/// Hex-frame decoder state machine
pub struct BinaryDecoder {
    state: DecodeState,
    policy: HexPolicy,
}

impl BinaryDecoder {
    /// Create a decoder awaiting a fresh frame
    pub const fn new(policy: HexPolicy) -> Self {
        Self {
            state: DecodeState::AwaitLength {
                nibbles_left: 2,
                value: 0,
            },
            policy,
        }
    }

    /// Abandon any partial frame and await a fresh one
    pub fn reset(&mut self) {
        self.state = DecodeState::AwaitLength {
            nibbles_left: 2,
            value: 0,
        };
    }

    /// Feed one byte; decoded payload bytes accumulate in `dest`.
    pub fn feed(&mut self, byte: u8, dest: &mut LineBuffer) -> DecodeEvent {
        let digit = match hex_value(byte) {
            Some(d) => d,
            None => match self.policy {
                HexPolicy::Lenient => 0,
                HexPolicy::Strict => {
                    warn!(byte, "malformed hex digit, dropping frame");
                    self.reset();
                    return DecodeEvent::Rejected;
                }
            },
        };

        match &mut self.state {
            DecodeState::AwaitLength { nibbles_left, value } => {
                *value = (*value << 4) | digit;
                *nibbles_left -= 1;
                if *nibbles_left > 0 {
                    return DecodeEvent::Consumed;
                }

                let declared = *value as usize;
                // Clamp to the destination capacity; the wire puts no
                // bound on the declared length.
                let len = declared.min(BUFFER_SIZE);
                if len < declared {
                    warn!(declared, clamped = len, "binary length exceeds buffer capacity");
                }
                if len == 0 {
                    self.reset();
                    return DecodeEvent::Complete;
                }
                self.state = DecodeState::AwaitBody {
                    nibbles_left: (len * 2) as u16,
                    pending: 0,
                };
                DecodeEvent::Consumed
            }

            DecodeState::AwaitBody { nibbles_left, pending } => {
                *pending = (*pending << 4) | digit;
                *nibbles_left -= 1;
                // Every other digit makes a byte
                if *nibbles_left % 2 == 0 {
                    dest.push(*pending);
                    *pending = 0;
                }
                if *nibbles_left == 0 {
                    self.reset();
                    DecodeEvent::Complete
                } else {
                    DecodeEvent::Consumed
                }
            }
        }
    }
}

/// Decode one hex-ASCII digit
pub(crate) fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
