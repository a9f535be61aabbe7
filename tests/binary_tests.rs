//! Binary frame decoder tests

use cmd_console::binary::{BinaryDecoder, DecodeEvent, HexPolicy};
use cmd_console::line_buffer::{LineBuffer, BUFFER_SIZE};

fn feed_all(decoder: &mut BinaryDecoder, bytes: &[u8], dest: &mut LineBuffer) -> Vec<DecodeEvent> {
    bytes.iter().map(|&b| decoder.feed(b, dest)).collect()
}

#[test]
fn test_decode_four_byte_frame() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    let events = feed_all(&mut decoder, b"04DEADBEEF", &mut dest);

    assert_eq!(events.last(), Some(&DecodeEvent::Complete));
    assert_eq!(dest.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_payload_length_matches_declared_length() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    // Length 01: exactly two more digits are consumed
    assert_eq!(decoder.feed(b'0', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'1', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'4', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'8', &mut dest), DecodeEvent::Complete);

    assert_eq!(dest.as_bytes(), &[0x48]);
}

#[test]
fn test_lowercase_hex_digits() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    let events = feed_all(&mut decoder, b"02cafe", &mut dest);

    assert_eq!(events.last(), Some(&DecodeEvent::Complete));
    assert_eq!(dest.as_bytes(), &[0xCA, 0xFE]);
}

#[test]
fn test_zero_length_frame_completes_immediately() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    assert_eq!(decoder.feed(b'0', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'0', &mut dest), DecodeEvent::Complete);
    assert!(dest.is_empty());
}

#[test]
fn test_lenient_policy_values_bad_digit_as_zero() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    // 'X' and 'Y' are not hex; legacy behavior treats them as 0
    let events = feed_all(&mut decoder, b"02XYEF", &mut dest);

    assert_eq!(events.last(), Some(&DecodeEvent::Complete));
    assert_eq!(dest.as_bytes(), &[0x00, 0xEF]);
}

#[test]
fn test_strict_policy_rejects_bad_digit() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Strict);
    let mut dest = LineBuffer::new();

    assert_eq!(decoder.feed(b'0', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'2', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'X', &mut dest), DecodeEvent::Rejected);

    // Decoder is back at a fresh frame after rejection
    let events = feed_all(&mut decoder, b"01AB", &mut dest);
    assert_eq!(events.last(), Some(&DecodeEvent::Complete));
    assert_eq!(dest.as_bytes(), &[0xAB]);
}

#[test]
fn test_declared_length_is_clamped_to_capacity() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    // Declared length 0xFF exceeds the 64-byte buffer
    let mut frame = b"FF".to_vec();
    frame.extend(std::iter::repeat(b'A').take(2 * BUFFER_SIZE));

    let events = feed_all(&mut decoder, &frame, &mut dest);

    assert_eq!(events.last(), Some(&DecodeEvent::Complete));
    assert_eq!(dest.len(), BUFFER_SIZE);
}

#[test]
fn test_decoder_does_not_consume_past_declared_length() {
    let mut decoder = BinaryDecoder::new(HexPolicy::Lenient);
    let mut dest = LineBuffer::new();

    let events = feed_all(&mut decoder, b"0212", &mut dest);
    assert!(!events.contains(&DecodeEvent::Complete));

    assert_eq!(decoder.feed(b'3', &mut dest), DecodeEvent::Consumed);
    assert_eq!(decoder.feed(b'4', &mut dest), DecodeEvent::Complete);
    assert_eq!(dest.as_bytes(), &[0x12, 0x34]);
}
