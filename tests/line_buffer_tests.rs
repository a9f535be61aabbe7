//! Line buffer and tokenization tests

use cmd_console::line_buffer::{LineBuffer, ARGC_MAX, BUFFER_SIZE};

#[test]
fn test_push_and_as_str() {
    let mut buf = LineBuffer::new();

    buf.push(b'h');
    buf.push(b'e');
    buf.push(b'l');
    buf.push(b'p');

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_backspace() {
    let mut buf = LineBuffer::new();

    buf.set("help");
    buf.backspace();
    buf.backspace();

    assert_eq!(buf.as_str(), "he");
}

#[test]
fn test_backspace_empty_is_noop() {
    let mut buf = LineBuffer::new();

    buf.backspace(); // should not panic
    assert_eq!(buf.as_str(), "");
}

#[test]
fn test_clear() {
    let mut buf = LineBuffer::new();

    buf.set("mem read32");
    buf.clear();

    assert!(buf.is_empty());
    assert_eq!(buf.as_str(), "");
}

#[test]
fn test_push_stops_at_capacity() {
    let mut buf = LineBuffer::new();

    for _ in 0..BUFFER_SIZE + 10 {
        buf.push(b'a');
    }

    assert_eq!(buf.len(), BUFFER_SIZE);
}

#[test]
fn test_text_capacity_bound() {
    let mut buf = LineBuffer::new();

    for _ in 0..BUFFER_SIZE - 2 {
        buf.push(b'a');
    }
    assert!(!buf.is_at_text_capacity());

    buf.push(b'a');
    assert!(buf.is_at_text_capacity());
}

#[test]
fn test_tokenize_simple() {
    let mut buf = LineBuffer::new();
    buf.set("mem read32 1000 4");

    let args = buf.tokenize();
    assert_eq!(args.as_slice(), &["mem", "read32", "1000", "4"]);
}

#[test]
fn test_tokenize_collapses_whitespace_runs() {
    let mut buf = LineBuffer::new();
    buf.set("  mem \t read32   1000  ");

    let args = buf.tokenize();
    assert_eq!(args.as_slice(), &["mem", "read32", "1000"]);
}

#[test]
fn test_tokenize_empty() {
    let mut buf = LineBuffer::new();

    let args = buf.tokenize();
    assert!(args.is_empty());
    assert_eq!(args.len(), 0);
}

#[test]
fn test_tokenize_whitespace_only() {
    let mut buf = LineBuffer::new();
    buf.set("   \t ");

    let args = buf.tokenize();
    assert!(args.is_empty());
    // Buffer keeps its length; separators became NULs
    assert_eq!(buf.len(), 5);
}

#[test]
fn test_tokenize_is_idempotent_on_raw_bytes() {
    let mut first = LineBuffer::new();
    first.set("led on 3");
    let split: Vec<String> = first
        .tokenize()
        .as_slice()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut second = LineBuffer::new();
    second.set("led on 3");
    let again: Vec<String> = second
        .tokenize()
        .as_slice()
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(split, again);
}

#[test]
fn test_tokenize_arg_count_bound() {
    let mut buf = LineBuffer::new();
    // 32 single-char tokens: "a a a ..." fills the buffer with alternating
    // chars and separators
    let line: String = std::iter::repeat("a ").take(BUFFER_SIZE / 2).collect();
    buf.set(&line);

    let args = buf.tokenize();
    assert!(args.len() <= ARGC_MAX);
}

#[test]
fn test_restore_spaces_round_trip() {
    let mut buf = LineBuffer::new();
    buf.set("mem  read32 1000");

    buf.tokenize();
    buf.restore_spaces();

    assert_eq!(buf.as_str(), "mem  read32 1000");
}
