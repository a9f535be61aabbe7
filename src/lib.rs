//! # cmd-console
//!
//! Interactive command console engine for serial transports.
//!
//! A single byte stream (UART, USB-CDC, anything pollable) is demultiplexed
//! character by character into either line-edited text commands with one
//! level of history recall, or `$`-framed hex binary commands. Completed
//! text lines are tokenized in place and dispatched through a static,
//! hierarchical menu table.
//!
//! ## Architecture
//!
//! ```text
//! Transport ──(ISR)──▶ bridge ──(task)──▶ Session ──▶ menu dispatch
//!                                            │
//!                                            └──────▶ binary handler
//! ```
//!
//! The transport callback only signals; all parse state is owned by the
//! single worker context that drains it. Zero heap allocation on the
//! command path - fixed buffers throughout.

pub mod binary;
pub mod bridge;
pub mod console;
pub mod error;
pub mod history;
pub mod line_buffer;
pub mod menu;
pub mod session;

pub use binary::{BinaryDecoder, DecodeEvent, HexPolicy};
pub use bridge::{drain, ByteSource, DrainSignal, EventBridge, EventSink, SemaphoreBridge};
pub use console::{echo_binary, BinaryHandler, Console, ConsoleConfig, VERSION};
pub use error::{ConsoleError, Status};
pub use history::{HistoryRing, HISTORY_DEPTH};
pub use line_buffer::{ArgVector, LineBuffer, ARGC_MAX, BUFFER_SIZE};
pub use menu::{dispatch, handler, print_help, submenu, Handler, MenuAction, MenuEntry};
pub use session::{Command, Session, BIN_START, TXT_END};
