//! Main console struct integrating all components

use core::fmt::Write;

use tracing::{debug, info};

use crate::binary::HexPolicy;
use crate::error::Status;
use crate::menu::{self, MenuEntry};
use crate::session::{Command, Session};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Handler for completed binary frames
pub type BinaryHandler = fn(payload: &[u8], out: &mut dyn Write) -> Status;

/// Console tuning knobs
pub struct ConsoleConfig {
    /// Banner text printed above the version at startup
    pub banner: &'static str,
    /// Prompt character
    pub prompt: u8,
    /// Hex digit handling for binary frames
    pub hex_policy: HexPolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: "Test Command Console",
            prompt: b'>',
            hex_policy: HexPolicy::Lenient,
        }
    }
}

/// Command console engine: session parsing plus menu dispatch
pub struct Console {
    session: Session,
    menu: &'static [MenuEntry],
    binary_handler: BinaryHandler,
    prompt: u8,
    banner: &'static str,
}

impl Console {
    /// Create a console over a static menu table
    pub fn new(menu: &'static [MenuEntry], config: ConsoleConfig) -> Self {
        Self {
            session: Session::new(config.hex_policy, config.prompt),
            menu,
            binary_handler: echo_binary,
            prompt: config.prompt,
            banner: config.banner,
        }
    }

    /// Replace the default binary handler
    pub fn with_binary_handler(mut self, handler: BinaryHandler) -> Self {
        self.binary_handler = handler;
        self
    }

    /// Process a single input byte.
    ///
    /// Returns Some(status) if a command completed, None if more input is
    /// needed. Echo and command output go to `out`.
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<Status> {
        let mut is_text = false;

        let status = match self.session.feed(byte, out)? {
            Command::Text(args) => {
                is_text = true;
                if args.is_empty() {
                    Ok(())
                } else {
                    menu::dispatch(self.menu, args.as_slice(), out)
                }
            }
            Command::Binary(payload) => {
                info!(len = payload.len(), "binary command");
                (self.binary_handler)(payload, out)
            }
        };

        // The prompt comes back after every text command; binary responses
        // stay on the wire format.
        if is_text {
            self.print_prompt(out);
        }
        if let Err(e) = status {
            debug!(error = %e, "command returned error");
        }
        Some(status)
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = out.write_char(self.prompt as char);
    }

    /// Print welcome banner and first prompt
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "\n{}", self.banner);
        let _ = writeln!(out, "{}", VERSION);
        self.print_prompt(out);
    }
}

/// Default binary handler: respond with `!` plus the payload in hex
pub fn echo_binary(payload: &[u8], out: &mut dyn Write) -> Status {
    let _ = out.write_char('!');
    for b in payload {
        let _ = write!(out, "{:02X}", b);
    }
    let _ = out.write_char('\n');
    Ok(())
}
