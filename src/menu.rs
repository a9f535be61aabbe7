//! Hierarchical menu tables and text command dispatch
//!
//! Menu tables are static data: each entry carries a name, a help string,
//! and either a handler or a nested submenu. Dispatch walks the argument
//! list through the levels until a handler is found, which receives the
//! remaining arguments.

use core::fmt::Write;

use tracing::debug;

use crate::error::{ConsoleError, Status};

/// Text command handler: remaining arguments plus the console output
pub type Handler = fn(args: &[&str], out: &mut dyn Write) -> Status;

/// Payload of a menu entry
#[derive(Clone, Copy)]
pub enum MenuAction {
    /// Invoke this handler with the remaining arguments
    Handler(Handler),
    /// Descend into a nested menu level
    Submenu(&'static [MenuEntry]),
}

/// One named command or submenu in a menu table
pub struct MenuEntry {
    pub name: &'static str,
    pub help: &'static str,
    pub action: MenuAction,
}

/// Build a handler entry
pub const fn handler(name: &'static str, help: &'static str, f: Handler) -> MenuEntry {
    MenuEntry {
        name,
        help,
        action: MenuAction::Handler(f),
    }
}

/// Build a submenu entry
pub const fn submenu(
    name: &'static str,
    help: &'static str,
    entries: &'static [MenuEntry],
) -> MenuEntry {
    MenuEntry {
        name,
        help,
        action: MenuAction::Submenu(entries),
    }
}

/// Print name and help for every entry of one menu level
pub fn print_help(menu: &[MenuEntry], out: &mut dyn Write) {
    for entry in menu {
        let _ = writeln!(out, "{}: {}", entry.name, entry.help);
    }
}

/// Dispatch a tokenized command line against a menu table.
///
/// A bare `?` argument lists the current menu level instead of dispatching.
/// An unknown name fails silently with [`ConsoleError::NoMatch`]. A line
/// that ends on a submenu name lists that submenu and also reports
/// `NoMatch`, since no handler ran.
pub fn dispatch(menu: &[MenuEntry], args: &[&str], out: &mut dyn Write) -> Status {
    let mut table = menu;

    for (i, arg) in args.iter().enumerate() {
        // Check for help first
        if *arg == "?" {
            print_help(table, out);
            return Ok(());
        }

        let Some(entry) = table.iter().find(|e| e.name == *arg) else {
            debug!(cmd = *arg, "no matching command");
            return Err(ConsoleError::NoMatch);
        };

        match entry.action {
            MenuAction::Submenu(sub) => table = sub,
            MenuAction::Handler(f) => {
                debug!(cmd = *arg, "dispatching");
                // Call with the remaining arguments, ignore any leftovers
                return f(&args[i + 1..], out);
            }
        }
    }

    // Arguments ran out while descending submenus; show where we stopped
    print_help(table, out);
    Err(ConsoleError::NoMatch)
}
