//! Interrupt-to-task notification bridges
//!
//! A transport's "data ready" callback fires in interrupt context and may
//! only signal; parsing and handler execution happen in a worker context.
//! Two equivalent designs are provided:
//!
//! - [`DrainSignal`]: a binary semaphore. The callback gives it, a worker
//!   task takes it and drains the transport (synchronous-drain design).
//! - [`EventBridge`]: the callback posts one data-indication event into an
//!   external event system, suppressing repeats until the handler has
//!   drained (suppressed-notify design).
//!
//! Both share the invariant that exactly one drain pass is in flight at a
//! time, and a drain pass keeps reading until the transport reports no more
//! data, so bursts are never dropped.

use core::fmt::Write;
use core::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Condvar, Mutex};

use crate::console::Console;

/// Non-blocking byte source; any transport that can be polled for input
pub trait ByteSource {
    /// Read up to `buf.len()` bytes without blocking. Returns the number
    /// of bytes read; 0 means nothing is available right now.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

/// External event system the suppressed-notify bridge posts into
pub trait EventSink {
    /// Deliver one "data available" indication to the worker context
    fn post_data_indication(&self);
}

/// One complete drain pass: feed every currently available byte through
/// the console. Returns the number of bytes consumed.
pub fn drain(console: &mut Console, source: &mut dyn ByteSource, out: &mut dyn Write) -> usize {
    let mut buf = [0u8; 32];
    let mut total = 0;
    loop {
        let n = source.read(&mut buf);
        if n == 0 {
            return total;
        }
        total += n;
        for &byte in &buf[..n] {
            // Handler status is reported to the caller of dispatch only;
            // the drain loop keeps going regardless.
            let _ = console.process_byte(byte, out);
        }
    }
}

/// Binary semaphore between the transport callback and the worker task.
///
/// `notify` never blocks beyond the short critical section guarding the
/// flag; repeated notifications before the worker wakes collapse into one.
pub struct DrainSignal {
    pending: Mutex<bool>,
    ready: Condvar,
}

impl DrainSignal {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(false),
            ready: Condvar::new(),
        }
    }

    /// Give the semaphore (transport callback side)
    pub fn notify(&self) {
        let mut pending = self.pending.lock();
        *pending = true;
        self.ready.notify_one();
    }

    /// Take the semaphore, blocking until given (worker side)
    pub fn wait(&self) {
        let mut pending = self.pending.lock();
        while !*pending {
            self.ready.wait(&mut pending);
        }
        *pending = false;
    }
}

impl Default for DrainSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Synchronous-drain bridge: a worker blocks on the signal and drains the
/// transport each time the callback gives it.
pub struct SemaphoreBridge {
    signal: DrainSignal,
}

impl SemaphoreBridge {
    pub fn new() -> Self {
        Self {
            signal: DrainSignal::new(),
        }
    }

    /// The signal to register as the transport's data-ready callback
    pub fn signal(&self) -> &DrainSignal {
        &self.signal
    }

    /// Block until notified, then drain everything available.
    ///
    /// The worker task calls this in a loop. Returns the number of bytes
    /// consumed by the drain pass.
    pub fn run_once(
        &self,
        console: &mut Console,
        source: &mut dyn ByteSource,
        out: &mut dyn Write,
    ) -> usize {
        self.signal.wait();
        drain(console, source, out)
    }
}

impl Default for SemaphoreBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Suppressed-notify bridge: the transport callback posts a single
/// data-indication event and further callbacks are suppressed until the
/// event handler has finished draining.
pub struct EventBridge {
    suppressed: AtomicBool,
}

impl EventBridge {
    pub const fn new() -> Self {
        Self {
            suppressed: AtomicBool::new(false),
        }
    }

    /// Transport data-ready callback. Posts at most one indication while a
    /// drain is outstanding.
    pub fn notify(&self, sink: &dyn EventSink) {
        if self
            .suppressed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            sink.post_data_indication();
        }
    }

    /// Data-indication event handler: drain, then re-arm notifications.
    pub fn on_data_indication(
        &self,
        console: &mut Console,
        source: &mut dyn ByteSource,
        out: &mut dyn Write,
    ) -> usize {
        let total = drain(console, source, out);
        self.suppressed.store(false, Ordering::Release);
        total
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}
