//! Panic capture for assertion-style tests.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Runs `action` exactly once on the calling thread and returns the panic
/// payload it raised, if any.
///
/// Completing normally yields `None`; tests assert on the returned payload
/// instead of letting the panic end the run. Only unwinding panics can be
/// captured — under `panic = "abort"` nothing is recoverable.
pub fn catch_panic(action: impl FnOnce()) -> Option<Box<dyn Any + Send>> {
    panic::catch_unwind(AssertUnwindSafe(action)).err()
}

/// Extracts the human-readable message from a captured panic payload.
///
/// Covers the two payload types `panic!` produces: `&str` for literal
/// messages and `String` for formatted ones. Other payload types yield
/// `None`.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Restores the previous panic hook when dropped.
pub struct QuietPanicsGuard {
    previous: Option<Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>>,
}

/// Silences the default panic hook until the returned guard drops, so tests
/// exercising expected panics do not clutter their output with backtraces.
///
/// Single-threaded use only: the hook is process-global state.
pub fn quiet_panics() -> QuietPanicsGuard {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    QuietPanicsGuard {
        previous: Some(previous),
    }
}

impl Drop for QuietPanicsGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}
