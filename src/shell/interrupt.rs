use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Interrupt state shared between the Ctrl-C handler and the shell loop.
///
/// The loop checks the flag around every blocking read. A read blocked in the
/// terminal is not woken by the signal, so the handler is told whether the loop
/// is currently waiting and then takes over the farewell itself. Exactly one
/// side gets to print it.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    state: Arc<InterruptState>,
}

#[derive(Debug, Default)]
struct InterruptState {
    raised: AtomicBool,
    waiting: AtomicBool,
    farewell_claimed: AtomicBool,
}

impl Interrupt {
    /// Marks the session as interrupted. Returns whether the loop is blocked on input.
    pub fn raise(&self) -> bool {
        self.state.raised.store(true, Ordering::SeqCst);
        self.state.waiting.load(Ordering::SeqCst)
    }

    pub fn is_raised(&self) -> bool {
        self.state.raised.load(Ordering::SeqCst)
    }

    /// True for the first caller only.
    pub fn claim_farewell(&self) -> bool {
        !self.state.farewell_claimed.swap(true, Ordering::SeqCst)
    }

    pub(super) fn begin_wait(&self) {
        self.state.waiting.store(true, Ordering::SeqCst);
    }

    pub(super) fn end_wait(&self) {
        self.state.waiting.store(false, Ordering::SeqCst);
    }
}
