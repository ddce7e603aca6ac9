//! One-shot readiness gate over the host's content-loaded signal.
//!
//! The host surface fires its readiness signal when the document's
//! structural content is available (the DOMContentLoaded analog). Callbacks
//! registered before the signal are queued; callbacks registered after it
//! run immediately and synchronously. The gate fires queued callbacks at
//! most once; repeated signals are ignored.

use std::cell::{Cell, RefCell};

type Callback = Box<dyn FnOnce()>;

pub struct ReadyGate {
    fired: Cell<bool>,
    pending: RefCell<Vec<Callback>>,
}

impl ReadyGate {
    pub fn new() -> Self {
        Self {
            fired: Cell::new(false),
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.fired.get()
    }

    /// Run `callback` once the gate has fired. If it already has, the
    /// callback runs before this method returns.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) {
        if self.fired.get() {
            callback();
        } else {
            self.pending.borrow_mut().push(Box::new(callback));
        }
    }

    /// Fire the gate. The first call drains the queue in registration
    /// order; later (spurious) signals do nothing.
    pub fn signal_ready(&self) {
        if self.fired.replace(true) {
            return;
        }
        // The queue is taken before any callback runs, so a callback that
        // calls `on_ready` itself goes down the already-fired path.
        let callbacks = self.pending.take();
        for callback in callbacks {
            callback();
        }
    }
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn callback_registered_before_readiness_fires_on_signal() {
        let gate = ReadyGate::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        gate.on_ready(move || counter.set(counter.get() + 1));

        assert_eq!(fired.get(), 0);
        gate.signal_ready();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn callback_registered_after_readiness_runs_immediately() {
        let gate = ReadyGate::new();
        gate.signal_ready();

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        gate.on_ready(move || flag.set(true));
        // Must have run synchronously, before control returned.
        assert!(fired.get());
    }

    #[test]
    fn spurious_signals_do_not_refire() {
        let gate = ReadyGate::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        gate.on_ready(move || counter.set(counter.get() + 1));

        gate.signal_ready();
        gate.signal_ready();
        gate.signal_ready();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn callback_registered_during_firing_runs_immediately() {
        let gate = Rc::new(ReadyGate::new());
        let inner_ran = Rc::new(Cell::new(false));

        let gate_handle = gate.clone();
        let flag = inner_ran.clone();
        gate.on_ready(move || {
            let flag = flag.clone();
            gate_handle.on_ready(move || flag.set(true));
        });

        gate.signal_ready();
        assert!(inner_ran.get());
    }
}
