//! Last-write-wins timer for keystroke-level filter edits

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// Dropping a `Timeout` cancels it, so replacing the stored handle cancels
/// whatever was pending.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            pending: StoredValue::new_local(None),
        }
    }

    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(delay_ms, f);
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}
