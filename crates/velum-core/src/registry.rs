//! Custom-element registration guard.
//!
//! Element definition is a global, side-effecting operation keyed by tag.
//! Adapters call [`ensure_registered`] on construction; only the first call
//! per tag runs the registration side effect. The UI runtime is
//! single-threaded, so the registry is per UI thread.

use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    static REGISTERED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Runs `register` the first time `tag` is seen; later calls are no-ops.
pub fn ensure_registered(tag: &str, register: impl FnOnce()) {
    let first = REGISTERED.with(|reg| reg.borrow_mut().insert(tag.to_string()));
    if first {
        log::debug!("registering custom element <{tag}>");
        register();
    }
}

pub fn is_registered(tag: &str) -> bool {
    REGISTERED.with(|reg| reg.borrow().contains(tag))
}
