//! Single-occupancy holder for the overlay an adapter currently owns.
//!
//! The slot is the only race-prevention mechanism in this crate: every
//! lifecycle handler inspects it and awaits whatever is in flight before
//! acting, so two overlapping creations (or a dismissal racing a creation)
//! cannot happen. In-flight operations are stored as `Shared` futures so a
//! later handler joins the existing operation instead of starting another.

use std::cell::RefCell;
use std::fmt;

use futures::future::{LocalBoxFuture, Shared};

use velum_core::{OverlayError, OverlayHandle, PropValue};

/// Shared presentation chain: create, attach listeners, present. Resolves
/// to the live handle.
pub type PendingPresent = Shared<LocalBoxFuture<'static, Result<OverlayHandle, OverlayError>>>;

/// Shared dismissal chain. Resolves to the widget's optional dismissal
/// result.
pub type PendingDismiss =
    Shared<LocalBoxFuture<'static, Result<Option<PropValue>, OverlayError>>>;

/// `Empty → Presenting → Live → Dismissing → Empty`.
#[derive(Clone, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Presenting(PendingPresent),
    Live(OverlayHandle),
    Dismissing(PendingDismiss),
}

impl SlotState {
    pub fn name(&self) -> &'static str {
        match self {
            SlotState::Empty => "empty",
            SlotState::Presenting(_) => "presenting",
            SlotState::Live(_) => "live",
            SlotState::Dismissing(_) => "dismissing",
        }
    }
}

impl fmt::Debug for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The slot cell. Transitions are pattern-guarded: a chain resolving after
/// the slot has already moved on must not clobber the newer state.
#[derive(Default)]
pub struct SlotCell(RefCell<SlotState>);

impl SlotCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SlotState {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        matches!(&*self.0.borrow(), SlotState::Empty)
    }

    pub fn live(&self) -> Option<OverlayHandle> {
        match &*self.0.borrow() {
            SlotState::Live(handle) => Some(handle.clone()),
            _ => None,
        }
    }

    /// `Empty → Presenting`. Caller must have settled the slot first.
    pub fn begin_present(&self, pending: PendingPresent) {
        let mut state = self.0.borrow_mut();
        if !matches!(&*state, SlotState::Empty) {
            log::warn!("slot: begin_present while {}", state.name());
        }
        log::debug!("slot: {} -> presenting", state.name());
        *state = SlotState::Presenting(pending);
    }

    /// `Presenting → Live`, called by the presentation chain itself.
    pub fn finish_present(&self, handle: OverlayHandle) {
        let mut state = self.0.borrow_mut();
        match &*state {
            SlotState::Presenting(_) => {
                log::debug!("slot: presenting -> live");
                *state = SlotState::Live(handle);
            }
            other => log::warn!("slot: finish_present while {}", other.name()),
        }
    }

    /// `Presenting → Empty` after a failed creation, so a later open can
    /// retry instead of finding a stuck slot.
    pub fn abort_present(&self) {
        let mut state = self.0.borrow_mut();
        match &*state {
            SlotState::Presenting(_) => {
                log::debug!("slot: presenting -> empty (creation failed)");
                *state = SlotState::Empty;
            }
            other => log::warn!("slot: abort_present while {}", other.name()),
        }
    }

    /// `Live → Dismissing`.
    pub fn begin_dismiss(&self, pending: PendingDismiss) {
        let mut state = self.0.borrow_mut();
        match &*state {
            SlotState::Live(_) => {
                log::debug!("slot: live -> dismissing");
                *state = SlotState::Dismissing(pending);
            }
            other => log::warn!("slot: begin_dismiss while {}", other.name()),
        }
    }

    /// `Dismissing → Empty`, called by the dismissal chain. The slot is
    /// cleared even when the widget's dismiss failed; the error still
    /// propagates to the caller.
    pub fn finish_dismiss(&self) {
        let mut state = self.0.borrow_mut();
        match &*state {
            SlotState::Dismissing(_) => {
                log::debug!("slot: dismissing -> empty");
                *state = SlotState::Empty;
            }
            other => log::warn!("slot: finish_dismiss while {}", other.name()),
        }
    }
}
