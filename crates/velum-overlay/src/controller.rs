//! Controller-driven adapter.
//!
//! Guarantees the wrapped overlay is presented iff the most recently
//! observed `isOpen` is true. Presentation and dismissal are chains of
//! suspension points; the [`SlotCell`] serializes them per adapter.

use std::rc::Rc;

use futures::future;
use futures::{FutureExt, TryFutureExt};

use velum_core::{
    ChildSlot, CreatePayload, Element, EventSink, IS_OPEN, OverlayController, OverlayError,
    OverlayEvent, OverlayFuture, OverlayHandle, PropSnapshot, PropValue,
};

use crate::slot::{SlotCell, SlotState};

/// Drives a controller-created overlay from the declarative `isOpen` flag.
///
/// Cheap to clone; clones share the same slot.
#[derive(Clone)]
pub struct ControllerAdapter {
    inner: Rc<Inner>,
}

struct Inner {
    tag: String,
    controller: Rc<dyn OverlayController>,
    emit: EventSink,
    children: Option<ChildSlot>,
    slot: SlotCell,
}

impl ControllerAdapter {
    pub(crate) fn new(
        tag: String,
        controller: Rc<dyn OverlayController>,
        emit: EventSink,
        children: Option<ChildSlot>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                tag,
                controller,
                emit,
                children,
                slot: SlotCell::new(),
            }),
        }
    }

    pub fn mounted(&self, snapshot: &PropSnapshot) -> OverlayFuture<()> {
        if snapshot.is_open() {
            self.present(snapshot.clone())
        } else {
            future::ok(()).boxed_local()
        }
    }

    /// The sole place the flag is level-compared; every other path is
    /// edge-triggered from here.
    pub fn updated(&self, snapshot: &PropSnapshot, previous: &PropSnapshot) -> OverlayFuture<()> {
        if snapshot.get(IS_OPEN) == previous.get(IS_OPEN) {
            return future::ok(()).boxed_local();
        }
        if snapshot.is_open() {
            self.present(snapshot.clone())
        } else {
            self.dismiss().map_ok(|_| ()).boxed_local()
        }
    }

    /// Forced cleanup, regardless of the current flag value.
    pub fn before_unmount(&self) -> OverlayFuture<()> {
        self.dismiss().map_ok(|_| ()).boxed_local()
    }

    /// Controller mode renders nothing itself; the overlay lives outside
    /// the host's tree. A hidden anchor mirrors the flag for inspection.
    pub fn render(&self, snapshot: &PropSnapshot) -> Element {
        Element::new("div")
            .prop("hidden", true)
            .prop(IS_OPEN, snapshot.is_open())
    }

    /// True when no overlay is live or in flight.
    pub fn is_idle(&self) -> bool {
        self.inner.slot.is_empty()
    }

    /// Present the overlay described by `snapshot`, creating it if needed.
    ///
    /// Safe to invoke while a previous present or dismiss is still
    /// suspended: the call settles the slot first and joins an in-flight
    /// presentation rather than creating a second instance.
    pub fn present(&self, snapshot: PropSnapshot) -> OverlayFuture<()> {
        let inner = self.inner.clone();
        async move {
            loop {
                match inner.slot.state() {
                    SlotState::Presenting(pending) => {
                        // Join the in-flight presentation: one create, one
                        // present, no matter how many callers pile up here.
                        pending.await?;
                        return Ok(());
                    }
                    SlotState::Live(handle) => {
                        // Already created; just re-show it.
                        return handle.present().await;
                    }
                    SlotState::Dismissing(pending) => {
                        pending.await?;
                    }
                    SlotState::Empty => break,
                }
            }

            let payload = inner.payload(&snapshot);
            let chain = Inner::presentation(inner.clone(), payload)
                .boxed_local()
                .shared();
            inner.slot.begin_present(chain.clone());
            chain.await.map(|_| ())
        }
        .boxed_local()
    }

    /// Dismiss whatever the slot holds. No-op on an empty slot.
    pub fn dismiss(&self) -> OverlayFuture<Option<PropValue>> {
        let inner = self.inner.clone();
        async move {
            loop {
                match inner.slot.state() {
                    SlotState::Empty => return Ok(None),
                    SlotState::Presenting(pending) => {
                        if let Err(err) = pending.await {
                            // The presenting caller already surfaced this
                            // failure. Re-inspect the slot: a failed
                            // creation left it empty, but a present()
                            // failure after creation leaves a live handle
                            // that still needs dismissing.
                            log::warn!(
                                "<{}> presentation failed while a dismissal was queued: {err}",
                                inner.tag
                            );
                        }
                    }
                    SlotState::Dismissing(pending) => return pending.await,
                    SlotState::Live(handle) => {
                        let chain = {
                            let inner = inner.clone();
                            async move {
                                let out = handle.dismiss().await;
                                inner.slot.finish_dismiss();
                                out
                            }
                        }
                        .boxed_local()
                        .shared();
                        inner.slot.begin_dismiss(chain.clone());
                        return chain.await;
                    }
                }
            }
        }
        .boxed_local()
    }
}

impl Inner {
    fn payload(&self, snapshot: &PropSnapshot) -> CreatePayload {
        let component = self
            .children
            .as_ref()
            .and_then(|slot| slot().into_iter().next());
        CreatePayload {
            props: snapshot.forwarded_for_create(),
            component,
        }
    }

    /// One slot occupancy: create, bind the event table, present.
    async fn presentation(
        inner: Rc<Inner>,
        payload: CreatePayload,
    ) -> Result<OverlayHandle, OverlayError> {
        let handle = match inner.controller.create(payload).await {
            Ok(handle) => handle,
            Err(err) => {
                inner.slot.abort_present();
                return Err(err);
            }
        };

        for event in OverlayEvent::ALL {
            let emit = inner.emit.clone();
            handle.add_event_listener(event.native(), Rc::new(move || emit(event.emitted())));
        }

        let shown = handle.present().await;
        // The instance exists either way; record it before propagating a
        // present failure so a forced teardown can still reach it.
        inner.slot.finish_present(handle.clone());
        shown?;
        Ok(handle)
    }
}
