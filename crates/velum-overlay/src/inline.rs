//! Inline adapter.
//!
//! The element is rendered unconditionally and manages its own open/closed
//! transitions natively. The adapter only mirrors that state so slotted
//! children are composed while open and torn down by the host's own
//! reconciliation when closed.

use std::cell::RefCell;
use std::rc::Rc;

use velum_core::{ChildSlot, Element, OverlayEvent, OverlayHandle, PropSnapshot, Signal};

#[derive(Clone)]
pub struct InlineAdapter {
    inner: Rc<InlineInner>,
}

struct InlineInner {
    tag: String,
    open: Signal<bool>,
    children: Option<ChildSlot>,
    element: RefCell<Option<OverlayHandle>>,
}

impl InlineAdapter {
    pub(crate) fn new(tag: String, children: Option<ChildSlot>) -> Self {
        Self {
            inner: Rc::new(InlineInner {
                tag,
                open: Signal::new(false),
                children,
                element: RefCell::new(None),
            }),
        }
    }

    /// Attach the open-tracking listeners to the freshly mounted element.
    /// Only the first mount wires anything up.
    pub fn mounted(&self, element: OverlayHandle) {
        if self.inner.element.borrow().is_some() {
            log::warn!("<{}> inline adapter mounted twice", self.inner.tag);
            return;
        }

        let open = self.inner.open.clone();
        element.add_event_listener(OverlayEvent::WillPresent.native(), {
            let open = open.clone();
            Rc::new(move || open.set(true))
        });
        element.add_event_listener(OverlayEvent::DidDismiss.native(), {
            Rc::new(move || open.set(false))
        });

        *self.inner.element.borrow_mut() = Some(element);
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Subscription point for the host to schedule a re-render when the
    /// element's presentation state changes.
    pub fn open_signal(&self) -> Signal<bool> {
        self.inner.open.clone()
    }

    /// The element with its filtered props; slotted children only while
    /// the element reports itself open.
    pub fn render(&self, snapshot: &PropSnapshot) -> Element {
        let mut element = Element::new(self.inner.tag.clone()).with_props(snapshot.forwarded());
        if self.inner.open.get()
            && let Some(children) = &self.inner.children
        {
            element.children = children();
        }
        element
    }
}
