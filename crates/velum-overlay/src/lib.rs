//! # Overlay lifecycle adapters
//!
//! Bridges a declarative component model to imperative overlay custom
//! elements (modals, popovers, action sheets). Declarative code toggles an
//! `isOpen` prop; the widget itself has `present()`/`dismiss()` and emits
//! `will-present`/`did-present`/`will-dismiss`/`did-dismiss`.
//!
//! Two modes behind one factory:
//!
//! - [`ControllerAdapter`] — wraps an
//!   [`OverlayController`](velum_core::OverlayController) and drives
//!   instances from the flag.
//! - [`InlineAdapter`] — wraps a statically-rendered element and only
//!   mirrors the open state the element reports through its own events.
//!
//! ```rust
//! use std::rc::Rc;
//! use velum_core::EventSink;
//! use velum_overlay::{OverlayAdapter, define_overlay_component};
//!
//! let sheet = define_overlay_component("action-sheet", || {}, &["header"], None);
//! assert_eq!(sheet.display_name(), "ActionSheet");
//!
//! let emit: EventSink = Rc::new(|_| {});
//! let adapter = sheet.instantiate(emit, None);
//! let snapshot = sheet.default_snapshot().prop("header", "Albums");
//!
//! let element = match &adapter {
//!     OverlayAdapter::Inline(inline) => inline.render(&snapshot),
//!     OverlayAdapter::Controller(_) => unreachable!(),
//! };
//! assert_eq!(element.tag, "action-sheet");
//! ```

pub mod controller;
pub mod inline;
pub mod slot;

pub use controller::ControllerAdapter;
pub use inline::InlineAdapter;

use std::rc::Rc;

use futures::FutureExt;
use futures::future;
use heck::ToUpperCamelCase;

use velum_core::{
    ChildSlot, Element, EMITTED_EVENTS, EventSink, IS_OPEN, OverlayController, OverlayFuture,
    OverlayHandle, PropSnapshot, registry,
};

/// Component definition exposed to the host framework: declared props with
/// unset defaults, declared events (controller mode only), a display
/// identifier, and the ability to instantiate adapters.
pub struct OverlayComponent {
    tag: String,
    display_name: String,
    props: Vec<String>,
    emits: &'static [&'static str],
    controller: Option<Rc<dyn OverlayController>>,
    register: Rc<dyn Fn()>,
}

impl OverlayComponent {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// PascalCase of the tag, for debugging/introspection.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Declared prop names: `isOpen` plus the pass-through list.
    pub fn prop_names(&self) -> &[String] {
        &self.props
    }

    /// Adapter-level events this component emits. Empty in inline mode.
    pub fn emits(&self) -> &'static [&'static str] {
        self.emits
    }

    /// Every declared prop at its unset default; the host merges the
    /// caller's values over this.
    pub fn default_snapshot(&self) -> PropSnapshot {
        PropSnapshot::with_declared(self.props.iter().cloned())
    }

    /// Construct an adapter instance, registering the custom element on
    /// first use of the tag.
    pub fn instantiate(&self, emit: EventSink, children: Option<ChildSlot>) -> OverlayAdapter {
        let register = self.register.clone();
        registry::ensure_registered(&self.tag, || register());

        match &self.controller {
            Some(controller) => OverlayAdapter::Controller(ControllerAdapter::new(
                self.tag.clone(),
                controller.clone(),
                emit,
                children,
            )),
            None => OverlayAdapter::Inline(InlineAdapter::new(self.tag.clone(), children)),
        }
    }
}

/// Define an overlay component for `tag`.
///
/// With a `controller`, the component drives presentation from `isOpen`
/// and declares the four adapter-level events. Without one, the element is
/// rendered inline and left to manage itself.
pub fn define_overlay_component(
    tag: impl Into<String>,
    register: impl Fn() + 'static,
    pass_through: &[&str],
    controller: Option<Rc<dyn OverlayController>>,
) -> OverlayComponent {
    let tag = tag.into();
    let mut props = Vec::with_capacity(pass_through.len() + 1);
    props.push(IS_OPEN.to_string());
    props.extend(pass_through.iter().map(|name| (*name).to_string()));

    OverlayComponent {
        display_name: tag.to_upper_camel_case(),
        emits: if controller.is_some() {
            &EMITTED_EVENTS
        } else {
            &[]
        },
        tag,
        props,
        controller,
        register: Rc::new(register),
    }
}

/// Either adapter mode behind the lifecycle surface the host drives.
pub enum OverlayAdapter {
    Controller(ControllerAdapter),
    Inline(InlineAdapter),
}

impl OverlayAdapter {
    /// Mount notification. Inline mode needs the mounted element handle to
    /// attach its open-tracking listeners; controller mode ignores it.
    pub fn mounted(
        &self,
        snapshot: &PropSnapshot,
        element: Option<OverlayHandle>,
    ) -> OverlayFuture<()> {
        match self {
            OverlayAdapter::Controller(adapter) => adapter.mounted(snapshot),
            OverlayAdapter::Inline(adapter) => {
                if let Some(element) = element {
                    adapter.mounted(element);
                }
                future::ok(()).boxed_local()
            }
        }
    }

    pub fn updated(&self, snapshot: &PropSnapshot, previous: &PropSnapshot) -> OverlayFuture<()> {
        match self {
            OverlayAdapter::Controller(adapter) => adapter.updated(snapshot, previous),
            OverlayAdapter::Inline(_) => future::ok(()).boxed_local(),
        }
    }

    pub fn before_unmount(&self) -> OverlayFuture<()> {
        match self {
            OverlayAdapter::Controller(adapter) => adapter.before_unmount(),
            OverlayAdapter::Inline(_) => future::ok(()).boxed_local(),
        }
    }

    pub fn render(&self, snapshot: &PropSnapshot) -> Element {
        match self {
            OverlayAdapter::Controller(adapter) => adapter.render(snapshot),
            OverlayAdapter::Inline(adapter) => adapter.render(snapshot),
        }
    }
}
