use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::element::Element;
use crate::error::OverlayError;
use crate::props::PropValue;

/// Single-threaded future used across the overlay surface. Suspension only
/// happens at these boundaries; there is no cancellation.
pub type OverlayFuture<T> = LocalBoxFuture<'static, Result<T, OverlayError>>;

/// Live overlay widget handle.
pub trait OverlayInstance {
    /// Resolves when the presentation animation/transition completes.
    fn present(&self) -> OverlayFuture<()>;

    /// Resolves when dismissal completes, with the widget's optional
    /// dismissal result.
    fn dismiss(&self) -> OverlayFuture<Option<PropValue>>;

    fn add_event_listener(&self, event: &str, handler: Rc<dyn Fn()>);
}

pub type OverlayHandle = Rc<dyn OverlayInstance>;

/// Configuration handed to [`OverlayController::create`]: the filtered prop
/// snapshot plus the embedded child content, if any.
#[derive(Clone, Debug)]
pub struct CreatePayload {
    pub props: HashMap<String, PropValue>,
    pub component: Option<Element>,
}

/// Factory that creates overlay instances on demand (controller mode).
pub trait OverlayController {
    fn create(&self, payload: CreatePayload) -> OverlayFuture<OverlayHandle>;
}
