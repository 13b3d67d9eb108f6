use std::rc::Rc;

/// Host-provided emit capability. Receives the adapter-level event name;
/// adapter events carry no payload.
pub type EventSink = Rc<dyn Fn(&'static str)>;

/// Adapter-level event names, in binding-table order.
pub static EMITTED_EVENTS: [&str; 4] =
    ["willPresent", "didPresent", "willDismiss", "didDismiss"];

/// One row of the fixed binding table between the widget's native lifecycle
/// events and the events re-emitted to the host framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    WillPresent,
    DidPresent,
    WillDismiss,
    DidDismiss,
}

impl OverlayEvent {
    pub const ALL: [OverlayEvent; 4] = [
        OverlayEvent::WillPresent,
        OverlayEvent::DidPresent,
        OverlayEvent::WillDismiss,
        OverlayEvent::DidDismiss,
    ];

    /// Event name on the custom element itself.
    pub fn native(self) -> &'static str {
        match self {
            OverlayEvent::WillPresent => "will-present",
            OverlayEvent::DidPresent => "did-present",
            OverlayEvent::WillDismiss => "will-dismiss",
            OverlayEvent::DidDismiss => "did-dismiss",
        }
    }

    /// Event name re-emitted to the host framework.
    pub fn emitted(self) -> &'static str {
        match self {
            OverlayEvent::WillPresent => "willPresent",
            OverlayEvent::DidPresent => "didPresent",
            OverlayEvent::WillDismiss => "willDismiss",
            OverlayEvent::DidDismiss => "didDismiss",
        }
    }

    /// Listener prop the host injects for this event. These arrive inside
    /// the prop snapshot and must be stripped from create payloads.
    pub fn callback_prop(self) -> &'static str {
        match self {
            OverlayEvent::WillPresent => "onWillPresent",
            OverlayEvent::DidPresent => "onDidPresent",
            OverlayEvent::WillDismiss => "onWillDismiss",
            OverlayEvent::DidDismiss => "onDidDismiss",
        }
    }
}
