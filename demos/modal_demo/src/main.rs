//! Drives a controller-backed modal through a full open/close lifecycle
//! from the command line. Run with `RUST_LOG=debug` to watch the slot
//! transitions.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::executor::LocalPool;
use futures::future;

use velum_core::{
    CreatePayload, Element, EventSink, OverlayController, OverlayFuture, OverlayHandle,
    OverlayInstance, PropValue,
};
use velum_overlay::{OverlayAdapter, define_overlay_component};

/// Stand-in for a real modal custom element.
struct DemoModal {
    listeners: RefCell<Vec<(String, Rc<dyn Fn()>)>>,
}

impl DemoModal {
    fn fire(&self, event: &str) {
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in listeners {
            handler();
        }
    }
}

impl OverlayInstance for DemoModal {
    fn present(&self) -> OverlayFuture<()> {
        log::info!("modal: animating in");
        self.fire("will-present");
        self.fire("did-present");
        future::ok(()).boxed_local()
    }

    fn dismiss(&self) -> OverlayFuture<Option<PropValue>> {
        log::info!("modal: animating out");
        self.fire("will-dismiss");
        self.fire("did-dismiss");
        future::ok(Some(PropValue::Str("closed by demo".into()))).boxed_local()
    }

    fn add_event_listener(&self, event: &str, handler: Rc<dyn Fn()>) {
        self.listeners
            .borrow_mut()
            .push((event.to_string(), handler));
    }
}

struct DemoModalController;

impl OverlayController for DemoModalController {
    fn create(&self, payload: CreatePayload) -> OverlayFuture<OverlayHandle> {
        log::info!("controller: creating modal with {} props", payload.props.len());
        if let Some(component) = &payload.component {
            log::info!("controller: slotted content <{}>", component.tag);
        }
        let handle: OverlayHandle = Rc::new(DemoModal {
            listeners: RefCell::new(Vec::new()),
        });
        future::ok(handle).boxed_local()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let modal = define_overlay_component(
        "demo-modal",
        || log::info!("registering <demo-modal>"),
        &["backdropDismiss", "header"],
        Some(Rc::new(DemoModalController)),
    );
    log::info!("defined {} ({})", modal.display_name(), modal.tag());

    let emit: EventSink = Rc::new(|event| log::info!("host event: {event}"));
    let adapter = modal.instantiate(emit, Some(Rc::new(|| vec![Element::new("p")])));

    let closed = modal.default_snapshot().prop("isOpen", false);
    let open = modal
        .default_snapshot()
        .prop("isOpen", true)
        .prop("header", "Hello from velum");

    let mut pool = LocalPool::new();
    pool.run_until(async {
        adapter.mounted(&closed, None).await?;
        log::info!("mounted closed; opening");
        adapter.updated(&open, &closed).await?;
        log::info!("open; closing");
        adapter.updated(&closed, &open).await?;
        adapter.before_unmount().await?;
        log::info!("unmounted");
        Ok::<_, velum_core::OverlayError>(())
    })?;

    Ok(())
}
