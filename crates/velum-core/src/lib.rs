//! # Props, events, and overlay capabilities
//!
//! `velum-core` holds the vocabulary shared by both adapter modes in
//! `velum-overlay`:
//!
//! - [`PropValue`] / [`PropSnapshot`] — framework props with an explicit
//!   unset sentinel, so "caller never supplied this" survives prop
//!   defaulting.
//! - [`OverlayInstance`] / [`OverlayController`] — the capability set an
//!   overlay widget (or its factory) must expose.
//! - [`OverlayEvent`] — the fixed binding table between the widget's native
//!   lifecycle events and the adapter-level events re-emitted to the host.
//! - [`registry::ensure_registered`] — idempotent custom-element
//!   registration.
//!
//! ## Prop filtering
//!
//! Declared props default to [`PropValue::Unset`]. Anything still at that
//! default is excluded from payloads forwarded to the widget, so
//! framework-injected defaults never leak through:
//!
//! ```rust
//! use velum_core::{PropSnapshot, PropValue};
//!
//! let snapshot = PropSnapshot::with_declared(["isOpen", "duration"])
//!     .prop("duration", 300i64);
//!
//! let forwarded = snapshot.forwarded();
//! assert!(forwarded.contains_key("duration"));
//! assert!(!forwarded.contains_key("isOpen")); // still at the unset default
//! ```
//!
//! Everything here is single-threaded: handles are `Rc`, futures are
//! [`LocalBoxFuture`](futures::future::LocalBoxFuture), and there are no
//! `Send` bounds. The host runtime owns the one UI thread.

pub mod element;
pub mod error;
pub mod events;
pub mod instance;
pub mod props;
pub mod registry;
pub mod signal;

pub use element::*;
pub use error::*;
pub use events::*;
pub use instance::*;
pub use props::*;
pub use registry::*;
pub use signal::*;
