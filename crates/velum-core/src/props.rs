use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::events::OverlayEvent;

/// Reserved prop carrying the declarative open flag.
pub const IS_OPEN: &str = "isOpen";

/// Value of a framework-level prop.
///
/// `Unset` is the internal sentinel a declared prop defaults to when the
/// caller supplied nothing. It is a dedicated variant rather than `Null` so
/// "not provided" stays distinguishable from "explicitly provided as empty".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PropValue {
    Unset,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PropValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, PropValue::Unset)
    }

    /// `true` only for `Bool(true)`; every other value reads as closed.
    pub fn truthy(&self) -> bool {
        matches!(self, PropValue::Bool(true))
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        PropValue::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(v)
    }
}

/// The props passed to an adapter at one point in time.
///
/// Lookups for undeclared names yield `Unset`, matching how the host treats
/// a prop it never defaulted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropSnapshot {
    values: HashMap<String, PropValue>,
}

const UNSET: &PropValue = &PropValue::Unset;

impl PropSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with every declared prop at its `Unset` default.
    pub fn with_declared<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = names
            .into_iter()
            .map(|name| (name.into(), PropValue::Unset))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style `set`.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> &PropValue {
        self.values.get(name).unwrap_or(UNSET)
    }

    pub fn is_open(&self) -> bool {
        self.get(IS_OPEN).truthy()
    }

    /// Props to forward to the overlay: everything except `Unset` entries,
    /// verbatim.
    pub fn forwarded(&self) -> HashMap<String, PropValue> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_unset())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Like [`forwarded`](Self::forwarded), but additionally strips the
    /// four host-injected event-callback props, which must not reach the
    /// widget as plain props.
    pub fn forwarded_for_create(&self) -> HashMap<String, PropValue> {
        let mut props = self.forwarded();
        for event in OverlayEvent::ALL {
            props.remove(event.callback_prop());
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_props_are_filtered() {
        let snapshot = PropSnapshot::with_declared(["isOpen", "backdropDismiss", "duration"])
            .prop("backdropDismiss", false);

        let forwarded = snapshot.forwarded();
        assert_eq!(forwarded.len(), 1);
        assert_eq!(
            forwarded.get("backdropDismiss"),
            Some(&PropValue::Bool(false))
        );
    }

    #[test]
    fn test_supplied_props_forward_verbatim() {
        let snapshot = PropSnapshot::new()
            .prop("header", "Session expired")
            .prop("duration", 250i64)
            .prop("opacity", 0.5);

        let forwarded = snapshot.forwarded();
        assert_eq!(
            forwarded.get("header"),
            Some(&PropValue::Str("Session expired".into()))
        );
        assert_eq!(forwarded.get("duration"), Some(&PropValue::Int(250)));
        assert_eq!(forwarded.get("opacity"), Some(&PropValue::Float(0.5)));
    }

    #[test]
    fn test_null_is_not_unset() {
        let snapshot = PropSnapshot::new().prop("result", PropValue::Null);
        assert!(snapshot.forwarded().contains_key("result"));
    }

    #[test]
    fn test_create_payload_strips_callback_props() {
        let snapshot = PropSnapshot::new()
            .prop(IS_OPEN, true)
            .prop("onWillPresent", PropValue::Null)
            .prop("onDidPresent", PropValue::Null)
            .prop("onWillDismiss", PropValue::Null)
            .prop("onDidDismiss", PropValue::Null);

        let props = snapshot.forwarded_for_create();
        assert_eq!(props.len(), 1);
        assert_eq!(props.get(IS_OPEN), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_is_open_requires_true() {
        assert!(PropSnapshot::new().prop(IS_OPEN, true).is_open());
        assert!(!PropSnapshot::new().prop(IS_OPEN, false).is_open());
        assert!(!PropSnapshot::new().is_open());
        assert!(!PropSnapshot::new().prop(IS_OPEN, "yes").is_open());
    }
}
