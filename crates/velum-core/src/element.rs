use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::props::PropValue;

/// Render output handed to the host's reconciler.
///
/// The reconciler itself is an external collaborator; this is only the
/// shape it consumes from an adapter's render function.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub props: HashMap<String, PropValue>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            props: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_props(mut self, props: HashMap<String, PropValue>) -> Self {
        self.props = props;
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }
}

/// Slotted child content, produced lazily so it reflects the host state at
/// the moment it is embedded or rendered.
pub type ChildSlot = Rc<dyn Fn() -> Vec<Element>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let el = Element::new("action-sheet")
            .prop("header", "Albums")
            .with_children(vec![Element::new("p")]);
        assert_eq!(el.tag, "action-sheet");
        assert_eq!(el.props.get("header"), Some(&PropValue::Str("Albums".into())));
        assert_eq!(el.children.len(), 1);
    }
}
