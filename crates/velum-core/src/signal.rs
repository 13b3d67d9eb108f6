use std::cell::RefCell;
use std::rc::Rc;

/// Observable cell. Writes notify subscribers, and only when the value
/// actually changed, so downstream consumers stay edge-triggered.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Rc<dyn Fn(&T)>>,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, value: T) {
        // Notify with no borrow held, so a subscriber may re-enter `set`.
        let subs = {
            let mut inner = self.0.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.subs.clone()
        };
        for sub in &subs {
            sub(&value);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.0.borrow_mut().subs.push(Rc::new(f));
    }
}

pub fn signal<T: Clone + PartialEq>(value: T) -> Signal<T> {
    Signal::new(value)
}
