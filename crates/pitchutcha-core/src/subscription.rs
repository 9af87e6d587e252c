//! Explicit listener lifetimes.
//!
//! Every registration hands back a [`Subscription`]; calling `dispose` removes
//! the listener. Dropping a subscription leaves the listener in place (and
//! leaks whatever it captured), which is what page-lifetime wiring wants.

use std::cell::RefCell;
use std::rc::Rc;

pub struct Subscription {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
        }
    }

    /// A subscription with nothing to undo (e.g. the target element was missing).
    pub fn noop() -> Self {
        Self { disposer: None }
    }

    pub fn dispose(mut self) {
        if let Some(d) = self.disposer.take() {
            d();
        }
    }

    pub fn is_noop(&self) -> bool {
        self.disposer.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Not disposed: the listener stays registered, so its resources must
        // outlive this handle.
        if let Some(d) = self.disposer.take() {
            std::mem::forget(d);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.disposer.is_some())
            .finish()
    }
}

/// A bag of subscriptions torn down together.
#[derive(Debug, Default)]
pub struct Subscriptions {
    items: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: Subscription) {
        if !sub.is_noop() {
            self.items.push(sub);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dispose in reverse registration order.
    pub fn dispose_all(&mut self) {
        while let Some(sub) = self.items.pop() {
            sub.dispose();
        }
    }
}

type Handler<T> = Box<dyn FnMut(&T)>;

struct HubInner<T> {
    next_id: u64,
    handlers: Vec<(u64, Rc<RefCell<Handler<T>>>)>,
}

/// In-process publisher. Cheap to clone; clones share listeners.
pub struct EventHub<T> {
    inner: Rc<RefCell<HubInner<T>>>,
}

impl<T> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }
}

impl<T: 'static> EventHub<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .handlers
                .push((id, Rc::new(RefCell::new(Box::new(handler) as Handler<T>))));
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().handlers.retain(|(hid, _)| *hid != id);
            }
        })
    }

    /// Deliver `event` to every current listener. Listeners may subscribe or
    /// dispose while being notified; changes apply from the next publish.
    pub fn publish(&self, event: &T) {
        let snapshot: Vec<Rc<RefCell<Handler<T>>>> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in snapshot {
            if let Ok(mut h) = handler.try_borrow_mut() {
                (&mut **h)(event);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}
