//! Scoped ownership of native event subscriptions.
//!
//! The host's `listen` call hands back an unlisten function. Losing it leaks
//! the handler, and re-subscribing without calling it delivers every later
//! event twice. [`Subscription`] owns that function and guarantees it runs
//! exactly once, at cancel or drop.

/// Owns one channel subscription's release action.
pub struct Subscription {
    unlisten: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unlisten: impl FnOnce() + 'static) -> Self {
        Self {
            unlisten: Some(Box::new(unlisten)),
        }
    }

    /// A subscription that was never established, e.g. because the native
    /// host is unavailable. Cancelling it is a no-op.
    pub fn detached() -> Self {
        Self { unlisten: None }
    }

    /// Releases the subscription. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
        }
    }

    /// Swaps in a fresh subscription, releasing the old handler first so no
    /// later event is ever delivered to both.
    pub fn replace(&mut self, mut next: Subscription) {
        self.cancel();
        self.unlisten = next.unlisten.take();
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::detached()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::DropCoordinator;
    use crate::file::DroppedFile;
    use crate::geometry::BoundingBox;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    type Handler = Box<dyn Fn(DroppedFile)>;

    /// Stand-in for the host event channel: handlers registered by id,
    /// unlisten removes them.
    #[derive(Default)]
    struct FakeChannel {
        handlers: Rc<RefCell<HashMap<u32, Handler>>>,
        next_id: Cell<u32>,
    }

    impl FakeChannel {
        fn subscribe(&self, handler: Handler) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().insert(id, handler);
            let handlers = Rc::clone(&self.handlers);
            Subscription::new(move || {
                handlers.borrow_mut().remove(&id);
            })
        }

        fn dispatch(&self, payload: DroppedFile) {
            for handler in self.handlers.borrow().values() {
                handler(payload.clone());
            }
        }

        fn handler_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    fn payload() -> DroppedFile {
        DroppedFile {
            path: "/tmp/report.pdf".to_string(),
            x: 10.0,
            y: 10.0,
            buffer: vec![1],
        }
    }

    #[test]
    fn test_resubscribe_delivers_single_drop_once() {
        let channel = FakeChannel::default();
        let coordinator = Rc::new(RefCell::new(DropCoordinator::new()));
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);

        let subscribe = |channel: &FakeChannel| {
            let coordinator = Rc::clone(&coordinator);
            channel.subscribe(Box::new(move |p| {
                coordinator.borrow_mut().file_dropped(p, &bounds);
            }))
        };

        let mut slot = subscribe(&channel);
        // Simulates the geometry reference changing: fresh subscription
        // replaces the old one before any further event.
        slot.replace(subscribe(&channel));
        assert_eq!(channel.handler_count(), 1);

        channel.dispatch(payload());
        assert_eq!(coordinator.borrow().queue().len(), 1);
    }

    #[test]
    fn test_state_survives_resubscription() {
        let channel = FakeChannel::default();
        let coordinator = Rc::new(RefCell::new(DropCoordinator::new()));
        let bounds = BoundingBox::new(0.0, 0.0, 100.0, 100.0);

        let subscribe = |channel: &FakeChannel| {
            let coordinator = Rc::clone(&coordinator);
            channel.subscribe(Box::new(move |p| {
                coordinator.borrow_mut().file_dropped(p, &bounds);
            }))
        };

        let mut slot = subscribe(&channel);
        channel.dispatch(payload());
        slot.replace(subscribe(&channel));
        channel.dispatch(payload());

        // Queue persisted across the re-subscription: one file per dispatch.
        assert_eq!(coordinator.borrow().queue().len(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let released = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&released);
        let mut subscription = Subscription::new(move || counter.set(counter.get() + 1));

        subscription.cancel();
        subscription.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_drop_releases_handler() {
        let channel = FakeChannel::default();
        let subscription = channel.subscribe(Box::new(|_| {}));
        assert_eq!(channel.handler_count(), 1);
        drop(subscription);
        assert_eq!(channel.handler_count(), 0);
    }

    #[test]
    fn test_detached_subscription_is_inert() {
        let mut subscription = Subscription::detached();
        subscription.cancel();
    }
}
