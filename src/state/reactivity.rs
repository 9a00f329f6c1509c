// ============================================================================
// REACTIVITY - shared state with change subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Value shared between async tasks and the view. Every `update` notifies the
/// subscribers, which is how the view learns it must re-render.
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Borrow the value without notifying.
    pub fn read<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Mutate the value, then notify. The borrow is released before any
    /// subscriber runs, so subscribers may read the state again.
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn notify(&self) {
        // Snapshot so a subscriber can (un)subscribe while being notified.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_notifies_until_unsubscribed() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let id = state.subscribe(move || counter.set(counter.get() + 1));

        state.update(|v| *v += 1);
        state.update(|v| *v += 1);
        assert_eq!(hits.get(), 2);
        assert_eq!(state.snapshot(), 2);

        state.unsubscribe(id);
        state.update(|v| *v += 1);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_can_read_during_notify() {
        let state = Rc::new(ReactiveState::new(String::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let reader = state.clone();
        let log = seen.clone();
        state.subscribe(move || log.borrow_mut().push(reader.snapshot()));

        state.update(|s| s.push('a'));
        assert_eq!(*seen.borrow(), vec!["a".to_string()]);
    }
}
