use std::cell::Cell;
use std::rc::Rc;

/// Shared flag tied to a view's lifetime. Async work checks it after each
/// await and drops its result once the owning view has been disposed.
#[derive(Clone, Debug, Default)]
pub struct Lifetime {
    disposed: Rc<Cell<bool>>,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_disposal() {
        let lifetime = Lifetime::new();
        let held_by_task = lifetime.clone();
        assert!(!held_by_task.is_disposed());
        lifetime.dispose();
        assert!(held_by_task.is_disposed());
    }
}
