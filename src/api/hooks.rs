//! Observers for rejected credentials
//!
//! The HTTP client notifies these listeners after it has cleared a token the
//! backend rejected. Registering returns a guard; dropping the guard removes
//! the listener, so teardown needs no extra bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Registry of "credentials were rejected" listeners
#[derive(Default)]
pub struct UnauthorizedHooks {
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl UnauthorizedHooks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a listener; it stays registered while the guard lives
    pub fn register<F>(self: &Arc<Self>, listener: F) -> HookGuard
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, Arc::new(listener)));
        HookGuard {
            hooks: Arc::downgrade(self),
            id,
        }
    }

    /// Call every registered listener, returning how many ran
    pub fn notify(&self) -> usize {
        // Snapshot so listeners can (de)register without deadlocking
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in &listeners {
            listener();
        }
        listeners.len()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(&self, id: u64) {
        self.listeners.lock().retain(|(existing, _)| *existing != id);
    }
}

/// Keeps a listener registered; deregisters on drop
#[must_use = "dropping the guard immediately deregisters the listener"]
pub struct HookGuard {
    hooks: Weak<UnauthorizedHooks>,
    id: u64,
}

impl HookGuard {
    /// Deregister now
    pub fn unregister(self) {
        drop(self);
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        if let Some(hooks) = self.hooks.upgrade() {
            hooks.remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_notify_calls_listeners() {
        let hooks = UnauthorizedHooks::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let _guard = hooks.register(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(hooks.notify(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_guard_deregisters() {
        let hooks = UnauthorizedHooks::new();
        let guard = hooks.register(|| {});
        let other = hooks.register(|| {});
        assert_eq!(hooks.len(), 2);

        guard.unregister();
        assert_eq!(hooks.len(), 1);

        drop(other);
        assert!(hooks.is_empty());
        assert_eq!(hooks.notify(), 0);
    }

    #[test]
    fn test_guard_outliving_registry() {
        let hooks = UnauthorizedHooks::new();
        let guard = hooks.register(|| {});
        drop(hooks);
        drop(guard);
    }
}
