//! Hot, replaying state holder.
//!
//! A `StateFlow` always has a current value. New observers receive it
//! immediately, then every later emission in publish order. Observers are
//! called outside the internal lock, so an observer may read the flow again.
//! A publish made from inside an observer is queued and delivered after the
//! current emission has reached every observer.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::component::lifecycle::Lifecycle;
use crate::error::NavError;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

pub struct StateFlow<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

struct Shared<T> {
    value: T,
    version: u64,
    next_id: u64,
    /// Observer id, version it was subscribed at, callback.
    observers: Vec<(u64, u64, Observer<T>)>,
    pending: VecDeque<(u64, T)>,
    delivering: bool,
}

impl<T> Clone for StateFlow<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> StateFlow<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                value: initial,
                version: 0,
                next_id: 0,
                observers: Vec::new(),
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> T {
        self.shared.lock().value.clone()
    }

    /// Replace the value and notify every observer.
    ///
    /// Emissions are delivered one at a time in publish order. When called
    /// while another emission is being delivered, the value is set at once
    /// and its delivery is left to the outer call.
    pub fn publish(&self, value: T) {
        {
            let mut shared = self.shared.lock();
            shared.version += 1;
            let version = shared.version;
            shared.value = value.clone();
            shared.pending.push_back((version, value));
            if shared.delivering {
                return;
            }
            shared.delivering = true;
        }
        self.drain();
    }

    fn drain(&self) {
        loop {
            let (value, observers) = {
                let mut shared = self.shared.lock();
                let Some((version, value)) = shared.pending.pop_front() else {
                    shared.delivering = false;
                    return;
                };
                let observers: Vec<Observer<T>> = shared
                    .observers
                    .iter()
                    .filter(|(_, since, _)| *since < version)
                    .map(|(_, _, o)| Arc::clone(o))
                    .collect();
                (value, observers)
            };
            for observer in observers {
                observer(&value);
            }
        }
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let observer: Observer<T> = Arc::new(observer);
        let (id, current) = {
            let mut shared = self.shared.lock();
            let id = shared.next_id;
            shared.next_id += 1;
            let since = shared.version;
            shared.observers.push((id, since, Arc::clone(&observer)));
            (id, shared.value.clone())
        };
        observer(&current);

        let shared = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.lock().observers.retain(|(oid, _, _)| *oid != id);
                }
            })),
        }
    }

    /// Subscribe for as long as `lifecycle` lives.
    pub fn subscribe_in(
        &self,
        lifecycle: &Lifecycle,
        observer: impl Fn(&T) + Send + Sync + 'static,
    ) -> Result<(), NavError> {
        lifecycle.ensure_alive()?;
        let subscription = self.subscribe(observer);
        lifecycle.do_on_destroy(move || subscription.cancel());
        Ok(())
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().observers.len()
    }
}

impl<T> StateFlow<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Publish only when the value actually changes. Returns whether it did.
    pub fn publish_if_changed(&self, value: T) -> bool {
        if self.shared.lock().value == value {
            return false;
        }
        self.publish(value);
        true
    }

    pub fn update(&self, f: impl FnOnce(T) -> T) -> bool {
        let next = f(self.value());
        self.publish_if_changed(next)
    }
}

/// Handle that removes its observer when cancelled or dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
