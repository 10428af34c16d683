//! Per-screen store: serialized dispatch, replayable state, one-shot events.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

type StateCallback<S> = Arc<Mutex<Box<dyn FnMut(&S) + Send>>>;
type EventCallback<E> = Arc<Mutex<Box<dyn FnMut(&E) + Send>>>;

struct StoreInner<R: Reducer> {
    state: RwLock<R::State>,
    mailbox: Mutex<VecDeque<R::Action>>,
    draining: AtomicBool,
    state_observers: Mutex<Vec<(u64, StateCallback<R::State>)>>,
    event_observers: Mutex<Vec<(u64, EventCallback<R::Event>)>>,
    next_subscription: AtomicU64,
}

/// Unidirectional store pairing a pure reducer with two observation
/// channels: replay-latest state and fire-and-forget events.
///
/// Cheap to clone; all clones share the same snapshot, mailbox, and
/// observer lists.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer + 'static> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                mailbox: Mutex::new(VecDeque::new()),
                draining: AtomicBool::new(false),
                state_observers: Mutex::new(Vec::new()),
                event_observers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> R::State {
        self.inner.state.read().clone()
    }

    /// Dispatch an action. Sole mutation entry point.
    ///
    /// Actions go through a per-store mailbox drained by exactly one caller
    /// at a time, so reductions never race against a stale snapshot. A
    /// dispatch arriving while another thread drains enqueues and returns;
    /// a dispatch from an observer callback on the draining thread likewise
    /// enqueues and is applied after the in-flight action completes.
    pub fn dispatch(&self, action: R::Action) {
        self.inner.mailbox.lock().push_back(action);
        self.drain();
    }

    fn drain(&self) {
        if self.inner.draining.swap(true, Ordering::Acquire) {
            return;
        }
        loop {
            loop {
                let next = self.inner.mailbox.lock().pop_front();
                match next {
                    Some(action) => self.apply(action),
                    None => break,
                }
            }
            self.inner.draining.store(false, Ordering::Release);
            // An action enqueued between the last pop and the flag release
            // would otherwise be stranded until the next dispatch.
            if self.inner.mailbox.lock().is_empty()
                || self.inner.draining.swap(true, Ordering::Acquire)
            {
                return;
            }
        }
    }

    fn apply(&self, action: R::Action) {
        let reduction = {
            let state = self.inner.state.read();
            R::reduce(&state, action)
        };
        let (next, events) = reduction.into_parts();
        if let Some(next) = next {
            *self.inner.state.write() = next.clone();
            self.notify_state(&next);
        }
        for event in &events {
            self.notify_event(event);
        }
    }

    fn notify_state(&self, state: &R::State) {
        let observers: Vec<StateCallback<R::State>> = self
            .inner
            .state_observers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in observers {
            (*callback.lock())(state);
        }
    }

    fn notify_event(&self, event: &R::Event) {
        let observers: Vec<EventCallback<R::Event>> = self
            .inner
            .event_observers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        if observers.is_empty() {
            tracing::trace!("event dispatched with no observers, dropped");
        }
        for callback in observers {
            (*callback.lock())(event);
        }
    }

    /// Observe a projection of the state.
    ///
    /// `on_change` is invoked immediately with the current projection, then
    /// again after every reduction that changes the projection's value (by
    /// equality). Dropping the returned [`Subscription`] unregisters.
    pub fn observe_state<P, F>(
        &self,
        selector: impl Fn(&R::State) -> P + Send + 'static,
        mut on_change: F,
    ) -> Subscription
    where
        P: PartialEq + Send + 'static,
        F: FnMut(&P) + Send + 'static,
    {
        let mut last = selector(&self.inner.state.read());
        on_change(&last);

        let callback: Box<dyn FnMut(&R::State) + Send> = Box::new(move |state: &R::State| {
            let next = selector(state);
            if next != last {
                on_change(&next);
                last = next;
            }
        });
        let id = self.next_subscription_id();
        self.inner
            .state_observers
            .lock()
            .push((id, Arc::new(Mutex::new(callback))));

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .state_observers
                    .lock()
                    .retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Observe the one-shot event channel.
    ///
    /// An event is delivered to the observers registered at the moment it is
    /// dispatched; an event fired with zero observers is dropped and never
    /// replayed to a later subscriber.
    pub fn observe_event<F>(&self, on_event: F) -> Subscription
    where
        F: FnMut(&R::Event) + Send + 'static,
    {
        let on_event: Box<dyn FnMut(&R::Event) + Send> = Box::new(on_event);
        let id = self.next_subscription_id();
        self.inner
            .event_observers
            .lock()
            .push((id, Arc::new(Mutex::new(on_event))));

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .event_observers
                    .lock()
                    .retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Liveness-checked handle for in-flight background work.
    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn next_subscription_id(&self) -> u64 {
        self.inner.next_subscription.fetch_add(1, Ordering::Relaxed)
    }
}

/// Non-owning handle to a [`Store`].
///
/// Background work holds one of these instead of the store itself, so a
/// completion arriving after the owning screen was torn down cannot revive
/// a discarded store.
pub struct WeakStore<R: Reducer> {
    inner: Weak<StoreInner<R>>,
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R: Reducer + 'static> WeakStore<R> {
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }

    /// Dispatch if the store is still alive. Returns whether it was.
    pub fn dispatch(&self, action: R::Action) -> bool {
        match self.upgrade() {
            Some(store) => {
                store.dispatch(action);
                true
            }
            None => {
                tracing::trace!("store dropped, discarding late action");
                false
            }
        }
    }
}

/// Registration guard returned by the observe methods.
///
/// Unregisters the observer on drop. `detach` keeps the observer registered
/// for the lifetime of the store.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister the observer now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the observer registered for the store's lifetime.
    pub fn detach(mut self) {
        self.cancel.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
