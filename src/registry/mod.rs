//! Screen lifecycle registry.
//!
//! Maintains the ordered collection of live screens, fed by host lifecycle
//! notifications. Insertion order is creation order, so the last element is
//! always the topmost screen — the natural attachment point for overlays and
//! the first target of bulk teardown.
//!
//! Mutations (create/destroy/finish) are expected from the host's UI loop;
//! `top_screen` and `is_foreground` are snapshot reads, safe from any thread.

mod screen;

pub use screen::{Screen, ScreenId, ScreenKind, ScreenRef};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::AppHandle;
use crate::host::{HostApplication, LifecycleObserver, RestorePayload};

/// Ordered registry of live screens plus the application handle they belong
/// to.
///
/// Cheap to clone; all clones share the same stack and handle.
#[derive(Clone)]
pub struct ScreenRegistry {
    inner: Arc<RegistryInner>,
    observer: Arc<dyn LifecycleObserver>,
}

struct RegistryInner {
    app: AppHandle,
    stack: RwLock<Vec<ScreenRef>>,
}

/// Adapter registered with the host application. Kept as a separate object
/// so the registry can unregister the exact instance it registered.
struct RegistryHooks {
    inner: Arc<RegistryInner>,
}

impl LifecycleObserver for RegistryHooks {
    fn screen_created(&self, screen: Arc<dyn Screen>, _restored: Option<RestorePayload>) {
        self.inner.push(ScreenRef::new(&screen));
    }

    fn screen_destroyed(&self, screen: &Arc<dyn Screen>) {
        self.inner.remove(screen.id());
    }
}

impl RegistryInner {
    fn push(&self, screen: ScreenRef) {
        let mut stack = self.stack.write();
        if stack.iter().any(|entry| entry.id() == screen.id()) {
            debug_assert!(false, "duplicate creation notification for {}", screen.id());
            return;
        }
        tracing::debug!("screen created: {} ({})", screen.id(), screen.kind());
        stack.push(screen);
    }

    fn remove(&self, id: ScreenId) -> Option<ScreenRef> {
        let mut stack = self.stack.write();
        let position = stack.iter().position(|entry| entry.id() == id)?;
        tracing::debug!("screen removed: {}", id);
        Some(stack.remove(position))
    }
}

impl ScreenRegistry {
    pub fn new() -> Self {
        let inner = Arc::new(RegistryInner {
            app: AppHandle::new(),
            stack: RwLock::new(Vec::new()),
        });
        let observer: Arc<dyn LifecycleObserver> = Arc::new(RegistryHooks {
            inner: Arc::clone(&inner),
        });
        Self { inner, observer }
    }

    /// Bind the registry to an application instance.
    ///
    /// Registers the lifecycle hooks against `app`. Calling again with the
    /// same instance is a no-op; calling with a different instance first
    /// unregisters from the old one, so the hooks are subscribed to exactly
    /// one application at a time.
    pub fn initialize(&self, app: Arc<dyn HostApplication>) {
        if let Some(current) = self.inner.app.get() {
            if Arc::ptr_eq(&current, &app) {
                return;
            }
        }
        if let Some(previous) = self.inner.app.replace(Arc::clone(&app)) {
            tracing::debug!("application instance swapped, unregistering old hooks");
            previous.unregister_lifecycle_observer(&self.observer);
        }
        app.register_lifecycle_observer(Arc::clone(&self.observer));
    }

    /// The application handle this registry is bound to.
    pub fn app(&self) -> &AppHandle {
        &self.inner.app
    }

    /// Record a screen creation. Hosts normally deliver this through the
    /// registered lifecycle observer; it is public for hosts that drive the
    /// registry directly.
    pub fn screen_created(&self, screen: &Arc<dyn Screen>) {
        self.inner.push(ScreenRef::new(screen));
    }

    /// Record a screen destruction. No-op if the screen was never
    /// registered or already removed.
    pub fn screen_destroyed(&self, id: ScreenId) {
        self.inner.remove(id);
    }

    /// The most recently created screen still alive, or `None`.
    pub fn top_screen(&self) -> Option<ScreenRef> {
        self.inner.stack.read().last().cloned()
    }

    /// Number of registered screens.
    pub fn len(&self) -> usize {
        self.inner.stack.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.stack.read().is_empty()
    }

    /// Best-effort check whether this application's process is the one the
    /// user is currently interacting with.
    ///
    /// Scans the host process table for an entry matching the application's
    /// process name with foreground importance. Degrades to `false` when the
    /// handle is uninitialized or the table is unavailable.
    pub fn is_foreground(&self) -> bool {
        let Some(app) = self.inner.app.get() else {
            return false;
        };
        let processes = app.running_processes();
        if processes.is_empty() {
            tracing::warn!("process table unavailable, reporting not-foreground");
            return false;
        }
        let name = app.process_name();
        processes
            .iter()
            .any(|process| process.name == name && process.is_foreground())
    }

    /// Close the topmost screen. No-op when the registry is empty. Removal
    /// from the stack follows through the host's destruction notification.
    pub fn finish_top(&self) {
        if let Some(top) = self.top_screen() {
            top.finish();
        }
    }

    /// Remove `id` from the stack and close the screen.
    ///
    /// Returns `false` if the screen was not registered; absence is a normal
    /// outcome, not an error.
    pub fn finish(&self, id: ScreenId) -> bool {
        match self.inner.remove(id) {
            Some(screen) => {
                screen.finish();
                true
            }
            None => false,
        }
    }

    /// Close every live screen whose kind matches.
    ///
    /// Iterates a snapshot of the stack, so destruction notifications firing
    /// mid-iteration can neither skip nor double-process an entry. Returns
    /// the number of screens closed.
    pub fn finish_by_kind(&self, kind: ScreenKind) -> usize {
        let snapshot: Vec<ScreenRef> = self.inner.stack.read().clone();
        let mut closed = 0;
        for screen in snapshot {
            if screen.kind() == kind && self.finish(screen.id()) {
                closed += 1;
            }
        }
        closed
    }

    /// Close every live screen in strictly reverse creation order (topmost
    /// first) and leave the registry empty.
    ///
    /// The whole stack is detached up front and walked in reverse by
    /// identity, so screens lower in the stack stay valid until everything
    /// above them has been torn down.
    pub fn finish_all(&self) {
        let snapshot = std::mem::take(&mut *self.inner.stack.write());
        tracing::debug!("finishing all screens ({})", snapshot.len());
        for screen in snapshot.iter().rev() {
            screen.finish();
        }
    }

    /// Tear down every screen, hand background resources back to the host,
    /// and end the process. Point of no return.
    pub fn terminate_process(&self) -> ! {
        tracing::debug!("terminating process");
        self.finish_all();
        if let Some(app) = self.inner.app.get() {
            app.reclaim_background_resources();
        }
        std::process::exit(0);
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
