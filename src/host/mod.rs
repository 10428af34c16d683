//! Boundary traits implemented by the embedding host toolkit.
//!
//! The registry does not know how screens are drawn or how the host process
//! is managed; it consumes lifecycle notifications and the process table
//! through these traits and requests teardown back through them.

use std::any::Any;
use std::sync::Arc;

use crate::registry::Screen;

/// Opaque saved-state payload delivered with a creation notification.
///
/// The registry passes it through without inspecting it; screen templates
/// may downcast to whatever the host stored.
pub type RestorePayload = Arc<dyn Any + Send + Sync>;

/// The single long-lived application object provided by the host.
///
/// Implementations must deliver lifecycle notifications to every registered
/// observer from the host's UI loop, in creation/destruction order.
pub trait HostApplication: Send + Sync {
    /// Subscribe an observer to screen creation/destruction notifications.
    fn register_lifecycle_observer(&self, observer: Arc<dyn LifecycleObserver>);

    /// Remove a previously registered observer. No-op if it was never
    /// registered.
    fn unregister_lifecycle_observer(&self, observer: &Arc<dyn LifecycleObserver>);

    /// Name of this application's process, as it appears in the process
    /// table.
    fn process_name(&self) -> String;

    /// Snapshot of the host's process table. An empty vector means the
    /// table is unavailable; callers must degrade rather than fail.
    fn running_processes(&self) -> Vec<ProcessInfo>;

    /// Ask the host to reclaim background resources held for this
    /// application. Called on the way out of `terminate_process`.
    fn reclaim_background_resources(&self);
}

/// Receiver for screen lifecycle notifications.
pub trait LifecycleObserver: Send + Sync {
    /// A screen instance came alive. `restored` carries the host's saved
    /// state for recreated screens, if any.
    fn screen_created(&self, screen: Arc<dyn Screen>, restored: Option<RestorePayload>);

    /// A screen instance was torn down by the host.
    fn screen_destroyed(&self, screen: &Arc<dyn Screen>);
}

/// One entry of the host's process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub name: String,
    pub importance: ProcessImportance,
}

/// Host classification of a process's visibility to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessImportance {
    /// The process the user is currently interacting with.
    Foreground,
    /// Visible but not interactive (behind a dialog, split view).
    Visible,
    /// Running a background service.
    Service,
    /// Kept around only as a warm cache.
    Cached,
}

impl ProcessInfo {
    pub fn is_foreground(&self) -> bool {
        self.importance == ProcessImportance::Foreground
    }
}
