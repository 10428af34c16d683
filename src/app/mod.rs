//! Process-wide application handle.
//!
//! Holds the single long-lived [`HostApplication`] object. The handle is set
//! through [`ScreenRegistry::initialize`](crate::registry::ScreenRegistry::initialize)
//! and replaced only by an explicit re-initialization, which unregisters from
//! the previous instance first.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::host::HostApplication;

/// Errors from querying the application handle.
#[derive(Debug, Error)]
pub enum AppHandleError {
    /// The handle was queried before `initialize` ran.
    #[error("application handle not initialized")]
    NotInitialized,
}

/// Shared slot for the running application instance.
///
/// Cheap to clone; all clones observe the same slot.
#[derive(Clone, Default)]
pub struct AppHandle {
    inner: Arc<RwLock<Option<Arc<dyn HostApplication>>>>,
}

impl AppHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current application instance, if initialized.
    ///
    /// Querying before initialization is a programming error in the callers
    /// that expect an instance; they should use [`AppHandle::try_get`] and
    /// surface the error, or tolerate `None`.
    pub fn get(&self) -> Option<Arc<dyn HostApplication>> {
        self.inner.read().clone()
    }

    /// Current application instance, or a typed error before `initialize`.
    pub fn try_get(&self) -> Result<Arc<dyn HostApplication>, AppHandleError> {
        self.get().ok_or(AppHandleError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Replace the held instance, returning the previous one.
    ///
    /// Returns `None` on first initialization. If `app` is the instance
    /// already held, the slot is left untouched and `None` is returned so
    /// the caller does not unregister from a still-current instance.
    pub(crate) fn replace(
        &self,
        app: Arc<dyn HostApplication>,
    ) -> Option<Arc<dyn HostApplication>> {
        let mut slot = self.inner.write();
        if let Some(current) = slot.as_ref() {
            if Arc::ptr_eq(current, &app) {
                return None;
            }
        }
        slot.replace(app)
    }
}
