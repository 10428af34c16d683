//! Single-instance transient overlay presenter.
//!
//! The presenter anchors each overlay at the registry's top screen and keeps
//! at most one active: a new request dismisses the previous overlay rather
//! than queuing behind it. With no live top screen, presentation is a no-op.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::registry::{Screen, ScreenRegistry};

/// Active overlay instance, dismissible by the presenter.
pub trait OverlayHandle: Send {
    fn dismiss(&self);
}

/// Host-side presentation of a transient message over a screen.
pub trait OverlaySurface: Send + Sync {
    fn present(&self, anchor: &Arc<dyn Screen>, message: &str) -> Box<dyn OverlayHandle>;
}

/// Replace-latest presenter for transient overlays.
pub struct OverlayPresenter {
    surface: Arc<dyn OverlaySurface>,
    active: Mutex<Option<Box<dyn OverlayHandle>>>,
}

impl OverlayPresenter {
    pub fn new(surface: Arc<dyn OverlaySurface>) -> Self {
        Self {
            surface,
            active: Mutex::new(None),
        }
    }

    /// Present `message` over the current top screen.
    ///
    /// Returns `false` without side effects when no screen is live to
    /// anchor to. Otherwise the previously active overlay, if any, is
    /// dismissed once the replacement is up.
    pub fn show(&self, registry: &ScreenRegistry, message: &str) -> bool {
        let Some(anchor) = registry.top_screen().and_then(|top| top.upgrade()) else {
            tracing::trace!("no live top screen, overlay dropped");
            return false;
        };
        let handle = self.surface.present(&anchor, message);
        if let Some(previous) = self.active.lock().replace(handle) {
            previous.dismiss();
        }
        true
    }

    /// Dismiss the active overlay, if any.
    pub fn dismiss(&self) {
        if let Some(active) = self.active.lock().take() {
            active.dismiss();
        }
    }

    pub fn has_active(&self) -> bool {
        self.active.lock().is_some()
    }
}
