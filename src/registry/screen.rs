//! Screen identity and the registry's non-owning back-reference.

use std::fmt;
use std::sync::{Arc, Weak};

use uuid::Uuid;

/// Unique identity of a screen instantiation.
///
/// Two screens of the same kind created one after another get distinct ids;
/// a recreated screen is a new instantiation with a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(Uuid);

impl ScreenId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Type tag for kind-based bulk operations (`finish_by_kind`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenKind(pub &'static str);

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A live screen, owned by the host toolkit.
///
/// `finish` requests the host to close the screen; the destruction
/// notification that follows is what actually removes it from the registry.
pub trait Screen: Send + Sync {
    fn id(&self) -> ScreenId;
    fn kind(&self) -> ScreenKind;
    fn finish(&self);
}

/// Non-owning back-reference to a registered screen.
///
/// Identity and kind are cached so queries keep working after the host drops
/// the screen; `upgrade` then simply returns `None`. Holding a `ScreenRef`
/// never keeps a screen alive.
#[derive(Clone)]
pub struct ScreenRef {
    id: ScreenId,
    kind: ScreenKind,
    screen: Weak<dyn Screen>,
}

impl ScreenRef {
    pub fn new(screen: &Arc<dyn Screen>) -> Self {
        Self {
            id: screen.id(),
            kind: screen.kind(),
            screen: Arc::downgrade(screen),
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Borrow the screen if the host still owns it.
    pub fn upgrade(&self) -> Option<Arc<dyn Screen>> {
        self.screen.upgrade()
    }

    /// Request the host to close this screen. No-op if already gone.
    pub fn finish(&self) {
        if let Some(screen) = self.upgrade() {
            screen.finish();
        }
    }
}

impl fmt::Debug for ScreenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenRef")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("alive", &(self.screen.strong_count() > 0))
            .finish()
    }
}
