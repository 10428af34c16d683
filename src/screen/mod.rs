//! Base template wiring a screen's controller to its store.
//!
//! On creation the host mounts the screen, which runs `init_view` then
//! `init_view_model` in that order, exactly once, before the screen becomes
//! interactive. The store's observation entry points are exposed to the view
//! layer through [`MviScreen::store`].

use crate::mvi::{Reducer, Store};

/// Per-screen logic plugged into the template.
pub trait ScreenController {
    type Reducer: Reducer + 'static;

    /// The snapshot the screen starts from.
    fn initial_state(&self) -> <Self::Reducer as Reducer>::State;

    /// Set up the view hierarchy. Runs before `init_view_model`.
    fn init_view(&mut self);

    /// Wire observations and dispatch any startup actions.
    fn init_view_model(&mut self, store: &Store<Self::Reducer>);
}

/// Template pairing a controller with its store.
pub struct MviScreen<C: ScreenController> {
    controller: C,
    store: Store<C::Reducer>,
    mounted: bool,
}

impl<C: ScreenController> MviScreen<C> {
    pub fn new(controller: C) -> Self {
        let store = Store::new(controller.initial_state());
        Self {
            controller,
            store,
            mounted: false,
        }
    }

    /// Run the init sequence: `init_view`, then `init_view_model`.
    ///
    /// Mounting twice is a programming error; release builds ignore the
    /// second call.
    pub fn mount(&mut self) {
        if self.mounted {
            debug_assert!(false, "screen mounted twice");
            return;
        }
        self.controller.init_view();
        self.controller.init_view_model(&self.store);
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The store's observation and dispatch entry points.
    pub fn store(&self) -> &Store<C::Reducer> {
        &self.store
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }
}
