//! Reducer trait and reduction results.

use super::action::ViewAction;
use super::event::ViewEvent;
use super::state::ViewState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function over the given snapshot: no side effects, no reads of
/// anything but `state` and `action`. Side effects (spawning work, touching
/// the host) belong to the caller, keyed off the observed state and events.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The action type this reducer handles.
    type Action: ViewAction;

    /// The one-shot event type this reducer can emit.
    type Event: ViewEvent;

    /// Process an action against the current snapshot.
    fn reduce(state: &Self::State, action: Self::Action) -> Reduction<Self::State, Self::Event>;
}

/// Outcome of a single reduction: an optional replacement snapshot plus any
/// one-shot events, in emission order.
///
/// `unchanged()` produces neither, which is the correct result for an action
/// the reducer deliberately ignores.
#[derive(Debug)]
pub struct Reduction<S, E> {
    state: Option<S>,
    events: Vec<E>,
}

impl<S, E> Reduction<S, E> {
    /// No new snapshot, no events.
    pub fn unchanged() -> Self {
        Self {
            state: None,
            events: Vec::new(),
        }
    }

    /// Replace the snapshot with `state`.
    pub fn state(state: S) -> Self {
        Self {
            state: Some(state),
            events: Vec::new(),
        }
    }

    /// Emit `event` without touching the snapshot.
    pub fn event(event: E) -> Self {
        Self {
            state: None,
            events: vec![event],
        }
    }

    /// Append an event to this reduction.
    pub fn with_event(mut self, event: E) -> Self {
        self.events.push(event);
        self
    }

    pub fn new_state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub(crate) fn into_parts(self) -> (Option<S>, Vec<E>) {
        (self.state, self.events)
    }
}
