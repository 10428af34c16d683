//! Unidirectional state/event flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ───→ state observers (replay latest)
//!    ↑           │
//!    │           └─────→ Event ──→ event observers (at most once)
//!    └── view layer
//! ```
//!
//! - **State**: immutable snapshot of everything the view needs; replayable
//!   to a newly attached observer at its latest value
//! - **Action**: user intents and system results dispatched into the store
//! - **Event**: one-shot notifications that must never replay
//! - **Reducer**: pure function from (state, action) to the next state
//!   and/or events
//!
//! Keeping state and events on separate channels is the central correctness
//! property: recreating a screen replays the latest state but never
//! re-delivers a navigation or transient-message event.

mod action;
mod event;
mod reducer;
mod state;
mod store;

pub use action::ViewAction;
pub use event::ViewEvent;
pub use reducer::{Reducer, Reduction};
pub use state::ViewState;
pub use store::{Store, Subscription, WeakStore};
