//! Base trait for dispatchable actions.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intents (taps, pulls, submissions)
/// - System results (a fetch completing, a timer firing)
///
/// An action carries only the data needed to compute the next state. Actions
/// are consumed by reducers; the action set of a screen is a closed enum, so
/// reducers are total by construction.
pub trait ViewAction: Send + 'static {}
