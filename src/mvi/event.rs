//! Base trait for one-shot events.

/// Marker trait for one-shot event objects.
///
/// Events are delivered at most once, to the observers registered at the
/// moment of dispatch, and are never replayed. Anything a recreated screen
/// must see again belongs in [`ViewState`](crate::mvi::ViewState) instead.
pub trait ViewEvent: Clone + Send + 'static {}
