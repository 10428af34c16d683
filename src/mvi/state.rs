//! Base trait for view state snapshots.

/// Marker trait for view state objects.
///
/// States should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for change detection on observed projections)
/// - Shareable across threads (Send + Sync; snapshots are plain data)
pub trait ViewState: Clone + PartialEq + Send + Sync + 'static {}
