//! Foundation layer for screen-based applications.
//!
//! Two subsystems do the real work:
//!
//! - [`registry`] — the screen lifecycle registry: an ordered collection of
//!   live screens fed by host notifications, with topmost/foreground queries
//!   and ordered bulk teardown up to process termination.
//! - [`mvi`] — the unidirectional state/event store: a pure reducer over an
//!   immutable snapshot plus a separate one-shot event channel, so screens
//!   manage UI state without shared mutable fields.
//!
//! Around them: the process-wide application handle ([`app`]), the traits
//! the embedding toolkit implements ([`host`]), the screen base template
//! ([`screen`]), and the replace-latest overlay presenter ([`overlay`]).

pub mod app;
pub mod host;
pub mod mvi;
pub mod overlay;
pub mod registry;
pub mod screen;
