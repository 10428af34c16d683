//! Application handle initialization and host hook registration.

mod common;

use std::sync::Arc;

use common::*;
use screenflow::registry::ScreenRegistry;

// -- Initialization ----------------------------------------------------------

#[test]
fn initialize_registers_hooks_once() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");

    registry.initialize(app.clone());
    assert_eq!(app.register_calls(), 1);
    assert_eq!(app.observer_count(), 1);
    assert!(registry.app().is_initialized());
}

#[test]
fn reinitialize_with_same_instance_is_noop() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");

    registry.initialize(app.clone());
    registry.initialize(app.clone());

    assert_eq!(app.register_calls(), 1);
    assert_eq!(app.unregister_calls(), 0);
    assert_eq!(app.observer_count(), 1);
}

#[test]
fn reinitialize_with_new_instance_swaps_hooks() {
    let registry = ScreenRegistry::new();
    let old_app = MockApp::new("com.example.news");
    let new_app = MockApp::new("com.example.news");

    registry.initialize(old_app.clone());
    registry.initialize(new_app.clone());

    assert_eq!(old_app.unregister_calls(), 1);
    assert_eq!(old_app.observer_count(), 0);
    assert_eq!(new_app.register_calls(), 1);
    assert_eq!(new_app.observer_count(), 1);
}

#[test]
fn uninitialized_handle_reports_error() {
    let registry = ScreenRegistry::new();
    assert!(registry.app().try_get().is_err());
    assert!(registry.app().get().is_none());
}

// -- Notifications through the host ------------------------------------------

#[test]
fn host_notifications_drive_the_stack() {
    init_tracing();
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");
    registry.initialize(app.clone());

    let log = finish_log();
    let main = TestScreen::new("main", &log);
    let detail = TestScreen::new("detail", &log);

    app.create_screen(&main);
    app.create_screen(&detail);
    assert_eq!(registry.top_screen().unwrap().id(), detail.id());

    app.destroy_screen(&detail);
    assert_eq!(registry.top_screen().unwrap().id(), main.id());

    app.destroy_screen(&main);
    assert!(registry.top_screen().is_none());
}

#[test]
fn restore_payload_is_passed_through() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");
    registry.initialize(app.clone());

    let log = finish_log();
    let screen = TestScreen::new("main", &log);
    let payload: screenflow::host::RestorePayload = Arc::new("saved scroll position");

    app.recreate_screen(&screen, payload);
    assert_eq!(registry.top_screen().unwrap().id(), screen.id());
}

#[test]
fn notifications_stop_after_instance_swap() {
    let registry = ScreenRegistry::new();
    let old_app = MockApp::new("com.example.news");
    let new_app = MockApp::new("com.example.news");
    registry.initialize(old_app.clone());
    registry.initialize(new_app.clone());

    let log = finish_log();
    let screen = TestScreen::new("main", &log);

    // The old instance no longer reaches the registry.
    old_app.create_screen(&screen);
    assert!(registry.top_screen().is_none());

    new_app.create_screen(&screen);
    assert_eq!(registry.top_screen().unwrap().id(), screen.id());
}

// -- Foreground queries ------------------------------------------------------

#[test]
fn is_foreground_matches_process_name_and_importance() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");
    registry.initialize(app.clone());

    app.set_processes(vec![
        cached_entry("com.example.other"),
        foreground_entry("com.example.news"),
    ]);
    assert!(registry.is_foreground());
}

#[test]
fn is_foreground_false_when_only_other_processes_foreground() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");
    registry.initialize(app.clone());

    app.set_processes(vec![
        foreground_entry("com.example.other"),
        cached_entry("com.example.news"),
    ]);
    assert!(!registry.is_foreground());
}

#[test]
fn is_foreground_degrades_when_table_unavailable() {
    let registry = ScreenRegistry::new();
    let app = MockApp::new("com.example.news");
    registry.initialize(app.clone());

    // Empty table means the host could not answer; report not-foreground.
    assert!(!registry.is_foreground());
}

#[test]
fn is_foreground_false_before_initialize() {
    let registry = ScreenRegistry::new();
    assert!(!registry.is_foreground());
}
