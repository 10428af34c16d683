//! Shared test utilities and mock host infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use screenflow::host::{
    HostApplication, LifecycleObserver, ProcessImportance, ProcessInfo, RestorePayload,
};
use screenflow::registry::{Screen, ScreenId, ScreenKind};

/// Install a fmt subscriber so crate logs show up in test output
/// (`RUST_LOG=screenflow=trace`). Safe to call from multiple tests.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared record of finish requests, in call order.
pub type FinishLog = Arc<Mutex<Vec<ScreenId>>>;

pub fn finish_log() -> FinishLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Host-owned screen that records finish requests.
pub struct TestScreen {
    id: ScreenId,
    kind: ScreenKind,
    log: FinishLog,
}

impl TestScreen {
    pub fn new(kind: &'static str, log: &FinishLog) -> Arc<dyn Screen> {
        Arc::new(Self {
            id: ScreenId::new(),
            kind: ScreenKind(kind),
            log: Arc::clone(log),
        })
    }
}

impl Screen for TestScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn kind(&self) -> ScreenKind {
        self.kind
    }

    fn finish(&self) {
        self.log.lock().push(self.id);
    }
}

/// Mock application: delivers lifecycle notifications to registered
/// observers and serves a configurable process table.
pub struct MockApp {
    name: String,
    observers: Mutex<Vec<Arc<dyn LifecycleObserver>>>,
    processes: Mutex<Vec<ProcessInfo>>,
    register_calls: Mutex<u32>,
    unregister_calls: Mutex<u32>,
    reclaim_calls: Mutex<u32>,
}

impl MockApp {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            observers: Mutex::new(Vec::new()),
            processes: Mutex::new(Vec::new()),
            register_calls: Mutex::new(0),
            unregister_calls: Mutex::new(0),
            reclaim_calls: Mutex::new(0),
        })
    }

    pub fn set_processes(&self, processes: Vec<ProcessInfo>) {
        *self.processes.lock() = processes;
    }

    /// Deliver a creation notification to every registered observer.
    pub fn create_screen(&self, screen: &Arc<dyn Screen>) {
        let observers: Vec<_> = self.observers.lock().clone();
        for observer in observers {
            observer.screen_created(Arc::clone(screen), None);
        }
    }

    /// Deliver a creation notification carrying a restore payload.
    pub fn recreate_screen(&self, screen: &Arc<dyn Screen>, restored: RestorePayload) {
        let observers: Vec<_> = self.observers.lock().clone();
        for observer in observers {
            observer.screen_created(Arc::clone(screen), Some(Arc::clone(&restored)));
        }
    }

    /// Deliver a destruction notification to every registered observer.
    pub fn destroy_screen(&self, screen: &Arc<dyn Screen>) {
        let observers: Vec<_> = self.observers.lock().clone();
        for observer in observers {
            observer.screen_destroyed(screen);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn register_calls(&self) -> u32 {
        *self.register_calls.lock()
    }

    pub fn unregister_calls(&self) -> u32 {
        *self.unregister_calls.lock()
    }

    pub fn reclaim_calls(&self) -> u32 {
        *self.reclaim_calls.lock()
    }
}

impl HostApplication for MockApp {
    fn register_lifecycle_observer(&self, observer: Arc<dyn LifecycleObserver>) {
        *self.register_calls.lock() += 1;
        self.observers.lock().push(observer);
    }

    fn unregister_lifecycle_observer(&self, observer: &Arc<dyn LifecycleObserver>) {
        *self.unregister_calls.lock() += 1;
        self.observers
            .lock()
            .retain(|entry| !Arc::ptr_eq(entry, observer));
    }

    fn process_name(&self) -> String {
        self.name.clone()
    }

    fn running_processes(&self) -> Vec<ProcessInfo> {
        self.processes.lock().clone()
    }

    fn reclaim_background_resources(&self) {
        *self.reclaim_calls.lock() += 1;
    }
}

pub fn foreground_entry(name: &str) -> ProcessInfo {
    ProcessInfo {
        name: name.to_string(),
        importance: ProcessImportance::Foreground,
    }
}

pub fn cached_entry(name: &str) -> ProcessInfo {
    ProcessInfo {
        name: name.to_string(),
        importance: ProcessImportance::Cached,
    }
}
