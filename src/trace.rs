use std::sync::atomic::{AtomicBool, Ordering};

static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

/// Presence of this variable turns on `[TRACE]` lines on stderr.
pub const TRACE_ENV: &str = "RECEIVER_KINDS_TRACE";

pub fn init() {
    if std::env::var_os(TRACE_ENV).is_some() {
        TRACE_ENABLED.store(true, Ordering::Relaxed);
    }
}

pub fn is_enabled() -> bool {
    TRACE_ENABLED.load(Ordering::Relaxed)
}

/// Log a state change to stderr if tracing is enabled
pub fn log_event(label: &str, detail: &str) {
    if is_enabled() {
        eprintln!("[TRACE] {}: {}", label, detail);
    }
}
