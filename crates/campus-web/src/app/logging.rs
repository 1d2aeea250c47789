//! Platform-aware logging initialization.
//!
//! For web builds this routes `tracing` events to the browser console. For
//! non-web builds (unit tests) it is a no-op and events simply go nowhere.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for the current platform.
///
/// This function is idempotent - it can be called multiple times but will
/// only initialize once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    // Default to INFO unless a level was stashed in local storage (set it
    // from devtools: localStorage.setItem("campus_log_level", "debug")).
    let level = get_stored_log_level().unwrap_or(LevelFilter::INFO);

    tracing_subscriber::registry().with(level).with(fmt_layer).init();
}

#[cfg(feature = "web")]
fn get_stored_log_level() -> Option<tracing::level_filters::LevelFilter> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let level_str = storage.get_item("campus_log_level").ok()??;

    match level_str.as_str() {
        "error" => Some(tracing::level_filters::LevelFilter::ERROR),
        "warn" => Some(tracing::level_filters::LevelFilter::WARN),
        "info" => Some(tracing::level_filters::LevelFilter::INFO),
        "debug" => Some(tracing::level_filters::LevelFilter::DEBUG),
        "trace" => Some(tracing::level_filters::LevelFilter::TRACE),
        _ => None,
    }
}
