//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    // A host application may already own the logger
    let _ = env_logger::try_init();
}

/// Initialize the logging system with a default filter (e.g. `"info"` or
/// `"capsule_physics=trace"`). `RUST_LOG` still takes precedence when set.
pub fn init_with_filter(filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}
