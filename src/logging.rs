//! Tracing subscriber setup shared by both binaries

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Installs the global fmt subscriber. Filter comes from `RUST_LOG`,
/// defaulting to `info`. Call once, at the top of `main`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
        .with_target(false)
        .compact()
        .init();
}
