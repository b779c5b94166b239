use tracing::level_filters::LevelFilter;
use tracing_subscriber::{util::TryInitError, EnvFilter};

/// Installs a stderr logger filtered by `RUST_LOG`, falling back to `default_level`.
///
/// Stdout stays untouched so a run with no overrides prints nothing there.
pub fn init_with(default_level: LevelFilter) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}

pub fn init() -> Result<(), TryInitError> {
    init_with(LevelFilter::INFO)
}
