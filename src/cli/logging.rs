/// stderr logging via `tracing`, filtered by `RUST_LOG`.
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and `--debug` is given.
const DEBUG_FILTER: &str = "fanstat=debug";
/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let fallback = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
