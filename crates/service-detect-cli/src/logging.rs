//! Logging initialization.
//!
//! Level comes from the command line only; `RUST_LOG` is not consulted.

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .init();

    debug!("service-detect started");
    debug!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
