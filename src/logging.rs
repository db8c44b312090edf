//! Log setup shared by the command-line tools.

use tracing_subscriber::EnvFilter;

/// Initialize `tracing` on stderr so stdout only carries the report.
///
/// Defaults to `warn` (or `debug` when `verbose`); `RUST_LOG` takes precedence.
pub fn init(verbose: bool) {
    let default_level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
