use tracing_subscriber::{EnvFilter, fmt};

/// Installs a `tracing` subscriber logging to stderr with the specified
/// filter, e.g. `warn,peggy=debug`.
///
/// Installing a subscriber more than once is a no-op, so this can be called
/// from every test.
pub fn initialize(filter: &str) {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}
