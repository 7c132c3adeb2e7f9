use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count; `RUST_LOG` takes precedence.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "postman_bdd=warn",
        1 => "postman_bdd=info",
        _ => "postman_bdd=debug",
    }
}

/// Install the global tracing subscriber. Logs go to stderr, stdout is
/// reserved for progress output.
pub fn init_tracing(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();

    if initialized.is_ok() {
        tracing::debug!("Tracing initialized");
    }
}
