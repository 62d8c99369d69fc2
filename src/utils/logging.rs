use tracing_subscriber::EnvFilter;

/// Create an environment filter based on verbosity level
pub fn create_env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbosity {
            0 => EnvFilter::new("ssh_keysync=warn"),
            1 => EnvFilter::new("ssh_keysync=info"),
            2 => EnvFilter::new("ssh_keysync=debug"),
            _ => EnvFilter::new("ssh_keysync=trace"),
        }
    }
}

/// Initialize logging to stderr, keeping stdout for command output
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
