use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `verbose` wins over a configured level.
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "social_graph=debug,info".to_string(),
        (false, Some(level)) => format!("social_graph={}", level),
        (false, None) => "social_graph=info".to_string(),
    }
}

fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)))
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines, for when logs are shipped somewhere instead of read.
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
