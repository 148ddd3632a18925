use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for the CLI: `RUST_LOG` wins, then `--verbose`, then the
/// configured level, then warnings only.
pub fn cli_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if verbose {
        EnvFilter::new("dinosaur_facts=debug,info")
    } else if let Some(level) = level {
        EnvFilter::new(format!("dinosaur_facts={}", level))
    } else {
        EnvFilter::new("dinosaur_facts=warn")
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, level))
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

/// JSON lines on stderr, for running under a log collector.
pub fn init_json_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(cli_filter(false, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}
