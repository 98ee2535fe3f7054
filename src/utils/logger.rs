use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr so stdout carries only the status lines.
/// RUST_LOG is not consulted; the filter depends on `verbose` alone.
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pdbench_status=debug,warn")
    } else {
        EnvFilter::new("pdbench_status=warn")
    };

    tracing_subscriber::registry()
        .with(filter)
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
