use std::io::Stderr;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines.
    Compact,
    /// One JSON object per event, for CI log ingestion.
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "site_provisioner=debug,info"
    } else {
        "site_provisioner=info,warn"
    }
}

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> Stderr>;

/// Shared settings for both formats. Logs go to stderr so stdout only
/// carries the provisioning result.
fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let compact = (format == LogFormat::Compact).then(|| stderr_layer().compact());
    let json = (format == LogFormat::Json).then(|| stderr_layer().json());

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
