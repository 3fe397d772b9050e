use tracing_subscriber::{filter::LevelFilter, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr: stdout carries the generated code. Without `RUST_LOG`,
/// warnings and errors are shown.
pub fn init() {
    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::WARN.into())
                        .from_env_lossy(),
                ),
        )
        .init();
}
