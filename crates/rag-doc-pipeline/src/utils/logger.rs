use anyhow::Result;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Console plus a daily-rotated file under `logs/`. The pipeline is a
/// synchronous one-shot run, so one compact console layer is enough;
/// the file keeps a colorless copy for after-the-fact inspection.
pub fn init_logger() -> Result<()> {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,rag_doc_pipeline=debug".to_string());

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("pipeline")
        .filename_suffix("log")
        .build("logs")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&log_level)?)
        .with(fmt::layer().compact().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .init();

    Ok(())
}
