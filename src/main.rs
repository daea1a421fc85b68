use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

mod artifacts;

fn main() {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    tracing::info!("lutgen v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = artifacts::generate_all(Path::new(".")) {
        tracing::error!("{e}");
        // Flush pending log lines, `exit` skips destructors.
        drop(guard);
        process::exit(1);
    }
}
