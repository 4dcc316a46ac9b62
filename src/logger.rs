//! Logger setup untuk binary CLI
//!
//! Library hanya memakai macro `tracing`; subscriber dipasang di sini.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pasang subscriber `tracing` untuk binary CLI.
///
/// `RUST_LOG` selalu menang atas flag `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose { "bytekit=trace,info" } else { "bytekit=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
