//! Tracing setup.
//!
//! Logs go to stderr next to the pretty debug document, so the default level
//! stays at warn. `RUST_LOG` takes precedence over `-v`.

use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(verbose >= 2)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
