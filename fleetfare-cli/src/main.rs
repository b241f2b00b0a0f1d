//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_logging();
    match fleetfare_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(fleetfare_cli::CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("fleetfare: {err}");
            std::process::exit(1);
        }
    }
}

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
