//! `linprobe` -- end-to-end check of the Linear GraphQL API.
//!
//! Parses CLI arguments with clap, layers configuration with figment, then
//! runs the probe stages against the live API.

mod cli;
mod context;
mod output;
mod runner;
mod stages;

use clap::Parser;
use figment::providers::Serialized;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use linprobe_client::HttpTransport;

fn main() {
    // Ctrl+C ends the run at once with status 0. During the deletion
    // countdown this is how the test issue is kept.
    let _ = ctrlc::set_handler(|| std::process::exit(0));

    let cli = Cli::parse();

    if cli.no_color {
        linprobe_ui::terminal::disable_color();
    }

    let default_filter = if cli.verbose {
        "linprobe=debug,linprobe_client=debug"
    } else {
        "linprobe=warn,linprobe_client=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let figment = linprobe_config::figment().merge(Serialized::defaults(cli.overrides()));

    let result = runner::launch(&figment, |config| {
        HttpTransport::new(config.api_url.clone(), config.credentials.api_key())
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
