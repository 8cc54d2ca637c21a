mod app;
mod bot;
mod cli;
mod config;
mod error;
mod logging;
mod output;
mod store;
mod transport;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let config = Config::load();
    let cli = match Cli::parse().with_config(&config) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    logging::init(cli.debug, !cli.no_color);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
