use clap::Parser;

use bionic_reader::cli::{Cli, CliCommand};
use bionic_reader::config::Config;
use bionic_reader::{logging, server, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(CliCommand::Serve { bind }) => {
            logging::init_tracing_stderr();
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config, bind))
        }
        None => {
            logging::init_tracing();
            ui::runtime::run(config, cli.server, cli.mode)
        }
    }
}
