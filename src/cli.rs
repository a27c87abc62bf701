//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::form::InputMode;

#[derive(Debug, Parser)]
#[command(
    name = "bionic-reader",
    version,
    about = "Convert text into a bionic reading format, in the terminal"
)]
pub struct Cli {
    /// Use an already running conversion service instead of starting one
    #[arg(long, short = 's', value_name = "URL")]
    pub server: Option<String>,

    /// Override the config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input mode selected at startup: text, url or upload
    #[arg(long, short = 'm', value_name = "MODE")]
    pub mode: Option<InputMode>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the conversion service in the foreground, without the terminal UI
    Serve {
        /// Bind address, e.g. 127.0.0.1:8077
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}
