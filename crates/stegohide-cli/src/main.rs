use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::cli::{CliArgs, Commands};
use crate::error::CliError;

mod cli;
mod commands;
mod error;

pub type CliResult<T> = std::result::Result<T, CliError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
