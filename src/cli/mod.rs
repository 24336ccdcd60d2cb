mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::{error::EdaError, logger::init_cli_logger};

pub fn run() -> Result<(), EdaError> {
    let cli = parse::Cli::parse();
    init_cli_logger(cli.opts.verbose);
    match cli.cmd {
        None => handlers::analyze(&cli.opts),
        Some(parse::Command::Info) => handlers::info(&cli.opts),
    }
}
