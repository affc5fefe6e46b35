mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, format::colors_enabled(cli.no_color));

    if let Err(e) = dispatch(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Validate { file, group } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::validate::run(
                &content,
                *group,
                cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::Rules { group } => cmd::rules::run(*group, cli.format),
    }
}
