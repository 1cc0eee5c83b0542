use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use icon_tool::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{}", err.render());
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    match icon_tool::build_icon(&cli.input, &cli.output) {
        Ok(()) => {
            println!(
                "{} Created macOS-compliant icon at {}",
                "✓".green(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{} Error processing image: {:#}", "✗".red(), err);
            ExitCode::from(1)
        }
    }
}
