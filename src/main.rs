use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

use ticketboard::cli::Cli;
use ticketboard::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    if cli.no_color {
        owo_colors::set_override(false);
    }

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_transport() => {
            eprintln!("{}", "Oops! Something went wrong.".red().bold());
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
