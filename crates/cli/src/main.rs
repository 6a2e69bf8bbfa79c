use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use statprobe_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "statprobe",
    version,
    about = "Filesystem status, user database and text filter lookups",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Stat(args) => commands::stat::run(args),
        Command::Users(args) => commands::users::run(args),
        Command::Filter(args) => commands::filter::run(args),
    }
}
