use std::process::ExitCode;

use clap::Args;
use serde_json::Value;
use statprobe_plugins::{apply_filter, filter_names};

use crate::commands::{CommandResult, OutputOptions, finish, print_outcomes};
use crate::printer::stdout_printer;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Filter to apply
    pub name: String,

    /// Input text
    pub text: String,

    /// Positional filter arguments
    pub args: Vec<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: FilterArgs) -> ExitCode {
    finish("filter", execute(args))
}

fn execute(args: FilterArgs) -> CommandResult<ExitCode> {
    let filter_args: Vec<&str> = args.args.iter().map(String::as_str).collect();

    let result = apply_filter(&args.name, &args.text, &filter_args).map_err(|e| {
        let known: Vec<&str> = filter_names().collect();
        anyhow::anyhow!("{e} (available: {})", known.join(", "))
    })?;

    let mut printer = stdout_printer(args.output.printer_config());
    print_outcomes(printer.as_mut(), &args.name, &[], &[Ok(Value::String(result))])?;

    Ok(ExitCode::SUCCESS)
}
