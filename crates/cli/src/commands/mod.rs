pub mod filter;
pub mod stat;
pub mod users;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Subcommand};
use log::error;
use serde_json::Value;
use statprobe_plugins::{LookupError, Options};

pub use filter::FilterArgs;
pub use stat::StatArgs;
pub use users::UsersArgs;

use crate::printer::{
    ColorChoice, FailedRow, OutputFormat, PrintContext, PrinterConfig, ResultPrinter, ResultRow,
    stdout_printer,
};

/// Common error type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report filesystem status for one or more paths.
    ///
    /// Example:
    ///   statprobe stat /etc/hosts /tmp
    ///   statprobe stat --follow --checksum -a sha256 /usr/bin/env
    Stat(StatArgs),

    /// Look up password database entries by login name or uid.
    ///
    /// Example:
    ///   statprobe users root 1000
    ///   statprobe users --attribute pw_dir root
    Users(UsersArgs),

    /// Apply a text filter.
    ///
    /// Example:
    ///   statprobe filter mycustomfilter hello
    ///   statprobe filter mycustomfilter hello '**'
    Filter(FilterArgs),
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl OutputOptions {
    pub fn printer_config(&self) -> PrinterConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        PrinterConfig {
            format,
            color: ColorChoice::parse(&self.color),
        }
    }
}

/// Run the registered lookup `kind` and print every outcome.
///
/// Successful terms are printed even when others fail; any failure turns
/// the exit status into 2.
pub fn run_lookup(
    kind: &str,
    terms: &[String],
    options: &Options,
    output: &OutputOptions,
) -> CommandResult<ExitCode> {
    let lookup = statprobe_plugins::lookup(kind)?;
    let results = lookup
        .run_each(terms, options)
        .with_context(|| format!("{kind} lookup failed"))?;

    let mut printer = stdout_printer(output.printer_config());
    let failed = print_outcomes(printer.as_mut(), lookup.name(), terms, &results)?;

    Ok(exit_status(failed))
}

/// Print `results`, pairing each with the term at the same position.
/// Returns the number of failed results.
pub fn print_outcomes(
    printer: &mut dyn ResultPrinter,
    kind: &str,
    terms: &[String],
    results: &[Result<Value, LookupError>],
) -> io::Result<usize> {
    let ctx = PrintContext {
        kind,
        total: results.len(),
        failed: results.iter().filter(|r| r.is_err()).count(),
    };

    printer.begin(&ctx)?;
    for (i, result) in results.iter().enumerate() {
        let term = terms.get(i).map(String::as_str);
        match result {
            Ok(value) => printer.print_row(&ResultRow { term, value }, &ctx)?,
            Err(e) => {
                error!("[{kind}] {e}");
                let error = e.to_string();
                printer.print_failure(&FailedRow { term, error: &error }, &ctx)?;
            }
        }
    }
    printer.finish(&ctx)?;

    Ok(ctx.failed)
}

fn exit_status(failed: usize) -> ExitCode {
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

/// Map a handler result onto the process exit status.
pub fn finish(kind: &str, result: CommandResult<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("[{kind}] {e:#}");
            eprintln!("[error] {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
