use std::process::ExitCode;

use clap::Args;
use serde_json::Value;
use statprobe_plugins::Options;

use crate::commands::{CommandResult, OutputOptions, finish, run_lookup};

#[derive(Debug, Args)]
pub struct UsersArgs {
    /// Login names or numeric uids; omit to list every user
    pub terms: Vec<String>,

    /// Print only this field (pw_name, pw_uid, pw_gid, pw_dir, ...)
    #[arg(long, short = 'A', value_name = "FIELD")]
    pub attribute: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: UsersArgs) -> ExitCode {
    finish("users", execute(args))
}

fn execute(args: UsersArgs) -> CommandResult<ExitCode> {
    let mut options = Options::new();
    if let Some(attr) = &args.attribute {
        options.insert("attribute".into(), Value::String(attr.clone()));
    }

    run_lookup("users", &args.terms, &options, &args.output)
}
