use std::process::ExitCode;

use clap::Args;
use serde_json::Value;
use statprobe_plugins::Options;
use statprobe_runtime::default_checksum_algorithm;

use crate::commands::{CommandResult, OutputOptions, finish, run_lookup};

#[derive(Debug, Args)]
pub struct StatArgs {
    /// Paths to inspect
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Inspect symlink targets instead of the links themselves
    #[arg(long, short = 'L')]
    pub follow: bool,

    /// Compute a content checksum for paths that exist
    #[arg(long, short = 'c')]
    pub checksum: bool,

    /// Checksum algorithm: md5, sha1 or sha256 [default: $STATPROBE_CHECKSUM_ALGORITHM or sha1]
    #[arg(long, short = 'a', value_name = "ALG")]
    pub algorithm: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

impl StatArgs {
    fn options(&self) -> Options {
        let algorithm = self
            .algorithm
            .clone()
            .unwrap_or_else(default_checksum_algorithm);

        let mut options = Options::new();
        options.insert("follow".into(), Value::Bool(self.follow));
        options.insert("get_checksum".into(), Value::Bool(self.checksum));
        options.insert("checksum_algorithm".into(), Value::String(algorithm));
        options
    }
}

pub fn run(args: StatArgs) -> ExitCode {
    finish("stat", execute(args))
}

fn execute(args: StatArgs) -> CommandResult<ExitCode> {
    run_lookup("stat", &args.paths, &args.options(), &args.output)
}
