//! `run` command: compile and execute a grammar remotely.

use std::path::PathBuf;

use lexplay_assemble::{TargetMode, assemble, list_productions};
use lexplay_godbolt::{GodboltClient, RunOutcome};

use super::{ApiArgs, read_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `run` command.
#[derive(clap::Args, Debug)]
pub(crate) struct RunArgs {
    /// Grammar snippet file (`-` reads stdin).
    grammar: PathBuf,

    /// Entry production; defaults to the first declared production.
    #[arg(long, value_name = "NAME")]
    production: Option<String>,

    /// File holding the input fed to the compiled parser.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) api: ApiArgs,
}

impl RunArgs {
    /// Assemble, submit and report; the exit code mirrors the remote
    /// process (build failures exit 1).
    pub(crate) fn execute(self, output: &Output) -> Result<i32, CliError> {
        let snippet = read_source(&self.grammar)?;
        let production = match self.production {
            Some(name) => name,
            None => first_production(&snippet)?,
        };
        let input = match &self.input {
            Some(path) => read_source(path)?,
            None => String::new(),
        };

        let source = assemble(TargetMode::Playground, &snippet, &production);
        let client = GodboltClient::new(self.api.to_config());

        match client.compile_and_run(&source, &input)? {
            RunOutcome::Executed {
                stdout,
                stderr,
                code,
            } => {
                if !stderr.is_empty() {
                    output.info(&stderr);
                }
                if !stdout.is_empty() {
                    output.result(&stdout);
                }
                Ok(code)
            }
            RunOutcome::BuildFailed { message } => {
                output.error("Build failed:");
                output.info(&message);
                Ok(1)
            }
        }
    }
}

fn first_production(snippet: &str) -> Result<String, CliError> {
    list_productions(snippet).into_iter().next().ok_or_else(|| {
        CliError::Validation(
            "grammar declares no productions; pass --production explicitly".to_owned(),
        )
    })
}
