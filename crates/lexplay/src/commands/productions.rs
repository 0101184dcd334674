//! `productions` command: list declared productions of a grammar.

use std::path::PathBuf;

use lexplay_assemble::list_productions;

use super::read_source;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `productions` command.
#[derive(clap::Args, Debug)]
pub(crate) struct ProductionsArgs {
    /// Grammar snippet file (`-` reads stdin).
    grammar: PathBuf,
}

impl ProductionsArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<i32, CliError> {
        let snippet = read_source(&self.grammar)?;
        for name in list_productions(&snippet) {
            output.result(&name);
        }
        Ok(0)
    }
}
