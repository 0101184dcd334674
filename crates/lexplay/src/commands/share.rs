//! `share` command: create a shareable permalink for a grammar.

use std::path::PathBuf;

use lexplay_assemble::{TargetMode, assemble, list_productions};
use lexplay_godbolt::GodboltClient;

use super::{ApiArgs, read_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `share` command.
#[derive(clap::Args, Debug)]
pub(crate) struct ShareArgs {
    /// Grammar snippet file (`-` reads stdin).
    grammar: PathBuf,

    /// Entry production; defaults to the first declared production.
    #[arg(long, value_name = "NAME")]
    production: Option<String>,

    /// File holding the input stored with the session.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) api: ApiArgs,
}

impl ShareArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<i32, CliError> {
        let snippet = read_source(&self.grammar)?;
        let production = match self.production {
            Some(name) => name,
            None => list_productions(&snippet).into_iter().next().ok_or_else(|| {
                CliError::Validation(
                    "grammar declares no productions; pass --production explicitly".to_owned(),
                )
            })?,
        };
        let input = match &self.input {
            Some(path) => read_source(path)?,
            None => String::new(),
        };

        let source = assemble(TargetMode::ShareLink, &snippet, &production);
        let client = GodboltClient::new(self.api.to_config());
        let url = client.create_share_url(&source, &input)?;

        output.result(&url);
        Ok(0)
    }
}
