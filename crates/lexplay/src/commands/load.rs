//! `load` command: fetch a shared session and recover its grammar.

use lexplay_godbolt::GodboltClient;

use super::ApiArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `load` command.
#[derive(clap::Args, Debug)]
pub(crate) struct LoadArgs {
    /// Short id of the saved session (the `<id>` of `godbolt.org/z/<id>`).
    id: String,

    /// Print the recovered session as a JSON object.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub(crate) api: ApiArgs,
}

impl LoadArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<i32, CliError> {
        let client = GodboltClient::new(self.api.to_config());
        let session = client.load_share_session(&self.id)?;

        if self.json {
            let value = serde_json::json!({
                "grammar": session.grammar,
                "input": session.input,
                "production": session.production,
            });
            output.result(&serde_json::to_string_pretty(&value)?);
        } else {
            // Grammar on stdout for piping; metadata on stderr.
            output.info(&format!("production: {}", session.production));
            if !session.input.is_empty() {
                output.info(&format!("input: {}", session.input));
            }
            output.result(&session.grammar);
        }
        Ok(0)
    }
}
