//! CLI command implementations.

mod load;
mod productions;
mod run;
mod share;

pub(crate) use load::LoadArgs;
pub(crate) use productions::ProductionsArgs;
pub(crate) use run::RunArgs;
pub(crate) use share::ShareArgs;

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use lexplay_godbolt::GodboltConfig;

use crate::error::CliError;

/// Remote-service overrides shared by the network commands.
#[derive(clap::Args, Debug)]
pub(crate) struct ApiArgs {
    /// Compiler Explorer API root.
    #[arg(long, value_name = "URL", env = "LEXPLAY_API_ROOT")]
    api_root: Option<String>,

    /// Compiler id to build with.
    #[arg(long = "compiler", value_name = "ID")]
    compiler_id: Option<String>,

    /// Compiler flags (replaces the defaults).
    #[arg(long, value_name = "FLAGS")]
    flags: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Enable verbose logging.
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl ApiArgs {
    /// Apply the overrides onto the default configuration.
    pub(crate) fn to_config(&self) -> GodboltConfig {
        let mut config = GodboltConfig::default();
        if let Some(api_root) = &self.api_root {
            config.api_root.clone_from(api_root);
        }
        if let Some(compiler_id) = &self.compiler_id {
            config.compiler_id.clone_from(compiler_id);
        }
        if let Some(flags) = &self.flags {
            config.execute_flags.clone_from(flags);
            config.share_flags.clone_from(flags);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// Read a file's contents; `-` reads standard input.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
