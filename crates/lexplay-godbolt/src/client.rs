//! Sync HTTP client for compile-and-execute and share-link operations.

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use ureq::Agent;

use lexplay_assemble::extract;

use crate::config::GodboltConfig;
use crate::error::{GodboltError, MalformedSessionError};
use crate::types::{
    CompileOptions, CompileRequest, CompileResponse, CompilerOptions, ExecuteParameters,
    ExecutorCompiler, ExecutorDescriptor, Filters, SessionDescriptor, ShortenerRequest,
    ShortenerResponse, ShortlinkInfo, TextLine,
};

/// Outcome of a compile-and-execute request.
///
/// A build failure is a normal, modeled outcome; only transport and JSON
/// problems surface as [`GodboltError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program compiled and ran.
    Executed {
        /// Captured standard output, lines joined with `\n`.
        stdout: String,
        /// Captured standard error, lines joined with `\n`.
        stderr: String,
        /// Process exit code.
        code: i32,
    },
    /// Compilation failed; `message` holds the joined compiler diagnostics.
    BuildFailed { message: String },
}

/// A share session fetched back from the remote service, reversed into
/// its playground parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedSession {
    /// The original grammar snippet.
    pub grammar: String,
    /// The stdin payload stored with the session.
    pub input: String,
    /// The production named by the session's macro line.
    pub production: String,
}

/// Compiler Explorer API client.
///
/// Holds one [`Agent`] for connection pooling; each operation is a single
/// request with no retries. The timeout comes from [`GodboltConfig`].
pub struct GodboltClient {
    agent: Agent,
    config: GodboltConfig,
}

impl GodboltClient {
    /// Create a client from config values.
    #[must_use]
    pub fn new(config: GodboltConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent, config }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.api_root.trim_end_matches('/'))
    }

    /// Compile an assembled source and execute it with `stdin` as input.
    ///
    /// # Errors
    ///
    /// Returns [`GodboltError`] on transport failure, error status or a
    /// response body that does not parse. A failed build is returned as
    /// [`RunOutcome::BuildFailed`], not an error.
    pub fn compile_and_run(&self, source: &str, stdin: &str) -> Result<RunOutcome, GodboltError> {
        let request = CompileRequest {
            source,
            options: CompileOptions {
                user_arguments: &self.config.execute_flags,
                execute_parameters: ExecuteParameters {
                    args: vec![],
                    stdin,
                },
                compiler_options: CompilerOptions {
                    executor_request: true,
                },
                filters: Filters { execute: true },
                tools: vec![],
                libraries: vec![self.config.library.clone()],
            },
            lang: &self.config.language,
        };

        let url = self.api_url(&format!("compiler/{}/compile", self.config.compiler_id));
        debug!(compiler = %self.config.compiler_id, "Submitting compile request");

        let payload = serde_json::to_vec(&request)?;
        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let response: CompileResponse = read_checked(response)?;
        Ok(outcome_from_response(response))
    }

    /// Store a session with the remote shortener and return the permalink.
    pub fn create_share_url(&self, source: &str, stdin: &str) -> Result<String, GodboltError> {
        let request = ShortenerRequest {
            sessions: vec![SessionDescriptor {
                id: 1,
                language: self.config.language.clone(),
                source: source.to_owned(),
                compilers: vec![],
                executors: vec![ExecutorDescriptor {
                    compiler: ExecutorCompiler {
                        id: self.config.compiler_id.clone(),
                        libs: vec![self.config.library.clone()],
                        options: self.config.share_flags.clone(),
                    },
                    stdin: stdin.to_owned(),
                }],
            }],
        };

        let url = self.api_url("shortener");
        debug!("Submitting shortener request");

        let payload = serde_json::to_vec(&request)?;
        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let response: ShortenerResponse = read_checked(response)?;
        info!(url = %response.url, "Created share link");
        Ok(response.url)
    }

    /// Fetch a stored share session by its short id and reverse it into
    /// grammar, stdin and production.
    ///
    /// # Errors
    ///
    /// Returns [`GodboltError::MalformedSession`] when the record holds no
    /// sessions or executors, or when the stored source was not produced
    /// by the assembler.
    pub fn load_share_session(&self, id: &str) -> Result<SharedSession, GodboltError> {
        let url = self.api_url(&format!("shortlinkinfo/{id}"));
        debug!(id, "Fetching share session");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let info: ShortlinkInfo = read_checked(response)?;
        session_from_shortlink(info)
    }
}

/// Check the status and deserialize the body.
fn read_checked<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, GodboltError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(GodboltError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body.read_json()?)
}

fn join_lines(lines: &[TextLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize the two compile response shapes into one outcome.
fn outcome_from_response(response: CompileResponse) -> RunOutcome {
    if response.did_execute {
        RunOutcome::Executed {
            stdout: join_lines(&response.stdout),
            stderr: join_lines(&response.stderr),
            code: response.code,
        }
    } else {
        RunOutcome::BuildFailed {
            message: join_lines(&response.build_result.stderr),
        }
    }
}

/// Reverse the first stored session into its playground parts.
fn session_from_shortlink(info: ShortlinkInfo) -> Result<SharedSession, GodboltError> {
    let session = info
        .sessions
        .into_iter()
        .next()
        .ok_or(MalformedSessionError::NoSessions)?;

    let input = session
        .executors
        .into_iter()
        .next()
        .ok_or(MalformedSessionError::NoExecutors)?
        .stdin;

    let extracted = extract(&session.source).map_err(MalformedSessionError::from)?;

    Ok(SharedSession {
        grammar: extracted.grammar,
        input,
        production: extracted.production,
    })
}
