//! Wire types for the Compiler Explorer JSON API.
//!
//! Field names and nesting mirror the remote API exactly; see the
//! serialization tests for the canonical shapes. Response types default
//! absent arrays to empty so both response variants (executed vs. build
//! failure) deserialize from the same struct.

use serde::{Deserialize, Serialize};

/// Library reference `{id, version}` attached to requests and sessions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Library {
    pub id: String,
    pub version: String,
}

/// Body of `POST /compiler/<id>/compile`.
#[derive(Debug, Serialize)]
pub struct CompileRequest<'a> {
    pub source: &'a str,
    pub options: CompileOptions<'a>,
    pub lang: &'a str,
}

/// `options` object of a compile request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions<'a> {
    pub user_arguments: &'a str,
    pub execute_parameters: ExecuteParameters<'a>,
    pub compiler_options: CompilerOptions,
    pub filters: Filters,
    pub tools: Vec<serde_json::Value>,
    pub libraries: Vec<Library>,
}

/// Execution arguments and stdin payload.
#[derive(Debug, Serialize)]
pub struct ExecuteParameters<'a> {
    pub args: Vec<String>,
    pub stdin: &'a str,
}

/// `compilerOptions` object; `executorRequest` asks for execution output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub executor_request: bool,
}

/// Output filters; `execute` requests the binary be run.
#[derive(Debug, Serialize)]
pub struct Filters {
    pub execute: bool,
}

/// One line of captured process or compiler output.
#[derive(Debug, Deserialize)]
pub struct TextLine {
    pub text: String,
}

/// Compiler output of a failed build.
#[derive(Debug, Default, Deserialize)]
pub struct BuildResult {
    #[serde(default)]
    pub stderr: Vec<TextLine>,
}

/// Response of `POST /compiler/<id>/compile`.
///
/// When `did_execute` is false only `build_result` is meaningful.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    #[serde(default)]
    pub did_execute: bool,
    #[serde(default)]
    pub stdout: Vec<TextLine>,
    #[serde(default)]
    pub stderr: Vec<TextLine>,
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub build_result: BuildResult,
}

/// Body of `POST /shortener`.
#[derive(Debug, Serialize)]
pub struct ShortenerRequest {
    pub sessions: Vec<SessionDescriptor>,
}

/// One editor session as stored by the shortener.
#[derive(Debug, Serialize)]
pub struct SessionDescriptor {
    pub id: u32,
    pub language: String,
    pub source: String,
    pub compilers: Vec<serde_json::Value>,
    pub executors: Vec<ExecutorDescriptor>,
}

/// Executor entry of a session descriptor.
#[derive(Debug, Serialize)]
pub struct ExecutorDescriptor {
    pub compiler: ExecutorCompiler,
    pub stdin: String,
}

/// Compiler selection inside an executor entry.
#[derive(Debug, Serialize)]
pub struct ExecutorCompiler {
    pub id: String,
    pub libs: Vec<Library>,
    pub options: String,
}

/// Response of `POST /shortener`.
#[derive(Debug, Deserialize)]
pub struct ShortenerResponse {
    pub url: String,
}

/// Response of `GET /shortlinkinfo/<id>`.
#[derive(Debug, Deserialize)]
pub struct ShortlinkInfo {
    #[serde(default)]
    pub sessions: Vec<StoredSession>,
}

/// Stored session returned by the shortlink-info endpoint.
#[derive(Debug, Deserialize)]
pub struct StoredSession {
    pub source: String,
    #[serde(default)]
    pub executors: Vec<StoredExecutor>,
}

/// Executor entry of a stored session.
#[derive(Debug, Deserialize)]
pub struct StoredExecutor {
    #[serde(default)]
    pub stdin: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_request_shape() {
        let request = CompileRequest {
            source: "int main() {}",
            options: CompileOptions {
                user_arguments: "-std=c++20",
                execute_parameters: ExecuteParameters {
                    args: vec![],
                    stdin: "abc",
                },
                compiler_options: CompilerOptions {
                    executor_request: true,
                },
                filters: Filters { execute: true },
                tools: vec![],
                libraries: vec![Library {
                    id: "lexy".to_owned(),
                    version: "trunk".to_owned(),
                }],
            },
            lang: "c++",
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "source": "int main() {}",
                "options": {
                    "userArguments": "-std=c++20",
                    "executeParameters": {"args": [], "stdin": "abc"},
                    "compilerOptions": {"executorRequest": true},
                    "filters": {"execute": true},
                    "tools": [],
                    "libraries": [{"id": "lexy", "version": "trunk"}],
                },
                "lang": "c++",
            })
        );
    }

    #[test]
    fn test_shortener_request_shape() {
        let request = ShortenerRequest {
            sessions: vec![SessionDescriptor {
                id: 1,
                language: "c++".to_owned(),
                source: "int main() {}".to_owned(),
                compilers: vec![],
                executors: vec![ExecutorDescriptor {
                    compiler: ExecutorCompiler {
                        id: "clang_trunk".to_owned(),
                        libs: vec![Library {
                            id: "lexy".to_owned(),
                            version: "trunk".to_owned(),
                        }],
                        options: "-std=c++20".to_owned(),
                    },
                    stdin: "abc".to_owned(),
                }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sessions": [{
                    "id": 1,
                    "language": "c++",
                    "source": "int main() {}",
                    "compilers": [],
                    "executors": [{
                        "compiler": {
                            "id": "clang_trunk",
                            "libs": [{"id": "lexy", "version": "trunk"}],
                            "options": "-std=c++20",
                        },
                        "stdin": "abc",
                    }],
                }],
            })
        );
    }

    #[test]
    fn test_compile_response_executed() {
        let response: CompileResponse = serde_json::from_str(
            r#"{
                "didExecute": true,
                "stdout": [{"text": "line 1"}, {"text": "line 2"}],
                "stderr": [],
                "code": 0
            }"#,
        )
        .unwrap();

        assert!(response.did_execute);
        assert_eq!(response.stdout.len(), 2);
        assert_eq!(response.stdout[0].text, "line 1");
        assert_eq!(response.code, 0);
        assert!(response.build_result.stderr.is_empty());
    }

    #[test]
    fn test_compile_response_build_failure() {
        let response: CompileResponse = serde_json::from_str(
            r#"{
                "didExecute": false,
                "buildResult": {"stderr": [{"text": "error: expected ';'"}]}
            }"#,
        )
        .unwrap();

        assert!(!response.did_execute);
        assert_eq!(response.build_result.stderr.len(), 1);
    }

    #[test]
    fn test_shortlink_info_missing_fields_default() {
        let info: ShortlinkInfo = serde_json::from_str(r#"{"sessions": []}"#).unwrap();
        assert!(info.sessions.is_empty());

        let info: ShortlinkInfo =
            serde_json::from_str(r#"{"sessions": [{"source": "s"}]}"#).unwrap();
        assert!(info.sessions[0].executors.is_empty());
    }
}
