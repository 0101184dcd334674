//! Client configuration.

use std::time::Duration;

use crate::types::Library;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Fixed remote-service selection for playground requests.
///
/// The defaults target the public Compiler Explorer instance with the
/// trunk clang build and the trunk lexy library. Every field can be
/// overridden, e.g. to point at a self-hosted instance.
#[derive(Clone, Debug)]
pub struct GodboltConfig {
    /// API root, without trailing slash (e.g. `https://godbolt.org/api`).
    pub api_root: String,
    /// Compiler id used for both execution and share sessions.
    pub compiler_id: String,
    /// Library reference added to every request.
    pub library: Library,
    /// Compiler flags for compile-and-execute requests.
    pub execute_flags: String,
    /// Compiler flags recorded in share sessions.
    pub share_flags: String,
    /// Language tag of assembled sources.
    pub language: String,
    /// Global timeout applied to each request.
    pub timeout: Duration,
}

impl Default for GodboltConfig {
    fn default() -> Self {
        Self {
            api_root: "https://godbolt.org/api".to_owned(),
            compiler_id: "clang_trunk".to_owned(),
            library: Library {
                id: "lexy".to_owned(),
                version: "trunk".to_owned(),
            },
            execute_flags: "-fno-color-diagnostics -std=c++20".to_owned(),
            share_flags: "-std=c++20".to_owned(),
            language: "c++".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = GodboltConfig::default();
        assert_eq!(config.api_root, "https://godbolt.org/api");
        assert_eq!(config.compiler_id, "clang_trunk");
        assert_eq!(config.library.id, "lexy");
        assert_eq!(config.library.version, "trunk");
        assert_eq!(config.language, "c++");
    }
}
