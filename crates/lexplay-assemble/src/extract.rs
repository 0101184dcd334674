//! Reverse assembly: recovering a snippet from an assembled source.
//!
//! Share-link sources are reconstructed from the remote service when a
//! saved session is opened, so the transform has to be reversible. The
//! production comes back out of the macro line and the grammar out of the
//! sentinel-delimited section. Sources that lack either are reported as a
//! typed error rather than panicking on a failed match.

use std::sync::LazyLock;

use regex::Regex;

static PRODUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#define LEXY_PLAYGROUND_PRODUCTION ([a-zA-Z_0-9]+)").unwrap());

static GRAMMAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)//=== grammar ===//(.*)//=== main function ===//").unwrap()
});

/// Snippet and production recovered from an assembled source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedSession {
    /// The original grammar snippet, surrounding whitespace trimmed.
    pub grammar: String,
    /// The production named by the macro line.
    pub production: String,
}

/// Error recovering a snippet from an assembled source.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The `#define LEXY_PLAYGROUND_PRODUCTION` line is absent.
    #[error("source has no production macro line")]
    MissingProductionMacro,

    /// The sentinel-delimited grammar section is absent or malformed.
    #[error("source has no sentinel-delimited grammar section")]
    MissingGrammarSection,
}

/// Recover the grammar snippet and production from a share-link source.
///
/// Inverse of [`assemble`](crate::assemble) in
/// [`TargetMode::ShareLink`](crate::TargetMode::ShareLink): for any snippet
/// that does not itself contain the sentinel lines,
/// `extract(assemble(ShareLink, s, p))` yields `(trim(s), p)`.
///
/// # Errors
///
/// Returns [`ExtractError`] if the macro line or the sentinel section is
/// missing, which means the source was not produced by the assembler.
pub fn extract(source: &str) -> Result<ExtractedSession, ExtractError> {
    let production = PRODUCTION_RE
        .captures(source)
        .ok_or(ExtractError::MissingProductionMacro)?[1]
        .to_owned();

    let grammar = GRAMMAR_RE
        .captures(source)
        .ok_or(ExtractError::MissingGrammarSection)?[1]
        .trim()
        .to_owned();

    Ok(ExtractedSession {
        grammar,
        production,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TargetMode, assemble};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        let snippet = "struct foo\n{\n    static constexpr auto rule = dsl::lit_c<'a'>;\n};";
        let source = assemble(TargetMode::ShareLink, snippet, "foo");

        let session = extract(&source).unwrap();
        assert_eq!(session.grammar, snippet);
        assert_eq!(session.production, "foo");
    }

    #[test]
    fn test_round_trip_trims_snippet_whitespace() {
        let source = assemble(TargetMode::ShareLink, "\n\nstruct foo {};\n\n", "foo");

        let session = extract(&source).unwrap();
        assert_eq!(session.grammar, "struct foo {};");
    }

    #[test]
    fn test_missing_macro_line() {
        let source = "//=== grammar ===//\nstruct foo {};\n//=== main function ===//\n";
        assert!(matches!(
            extract(source),
            Err(ExtractError::MissingProductionMacro)
        ));
    }

    #[test]
    fn test_missing_sentinels() {
        let source = "#define LEXY_PLAYGROUND_PRODUCTION foo\nstruct foo {};\n";
        assert!(matches!(
            extract(source),
            Err(ExtractError::MissingGrammarSection)
        ));
    }

    #[test]
    fn test_empty_source() {
        assert!(extract("").is_err());
    }
}
