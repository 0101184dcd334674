//! Code block processor for `godbolt` fenced blocks.

use std::collections::HashMap;

use crate::html::example_box;

/// Base URL of saved Compiler Explorer sessions.
const SESSION_URL_BASE: &str = "https://godbolt.org/z";

/// Default title of an example box.
const DEFAULT_TITLE: &str = "Example";

/// Error rendering an embedded example.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The block has no `id` attribute; the saved-session id is required.
    #[error("godbolt block {index} has no id attribute")]
    MissingId {
        /// Zero-based index of the block in the document.
        index: usize,
    },
}

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with inline HTML.
    Inline(String),
    /// Pass through as a regular code block.
    PassThrough,
}

/// Trait for processing special code blocks during rendering.
///
/// Processors are registered with the site renderer and checked in order
/// when a code block is encountered; the first non-`PassThrough` result
/// wins.
pub trait CodeBlockProcessor {
    /// Process a code block and return the result.
    ///
    /// `language` is the first word of the fence info string, `attrs` the
    /// remaining key-value pairs, `index` the zero-based position of the
    /// block in the document.
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;

    /// Errors collected during processing.
    ///
    /// A non-empty slice after rendering fails the site build.
    fn errors(&self) -> &[EmbedError] {
        &[]
    }
}

/// Render one godbolt block into its example box.
///
/// # Errors
///
/// Returns [`EmbedError::MissingId`] when `attrs` has no `id`.
pub fn render_embed(
    attrs: &HashMap<String, String>,
    source: &str,
    index: usize,
) -> Result<String, EmbedError> {
    let id = attrs.get("id").ok_or(EmbedError::MissingId { index })?;
    let title = attrs.get("title").map_or(DEFAULT_TITLE, String::as_str);
    let language = attrs.get("language").map(String::as_str);

    let url = format!("{SESSION_URL_BASE}/{id}");
    Ok(example_box(&url, title, language, source))
}

/// Processor turning `godbolt` blocks into collapsible example boxes.
#[derive(Default)]
pub struct GodboltEmbed {
    errors: Vec<EmbedError>,
}

impl GodboltEmbed {
    /// Create a new embed processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeBlockProcessor for GodboltEmbed {
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult {
        if language != "godbolt" {
            return ProcessResult::PassThrough;
        }

        match render_embed(attrs, source, index) {
            Ok(html) => ProcessResult::Inline(html),
            Err(error) => {
                self.errors.push(error);
                ProcessResult::PassThrough
            }
        }
    }

    fn errors(&self) -> &[EmbedError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fence_info;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_render_embed() {
        let html = render_embed(
            &attrs(&[("id", "abc123"), ("language", "cpp")]),
            "struct foo {};",
            0,
        )
        .unwrap();

        assert!(html.starts_with(r#"<details class="godbolt-example">"#));
        assert!(html.contains("<summary>Example</summary>"));
        assert!(html.contains(
            r#"<a href="https://godbolt.org/z/abc123" target="_blank">Try on Compiler Explorer</a>"#
        ));
        assert!(html.contains(r#"<pre><code class="language-cpp">struct foo {};</code></pre>"#));
    }

    #[test]
    fn test_render_embed_custom_title() {
        let html = render_embed(
            &attrs(&[("id", "abc123"), ("title", "Parsing a name")]),
            "struct name {};",
            0,
        )
        .unwrap();
        assert!(html.contains("<summary>Parsing a name</summary>"));
    }

    #[test]
    fn test_render_embed_missing_id() {
        let result = render_embed(&attrs(&[("language", "cpp")]), "struct foo {};", 3);
        assert_eq!(result, Err(EmbedError::MissingId { index: 3 }));
    }

    #[test]
    fn test_render_embed_escapes_listing() {
        let html = render_embed(
            &attrs(&[("id", "abc123")]),
            "static constexpr auto rule = dsl::lit_c<'a'> & dsl::ascii::alpha;",
            0,
        )
        .unwrap();
        assert!(html.contains("dsl::lit_c&lt;&#x27;a&#x27;&gt; &amp; dsl::ascii::alpha;"));
    }

    #[test]
    fn test_processor_passthrough_for_other_languages() {
        let mut embed = GodboltEmbed::new();
        let result = embed.process("cpp", &HashMap::new(), "int main() {}", 0);
        assert_eq!(result, ProcessResult::PassThrough);
        assert!(embed.errors().is_empty());
    }

    #[test]
    fn test_processor_collects_missing_id_error() {
        let mut embed = GodboltEmbed::new();
        let result = embed.process("godbolt", &HashMap::new(), "struct foo {};", 2);
        assert_eq!(result, ProcessResult::PassThrough);
        assert_eq!(embed.errors(), [EmbedError::MissingId { index: 2 }]);
    }

    #[test]
    fn test_processor_from_fence_info() {
        let mut embed = GodboltEmbed::new();
        let (language, attrs) = parse_fence_info("godbolt cpp id=9cWMjTrM6");
        let result = embed.process(&language, &attrs, "struct foo {};", 0);

        let ProcessResult::Inline(html) = result else {
            panic!("expected inline HTML");
        };
        assert!(html.contains("https://godbolt.org/z/9cWMjTrM6"));
        assert!(html.contains(r#"class="language-cpp""#));
    }
}
