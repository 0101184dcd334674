//! Assembly of complete programs from grammar snippets.
//!
//! A snippet on its own is not compilable; depending on the target it is
//! wrapped with a macro definition selecting the entry production, a
//! language-setup prefix and a `main()` fragment. The fragments live as
//! data under `templates/` so the assembler itself stays a pure function.

/// Macro that selects the entry production in an assembled source.
pub const PRODUCTION_MACRO: &str = "LEXY_PLAYGROUND_PRODUCTION";

/// Header reference placed at the top of playground sources.
///
/// Site builds may substitute an include-by-permalink of the single-header
/// distribution here; the assembler treats the header as opaque text.
pub const DEFAULT_HEADER: &str = "#include <lexy/dsl.hpp>";

/// Sentinel line opening the grammar section of a share-link source.
pub const GRAMMAR_SENTINEL: &str = "//=== grammar ===//";

/// Sentinel line opening the main-function section of a share-link source.
pub const MAIN_SENTINEL: &str = "//=== main function ===//";

const PLAYGROUND_PREFIX: &str = include_str!("../templates/playground_prefix.cpp");
const PLAYGROUND_MAIN: &str = include_str!("../templates/playground_main.cpp");
const SHARE_PREFIX: &str = include_str!("../templates/share_prefix.cpp");
const SHARE_MAIN: &str = include_str!("../templates/share_main.cpp");

/// What an assembled source is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMode {
    /// Interactive execution: `main()` dumps the parse tree as a DOT graph.
    Playground,
    /// Shareable permalink: human-readable parse tree dump, grammar section
    /// bounded by sentinel lines so it can be excised again.
    ShareLink,
}

/// The `#define` line embedding the chosen production.
///
/// Always emitted verbatim as `#define LEXY_PLAYGROUND_PRODUCTION <name>`
/// so [`extract`](crate::extract) can locate it.
#[must_use]
pub fn macro_line(production: &str) -> String {
    format!("#define {PRODUCTION_MACRO} {production}")
}

/// Assemble a complete source with the default header reference.
#[must_use]
pub fn assemble(mode: TargetMode, snippet: &str, production: &str) -> String {
    assemble_with_header(mode, snippet, production, DEFAULT_HEADER)
}

/// Assemble a complete source, using `header` as the library include line.
///
/// Pure string composition; there are no error conditions. The snippet is
/// embedded verbatim.
#[must_use]
pub fn assemble_with_header(
    mode: TargetMode,
    snippet: &str,
    production: &str,
    header: &str,
) -> String {
    let macros = macro_line(production);
    match mode {
        TargetMode::Playground => {
            format!("{header}\n{macros}\n{PLAYGROUND_PREFIX}{snippet}\n{PLAYGROUND_MAIN}")
        }
        TargetMode::ShareLink => {
            // Share-link sources keep the public include from the template.
            format!("{macros}\n{SHARE_PREFIX}{snippet}\n{SHARE_MAIN}")
        }
    }
}
