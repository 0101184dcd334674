//! Documentation embed for pre-recorded Compiler Explorer sessions.
//!
//! At site-build time, fenced `godbolt` code blocks are turned into
//! collapsible example boxes: a "Try on Compiler Explorer" link targeting
//! the saved session, followed by the syntax-highlightable listing. No
//! network access happens here; the session id was recorded when the
//! example was saved.
//!
//! ```
//! use lexplay_embed::{CodeBlockProcessor, GodboltEmbed, ProcessResult};
//!
//! let mut embed = GodboltEmbed::new();
//! let (language, attrs) = lexplay_embed::parse_fence_info("godbolt id=abc123 language=cpp");
//! let result = embed.process(&language, &attrs, "struct foo {};", 0);
//! assert!(matches!(result, ProcessResult::Inline(_)));
//! ```

mod fence;
mod html;
mod processor;

pub use fence::parse_fence_info;
pub use processor::{CodeBlockProcessor, EmbedError, GodboltEmbed, ProcessResult, render_embed};
