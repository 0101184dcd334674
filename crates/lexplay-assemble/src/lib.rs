//! Playground source assembly for lexy grammar snippets.
//!
//! This crate turns a user-supplied grammar snippet into a complete
//! compilable C++ translation unit for submission to Compiler Explorer:
//! - [`list_productions`]: scan a snippet for declared production names
//! - [`assemble`]: wrap a snippet into a full program for a [`TargetMode`]
//! - [`extract`]: reverse the assembly, recovering snippet and production
//!   from a previously assembled source
//!
//! Assembly is pure string composition over fixed fragments compiled in
//! from `templates/`. The macro line and the sentinel comment lines are
//! guaranteed to appear verbatim so [`extract`] can locate them again.

mod assemble;
mod extract;
mod productions;

pub use assemble::{
    DEFAULT_HEADER, GRAMMAR_SENTINEL, MAIN_SENTINEL, PRODUCTION_MACRO, TargetMode, assemble,
    assemble_with_header, macro_line,
};
pub use extract::{ExtractError, ExtractedSession, extract};
pub use productions::list_productions;
