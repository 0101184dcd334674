//! Compiler Explorer ("godbolt") client for the lexy playground.
//!
//! Provides a sync HTTP client over the Compiler Explorer JSON API:
//! - [`GodboltClient::compile_and_run`]: compile an assembled source and
//!   execute it with a stdin payload, normalizing the two response shapes
//!   (executed vs. build failure) into [`RunOutcome`]
//! - [`GodboltClient::create_share_url`]: store a session with the remote
//!   shortener and return the permalink
//! - [`GodboltClient::load_share_session`]: fetch a stored session by id
//!   and recover the original snippet, stdin and production from it
//!
//! All remote constants (API root, compiler id, library reference, flags)
//! live in [`GodboltConfig`]; nothing here is a module-level singleton.
//! Transport and JSON failures propagate as [`GodboltError`]; a remote
//! build failure is a modeled outcome, not an error.

mod client;
mod config;
mod error;
pub mod types;

pub use client::{GodboltClient, RunOutcome, SharedSession};
pub use config::GodboltConfig;
pub use error::{GodboltError, MalformedSessionError};
