//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that parse CLI input, call the `GuiBackend` and format
//!   output for the terminal
//! - Backend errors become `CliError` so `main` can pick the exit code

pub mod config;
pub mod convert;
pub mod download;
pub mod paths;
pub mod streams;
