//! Command Line Interface (CLI) layer for certbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): resolve parameters from a config
//! file and flags, obtain the roster path (argument or interactive prompt),
//! run the batch, and print the summary line.
//!
//! If you are embedding certbatch into another application, prefer using
//! the high-level `certbatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
