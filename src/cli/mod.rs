//! Command Line Interface (CLI) layer for IMGLOGIC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It stands in for an upload form:
//! it checks and decodes the two input files, runs the combine, and writes
//! the PNG result.
//!
//! If you are embedding IMGLOGIC into another application, prefer using
//! the high-level `imglogic::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
