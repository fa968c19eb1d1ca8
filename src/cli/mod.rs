//! # Command-Line Interface
//!
//! The `shapes` binary builds one shape per creational pattern, registers
//! them with the process-wide [`ShapeManager`](crate::domain::ShapeManager)
//! and prints the registry.
//!
//! ## Output Formats
//!
//! - `text` (default) - one `Variant(Name: ..., ...)` line per shape
//! - `json` - a JSON array of shapes tagged with `variant`
//!
//! The default can be set with `default_format` in the config file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! shapes --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute.

mod app;
mod demo;
mod output;

pub use app::{run, Cli};
pub use demo::populate;
pub use output::{Output, OutputFormat};
