//! # Command-Line Interface
//!
//! Command-line parsing against the registry, help text, and the demo
//! application.
//!
//! ## Built-in switches
//!
//! | Switch | Effect |
//! |--------|--------|
//! | `--xml` | Print the plugin descriptor |
//! | `--help`, `-h` | Print the synopsis |
//! | `--ctk-save-ini <file>` | Save current values |
//! | `--ctk-load-ini <file>` | Load values |
//!
//! Declared parameters are addressed as `--section-key <value>`, by their
//! short flag, or by position among bare arguments.
//!
//! ## Entry Point
//!
//! Call [`run()`] to run the demo application.

mod app;
mod output;
mod parser;
mod synopsis;

pub use app::{demo_registry, run, Cli};
pub use output::{Output, OutputFormat};
pub use parser::{
    CommandLineError, CommandLineParser, ParseSummary, HELP_SHORT, HELP_SWITCH, LOAD_INI_SWITCH,
    SAVE_INI_SWITCH, XML_SWITCH,
};
