//! Output formatting for the demo application

use serde::Serialize;

use crate::registry::Registry;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a warning on stderr
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.warning_line(message));
    }

    fn warning_line(&self, message: &str) -> String {
        match self.format {
            OutputFormat::Text => format!("Warning: {}", message),
            OutputFormat::Json => serde_json::json!({ "warning": message }).to_string(),
        }
    }

    /// Prints structured data as one line of JSON
    pub fn data<T: Serialize>(&self, data: &T) {
        if let Ok(json) = serde_json::to_string(data) {
            println!("{}", json);
        }
    }

    /// Prints every parameter with its current value
    pub fn parameters(&self, registry: &Registry) {
        match self.format {
            OutputFormat::Text => print!("{}", parameter_table(registry)),
            OutputFormat::Json => self.data(&registry.snapshot()),
        }
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message (only when verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

/// One line per parameter: `[Section] Key (type) = value`
fn parameter_table(registry: &Registry) -> String {
    registry
        .parameters()
        .map(|(section, key, param)| {
            format!(
                "[{}] {} ({}) = {}\n",
                section,
                key,
                param.type_tag(),
                param.get_string()
            )
        })
        .collect()
}
