//! Demo application
//!
//! Declares a handful of sample parameters, lets the registry take the
//! arguments it understands, then hands whatever is left to clap.

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::registry::kind::{DoubleEnum, File, Slider};
use crate::registry::Registry;

/// Host arguments, parsed from what the registry left behind
///
/// The registry treats every unknown flag as taking a value, so host flags
/// do too. Anything neither side recognizes lands in `rest`.
#[derive(Parser, Debug)]
#[command(name = "cliparam")]
#[command(about = "Declarative command-line parameters (demo)")]
pub struct Cli {
    /// Output format for the final parameter values
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, default_value_t = false, action = clap::ArgAction::Set)]
    pub verbose: bool,

    /// Arguments no parameter claimed, unknown flags included
    #[arg(allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Builds the registry of sample parameters
pub fn demo_registry() -> Registry {
    let mut app = Registry::new("The Big Test", "Does absolutely nothing.");
    app.set_category("Toys");
    app.set_version("1.0");
    app.set_contributor("Santa");

    app.param::<bool>("Basic Types", "Bool Param")
        .declare("Just a test", "b")
        .set(true);

    app.param::<DoubleEnum>("EnumTypes", "Double Enum")
        .set_enumeration("0.1,0.2,0.3,0.4");
    app.param::<f64>("EnumTypes", "Double Enum").set(0.3);

    app.param::<Vec<f64>>("Vector Types", "Double Vec")
        .set_string("1,2,3,4");

    app.param::<File>("Special", "File")
        .set_file_extensions("bli,bla,blbub")
        .declare_positional("Input File", 0)
        .set_channel(true);

    app.param::<Slider>("Special", "Slider").set_range(0.0, 1.0);
    app.param::<f64>("Special", "Slider").set(0.333);

    app
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "cliparam".to_string());
    let mut args: Vec<String> = args.collect();

    let mut registry = demo_registry();
    let summary = registry.parse_command_line(&mut args)?;
    if summary.wants_exit() {
        return Ok(());
    }

    let cli = Cli::parse_from(std::iter::once(program).chain(args));
    let output = Output::new(cli.format, cli.verbose);

    output.verbose_ctx(
        "parse",
        &format!("Registry consumed {} argument(s)", summary.removed),
    );
    if summary.aborted {
        output.verbose_ctx("parse", "Scan stopped at a flag without value");
    }
    if !cli.rest.is_empty() {
        output.warning(&format!("Unclaimed arguments: {}", cli.rest.join(" ")));
    }

    output.parameters(&registry);
    output.verbose("Command completed successfully");
    Ok(())
}
