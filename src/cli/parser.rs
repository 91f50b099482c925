//! Command-line parsing
//!
//! Single left-to-right pass over the arguments (program name excluded):
//!
//! - `--xml` prints the descriptor, `--help`/`-h` the synopsis
//! - `--ctk-save-ini <path>` / `--ctk-load-ini <path>` persist or restore values
//! - `--long-flag <value>` / `-f <value>` assign a bound parameter; boolean
//!   parameters toggle and take no value
//! - bare tokens are numbered `0, 1, 2, ...` and assign the parameter
//!   declared at that position
//!
//! Everything understood is removed from the argument list, so the caller
//! can hand the rest to its own parser. Unknown flags are reported and kept,
//! together with the value that follows them.

use std::io::{self, Stderr, Stdout, Write};

use thiserror::Error;

use crate::domain::{ParamKey, ParamValue, TypeTag};
use crate::registry::Registry;
use crate::storage::IniError;

pub const XML_SWITCH: &str = "--xml";
pub const HELP_SWITCH: &str = "--help";
pub const HELP_SHORT: &str = "-h";
pub const SAVE_INI_SWITCH: &str = "--ctk-save-ini";
pub const LOAD_INI_SWITCH: &str = "--ctk-load-ini";

#[derive(Debug, Error)]
pub enum CommandLineError {
    #[error(transparent)]
    Ini(#[from] IniError),

    #[error("Failed to write command-line output")]
    Io(#[from] io::Error),
}

/// What a command-line pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of arguments removed from the list
    pub removed: usize,
    /// Flags that matched no parameter
    pub unknown_flags: Vec<String>,
    /// A flag was missing its value and the rest of the list was skipped
    pub aborted: bool,
    /// `--xml` was given
    pub descriptor_emitted: bool,
    /// `--help` or `-h` was given
    pub help_shown: bool,
}

impl ParseSummary {
    /// True if the caller should stop after printing descriptor or help
    pub fn wants_exit(&self) -> bool {
        self.descriptor_emitted || self.help_shown
    }
}

/// Applies command-line arguments to a registry
pub struct CommandLineParser<'r, O, E> {
    registry: &'r mut Registry,
    out: O,
    err: E,
}

impl<'r> CommandLineParser<'r, Stdout, Stderr> {
    /// Parser printing to the process's stdout and stderr
    pub fn new(registry: &'r mut Registry) -> Self {
        Self::with_writers(registry, io::stdout(), io::stderr())
    }
}

impl<'r, O: Write, E: Write> CommandLineParser<'r, O, E> {
    pub fn with_writers(registry: &'r mut Registry, out: O, err: E) -> Self {
        Self { registry, out, err }
    }

    /// Parses `args` and removes every argument that was understood
    ///
    /// The only hard error is an ini file loaded with `--ctk-load-ini` that
    /// names an undeclared parameter; `args` is left untouched in that case.
    pub fn parse(&mut self, args: &mut Vec<String>) -> Result<ParseSummary, CommandLineError> {
        let mut summary = ParseSummary::default();
        let mut consumed = vec![false; args.len()];
        let mut position = 0usize;
        let mut i = 0;

        while i < args.len() {
            let token = args[i].as_str();

            match token {
                XML_SWITCH => {
                    let xml = self.registry.xml_description();
                    self.out.write_all(xml.as_bytes())?;
                    summary.descriptor_emitted = true;
                    consumed[i] = true;
                    i += 1;
                    continue;
                }
                HELP_SWITCH | HELP_SHORT => {
                    let synopsis = self.registry.synopsis();
                    self.out.write_all(synopsis.as_bytes())?;
                    summary.help_shown = true;
                    consumed[i] = true;
                    i += 1;
                    continue;
                }
                SAVE_INI_SWITCH | LOAD_INI_SWITCH => {
                    let Some(path) = args.get(i + 1) else {
                        self.missing_value(token)?;
                        summary.aborted = true;
                        break;
                    };
                    if token == SAVE_INI_SWITCH {
                        self.save_ini(path)?;
                    } else {
                        self.load_ini(path)?;
                    }
                    consumed[i] = true;
                    consumed[i + 1] = true;
                    i += 2;
                    continue;
                }
                _ => {}
            }

            if token.starts_with('-') {
                let target = self.registry.flag(token).cloned();
                let tag = target.as_ref().and_then(|key| self.type_of(key));

                match (target, tag) {
                    (Some(key), Some(TypeTag::Boolean)) => {
                        self.toggle(&key);
                        consumed[i] = true;
                        i += 1;
                    }
                    (target, _) => {
                        let Some(value) = args.get(i + 1) else {
                            self.missing_value(token)?;
                            summary.aborted = true;
                            break;
                        };
                        match target {
                            Some(key) => {
                                self.assign(&key, value);
                                consumed[i] = true;
                                consumed[i + 1] = true;
                            }
                            None => {
                                writeln!(self.err, "Ignored command line argument {token}")?;
                                summary.unknown_flags.push(token.to_string());
                            }
                        }
                        i += 2;
                    }
                }
            } else {
                let slot = position.to_string();
                position += 1;

                if let Some(key) = self.registry.flag(&slot).cloned() {
                    if self.type_of(&key) == Some(TypeTag::Boolean) {
                        self.toggle(&key);
                    } else {
                        self.assign(&key, token);
                    }
                    consumed[i] = true;
                }
                i += 1;
            }
        }

        let before = args.len();
        let mut flags = consumed.into_iter();
        args.retain(|_| !flags.next().unwrap_or(false));
        summary.removed = before - args.len();

        Ok(summary)
    }

    fn type_of(&self, key: &ParamKey) -> Option<TypeTag> {
        self.registry
            .get_param(&key.section, &key.key)
            .map(|param| param.type_tag())
    }

    fn toggle(&mut self, key: &ParamKey) {
        if let Some(param) = self.registry.get_param_mut(&key.section, &key.key) {
            if let ParamValue::Bool(value) = &mut param.value {
                *value = !*value;
            }
        }
    }

    fn assign(&mut self, key: &ParamKey, value: &str) {
        if let Some(param) = self.registry.get_param_mut(&key.section, &key.key) {
            param.set_string(value);
        }
    }

    fn missing_value(&mut self, token: &str) -> io::Result<()> {
        writeln!(self.err, "Expected value but found end of argument list.")?;
        writeln!(self.err, "Ignored command line argument {token}")
    }

    fn save_ini(&mut self, path: &str) -> io::Result<()> {
        match self.registry.save_ini(path) {
            Ok(()) => Ok(()),
            Err(e) => writeln!(self.err, "{:#}", anyhow::Error::from(e)),
        }
    }

    fn load_ini(&mut self, path: &str) -> Result<(), CommandLineError> {
        match self.registry.load_ini(path) {
            Ok(()) => Ok(()),
            Err(e @ IniError::UndeclaredParameter { .. }) => Err(e.into()),
            Err(e) => Ok(writeln!(self.err, "{:#}", anyhow::Error::from(e))?),
        }
    }
}

impl Registry {
    /// Applies `args` using stdout and stderr; see [`CommandLineParser::parse`]
    pub fn parse_command_line(
        &mut self,
        args: &mut Vec<String>,
    ) -> Result<ParseSummary, CommandLineError> {
        CommandLineParser::new(self).parse(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::kind::{File, Slider};
    use tempfile::TempDir;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn sample() -> Registry {
        let mut registry = Registry::new("Tool", "Does things");
        registry
            .param::<bool>("B", "Flag")
            .declare("A switch", "b")
            .set(true);
        registry.param::<i32>("Algorithm", "Iterations").declare("Max iterations", "n");
        registry
            .param::<File>("Special", "Input")
            .declare_positional("Input file", 0);
        registry
            .param::<String>("Special", "Output")
            .declare_positional("Output file", 1);
        registry.param::<Slider>("Special", "Slider").set_range(0.0, 1.0);
        registry
    }

    struct Run {
        summary: ParseSummary,
        out: String,
        err: String,
    }

    fn run(registry: &mut Registry, argv: &mut Vec<String>) -> Run {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = CommandLineParser::with_writers(registry, &mut out, &mut err)
            .parse(argv)
            .unwrap();
        Run {
            summary,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn boolean_flag_toggles_and_is_consumed() {
        let mut registry = sample();
        let mut argv = args(&["--b-flag"]);

        let result = run(&mut registry, &mut argv);

        assert!(argv.is_empty());
        assert_eq!(result.summary.removed, 1);
        assert!(!registry.param::<bool>("B", "Flag").get());
    }

    #[test]
    fn boolean_flag_does_not_consume_next_token() {
        let mut registry = sample();
        let mut argv = args(&["-b", "in.png"]);

        run(&mut registry, &mut argv);

        assert!(argv.is_empty());
        assert!(!registry.param::<bool>("B", "Flag").get());
        assert_eq!(registry.param::<File>("Special", "Input").get(), "in.png");
    }

    #[test]
    fn value_flag_assigns_following_token() {
        let mut registry = sample();
        let mut argv = args(&["--algorithm-iterations", "127", "-n", "12"]);

        run(&mut registry, &mut argv);

        assert!(argv.is_empty());
        assert_eq!(registry.param::<i32>("Algorithm", "Iterations").get(), 12);
    }

    #[test]
    fn value_may_look_like_a_flag() {
        let mut registry = sample();
        let mut argv = args(&["-n", "-5"]);

        run(&mut registry, &mut argv);

        assert!(argv.is_empty());
        assert_eq!(registry.param::<i32>("Algorithm", "Iterations").get(), -5);
    }

    #[test]
    fn positional_tokens_fill_indices_in_order() {
        let mut registry = sample();
        let mut argv = args(&["in.png", "-n", "3", "out.png", "extra"]);

        let result = run(&mut registry, &mut argv);

        assert_eq!(registry.param::<File>("Special", "Input").get(), "in.png");
        assert_eq!(registry.param::<String>("Special", "Output").get(), "out.png");
        assert_eq!(argv, args(&["extra"]));
        assert!(result.err.is_empty());
    }

    #[test]
    fn unknown_flag_is_reported_and_kept_with_its_value() {
        let mut registry = sample();
        let mut argv = args(&["--not-a-flag", "x", "-n", "4"]);

        let result = run(&mut registry, &mut argv);

        assert_eq!(argv, args(&["--not-a-flag", "x"]));
        assert_eq!(result.summary.unknown_flags, vec!["--not-a-flag".to_string()]);
        assert!(result.err.contains("Ignored command line argument --not-a-flag"));
        assert_eq!(registry.param::<i32>("Algorithm", "Iterations").get(), 4);
        assert_eq!(registry.param::<File>("Special", "Input").get(), "");
    }

    #[test]
    fn flag_without_value_aborts_scan() {
        let mut registry = sample();
        let mut argv = args(&["in.png", "-n"]);

        let result = run(&mut registry, &mut argv);

        assert!(result.summary.aborted);
        assert!(result.err.contains("Expected value but found end of argument list."));
        assert_eq!(argv, args(&["-n"]));
        assert_eq!(registry.param::<File>("Special", "Input").get(), "in.png");
    }

    #[test]
    fn xml_switch_prints_descriptor_and_continues() {
        let mut registry = sample();
        let mut argv = args(&["--xml", "-n", "9"]);

        let result = run(&mut registry, &mut argv);

        assert!(result.summary.descriptor_emitted);
        assert!(result.summary.wants_exit());
        assert!(result.out.contains("<executable>"));
        assert!(argv.is_empty());
        assert_eq!(registry.param::<i32>("Algorithm", "Iterations").get(), 9);
    }

    #[test]
    fn help_switch_prints_synopsis() {
        let mut registry = sample();
        let mut argv = args(&["-h"]);

        let result = run(&mut registry, &mut argv);

        assert!(result.summary.help_shown);
        assert!(result.out.starts_with("USAGE:"));
        assert!(argv.is_empty());
    }

    #[test]
    fn save_and_load_ini_switches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.ini");
        let path = path.to_str().unwrap();

        let mut registry = sample();
        let mut argv = args(&["-n", "42", "--ctk-save-ini", path]);
        run(&mut registry, &mut argv);
        assert!(argv.is_empty());

        let mut restored = sample();
        let mut argv = args(&["--ctk-load-ini", path, "--unrelated", "v"]);
        run(&mut restored, &mut argv);

        assert_eq!(argv, args(&["--unrelated", "v"]));
        assert_eq!(restored.param::<i32>("Algorithm", "Iterations").get(), 42);
    }

    #[test]
    fn ini_switch_without_path_aborts_scan() {
        let mut registry = sample();
        let mut argv = args(&["--ctk-load-ini"]);

        let result = run(&mut registry, &mut argv);

        assert!(result.summary.aborted);
        assert_eq!(argv, args(&["--ctk-load-ini"]));
    }

    #[test]
    fn missing_ini_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.ini");
        let mut registry = sample();
        let mut argv = args(&["--ctk-load-ini", path.to_str().unwrap()]);

        let result = run(&mut registry, &mut argv);

        assert!(result.err.contains("Failed to open ini file"));
        assert!(argv.is_empty());
    }

    #[test]
    fn ini_diagnostics_include_cause() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.ini");
        let unwritable = dir.path().join("no").join("such").join("state.ini");
        let mut registry = sample();
        let mut argv = args(&[
            "--ctk-load-ini",
            missing.to_str().unwrap(),
            "--ctk-save-ini",
            unwritable.to_str().unwrap(),
        ]);

        let result = run(&mut registry, &mut argv);
        let lines: Vec<&str> = result.err.lines().collect();

        assert_eq!(lines.len(), 2);
        let open_prefix = format!("Failed to open ini file: {}: ", missing.display());
        let write_prefix = format!("Failed to write ini file: {}: ", unwritable.display());
        assert!(lines[0].starts_with(&open_prefix), "{}", lines[0]);
        assert!(lines[0].len() > open_prefix.len());
        assert!(lines[1].starts_with(&write_prefix), "{}", lines[1]);
        assert!(lines[1].len() > write_prefix.len());
    }

    #[test]
    fn ini_with_undeclared_parameter_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.ini");
        std::fs::write(&path, "[Nowhere]\nGhost = 1\n").unwrap();

        let mut registry = sample();
        let mut argv = args(&["--ctk-load-ini", path.to_str().unwrap()]);
        let mut sink = Vec::new();
        let result = CommandLineParser::with_writers(&mut registry, &mut sink, Vec::new())
            .parse(&mut argv);

        assert!(matches!(
            result,
            Err(CommandLineError::Ini(IniError::UndeclaredParameter { .. }))
        ));
        assert_eq!(argv.len(), 2);
    }

    #[test]
    fn long_flag_of_positional_still_works() {
        let mut registry = sample();
        let mut argv = args(&["--special-input", "a.png"]);

        run(&mut registry, &mut argv);

        assert!(argv.is_empty());
        assert_eq!(registry.param::<File>("Special", "Input").get(), "a.png");
    }
}
