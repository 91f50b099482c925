//! Ini persistence
//!
//! Parameter values are saved as
//!
//! ```text
//!
//! [Section]
//!
//! key = value
//! ```
//!
//! one block per section, in map order. On load, blank lines and `#`
//! comments are skipped, `[Name]` switches section (the default is
//! [`DEFAULT_SECTION`]) and every other line is split on its first `=`.
//! Every key an ini file mentions must already be declared.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::Registry;

/// Section for keys that appear before any `[Section]` header
pub const DEFAULT_SECTION: &str = "Global";

#[derive(Debug, Error)]
pub enum IniError {
    #[error("Failed to open ini file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write ini file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: no parameter declared for [{section}] {key}")]
    UndeclaredParameter {
        section: String,
        key: String,
        line: usize,
    },
}

/// An ini file holding parameter values
pub struct IniFile {
    path: PathBuf,
}

impl IniFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current value of every parameter
    pub fn save(&self, registry: &Registry) -> Result<(), IniError> {
        fs::write(&self.path, render(registry)).map_err(|source| IniError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the file and applies its values to declared parameters
    pub fn load(&self, registry: &mut Registry) -> Result<(), IniError> {
        let content = fs::read_to_string(&self.path).map_err(|source| IniError::Open {
            path: self.path.clone(),
            source,
        })?;
        parse(registry, &content)
    }
}

/// Renders every parameter in ini format
pub fn render(registry: &Registry) -> String {
    let mut ini = String::new();
    for (section, params) in registry.sections() {
        ini.push_str(&format!("\n[{}]\n\n", section));
        for (key, param) in params {
            ini.push_str(&format!("{} = {}\n", key, param.get_string()));
        }
        ini.push_str("\n\n");
    }
    ini
}

/// Applies ini-formatted values to declared parameters
///
/// Stops at the first key that is not declared in its section; lines before
/// it have already been applied.
pub fn parse(registry: &mut Registry, ini: &str) -> Result<(), IniError> {
    let mut section = DEFAULT_SECTION.to_string();

    for (line_num, line) in ini.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            section = header.strip_suffix(']').unwrap_or(header).to_string();
            continue;
        }

        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = key.trim();
        let value = value.trim();

        let param = registry.get_param_mut(&section, key).ok_or_else(|| {
            IniError::UndeclaredParameter {
                section: section.clone(),
                key: key.to_string(),
                line: line_num + 1,
            }
        })?;
        param.set_string(value);
    }

    Ok(())
}

impl Registry {
    /// Renders the current values in ini format
    pub fn to_ini(&self) -> String {
        render(self)
    }

    /// Applies values from an ini-formatted string
    pub fn parse_ini(&mut self, ini: &str) -> Result<(), IniError> {
        parse(self, ini)
    }

    pub fn load_ini(&mut self, path: impl AsRef<Path>) -> Result<(), IniError> {
        IniFile::new(path.as_ref()).load(self)
    }

    pub fn save_ini(&self, path: impl AsRef<Path>) -> Result<(), IniError> {
        IniFile::new(path.as_ref()).save(self)
    }
}
