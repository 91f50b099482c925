//! # Storage Layer
//!
//! Persistence of parameter values in ini format.
//!
//! | Data | Format | Written by |
//! |------|--------|------------|
//! | Parameter values | ini (`[Section]`, `key = value`) | [`IniFile::save`], `--ctk-save-ini` |
//!
//! Values use their canonical string form; vectors are comma-joined.

mod ini;

pub use ini::{parse, render, IniError, IniFile, DEFAULT_SECTION};
