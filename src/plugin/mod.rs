//! # Plugin Descriptor
//!
//! A tool built on the registry can describe itself to a host application.
//! The host runs `tool --xml`, reads the `<executable>` document and builds
//! a GUI from it: one panel per section, one widget per parameter, chosen by
//! the parameter's type tag.

mod descriptor;

pub use descriptor::generate;
