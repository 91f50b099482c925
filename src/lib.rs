//! cliparam - declarative command-line parameters
//!
//! Tools declare typed parameters grouped by section, and get command-line
//! parsing, ini persistence and a plugin descriptor (`--xml`) that lets a
//! host application build a GUI for them.
//!
//! ```
//! use cliparam::Registry;
//!
//! let mut app = Registry::new("Resample", "Resamples an image.");
//! app.param::<f64>("Output", "Spacing").declare("Output spacing", "s").set(1.0);
//!
//! let mut args = vec!["-s".to_string(), "0.5".to_string(), "--other".to_string(), "x".to_string()];
//! let _ = app.parse_command_line(&mut args).unwrap();
//!
//! assert_eq!(app.param::<f64>("Output", "Spacing").get(), 0.5);
//! assert_eq!(args, ["--other", "x"]);
//! ```

pub mod domain;
pub mod registry;
pub mod storage;
pub mod plugin;
pub mod cli;

pub use domain::{Canonical, ParamKey, ParamValue, Parameter, TypeTag};
pub use registry::{kind, Kind, Param, Registry};
