//! # Parameter Registry
//!
//! Declaration and typed access of parameters.
//!
//! ## Key Types
//!
//! - [`Registry`] - owns every parameter, the command-line bindings and the
//!   application tags
//! - [`Param`] - typed proxy that declares a parameter on first use
//! - [`kind`] - plain and special parameter kinds (`File`, `Slider`, ...)

mod app;
pub mod kind;
mod proxy;

pub use app::{ParamEntry, Registry, Section};
pub use kind::Kind;
pub use proxy::{Param, DEFAULT_STEP};
