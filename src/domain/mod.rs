//! Domain models for parameters
//!
//! Value kinds, canonical string conversion and the parameter record,
//! without any I/O concerns.

mod convert;
mod parameter;
mod type_tag;
mod value;

pub use convert::Canonical;
pub use parameter::{tags, ParamKey, Parameter};
pub use type_tag::{AppTag, TypeTag, TypeTagError};
pub use value::{ParamValue, Storage};
