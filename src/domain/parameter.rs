//! Parameter model
//!
//! A [`Parameter`] is a typed value plus the free-form metadata the help text
//! and the descriptor are generated from.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::type_tag::TypeTag;
use super::value::ParamValue;

/// Well-known keys of [`Parameter::tags`]
pub mod tags {
    pub const DESCRIPTION: &str = "description";
    pub const LABEL: &str = "label";
    pub const LONGFLAG: &str = "longflag";
    pub const FLAG: &str = "flag";
    pub const INDEX: &str = "index";
    pub const CHANNEL: &str = "channel";
    pub const ENUMERATION: &str = "enumeration";
}

/// Section/key address of a parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParamKey {
    pub section: String,
    pub key: String,
}

impl ParamKey {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Derived long flag name: `section-key`, lower-cased, spaces as hyphens
    ///
    /// `("Basic Types", "Bool Param")` becomes `basic-types-bool-param`.
    pub fn long_flag_name(&self) -> String {
        format!("{}-{}", self.section, self.key)
            .to_ascii_lowercase()
            .replace(' ', "-")
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.section, self.key)
    }
}

/// A declared parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub value: ParamValue,

    /// Descriptor child elements and help text (description, label, flag, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,

    /// Descriptor element attributes (fileExtensions, coordinateSystem, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attribs: BTreeMap<String, String>,

    /// Descriptor `<constraints>` entries (minimum, maximum, step)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constraints: BTreeMap<String, String>,
}

impl Parameter {
    pub fn new(value: ParamValue) -> Self {
        Self {
            value,
            tags: BTreeMap::new(),
            attribs: BTreeMap::new(),
            constraints: BTreeMap::new(),
        }
    }

    /// Creates a parameter holding the zero value of `tag`
    pub fn of_type(tag: TypeTag) -> Self {
        Self::new(ParamValue::new(tag))
    }

    pub fn type_tag(&self) -> TypeTag {
        self.value.type_tag()
    }

    pub fn get_string(&self) -> String {
        self.value.get_string()
    }

    pub fn set_string(&mut self, s: &str) {
        self.value.set_string(s)
    }

    /// Returns a non-empty tag value
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn set_tag(&mut self, name: &str, value: impl Into<String>) {
        self.tags.insert(name.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_flag_name_is_normalized() {
        let key = ParamKey::new("Basic Types", "Bool Param");
        assert_eq!(key.long_flag_name(), "basic-types-bool-param");
    }

    #[test]
    fn key_display() {
        assert_eq!(ParamKey::new("S", "A").to_string(), "[S] A");
    }

    #[test]
    fn empty_tags_read_as_missing() {
        let mut param = Parameter::of_type(TypeTag::Integer);
        param.set_tag(tags::DESCRIPTION, "");
        param.set_tag(tags::LABEL, "Count");

        assert_eq!(param.tag(tags::DESCRIPTION), None);
        assert_eq!(param.tag(tags::LABEL), Some("Count"));
    }

    #[test]
    fn string_access_goes_through_value() {
        let mut param = Parameter::of_type(TypeTag::DoubleVector);
        param.set_string("1,2.5,");
        assert_eq!(param.value, ParamValue::DoubleVector(vec![1.0, 2.5]));
        assert_eq!(param.get_string(), "1,2.5");
    }
}
