//! Type tags and application tags
//!
//! A [`TypeTag`] is the canonical name of a parameter's value kind. It is the
//! discriminator used by the descriptor (`<integer>`, `<double-vector>`, ...)
//! and by the help text.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeTagError {
    #[error("Unknown parameter type: '{0}'")]
    Unknown(String),
}

/// Canonical name of every supported value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeTag {
    Boolean,
    Integer,
    Float,
    Double,
    String,
    IntegerVector,
    FloatVector,
    DoubleVector,
    StringVector,
    IntegerEnumeration,
    FloatEnumeration,
    DoubleEnumeration,
    StringEnumeration,
    File,
    Directory,
    Image,
    Geometry,
    Point,
    Region,
}

impl TypeTag {
    /// All tags, in declaration order
    pub const ALL: [TypeTag; 19] = [
        TypeTag::Boolean,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::String,
        TypeTag::IntegerVector,
        TypeTag::FloatVector,
        TypeTag::DoubleVector,
        TypeTag::StringVector,
        TypeTag::IntegerEnumeration,
        TypeTag::FloatEnumeration,
        TypeTag::DoubleEnumeration,
        TypeTag::StringEnumeration,
        TypeTag::File,
        TypeTag::Directory,
        TypeTag::Image,
        TypeTag::Geometry,
        TypeTag::Point,
        TypeTag::Region,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::String => "string",
            TypeTag::IntegerVector => "integer-vector",
            TypeTag::FloatVector => "float-vector",
            TypeTag::DoubleVector => "double-vector",
            TypeTag::StringVector => "string-vector",
            TypeTag::IntegerEnumeration => "integer-enumeration",
            TypeTag::FloatEnumeration => "float-enumeration",
            TypeTag::DoubleEnumeration => "double-enumeration",
            TypeTag::StringEnumeration => "string-enumeration",
            TypeTag::File => "file",
            TypeTag::Directory => "directory",
            TypeTag::Image => "image",
            TypeTag::Geometry => "geometry",
            TypeTag::Point => "point",
            TypeTag::Region => "region",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TypeTagError::Unknown(s.to_string()))
    }
}

/// Application-level descriptor tags
///
/// The variant order is the order in which the descriptor emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppTag {
    Category,
    Title,
    Description,
    Version,
    DocumentationUrl,
    License,
    Contributor,
    Acknowledgements,
}

impl AppTag {
    /// Element name used in the descriptor
    pub fn xml_name(&self) -> &'static str {
        match self {
            AppTag::Category => "category",
            AppTag::Title => "title",
            AppTag::Description => "description",
            AppTag::Version => "version",
            AppTag::DocumentationUrl => "documentation-url",
            AppTag::License => "license",
            AppTag::Contributor => "contributor",
            AppTag::Acknowledgements => "acknowledgements",
        }
    }
}

impl fmt::Display for AppTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_name())
    }
}
