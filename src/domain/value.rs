//! Parameter values
//!
//! [`ParamValue`] holds exactly one typed payload. Enumeration and special
//! kinds (file, point, ...) share storage and string conversion with the
//! plain type they wrap; only their [`TypeTag`] differs.

use serde::{Serialize, Serializer};

use super::convert::Canonical;
use super::type_tag::TypeTag;

/// A typed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Integer(i32),
    Float(f32),
    Double(f64),
    String(String),
    IntegerVector(Vec<i32>),
    FloatVector(Vec<f32>),
    DoubleVector(Vec<f64>),
    StringVector(Vec<String>),
    IntegerEnumeration(i32),
    FloatEnumeration(f32),
    DoubleEnumeration(f64),
    StringEnumeration(String),
    File(String),
    Directory(String),
    Image(String),
    Geometry(String),
    Point(Vec<String>),
    Region(Vec<String>),
}

impl ParamValue {
    /// Creates the zero value for a type tag
    pub fn new(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Boolean => ParamValue::Bool(false),
            TypeTag::Integer => ParamValue::Integer(0),
            TypeTag::Float => ParamValue::Float(0.0),
            TypeTag::Double => ParamValue::Double(0.0),
            TypeTag::String => ParamValue::String(String::new()),
            TypeTag::IntegerVector => ParamValue::IntegerVector(Vec::new()),
            TypeTag::FloatVector => ParamValue::FloatVector(Vec::new()),
            TypeTag::DoubleVector => ParamValue::DoubleVector(Vec::new()),
            TypeTag::StringVector => ParamValue::StringVector(Vec::new()),
            TypeTag::IntegerEnumeration => ParamValue::IntegerEnumeration(0),
            TypeTag::FloatEnumeration => ParamValue::FloatEnumeration(0.0),
            TypeTag::DoubleEnumeration => ParamValue::DoubleEnumeration(0.0),
            TypeTag::StringEnumeration => ParamValue::StringEnumeration(String::new()),
            TypeTag::File => ParamValue::File(String::new()),
            TypeTag::Directory => ParamValue::Directory(String::new()),
            TypeTag::Image => ParamValue::Image(String::new()),
            TypeTag::Geometry => ParamValue::Geometry(String::new()),
            TypeTag::Point => ParamValue::Point(Vec::new()),
            TypeTag::Region => ParamValue::Region(Vec::new()),
        }
    }

    /// Creates a value of the given type from its canonical string
    pub fn parse(tag: TypeTag, s: &str) -> Self {
        let mut value = Self::new(tag);
        value.set_string(s);
        value
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            ParamValue::Bool(_) => TypeTag::Boolean,
            ParamValue::Integer(_) => TypeTag::Integer,
            ParamValue::Float(_) => TypeTag::Float,
            ParamValue::Double(_) => TypeTag::Double,
            ParamValue::String(_) => TypeTag::String,
            ParamValue::IntegerVector(_) => TypeTag::IntegerVector,
            ParamValue::FloatVector(_) => TypeTag::FloatVector,
            ParamValue::DoubleVector(_) => TypeTag::DoubleVector,
            ParamValue::StringVector(_) => TypeTag::StringVector,
            ParamValue::IntegerEnumeration(_) => TypeTag::IntegerEnumeration,
            ParamValue::FloatEnumeration(_) => TypeTag::FloatEnumeration,
            ParamValue::DoubleEnumeration(_) => TypeTag::DoubleEnumeration,
            ParamValue::StringEnumeration(_) => TypeTag::StringEnumeration,
            ParamValue::File(_) => TypeTag::File,
            ParamValue::Directory(_) => TypeTag::Directory,
            ParamValue::Image(_) => TypeTag::Image,
            ParamValue::Geometry(_) => TypeTag::Geometry,
            ParamValue::Point(_) => TypeTag::Point,
            ParamValue::Region(_) => TypeTag::Region,
        }
    }

    /// Returns the canonical string form of the value
    pub fn get_string(&self) -> String {
        match self {
            ParamValue::Bool(v) => v.to_canonical(),
            ParamValue::Integer(v) | ParamValue::IntegerEnumeration(v) => v.to_canonical(),
            ParamValue::Float(v) | ParamValue::FloatEnumeration(v) => v.to_canonical(),
            ParamValue::Double(v) | ParamValue::DoubleEnumeration(v) => v.to_canonical(),
            ParamValue::String(v)
            | ParamValue::StringEnumeration(v)
            | ParamValue::File(v)
            | ParamValue::Directory(v)
            | ParamValue::Image(v)
            | ParamValue::Geometry(v) => v.clone(),
            ParamValue::IntegerVector(v) => v.to_canonical(),
            ParamValue::FloatVector(v) => v.to_canonical(),
            ParamValue::DoubleVector(v) => v.to_canonical(),
            ParamValue::StringVector(v) | ParamValue::Point(v) | ParamValue::Region(v) => {
                v.to_canonical()
            }
        }
    }

    /// Replaces the value by parsing `s`; the type never changes
    pub fn set_string(&mut self, s: &str) {
        match self {
            ParamValue::Bool(v) => *v = bool::from_canonical(s),
            ParamValue::Integer(v) | ParamValue::IntegerEnumeration(v) => {
                *v = i32::from_canonical(s)
            }
            ParamValue::Float(v) | ParamValue::FloatEnumeration(v) => *v = f32::from_canonical(s),
            ParamValue::Double(v) | ParamValue::DoubleEnumeration(v) => {
                *v = f64::from_canonical(s)
            }
            ParamValue::String(v)
            | ParamValue::StringEnumeration(v)
            | ParamValue::File(v)
            | ParamValue::Directory(v)
            | ParamValue::Image(v)
            | ParamValue::Geometry(v) => *v = s.to_string(),
            ParamValue::IntegerVector(v) => *v = Vec::from_canonical(s),
            ParamValue::FloatVector(v) => *v = Vec::from_canonical(s),
            ParamValue::DoubleVector(v) => *v = Vec::from_canonical(s),
            ParamValue::StringVector(v) | ParamValue::Point(v) | ParamValue::Region(v) => {
                *v = Vec::from_canonical(s)
            }
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Bool(v) => v.serialize(serializer),
            ParamValue::Integer(v) | ParamValue::IntegerEnumeration(v) => v.serialize(serializer),
            ParamValue::Float(v) | ParamValue::FloatEnumeration(v) => v.serialize(serializer),
            ParamValue::Double(v) | ParamValue::DoubleEnumeration(v) => v.serialize(serializer),
            ParamValue::String(v)
            | ParamValue::StringEnumeration(v)
            | ParamValue::File(v)
            | ParamValue::Directory(v)
            | ParamValue::Image(v)
            | ParamValue::Geometry(v) => v.serialize(serializer),
            ParamValue::IntegerVector(v) => v.serialize(serializer),
            ParamValue::FloatVector(v) => v.serialize(serializer),
            ParamValue::DoubleVector(v) => v.serialize(serializer),
            ParamValue::StringVector(v) | ParamValue::Point(v) | ParamValue::Region(v) => {
                v.serialize(serializer)
            }
        }
    }
}

/// Storage types a [`ParamValue`] can hold
///
/// `peek` matches every variant with this storage, whatever its tag; callers
/// that need an exact kind match compare [`ParamValue::type_tag`] first.
pub trait Storage: Canonical + Clone {
    fn peek(value: &ParamValue) -> Option<&Self>;
    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self>;
}

impl Storage for bool {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for i32 {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Integer(v) | ParamValue::IntegerEnumeration(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::Integer(v) | ParamValue::IntegerEnumeration(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for f32 {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Float(v) | ParamValue::FloatEnumeration(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::Float(v) | ParamValue::FloatEnumeration(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for f64 {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::Double(v) | ParamValue::DoubleEnumeration(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::Double(v) | ParamValue::DoubleEnumeration(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for String {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::String(v)
            | ParamValue::StringEnumeration(v)
            | ParamValue::File(v)
            | ParamValue::Directory(v)
            | ParamValue::Image(v)
            | ParamValue::Geometry(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::String(v)
            | ParamValue::StringEnumeration(v)
            | ParamValue::File(v)
            | ParamValue::Directory(v)
            | ParamValue::Image(v)
            | ParamValue::Geometry(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for Vec<i32> {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::IntegerVector(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::IntegerVector(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for Vec<f32> {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::FloatVector(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::FloatVector(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for Vec<f64> {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::DoubleVector(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::DoubleVector(v) => Some(v),
            _ => None,
        }
    }
}

impl Storage for Vec<String> {
    fn peek(value: &ParamValue) -> Option<&Self> {
        match value {
            ParamValue::StringVector(v) | ParamValue::Point(v) | ParamValue::Region(v) => Some(v),
            _ => None,
        }
    }

    fn peek_mut(value: &mut ParamValue) -> Option<&mut Self> {
        match value {
            ParamValue::StringVector(v) | ParamValue::Point(v) | ParamValue::Region(v) => Some(v),
            _ => None,
        }
    }
}
