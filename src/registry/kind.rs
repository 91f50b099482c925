//! Parameter kinds
//!
//! A [`Kind`] describes how a parameter is declared: the storage type its
//! proxy reads and writes, and the [`TypeTag`] a fresh parameter gets. Plain
//! Rust types are their own kind; the marker types below declare the
//! enumeration and special kinds that share a plain type's storage.
//!
//! The marker traits at the bottom gate the metadata setters each special
//! kind offers on [`Param`](super::Param).

use crate::domain::{Storage, TypeTag};

/// Type descriptor for declaring parameters
pub trait Kind {
    type Value: Storage;
    const TAG: TypeTag;
}

impl Kind for bool {
    type Value = bool;
    const TAG: TypeTag = TypeTag::Boolean;
}

impl Kind for i32 {
    type Value = i32;
    const TAG: TypeTag = TypeTag::Integer;
}

impl Kind for f32 {
    type Value = f32;
    const TAG: TypeTag = TypeTag::Float;
}

impl Kind for f64 {
    type Value = f64;
    const TAG: TypeTag = TypeTag::Double;
}

impl Kind for String {
    type Value = String;
    const TAG: TypeTag = TypeTag::String;
}

impl Kind for Vec<i32> {
    type Value = Vec<i32>;
    const TAG: TypeTag = TypeTag::IntegerVector;
}

impl Kind for Vec<f32> {
    type Value = Vec<f32>;
    const TAG: TypeTag = TypeTag::FloatVector;
}

impl Kind for Vec<f64> {
    type Value = Vec<f64>;
    const TAG: TypeTag = TypeTag::DoubleVector;
}

impl Kind for Vec<String> {
    type Value = Vec<String>;
    const TAG: TypeTag = TypeTag::StringVector;
}

/// Integer chosen from a fixed list
pub struct IntEnum;
/// Float chosen from a fixed list
pub struct FloatEnum;
/// Double chosen from a fixed list
pub struct DoubleEnum;
/// String chosen from a fixed list
pub struct StringEnum;
/// Path to a file
pub struct File;
/// Path to a directory
pub struct Directory;
/// Path to an image
pub struct Image;
/// Path to a geometry file
pub struct Geometry;
/// Coordinates of one or more points
pub struct Point;
/// Coordinates of one or more regions
pub struct Region;
/// Double with a slider range
pub struct Slider;

impl Kind for IntEnum {
    type Value = i32;
    const TAG: TypeTag = TypeTag::IntegerEnumeration;
}

impl Kind for FloatEnum {
    type Value = f32;
    const TAG: TypeTag = TypeTag::FloatEnumeration;
}

impl Kind for DoubleEnum {
    type Value = f64;
    const TAG: TypeTag = TypeTag::DoubleEnumeration;
}

impl Kind for StringEnum {
    type Value = String;
    const TAG: TypeTag = TypeTag::StringEnumeration;
}

impl Kind for File {
    type Value = String;
    const TAG: TypeTag = TypeTag::File;
}

impl Kind for Directory {
    type Value = String;
    const TAG: TypeTag = TypeTag::Directory;
}

impl Kind for Image {
    type Value = String;
    const TAG: TypeTag = TypeTag::Image;
}

impl Kind for Geometry {
    type Value = String;
    const TAG: TypeTag = TypeTag::Geometry;
}

impl Kind for Point {
    type Value = Vec<String>;
    const TAG: TypeTag = TypeTag::Point;
}

impl Kind for Region {
    type Value = Vec<String>;
    const TAG: TypeTag = TypeTag::Region;
}

impl Kind for Slider {
    type Value = f64;
    const TAG: TypeTag = TypeTag::Double;
}

/// Kinds with an `enumeration` tag
pub trait Enumerated: Kind {}
impl Enumerated for IntEnum {}
impl Enumerated for FloatEnum {}
impl Enumerated for DoubleEnum {}
impl Enumerated for StringEnum {}

/// Kinds with a `fileExtensions` attribute
pub trait FileBased: Kind {}
impl FileBased for File {}
impl FileBased for Image {}
impl FileBased for Geometry {}

/// Kinds with a `type` attribute
pub trait DataTyped: Kind {}
impl DataTyped for Image {}
impl DataTyped for Geometry {}

/// Kinds with `multiple` and `coordinateSystem` attributes
pub trait Spatial: Kind {}
impl Spatial for Point {}
impl Spatial for Region {}
