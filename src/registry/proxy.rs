//! Typed parameter proxy
//!
//! A [`Param`] does not hold a value. It addresses one section/key pair in a
//! [`Registry`] and reads and writes it as `K::Value`:
//!
//! ```
//! use cliparam::{Registry, kind::File};
//!
//! let mut app = Registry::new("Tool", "Does things");
//! app.param::<bool>("Basic Types", "Bool Param").declare("Just a test", "b").set(true);
//! app.param::<File>("Special", "Input")
//!     .set_file_extensions("png,jpg")
//!     .declare_positional("Input file", 0);
//!
//! assert!(app.param::<bool>("Basic Types", "Bool Param").get());
//! ```
//!
//! The first proxy for a pair creates the parameter with `K::TAG` and binds
//! its derived long flag (`--section-key`). Later proxies reuse it. A proxy
//! whose kind differs from the stored one still works: values pass through
//! the canonical string form, which can lose information.

use std::marker::PhantomData;

use super::app::Registry;
use super::kind::{DataTyped, Enumerated, FileBased, Kind, Slider, Spatial};
use crate::domain::{tags, Canonical, ParamKey, Parameter, Storage};

/// Default slider step for [`Param::set_range`]
pub const DEFAULT_STEP: f64 = 0.01;

/// Typed accessor for one parameter
pub struct Param<'a, K: Kind> {
    registry: &'a mut Registry,
    key: ParamKey,
    kind: PhantomData<K>,
}

impl<'a, K: Kind> Param<'a, K> {
    /// Binds a proxy to `section`/`key`, declaring the parameter if needed
    pub fn new(registry: &'a mut Registry, section: &str, key: &str) -> Self {
        let declared = registry.contains(section, key);
        let mut param = Self {
            registry,
            key: ParamKey::new(section, key),
            kind: PhantomData,
        };
        if !declared {
            param.declare_type();
        }
        param
    }

    pub fn key(&self) -> &ParamKey {
        &self.key
    }

    /// Replaces the stored parameter with a fresh one of kind `K`
    ///
    /// The current value is carried over through its canonical string.
    pub fn declare_type(&mut self) -> &mut Self {
        self.registry
            .set_param(&self.key.section, &self.key.key, Parameter::of_type(K::TAG));
        let name = self.key.long_flag_name();
        self.registry
            .set_flag(format!("--{name}"), &self.key.section, &self.key.key);
        self.parameter_mut().set_tag(tags::LONGFLAG, name);
        self
    }

    /// Declares a named flag: `--section-key`, plus `-<short_flag>` if not empty
    pub fn declare(&mut self, description: &str, short_flag: &str) -> &mut Self {
        let name = self.key.long_flag_name();
        self.registry
            .set_flag(format!("--{name}"), &self.key.section, &self.key.key);
        if !short_flag.is_empty() {
            self.registry
                .set_flag(format!("-{short_flag}"), &self.key.section, &self.key.key);
        }

        let param = self.parameter_mut();
        param.set_tag(tags::LONGFLAG, name);
        param.set_tag(tags::DESCRIPTION, description);
        if !short_flag.is_empty() {
            param.set_tag(tags::FLAG, short_flag);
        }
        self
    }

    /// Declares a positional argument at `index` among bare tokens
    ///
    /// The `--section-key` binding stays usable; the descriptor lists the
    /// parameter by index instead of by flag.
    pub fn declare_positional(&mut self, description: &str, index: usize) -> &mut Self {
        self.registry
            .set_flag(index.to_string(), &self.key.section, &self.key.key);

        let param = self.parameter_mut();
        param.tags.remove(tags::FLAG);
        param.tags.remove(tags::LONGFLAG);
        param.set_tag(tags::INDEX, index.to_string());
        param.set_tag(tags::DESCRIPTION, description);
        self
    }

    /// Reads the value, converting through the canonical string if the
    /// stored kind is not `K`
    pub fn get(&self) -> K::Value {
        let Some(param) = self.registry.get_param(&self.key.section, &self.key.key) else {
            return K::Value::from_canonical("");
        };

        if param.type_tag() == K::TAG {
            if let Some(value) = K::Value::peek(&param.value) {
                return value.clone();
            }
        }
        K::Value::from_canonical(&param.get_string())
    }

    /// Writes the value, converting through the canonical string if the
    /// stored kind is not `K`
    pub fn set(&mut self, value: K::Value) -> &mut Self {
        let param = self.parameter_mut();
        if param.type_tag() == K::TAG {
            if let Some(slot) = K::Value::peek_mut(&mut param.value) {
                *slot = value;
                return self;
            }
        }
        param.set_string(&value.to_canonical());
        self
    }

    pub fn get_string(&self) -> String {
        self.registry
            .get_param(&self.key.section, &self.key.key)
            .map(Parameter::get_string)
            .unwrap_or_default()
    }

    pub fn set_string(&mut self, value: &str) -> &mut Self {
        self.parameter_mut().set_string(value);
        self
    }

    /// Verbose description for help text and descriptor
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.parameter_mut().set_tag(tags::DESCRIPTION, description);
        self
    }

    /// Short label for generated GUIs
    pub fn set_label(&mut self, label: &str) -> &mut Self {
        self.parameter_mut().set_tag(tags::LABEL, label);
        self
    }

    /// Marks the parameter as an input or output channel
    pub fn set_channel(&mut self, input: bool) -> &mut Self {
        let channel = if input { "input" } else { "output" };
        self.parameter_mut().set_tag(tags::CHANNEL, channel);
        self
    }

    fn set_attrib(&mut self, name: &str, value: &str) -> &mut Self {
        self.parameter_mut()
            .attribs
            .insert(name.to_string(), value.to_string());
        self
    }

    fn parameter_mut(&mut self) -> &mut Parameter {
        self.registry
            .ensure_param(&self.key.section, &self.key.key, K::TAG)
    }
}

impl<K: Enumerated> Param<'_, K> {
    /// Comma-separated list of allowed values
    pub fn set_enumeration(&mut self, values: &str) -> &mut Self {
        self.parameter_mut().set_tag(tags::ENUMERATION, values);
        self
    }
}

impl<K: FileBased> Param<'_, K> {
    /// Comma-separated list of accepted extensions
    pub fn set_file_extensions(&mut self, extensions: &str) -> &mut Self {
        self.set_attrib("fileExtensions", extensions)
    }
}

impl<K: DataTyped> Param<'_, K> {
    pub fn set_type(&mut self, data_type: &str) -> &mut Self {
        self.set_attrib("type", data_type)
    }
}

impl<K: Spatial> Param<'_, K> {
    pub fn set_multiple(&mut self, multiple: &str) -> &mut Self {
        self.set_attrib("multiple", multiple)
    }

    pub fn set_coordinate_system(&mut self, system: &str) -> &mut Self {
        self.set_attrib("coordinateSystem", system)
    }
}

impl Param<'_, Slider> {
    /// Slider range with the default step
    pub fn set_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.set_range_step(min, max, DEFAULT_STEP)
    }

    pub fn set_range_step(&mut self, min: f64, max: f64, step: f64) -> &mut Self {
        let constraints = &mut self.parameter_mut().constraints;
        constraints.insert("minimum".to_string(), min.to_canonical());
        constraints.insert("maximum".to_string(), max.to_canonical());
        constraints.insert("step".to_string(), step.to_canonical());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParamValue, TypeTag};
    use crate::registry::kind::{DoubleEnum, File, Image, Point};

    #[test]
    fn first_proxy_declares_parameter_and_long_flag() {
        let mut registry = Registry::default();
        registry.param::<i32>("Algorithm", "Max Iterations");

        let param = registry.get_param("Algorithm", "Max Iterations").unwrap();
        assert_eq!(param.type_tag(), TypeTag::Integer);
        assert_eq!(param.tag(tags::LONGFLAG), Some("algorithm-max-iterations"));
        assert_eq!(
            registry.flag("--algorithm-max-iterations"),
            Some(&ParamKey::new("Algorithm", "Max Iterations"))
        );
    }

    #[test]
    fn later_proxy_reuses_parameter() {
        let mut registry = Registry::default();
        registry.param::<i32>("S", "A").set(7).set_label("Seven");
        registry.param::<i32>("S", "A").set_description("A number");

        let param = registry.get_param("S", "A").unwrap();
        assert_eq!(param.value, ParamValue::Integer(7));
        assert_eq!(param.tag(tags::LABEL), Some("Seven"));
        assert_eq!(param.tag(tags::DESCRIPTION), Some("A number"));
    }

    #[test]
    fn declare_binds_short_and_long_flag() {
        let mut registry = Registry::default();
        registry
            .param::<bool>("Basic Types", "Bool Param")
            .declare("Just a test", "b");

        let expected = ParamKey::new("Basic Types", "Bool Param");
        assert_eq!(registry.flag("-b"), Some(&expected));
        assert_eq!(registry.flag("--basic-types-bool-param"), Some(&expected));

        let param = registry.get_param("Basic Types", "Bool Param").unwrap();
        assert_eq!(param.tag(tags::FLAG), Some("b"));
        assert_eq!(param.tag(tags::DESCRIPTION), Some("Just a test"));
    }

    #[test]
    fn declare_positional_binds_index() {
        let mut registry = Registry::default();
        registry
            .param::<File>("Special", "File")
            .declare_positional("Input File", 0);

        assert_eq!(registry.flag("0"), Some(&ParamKey::new("Special", "File")));
        assert!(registry.flag("--special-file").is_some());

        let param = registry.get_param("Special", "File").unwrap();
        assert_eq!(param.tag(tags::INDEX), Some("0"));
        assert_eq!(param.tag(tags::LONGFLAG), None);
    }

    #[test]
    fn matching_kind_reads_and_writes_directly() {
        let mut registry = Registry::default();
        registry.param::<Vec<f64>>("V", "Double Vec").set(vec![1.0, 2.0]);

        assert_eq!(registry.param::<Vec<f64>>("V", "Double Vec").get(), vec![1.0, 2.0]);
        assert_eq!(
            registry.get_param("V", "Double Vec").unwrap().value,
            ParamValue::DoubleVector(vec![1.0, 2.0])
        );
    }

    #[test]
    fn mismatched_kind_converts_through_string() {
        let mut registry = Registry::default();
        registry
            .param::<DoubleEnum>("EnumTypes", "Double Enum")
            .set_enumeration("0.1,0.2,0.3");
        registry.param::<f64>("EnumTypes", "Double Enum").set(0.3);

        let param = registry.get_param("EnumTypes", "Double Enum").unwrap();
        assert_eq!(param.value, ParamValue::DoubleEnumeration(0.3));
        assert_eq!(registry.param::<f64>("EnumTypes", "Double Enum").get(), 0.3);
    }

    #[test]
    fn mismatched_kind_can_lose_information() {
        let mut registry = Registry::default();
        registry.param::<f64>("S", "Ratio").set(2.75);

        assert_eq!(registry.param::<i32>("S", "Ratio").get(), 2);
        assert_eq!(registry.param::<String>("S", "Ratio").get(), "2.75");
    }

    #[test]
    fn declare_type_converts_stored_kind() {
        let mut registry = Registry::default();
        registry.param::<i32>("S", "A").set(12);
        registry.param::<String>("S", "A").declare_type();

        let param = registry.get_param("S", "A").unwrap();
        assert_eq!(param.value, ParamValue::String("12".to_string()));
        assert!(registry.flag("--s-a").is_some());
    }

    #[test]
    fn string_access() {
        let mut registry = Registry::default();
        registry.param::<Vec<i32>>("S", "List").set_string("1,2,3,");

        assert_eq!(registry.param::<Vec<i32>>("S", "List").get(), vec![1, 2, 3]);
        assert_eq!(registry.param::<Vec<i32>>("S", "List").get_string(), "1,2,3");
    }

    #[test]
    fn special_setters_fill_attribs() {
        let mut registry = Registry::default();
        registry
            .param::<Image>("S", "Image")
            .set_type("scalar")
            .set_file_extensions("png,tif")
            .set_channel(false);
        registry
            .param::<Point>("S", "Seeds")
            .set_multiple("true")
            .set_coordinate_system("ras");

        let image = registry.get_param("S", "Image").unwrap();
        assert_eq!(image.attribs["type"], "scalar");
        assert_eq!(image.attribs["fileExtensions"], "png,tif");
        assert_eq!(image.tag(tags::CHANNEL), Some("output"));

        let seeds = registry.get_param("S", "Seeds").unwrap();
        assert_eq!(seeds.attribs["multiple"], "true");
        assert_eq!(seeds.attribs["coordinateSystem"], "ras");
    }

    #[test]
    fn slider_range_fills_constraints() {
        let mut registry = Registry::default();
        registry.param::<Slider>("Special", "Slider").set_range(0.0, 1.0);
        registry.param::<f64>("Special", "Slider").set(0.333);

        let param = registry.get_param("Special", "Slider").unwrap();
        assert_eq!(param.value, ParamValue::Double(0.333));
        assert_eq!(param.constraints["minimum"], "0");
        assert_eq!(param.constraints["maximum"], "1");
        assert_eq!(param.constraints["step"], "0.01");
    }
}
