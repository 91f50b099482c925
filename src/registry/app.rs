//! The parameter registry
//!
//! One [`Registry`] is built at program start and handed to everything that
//! reads or mutates parameters. It owns three maps:
//!
//! - parameters by section, then key
//! - command-line tokens (`--long-flag`, `-f`, `"0"`, `"1"`, ...) to the
//!   parameter they address
//! - application tags rendered at the top of the descriptor
//!
//! Sections and keys iterate in map order, not declaration order.

use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::kind::Kind;
use super::proxy::Param;
use crate::domain::{AppTag, ParamKey, ParamValue, Parameter, TypeTag};

/// Parameters of one section, by key
pub type Section = BTreeMap<String, Parameter>;

/// Registry of declared parameters and their command-line bindings
#[derive(Debug, Clone, Default)]
pub struct Registry {
    params: BTreeMap<String, Section>,
    flags: BTreeMap<String, ParamKey>,
    info: BTreeMap<AppTag, String>,
}

/// Serializable view of one parameter
#[derive(Debug, Serialize)]
pub struct ParamEntry<'a> {
    pub section: &'a str,
    pub key: &'a str,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    #[serde(flatten)]
    pub param: &'a Parameter,
}

impl Registry {
    /// Creates a registry for an application with a title and description
    pub fn new(title: &str, description: &str) -> Self {
        let mut registry = Self::default();
        registry.set_info(AppTag::Title, title);
        registry.set_info(AppTag::Description, description);
        registry
    }

    /// Returns the parameter at `section`/`key`, if declared
    pub fn get_param(&self, section: &str, key: &str) -> Option<&Parameter> {
        self.params.get(section)?.get(key)
    }

    pub fn get_param_mut(&mut self, section: &str, key: &str) -> Option<&mut Parameter> {
        self.params.get_mut(section)?.get_mut(key)
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get_param(section, key).is_some()
    }

    /// Installs `param` at `section`/`key`
    ///
    /// If a parameter already lives there, its value is carried over to the
    /// new one through the canonical string (lossy when the new type cannot
    /// parse it). The old parameter's metadata is dropped.
    pub fn set_param(&mut self, section: &str, key: &str, param: Parameter) -> &mut Parameter {
        let section_params = self.params.entry(section.to_string()).or_default();

        match section_params.entry(key.to_string()) {
            Entry::Vacant(slot) => slot.insert(param),
            Entry::Occupied(mut slot) => {
                let previous = slot.get().get_string();
                slot.insert(param);
                let installed = slot.into_mut();
                if !previous.is_empty() {
                    installed.set_string(&previous);
                }
                installed
            }
        }
    }

    /// Returns the parameter at `section`/`key`, creating a zero value of
    /// `tag` when nothing is declared there yet
    pub fn ensure_param(&mut self, section: &str, key: &str, tag: TypeTag) -> &mut Parameter {
        self.params
            .entry(section.to_string())
            .or_default()
            .entry(key.to_string())
            .or_insert_with(|| Parameter::new(ParamValue::new(tag)))
    }

    /// Binds a command-line token to a parameter, replacing any previous binding
    pub fn set_flag(&mut self, token: impl Into<String>, section: &str, key: &str) {
        self.flags.insert(token.into(), ParamKey::new(section, key));
    }

    /// Returns the parameter bound to a command-line token
    pub fn flag(&self, token: &str) -> Option<&ParamKey> {
        self.flags.get(token)
    }

    pub fn flags(&self) -> impl Iterator<Item = (&str, &ParamKey)> {
        self.flags.iter().map(|(token, key)| (token.as_str(), key))
    }

    /// Iterates sections in map order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.params
            .iter()
            .map(|(section, params)| (section.as_str(), params))
    }

    /// Iterates all parameters as `(section, key, parameter)`
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str, &Parameter)> {
        self.sections().flat_map(|(section, params)| {
            params
                .iter()
                .map(move |(key, param)| (section, key.as_str(), param))
        })
    }

    pub fn len(&self) -> usize {
        self.params.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a typed proxy to `section`/`key`, declaring it on first use
    pub fn param<K: Kind>(&mut self, section: &str, key: &str) -> Param<'_, K> {
        Param::new(self, section, key)
    }

    /// Snapshot of every parameter for serialization
    pub fn snapshot(&self) -> Vec<ParamEntry<'_>> {
        self.parameters()
            .map(|(section, key, param)| ParamEntry {
                section,
                key,
                type_tag: param.type_tag(),
                param,
            })
            .collect()
    }

    pub fn info(&self, tag: AppTag) -> Option<&str> {
        self.info.get(&tag).map(String::as_str)
    }

    /// Application tags in descriptor order
    pub fn info_tags(&self) -> impl Iterator<Item = (AppTag, &str)> {
        self.info.iter().map(|(tag, value)| (*tag, value.as_str()))
    }

    pub fn set_info(&mut self, tag: AppTag, value: impl Into<String>) {
        self.info.insert(tag, value.into());
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Category, value);
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Title, value);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Description, value);
    }

    pub fn set_version(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Version, value);
    }

    pub fn set_documentation_url(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::DocumentationUrl, value);
    }

    pub fn set_license(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::License, value);
    }

    pub fn set_contributor(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Contributor, value);
    }

    pub fn set_acknowledgements(&mut self, value: impl Into<String>) {
        self.set_info(AppTag::Acknowledgements, value);
    }
}
