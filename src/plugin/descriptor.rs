//! Plugin descriptor generation
//!
//! Hosts that auto-build GUIs for command-line tools run them with `--xml`
//! and read back an `<executable>` document:
//!
//! ```text
//! <executable>
//!   <category>Toys</category>            application tags, fixed order
//!   <parameters>                         one block per section
//!     <label>Special</label>
//!     <file fileExtensions="png,jpg">    element name = type tag
//!       <name>File</name>
//!       <default>in.png</default>        current value
//!       <channel>input</channel>         one element per non-empty tag
//!     </file>
//!   </parameters>
//! </executable>
//! ```

use std::fmt::{self, Write};

use crate::domain::{tags, Canonical, Parameter};
use crate::registry::Registry;

/// Generates the descriptor for every declared parameter
pub fn generate(registry: &Registry) -> String {
    let mut xml = String::new();
    // Writing into a String cannot fail
    let _ = write_executable(&mut xml, registry);
    xml
}

fn write_executable(xml: &mut String, registry: &Registry) -> fmt::Result {
    writeln!(xml, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(xml, "<executable>")?;

    for (tag, value) in registry.info_tags() {
        let name = tag.xml_name();
        writeln!(xml, "  <{name}>{}</{name}>", xml_escape(value))?;
    }

    for (section, params) in registry.sections() {
        let section = xml_escape(section);
        writeln!(xml, "  <parameters>")?;
        writeln!(xml, "    <label>{section}</label>")?;
        writeln!(xml, "    <description>{section} - Section</description>")?;
        for (key, param) in params {
            write_parameter(xml, key, param)?;
        }
        writeln!(xml, "  </parameters>")?;
    }

    writeln!(xml, "</executable>")
}

fn write_parameter(xml: &mut String, key: &str, param: &Parameter) -> fmt::Result {
    let element = param.type_tag().as_str();

    write!(xml, "    <{element}")?;
    for (name, value) in param.attribs.iter().filter(|(_, v)| !v.is_empty()) {
        write!(xml, r#" {name}="{}""#, xml_escape(value))?;
    }
    writeln!(xml, ">")?;

    writeln!(xml, "      <name>{}</name>", xml_escape(key))?;
    writeln!(xml, "      <default>{}</default>", xml_escape(&param.get_string()))?;

    for (name, value) in param.tags.iter().filter(|(_, v)| !v.is_empty()) {
        if name == tags::ENUMERATION {
            let elements = Vec::<String>::from_canonical(value);
            if elements.is_empty() {
                continue;
            }
            writeln!(xml, "      <enumeration>")?;
            for element in &elements {
                writeln!(xml, "        <element>{}</element>", xml_escape(element))?;
            }
            writeln!(xml, "      </enumeration>")?;
        } else {
            writeln!(xml, "      <{name}>{}</{name}>", xml_escape(value))?;
        }
    }

    if !param.constraints.is_empty() {
        writeln!(xml, "      <constraints>")?;
        for (name, value) in &param.constraints {
            writeln!(xml, "        <{name}>{}</{name}>", xml_escape(value))?;
        }
        writeln!(xml, "      </constraints>")?;
    }

    writeln!(xml, "    </{element}>")
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Registry {
    /// Returns the plugin descriptor for this application
    pub fn xml_description(&self) -> String {
        generate(self)
    }
}
