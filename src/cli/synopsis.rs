//! Help text for `--help`

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::domain::{tags, AppTag, Parameter};
use crate::registry::Registry;

/// Renders usage, per-section flag descriptions and application info
pub fn render(registry: &Registry) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail
    let _ = write_synopsis(&mut text, registry);
    text
}

fn write_synopsis(text: &mut String, registry: &Registry) -> fmt::Result {
    let title = registry.info(AppTag::Title).unwrap_or_default();
    let indent = " ".repeat(6 + title.len());

    writeln!(text, "USAGE:\n")?;
    writeln!(text, "   ./{title} [-h] [--xml]")?;
    writeln!(text, "{indent}[--ctk-save-ini <file>] [--ctk-load-ini <file>]")?;

    let mut positional: BTreeMap<usize, &Parameter> = BTreeMap::new();
    for (_, _, param) in registry.parameters() {
        if let Some(usage) = flag_usage(param) {
            writeln!(text, "{indent}[{usage}]")?;
        } else if let Some(index) = param.tag(tags::INDEX).and_then(|i| i.parse().ok()) {
            positional.insert(index, param);
        }
    }
    for param in positional.values() {
        writeln!(text, "{indent}<{}>", param.type_tag())?;
    }

    for (section, params) in registry.sections() {
        write!(text, "\n\n{section}:\n\n")?;
        for param in params.values() {
            let Some(usage) = verbose_usage(param) else {
                continue;
            };
            writeln!(text, " [{usage}]")?;
            if let Some(description) = param.tag(tags::DESCRIPTION) {
                write!(text, "    {description}\n\n")?;
            }
        }
    }

    for (index, param) in &positional {
        write!(text, "\n\n{}({index}):\n", param.type_tag())?;
        writeln!(text, "    {}", param.tag(tags::DESCRIPTION).unwrap_or_default())?;
    }

    if let Some(description) = registry.info(AppTag::Description).filter(|d| !d.is_empty()) {
        write!(text, "\n\n{description}\n\n")?;
    }
    if let Some(contributor) = registry.info(AppTag::Contributor).filter(|c| !c.is_empty()) {
        write!(text, "\n\nAuthor: {contributor}\n\n")?;
    }
    if let Some(thanks) = registry.info(AppTag::Acknowledgements).filter(|a| !a.is_empty()) {
        write!(text, "\n\nAcknowledgements: {thanks}\n\n")?;
    }
    Ok(())
}

/// Short usage form, preferring the short flag: `-b <boolean>`
fn flag_usage(param: &Parameter) -> Option<String> {
    let placeholder = param.type_tag();
    match (param.tag(tags::FLAG), param.tag(tags::LONGFLAG)) {
        (Some(flag), _) => Some(format!("-{flag} <{placeholder}>")),
        (None, Some(long)) => Some(format!("--{long} <{placeholder}>")),
        (None, None) => None,
    }
}

/// Full usage form: `-b|--basic-types-bool <boolean>`
fn verbose_usage(param: &Parameter) -> Option<String> {
    let placeholder = param.type_tag();
    match (param.tag(tags::FLAG), param.tag(tags::LONGFLAG)) {
        (Some(flag), Some(long)) => Some(format!("-{flag}|--{long} <{placeholder}>")),
        (Some(flag), None) => Some(format!("-{flag} <{placeholder}>")),
        (None, Some(long)) => Some(format!("--{long} <{placeholder}>")),
        (None, None) => None,
    }
}

impl Registry {
    /// Returns the help text printed for `--help`
    pub fn synopsis(&self) -> String {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::kind::File;

    fn sample() -> Registry {
        let mut registry = Registry::new("tool", "Does absolutely nothing.");
        registry.set_contributor("Santa");
        registry
            .param::<bool>("Basic Types", "Bool Param")
            .declare("Just a test", "b");
        registry.param::<i32>("Algorithm", "Iterations");
        registry
            .param::<File>("Special", "File")
            .declare_positional("Input File", 0);
        registry
    }

    #[test]
    fn usage_lists_builtin_switches() {
        let text = sample().synopsis();

        assert!(text.starts_with("USAGE:\n\n   ./tool [-h] [--xml]\n"));
        assert!(text.contains("          [--ctk-save-ini <file>] [--ctk-load-ini <file>]\n"));
    }

    #[test]
    fn usage_prefers_short_flag() {
        let text = sample().synopsis();

        assert!(text.contains("          [-b <boolean>]\n"));
        assert!(text.contains("          [--algorithm-iterations <integer>]\n"));
        assert!(text.contains("          <file>\n"));
    }

    #[test]
    fn sections_describe_flags() {
        let text = sample().synopsis();

        assert!(text.contains("\n\nBasic Types:\n\n"));
        assert!(text.contains(" [-b|--basic-types-bool-param <boolean>]\n    Just a test\n\n"));
    }

    #[test]
    fn positionals_and_app_info_follow() {
        let text = sample().synopsis();

        assert!(text.contains("\n\nfile(0):\n    Input File\n"));
        assert!(text.contains("\n\nDoes absolutely nothing.\n\n"));
        assert!(text.contains("\n\nAuthor: Santa\n\n"));
        assert!(!text.contains("Acknowledgements"));
    }
}
