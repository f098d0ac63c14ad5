use envscan_core::{AccessorKind, Declaration, NormalizedArg};
use envscan_registry::{Entries, Registry};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::cli::OutputFormat;

pub mod table;

/// Heading of the project scan unit.
pub const ROOT_HEADING: &str = "Environment";

const COLUMNS: [&str; 5] = ["ENV", "type", "default", "required", "notes"];
const REQUIRED_MARKER: &str = "✓";
const UNKNOWN_KIND_SUFFIX: &str = " (unknown)";

/// One scan unit ready to render.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub registry: &'a Registry,
}

/// How scan units are arranged in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A single unit printed as its `key -> declaration` map.
    Single,
    /// Units keyed by heading.
    Keyed,
}

/// Render scan units to a string in the requested format.
///
/// Units without declarations produce no section. An empty result renders as
/// an empty string in Markdown and `{}` in JSON.
pub fn render(
    sections: &[Section<'_>],
    layout: Layout,
    format: OutputFormat,
    sort: bool,
) -> anyhow::Result<String> {
    let visible: Vec<Section<'_>> = sections
        .iter()
        .copied()
        .filter(|section| !section.registry.is_empty())
        .collect();

    match format {
        OutputFormat::Json => render_json(&visible, layout, sort),
        OutputFormat::Md => Ok(render_markdown(&visible, sort)),
    }
}

/// Print scan units to stdout. Nothing is printed for empty Markdown output.
pub fn output(
    sections: &[Section<'_>],
    layout: Layout,
    format: OutputFormat,
    sort: bool,
) -> anyhow::Result<()> {
    let rendered = render(sections, layout, format, sort)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn render_json(sections: &[Section<'_>], layout: Layout, sort: bool) -> anyhow::Result<String> {
    let rendered = match layout {
        Layout::Single => match sections.first() {
            Some(section) => serde_json::to_string_pretty(&section.registry.entries(sort))?,
            None => String::from("{}"),
        },
        Layout::Keyed => serde_json::to_string_pretty(&KeyedSections { sections, sort })?,
    };
    Ok(rendered)
}

struct KeyedSections<'s, 'a> {
    sections: &'s [Section<'a>],
    sort: bool,
}

impl Serialize for KeyedSections<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in self.sections {
            map.serialize_entry(section.heading, &section.registry.entries(self.sort))?;
        }
        map.end()
    }
}

fn render_markdown(sections: &[Section<'_>], sort: bool) -> String {
    sections
        .iter()
        .map(|section| {
            format!(
                "## {}\n\n{}",
                section.heading,
                markdown_table(section.registry.entries(sort))
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn markdown_table(entries: Entries<'_>) -> String {
    let rows = entries.iter().map(declaration_row).collect::<Vec<_>>();
    table::render_markdown_table(&COLUMNS, &rows)
}

fn declaration_row(declaration: &Declaration) -> Vec<String> {
    vec![
        declaration.key.clone(),
        kind_cell(&declaration.kind),
        declaration
            .default_value()
            .map(NormalizedArg::render)
            .unwrap_or_default(),
        if declaration.is_required() {
            REQUIRED_MARKER.to_string()
        } else {
            String::new()
        },
        declaration.comment.clone().unwrap_or_default(),
    ]
}

/// Type column text. Unknown members get a `(unknown)` suffix.
fn kind_cell(kind: &AccessorKind) -> String {
    if kind.is_unknown() {
        format!("{kind}{UNKNOWN_KIND_SUFFIX}")
    } else {
        kind.to_string()
    }
}

#[cfg(test)]
mod tests;
