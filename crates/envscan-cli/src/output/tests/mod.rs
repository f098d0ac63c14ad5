use envscan_core::{AccessorKind, Declaration, NormalizedArg, Scalar, SourceLocation};
use envscan_registry::Registry;
use pretty_assertions::assert_eq;

use super::table::render_markdown_table;
use super::*;

fn decl(key: &str, kind: AccessorKind, args: Vec<NormalizedArg>, comment: Option<&str>) -> Declaration {
    Declaration {
        key: key.to_string(),
        kind,
        args,
        comment: comment.map(ToString::to_string),
        location: SourceLocation {
            file: "src/server.ts".to_string(),
            line: 3,
        },
    }
}

fn port_registry() -> Registry {
    [decl(
        "FW_MS_PORT",
        AccessorKind::Integer,
        vec![NormalizedArg::Literal(Scalar::Integer(8080))],
        Some("the listening port"),
    )]
    .into_iter()
    .collect()
}

fn cells(line: &str) -> Vec<String> {
    let inner = line.trim().trim_start_matches('|').trim_end_matches('|');
    inner.split(" | ").map(|cell| cell.trim().to_string()).collect()
}

fn root(registry: &Registry) -> Vec<Section<'_>> {
    vec![Section {
        heading: ROOT_HEADING,
        registry,
    }]
}

#[test]
fn markdown_row_for_port_declaration() {
    let registry = port_registry();
    let out = render(&root(&registry), Layout::Single, OutputFormat::Md, false).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "## Environment");
    assert_eq!(lines[1], "");
    assert_eq!(cells(lines[2]), vec!["ENV", "type", "default", "required", "notes"]);
    assert!(lines[3].chars().all(|c| matches!(c, '|' | '-' | ' ')));
    assert_eq!(
        cells(lines[4]),
        vec!["FW_MS_PORT", "integer", "8080", "", "the listening port"]
    );
}

#[test]
fn required_marker_follows_kind() {
    let registry: Registry = [
        decl("A", AccessorKind::StringRequired, Vec::new(), None),
        decl("B", AccessorKind::String, Vec::new(), None),
        decl("C", AccessorKind::IntegerRequired, Vec::new(), None),
    ]
    .into_iter()
    .collect();

    let out = render(&root(&registry), Layout::Single, OutputFormat::Md, false).unwrap();
    let required: Vec<String> = out.lines().skip(4).map(|l| cells(l)[3].clone()).collect();
    assert_eq!(required, vec!["✓", "", "✓"]);
}

#[test]
fn unknown_kind_is_marked_in_type_column() {
    let registry: Registry = [
        decl("TTL", AccessorKind::Unknown("envDuration".to_string()), Vec::new(), None),
        decl("NAME", AccessorKind::String, Vec::new(), None),
    ]
    .into_iter()
    .collect();

    let out = render(&root(&registry), Layout::Single, OutputFormat::Md, false).unwrap();
    let types: Vec<String> = out.lines().skip(4).map(|l| cells(l)[1].clone()).collect();
    assert_eq!(types, vec!["envDuration (unknown)", "string"]);

    let json = render(&root(&registry), Layout::Single, OutputFormat::Json, false).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["TTL"]["kind"], "envDuration");
}

#[test]
fn columns_are_aligned_to_widest_value() {
    let registry: Registry = [
        decl("SHORT", AccessorKind::String, Vec::new(), Some("é")),
        decl(
            "A_MUCH_LONGER_NAME",
            AccessorKind::Unknown("envDuration".to_string()),
            vec![NormalizedArg::Literal(Scalar::String("30s".to_string()))],
            Some("timeout, ±"),
        ),
    ]
    .into_iter()
    .collect();

    let out = render(&root(&registry), Layout::Single, OutputFormat::Md, false).unwrap();
    let widths: Vec<usize> = out.lines().skip(2).map(|l| l.chars().count()).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{out}");
}

#[test]
fn pipes_in_cells_are_escaped() {
    let table = render_markdown_table(&["a", "b"], &[vec!["x|y".to_string(), "z".to_string()]]);
    let last = table.lines().last().unwrap();
    assert!(last.contains("x\\|y"));
    assert_eq!(last.matches(" | ").count(), 1);
}

#[test]
fn sorted_rows_follow_key_order() {
    let registry: Registry = ["ZED", "ALPHA"]
        .into_iter()
        .map(|key| decl(key, AccessorKind::Boolean, Vec::new(), None))
        .collect();

    let out = render(&root(&registry), Layout::Single, OutputFormat::Md, true).unwrap();
    let keys: Vec<String> = out.lines().skip(4).map(|l| cells(l)[0].clone()).collect();
    assert_eq!(keys, vec!["ALPHA", "ZED"]);
}

#[test]
fn empty_units_render_nothing() {
    let empty = Registry::new();
    assert_eq!(
        render(&root(&empty), Layout::Single, OutputFormat::Md, false).unwrap(),
        ""
    );
    assert_eq!(
        render(&root(&empty), Layout::Single, OutputFormat::Json, false).unwrap(),
        "{}"
    );
    assert_eq!(
        render(&root(&empty), Layout::Keyed, OutputFormat::Json, false).unwrap(),
        "{}"
    );
}

#[test]
fn json_single_layout_is_the_registry_map() {
    let registry = port_registry();
    let out = render(&root(&registry), Layout::Single, OutputFormat::Json, false).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed["FW_MS_PORT"]["kind"], "integer");
    assert_eq!(parsed["FW_MS_PORT"]["args"], serde_json::json!([8080]));
    assert_eq!(parsed["FW_MS_PORT"]["comment"], "the listening port");
    assert_eq!(parsed["FW_MS_PORT"]["location"]["file"], "src/server.ts");
}

#[test]
fn keyed_layout_preserves_section_order_and_skips_empty() {
    let port = port_registry();
    let empty = Registry::new();
    let dep: Registry = [decl("P_MODE", AccessorKind::String, Vec::new(), None)]
        .into_iter()
        .collect();
    let sections = [
        Section {
            heading: ROOT_HEADING,
            registry: &port,
        },
        Section {
            heading: "quiet@1.0.0",
            registry: &empty,
        },
        Section {
            heading: "P@1.2.0",
            registry: &dep,
        },
    ];

    let json = render(&sections, Layout::Keyed, OutputFormat::Json, false).unwrap();
    let env_at = json.find("\"Environment\"").unwrap();
    let p_at = json.find("\"P@1.2.0\"").unwrap();
    assert!(env_at < p_at);
    assert!(!json.contains("quiet@1.0.0"));

    let md = render(&sections, Layout::Keyed, OutputFormat::Md, false).unwrap();
    let headings: Vec<&str> = md.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(headings, vec!["## Environment", "## P@1.2.0"]);
}
