use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn server_fixture_keys_in_document_order() {
    let decls = Extractor::new("EnvParse")
        .extract_path(&fixture("server.ts"))
        .expect("fixture should parse");
    assert_eq!(
        keys(&decls),
        vec![
            "FW_MS_PORT",
            "FW_MS_HOST",
            "FW_MS_DB_URL",
            "FW_MS_LOG_LEVEL",
            "FW_MS_${tenant}_TOKEN",
            "FW_MS_WORKERS",
            "FW_MS_DEBUG",
            "FW_MS_START_DELAY",
            "FW_MS_PEERS",
            "FW_MS_TIMEOUT",
        ]
    );
}

#[test]
fn server_fixture_metadata() {
    let decls = Extractor::new("EnvParse")
        .extract_path(&fixture("server.ts"))
        .expect("fixture should parse");

    let host = find_by_key(&decls, "FW_MS_HOST");
    assert_eq!(host.kind, AccessorKind::String);
    assert_eq!(
        host.comment.as_deref(),
        Some("interface the HTTP server binds to")
    );

    let db = find_by_key(&decls, "FW_MS_DB_URL");
    assert!(db.is_required());
    assert!(db.args.is_empty());

    let level = find_by_key(&decls, "FW_MS_LOG_LEVEL");
    assert_eq!(level.kind, AccessorKind::StringOptions);
    assert_eq!(
        level.args,
        vec![
            NormalizedArg::Array(vec![
                Scalar::String("debug".into()),
                Scalar::String("info".into()),
                Scalar::String("warn".into()),
            ]),
            NormalizedArg::Literal(Scalar::String("info".into())),
        ]
    );

    let token = find_by_key(&decls, "FW_MS_${tenant}_TOKEN");
    assert_eq!(token.kind, AccessorKind::StringOptional);
    assert_eq!(token.comment.as_deref(), Some("per-tenant API token"));

    let delay = find_by_key(&decls, "FW_MS_START_DELAY");
    assert_eq!(delay.args, vec![NormalizedArg::Computed]);

    let peers = find_by_key(&decls, "FW_MS_PEERS");
    assert_eq!(
        peers.args,
        vec![NormalizedArg::Array(vec![
            Scalar::String("${host}".into()),
            Scalar::String("localhost".into()),
        ])]
    );

    let timeout = find_by_key(&decls, "FW_MS_TIMEOUT");
    assert_eq!(timeout.kind.as_str(), "envDuration");
    assert_eq!(timeout.comment, None);
}

#[test]
fn commonjs_fixture() {
    let decls = Extractor::new("EnvParse")
        .extract_path(&fixture("app.js"))
        .expect("fixture should parse");
    assert_eq!(keys(&decls), vec!["CACHE_TTL", "CACHE_ENABLED", "CACHE_REGION"]);
    assert_eq!(
        find_by_key(&decls, "CACHE_TTL").comment.as_deref(),
        Some("seconds an entry stays cached")
    );
    assert_eq!(
        find_by_key(&decls, "CACHE_ENABLED").args,
        vec![NormalizedArg::Literal(Scalar::Bool(true))]
    );
}

#[test]
fn broken_fixture_fails_to_parse() {
    let result = Extractor::new("EnvParse").extract_path(&fixture("broken.ts"));
    assert!(matches!(result, Err(ParserError::ParseFailed { .. })));
}
