use ast_grep_language::SupportLang;
use envscan_core::{AccessorKind, Declaration, NormalizedArg, Scalar};

use super::*;

mod fixtures;

fn extract_ts(source: &str) -> Vec<Declaration> {
    Extractor::new("EnvParse")
        .extract_source(source, SupportLang::TypeScript, "test.ts")
        .expect("extraction should succeed")
}

fn find_by_key<'a>(decls: &'a [Declaration], key: &str) -> &'a Declaration {
    decls
        .iter()
        .find(|d| d.key == key)
        .unwrap_or_else(|| panic!("should find declaration '{key}'"))
}

fn keys(decls: &[Declaration]) -> Vec<&str> {
    decls.iter().map(|d| d.key.as_str()).collect()
}
