//! ast-grep wrapper, language detection and the per-file parse step.

use ast_grep_core::Node;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::comments::{self, Comment};
use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A successfully parsed file: its tree plus every comment in document order.
pub struct ParsedSource {
    pub tree: AstTree,
    pub lang: SupportLang,
    pub comments: Vec<Comment>,
}

/// Detect the source language from a file path extension.
///
/// Only the JavaScript family is recognized; everything else returns `None`.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        "tsx" => Some(SupportLang::Tsx),
        "js" | "mjs" | "cjs" | "jsx" => Some(SupportLang::JavaScript),
        _ => None,
    }
}

/// Parse source code and collect its comments.
///
/// # Errors
///
/// Returns [`ParserError::ParseFailed`] when the tree contains an `ERROR` node
/// or a token the parser had to insert (a MISSING node). The message names the
/// first such position (1-based).
pub fn parse_source(source: &str, lang: SupportLang) -> Result<ParsedSource, ParserError> {
    let tree = lang.ast_grep(source);
    if let Some((line, column)) = first_syntax_error(&tree.root()) {
        return Err(ParserError::ParseFailed {
            language: format!("{lang:?}"),
            message: format!("syntax error at line {line}, column {column}"),
        });
    }
    let comments = collect_comments(&tree, lang);
    Ok(ParsedSource {
        tree,
        lang,
        comments,
    })
}

fn collect_comments(tree: &AstTree, lang: SupportLang) -> Vec<Comment> {
    tree.root()
        .find_all(KindMatcher::new("comment", lang))
        .map(|node| Comment {
            text: comments::clean_comment_text(&node.text()),
            line: node.start_pos().line() + 1,
            column: node.start_pos().column(&node) + 1,
        })
        .collect()
}

fn first_syntax_error<D: ast_grep_core::Doc>(root: &Node<D>) -> Option<(usize, usize)> {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_pos();
            return Some((pos.line() + 1, pos.column(&node) + 1));
        }
        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
    }
    None
}
