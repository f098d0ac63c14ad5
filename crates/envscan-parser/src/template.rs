//! Template-literal key reconstruction.
//!
//! `` `DB_${tenant}_URL` `` is stored by the grammar as literal fragments and
//! substitutions. Both are collected with their source position, merged by
//! (line, column) and concatenated, so the result reads left to right exactly
//! as written no matter how many substitutions the template holds.

use ast_grep_core::Node;

use crate::escape;

const FRAGMENT_KINDS: &[&str] = &["string_fragment", "escape_sequence"];

struct Piece {
    line: usize,
    column: usize,
    text: String,
    literal: bool,
}

/// Rebuild the textual form of a `template_string` node.
///
/// Substitutions render as `${identifier}`. Any other embedded expression
/// renders as `${<expression text>}`. Escape sequences in the literal parts
/// are decoded.
pub fn reconstruct<D: ast_grep_core::Doc>(template: &Node<D>) -> String {
    let mut fragments = Vec::new();
    let mut substitutions = Vec::new();

    for child in template.children() {
        let kind = child.kind();
        if FRAGMENT_KINDS.contains(&kind.as_ref()) {
            fragments.push(piece(&child, child.text().to_string(), true));
        } else if kind.as_ref() == "template_substitution" {
            let text = format!("${{{}}}", substitution_name(&child));
            substitutions.push(piece(&child, text, false));
        }
    }

    concat_decoded(merge_by_position(fragments, substitutions))
}

fn piece<D: ast_grep_core::Doc>(node: &Node<D>, text: String, literal: bool) -> Piece {
    let pos = node.start_pos();
    Piece {
        line: pos.line(),
        column: pos.column(node),
        text,
        literal,
    }
}

/// Join pieces, decoding each run of adjacent literal pieces as one string so
/// that surrogate pairs split across escape nodes still combine.
fn concat_decoded(pieces: Vec<Piece>) -> String {
    let mut out = String::new();
    let mut run = String::new();
    for piece in pieces {
        if piece.literal {
            run.push_str(&piece.text);
        } else {
            out.push_str(&escape::unescape(&run));
            run.clear();
            out.push_str(&piece.text);
        }
    }
    out.push_str(&escape::unescape(&run));
    out
}

fn substitution_name<D: ast_grep_core::Doc>(substitution: &Node<D>) -> String {
    substitution
        .children()
        .find(|c| {
            let k = c.kind();
            k.as_ref() != "${" && k.as_ref() != "}" && k.as_ref() != "comment"
        })
        .map(|expr| expr.text().trim().to_string())
        .unwrap_or_default()
}

fn merge_by_position(mut fragments: Vec<Piece>, mut substitutions: Vec<Piece>) -> Vec<Piece> {
    fragments.sort_by_key(|p| (p.line, p.column));
    substitutions.sort_by_key(|p| (p.line, p.column));
    let mut merged = Vec::with_capacity(fragments.len() + substitutions.len());
    let mut left = fragments.into_iter().peekable();
    let mut right = substitutions.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => (l.line, l.column) <= (r.line, r.column),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}
