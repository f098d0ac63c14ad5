//! Call-site classification and argument normalization.

use ast_grep_core::Node;
use envscan_core::{AccessorKind, NormalizedArg, Scalar};

use crate::{escape, template};

/// Punctuation and trivia that can appear between call arguments.
const NON_ARGUMENT_KINDS: &[&str] = &["(", ")", ",", "[", "]", "comment"];

/// Recognizes calls on the accessor namespace (`EnvParse.envInt(...)`).
#[derive(Debug, Clone)]
pub struct AccessorMatcher {
    namespace: String,
}

impl AccessorMatcher {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Return the accessed member name when `call` targets the accessor
    /// namespace.
    ///
    /// Matches `EnvParse.envInt(..)`, `lib.EnvParse.envInt(..)` and
    /// `EnvParse?.envInt(..)`.
    pub fn accessor_member<D: ast_grep_core::Doc>(&self, call: &Node<D>) -> Option<String> {
        let callee = call.field("function")?;
        if callee.kind().as_ref() != "member_expression" {
            return None;
        }
        let object = callee.field("object")?;
        let names_namespace = match object.kind().as_ref() {
            "identifier" => object.text() == self.namespace.as_str(),
            "member_expression" => object
                .field("property")
                .is_some_and(|p| p.text() == self.namespace.as_str()),
            _ => false,
        };
        if !names_namespace {
            return None;
        }
        callee.field("property").map(|p| p.text().to_string())
    }

    /// Classify `call` into its kind and argument nodes.
    pub fn classify<'r, D: ast_grep_core::Doc>(
        &self,
        call: &Node<'r, D>,
    ) -> Option<(AccessorKind, Vec<Node<'r, D>>)> {
        let member = self.accessor_member(call)?;
        Some((AccessorKind::from_member(&member), call_arguments(call)))
    }
}

/// Argument nodes of a call, in source order.
///
/// Tagged templates (`` EnvParse.envInt`...` ``) have no argument list and
/// yield nothing.
pub fn call_arguments<'r, D: ast_grep_core::Doc>(call: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let Some(args) = call.field("arguments") else {
        return Vec::new();
    };
    if args.kind().as_ref() != "arguments" {
        return Vec::new();
    }
    args.children()
        .filter(|c| !NON_ARGUMENT_KINDS.contains(&c.kind().as_ref()))
        .collect()
}

/// Read the key from the first call argument.
///
/// Only string literals and template strings yield a key; anything else is a
/// malformed match.
pub fn key_from_node<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let key = match node.kind().as_ref() {
        "string" => string_value(node),
        "template_string" => template::reconstruct(node),
        "parenthesized_expression" => return inner_expression(node).and_then(|n| key_from_node(&n)),
        _ => return None,
    };
    if key.is_empty() { None } else { Some(key) }
}

/// Normalize one call argument.
pub fn normalize_arg<D: ast_grep_core::Doc>(node: &Node<D>) -> NormalizedArg {
    let kind = node.kind();
    match kind.as_ref() {
        "string" => NormalizedArg::Literal(Scalar::String(string_value(node))),
        "template_string" => NormalizedArg::Literal(Scalar::String(template::reconstruct(node))),
        "number" => parse_number(&node.text()).map_or_else(
            || unsupported(node),
            NormalizedArg::Literal,
        ),
        "true" => NormalizedArg::Literal(Scalar::Bool(true)),
        "false" => NormalizedArg::Literal(Scalar::Bool(false)),
        "null" | "undefined" => NormalizedArg::Literal(Scalar::Null),
        "unary_expression" => negative_number(node).unwrap_or_else(|| unsupported(node)),
        "array" => NormalizedArg::Array(
            node.children()
                .filter(|c| !NON_ARGUMENT_KINDS.contains(&c.kind().as_ref()))
                .map(|element| to_scalar(normalize_arg(&element)))
                .collect(),
        ),
        "identifier" => NormalizedArg::placeholder(&node.text()),
        "call_expression" => NormalizedArg::Computed,
        "parenthesized_expression" => {
            inner_expression(node).map_or_else(|| unsupported(node), |inner| normalize_arg(&inner))
        }
        _ => unsupported(node),
    }
}

fn to_scalar(arg: NormalizedArg) -> Scalar {
    match arg {
        NormalizedArg::Literal(scalar) => scalar,
        other => Scalar::String(other.render()),
    }
}

fn unsupported<D: ast_grep_core::Doc>(node: &Node<D>) -> NormalizedArg {
    NormalizedArg::Unsupported {
        kind: node.kind().to_string(),
        name: node
            .field("name")
            .or_else(|| node.field("property"))
            .map(|n| n.text().to_string()),
    }
}

fn inner_expression<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children()
        .find(|c| !NON_ARGUMENT_KINDS.contains(&c.kind().as_ref()))
}

fn string_value<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let text = node.text();
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    escape::unescape(chars.as_str())
}

fn negative_number<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<NormalizedArg> {
    let operator = node.field("operator")?;
    let argument = node.field("argument")?;
    if operator.text() != "-" || argument.kind().as_ref() != "number" {
        return None;
    }
    match parse_number(&argument.text())? {
        Scalar::Integer(value) => Some(NormalizedArg::Literal(Scalar::Integer(-value))),
        Scalar::Float(value) => Some(NormalizedArg::Literal(Scalar::Float(-value))),
        _ => None,
    }
}

/// Parse a JavaScript numeric literal (`8080`, `1_000`, `0x1F`, `010`, `2.5e3`).
///
/// Integral values come back as integers, whatever their spelling.
fn parse_number(text: &str) -> Option<Scalar> {
    let cleaned = text.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let radix = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        return i64::from_str_radix(digits, radix).ok().map(Scalar::Integer);
    }
    // Sloppy-mode `010` is octal; `089` falls back to decimal.
    if let Some(digits) = legacy_octal_digits(&lower) {
        return i64::from_str_radix(digits, 8).ok().map(Scalar::Integer);
    }
    if let Some(digits) = lower.strip_suffix('n') {
        return digits.parse().ok().map(Scalar::Integer);
    }
    if let Ok(value) = lower.parse::<i64>() {
        return Some(Scalar::Integer(value));
    }
    let value = lower.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value.abs() < 9.007_199_254_740_992e15 {
        #[allow(clippy::cast_possible_truncation)]
        return Some(Scalar::Integer(value as i64));
    }
    Some(Scalar::Float(value))
}

fn legacy_octal_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix('0')?;
    (!digits.is_empty() && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))).then_some(digits)
}
