//! Comment tokens and key correlation.
//!
//! Documentation for a variable is written as a free-floating comment
//! anywhere in the same file, labeled with the variable name:
//!
//! ```text
//! /* FW_MS_PORT: the listening port */
//! const port = EnvParse.envInt('FW_MS_PORT', 8080);
//! ```
//!
//! Correlation is a plain prefix scan: the first comment in file order whose
//! text starts with `"<key>:"` wins. Later comments with the same label are
//! ignored.

/// A comment with its delimiters removed and its text trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

/// Strip `//`, `/* */` and `/** */` delimiters plus `*` gutters, then trim.
#[must_use]
pub fn clean_comment_text(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(line) = raw.strip_prefix("//") {
        return line.trim().to_string();
    }
    let Some(body) = raw.strip_prefix("/*") else {
        return raw.to_string();
    };
    let body = body.strip_suffix("*/").unwrap_or(body);
    body.lines()
        .map(|line| {
            let trimmed = line.trim();
            let stripped = trimmed.trim_start_matches('*');
            stripped.strip_prefix(' ').unwrap_or(stripped).trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Find the documentation comment for `key`.
///
/// Returns the text after the `"<key>:"` label, trimmed, or `None` when no
/// comment carries the label or the label has no text after it.
#[must_use]
pub fn correlate(comments: &[Comment], key: &str) -> Option<String> {
    let label = format!("{key}:");
    comments
        .iter()
        .find_map(|comment| comment.text.strip_prefix(&label))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comments(texts: &[&str]) -> Vec<Comment> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Comment {
                text: (*text).to_string(),
                line: index + 1,
                column: 1,
            })
            .collect()
    }

    #[test]
    fn clean_line_comment() {
        assert_eq!(clean_comment_text("//   PORT: the port  "), "PORT: the port");
    }

    #[test]
    fn clean_block_comment() {
        assert_eq!(
            clean_comment_text("/* FW_MS_PORT: the listening port */"),
            "FW_MS_PORT: the listening port"
        );
    }

    #[test]
    fn clean_jsdoc_comment() {
        let raw = "/**\n * HOST: bind address\n * defaults to all interfaces\n */";
        assert_eq!(
            clean_comment_text(raw),
            "HOST: bind address\ndefaults to all interfaces"
        );
    }

    #[test]
    fn correlate_strips_label() {
        let list = comments(&["PORT: listening port"]);
        assert_eq!(correlate(&list, "PORT").as_deref(), Some("listening port"));
    }

    #[test]
    fn correlate_is_prefix_exact() {
        let list = comments(&["PORTX: unrelated"]);
        assert_eq!(correlate(&list, "PORT"), None);
    }

    #[test]
    fn correlate_requires_label_at_start() {
        let list = comments(&["see PORT: elsewhere"]);
        assert_eq!(correlate(&list, "PORT"), None);
    }

    #[test]
    fn first_matching_comment_wins() {
        let list = comments(&["unrelated", "PORT: first", "PORT: second"]);
        assert_eq!(correlate(&list, "PORT").as_deref(), Some("first"));
    }

    #[test]
    fn empty_label_text_is_no_comment() {
        let list = comments(&["PORT:   "]);
        assert_eq!(correlate(&list, "PORT"), None);
    }

    #[test]
    fn templated_keys_correlate_verbatim() {
        let list = comments(&["DB_${name}_URL: per-tenant database url"]);
        assert_eq!(
            correlate(&list, "DB_${name}_URL").as_deref(),
            Some("per-tenant database url")
        );
    }
}
