//! Per-file extraction of env-accessor declarations.
//!
//! Visits every `call_expression` in the tree exactly once, in document order
//! and at any nesting depth (arguments, callbacks, class bodies, ...). Calls on
//! the accessor namespace become [`Declaration`]s; everything else is ignored.

use std::path::Path;

use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::SupportLang;
use envscan_core::{Declaration, SourceLocation};

use crate::classifier::{self, AccessorMatcher};
use crate::comments;
use crate::error::ParserError;
use crate::parser::{self, ParsedSource};

/// Extracts declarations for one accessor namespace.
#[derive(Debug, Clone)]
pub struct Extractor {
    matcher: AccessorMatcher,
}

impl Extractor {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            matcher: AccessorMatcher::new(namespace),
        }
    }

    /// Read, parse and extract one file.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError`] when the file cannot be read, its extension is
    /// not a JavaScript/TypeScript one, or it fails to parse.
    pub fn extract_path(&self, path: &Path) -> Result<Vec<Declaration>, ParserError> {
        let display = path.to_string_lossy();
        let lang = parser::detect_language(&display)
            .ok_or_else(|| ParserError::UnsupportedLanguage(display.to_string()))?;
        let source = std::fs::read_to_string(path)?;
        self.extract_source(&source, lang, &display)
    }

    /// Parse and extract in-memory source.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::ParseFailed`] when the source has syntax errors.
    pub fn extract_source(
        &self,
        source: &str,
        lang: SupportLang,
        file: &str,
    ) -> Result<Vec<Declaration>, ParserError> {
        let parsed = parser::parse_source(source, lang)?;
        Ok(self.extract_parsed(&parsed, file))
    }

    /// Extract declarations from an already parsed file.
    #[must_use]
    pub fn extract_parsed(&self, parsed: &ParsedSource, file: &str) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        for call in parsed
            .tree
            .root()
            .find_all(KindMatcher::new("call_expression", parsed.lang))
        {
            let Some((kind, args)) = self.matcher.classify(&call) else {
                continue;
            };
            let line = u32::try_from(call.start_pos().line() + 1).unwrap_or(u32::MAX);

            let Some((key_node, rest)) = args.split_first() else {
                tracing::debug!(file, line, "accessor call without arguments; skipped");
                continue;
            };
            let Some(key) = classifier::key_from_node(key_node) else {
                tracing::debug!(
                    file,
                    line,
                    key_kind = %key_node.kind(),
                    "accessor call without a static key; skipped"
                );
                continue;
            };

            declarations.push(Declaration {
                comment: comments::correlate(&parsed.comments, &key),
                args: rest.iter().map(classifier::normalize_arg).collect(),
                kind,
                key,
                location: SourceLocation {
                    file: file.to_string(),
                    line,
                },
            });
        }
        declarations
    }
}

#[cfg(test)]
mod tests;
