//! Parser error types for envscan-parser.

/// Errors that can occur while parsing a single source file.
///
/// All of them are per-file: callers log them and continue with the next file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
