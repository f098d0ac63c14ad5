//! # envscan-parser
//!
//! ast-grep-based extraction of environment-variable accessor calls.
//!
//! Given JavaScript or TypeScript source, finds every call on the accessor
//! namespace (`EnvParse.envInt('PORT', 8080)`) and turns it into a
//! [`envscan_core::Declaration`]:
//! - [`classifier`]: recognizes accessor calls and normalizes their arguments
//! - [`template`]: rebuilds templated keys (`` `DB_${tenant}_URL` ``)
//! - [`escape`]: decodes escape sequences in string bodies
//! - [`comments`]: attaches `KEY: text` comments to declarations
//! - [`extractor`]: walks a file and drives the modules above

pub mod classifier;
pub mod comments;
pub mod error;
pub mod escape;
pub mod extractor;
pub mod parser;
pub mod template;

pub use error::ParserError;
pub use extractor::Extractor;
pub use parser::{ParsedSource, detect_language, parse_source};
