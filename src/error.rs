//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, zip, XML and config errors, and provides semantic variants
//! for roster input, template placeholders and the external converter.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Row {line} has no name in its first field")]
    EmptyName { line: usize },

    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    #[error("Not a word-processor document (missing {part}): {path}")]
    NotADocument { part: &'static str, path: PathBuf },

    #[error("Placeholder paragraph {index} not found: document body has {found} paragraphs")]
    PlaceholderMissing { index: usize, found: usize },

    #[error("Intermediate document would overwrite the template: {path}")]
    OverwritesTemplate { path: PathBuf },

    #[error("Failed to start converter `{program}`: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter failed on {document}: {status}")]
    ConversionFailed { document: PathBuf, status: ExitStatus },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
