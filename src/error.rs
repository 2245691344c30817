//! Error types for structure extraction.

use thiserror::Error;

/// The single hard failure of the extraction pipeline: the source could not
/// be parsed into a syntax tree. Every other irregularity degrades to a
/// sentinel value during rendering instead of propagating.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source text is not syntactically valid Python.
    #[error("source is not valid Python: {0}")]
    Parse(String),

    /// The grammar could not be loaded into the parser.
    #[error("parser setup failed: {0}")]
    Language(String),
}
