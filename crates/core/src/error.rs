//! Error types for the glyphtab compilation library.

use smol_str::SmolStr;
use thiserror::Error;

use crate::source::SourceList;

/// Primary error type for glyph list compilation.
///
/// Every variant is fatal to the run: the compiler is a build-time batch
/// tool, so the first error aborts the pass and no partial table is
/// emitted.
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("{file}:{line}: malformed record: {reason}")]
    MalformedLine {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("{file}:{line}: invalid code point {token:?}: {reason}")]
    InvalidCodePoint {
        file: String,
        line: usize,
        token: String,
        reason: &'static str,
    },

    #[error("source list {0} has no file layout")]
    UnsupportedFormat(SourceList),

    #[error("Latin text encoding references unknown glyph name: {0}")]
    UnknownLatinName(SmolStr),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for GlyphError.
pub type Result<T> = std::result::Result<T, GlyphError>;
