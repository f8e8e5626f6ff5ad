//! glyphtab - compile the Adobe glyph lists into one canonical
//! name to code point mapping table.
//!
//! The compiler streams the Adobe Glyph List, the Adobe Glyph List for
//! New Fonts and the ZapfDingbats glyph list once each, folds their
//! records into a single table that remembers which lists define each
//! name, tags the names of the standard Latin text encodings, and
//! projects the result into deterministic, embeddable records.
//!
//! List formats follow the Adobe Glyph List Specification:
//! https://github.com/adobe-type-tools/agl-specification

pub mod compile;
pub mod emit;
pub mod error;
pub mod latin;
pub mod parser;
pub mod source;
pub mod table;

pub use compile::Compiler;
pub use emit::{Emission, LigatureRecord, MappingRecord};
pub use error::{GlyphError, Result};
pub use latin::LATIN_TEXT_NAMES;
pub use source::{FieldLayout, SourceFlags, SourceList};
pub use table::{
    CodePoint, CompiledTable, GlyphName, InverseIndex, LigaturePool, MappingEntry,
    MappingTableBuilder, Storage,
};
