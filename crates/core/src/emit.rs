//! Order-preserving projection of a compiled table into flat records.
//!
//! The records are plain data for a downstream serializer (generated
//! source text, JSON, a binary blob); the byte format is the
//! serializer's concern. Emission never reorders, deduplicates or
//! renumbers, so identical inputs always project to identical records.

use crate::table::{CodePoint, CompiledTable, GlyphName, Storage};

/// One mapping table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    pub name: GlyphName,
    /// Source membership bits, as stored.
    pub flags: u8,
    /// Code point sequence length. 1 means `value` is the code point
    /// itself; anything larger means `value` is a ligature pool index.
    pub len: usize,
    pub value: u32,
}

/// One ligature pool row: the owning glyph name and its code points.
///
/// The name cross-references the mapping record whose `value` holds this
/// row's pool position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LigatureRecord {
    pub name: GlyphName,
    pub codepoints: Vec<CodePoint>,
}

/// The complete emitted artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// Mapping records in table first-insertion order.
    pub mappings: Vec<MappingRecord>,
    /// Ligature records in pool insertion order.
    pub ligatures: Vec<LigatureRecord>,
    /// Reverse lookup pairs in ascending code point order, when asked
    /// for; the mapping table alone is sufficient for forward lookup.
    pub inverse: Option<Vec<(CodePoint, Vec<GlyphName>)>>,
}

impl Emission {
    /// Project a compiled table into records.
    pub fn project(table: &CompiledTable, with_inverse: bool) -> Self {
        let mappings = table
            .iter()
            .map(|(name, entry)| MappingRecord {
                name: GlyphName::from(name),
                flags: entry.flags.bits(),
                len: entry.len,
                value: match entry.storage {
                    Storage::Inline(cp) => u32::from(cp),
                    Storage::Ligature { index } => index as u32,
                },
            })
            .collect();

        let ligatures = table
            .ligatures()
            .iter()
            .map(|(name, sequence)| LigatureRecord {
                name: GlyphName::from(name),
                codepoints: sequence.to_vec(),
            })
            .collect();

        let inverse = with_inverse.then(|| {
            table
                .inverse_index()
                .iter()
                .map(|(cp, names)| (cp, names.to_vec()))
                .collect()
        });

        Self {
            mappings,
            ligatures,
            inverse,
        }
    }
}
