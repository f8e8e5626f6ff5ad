//! Source list identities, membership flags and file layouts.

use std::fmt;

use bitflags::bitflags;

use crate::error::{GlyphError, Result};

/// The glyph-name lists a compilation run draws from.
///
/// The first three are input files consumed in this order; the Latin
/// text encodings membership is not a file but a compiled-in name set
/// applied after all files are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceList {
    /// Adobe Glyph List (glyphlist.txt).
    AdobeGlyphList,
    /// Adobe Glyph List for New Fonts (aglfn.txt).
    AdobeGlyphListNewFonts,
    /// ITC Zapf Dingbats glyph list (zapfdingbats.txt).
    ZapfDingbats,
    /// Names belonging to the standard Latin text encodings.
    LatinTextEncodings,
}

bitflags! {
    /// Which source lists define a glyph name.
    ///
    /// A name accumulates the union of every list that defines it, so
    /// the set is a bit-set and union is associative and idempotent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SourceFlags: u8 {
        const ADOBE_GLYPH_LIST = 1 << 0;
        const ADOBE_GLYPH_LIST_NEW_FONTS = 1 << 1;
        const ZAPF_DINGBATS = 1 << 2;
        const LATIN_TEXT_ENCODINGS = 1 << 3;
    }
}

/// Field order of a semicolon-delimited glyph list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// Glyph name in field 0, code point tokens in field 1
    /// (glyphlist.txt, zapfdingbats.txt).
    NameFirst,
    /// Code point tokens in field 0, glyph name in field 1 (aglfn.txt).
    CodeFirst,
}

impl SourceList {
    /// Membership flag contributed by records of this list.
    pub fn flags(self) -> SourceFlags {
        match self {
            SourceList::AdobeGlyphList => SourceFlags::ADOBE_GLYPH_LIST,
            SourceList::AdobeGlyphListNewFonts => SourceFlags::ADOBE_GLYPH_LIST_NEW_FONTS,
            SourceList::ZapfDingbats => SourceFlags::ZAPF_DINGBATS,
            SourceList::LatinTextEncodings => SourceFlags::LATIN_TEXT_ENCODINGS,
        }
    }

    /// Field layout of this list's file.
    ///
    /// There is no layout auto-detection; each list is pinned to the
    /// layout its published file uses. Lists that are not backed by a
    /// file cannot be parsed and yield `UnsupportedFormat`.
    pub fn layout(self) -> Result<FieldLayout> {
        match self {
            SourceList::AdobeGlyphList | SourceList::ZapfDingbats => Ok(FieldLayout::NameFirst),
            SourceList::AdobeGlyphListNewFonts => Ok(FieldLayout::CodeFirst),
            SourceList::LatinTextEncodings => Err(GlyphError::UnsupportedFormat(self)),
        }
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceList::AdobeGlyphList => "AdobeGlyphList",
            SourceList::AdobeGlyphListNewFonts => "AdobeGlyphListNewFonts",
            SourceList::ZapfDingbats => "ZapfDingbats",
            SourceList::LatinTextEncodings => "LatinTextEncodings",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts() {
        assert_eq!(
            SourceList::AdobeGlyphList.layout().unwrap(),
            FieldLayout::NameFirst
        );
        assert_eq!(
            SourceList::ZapfDingbats.layout().unwrap(),
            FieldLayout::NameFirst
        );
        assert_eq!(
            SourceList::AdobeGlyphListNewFonts.layout().unwrap(),
            FieldLayout::CodeFirst
        );
        assert!(matches!(
            SourceList::LatinTextEncodings.layout(),
            Err(GlyphError::UnsupportedFormat(SourceList::LatinTextEncodings))
        ));
    }

    #[test]
    fn test_flag_union_is_idempotent() {
        let a = SourceList::AdobeGlyphList.flags();
        let b = SourceList::ZapfDingbats.flags();
        assert_eq!(a | b | a, a | b);
    }
}
