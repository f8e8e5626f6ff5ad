//! Line-level parsing of glyph list files.
//!
//! Glyph lists are newline-delimited records of semicolon-separated
//! fields; `#` opens a comment line. See the Adobe Glyph List
//! Specification:
//! https://github.com/adobe-type-tools/agl-specification

use itertools::Itertools;

use crate::error::{GlyphError, Result};
use crate::source::FieldLayout;

/// Location of the line being parsed, carried into error values.
#[derive(Debug, Clone, Copy)]
pub struct SourcePos<'a> {
    /// Label of the file the line came from.
    pub file: &'a str,
    /// 1-based line number.
    pub line: usize,
}

fn malformed(pos: SourcePos<'_>, reason: &str) -> GlyphError {
    GlyphError::MalformedLine {
        file: pos.file.to_string(),
        line: pos.line,
        reason: reason.to_string(),
    }
}

fn invalid(pos: SourcePos<'_>, token: &str, reason: &'static str) -> GlyphError {
    GlyphError::InvalidCodePoint {
        file: pos.file.to_string(),
        line: pos.line,
        token: token.to_string(),
        reason,
    }
}

/// Split one raw line into `(glyph name, code point token string)`.
///
/// Blank lines and `#` comments produce `Ok(None)`. The published
/// new-fonts list carries a third field (the Unicode character name);
/// fields beyond the two consumed are ignored.
pub fn split_record<'l>(
    line: &'l str,
    layout: FieldLayout,
    pos: SourcePos<'_>,
) -> Result<Option<(&'l str, &'l str)>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.splitn(3, ';');
    let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
        return Err(malformed(pos, "expected two ';'-separated fields"));
    };
    let (name, tokens) = match layout {
        FieldLayout::NameFirst => (first, second),
        FieldLayout::CodeFirst => (second, first),
    };

    if name.is_empty() {
        return Err(malformed(pos, "empty glyph name field"));
    }
    if tokens.is_empty() {
        return Err(malformed(pos, "empty code point field"));
    }
    Ok(Some((name, tokens)))
}

/// Decode a space-separated hex token string into a code point sequence.
///
/// Each token is a base-16 integer in `0..=0xFFFF`; tokens are separated
/// by single spaces (`0066 0066 0069`). The returned sequence is never
/// empty: a blank token string fails with `InvalidCodePoint`.
pub fn decode_sequence(tokens: &str, pos: SourcePos<'_>) -> Result<Vec<u16>> {
    let mut sequence = Vec::with_capacity(1);
    for token in tokens.split(' ') {
        if token.is_empty() {
            return Err(invalid(pos, token, "empty token"));
        }
        if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(pos, token, "not a base-16 number"));
        }
        // All-hex tokens only fail to parse on overflow.
        let value = u32::from_str_radix(token, 16)
            .map_err(|_| invalid(pos, token, "exceeds 16 bits"))?;
        if value > 0xFFFF {
            return Err(invalid(pos, token, "exceeds 16 bits"));
        }
        sequence.push(value as u16);
    }
    Ok(sequence)
}

/// Render a code point sequence back into the file token format.
pub fn encode_sequence(sequence: &[u16]) -> String {
    sequence.iter().map(|cp| format!("{cp:04X}")).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS: SourcePos<'static> = SourcePos {
        file: "test",
        line: 1,
    };

    #[test]
    fn test_comment_and_blank_lines_skipped() {
        assert!(
            split_record("# comment", FieldLayout::NameFirst, POS)
                .unwrap()
                .is_none()
        );
        assert!(
            split_record("", FieldLayout::NameFirst, POS)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_encode_sequence_format() {
        assert_eq!(encode_sequence(&[0x66, 0x66, 0x69]), "0066 0066 0069");
        assert_eq!(encode_sequence(&[0xFFFF]), "FFFF");
    }
}
