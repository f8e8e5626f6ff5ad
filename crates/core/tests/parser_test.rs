//! Tests for glyph list line parsing and code point decoding.

use glyphtab_core::error::GlyphError;
use glyphtab_core::parser::{SourcePos, decode_sequence, encode_sequence, split_record};
use glyphtab_core::source::FieldLayout;

const POS: SourcePos<'static> = SourcePos {
    file: "fixture.txt",
    line: 7,
};

// === split_record() ===

#[test]
fn test_name_first_layout() {
    let record = split_record("space;0020", FieldLayout::NameFirst, POS).unwrap();
    assert_eq!(record, Some(("space", "0020")));
}

#[test]
fn test_code_first_layout() {
    let record = split_record("0020;space", FieldLayout::CodeFirst, POS).unwrap();
    assert_eq!(record, Some(("space", "0020")));
}

/// The published aglfn.txt has a third field (the Unicode character
/// name); it is ignored, not an error.
#[test]
fn test_extra_fields_ignored() {
    let record = split_record(
        "0041;A;LATIN CAPITAL LETTER A",
        FieldLayout::CodeFirst,
        POS,
    )
    .unwrap();
    assert_eq!(record, Some(("A", "0041")));
}

#[test]
fn test_comment_line_produces_no_record() {
    assert_eq!(
        split_record("# comment; with; semicolons", FieldLayout::NameFirst, POS).unwrap(),
        None
    );
}

#[test]
fn test_blank_line_produces_no_record() {
    assert_eq!(split_record("", FieldLayout::NameFirst, POS).unwrap(), None);
    assert_eq!(
        split_record("\r", FieldLayout::NameFirst, POS).unwrap(),
        None
    );
}

#[test]
fn test_missing_delimiter_is_malformed() {
    let err = split_record("space 0020", FieldLayout::NameFirst, POS).unwrap_err();
    match err {
        GlyphError::MalformedLine { file, line, .. } => {
            assert_eq!(file, "fixture.txt");
            assert_eq!(line, 7);
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn test_empty_name_field_is_malformed() {
    assert!(matches!(
        split_record(";0020", FieldLayout::NameFirst, POS),
        Err(GlyphError::MalformedLine { .. })
    ));
}

#[test]
fn test_empty_code_point_field_is_malformed() {
    assert!(matches!(
        split_record("space;", FieldLayout::NameFirst, POS),
        Err(GlyphError::MalformedLine { .. })
    ));
}

// === decode_sequence() ===

#[test]
fn test_single_code_point() {
    assert_eq!(decode_sequence("0020", POS).unwrap(), vec![0x0020]);
}

#[test]
fn test_ligature_sequence() {
    assert_eq!(
        decode_sequence("0066 0066 0069", POS).unwrap(),
        vec![0x0066, 0x0066, 0x0069]
    );
}

#[test]
fn test_boundary_values() {
    assert_eq!(decode_sequence("0000 FFFF", POS).unwrap(), vec![0, 0xFFFF]);
}

#[test]
fn test_lowercase_hex_accepted() {
    assert_eq!(decode_sequence("20ac", POS).unwrap(), vec![0x20AC]);
}

#[test]
fn test_empty_token_string_is_invalid() {
    assert!(matches!(
        decode_sequence("", POS),
        Err(GlyphError::InvalidCodePoint { .. })
    ));
}

#[test]
fn test_double_space_is_invalid() {
    // A double space yields an empty token between the two separators.
    assert!(matches!(
        decode_sequence("0041  0042", POS),
        Err(GlyphError::InvalidCodePoint { .. })
    ));
}

#[test]
fn test_non_hex_token_is_invalid() {
    let err = decode_sequence("00G1", POS).unwrap_err();
    match err {
        GlyphError::InvalidCodePoint { token, .. } => assert_eq!(token, "00G1"),
        other => panic!("expected InvalidCodePoint, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_token_is_invalid() {
    assert!(matches!(
        decode_sequence("10000", POS),
        Err(GlyphError::InvalidCodePoint { .. })
    ));
    // Long enough to overflow the intermediate parse as well.
    assert!(matches!(
        decode_sequence("FFFFFFFFFF", POS),
        Err(GlyphError::InvalidCodePoint { .. })
    ));
}

#[test]
fn test_error_display_carries_location() {
    let err = decode_sequence("xyz", POS).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("fixture.txt:7"), "message: {message}");
}

// === encode/decode round-trip ===

#[test]
fn test_hex_token_round_trip() {
    let sequences: &[&[u16]] = &[
        &[0x0000],
        &[0x0020],
        &[0xFFFF],
        &[0x0066, 0x0066, 0x0069],
        &[0x0000, 0xFFFF, 0x8000, 0x0001],
    ];
    for &sequence in sequences {
        let tokens = encode_sequence(sequence);
        assert_eq!(
            decode_sequence(&tokens, POS).unwrap(),
            sequence,
            "round-trip of {tokens:?}"
        );
    }
}
