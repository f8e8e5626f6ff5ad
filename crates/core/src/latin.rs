//! The Latin text encodings character set.
//!
//! Glyph names belonging to the standard Latin text encodings, from the
//! PDF Reference Manual 1.6, pp.925 "D.1 Latin Character Set and
//! Encodings". Entries for these names are additionally tagged with
//! `SourceFlags::LATIN_TEXT_ENCODINGS` after all source files are read;
//! the byte positions the reference assigns per encoding are not part of
//! the compiled table.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Names of the Latin character set, in the reference's order.
pub const LATIN_TEXT_NAMES: &[&str] = &[
    "A",
    "AE",
    "Aacute",
    "Acircumflex",
    "Adieresis",
    "Agrave",
    "Aring",
    "Atilde",
    "B",
    "C",
    "Ccedilla",
    "D",
    "E",
    "Eacute",
    "Ecircumflex",
    "Edieresis",
    "Egrave",
    "Eth",
    "Euro",
    "F",
    "G",
    "H",
    "I",
    "Iacute",
    "Icircumflex",
    "Idieresis",
    "Igrave",
    "J",
    "K",
    "L",
    "Lslash",
    "M",
    "N",
    "Ntilde",
    "O",
    "OE",
    "Oacute",
    "Ocircumflex",
    "Odieresis",
    "Ograve",
    "Oslash",
    "Otilde",
    "P",
    "Q",
    "R",
    "S",
    "Scaron",
    "T",
    "Thorn",
    "U",
    "Uacute",
    "Ucircumflex",
    "Udieresis",
    "Ugrave",
    "V",
    "W",
    "X",
    "Y",
    "Yacute",
    "Ydieresis",
    "Z",
    "Zcaron",
    "a",
    "aacute",
    "acircumflex",
    "acute",
    "adieresis",
    "ae",
    "agrave",
    "ampersand",
    "aring",
    "asciicircum",
    "asciitilde",
    "asterisk",
    "at",
    "atilde",
    "b",
    "backslash",
    "bar",
    "braceleft",
    "braceright",
    "bracketleft",
    "bracketright",
    "breve",
    "brokenbar",
    "bullet",
    "c",
    "caron",
    "ccedilla",
    "cedilla",
    "cent",
    "circumflex",
    "colon",
    "comma",
    "copyright",
    "currency",
    "d",
    "dagger",
    "daggerdbl",
    "degree",
    "dieresis",
    "divide",
    "dollar",
    "dotaccent",
    "dotlessi",
    "e",
    "eacute",
    "ecircumflex",
    "edieresis",
    "egrave",
    "eight",
    "ellipsis",
    "emdash",
    "endash",
    "equal",
    "eth",
    "exclam",
    "exclamdown",
    "f",
    "fi",
    "five",
    "fl",
    "florin",
    "four",
    "fraction",
    "g",
    "germandbls",
    "grave",
    "greater",
    "guillemotleft",
    "guillemotright",
    "guilsinglleft",
    "guilsinglright",
    "h",
    "hungarumlaut",
    "hyphen",
    "i",
    "iacute",
    "icircumflex",
    "idieresis",
    "igrave",
    "j",
    "k",
    "l",
    "less",
    "logicalnot",
    "lslash",
    "m",
    "macron",
    "minus",
    "mu",
    "multiply",
    "n",
    "nbspace",
    "nine",
    "ntilde",
    "numbersign",
    "o",
    "oacute",
    "ocircumflex",
    "odieresis",
    "oe",
    "ogonek",
    "ograve",
    "one",
    "onehalf",
    "onequarter",
    "onesuperior",
    "ordfeminine",
    "ordmasculine",
    "oslash",
    "otilde",
    "p",
    "paragraph",
    "parenleft",
    "parenright",
    "percent",
    "period",
    "periodcentered",
    "perthousand",
    "plus",
    "plusminus",
    "q",
    "question",
    "questiondown",
    "quotedbl",
    "quotedblbase",
    "quotedblleft",
    "quotedblright",
    "quoteleft",
    "quoteright",
    "quotesinglbase",
    "quotesingle",
    "r",
    "registered",
    "ring",
    "s",
    "scaron",
    "section",
    "semicolon",
    "seven",
    "six",
    "slash",
    "space",
    "sterling",
    "t",
    "thorn",
    "three",
    "threequarters",
    "threesuperior",
    "tilde",
    "trademark",
    "two",
    "twosuperior",
    "u",
    "uacute",
    "ucircumflex",
    "udieresis",
    "ugrave",
    "underscore",
    "v",
    "w",
    "x",
    "y",
    "yacute",
    "ydieresis",
    "yen",
    "z",
    "zcaron",
    "zero",
];

static LATIN_TEXT_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| LATIN_TEXT_NAMES.iter().copied().collect());

/// Whether a glyph name belongs to the Latin character set.
pub fn is_latin_text_name(name: &str) -> bool {
    LATIN_TEXT_SET.contains(name)
}
