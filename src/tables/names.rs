// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

pub(crate) static NAME_BLOB: &[u8] = include_bytes!("names.bin");

pub(crate) const NAME_BLOB_EXPANDED: usize = 1043543;

pub(crate) static CORRECTED_NAMES: &[(u32, &str)] = &[
    (0x1A2, "LATIN CAPITAL LETTER GHA"),
    (0x1A3, "LATIN SMALL LETTER GHA"),
    (0x709, "SYRIAC SUBLINEAR COLON SKEWED LEFT"),
    (0xCDE, "KANNADA LETTER LLLA"),
    (0xE9D, "LAO LETTER FO FON"),
    (0xE9F, "LAO LETTER FO FAY"),
    (0xEA3, "LAO LETTER RO"),
    (0xEA5, "LAO LETTER LO"),
    (0xFD0, "TIBETAN MARK BKA- SHOG GI MGO RGYAN"),
    (0x2118, "WEIERSTRASS ELLIPTIC FUNCTION"),
    (0x2448, "MICR ON US SYMBOL"),
    (0x2449, "MICR DASH SYMBOL"),
    (0xA015, "YI SYLLABLE ITERATION MARK"),
    (0xFE18, "PRESENTATION FORM FOR VERTICAL RIGHT WHITE LENTICULAR BRACKET"),
    (0x122D4, "CUNEIFORM SIGN NU11 TENU"),
    (0x122D5, "CUNEIFORM SIGN NU11 OVER NU11 BUR OVER BUR"),
    (0x1D0C5, "BYZANTINE MUSICAL SYMBOL FTHORA SKLIRON CHROMA VASIS"),
];
