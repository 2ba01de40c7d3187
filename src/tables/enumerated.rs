// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

use crate::property::{
    EastAsianWidth as Ea, HangulSyllableType as Hst, IndicPositionalCategory as Inpc,
    IndicSyllabicCategory as Insc, JoiningGroup as Jg, JoiningType as Jt, NumericType as Nt,
};

pub(crate) static EAST_ASIAN_WIDTH: &[(u32, Ea)] = &[
    (0x0, Ea::N), (0x20, Ea::Na), (0x7F, Ea::N), (0xA1, Ea::A), (0xA2, Ea::Na), (0xA4, Ea::A),
    (0xA5, Ea::Na), (0xA7, Ea::A), (0xA9, Ea::N), (0xAA, Ea::A), (0xAB, Ea::N), (0xAC, Ea::Na),
    (0xAD, Ea::A), (0xAF, Ea::Na), (0xB0, Ea::A), (0xB5, Ea::N), (0xB6, Ea::A), (0xBB, Ea::N),
    (0xBC, Ea::A), (0xC0, Ea::N), (0xC6, Ea::A), (0xC7, Ea::N), (0xD0, Ea::A), (0xD1, Ea::N),
    (0xD7, Ea::A), (0xD9, Ea::N), (0xDE, Ea::A), (0xE2, Ea::N), (0xE6, Ea::A), (0xE7, Ea::N),
    (0xE8, Ea::A), (0xEB, Ea::N), (0xEC, Ea::A), (0xEE, Ea::N), (0xF0, Ea::A), (0xF1, Ea::N),
    (0xF2, Ea::A), (0xF4, Ea::N), (0xF7, Ea::A), (0xFB, Ea::N), (0xFC, Ea::A), (0xFD, Ea::N),
    (0xFE, Ea::A), (0xFF, Ea::N), (0x101, Ea::A), (0x102, Ea::N), (0x111, Ea::A), (0x112, Ea::N),
    (0x113, Ea::A), (0x114, Ea::N), (0x11B, Ea::A), (0x11C, Ea::N), (0x126, Ea::A), (0x128, Ea::N),
    (0x12B, Ea::A), (0x12C, Ea::N), (0x131, Ea::A), (0x134, Ea::N), (0x138, Ea::A), (0x139, Ea::N),
    (0x13F, Ea::A), (0x143, Ea::N), (0x144, Ea::A), (0x145, Ea::N), (0x148, Ea::A), (0x14C, Ea::N),
    (0x14D, Ea::A), (0x14E, Ea::N), (0x152, Ea::A), (0x154, Ea::N), (0x166, Ea::A), (0x168, Ea::N),
    (0x16B, Ea::A), (0x16C, Ea::N), (0x1CE, Ea::A), (0x1CF, Ea::N), (0x1D0, Ea::A), (0x1D1, Ea::N),
    (0x1D2, Ea::A), (0x1D3, Ea::N), (0x1D4, Ea::A), (0x1D5, Ea::N), (0x1D6, Ea::A), (0x1D7, Ea::N),
    (0x1D8, Ea::A), (0x1D9, Ea::N), (0x1DA, Ea::A), (0x1DB, Ea::N), (0x1DC, Ea::A), (0x1DD, Ea::N),
    (0x251, Ea::A), (0x252, Ea::N), (0x261, Ea::A), (0x262, Ea::N), (0x2C4, Ea::A), (0x2C5, Ea::N),
    (0x2C7, Ea::A), (0x2C8, Ea::N), (0x2C9, Ea::A), (0x2CC, Ea::N), (0x2CD, Ea::A), (0x2CE, Ea::N),
    (0x2D0, Ea::A), (0x2D1, Ea::N), (0x2D8, Ea::A), (0x2DC, Ea::N), (0x2DD, Ea::A), (0x2DE, Ea::N),
    (0x2DF, Ea::A), (0x2E0, Ea::N), (0x300, Ea::A), (0x370, Ea::N), (0x378, Ea::F), (0x37A, Ea::N),
    (0x380, Ea::F), (0x384, Ea::N), (0x38B, Ea::F), (0x38C, Ea::N), (0x38D, Ea::F), (0x38E, Ea::N),
    (0x391, Ea::A), (0x3A2, Ea::F), (0x3A3, Ea::A), (0x3AA, Ea::N), (0x3B1, Ea::A), (0x3C2, Ea::N),
    (0x3C3, Ea::A), (0x3CA, Ea::N), (0x401, Ea::A), (0x402, Ea::N), (0x410, Ea::A), (0x450, Ea::N),
    (0x451, Ea::A), (0x452, Ea::N), (0x530, Ea::F), (0x531, Ea::N), (0x557, Ea::F), (0x559, Ea::N),
    (0x58B, Ea::F), (0x58D, Ea::N), (0x590, Ea::F), (0x591, Ea::N), (0x5C8, Ea::F), (0x5D0, Ea::N),
    (0x5EB, Ea::F), (0x5EF, Ea::N), (0x5F5, Ea::F), (0x600, Ea::N), (0x70E, Ea::F), (0x70F, Ea::N),
    (0x74B, Ea::F), (0x74D, Ea::N), (0x7B2, Ea::F), (0x7C0, Ea::N), (0x7FB, Ea::F), (0x7FD, Ea::N),
    (0x82E, Ea::F), (0x830, Ea::N), (0x83F, Ea::F), (0x840, Ea::N), (0x85C, Ea::F), (0x85E, Ea::N),
    (0x85F, Ea::F), (0x860, Ea::N), (0x86B, Ea::F), (0x870, Ea::N), (0x88F, Ea::F), (0x890, Ea::N),
    (0x892, Ea::F), (0x898, Ea::N), (0x984, Ea::F), (0x985, Ea::N), (0x98D, Ea::F), (0x98F, Ea::N),
    (0x991, Ea::F), (0x993, Ea::N), (0x9A9, Ea::F), (0x9AA, Ea::N), (0x9B1, Ea::F), (0x9B2, Ea::N),
    (0x9B3, Ea::F), (0x9B6, Ea::N), (0x9BA, Ea::F), (0x9BC, Ea::N), (0x9C5, Ea::F), (0x9C7, Ea::N),
    (0x9C9, Ea::F), (0x9CB, Ea::N), (0x9CF, Ea::F), (0x9D7, Ea::N), (0x9D8, Ea::F), (0x9DC, Ea::N),
    (0x9DE, Ea::F), (0x9DF, Ea::N), (0x9E4, Ea::F), (0x9E6, Ea::N), (0x9FF, Ea::F), (0xA01, Ea::N),
    (0xA04, Ea::F), (0xA05, Ea::N), (0xA0B, Ea::F), (0xA0F, Ea::N), (0xA11, Ea::F), (0xA13, Ea::N),
    (0xA29, Ea::F), (0xA2A, Ea::N), (0xA31, Ea::F), (0xA32, Ea::N), (0xA34, Ea::F), (0xA35, Ea::N),
    (0xA37, Ea::F), (0xA38, Ea::N), (0xA3A, Ea::F), (0xA3C, Ea::N), (0xA3D, Ea::F), (0xA3E, Ea::N),
    (0xA43, Ea::F), (0xA47, Ea::N), (0xA49, Ea::F), (0xA4B, Ea::N), (0xA4E, Ea::F), (0xA51, Ea::N),
    (0xA52, Ea::F), (0xA59, Ea::N), (0xA5D, Ea::F), (0xA5E, Ea::N), (0xA5F, Ea::F), (0xA66, Ea::N),
    (0xA77, Ea::F), (0xA81, Ea::N), (0xA84, Ea::F), (0xA85, Ea::N), (0xA8E, Ea::F), (0xA8F, Ea::N),
    (0xA92, Ea::F), (0xA93, Ea::N), (0xAA9, Ea::F), (0xAAA, Ea::N), (0xAB1, Ea::F), (0xAB2, Ea::N),
    (0xAB4, Ea::F), (0xAB5, Ea::N), (0xABA, Ea::F), (0xABC, Ea::N), (0xAC6, Ea::F), (0xAC7, Ea::N),
    (0xACA, Ea::F), (0xACB, Ea::N), (0xACE, Ea::F), (0xAD0, Ea::N), (0xAD1, Ea::F), (0xAE0, Ea::N),
    (0xAE4, Ea::F), (0xAE6, Ea::N), (0xAF2, Ea::F), (0xAF9, Ea::N), (0xB00, Ea::F), (0xB01, Ea::N),
    (0xB04, Ea::F), (0xB05, Ea::N), (0xB0D, Ea::F), (0xB0F, Ea::N), (0xB11, Ea::F), (0xB13, Ea::N),
    (0xB29, Ea::F), (0xB2A, Ea::N), (0xB31, Ea::F), (0xB32, Ea::N), (0xB34, Ea::F), (0xB35, Ea::N),
    (0xB3A, Ea::F), (0xB3C, Ea::N), (0xB45, Ea::F), (0xB47, Ea::N), (0xB49, Ea::F), (0xB4B, Ea::N),
    (0xB4E, Ea::F), (0xB55, Ea::N), (0xB58, Ea::F), (0xB5C, Ea::N), (0xB5E, Ea::F), (0xB5F, Ea::N),
    (0xB64, Ea::F), (0xB66, Ea::N), (0xB78, Ea::F), (0xB82, Ea::N), (0xB84, Ea::F), (0xB85, Ea::N),
    (0xB8B, Ea::F), (0xB8E, Ea::N), (0xB91, Ea::F), (0xB92, Ea::N), (0xB96, Ea::F), (0xB99, Ea::N),
    (0xB9B, Ea::F), (0xB9C, Ea::N), (0xB9D, Ea::F), (0xB9E, Ea::N), (0xBA0, Ea::F), (0xBA3, Ea::N),
    (0xBA5, Ea::F), (0xBA8, Ea::N), (0xBAB, Ea::F), (0xBAE, Ea::N), (0xBBA, Ea::F), (0xBBE, Ea::N),
    (0xBC3, Ea::F), (0xBC6, Ea::N), (0xBC9, Ea::F), (0xBCA, Ea::N), (0xBCE, Ea::F), (0xBD0, Ea::N),
    (0xBD1, Ea::F), (0xBD7, Ea::N), (0xBD8, Ea::F), (0xBE6, Ea::N), (0xBFB, Ea::F), (0xC00, Ea::N),
    (0xC0D, Ea::F), (0xC0E, Ea::N), (0xC11, Ea::F), (0xC12, Ea::N), (0xC29, Ea::F), (0xC2A, Ea::N),
    (0xC3A, Ea::F), (0xC3C, Ea::N), (0xC45, Ea::F), (0xC46, Ea::N), (0xC49, Ea::F), (0xC4A, Ea::N),
    (0xC4E, Ea::F), (0xC55, Ea::N), (0xC57, Ea::F), (0xC58, Ea::N), (0xC5B, Ea::F), (0xC5D, Ea::N),
    (0xC5E, Ea::F), (0xC60, Ea::N), (0xC64, Ea::F), (0xC66, Ea::N), (0xC70, Ea::F), (0xC77, Ea::N),
    (0xC8D, Ea::F), (0xC8E, Ea::N), (0xC91, Ea::F), (0xC92, Ea::N), (0xCA9, Ea::F), (0xCAA, Ea::N),
    (0xCB4, Ea::F), (0xCB5, Ea::N), (0xCBA, Ea::F), (0xCBC, Ea::N), (0xCC5, Ea::F), (0xCC6, Ea::N),
    (0xCC9, Ea::F), (0xCCA, Ea::N), (0xCCE, Ea::F), (0xCD5, Ea::N), (0xCD7, Ea::F), (0xCDD, Ea::N),
    (0xCDF, Ea::F), (0xCE0, Ea::N), (0xCE4, Ea::F), (0xCE6, Ea::N), (0xCF0, Ea::F), (0xCF1, Ea::N),
    (0xCF3, Ea::F), (0xD00, Ea::N), (0xD0D, Ea::F), (0xD0E, Ea::N), (0xD11, Ea::F), (0xD12, Ea::N),
    (0xD45, Ea::F), (0xD46, Ea::N), (0xD49, Ea::F), (0xD4A, Ea::N), (0xD50, Ea::F), (0xD54, Ea::N),
    (0xD64, Ea::F), (0xD66, Ea::N), (0xD80, Ea::F), (0xD81, Ea::N), (0xD84, Ea::F), (0xD85, Ea::N),
    (0xD97, Ea::F), (0xD9A, Ea::N), (0xDB2, Ea::F), (0xDB3, Ea::N), (0xDBC, Ea::F), (0xDBD, Ea::N),
    (0xDBE, Ea::F), (0xDC0, Ea::N), (0xDC7, Ea::F), (0xDCA, Ea::N), (0xDCB, Ea::F), (0xDCF, Ea::N),
    (0xDD5, Ea::F), (0xDD6, Ea::N), (0xDD7, Ea::F), (0xDD8, Ea::N), (0xDE0, Ea::F), (0xDE6, Ea::N),
    (0xDF0, Ea::F), (0xDF2, Ea::N), (0xDF5, Ea::F), (0xE01, Ea::N), (0xE3B, Ea::F), (0xE3F, Ea::N),
    (0xE5C, Ea::F), (0xE81, Ea::N), (0xE83, Ea::F), (0xE84, Ea::N), (0xE85, Ea::F), (0xE86, Ea::N),
    (0xE8B, Ea::F), (0xE8C, Ea::N), (0xEA4, Ea::F), (0xEA5, Ea::N), (0xEA6, Ea::F), (0xEA7, Ea::N),
    (0xEBE, Ea::F), (0xEC0, Ea::N), (0xEC5, Ea::F), (0xEC6, Ea::N), (0xEC7, Ea::F), (0xEC8, Ea::N),
    (0xECE, Ea::F), (0xED0, Ea::N), (0xEDA, Ea::F), (0xEDC, Ea::N), (0xEE0, Ea::F), (0xF00, Ea::N),
    (0xF48, Ea::F), (0xF49, Ea::N), (0xF6D, Ea::F), (0xF71, Ea::N), (0xF98, Ea::F), (0xF99, Ea::N),
    (0xFBD, Ea::F), (0xFBE, Ea::N), (0xFCD, Ea::F), (0xFCE, Ea::N), (0xFDB, Ea::F), (0x1000, Ea::N),
    (0x10C6, Ea::F), (0x10C7, Ea::N), (0x10C8, Ea::F), (0x10CD, Ea::N), (0x10CE, Ea::F), (0x10D0, Ea::N),
    (0x1100, Ea::W), (0x1160, Ea::N), (0x1249, Ea::F), (0x124A, Ea::N), (0x124E, Ea::F), (0x1250, Ea::N),
    (0x1257, Ea::F), (0x1258, Ea::N), (0x1259, Ea::F), (0x125A, Ea::N), (0x125E, Ea::F), (0x1260, Ea::N),
    (0x1289, Ea::F), (0x128A, Ea::N), (0x128E, Ea::F), (0x1290, Ea::N), (0x12B1, Ea::F), (0x12B2, Ea::N),
    (0x12B6, Ea::F), (0x12B8, Ea::N), (0x12BF, Ea::F), (0x12C0, Ea::N), (0x12C1, Ea::F), (0x12C2, Ea::N),
    (0x12C6, Ea::F), (0x12C8, Ea::N), (0x12D7, Ea::F), (0x12D8, Ea::N), (0x1311, Ea::F), (0x1312, Ea::N),
    (0x1316, Ea::F), (0x1318, Ea::N), (0x135B, Ea::F), (0x135D, Ea::N), (0x137D, Ea::F), (0x1380, Ea::N),
    (0x139A, Ea::F), (0x13A0, Ea::N), (0x13F6, Ea::F), (0x13F8, Ea::N), (0x13FE, Ea::F), (0x1400, Ea::N),
    (0x169D, Ea::F), (0x16A0, Ea::N), (0x16F9, Ea::F), (0x1700, Ea::N), (0x1716, Ea::F), (0x171F, Ea::N),
    (0x1737, Ea::F), (0x1740, Ea::N), (0x1754, Ea::F), (0x1760, Ea::N), (0x176D, Ea::F), (0x176E, Ea::N),
    (0x1771, Ea::F), (0x1772, Ea::N), (0x1774, Ea::F), (0x1780, Ea::N), (0x17DE, Ea::F), (0x17E0, Ea::N),
    (0x17EA, Ea::F), (0x17F0, Ea::N), (0x17FA, Ea::F), (0x1800, Ea::N), (0x181A, Ea::F), (0x1820, Ea::N),
    (0x1879, Ea::F), (0x1880, Ea::N), (0x18AB, Ea::F), (0x18B0, Ea::N), (0x18F6, Ea::F), (0x1900, Ea::N),
    (0x191F, Ea::F), (0x1920, Ea::N), (0x192C, Ea::F), (0x1930, Ea::N), (0x193C, Ea::F), (0x1940, Ea::N),
    (0x1941, Ea::F), (0x1944, Ea::N), (0x196E, Ea::F), (0x1970, Ea::N), (0x1975, Ea::F), (0x1980, Ea::N),
    (0x19AC, Ea::F), (0x19B0, Ea::N), (0x19CA, Ea::F), (0x19D0, Ea::N), (0x19DB, Ea::F), (0x19DE, Ea::N),
    (0x1A1C, Ea::F), (0x1A1E, Ea::N), (0x1A5F, Ea::F), (0x1A60, Ea::N), (0x1A7D, Ea::F), (0x1A7F, Ea::N),
    (0x1A8A, Ea::F), (0x1A90, Ea::N), (0x1A9A, Ea::F), (0x1AA0, Ea::N), (0x1AAE, Ea::F), (0x1AB0, Ea::N),
    (0x1ACF, Ea::F), (0x1B00, Ea::N), (0x1B4D, Ea::F), (0x1B50, Ea::N), (0x1B7F, Ea::F), (0x1B80, Ea::N),
    (0x1BF4, Ea::F), (0x1BFC, Ea::N), (0x1C38, Ea::F), (0x1C3B, Ea::N), (0x1C4A, Ea::F), (0x1C4D, Ea::N),
    (0x1C89, Ea::F), (0x1C90, Ea::N), (0x1CBB, Ea::F), (0x1CBD, Ea::N), (0x1CC8, Ea::F), (0x1CD0, Ea::N),
    (0x1CFB, Ea::F), (0x1D00, Ea::N), (0x1F16, Ea::F), (0x1F18, Ea::N), (0x1F1E, Ea::F), (0x1F20, Ea::N),
    (0x1F46, Ea::F), (0x1F48, Ea::N), (0x1F4E, Ea::F), (0x1F50, Ea::N), (0x1F58, Ea::F), (0x1F59, Ea::N),
    (0x1F5A, Ea::F), (0x1F5B, Ea::N), (0x1F5C, Ea::F), (0x1F5D, Ea::N), (0x1F5E, Ea::F), (0x1F5F, Ea::N),
    (0x1F7E, Ea::F), (0x1F80, Ea::N), (0x1FB5, Ea::F), (0x1FB6, Ea::N), (0x1FC5, Ea::F), (0x1FC6, Ea::N),
    (0x1FD4, Ea::F), (0x1FD6, Ea::N), (0x1FDC, Ea::F), (0x1FDD, Ea::N), (0x1FF0, Ea::F), (0x1FF2, Ea::N),
    (0x1FF5, Ea::F), (0x1FF6, Ea::N), (0x1FFF, Ea::F), (0x2000, Ea::N), (0x2010, Ea::A), (0x2011, Ea::N),
    (0x2013, Ea::A), (0x2017, Ea::N), (0x2018, Ea::A), (0x201A, Ea::N), (0x201C, Ea::A), (0x201E, Ea::N),
    (0x2020, Ea::A), (0x2023, Ea::N), (0x2024, Ea::A), (0x2028, Ea::N), (0x2030, Ea::A), (0x2031, Ea::N),
    (0x2032, Ea::A), (0x2034, Ea::N), (0x2035, Ea::A), (0x2036, Ea::N), (0x203B, Ea::A), (0x203C, Ea::N),
    (0x203E, Ea::A), (0x203F, Ea::N), (0x2065, Ea::F), (0x2066, Ea::N), (0x2072, Ea::F), (0x2074, Ea::A),
    (0x2075, Ea::N), (0x207F, Ea::A), (0x2080, Ea::N), (0x2081, Ea::A), (0x2085, Ea::N), (0x208F, Ea::F),
    (0x2090, Ea::N), (0x209D, Ea::F), (0x20A0, Ea::N), (0x20A9, Ea::H), (0x20AA, Ea::N), (0x20AC, Ea::A),
    (0x20AD, Ea::N), (0x20C1, Ea::F), (0x20D0, Ea::N), (0x20F1, Ea::F), (0x2100, Ea::N), (0x2103, Ea::A),
    (0x2104, Ea::N), (0x2105, Ea::A), (0x2106, Ea::N), (0x2109, Ea::A), (0x210A, Ea::N), (0x2113, Ea::A),
    (0x2114, Ea::N), (0x2116, Ea::A), (0x2117, Ea::N), (0x2121, Ea::A), (0x2123, Ea::N), (0x2126, Ea::A),
    (0x2127, Ea::N), (0x212B, Ea::A), (0x212C, Ea::N), (0x2153, Ea::A), (0x2155, Ea::N), (0x215B, Ea::A),
    (0x215F, Ea::N), (0x2160, Ea::A), (0x216C, Ea::N), (0x2170, Ea::A), (0x217A, Ea::N), (0x2189, Ea::A),
    (0x218A, Ea::N), (0x218C, Ea::F), (0x2190, Ea::A), (0x219A, Ea::N), (0x21B8, Ea::A), (0x21BA, Ea::N),
    (0x21D2, Ea::A), (0x21D3, Ea::N), (0x21D4, Ea::A), (0x21D5, Ea::N), (0x21E7, Ea::A), (0x21E8, Ea::N),
    (0x2200, Ea::A), (0x2201, Ea::N), (0x2202, Ea::A), (0x2204, Ea::N), (0x2207, Ea::A), (0x2209, Ea::N),
    (0x220B, Ea::A), (0x220C, Ea::N), (0x220F, Ea::A), (0x2210, Ea::N), (0x2211, Ea::A), (0x2212, Ea::N),
    (0x2215, Ea::A), (0x2216, Ea::N), (0x221A, Ea::A), (0x221B, Ea::N), (0x221D, Ea::A), (0x2221, Ea::N),
    (0x2223, Ea::A), (0x2224, Ea::N), (0x2225, Ea::A), (0x2226, Ea::N), (0x2227, Ea::A), (0x222D, Ea::N),
    (0x222E, Ea::A), (0x222F, Ea::N), (0x2234, Ea::A), (0x2238, Ea::N), (0x223C, Ea::A), (0x223E, Ea::N),
    (0x2248, Ea::A), (0x2249, Ea::N), (0x224C, Ea::A), (0x224D, Ea::N), (0x2252, Ea::A), (0x2253, Ea::N),
    (0x2260, Ea::A), (0x2262, Ea::N), (0x2264, Ea::A), (0x2268, Ea::N), (0x226A, Ea::A), (0x226C, Ea::N),
    (0x226E, Ea::A), (0x2270, Ea::N), (0x2282, Ea::A), (0x2284, Ea::N), (0x2286, Ea::A), (0x2288, Ea::N),
    (0x2295, Ea::A), (0x2296, Ea::N), (0x2299, Ea::A), (0x229A, Ea::N), (0x22A5, Ea::A), (0x22A6, Ea::N),
    (0x22BF, Ea::A), (0x22C0, Ea::N), (0x2312, Ea::A), (0x2313, Ea::N), (0x231A, Ea::W), (0x231C, Ea::N),
    (0x2329, Ea::W), (0x232B, Ea::N), (0x23E9, Ea::W), (0x23ED, Ea::N), (0x23F0, Ea::W), (0x23F1, Ea::N),
    (0x23F3, Ea::W), (0x23F4, Ea::N), (0x2427, Ea::F), (0x2440, Ea::N), (0x244B, Ea::F), (0x2460, Ea::A),
    (0x24EA, Ea::N), (0x24EB, Ea::A), (0x254C, Ea::N), (0x2550, Ea::A), (0x2574, Ea::N), (0x2580, Ea::A),
    (0x2590, Ea::N), (0x2592, Ea::A), (0x2596, Ea::N), (0x25A0, Ea::A), (0x25A2, Ea::N), (0x25A3, Ea::A),
    (0x25AA, Ea::N), (0x25B2, Ea::A), (0x25B4, Ea::N), (0x25B6, Ea::A), (0x25B8, Ea::N), (0x25BC, Ea::A),
    (0x25BE, Ea::N), (0x25C0, Ea::A), (0x25C2, Ea::N), (0x25C6, Ea::A), (0x25C9, Ea::N), (0x25CB, Ea::A),
    (0x25CC, Ea::N), (0x25CE, Ea::A), (0x25D2, Ea::N), (0x25E2, Ea::A), (0x25E6, Ea::N), (0x25EF, Ea::A),
    (0x25F0, Ea::N), (0x25FD, Ea::W), (0x25FF, Ea::N), (0x2605, Ea::A), (0x2607, Ea::N), (0x2609, Ea::A),
    (0x260A, Ea::N), (0x260E, Ea::A), (0x2610, Ea::N), (0x2614, Ea::W), (0x2616, Ea::N), (0x261C, Ea::A),
    (0x261D, Ea::N), (0x261E, Ea::A), (0x261F, Ea::N), (0x2640, Ea::A), (0x2641, Ea::N), (0x2642, Ea::A),
    (0x2643, Ea::N), (0x2648, Ea::W), (0x2654, Ea::N), (0x2660, Ea::A), (0x2662, Ea::N), (0x2663, Ea::A),
    (0x2666, Ea::N), (0x2667, Ea::A), (0x266B, Ea::N), (0x266C, Ea::A), (0x266E, Ea::N), (0x266F, Ea::A),
    (0x2670, Ea::N), (0x267F, Ea::W), (0x2680, Ea::N), (0x2693, Ea::W), (0x2694, Ea::N), (0x269E, Ea::A),
    (0x26A0, Ea::N), (0x26A1, Ea::W), (0x26A2, Ea::N), (0x26AA, Ea::W), (0x26AC, Ea::N), (0x26BD, Ea::W),
    (0x26BF, Ea::A), (0x26C0, Ea::N), (0x26C4, Ea::W), (0x26C6, Ea::A), (0x26CE, Ea::W), (0x26CF, Ea::A),
    (0x26D4, Ea::W), (0x26D5, Ea::A), (0x26E2, Ea::N), (0x26E3, Ea::A), (0x26E4, Ea::N), (0x26E8, Ea::A),
    (0x26EA, Ea::W), (0x26EB, Ea::A), (0x26F2, Ea::W), (0x26F4, Ea::A), (0x26F5, Ea::W), (0x26F6, Ea::A),
    (0x26FA, Ea::W), (0x26FB, Ea::A), (0x26FD, Ea::W), (0x26FE, Ea::A), (0x2700, Ea::N), (0x2705, Ea::W),
    (0x2706, Ea::N), (0x270A, Ea::W), (0x270C, Ea::N), (0x2728, Ea::W), (0x2729, Ea::N), (0x273D, Ea::A),
    (0x273E, Ea::N), (0x274C, Ea::W), (0x274D, Ea::N), (0x274E, Ea::W), (0x274F, Ea::N), (0x2753, Ea::W),
    (0x2756, Ea::N), (0x2757, Ea::W), (0x2758, Ea::N), (0x2776, Ea::A), (0x2780, Ea::N), (0x2795, Ea::W),
    (0x2798, Ea::N), (0x27B0, Ea::W), (0x27B1, Ea::N), (0x27BF, Ea::W), (0x27C0, Ea::N), (0x27E6, Ea::Na),
    (0x27EE, Ea::N), (0x2985, Ea::Na), (0x2987, Ea::N), (0x2B1B, Ea::W), (0x2B1D, Ea::N), (0x2B50, Ea::W),
    (0x2B51, Ea::N), (0x2B55, Ea::W), (0x2B56, Ea::A), (0x2B5A, Ea::N), (0x2B74, Ea::F), (0x2B76, Ea::N),
    (0x2B96, Ea::F), (0x2B97, Ea::N), (0x2CF4, Ea::F), (0x2CF9, Ea::N), (0x2D26, Ea::F), (0x2D27, Ea::N),
    (0x2D28, Ea::F), (0x2D2D, Ea::N), (0x2D2E, Ea::F), (0x2D30, Ea::N), (0x2D68, Ea::F), (0x2D6F, Ea::N),
    (0x2D71, Ea::F), (0x2D7F, Ea::N), (0x2D97, Ea::F), (0x2DA0, Ea::N), (0x2DA7, Ea::F), (0x2DA8, Ea::N),
    (0x2DAF, Ea::F), (0x2DB0, Ea::N), (0x2DB7, Ea::F), (0x2DB8, Ea::N), (0x2DBF, Ea::F), (0x2DC0, Ea::N),
    (0x2DC7, Ea::F), (0x2DC8, Ea::N), (0x2DCF, Ea::F), (0x2DD0, Ea::N), (0x2DD7, Ea::F), (0x2DD8, Ea::N),
    (0x2DDF, Ea::F), (0x2DE0, Ea::N), (0x2E5E, Ea::F), (0x2E80, Ea::W), (0x2E9A, Ea::F), (0x2E9B, Ea::W),
    (0x2EF4, Ea::F), (0x2F00, Ea::W), (0x2FD6, Ea::F), (0x2FF0, Ea::W), (0x2FFC, Ea::F), (0x3001, Ea::W),
    (0x303F, Ea::N), (0x3040, Ea::F), (0x3041, Ea::W), (0x3097, Ea::F), (0x3099, Ea::W), (0x3100, Ea::F),
    (0x3105, Ea::W), (0x3130, Ea::F), (0x3131, Ea::W), (0x318F, Ea::F), (0x3190, Ea::W), (0x31E4, Ea::F),
    (0x31F0, Ea::W), (0x321F, Ea::F), (0x3220, Ea::W), (0x3248, Ea::A), (0x3250, Ea::W), (0x4DC0, Ea::N),
    (0x4E00, Ea::W), (0xA48D, Ea::F), (0xA490, Ea::W), (0xA4C7, Ea::F), (0xA4D0, Ea::N), (0xA62C, Ea::F),
    (0xA640, Ea::N), (0xA6F8, Ea::F), (0xA700, Ea::N), (0xA7CB, Ea::F), (0xA7D0, Ea::N), (0xA7D2, Ea::F),
    (0xA7D3, Ea::N), (0xA7D4, Ea::F), (0xA7D5, Ea::N), (0xA7DA, Ea::F), (0xA7F2, Ea::N), (0xA82D, Ea::F),
    (0xA830, Ea::N), (0xA83A, Ea::F), (0xA840, Ea::N), (0xA878, Ea::F), (0xA880, Ea::N), (0xA8C6, Ea::F),
    (0xA8CE, Ea::N), (0xA8DA, Ea::F), (0xA8E0, Ea::N), (0xA954, Ea::F), (0xA95F, Ea::N), (0xA960, Ea::W),
    (0xA97D, Ea::F), (0xA980, Ea::N), (0xA9CE, Ea::F), (0xA9CF, Ea::N), (0xA9DA, Ea::F), (0xA9DE, Ea::N),
    (0xA9FF, Ea::F), (0xAA00, Ea::N), (0xAA37, Ea::F), (0xAA40, Ea::N), (0xAA4E, Ea::F), (0xAA50, Ea::N),
    (0xAA5A, Ea::F), (0xAA5C, Ea::N), (0xAAC3, Ea::F), (0xAADB, Ea::N), (0xAAF7, Ea::F), (0xAB01, Ea::N),
    (0xAB07, Ea::F), (0xAB09, Ea::N), (0xAB0F, Ea::F), (0xAB11, Ea::N), (0xAB17, Ea::F), (0xAB20, Ea::N),
    (0xAB27, Ea::F), (0xAB28, Ea::N), (0xAB2F, Ea::F), (0xAB30, Ea::N), (0xAB6C, Ea::F), (0xAB70, Ea::N),
    (0xABEE, Ea::F), (0xABF0, Ea::N), (0xABFA, Ea::F), (0xAC00, Ea::W), (0xD7A4, Ea::F), (0xD7B0, Ea::N),
    (0xD7C7, Ea::F), (0xD7CB, Ea::N), (0xD7FC, Ea::F), (0xD800, Ea::N), (0xE000, Ea::A), (0xF900, Ea::W),
    (0xFA6E, Ea::F), (0xFA70, Ea::W), (0xFADA, Ea::F), (0xFB00, Ea::N), (0xFB07, Ea::F), (0xFB13, Ea::N),
    (0xFB18, Ea::F), (0xFB1D, Ea::N), (0xFB37, Ea::F), (0xFB38, Ea::N), (0xFB3D, Ea::F), (0xFB3E, Ea::N),
    (0xFB3F, Ea::F), (0xFB40, Ea::N), (0xFB42, Ea::F), (0xFB43, Ea::N), (0xFB45, Ea::F), (0xFB46, Ea::N),
    (0xFBC3, Ea::F), (0xFBD3, Ea::N), (0xFD90, Ea::F), (0xFD92, Ea::N), (0xFDC8, Ea::F), (0xFDCF, Ea::N),
    (0xFDD0, Ea::F), (0xFDF0, Ea::N), (0xFE00, Ea::A), (0xFE10, Ea::W), (0xFE1A, Ea::F), (0xFE20, Ea::N),
    (0xFE30, Ea::W), (0xFE53, Ea::F), (0xFE54, Ea::W), (0xFE67, Ea::F), (0xFE68, Ea::W), (0xFE6C, Ea::F),
    (0xFE70, Ea::N), (0xFE75, Ea::F), (0xFE76, Ea::N), (0xFEFD, Ea::F), (0xFEFF, Ea::N), (0xFF00, Ea::F),
    (0xFF61, Ea::H), (0xFFBF, Ea::F), (0xFFC2, Ea::H), (0xFFC8, Ea::F), (0xFFCA, Ea::H), (0xFFD0, Ea::F),
    (0xFFD2, Ea::H), (0xFFD8, Ea::F), (0xFFDA, Ea::H), (0xFFDD, Ea::F), (0xFFE8, Ea::H), (0xFFEF, Ea::F),
    (0xFFF9, Ea::N), (0xFFFD, Ea::A), (0xFFFE, Ea::F), (0x10000, Ea::N), (0x1000C, Ea::F), (0x1000D, Ea::N),
    (0x10027, Ea::F), (0x10028, Ea::N), (0x1003B, Ea::F), (0x1003C, Ea::N), (0x1003E, Ea::F), (0x1003F, Ea::N),
    (0x1004E, Ea::F), (0x10050, Ea::N), (0x1005E, Ea::F), (0x10080, Ea::N), (0x100FB, Ea::F), (0x10100, Ea::N),
    (0x10103, Ea::F), (0x10107, Ea::N), (0x10134, Ea::F), (0x10137, Ea::N), (0x1018F, Ea::F), (0x10190, Ea::N),
    (0x1019D, Ea::F), (0x101A0, Ea::N), (0x101A1, Ea::F), (0x101D0, Ea::N), (0x101FE, Ea::F), (0x10280, Ea::N),
    (0x1029D, Ea::F), (0x102A0, Ea::N), (0x102D1, Ea::F), (0x102E0, Ea::N), (0x102FC, Ea::F), (0x10300, Ea::N),
    (0x10324, Ea::F), (0x1032D, Ea::N), (0x1034B, Ea::F), (0x10350, Ea::N), (0x1037B, Ea::F), (0x10380, Ea::N),
    (0x1039E, Ea::F), (0x1039F, Ea::N), (0x103C4, Ea::F), (0x103C8, Ea::N), (0x103D6, Ea::F), (0x10400, Ea::N),
    (0x1049E, Ea::F), (0x104A0, Ea::N), (0x104AA, Ea::F), (0x104B0, Ea::N), (0x104D4, Ea::F), (0x104D8, Ea::N),
    (0x104FC, Ea::F), (0x10500, Ea::N), (0x10528, Ea::F), (0x10530, Ea::N), (0x10564, Ea::F), (0x1056F, Ea::N),
    (0x1057B, Ea::F), (0x1057C, Ea::N), (0x1058B, Ea::F), (0x1058C, Ea::N), (0x10593, Ea::F), (0x10594, Ea::N),
    (0x10596, Ea::F), (0x10597, Ea::N), (0x105A2, Ea::F), (0x105A3, Ea::N), (0x105B2, Ea::F), (0x105B3, Ea::N),
    (0x105BA, Ea::F), (0x105BB, Ea::N), (0x105BD, Ea::F), (0x10600, Ea::N), (0x10737, Ea::F), (0x10740, Ea::N),
    (0x10756, Ea::F), (0x10760, Ea::N), (0x10768, Ea::F), (0x10780, Ea::N), (0x10786, Ea::F), (0x10787, Ea::N),
    (0x107B1, Ea::F), (0x107B2, Ea::N), (0x107BB, Ea::F), (0x10800, Ea::N), (0x10806, Ea::F), (0x10808, Ea::N),
    (0x10809, Ea::F), (0x1080A, Ea::N), (0x10836, Ea::F), (0x10837, Ea::N), (0x10839, Ea::F), (0x1083C, Ea::N),
    (0x1083D, Ea::F), (0x1083F, Ea::N), (0x10856, Ea::F), (0x10857, Ea::N), (0x1089F, Ea::F), (0x108A7, Ea::N),
    (0x108B0, Ea::F), (0x108E0, Ea::N), (0x108F3, Ea::F), (0x108F4, Ea::N), (0x108F6, Ea::F), (0x108FB, Ea::N),
    (0x1091C, Ea::F), (0x1091F, Ea::N), (0x1093A, Ea::F), (0x1093F, Ea::N), (0x10940, Ea::F), (0x10980, Ea::N),
    (0x109B8, Ea::F), (0x109BC, Ea::N), (0x109D0, Ea::F), (0x109D2, Ea::N), (0x10A04, Ea::F), (0x10A05, Ea::N),
    (0x10A07, Ea::F), (0x10A0C, Ea::N), (0x10A14, Ea::F), (0x10A15, Ea::N), (0x10A18, Ea::F), (0x10A19, Ea::N),
    (0x10A36, Ea::F), (0x10A38, Ea::N), (0x10A3B, Ea::F), (0x10A3F, Ea::N), (0x10A49, Ea::F), (0x10A50, Ea::N),
    (0x10A59, Ea::F), (0x10A60, Ea::N), (0x10AA0, Ea::F), (0x10AC0, Ea::N), (0x10AE7, Ea::F), (0x10AEB, Ea::N),
    (0x10AF7, Ea::F), (0x10B00, Ea::N), (0x10B36, Ea::F), (0x10B39, Ea::N), (0x10B56, Ea::F), (0x10B58, Ea::N),
    (0x10B73, Ea::F), (0x10B78, Ea::N), (0x10B92, Ea::F), (0x10B99, Ea::N), (0x10B9D, Ea::F), (0x10BA9, Ea::N),
    (0x10BB0, Ea::F), (0x10C00, Ea::N), (0x10C49, Ea::F), (0x10C80, Ea::N), (0x10CB3, Ea::F), (0x10CC0, Ea::N),
    (0x10CF3, Ea::F), (0x10CFA, Ea::N), (0x10D28, Ea::F), (0x10D30, Ea::N), (0x10D3A, Ea::F), (0x10E60, Ea::N),
    (0x10E7F, Ea::F), (0x10E80, Ea::N), (0x10EAA, Ea::F), (0x10EAB, Ea::N), (0x10EAE, Ea::F), (0x10EB0, Ea::N),
    (0x10EB2, Ea::F), (0x10F00, Ea::N), (0x10F28, Ea::F), (0x10F30, Ea::N), (0x10F5A, Ea::F), (0x10F70, Ea::N),
    (0x10F8A, Ea::F), (0x10FB0, Ea::N), (0x10FCC, Ea::F), (0x10FE0, Ea::N), (0x10FF7, Ea::F), (0x11000, Ea::N),
    (0x1104E, Ea::F), (0x11052, Ea::N), (0x11076, Ea::F), (0x1107F, Ea::N), (0x110C3, Ea::F), (0x110CD, Ea::N),
    (0x110CE, Ea::F), (0x110D0, Ea::N), (0x110E9, Ea::F), (0x110F0, Ea::N), (0x110FA, Ea::F), (0x11100, Ea::N),
    (0x11135, Ea::F), (0x11136, Ea::N), (0x11148, Ea::F), (0x11150, Ea::N), (0x11177, Ea::F), (0x11180, Ea::N),
    (0x111E0, Ea::F), (0x111E1, Ea::N), (0x111F5, Ea::F), (0x11200, Ea::N), (0x11212, Ea::F), (0x11213, Ea::N),
    (0x1123F, Ea::F), (0x11280, Ea::N), (0x11287, Ea::F), (0x11288, Ea::N), (0x11289, Ea::F), (0x1128A, Ea::N),
    (0x1128E, Ea::F), (0x1128F, Ea::N), (0x1129E, Ea::F), (0x1129F, Ea::N), (0x112AA, Ea::F), (0x112B0, Ea::N),
    (0x112EB, Ea::F), (0x112F0, Ea::N), (0x112FA, Ea::F), (0x11300, Ea::N), (0x11304, Ea::F), (0x11305, Ea::N),
    (0x1130D, Ea::F), (0x1130F, Ea::N), (0x11311, Ea::F), (0x11313, Ea::N), (0x11329, Ea::F), (0x1132A, Ea::N),
    (0x11331, Ea::F), (0x11332, Ea::N), (0x11334, Ea::F), (0x11335, Ea::N), (0x1133A, Ea::F), (0x1133B, Ea::N),
    (0x11345, Ea::F), (0x11347, Ea::N), (0x11349, Ea::F), (0x1134B, Ea::N), (0x1134E, Ea::F), (0x11350, Ea::N),
    (0x11351, Ea::F), (0x11357, Ea::N), (0x11358, Ea::F), (0x1135D, Ea::N), (0x11364, Ea::F), (0x11366, Ea::N),
    (0x1136D, Ea::F), (0x11370, Ea::N), (0x11375, Ea::F), (0x11400, Ea::N), (0x1145C, Ea::F), (0x1145D, Ea::N),
    (0x11462, Ea::F), (0x11480, Ea::N), (0x114C8, Ea::F), (0x114D0, Ea::N), (0x114DA, Ea::F), (0x11580, Ea::N),
    (0x115B6, Ea::F), (0x115B8, Ea::N), (0x115DE, Ea::F), (0x11600, Ea::N), (0x11645, Ea::F), (0x11650, Ea::N),
    (0x1165A, Ea::F), (0x11660, Ea::N), (0x1166D, Ea::F), (0x11680, Ea::N), (0x116BA, Ea::F), (0x116C0, Ea::N),
    (0x116CA, Ea::F), (0x11700, Ea::N), (0x1171B, Ea::F), (0x1171D, Ea::N), (0x1172C, Ea::F), (0x11730, Ea::N),
    (0x11747, Ea::F), (0x11800, Ea::N), (0x1183C, Ea::F), (0x118A0, Ea::N), (0x118F3, Ea::F), (0x118FF, Ea::N),
    (0x11907, Ea::F), (0x11909, Ea::N), (0x1190A, Ea::F), (0x1190C, Ea::N), (0x11914, Ea::F), (0x11915, Ea::N),
    (0x11917, Ea::F), (0x11918, Ea::N), (0x11936, Ea::F), (0x11937, Ea::N), (0x11939, Ea::F), (0x1193B, Ea::N),
    (0x11947, Ea::F), (0x11950, Ea::N), (0x1195A, Ea::F), (0x119A0, Ea::N), (0x119A8, Ea::F), (0x119AA, Ea::N),
    (0x119D8, Ea::F), (0x119DA, Ea::N), (0x119E5, Ea::F), (0x11A00, Ea::N), (0x11A48, Ea::F), (0x11A50, Ea::N),
    (0x11AA3, Ea::F), (0x11AB0, Ea::N), (0x11AF9, Ea::F), (0x11C00, Ea::N), (0x11C09, Ea::F), (0x11C0A, Ea::N),
    (0x11C37, Ea::F), (0x11C38, Ea::N), (0x11C46, Ea::F), (0x11C50, Ea::N), (0x11C6D, Ea::F), (0x11C70, Ea::N),
    (0x11C90, Ea::F), (0x11C92, Ea::N), (0x11CA8, Ea::F), (0x11CA9, Ea::N), (0x11CB7, Ea::F), (0x11D00, Ea::N),
    (0x11D07, Ea::F), (0x11D08, Ea::N), (0x11D0A, Ea::F), (0x11D0B, Ea::N), (0x11D37, Ea::F), (0x11D3A, Ea::N),
    (0x11D3B, Ea::F), (0x11D3C, Ea::N), (0x11D3E, Ea::F), (0x11D3F, Ea::N), (0x11D48, Ea::F), (0x11D50, Ea::N),
    (0x11D5A, Ea::F), (0x11D60, Ea::N), (0x11D66, Ea::F), (0x11D67, Ea::N), (0x11D69, Ea::F), (0x11D6A, Ea::N),
    (0x11D8F, Ea::F), (0x11D90, Ea::N), (0x11D92, Ea::F), (0x11D93, Ea::N), (0x11D99, Ea::F), (0x11DA0, Ea::N),
    (0x11DAA, Ea::F), (0x11EE0, Ea::N), (0x11EF9, Ea::F), (0x11FB0, Ea::N), (0x11FB1, Ea::F), (0x11FC0, Ea::N),
    (0x11FF2, Ea::F), (0x11FFF, Ea::N), (0x1239A, Ea::F), (0x12400, Ea::N), (0x1246F, Ea::F), (0x12470, Ea::N),
    (0x12475, Ea::F), (0x12480, Ea::N), (0x12544, Ea::F), (0x12F90, Ea::N), (0x12FF3, Ea::F), (0x13000, Ea::N),
    (0x1342F, Ea::F), (0x13430, Ea::N), (0x13439, Ea::F), (0x14400, Ea::N), (0x14647, Ea::F), (0x16800, Ea::N),
    (0x16A39, Ea::F), (0x16A40, Ea::N), (0x16A5F, Ea::F), (0x16A60, Ea::N), (0x16A6A, Ea::F), (0x16A6E, Ea::N),
    (0x16ABF, Ea::F), (0x16AC0, Ea::N), (0x16ACA, Ea::F), (0x16AD0, Ea::N), (0x16AEE, Ea::F), (0x16AF0, Ea::N),
    (0x16AF6, Ea::F), (0x16B00, Ea::N), (0x16B46, Ea::F), (0x16B50, Ea::N), (0x16B5A, Ea::F), (0x16B5B, Ea::N),
    (0x16B62, Ea::F), (0x16B63, Ea::N), (0x16B78, Ea::F), (0x16B7D, Ea::N), (0x16B90, Ea::F), (0x16E40, Ea::N),
    (0x16E9B, Ea::F), (0x16F00, Ea::N), (0x16F4B, Ea::F), (0x16F4F, Ea::N), (0x16F88, Ea::F), (0x16F8F, Ea::N),
    (0x16FA0, Ea::F), (0x16FE0, Ea::W), (0x16FE5, Ea::F), (0x16FF0, Ea::W), (0x16FF2, Ea::F), (0x17000, Ea::W),
    (0x187F8, Ea::F), (0x18800, Ea::W), (0x18CD6, Ea::F), (0x18D00, Ea::W), (0x18D09, Ea::F), (0x1AFF0, Ea::W),
    (0x1AFF4, Ea::F), (0x1AFF5, Ea::W), (0x1AFFC, Ea::F), (0x1AFFD, Ea::W), (0x1AFFF, Ea::F), (0x1B000, Ea::W),
    (0x1B123, Ea::F), (0x1B150, Ea::W), (0x1B153, Ea::F), (0x1B164, Ea::W), (0x1B168, Ea::F), (0x1B170, Ea::W),
    (0x1B2FC, Ea::F), (0x1BC00, Ea::N), (0x1BC6B, Ea::F), (0x1BC70, Ea::N), (0x1BC7D, Ea::F), (0x1BC80, Ea::N),
    (0x1BC89, Ea::F), (0x1BC90, Ea::N), (0x1BC9A, Ea::F), (0x1BC9C, Ea::N), (0x1BCA4, Ea::F), (0x1CF00, Ea::N),
    (0x1CF2E, Ea::F), (0x1CF30, Ea::N), (0x1CF47, Ea::F), (0x1CF50, Ea::N), (0x1CFC4, Ea::F), (0x1D000, Ea::N),
    (0x1D0F6, Ea::F), (0x1D100, Ea::N), (0x1D127, Ea::F), (0x1D129, Ea::N), (0x1D1EB, Ea::F), (0x1D200, Ea::N),
    (0x1D246, Ea::F), (0x1D2E0, Ea::N), (0x1D2F4, Ea::F), (0x1D300, Ea::N), (0x1D357, Ea::F), (0x1D360, Ea::N),
    (0x1D379, Ea::F), (0x1D400, Ea::N), (0x1D455, Ea::F), (0x1D456, Ea::N), (0x1D49D, Ea::F), (0x1D49E, Ea::N),
    (0x1D4A0, Ea::F), (0x1D4A2, Ea::N), (0x1D4A3, Ea::F), (0x1D4A5, Ea::N), (0x1D4A7, Ea::F), (0x1D4A9, Ea::N),
    (0x1D4AD, Ea::F), (0x1D4AE, Ea::N), (0x1D4BA, Ea::F), (0x1D4BB, Ea::N), (0x1D4BC, Ea::F), (0x1D4BD, Ea::N),
    (0x1D4C4, Ea::F), (0x1D4C5, Ea::N), (0x1D506, Ea::F), (0x1D507, Ea::N), (0x1D50B, Ea::F), (0x1D50D, Ea::N),
    (0x1D515, Ea::F), (0x1D516, Ea::N), (0x1D51D, Ea::F), (0x1D51E, Ea::N), (0x1D53A, Ea::F), (0x1D53B, Ea::N),
    (0x1D53F, Ea::F), (0x1D540, Ea::N), (0x1D545, Ea::F), (0x1D546, Ea::N), (0x1D547, Ea::F), (0x1D54A, Ea::N),
    (0x1D551, Ea::F), (0x1D552, Ea::N), (0x1D6A6, Ea::F), (0x1D6A8, Ea::N), (0x1D7CC, Ea::F), (0x1D7CE, Ea::N),
    (0x1DA8C, Ea::F), (0x1DA9B, Ea::N), (0x1DAA0, Ea::F), (0x1DAA1, Ea::N), (0x1DAB0, Ea::F), (0x1DF00, Ea::N),
    (0x1DF1F, Ea::F), (0x1E000, Ea::N), (0x1E007, Ea::F), (0x1E008, Ea::N), (0x1E019, Ea::F), (0x1E01B, Ea::N),
    (0x1E022, Ea::F), (0x1E023, Ea::N), (0x1E025, Ea::F), (0x1E026, Ea::N), (0x1E02B, Ea::F), (0x1E100, Ea::N),
    (0x1E12D, Ea::F), (0x1E130, Ea::N), (0x1E13E, Ea::F), (0x1E140, Ea::N), (0x1E14A, Ea::F), (0x1E14E, Ea::N),
    (0x1E150, Ea::F), (0x1E290, Ea::N), (0x1E2AF, Ea::F), (0x1E2C0, Ea::N), (0x1E2FA, Ea::F), (0x1E2FF, Ea::N),
    (0x1E300, Ea::F), (0x1E7E0, Ea::N), (0x1E7E7, Ea::F), (0x1E7E8, Ea::N), (0x1E7EC, Ea::F), (0x1E7ED, Ea::N),
    (0x1E7EF, Ea::F), (0x1E7F0, Ea::N), (0x1E7FF, Ea::F), (0x1E800, Ea::N), (0x1E8C5, Ea::F), (0x1E8C7, Ea::N),
    (0x1E8D7, Ea::F), (0x1E900, Ea::N), (0x1E94C, Ea::F), (0x1E950, Ea::N), (0x1E95A, Ea::F), (0x1E95E, Ea::N),
    (0x1E960, Ea::F), (0x1EC71, Ea::N), (0x1ECB5, Ea::F), (0x1ED01, Ea::N), (0x1ED3E, Ea::F), (0x1EE00, Ea::N),
    (0x1EE04, Ea::F), (0x1EE05, Ea::N), (0x1EE20, Ea::F), (0x1EE21, Ea::N), (0x1EE23, Ea::F), (0x1EE24, Ea::N),
    (0x1EE25, Ea::F), (0x1EE27, Ea::N), (0x1EE28, Ea::F), (0x1EE29, Ea::N), (0x1EE33, Ea::F), (0x1EE34, Ea::N),
    (0x1EE38, Ea::F), (0x1EE39, Ea::N), (0x1EE3A, Ea::F), (0x1EE3B, Ea::N), (0x1EE3C, Ea::F), (0x1EE42, Ea::N),
    (0x1EE43, Ea::F), (0x1EE47, Ea::N), (0x1EE48, Ea::F), (0x1EE49, Ea::N), (0x1EE4A, Ea::F), (0x1EE4B, Ea::N),
    (0x1EE4C, Ea::F), (0x1EE4D, Ea::N), (0x1EE50, Ea::F), (0x1EE51, Ea::N), (0x1EE53, Ea::F), (0x1EE54, Ea::N),
    (0x1EE55, Ea::F), (0x1EE57, Ea::N), (0x1EE58, Ea::F), (0x1EE59, Ea::N), (0x1EE5A, Ea::F), (0x1EE5B, Ea::N),
    (0x1EE5C, Ea::F), (0x1EE5D, Ea::N), (0x1EE5E, Ea::F), (0x1EE5F, Ea::N), (0x1EE60, Ea::F), (0x1EE61, Ea::N),
    (0x1EE63, Ea::F), (0x1EE64, Ea::N), (0x1EE65, Ea::F), (0x1EE67, Ea::N), (0x1EE6B, Ea::F), (0x1EE6C, Ea::N),
    (0x1EE73, Ea::F), (0x1EE74, Ea::N), (0x1EE78, Ea::F), (0x1EE79, Ea::N), (0x1EE7D, Ea::F), (0x1EE7E, Ea::N),
    (0x1EE7F, Ea::F), (0x1EE80, Ea::N), (0x1EE8A, Ea::F), (0x1EE8B, Ea::N), (0x1EE9C, Ea::F), (0x1EEA1, Ea::N),
    (0x1EEA4, Ea::F), (0x1EEA5, Ea::N), (0x1EEAA, Ea::F), (0x1EEAB, Ea::N), (0x1EEBC, Ea::F), (0x1EEF0, Ea::N),
    (0x1EEF2, Ea::F), (0x1F000, Ea::N), (0x1F004, Ea::W), (0x1F005, Ea::N), (0x1F02C, Ea::F), (0x1F030, Ea::N),
    (0x1F094, Ea::F), (0x1F0A0, Ea::N), (0x1F0AF, Ea::F), (0x1F0B1, Ea::N), (0x1F0C0, Ea::F), (0x1F0C1, Ea::N),
    (0x1F0CF, Ea::W), (0x1F0D0, Ea::F), (0x1F0D1, Ea::N), (0x1F0F6, Ea::F), (0x1F100, Ea::A), (0x1F10B, Ea::N),
    (0x1F110, Ea::A), (0x1F12E, Ea::N), (0x1F130, Ea::A), (0x1F16A, Ea::N), (0x1F170, Ea::A), (0x1F18E, Ea::W),
    (0x1F18F, Ea::A), (0x1F191, Ea::W), (0x1F19B, Ea::A), (0x1F1AD, Ea::N), (0x1F1AE, Ea::F), (0x1F1E6, Ea::N),
    (0x1F200, Ea::W), (0x1F203, Ea::F), (0x1F210, Ea::W), (0x1F23C, Ea::F), (0x1F240, Ea::W), (0x1F249, Ea::F),
    (0x1F250, Ea::W), (0x1F252, Ea::F), (0x1F260, Ea::W), (0x1F266, Ea::F), (0x1F300, Ea::W), (0x1F321, Ea::N),
    (0x1F32D, Ea::W), (0x1F336, Ea::N), (0x1F337, Ea::W), (0x1F37D, Ea::N), (0x1F37E, Ea::W), (0x1F394, Ea::N),
    (0x1F3A0, Ea::W), (0x1F3CB, Ea::N), (0x1F3CF, Ea::W), (0x1F3D4, Ea::N), (0x1F3E0, Ea::W), (0x1F3F1, Ea::N),
    (0x1F3F4, Ea::W), (0x1F3F5, Ea::N), (0x1F3F8, Ea::W), (0x1F43F, Ea::N), (0x1F440, Ea::W), (0x1F441, Ea::N),
    (0x1F442, Ea::W), (0x1F4FD, Ea::N), (0x1F4FF, Ea::W), (0x1F53E, Ea::N), (0x1F54B, Ea::W), (0x1F54F, Ea::N),
    (0x1F550, Ea::W), (0x1F568, Ea::N), (0x1F57A, Ea::W), (0x1F57B, Ea::N), (0x1F595, Ea::W), (0x1F597, Ea::N),
    (0x1F5A4, Ea::W), (0x1F5A5, Ea::N), (0x1F5FB, Ea::W), (0x1F650, Ea::N), (0x1F680, Ea::W), (0x1F6C6, Ea::N),
    (0x1F6CC, Ea::W), (0x1F6CD, Ea::N), (0x1F6D0, Ea::W), (0x1F6D3, Ea::N), (0x1F6D5, Ea::W), (0x1F6D8, Ea::F),
    (0x1F6DD, Ea::W), (0x1F6E0, Ea::N), (0x1F6EB, Ea::W), (0x1F6ED, Ea::F), (0x1F6F0, Ea::N), (0x1F6F4, Ea::W),
    (0x1F6FD, Ea::F), (0x1F700, Ea::N), (0x1F774, Ea::F), (0x1F780, Ea::N), (0x1F7D9, Ea::F), (0x1F7E0, Ea::W),
    (0x1F7EC, Ea::F), (0x1F7F0, Ea::W), (0x1F7F1, Ea::F), (0x1F800, Ea::N), (0x1F80C, Ea::F), (0x1F810, Ea::N),
    (0x1F848, Ea::F), (0x1F850, Ea::N), (0x1F85A, Ea::F), (0x1F860, Ea::N), (0x1F888, Ea::F), (0x1F890, Ea::N),
    (0x1F8AE, Ea::F), (0x1F8B0, Ea::N), (0x1F8B2, Ea::F), (0x1F900, Ea::N), (0x1F90C, Ea::W), (0x1F93B, Ea::N),
    (0x1F93C, Ea::W), (0x1F946, Ea::N), (0x1F947, Ea::W), (0x1FA00, Ea::N), (0x1FA54, Ea::F), (0x1FA60, Ea::N),
    (0x1FA6E, Ea::F), (0x1FA70, Ea::W), (0x1FA75, Ea::F), (0x1FA78, Ea::W), (0x1FA7D, Ea::F), (0x1FA80, Ea::W),
    (0x1FA87, Ea::F), (0x1FA90, Ea::W), (0x1FAAD, Ea::F), (0x1FAB0, Ea::W), (0x1FABB, Ea::F), (0x1FAC0, Ea::W),
    (0x1FAC6, Ea::F), (0x1FAD0, Ea::W), (0x1FADA, Ea::F), (0x1FAE0, Ea::W), (0x1FAE8, Ea::F), (0x1FAF0, Ea::W),
    (0x1FAF7, Ea::F), (0x1FB00, Ea::N), (0x1FB93, Ea::F), (0x1FB94, Ea::N), (0x1FBCB, Ea::F), (0x1FBF0, Ea::N),
    (0x1FBFA, Ea::F), (0x20000, Ea::W), (0x2A6E0, Ea::F), (0x2A700, Ea::W), (0x2B739, Ea::F), (0x2B740, Ea::W),
    (0x2B81E, Ea::F), (0x2B820, Ea::W), (0x2CEA2, Ea::F), (0x2CEB0, Ea::W), (0x2EBE1, Ea::F), (0x2F800, Ea::W),
    (0x2FA1E, Ea::F), (0x30000, Ea::W), (0x3134B, Ea::F), (0xE0001, Ea::N), (0xE0002, Ea::F), (0xE0020, Ea::N),
    (0xE0080, Ea::F), (0xE0100, Ea::A), (0xE01F0, Ea::F), (0xF0000, Ea::A), (0xFFFFE, Ea::F), (0x100000, Ea::A),
    (0x10FFFE, Ea::F),
];

pub(crate) static HANGUL_SYLLABLE_TYPE: &[(u32, Hst)] = &[
    (0x0, Hst::NA), (0x1100, Hst::L), (0x1160, Hst::V), (0x11A8, Hst::T), (0x1200, Hst::NA), (0xA960, Hst::L),
    (0xA97D, Hst::NA), (0xAC00, Hst::LV), (0xAC01, Hst::LVT), (0xAC1C, Hst::LV), (0xAC1D, Hst::LVT), (0xAC38, Hst::LV),
    (0xAC39, Hst::LVT), (0xAC54, Hst::LV), (0xAC55, Hst::LVT), (0xAC70, Hst::LV), (0xAC71, Hst::LVT), (0xAC8C, Hst::LV),
    (0xAC8D, Hst::LVT), (0xACA8, Hst::LV), (0xACA9, Hst::LVT), (0xACC4, Hst::LV), (0xACC5, Hst::LVT), (0xACE0, Hst::LV),
    (0xACE1, Hst::LVT), (0xACFC, Hst::LV), (0xACFD, Hst::LVT), (0xAD18, Hst::LV), (0xAD19, Hst::LVT), (0xAD34, Hst::LV),
    (0xAD35, Hst::LVT), (0xAD50, Hst::LV), (0xAD51, Hst::LVT), (0xAD6C, Hst::LV), (0xAD6D, Hst::LVT), (0xAD88, Hst::LV),
    (0xAD89, Hst::LVT), (0xADA4, Hst::LV), (0xADA5, Hst::LVT), (0xADC0, Hst::LV), (0xADC1, Hst::LVT), (0xADDC, Hst::LV),
    (0xADDD, Hst::LVT), (0xADF8, Hst::LV), (0xADF9, Hst::LVT), (0xAE14, Hst::LV), (0xAE15, Hst::LVT), (0xAE30, Hst::LV),
    (0xAE31, Hst::LVT), (0xAE4C, Hst::LV), (0xAE4D, Hst::LVT), (0xAE68, Hst::LV), (0xAE69, Hst::LVT), (0xAE84, Hst::LV),
    (0xAE85, Hst::LVT), (0xAEA0, Hst::LV), (0xAEA1, Hst::LVT), (0xAEBC, Hst::LV), (0xAEBD, Hst::LVT), (0xAED8, Hst::LV),
    (0xAED9, Hst::LVT), (0xAEF4, Hst::LV), (0xAEF5, Hst::LVT), (0xAF10, Hst::LV), (0xAF11, Hst::LVT), (0xAF2C, Hst::LV),
    (0xAF2D, Hst::LVT), (0xAF48, Hst::LV), (0xAF49, Hst::LVT), (0xAF64, Hst::LV), (0xAF65, Hst::LVT), (0xAF80, Hst::LV),
    (0xAF81, Hst::LVT), (0xAF9C, Hst::LV), (0xAF9D, Hst::LVT), (0xAFB8, Hst::LV), (0xAFB9, Hst::LVT), (0xAFD4, Hst::LV),
    (0xAFD5, Hst::LVT), (0xAFF0, Hst::LV), (0xAFF1, Hst::LVT), (0xB00C, Hst::LV), (0xB00D, Hst::LVT), (0xB028, Hst::LV),
    (0xB029, Hst::LVT), (0xB044, Hst::LV), (0xB045, Hst::LVT), (0xB060, Hst::LV), (0xB061, Hst::LVT), (0xB07C, Hst::LV),
    (0xB07D, Hst::LVT), (0xB098, Hst::LV), (0xB099, Hst::LVT), (0xB0B4, Hst::LV), (0xB0B5, Hst::LVT), (0xB0D0, Hst::LV),
    (0xB0D1, Hst::LVT), (0xB0EC, Hst::LV), (0xB0ED, Hst::LVT), (0xB108, Hst::LV), (0xB109, Hst::LVT), (0xB124, Hst::LV),
    (0xB125, Hst::LVT), (0xB140, Hst::LV), (0xB141, Hst::LVT), (0xB15C, Hst::LV), (0xB15D, Hst::LVT), (0xB178, Hst::LV),
    (0xB179, Hst::LVT), (0xB194, Hst::LV), (0xB195, Hst::LVT), (0xB1B0, Hst::LV), (0xB1B1, Hst::LVT), (0xB1CC, Hst::LV),
    (0xB1CD, Hst::LVT), (0xB1E8, Hst::LV), (0xB1E9, Hst::LVT), (0xB204, Hst::LV), (0xB205, Hst::LVT), (0xB220, Hst::LV),
    (0xB221, Hst::LVT), (0xB23C, Hst::LV), (0xB23D, Hst::LVT), (0xB258, Hst::LV), (0xB259, Hst::LVT), (0xB274, Hst::LV),
    (0xB275, Hst::LVT), (0xB290, Hst::LV), (0xB291, Hst::LVT), (0xB2AC, Hst::LV), (0xB2AD, Hst::LVT), (0xB2C8, Hst::LV),
    (0xB2C9, Hst::LVT), (0xB2E4, Hst::LV), (0xB2E5, Hst::LVT), (0xB300, Hst::LV), (0xB301, Hst::LVT), (0xB31C, Hst::LV),
    (0xB31D, Hst::LVT), (0xB338, Hst::LV), (0xB339, Hst::LVT), (0xB354, Hst::LV), (0xB355, Hst::LVT), (0xB370, Hst::LV),
    (0xB371, Hst::LVT), (0xB38C, Hst::LV), (0xB38D, Hst::LVT), (0xB3A8, Hst::LV), (0xB3A9, Hst::LVT), (0xB3C4, Hst::LV),
    (0xB3C5, Hst::LVT), (0xB3E0, Hst::LV), (0xB3E1, Hst::LVT), (0xB3FC, Hst::LV), (0xB3FD, Hst::LVT), (0xB418, Hst::LV),
    (0xB419, Hst::LVT), (0xB434, Hst::LV), (0xB435, Hst::LVT), (0xB450, Hst::LV), (0xB451, Hst::LVT), (0xB46C, Hst::LV),
    (0xB46D, Hst::LVT), (0xB488, Hst::LV), (0xB489, Hst::LVT), (0xB4A4, Hst::LV), (0xB4A5, Hst::LVT), (0xB4C0, Hst::LV),
    (0xB4C1, Hst::LVT), (0xB4DC, Hst::LV), (0xB4DD, Hst::LVT), (0xB4F8, Hst::LV), (0xB4F9, Hst::LVT), (0xB514, Hst::LV),
    (0xB515, Hst::LVT), (0xB530, Hst::LV), (0xB531, Hst::LVT), (0xB54C, Hst::LV), (0xB54D, Hst::LVT), (0xB568, Hst::LV),
    (0xB569, Hst::LVT), (0xB584, Hst::LV), (0xB585, Hst::LVT), (0xB5A0, Hst::LV), (0xB5A1, Hst::LVT), (0xB5BC, Hst::LV),
    (0xB5BD, Hst::LVT), (0xB5D8, Hst::LV), (0xB5D9, Hst::LVT), (0xB5F4, Hst::LV), (0xB5F5, Hst::LVT), (0xB610, Hst::LV),
    (0xB611, Hst::LVT), (0xB62C, Hst::LV), (0xB62D, Hst::LVT), (0xB648, Hst::LV), (0xB649, Hst::LVT), (0xB664, Hst::LV),
    (0xB665, Hst::LVT), (0xB680, Hst::LV), (0xB681, Hst::LVT), (0xB69C, Hst::LV), (0xB69D, Hst::LVT), (0xB6B8, Hst::LV),
    (0xB6B9, Hst::LVT), (0xB6D4, Hst::LV), (0xB6D5, Hst::LVT), (0xB6F0, Hst::LV), (0xB6F1, Hst::LVT), (0xB70C, Hst::LV),
    (0xB70D, Hst::LVT), (0xB728, Hst::LV), (0xB729, Hst::LVT), (0xB744, Hst::LV), (0xB745, Hst::LVT), (0xB760, Hst::LV),
    (0xB761, Hst::LVT), (0xB77C, Hst::LV), (0xB77D, Hst::LVT), (0xB798, Hst::LV), (0xB799, Hst::LVT), (0xB7B4, Hst::LV),
    (0xB7B5, Hst::LVT), (0xB7D0, Hst::LV), (0xB7D1, Hst::LVT), (0xB7EC, Hst::LV), (0xB7ED, Hst::LVT), (0xB808, Hst::LV),
    (0xB809, Hst::LVT), (0xB824, Hst::LV), (0xB825, Hst::LVT), (0xB840, Hst::LV), (0xB841, Hst::LVT), (0xB85C, Hst::LV),
    (0xB85D, Hst::LVT), (0xB878, Hst::LV), (0xB879, Hst::LVT), (0xB894, Hst::LV), (0xB895, Hst::LVT), (0xB8B0, Hst::LV),
    (0xB8B1, Hst::LVT), (0xB8CC, Hst::LV), (0xB8CD, Hst::LVT), (0xB8E8, Hst::LV), (0xB8E9, Hst::LVT), (0xB904, Hst::LV),
    (0xB905, Hst::LVT), (0xB920, Hst::LV), (0xB921, Hst::LVT), (0xB93C, Hst::LV), (0xB93D, Hst::LVT), (0xB958, Hst::LV),
    (0xB959, Hst::LVT), (0xB974, Hst::LV), (0xB975, Hst::LVT), (0xB990, Hst::LV), (0xB991, Hst::LVT), (0xB9AC, Hst::LV),
    (0xB9AD, Hst::LVT), (0xB9C8, Hst::LV), (0xB9C9, Hst::LVT), (0xB9E4, Hst::LV), (0xB9E5, Hst::LVT), (0xBA00, Hst::LV),
    (0xBA01, Hst::LVT), (0xBA1C, Hst::LV), (0xBA1D, Hst::LVT), (0xBA38, Hst::LV), (0xBA39, Hst::LVT), (0xBA54, Hst::LV),
    (0xBA55, Hst::LVT), (0xBA70, Hst::LV), (0xBA71, Hst::LVT), (0xBA8C, Hst::LV), (0xBA8D, Hst::LVT), (0xBAA8, Hst::LV),
    (0xBAA9, Hst::LVT), (0xBAC4, Hst::LV), (0xBAC5, Hst::LVT), (0xBAE0, Hst::LV), (0xBAE1, Hst::LVT), (0xBAFC, Hst::LV),
    (0xBAFD, Hst::LVT), (0xBB18, Hst::LV), (0xBB19, Hst::LVT), (0xBB34, Hst::LV), (0xBB35, Hst::LVT), (0xBB50, Hst::LV),
    (0xBB51, Hst::LVT), (0xBB6C, Hst::LV), (0xBB6D, Hst::LVT), (0xBB88, Hst::LV), (0xBB89, Hst::LVT), (0xBBA4, Hst::LV),
    (0xBBA5, Hst::LVT), (0xBBC0, Hst::LV), (0xBBC1, Hst::LVT), (0xBBDC, Hst::LV), (0xBBDD, Hst::LVT), (0xBBF8, Hst::LV),
    (0xBBF9, Hst::LVT), (0xBC14, Hst::LV), (0xBC15, Hst::LVT), (0xBC30, Hst::LV), (0xBC31, Hst::LVT), (0xBC4C, Hst::LV),
    (0xBC4D, Hst::LVT), (0xBC68, Hst::LV), (0xBC69, Hst::LVT), (0xBC84, Hst::LV), (0xBC85, Hst::LVT), (0xBCA0, Hst::LV),
    (0xBCA1, Hst::LVT), (0xBCBC, Hst::LV), (0xBCBD, Hst::LVT), (0xBCD8, Hst::LV), (0xBCD9, Hst::LVT), (0xBCF4, Hst::LV),
    (0xBCF5, Hst::LVT), (0xBD10, Hst::LV), (0xBD11, Hst::LVT), (0xBD2C, Hst::LV), (0xBD2D, Hst::LVT), (0xBD48, Hst::LV),
    (0xBD49, Hst::LVT), (0xBD64, Hst::LV), (0xBD65, Hst::LVT), (0xBD80, Hst::LV), (0xBD81, Hst::LVT), (0xBD9C, Hst::LV),
    (0xBD9D, Hst::LVT), (0xBDB8, Hst::LV), (0xBDB9, Hst::LVT), (0xBDD4, Hst::LV), (0xBDD5, Hst::LVT), (0xBDF0, Hst::LV),
    (0xBDF1, Hst::LVT), (0xBE0C, Hst::LV), (0xBE0D, Hst::LVT), (0xBE28, Hst::LV), (0xBE29, Hst::LVT), (0xBE44, Hst::LV),
    (0xBE45, Hst::LVT), (0xBE60, Hst::LV), (0xBE61, Hst::LVT), (0xBE7C, Hst::LV), (0xBE7D, Hst::LVT), (0xBE98, Hst::LV),
    (0xBE99, Hst::LVT), (0xBEB4, Hst::LV), (0xBEB5, Hst::LVT), (0xBED0, Hst::LV), (0xBED1, Hst::LVT), (0xBEEC, Hst::LV),
    (0xBEED, Hst::LVT), (0xBF08, Hst::LV), (0xBF09, Hst::LVT), (0xBF24, Hst::LV), (0xBF25, Hst::LVT), (0xBF40, Hst::LV),
    (0xBF41, Hst::LVT), (0xBF5C, Hst::LV), (0xBF5D, Hst::LVT), (0xBF78, Hst::LV), (0xBF79, Hst::LVT), (0xBF94, Hst::LV),
    (0xBF95, Hst::LVT), (0xBFB0, Hst::LV), (0xBFB1, Hst::LVT), (0xBFCC, Hst::LV), (0xBFCD, Hst::LVT), (0xBFE8, Hst::LV),
    (0xBFE9, Hst::LVT), (0xC004, Hst::LV), (0xC005, Hst::LVT), (0xC020, Hst::LV), (0xC021, Hst::LVT), (0xC03C, Hst::LV),
    (0xC03D, Hst::LVT), (0xC058, Hst::LV), (0xC059, Hst::LVT), (0xC074, Hst::LV), (0xC075, Hst::LVT), (0xC090, Hst::LV),
    (0xC091, Hst::LVT), (0xC0AC, Hst::LV), (0xC0AD, Hst::LVT), (0xC0C8, Hst::LV), (0xC0C9, Hst::LVT), (0xC0E4, Hst::LV),
    (0xC0E5, Hst::LVT), (0xC100, Hst::LV), (0xC101, Hst::LVT), (0xC11C, Hst::LV), (0xC11D, Hst::LVT), (0xC138, Hst::LV),
    (0xC139, Hst::LVT), (0xC154, Hst::LV), (0xC155, Hst::LVT), (0xC170, Hst::LV), (0xC171, Hst::LVT), (0xC18C, Hst::LV),
    (0xC18D, Hst::LVT), (0xC1A8, Hst::LV), (0xC1A9, Hst::LVT), (0xC1C4, Hst::LV), (0xC1C5, Hst::LVT), (0xC1E0, Hst::LV),
    (0xC1E1, Hst::LVT), (0xC1FC, Hst::LV), (0xC1FD, Hst::LVT), (0xC218, Hst::LV), (0xC219, Hst::LVT), (0xC234, Hst::LV),
    (0xC235, Hst::LVT), (0xC250, Hst::LV), (0xC251, Hst::LVT), (0xC26C, Hst::LV), (0xC26D, Hst::LVT), (0xC288, Hst::LV),
    (0xC289, Hst::LVT), (0xC2A4, Hst::LV), (0xC2A5, Hst::LVT), (0xC2C0, Hst::LV), (0xC2C1, Hst::LVT), (0xC2DC, Hst::LV),
    (0xC2DD, Hst::LVT), (0xC2F8, Hst::LV), (0xC2F9, Hst::LVT), (0xC314, Hst::LV), (0xC315, Hst::LVT), (0xC330, Hst::LV),
    (0xC331, Hst::LVT), (0xC34C, Hst::LV), (0xC34D, Hst::LVT), (0xC368, Hst::LV), (0xC369, Hst::LVT), (0xC384, Hst::LV),
    (0xC385, Hst::LVT), (0xC3A0, Hst::LV), (0xC3A1, Hst::LVT), (0xC3BC, Hst::LV), (0xC3BD, Hst::LVT), (0xC3D8, Hst::LV),
    (0xC3D9, Hst::LVT), (0xC3F4, Hst::LV), (0xC3F5, Hst::LVT), (0xC410, Hst::LV), (0xC411, Hst::LVT), (0xC42C, Hst::LV),
    (0xC42D, Hst::LVT), (0xC448, Hst::LV), (0xC449, Hst::LVT), (0xC464, Hst::LV), (0xC465, Hst::LVT), (0xC480, Hst::LV),
    (0xC481, Hst::LVT), (0xC49C, Hst::LV), (0xC49D, Hst::LVT), (0xC4B8, Hst::LV), (0xC4B9, Hst::LVT), (0xC4D4, Hst::LV),
    (0xC4D5, Hst::LVT), (0xC4F0, Hst::LV), (0xC4F1, Hst::LVT), (0xC50C, Hst::LV), (0xC50D, Hst::LVT), (0xC528, Hst::LV),
    (0xC529, Hst::LVT), (0xC544, Hst::LV), (0xC545, Hst::LVT), (0xC560, Hst::LV), (0xC561, Hst::LVT), (0xC57C, Hst::LV),
    (0xC57D, Hst::LVT), (0xC598, Hst::LV), (0xC599, Hst::LVT), (0xC5B4, Hst::LV), (0xC5B5, Hst::LVT), (0xC5D0, Hst::LV),
    (0xC5D1, Hst::LVT), (0xC5EC, Hst::LV), (0xC5ED, Hst::LVT), (0xC608, Hst::LV), (0xC609, Hst::LVT), (0xC624, Hst::LV),
    (0xC625, Hst::LVT), (0xC640, Hst::LV), (0xC641, Hst::LVT), (0xC65C, Hst::LV), (0xC65D, Hst::LVT), (0xC678, Hst::LV),
    (0xC679, Hst::LVT), (0xC694, Hst::LV), (0xC695, Hst::LVT), (0xC6B0, Hst::LV), (0xC6B1, Hst::LVT), (0xC6CC, Hst::LV),
    (0xC6CD, Hst::LVT), (0xC6E8, Hst::LV), (0xC6E9, Hst::LVT), (0xC704, Hst::LV), (0xC705, Hst::LVT), (0xC720, Hst::LV),
    (0xC721, Hst::LVT), (0xC73C, Hst::LV), (0xC73D, Hst::LVT), (0xC758, Hst::LV), (0xC759, Hst::LVT), (0xC774, Hst::LV),
    (0xC775, Hst::LVT), (0xC790, Hst::LV), (0xC791, Hst::LVT), (0xC7AC, Hst::LV), (0xC7AD, Hst::LVT), (0xC7C8, Hst::LV),
    (0xC7C9, Hst::LVT), (0xC7E4, Hst::LV), (0xC7E5, Hst::LVT), (0xC800, Hst::LV), (0xC801, Hst::LVT), (0xC81C, Hst::LV),
    (0xC81D, Hst::LVT), (0xC838, Hst::LV), (0xC839, Hst::LVT), (0xC854, Hst::LV), (0xC855, Hst::LVT), (0xC870, Hst::LV),
    (0xC871, Hst::LVT), (0xC88C, Hst::LV), (0xC88D, Hst::LVT), (0xC8A8, Hst::LV), (0xC8A9, Hst::LVT), (0xC8C4, Hst::LV),
    (0xC8C5, Hst::LVT), (0xC8E0, Hst::LV), (0xC8E1, Hst::LVT), (0xC8FC, Hst::LV), (0xC8FD, Hst::LVT), (0xC918, Hst::LV),
    (0xC919, Hst::LVT), (0xC934, Hst::LV), (0xC935, Hst::LVT), (0xC950, Hst::LV), (0xC951, Hst::LVT), (0xC96C, Hst::LV),
    (0xC96D, Hst::LVT), (0xC988, Hst::LV), (0xC989, Hst::LVT), (0xC9A4, Hst::LV), (0xC9A5, Hst::LVT), (0xC9C0, Hst::LV),
    (0xC9C1, Hst::LVT), (0xC9DC, Hst::LV), (0xC9DD, Hst::LVT), (0xC9F8, Hst::LV), (0xC9F9, Hst::LVT), (0xCA14, Hst::LV),
    (0xCA15, Hst::LVT), (0xCA30, Hst::LV), (0xCA31, Hst::LVT), (0xCA4C, Hst::LV), (0xCA4D, Hst::LVT), (0xCA68, Hst::LV),
    (0xCA69, Hst::LVT), (0xCA84, Hst::LV), (0xCA85, Hst::LVT), (0xCAA0, Hst::LV), (0xCAA1, Hst::LVT), (0xCABC, Hst::LV),
    (0xCABD, Hst::LVT), (0xCAD8, Hst::LV), (0xCAD9, Hst::LVT), (0xCAF4, Hst::LV), (0xCAF5, Hst::LVT), (0xCB10, Hst::LV),
    (0xCB11, Hst::LVT), (0xCB2C, Hst::LV), (0xCB2D, Hst::LVT), (0xCB48, Hst::LV), (0xCB49, Hst::LVT), (0xCB64, Hst::LV),
    (0xCB65, Hst::LVT), (0xCB80, Hst::LV), (0xCB81, Hst::LVT), (0xCB9C, Hst::LV), (0xCB9D, Hst::LVT), (0xCBB8, Hst::LV),
    (0xCBB9, Hst::LVT), (0xCBD4, Hst::LV), (0xCBD5, Hst::LVT), (0xCBF0, Hst::LV), (0xCBF1, Hst::LVT), (0xCC0C, Hst::LV),
    (0xCC0D, Hst::LVT), (0xCC28, Hst::LV), (0xCC29, Hst::LVT), (0xCC44, Hst::LV), (0xCC45, Hst::LVT), (0xCC60, Hst::LV),
    (0xCC61, Hst::LVT), (0xCC7C, Hst::LV), (0xCC7D, Hst::LVT), (0xCC98, Hst::LV), (0xCC99, Hst::LVT), (0xCCB4, Hst::LV),
    (0xCCB5, Hst::LVT), (0xCCD0, Hst::LV), (0xCCD1, Hst::LVT), (0xCCEC, Hst::LV), (0xCCED, Hst::LVT), (0xCD08, Hst::LV),
    (0xCD09, Hst::LVT), (0xCD24, Hst::LV), (0xCD25, Hst::LVT), (0xCD40, Hst::LV), (0xCD41, Hst::LVT), (0xCD5C, Hst::LV),
    (0xCD5D, Hst::LVT), (0xCD78, Hst::LV), (0xCD79, Hst::LVT), (0xCD94, Hst::LV), (0xCD95, Hst::LVT), (0xCDB0, Hst::LV),
    (0xCDB1, Hst::LVT), (0xCDCC, Hst::LV), (0xCDCD, Hst::LVT), (0xCDE8, Hst::LV), (0xCDE9, Hst::LVT), (0xCE04, Hst::LV),
    (0xCE05, Hst::LVT), (0xCE20, Hst::LV), (0xCE21, Hst::LVT), (0xCE3C, Hst::LV), (0xCE3D, Hst::LVT), (0xCE58, Hst::LV),
    (0xCE59, Hst::LVT), (0xCE74, Hst::LV), (0xCE75, Hst::LVT), (0xCE90, Hst::LV), (0xCE91, Hst::LVT), (0xCEAC, Hst::LV),
    (0xCEAD, Hst::LVT), (0xCEC8, Hst::LV), (0xCEC9, Hst::LVT), (0xCEE4, Hst::LV), (0xCEE5, Hst::LVT), (0xCF00, Hst::LV),
    (0xCF01, Hst::LVT), (0xCF1C, Hst::LV), (0xCF1D, Hst::LVT), (0xCF38, Hst::LV), (0xCF39, Hst::LVT), (0xCF54, Hst::LV),
    (0xCF55, Hst::LVT), (0xCF70, Hst::LV), (0xCF71, Hst::LVT), (0xCF8C, Hst::LV), (0xCF8D, Hst::LVT), (0xCFA8, Hst::LV),
    (0xCFA9, Hst::LVT), (0xCFC4, Hst::LV), (0xCFC5, Hst::LVT), (0xCFE0, Hst::LV), (0xCFE1, Hst::LVT), (0xCFFC, Hst::LV),
    (0xCFFD, Hst::LVT), (0xD018, Hst::LV), (0xD019, Hst::LVT), (0xD034, Hst::LV), (0xD035, Hst::LVT), (0xD050, Hst::LV),
    (0xD051, Hst::LVT), (0xD06C, Hst::LV), (0xD06D, Hst::LVT), (0xD088, Hst::LV), (0xD089, Hst::LVT), (0xD0A4, Hst::LV),
    (0xD0A5, Hst::LVT), (0xD0C0, Hst::LV), (0xD0C1, Hst::LVT), (0xD0DC, Hst::LV), (0xD0DD, Hst::LVT), (0xD0F8, Hst::LV),
    (0xD0F9, Hst::LVT), (0xD114, Hst::LV), (0xD115, Hst::LVT), (0xD130, Hst::LV), (0xD131, Hst::LVT), (0xD14C, Hst::LV),
    (0xD14D, Hst::LVT), (0xD168, Hst::LV), (0xD169, Hst::LVT), (0xD184, Hst::LV), (0xD185, Hst::LVT), (0xD1A0, Hst::LV),
    (0xD1A1, Hst::LVT), (0xD1BC, Hst::LV), (0xD1BD, Hst::LVT), (0xD1D8, Hst::LV), (0xD1D9, Hst::LVT), (0xD1F4, Hst::LV),
    (0xD1F5, Hst::LVT), (0xD210, Hst::LV), (0xD211, Hst::LVT), (0xD22C, Hst::LV), (0xD22D, Hst::LVT), (0xD248, Hst::LV),
    (0xD249, Hst::LVT), (0xD264, Hst::LV), (0xD265, Hst::LVT), (0xD280, Hst::LV), (0xD281, Hst::LVT), (0xD29C, Hst::LV),
    (0xD29D, Hst::LVT), (0xD2B8, Hst::LV), (0xD2B9, Hst::LVT), (0xD2D4, Hst::LV), (0xD2D5, Hst::LVT), (0xD2F0, Hst::LV),
    (0xD2F1, Hst::LVT), (0xD30C, Hst::LV), (0xD30D, Hst::LVT), (0xD328, Hst::LV), (0xD329, Hst::LVT), (0xD344, Hst::LV),
    (0xD345, Hst::LVT), (0xD360, Hst::LV), (0xD361, Hst::LVT), (0xD37C, Hst::LV), (0xD37D, Hst::LVT), (0xD398, Hst::LV),
    (0xD399, Hst::LVT), (0xD3B4, Hst::LV), (0xD3B5, Hst::LVT), (0xD3D0, Hst::LV), (0xD3D1, Hst::LVT), (0xD3EC, Hst::LV),
    (0xD3ED, Hst::LVT), (0xD408, Hst::LV), (0xD409, Hst::LVT), (0xD424, Hst::LV), (0xD425, Hst::LVT), (0xD440, Hst::LV),
    (0xD441, Hst::LVT), (0xD45C, Hst::LV), (0xD45D, Hst::LVT), (0xD478, Hst::LV), (0xD479, Hst::LVT), (0xD494, Hst::LV),
    (0xD495, Hst::LVT), (0xD4B0, Hst::LV), (0xD4B1, Hst::LVT), (0xD4CC, Hst::LV), (0xD4CD, Hst::LVT), (0xD4E8, Hst::LV),
    (0xD4E9, Hst::LVT), (0xD504, Hst::LV), (0xD505, Hst::LVT), (0xD520, Hst::LV), (0xD521, Hst::LVT), (0xD53C, Hst::LV),
    (0xD53D, Hst::LVT), (0xD558, Hst::LV), (0xD559, Hst::LVT), (0xD574, Hst::LV), (0xD575, Hst::LVT), (0xD590, Hst::LV),
    (0xD591, Hst::LVT), (0xD5AC, Hst::LV), (0xD5AD, Hst::LVT), (0xD5C8, Hst::LV), (0xD5C9, Hst::LVT), (0xD5E4, Hst::LV),
    (0xD5E5, Hst::LVT), (0xD600, Hst::LV), (0xD601, Hst::LVT), (0xD61C, Hst::LV), (0xD61D, Hst::LVT), (0xD638, Hst::LV),
    (0xD639, Hst::LVT), (0xD654, Hst::LV), (0xD655, Hst::LVT), (0xD670, Hst::LV), (0xD671, Hst::LVT), (0xD68C, Hst::LV),
    (0xD68D, Hst::LVT), (0xD6A8, Hst::LV), (0xD6A9, Hst::LVT), (0xD6C4, Hst::LV), (0xD6C5, Hst::LVT), (0xD6E0, Hst::LV),
    (0xD6E1, Hst::LVT), (0xD6FC, Hst::LV), (0xD6FD, Hst::LVT), (0xD718, Hst::LV), (0xD719, Hst::LVT), (0xD734, Hst::LV),
    (0xD735, Hst::LVT), (0xD750, Hst::LV), (0xD751, Hst::LVT), (0xD76C, Hst::LV), (0xD76D, Hst::LVT), (0xD788, Hst::LV),
    (0xD789, Hst::LVT), (0xD7A4, Hst::NA), (0xD7B0, Hst::V), (0xD7C7, Hst::NA), (0xD7CB, Hst::T), (0xD7FC, Hst::NA),
];

pub(crate) static JOINING_TYPE: &[(u32, Jt)] = &[
    (0x0, Jt::Default), (0x621, Jt::NonJoining), (0x622, Jt::RightJoining), (0x626, Jt::DualJoining),
    (0x627, Jt::RightJoining), (0x628, Jt::DualJoining), (0x629, Jt::RightJoining), (0x62A, Jt::DualJoining),
    (0x62F, Jt::RightJoining), (0x633, Jt::DualJoining), (0x640, Jt::JoinCausing), (0x641, Jt::DualJoining),
    (0x648, Jt::RightJoining), (0x649, Jt::DualJoining), (0x64B, Jt::Default), (0x66E, Jt::DualJoining),
    (0x670, Jt::Default), (0x671, Jt::RightJoining), (0x674, Jt::Default), (0x675, Jt::RightJoining),
    (0x678, Jt::DualJoining), (0x688, Jt::RightJoining), (0x69A, Jt::DualJoining), (0x6C0, Jt::RightJoining),
    (0x6C1, Jt::DualJoining), (0x6C3, Jt::RightJoining), (0x6CC, Jt::DualJoining), (0x6CD, Jt::RightJoining),
    (0x6CE, Jt::DualJoining), (0x6CF, Jt::RightJoining), (0x6D0, Jt::DualJoining), (0x6D2, Jt::RightJoining),
    (0x6D4, Jt::Default), (0x6D5, Jt::RightJoining), (0x6D6, Jt::Default), (0x6EE, Jt::RightJoining),
    (0x6F0, Jt::Default), (0x6FA, Jt::DualJoining), (0x6FD, Jt::Default), (0x6FF, Jt::DualJoining),
    (0x700, Jt::Default), (0x710, Jt::RightJoining), (0x711, Jt::Default), (0x712, Jt::DualJoining),
    (0x715, Jt::RightJoining), (0x717, Jt::DualJoining), (0x718, Jt::RightJoining), (0x71A, Jt::DualJoining),
    (0x728, Jt::RightJoining), (0x729, Jt::DualJoining), (0x72A, Jt::RightJoining), (0x72B, Jt::DualJoining),
    (0x72C, Jt::RightJoining), (0x72D, Jt::DualJoining), (0x730, Jt::Default), (0x74D, Jt::DualJoining),
    (0x780, Jt::Default), (0x7CA, Jt::DualJoining), (0x7EB, Jt::Default), (0x7FA, Jt::JoinCausing),
    (0x7FB, Jt::Default), (0x841, Jt::DualJoining), (0x859, Jt::Default), (0x1820, Jt::DualJoining),
    (0x1879, Jt::Default), (0x1887, Jt::DualJoining), (0x18A9, Jt::Default), (0x200D, Jt::JoinCausing),
    (0x200E, Jt::Default), (0x1E900, Jt::DualJoining), (0x1E944, Jt::Default),
];

pub(crate) static JOINING_GROUP: &[(u32, Jg)] = &[
    (0x0, Jg::NoJoiningGroup), (0x622, Jg::Alef), (0x624, Jg::Waw), (0x625, Jg::Alef),
    (0x626, Jg::Yeh), (0x627, Jg::Alef), (0x628, Jg::Beh), (0x629, Jg::TehMarbuta),
    (0x62A, Jg::Beh), (0x62C, Jg::Hah), (0x62F, Jg::Dal), (0x631, Jg::Reh),
    (0x633, Jg::Seen), (0x635, Jg::Sad), (0x637, Jg::Tah), (0x639, Jg::Ain),
    (0x63B, Jg::NoJoiningGroup), (0x63D, Jg::FarsiYeh), (0x640, Jg::NoJoiningGroup), (0x641, Jg::Feh),
    (0x642, Jg::Qaf), (0x643, Jg::Kaf), (0x644, Jg::Lam), (0x645, Jg::Meem),
    (0x646, Jg::Noon), (0x647, Jg::Heh), (0x648, Jg::Waw), (0x649, Jg::Yeh),
    (0x64B, Jg::NoJoiningGroup), (0x66F, Jg::Qaf), (0x670, Jg::NoJoiningGroup), (0x671, Jg::Alef),
    (0x674, Jg::NoJoiningGroup), (0x675, Jg::Alef), (0x676, Jg::Waw), (0x678, Jg::Yeh),
    (0x679, Jg::Beh), (0x681, Jg::Hah), (0x683, Jg::NoJoiningGroup), (0x685, Jg::Hah),
    (0x688, Jg::Dal), (0x691, Jg::Reh), (0x69A, Jg::Seen), (0x69D, Jg::Sad),
    (0x69F, Jg::Tah), (0x6A0, Jg::Ain), (0x6A1, Jg::Feh), (0x6A4, Jg::NoJoiningGroup),
    (0x6A5, Jg::Feh), (0x6A7, Jg::Qaf), (0x6A9, Jg::Gaf), (0x6AA, Jg::SwashKaf),
    (0x6AB, Jg::Gaf), (0x6AC, Jg::Kaf), (0x6AF, Jg::Gaf), (0x6B5, Jg::Lam),
    (0x6B9, Jg::Noon), (0x6BD, Jg::Nya), (0x6BE, Jg::KnottedHeh), (0x6BF, Jg::NoJoiningGroup),
    (0x6C0, Jg::TehMarbuta), (0x6C1, Jg::HehGoal), (0x6C3, Jg::NoJoiningGroup), (0x6C4, Jg::Waw),
    (0x6CC, Jg::Yeh), (0x6CD, Jg::YehWithTail), (0x6CE, Jg::Yeh), (0x6CF, Jg::Waw),
    (0x6D0, Jg::Yeh), (0x6D2, Jg::YehBarree), (0x6D4, Jg::NoJoiningGroup), (0x6D5, Jg::TehMarbuta),
    (0x6D6, Jg::NoJoiningGroup), (0x6FE, Jg::Meem), (0x6FF, Jg::NoJoiningGroup),
];

pub(crate) static INDIC_SYLLABIC: &[(u32, Insc)] = &[
    (0x0, Insc::Other), (0x900, Insc::Bindu), (0x903, Insc::Visarga), (0x904, Insc::VowelIndependent),
    (0x915, Insc::Consonant), (0x93A, Insc::Other), (0x93C, Insc::Nukta), (0x93D, Insc::Avagraha),
    (0x93E, Insc::VowelDependent), (0x94D, Insc::Virama), (0x94E, Insc::Other), (0x951, Insc::CantillationMark),
    (0x955, Insc::Other), (0x958, Insc::Consonant), (0x960, Insc::VowelIndependent), (0x962, Insc::VowelDependent),
    (0x964, Insc::Other), (0x966, Insc::Number), (0x970, Insc::Other), (0x981, Insc::Bindu),
    (0x983, Insc::Visarga), (0x984, Insc::Other), (0x985, Insc::VowelIndependent), (0x995, Insc::Consonant),
    (0x9BA, Insc::Other), (0x9BC, Insc::Nukta), (0x9BD, Insc::Other), (0x9BE, Insc::VowelDependent),
    (0x9CD, Insc::Virama), (0x9CE, Insc::Other), (0x200C, Insc::NonJoiner), (0x200D, Insc::Joiner),
    (0x200E, Insc::Other),
];

pub(crate) static INDIC_POSITIONAL: &[(u32, Inpc)] = &[
    (0x0, Inpc::NA), (0x900, Inpc::Top), (0x903, Inpc::Right), (0x904, Inpc::NA),
    (0x93C, Inpc::Bottom), (0x93D, Inpc::NA), (0x93E, Inpc::Right), (0x93F, Inpc::Left),
    (0x940, Inpc::Right), (0x941, Inpc::Bottom), (0x945, Inpc::Top), (0x949, Inpc::Right),
    (0x94D, Inpc::Bottom), (0x94E, Inpc::NA), (0x951, Inpc::Top), (0x952, Inpc::Bottom),
    (0x953, Inpc::NA), (0x962, Inpc::Bottom), (0x964, Inpc::NA),
];

pub(crate) static NUMERIC_TYPE: &[(u32, Nt)] = &[
    (0x0, Nt::None), (0x30, Nt::Decimal), (0x3A, Nt::None), (0xB2, Nt::Digit), (0xB4, Nt::None), (0xB9, Nt::Digit),
    (0xBA, Nt::None), (0xBC, Nt::Numeric), (0xBF, Nt::None), (0x660, Nt::Decimal), (0x66A, Nt::None), (0x6F0, Nt::Decimal),
    (0x6FA, Nt::None), (0x7C0, Nt::Decimal), (0x7CA, Nt::None), (0x966, Nt::Decimal), (0x970, Nt::None), (0x9E6, Nt::Decimal),
    (0x9F0, Nt::None), (0x9F4, Nt::Numeric), (0x9FA, Nt::None), (0xA66, Nt::Decimal), (0xA70, Nt::None), (0xAE6, Nt::Decimal),
    (0xAF0, Nt::None), (0xB66, Nt::Decimal), (0xB70, Nt::None), (0xB72, Nt::Numeric), (0xB78, Nt::None), (0xBE6, Nt::Decimal),
    (0xBF0, Nt::Numeric), (0xBF3, Nt::None), (0xC66, Nt::Decimal), (0xC70, Nt::None), (0xC78, Nt::Numeric), (0xC7F, Nt::None),
    (0xCE6, Nt::Decimal), (0xCF0, Nt::None), (0xD58, Nt::Numeric), (0xD5F, Nt::None), (0xD66, Nt::Decimal), (0xD70, Nt::Numeric),
    (0xD79, Nt::None), (0xDE6, Nt::Decimal), (0xDF0, Nt::None), (0xE50, Nt::Decimal), (0xE5A, Nt::None), (0xED0, Nt::Decimal),
    (0xEDA, Nt::None), (0xF20, Nt::Decimal), (0xF2A, Nt::Numeric), (0xF34, Nt::None), (0x1040, Nt::Decimal), (0x104A, Nt::None),
    (0x1090, Nt::Decimal), (0x109A, Nt::None), (0x1369, Nt::Digit), (0x1372, Nt::Numeric), (0x137D, Nt::None), (0x16EE, Nt::Numeric),
    (0x16F1, Nt::None), (0x17E0, Nt::Decimal), (0x17EA, Nt::None), (0x17F0, Nt::Numeric), (0x17FA, Nt::None), (0x1810, Nt::Decimal),
    (0x181A, Nt::None), (0x1946, Nt::Decimal), (0x1950, Nt::None), (0x19D0, Nt::Decimal), (0x19DA, Nt::Digit), (0x19DB, Nt::None),
    (0x1A80, Nt::Decimal), (0x1A8A, Nt::None), (0x1A90, Nt::Decimal), (0x1A9A, Nt::None), (0x1B50, Nt::Decimal), (0x1B5A, Nt::None),
    (0x1BB0, Nt::Decimal), (0x1BBA, Nt::None), (0x1C40, Nt::Decimal), (0x1C4A, Nt::None), (0x1C50, Nt::Decimal), (0x1C5A, Nt::None),
    (0x2070, Nt::Digit), (0x2071, Nt::None), (0x2074, Nt::Digit), (0x207A, Nt::None), (0x2080, Nt::Digit), (0x208A, Nt::None),
    (0x2150, Nt::Numeric), (0x2183, Nt::None), (0x2185, Nt::Numeric), (0x218A, Nt::None), (0x2460, Nt::Digit), (0x2469, Nt::Numeric),
    (0x2474, Nt::Digit), (0x247D, Nt::Numeric), (0x2488, Nt::Digit), (0x2491, Nt::Numeric), (0x249C, Nt::None), (0x24EA, Nt::Digit),
    (0x24EB, Nt::Numeric), (0x24F5, Nt::Digit), (0x24FE, Nt::Numeric), (0x24FF, Nt::Digit), (0x2500, Nt::None), (0x2776, Nt::Digit),
    (0x277F, Nt::Numeric), (0x2780, Nt::Digit), (0x2789, Nt::Numeric), (0x278A, Nt::Digit), (0x2793, Nt::Numeric), (0x2794, Nt::None),
    (0x2CFD, Nt::Numeric), (0x2CFE, Nt::None), (0x3007, Nt::Numeric), (0x3008, Nt::None), (0x3021, Nt::Numeric), (0x302A, Nt::None),
    (0x3038, Nt::Numeric), (0x303B, Nt::None), (0x3192, Nt::Numeric), (0x3196, Nt::None), (0x3220, Nt::Numeric), (0x322A, Nt::None),
    (0x3248, Nt::Numeric), (0x3250, Nt::None), (0x3251, Nt::Numeric), (0x3260, Nt::None), (0x3280, Nt::Numeric), (0x328A, Nt::None),
    (0x32B1, Nt::Numeric), (0x32C0, Nt::None), (0x3405, Nt::Numeric), (0x3406, Nt::None), (0x3483, Nt::Numeric), (0x3484, Nt::None),
    (0x382A, Nt::Numeric), (0x382B, Nt::None), (0x3B4D, Nt::Numeric), (0x3B4E, Nt::None), (0x4E00, Nt::Numeric), (0x4E01, Nt::None),
    (0x4E03, Nt::Numeric), (0x4E04, Nt::None), (0x4E07, Nt::Numeric), (0x4E08, Nt::None), (0x4E09, Nt::Numeric), (0x4E0A, Nt::None),
    (0x4E5D, Nt::Numeric), (0x4E5E, Nt::None), (0x4E8C, Nt::Numeric), (0x4E8D, Nt::None), (0x4E94, Nt::Numeric), (0x4E95, Nt::None),
    (0x4E96, Nt::Numeric), (0x4E97, Nt::None), (0x4EBF, Nt::Numeric), (0x4EC1, Nt::None), (0x4EDF, Nt::Numeric), (0x4EE0, Nt::None),
    (0x4EE8, Nt::Numeric), (0x4EE9, Nt::None), (0x4F0D, Nt::Numeric), (0x4F0E, Nt::None), (0x4F70, Nt::Numeric), (0x4F71, Nt::None),
    (0x5104, Nt::Numeric), (0x5105, Nt::None), (0x5146, Nt::Numeric), (0x5147, Nt::None), (0x5169, Nt::Numeric), (0x516A, Nt::None),
    (0x516B, Nt::Numeric), (0x516C, Nt::None), (0x516D, Nt::Numeric), (0x516E, Nt::None), (0x5341, Nt::Numeric), (0x5342, Nt::None),
    (0x5343, Nt::Numeric), (0x5346, Nt::None), (0x534C, Nt::Numeric), (0x534D, Nt::None), (0x53C1, Nt::Numeric), (0x53C5, Nt::None),
    (0x56DB, Nt::Numeric), (0x56DC, Nt::None), (0x58F1, Nt::Numeric), (0x58F2, Nt::None), (0x58F9, Nt::Numeric), (0x58FA, Nt::None),
    (0x5E7A, Nt::Numeric), (0x5E7B, Nt::None), (0x5EFE, Nt::Numeric), (0x5F00, Nt::None), (0x5F0C, Nt::Numeric), (0x5F0F, Nt::None),
    (0x5F10, Nt::Numeric), (0x5F11, Nt::None), (0x62FE, Nt::Numeric), (0x62FF, Nt::None), (0x634C, Nt::Numeric), (0x634D, Nt::None),
    (0x67D2, Nt::Numeric), (0x67D3, Nt::None), (0x6F06, Nt::Numeric), (0x6F07, Nt::None), (0x7396, Nt::Numeric), (0x7397, Nt::None),
    (0x767E, Nt::Numeric), (0x767F, Nt::None), (0x8086, Nt::Numeric), (0x8087, Nt::None), (0x842C, Nt::Numeric), (0x842D, Nt::None),
    (0x8CAE, Nt::Numeric), (0x8CAF, Nt::None), (0x8CB3, Nt::Numeric), (0x8CB4, Nt::None), (0x8D30, Nt::Numeric), (0x8D31, Nt::None),
    (0x9621, Nt::Numeric), (0x9622, Nt::None), (0x9646, Nt::Numeric), (0x9647, Nt::None), (0x964C, Nt::Numeric), (0x964D, Nt::None),
    (0x9678, Nt::Numeric), (0x9679, Nt::None), (0x96F6, Nt::Numeric), (0x96F7, Nt::None), (0xA620, Nt::Decimal), (0xA62A, Nt::None),
    (0xA6E6, Nt::Numeric), (0xA6F0, Nt::None), (0xA830, Nt::Numeric), (0xA836, Nt::None), (0xA8D0, Nt::Decimal), (0xA8DA, Nt::None),
    (0xA900, Nt::Decimal), (0xA90A, Nt::None), (0xA9D0, Nt::Decimal), (0xA9DA, Nt::None), (0xA9F0, Nt::Decimal), (0xA9FA, Nt::None),
    (0xAA50, Nt::Decimal), (0xAA5A, Nt::None), (0xABF0, Nt::Decimal), (0xABFA, Nt::None), (0xF96B, Nt::Numeric), (0xF96C, Nt::None),
    (0xF973, Nt::Numeric), (0xF974, Nt::None), (0xF978, Nt::Numeric), (0xF979, Nt::None), (0xF9B2, Nt::Numeric), (0xF9B3, Nt::None),
    (0xF9D1, Nt::Numeric), (0xF9D2, Nt::None), (0xF9D3, Nt::Numeric), (0xF9D4, Nt::None), (0xF9FD, Nt::Numeric), (0xF9FE, Nt::None),
    (0xFF10, Nt::Decimal), (0xFF1A, Nt::None), (0x10107, Nt::Numeric), (0x10134, Nt::None), (0x10140, Nt::Numeric), (0x10179, Nt::None),
    (0x1018A, Nt::Numeric), (0x1018C, Nt::None), (0x102E1, Nt::Numeric), (0x102FC, Nt::None), (0x10320, Nt::Numeric), (0x10324, Nt::None),
    (0x10341, Nt::Numeric), (0x10342, Nt::None), (0x1034A, Nt::Numeric), (0x1034B, Nt::None), (0x103D1, Nt::Numeric), (0x103D6, Nt::None),
    (0x104A0, Nt::Decimal), (0x104AA, Nt::None), (0x10858, Nt::Numeric), (0x10860, Nt::None), (0x10879, Nt::Numeric), (0x10880, Nt::None),
    (0x108A7, Nt::Numeric), (0x108B0, Nt::None), (0x108FB, Nt::Numeric), (0x10900, Nt::None), (0x10916, Nt::Numeric), (0x1091C, Nt::None),
    (0x109BC, Nt::Numeric), (0x109BE, Nt::None), (0x109C0, Nt::Numeric), (0x109D0, Nt::None), (0x109D2, Nt::Numeric), (0x10A00, Nt::None),
    (0x10A40, Nt::Digit), (0x10A44, Nt::Numeric), (0x10A49, Nt::None), (0x10A7D, Nt::Numeric), (0x10A7F, Nt::None), (0x10A9D, Nt::Numeric),
    (0x10AA0, Nt::None), (0x10AEB, Nt::Numeric), (0x10AF0, Nt::None), (0x10B58, Nt::Numeric), (0x10B60, Nt::None), (0x10B78, Nt::Numeric),
    (0x10B80, Nt::None), (0x10BA9, Nt::Numeric), (0x10BB0, Nt::None), (0x10CFA, Nt::Numeric), (0x10D00, Nt::None), (0x10D30, Nt::Decimal),
    (0x10D3A, Nt::None), (0x10E60, Nt::Digit), (0x10E69, Nt::Numeric), (0x10E7F, Nt::None), (0x10F1D, Nt::Numeric), (0x10F27, Nt::None),
    (0x10F51, Nt::Numeric), (0x10F55, Nt::None), (0x10FC5, Nt::Numeric), (0x10FCC, Nt::None), (0x11052, Nt::Digit), (0x1105B, Nt::Numeric),
    (0x11066, Nt::Decimal), (0x11070, Nt::None), (0x110F0, Nt::Decimal), (0x110FA, Nt::None), (0x11136, Nt::Decimal), (0x11140, Nt::None),
    (0x111D0, Nt::Decimal), (0x111DA, Nt::None), (0x111E1, Nt::Numeric), (0x111F5, Nt::None), (0x112F0, Nt::Decimal), (0x112FA, Nt::None),
    (0x11450, Nt::Decimal), (0x1145A, Nt::None), (0x114D0, Nt::Decimal), (0x114DA, Nt::None), (0x11650, Nt::Decimal), (0x1165A, Nt::None),
    (0x116C0, Nt::Decimal), (0x116CA, Nt::None), (0x11730, Nt::Decimal), (0x1173A, Nt::Numeric), (0x1173C, Nt::None), (0x118E0, Nt::Decimal),
    (0x118EA, Nt::Numeric), (0x118F3, Nt::None), (0x11950, Nt::Decimal), (0x1195A, Nt::None), (0x11C50, Nt::Decimal), (0x11C5A, Nt::Numeric),
    (0x11C6D, Nt::None), (0x11D50, Nt::Decimal), (0x11D5A, Nt::None), (0x11DA0, Nt::Decimal), (0x11DAA, Nt::None), (0x11FC0, Nt::Numeric),
    (0x11FD5, Nt::None), (0x12400, Nt::Numeric), (0x1246F, Nt::None), (0x16A60, Nt::Decimal), (0x16A6A, Nt::None), (0x16AC0, Nt::Decimal),
    (0x16ACA, Nt::None), (0x16B50, Nt::Decimal), (0x16B5A, Nt::None), (0x16B5B, Nt::Numeric), (0x16B62, Nt::None), (0x16E80, Nt::Numeric),
    (0x16E97, Nt::None), (0x1D2E0, Nt::Numeric), (0x1D2F4, Nt::None), (0x1D360, Nt::Numeric), (0x1D379, Nt::None), (0x1D7CE, Nt::Decimal),
    (0x1D800, Nt::None), (0x1E140, Nt::Decimal), (0x1E14A, Nt::None), (0x1E2F0, Nt::Decimal), (0x1E2FA, Nt::None), (0x1E8C7, Nt::Numeric),
    (0x1E8D0, Nt::None), (0x1E950, Nt::Decimal), (0x1E95A, Nt::None), (0x1EC71, Nt::Numeric), (0x1ECAC, Nt::None), (0x1ECAD, Nt::Numeric),
    (0x1ECB0, Nt::None), (0x1ECB1, Nt::Numeric), (0x1ECB5, Nt::None), (0x1ED01, Nt::Numeric), (0x1ED2E, Nt::None), (0x1ED2F, Nt::Numeric),
    (0x1ED3E, Nt::None), (0x1F100, Nt::Digit), (0x1F10B, Nt::Numeric), (0x1F10D, Nt::None), (0x1FBF0, Nt::Decimal), (0x1FBFA, Nt::None),
    (0x20001, Nt::Numeric), (0x20002, Nt::None), (0x20064, Nt::Numeric), (0x20065, Nt::None), (0x200E2, Nt::Numeric), (0x200E3, Nt::None),
    (0x20121, Nt::Numeric), (0x20122, Nt::None), (0x2092A, Nt::Numeric), (0x2092B, Nt::None), (0x20983, Nt::Numeric), (0x20984, Nt::None),
    (0x2098C, Nt::Numeric), (0x2098D, Nt::None), (0x2099C, Nt::Numeric), (0x2099D, Nt::None), (0x20AEA, Nt::Numeric), (0x20AEB, Nt::None),
    (0x20AFD, Nt::Numeric), (0x20AFE, Nt::None), (0x20B19, Nt::Numeric), (0x20B1A, Nt::None), (0x22390, Nt::Numeric), (0x22391, Nt::None),
    (0x22998, Nt::Numeric), (0x22999, Nt::None), (0x23B1B, Nt::Numeric), (0x23B1C, Nt::None), (0x2626D, Nt::Numeric), (0x2626E, Nt::None),
    (0x2F890, Nt::Numeric), (0x2F891, Nt::None),
];

pub(crate) static NUMERIC_VALUE: &[(u32, i64, i64)] = &[
    (0x0, 0, 1), (0x31, 1, 1), (0x32, 2, 1), (0x33, 3, 1), (0x34, 4, 1),
    (0x35, 5, 1), (0x36, 6, 1), (0x37, 7, 1), (0x38, 8, 1), (0x39, 9, 1),
    (0x3A, 0, 1), (0xB2, 2, 1), (0xB3, 3, 1), (0xB4, 0, 1), (0xB9, 1, 1),
    (0xBA, 0, 1), (0xBC, 1, 4), (0xBD, 1, 2), (0xBE, 3, 4), (0xBF, 0, 1),
    (0x661, 1, 1), (0x662, 2, 1), (0x663, 3, 1), (0x664, 4, 1), (0x665, 5, 1),
    (0x666, 6, 1), (0x667, 7, 1), (0x668, 8, 1), (0x669, 9, 1), (0x66A, 0, 1),
    (0x6F1, 1, 1), (0x6F2, 2, 1), (0x6F3, 3, 1), (0x6F4, 4, 1), (0x6F5, 5, 1),
    (0x6F6, 6, 1), (0x6F7, 7, 1), (0x6F8, 8, 1), (0x6F9, 9, 1), (0x6FA, 0, 1),
    (0x7C1, 1, 1), (0x7C2, 2, 1), (0x7C3, 3, 1), (0x7C4, 4, 1), (0x7C5, 5, 1),
    (0x7C6, 6, 1), (0x7C7, 7, 1), (0x7C8, 8, 1), (0x7C9, 9, 1), (0x7CA, 0, 1),
    (0x967, 1, 1), (0x968, 2, 1), (0x969, 3, 1), (0x96A, 4, 1), (0x96B, 5, 1),
    (0x96C, 6, 1), (0x96D, 7, 1), (0x96E, 8, 1), (0x96F, 9, 1), (0x970, 0, 1),
    (0x9E7, 1, 1), (0x9E8, 2, 1), (0x9E9, 3, 1), (0x9EA, 4, 1), (0x9EB, 5, 1),
    (0x9EC, 6, 1), (0x9ED, 7, 1), (0x9EE, 8, 1), (0x9EF, 9, 1), (0x9F0, 0, 1),
    (0x9F4, 1, 16), (0x9F5, 1, 8), (0x9F6, 3, 16), (0x9F7, 1, 4), (0x9F8, 3, 4),
    (0x9F9, 16, 1), (0x9FA, 0, 1), (0xA67, 1, 1), (0xA68, 2, 1), (0xA69, 3, 1),
    (0xA6A, 4, 1), (0xA6B, 5, 1), (0xA6C, 6, 1), (0xA6D, 7, 1), (0xA6E, 8, 1),
    (0xA6F, 9, 1), (0xA70, 0, 1), (0xAE7, 1, 1), (0xAE8, 2, 1), (0xAE9, 3, 1),
    (0xAEA, 4, 1), (0xAEB, 5, 1), (0xAEC, 6, 1), (0xAED, 7, 1), (0xAEE, 8, 1),
    (0xAEF, 9, 1), (0xAF0, 0, 1), (0xB67, 1, 1), (0xB68, 2, 1), (0xB69, 3, 1),
    (0xB6A, 4, 1), (0xB6B, 5, 1), (0xB6C, 6, 1), (0xB6D, 7, 1), (0xB6E, 8, 1),
    (0xB6F, 9, 1), (0xB70, 0, 1), (0xB72, 1, 4), (0xB73, 1, 2), (0xB74, 3, 4),
    (0xB75, 1, 16), (0xB76, 1, 8), (0xB77, 3, 16), (0xB78, 0, 1), (0xBE7, 1, 1),
    (0xBE8, 2, 1), (0xBE9, 3, 1), (0xBEA, 4, 1), (0xBEB, 5, 1), (0xBEC, 6, 1),
    (0xBED, 7, 1), (0xBEE, 8, 1), (0xBEF, 9, 1), (0xBF0, 10, 1), (0xBF1, 100, 1),
    (0xBF2, 1000, 1), (0xBF3, 0, 1), (0xC67, 1, 1), (0xC68, 2, 1), (0xC69, 3, 1),
    (0xC6A, 4, 1), (0xC6B, 5, 1), (0xC6C, 6, 1), (0xC6D, 7, 1), (0xC6E, 8, 1),
    (0xC6F, 9, 1), (0xC70, 0, 1), (0xC79, 1, 1), (0xC7A, 2, 1), (0xC7B, 3, 1),
    (0xC7C, 1, 1), (0xC7D, 2, 1), (0xC7E, 3, 1), (0xC7F, 0, 1), (0xCE7, 1, 1),
    (0xCE8, 2, 1), (0xCE9, 3, 1), (0xCEA, 4, 1), (0xCEB, 5, 1), (0xCEC, 6, 1),
    (0xCED, 7, 1), (0xCEE, 8, 1), (0xCEF, 9, 1), (0xCF0, 0, 1), (0xD58, 1, 160),
    (0xD59, 1, 40), (0xD5A, 3, 80), (0xD5B, 1, 20), (0xD5C, 1, 10), (0xD5D, 3, 20),
    (0xD5E, 1, 5), (0xD5F, 0, 1), (0xD67, 1, 1), (0xD68, 2, 1), (0xD69, 3, 1),
    (0xD6A, 4, 1), (0xD6B, 5, 1), (0xD6C, 6, 1), (0xD6D, 7, 1), (0xD6E, 8, 1),
    (0xD6F, 9, 1), (0xD70, 10, 1), (0xD71, 100, 1), (0xD72, 1000, 1), (0xD73, 1, 4),
    (0xD74, 1, 2), (0xD75, 3, 4), (0xD76, 1, 16), (0xD77, 1, 8), (0xD78, 3, 16),
    (0xD79, 0, 1), (0xDE7, 1, 1), (0xDE8, 2, 1), (0xDE9, 3, 1), (0xDEA, 4, 1),
    (0xDEB, 5, 1), (0xDEC, 6, 1), (0xDED, 7, 1), (0xDEE, 8, 1), (0xDEF, 9, 1),
    (0xDF0, 0, 1), (0xE51, 1, 1), (0xE52, 2, 1), (0xE53, 3, 1), (0xE54, 4, 1),
    (0xE55, 5, 1), (0xE56, 6, 1), (0xE57, 7, 1), (0xE58, 8, 1), (0xE59, 9, 1),
    (0xE5A, 0, 1), (0xED1, 1, 1), (0xED2, 2, 1), (0xED3, 3, 1), (0xED4, 4, 1),
    (0xED5, 5, 1), (0xED6, 6, 1), (0xED7, 7, 1), (0xED8, 8, 1), (0xED9, 9, 1),
    (0xEDA, 0, 1), (0xF21, 1, 1), (0xF22, 2, 1), (0xF23, 3, 1), (0xF24, 4, 1),
    (0xF25, 5, 1), (0xF26, 6, 1), (0xF27, 7, 1), (0xF28, 8, 1), (0xF29, 9, 1),
    (0xF2A, 1, 2), (0xF2B, 3, 2), (0xF2C, 5, 2), (0xF2D, 7, 2), (0xF2E, 9, 2),
    (0xF2F, 11, 2), (0xF30, 13, 2), (0xF31, 15, 2), (0xF32, 17, 2), (0xF33, -1, 2),
    (0xF34, 0, 1), (0x1041, 1, 1), (0x1042, 2, 1), (0x1043, 3, 1), (0x1044, 4, 1),
    (0x1045, 5, 1), (0x1046, 6, 1), (0x1047, 7, 1), (0x1048, 8, 1), (0x1049, 9, 1),
    (0x104A, 0, 1), (0x1091, 1, 1), (0x1092, 2, 1), (0x1093, 3, 1), (0x1094, 4, 1),
    (0x1095, 5, 1), (0x1096, 6, 1), (0x1097, 7, 1), (0x1098, 8, 1), (0x1099, 9, 1),
    (0x109A, 0, 1), (0x1369, 1, 1), (0x136A, 2, 1), (0x136B, 3, 1), (0x136C, 4, 1),
    (0x136D, 5, 1), (0x136E, 6, 1), (0x136F, 7, 1), (0x1370, 8, 1), (0x1371, 9, 1),
    (0x1372, 10, 1), (0x1373, 20, 1), (0x1374, 30, 1), (0x1375, 40, 1), (0x1376, 50, 1),
    (0x1377, 60, 1), (0x1378, 70, 1), (0x1379, 80, 1), (0x137A, 90, 1), (0x137B, 100, 1),
    (0x137C, 10000, 1), (0x137D, 0, 1), (0x16EE, 17, 1), (0x16EF, 18, 1), (0x16F0, 19, 1),
    (0x16F1, 0, 1), (0x17E1, 1, 1), (0x17E2, 2, 1), (0x17E3, 3, 1), (0x17E4, 4, 1),
    (0x17E5, 5, 1), (0x17E6, 6, 1), (0x17E7, 7, 1), (0x17E8, 8, 1), (0x17E9, 9, 1),
    (0x17EA, 0, 1), (0x17F1, 1, 1), (0x17F2, 2, 1), (0x17F3, 3, 1), (0x17F4, 4, 1),
    (0x17F5, 5, 1), (0x17F6, 6, 1), (0x17F7, 7, 1), (0x17F8, 8, 1), (0x17F9, 9, 1),
    (0x17FA, 0, 1), (0x1811, 1, 1), (0x1812, 2, 1), (0x1813, 3, 1), (0x1814, 4, 1),
    (0x1815, 5, 1), (0x1816, 6, 1), (0x1817, 7, 1), (0x1818, 8, 1), (0x1819, 9, 1),
    (0x181A, 0, 1), (0x1947, 1, 1), (0x1948, 2, 1), (0x1949, 3, 1), (0x194A, 4, 1),
    (0x194B, 5, 1), (0x194C, 6, 1), (0x194D, 7, 1), (0x194E, 8, 1), (0x194F, 9, 1),
    (0x1950, 0, 1), (0x19D1, 1, 1), (0x19D2, 2, 1), (0x19D3, 3, 1), (0x19D4, 4, 1),
    (0x19D5, 5, 1), (0x19D6, 6, 1), (0x19D7, 7, 1), (0x19D8, 8, 1), (0x19D9, 9, 1),
    (0x19DA, 1, 1), (0x19DB, 0, 1), (0x1A81, 1, 1), (0x1A82, 2, 1), (0x1A83, 3, 1),
    (0x1A84, 4, 1), (0x1A85, 5, 1), (0x1A86, 6, 1), (0x1A87, 7, 1), (0x1A88, 8, 1),
    (0x1A89, 9, 1), (0x1A8A, 0, 1), (0x1A91, 1, 1), (0x1A92, 2, 1), (0x1A93, 3, 1),
    (0x1A94, 4, 1), (0x1A95, 5, 1), (0x1A96, 6, 1), (0x1A97, 7, 1), (0x1A98, 8, 1),
    (0x1A99, 9, 1), (0x1A9A, 0, 1), (0x1B51, 1, 1), (0x1B52, 2, 1), (0x1B53, 3, 1),
    (0x1B54, 4, 1), (0x1B55, 5, 1), (0x1B56, 6, 1), (0x1B57, 7, 1), (0x1B58, 8, 1),
    (0x1B59, 9, 1), (0x1B5A, 0, 1), (0x1BB1, 1, 1), (0x1BB2, 2, 1), (0x1BB3, 3, 1),
    (0x1BB4, 4, 1), (0x1BB5, 5, 1), (0x1BB6, 6, 1), (0x1BB7, 7, 1), (0x1BB8, 8, 1),
    (0x1BB9, 9, 1), (0x1BBA, 0, 1), (0x1C41, 1, 1), (0x1C42, 2, 1), (0x1C43, 3, 1),
    (0x1C44, 4, 1), (0x1C45, 5, 1), (0x1C46, 6, 1), (0x1C47, 7, 1), (0x1C48, 8, 1),
    (0x1C49, 9, 1), (0x1C4A, 0, 1), (0x1C51, 1, 1), (0x1C52, 2, 1), (0x1C53, 3, 1),
    (0x1C54, 4, 1), (0x1C55, 5, 1), (0x1C56, 6, 1), (0x1C57, 7, 1), (0x1C58, 8, 1),
    (0x1C59, 9, 1), (0x1C5A, 0, 1), (0x2074, 4, 1), (0x2075, 5, 1), (0x2076, 6, 1),
    (0x2077, 7, 1), (0x2078, 8, 1), (0x2079, 9, 1), (0x207A, 0, 1), (0x2081, 1, 1),
    (0x2082, 2, 1), (0x2083, 3, 1), (0x2084, 4, 1), (0x2085, 5, 1), (0x2086, 6, 1),
    (0x2087, 7, 1), (0x2088, 8, 1), (0x2089, 9, 1), (0x208A, 0, 1), (0x2150, 1, 7),
    (0x2151, 1, 9), (0x2152, 1, 10), (0x2153, 1, 3), (0x2154, 2, 3), (0x2155, 1, 5),
    (0x2156, 2, 5), (0x2157, 3, 5), (0x2158, 4, 5), (0x2159, 1, 6), (0x215A, 5, 6),
    (0x215B, 1, 8), (0x215C, 3, 8), (0x215D, 5, 8), (0x215E, 7, 8), (0x215F, 1, 1),
    (0x2161, 2, 1), (0x2162, 3, 1), (0x2163, 4, 1), (0x2164, 5, 1), (0x2165, 6, 1),
    (0x2166, 7, 1), (0x2167, 8, 1), (0x2168, 9, 1), (0x2169, 10, 1), (0x216A, 11, 1),
    (0x216B, 12, 1), (0x216C, 50, 1), (0x216D, 100, 1), (0x216E, 500, 1), (0x216F, 1000, 1),
    (0x2170, 1, 1), (0x2171, 2, 1), (0x2172, 3, 1), (0x2173, 4, 1), (0x2174, 5, 1),
    (0x2175, 6, 1), (0x2176, 7, 1), (0x2177, 8, 1), (0x2178, 9, 1), (0x2179, 10, 1),
    (0x217A, 11, 1), (0x217B, 12, 1), (0x217C, 50, 1), (0x217D, 100, 1), (0x217E, 500, 1),
    (0x217F, 1000, 1), (0x2181, 5000, 1), (0x2182, 10000, 1), (0x2183, 0, 1), (0x2185, 6, 1),
    (0x2186, 50, 1), (0x2187, 50000, 1), (0x2188, 100000, 1), (0x2189, 0, 1), (0x2460, 1, 1),
    (0x2461, 2, 1), (0x2462, 3, 1), (0x2463, 4, 1), (0x2464, 5, 1), (0x2465, 6, 1),
    (0x2466, 7, 1), (0x2467, 8, 1), (0x2468, 9, 1), (0x2469, 10, 1), (0x246A, 11, 1),
    (0x246B, 12, 1), (0x246C, 13, 1), (0x246D, 14, 1), (0x246E, 15, 1), (0x246F, 16, 1),
    (0x2470, 17, 1), (0x2471, 18, 1), (0x2472, 19, 1), (0x2473, 20, 1), (0x2474, 1, 1),
    (0x2475, 2, 1), (0x2476, 3, 1), (0x2477, 4, 1), (0x2478, 5, 1), (0x2479, 6, 1),
    (0x247A, 7, 1), (0x247B, 8, 1), (0x247C, 9, 1), (0x247D, 10, 1), (0x247E, 11, 1),
    (0x247F, 12, 1), (0x2480, 13, 1), (0x2481, 14, 1), (0x2482, 15, 1), (0x2483, 16, 1),
    (0x2484, 17, 1), (0x2485, 18, 1), (0x2486, 19, 1), (0x2487, 20, 1), (0x2488, 1, 1),
    (0x2489, 2, 1), (0x248A, 3, 1), (0x248B, 4, 1), (0x248C, 5, 1), (0x248D, 6, 1),
    (0x248E, 7, 1), (0x248F, 8, 1), (0x2490, 9, 1), (0x2491, 10, 1), (0x2492, 11, 1),
    (0x2493, 12, 1), (0x2494, 13, 1), (0x2495, 14, 1), (0x2496, 15, 1), (0x2497, 16, 1),
    (0x2498, 17, 1), (0x2499, 18, 1), (0x249A, 19, 1), (0x249B, 20, 1), (0x249C, 0, 1),
    (0x24EB, 11, 1), (0x24EC, 12, 1), (0x24ED, 13, 1), (0x24EE, 14, 1), (0x24EF, 15, 1),
    (0x24F0, 16, 1), (0x24F1, 17, 1), (0x24F2, 18, 1), (0x24F3, 19, 1), (0x24F4, 20, 1),
    (0x24F5, 1, 1), (0x24F6, 2, 1), (0x24F7, 3, 1), (0x24F8, 4, 1), (0x24F9, 5, 1),
    (0x24FA, 6, 1), (0x24FB, 7, 1), (0x24FC, 8, 1), (0x24FD, 9, 1), (0x24FE, 10, 1),
    (0x24FF, 0, 1), (0x2776, 1, 1), (0x2777, 2, 1), (0x2778, 3, 1), (0x2779, 4, 1),
    (0x277A, 5, 1), (0x277B, 6, 1), (0x277C, 7, 1), (0x277D, 8, 1), (0x277E, 9, 1),
    (0x277F, 10, 1), (0x2780, 1, 1), (0x2781, 2, 1), (0x2782, 3, 1), (0x2783, 4, 1),
    (0x2784, 5, 1), (0x2785, 6, 1), (0x2786, 7, 1), (0x2787, 8, 1), (0x2788, 9, 1),
    (0x2789, 10, 1), (0x278A, 1, 1), (0x278B, 2, 1), (0x278C, 3, 1), (0x278D, 4, 1),
    (0x278E, 5, 1), (0x278F, 6, 1), (0x2790, 7, 1), (0x2791, 8, 1), (0x2792, 9, 1),
    (0x2793, 10, 1), (0x2794, 0, 1), (0x2CFD, 1, 2), (0x2CFE, 0, 1), (0x3021, 1, 1),
    (0x3022, 2, 1), (0x3023, 3, 1), (0x3024, 4, 1), (0x3025, 5, 1), (0x3026, 6, 1),
    (0x3027, 7, 1), (0x3028, 8, 1), (0x3029, 9, 1), (0x302A, 0, 1), (0x3038, 10, 1),
    (0x3039, 20, 1), (0x303A, 30, 1), (0x303B, 0, 1), (0x3192, 1, 1), (0x3193, 2, 1),
    (0x3194, 3, 1), (0x3195, 4, 1), (0x3196, 0, 1), (0x3220, 1, 1), (0x3221, 2, 1),
    (0x3222, 3, 1), (0x3223, 4, 1), (0x3224, 5, 1), (0x3225, 6, 1), (0x3226, 7, 1),
    (0x3227, 8, 1), (0x3228, 9, 1), (0x3229, 10, 1), (0x322A, 0, 1), (0x3248, 10, 1),
    (0x3249, 20, 1), (0x324A, 30, 1), (0x324B, 40, 1), (0x324C, 50, 1), (0x324D, 60, 1),
    (0x324E, 70, 1), (0x324F, 80, 1), (0x3250, 0, 1), (0x3251, 21, 1), (0x3252, 22, 1),
    (0x3253, 23, 1), (0x3254, 24, 1), (0x3255, 25, 1), (0x3256, 26, 1), (0x3257, 27, 1),
    (0x3258, 28, 1), (0x3259, 29, 1), (0x325A, 30, 1), (0x325B, 31, 1), (0x325C, 32, 1),
    (0x325D, 33, 1), (0x325E, 34, 1), (0x325F, 35, 1), (0x3260, 0, 1), (0x3280, 1, 1),
    (0x3281, 2, 1), (0x3282, 3, 1), (0x3283, 4, 1), (0x3284, 5, 1), (0x3285, 6, 1),
    (0x3286, 7, 1), (0x3287, 8, 1), (0x3288, 9, 1), (0x3289, 10, 1), (0x328A, 0, 1),
    (0x32B1, 36, 1), (0x32B2, 37, 1), (0x32B3, 38, 1), (0x32B4, 39, 1), (0x32B5, 40, 1),
    (0x32B6, 41, 1), (0x32B7, 42, 1), (0x32B8, 43, 1), (0x32B9, 44, 1), (0x32BA, 45, 1),
    (0x32BB, 46, 1), (0x32BC, 47, 1), (0x32BD, 48, 1), (0x32BE, 49, 1), (0x32BF, 50, 1),
    (0x32C0, 0, 1), (0x3405, 5, 1), (0x3406, 0, 1), (0x3483, 2, 1), (0x3484, 0, 1),
    (0x382A, 5, 1), (0x382B, 0, 1), (0x3B4D, 7, 1), (0x3B4E, 0, 1), (0x4E00, 1, 1),
    (0x4E01, 0, 1), (0x4E03, 7, 1), (0x4E04, 0, 1), (0x4E07, 10000, 1), (0x4E08, 0, 1),
    (0x4E09, 3, 1), (0x4E0A, 0, 1), (0x4E5D, 9, 1), (0x4E5E, 0, 1), (0x4E8C, 2, 1),
    (0x4E8D, 0, 1), (0x4E94, 5, 1), (0x4E95, 0, 1), (0x4E96, 4, 1), (0x4E97, 0, 1),
    (0x4EBF, 100000000, 1), (0x4EC0, 10, 1), (0x4EC1, 0, 1), (0x4EDF, 1000, 1), (0x4EE0, 0, 1),
    (0x4EE8, 3, 1), (0x4EE9, 0, 1), (0x4F0D, 5, 1), (0x4F0E, 0, 1), (0x4F70, 100, 1),
    (0x4F71, 0, 1), (0x5104, 100000000, 1), (0x5105, 0, 1), (0x5146, 1000000000000, 1), (0x5147, 0, 1),
    (0x5169, 2, 1), (0x516A, 0, 1), (0x516B, 8, 1), (0x516C, 0, 1), (0x516D, 6, 1),
    (0x516E, 0, 1), (0x5341, 10, 1), (0x5342, 0, 1), (0x5343, 1000, 1), (0x5344, 20, 1),
    (0x5345, 30, 1), (0x5346, 0, 1), (0x534C, 40, 1), (0x534D, 0, 1), (0x53C1, 3, 1),
    (0x53C5, 0, 1), (0x56DB, 4, 1), (0x56DC, 0, 1), (0x58F1, 1, 1), (0x58F2, 0, 1),
    (0x58F9, 1, 1), (0x58FA, 0, 1), (0x5E7A, 1, 1), (0x5E7B, 0, 1), (0x5EFE, 9, 1),
    (0x5EFF, 20, 1), (0x5F00, 0, 1), (0x5F0C, 1, 1), (0x5F0D, 2, 1), (0x5F0E, 3, 1),
    (0x5F0F, 0, 1), (0x5F10, 2, 1), (0x5F11, 0, 1), (0x62FE, 10, 1), (0x62FF, 0, 1),
    (0x634C, 8, 1), (0x634D, 0, 1), (0x67D2, 7, 1), (0x67D3, 0, 1), (0x6F06, 7, 1),
    (0x6F07, 0, 1), (0x7396, 9, 1), (0x7397, 0, 1), (0x767E, 100, 1), (0x767F, 0, 1),
    (0x8086, 4, 1), (0x8087, 0, 1), (0x842C, 10000, 1), (0x842D, 0, 1), (0x8CAE, 2, 1),
    (0x8CAF, 0, 1), (0x8CB3, 2, 1), (0x8CB4, 0, 1), (0x8D30, 2, 1), (0x8D31, 0, 1),
    (0x9621, 1000, 1), (0x9622, 0, 1), (0x9646, 6, 1), (0x9647, 0, 1), (0x964C, 100, 1),
    (0x964D, 0, 1), (0x9678, 6, 1), (0x9679, 0, 1), (0xA621, 1, 1), (0xA622, 2, 1),
    (0xA623, 3, 1), (0xA624, 4, 1), (0xA625, 5, 1), (0xA626, 6, 1), (0xA627, 7, 1),
    (0xA628, 8, 1), (0xA629, 9, 1), (0xA62A, 0, 1), (0xA6E6, 1, 1), (0xA6E7, 2, 1),
    (0xA6E8, 3, 1), (0xA6E9, 4, 1), (0xA6EA, 5, 1), (0xA6EB, 6, 1), (0xA6EC, 7, 1),
    (0xA6ED, 8, 1), (0xA6EE, 9, 1), (0xA6EF, 0, 1), (0xA830, 1, 4), (0xA831, 1, 2),
    (0xA832, 3, 4), (0xA833, 1, 16), (0xA834, 1, 8), (0xA835, 3, 16), (0xA836, 0, 1),
    (0xA8D1, 1, 1), (0xA8D2, 2, 1), (0xA8D3, 3, 1), (0xA8D4, 4, 1), (0xA8D5, 5, 1),
    (0xA8D6, 6, 1), (0xA8D7, 7, 1), (0xA8D8, 8, 1), (0xA8D9, 9, 1), (0xA8DA, 0, 1),
    (0xA901, 1, 1), (0xA902, 2, 1), (0xA903, 3, 1), (0xA904, 4, 1), (0xA905, 5, 1),
    (0xA906, 6, 1), (0xA907, 7, 1), (0xA908, 8, 1), (0xA909, 9, 1), (0xA90A, 0, 1),
    (0xA9D1, 1, 1), (0xA9D2, 2, 1), (0xA9D3, 3, 1), (0xA9D4, 4, 1), (0xA9D5, 5, 1),
    (0xA9D6, 6, 1), (0xA9D7, 7, 1), (0xA9D8, 8, 1), (0xA9D9, 9, 1), (0xA9DA, 0, 1),
    (0xA9F1, 1, 1), (0xA9F2, 2, 1), (0xA9F3, 3, 1), (0xA9F4, 4, 1), (0xA9F5, 5, 1),
    (0xA9F6, 6, 1), (0xA9F7, 7, 1), (0xA9F8, 8, 1), (0xA9F9, 9, 1), (0xA9FA, 0, 1),
    (0xAA51, 1, 1), (0xAA52, 2, 1), (0xAA53, 3, 1), (0xAA54, 4, 1), (0xAA55, 5, 1),
    (0xAA56, 6, 1), (0xAA57, 7, 1), (0xAA58, 8, 1), (0xAA59, 9, 1), (0xAA5A, 0, 1),
    (0xABF1, 1, 1), (0xABF2, 2, 1), (0xABF3, 3, 1), (0xABF4, 4, 1), (0xABF5, 5, 1),
    (0xABF6, 6, 1), (0xABF7, 7, 1), (0xABF8, 8, 1), (0xABF9, 9, 1), (0xABFA, 0, 1),
    (0xF96B, 3, 1), (0xF96C, 0, 1), (0xF973, 10, 1), (0xF974, 0, 1), (0xF978, 2, 1),
    (0xF979, 0, 1), (0xF9D1, 6, 1), (0xF9D2, 0, 1), (0xF9D3, 6, 1), (0xF9D4, 0, 1),
    (0xF9FD, 10, 1), (0xF9FE, 0, 1), (0xFF11, 1, 1), (0xFF12, 2, 1), (0xFF13, 3, 1),
    (0xFF14, 4, 1), (0xFF15, 5, 1), (0xFF16, 6, 1), (0xFF17, 7, 1), (0xFF18, 8, 1),
    (0xFF19, 9, 1), (0xFF1A, 0, 1), (0x10107, 1, 1), (0x10108, 2, 1), (0x10109, 3, 1),
    (0x1010A, 4, 1), (0x1010B, 5, 1), (0x1010C, 6, 1), (0x1010D, 7, 1), (0x1010E, 8, 1),
    (0x1010F, 9, 1), (0x10110, 10, 1), (0x10111, 20, 1), (0x10112, 30, 1), (0x10113, 40, 1),
    (0x10114, 50, 1), (0x10115, 60, 1), (0x10116, 70, 1), (0x10117, 80, 1), (0x10118, 90, 1),
    (0x10119, 100, 1), (0x1011A, 200, 1), (0x1011B, 300, 1), (0x1011C, 400, 1), (0x1011D, 500, 1),
    (0x1011E, 600, 1), (0x1011F, 700, 1), (0x10120, 800, 1), (0x10121, 900, 1), (0x10122, 1000, 1),
    (0x10123, 2000, 1), (0x10124, 3000, 1), (0x10125, 4000, 1), (0x10126, 5000, 1), (0x10127, 6000, 1),
    (0x10128, 7000, 1), (0x10129, 8000, 1), (0x1012A, 9000, 1), (0x1012B, 10000, 1), (0x1012C, 20000, 1),
    (0x1012D, 30000, 1), (0x1012E, 40000, 1), (0x1012F, 50000, 1), (0x10130, 60000, 1), (0x10131, 70000, 1),
    (0x10132, 80000, 1), (0x10133, 90000, 1), (0x10134, 0, 1), (0x10140, 1, 4), (0x10141, 1, 2),
    (0x10142, 1, 1), (0x10143, 5, 1), (0x10144, 50, 1), (0x10145, 500, 1), (0x10146, 5000, 1),
    (0x10147, 50000, 1), (0x10148, 5, 1), (0x10149, 10, 1), (0x1014A, 50, 1), (0x1014B, 100, 1),
    (0x1014C, 500, 1), (0x1014D, 1000, 1), (0x1014E, 5000, 1), (0x1014F, 5, 1), (0x10150, 10, 1),
    (0x10151, 50, 1), (0x10152, 100, 1), (0x10153, 500, 1), (0x10154, 1000, 1), (0x10155, 10000, 1),
    (0x10156, 50000, 1), (0x10157, 10, 1), (0x10158, 1, 1), (0x1015B, 2, 1), (0x1015F, 5, 1),
    (0x10160, 10, 1), (0x10165, 30, 1), (0x10166, 50, 1), (0x1016A, 100, 1), (0x1016B, 300, 1),
    (0x1016C, 500, 1), (0x10171, 1000, 1), (0x10172, 5000, 1), (0x10173, 5, 1), (0x10174, 50, 1),
    (0x10175, 1, 2), (0x10177, 2, 3), (0x10178, 3, 4), (0x10179, 0, 1), (0x1018B, 1, 4),
    (0x1018C, 0, 1), (0x102E1, 1, 1), (0x102E2, 2, 1), (0x102E3, 3, 1), (0x102E4, 4, 1),
    (0x102E5, 5, 1), (0x102E6, 6, 1), (0x102E7, 7, 1), (0x102E8, 8, 1), (0x102E9, 9, 1),
    (0x102EA, 10, 1), (0x102EB, 20, 1), (0x102EC, 30, 1), (0x102ED, 40, 1), (0x102EE, 50, 1),
    (0x102EF, 60, 1), (0x102F0, 70, 1), (0x102F1, 80, 1), (0x102F2, 90, 1), (0x102F3, 100, 1),
    (0x102F4, 200, 1), (0x102F5, 300, 1), (0x102F6, 400, 1), (0x102F7, 500, 1), (0x102F8, 600, 1),
    (0x102F9, 700, 1), (0x102FA, 800, 1), (0x102FB, 900, 1), (0x102FC, 0, 1), (0x10320, 1, 1),
    (0x10321, 5, 1), (0x10322, 10, 1), (0x10323, 50, 1), (0x10324, 0, 1), (0x10341, 90, 1),
    (0x10342, 0, 1), (0x1034A, 900, 1), (0x1034B, 0, 1), (0x103D1, 1, 1), (0x103D2, 2, 1),
    (0x103D3, 10, 1), (0x103D4, 20, 1), (0x103D5, 100, 1), (0x103D6, 0, 1), (0x104A1, 1, 1),
    (0x104A2, 2, 1), (0x104A3, 3, 1), (0x104A4, 4, 1), (0x104A5, 5, 1), (0x104A6, 6, 1),
    (0x104A7, 7, 1), (0x104A8, 8, 1), (0x104A9, 9, 1), (0x104AA, 0, 1), (0x10858, 1, 1),
    (0x10859, 2, 1), (0x1085A, 3, 1), (0x1085B, 10, 1), (0x1085C, 20, 1), (0x1085D, 100, 1),
    (0x1085E, 1000, 1), (0x1085F, 10000, 1), (0x10860, 0, 1), (0x10879, 1, 1), (0x1087A, 2, 1),
    (0x1087B, 3, 1), (0x1087C, 4, 1), (0x1087D, 5, 1), (0x1087E, 10, 1), (0x1087F, 20, 1),
    (0x10880, 0, 1), (0x108A7, 1, 1), (0x108A8, 2, 1), (0x108A9, 3, 1), (0x108AA, 4, 1),
    (0x108AC, 5, 1), (0x108AD, 10, 1), (0x108AE, 20, 1), (0x108AF, 100, 1), (0x108B0, 0, 1),
    (0x108FB, 1, 1), (0x108FC, 5, 1), (0x108FD, 10, 1), (0x108FE, 20, 1), (0x108FF, 100, 1),
    (0x10900, 0, 1), (0x10916, 1, 1), (0x10917, 10, 1), (0x10918, 20, 1), (0x10919, 100, 1),
    (0x1091A, 2, 1), (0x1091B, 3, 1), (0x1091C, 0, 1), (0x109BC, 11, 12), (0x109BD, 1, 2),
    (0x109BE, 0, 1), (0x109C0, 1, 1), (0x109C1, 2, 1), (0x109C2, 3, 1), (0x109C3, 4, 1),
    (0x109C4, 5, 1), (0x109C5, 6, 1), (0x109C6, 7, 1), (0x109C7, 8, 1), (0x109C8, 9, 1),
    (0x109C9, 10, 1), (0x109CA, 20, 1), (0x109CB, 30, 1), (0x109CC, 40, 1), (0x109CD, 50, 1),
    (0x109CE, 60, 1), (0x109CF, 70, 1), (0x109D0, 0, 1), (0x109D2, 100, 1), (0x109D3, 200, 1),
    (0x109D4, 300, 1), (0x109D5, 400, 1), (0x109D6, 500, 1), (0x109D7, 600, 1), (0x109D8, 700, 1),
    (0x109D9, 800, 1), (0x109DA, 900, 1), (0x109DB, 1000, 1), (0x109DC, 2000, 1), (0x109DD, 3000, 1),
    (0x109DE, 4000, 1), (0x109DF, 5000, 1), (0x109E0, 6000, 1), (0x109E1, 7000, 1), (0x109E2, 8000, 1),
    (0x109E3, 9000, 1), (0x109E4, 10000, 1), (0x109E5, 20000, 1), (0x109E6, 30000, 1), (0x109E7, 40000, 1),
    (0x109E8, 50000, 1), (0x109E9, 60000, 1), (0x109EA, 70000, 1), (0x109EB, 80000, 1), (0x109EC, 90000, 1),
    (0x109ED, 100000, 1), (0x109EE, 200000, 1), (0x109EF, 300000, 1), (0x109F0, 400000, 1), (0x109F1, 500000, 1),
    (0x109F2, 600000, 1), (0x109F3, 700000, 1), (0x109F4, 800000, 1), (0x109F5, 900000, 1), (0x109F6, 1, 12),
    (0x109F7, 1, 6), (0x109F8, 1, 4), (0x109F9, 1, 3), (0x109FA, 5, 12), (0x109FB, 1, 2),
    (0x109FC, 7, 12), (0x109FD, 2, 3), (0x109FE, 3, 4), (0x109FF, 5, 6), (0x10A00, 0, 1),
    (0x10A40, 1, 1), (0x10A41, 2, 1), (0x10A42, 3, 1), (0x10A43, 4, 1), (0x10A44, 10, 1),
    (0x10A45, 20, 1), (0x10A46, 100, 1), (0x10A47, 1000, 1), (0x10A48, 1, 2), (0x10A49, 0, 1),
    (0x10A7D, 1, 1), (0x10A7E, 50, 1), (0x10A7F, 0, 1), (0x10A9D, 1, 1), (0x10A9E, 10, 1),
    (0x10A9F, 20, 1), (0x10AA0, 0, 1), (0x10AEB, 1, 1), (0x10AEC, 5, 1), (0x10AED, 10, 1),
    (0x10AEE, 20, 1), (0x10AEF, 100, 1), (0x10AF0, 0, 1), (0x10B58, 1, 1), (0x10B59, 2, 1),
    (0x10B5A, 3, 1), (0x10B5B, 4, 1), (0x10B5C, 10, 1), (0x10B5D, 20, 1), (0x10B5E, 100, 1),
    (0x10B5F, 1000, 1), (0x10B60, 0, 1), (0x10B78, 1, 1), (0x10B79, 2, 1), (0x10B7A, 3, 1),
    (0x10B7B, 4, 1), (0x10B7C, 10, 1), (0x10B7D, 20, 1), (0x10B7E, 100, 1), (0x10B7F, 1000, 1),
    (0x10B80, 0, 1), (0x10BA9, 1, 1), (0x10BAA, 2, 1), (0x10BAB, 3, 1), (0x10BAC, 4, 1),
    (0x10BAD, 10, 1), (0x10BAE, 20, 1), (0x10BAF, 100, 1), (0x10BB0, 0, 1), (0x10CFA, 1, 1),
    (0x10CFB, 5, 1), (0x10CFC, 10, 1), (0x10CFD, 50, 1), (0x10CFE, 100, 1), (0x10CFF, 1000, 1),
    (0x10D00, 0, 1), (0x10D31, 1, 1), (0x10D32, 2, 1), (0x10D33, 3, 1), (0x10D34, 4, 1),
    (0x10D35, 5, 1), (0x10D36, 6, 1), (0x10D37, 7, 1), (0x10D38, 8, 1), (0x10D39, 9, 1),
    (0x10D3A, 0, 1), (0x10E60, 1, 1), (0x10E61, 2, 1), (0x10E62, 3, 1), (0x10E63, 4, 1),
    (0x10E64, 5, 1), (0x10E65, 6, 1), (0x10E66, 7, 1), (0x10E67, 8, 1), (0x10E68, 9, 1),
    (0x10E69, 10, 1), (0x10E6A, 20, 1), (0x10E6B, 30, 1), (0x10E6C, 40, 1), (0x10E6D, 50, 1),
    (0x10E6E, 60, 1), (0x10E6F, 70, 1), (0x10E70, 80, 1), (0x10E71, 90, 1), (0x10E72, 100, 1),
    (0x10E73, 200, 1), (0x10E74, 300, 1), (0x10E75, 400, 1), (0x10E76, 500, 1), (0x10E77, 600, 1),
    (0x10E78, 700, 1), (0x10E79, 800, 1), (0x10E7A, 900, 1), (0x10E7B, 1, 2), (0x10E7C, 1, 4),
    (0x10E7D, 1, 3), (0x10E7E, 2, 3), (0x10E7F, 0, 1), (0x10F1D, 1, 1), (0x10F1E, 2, 1),
    (0x10F1F, 3, 1), (0x10F20, 4, 1), (0x10F21, 5, 1), (0x10F22, 10, 1), (0x10F23, 20, 1),
    (0x10F24, 30, 1), (0x10F25, 100, 1), (0x10F26, 1, 2), (0x10F27, 0, 1), (0x10F51, 1, 1),
    (0x10F52, 10, 1), (0x10F53, 20, 1), (0x10F54, 100, 1), (0x10F55, 0, 1), (0x10FC5, 1, 1),
    (0x10FC6, 2, 1), (0x10FC7, 3, 1), (0x10FC8, 4, 1), (0x10FC9, 10, 1), (0x10FCA, 20, 1),
    (0x10FCB, 100, 1), (0x10FCC, 0, 1), (0x11052, 1, 1), (0x11053, 2, 1), (0x11054, 3, 1),
    (0x11055, 4, 1), (0x11056, 5, 1), (0x11057, 6, 1), (0x11058, 7, 1), (0x11059, 8, 1),
    (0x1105A, 9, 1), (0x1105B, 10, 1), (0x1105C, 20, 1), (0x1105D, 30, 1), (0x1105E, 40, 1),
    (0x1105F, 50, 1), (0x11060, 60, 1), (0x11061, 70, 1), (0x11062, 80, 1), (0x11063, 90, 1),
    (0x11064, 100, 1), (0x11065, 1000, 1), (0x11066, 0, 1), (0x11067, 1, 1), (0x11068, 2, 1),
    (0x11069, 3, 1), (0x1106A, 4, 1), (0x1106B, 5, 1), (0x1106C, 6, 1), (0x1106D, 7, 1),
    (0x1106E, 8, 1), (0x1106F, 9, 1), (0x11070, 0, 1), (0x110F1, 1, 1), (0x110F2, 2, 1),
    (0x110F3, 3, 1), (0x110F4, 4, 1), (0x110F5, 5, 1), (0x110F6, 6, 1), (0x110F7, 7, 1),
    (0x110F8, 8, 1), (0x110F9, 9, 1), (0x110FA, 0, 1), (0x11137, 1, 1), (0x11138, 2, 1),
    (0x11139, 3, 1), (0x1113A, 4, 1), (0x1113B, 5, 1), (0x1113C, 6, 1), (0x1113D, 7, 1),
    (0x1113E, 8, 1), (0x1113F, 9, 1), (0x11140, 0, 1), (0x111D1, 1, 1), (0x111D2, 2, 1),
    (0x111D3, 3, 1), (0x111D4, 4, 1), (0x111D5, 5, 1), (0x111D6, 6, 1), (0x111D7, 7, 1),
    (0x111D8, 8, 1), (0x111D9, 9, 1), (0x111DA, 0, 1), (0x111E1, 1, 1), (0x111E2, 2, 1),
    (0x111E3, 3, 1), (0x111E4, 4, 1), (0x111E5, 5, 1), (0x111E6, 6, 1), (0x111E7, 7, 1),
    (0x111E8, 8, 1), (0x111E9, 9, 1), (0x111EA, 10, 1), (0x111EB, 20, 1), (0x111EC, 30, 1),
    (0x111ED, 40, 1), (0x111EE, 50, 1), (0x111EF, 60, 1), (0x111F0, 70, 1), (0x111F1, 80, 1),
    (0x111F2, 90, 1), (0x111F3, 100, 1), (0x111F4, 1000, 1), (0x111F5, 0, 1), (0x112F1, 1, 1),
    (0x112F2, 2, 1), (0x112F3, 3, 1), (0x112F4, 4, 1), (0x112F5, 5, 1), (0x112F6, 6, 1),
    (0x112F7, 7, 1), (0x112F8, 8, 1), (0x112F9, 9, 1), (0x112FA, 0, 1), (0x11451, 1, 1),
    (0x11452, 2, 1), (0x11453, 3, 1), (0x11454, 4, 1), (0x11455, 5, 1), (0x11456, 6, 1),
    (0x11457, 7, 1), (0x11458, 8, 1), (0x11459, 9, 1), (0x1145A, 0, 1), (0x114D1, 1, 1),
    (0x114D2, 2, 1), (0x114D3, 3, 1), (0x114D4, 4, 1), (0x114D5, 5, 1), (0x114D6, 6, 1),
    (0x114D7, 7, 1), (0x114D8, 8, 1), (0x114D9, 9, 1), (0x114DA, 0, 1), (0x11651, 1, 1),
    (0x11652, 2, 1), (0x11653, 3, 1), (0x11654, 4, 1), (0x11655, 5, 1), (0x11656, 6, 1),
    (0x11657, 7, 1), (0x11658, 8, 1), (0x11659, 9, 1), (0x1165A, 0, 1), (0x116C1, 1, 1),
    (0x116C2, 2, 1), (0x116C3, 3, 1), (0x116C4, 4, 1), (0x116C5, 5, 1), (0x116C6, 6, 1),
    (0x116C7, 7, 1), (0x116C8, 8, 1), (0x116C9, 9, 1), (0x116CA, 0, 1), (0x11731, 1, 1),
    (0x11732, 2, 1), (0x11733, 3, 1), (0x11734, 4, 1), (0x11735, 5, 1), (0x11736, 6, 1),
    (0x11737, 7, 1), (0x11738, 8, 1), (0x11739, 9, 1), (0x1173A, 10, 1), (0x1173B, 20, 1),
    (0x1173C, 0, 1), (0x118E1, 1, 1), (0x118E2, 2, 1), (0x118E3, 3, 1), (0x118E4, 4, 1),
    (0x118E5, 5, 1), (0x118E6, 6, 1), (0x118E7, 7, 1), (0x118E8, 8, 1), (0x118E9, 9, 1),
    (0x118EA, 10, 1), (0x118EB, 20, 1), (0x118EC, 30, 1), (0x118ED, 40, 1), (0x118EE, 50, 1),
    (0x118EF, 60, 1), (0x118F0, 70, 1), (0x118F1, 80, 1), (0x118F2, 90, 1), (0x118F3, 0, 1),
    (0x11951, 1, 1), (0x11952, 2, 1), (0x11953, 3, 1), (0x11954, 4, 1), (0x11955, 5, 1),
    (0x11956, 6, 1), (0x11957, 7, 1), (0x11958, 8, 1), (0x11959, 9, 1), (0x1195A, 0, 1),
    (0x11C51, 1, 1), (0x11C52, 2, 1), (0x11C53, 3, 1), (0x11C54, 4, 1), (0x11C55, 5, 1),
    (0x11C56, 6, 1), (0x11C57, 7, 1), (0x11C58, 8, 1), (0x11C59, 9, 1), (0x11C5A, 1, 1),
    (0x11C5B, 2, 1), (0x11C5C, 3, 1), (0x11C5D, 4, 1), (0x11C5E, 5, 1), (0x11C5F, 6, 1),
    (0x11C60, 7, 1), (0x11C61, 8, 1), (0x11C62, 9, 1), (0x11C63, 10, 1), (0x11C64, 20, 1),
    (0x11C65, 30, 1), (0x11C66, 40, 1), (0x11C67, 50, 1), (0x11C68, 60, 1), (0x11C69, 70, 1),
    (0x11C6A, 80, 1), (0x11C6B, 90, 1), (0x11C6C, 100, 1), (0x11C6D, 0, 1), (0x11D51, 1, 1),
    (0x11D52, 2, 1), (0x11D53, 3, 1), (0x11D54, 4, 1), (0x11D55, 5, 1), (0x11D56, 6, 1),
    (0x11D57, 7, 1), (0x11D58, 8, 1), (0x11D59, 9, 1), (0x11D5A, 0, 1), (0x11DA1, 1, 1),
    (0x11DA2, 2, 1), (0x11DA3, 3, 1), (0x11DA4, 4, 1), (0x11DA5, 5, 1), (0x11DA6, 6, 1),
    (0x11DA7, 7, 1), (0x11DA8, 8, 1), (0x11DA9, 9, 1), (0x11DAA, 0, 1), (0x11FC0, 1, 320),
    (0x11FC1, 1, 160), (0x11FC2, 1, 80), (0x11FC3, 1, 64), (0x11FC4, 1, 40), (0x11FC5, 1, 32),
    (0x11FC6, 3, 80), (0x11FC7, 3, 64), (0x11FC8, 1, 20), (0x11FC9, 1, 16), (0x11FCB, 1, 10),
    (0x11FCC, 1, 8), (0x11FCD, 3, 20), (0x11FCE, 3, 16), (0x11FCF, 1, 5), (0x11FD0, 1, 4),
    (0x11FD1, 1, 2), (0x11FD3, 3, 4), (0x11FD4, 1, 320), (0x11FD5, 0, 1), (0x12400, 2, 1),
    (0x12401, 3, 1), (0x12402, 4, 1), (0x12403, 5, 1), (0x12404, 6, 1), (0x12405, 7, 1),
    (0x12406, 8, 1), (0x12407, 9, 1), (0x12408, 3, 1), (0x12409, 4, 1), (0x1240A, 5, 1),
    (0x1240B, 6, 1), (0x1240C, 7, 1), (0x1240D, 8, 1), (0x1240E, 9, 1), (0x1240F, 4, 1),
    (0x12410, 5, 1), (0x12411, 6, 1), (0x12412, 7, 1), (0x12413, 8, 1), (0x12414, 9, 1),
    (0x12415, 1, 1), (0x12416, 2, 1), (0x12417, 3, 1), (0x12418, 4, 1), (0x12419, 5, 1),
    (0x1241A, 6, 1), (0x1241B, 7, 1), (0x1241C, 8, 1), (0x1241D, 9, 1), (0x1241E, 1, 1),
    (0x1241F, 2, 1), (0x12420, 3, 1), (0x12421, 4, 1), (0x12422, 5, 1), (0x12423, 2, 1),
    (0x12424, 3, 1), (0x12426, 4, 1), (0x12427, 5, 1), (0x12428, 6, 1), (0x12429, 7, 1),
    (0x1242A, 8, 1), (0x1242B, 9, 1), (0x1242C, 1, 1), (0x1242D, 2, 1), (0x1242E, 3, 1),
    (0x12430, 4, 1), (0x12431, 5, 1), (0x12432, 216000, 1), (0x12433, 432000, 1), (0x12434, 1, 1),
    (0x12435, 2, 1), (0x12436, 3, 1), (0x12438, 4, 1), (0x12439, 5, 1), (0x1243A, 3, 1),
    (0x1243C, 4, 1), (0x12440, 6, 1), (0x12441, 7, 1), (0x12444, 8, 1), (0x12446, 9, 1),
    (0x1244A, 2, 1), (0x1244B, 3, 1), (0x1244C, 4, 1), (0x1244D, 5, 1), (0x1244E, 6, 1),
    (0x1244F, 1, 1), (0x12450, 2, 1), (0x12451, 3, 1), (0x12452, 4, 1), (0x12454, 5, 1),
    (0x12456, 2, 1), (0x12457, 3, 1), (0x12458, 1, 1), (0x12459, 2, 1), (0x1245A, 1, 3),
    (0x1245B, 2, 3), (0x1245C, 5, 6), (0x1245D, 1, 3), (0x1245E, 2, 3), (0x1245F, 1, 8),
    (0x12460, 1, 4), (0x12461, 1, 6), (0x12462, 1, 4), (0x12464, 1, 2), (0x12465, 1, 3),
    (0x12466, 2, 3), (0x12467, 40, 1), (0x12468, 50, 1), (0x12469, 4, 1), (0x1246A, 5, 1),
    (0x1246B, 6, 1), (0x1246C, 7, 1), (0x1246D, 8, 1), (0x1246E, 9, 1), (0x1246F, 0, 1),
    (0x16A61, 1, 1), (0x16A62, 2, 1), (0x16A63, 3, 1), (0x16A64, 4, 1), (0x16A65, 5, 1),
    (0x16A66, 6, 1), (0x16A67, 7, 1), (0x16A68, 8, 1), (0x16A69, 9, 1), (0x16A6A, 0, 1),
    (0x16AC1, 1, 1), (0x16AC2, 2, 1), (0x16AC3, 3, 1), (0x16AC4, 4, 1), (0x16AC5, 5, 1),
    (0x16AC6, 6, 1), (0x16AC7, 7, 1), (0x16AC8, 8, 1), (0x16AC9, 9, 1), (0x16ACA, 0, 1),
    (0x16B51, 1, 1), (0x16B52, 2, 1), (0x16B53, 3, 1), (0x16B54, 4, 1), (0x16B55, 5, 1),
    (0x16B56, 6, 1), (0x16B57, 7, 1), (0x16B58, 8, 1), (0x16B59, 9, 1), (0x16B5A, 0, 1),
    (0x16B5B, 10, 1), (0x16B5C, 100, 1), (0x16B5D, 10000, 1), (0x16B5E, 1000000, 1), (0x16B5F, 100000000, 1),
    (0x16B60, 10000000000, 1), (0x16B61, 1000000000000, 1), (0x16B62, 0, 1), (0x16E81, 1, 1), (0x16E82, 2, 1),
    (0x16E83, 3, 1), (0x16E84, 4, 1), (0x16E85, 5, 1), (0x16E86, 6, 1), (0x16E87, 7, 1),
    (0x16E88, 8, 1), (0x16E89, 9, 1), (0x16E8A, 10, 1), (0x16E8B, 11, 1), (0x16E8C, 12, 1),
    (0x16E8D, 13, 1), (0x16E8E, 14, 1), (0x16E8F, 15, 1), (0x16E90, 16, 1), (0x16E91, 17, 1),
    (0x16E92, 18, 1), (0x16E93, 19, 1), (0x16E94, 1, 1), (0x16E95, 2, 1), (0x16E96, 3, 1),
    (0x16E97, 0, 1), (0x1D2E1, 1, 1), (0x1D2E2, 2, 1), (0x1D2E3, 3, 1), (0x1D2E4, 4, 1),
    (0x1D2E5, 5, 1), (0x1D2E6, 6, 1), (0x1D2E7, 7, 1), (0x1D2E8, 8, 1), (0x1D2E9, 9, 1),
    (0x1D2EA, 10, 1), (0x1D2EB, 11, 1), (0x1D2EC, 12, 1), (0x1D2ED, 13, 1), (0x1D2EE, 14, 1),
    (0x1D2EF, 15, 1), (0x1D2F0, 16, 1), (0x1D2F1, 17, 1), (0x1D2F2, 18, 1), (0x1D2F3, 19, 1),
    (0x1D2F4, 0, 1), (0x1D360, 1, 1), (0x1D361, 2, 1), (0x1D362, 3, 1), (0x1D363, 4, 1),
    (0x1D364, 5, 1), (0x1D365, 6, 1), (0x1D366, 7, 1), (0x1D367, 8, 1), (0x1D368, 9, 1),
    (0x1D369, 10, 1), (0x1D36A, 20, 1), (0x1D36B, 30, 1), (0x1D36C, 40, 1), (0x1D36D, 50, 1),
    (0x1D36E, 60, 1), (0x1D36F, 70, 1), (0x1D370, 80, 1), (0x1D371, 90, 1), (0x1D372, 1, 1),
    (0x1D373, 2, 1), (0x1D374, 3, 1), (0x1D375, 4, 1), (0x1D376, 5, 1), (0x1D377, 1, 1),
    (0x1D378, 5, 1), (0x1D379, 0, 1), (0x1D7CF, 1, 1), (0x1D7D0, 2, 1), (0x1D7D1, 3, 1),
    (0x1D7D2, 4, 1), (0x1D7D3, 5, 1), (0x1D7D4, 6, 1), (0x1D7D5, 7, 1), (0x1D7D6, 8, 1),
    (0x1D7D7, 9, 1), (0x1D7D8, 0, 1), (0x1D7D9, 1, 1), (0x1D7DA, 2, 1), (0x1D7DB, 3, 1),
    (0x1D7DC, 4, 1), (0x1D7DD, 5, 1), (0x1D7DE, 6, 1), (0x1D7DF, 7, 1), (0x1D7E0, 8, 1),
    (0x1D7E1, 9, 1), (0x1D7E2, 0, 1), (0x1D7E3, 1, 1), (0x1D7E4, 2, 1), (0x1D7E5, 3, 1),
    (0x1D7E6, 4, 1), (0x1D7E7, 5, 1), (0x1D7E8, 6, 1), (0x1D7E9, 7, 1), (0x1D7EA, 8, 1),
    (0x1D7EB, 9, 1), (0x1D7EC, 0, 1), (0x1D7ED, 1, 1), (0x1D7EE, 2, 1), (0x1D7EF, 3, 1),
    (0x1D7F0, 4, 1), (0x1D7F1, 5, 1), (0x1D7F2, 6, 1), (0x1D7F3, 7, 1), (0x1D7F4, 8, 1),
    (0x1D7F5, 9, 1), (0x1D7F6, 0, 1), (0x1D7F7, 1, 1), (0x1D7F8, 2, 1), (0x1D7F9, 3, 1),
    (0x1D7FA, 4, 1), (0x1D7FB, 5, 1), (0x1D7FC, 6, 1), (0x1D7FD, 7, 1), (0x1D7FE, 8, 1),
    (0x1D7FF, 9, 1), (0x1D800, 0, 1), (0x1E141, 1, 1), (0x1E142, 2, 1), (0x1E143, 3, 1),
    (0x1E144, 4, 1), (0x1E145, 5, 1), (0x1E146, 6, 1), (0x1E147, 7, 1), (0x1E148, 8, 1),
    (0x1E149, 9, 1), (0x1E14A, 0, 1), (0x1E2F1, 1, 1), (0x1E2F2, 2, 1), (0x1E2F3, 3, 1),
    (0x1E2F4, 4, 1), (0x1E2F5, 5, 1), (0x1E2F6, 6, 1), (0x1E2F7, 7, 1), (0x1E2F8, 8, 1),
    (0x1E2F9, 9, 1), (0x1E2FA, 0, 1), (0x1E8C7, 1, 1), (0x1E8C8, 2, 1), (0x1E8C9, 3, 1),
    (0x1E8CA, 4, 1), (0x1E8CB, 5, 1), (0x1E8CC, 6, 1), (0x1E8CD, 7, 1), (0x1E8CE, 8, 1),
    (0x1E8CF, 9, 1), (0x1E8D0, 0, 1), (0x1E951, 1, 1), (0x1E952, 2, 1), (0x1E953, 3, 1),
    (0x1E954, 4, 1), (0x1E955, 5, 1), (0x1E956, 6, 1), (0x1E957, 7, 1), (0x1E958, 8, 1),
    (0x1E959, 9, 1), (0x1E95A, 0, 1), (0x1EC71, 1, 1), (0x1EC72, 2, 1), (0x1EC73, 3, 1),
    (0x1EC74, 4, 1), (0x1EC75, 5, 1), (0x1EC76, 6, 1), (0x1EC77, 7, 1), (0x1EC78, 8, 1),
    (0x1EC79, 9, 1), (0x1EC7A, 10, 1), (0x1EC7B, 20, 1), (0x1EC7C, 30, 1), (0x1EC7D, 40, 1),
    (0x1EC7E, 50, 1), (0x1EC7F, 60, 1), (0x1EC80, 70, 1), (0x1EC81, 80, 1), (0x1EC82, 90, 1),
    (0x1EC83, 100, 1), (0x1EC84, 200, 1), (0x1EC85, 300, 1), (0x1EC86, 400, 1), (0x1EC87, 500, 1),
    (0x1EC88, 600, 1), (0x1EC89, 700, 1), (0x1EC8A, 800, 1), (0x1EC8B, 900, 1), (0x1EC8C, 1000, 1),
    (0x1EC8D, 2000, 1), (0x1EC8E, 3000, 1), (0x1EC8F, 4000, 1), (0x1EC90, 5000, 1), (0x1EC91, 6000, 1),
    (0x1EC92, 7000, 1), (0x1EC93, 8000, 1), (0x1EC94, 9000, 1), (0x1EC95, 10000, 1), (0x1EC96, 20000, 1),
    (0x1EC97, 30000, 1), (0x1EC98, 40000, 1), (0x1EC99, 50000, 1), (0x1EC9A, 60000, 1), (0x1EC9B, 70000, 1),
    (0x1EC9C, 80000, 1), (0x1EC9D, 90000, 1), (0x1EC9E, 100000, 1), (0x1EC9F, 200000, 1), (0x1ECA0, 100000, 1),
    (0x1ECA1, 10000000, 1), (0x1ECA2, 20000000, 1), (0x1ECA3, 1, 1), (0x1ECA4, 2, 1), (0x1ECA5, 3, 1),
    (0x1ECA6, 4, 1), (0x1ECA7, 5, 1), (0x1ECA8, 6, 1), (0x1ECA9, 7, 1), (0x1ECAA, 8, 1),
    (0x1ECAB, 9, 1), (0x1ECAC, 0, 1), (0x1ECAD, 1, 4), (0x1ECAE, 1, 2), (0x1ECAF, 3, 4),
    (0x1ECB0, 0, 1), (0x1ECB1, 1, 1), (0x1ECB2, 2, 1), (0x1ECB3, 10000, 1), (0x1ECB4, 100000, 1),
    (0x1ECB5, 0, 1), (0x1ED01, 1, 1), (0x1ED02, 2, 1), (0x1ED03, 3, 1), (0x1ED04, 4, 1),
    (0x1ED05, 5, 1), (0x1ED06, 6, 1), (0x1ED07, 7, 1), (0x1ED08, 8, 1), (0x1ED09, 9, 1),
    (0x1ED0A, 10, 1), (0x1ED0B, 20, 1), (0x1ED0C, 30, 1), (0x1ED0D, 40, 1), (0x1ED0E, 50, 1),
    (0x1ED0F, 60, 1), (0x1ED10, 70, 1), (0x1ED11, 80, 1), (0x1ED12, 90, 1), (0x1ED13, 100, 1),
    (0x1ED14, 200, 1), (0x1ED15, 300, 1), (0x1ED16, 400, 1), (0x1ED17, 500, 1), (0x1ED18, 600, 1),
    (0x1ED19, 700, 1), (0x1ED1A, 800, 1), (0x1ED1B, 900, 1), (0x1ED1C, 1000, 1), (0x1ED1D, 2000, 1),
    (0x1ED1E, 3000, 1), (0x1ED1F, 4000, 1), (0x1ED20, 5000, 1), (0x1ED21, 6000, 1), (0x1ED22, 7000, 1),
    (0x1ED23, 8000, 1), (0x1ED24, 9000, 1), (0x1ED25, 10000, 1), (0x1ED26, 20000, 1), (0x1ED27, 30000, 1),
    (0x1ED28, 40000, 1), (0x1ED29, 50000, 1), (0x1ED2A, 60000, 1), (0x1ED2B, 70000, 1), (0x1ED2C, 80000, 1),
    (0x1ED2D, 90000, 1), (0x1ED2E, 0, 1), (0x1ED2F, 2, 1), (0x1ED30, 3, 1), (0x1ED31, 4, 1),
    (0x1ED32, 5, 1), (0x1ED33, 6, 1), (0x1ED34, 7, 1), (0x1ED35, 8, 1), (0x1ED36, 9, 1),
    (0x1ED37, 10, 1), (0x1ED38, 400, 1), (0x1ED39, 600, 1), (0x1ED3A, 2000, 1), (0x1ED3B, 10000, 1),
    (0x1ED3C, 1, 2), (0x1ED3D, 1, 6), (0x1ED3E, 0, 1), (0x1F102, 1, 1), (0x1F103, 2, 1),
    (0x1F104, 3, 1), (0x1F105, 4, 1), (0x1F106, 5, 1), (0x1F107, 6, 1), (0x1F108, 7, 1),
    (0x1F109, 8, 1), (0x1F10A, 9, 1), (0x1F10B, 0, 1), (0x1FBF1, 1, 1), (0x1FBF2, 2, 1),
    (0x1FBF3, 3, 1), (0x1FBF4, 4, 1), (0x1FBF5, 5, 1), (0x1FBF6, 6, 1), (0x1FBF7, 7, 1),
    (0x1FBF8, 8, 1), (0x1FBF9, 9, 1), (0x1FBFA, 0, 1), (0x20001, 7, 1), (0x20002, 0, 1),
    (0x20064, 4, 1), (0x20065, 0, 1), (0x200E2, 4, 1), (0x200E3, 0, 1), (0x20121, 5, 1),
    (0x20122, 0, 1), (0x2092A, 1, 1), (0x2092B, 0, 1), (0x20983, 30, 1), (0x20984, 0, 1),
    (0x2098C, 40, 1), (0x2098D, 0, 1), (0x2099C, 40, 1), (0x2099D, 0, 1), (0x20AEA, 6, 1),
    (0x20AEB, 0, 1), (0x20AFD, 3, 1), (0x20AFE, 0, 1), (0x20B19, 3, 1), (0x20B1A, 0, 1),
    (0x22390, 2, 1), (0x22391, 0, 1), (0x22998, 3, 1), (0x22999, 0, 1), (0x23B1B, 3, 1),
    (0x23B1C, 0, 1), (0x2626D, 4, 1), (0x2626E, 0, 1), (0x2F890, 9, 1), (0x2F891, 0, 1),
];
