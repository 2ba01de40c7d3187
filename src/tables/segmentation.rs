// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

use crate::property::{
    GraphemeClusterBreak as Gcb, LineBreak as Lb, SentenceBreak as Sb, WordBreak as Wb,
};

pub(crate) static GRAPHEME_CLUSTER_BREAK: &[(u32, Gcb)] = &[
    (0x0, Gcb::Control), (0xA, Gcb::LF), (0xB, Gcb::Control), (0xD, Gcb::CR), (0xE, Gcb::Control),
    (0x20, Gcb::Other), (0x7F, Gcb::Control), (0xA0, Gcb::Other), (0xAD, Gcb::Control), (0xAE, Gcb::Other),
    (0x300, Gcb::Extend), (0x370, Gcb::Other), (0x483, Gcb::Extend), (0x48A, Gcb::Other), (0x591, Gcb::Extend),
    (0x5BE, Gcb::Other), (0x5BF, Gcb::Extend), (0x5C0, Gcb::Other), (0x5C1, Gcb::Extend), (0x5C3, Gcb::Other),
    (0x5C4, Gcb::Extend), (0x5C6, Gcb::Other), (0x5C7, Gcb::Extend), (0x5C8, Gcb::Other), (0x600, Gcb::Prepend),
    (0x606, Gcb::Other), (0x610, Gcb::Extend), (0x61B, Gcb::Other), (0x61C, Gcb::Control), (0x61D, Gcb::Other),
    (0x64B, Gcb::Extend), (0x660, Gcb::Other), (0x670, Gcb::Extend), (0x671, Gcb::Other), (0x6D6, Gcb::Extend),
    (0x6DD, Gcb::Prepend), (0x6DE, Gcb::Other), (0x6DF, Gcb::Extend), (0x6E5, Gcb::Other), (0x6E7, Gcb::Extend),
    (0x6E9, Gcb::Other), (0x6EA, Gcb::Extend), (0x6EE, Gcb::Other), (0x70F, Gcb::Prepend), (0x710, Gcb::Other),
    (0x711, Gcb::Extend), (0x712, Gcb::Other), (0x730, Gcb::Extend), (0x74B, Gcb::Other), (0x7A6, Gcb::Extend),
    (0x7B1, Gcb::Other), (0x7EB, Gcb::Extend), (0x7F4, Gcb::Other), (0x7FD, Gcb::Extend), (0x7FE, Gcb::Other),
    (0x816, Gcb::Extend), (0x81A, Gcb::Other), (0x81B, Gcb::Extend), (0x824, Gcb::Other), (0x825, Gcb::Extend),
    (0x828, Gcb::Other), (0x829, Gcb::Extend), (0x82E, Gcb::Other), (0x859, Gcb::Extend), (0x85C, Gcb::Other),
    (0x890, Gcb::Control), (0x892, Gcb::Other), (0x898, Gcb::Extend), (0x8A0, Gcb::Other), (0x8CA, Gcb::Extend),
    (0x8E2, Gcb::Prepend), (0x8E3, Gcb::Extend), (0x903, Gcb::SpacingMark), (0x904, Gcb::Other), (0x93A, Gcb::Extend),
    (0x93B, Gcb::SpacingMark), (0x93C, Gcb::Extend), (0x93D, Gcb::Other), (0x93E, Gcb::SpacingMark), (0x941, Gcb::Extend),
    (0x949, Gcb::SpacingMark), (0x94D, Gcb::Extend), (0x94E, Gcb::SpacingMark), (0x950, Gcb::Other), (0x951, Gcb::Extend),
    (0x958, Gcb::Other), (0x962, Gcb::Extend), (0x964, Gcb::Other), (0x981, Gcb::Extend), (0x982, Gcb::SpacingMark),
    (0x984, Gcb::Other), (0x9BC, Gcb::Extend), (0x9BD, Gcb::Other), (0x9BE, Gcb::SpacingMark), (0x9C1, Gcb::Extend),
    (0x9C5, Gcb::Other), (0x9C7, Gcb::SpacingMark), (0x9C9, Gcb::Other), (0x9CB, Gcb::SpacingMark), (0x9CD, Gcb::Extend),
    (0x9CE, Gcb::Other), (0x9D7, Gcb::SpacingMark), (0x9D8, Gcb::Other), (0x9E2, Gcb::Extend), (0x9E4, Gcb::Other),
    (0x9FE, Gcb::Extend), (0x9FF, Gcb::Other), (0xA01, Gcb::Extend), (0xA03, Gcb::SpacingMark), (0xA04, Gcb::Other),
    (0xA3C, Gcb::Extend), (0xA3D, Gcb::Other), (0xA3E, Gcb::SpacingMark), (0xA41, Gcb::Extend), (0xA43, Gcb::Other),
    (0xA47, Gcb::Extend), (0xA49, Gcb::Other), (0xA4B, Gcb::Extend), (0xA4E, Gcb::Other), (0xA51, Gcb::Extend),
    (0xA52, Gcb::Other), (0xA70, Gcb::Extend), (0xA72, Gcb::Other), (0xA75, Gcb::Extend), (0xA76, Gcb::Other),
    (0xA81, Gcb::Extend), (0xA83, Gcb::SpacingMark), (0xA84, Gcb::Other), (0xABC, Gcb::Extend), (0xABD, Gcb::Other),
    (0xABE, Gcb::SpacingMark), (0xAC1, Gcb::Extend), (0xAC6, Gcb::Other), (0xAC7, Gcb::Extend), (0xAC9, Gcb::SpacingMark),
    (0xACA, Gcb::Other), (0xACB, Gcb::SpacingMark), (0xACD, Gcb::Extend), (0xACE, Gcb::Other), (0xAE2, Gcb::Extend),
    (0xAE4, Gcb::Other), (0xAFA, Gcb::Extend), (0xB00, Gcb::Other), (0xB01, Gcb::Extend), (0xB02, Gcb::SpacingMark),
    (0xB04, Gcb::Other), (0xB3C, Gcb::Extend), (0xB3D, Gcb::Other), (0xB3E, Gcb::SpacingMark), (0xB3F, Gcb::Extend),
    (0xB40, Gcb::SpacingMark), (0xB41, Gcb::Extend), (0xB45, Gcb::Other), (0xB47, Gcb::SpacingMark), (0xB49, Gcb::Other),
    (0xB4B, Gcb::SpacingMark), (0xB4D, Gcb::Extend), (0xB4E, Gcb::Other), (0xB55, Gcb::Extend), (0xB57, Gcb::SpacingMark),
    (0xB58, Gcb::Other), (0xB62, Gcb::Extend), (0xB64, Gcb::Other), (0xB82, Gcb::Extend), (0xB83, Gcb::Other),
    (0xBBE, Gcb::SpacingMark), (0xBC0, Gcb::Extend), (0xBC1, Gcb::SpacingMark), (0xBC3, Gcb::Other), (0xBC6, Gcb::SpacingMark),
    (0xBC9, Gcb::Other), (0xBCA, Gcb::SpacingMark), (0xBCD, Gcb::Extend), (0xBCE, Gcb::Other), (0xBD7, Gcb::SpacingMark),
    (0xBD8, Gcb::Other), (0xC00, Gcb::Extend), (0xC01, Gcb::SpacingMark), (0xC04, Gcb::Extend), (0xC05, Gcb::Other),
    (0xC3C, Gcb::Extend), (0xC3D, Gcb::Other), (0xC3E, Gcb::Extend), (0xC41, Gcb::SpacingMark), (0xC45, Gcb::Other),
    (0xC46, Gcb::Extend), (0xC49, Gcb::Other), (0xC4A, Gcb::Extend), (0xC4E, Gcb::Other), (0xC55, Gcb::Extend),
    (0xC57, Gcb::Other), (0xC62, Gcb::Extend), (0xC64, Gcb::Other), (0xC81, Gcb::Extend), (0xC82, Gcb::SpacingMark),
    (0xC84, Gcb::Other), (0xCBC, Gcb::Extend), (0xCBD, Gcb::Other), (0xCBE, Gcb::SpacingMark), (0xCBF, Gcb::Extend),
    (0xCC0, Gcb::SpacingMark), (0xCC5, Gcb::Other), (0xCC6, Gcb::Extend), (0xCC7, Gcb::SpacingMark), (0xCC9, Gcb::Other),
    (0xCCA, Gcb::SpacingMark), (0xCCC, Gcb::Extend), (0xCCE, Gcb::Other), (0xCD5, Gcb::SpacingMark), (0xCD7, Gcb::Other),
    (0xCE2, Gcb::Extend), (0xCE4, Gcb::Other), (0xD00, Gcb::Extend), (0xD02, Gcb::SpacingMark), (0xD04, Gcb::Other),
    (0xD3B, Gcb::Extend), (0xD3D, Gcb::Other), (0xD3E, Gcb::SpacingMark), (0xD41, Gcb::Extend), (0xD45, Gcb::Other),
    (0xD46, Gcb::SpacingMark), (0xD49, Gcb::Other), (0xD4A, Gcb::SpacingMark), (0xD4D, Gcb::Extend), (0xD4E, Gcb::Other),
    (0xD57, Gcb::SpacingMark), (0xD58, Gcb::Other), (0xD62, Gcb::Extend), (0xD64, Gcb::Other), (0xD81, Gcb::Extend),
    (0xD82, Gcb::SpacingMark), (0xD84, Gcb::Other), (0xDCA, Gcb::Extend), (0xDCB, Gcb::Other), (0xDCF, Gcb::SpacingMark),
    (0xDD2, Gcb::Extend), (0xDD5, Gcb::Other), (0xDD6, Gcb::Extend), (0xDD7, Gcb::Other), (0xDD8, Gcb::SpacingMark),
    (0xDE0, Gcb::Other), (0xDF2, Gcb::SpacingMark), (0xDF4, Gcb::Other), (0xE31, Gcb::Extend), (0xE32, Gcb::Other),
    (0xE34, Gcb::Extend), (0xE3B, Gcb::Other), (0xE47, Gcb::Extend), (0xE4F, Gcb::Other), (0xEB1, Gcb::Extend),
    (0xEB2, Gcb::Other), (0xEB4, Gcb::Extend), (0xEBD, Gcb::Other), (0xEC8, Gcb::Extend), (0xECE, Gcb::Other),
    (0xF18, Gcb::Extend), (0xF1A, Gcb::Other), (0xF35, Gcb::Extend), (0xF36, Gcb::Other), (0xF37, Gcb::Extend),
    (0xF38, Gcb::Other), (0xF39, Gcb::Extend), (0xF3A, Gcb::Other), (0xF3E, Gcb::SpacingMark), (0xF40, Gcb::Other),
    (0xF71, Gcb::Extend), (0xF7F, Gcb::SpacingMark), (0xF80, Gcb::Extend), (0xF85, Gcb::Other), (0xF86, Gcb::Extend),
    (0xF88, Gcb::Other), (0xF8D, Gcb::Extend), (0xF98, Gcb::Other), (0xF99, Gcb::Extend), (0xFBD, Gcb::Other),
    (0xFC6, Gcb::Extend), (0xFC7, Gcb::Other), (0x102B, Gcb::SpacingMark), (0x102D, Gcb::Extend), (0x1031, Gcb::SpacingMark),
    (0x1032, Gcb::Extend), (0x1038, Gcb::SpacingMark), (0x1039, Gcb::Extend), (0x103B, Gcb::SpacingMark), (0x103D, Gcb::Extend),
    (0x103F, Gcb::Other), (0x1056, Gcb::SpacingMark), (0x1058, Gcb::Extend), (0x105A, Gcb::Other), (0x105E, Gcb::Extend),
    (0x1061, Gcb::Other), (0x1062, Gcb::SpacingMark), (0x1065, Gcb::Other), (0x1067, Gcb::SpacingMark), (0x106E, Gcb::Other),
    (0x1071, Gcb::Extend), (0x1075, Gcb::Other), (0x1082, Gcb::Extend), (0x1083, Gcb::SpacingMark), (0x1085, Gcb::Extend),
    (0x1087, Gcb::SpacingMark), (0x108D, Gcb::Extend), (0x108E, Gcb::Other), (0x108F, Gcb::SpacingMark), (0x1090, Gcb::Other),
    (0x109A, Gcb::SpacingMark), (0x109D, Gcb::Extend), (0x109E, Gcb::Other), (0x1100, Gcb::L), (0x1160, Gcb::V),
    (0x11A8, Gcb::T), (0x1200, Gcb::Other), (0x135D, Gcb::Extend), (0x1360, Gcb::Other), (0x1712, Gcb::Extend),
    (0x1715, Gcb::SpacingMark), (0x1716, Gcb::Other), (0x1732, Gcb::Extend), (0x1734, Gcb::SpacingMark), (0x1735, Gcb::Other),
    (0x1752, Gcb::Extend), (0x1754, Gcb::Other), (0x1772, Gcb::Extend), (0x1774, Gcb::Other), (0x17B4, Gcb::Extend),
    (0x17B6, Gcb::SpacingMark), (0x17B7, Gcb::Extend), (0x17BE, Gcb::SpacingMark), (0x17C6, Gcb::Extend), (0x17C7, Gcb::SpacingMark),
    (0x17C9, Gcb::Extend), (0x17D4, Gcb::Other), (0x17DD, Gcb::Extend), (0x17DE, Gcb::Other), (0x180B, Gcb::Extend),
    (0x180E, Gcb::Control), (0x180F, Gcb::Extend), (0x1810, Gcb::Other), (0x1885, Gcb::Extend), (0x1887, Gcb::Other),
    (0x18A9, Gcb::Extend), (0x18AA, Gcb::Other), (0x1920, Gcb::Extend), (0x1923, Gcb::SpacingMark), (0x1927, Gcb::Extend),
    (0x1929, Gcb::SpacingMark), (0x192C, Gcb::Other), (0x1930, Gcb::SpacingMark), (0x1932, Gcb::Extend), (0x1933, Gcb::SpacingMark),
    (0x1939, Gcb::Extend), (0x193C, Gcb::Other), (0x1A17, Gcb::Extend), (0x1A19, Gcb::SpacingMark), (0x1A1B, Gcb::Extend),
    (0x1A1C, Gcb::Other), (0x1A55, Gcb::SpacingMark), (0x1A56, Gcb::Extend), (0x1A57, Gcb::SpacingMark), (0x1A58, Gcb::Extend),
    (0x1A5F, Gcb::Other), (0x1A60, Gcb::Extend), (0x1A61, Gcb::SpacingMark), (0x1A62, Gcb::Extend), (0x1A63, Gcb::SpacingMark),
    (0x1A65, Gcb::Extend), (0x1A6D, Gcb::SpacingMark), (0x1A73, Gcb::Extend), (0x1A7D, Gcb::Other), (0x1A7F, Gcb::Extend),
    (0x1A80, Gcb::Other), (0x1AB0, Gcb::Extend), (0x1ACF, Gcb::Other), (0x1B00, Gcb::Extend), (0x1B04, Gcb::SpacingMark),
    (0x1B05, Gcb::Other), (0x1B34, Gcb::Extend), (0x1B35, Gcb::SpacingMark), (0x1B36, Gcb::Extend), (0x1B3B, Gcb::SpacingMark),
    (0x1B3C, Gcb::Extend), (0x1B3D, Gcb::SpacingMark), (0x1B42, Gcb::Extend), (0x1B43, Gcb::SpacingMark), (0x1B45, Gcb::Other),
    (0x1B6B, Gcb::Extend), (0x1B74, Gcb::Other), (0x1B80, Gcb::Extend), (0x1B82, Gcb::SpacingMark), (0x1B83, Gcb::Other),
    (0x1BA1, Gcb::SpacingMark), (0x1BA2, Gcb::Extend), (0x1BA6, Gcb::SpacingMark), (0x1BA8, Gcb::Extend), (0x1BAA, Gcb::SpacingMark),
    (0x1BAB, Gcb::Extend), (0x1BAE, Gcb::Other), (0x1BE6, Gcb::Extend), (0x1BE7, Gcb::SpacingMark), (0x1BE8, Gcb::Extend),
    (0x1BEA, Gcb::SpacingMark), (0x1BED, Gcb::Extend), (0x1BEE, Gcb::SpacingMark), (0x1BEF, Gcb::Extend), (0x1BF2, Gcb::SpacingMark),
    (0x1BF4, Gcb::Other), (0x1C24, Gcb::SpacingMark), (0x1C2C, Gcb::Extend), (0x1C34, Gcb::SpacingMark), (0x1C36, Gcb::Extend),
    (0x1C38, Gcb::Other), (0x1CD0, Gcb::Extend), (0x1CD3, Gcb::Other), (0x1CD4, Gcb::Extend), (0x1CE1, Gcb::SpacingMark),
    (0x1CE2, Gcb::Extend), (0x1CE9, Gcb::Other), (0x1CED, Gcb::Extend), (0x1CEE, Gcb::Other), (0x1CF4, Gcb::Extend),
    (0x1CF5, Gcb::Other), (0x1CF7, Gcb::SpacingMark), (0x1CF8, Gcb::Extend), (0x1CFA, Gcb::Other), (0x1DC0, Gcb::Extend),
    (0x1E00, Gcb::Other), (0x200B, Gcb::Control), (0x200C, Gcb::Extend), (0x200E, Gcb::Control), (0x2010, Gcb::Other),
    (0x2028, Gcb::Control), (0x202F, Gcb::Other), (0x2060, Gcb::Control), (0x2065, Gcb::Other), (0x2066, Gcb::Control),
    (0x2070, Gcb::Other), (0x20D0, Gcb::Extend), (0x20F1, Gcb::Other), (0x2CEF, Gcb::Extend), (0x2CF2, Gcb::Other),
    (0x2D7F, Gcb::Extend), (0x2D80, Gcb::Other), (0x2DE0, Gcb::Extend), (0x2E00, Gcb::Other), (0x302A, Gcb::Extend),
    (0x302E, Gcb::SpacingMark), (0x3030, Gcb::Other), (0x3099, Gcb::Extend), (0x309B, Gcb::Other), (0xA66F, Gcb::Extend),
    (0xA673, Gcb::Other), (0xA674, Gcb::Extend), (0xA67E, Gcb::Other), (0xA69E, Gcb::Extend), (0xA6A0, Gcb::Other),
    (0xA6F0, Gcb::Extend), (0xA6F2, Gcb::Other), (0xA802, Gcb::Extend), (0xA803, Gcb::Other), (0xA806, Gcb::Extend),
    (0xA807, Gcb::Other), (0xA80B, Gcb::Extend), (0xA80C, Gcb::Other), (0xA823, Gcb::SpacingMark), (0xA825, Gcb::Extend),
    (0xA827, Gcb::SpacingMark), (0xA828, Gcb::Other), (0xA82C, Gcb::Extend), (0xA82D, Gcb::Other), (0xA880, Gcb::SpacingMark),
    (0xA882, Gcb::Other), (0xA8B4, Gcb::SpacingMark), (0xA8C4, Gcb::Extend), (0xA8C6, Gcb::Other), (0xA8E0, Gcb::Extend),
    (0xA8F2, Gcb::Other), (0xA8FF, Gcb::Extend), (0xA900, Gcb::Other), (0xA926, Gcb::Extend), (0xA92E, Gcb::Other),
    (0xA947, Gcb::Extend), (0xA952, Gcb::SpacingMark), (0xA954, Gcb::Other), (0xA960, Gcb::L), (0xA97D, Gcb::Other),
    (0xA980, Gcb::Extend), (0xA983, Gcb::SpacingMark), (0xA984, Gcb::Other), (0xA9B3, Gcb::Extend), (0xA9B4, Gcb::SpacingMark),
    (0xA9B6, Gcb::Extend), (0xA9BA, Gcb::SpacingMark), (0xA9BC, Gcb::Extend), (0xA9BE, Gcb::SpacingMark), (0xA9C1, Gcb::Other),
    (0xA9E5, Gcb::Extend), (0xA9E6, Gcb::Other), (0xAA29, Gcb::Extend), (0xAA2F, Gcb::SpacingMark), (0xAA31, Gcb::Extend),
    (0xAA33, Gcb::SpacingMark), (0xAA35, Gcb::Extend), (0xAA37, Gcb::Other), (0xAA43, Gcb::Extend), (0xAA44, Gcb::Other),
    (0xAA4C, Gcb::Extend), (0xAA4D, Gcb::SpacingMark), (0xAA4E, Gcb::Other), (0xAA7B, Gcb::SpacingMark), (0xAA7C, Gcb::Extend),
    (0xAA7D, Gcb::SpacingMark), (0xAA7E, Gcb::Other), (0xAAB0, Gcb::Extend), (0xAAB1, Gcb::Other), (0xAAB2, Gcb::Extend),
    (0xAAB5, Gcb::Other), (0xAAB7, Gcb::Extend), (0xAAB9, Gcb::Other), (0xAABE, Gcb::Extend), (0xAAC0, Gcb::Other),
    (0xAAC1, Gcb::Extend), (0xAAC2, Gcb::Other), (0xAAEB, Gcb::SpacingMark), (0xAAEC, Gcb::Extend), (0xAAEE, Gcb::SpacingMark),
    (0xAAF0, Gcb::Other), (0xAAF5, Gcb::SpacingMark), (0xAAF6, Gcb::Extend), (0xAAF7, Gcb::Other), (0xABE3, Gcb::SpacingMark),
    (0xABE5, Gcb::Extend), (0xABE6, Gcb::SpacingMark), (0xABE8, Gcb::Extend), (0xABE9, Gcb::SpacingMark), (0xABEB, Gcb::Other),
    (0xABEC, Gcb::SpacingMark), (0xABED, Gcb::Extend), (0xABEE, Gcb::Other), (0xAC00, Gcb::LV), (0xAC01, Gcb::LVT),
    (0xAC1C, Gcb::LV), (0xAC1D, Gcb::LVT), (0xAC38, Gcb::LV), (0xAC39, Gcb::LVT), (0xAC54, Gcb::LV),
    (0xAC55, Gcb::LVT), (0xAC70, Gcb::LV), (0xAC71, Gcb::LVT), (0xAC8C, Gcb::LV), (0xAC8D, Gcb::LVT),
    (0xACA8, Gcb::LV), (0xACA9, Gcb::LVT), (0xACC4, Gcb::LV), (0xACC5, Gcb::LVT), (0xACE0, Gcb::LV),
    (0xACE1, Gcb::LVT), (0xACFC, Gcb::LV), (0xACFD, Gcb::LVT), (0xAD18, Gcb::LV), (0xAD19, Gcb::LVT),
    (0xAD34, Gcb::LV), (0xAD35, Gcb::LVT), (0xAD50, Gcb::LV), (0xAD51, Gcb::LVT), (0xAD6C, Gcb::LV),
    (0xAD6D, Gcb::LVT), (0xAD88, Gcb::LV), (0xAD89, Gcb::LVT), (0xADA4, Gcb::LV), (0xADA5, Gcb::LVT),
    (0xADC0, Gcb::LV), (0xADC1, Gcb::LVT), (0xADDC, Gcb::LV), (0xADDD, Gcb::LVT), (0xADF8, Gcb::LV),
    (0xADF9, Gcb::LVT), (0xAE14, Gcb::LV), (0xAE15, Gcb::LVT), (0xAE30, Gcb::LV), (0xAE31, Gcb::LVT),
    (0xAE4C, Gcb::LV), (0xAE4D, Gcb::LVT), (0xAE68, Gcb::LV), (0xAE69, Gcb::LVT), (0xAE84, Gcb::LV),
    (0xAE85, Gcb::LVT), (0xAEA0, Gcb::LV), (0xAEA1, Gcb::LVT), (0xAEBC, Gcb::LV), (0xAEBD, Gcb::LVT),
    (0xAED8, Gcb::LV), (0xAED9, Gcb::LVT), (0xAEF4, Gcb::LV), (0xAEF5, Gcb::LVT), (0xAF10, Gcb::LV),
    (0xAF11, Gcb::LVT), (0xAF2C, Gcb::LV), (0xAF2D, Gcb::LVT), (0xAF48, Gcb::LV), (0xAF49, Gcb::LVT),
    (0xAF64, Gcb::LV), (0xAF65, Gcb::LVT), (0xAF80, Gcb::LV), (0xAF81, Gcb::LVT), (0xAF9C, Gcb::LV),
    (0xAF9D, Gcb::LVT), (0xAFB8, Gcb::LV), (0xAFB9, Gcb::LVT), (0xAFD4, Gcb::LV), (0xAFD5, Gcb::LVT),
    (0xAFF0, Gcb::LV), (0xAFF1, Gcb::LVT), (0xB00C, Gcb::LV), (0xB00D, Gcb::LVT), (0xB028, Gcb::LV),
    (0xB029, Gcb::LVT), (0xB044, Gcb::LV), (0xB045, Gcb::LVT), (0xB060, Gcb::LV), (0xB061, Gcb::LVT),
    (0xB07C, Gcb::LV), (0xB07D, Gcb::LVT), (0xB098, Gcb::LV), (0xB099, Gcb::LVT), (0xB0B4, Gcb::LV),
    (0xB0B5, Gcb::LVT), (0xB0D0, Gcb::LV), (0xB0D1, Gcb::LVT), (0xB0EC, Gcb::LV), (0xB0ED, Gcb::LVT),
    (0xB108, Gcb::LV), (0xB109, Gcb::LVT), (0xB124, Gcb::LV), (0xB125, Gcb::LVT), (0xB140, Gcb::LV),
    (0xB141, Gcb::LVT), (0xB15C, Gcb::LV), (0xB15D, Gcb::LVT), (0xB178, Gcb::LV), (0xB179, Gcb::LVT),
    (0xB194, Gcb::LV), (0xB195, Gcb::LVT), (0xB1B0, Gcb::LV), (0xB1B1, Gcb::LVT), (0xB1CC, Gcb::LV),
    (0xB1CD, Gcb::LVT), (0xB1E8, Gcb::LV), (0xB1E9, Gcb::LVT), (0xB204, Gcb::LV), (0xB205, Gcb::LVT),
    (0xB220, Gcb::LV), (0xB221, Gcb::LVT), (0xB23C, Gcb::LV), (0xB23D, Gcb::LVT), (0xB258, Gcb::LV),
    (0xB259, Gcb::LVT), (0xB274, Gcb::LV), (0xB275, Gcb::LVT), (0xB290, Gcb::LV), (0xB291, Gcb::LVT),
    (0xB2AC, Gcb::LV), (0xB2AD, Gcb::LVT), (0xB2C8, Gcb::LV), (0xB2C9, Gcb::LVT), (0xB2E4, Gcb::LV),
    (0xB2E5, Gcb::LVT), (0xB300, Gcb::LV), (0xB301, Gcb::LVT), (0xB31C, Gcb::LV), (0xB31D, Gcb::LVT),
    (0xB338, Gcb::LV), (0xB339, Gcb::LVT), (0xB354, Gcb::LV), (0xB355, Gcb::LVT), (0xB370, Gcb::LV),
    (0xB371, Gcb::LVT), (0xB38C, Gcb::LV), (0xB38D, Gcb::LVT), (0xB3A8, Gcb::LV), (0xB3A9, Gcb::LVT),
    (0xB3C4, Gcb::LV), (0xB3C5, Gcb::LVT), (0xB3E0, Gcb::LV), (0xB3E1, Gcb::LVT), (0xB3FC, Gcb::LV),
    (0xB3FD, Gcb::LVT), (0xB418, Gcb::LV), (0xB419, Gcb::LVT), (0xB434, Gcb::LV), (0xB435, Gcb::LVT),
    (0xB450, Gcb::LV), (0xB451, Gcb::LVT), (0xB46C, Gcb::LV), (0xB46D, Gcb::LVT), (0xB488, Gcb::LV),
    (0xB489, Gcb::LVT), (0xB4A4, Gcb::LV), (0xB4A5, Gcb::LVT), (0xB4C0, Gcb::LV), (0xB4C1, Gcb::LVT),
    (0xB4DC, Gcb::LV), (0xB4DD, Gcb::LVT), (0xB4F8, Gcb::LV), (0xB4F9, Gcb::LVT), (0xB514, Gcb::LV),
    (0xB515, Gcb::LVT), (0xB530, Gcb::LV), (0xB531, Gcb::LVT), (0xB54C, Gcb::LV), (0xB54D, Gcb::LVT),
    (0xB568, Gcb::LV), (0xB569, Gcb::LVT), (0xB584, Gcb::LV), (0xB585, Gcb::LVT), (0xB5A0, Gcb::LV),
    (0xB5A1, Gcb::LVT), (0xB5BC, Gcb::LV), (0xB5BD, Gcb::LVT), (0xB5D8, Gcb::LV), (0xB5D9, Gcb::LVT),
    (0xB5F4, Gcb::LV), (0xB5F5, Gcb::LVT), (0xB610, Gcb::LV), (0xB611, Gcb::LVT), (0xB62C, Gcb::LV),
    (0xB62D, Gcb::LVT), (0xB648, Gcb::LV), (0xB649, Gcb::LVT), (0xB664, Gcb::LV), (0xB665, Gcb::LVT),
    (0xB680, Gcb::LV), (0xB681, Gcb::LVT), (0xB69C, Gcb::LV), (0xB69D, Gcb::LVT), (0xB6B8, Gcb::LV),
    (0xB6B9, Gcb::LVT), (0xB6D4, Gcb::LV), (0xB6D5, Gcb::LVT), (0xB6F0, Gcb::LV), (0xB6F1, Gcb::LVT),
    (0xB70C, Gcb::LV), (0xB70D, Gcb::LVT), (0xB728, Gcb::LV), (0xB729, Gcb::LVT), (0xB744, Gcb::LV),
    (0xB745, Gcb::LVT), (0xB760, Gcb::LV), (0xB761, Gcb::LVT), (0xB77C, Gcb::LV), (0xB77D, Gcb::LVT),
    (0xB798, Gcb::LV), (0xB799, Gcb::LVT), (0xB7B4, Gcb::LV), (0xB7B5, Gcb::LVT), (0xB7D0, Gcb::LV),
    (0xB7D1, Gcb::LVT), (0xB7EC, Gcb::LV), (0xB7ED, Gcb::LVT), (0xB808, Gcb::LV), (0xB809, Gcb::LVT),
    (0xB824, Gcb::LV), (0xB825, Gcb::LVT), (0xB840, Gcb::LV), (0xB841, Gcb::LVT), (0xB85C, Gcb::LV),
    (0xB85D, Gcb::LVT), (0xB878, Gcb::LV), (0xB879, Gcb::LVT), (0xB894, Gcb::LV), (0xB895, Gcb::LVT),
    (0xB8B0, Gcb::LV), (0xB8B1, Gcb::LVT), (0xB8CC, Gcb::LV), (0xB8CD, Gcb::LVT), (0xB8E8, Gcb::LV),
    (0xB8E9, Gcb::LVT), (0xB904, Gcb::LV), (0xB905, Gcb::LVT), (0xB920, Gcb::LV), (0xB921, Gcb::LVT),
    (0xB93C, Gcb::LV), (0xB93D, Gcb::LVT), (0xB958, Gcb::LV), (0xB959, Gcb::LVT), (0xB974, Gcb::LV),
    (0xB975, Gcb::LVT), (0xB990, Gcb::LV), (0xB991, Gcb::LVT), (0xB9AC, Gcb::LV), (0xB9AD, Gcb::LVT),
    (0xB9C8, Gcb::LV), (0xB9C9, Gcb::LVT), (0xB9E4, Gcb::LV), (0xB9E5, Gcb::LVT), (0xBA00, Gcb::LV),
    (0xBA01, Gcb::LVT), (0xBA1C, Gcb::LV), (0xBA1D, Gcb::LVT), (0xBA38, Gcb::LV), (0xBA39, Gcb::LVT),
    (0xBA54, Gcb::LV), (0xBA55, Gcb::LVT), (0xBA70, Gcb::LV), (0xBA71, Gcb::LVT), (0xBA8C, Gcb::LV),
    (0xBA8D, Gcb::LVT), (0xBAA8, Gcb::LV), (0xBAA9, Gcb::LVT), (0xBAC4, Gcb::LV), (0xBAC5, Gcb::LVT),
    (0xBAE0, Gcb::LV), (0xBAE1, Gcb::LVT), (0xBAFC, Gcb::LV), (0xBAFD, Gcb::LVT), (0xBB18, Gcb::LV),
    (0xBB19, Gcb::LVT), (0xBB34, Gcb::LV), (0xBB35, Gcb::LVT), (0xBB50, Gcb::LV), (0xBB51, Gcb::LVT),
    (0xBB6C, Gcb::LV), (0xBB6D, Gcb::LVT), (0xBB88, Gcb::LV), (0xBB89, Gcb::LVT), (0xBBA4, Gcb::LV),
    (0xBBA5, Gcb::LVT), (0xBBC0, Gcb::LV), (0xBBC1, Gcb::LVT), (0xBBDC, Gcb::LV), (0xBBDD, Gcb::LVT),
    (0xBBF8, Gcb::LV), (0xBBF9, Gcb::LVT), (0xBC14, Gcb::LV), (0xBC15, Gcb::LVT), (0xBC30, Gcb::LV),
    (0xBC31, Gcb::LVT), (0xBC4C, Gcb::LV), (0xBC4D, Gcb::LVT), (0xBC68, Gcb::LV), (0xBC69, Gcb::LVT),
    (0xBC84, Gcb::LV), (0xBC85, Gcb::LVT), (0xBCA0, Gcb::LV), (0xBCA1, Gcb::LVT), (0xBCBC, Gcb::LV),
    (0xBCBD, Gcb::LVT), (0xBCD8, Gcb::LV), (0xBCD9, Gcb::LVT), (0xBCF4, Gcb::LV), (0xBCF5, Gcb::LVT),
    (0xBD10, Gcb::LV), (0xBD11, Gcb::LVT), (0xBD2C, Gcb::LV), (0xBD2D, Gcb::LVT), (0xBD48, Gcb::LV),
    (0xBD49, Gcb::LVT), (0xBD64, Gcb::LV), (0xBD65, Gcb::LVT), (0xBD80, Gcb::LV), (0xBD81, Gcb::LVT),
    (0xBD9C, Gcb::LV), (0xBD9D, Gcb::LVT), (0xBDB8, Gcb::LV), (0xBDB9, Gcb::LVT), (0xBDD4, Gcb::LV),
    (0xBDD5, Gcb::LVT), (0xBDF0, Gcb::LV), (0xBDF1, Gcb::LVT), (0xBE0C, Gcb::LV), (0xBE0D, Gcb::LVT),
    (0xBE28, Gcb::LV), (0xBE29, Gcb::LVT), (0xBE44, Gcb::LV), (0xBE45, Gcb::LVT), (0xBE60, Gcb::LV),
    (0xBE61, Gcb::LVT), (0xBE7C, Gcb::LV), (0xBE7D, Gcb::LVT), (0xBE98, Gcb::LV), (0xBE99, Gcb::LVT),
    (0xBEB4, Gcb::LV), (0xBEB5, Gcb::LVT), (0xBED0, Gcb::LV), (0xBED1, Gcb::LVT), (0xBEEC, Gcb::LV),
    (0xBEED, Gcb::LVT), (0xBF08, Gcb::LV), (0xBF09, Gcb::LVT), (0xBF24, Gcb::LV), (0xBF25, Gcb::LVT),
    (0xBF40, Gcb::LV), (0xBF41, Gcb::LVT), (0xBF5C, Gcb::LV), (0xBF5D, Gcb::LVT), (0xBF78, Gcb::LV),
    (0xBF79, Gcb::LVT), (0xBF94, Gcb::LV), (0xBF95, Gcb::LVT), (0xBFB0, Gcb::LV), (0xBFB1, Gcb::LVT),
    (0xBFCC, Gcb::LV), (0xBFCD, Gcb::LVT), (0xBFE8, Gcb::LV), (0xBFE9, Gcb::LVT), (0xC004, Gcb::LV),
    (0xC005, Gcb::LVT), (0xC020, Gcb::LV), (0xC021, Gcb::LVT), (0xC03C, Gcb::LV), (0xC03D, Gcb::LVT),
    (0xC058, Gcb::LV), (0xC059, Gcb::LVT), (0xC074, Gcb::LV), (0xC075, Gcb::LVT), (0xC090, Gcb::LV),
    (0xC091, Gcb::LVT), (0xC0AC, Gcb::LV), (0xC0AD, Gcb::LVT), (0xC0C8, Gcb::LV), (0xC0C9, Gcb::LVT),
    (0xC0E4, Gcb::LV), (0xC0E5, Gcb::LVT), (0xC100, Gcb::LV), (0xC101, Gcb::LVT), (0xC11C, Gcb::LV),
    (0xC11D, Gcb::LVT), (0xC138, Gcb::LV), (0xC139, Gcb::LVT), (0xC154, Gcb::LV), (0xC155, Gcb::LVT),
    (0xC170, Gcb::LV), (0xC171, Gcb::LVT), (0xC18C, Gcb::LV), (0xC18D, Gcb::LVT), (0xC1A8, Gcb::LV),
    (0xC1A9, Gcb::LVT), (0xC1C4, Gcb::LV), (0xC1C5, Gcb::LVT), (0xC1E0, Gcb::LV), (0xC1E1, Gcb::LVT),
    (0xC1FC, Gcb::LV), (0xC1FD, Gcb::LVT), (0xC218, Gcb::LV), (0xC219, Gcb::LVT), (0xC234, Gcb::LV),
    (0xC235, Gcb::LVT), (0xC250, Gcb::LV), (0xC251, Gcb::LVT), (0xC26C, Gcb::LV), (0xC26D, Gcb::LVT),
    (0xC288, Gcb::LV), (0xC289, Gcb::LVT), (0xC2A4, Gcb::LV), (0xC2A5, Gcb::LVT), (0xC2C0, Gcb::LV),
    (0xC2C1, Gcb::LVT), (0xC2DC, Gcb::LV), (0xC2DD, Gcb::LVT), (0xC2F8, Gcb::LV), (0xC2F9, Gcb::LVT),
    (0xC314, Gcb::LV), (0xC315, Gcb::LVT), (0xC330, Gcb::LV), (0xC331, Gcb::LVT), (0xC34C, Gcb::LV),
    (0xC34D, Gcb::LVT), (0xC368, Gcb::LV), (0xC369, Gcb::LVT), (0xC384, Gcb::LV), (0xC385, Gcb::LVT),
    (0xC3A0, Gcb::LV), (0xC3A1, Gcb::LVT), (0xC3BC, Gcb::LV), (0xC3BD, Gcb::LVT), (0xC3D8, Gcb::LV),
    (0xC3D9, Gcb::LVT), (0xC3F4, Gcb::LV), (0xC3F5, Gcb::LVT), (0xC410, Gcb::LV), (0xC411, Gcb::LVT),
    (0xC42C, Gcb::LV), (0xC42D, Gcb::LVT), (0xC448, Gcb::LV), (0xC449, Gcb::LVT), (0xC464, Gcb::LV),
    (0xC465, Gcb::LVT), (0xC480, Gcb::LV), (0xC481, Gcb::LVT), (0xC49C, Gcb::LV), (0xC49D, Gcb::LVT),
    (0xC4B8, Gcb::LV), (0xC4B9, Gcb::LVT), (0xC4D4, Gcb::LV), (0xC4D5, Gcb::LVT), (0xC4F0, Gcb::LV),
    (0xC4F1, Gcb::LVT), (0xC50C, Gcb::LV), (0xC50D, Gcb::LVT), (0xC528, Gcb::LV), (0xC529, Gcb::LVT),
    (0xC544, Gcb::LV), (0xC545, Gcb::LVT), (0xC560, Gcb::LV), (0xC561, Gcb::LVT), (0xC57C, Gcb::LV),
    (0xC57D, Gcb::LVT), (0xC598, Gcb::LV), (0xC599, Gcb::LVT), (0xC5B4, Gcb::LV), (0xC5B5, Gcb::LVT),
    (0xC5D0, Gcb::LV), (0xC5D1, Gcb::LVT), (0xC5EC, Gcb::LV), (0xC5ED, Gcb::LVT), (0xC608, Gcb::LV),
    (0xC609, Gcb::LVT), (0xC624, Gcb::LV), (0xC625, Gcb::LVT), (0xC640, Gcb::LV), (0xC641, Gcb::LVT),
    (0xC65C, Gcb::LV), (0xC65D, Gcb::LVT), (0xC678, Gcb::LV), (0xC679, Gcb::LVT), (0xC694, Gcb::LV),
    (0xC695, Gcb::LVT), (0xC6B0, Gcb::LV), (0xC6B1, Gcb::LVT), (0xC6CC, Gcb::LV), (0xC6CD, Gcb::LVT),
    (0xC6E8, Gcb::LV), (0xC6E9, Gcb::LVT), (0xC704, Gcb::LV), (0xC705, Gcb::LVT), (0xC720, Gcb::LV),
    (0xC721, Gcb::LVT), (0xC73C, Gcb::LV), (0xC73D, Gcb::LVT), (0xC758, Gcb::LV), (0xC759, Gcb::LVT),
    (0xC774, Gcb::LV), (0xC775, Gcb::LVT), (0xC790, Gcb::LV), (0xC791, Gcb::LVT), (0xC7AC, Gcb::LV),
    (0xC7AD, Gcb::LVT), (0xC7C8, Gcb::LV), (0xC7C9, Gcb::LVT), (0xC7E4, Gcb::LV), (0xC7E5, Gcb::LVT),
    (0xC800, Gcb::LV), (0xC801, Gcb::LVT), (0xC81C, Gcb::LV), (0xC81D, Gcb::LVT), (0xC838, Gcb::LV),
    (0xC839, Gcb::LVT), (0xC854, Gcb::LV), (0xC855, Gcb::LVT), (0xC870, Gcb::LV), (0xC871, Gcb::LVT),
    (0xC88C, Gcb::LV), (0xC88D, Gcb::LVT), (0xC8A8, Gcb::LV), (0xC8A9, Gcb::LVT), (0xC8C4, Gcb::LV),
    (0xC8C5, Gcb::LVT), (0xC8E0, Gcb::LV), (0xC8E1, Gcb::LVT), (0xC8FC, Gcb::LV), (0xC8FD, Gcb::LVT),
    (0xC918, Gcb::LV), (0xC919, Gcb::LVT), (0xC934, Gcb::LV), (0xC935, Gcb::LVT), (0xC950, Gcb::LV),
    (0xC951, Gcb::LVT), (0xC96C, Gcb::LV), (0xC96D, Gcb::LVT), (0xC988, Gcb::LV), (0xC989, Gcb::LVT),
    (0xC9A4, Gcb::LV), (0xC9A5, Gcb::LVT), (0xC9C0, Gcb::LV), (0xC9C1, Gcb::LVT), (0xC9DC, Gcb::LV),
    (0xC9DD, Gcb::LVT), (0xC9F8, Gcb::LV), (0xC9F9, Gcb::LVT), (0xCA14, Gcb::LV), (0xCA15, Gcb::LVT),
    (0xCA30, Gcb::LV), (0xCA31, Gcb::LVT), (0xCA4C, Gcb::LV), (0xCA4D, Gcb::LVT), (0xCA68, Gcb::LV),
    (0xCA69, Gcb::LVT), (0xCA84, Gcb::LV), (0xCA85, Gcb::LVT), (0xCAA0, Gcb::LV), (0xCAA1, Gcb::LVT),
    (0xCABC, Gcb::LV), (0xCABD, Gcb::LVT), (0xCAD8, Gcb::LV), (0xCAD9, Gcb::LVT), (0xCAF4, Gcb::LV),
    (0xCAF5, Gcb::LVT), (0xCB10, Gcb::LV), (0xCB11, Gcb::LVT), (0xCB2C, Gcb::LV), (0xCB2D, Gcb::LVT),
    (0xCB48, Gcb::LV), (0xCB49, Gcb::LVT), (0xCB64, Gcb::LV), (0xCB65, Gcb::LVT), (0xCB80, Gcb::LV),
    (0xCB81, Gcb::LVT), (0xCB9C, Gcb::LV), (0xCB9D, Gcb::LVT), (0xCBB8, Gcb::LV), (0xCBB9, Gcb::LVT),
    (0xCBD4, Gcb::LV), (0xCBD5, Gcb::LVT), (0xCBF0, Gcb::LV), (0xCBF1, Gcb::LVT), (0xCC0C, Gcb::LV),
    (0xCC0D, Gcb::LVT), (0xCC28, Gcb::LV), (0xCC29, Gcb::LVT), (0xCC44, Gcb::LV), (0xCC45, Gcb::LVT),
    (0xCC60, Gcb::LV), (0xCC61, Gcb::LVT), (0xCC7C, Gcb::LV), (0xCC7D, Gcb::LVT), (0xCC98, Gcb::LV),
    (0xCC99, Gcb::LVT), (0xCCB4, Gcb::LV), (0xCCB5, Gcb::LVT), (0xCCD0, Gcb::LV), (0xCCD1, Gcb::LVT),
    (0xCCEC, Gcb::LV), (0xCCED, Gcb::LVT), (0xCD08, Gcb::LV), (0xCD09, Gcb::LVT), (0xCD24, Gcb::LV),
    (0xCD25, Gcb::LVT), (0xCD40, Gcb::LV), (0xCD41, Gcb::LVT), (0xCD5C, Gcb::LV), (0xCD5D, Gcb::LVT),
    (0xCD78, Gcb::LV), (0xCD79, Gcb::LVT), (0xCD94, Gcb::LV), (0xCD95, Gcb::LVT), (0xCDB0, Gcb::LV),
    (0xCDB1, Gcb::LVT), (0xCDCC, Gcb::LV), (0xCDCD, Gcb::LVT), (0xCDE8, Gcb::LV), (0xCDE9, Gcb::LVT),
    (0xCE04, Gcb::LV), (0xCE05, Gcb::LVT), (0xCE20, Gcb::LV), (0xCE21, Gcb::LVT), (0xCE3C, Gcb::LV),
    (0xCE3D, Gcb::LVT), (0xCE58, Gcb::LV), (0xCE59, Gcb::LVT), (0xCE74, Gcb::LV), (0xCE75, Gcb::LVT),
    (0xCE90, Gcb::LV), (0xCE91, Gcb::LVT), (0xCEAC, Gcb::LV), (0xCEAD, Gcb::LVT), (0xCEC8, Gcb::LV),
    (0xCEC9, Gcb::LVT), (0xCEE4, Gcb::LV), (0xCEE5, Gcb::LVT), (0xCF00, Gcb::LV), (0xCF01, Gcb::LVT),
    (0xCF1C, Gcb::LV), (0xCF1D, Gcb::LVT), (0xCF38, Gcb::LV), (0xCF39, Gcb::LVT), (0xCF54, Gcb::LV),
    (0xCF55, Gcb::LVT), (0xCF70, Gcb::LV), (0xCF71, Gcb::LVT), (0xCF8C, Gcb::LV), (0xCF8D, Gcb::LVT),
    (0xCFA8, Gcb::LV), (0xCFA9, Gcb::LVT), (0xCFC4, Gcb::LV), (0xCFC5, Gcb::LVT), (0xCFE0, Gcb::LV),
    (0xCFE1, Gcb::LVT), (0xCFFC, Gcb::LV), (0xCFFD, Gcb::LVT), (0xD018, Gcb::LV), (0xD019, Gcb::LVT),
    (0xD034, Gcb::LV), (0xD035, Gcb::LVT), (0xD050, Gcb::LV), (0xD051, Gcb::LVT), (0xD06C, Gcb::LV),
    (0xD06D, Gcb::LVT), (0xD088, Gcb::LV), (0xD089, Gcb::LVT), (0xD0A4, Gcb::LV), (0xD0A5, Gcb::LVT),
    (0xD0C0, Gcb::LV), (0xD0C1, Gcb::LVT), (0xD0DC, Gcb::LV), (0xD0DD, Gcb::LVT), (0xD0F8, Gcb::LV),
    (0xD0F9, Gcb::LVT), (0xD114, Gcb::LV), (0xD115, Gcb::LVT), (0xD130, Gcb::LV), (0xD131, Gcb::LVT),
    (0xD14C, Gcb::LV), (0xD14D, Gcb::LVT), (0xD168, Gcb::LV), (0xD169, Gcb::LVT), (0xD184, Gcb::LV),
    (0xD185, Gcb::LVT), (0xD1A0, Gcb::LV), (0xD1A1, Gcb::LVT), (0xD1BC, Gcb::LV), (0xD1BD, Gcb::LVT),
    (0xD1D8, Gcb::LV), (0xD1D9, Gcb::LVT), (0xD1F4, Gcb::LV), (0xD1F5, Gcb::LVT), (0xD210, Gcb::LV),
    (0xD211, Gcb::LVT), (0xD22C, Gcb::LV), (0xD22D, Gcb::LVT), (0xD248, Gcb::LV), (0xD249, Gcb::LVT),
    (0xD264, Gcb::LV), (0xD265, Gcb::LVT), (0xD280, Gcb::LV), (0xD281, Gcb::LVT), (0xD29C, Gcb::LV),
    (0xD29D, Gcb::LVT), (0xD2B8, Gcb::LV), (0xD2B9, Gcb::LVT), (0xD2D4, Gcb::LV), (0xD2D5, Gcb::LVT),
    (0xD2F0, Gcb::LV), (0xD2F1, Gcb::LVT), (0xD30C, Gcb::LV), (0xD30D, Gcb::LVT), (0xD328, Gcb::LV),
    (0xD329, Gcb::LVT), (0xD344, Gcb::LV), (0xD345, Gcb::LVT), (0xD360, Gcb::LV), (0xD361, Gcb::LVT),
    (0xD37C, Gcb::LV), (0xD37D, Gcb::LVT), (0xD398, Gcb::LV), (0xD399, Gcb::LVT), (0xD3B4, Gcb::LV),
    (0xD3B5, Gcb::LVT), (0xD3D0, Gcb::LV), (0xD3D1, Gcb::LVT), (0xD3EC, Gcb::LV), (0xD3ED, Gcb::LVT),
    (0xD408, Gcb::LV), (0xD409, Gcb::LVT), (0xD424, Gcb::LV), (0xD425, Gcb::LVT), (0xD440, Gcb::LV),
    (0xD441, Gcb::LVT), (0xD45C, Gcb::LV), (0xD45D, Gcb::LVT), (0xD478, Gcb::LV), (0xD479, Gcb::LVT),
    (0xD494, Gcb::LV), (0xD495, Gcb::LVT), (0xD4B0, Gcb::LV), (0xD4B1, Gcb::LVT), (0xD4CC, Gcb::LV),
    (0xD4CD, Gcb::LVT), (0xD4E8, Gcb::LV), (0xD4E9, Gcb::LVT), (0xD504, Gcb::LV), (0xD505, Gcb::LVT),
    (0xD520, Gcb::LV), (0xD521, Gcb::LVT), (0xD53C, Gcb::LV), (0xD53D, Gcb::LVT), (0xD558, Gcb::LV),
    (0xD559, Gcb::LVT), (0xD574, Gcb::LV), (0xD575, Gcb::LVT), (0xD590, Gcb::LV), (0xD591, Gcb::LVT),
    (0xD5AC, Gcb::LV), (0xD5AD, Gcb::LVT), (0xD5C8, Gcb::LV), (0xD5C9, Gcb::LVT), (0xD5E4, Gcb::LV),
    (0xD5E5, Gcb::LVT), (0xD600, Gcb::LV), (0xD601, Gcb::LVT), (0xD61C, Gcb::LV), (0xD61D, Gcb::LVT),
    (0xD638, Gcb::LV), (0xD639, Gcb::LVT), (0xD654, Gcb::LV), (0xD655, Gcb::LVT), (0xD670, Gcb::LV),
    (0xD671, Gcb::LVT), (0xD68C, Gcb::LV), (0xD68D, Gcb::LVT), (0xD6A8, Gcb::LV), (0xD6A9, Gcb::LVT),
    (0xD6C4, Gcb::LV), (0xD6C5, Gcb::LVT), (0xD6E0, Gcb::LV), (0xD6E1, Gcb::LVT), (0xD6FC, Gcb::LV),
    (0xD6FD, Gcb::LVT), (0xD718, Gcb::LV), (0xD719, Gcb::LVT), (0xD734, Gcb::LV), (0xD735, Gcb::LVT),
    (0xD750, Gcb::LV), (0xD751, Gcb::LVT), (0xD76C, Gcb::LV), (0xD76D, Gcb::LVT), (0xD788, Gcb::LV),
    (0xD789, Gcb::LVT), (0xD7A4, Gcb::Other), (0xD7B0, Gcb::V), (0xD7C7, Gcb::Other), (0xD7CB, Gcb::T),
    (0xD7FC, Gcb::Other), (0xFB1E, Gcb::Extend), (0xFB1F, Gcb::Other), (0xFE00, Gcb::Extend), (0xFE10, Gcb::Other),
    (0xFE20, Gcb::Extend), (0xFE30, Gcb::Other), (0xFEFF, Gcb::Control), (0xFF00, Gcb::Other), (0xFF9E, Gcb::Extend),
    (0xFFA0, Gcb::Other), (0xFFF9, Gcb::Control), (0xFFFC, Gcb::Other), (0x101FD, Gcb::Extend), (0x101FE, Gcb::Other),
    (0x102E0, Gcb::Extend), (0x102E1, Gcb::Other), (0x10376, Gcb::Extend), (0x1037B, Gcb::Other), (0x10A01, Gcb::Extend),
    (0x10A04, Gcb::Other), (0x10A05, Gcb::Extend), (0x10A07, Gcb::Other), (0x10A0C, Gcb::Extend), (0x10A10, Gcb::Other),
    (0x10A38, Gcb::Extend), (0x10A3B, Gcb::Other), (0x10A3F, Gcb::Extend), (0x10A40, Gcb::Other), (0x10AE5, Gcb::Extend),
    (0x10AE7, Gcb::Other), (0x10D24, Gcb::Extend), (0x10D28, Gcb::Other), (0x10EAB, Gcb::Extend), (0x10EAD, Gcb::Other),
    (0x10F46, Gcb::Extend), (0x10F51, Gcb::Other), (0x10F82, Gcb::Extend), (0x10F86, Gcb::Other), (0x11000, Gcb::SpacingMark),
    (0x11001, Gcb::Extend), (0x11002, Gcb::SpacingMark), (0x11003, Gcb::Other), (0x11038, Gcb::Extend), (0x11047, Gcb::Other),
    (0x11070, Gcb::Extend), (0x11071, Gcb::Other), (0x11073, Gcb::Extend), (0x11075, Gcb::Other), (0x1107F, Gcb::Extend),
    (0x11082, Gcb::SpacingMark), (0x11083, Gcb::Other), (0x110B0, Gcb::SpacingMark), (0x110B3, Gcb::Extend), (0x110B7, Gcb::SpacingMark),
    (0x110B9, Gcb::Extend), (0x110BB, Gcb::Other), (0x110BD, Gcb::Prepend), (0x110BE, Gcb::Other), (0x110C2, Gcb::Extend),
    (0x110C3, Gcb::Other), (0x110CD, Gcb::Prepend), (0x110CE, Gcb::Other), (0x11100, Gcb::Extend), (0x11103, Gcb::Other),
    (0x11127, Gcb::Extend), (0x1112C, Gcb::SpacingMark), (0x1112D, Gcb::Extend), (0x11135, Gcb::Other), (0x11145, Gcb::SpacingMark),
    (0x11147, Gcb::Other), (0x11173, Gcb::Extend), (0x11174, Gcb::Other), (0x11180, Gcb::Extend), (0x11182, Gcb::SpacingMark),
    (0x11183, Gcb::Other), (0x111B3, Gcb::SpacingMark), (0x111B6, Gcb::Extend), (0x111BF, Gcb::SpacingMark), (0x111C1, Gcb::Other),
    (0x111C9, Gcb::Extend), (0x111CD, Gcb::Other), (0x111CE, Gcb::SpacingMark), (0x111CF, Gcb::Extend), (0x111D0, Gcb::Other),
    (0x1122C, Gcb::SpacingMark), (0x1122F, Gcb::Extend), (0x11232, Gcb::SpacingMark), (0x11234, Gcb::Extend), (0x11235, Gcb::SpacingMark),
    (0x11236, Gcb::Extend), (0x11238, Gcb::Other), (0x1123E, Gcb::Extend), (0x1123F, Gcb::Other), (0x112DF, Gcb::Extend),
    (0x112E0, Gcb::SpacingMark), (0x112E3, Gcb::Extend), (0x112EB, Gcb::Other), (0x11300, Gcb::Extend), (0x11302, Gcb::SpacingMark),
    (0x11304, Gcb::Other), (0x1133B, Gcb::Extend), (0x1133D, Gcb::Other), (0x1133E, Gcb::SpacingMark), (0x11340, Gcb::Extend),
    (0x11341, Gcb::SpacingMark), (0x11345, Gcb::Other), (0x11347, Gcb::SpacingMark), (0x11349, Gcb::Other), (0x1134B, Gcb::SpacingMark),
    (0x1134E, Gcb::Other), (0x11357, Gcb::SpacingMark), (0x11358, Gcb::Other), (0x11362, Gcb::SpacingMark), (0x11364, Gcb::Other),
    (0x11366, Gcb::Extend), (0x1136D, Gcb::Other), (0x11370, Gcb::Extend), (0x11375, Gcb::Other), (0x11435, Gcb::SpacingMark),
    (0x11438, Gcb::Extend), (0x11440, Gcb::SpacingMark), (0x11442, Gcb::Extend), (0x11445, Gcb::SpacingMark), (0x11446, Gcb::Extend),
    (0x11447, Gcb::Other), (0x1145E, Gcb::Extend), (0x1145F, Gcb::Other), (0x114B0, Gcb::SpacingMark), (0x114B3, Gcb::Extend),
    (0x114B9, Gcb::SpacingMark), (0x114BA, Gcb::Extend), (0x114BB, Gcb::SpacingMark), (0x114BF, Gcb::Extend), (0x114C1, Gcb::SpacingMark),
    (0x114C2, Gcb::Extend), (0x114C4, Gcb::Other), (0x115AF, Gcb::SpacingMark), (0x115B2, Gcb::Extend), (0x115B6, Gcb::Other),
    (0x115B8, Gcb::SpacingMark), (0x115BC, Gcb::Extend), (0x115BE, Gcb::SpacingMark), (0x115BF, Gcb::Extend), (0x115C1, Gcb::Other),
    (0x115DC, Gcb::Extend), (0x115DE, Gcb::Other), (0x11630, Gcb::SpacingMark), (0x11633, Gcb::Extend), (0x1163B, Gcb::SpacingMark),
    (0x1163D, Gcb::Extend), (0x1163E, Gcb::SpacingMark), (0x1163F, Gcb::Extend), (0x11641, Gcb::Other), (0x116AB, Gcb::Extend),
    (0x116AC, Gcb::SpacingMark), (0x116AD, Gcb::Extend), (0x116AE, Gcb::SpacingMark), (0x116B0, Gcb::Extend), (0x116B6, Gcb::SpacingMark),
    (0x116B7, Gcb::Extend), (0x116B8, Gcb::Other), (0x1171D, Gcb::Extend), (0x11720, Gcb::SpacingMark), (0x11722, Gcb::Extend),
    (0x11726, Gcb::SpacingMark), (0x11727, Gcb::Extend), (0x1172C, Gcb::Other), (0x1182C, Gcb::SpacingMark), (0x1182F, Gcb::Extend),
    (0x11838, Gcb::SpacingMark), (0x11839, Gcb::Extend), (0x1183B, Gcb::Other), (0x11930, Gcb::SpacingMark), (0x11936, Gcb::Other),
    (0x11937, Gcb::SpacingMark), (0x11939, Gcb::Other), (0x1193B, Gcb::Extend), (0x1193D, Gcb::SpacingMark), (0x1193E, Gcb::Extend),
    (0x1193F, Gcb::Other), (0x11940, Gcb::SpacingMark), (0x11941, Gcb::Other), (0x11942, Gcb::SpacingMark), (0x11943, Gcb::Extend),
    (0x11944, Gcb::Other), (0x119D1, Gcb::SpacingMark), (0x119D4, Gcb::Extend), (0x119D8, Gcb::Other), (0x119DA, Gcb::Extend),
    (0x119DC, Gcb::SpacingMark), (0x119E0, Gcb::Extend), (0x119E1, Gcb::Other), (0x119E4, Gcb::SpacingMark), (0x119E5, Gcb::Other),
    (0x11A01, Gcb::Extend), (0x11A0B, Gcb::Other), (0x11A33, Gcb::Extend), (0x11A39, Gcb::SpacingMark), (0x11A3A, Gcb::Other),
    (0x11A3B, Gcb::Extend), (0x11A3F, Gcb::Other), (0x11A47, Gcb::Extend), (0x11A48, Gcb::Other), (0x11A51, Gcb::Extend),
    (0x11A57, Gcb::SpacingMark), (0x11A59, Gcb::Extend), (0x11A5C, Gcb::Other), (0x11A8A, Gcb::Extend), (0x11A97, Gcb::SpacingMark),
    (0x11A98, Gcb::Extend), (0x11A9A, Gcb::Other), (0x11C2F, Gcb::SpacingMark), (0x11C30, Gcb::Extend), (0x11C37, Gcb::Other),
    (0x11C38, Gcb::Extend), (0x11C3E, Gcb::SpacingMark), (0x11C3F, Gcb::Extend), (0x11C40, Gcb::Other), (0x11C92, Gcb::Extend),
    (0x11CA8, Gcb::Other), (0x11CA9, Gcb::SpacingMark), (0x11CAA, Gcb::Extend), (0x11CB1, Gcb::SpacingMark), (0x11CB2, Gcb::Extend),
    (0x11CB4, Gcb::SpacingMark), (0x11CB5, Gcb::Extend), (0x11CB7, Gcb::Other), (0x11D31, Gcb::Extend), (0x11D37, Gcb::Other),
    (0x11D3A, Gcb::Extend), (0x11D3B, Gcb::Other), (0x11D3C, Gcb::Extend), (0x11D3E, Gcb::Other), (0x11D3F, Gcb::Extend),
    (0x11D46, Gcb::Other), (0x11D47, Gcb::Extend), (0x11D48, Gcb::Other), (0x11D8A, Gcb::SpacingMark), (0x11D8F, Gcb::Other),
    (0x11D90, Gcb::Extend), (0x11D92, Gcb::Other), (0x11D93, Gcb::SpacingMark), (0x11D95, Gcb::Extend), (0x11D96, Gcb::SpacingMark),
    (0x11D97, Gcb::Extend), (0x11D98, Gcb::Other), (0x11EF3, Gcb::Extend), (0x11EF5, Gcb::SpacingMark), (0x11EF7, Gcb::Other),
    (0x13430, Gcb::Control), (0x13439, Gcb::Other), (0x16AF0, Gcb::Extend), (0x16AF5, Gcb::Other), (0x16B30, Gcb::Extend),
    (0x16B37, Gcb::Other), (0x16F4F, Gcb::Extend), (0x16F50, Gcb::Other), (0x16F51, Gcb::SpacingMark), (0x16F88, Gcb::Other),
    (0x16F8F, Gcb::Extend), (0x16F93, Gcb::Other), (0x16FE4, Gcb::Extend), (0x16FE5, Gcb::Other), (0x16FF0, Gcb::SpacingMark),
    (0x16FF2, Gcb::Other), (0x1BC9D, Gcb::Extend), (0x1BC9F, Gcb::Other), (0x1BCA0, Gcb::Control), (0x1BCA4, Gcb::Other),
    (0x1CF00, Gcb::Extend), (0x1CF2E, Gcb::Other), (0x1CF30, Gcb::Extend), (0x1CF47, Gcb::Other), (0x1D165, Gcb::SpacingMark),
    (0x1D167, Gcb::Extend), (0x1D16A, Gcb::Other), (0x1D16D, Gcb::SpacingMark), (0x1D173, Gcb::Control), (0x1D17B, Gcb::Extend),
    (0x1D183, Gcb::Other), (0x1D185, Gcb::Extend), (0x1D18C, Gcb::Other), (0x1D1AA, Gcb::Extend), (0x1D1AE, Gcb::Other),
    (0x1D242, Gcb::Extend), (0x1D245, Gcb::Other), (0x1DA00, Gcb::Extend), (0x1DA37, Gcb::Other), (0x1DA3B, Gcb::Extend),
    (0x1DA6D, Gcb::Other), (0x1DA75, Gcb::Extend), (0x1DA76, Gcb::Other), (0x1DA84, Gcb::Extend), (0x1DA85, Gcb::Other),
    (0x1DA9B, Gcb::Extend), (0x1DAA0, Gcb::Other), (0x1DAA1, Gcb::Extend), (0x1DAB0, Gcb::Other), (0x1E000, Gcb::Extend),
    (0x1E007, Gcb::Other), (0x1E008, Gcb::Extend), (0x1E019, Gcb::Other), (0x1E01B, Gcb::Extend), (0x1E022, Gcb::Other),
    (0x1E023, Gcb::Extend), (0x1E025, Gcb::Other), (0x1E026, Gcb::Extend), (0x1E02B, Gcb::Other), (0x1E130, Gcb::Extend),
    (0x1E137, Gcb::Other), (0x1E2AE, Gcb::Extend), (0x1E2AF, Gcb::Other), (0x1E2EC, Gcb::Extend), (0x1E2F0, Gcb::Other),
    (0x1E8D0, Gcb::Extend), (0x1E8D7, Gcb::Other), (0x1E944, Gcb::Extend), (0x1E94B, Gcb::Other), (0x1F1E6, Gcb::RegionalIndicator),
    (0x1F200, Gcb::Other), (0xE0001, Gcb::Control), (0xE0002, Gcb::Other), (0xE0020, Gcb::Control), (0xE0080, Gcb::Other),
    (0xE0100, Gcb::Extend), (0xE01F0, Gcb::Other),
];

pub(crate) static WORD_BREAK: &[(u32, Wb)] = &[
    (0x0, Wb::Other), (0xA, Wb::LF), (0xB, Wb::Newline), (0xD, Wb::CR), (0xE, Wb::Other),
    (0x22, Wb::DoubleQuote), (0x23, Wb::Other), (0x27, Wb::SingleQuote), (0x28, Wb::Other), (0x2C, Wb::MidNum),
    (0x2D, Wb::Other), (0x2E, Wb::MidNumLet), (0x2F, Wb::Other), (0x30, Wb::Numeric), (0x3A, Wb::MidLetter),
    (0x3B, Wb::MidNum), (0x3C, Wb::Other), (0x41, Wb::ALetter), (0x5B, Wb::Other), (0x5F, Wb::ExtendNumLet),
    (0x60, Wb::Other), (0x61, Wb::ALetter), (0x7B, Wb::Other), (0x85, Wb::Newline), (0x86, Wb::Other),
    (0xAA, Wb::ALetter), (0xAB, Wb::Other), (0xAD, Wb::Format), (0xAE, Wb::Other), (0xB5, Wb::ALetter),
    (0xB6, Wb::Other), (0xB7, Wb::MidLetter), (0xB8, Wb::Other), (0xBA, Wb::ALetter), (0xBB, Wb::Other),
    (0xC0, Wb::ALetter), (0xD7, Wb::Other), (0xD8, Wb::ALetter), (0xF7, Wb::Other), (0xF8, Wb::ALetter),
    (0x2C2, Wb::Other), (0x2C6, Wb::ALetter), (0x2D2, Wb::Other), (0x2E0, Wb::ALetter), (0x2E5, Wb::Other),
    (0x2EC, Wb::ALetter), (0x2ED, Wb::Other), (0x2EE, Wb::ALetter), (0x2EF, Wb::Other), (0x300, Wb::Extend),
    (0x370, Wb::ALetter), (0x375, Wb::Other), (0x376, Wb::ALetter), (0x378, Wb::Other), (0x37A, Wb::ALetter),
    (0x37E, Wb::MidNum), (0x37F, Wb::ALetter), (0x380, Wb::Other), (0x386, Wb::ALetter), (0x387, Wb::MidLetter),
    (0x388, Wb::ALetter), (0x38B, Wb::Other), (0x38C, Wb::ALetter), (0x38D, Wb::Other), (0x38E, Wb::ALetter),
    (0x3A2, Wb::Other), (0x3A3, Wb::ALetter), (0x3F6, Wb::Other), (0x3F7, Wb::ALetter), (0x482, Wb::Other),
    (0x483, Wb::Extend), (0x48A, Wb::ALetter), (0x530, Wb::Other), (0x531, Wb::ALetter), (0x557, Wb::Other),
    (0x559, Wb::ALetter), (0x55A, Wb::Other), (0x560, Wb::ALetter), (0x589, Wb::MidNum), (0x58A, Wb::Other),
    (0x591, Wb::Extend), (0x5BE, Wb::Other), (0x5BF, Wb::Extend), (0x5C0, Wb::Other), (0x5C1, Wb::Extend),
    (0x5C3, Wb::Other), (0x5C4, Wb::Extend), (0x5C6, Wb::Other), (0x5C7, Wb::Extend), (0x5C8, Wb::Other),
    (0x5D0, Wb::HebrewLetter), (0x5EB, Wb::Other), (0x5EF, Wb::HebrewLetter), (0x5F3, Wb::Other), (0x5F4, Wb::MidLetter),
    (0x5F5, Wb::Other), (0x600, Wb::Format), (0x606, Wb::Other), (0x60C, Wb::MidNum), (0x60E, Wb::Other),
    (0x610, Wb::Extend), (0x61B, Wb::Other), (0x61C, Wb::Format), (0x61D, Wb::Other), (0x620, Wb::ALetter),
    (0x64B, Wb::Extend), (0x660, Wb::Numeric), (0x66A, Wb::Other), (0x66C, Wb::MidNum), (0x66D, Wb::Other),
    (0x66E, Wb::ALetter), (0x670, Wb::Extend), (0x671, Wb::ALetter), (0x6D4, Wb::Other), (0x6D5, Wb::ALetter),
    (0x6D6, Wb::Extend), (0x6DD, Wb::Format), (0x6DE, Wb::Other), (0x6DF, Wb::Extend), (0x6E5, Wb::ALetter),
    (0x6E7, Wb::Extend), (0x6E9, Wb::Other), (0x6EA, Wb::Extend), (0x6EE, Wb::ALetter), (0x6F0, Wb::Numeric),
    (0x6FA, Wb::ALetter), (0x6FD, Wb::Other), (0x6FF, Wb::ALetter), (0x700, Wb::Other), (0x70F, Wb::Format),
    (0x710, Wb::ALetter), (0x711, Wb::Extend), (0x712, Wb::ALetter), (0x730, Wb::Extend), (0x74B, Wb::Other),
    (0x74D, Wb::ALetter), (0x7A6, Wb::Extend), (0x7B1, Wb::ALetter), (0x7B2, Wb::Other), (0x7C0, Wb::Numeric),
    (0x7CA, Wb::ALetter), (0x7EB, Wb::Extend), (0x7F4, Wb::ALetter), (0x7F6, Wb::Other), (0x7F8, Wb::MidNum),
    (0x7F9, Wb::Other), (0x7FA, Wb::ALetter), (0x7FB, Wb::Other), (0x7FD, Wb::Extend), (0x7FE, Wb::Other),
    (0x800, Wb::ALetter), (0x816, Wb::Extend), (0x81A, Wb::ALetter), (0x81B, Wb::Extend), (0x824, Wb::ALetter),
    (0x825, Wb::Extend), (0x828, Wb::ALetter), (0x829, Wb::Extend), (0x82E, Wb::Other), (0x840, Wb::ALetter),
    (0x859, Wb::Extend), (0x85C, Wb::Other), (0x860, Wb::ALetter), (0x86B, Wb::Other), (0x870, Wb::ALetter),
    (0x888, Wb::Other), (0x889, Wb::ALetter), (0x88F, Wb::Other), (0x890, Wb::Format), (0x892, Wb::Other),
    (0x898, Wb::Extend), (0x8A0, Wb::ALetter), (0x8CA, Wb::Extend), (0x8E2, Wb::Format), (0x8E3, Wb::Extend),
    (0x904, Wb::ALetter), (0x93A, Wb::Extend), (0x93D, Wb::ALetter), (0x93E, Wb::Extend), (0x950, Wb::ALetter),
    (0x951, Wb::Extend), (0x958, Wb::ALetter), (0x962, Wb::Extend), (0x964, Wb::Other), (0x966, Wb::Numeric),
    (0x970, Wb::Other), (0x971, Wb::ALetter), (0x981, Wb::Extend), (0x984, Wb::Other), (0x985, Wb::ALetter),
    (0x98D, Wb::Other), (0x98F, Wb::ALetter), (0x991, Wb::Other), (0x993, Wb::ALetter), (0x9A9, Wb::Other),
    (0x9AA, Wb::ALetter), (0x9B1, Wb::Other), (0x9B2, Wb::ALetter), (0x9B3, Wb::Other), (0x9B6, Wb::ALetter),
    (0x9BA, Wb::Other), (0x9BC, Wb::Extend), (0x9BD, Wb::ALetter), (0x9BE, Wb::Extend), (0x9C5, Wb::Other),
    (0x9C7, Wb::Extend), (0x9C9, Wb::Other), (0x9CB, Wb::Extend), (0x9CE, Wb::ALetter), (0x9CF, Wb::Other),
    (0x9D7, Wb::Extend), (0x9D8, Wb::Other), (0x9DC, Wb::ALetter), (0x9DE, Wb::Other), (0x9DF, Wb::ALetter),
    (0x9E2, Wb::Extend), (0x9E4, Wb::Other), (0x9E6, Wb::Numeric), (0x9F0, Wb::ALetter), (0x9F2, Wb::Other),
    (0x9FC, Wb::ALetter), (0x9FD, Wb::Other), (0x9FE, Wb::Extend), (0x9FF, Wb::Other), (0xA01, Wb::Extend),
    (0xA04, Wb::Other), (0xA05, Wb::ALetter), (0xA0B, Wb::Other), (0xA0F, Wb::ALetter), (0xA11, Wb::Other),
    (0xA13, Wb::ALetter), (0xA29, Wb::Other), (0xA2A, Wb::ALetter), (0xA31, Wb::Other), (0xA32, Wb::ALetter),
    (0xA34, Wb::Other), (0xA35, Wb::ALetter), (0xA37, Wb::Other), (0xA38, Wb::ALetter), (0xA3A, Wb::Other),
    (0xA3C, Wb::Extend), (0xA3D, Wb::Other), (0xA3E, Wb::Extend), (0xA43, Wb::Other), (0xA47, Wb::Extend),
    (0xA49, Wb::Other), (0xA4B, Wb::Extend), (0xA4E, Wb::Other), (0xA51, Wb::Extend), (0xA52, Wb::Other),
    (0xA59, Wb::ALetter), (0xA5D, Wb::Other), (0xA5E, Wb::ALetter), (0xA5F, Wb::Other), (0xA66, Wb::Numeric),
    (0xA70, Wb::Extend), (0xA72, Wb::ALetter), (0xA75, Wb::Extend), (0xA76, Wb::Other), (0xA81, Wb::Extend),
    (0xA84, Wb::Other), (0xA85, Wb::ALetter), (0xA8E, Wb::Other), (0xA8F, Wb::ALetter), (0xA92, Wb::Other),
    (0xA93, Wb::ALetter), (0xAA9, Wb::Other), (0xAAA, Wb::ALetter), (0xAB1, Wb::Other), (0xAB2, Wb::ALetter),
    (0xAB4, Wb::Other), (0xAB5, Wb::ALetter), (0xABA, Wb::Other), (0xABC, Wb::Extend), (0xABD, Wb::ALetter),
    (0xABE, Wb::Extend), (0xAC6, Wb::Other), (0xAC7, Wb::Extend), (0xACA, Wb::Other), (0xACB, Wb::Extend),
    (0xACE, Wb::Other), (0xAD0, Wb::ALetter), (0xAD1, Wb::Other), (0xAE0, Wb::ALetter), (0xAE2, Wb::Extend),
    (0xAE4, Wb::Other), (0xAE6, Wb::Numeric), (0xAF0, Wb::Other), (0xAF9, Wb::ALetter), (0xAFA, Wb::Extend),
    (0xB00, Wb::Other), (0xB01, Wb::Extend), (0xB04, Wb::Other), (0xB05, Wb::ALetter), (0xB0D, Wb::Other),
    (0xB0F, Wb::ALetter), (0xB11, Wb::Other), (0xB13, Wb::ALetter), (0xB29, Wb::Other), (0xB2A, Wb::ALetter),
    (0xB31, Wb::Other), (0xB32, Wb::ALetter), (0xB34, Wb::Other), (0xB35, Wb::ALetter), (0xB3A, Wb::Other),
    (0xB3C, Wb::Extend), (0xB3D, Wb::ALetter), (0xB3E, Wb::Extend), (0xB45, Wb::Other), (0xB47, Wb::Extend),
    (0xB49, Wb::Other), (0xB4B, Wb::Extend), (0xB4E, Wb::Other), (0xB55, Wb::Extend), (0xB58, Wb::Other),
    (0xB5C, Wb::ALetter), (0xB5E, Wb::Other), (0xB5F, Wb::ALetter), (0xB62, Wb::Extend), (0xB64, Wb::Other),
    (0xB66, Wb::Numeric), (0xB70, Wb::Other), (0xB71, Wb::ALetter), (0xB72, Wb::Other), (0xB82, Wb::Extend),
    (0xB83, Wb::ALetter), (0xB84, Wb::Other), (0xB85, Wb::ALetter), (0xB8B, Wb::Other), (0xB8E, Wb::ALetter),
    (0xB91, Wb::Other), (0xB92, Wb::ALetter), (0xB96, Wb::Other), (0xB99, Wb::ALetter), (0xB9B, Wb::Other),
    (0xB9C, Wb::ALetter), (0xB9D, Wb::Other), (0xB9E, Wb::ALetter), (0xBA0, Wb::Other), (0xBA3, Wb::ALetter),
    (0xBA5, Wb::Other), (0xBA8, Wb::ALetter), (0xBAB, Wb::Other), (0xBAE, Wb::ALetter), (0xBBA, Wb::Other),
    (0xBBE, Wb::Extend), (0xBC3, Wb::Other), (0xBC6, Wb::Extend), (0xBC9, Wb::Other), (0xBCA, Wb::Extend),
    (0xBCE, Wb::Other), (0xBD0, Wb::ALetter), (0xBD1, Wb::Other), (0xBD7, Wb::Extend), (0xBD8, Wb::Other),
    (0xBE6, Wb::Numeric), (0xBF0, Wb::Other), (0xC00, Wb::Extend), (0xC05, Wb::ALetter), (0xC0D, Wb::Other),
    (0xC0E, Wb::ALetter), (0xC11, Wb::Other), (0xC12, Wb::ALetter), (0xC29, Wb::Other), (0xC2A, Wb::ALetter),
    (0xC3A, Wb::Other), (0xC3C, Wb::Extend), (0xC3D, Wb::ALetter), (0xC3E, Wb::Extend), (0xC45, Wb::Other),
    (0xC46, Wb::Extend), (0xC49, Wb::Other), (0xC4A, Wb::Extend), (0xC4E, Wb::Other), (0xC55, Wb::Extend),
    (0xC57, Wb::Other), (0xC58, Wb::ALetter), (0xC5B, Wb::Other), (0xC5D, Wb::ALetter), (0xC5E, Wb::Other),
    (0xC60, Wb::ALetter), (0xC62, Wb::Extend), (0xC64, Wb::Other), (0xC66, Wb::Numeric), (0xC70, Wb::Other),
    (0xC80, Wb::ALetter), (0xC81, Wb::Extend), (0xC84, Wb::Other), (0xC85, Wb::ALetter), (0xC8D, Wb::Other),
    (0xC8E, Wb::ALetter), (0xC91, Wb::Other), (0xC92, Wb::ALetter), (0xCA9, Wb::Other), (0xCAA, Wb::ALetter),
    (0xCB4, Wb::Other), (0xCB5, Wb::ALetter), (0xCBA, Wb::Other), (0xCBC, Wb::Extend), (0xCBD, Wb::ALetter),
    (0xCBE, Wb::Extend), (0xCC5, Wb::Other), (0xCC6, Wb::Extend), (0xCC9, Wb::Other), (0xCCA, Wb::Extend),
    (0xCCE, Wb::Other), (0xCD5, Wb::Extend), (0xCD7, Wb::Other), (0xCDD, Wb::ALetter), (0xCDF, Wb::Other),
    (0xCE0, Wb::ALetter), (0xCE2, Wb::Extend), (0xCE4, Wb::Other), (0xCE6, Wb::Numeric), (0xCF0, Wb::Other),
    (0xCF1, Wb::ALetter), (0xCF3, Wb::Other), (0xD00, Wb::Extend), (0xD04, Wb::ALetter), (0xD0D, Wb::Other),
    (0xD0E, Wb::ALetter), (0xD11, Wb::Other), (0xD12, Wb::ALetter), (0xD3B, Wb::Extend), (0xD3D, Wb::ALetter),
    (0xD3E, Wb::Extend), (0xD45, Wb::Other), (0xD46, Wb::Extend), (0xD49, Wb::Other), (0xD4A, Wb::Extend),
    (0xD4E, Wb::ALetter), (0xD4F, Wb::Other), (0xD54, Wb::ALetter), (0xD57, Wb::Extend), (0xD58, Wb::Other),
    (0xD5F, Wb::ALetter), (0xD62, Wb::Extend), (0xD64, Wb::Other), (0xD66, Wb::Numeric), (0xD70, Wb::Other),
    (0xD7A, Wb::ALetter), (0xD80, Wb::Other), (0xD81, Wb::Extend), (0xD84, Wb::Other), (0xD85, Wb::ALetter),
    (0xD97, Wb::Other), (0xD9A, Wb::ALetter), (0xDB2, Wb::Other), (0xDB3, Wb::ALetter), (0xDBC, Wb::Other),
    (0xDBD, Wb::ALetter), (0xDBE, Wb::Other), (0xDC0, Wb::ALetter), (0xDC7, Wb::Other), (0xDCA, Wb::Extend),
    (0xDCB, Wb::Other), (0xDCF, Wb::Extend), (0xDD5, Wb::Other), (0xDD6, Wb::Extend), (0xDD7, Wb::Other),
    (0xDD8, Wb::Extend), (0xDE0, Wb::Other), (0xDE6, Wb::Numeric), (0xDF0, Wb::Other), (0xDF2, Wb::Extend),
    (0xDF4, Wb::Other), (0xE31, Wb::Extend), (0xE32, Wb::Other), (0xE34, Wb::Extend), (0xE3B, Wb::Other),
    (0xE47, Wb::Extend), (0xE4F, Wb::Other), (0xE50, Wb::Numeric), (0xE5A, Wb::Other), (0xEB1, Wb::Extend),
    (0xEB2, Wb::Other), (0xEB4, Wb::Extend), (0xEBD, Wb::Other), (0xEC8, Wb::Extend), (0xECE, Wb::Other),
    (0xED0, Wb::Numeric), (0xEDA, Wb::Other), (0xF00, Wb::ALetter), (0xF01, Wb::Other), (0xF18, Wb::Extend),
    (0xF1A, Wb::Other), (0xF20, Wb::Numeric), (0xF2A, Wb::Other), (0xF35, Wb::Extend), (0xF36, Wb::Other),
    (0xF37, Wb::Extend), (0xF38, Wb::Other), (0xF39, Wb::Extend), (0xF3A, Wb::Other), (0xF3E, Wb::Extend),
    (0xF40, Wb::ALetter), (0xF48, Wb::Other), (0xF49, Wb::ALetter), (0xF6D, Wb::Other), (0xF71, Wb::Extend),
    (0xF85, Wb::Other), (0xF86, Wb::Extend), (0xF88, Wb::ALetter), (0xF8D, Wb::Extend), (0xF98, Wb::Other),
    (0xF99, Wb::Extend), (0xFBD, Wb::Other), (0xFC6, Wb::Extend), (0xFC7, Wb::Other), (0x102B, Wb::Extend),
    (0x103F, Wb::Other), (0x1040, Wb::Numeric), (0x104A, Wb::Other), (0x1056, Wb::Extend), (0x105A, Wb::Other),
    (0x105E, Wb::Extend), (0x1061, Wb::Other), (0x1062, Wb::Extend), (0x1065, Wb::Other), (0x1067, Wb::Extend),
    (0x106E, Wb::Other), (0x1071, Wb::Extend), (0x1075, Wb::Other), (0x1082, Wb::Extend), (0x108E, Wb::Other),
    (0x108F, Wb::Extend), (0x1090, Wb::Numeric), (0x109A, Wb::Extend), (0x109E, Wb::Other), (0x10A0, Wb::ALetter),
    (0x10C6, Wb::Other), (0x10C7, Wb::ALetter), (0x10C8, Wb::Other), (0x10CD, Wb::ALetter), (0x10CE, Wb::Other),
    (0x10D0, Wb::ALetter), (0x10FB, Wb::Other), (0x10FC, Wb::ALetter), (0x1249, Wb::Other), (0x124A, Wb::ALetter),
    (0x124E, Wb::Other), (0x1250, Wb::ALetter), (0x1257, Wb::Other), (0x1258, Wb::ALetter), (0x1259, Wb::Other),
    (0x125A, Wb::ALetter), (0x125E, Wb::Other), (0x1260, Wb::ALetter), (0x1289, Wb::Other), (0x128A, Wb::ALetter),
    (0x128E, Wb::Other), (0x1290, Wb::ALetter), (0x12B1, Wb::Other), (0x12B2, Wb::ALetter), (0x12B6, Wb::Other),
    (0x12B8, Wb::ALetter), (0x12BF, Wb::Other), (0x12C0, Wb::ALetter), (0x12C1, Wb::Other), (0x12C2, Wb::ALetter),
    (0x12C6, Wb::Other), (0x12C8, Wb::ALetter), (0x12D7, Wb::Other), (0x12D8, Wb::ALetter), (0x1311, Wb::Other),
    (0x1312, Wb::ALetter), (0x1316, Wb::Other), (0x1318, Wb::ALetter), (0x135B, Wb::Other), (0x135D, Wb::Extend),
    (0x1360, Wb::Other), (0x1380, Wb::ALetter), (0x1390, Wb::Other), (0x13A0, Wb::ALetter), (0x13F6, Wb::Other),
    (0x13F8, Wb::ALetter), (0x13FE, Wb::Other), (0x1401, Wb::ALetter), (0x166D, Wb::Other), (0x166F, Wb::ALetter),
    (0x1680, Wb::Other), (0x1681, Wb::ALetter), (0x169B, Wb::Other), (0x16A0, Wb::ALetter), (0x16EB, Wb::Other),
    (0x16EE, Wb::ALetter), (0x16F9, Wb::Other), (0x1700, Wb::ALetter), (0x1712, Wb::Extend), (0x1716, Wb::Other),
    (0x171F, Wb::ALetter), (0x1732, Wb::Extend), (0x1735, Wb::Other), (0x1740, Wb::ALetter), (0x1752, Wb::Extend),
    (0x1754, Wb::Other), (0x1760, Wb::ALetter), (0x176D, Wb::Other), (0x176E, Wb::ALetter), (0x1771, Wb::Other),
    (0x1772, Wb::Extend), (0x1774, Wb::Other), (0x17B4, Wb::Extend), (0x17D4, Wb::Other), (0x17DD, Wb::Extend),
    (0x17DE, Wb::Other), (0x17E0, Wb::Numeric), (0x17EA, Wb::Other), (0x180B, Wb::Extend), (0x180E, Wb::Format),
    (0x180F, Wb::Extend), (0x1810, Wb::Numeric), (0x181A, Wb::Other), (0x1820, Wb::ALetter), (0x1879, Wb::Other),
    (0x1880, Wb::ALetter), (0x1885, Wb::Extend), (0x1887, Wb::ALetter), (0x18A9, Wb::Extend), (0x18AA, Wb::ALetter),
    (0x18AB, Wb::Other), (0x18B0, Wb::ALetter), (0x18F6, Wb::Other), (0x1900, Wb::ALetter), (0x191F, Wb::Other),
    (0x1920, Wb::Extend), (0x192C, Wb::Other), (0x1930, Wb::Extend), (0x193C, Wb::Other), (0x1946, Wb::Numeric),
    (0x1950, Wb::Other), (0x19D0, Wb::Numeric), (0x19DA, Wb::Other), (0x1A00, Wb::ALetter), (0x1A17, Wb::Extend),
    (0x1A1C, Wb::Other), (0x1A55, Wb::Extend), (0x1A5F, Wb::Other), (0x1A60, Wb::Extend), (0x1A7D, Wb::Other),
    (0x1A7F, Wb::Extend), (0x1A80, Wb::Numeric), (0x1A8A, Wb::Other), (0x1A90, Wb::Numeric), (0x1A9A, Wb::Other),
    (0x1AB0, Wb::Extend), (0x1ACF, Wb::Other), (0x1B00, Wb::Extend), (0x1B05, Wb::ALetter), (0x1B34, Wb::Extend),
    (0x1B45, Wb::ALetter), (0x1B4D, Wb::Other), (0x1B50, Wb::Numeric), (0x1B5A, Wb::Other), (0x1B6B, Wb::Extend),
    (0x1B74, Wb::Other), (0x1B80, Wb::Extend), (0x1B83, Wb::ALetter), (0x1BA1, Wb::Extend), (0x1BAE, Wb::ALetter),
    (0x1BB0, Wb::Numeric), (0x1BBA, Wb::ALetter), (0x1BE6, Wb::Extend), (0x1BF4, Wb::Other), (0x1C00, Wb::ALetter),
    (0x1C24, Wb::Extend), (0x1C38, Wb::Other), (0x1C40, Wb::Numeric), (0x1C4A, Wb::Other), (0x1C4D, Wb::ALetter),
    (0x1C50, Wb::Numeric), (0x1C5A, Wb::ALetter), (0x1C7E, Wb::Other), (0x1C80, Wb::ALetter), (0x1C89, Wb::Other),
    (0x1C90, Wb::ALetter), (0x1CBB, Wb::Other), (0x1CBD, Wb::ALetter), (0x1CC0, Wb::Other), (0x1CD0, Wb::Extend),
    (0x1CD3, Wb::Other), (0x1CD4, Wb::Extend), (0x1CE9, Wb::ALetter), (0x1CED, Wb::Extend), (0x1CEE, Wb::ALetter),
    (0x1CF4, Wb::Extend), (0x1CF5, Wb::ALetter), (0x1CF7, Wb::Extend), (0x1CFA, Wb::ALetter), (0x1CFB, Wb::Other),
    (0x1D00, Wb::ALetter), (0x1DC0, Wb::Extend), (0x1E00, Wb::ALetter), (0x1F16, Wb::Other), (0x1F18, Wb::ALetter),
    (0x1F1E, Wb::Other), (0x1F20, Wb::ALetter), (0x1F46, Wb::Other), (0x1F48, Wb::ALetter), (0x1F4E, Wb::Other),
    (0x1F50, Wb::ALetter), (0x1F58, Wb::Other), (0x1F59, Wb::ALetter), (0x1F5A, Wb::Other), (0x1F5B, Wb::ALetter),
    (0x1F5C, Wb::Other), (0x1F5D, Wb::ALetter), (0x1F5E, Wb::Other), (0x1F5F, Wb::ALetter), (0x1F7E, Wb::Other),
    (0x1F80, Wb::ALetter), (0x1FB5, Wb::Other), (0x1FB6, Wb::ALetter), (0x1FBD, Wb::Other), (0x1FBE, Wb::ALetter),
    (0x1FBF, Wb::Other), (0x1FC2, Wb::ALetter), (0x1FC5, Wb::Other), (0x1FC6, Wb::ALetter), (0x1FCD, Wb::Other),
    (0x1FD0, Wb::ALetter), (0x1FD4, Wb::Other), (0x1FD6, Wb::ALetter), (0x1FDC, Wb::Other), (0x1FE0, Wb::ALetter),
    (0x1FED, Wb::Other), (0x1FF2, Wb::ALetter), (0x1FF5, Wb::Other), (0x1FF6, Wb::ALetter), (0x1FFD, Wb::Other),
    (0x200B, Wb::Format), (0x200C, Wb::Extend), (0x200E, Wb::Format), (0x2010, Wb::Other), (0x2018, Wb::MidNumLet),
    (0x201A, Wb::Other), (0x2024, Wb::MidNumLet), (0x2025, Wb::Other), (0x2027, Wb::MidLetter), (0x2028, Wb::Newline),
    (0x202A, Wb::Format), (0x202F, Wb::ExtendNumLet), (0x2030, Wb::Other), (0x203F, Wb::ExtendNumLet), (0x2041, Wb::Other),
    (0x2044, Wb::MidNum), (0x2045, Wb::Other), (0x2054, Wb::ExtendNumLet), (0x2055, Wb::Other), (0x2060, Wb::Format),
    (0x2065, Wb::Other), (0x2066, Wb::Format), (0x2070, Wb::Other), (0x2071, Wb::ALetter), (0x2072, Wb::Other),
    (0x207F, Wb::ALetter), (0x2080, Wb::Other), (0x2090, Wb::ALetter), (0x209D, Wb::Other), (0x20D0, Wb::Extend),
    (0x20F1, Wb::Other), (0x2102, Wb::ALetter), (0x2103, Wb::Other), (0x2107, Wb::ALetter), (0x2108, Wb::Other),
    (0x210A, Wb::ALetter), (0x2114, Wb::Other), (0x2115, Wb::ALetter), (0x2116, Wb::Other), (0x2119, Wb::ALetter),
    (0x211E, Wb::Other), (0x2124, Wb::ALetter), (0x2125, Wb::Other), (0x2126, Wb::ALetter), (0x2127, Wb::Other),
    (0x2128, Wb::ALetter), (0x2129, Wb::Other), (0x212A, Wb::ALetter), (0x212E, Wb::Other), (0x212F, Wb::ALetter),
    (0x213A, Wb::Other), (0x213C, Wb::ALetter), (0x2140, Wb::Other), (0x2145, Wb::ALetter), (0x214A, Wb::Other),
    (0x214E, Wb::ALetter), (0x214F, Wb::Other), (0x2160, Wb::ALetter), (0x2189, Wb::Other), (0x2C00, Wb::ALetter),
    (0x2CE5, Wb::Other), (0x2CEB, Wb::ALetter), (0x2CEF, Wb::Extend), (0x2CF2, Wb::ALetter), (0x2CF4, Wb::Other),
    (0x2D00, Wb::ALetter), (0x2D26, Wb::Other), (0x2D27, Wb::ALetter), (0x2D28, Wb::Other), (0x2D2D, Wb::ALetter),
    (0x2D2E, Wb::Other), (0x2D30, Wb::ALetter), (0x2D68, Wb::Other), (0x2D6F, Wb::ALetter), (0x2D70, Wb::Other),
    (0x2D7F, Wb::Extend), (0x2D80, Wb::ALetter), (0x2D97, Wb::Other), (0x2DA0, Wb::ALetter), (0x2DA7, Wb::Other),
    (0x2DA8, Wb::ALetter), (0x2DAF, Wb::Other), (0x2DB0, Wb::ALetter), (0x2DB7, Wb::Other), (0x2DB8, Wb::ALetter),
    (0x2DBF, Wb::Other), (0x2DC0, Wb::ALetter), (0x2DC7, Wb::Other), (0x2DC8, Wb::ALetter), (0x2DCF, Wb::Other),
    (0x2DD0, Wb::ALetter), (0x2DD7, Wb::Other), (0x2DD8, Wb::ALetter), (0x2DDF, Wb::Other), (0x2DE0, Wb::Extend),
    (0x2E00, Wb::Other), (0x2E2F, Wb::ALetter), (0x2E30, Wb::Other), (0x3006, Wb::ALetter), (0x3007, Wb::Other),
    (0x302A, Wb::Extend), (0x3030, Wb::Other), (0x3031, Wb::ALetter), (0x3036, Wb::Other), (0x303B, Wb::ALetter),
    (0x303D, Wb::Other), (0x3099, Wb::Extend), (0x309B, Wb::Other), (0x30A1, Wb::Katakana), (0x30FB, Wb::Other),
    (0x30FC, Wb::Katakana), (0x3100, Wb::Other), (0x3105, Wb::ALetter), (0x3130, Wb::Other), (0x3131, Wb::ALetter),
    (0x318F, Wb::Other), (0x31A0, Wb::ALetter), (0x31C0, Wb::Other), (0x31F0, Wb::Katakana), (0x3200, Wb::Other),
    (0x32D0, Wb::Katakana), (0x32FF, Wb::Other), (0x3300, Wb::Katakana), (0x3358, Wb::Other), (0xA000, Wb::ALetter),
    (0xA48D, Wb::Other), (0xA4D0, Wb::ALetter), (0xA4FE, Wb::Other), (0xA500, Wb::ALetter), (0xA60D, Wb::Other),
    (0xA610, Wb::ALetter), (0xA620, Wb::Numeric), (0xA62A, Wb::ALetter), (0xA62C, Wb::Other), (0xA640, Wb::ALetter),
    (0xA66F, Wb::Extend), (0xA673, Wb::Other), (0xA674, Wb::Extend), (0xA67E, Wb::Other), (0xA67F, Wb::ALetter),
    (0xA69E, Wb::Extend), (0xA6A0, Wb::ALetter), (0xA6F0, Wb::Extend), (0xA6F2, Wb::Other), (0xA717, Wb::ALetter),
    (0xA720, Wb::Other), (0xA722, Wb::ALetter), (0xA789, Wb::Other), (0xA78B, Wb::ALetter), (0xA7CB, Wb::Other),
    (0xA7D0, Wb::ALetter), (0xA7D2, Wb::Other), (0xA7D3, Wb::ALetter), (0xA7D4, Wb::Other), (0xA7D5, Wb::ALetter),
    (0xA7DA, Wb::Other), (0xA7F2, Wb::ALetter), (0xA802, Wb::Extend), (0xA803, Wb::ALetter), (0xA806, Wb::Extend),
    (0xA807, Wb::ALetter), (0xA80B, Wb::Extend), (0xA80C, Wb::ALetter), (0xA823, Wb::Extend), (0xA828, Wb::Other),
    (0xA82C, Wb::Extend), (0xA82D, Wb::Other), (0xA840, Wb::ALetter), (0xA874, Wb::Other), (0xA880, Wb::Extend),
    (0xA882, Wb::ALetter), (0xA8B4, Wb::Extend), (0xA8C6, Wb::Other), (0xA8D0, Wb::Numeric), (0xA8DA, Wb::Other),
    (0xA8E0, Wb::Extend), (0xA8F2, Wb::ALetter), (0xA8F8, Wb::Other), (0xA8FB, Wb::ALetter), (0xA8FC, Wb::Other),
    (0xA8FD, Wb::ALetter), (0xA8FF, Wb::Extend), (0xA900, Wb::Numeric), (0xA90A, Wb::ALetter), (0xA926, Wb::Extend),
    (0xA92E, Wb::Other), (0xA930, Wb::ALetter), (0xA947, Wb::Extend), (0xA954, Wb::Other), (0xA960, Wb::ALetter),
    (0xA97D, Wb::Other), (0xA980, Wb::Extend), (0xA984, Wb::ALetter), (0xA9B3, Wb::Extend), (0xA9C1, Wb::Other),
    (0xA9CF, Wb::ALetter), (0xA9D0, Wb::Numeric), (0xA9DA, Wb::Other), (0xA9E5, Wb::Extend), (0xA9E6, Wb::Other),
    (0xA9F0, Wb::Numeric), (0xA9FA, Wb::Other), (0xAA00, Wb::ALetter), (0xAA29, Wb::Extend), (0xAA37, Wb::Other),
    (0xAA40, Wb::ALetter), (0xAA43, Wb::Extend), (0xAA44, Wb::ALetter), (0xAA4C, Wb::Extend), (0xAA4E, Wb::Other),
    (0xAA50, Wb::Numeric), (0xAA5A, Wb::Other), (0xAA7B, Wb::Extend), (0xAA7E, Wb::Other), (0xAAB0, Wb::Extend),
    (0xAAB1, Wb::Other), (0xAAB2, Wb::Extend), (0xAAB5, Wb::Other), (0xAAB7, Wb::Extend), (0xAAB9, Wb::Other),
    (0xAABE, Wb::Extend), (0xAAC0, Wb::Other), (0xAAC1, Wb::Extend), (0xAAC2, Wb::Other), (0xAAE0, Wb::ALetter),
    (0xAAEB, Wb::Extend), (0xAAF0, Wb::Other), (0xAAF2, Wb::ALetter), (0xAAF5, Wb::Extend), (0xAAF7, Wb::Other),
    (0xAB01, Wb::ALetter), (0xAB07, Wb::Other), (0xAB09, Wb::ALetter), (0xAB0F, Wb::Other), (0xAB11, Wb::ALetter),
    (0xAB17, Wb::Other), (0xAB20, Wb::ALetter), (0xAB27, Wb::Other), (0xAB28, Wb::ALetter), (0xAB2F, Wb::Other),
    (0xAB30, Wb::ALetter), (0xAB5B, Wb::Other), (0xAB5C, Wb::ALetter), (0xAB6A, Wb::Other), (0xAB70, Wb::ALetter),
    (0xABE3, Wb::Extend), (0xABEB, Wb::Other), (0xABEC, Wb::Extend), (0xABEE, Wb::Other), (0xABF0, Wb::Numeric),
    (0xABFA, Wb::Other), (0xAC00, Wb::ALetter), (0xD7A4, Wb::Other), (0xD7B0, Wb::ALetter), (0xD7C7, Wb::Other),
    (0xD7CB, Wb::ALetter), (0xD7FC, Wb::Other), (0xFB00, Wb::ALetter), (0xFB07, Wb::Other), (0xFB13, Wb::ALetter),
    (0xFB18, Wb::Other), (0xFB1D, Wb::HebrewLetter), (0xFB1E, Wb::Extend), (0xFB1F, Wb::HebrewLetter), (0xFB29, Wb::Other),
    (0xFB2A, Wb::HebrewLetter), (0xFB37, Wb::Other), (0xFB38, Wb::HebrewLetter), (0xFB3D, Wb::Other), (0xFB3E, Wb::HebrewLetter),
    (0xFB3F, Wb::Other), (0xFB40, Wb::HebrewLetter), (0xFB42, Wb::Other), (0xFB43, Wb::HebrewLetter), (0xFB45, Wb::Other),
    (0xFB46, Wb::HebrewLetter), (0xFB50, Wb::ALetter), (0xFBB2, Wb::Other), (0xFBD3, Wb::ALetter), (0xFD3E, Wb::Other),
    (0xFD50, Wb::ALetter), (0xFD90, Wb::Other), (0xFD92, Wb::ALetter), (0xFDC8, Wb::Other), (0xFDF0, Wb::ALetter),
    (0xFDFC, Wb::Other), (0xFE00, Wb::Extend), (0xFE10, Wb::MidNum), (0xFE11, Wb::Other), (0xFE13, Wb::MidLetter),
    (0xFE14, Wb::MidNum), (0xFE15, Wb::Other), (0xFE20, Wb::Extend), (0xFE30, Wb::Other), (0xFE33, Wb::ExtendNumLet),
    (0xFE35, Wb::Other), (0xFE4D, Wb::ExtendNumLet), (0xFE50, Wb::MidNum), (0xFE51, Wb::Other), (0xFE52, Wb::MidNumLet),
    (0xFE53, Wb::Other), (0xFE54, Wb::MidNum), (0xFE55, Wb::MidLetter), (0xFE56, Wb::Other), (0xFE70, Wb::ALetter),
    (0xFE75, Wb::Other), (0xFE76, Wb::ALetter), (0xFEFD, Wb::Other), (0xFEFF, Wb::Format), (0xFF00, Wb::Other),
    (0xFF07, Wb::MidNumLet), (0xFF08, Wb::Other), (0xFF0C, Wb::MidNum), (0xFF0D, Wb::Other), (0xFF0E, Wb::MidNumLet),
    (0xFF0F, Wb::Other), (0xFF10, Wb::Numeric), (0xFF1A, Wb::MidLetter), (0xFF1B, Wb::MidNum), (0xFF1C, Wb::Other),
    (0xFF21, Wb::ALetter), (0xFF3B, Wb::Other), (0xFF3F, Wb::ExtendNumLet), (0xFF40, Wb::Other), (0xFF41, Wb::ALetter),
    (0xFF5B, Wb::Other), (0xFF66, Wb::Katakana), (0xFF9E, Wb::Extend), (0xFFA0, Wb::ALetter), (0xFFBF, Wb::Other),
    (0xFFC2, Wb::ALetter), (0xFFC8, Wb::Other), (0xFFCA, Wb::ALetter), (0xFFD0, Wb::Other), (0xFFD2, Wb::ALetter),
    (0xFFD8, Wb::Other), (0xFFDA, Wb::ALetter), (0xFFDD, Wb::Other), (0xFFF9, Wb::Format), (0xFFFC, Wb::Other),
    (0x10000, Wb::ALetter), (0x1000C, Wb::Other), (0x1000D, Wb::ALetter), (0x10027, Wb::Other), (0x10028, Wb::ALetter),
    (0x1003B, Wb::Other), (0x1003C, Wb::ALetter), (0x1003E, Wb::Other), (0x1003F, Wb::ALetter), (0x1004E, Wb::Other),
    (0x10050, Wb::ALetter), (0x1005E, Wb::Other), (0x10080, Wb::ALetter), (0x100FB, Wb::Other), (0x10140, Wb::ALetter),
    (0x10175, Wb::Other), (0x101FD, Wb::Extend), (0x101FE, Wb::Other), (0x10280, Wb::ALetter), (0x1029D, Wb::Other),
    (0x102A0, Wb::ALetter), (0x102D1, Wb::Other), (0x102E0, Wb::Extend), (0x102E1, Wb::Other), (0x10300, Wb::ALetter),
    (0x10320, Wb::Other), (0x1032D, Wb::ALetter), (0x1034B, Wb::Other), (0x10350, Wb::ALetter), (0x10376, Wb::Extend),
    (0x1037B, Wb::Other), (0x10380, Wb::ALetter), (0x1039E, Wb::Other), (0x103A0, Wb::ALetter), (0x103C4, Wb::Other),
    (0x103C8, Wb::ALetter), (0x103D0, Wb::Other), (0x103D1, Wb::ALetter), (0x103D6, Wb::Other), (0x10400, Wb::ALetter),
    (0x1049E, Wb::Other), (0x104A0, Wb::Numeric), (0x104AA, Wb::Other), (0x104B0, Wb::ALetter), (0x104D4, Wb::Other),
    (0x104D8, Wb::ALetter), (0x104FC, Wb::Other), (0x10500, Wb::ALetter), (0x10528, Wb::Other), (0x10530, Wb::ALetter),
    (0x10564, Wb::Other), (0x10570, Wb::ALetter), (0x1057B, Wb::Other), (0x1057C, Wb::ALetter), (0x1058B, Wb::Other),
    (0x1058C, Wb::ALetter), (0x10593, Wb::Other), (0x10594, Wb::ALetter), (0x10596, Wb::Other), (0x10597, Wb::ALetter),
    (0x105A2, Wb::Other), (0x105A3, Wb::ALetter), (0x105B2, Wb::Other), (0x105B3, Wb::ALetter), (0x105BA, Wb::Other),
    (0x105BB, Wb::ALetter), (0x105BD, Wb::Other), (0x10600, Wb::ALetter), (0x10737, Wb::Other), (0x10740, Wb::ALetter),
    (0x10756, Wb::Other), (0x10760, Wb::ALetter), (0x10768, Wb::Other), (0x10780, Wb::ALetter), (0x10786, Wb::Other),
    (0x10787, Wb::ALetter), (0x107B1, Wb::Other), (0x107B2, Wb::ALetter), (0x107BB, Wb::Other), (0x10800, Wb::ALetter),
    (0x10806, Wb::Other), (0x10808, Wb::ALetter), (0x10809, Wb::Other), (0x1080A, Wb::ALetter), (0x10836, Wb::Other),
    (0x10837, Wb::ALetter), (0x10839, Wb::Other), (0x1083C, Wb::ALetter), (0x1083D, Wb::Other), (0x1083F, Wb::ALetter),
    (0x10856, Wb::Other), (0x10860, Wb::ALetter), (0x10877, Wb::Other), (0x10880, Wb::ALetter), (0x1089F, Wb::Other),
    (0x108E0, Wb::ALetter), (0x108F3, Wb::Other), (0x108F4, Wb::ALetter), (0x108F6, Wb::Other), (0x10900, Wb::ALetter),
    (0x10916, Wb::Other), (0x10920, Wb::ALetter), (0x1093A, Wb::Other), (0x10980, Wb::ALetter), (0x109B8, Wb::Other),
    (0x109BE, Wb::ALetter), (0x109C0, Wb::Other), (0x10A00, Wb::ALetter), (0x10A01, Wb::Extend), (0x10A04, Wb::Other),
    (0x10A05, Wb::Extend), (0x10A07, Wb::Other), (0x10A0C, Wb::Extend), (0x10A10, Wb::ALetter), (0x10A14, Wb::Other),
    (0x10A15, Wb::ALetter), (0x10A18, Wb::Other), (0x10A19, Wb::ALetter), (0x10A36, Wb::Other), (0x10A38, Wb::Extend),
    (0x10A3B, Wb::Other), (0x10A3F, Wb::Extend), (0x10A40, Wb::Other), (0x10A60, Wb::ALetter), (0x10A7D, Wb::Other),
    (0x10A80, Wb::ALetter), (0x10A9D, Wb::Other), (0x10AC0, Wb::ALetter), (0x10AC8, Wb::Other), (0x10AC9, Wb::ALetter),
    (0x10AE5, Wb::Extend), (0x10AE7, Wb::Other), (0x10B00, Wb::ALetter), (0x10B36, Wb::Other), (0x10B40, Wb::ALetter),
    (0x10B56, Wb::Other), (0x10B60, Wb::ALetter), (0x10B73, Wb::Other), (0x10B80, Wb::ALetter), (0x10B92, Wb::Other),
    (0x10C00, Wb::ALetter), (0x10C49, Wb::Other), (0x10C80, Wb::ALetter), (0x10CB3, Wb::Other), (0x10CC0, Wb::ALetter),
    (0x10CF3, Wb::Other), (0x10D00, Wb::ALetter), (0x10D24, Wb::Extend), (0x10D28, Wb::Other), (0x10D30, Wb::Numeric),
    (0x10D3A, Wb::Other), (0x10E80, Wb::ALetter), (0x10EAA, Wb::Other), (0x10EAB, Wb::Extend), (0x10EAD, Wb::Other),
    (0x10EB0, Wb::ALetter), (0x10EB2, Wb::Other), (0x10F00, Wb::ALetter), (0x10F1D, Wb::Other), (0x10F27, Wb::ALetter),
    (0x10F28, Wb::Other), (0x10F30, Wb::ALetter), (0x10F46, Wb::Extend), (0x10F51, Wb::Other), (0x10F70, Wb::ALetter),
    (0x10F82, Wb::Extend), (0x10F86, Wb::Other), (0x10FB0, Wb::ALetter), (0x10FC5, Wb::Other), (0x10FE0, Wb::ALetter),
    (0x10FF7, Wb::Other), (0x11000, Wb::Extend), (0x11003, Wb::ALetter), (0x11038, Wb::Extend), (0x11047, Wb::Other),
    (0x11066, Wb::Numeric), (0x11070, Wb::Extend), (0x11071, Wb::ALetter), (0x11073, Wb::Extend), (0x11075, Wb::ALetter),
    (0x11076, Wb::Other), (0x1107F, Wb::Extend), (0x11083, Wb::ALetter), (0x110B0, Wb::Extend), (0x110BB, Wb::Other),
    (0x110BD, Wb::Format), (0x110BE, Wb::Other), (0x110C2, Wb::Extend), (0x110C3, Wb::Other), (0x110CD, Wb::Format),
    (0x110CE, Wb::Other), (0x110D0, Wb::ALetter), (0x110E9, Wb::Other), (0x110F0, Wb::Numeric), (0x110FA, Wb::Other),
    (0x11100, Wb::Extend), (0x11103, Wb::ALetter), (0x11127, Wb::Extend), (0x11135, Wb::Other), (0x11136, Wb::Numeric),
    (0x11140, Wb::Other), (0x11144, Wb::ALetter), (0x11145, Wb::Extend), (0x11147, Wb::ALetter), (0x11148, Wb::Other),
    (0x11150, Wb::ALetter), (0x11173, Wb::Extend), (0x11174, Wb::Other), (0x11176, Wb::ALetter), (0x11177, Wb::Other),
    (0x11180, Wb::Extend), (0x11183, Wb::ALetter), (0x111B3, Wb::Extend), (0x111C1, Wb::ALetter), (0x111C5, Wb::Other),
    (0x111C9, Wb::Extend), (0x111CD, Wb::Other), (0x111CE, Wb::Extend), (0x111D0, Wb::Numeric), (0x111DA, Wb::ALetter),
    (0x111DB, Wb::Other), (0x111DC, Wb::ALetter), (0x111DD, Wb::Other), (0x11200, Wb::ALetter), (0x11212, Wb::Other),
    (0x11213, Wb::ALetter), (0x1122C, Wb::Extend), (0x11238, Wb::Other), (0x1123E, Wb::Extend), (0x1123F, Wb::Other),
    (0x11280, Wb::ALetter), (0x11287, Wb::Other), (0x11288, Wb::ALetter), (0x11289, Wb::Other), (0x1128A, Wb::ALetter),
    (0x1128E, Wb::Other), (0x1128F, Wb::ALetter), (0x1129E, Wb::Other), (0x1129F, Wb::ALetter), (0x112A9, Wb::Other),
    (0x112B0, Wb::ALetter), (0x112DF, Wb::Extend), (0x112EB, Wb::Other), (0x112F0, Wb::Numeric), (0x112FA, Wb::Other),
    (0x11300, Wb::Extend), (0x11304, Wb::Other), (0x11305, Wb::ALetter), (0x1130D, Wb::Other), (0x1130F, Wb::ALetter),
    (0x11311, Wb::Other), (0x11313, Wb::ALetter), (0x11329, Wb::Other), (0x1132A, Wb::ALetter), (0x11331, Wb::Other),
    (0x11332, Wb::ALetter), (0x11334, Wb::Other), (0x11335, Wb::ALetter), (0x1133A, Wb::Other), (0x1133B, Wb::Extend),
    (0x1133D, Wb::ALetter), (0x1133E, Wb::Extend), (0x11345, Wb::Other), (0x11347, Wb::Extend), (0x11349, Wb::Other),
    (0x1134B, Wb::Extend), (0x1134E, Wb::Other), (0x11350, Wb::ALetter), (0x11351, Wb::Other), (0x11357, Wb::Extend),
    (0x11358, Wb::Other), (0x1135D, Wb::ALetter), (0x11362, Wb::Extend), (0x11364, Wb::Other), (0x11366, Wb::Extend),
    (0x1136D, Wb::Other), (0x11370, Wb::Extend), (0x11375, Wb::Other), (0x11400, Wb::ALetter), (0x11435, Wb::Extend),
    (0x11447, Wb::ALetter), (0x1144B, Wb::Other), (0x11450, Wb::Numeric), (0x1145A, Wb::Other), (0x1145E, Wb::Extend),
    (0x1145F, Wb::ALetter), (0x11462, Wb::Other), (0x11480, Wb::ALetter), (0x114B0, Wb::Extend), (0x114C4, Wb::ALetter),
    (0x114C6, Wb::Other), (0x114C7, Wb::ALetter), (0x114C8, Wb::Other), (0x114D0, Wb::Numeric), (0x114DA, Wb::Other),
    (0x11580, Wb::ALetter), (0x115AF, Wb::Extend), (0x115B6, Wb::Other), (0x115B8, Wb::Extend), (0x115C1, Wb::Other),
    (0x115D8, Wb::ALetter), (0x115DC, Wb::Extend), (0x115DE, Wb::Other), (0x11600, Wb::ALetter), (0x11630, Wb::Extend),
    (0x11641, Wb::Other), (0x11644, Wb::ALetter), (0x11645, Wb::Other), (0x11650, Wb::Numeric), (0x1165A, Wb::Other),
    (0x11680, Wb::ALetter), (0x116AB, Wb::Extend), (0x116B8, Wb::ALetter), (0x116B9, Wb::Other), (0x116C0, Wb::Numeric),
    (0x116CA, Wb::Other), (0x11700, Wb::ALetter), (0x1171B, Wb::Other), (0x1171D, Wb::Extend), (0x1172C, Wb::Other),
    (0x11730, Wb::Numeric), (0x1173A, Wb::Other), (0x11740, Wb::ALetter), (0x11747, Wb::Other), (0x11800, Wb::ALetter),
    (0x1182C, Wb::Extend), (0x1183B, Wb::Other), (0x118A0, Wb::ALetter), (0x118E0, Wb::Numeric), (0x118EA, Wb::Other),
    (0x118FF, Wb::ALetter), (0x11907, Wb::Other), (0x11909, Wb::ALetter), (0x1190A, Wb::Other), (0x1190C, Wb::ALetter),
    (0x11914, Wb::Other), (0x11915, Wb::ALetter), (0x11917, Wb::Other), (0x11918, Wb::ALetter), (0x11930, Wb::Extend),
    (0x11936, Wb::Other), (0x11937, Wb::Extend), (0x11939, Wb::Other), (0x1193B, Wb::Extend), (0x1193F, Wb::ALetter),
    (0x11940, Wb::Extend), (0x11941, Wb::ALetter), (0x11942, Wb::Extend), (0x11944, Wb::Other), (0x11950, Wb::Numeric),
    (0x1195A, Wb::Other), (0x119A0, Wb::ALetter), (0x119A8, Wb::Other), (0x119AA, Wb::ALetter), (0x119D1, Wb::Extend),
    (0x119D8, Wb::Other), (0x119DA, Wb::Extend), (0x119E1, Wb::ALetter), (0x119E2, Wb::Other), (0x119E3, Wb::ALetter),
    (0x119E4, Wb::Extend), (0x119E5, Wb::Other), (0x11A00, Wb::ALetter), (0x11A01, Wb::Extend), (0x11A0B, Wb::ALetter),
    (0x11A33, Wb::Extend), (0x11A3A, Wb::ALetter), (0x11A3B, Wb::Extend), (0x11A3F, Wb::Other), (0x11A47, Wb::Extend),
    (0x11A48, Wb::Other), (0x11A50, Wb::ALetter), (0x11A51, Wb::Extend), (0x11A5C, Wb::ALetter), (0x11A8A, Wb::Extend),
    (0x11A9A, Wb::Other), (0x11A9D, Wb::ALetter), (0x11A9E, Wb::Other), (0x11AB0, Wb::ALetter), (0x11AF9, Wb::Other),
    (0x11C00, Wb::ALetter), (0x11C09, Wb::Other), (0x11C0A, Wb::ALetter), (0x11C2F, Wb::Extend), (0x11C37, Wb::Other),
    (0x11C38, Wb::Extend), (0x11C40, Wb::ALetter), (0x11C41, Wb::Other), (0x11C50, Wb::Numeric), (0x11C5A, Wb::Other),
    (0x11C72, Wb::ALetter), (0x11C90, Wb::Other), (0x11C92, Wb::Extend), (0x11CA8, Wb::Other), (0x11CA9, Wb::Extend),
    (0x11CB7, Wb::Other), (0x11D00, Wb::ALetter), (0x11D07, Wb::Other), (0x11D08, Wb::ALetter), (0x11D0A, Wb::Other),
    (0x11D0B, Wb::ALetter), (0x11D31, Wb::Extend), (0x11D37, Wb::Other), (0x11D3A, Wb::Extend), (0x11D3B, Wb::Other),
    (0x11D3C, Wb::Extend), (0x11D3E, Wb::Other), (0x11D3F, Wb::Extend), (0x11D46, Wb::ALetter), (0x11D47, Wb::Extend),
    (0x11D48, Wb::Other), (0x11D50, Wb::Numeric), (0x11D5A, Wb::Other), (0x11D60, Wb::ALetter), (0x11D66, Wb::Other),
    (0x11D67, Wb::ALetter), (0x11D69, Wb::Other), (0x11D6A, Wb::ALetter), (0x11D8A, Wb::Extend), (0x11D8F, Wb::Other),
    (0x11D90, Wb::Extend), (0x11D92, Wb::Other), (0x11D93, Wb::Extend), (0x11D98, Wb::ALetter), (0x11D99, Wb::Other),
    (0x11DA0, Wb::Numeric), (0x11DAA, Wb::Other), (0x11EE0, Wb::ALetter), (0x11EF3, Wb::Extend), (0x11EF7, Wb::Other),
    (0x11FB0, Wb::ALetter), (0x11FB1, Wb::Other), (0x12000, Wb::ALetter), (0x1239A, Wb::Other), (0x12400, Wb::ALetter),
    (0x1246F, Wb::Other), (0x12480, Wb::ALetter), (0x12544, Wb::Other), (0x12F90, Wb::ALetter), (0x12FF1, Wb::Other),
    (0x13000, Wb::ALetter), (0x1342F, Wb::Other), (0x13430, Wb::Format), (0x13439, Wb::Other), (0x14400, Wb::ALetter),
    (0x14647, Wb::Other), (0x16800, Wb::ALetter), (0x16A39, Wb::Other), (0x16A40, Wb::ALetter), (0x16A5F, Wb::Other),
    (0x16A60, Wb::Numeric), (0x16A6A, Wb::Other), (0x16A70, Wb::ALetter), (0x16ABF, Wb::Other), (0x16AC0, Wb::Numeric),
    (0x16ACA, Wb::Other), (0x16AD0, Wb::ALetter), (0x16AEE, Wb::Other), (0x16AF0, Wb::Extend), (0x16AF5, Wb::Other),
    (0x16B00, Wb::ALetter), (0x16B30, Wb::Extend), (0x16B37, Wb::Other), (0x16B40, Wb::ALetter), (0x16B44, Wb::Other),
    (0x16B50, Wb::Numeric), (0x16B5A, Wb::Other), (0x16B63, Wb::ALetter), (0x16B78, Wb::Other), (0x16B7D, Wb::ALetter),
    (0x16B90, Wb::Other), (0x16E40, Wb::ALetter), (0x16E80, Wb::Other), (0x16F00, Wb::ALetter), (0x16F4B, Wb::Other),
    (0x16F4F, Wb::Extend), (0x16F50, Wb::ALetter), (0x16F51, Wb::Extend), (0x16F88, Wb::Other), (0x16F8F, Wb::Extend),
    (0x16F93, Wb::ALetter), (0x16FA0, Wb::Other), (0x16FE0, Wb::ALetter), (0x16FE2, Wb::Other), (0x16FE3, Wb::ALetter),
    (0x16FE4, Wb::Extend), (0x16FE5, Wb::Other), (0x16FF0, Wb::Extend), (0x16FF2, Wb::Other), (0x1AFF0, Wb::ALetter),
    (0x1AFF4, Wb::Other), (0x1AFF5, Wb::ALetter), (0x1AFFC, Wb::Other), (0x1AFFD, Wb::ALetter), (0x1AFFF, Wb::Other),
    (0x1B000, Wb::Katakana), (0x1B001, Wb::Other), (0x1B120, Wb::ALetter), (0x1B123, Wb::Other), (0x1BC00, Wb::ALetter),
    (0x1BC6B, Wb::Other), (0x1BC70, Wb::ALetter), (0x1BC7D, Wb::Other), (0x1BC80, Wb::ALetter), (0x1BC89, Wb::Other),
    (0x1BC90, Wb::ALetter), (0x1BC9A, Wb::Other), (0x1BC9D, Wb::Extend), (0x1BC9F, Wb::Other), (0x1BCA0, Wb::Format),
    (0x1BCA4, Wb::Other), (0x1CF00, Wb::Extend), (0x1CF2E, Wb::Other), (0x1CF30, Wb::Extend), (0x1CF47, Wb::Other),
    (0x1D165, Wb::Extend), (0x1D16A, Wb::Other), (0x1D16D, Wb::Extend), (0x1D173, Wb::Format), (0x1D17B, Wb::Extend),
    (0x1D183, Wb::Other), (0x1D185, Wb::Extend), (0x1D18C, Wb::Other), (0x1D1AA, Wb::Extend), (0x1D1AE, Wb::Other),
    (0x1D242, Wb::Extend), (0x1D245, Wb::Other), (0x1D400, Wb::ALetter), (0x1D455, Wb::Other), (0x1D456, Wb::ALetter),
    (0x1D49D, Wb::Other), (0x1D49E, Wb::ALetter), (0x1D4A0, Wb::Other), (0x1D4A2, Wb::ALetter), (0x1D4A3, Wb::Other),
    (0x1D4A5, Wb::ALetter), (0x1D4A7, Wb::Other), (0x1D4A9, Wb::ALetter), (0x1D4AD, Wb::Other), (0x1D4AE, Wb::ALetter),
    (0x1D4BA, Wb::Other), (0x1D4BB, Wb::ALetter), (0x1D4BC, Wb::Other), (0x1D4BD, Wb::ALetter), (0x1D4C4, Wb::Other),
    (0x1D4C5, Wb::ALetter), (0x1D506, Wb::Other), (0x1D507, Wb::ALetter), (0x1D50B, Wb::Other), (0x1D50D, Wb::ALetter),
    (0x1D515, Wb::Other), (0x1D516, Wb::ALetter), (0x1D51D, Wb::Other), (0x1D51E, Wb::ALetter), (0x1D53A, Wb::Other),
    (0x1D53B, Wb::ALetter), (0x1D53F, Wb::Other), (0x1D540, Wb::ALetter), (0x1D545, Wb::Other), (0x1D546, Wb::ALetter),
    (0x1D547, Wb::Other), (0x1D54A, Wb::ALetter), (0x1D551, Wb::Other), (0x1D552, Wb::ALetter), (0x1D6A6, Wb::Other),
    (0x1D6A8, Wb::ALetter), (0x1D6C1, Wb::Other), (0x1D6C2, Wb::ALetter), (0x1D6DB, Wb::Other), (0x1D6DC, Wb::ALetter),
    (0x1D6FB, Wb::Other), (0x1D6FC, Wb::ALetter), (0x1D715, Wb::Other), (0x1D716, Wb::ALetter), (0x1D735, Wb::Other),
    (0x1D736, Wb::ALetter), (0x1D74F, Wb::Other), (0x1D750, Wb::ALetter), (0x1D76F, Wb::Other), (0x1D770, Wb::ALetter),
    (0x1D789, Wb::Other), (0x1D78A, Wb::ALetter), (0x1D7A9, Wb::Other), (0x1D7AA, Wb::ALetter), (0x1D7C3, Wb::Other),
    (0x1D7C4, Wb::ALetter), (0x1D7CC, Wb::Other), (0x1D7CE, Wb::Numeric), (0x1D800, Wb::Other), (0x1DA00, Wb::Extend),
    (0x1DA37, Wb::Other), (0x1DA3B, Wb::Extend), (0x1DA6D, Wb::Other), (0x1DA75, Wb::Extend), (0x1DA76, Wb::Other),
    (0x1DA84, Wb::Extend), (0x1DA85, Wb::Other), (0x1DA9B, Wb::Extend), (0x1DAA0, Wb::Other), (0x1DAA1, Wb::Extend),
    (0x1DAB0, Wb::Other), (0x1DF00, Wb::ALetter), (0x1DF1F, Wb::Other), (0x1E000, Wb::Extend), (0x1E007, Wb::Other),
    (0x1E008, Wb::Extend), (0x1E019, Wb::Other), (0x1E01B, Wb::Extend), (0x1E022, Wb::Other), (0x1E023, Wb::Extend),
    (0x1E025, Wb::Other), (0x1E026, Wb::Extend), (0x1E02B, Wb::Other), (0x1E100, Wb::ALetter), (0x1E12D, Wb::Other),
    (0x1E130, Wb::Extend), (0x1E137, Wb::ALetter), (0x1E13E, Wb::Other), (0x1E140, Wb::Numeric), (0x1E14A, Wb::Other),
    (0x1E14E, Wb::ALetter), (0x1E14F, Wb::Other), (0x1E290, Wb::ALetter), (0x1E2AE, Wb::Extend), (0x1E2AF, Wb::Other),
    (0x1E2C0, Wb::ALetter), (0x1E2EC, Wb::Extend), (0x1E2F0, Wb::Numeric), (0x1E2FA, Wb::Other), (0x1E7E0, Wb::ALetter),
    (0x1E7E7, Wb::Other), (0x1E7E8, Wb::ALetter), (0x1E7EC, Wb::Other), (0x1E7ED, Wb::ALetter), (0x1E7EF, Wb::Other),
    (0x1E7F0, Wb::ALetter), (0x1E7FF, Wb::Other), (0x1E800, Wb::ALetter), (0x1E8C5, Wb::Other), (0x1E8D0, Wb::Extend),
    (0x1E8D7, Wb::Other), (0x1E900, Wb::ALetter), (0x1E944, Wb::Extend), (0x1E94B, Wb::ALetter), (0x1E94C, Wb::Other),
    (0x1E950, Wb::Numeric), (0x1E95A, Wb::Other), (0x1EE00, Wb::ALetter), (0x1EE04, Wb::Other), (0x1EE05, Wb::ALetter),
    (0x1EE20, Wb::Other), (0x1EE21, Wb::ALetter), (0x1EE23, Wb::Other), (0x1EE24, Wb::ALetter), (0x1EE25, Wb::Other),
    (0x1EE27, Wb::ALetter), (0x1EE28, Wb::Other), (0x1EE29, Wb::ALetter), (0x1EE33, Wb::Other), (0x1EE34, Wb::ALetter),
    (0x1EE38, Wb::Other), (0x1EE39, Wb::ALetter), (0x1EE3A, Wb::Other), (0x1EE3B, Wb::ALetter), (0x1EE3C, Wb::Other),
    (0x1EE42, Wb::ALetter), (0x1EE43, Wb::Other), (0x1EE47, Wb::ALetter), (0x1EE48, Wb::Other), (0x1EE49, Wb::ALetter),
    (0x1EE4A, Wb::Other), (0x1EE4B, Wb::ALetter), (0x1EE4C, Wb::Other), (0x1EE4D, Wb::ALetter), (0x1EE50, Wb::Other),
    (0x1EE51, Wb::ALetter), (0x1EE53, Wb::Other), (0x1EE54, Wb::ALetter), (0x1EE55, Wb::Other), (0x1EE57, Wb::ALetter),
    (0x1EE58, Wb::Other), (0x1EE59, Wb::ALetter), (0x1EE5A, Wb::Other), (0x1EE5B, Wb::ALetter), (0x1EE5C, Wb::Other),
    (0x1EE5D, Wb::ALetter), (0x1EE5E, Wb::Other), (0x1EE5F, Wb::ALetter), (0x1EE60, Wb::Other), (0x1EE61, Wb::ALetter),
    (0x1EE63, Wb::Other), (0x1EE64, Wb::ALetter), (0x1EE65, Wb::Other), (0x1EE67, Wb::ALetter), (0x1EE6B, Wb::Other),
    (0x1EE6C, Wb::ALetter), (0x1EE73, Wb::Other), (0x1EE74, Wb::ALetter), (0x1EE78, Wb::Other), (0x1EE79, Wb::ALetter),
    (0x1EE7D, Wb::Other), (0x1EE7E, Wb::ALetter), (0x1EE7F, Wb::Other), (0x1EE80, Wb::ALetter), (0x1EE8A, Wb::Other),
    (0x1EE8B, Wb::ALetter), (0x1EE9C, Wb::Other), (0x1EEA1, Wb::ALetter), (0x1EEA4, Wb::Other), (0x1EEA5, Wb::ALetter),
    (0x1EEAA, Wb::Other), (0x1EEAB, Wb::ALetter), (0x1EEBC, Wb::Other), (0x1F1E6, Wb::RegionalIndicator), (0x1F200, Wb::Other),
    (0x1FBF0, Wb::Numeric), (0x1FBFA, Wb::Other), (0xE0001, Wb::Format), (0xE0002, Wb::Other), (0xE0020, Wb::Format),
    (0xE0080, Wb::Other), (0xE0100, Wb::Extend), (0xE01F0, Wb::Other),
];

pub(crate) static SENTENCE_BREAK: &[(u32, Sb)] = &[
    (0x0, Sb::Other), (0x9, Sb::Sp), (0xA, Sb::LF), (0xB, Sb::Sp), (0xD, Sb::CR),
    (0xE, Sb::Other), (0x20, Sb::Sp), (0x21, Sb::STerm), (0x22, Sb::Close), (0x23, Sb::Other),
    (0x27, Sb::Close), (0x2A, Sb::Other), (0x2C, Sb::SContinue), (0x2E, Sb::ATerm), (0x2F, Sb::Other),
    (0x30, Sb::Numeric), (0x3A, Sb::SContinue), (0x3B, Sb::Other), (0x3F, Sb::STerm), (0x40, Sb::Other),
    (0x41, Sb::Upper), (0x5B, Sb::Close), (0x5C, Sb::Other), (0x5D, Sb::Close), (0x5E, Sb::Other),
    (0x61, Sb::Lower), (0x7B, Sb::Close), (0x7C, Sb::Other), (0x7D, Sb::Close), (0x7E, Sb::Other),
    (0x85, Sb::Sep), (0x86, Sb::Other), (0xA0, Sb::Sp), (0xA1, Sb::Other), (0xAA, Sb::Lower),
    (0xAB, Sb::Close), (0xAC, Sb::Other), (0xAD, Sb::Format), (0xAE, Sb::Other), (0xB5, Sb::Lower),
    (0xB6, Sb::Other), (0xBA, Sb::Lower), (0xBB, Sb::Close), (0xBC, Sb::Other), (0xC0, Sb::Upper),
    (0xD7, Sb::Other), (0xD8, Sb::Upper), (0xDF, Sb::Lower), (0xF7, Sb::Other), (0xF8, Sb::Lower),
    (0x100, Sb::Upper), (0x101, Sb::Lower), (0x102, Sb::Upper), (0x103, Sb::Lower), (0x104, Sb::Upper),
    (0x105, Sb::Lower), (0x106, Sb::Upper), (0x107, Sb::Lower), (0x108, Sb::Upper), (0x109, Sb::Lower),
    (0x10A, Sb::Upper), (0x10B, Sb::Lower), (0x10C, Sb::Upper), (0x10D, Sb::Lower), (0x10E, Sb::Upper),
    (0x10F, Sb::Lower), (0x110, Sb::Upper), (0x111, Sb::Lower), (0x112, Sb::Upper), (0x113, Sb::Lower),
    (0x114, Sb::Upper), (0x115, Sb::Lower), (0x116, Sb::Upper), (0x117, Sb::Lower), (0x118, Sb::Upper),
    (0x119, Sb::Lower), (0x11A, Sb::Upper), (0x11B, Sb::Lower), (0x11C, Sb::Upper), (0x11D, Sb::Lower),
    (0x11E, Sb::Upper), (0x11F, Sb::Lower), (0x120, Sb::Upper), (0x121, Sb::Lower), (0x122, Sb::Upper),
    (0x123, Sb::Lower), (0x124, Sb::Upper), (0x125, Sb::Lower), (0x126, Sb::Upper), (0x127, Sb::Lower),
    (0x128, Sb::Upper), (0x129, Sb::Lower), (0x12A, Sb::Upper), (0x12B, Sb::Lower), (0x12C, Sb::Upper),
    (0x12D, Sb::Lower), (0x12E, Sb::Upper), (0x12F, Sb::Lower), (0x130, Sb::Upper), (0x131, Sb::Lower),
    (0x132, Sb::Upper), (0x133, Sb::Lower), (0x134, Sb::Upper), (0x135, Sb::Lower), (0x136, Sb::Upper),
    (0x137, Sb::Lower), (0x139, Sb::Upper), (0x13A, Sb::Lower), (0x13B, Sb::Upper), (0x13C, Sb::Lower),
    (0x13D, Sb::Upper), (0x13E, Sb::Lower), (0x13F, Sb::Upper), (0x140, Sb::Lower), (0x141, Sb::Upper),
    (0x142, Sb::Lower), (0x143, Sb::Upper), (0x144, Sb::Lower), (0x145, Sb::Upper), (0x146, Sb::Lower),
    (0x147, Sb::Upper), (0x148, Sb::Lower), (0x14A, Sb::Upper), (0x14B, Sb::Lower), (0x14C, Sb::Upper),
    (0x14D, Sb::Lower), (0x14E, Sb::Upper), (0x14F, Sb::Lower), (0x150, Sb::Upper), (0x151, Sb::Lower),
    (0x152, Sb::Upper), (0x153, Sb::Lower), (0x154, Sb::Upper), (0x155, Sb::Lower), (0x156, Sb::Upper),
    (0x157, Sb::Lower), (0x158, Sb::Upper), (0x159, Sb::Lower), (0x15A, Sb::Upper), (0x15B, Sb::Lower),
    (0x15C, Sb::Upper), (0x15D, Sb::Lower), (0x15E, Sb::Upper), (0x15F, Sb::Lower), (0x160, Sb::Upper),
    (0x161, Sb::Lower), (0x162, Sb::Upper), (0x163, Sb::Lower), (0x164, Sb::Upper), (0x165, Sb::Lower),
    (0x166, Sb::Upper), (0x167, Sb::Lower), (0x168, Sb::Upper), (0x169, Sb::Lower), (0x16A, Sb::Upper),
    (0x16B, Sb::Lower), (0x16C, Sb::Upper), (0x16D, Sb::Lower), (0x16E, Sb::Upper), (0x16F, Sb::Lower),
    (0x170, Sb::Upper), (0x171, Sb::Lower), (0x172, Sb::Upper), (0x173, Sb::Lower), (0x174, Sb::Upper),
    (0x175, Sb::Lower), (0x176, Sb::Upper), (0x177, Sb::Lower), (0x178, Sb::Upper), (0x17A, Sb::Lower),
    (0x17B, Sb::Upper), (0x17C, Sb::Lower), (0x17D, Sb::Upper), (0x17E, Sb::Lower), (0x181, Sb::Upper),
    (0x183, Sb::Lower), (0x184, Sb::Upper), (0x185, Sb::Lower), (0x186, Sb::Upper), (0x188, Sb::Lower),
    (0x189, Sb::Upper), (0x18C, Sb::Lower), (0x18E, Sb::Upper), (0x192, Sb::Lower), (0x193, Sb::Upper),
    (0x195, Sb::Lower), (0x196, Sb::Upper), (0x199, Sb::Lower), (0x19C, Sb::Upper), (0x19E, Sb::Lower),
    (0x19F, Sb::Upper), (0x1A1, Sb::Lower), (0x1A2, Sb::Upper), (0x1A3, Sb::Lower), (0x1A4, Sb::Upper),
    (0x1A5, Sb::Lower), (0x1A6, Sb::Upper), (0x1A8, Sb::Lower), (0x1A9, Sb::Upper), (0x1AA, Sb::Lower),
    (0x1AC, Sb::Upper), (0x1AD, Sb::Lower), (0x1AE, Sb::Upper), (0x1B0, Sb::Lower), (0x1B1, Sb::Upper),
    (0x1B4, Sb::Lower), (0x1B5, Sb::Upper), (0x1B6, Sb::Lower), (0x1B7, Sb::Upper), (0x1B9, Sb::Lower),
    (0x1BB, Sb::OLetter), (0x1BC, Sb::Upper), (0x1BD, Sb::Lower), (0x1C0, Sb::OLetter), (0x1C4, Sb::Upper),
    (0x1C6, Sb::Lower), (0x1C7, Sb::Upper), (0x1C9, Sb::Lower), (0x1CA, Sb::Upper), (0x1CC, Sb::Lower),
    (0x1CD, Sb::Upper), (0x1CE, Sb::Lower), (0x1CF, Sb::Upper), (0x1D0, Sb::Lower), (0x1D1, Sb::Upper),
    (0x1D2, Sb::Lower), (0x1D3, Sb::Upper), (0x1D4, Sb::Lower), (0x1D5, Sb::Upper), (0x1D6, Sb::Lower),
    (0x1D7, Sb::Upper), (0x1D8, Sb::Lower), (0x1D9, Sb::Upper), (0x1DA, Sb::Lower), (0x1DB, Sb::Upper),
    (0x1DC, Sb::Lower), (0x1DE, Sb::Upper), (0x1DF, Sb::Lower), (0x1E0, Sb::Upper), (0x1E1, Sb::Lower),
    (0x1E2, Sb::Upper), (0x1E3, Sb::Lower), (0x1E4, Sb::Upper), (0x1E5, Sb::Lower), (0x1E6, Sb::Upper),
    (0x1E7, Sb::Lower), (0x1E8, Sb::Upper), (0x1E9, Sb::Lower), (0x1EA, Sb::Upper), (0x1EB, Sb::Lower),
    (0x1EC, Sb::Upper), (0x1ED, Sb::Lower), (0x1EE, Sb::Upper), (0x1EF, Sb::Lower), (0x1F1, Sb::Upper),
    (0x1F3, Sb::Lower), (0x1F4, Sb::Upper), (0x1F5, Sb::Lower), (0x1F6, Sb::Upper), (0x1F9, Sb::Lower),
    (0x1FA, Sb::Upper), (0x1FB, Sb::Lower), (0x1FC, Sb::Upper), (0x1FD, Sb::Lower), (0x1FE, Sb::Upper),
    (0x1FF, Sb::Lower), (0x200, Sb::Upper), (0x201, Sb::Lower), (0x202, Sb::Upper), (0x203, Sb::Lower),
    (0x204, Sb::Upper), (0x205, Sb::Lower), (0x206, Sb::Upper), (0x207, Sb::Lower), (0x208, Sb::Upper),
    (0x209, Sb::Lower), (0x20A, Sb::Upper), (0x20B, Sb::Lower), (0x20C, Sb::Upper), (0x20D, Sb::Lower),
    (0x20E, Sb::Upper), (0x20F, Sb::Lower), (0x210, Sb::Upper), (0x211, Sb::Lower), (0x212, Sb::Upper),
    (0x213, Sb::Lower), (0x214, Sb::Upper), (0x215, Sb::Lower), (0x216, Sb::Upper), (0x217, Sb::Lower),
    (0x218, Sb::Upper), (0x219, Sb::Lower), (0x21A, Sb::Upper), (0x21B, Sb::Lower), (0x21C, Sb::Upper),
    (0x21D, Sb::Lower), (0x21E, Sb::Upper), (0x21F, Sb::Lower), (0x220, Sb::Upper), (0x221, Sb::Lower),
    (0x222, Sb::Upper), (0x223, Sb::Lower), (0x224, Sb::Upper), (0x225, Sb::Lower), (0x226, Sb::Upper),
    (0x227, Sb::Lower), (0x228, Sb::Upper), (0x229, Sb::Lower), (0x22A, Sb::Upper), (0x22B, Sb::Lower),
    (0x22C, Sb::Upper), (0x22D, Sb::Lower), (0x22E, Sb::Upper), (0x22F, Sb::Lower), (0x230, Sb::Upper),
    (0x231, Sb::Lower), (0x232, Sb::Upper), (0x233, Sb::Lower), (0x23A, Sb::Upper), (0x23C, Sb::Lower),
    (0x23D, Sb::Upper), (0x23F, Sb::Lower), (0x241, Sb::Upper), (0x242, Sb::Lower), (0x243, Sb::Upper),
    (0x247, Sb::Lower), (0x248, Sb::Upper), (0x249, Sb::Lower), (0x24A, Sb::Upper), (0x24B, Sb::Lower),
    (0x24C, Sb::Upper), (0x24D, Sb::Lower), (0x24E, Sb::Upper), (0x24F, Sb::Lower), (0x294, Sb::OLetter),
    (0x295, Sb::Lower), (0x2B9, Sb::OLetter), (0x2C0, Sb::Lower), (0x2C2, Sb::Other), (0x2C6, Sb::OLetter),
    (0x2D2, Sb::Other), (0x2E0, Sb::Lower), (0x2E5, Sb::Other), (0x2EC, Sb::OLetter), (0x2ED, Sb::Other),
    (0x2EE, Sb::OLetter), (0x2EF, Sb::Other), (0x300, Sb::Extend), (0x370, Sb::Upper), (0x371, Sb::Lower),
    (0x372, Sb::Upper), (0x373, Sb::Lower), (0x374, Sb::OLetter), (0x375, Sb::Other), (0x376, Sb::Upper),
    (0x377, Sb::Lower), (0x378, Sb::Other), (0x37A, Sb::Lower), (0x37E, Sb::Other), (0x37F, Sb::Upper),
    (0x380, Sb::Other), (0x386, Sb::Upper), (0x387, Sb::Other), (0x388, Sb::Upper), (0x38B, Sb::Other),
    (0x38C, Sb::Upper), (0x38D, Sb::Other), (0x38E, Sb::Upper), (0x390, Sb::Lower), (0x391, Sb::Upper),
    (0x3A2, Sb::Other), (0x3A3, Sb::Upper), (0x3AC, Sb::Lower), (0x3CF, Sb::Upper), (0x3D0, Sb::Lower),
    (0x3D2, Sb::Upper), (0x3D5, Sb::Lower), (0x3D8, Sb::Upper), (0x3D9, Sb::Lower), (0x3DA, Sb::Upper),
    (0x3DB, Sb::Lower), (0x3DC, Sb::Upper), (0x3DD, Sb::Lower), (0x3DE, Sb::Upper), (0x3DF, Sb::Lower),
    (0x3E0, Sb::Upper), (0x3E1, Sb::Lower), (0x3E2, Sb::Upper), (0x3E3, Sb::Lower), (0x3E4, Sb::Upper),
    (0x3E5, Sb::Lower), (0x3E6, Sb::Upper), (0x3E7, Sb::Lower), (0x3E8, Sb::Upper), (0x3E9, Sb::Lower),
    (0x3EA, Sb::Upper), (0x3EB, Sb::Lower), (0x3EC, Sb::Upper), (0x3ED, Sb::Lower), (0x3EE, Sb::Upper),
    (0x3EF, Sb::Lower), (0x3F4, Sb::Upper), (0x3F5, Sb::Lower), (0x3F6, Sb::Other), (0x3F7, Sb::Upper),
    (0x3F8, Sb::Lower), (0x3F9, Sb::Upper), (0x3FB, Sb::Lower), (0x3FD, Sb::Upper), (0x430, Sb::Lower),
    (0x460, Sb::Upper), (0x461, Sb::Lower), (0x462, Sb::Upper), (0x463, Sb::Lower), (0x464, Sb::Upper),
    (0x465, Sb::Lower), (0x466, Sb::Upper), (0x467, Sb::Lower), (0x468, Sb::Upper), (0x469, Sb::Lower),
    (0x46A, Sb::Upper), (0x46B, Sb::Lower), (0x46C, Sb::Upper), (0x46D, Sb::Lower), (0x46E, Sb::Upper),
    (0x46F, Sb::Lower), (0x470, Sb::Upper), (0x471, Sb::Lower), (0x472, Sb::Upper), (0x473, Sb::Lower),
    (0x474, Sb::Upper), (0x475, Sb::Lower), (0x476, Sb::Upper), (0x477, Sb::Lower), (0x478, Sb::Upper),
    (0x479, Sb::Lower), (0x47A, Sb::Upper), (0x47B, Sb::Lower), (0x47C, Sb::Upper), (0x47D, Sb::Lower),
    (0x47E, Sb::Upper), (0x47F, Sb::Lower), (0x480, Sb::Upper), (0x481, Sb::Lower), (0x482, Sb::Other),
    (0x483, Sb::Extend), (0x48A, Sb::Upper), (0x48B, Sb::Lower), (0x48C, Sb::Upper), (0x48D, Sb::Lower),
    (0x48E, Sb::Upper), (0x48F, Sb::Lower), (0x490, Sb::Upper), (0x491, Sb::Lower), (0x492, Sb::Upper),
    (0x493, Sb::Lower), (0x494, Sb::Upper), (0x495, Sb::Lower), (0x496, Sb::Upper), (0x497, Sb::Lower),
    (0x498, Sb::Upper), (0x499, Sb::Lower), (0x49A, Sb::Upper), (0x49B, Sb::Lower), (0x49C, Sb::Upper),
    (0x49D, Sb::Lower), (0x49E, Sb::Upper), (0x49F, Sb::Lower), (0x4A0, Sb::Upper), (0x4A1, Sb::Lower),
    (0x4A2, Sb::Upper), (0x4A3, Sb::Lower), (0x4A4, Sb::Upper), (0x4A5, Sb::Lower), (0x4A6, Sb::Upper),
    (0x4A7, Sb::Lower), (0x4A8, Sb::Upper), (0x4A9, Sb::Lower), (0x4AA, Sb::Upper), (0x4AB, Sb::Lower),
    (0x4AC, Sb::Upper), (0x4AD, Sb::Lower), (0x4AE, Sb::Upper), (0x4AF, Sb::Lower), (0x4B0, Sb::Upper),
    (0x4B1, Sb::Lower), (0x4B2, Sb::Upper), (0x4B3, Sb::Lower), (0x4B4, Sb::Upper), (0x4B5, Sb::Lower),
    (0x4B6, Sb::Upper), (0x4B7, Sb::Lower), (0x4B8, Sb::Upper), (0x4B9, Sb::Lower), (0x4BA, Sb::Upper),
    (0x4BB, Sb::Lower), (0x4BC, Sb::Upper), (0x4BD, Sb::Lower), (0x4BE, Sb::Upper), (0x4BF, Sb::Lower),
    (0x4C0, Sb::Upper), (0x4C2, Sb::Lower), (0x4C3, Sb::Upper), (0x4C4, Sb::Lower), (0x4C5, Sb::Upper),
    (0x4C6, Sb::Lower), (0x4C7, Sb::Upper), (0x4C8, Sb::Lower), (0x4C9, Sb::Upper), (0x4CA, Sb::Lower),
    (0x4CB, Sb::Upper), (0x4CC, Sb::Lower), (0x4CD, Sb::Upper), (0x4CE, Sb::Lower), (0x4D0, Sb::Upper),
    (0x4D1, Sb::Lower), (0x4D2, Sb::Upper), (0x4D3, Sb::Lower), (0x4D4, Sb::Upper), (0x4D5, Sb::Lower),
    (0x4D6, Sb::Upper), (0x4D7, Sb::Lower), (0x4D8, Sb::Upper), (0x4D9, Sb::Lower), (0x4DA, Sb::Upper),
    (0x4DB, Sb::Lower), (0x4DC, Sb::Upper), (0x4DD, Sb::Lower), (0x4DE, Sb::Upper), (0x4DF, Sb::Lower),
    (0x4E0, Sb::Upper), (0x4E1, Sb::Lower), (0x4E2, Sb::Upper), (0x4E3, Sb::Lower), (0x4E4, Sb::Upper),
    (0x4E5, Sb::Lower), (0x4E6, Sb::Upper), (0x4E7, Sb::Lower), (0x4E8, Sb::Upper), (0x4E9, Sb::Lower),
    (0x4EA, Sb::Upper), (0x4EB, Sb::Lower), (0x4EC, Sb::Upper), (0x4ED, Sb::Lower), (0x4EE, Sb::Upper),
    (0x4EF, Sb::Lower), (0x4F0, Sb::Upper), (0x4F1, Sb::Lower), (0x4F2, Sb::Upper), (0x4F3, Sb::Lower),
    (0x4F4, Sb::Upper), (0x4F5, Sb::Lower), (0x4F6, Sb::Upper), (0x4F7, Sb::Lower), (0x4F8, Sb::Upper),
    (0x4F9, Sb::Lower), (0x4FA, Sb::Upper), (0x4FB, Sb::Lower), (0x4FC, Sb::Upper), (0x4FD, Sb::Lower),
    (0x4FE, Sb::Upper), (0x4FF, Sb::Lower), (0x500, Sb::Upper), (0x501, Sb::Lower), (0x502, Sb::Upper),
    (0x503, Sb::Lower), (0x504, Sb::Upper), (0x505, Sb::Lower), (0x506, Sb::Upper), (0x507, Sb::Lower),
    (0x508, Sb::Upper), (0x509, Sb::Lower), (0x50A, Sb::Upper), (0x50B, Sb::Lower), (0x50C, Sb::Upper),
    (0x50D, Sb::Lower), (0x50E, Sb::Upper), (0x50F, Sb::Lower), (0x510, Sb::Upper), (0x511, Sb::Lower),
    (0x512, Sb::Upper), (0x513, Sb::Lower), (0x514, Sb::Upper), (0x515, Sb::Lower), (0x516, Sb::Upper),
    (0x517, Sb::Lower), (0x518, Sb::Upper), (0x519, Sb::Lower), (0x51A, Sb::Upper), (0x51B, Sb::Lower),
    (0x51C, Sb::Upper), (0x51D, Sb::Lower), (0x51E, Sb::Upper), (0x51F, Sb::Lower), (0x520, Sb::Upper),
    (0x521, Sb::Lower), (0x522, Sb::Upper), (0x523, Sb::Lower), (0x524, Sb::Upper), (0x525, Sb::Lower),
    (0x526, Sb::Upper), (0x527, Sb::Lower), (0x528, Sb::Upper), (0x529, Sb::Lower), (0x52A, Sb::Upper),
    (0x52B, Sb::Lower), (0x52C, Sb::Upper), (0x52D, Sb::Lower), (0x52E, Sb::Upper), (0x52F, Sb::Lower),
    (0x530, Sb::Other), (0x531, Sb::Upper), (0x557, Sb::Other), (0x559, Sb::OLetter), (0x55A, Sb::Other),
    (0x55D, Sb::SContinue), (0x55E, Sb::Other), (0x560, Sb::Lower), (0x589, Sb::Other), (0x591, Sb::Extend),
    (0x5BE, Sb::Other), (0x5BF, Sb::Extend), (0x5C0, Sb::Other), (0x5C1, Sb::Extend), (0x5C3, Sb::Other),
    (0x5C4, Sb::Extend), (0x5C6, Sb::Other), (0x5C7, Sb::Extend), (0x5C8, Sb::Other), (0x5D0, Sb::OLetter),
    (0x5EB, Sb::Other), (0x5EF, Sb::OLetter), (0x5F4, Sb::Other), (0x600, Sb::Format), (0x606, Sb::Other),
    (0x60C, Sb::SContinue), (0x60E, Sb::Other), (0x610, Sb::Extend), (0x61B, Sb::Other), (0x61C, Sb::Format),
    (0x61D, Sb::Other), (0x61F, Sb::STerm), (0x620, Sb::OLetter), (0x64B, Sb::Extend), (0x660, Sb::Numeric),
    (0x66A, Sb::Other), (0x66B, Sb::Numeric), (0x66D, Sb::Other), (0x66E, Sb::OLetter), (0x670, Sb::Extend),
    (0x671, Sb::OLetter), (0x6D4, Sb::STerm), (0x6D5, Sb::OLetter), (0x6D6, Sb::Extend), (0x6DD, Sb::Format),
    (0x6DE, Sb::Other), (0x6DF, Sb::Extend), (0x6E5, Sb::OLetter), (0x6E7, Sb::Extend), (0x6E9, Sb::Other),
    (0x6EA, Sb::Extend), (0x6EE, Sb::OLetter), (0x6F0, Sb::Numeric), (0x6FA, Sb::OLetter), (0x6FD, Sb::Other),
    (0x6FF, Sb::OLetter), (0x700, Sb::Other), (0x70F, Sb::Format), (0x710, Sb::OLetter), (0x711, Sb::Extend),
    (0x712, Sb::OLetter), (0x730, Sb::Extend), (0x74B, Sb::Other), (0x74D, Sb::OLetter), (0x7A6, Sb::Extend),
    (0x7B1, Sb::OLetter), (0x7B2, Sb::Other), (0x7C0, Sb::Numeric), (0x7CA, Sb::OLetter), (0x7EB, Sb::Extend),
    (0x7F4, Sb::OLetter), (0x7F6, Sb::Other), (0x7F8, Sb::SContinue), (0x7F9, Sb::Other), (0x7FA, Sb::OLetter),
    (0x7FB, Sb::Other), (0x7FD, Sb::Extend), (0x7FE, Sb::Other), (0x800, Sb::OLetter), (0x816, Sb::Extend),
    (0x81A, Sb::OLetter), (0x81B, Sb::Extend), (0x824, Sb::OLetter), (0x825, Sb::Extend), (0x828, Sb::OLetter),
    (0x829, Sb::Extend), (0x82E, Sb::Other), (0x840, Sb::OLetter), (0x859, Sb::Extend), (0x85C, Sb::Other),
    (0x860, Sb::OLetter), (0x86B, Sb::Other), (0x870, Sb::OLetter), (0x888, Sb::Other), (0x889, Sb::OLetter),
    (0x88F, Sb::Other), (0x890, Sb::Format), (0x892, Sb::Other), (0x898, Sb::Extend), (0x8A0, Sb::OLetter),
    (0x8CA, Sb::Extend), (0x8E2, Sb::Format), (0x8E3, Sb::Extend), (0x904, Sb::OLetter), (0x93A, Sb::Extend),
    (0x93D, Sb::OLetter), (0x93E, Sb::Extend), (0x950, Sb::OLetter), (0x951, Sb::Extend), (0x958, Sb::OLetter),
    (0x962, Sb::Extend), (0x964, Sb::STerm), (0x966, Sb::Numeric), (0x970, Sb::Other), (0x971, Sb::OLetter),
    (0x981, Sb::Extend), (0x984, Sb::Other), (0x985, Sb::OLetter), (0x98D, Sb::Other), (0x98F, Sb::OLetter),
    (0x991, Sb::Other), (0x993, Sb::OLetter), (0x9A9, Sb::Other), (0x9AA, Sb::OLetter), (0x9B1, Sb::Other),
    (0x9B2, Sb::OLetter), (0x9B3, Sb::Other), (0x9B6, Sb::OLetter), (0x9BA, Sb::Other), (0x9BC, Sb::Extend),
    (0x9BD, Sb::OLetter), (0x9BE, Sb::Extend), (0x9C5, Sb::Other), (0x9C7, Sb::Extend), (0x9C9, Sb::Other),
    (0x9CB, Sb::Extend), (0x9CE, Sb::OLetter), (0x9CF, Sb::Other), (0x9D7, Sb::Extend), (0x9D8, Sb::Other),
    (0x9DC, Sb::OLetter), (0x9DE, Sb::Other), (0x9DF, Sb::OLetter), (0x9E2, Sb::Extend), (0x9E4, Sb::Other),
    (0x9E6, Sb::Numeric), (0x9F0, Sb::OLetter), (0x9F2, Sb::Other), (0x9FC, Sb::OLetter), (0x9FD, Sb::Other),
    (0x9FE, Sb::Extend), (0x9FF, Sb::Other), (0xA01, Sb::Extend), (0xA04, Sb::Other), (0xA05, Sb::OLetter),
    (0xA0B, Sb::Other), (0xA0F, Sb::OLetter), (0xA11, Sb::Other), (0xA13, Sb::OLetter), (0xA29, Sb::Other),
    (0xA2A, Sb::OLetter), (0xA31, Sb::Other), (0xA32, Sb::OLetter), (0xA34, Sb::Other), (0xA35, Sb::OLetter),
    (0xA37, Sb::Other), (0xA38, Sb::OLetter), (0xA3A, Sb::Other), (0xA3C, Sb::Extend), (0xA3D, Sb::Other),
    (0xA3E, Sb::Extend), (0xA43, Sb::Other), (0xA47, Sb::Extend), (0xA49, Sb::Other), (0xA4B, Sb::Extend),
    (0xA4E, Sb::Other), (0xA51, Sb::Extend), (0xA52, Sb::Other), (0xA59, Sb::OLetter), (0xA5D, Sb::Other),
    (0xA5E, Sb::OLetter), (0xA5F, Sb::Other), (0xA66, Sb::Numeric), (0xA70, Sb::Extend), (0xA72, Sb::OLetter),
    (0xA75, Sb::Extend), (0xA76, Sb::Other), (0xA81, Sb::Extend), (0xA84, Sb::Other), (0xA85, Sb::OLetter),
    (0xA8E, Sb::Other), (0xA8F, Sb::OLetter), (0xA92, Sb::Other), (0xA93, Sb::OLetter), (0xAA9, Sb::Other),
    (0xAAA, Sb::OLetter), (0xAB1, Sb::Other), (0xAB2, Sb::OLetter), (0xAB4, Sb::Other), (0xAB5, Sb::OLetter),
    (0xABA, Sb::Other), (0xABC, Sb::Extend), (0xABD, Sb::OLetter), (0xABE, Sb::Extend), (0xAC6, Sb::Other),
    (0xAC7, Sb::Extend), (0xACA, Sb::Other), (0xACB, Sb::Extend), (0xACE, Sb::Other), (0xAD0, Sb::OLetter),
    (0xAD1, Sb::Other), (0xAE0, Sb::OLetter), (0xAE2, Sb::Extend), (0xAE4, Sb::Other), (0xAE6, Sb::Numeric),
    (0xAF0, Sb::Other), (0xAF9, Sb::OLetter), (0xAFA, Sb::Extend), (0xB00, Sb::Other), (0xB01, Sb::Extend),
    (0xB04, Sb::Other), (0xB05, Sb::OLetter), (0xB0D, Sb::Other), (0xB0F, Sb::OLetter), (0xB11, Sb::Other),
    (0xB13, Sb::OLetter), (0xB29, Sb::Other), (0xB2A, Sb::OLetter), (0xB31, Sb::Other), (0xB32, Sb::OLetter),
    (0xB34, Sb::Other), (0xB35, Sb::OLetter), (0xB3A, Sb::Other), (0xB3C, Sb::Extend), (0xB3D, Sb::OLetter),
    (0xB3E, Sb::Extend), (0xB45, Sb::Other), (0xB47, Sb::Extend), (0xB49, Sb::Other), (0xB4B, Sb::Extend),
    (0xB4E, Sb::Other), (0xB55, Sb::Extend), (0xB58, Sb::Other), (0xB5C, Sb::OLetter), (0xB5E, Sb::Other),
    (0xB5F, Sb::OLetter), (0xB62, Sb::Extend), (0xB64, Sb::Other), (0xB66, Sb::Numeric), (0xB70, Sb::Other),
    (0xB71, Sb::OLetter), (0xB72, Sb::Other), (0xB82, Sb::Extend), (0xB83, Sb::OLetter), (0xB84, Sb::Other),
    (0xB85, Sb::OLetter), (0xB8B, Sb::Other), (0xB8E, Sb::OLetter), (0xB91, Sb::Other), (0xB92, Sb::OLetter),
    (0xB96, Sb::Other), (0xB99, Sb::OLetter), (0xB9B, Sb::Other), (0xB9C, Sb::OLetter), (0xB9D, Sb::Other),
    (0xB9E, Sb::OLetter), (0xBA0, Sb::Other), (0xBA3, Sb::OLetter), (0xBA5, Sb::Other), (0xBA8, Sb::OLetter),
    (0xBAB, Sb::Other), (0xBAE, Sb::OLetter), (0xBBA, Sb::Other), (0xBBE, Sb::Extend), (0xBC3, Sb::Other),
    (0xBC6, Sb::Extend), (0xBC9, Sb::Other), (0xBCA, Sb::Extend), (0xBCE, Sb::Other), (0xBD0, Sb::OLetter),
    (0xBD1, Sb::Other), (0xBD7, Sb::Extend), (0xBD8, Sb::Other), (0xBE6, Sb::Numeric), (0xBF0, Sb::Other),
    (0xC00, Sb::Extend), (0xC05, Sb::OLetter), (0xC0D, Sb::Other), (0xC0E, Sb::OLetter), (0xC11, Sb::Other),
    (0xC12, Sb::OLetter), (0xC29, Sb::Other), (0xC2A, Sb::OLetter), (0xC3A, Sb::Other), (0xC3C, Sb::Extend),
    (0xC3D, Sb::OLetter), (0xC3E, Sb::Extend), (0xC45, Sb::Other), (0xC46, Sb::Extend), (0xC49, Sb::Other),
    (0xC4A, Sb::Extend), (0xC4E, Sb::Other), (0xC55, Sb::Extend), (0xC57, Sb::Other), (0xC58, Sb::OLetter),
    (0xC5B, Sb::Other), (0xC5D, Sb::OLetter), (0xC5E, Sb::Other), (0xC60, Sb::OLetter), (0xC62, Sb::Extend),
    (0xC64, Sb::Other), (0xC66, Sb::Numeric), (0xC70, Sb::Other), (0xC80, Sb::OLetter), (0xC81, Sb::Extend),
    (0xC84, Sb::Other), (0xC85, Sb::OLetter), (0xC8D, Sb::Other), (0xC8E, Sb::OLetter), (0xC91, Sb::Other),
    (0xC92, Sb::OLetter), (0xCA9, Sb::Other), (0xCAA, Sb::OLetter), (0xCB4, Sb::Other), (0xCB5, Sb::OLetter),
    (0xCBA, Sb::Other), (0xCBC, Sb::Extend), (0xCBD, Sb::OLetter), (0xCBE, Sb::Extend), (0xCC5, Sb::Other),
    (0xCC6, Sb::Extend), (0xCC9, Sb::Other), (0xCCA, Sb::Extend), (0xCCE, Sb::Other), (0xCD5, Sb::Extend),
    (0xCD7, Sb::Other), (0xCDD, Sb::OLetter), (0xCDF, Sb::Other), (0xCE0, Sb::OLetter), (0xCE2, Sb::Extend),
    (0xCE4, Sb::Other), (0xCE6, Sb::Numeric), (0xCF0, Sb::Other), (0xCF1, Sb::OLetter), (0xCF3, Sb::Other),
    (0xD00, Sb::Extend), (0xD04, Sb::OLetter), (0xD0D, Sb::Other), (0xD0E, Sb::OLetter), (0xD11, Sb::Other),
    (0xD12, Sb::OLetter), (0xD3B, Sb::Extend), (0xD3D, Sb::OLetter), (0xD3E, Sb::Extend), (0xD45, Sb::Other),
    (0xD46, Sb::Extend), (0xD49, Sb::Other), (0xD4A, Sb::Extend), (0xD4E, Sb::OLetter), (0xD4F, Sb::Other),
    (0xD54, Sb::OLetter), (0xD57, Sb::Extend), (0xD58, Sb::Other), (0xD5F, Sb::OLetter), (0xD62, Sb::Extend),
    (0xD64, Sb::Other), (0xD66, Sb::Numeric), (0xD70, Sb::Other), (0xD7A, Sb::OLetter), (0xD80, Sb::Other),
    (0xD81, Sb::Extend), (0xD84, Sb::Other), (0xD85, Sb::OLetter), (0xD97, Sb::Other), (0xD9A, Sb::OLetter),
    (0xDB2, Sb::Other), (0xDB3, Sb::OLetter), (0xDBC, Sb::Other), (0xDBD, Sb::OLetter), (0xDBE, Sb::Other),
    (0xDC0, Sb::OLetter), (0xDC7, Sb::Other), (0xDCA, Sb::Extend), (0xDCB, Sb::Other), (0xDCF, Sb::Extend),
    (0xDD5, Sb::Other), (0xDD6, Sb::Extend), (0xDD7, Sb::Other), (0xDD8, Sb::Extend), (0xDE0, Sb::Other),
    (0xDE6, Sb::Numeric), (0xDF0, Sb::Other), (0xDF2, Sb::Extend), (0xDF4, Sb::Other), (0xE01, Sb::OLetter),
    (0xE31, Sb::Extend), (0xE32, Sb::OLetter), (0xE34, Sb::Extend), (0xE3B, Sb::Other), (0xE40, Sb::OLetter),
    (0xE47, Sb::Extend), (0xE4F, Sb::Other), (0xE50, Sb::Numeric), (0xE5A, Sb::Other), (0xE81, Sb::OLetter),
    (0xE83, Sb::Other), (0xE84, Sb::OLetter), (0xE85, Sb::Other), (0xE86, Sb::OLetter), (0xE8B, Sb::Other),
    (0xE8C, Sb::OLetter), (0xEA4, Sb::Other), (0xEA5, Sb::OLetter), (0xEA6, Sb::Other), (0xEA7, Sb::OLetter),
    (0xEB1, Sb::Extend), (0xEB2, Sb::OLetter), (0xEB4, Sb::Extend), (0xEBD, Sb::OLetter), (0xEBE, Sb::Other),
    (0xEC0, Sb::OLetter), (0xEC5, Sb::Other), (0xEC6, Sb::OLetter), (0xEC7, Sb::Other), (0xEC8, Sb::Extend),
    (0xECE, Sb::Other), (0xED0, Sb::Numeric), (0xEDA, Sb::Other), (0xEDC, Sb::OLetter), (0xEE0, Sb::Other),
    (0xF00, Sb::OLetter), (0xF01, Sb::Other), (0xF18, Sb::Extend), (0xF1A, Sb::Other), (0xF20, Sb::Numeric),
    (0xF2A, Sb::Other), (0xF35, Sb::Extend), (0xF36, Sb::Other), (0xF37, Sb::Extend), (0xF38, Sb::Other),
    (0xF39, Sb::Extend), (0xF3A, Sb::Close), (0xF3E, Sb::Extend), (0xF40, Sb::OLetter), (0xF48, Sb::Other),
    (0xF49, Sb::OLetter), (0xF6D, Sb::Other), (0xF71, Sb::Extend), (0xF85, Sb::Other), (0xF86, Sb::Extend),
    (0xF88, Sb::OLetter), (0xF8D, Sb::Extend), (0xF98, Sb::Other), (0xF99, Sb::Extend), (0xFBD, Sb::Other),
    (0xFC6, Sb::Extend), (0xFC7, Sb::Other), (0x1000, Sb::OLetter), (0x102B, Sb::Extend), (0x103F, Sb::OLetter),
    (0x1040, Sb::Numeric), (0x104A, Sb::Other), (0x1050, Sb::OLetter), (0x1056, Sb::Extend), (0x105A, Sb::OLetter),
    (0x105E, Sb::Extend), (0x1061, Sb::OLetter), (0x1062, Sb::Extend), (0x1065, Sb::OLetter), (0x1067, Sb::Extend),
    (0x106E, Sb::OLetter), (0x1071, Sb::Extend), (0x1075, Sb::OLetter), (0x1082, Sb::Extend), (0x108E, Sb::OLetter),
    (0x108F, Sb::Extend), (0x1090, Sb::Numeric), (0x109A, Sb::Extend), (0x109E, Sb::Other), (0x10A0, Sb::Upper),
    (0x10C6, Sb::Other), (0x10C7, Sb::Upper), (0x10C8, Sb::Other), (0x10CD, Sb::Upper), (0x10CE, Sb::Other),
    (0x10D0, Sb::Lower), (0x10FB, Sb::Other), (0x10FC, Sb::Lower), (0x1100, Sb::OLetter), (0x1249, Sb::Other),
    (0x124A, Sb::OLetter), (0x124E, Sb::Other), (0x1250, Sb::OLetter), (0x1257, Sb::Other), (0x1258, Sb::OLetter),
    (0x1259, Sb::Other), (0x125A, Sb::OLetter), (0x125E, Sb::Other), (0x1260, Sb::OLetter), (0x1289, Sb::Other),
    (0x128A, Sb::OLetter), (0x128E, Sb::Other), (0x1290, Sb::OLetter), (0x12B1, Sb::Other), (0x12B2, Sb::OLetter),
    (0x12B6, Sb::Other), (0x12B8, Sb::OLetter), (0x12BF, Sb::Other), (0x12C0, Sb::OLetter), (0x12C1, Sb::Other),
    (0x12C2, Sb::OLetter), (0x12C6, Sb::Other), (0x12C8, Sb::OLetter), (0x12D7, Sb::Other), (0x12D8, Sb::OLetter),
    (0x1311, Sb::Other), (0x1312, Sb::OLetter), (0x1316, Sb::Other), (0x1318, Sb::OLetter), (0x135B, Sb::Other),
    (0x135D, Sb::Extend), (0x1360, Sb::Other), (0x1362, Sb::STerm), (0x1363, Sb::Other), (0x1367, Sb::STerm),
    (0x1369, Sb::Other), (0x1380, Sb::OLetter), (0x1390, Sb::Other), (0x13A0, Sb::Upper), (0x13F6, Sb::Other),
    (0x13F8, Sb::Lower), (0x13FE, Sb::Other), (0x1401, Sb::OLetter), (0x166D, Sb::Other), (0x166F, Sb::OLetter),
    (0x1680, Sb::Sp), (0x1681, Sb::OLetter), (0x169B, Sb::Close), (0x169D, Sb::Other), (0x16A0, Sb::OLetter),
    (0x16EB, Sb::Other), (0x16EE, Sb::OLetter), (0x16F9, Sb::Other), (0x1700, Sb::OLetter), (0x1712, Sb::Extend),
    (0x1716, Sb::Other), (0x171F, Sb::OLetter), (0x1732, Sb::Extend), (0x1735, Sb::Other), (0x1740, Sb::OLetter),
    (0x1752, Sb::Extend), (0x1754, Sb::Other), (0x1760, Sb::OLetter), (0x176D, Sb::Other), (0x176E, Sb::OLetter),
    (0x1771, Sb::Other), (0x1772, Sb::Extend), (0x1774, Sb::Other), (0x1780, Sb::OLetter), (0x17B4, Sb::Extend),
    (0x17D4, Sb::Other), (0x17D7, Sb::OLetter), (0x17D8, Sb::Other), (0x17DC, Sb::OLetter), (0x17DD, Sb::Extend),
    (0x17DE, Sb::Other), (0x17E0, Sb::Numeric), (0x17EA, Sb::Other), (0x1802, Sb::SContinue), (0x1803, Sb::Other),
    (0x1808, Sb::SContinue), (0x1809, Sb::Other), (0x180B, Sb::Extend), (0x180E, Sb::Format), (0x180F, Sb::Extend),
    (0x1810, Sb::Numeric), (0x181A, Sb::Other), (0x1820, Sb::OLetter), (0x1879, Sb::Other), (0x1880, Sb::OLetter),
    (0x1885, Sb::Extend), (0x1887, Sb::OLetter), (0x18A9, Sb::Extend), (0x18AA, Sb::OLetter), (0x18AB, Sb::Other),
    (0x18B0, Sb::OLetter), (0x18F6, Sb::Other), (0x1900, Sb::OLetter), (0x191F, Sb::Other), (0x1920, Sb::Extend),
    (0x192C, Sb::Other), (0x1930, Sb::Extend), (0x193C, Sb::Other), (0x1946, Sb::Numeric), (0x1950, Sb::OLetter),
    (0x196E, Sb::Other), (0x1970, Sb::OLetter), (0x1975, Sb::Other), (0x1980, Sb::OLetter), (0x19AC, Sb::Other),
    (0x19B0, Sb::OLetter), (0x19CA, Sb::Other), (0x19D0, Sb::Numeric), (0x19DA, Sb::Other), (0x1A00, Sb::OLetter),
    (0x1A17, Sb::Extend), (0x1A1C, Sb::Other), (0x1A20, Sb::OLetter), (0x1A55, Sb::Extend), (0x1A5F, Sb::Other),
    (0x1A60, Sb::Extend), (0x1A7D, Sb::Other), (0x1A7F, Sb::Extend), (0x1A80, Sb::Numeric), (0x1A8A, Sb::Other),
    (0x1A90, Sb::Numeric), (0x1A9A, Sb::Other), (0x1AA7, Sb::OLetter), (0x1AA8, Sb::Other), (0x1AB0, Sb::Extend),
    (0x1ACF, Sb::Other), (0x1B00, Sb::Extend), (0x1B05, Sb::OLetter), (0x1B34, Sb::Extend), (0x1B45, Sb::OLetter),
    (0x1B4D, Sb::Other), (0x1B50, Sb::Numeric), (0x1B5A, Sb::Other), (0x1B6B, Sb::Extend), (0x1B74, Sb::Other),
    (0x1B80, Sb::Extend), (0x1B83, Sb::OLetter), (0x1BA1, Sb::Extend), (0x1BAE, Sb::OLetter), (0x1BB0, Sb::Numeric),
    (0x1BBA, Sb::OLetter), (0x1BE6, Sb::Extend), (0x1BF4, Sb::Other), (0x1C00, Sb::OLetter), (0x1C24, Sb::Extend),
    (0x1C38, Sb::Other), (0x1C40, Sb::Numeric), (0x1C4A, Sb::Other), (0x1C4D, Sb::OLetter), (0x1C50, Sb::Numeric),
    (0x1C5A, Sb::OLetter), (0x1C7E, Sb::Other), (0x1C80, Sb::Lower), (0x1C89, Sb::Other), (0x1C90, Sb::Upper),
    (0x1CBB, Sb::Other), (0x1CBD, Sb::Upper), (0x1CC0, Sb::Other), (0x1CD0, Sb::Extend), (0x1CD3, Sb::Other),
    (0x1CD4, Sb::Extend), (0x1CE9, Sb::OLetter), (0x1CED, Sb::Extend), (0x1CEE, Sb::OLetter), (0x1CF4, Sb::Extend),
    (0x1CF5, Sb::OLetter), (0x1CF7, Sb::Extend), (0x1CFA, Sb::OLetter), (0x1CFB, Sb::Other), (0x1D00, Sb::Lower),
    (0x1DC0, Sb::Extend), (0x1E00, Sb::Upper), (0x1E01, Sb::Lower), (0x1E02, Sb::Upper), (0x1E03, Sb::Lower),
    (0x1E04, Sb::Upper), (0x1E05, Sb::Lower), (0x1E06, Sb::Upper), (0x1E07, Sb::Lower), (0x1E08, Sb::Upper),
    (0x1E09, Sb::Lower), (0x1E0A, Sb::Upper), (0x1E0B, Sb::Lower), (0x1E0C, Sb::Upper), (0x1E0D, Sb::Lower),
    (0x1E0E, Sb::Upper), (0x1E0F, Sb::Lower), (0x1E10, Sb::Upper), (0x1E11, Sb::Lower), (0x1E12, Sb::Upper),
    (0x1E13, Sb::Lower), (0x1E14, Sb::Upper), (0x1E15, Sb::Lower), (0x1E16, Sb::Upper), (0x1E17, Sb::Lower),
    (0x1E18, Sb::Upper), (0x1E19, Sb::Lower), (0x1E1A, Sb::Upper), (0x1E1B, Sb::Lower), (0x1E1C, Sb::Upper),
    (0x1E1D, Sb::Lower), (0x1E1E, Sb::Upper), (0x1E1F, Sb::Lower), (0x1E20, Sb::Upper), (0x1E21, Sb::Lower),
    (0x1E22, Sb::Upper), (0x1E23, Sb::Lower), (0x1E24, Sb::Upper), (0x1E25, Sb::Lower), (0x1E26, Sb::Upper),
    (0x1E27, Sb::Lower), (0x1E28, Sb::Upper), (0x1E29, Sb::Lower), (0x1E2A, Sb::Upper), (0x1E2B, Sb::Lower),
    (0x1E2C, Sb::Upper), (0x1E2D, Sb::Lower), (0x1E2E, Sb::Upper), (0x1E2F, Sb::Lower), (0x1E30, Sb::Upper),
    (0x1E31, Sb::Lower), (0x1E32, Sb::Upper), (0x1E33, Sb::Lower), (0x1E34, Sb::Upper), (0x1E35, Sb::Lower),
    (0x1E36, Sb::Upper), (0x1E37, Sb::Lower), (0x1E38, Sb::Upper), (0x1E39, Sb::Lower), (0x1E3A, Sb::Upper),
    (0x1E3B, Sb::Lower), (0x1E3C, Sb::Upper), (0x1E3D, Sb::Lower), (0x1E3E, Sb::Upper), (0x1E3F, Sb::Lower),
    (0x1E40, Sb::Upper), (0x1E41, Sb::Lower), (0x1E42, Sb::Upper), (0x1E43, Sb::Lower), (0x1E44, Sb::Upper),
    (0x1E45, Sb::Lower), (0x1E46, Sb::Upper), (0x1E47, Sb::Lower), (0x1E48, Sb::Upper), (0x1E49, Sb::Lower),
    (0x1E4A, Sb::Upper), (0x1E4B, Sb::Lower), (0x1E4C, Sb::Upper), (0x1E4D, Sb::Lower), (0x1E4E, Sb::Upper),
    (0x1E4F, Sb::Lower), (0x1E50, Sb::Upper), (0x1E51, Sb::Lower), (0x1E52, Sb::Upper), (0x1E53, Sb::Lower),
    (0x1E54, Sb::Upper), (0x1E55, Sb::Lower), (0x1E56, Sb::Upper), (0x1E57, Sb::Lower), (0x1E58, Sb::Upper),
    (0x1E59, Sb::Lower), (0x1E5A, Sb::Upper), (0x1E5B, Sb::Lower), (0x1E5C, Sb::Upper), (0x1E5D, Sb::Lower),
    (0x1E5E, Sb::Upper), (0x1E5F, Sb::Lower), (0x1E60, Sb::Upper), (0x1E61, Sb::Lower), (0x1E62, Sb::Upper),
    (0x1E63, Sb::Lower), (0x1E64, Sb::Upper), (0x1E65, Sb::Lower), (0x1E66, Sb::Upper), (0x1E67, Sb::Lower),
    (0x1E68, Sb::Upper), (0x1E69, Sb::Lower), (0x1E6A, Sb::Upper), (0x1E6B, Sb::Lower), (0x1E6C, Sb::Upper),
    (0x1E6D, Sb::Lower), (0x1E6E, Sb::Upper), (0x1E6F, Sb::Lower), (0x1E70, Sb::Upper), (0x1E71, Sb::Lower),
    (0x1E72, Sb::Upper), (0x1E73, Sb::Lower), (0x1E74, Sb::Upper), (0x1E75, Sb::Lower), (0x1E76, Sb::Upper),
    (0x1E77, Sb::Lower), (0x1E78, Sb::Upper), (0x1E79, Sb::Lower), (0x1E7A, Sb::Upper), (0x1E7B, Sb::Lower),
    (0x1E7C, Sb::Upper), (0x1E7D, Sb::Lower), (0x1E7E, Sb::Upper), (0x1E7F, Sb::Lower), (0x1E80, Sb::Upper),
    (0x1E81, Sb::Lower), (0x1E82, Sb::Upper), (0x1E83, Sb::Lower), (0x1E84, Sb::Upper), (0x1E85, Sb::Lower),
    (0x1E86, Sb::Upper), (0x1E87, Sb::Lower), (0x1E88, Sb::Upper), (0x1E89, Sb::Lower), (0x1E8A, Sb::Upper),
    (0x1E8B, Sb::Lower), (0x1E8C, Sb::Upper), (0x1E8D, Sb::Lower), (0x1E8E, Sb::Upper), (0x1E8F, Sb::Lower),
    (0x1E90, Sb::Upper), (0x1E91, Sb::Lower), (0x1E92, Sb::Upper), (0x1E93, Sb::Lower), (0x1E94, Sb::Upper),
    (0x1E95, Sb::Lower), (0x1E9E, Sb::Upper), (0x1E9F, Sb::Lower), (0x1EA0, Sb::Upper), (0x1EA1, Sb::Lower),
    (0x1EA2, Sb::Upper), (0x1EA3, Sb::Lower), (0x1EA4, Sb::Upper), (0x1EA5, Sb::Lower), (0x1EA6, Sb::Upper),
    (0x1EA7, Sb::Lower), (0x1EA8, Sb::Upper), (0x1EA9, Sb::Lower), (0x1EAA, Sb::Upper), (0x1EAB, Sb::Lower),
    (0x1EAC, Sb::Upper), (0x1EAD, Sb::Lower), (0x1EAE, Sb::Upper), (0x1EAF, Sb::Lower), (0x1EB0, Sb::Upper),
    (0x1EB1, Sb::Lower), (0x1EB2, Sb::Upper), (0x1EB3, Sb::Lower), (0x1EB4, Sb::Upper), (0x1EB5, Sb::Lower),
    (0x1EB6, Sb::Upper), (0x1EB7, Sb::Lower), (0x1EB8, Sb::Upper), (0x1EB9, Sb::Lower), (0x1EBA, Sb::Upper),
    (0x1EBB, Sb::Lower), (0x1EBC, Sb::Upper), (0x1EBD, Sb::Lower), (0x1EBE, Sb::Upper), (0x1EBF, Sb::Lower),
    (0x1EC0, Sb::Upper), (0x1EC1, Sb::Lower), (0x1EC2, Sb::Upper), (0x1EC3, Sb::Lower), (0x1EC4, Sb::Upper),
    (0x1EC5, Sb::Lower), (0x1EC6, Sb::Upper), (0x1EC7, Sb::Lower), (0x1EC8, Sb::Upper), (0x1EC9, Sb::Lower),
    (0x1ECA, Sb::Upper), (0x1ECB, Sb::Lower), (0x1ECC, Sb::Upper), (0x1ECD, Sb::Lower), (0x1ECE, Sb::Upper),
    (0x1ECF, Sb::Lower), (0x1ED0, Sb::Upper), (0x1ED1, Sb::Lower), (0x1ED2, Sb::Upper), (0x1ED3, Sb::Lower),
    (0x1ED4, Sb::Upper), (0x1ED5, Sb::Lower), (0x1ED6, Sb::Upper), (0x1ED7, Sb::Lower), (0x1ED8, Sb::Upper),
    (0x1ED9, Sb::Lower), (0x1EDA, Sb::Upper), (0x1EDB, Sb::Lower), (0x1EDC, Sb::Upper), (0x1EDD, Sb::Lower),
    (0x1EDE, Sb::Upper), (0x1EDF, Sb::Lower), (0x1EE0, Sb::Upper), (0x1EE1, Sb::Lower), (0x1EE2, Sb::Upper),
    (0x1EE3, Sb::Lower), (0x1EE4, Sb::Upper), (0x1EE5, Sb::Lower), (0x1EE6, Sb::Upper), (0x1EE7, Sb::Lower),
    (0x1EE8, Sb::Upper), (0x1EE9, Sb::Lower), (0x1EEA, Sb::Upper), (0x1EEB, Sb::Lower), (0x1EEC, Sb::Upper),
    (0x1EED, Sb::Lower), (0x1EEE, Sb::Upper), (0x1EEF, Sb::Lower), (0x1EF0, Sb::Upper), (0x1EF1, Sb::Lower),
    (0x1EF2, Sb::Upper), (0x1EF3, Sb::Lower), (0x1EF4, Sb::Upper), (0x1EF5, Sb::Lower), (0x1EF6, Sb::Upper),
    (0x1EF7, Sb::Lower), (0x1EF8, Sb::Upper), (0x1EF9, Sb::Lower), (0x1EFA, Sb::Upper), (0x1EFB, Sb::Lower),
    (0x1EFC, Sb::Upper), (0x1EFD, Sb::Lower), (0x1EFE, Sb::Upper), (0x1EFF, Sb::Lower), (0x1F08, Sb::Upper),
    (0x1F10, Sb::Lower), (0x1F16, Sb::Other), (0x1F18, Sb::Upper), (0x1F1E, Sb::Other), (0x1F20, Sb::Lower),
    (0x1F28, Sb::Upper), (0x1F30, Sb::Lower), (0x1F38, Sb::Upper), (0x1F40, Sb::Lower), (0x1F46, Sb::Other),
    (0x1F48, Sb::Upper), (0x1F4E, Sb::Other), (0x1F50, Sb::Lower), (0x1F58, Sb::Other), (0x1F59, Sb::Upper),
    (0x1F5A, Sb::Other), (0x1F5B, Sb::Upper), (0x1F5C, Sb::Other), (0x1F5D, Sb::Upper), (0x1F5E, Sb::Other),
    (0x1F5F, Sb::Upper), (0x1F60, Sb::Lower), (0x1F68, Sb::Upper), (0x1F70, Sb::Lower), (0x1F7E, Sb::Other),
    (0x1F80, Sb::Lower), (0x1F88, Sb::Upper), (0x1F90, Sb::Lower), (0x1F98, Sb::Upper), (0x1FA0, Sb::Lower),
    (0x1FA8, Sb::Upper), (0x1FB0, Sb::Lower), (0x1FB5, Sb::Other), (0x1FB6, Sb::Lower), (0x1FB8, Sb::Upper),
    (0x1FBD, Sb::Other), (0x1FBE, Sb::Lower), (0x1FBF, Sb::Other), (0x1FC2, Sb::Lower), (0x1FC5, Sb::Other),
    (0x1FC6, Sb::Lower), (0x1FC8, Sb::Upper), (0x1FCD, Sb::Other), (0x1FD0, Sb::Lower), (0x1FD4, Sb::Other),
    (0x1FD6, Sb::Lower), (0x1FD8, Sb::Upper), (0x1FDC, Sb::Other), (0x1FE0, Sb::Lower), (0x1FE8, Sb::Upper),
    (0x1FED, Sb::Other), (0x1FF2, Sb::Lower), (0x1FF5, Sb::Other), (0x1FF6, Sb::Lower), (0x1FF8, Sb::Upper),
    (0x1FFD, Sb::Other), (0x2000, Sb::Sp), (0x200B, Sb::Format), (0x200C, Sb::Extend), (0x200E, Sb::Format),
    (0x2010, Sb::Other), (0x2013, Sb::SContinue), (0x2015, Sb::Other), (0x2018, Sb::Close), (0x2020, Sb::Other),
    (0x2024, Sb::ATerm), (0x2025, Sb::Other), (0x2028, Sb::Sep), (0x202A, Sb::Format), (0x202F, Sb::Sp),
    (0x2030, Sb::Other), (0x2039, Sb::Close), (0x203B, Sb::Other), (0x203C, Sb::STerm), (0x203E, Sb::Other),
    (0x2045, Sb::Close), (0x2047, Sb::STerm), (0x204A, Sb::Other), (0x205F, Sb::Sp), (0x2060, Sb::Format),
    (0x2065, Sb::Other), (0x2066, Sb::Format), (0x2070, Sb::Other), (0x2071, Sb::Lower), (0x2072, Sb::Other),
    (0x207D, Sb::Close), (0x207F, Sb::Lower), (0x2080, Sb::Other), (0x208D, Sb::Close), (0x208F, Sb::Other),
    (0x2090, Sb::Lower), (0x209D, Sb::Other), (0x20D0, Sb::Extend), (0x20F1, Sb::Other), (0x2102, Sb::Upper),
    (0x2103, Sb::Other), (0x2107, Sb::Upper), (0x2108, Sb::Other), (0x210A, Sb::Lower), (0x210B, Sb::Upper),
    (0x210E, Sb::Lower), (0x2110, Sb::Upper), (0x2113, Sb::Lower), (0x2114, Sb::Other), (0x2115, Sb::Upper),
    (0x2116, Sb::Other), (0x2119, Sb::Upper), (0x211E, Sb::Other), (0x2124, Sb::Upper), (0x2125, Sb::Other),
    (0x2126, Sb::Upper), (0x2127, Sb::Other), (0x2128, Sb::Upper), (0x2129, Sb::Other), (0x212A, Sb::Upper),
    (0x212E, Sb::Other), (0x212F, Sb::Lower), (0x2130, Sb::Upper), (0x2134, Sb::Lower), (0x2135, Sb::OLetter),
    (0x2139, Sb::Lower), (0x213A, Sb::Other), (0x213C, Sb::Lower), (0x213E, Sb::Upper), (0x2140, Sb::Other),
    (0x2145, Sb::Upper), (0x2146, Sb::Lower), (0x214A, Sb::Other), (0x214E, Sb::Lower), (0x214F, Sb::Other),
    (0x2160, Sb::Upper), (0x2170, Sb::Lower), (0x2180, Sb::OLetter), (0x2183, Sb::Upper), (0x2184, Sb::Lower),
    (0x2185, Sb::OLetter), (0x2189, Sb::Other), (0x2308, Sb::Close), (0x230C, Sb::Other), (0x2329, Sb::Close),
    (0x232B, Sb::Other), (0x24B6, Sb::Upper), (0x24D0, Sb::Lower), (0x24EA, Sb::Other), (0x2768, Sb::Close),
    (0x2776, Sb::Other), (0x27C5, Sb::Close), (0x27C7, Sb::Other), (0x27E6, Sb::Close), (0x27F0, Sb::Other),
    (0x2983, Sb::Close), (0x2999, Sb::Other), (0x29D8, Sb::Close), (0x29DC, Sb::Other), (0x29FC, Sb::Close),
    (0x29FE, Sb::Other), (0x2C00, Sb::Upper), (0x2C30, Sb::Lower), (0x2C60, Sb::Upper), (0x2C61, Sb::Lower),
    (0x2C62, Sb::Upper), (0x2C65, Sb::Lower), (0x2C67, Sb::Upper), (0x2C68, Sb::Lower), (0x2C69, Sb::Upper),
    (0x2C6A, Sb::Lower), (0x2C6B, Sb::Upper), (0x2C6C, Sb::Lower), (0x2C6D, Sb::Upper), (0x2C71, Sb::Lower),
    (0x2C72, Sb::Upper), (0x2C73, Sb::Lower), (0x2C75, Sb::Upper), (0x2C76, Sb::Lower), (0x2C7E, Sb::Upper),
    (0x2C81, Sb::Lower), (0x2C82, Sb::Upper), (0x2C83, Sb::Lower), (0x2C84, Sb::Upper), (0x2C85, Sb::Lower),
    (0x2C86, Sb::Upper), (0x2C87, Sb::Lower), (0x2C88, Sb::Upper), (0x2C89, Sb::Lower), (0x2C8A, Sb::Upper),
    (0x2C8B, Sb::Lower), (0x2C8C, Sb::Upper), (0x2C8D, Sb::Lower), (0x2C8E, Sb::Upper), (0x2C8F, Sb::Lower),
    (0x2C90, Sb::Upper), (0x2C91, Sb::Lower), (0x2C92, Sb::Upper), (0x2C93, Sb::Lower), (0x2C94, Sb::Upper),
    (0x2C95, Sb::Lower), (0x2C96, Sb::Upper), (0x2C97, Sb::Lower), (0x2C98, Sb::Upper), (0x2C99, Sb::Lower),
    (0x2C9A, Sb::Upper), (0x2C9B, Sb::Lower), (0x2C9C, Sb::Upper), (0x2C9D, Sb::Lower), (0x2C9E, Sb::Upper),
    (0x2C9F, Sb::Lower), (0x2CA0, Sb::Upper), (0x2CA1, Sb::Lower), (0x2CA2, Sb::Upper), (0x2CA3, Sb::Lower),
    (0x2CA4, Sb::Upper), (0x2CA5, Sb::Lower), (0x2CA6, Sb::Upper), (0x2CA7, Sb::Lower), (0x2CA8, Sb::Upper),
    (0x2CA9, Sb::Lower), (0x2CAA, Sb::Upper), (0x2CAB, Sb::Lower), (0x2CAC, Sb::Upper), (0x2CAD, Sb::Lower),
    (0x2CAE, Sb::Upper), (0x2CAF, Sb::Lower), (0x2CB0, Sb::Upper), (0x2CB1, Sb::Lower), (0x2CB2, Sb::Upper),
    (0x2CB3, Sb::Lower), (0x2CB4, Sb::Upper), (0x2CB5, Sb::Lower), (0x2CB6, Sb::Upper), (0x2CB7, Sb::Lower),
    (0x2CB8, Sb::Upper), (0x2CB9, Sb::Lower), (0x2CBA, Sb::Upper), (0x2CBB, Sb::Lower), (0x2CBC, Sb::Upper),
    (0x2CBD, Sb::Lower), (0x2CBE, Sb::Upper), (0x2CBF, Sb::Lower), (0x2CC0, Sb::Upper), (0x2CC1, Sb::Lower),
    (0x2CC2, Sb::Upper), (0x2CC3, Sb::Lower), (0x2CC4, Sb::Upper), (0x2CC5, Sb::Lower), (0x2CC6, Sb::Upper),
    (0x2CC7, Sb::Lower), (0x2CC8, Sb::Upper), (0x2CC9, Sb::Lower), (0x2CCA, Sb::Upper), (0x2CCB, Sb::Lower),
    (0x2CCC, Sb::Upper), (0x2CCD, Sb::Lower), (0x2CCE, Sb::Upper), (0x2CCF, Sb::Lower), (0x2CD0, Sb::Upper),
    (0x2CD1, Sb::Lower), (0x2CD2, Sb::Upper), (0x2CD3, Sb::Lower), (0x2CD4, Sb::Upper), (0x2CD5, Sb::Lower),
    (0x2CD6, Sb::Upper), (0x2CD7, Sb::Lower), (0x2CD8, Sb::Upper), (0x2CD9, Sb::Lower), (0x2CDA, Sb::Upper),
    (0x2CDB, Sb::Lower), (0x2CDC, Sb::Upper), (0x2CDD, Sb::Lower), (0x2CDE, Sb::Upper), (0x2CDF, Sb::Lower),
    (0x2CE0, Sb::Upper), (0x2CE1, Sb::Lower), (0x2CE2, Sb::Upper), (0x2CE3, Sb::Lower), (0x2CE5, Sb::Other),
    (0x2CEB, Sb::Upper), (0x2CEC, Sb::Lower), (0x2CED, Sb::Upper), (0x2CEE, Sb::Lower), (0x2CEF, Sb::Extend),
    (0x2CF2, Sb::Upper), (0x2CF3, Sb::Lower), (0x2CF4, Sb::Other), (0x2D00, Sb::Lower), (0x2D26, Sb::Other),
    (0x2D27, Sb::Lower), (0x2D28, Sb::Other), (0x2D2D, Sb::Lower), (0x2D2E, Sb::Other), (0x2D30, Sb::OLetter),
    (0x2D68, Sb::Other), (0x2D6F, Sb::OLetter), (0x2D70, Sb::Other), (0x2D7F, Sb::Extend), (0x2D80, Sb::OLetter),
    (0x2D97, Sb::Other), (0x2DA0, Sb::OLetter), (0x2DA7, Sb::Other), (0x2DA8, Sb::OLetter), (0x2DAF, Sb::Other),
    (0x2DB0, Sb::OLetter), (0x2DB7, Sb::Other), (0x2DB8, Sb::OLetter), (0x2DBF, Sb::Other), (0x2DC0, Sb::OLetter),
    (0x2DC7, Sb::Other), (0x2DC8, Sb::OLetter), (0x2DCF, Sb::Other), (0x2DD0, Sb::OLetter), (0x2DD7, Sb::Other),
    (0x2DD8, Sb::OLetter), (0x2DDF, Sb::Other), (0x2DE0, Sb::Extend), (0x2E00, Sb::Other), (0x2E02, Sb::Close),
    (0x2E06, Sb::Other), (0x2E09, Sb::Close), (0x2E0B, Sb::Other), (0x2E0C, Sb::Close), (0x2E0E, Sb::Other),
    (0x2E1C, Sb::Close), (0x2E1E, Sb::Other), (0x2E20, Sb::Close), (0x2E2A, Sb::Other), (0x2E2F, Sb::OLetter),
    (0x2E30, Sb::Other), (0x2E42, Sb::Close), (0x2E43, Sb::Other), (0x2E55, Sb::Close), (0x2E5D, Sb::Other),
    (0x3000, Sb::Sp), (0x3001, Sb::SContinue), (0x3002, Sb::STerm), (0x3003, Sb::Other), (0x3005, Sb::OLetter),
    (0x3008, Sb::Close), (0x3012, Sb::Other), (0x3014, Sb::Close), (0x301C, Sb::Other), (0x301D, Sb::Close),
    (0x3020, Sb::Other), (0x3021, Sb::OLetter), (0x302A, Sb::Extend), (0x3030, Sb::Other), (0x3031, Sb::OLetter),
    (0x3036, Sb::Other), (0x3038, Sb::OLetter), (0x303D, Sb::Other), (0x3041, Sb::OLetter), (0x3097, Sb::Other),
    (0x3099, Sb::Extend), (0x309B, Sb::Other), (0x309D, Sb::OLetter), (0x30A0, Sb::Other), (0x30A1, Sb::OLetter),
    (0x30FB, Sb::Other), (0x30FC, Sb::OLetter), (0x3100, Sb::Other), (0x3105, Sb::OLetter), (0x3130, Sb::Other),
    (0x3131, Sb::OLetter), (0x318F, Sb::Other), (0x31A0, Sb::OLetter), (0x31C0, Sb::Other), (0x31F0, Sb::OLetter),
    (0x3200, Sb::Other), (0x3400, Sb::OLetter), (0x4DC0, Sb::Other), (0x4E00, Sb::OLetter), (0xA48D, Sb::Other),
    (0xA4D0, Sb::OLetter), (0xA4FE, Sb::Other), (0xA500, Sb::OLetter), (0xA60D, Sb::Other), (0xA610, Sb::OLetter),
    (0xA620, Sb::Numeric), (0xA62A, Sb::OLetter), (0xA62C, Sb::Other), (0xA640, Sb::Upper), (0xA641, Sb::Lower),
    (0xA642, Sb::Upper), (0xA643, Sb::Lower), (0xA644, Sb::Upper), (0xA645, Sb::Lower), (0xA646, Sb::Upper),
    (0xA647, Sb::Lower), (0xA648, Sb::Upper), (0xA649, Sb::Lower), (0xA64A, Sb::Upper), (0xA64B, Sb::Lower),
    (0xA64C, Sb::Upper), (0xA64D, Sb::Lower), (0xA64E, Sb::Upper), (0xA64F, Sb::Lower), (0xA650, Sb::Upper),
    (0xA651, Sb::Lower), (0xA652, Sb::Upper), (0xA653, Sb::Lower), (0xA654, Sb::Upper), (0xA655, Sb::Lower),
    (0xA656, Sb::Upper), (0xA657, Sb::Lower), (0xA658, Sb::Upper), (0xA659, Sb::Lower), (0xA65A, Sb::Upper),
    (0xA65B, Sb::Lower), (0xA65C, Sb::Upper), (0xA65D, Sb::Lower), (0xA65E, Sb::Upper), (0xA65F, Sb::Lower),
    (0xA660, Sb::Upper), (0xA661, Sb::Lower), (0xA662, Sb::Upper), (0xA663, Sb::Lower), (0xA664, Sb::Upper),
    (0xA665, Sb::Lower), (0xA666, Sb::Upper), (0xA667, Sb::Lower), (0xA668, Sb::Upper), (0xA669, Sb::Lower),
    (0xA66A, Sb::Upper), (0xA66B, Sb::Lower), (0xA66C, Sb::Upper), (0xA66D, Sb::Lower), (0xA66E, Sb::OLetter),
    (0xA66F, Sb::Extend), (0xA673, Sb::Other), (0xA674, Sb::Extend), (0xA67E, Sb::Other), (0xA67F, Sb::OLetter),
    (0xA680, Sb::Upper), (0xA681, Sb::Lower), (0xA682, Sb::Upper), (0xA683, Sb::Lower), (0xA684, Sb::Upper),
    (0xA685, Sb::Lower), (0xA686, Sb::Upper), (0xA687, Sb::Lower), (0xA688, Sb::Upper), (0xA689, Sb::Lower),
    (0xA68A, Sb::Upper), (0xA68B, Sb::Lower), (0xA68C, Sb::Upper), (0xA68D, Sb::Lower), (0xA68E, Sb::Upper),
    (0xA68F, Sb::Lower), (0xA690, Sb::Upper), (0xA691, Sb::Lower), (0xA692, Sb::Upper), (0xA693, Sb::Lower),
    (0xA694, Sb::Upper), (0xA695, Sb::Lower), (0xA696, Sb::Upper), (0xA697, Sb::Lower), (0xA698, Sb::Upper),
    (0xA699, Sb::Lower), (0xA69A, Sb::Upper), (0xA69B, Sb::Lower), (0xA69E, Sb::Extend), (0xA6A0, Sb::OLetter),
    (0xA6F0, Sb::Extend), (0xA6F2, Sb::Other), (0xA717, Sb::OLetter), (0xA720, Sb::Other), (0xA722, Sb::Upper),
    (0xA723, Sb::Lower), (0xA724, Sb::Upper), (0xA725, Sb::Lower), (0xA726, Sb::Upper), (0xA727, Sb::Lower),
    (0xA728, Sb::Upper), (0xA729, Sb::Lower), (0xA72A, Sb::Upper), (0xA72B, Sb::Lower), (0xA72C, Sb::Upper),
    (0xA72D, Sb::Lower), (0xA72E, Sb::Upper), (0xA72F, Sb::Lower), (0xA732, Sb::Upper), (0xA733, Sb::Lower),
    (0xA734, Sb::Upper), (0xA735, Sb::Lower), (0xA736, Sb::Upper), (0xA737, Sb::Lower), (0xA738, Sb::Upper),
    (0xA739, Sb::Lower), (0xA73A, Sb::Upper), (0xA73B, Sb::Lower), (0xA73C, Sb::Upper), (0xA73D, Sb::Lower),
    (0xA73E, Sb::Upper), (0xA73F, Sb::Lower), (0xA740, Sb::Upper), (0xA741, Sb::Lower), (0xA742, Sb::Upper),
    (0xA743, Sb::Lower), (0xA744, Sb::Upper), (0xA745, Sb::Lower), (0xA746, Sb::Upper), (0xA747, Sb::Lower),
    (0xA748, Sb::Upper), (0xA749, Sb::Lower), (0xA74A, Sb::Upper), (0xA74B, Sb::Lower), (0xA74C, Sb::Upper),
    (0xA74D, Sb::Lower), (0xA74E, Sb::Upper), (0xA74F, Sb::Lower), (0xA750, Sb::Upper), (0xA751, Sb::Lower),
    (0xA752, Sb::Upper), (0xA753, Sb::Lower), (0xA754, Sb::Upper), (0xA755, Sb::Lower), (0xA756, Sb::Upper),
    (0xA757, Sb::Lower), (0xA758, Sb::Upper), (0xA759, Sb::Lower), (0xA75A, Sb::Upper), (0xA75B, Sb::Lower),
    (0xA75C, Sb::Upper), (0xA75D, Sb::Lower), (0xA75E, Sb::Upper), (0xA75F, Sb::Lower), (0xA760, Sb::Upper),
    (0xA761, Sb::Lower), (0xA762, Sb::Upper), (0xA763, Sb::Lower), (0xA764, Sb::Upper), (0xA765, Sb::Lower),
    (0xA766, Sb::Upper), (0xA767, Sb::Lower), (0xA768, Sb::Upper), (0xA769, Sb::Lower), (0xA76A, Sb::Upper),
    (0xA76B, Sb::Lower), (0xA76C, Sb::Upper), (0xA76D, Sb::Lower), (0xA76E, Sb::Upper), (0xA76F, Sb::Lower),
    (0xA779, Sb::Upper), (0xA77A, Sb::Lower), (0xA77B, Sb::Upper), (0xA77C, Sb::Lower), (0xA77D, Sb::Upper),
    (0xA77F, Sb::Lower), (0xA780, Sb::Upper), (0xA781, Sb::Lower), (0xA782, Sb::Upper), (0xA783, Sb::Lower),
    (0xA784, Sb::Upper), (0xA785, Sb::Lower), (0xA786, Sb::Upper), (0xA787, Sb::Lower), (0xA788, Sb::OLetter),
    (0xA789, Sb::Other), (0xA78B, Sb::Upper), (0xA78C, Sb::Lower), (0xA78D, Sb::Upper), (0xA78E, Sb::Lower),
    (0xA78F, Sb::OLetter), (0xA790, Sb::Upper), (0xA791, Sb::Lower), (0xA792, Sb::Upper), (0xA793, Sb::Lower),
    (0xA796, Sb::Upper), (0xA797, Sb::Lower), (0xA798, Sb::Upper), (0xA799, Sb::Lower), (0xA79A, Sb::Upper),
    (0xA79B, Sb::Lower), (0xA79C, Sb::Upper), (0xA79D, Sb::Lower), (0xA79E, Sb::Upper), (0xA79F, Sb::Lower),
    (0xA7A0, Sb::Upper), (0xA7A1, Sb::Lower), (0xA7A2, Sb::Upper), (0xA7A3, Sb::Lower), (0xA7A4, Sb::Upper),
    (0xA7A5, Sb::Lower), (0xA7A6, Sb::Upper), (0xA7A7, Sb::Lower), (0xA7A8, Sb::Upper), (0xA7A9, Sb::Lower),
    (0xA7AA, Sb::Upper), (0xA7AF, Sb::Lower), (0xA7B0, Sb::Upper), (0xA7B5, Sb::Lower), (0xA7B6, Sb::Upper),
    (0xA7B7, Sb::Lower), (0xA7B8, Sb::Upper), (0xA7B9, Sb::Lower), (0xA7BA, Sb::Upper), (0xA7BB, Sb::Lower),
    (0xA7BC, Sb::Upper), (0xA7BD, Sb::Lower), (0xA7BE, Sb::Upper), (0xA7BF, Sb::Lower), (0xA7C0, Sb::Upper),
    (0xA7C1, Sb::Lower), (0xA7C2, Sb::Upper), (0xA7C3, Sb::Lower), (0xA7C4, Sb::Upper), (0xA7C8, Sb::Lower),
    (0xA7C9, Sb::Upper), (0xA7CA, Sb::Lower), (0xA7CB, Sb::Other), (0xA7D0, Sb::Upper), (0xA7D1, Sb::Lower),
    (0xA7D2, Sb::Other), (0xA7D3, Sb::Lower), (0xA7D4, Sb::Other), (0xA7D5, Sb::Lower), (0xA7D6, Sb::Upper),
    (0xA7D7, Sb::Lower), (0xA7D8, Sb::Upper), (0xA7D9, Sb::Lower), (0xA7DA, Sb::Other), (0xA7F2, Sb::OLetter),
    (0xA7F5, Sb::Upper), (0xA7F6, Sb::Lower), (0xA7F7, Sb::OLetter), (0xA7F8, Sb::Lower), (0xA7FB, Sb::OLetter),
    (0xA802, Sb::Extend), (0xA803, Sb::OLetter), (0xA806, Sb::Extend), (0xA807, Sb::OLetter), (0xA80B, Sb::Extend),
    (0xA80C, Sb::OLetter), (0xA823, Sb::Extend), (0xA828, Sb::Other), (0xA82C, Sb::Extend), (0xA82D, Sb::Other),
    (0xA840, Sb::OLetter), (0xA874, Sb::Other), (0xA880, Sb::Extend), (0xA882, Sb::OLetter), (0xA8B4, Sb::Extend),
    (0xA8C6, Sb::Other), (0xA8D0, Sb::Numeric), (0xA8DA, Sb::Other), (0xA8E0, Sb::Extend), (0xA8F2, Sb::OLetter),
    (0xA8F8, Sb::Other), (0xA8FB, Sb::OLetter), (0xA8FC, Sb::Other), (0xA8FD, Sb::OLetter), (0xA8FF, Sb::Extend),
    (0xA900, Sb::Numeric), (0xA90A, Sb::OLetter), (0xA926, Sb::Extend), (0xA92E, Sb::Other), (0xA930, Sb::OLetter),
    (0xA947, Sb::Extend), (0xA954, Sb::Other), (0xA960, Sb::OLetter), (0xA97D, Sb::Other), (0xA980, Sb::Extend),
    (0xA984, Sb::OLetter), (0xA9B3, Sb::Extend), (0xA9C1, Sb::Other), (0xA9CF, Sb::OLetter), (0xA9D0, Sb::Numeric),
    (0xA9DA, Sb::Other), (0xA9E0, Sb::OLetter), (0xA9E5, Sb::Extend), (0xA9E6, Sb::OLetter), (0xA9F0, Sb::Numeric),
    (0xA9FA, Sb::OLetter), (0xA9FF, Sb::Other), (0xAA00, Sb::OLetter), (0xAA29, Sb::Extend), (0xAA37, Sb::Other),
    (0xAA40, Sb::OLetter), (0xAA43, Sb::Extend), (0xAA44, Sb::OLetter), (0xAA4C, Sb::Extend), (0xAA4E, Sb::Other),
    (0xAA50, Sb::Numeric), (0xAA5A, Sb::Other), (0xAA60, Sb::OLetter), (0xAA77, Sb::Other), (0xAA7A, Sb::OLetter),
    (0xAA7B, Sb::Extend), (0xAA7E, Sb::OLetter), (0xAAB0, Sb::Extend), (0xAAB1, Sb::OLetter), (0xAAB2, Sb::Extend),
    (0xAAB5, Sb::OLetter), (0xAAB7, Sb::Extend), (0xAAB9, Sb::OLetter), (0xAABE, Sb::Extend), (0xAAC0, Sb::OLetter),
    (0xAAC1, Sb::Extend), (0xAAC2, Sb::OLetter), (0xAAC3, Sb::Other), (0xAADB, Sb::OLetter), (0xAADE, Sb::Other),
    (0xAAE0, Sb::OLetter), (0xAAEB, Sb::Extend), (0xAAF0, Sb::Other), (0xAAF2, Sb::OLetter), (0xAAF5, Sb::Extend),
    (0xAAF7, Sb::Other), (0xAB01, Sb::OLetter), (0xAB07, Sb::Other), (0xAB09, Sb::OLetter), (0xAB0F, Sb::Other),
    (0xAB11, Sb::OLetter), (0xAB17, Sb::Other), (0xAB20, Sb::OLetter), (0xAB27, Sb::Other), (0xAB28, Sb::OLetter),
    (0xAB2F, Sb::Other), (0xAB30, Sb::Lower), (0xAB5B, Sb::Other), (0xAB5C, Sb::Lower), (0xAB6A, Sb::Other),
    (0xAB70, Sb::Lower), (0xABC0, Sb::OLetter), (0xABE3, Sb::Extend), (0xABEB, Sb::Other), (0xABEC, Sb::Extend),
    (0xABEE, Sb::Other), (0xABF0, Sb::Numeric), (0xABFA, Sb::Other), (0xAC00, Sb::OLetter), (0xD7A4, Sb::Other),
    (0xD7B0, Sb::OLetter), (0xD7C7, Sb::Other), (0xD7CB, Sb::OLetter), (0xD7FC, Sb::Other), (0xF900, Sb::OLetter),
    (0xFA6E, Sb::Other), (0xFA70, Sb::OLetter), (0xFADA, Sb::Other), (0xFB00, Sb::Lower), (0xFB07, Sb::Other),
    (0xFB13, Sb::Lower), (0xFB18, Sb::Other), (0xFB1D, Sb::OLetter), (0xFB1E, Sb::Extend), (0xFB1F, Sb::OLetter),
    (0xFB29, Sb::Other), (0xFB2A, Sb::OLetter), (0xFB37, Sb::Other), (0xFB38, Sb::OLetter), (0xFB3D, Sb::Other),
    (0xFB3E, Sb::OLetter), (0xFB3F, Sb::Other), (0xFB40, Sb::OLetter), (0xFB42, Sb::Other), (0xFB43, Sb::OLetter),
    (0xFB45, Sb::Other), (0xFB46, Sb::OLetter), (0xFBB2, Sb::Other), (0xFBD3, Sb::OLetter), (0xFD3E, Sb::Close),
    (0xFD40, Sb::Other), (0xFD50, Sb::OLetter), (0xFD90, Sb::Other), (0xFD92, Sb::OLetter), (0xFDC8, Sb::Other),
    (0xFDF0, Sb::OLetter), (0xFDFC, Sb::Other), (0xFE00, Sb::Extend), (0xFE10, Sb::SContinue), (0xFE12, Sb::Other),
    (0xFE13, Sb::SContinue), (0xFE14, Sb::Other), (0xFE17, Sb::Close), (0xFE19, Sb::Other), (0xFE20, Sb::Extend),
    (0xFE30, Sb::Other), (0xFE31, Sb::SContinue), (0xFE33, Sb::Other), (0xFE35, Sb::Close), (0xFE45, Sb::Other),
    (0xFE47, Sb::Close), (0xFE49, Sb::Other), (0xFE50, Sb::SContinue), (0xFE52, Sb::ATerm), (0xFE53, Sb::Other),
    (0xFE55, Sb::SContinue), (0xFE56, Sb::STerm), (0xFE58, Sb::SContinue), (0xFE59, Sb::Close), (0xFE5F, Sb::Other),
    (0xFE63, Sb::SContinue), (0xFE64, Sb::Other), (0xFE70, Sb::OLetter), (0xFE75, Sb::Other), (0xFE76, Sb::OLetter),
    (0xFEFD, Sb::Other), (0xFEFF, Sb::Format), (0xFF00, Sb::Other), (0xFF01, Sb::STerm), (0xFF02, Sb::Close),
    (0xFF03, Sb::Other), (0xFF07, Sb::Close), (0xFF0A, Sb::Other), (0xFF0C, Sb::SContinue), (0xFF0E, Sb::ATerm),
    (0xFF0F, Sb::Other), (0xFF10, Sb::Numeric), (0xFF1A, Sb::SContinue), (0xFF1B, Sb::Other), (0xFF1F, Sb::STerm),
    (0xFF20, Sb::Other), (0xFF21, Sb::Upper), (0xFF3B, Sb::Close), (0xFF3C, Sb::Other), (0xFF3D, Sb::Close),
    (0xFF3E, Sb::Other), (0xFF41, Sb::Lower), (0xFF5B, Sb::Close), (0xFF5C, Sb::Other), (0xFF5D, Sb::Close),
    (0xFF5E, Sb::Other), (0xFF5F, Sb::Close), (0xFF61, Sb::STerm), (0xFF62, Sb::Close), (0xFF64, Sb::SContinue),
    (0xFF65, Sb::Other), (0xFF66, Sb::OLetter), (0xFFBF, Sb::Other), (0xFFC2, Sb::OLetter), (0xFFC8, Sb::Other),
    (0xFFCA, Sb::OLetter), (0xFFD0, Sb::Other), (0xFFD2, Sb::OLetter), (0xFFD8, Sb::Other), (0xFFDA, Sb::OLetter),
    (0xFFDD, Sb::Other), (0xFFF9, Sb::Format), (0xFFFC, Sb::Other), (0x10000, Sb::OLetter), (0x1000C, Sb::Other),
    (0x1000D, Sb::OLetter), (0x10027, Sb::Other), (0x10028, Sb::OLetter), (0x1003B, Sb::Other), (0x1003C, Sb::OLetter),
    (0x1003E, Sb::Other), (0x1003F, Sb::OLetter), (0x1004E, Sb::Other), (0x10050, Sb::OLetter), (0x1005E, Sb::Other),
    (0x10080, Sb::OLetter), (0x100FB, Sb::Other), (0x10140, Sb::OLetter), (0x10175, Sb::Other), (0x101FD, Sb::Extend),
    (0x101FE, Sb::Other), (0x10280, Sb::OLetter), (0x1029D, Sb::Other), (0x102A0, Sb::OLetter), (0x102D1, Sb::Other),
    (0x102E0, Sb::Extend), (0x102E1, Sb::Other), (0x10300, Sb::OLetter), (0x10320, Sb::Other), (0x1032D, Sb::OLetter),
    (0x1034B, Sb::Other), (0x10350, Sb::OLetter), (0x10376, Sb::Extend), (0x1037B, Sb::Other), (0x10380, Sb::OLetter),
    (0x1039E, Sb::Other), (0x103A0, Sb::OLetter), (0x103C4, Sb::Other), (0x103C8, Sb::OLetter), (0x103D0, Sb::Other),
    (0x103D1, Sb::OLetter), (0x103D6, Sb::Other), (0x10400, Sb::Upper), (0x10428, Sb::Lower), (0x10450, Sb::OLetter),
    (0x1049E, Sb::Other), (0x104A0, Sb::Numeric), (0x104AA, Sb::Other), (0x104B0, Sb::Upper), (0x104D4, Sb::Other),
    (0x104D8, Sb::Lower), (0x104FC, Sb::Other), (0x10500, Sb::OLetter), (0x10528, Sb::Other), (0x10530, Sb::OLetter),
    (0x10564, Sb::Other), (0x10570, Sb::Upper), (0x1057B, Sb::Other), (0x1057C, Sb::Upper), (0x1058B, Sb::Other),
    (0x1058C, Sb::Upper), (0x10593, Sb::Other), (0x10594, Sb::Upper), (0x10596, Sb::Other), (0x10597, Sb::Lower),
    (0x105A2, Sb::Other), (0x105A3, Sb::Lower), (0x105B2, Sb::Other), (0x105B3, Sb::Lower), (0x105BA, Sb::Other),
    (0x105BB, Sb::Lower), (0x105BD, Sb::Other), (0x10600, Sb::OLetter), (0x10737, Sb::Other), (0x10740, Sb::OLetter),
    (0x10756, Sb::Other), (0x10760, Sb::OLetter), (0x10768, Sb::Other), (0x10780, Sb::OLetter), (0x10786, Sb::Other),
    (0x10787, Sb::OLetter), (0x107B1, Sb::Other), (0x107B2, Sb::OLetter), (0x107BB, Sb::Other), (0x10800, Sb::OLetter),
    (0x10806, Sb::Other), (0x10808, Sb::OLetter), (0x10809, Sb::Other), (0x1080A, Sb::OLetter), (0x10836, Sb::Other),
    (0x10837, Sb::OLetter), (0x10839, Sb::Other), (0x1083C, Sb::OLetter), (0x1083D, Sb::Other), (0x1083F, Sb::OLetter),
    (0x10856, Sb::Other), (0x10860, Sb::OLetter), (0x10877, Sb::Other), (0x10880, Sb::OLetter), (0x1089F, Sb::Other),
    (0x108E0, Sb::OLetter), (0x108F3, Sb::Other), (0x108F4, Sb::OLetter), (0x108F6, Sb::Other), (0x10900, Sb::OLetter),
    (0x10916, Sb::Other), (0x10920, Sb::OLetter), (0x1093A, Sb::Other), (0x10980, Sb::OLetter), (0x109B8, Sb::Other),
    (0x109BE, Sb::OLetter), (0x109C0, Sb::Other), (0x10A00, Sb::OLetter), (0x10A01, Sb::Extend), (0x10A04, Sb::Other),
    (0x10A05, Sb::Extend), (0x10A07, Sb::Other), (0x10A0C, Sb::Extend), (0x10A10, Sb::OLetter), (0x10A14, Sb::Other),
    (0x10A15, Sb::OLetter), (0x10A18, Sb::Other), (0x10A19, Sb::OLetter), (0x10A36, Sb::Other), (0x10A38, Sb::Extend),
    (0x10A3B, Sb::Other), (0x10A3F, Sb::Extend), (0x10A40, Sb::Other), (0x10A60, Sb::OLetter), (0x10A7D, Sb::Other),
    (0x10A80, Sb::OLetter), (0x10A9D, Sb::Other), (0x10AC0, Sb::OLetter), (0x10AC8, Sb::Other), (0x10AC9, Sb::OLetter),
    (0x10AE5, Sb::Extend), (0x10AE7, Sb::Other), (0x10B00, Sb::OLetter), (0x10B36, Sb::Other), (0x10B40, Sb::OLetter),
    (0x10B56, Sb::Other), (0x10B60, Sb::OLetter), (0x10B73, Sb::Other), (0x10B80, Sb::OLetter), (0x10B92, Sb::Other),
    (0x10C00, Sb::OLetter), (0x10C49, Sb::Other), (0x10C80, Sb::Upper), (0x10CB3, Sb::Other), (0x10CC0, Sb::Lower),
    (0x10CF3, Sb::Other), (0x10D00, Sb::OLetter), (0x10D24, Sb::Extend), (0x10D28, Sb::Other), (0x10D30, Sb::Numeric),
    (0x10D3A, Sb::Other), (0x10E80, Sb::OLetter), (0x10EAA, Sb::Other), (0x10EAB, Sb::Extend), (0x10EAD, Sb::Other),
    (0x10EB0, Sb::OLetter), (0x10EB2, Sb::Other), (0x10F00, Sb::OLetter), (0x10F1D, Sb::Other), (0x10F27, Sb::OLetter),
    (0x10F28, Sb::Other), (0x10F30, Sb::OLetter), (0x10F46, Sb::Extend), (0x10F51, Sb::Other), (0x10F70, Sb::OLetter),
    (0x10F82, Sb::Extend), (0x10F86, Sb::Other), (0x10FB0, Sb::OLetter), (0x10FC5, Sb::Other), (0x10FE0, Sb::OLetter),
    (0x10FF7, Sb::Other), (0x11000, Sb::Extend), (0x11003, Sb::OLetter), (0x11038, Sb::Extend), (0x11047, Sb::Other),
    (0x11066, Sb::Numeric), (0x11070, Sb::Extend), (0x11071, Sb::OLetter), (0x11073, Sb::Extend), (0x11075, Sb::OLetter),
    (0x11076, Sb::Other), (0x1107F, Sb::Extend), (0x11083, Sb::OLetter), (0x110B0, Sb::Extend), (0x110BB, Sb::Other),
    (0x110BD, Sb::Format), (0x110BE, Sb::Other), (0x110C2, Sb::Extend), (0x110C3, Sb::Other), (0x110CD, Sb::Format),
    (0x110CE, Sb::Other), (0x110D0, Sb::OLetter), (0x110E9, Sb::Other), (0x110F0, Sb::Numeric), (0x110FA, Sb::Other),
    (0x11100, Sb::Extend), (0x11103, Sb::OLetter), (0x11127, Sb::Extend), (0x11135, Sb::Other), (0x11136, Sb::Numeric),
    (0x11140, Sb::Other), (0x11144, Sb::OLetter), (0x11145, Sb::Extend), (0x11147, Sb::OLetter), (0x11148, Sb::Other),
    (0x11150, Sb::OLetter), (0x11173, Sb::Extend), (0x11174, Sb::Other), (0x11176, Sb::OLetter), (0x11177, Sb::Other),
    (0x11180, Sb::Extend), (0x11183, Sb::OLetter), (0x111B3, Sb::Extend), (0x111C1, Sb::OLetter), (0x111C5, Sb::Other),
    (0x111C9, Sb::Extend), (0x111CD, Sb::Other), (0x111CE, Sb::Extend), (0x111D0, Sb::Numeric), (0x111DA, Sb::OLetter),
    (0x111DB, Sb::Other), (0x111DC, Sb::OLetter), (0x111DD, Sb::Other), (0x11200, Sb::OLetter), (0x11212, Sb::Other),
    (0x11213, Sb::OLetter), (0x1122C, Sb::Extend), (0x11238, Sb::Other), (0x1123E, Sb::Extend), (0x1123F, Sb::Other),
    (0x11280, Sb::OLetter), (0x11287, Sb::Other), (0x11288, Sb::OLetter), (0x11289, Sb::Other), (0x1128A, Sb::OLetter),
    (0x1128E, Sb::Other), (0x1128F, Sb::OLetter), (0x1129E, Sb::Other), (0x1129F, Sb::OLetter), (0x112A9, Sb::Other),
    (0x112B0, Sb::OLetter), (0x112DF, Sb::Extend), (0x112EB, Sb::Other), (0x112F0, Sb::Numeric), (0x112FA, Sb::Other),
    (0x11300, Sb::Extend), (0x11304, Sb::Other), (0x11305, Sb::OLetter), (0x1130D, Sb::Other), (0x1130F, Sb::OLetter),
    (0x11311, Sb::Other), (0x11313, Sb::OLetter), (0x11329, Sb::Other), (0x1132A, Sb::OLetter), (0x11331, Sb::Other),
    (0x11332, Sb::OLetter), (0x11334, Sb::Other), (0x11335, Sb::OLetter), (0x1133A, Sb::Other), (0x1133B, Sb::Extend),
    (0x1133D, Sb::OLetter), (0x1133E, Sb::Extend), (0x11345, Sb::Other), (0x11347, Sb::Extend), (0x11349, Sb::Other),
    (0x1134B, Sb::Extend), (0x1134E, Sb::Other), (0x11350, Sb::OLetter), (0x11351, Sb::Other), (0x11357, Sb::Extend),
    (0x11358, Sb::Other), (0x1135D, Sb::OLetter), (0x11362, Sb::Extend), (0x11364, Sb::Other), (0x11366, Sb::Extend),
    (0x1136D, Sb::Other), (0x11370, Sb::Extend), (0x11375, Sb::Other), (0x11400, Sb::OLetter), (0x11435, Sb::Extend),
    (0x11447, Sb::OLetter), (0x1144B, Sb::Other), (0x11450, Sb::Numeric), (0x1145A, Sb::Other), (0x1145E, Sb::Extend),
    (0x1145F, Sb::OLetter), (0x11462, Sb::Other), (0x11480, Sb::OLetter), (0x114B0, Sb::Extend), (0x114C4, Sb::OLetter),
    (0x114C6, Sb::Other), (0x114C7, Sb::OLetter), (0x114C8, Sb::Other), (0x114D0, Sb::Numeric), (0x114DA, Sb::Other),
    (0x11580, Sb::OLetter), (0x115AF, Sb::Extend), (0x115B6, Sb::Other), (0x115B8, Sb::Extend), (0x115C1, Sb::Other),
    (0x115D8, Sb::OLetter), (0x115DC, Sb::Extend), (0x115DE, Sb::Other), (0x11600, Sb::OLetter), (0x11630, Sb::Extend),
    (0x11641, Sb::Other), (0x11644, Sb::OLetter), (0x11645, Sb::Other), (0x11650, Sb::Numeric), (0x1165A, Sb::Other),
    (0x11680, Sb::OLetter), (0x116AB, Sb::Extend), (0x116B8, Sb::OLetter), (0x116B9, Sb::Other), (0x116C0, Sb::Numeric),
    (0x116CA, Sb::Other), (0x11700, Sb::OLetter), (0x1171B, Sb::Other), (0x1171D, Sb::Extend), (0x1172C, Sb::Other),
    (0x11730, Sb::Numeric), (0x1173A, Sb::Other), (0x11740, Sb::OLetter), (0x11747, Sb::Other), (0x11800, Sb::OLetter),
    (0x1182C, Sb::Extend), (0x1183B, Sb::Other), (0x118A0, Sb::Upper), (0x118C0, Sb::Lower), (0x118E0, Sb::Numeric),
    (0x118EA, Sb::Other), (0x118FF, Sb::OLetter), (0x11907, Sb::Other), (0x11909, Sb::OLetter), (0x1190A, Sb::Other),
    (0x1190C, Sb::OLetter), (0x11914, Sb::Other), (0x11915, Sb::OLetter), (0x11917, Sb::Other), (0x11918, Sb::OLetter),
    (0x11930, Sb::Extend), (0x11936, Sb::Other), (0x11937, Sb::Extend), (0x11939, Sb::Other), (0x1193B, Sb::Extend),
    (0x1193F, Sb::OLetter), (0x11940, Sb::Extend), (0x11941, Sb::OLetter), (0x11942, Sb::Extend), (0x11944, Sb::Other),
    (0x11950, Sb::Numeric), (0x1195A, Sb::Other), (0x119A0, Sb::OLetter), (0x119A8, Sb::Other), (0x119AA, Sb::OLetter),
    (0x119D1, Sb::Extend), (0x119D8, Sb::Other), (0x119DA, Sb::Extend), (0x119E1, Sb::OLetter), (0x119E2, Sb::Other),
    (0x119E3, Sb::OLetter), (0x119E4, Sb::Extend), (0x119E5, Sb::Other), (0x11A00, Sb::OLetter), (0x11A01, Sb::Extend),
    (0x11A0B, Sb::OLetter), (0x11A33, Sb::Extend), (0x11A3A, Sb::OLetter), (0x11A3B, Sb::Extend), (0x11A3F, Sb::Other),
    (0x11A47, Sb::Extend), (0x11A48, Sb::Other), (0x11A50, Sb::OLetter), (0x11A51, Sb::Extend), (0x11A5C, Sb::OLetter),
    (0x11A8A, Sb::Extend), (0x11A9A, Sb::Other), (0x11A9D, Sb::OLetter), (0x11A9E, Sb::Other), (0x11AB0, Sb::OLetter),
    (0x11AF9, Sb::Other), (0x11C00, Sb::OLetter), (0x11C09, Sb::Other), (0x11C0A, Sb::OLetter), (0x11C2F, Sb::Extend),
    (0x11C37, Sb::Other), (0x11C38, Sb::Extend), (0x11C40, Sb::OLetter), (0x11C41, Sb::Other), (0x11C50, Sb::Numeric),
    (0x11C5A, Sb::Other), (0x11C72, Sb::OLetter), (0x11C90, Sb::Other), (0x11C92, Sb::Extend), (0x11CA8, Sb::Other),
    (0x11CA9, Sb::Extend), (0x11CB7, Sb::Other), (0x11D00, Sb::OLetter), (0x11D07, Sb::Other), (0x11D08, Sb::OLetter),
    (0x11D0A, Sb::Other), (0x11D0B, Sb::OLetter), (0x11D31, Sb::Extend), (0x11D37, Sb::Other), (0x11D3A, Sb::Extend),
    (0x11D3B, Sb::Other), (0x11D3C, Sb::Extend), (0x11D3E, Sb::Other), (0x11D3F, Sb::Extend), (0x11D46, Sb::OLetter),
    (0x11D47, Sb::Extend), (0x11D48, Sb::Other), (0x11D50, Sb::Numeric), (0x11D5A, Sb::Other), (0x11D60, Sb::OLetter),
    (0x11D66, Sb::Other), (0x11D67, Sb::OLetter), (0x11D69, Sb::Other), (0x11D6A, Sb::OLetter), (0x11D8A, Sb::Extend),
    (0x11D8F, Sb::Other), (0x11D90, Sb::Extend), (0x11D92, Sb::Other), (0x11D93, Sb::Extend), (0x11D98, Sb::OLetter),
    (0x11D99, Sb::Other), (0x11DA0, Sb::Numeric), (0x11DAA, Sb::Other), (0x11EE0, Sb::OLetter), (0x11EF3, Sb::Extend),
    (0x11EF7, Sb::Other), (0x11FB0, Sb::OLetter), (0x11FB1, Sb::Other), (0x12000, Sb::OLetter), (0x1239A, Sb::Other),
    (0x12400, Sb::OLetter), (0x1246F, Sb::Other), (0x12480, Sb::OLetter), (0x12544, Sb::Other), (0x12F90, Sb::OLetter),
    (0x12FF1, Sb::Other), (0x13000, Sb::OLetter), (0x1342F, Sb::Other), (0x13430, Sb::Format), (0x13439, Sb::Other),
    (0x14400, Sb::OLetter), (0x14647, Sb::Other), (0x16800, Sb::OLetter), (0x16A39, Sb::Other), (0x16A40, Sb::OLetter),
    (0x16A5F, Sb::Other), (0x16A60, Sb::Numeric), (0x16A6A, Sb::Other), (0x16A70, Sb::OLetter), (0x16ABF, Sb::Other),
    (0x16AC0, Sb::Numeric), (0x16ACA, Sb::Other), (0x16AD0, Sb::OLetter), (0x16AEE, Sb::Other), (0x16AF0, Sb::Extend),
    (0x16AF5, Sb::Other), (0x16B00, Sb::OLetter), (0x16B30, Sb::Extend), (0x16B37, Sb::Other), (0x16B40, Sb::OLetter),
    (0x16B44, Sb::Other), (0x16B50, Sb::Numeric), (0x16B5A, Sb::Other), (0x16B63, Sb::OLetter), (0x16B78, Sb::Other),
    (0x16B7D, Sb::OLetter), (0x16B90, Sb::Other), (0x16E40, Sb::Upper), (0x16E60, Sb::Lower), (0x16E80, Sb::Other),
    (0x16F00, Sb::OLetter), (0x16F4B, Sb::Other), (0x16F4F, Sb::Extend), (0x16F50, Sb::OLetter), (0x16F51, Sb::Extend),
    (0x16F88, Sb::Other), (0x16F8F, Sb::Extend), (0x16F93, Sb::OLetter), (0x16FA0, Sb::Other), (0x16FE0, Sb::OLetter),
    (0x16FE2, Sb::Other), (0x16FE3, Sb::OLetter), (0x16FE4, Sb::Extend), (0x16FE5, Sb::Other), (0x16FF0, Sb::Extend),
    (0x16FF2, Sb::Other), (0x17000, Sb::OLetter), (0x187F8, Sb::Other), (0x18800, Sb::OLetter), (0x18CD6, Sb::Other),
    (0x18D00, Sb::OLetter), (0x18D09, Sb::Other), (0x1AFF0, Sb::OLetter), (0x1AFF4, Sb::Other), (0x1AFF5, Sb::OLetter),
    (0x1AFFC, Sb::Other), (0x1AFFD, Sb::OLetter), (0x1AFFF, Sb::Other), (0x1B000, Sb::OLetter), (0x1B123, Sb::Other),
    (0x1B150, Sb::OLetter), (0x1B153, Sb::Other), (0x1B164, Sb::OLetter), (0x1B168, Sb::Other), (0x1B170, Sb::OLetter),
    (0x1B2FC, Sb::Other), (0x1BC00, Sb::OLetter), (0x1BC6B, Sb::Other), (0x1BC70, Sb::OLetter), (0x1BC7D, Sb::Other),
    (0x1BC80, Sb::OLetter), (0x1BC89, Sb::Other), (0x1BC90, Sb::OLetter), (0x1BC9A, Sb::Other), (0x1BC9D, Sb::Extend),
    (0x1BC9F, Sb::Other), (0x1BCA0, Sb::Format), (0x1BCA4, Sb::Other), (0x1CF00, Sb::Extend), (0x1CF2E, Sb::Other),
    (0x1CF30, Sb::Extend), (0x1CF47, Sb::Other), (0x1D165, Sb::Extend), (0x1D16A, Sb::Other), (0x1D16D, Sb::Extend),
    (0x1D173, Sb::Format), (0x1D17B, Sb::Extend), (0x1D183, Sb::Other), (0x1D185, Sb::Extend), (0x1D18C, Sb::Other),
    (0x1D1AA, Sb::Extend), (0x1D1AE, Sb::Other), (0x1D242, Sb::Extend), (0x1D245, Sb::Other), (0x1D400, Sb::Upper),
    (0x1D41A, Sb::Lower), (0x1D434, Sb::Upper), (0x1D44E, Sb::Lower), (0x1D455, Sb::Other), (0x1D456, Sb::Lower),
    (0x1D468, Sb::Upper), (0x1D482, Sb::Lower), (0x1D49C, Sb::Upper), (0x1D49D, Sb::Other), (0x1D49E, Sb::Upper),
    (0x1D4A0, Sb::Other), (0x1D4A2, Sb::Upper), (0x1D4A3, Sb::Other), (0x1D4A5, Sb::Upper), (0x1D4A7, Sb::Other),
    (0x1D4A9, Sb::Upper), (0x1D4AD, Sb::Other), (0x1D4AE, Sb::Upper), (0x1D4B6, Sb::Lower), (0x1D4BA, Sb::Other),
    (0x1D4BB, Sb::Lower), (0x1D4BC, Sb::Other), (0x1D4BD, Sb::Lower), (0x1D4C4, Sb::Other), (0x1D4C5, Sb::Lower),
    (0x1D4D0, Sb::Upper), (0x1D4EA, Sb::Lower), (0x1D504, Sb::Upper), (0x1D506, Sb::Other), (0x1D507, Sb::Upper),
    (0x1D50B, Sb::Other), (0x1D50D, Sb::Upper), (0x1D515, Sb::Other), (0x1D516, Sb::Upper), (0x1D51D, Sb::Other),
    (0x1D51E, Sb::Lower), (0x1D538, Sb::Upper), (0x1D53A, Sb::Other), (0x1D53B, Sb::Upper), (0x1D53F, Sb::Other),
    (0x1D540, Sb::Upper), (0x1D545, Sb::Other), (0x1D546, Sb::Upper), (0x1D547, Sb::Other), (0x1D54A, Sb::Upper),
    (0x1D551, Sb::Other), (0x1D552, Sb::Lower), (0x1D56C, Sb::Upper), (0x1D586, Sb::Lower), (0x1D5A0, Sb::Upper),
    (0x1D5BA, Sb::Lower), (0x1D5D4, Sb::Upper), (0x1D5EE, Sb::Lower), (0x1D608, Sb::Upper), (0x1D622, Sb::Lower),
    (0x1D63C, Sb::Upper), (0x1D656, Sb::Lower), (0x1D670, Sb::Upper), (0x1D68A, Sb::Lower), (0x1D6A6, Sb::Other),
    (0x1D6A8, Sb::Upper), (0x1D6C1, Sb::Other), (0x1D6C2, Sb::Lower), (0x1D6DB, Sb::Other), (0x1D6DC, Sb::Lower),
    (0x1D6E2, Sb::Upper), (0x1D6FB, Sb::Other), (0x1D6FC, Sb::Lower), (0x1D715, Sb::Other), (0x1D716, Sb::Lower),
    (0x1D71C, Sb::Upper), (0x1D735, Sb::Other), (0x1D736, Sb::Lower), (0x1D74F, Sb::Other), (0x1D750, Sb::Lower),
    (0x1D756, Sb::Upper), (0x1D76F, Sb::Other), (0x1D770, Sb::Lower), (0x1D789, Sb::Other), (0x1D78A, Sb::Lower),
    (0x1D790, Sb::Upper), (0x1D7A9, Sb::Other), (0x1D7AA, Sb::Lower), (0x1D7C3, Sb::Other), (0x1D7C4, Sb::Lower),
    (0x1D7CA, Sb::Upper), (0x1D7CB, Sb::Lower), (0x1D7CC, Sb::Other), (0x1D7CE, Sb::Numeric), (0x1D800, Sb::Other),
    (0x1DA00, Sb::Extend), (0x1DA37, Sb::Other), (0x1DA3B, Sb::Extend), (0x1DA6D, Sb::Other), (0x1DA75, Sb::Extend),
    (0x1DA76, Sb::Other), (0x1DA84, Sb::Extend), (0x1DA85, Sb::Other), (0x1DA9B, Sb::Extend), (0x1DAA0, Sb::Other),
    (0x1DAA1, Sb::Extend), (0x1DAB0, Sb::Other), (0x1DF00, Sb::Lower), (0x1DF0A, Sb::OLetter), (0x1DF0B, Sb::Lower),
    (0x1DF1F, Sb::Other), (0x1E000, Sb::Extend), (0x1E007, Sb::Other), (0x1E008, Sb::Extend), (0x1E019, Sb::Other),
    (0x1E01B, Sb::Extend), (0x1E022, Sb::Other), (0x1E023, Sb::Extend), (0x1E025, Sb::Other), (0x1E026, Sb::Extend),
    (0x1E02B, Sb::Other), (0x1E100, Sb::OLetter), (0x1E12D, Sb::Other), (0x1E130, Sb::Extend), (0x1E137, Sb::OLetter),
    (0x1E13E, Sb::Other), (0x1E140, Sb::Numeric), (0x1E14A, Sb::Other), (0x1E14E, Sb::OLetter), (0x1E14F, Sb::Other),
    (0x1E290, Sb::OLetter), (0x1E2AE, Sb::Extend), (0x1E2AF, Sb::Other), (0x1E2C0, Sb::OLetter), (0x1E2EC, Sb::Extend),
    (0x1E2F0, Sb::Numeric), (0x1E2FA, Sb::Other), (0x1E7E0, Sb::OLetter), (0x1E7E7, Sb::Other), (0x1E7E8, Sb::OLetter),
    (0x1E7EC, Sb::Other), (0x1E7ED, Sb::OLetter), (0x1E7EF, Sb::Other), (0x1E7F0, Sb::OLetter), (0x1E7FF, Sb::Other),
    (0x1E800, Sb::OLetter), (0x1E8C5, Sb::Other), (0x1E8D0, Sb::Extend), (0x1E8D7, Sb::Other), (0x1E900, Sb::Upper),
    (0x1E922, Sb::Lower), (0x1E944, Sb::Extend), (0x1E94B, Sb::OLetter), (0x1E94C, Sb::Other), (0x1E950, Sb::Numeric),
    (0x1E95A, Sb::Other), (0x1EE00, Sb::OLetter), (0x1EE04, Sb::Other), (0x1EE05, Sb::OLetter), (0x1EE20, Sb::Other),
    (0x1EE21, Sb::OLetter), (0x1EE23, Sb::Other), (0x1EE24, Sb::OLetter), (0x1EE25, Sb::Other), (0x1EE27, Sb::OLetter),
    (0x1EE28, Sb::Other), (0x1EE29, Sb::OLetter), (0x1EE33, Sb::Other), (0x1EE34, Sb::OLetter), (0x1EE38, Sb::Other),
    (0x1EE39, Sb::OLetter), (0x1EE3A, Sb::Other), (0x1EE3B, Sb::OLetter), (0x1EE3C, Sb::Other), (0x1EE42, Sb::OLetter),
    (0x1EE43, Sb::Other), (0x1EE47, Sb::OLetter), (0x1EE48, Sb::Other), (0x1EE49, Sb::OLetter), (0x1EE4A, Sb::Other),
    (0x1EE4B, Sb::OLetter), (0x1EE4C, Sb::Other), (0x1EE4D, Sb::OLetter), (0x1EE50, Sb::Other), (0x1EE51, Sb::OLetter),
    (0x1EE53, Sb::Other), (0x1EE54, Sb::OLetter), (0x1EE55, Sb::Other), (0x1EE57, Sb::OLetter), (0x1EE58, Sb::Other),
    (0x1EE59, Sb::OLetter), (0x1EE5A, Sb::Other), (0x1EE5B, Sb::OLetter), (0x1EE5C, Sb::Other), (0x1EE5D, Sb::OLetter),
    (0x1EE5E, Sb::Other), (0x1EE5F, Sb::OLetter), (0x1EE60, Sb::Other), (0x1EE61, Sb::OLetter), (0x1EE63, Sb::Other),
    (0x1EE64, Sb::OLetter), (0x1EE65, Sb::Other), (0x1EE67, Sb::OLetter), (0x1EE6B, Sb::Other), (0x1EE6C, Sb::OLetter),
    (0x1EE73, Sb::Other), (0x1EE74, Sb::OLetter), (0x1EE78, Sb::Other), (0x1EE79, Sb::OLetter), (0x1EE7D, Sb::Other),
    (0x1EE7E, Sb::OLetter), (0x1EE7F, Sb::Other), (0x1EE80, Sb::OLetter), (0x1EE8A, Sb::Other), (0x1EE8B, Sb::OLetter),
    (0x1EE9C, Sb::Other), (0x1EEA1, Sb::OLetter), (0x1EEA4, Sb::Other), (0x1EEA5, Sb::OLetter), (0x1EEAA, Sb::Other),
    (0x1EEAB, Sb::OLetter), (0x1EEBC, Sb::Other), (0x1F130, Sb::Upper), (0x1F14A, Sb::Other), (0x1F150, Sb::Upper),
    (0x1F16A, Sb::Other), (0x1F170, Sb::Upper), (0x1F18A, Sb::Other), (0x1FBF0, Sb::Numeric), (0x1FBFA, Sb::Other),
    (0x20000, Sb::OLetter), (0x2A6E0, Sb::Other), (0x2A700, Sb::OLetter), (0x2B739, Sb::Other), (0x2B740, Sb::OLetter),
    (0x2B81E, Sb::Other), (0x2B820, Sb::OLetter), (0x2CEA2, Sb::Other), (0x2CEB0, Sb::OLetter), (0x2EBE1, Sb::Other),
    (0x2F800, Sb::OLetter), (0x2FA1E, Sb::Other), (0x30000, Sb::OLetter), (0x3134B, Sb::Other), (0xE0001, Sb::Format),
    (0xE0002, Sb::Other), (0xE0020, Sb::Format), (0xE0080, Sb::Other), (0xE0100, Sb::Extend), (0xE01F0, Sb::Other),
];

pub(crate) static LINE_BREAK: &[(u32, Lb)] = &[
    (0x0, Lb::CM), (0x9, Lb::BA), (0xA, Lb::LF), (0xB, Lb::BK), (0xD, Lb::CR), (0xE, Lb::CM),
    (0x20, Lb::SP), (0x21, Lb::EX), (0x22, Lb::QU), (0x23, Lb::AL), (0x24, Lb::PR), (0x25, Lb::PO),
    (0x26, Lb::AL), (0x27, Lb::QU), (0x28, Lb::OP), (0x29, Lb::CL), (0x2A, Lb::AL), (0x2B, Lb::PR),
    (0x2C, Lb::IS), (0x2D, Lb::HY), (0x2E, Lb::IS), (0x2F, Lb::AL), (0x30, Lb::NU), (0x3A, Lb::IS),
    (0x3C, Lb::AL), (0x3F, Lb::EX), (0x40, Lb::AL), (0x5B, Lb::OP), (0x5C, Lb::AL), (0x5D, Lb::CL),
    (0x5E, Lb::AL), (0x7B, Lb::OP), (0x7C, Lb::AL), (0x7D, Lb::CL), (0x7E, Lb::AL), (0x7F, Lb::CM),
    (0x85, Lb::NL), (0x86, Lb::CM), (0xA0, Lb::GL), (0xA1, Lb::OP), (0xA2, Lb::PO), (0xA3, Lb::PR),
    (0xA6, Lb::AL), (0xAB, Lb::QU), (0xAC, Lb::AL), (0xAD, Lb::BA), (0xAE, Lb::AL), (0xB0, Lb::PO),
    (0xB1, Lb::PR), (0xB2, Lb::AL), (0xBB, Lb::QU), (0xBC, Lb::AL), (0xBF, Lb::OP), (0xC0, Lb::AL),
    (0x300, Lb::CM), (0x34F, Lb::GL), (0x350, Lb::CM), (0x370, Lb::AL), (0x378, Lb::XX), (0x37A, Lb::AL),
    (0x37E, Lb::IS), (0x37F, Lb::AL), (0x380, Lb::XX), (0x384, Lb::AL), (0x38B, Lb::XX), (0x38C, Lb::AL),
    (0x38D, Lb::XX), (0x38E, Lb::AL), (0x3A2, Lb::XX), (0x3A3, Lb::AL), (0x483, Lb::CM), (0x48A, Lb::AL),
    (0x530, Lb::XX), (0x531, Lb::AL), (0x557, Lb::XX), (0x559, Lb::AL), (0x589, Lb::IS), (0x58A, Lb::BA),
    (0x58B, Lb::XX), (0x58D, Lb::AL), (0x58F, Lb::PR), (0x590, Lb::XX), (0x591, Lb::CM), (0x5BE, Lb::AL),
    (0x5BF, Lb::CM), (0x5C0, Lb::AL), (0x5C1, Lb::CM), (0x5C3, Lb::AL), (0x5C4, Lb::CM), (0x5C6, Lb::AL),
    (0x5C7, Lb::CM), (0x5C8, Lb::XX), (0x5D0, Lb::HL), (0x5EB, Lb::XX), (0x5EF, Lb::HL), (0x5F3, Lb::AL),
    (0x5F5, Lb::XX), (0x600, Lb::CM), (0x606, Lb::AL), (0x60B, Lb::PR), (0x60C, Lb::IS), (0x60E, Lb::AL),
    (0x610, Lb::CM), (0x61B, Lb::AL), (0x61C, Lb::CM), (0x61D, Lb::AL), (0x64B, Lb::CM), (0x660, Lb::NU),
    (0x66A, Lb::AL), (0x670, Lb::CM), (0x671, Lb::AL), (0x6D6, Lb::CM), (0x6DE, Lb::AL), (0x6DF, Lb::CM),
    (0x6E5, Lb::AL), (0x6E7, Lb::CM), (0x6E9, Lb::AL), (0x6EA, Lb::CM), (0x6EE, Lb::AL), (0x6F0, Lb::NU),
    (0x6FA, Lb::AL), (0x70E, Lb::XX), (0x70F, Lb::CM), (0x710, Lb::AL), (0x711, Lb::CM), (0x712, Lb::AL),
    (0x730, Lb::CM), (0x74B, Lb::XX), (0x74D, Lb::AL), (0x7A6, Lb::CM), (0x7B1, Lb::AL), (0x7B2, Lb::XX),
    (0x7C0, Lb::NU), (0x7CA, Lb::AL), (0x7EB, Lb::CM), (0x7F4, Lb::AL), (0x7F8, Lb::IS), (0x7F9, Lb::AL),
    (0x7FB, Lb::XX), (0x7FD, Lb::CM), (0x7FE, Lb::PR), (0x800, Lb::AL), (0x816, Lb::CM), (0x81A, Lb::AL),
    (0x81B, Lb::CM), (0x824, Lb::AL), (0x825, Lb::CM), (0x828, Lb::AL), (0x829, Lb::CM), (0x82E, Lb::XX),
    (0x830, Lb::AL), (0x83F, Lb::XX), (0x840, Lb::AL), (0x859, Lb::CM), (0x85C, Lb::XX), (0x85E, Lb::AL),
    (0x85F, Lb::XX), (0x860, Lb::AL), (0x86B, Lb::XX), (0x870, Lb::AL), (0x88F, Lb::XX), (0x890, Lb::CM),
    (0x892, Lb::XX), (0x898, Lb::CM), (0x8A0, Lb::AL), (0x8CA, Lb::CM), (0x904, Lb::AL), (0x93A, Lb::CM),
    (0x93D, Lb::AL), (0x93E, Lb::CM), (0x950, Lb::AL), (0x951, Lb::CM), (0x958, Lb::AL), (0x962, Lb::CM),
    (0x964, Lb::AL), (0x966, Lb::NU), (0x970, Lb::AL), (0x981, Lb::CM), (0x984, Lb::XX), (0x985, Lb::AL),
    (0x98D, Lb::XX), (0x98F, Lb::AL), (0x991, Lb::XX), (0x993, Lb::AL), (0x9A9, Lb::XX), (0x9AA, Lb::AL),
    (0x9B1, Lb::XX), (0x9B2, Lb::AL), (0x9B3, Lb::XX), (0x9B6, Lb::AL), (0x9BA, Lb::XX), (0x9BC, Lb::CM),
    (0x9BD, Lb::AL), (0x9BE, Lb::CM), (0x9C5, Lb::XX), (0x9C7, Lb::CM), (0x9C9, Lb::XX), (0x9CB, Lb::CM),
    (0x9CE, Lb::AL), (0x9CF, Lb::XX), (0x9D7, Lb::CM), (0x9D8, Lb::XX), (0x9DC, Lb::AL), (0x9DE, Lb::XX),
    (0x9DF, Lb::AL), (0x9E2, Lb::CM), (0x9E4, Lb::XX), (0x9E6, Lb::NU), (0x9F0, Lb::AL), (0x9F2, Lb::PR),
    (0x9F4, Lb::AL), (0x9FB, Lb::PR), (0x9FC, Lb::AL), (0x9FE, Lb::CM), (0x9FF, Lb::XX), (0xA01, Lb::CM),
    (0xA04, Lb::XX), (0xA05, Lb::AL), (0xA0B, Lb::XX), (0xA0F, Lb::AL), (0xA11, Lb::XX), (0xA13, Lb::AL),
    (0xA29, Lb::XX), (0xA2A, Lb::AL), (0xA31, Lb::XX), (0xA32, Lb::AL), (0xA34, Lb::XX), (0xA35, Lb::AL),
    (0xA37, Lb::XX), (0xA38, Lb::AL), (0xA3A, Lb::XX), (0xA3C, Lb::CM), (0xA3D, Lb::XX), (0xA3E, Lb::CM),
    (0xA43, Lb::XX), (0xA47, Lb::CM), (0xA49, Lb::XX), (0xA4B, Lb::CM), (0xA4E, Lb::XX), (0xA51, Lb::CM),
    (0xA52, Lb::XX), (0xA59, Lb::AL), (0xA5D, Lb::XX), (0xA5E, Lb::AL), (0xA5F, Lb::XX), (0xA66, Lb::NU),
    (0xA70, Lb::CM), (0xA72, Lb::AL), (0xA75, Lb::CM), (0xA76, Lb::AL), (0xA77, Lb::XX), (0xA81, Lb::CM),
    (0xA84, Lb::XX), (0xA85, Lb::AL), (0xA8E, Lb::XX), (0xA8F, Lb::AL), (0xA92, Lb::XX), (0xA93, Lb::AL),
    (0xAA9, Lb::XX), (0xAAA, Lb::AL), (0xAB1, Lb::XX), (0xAB2, Lb::AL), (0xAB4, Lb::XX), (0xAB5, Lb::AL),
    (0xABA, Lb::XX), (0xABC, Lb::CM), (0xABD, Lb::AL), (0xABE, Lb::CM), (0xAC6, Lb::XX), (0xAC7, Lb::CM),
    (0xACA, Lb::XX), (0xACB, Lb::CM), (0xACE, Lb::XX), (0xAD0, Lb::AL), (0xAD1, Lb::XX), (0xAE0, Lb::AL),
    (0xAE2, Lb::CM), (0xAE4, Lb::XX), (0xAE6, Lb::NU), (0xAF0, Lb::AL), (0xAF1, Lb::PR), (0xAF2, Lb::XX),
    (0xAF9, Lb::AL), (0xAFA, Lb::CM), (0xB00, Lb::XX), (0xB01, Lb::CM), (0xB04, Lb::XX), (0xB05, Lb::AL),
    (0xB0D, Lb::XX), (0xB0F, Lb::AL), (0xB11, Lb::XX), (0xB13, Lb::AL), (0xB29, Lb::XX), (0xB2A, Lb::AL),
    (0xB31, Lb::XX), (0xB32, Lb::AL), (0xB34, Lb::XX), (0xB35, Lb::AL), (0xB3A, Lb::XX), (0xB3C, Lb::CM),
    (0xB3D, Lb::AL), (0xB3E, Lb::CM), (0xB45, Lb::XX), (0xB47, Lb::CM), (0xB49, Lb::XX), (0xB4B, Lb::CM),
    (0xB4E, Lb::XX), (0xB55, Lb::CM), (0xB58, Lb::XX), (0xB5C, Lb::AL), (0xB5E, Lb::XX), (0xB5F, Lb::AL),
    (0xB62, Lb::CM), (0xB64, Lb::XX), (0xB66, Lb::NU), (0xB70, Lb::AL), (0xB78, Lb::XX), (0xB82, Lb::CM),
    (0xB83, Lb::AL), (0xB84, Lb::XX), (0xB85, Lb::AL), (0xB8B, Lb::XX), (0xB8E, Lb::AL), (0xB91, Lb::XX),
    (0xB92, Lb::AL), (0xB96, Lb::XX), (0xB99, Lb::AL), (0xB9B, Lb::XX), (0xB9C, Lb::AL), (0xB9D, Lb::XX),
    (0xB9E, Lb::AL), (0xBA0, Lb::XX), (0xBA3, Lb::AL), (0xBA5, Lb::XX), (0xBA8, Lb::AL), (0xBAB, Lb::XX),
    (0xBAE, Lb::AL), (0xBBA, Lb::XX), (0xBBE, Lb::CM), (0xBC3, Lb::XX), (0xBC6, Lb::CM), (0xBC9, Lb::XX),
    (0xBCA, Lb::CM), (0xBCE, Lb::XX), (0xBD0, Lb::AL), (0xBD1, Lb::XX), (0xBD7, Lb::CM), (0xBD8, Lb::XX),
    (0xBE6, Lb::NU), (0xBF0, Lb::AL), (0xBF9, Lb::PR), (0xBFA, Lb::AL), (0xBFB, Lb::XX), (0xC00, Lb::CM),
    (0xC05, Lb::AL), (0xC0D, Lb::XX), (0xC0E, Lb::AL), (0xC11, Lb::XX), (0xC12, Lb::AL), (0xC29, Lb::XX),
    (0xC2A, Lb::AL), (0xC3A, Lb::XX), (0xC3C, Lb::CM), (0xC3D, Lb::AL), (0xC3E, Lb::CM), (0xC45, Lb::XX),
    (0xC46, Lb::CM), (0xC49, Lb::XX), (0xC4A, Lb::CM), (0xC4E, Lb::XX), (0xC55, Lb::CM), (0xC57, Lb::XX),
    (0xC58, Lb::AL), (0xC5B, Lb::XX), (0xC5D, Lb::AL), (0xC5E, Lb::XX), (0xC60, Lb::AL), (0xC62, Lb::CM),
    (0xC64, Lb::XX), (0xC66, Lb::NU), (0xC70, Lb::XX), (0xC77, Lb::AL), (0xC81, Lb::CM), (0xC84, Lb::AL),
    (0xC8D, Lb::XX), (0xC8E, Lb::AL), (0xC91, Lb::XX), (0xC92, Lb::AL), (0xCA9, Lb::XX), (0xCAA, Lb::AL),
    (0xCB4, Lb::XX), (0xCB5, Lb::AL), (0xCBA, Lb::XX), (0xCBC, Lb::CM), (0xCBD, Lb::AL), (0xCBE, Lb::CM),
    (0xCC5, Lb::XX), (0xCC6, Lb::CM), (0xCC9, Lb::XX), (0xCCA, Lb::CM), (0xCCE, Lb::XX), (0xCD5, Lb::CM),
    (0xCD7, Lb::XX), (0xCDD, Lb::AL), (0xCDF, Lb::XX), (0xCE0, Lb::AL), (0xCE2, Lb::CM), (0xCE4, Lb::XX),
    (0xCE6, Lb::NU), (0xCF0, Lb::XX), (0xCF1, Lb::AL), (0xCF3, Lb::XX), (0xD00, Lb::CM), (0xD04, Lb::AL),
    (0xD0D, Lb::XX), (0xD0E, Lb::AL), (0xD11, Lb::XX), (0xD12, Lb::AL), (0xD3B, Lb::CM), (0xD3D, Lb::AL),
    (0xD3E, Lb::CM), (0xD45, Lb::XX), (0xD46, Lb::CM), (0xD49, Lb::XX), (0xD4A, Lb::CM), (0xD4E, Lb::AL),
    (0xD50, Lb::XX), (0xD54, Lb::AL), (0xD57, Lb::CM), (0xD58, Lb::AL), (0xD62, Lb::CM), (0xD64, Lb::XX),
    (0xD66, Lb::NU), (0xD70, Lb::AL), (0xD80, Lb::XX), (0xD81, Lb::CM), (0xD84, Lb::XX), (0xD85, Lb::AL),
    (0xD97, Lb::XX), (0xD9A, Lb::AL), (0xDB2, Lb::XX), (0xDB3, Lb::AL), (0xDBC, Lb::XX), (0xDBD, Lb::AL),
    (0xDBE, Lb::XX), (0xDC0, Lb::AL), (0xDC7, Lb::XX), (0xDCA, Lb::CM), (0xDCB, Lb::XX), (0xDCF, Lb::CM),
    (0xDD5, Lb::XX), (0xDD6, Lb::CM), (0xDD7, Lb::XX), (0xDD8, Lb::CM), (0xDE0, Lb::XX), (0xDE6, Lb::NU),
    (0xDF0, Lb::XX), (0xDF2, Lb::CM), (0xDF4, Lb::AL), (0xDF5, Lb::XX), (0xE00, Lb::SA), (0xE31, Lb::CM),
    (0xE32, Lb::SA), (0xE34, Lb::CM), (0xE3B, Lb::SA), (0xE3F, Lb::PR), (0xE40, Lb::SA), (0xE47, Lb::CM),
    (0xE4F, Lb::SA), (0xE50, Lb::NU), (0xE5A, Lb::SA), (0xEB1, Lb::CM), (0xEB2, Lb::SA), (0xEB4, Lb::CM),
    (0xEBD, Lb::SA), (0xEC8, Lb::CM), (0xECE, Lb::SA), (0xED0, Lb::NU), (0xEDA, Lb::SA), (0xF00, Lb::AL),
    (0xF08, Lb::GL), (0xF09, Lb::AL), (0xF0B, Lb::BA), (0xF0C, Lb::GL), (0xF0D, Lb::AL), (0xF12, Lb::GL),
    (0xF13, Lb::AL), (0xF18, Lb::CM), (0xF1A, Lb::AL), (0xF20, Lb::NU), (0xF2A, Lb::AL), (0xF35, Lb::CM),
    (0xF36, Lb::AL), (0xF37, Lb::CM), (0xF38, Lb::AL), (0xF39, Lb::CM), (0xF3A, Lb::OP), (0xF3B, Lb::CL),
    (0xF3C, Lb::OP), (0xF3D, Lb::CL), (0xF3E, Lb::CM), (0xF40, Lb::AL), (0xF48, Lb::XX), (0xF49, Lb::AL),
    (0xF6D, Lb::XX), (0xF71, Lb::CM), (0xF85, Lb::AL), (0xF86, Lb::CM), (0xF88, Lb::AL), (0xF8D, Lb::CM),
    (0xF98, Lb::XX), (0xF99, Lb::CM), (0xFBD, Lb::XX), (0xFBE, Lb::AL), (0xFC6, Lb::CM), (0xFC7, Lb::AL),
    (0xFCD, Lb::XX), (0xFCE, Lb::AL), (0xFDB, Lb::XX), (0x1000, Lb::SA), (0x102B, Lb::CM), (0x103F, Lb::SA),
    (0x1040, Lb::NU), (0x104A, Lb::SA), (0x1056, Lb::CM), (0x105A, Lb::SA), (0x105E, Lb::CM), (0x1061, Lb::SA),
    (0x1062, Lb::CM), (0x1065, Lb::SA), (0x1067, Lb::CM), (0x106E, Lb::SA), (0x1071, Lb::CM), (0x1075, Lb::SA),
    (0x1082, Lb::CM), (0x108E, Lb::SA), (0x108F, Lb::CM), (0x1090, Lb::NU), (0x109A, Lb::CM), (0x109E, Lb::SA),
    (0x10A0, Lb::AL), (0x10C6, Lb::XX), (0x10C7, Lb::AL), (0x10C8, Lb::XX), (0x10CD, Lb::AL), (0x10CE, Lb::XX),
    (0x10D0, Lb::AL), (0x1100, Lb::JL), (0x1160, Lb::JV), (0x11A8, Lb::JT), (0x1200, Lb::AL), (0x1249, Lb::XX),
    (0x124A, Lb::AL), (0x124E, Lb::XX), (0x1250, Lb::AL), (0x1257, Lb::XX), (0x1258, Lb::AL), (0x1259, Lb::XX),
    (0x125A, Lb::AL), (0x125E, Lb::XX), (0x1260, Lb::AL), (0x1289, Lb::XX), (0x128A, Lb::AL), (0x128E, Lb::XX),
    (0x1290, Lb::AL), (0x12B1, Lb::XX), (0x12B2, Lb::AL), (0x12B6, Lb::XX), (0x12B8, Lb::AL), (0x12BF, Lb::XX),
    (0x12C0, Lb::AL), (0x12C1, Lb::XX), (0x12C2, Lb::AL), (0x12C6, Lb::XX), (0x12C8, Lb::AL), (0x12D7, Lb::XX),
    (0x12D8, Lb::AL), (0x1311, Lb::XX), (0x1312, Lb::AL), (0x1316, Lb::XX), (0x1318, Lb::AL), (0x135B, Lb::XX),
    (0x135D, Lb::CM), (0x1360, Lb::AL), (0x137D, Lb::XX), (0x1380, Lb::AL), (0x139A, Lb::XX), (0x13A0, Lb::AL),
    (0x13F6, Lb::XX), (0x13F8, Lb::AL), (0x13FE, Lb::XX), (0x1400, Lb::AL), (0x1680, Lb::BA), (0x1681, Lb::AL),
    (0x169B, Lb::OP), (0x169C, Lb::CL), (0x169D, Lb::XX), (0x16A0, Lb::AL), (0x16F9, Lb::XX), (0x1700, Lb::AL),
    (0x1712, Lb::CM), (0x1716, Lb::XX), (0x171F, Lb::AL), (0x1732, Lb::CM), (0x1735, Lb::AL), (0x1737, Lb::XX),
    (0x1740, Lb::AL), (0x1752, Lb::CM), (0x1754, Lb::XX), (0x1760, Lb::AL), (0x176D, Lb::XX), (0x176E, Lb::AL),
    (0x1771, Lb::XX), (0x1772, Lb::CM), (0x1774, Lb::XX), (0x1780, Lb::SA), (0x17B4, Lb::CM), (0x17D4, Lb::SA),
    (0x17DB, Lb::PR), (0x17DC, Lb::SA), (0x17DD, Lb::CM), (0x17DE, Lb::SA), (0x17E0, Lb::NU), (0x17EA, Lb::SA),
    (0x1800, Lb::AL), (0x180B, Lb::CM), (0x180E, Lb::GL), (0x180F, Lb::CM), (0x1810, Lb::NU), (0x181A, Lb::XX),
    (0x1820, Lb::AL), (0x1879, Lb::XX), (0x1880, Lb::AL), (0x1885, Lb::CM), (0x1887, Lb::AL), (0x18A9, Lb::CM),
    (0x18AA, Lb::AL), (0x18AB, Lb::XX), (0x18B0, Lb::AL), (0x18F6, Lb::XX), (0x1900, Lb::AL), (0x191F, Lb::XX),
    (0x1920, Lb::CM), (0x192C, Lb::XX), (0x1930, Lb::CM), (0x193C, Lb::XX), (0x1940, Lb::AL), (0x1941, Lb::XX),
    (0x1944, Lb::AL), (0x1946, Lb::NU), (0x1950, Lb::SA), (0x19D0, Lb::NU), (0x19DA, Lb::SA), (0x19E0, Lb::AL),
    (0x1A17, Lb::CM), (0x1A1C, Lb::XX), (0x1A1E, Lb::AL), (0x1A20, Lb::SA), (0x1A55, Lb::CM), (0x1A5F, Lb::SA),
    (0x1A60, Lb::CM), (0x1A7D, Lb::SA), (0x1A7F, Lb::CM), (0x1A80, Lb::NU), (0x1A8A, Lb::SA), (0x1A90, Lb::NU),
    (0x1A9A, Lb::SA), (0x1AB0, Lb::CM), (0x1ACF, Lb::XX), (0x1B00, Lb::CM), (0x1B05, Lb::AL), (0x1B34, Lb::CM),
    (0x1B45, Lb::AL), (0x1B4D, Lb::XX), (0x1B50, Lb::NU), (0x1B5A, Lb::AL), (0x1B6B, Lb::CM), (0x1B74, Lb::AL),
    (0x1B7F, Lb::XX), (0x1B80, Lb::CM), (0x1B83, Lb::AL), (0x1BA1, Lb::CM), (0x1BAE, Lb::AL), (0x1BB0, Lb::NU),
    (0x1BBA, Lb::AL), (0x1BE6, Lb::CM), (0x1BF4, Lb::XX), (0x1BFC, Lb::AL), (0x1C24, Lb::CM), (0x1C38, Lb::XX),
    (0x1C3B, Lb::AL), (0x1C40, Lb::NU), (0x1C4A, Lb::XX), (0x1C4D, Lb::AL), (0x1C50, Lb::NU), (0x1C5A, Lb::AL),
    (0x1C89, Lb::XX), (0x1C90, Lb::AL), (0x1CBB, Lb::XX), (0x1CBD, Lb::AL), (0x1CC8, Lb::XX), (0x1CD0, Lb::CM),
    (0x1CD3, Lb::AL), (0x1CD4, Lb::CM), (0x1CE9, Lb::AL), (0x1CED, Lb::CM), (0x1CEE, Lb::AL), (0x1CF4, Lb::CM),
    (0x1CF5, Lb::AL), (0x1CF7, Lb::CM), (0x1CFA, Lb::AL), (0x1CFB, Lb::XX), (0x1D00, Lb::AL), (0x1DC0, Lb::CM),
    (0x1E00, Lb::AL), (0x1F16, Lb::XX), (0x1F18, Lb::AL), (0x1F1E, Lb::XX), (0x1F20, Lb::AL), (0x1F46, Lb::XX),
    (0x1F48, Lb::AL), (0x1F4E, Lb::XX), (0x1F50, Lb::AL), (0x1F58, Lb::XX), (0x1F59, Lb::AL), (0x1F5A, Lb::XX),
    (0x1F5B, Lb::AL), (0x1F5C, Lb::XX), (0x1F5D, Lb::AL), (0x1F5E, Lb::XX), (0x1F5F, Lb::AL), (0x1F7E, Lb::XX),
    (0x1F80, Lb::AL), (0x1FB5, Lb::XX), (0x1FB6, Lb::AL), (0x1FC5, Lb::XX), (0x1FC6, Lb::AL), (0x1FD4, Lb::XX),
    (0x1FD6, Lb::AL), (0x1FDC, Lb::XX), (0x1FDD, Lb::AL), (0x1FF0, Lb::XX), (0x1FF2, Lb::AL), (0x1FF5, Lb::XX),
    (0x1FF6, Lb::AL), (0x1FFF, Lb::XX), (0x2000, Lb::BA), (0x2007, Lb::GL), (0x2008, Lb::BA), (0x200B, Lb::ZW),
    (0x200C, Lb::CM), (0x2010, Lb::BA), (0x2011, Lb::GL), (0x2012, Lb::BA), (0x2014, Lb::B2), (0x2015, Lb::AL),
    (0x2018, Lb::QU), (0x201A, Lb::OP), (0x201B, Lb::QU), (0x201E, Lb::OP), (0x201F, Lb::QU), (0x2020, Lb::AL),
    (0x2024, Lb::IN), (0x2027, Lb::AL), (0x2028, Lb::BK), (0x202A, Lb::CM), (0x202F, Lb::GL), (0x2030, Lb::PO),
    (0x2035, Lb::AL), (0x2039, Lb::QU), (0x203B, Lb::AL), (0x2044, Lb::IS), (0x2045, Lb::OP), (0x2046, Lb::CL),
    (0x2047, Lb::AL), (0x205F, Lb::BA), (0x2060, Lb::WJ), (0x2061, Lb::CM), (0x2065, Lb::XX), (0x2066, Lb::CM),
    (0x2070, Lb::AL), (0x2072, Lb::XX), (0x2074, Lb::AL), (0x207D, Lb::OP), (0x207E, Lb::CL), (0x207F, Lb::AL),
    (0x208D, Lb::OP), (0x208E, Lb::CL), (0x208F, Lb::XX), (0x2090, Lb::AL), (0x209D, Lb::XX), (0x20A0, Lb::PR),
    (0x20C1, Lb::XX), (0x20D0, Lb::CM), (0x20F1, Lb::XX), (0x2100, Lb::AL), (0x2103, Lb::PO), (0x2104, Lb::AL),
    (0x2109, Lb::PO), (0x210A, Lb::AL), (0x218C, Lb::XX), (0x2190, Lb::AL), (0x2212, Lb::PR), (0x2214, Lb::AL),
    (0x2308, Lb::OP), (0x2309, Lb::CL), (0x230A, Lb::OP), (0x230B, Lb::CL), (0x230C, Lb::AL), (0x2329, Lb::OP),
    (0x232A, Lb::CL), (0x232B, Lb::AL), (0x2427, Lb::XX), (0x2440, Lb::AL), (0x244B, Lb::XX), (0x2460, Lb::AL),
    (0x2768, Lb::OP), (0x2769, Lb::CL), (0x276A, Lb::OP), (0x276B, Lb::CL), (0x276C, Lb::OP), (0x276D, Lb::CL),
    (0x276E, Lb::OP), (0x276F, Lb::CL), (0x2770, Lb::OP), (0x2771, Lb::CL), (0x2772, Lb::OP), (0x2773, Lb::CL),
    (0x2774, Lb::OP), (0x2775, Lb::CL), (0x2776, Lb::AL), (0x27C5, Lb::OP), (0x27C6, Lb::CL), (0x27C7, Lb::AL),
    (0x27E6, Lb::OP), (0x27E7, Lb::CL), (0x27E8, Lb::OP), (0x27E9, Lb::CL), (0x27EA, Lb::OP), (0x27EB, Lb::CL),
    (0x27EC, Lb::OP), (0x27ED, Lb::CL), (0x27EE, Lb::OP), (0x27EF, Lb::CL), (0x27F0, Lb::AL), (0x2983, Lb::OP),
    (0x2984, Lb::CL), (0x2985, Lb::OP), (0x2986, Lb::CL), (0x2987, Lb::OP), (0x2988, Lb::CL), (0x2989, Lb::OP),
    (0x298A, Lb::CL), (0x298B, Lb::OP), (0x298C, Lb::CL), (0x298D, Lb::OP), (0x298E, Lb::CL), (0x298F, Lb::OP),
    (0x2990, Lb::CL), (0x2991, Lb::OP), (0x2992, Lb::CL), (0x2993, Lb::OP), (0x2994, Lb::CL), (0x2995, Lb::OP),
    (0x2996, Lb::CL), (0x2997, Lb::OP), (0x2998, Lb::CL), (0x2999, Lb::AL), (0x29D8, Lb::OP), (0x29D9, Lb::CL),
    (0x29DA, Lb::OP), (0x29DB, Lb::CL), (0x29DC, Lb::AL), (0x29FC, Lb::OP), (0x29FD, Lb::CL), (0x29FE, Lb::AL),
    (0x2B74, Lb::XX), (0x2B76, Lb::AL), (0x2B96, Lb::XX), (0x2B97, Lb::AL), (0x2CEF, Lb::CM), (0x2CF2, Lb::AL),
    (0x2CF4, Lb::XX), (0x2CF9, Lb::AL), (0x2D26, Lb::XX), (0x2D27, Lb::AL), (0x2D28, Lb::XX), (0x2D2D, Lb::AL),
    (0x2D2E, Lb::XX), (0x2D30, Lb::AL), (0x2D68, Lb::XX), (0x2D6F, Lb::AL), (0x2D71, Lb::XX), (0x2D7F, Lb::CM),
    (0x2D80, Lb::AL), (0x2D97, Lb::XX), (0x2DA0, Lb::AL), (0x2DA7, Lb::XX), (0x2DA8, Lb::AL), (0x2DAF, Lb::XX),
    (0x2DB0, Lb::AL), (0x2DB7, Lb::XX), (0x2DB8, Lb::AL), (0x2DBF, Lb::XX), (0x2DC0, Lb::AL), (0x2DC7, Lb::XX),
    (0x2DC8, Lb::AL), (0x2DCF, Lb::XX), (0x2DD0, Lb::AL), (0x2DD7, Lb::XX), (0x2DD8, Lb::AL), (0x2DDF, Lb::XX),
    (0x2DE0, Lb::CM), (0x2E00, Lb::AL), (0x2E02, Lb::QU), (0x2E06, Lb::AL), (0x2E09, Lb::QU), (0x2E0B, Lb::AL),
    (0x2E0C, Lb::QU), (0x2E0E, Lb::AL), (0x2E1C, Lb::QU), (0x2E1E, Lb::AL), (0x2E20, Lb::QU), (0x2E22, Lb::OP),
    (0x2E23, Lb::CL), (0x2E24, Lb::OP), (0x2E25, Lb::CL), (0x2E26, Lb::OP), (0x2E27, Lb::CL), (0x2E28, Lb::OP),
    (0x2E29, Lb::CL), (0x2E2A, Lb::AL), (0x2E42, Lb::OP), (0x2E43, Lb::AL), (0x2E55, Lb::OP), (0x2E56, Lb::CL),
    (0x2E57, Lb::OP), (0x2E58, Lb::CL), (0x2E59, Lb::OP), (0x2E5A, Lb::CL), (0x2E5B, Lb::OP), (0x2E5C, Lb::CL),
    (0x2E5D, Lb::AL), (0x2E5E, Lb::XX), (0x2E80, Lb::ID), (0x2FE0, Lb::XX), (0x2FF0, Lb::AL), (0x2FFC, Lb::XX),
    (0x3000, Lb::BA), (0x3001, Lb::CL), (0x3003, Lb::AL), (0x3005, Lb::ID), (0x3006, Lb::AL), (0x3007, Lb::ID),
    (0x3008, Lb::OP), (0x3009, Lb::CL), (0x300A, Lb::OP), (0x300B, Lb::CL), (0x300C, Lb::OP), (0x300D, Lb::CL),
    (0x300E, Lb::OP), (0x300F, Lb::CL), (0x3010, Lb::OP), (0x3011, Lb::CL), (0x3012, Lb::AL), (0x3014, Lb::OP),
    (0x3015, Lb::CL), (0x3016, Lb::OP), (0x3017, Lb::CL), (0x3018, Lb::OP), (0x3019, Lb::CL), (0x301A, Lb::OP),
    (0x301B, Lb::CL), (0x301C, Lb::AL), (0x301D, Lb::OP), (0x301E, Lb::CL), (0x3020, Lb::AL), (0x3021, Lb::ID),
    (0x302A, Lb::CM), (0x3030, Lb::AL), (0x3038, Lb::ID), (0x303B, Lb::AL), (0x3040, Lb::ID), (0x3099, Lb::CM),
    (0x309B, Lb::ID), (0x30FC, Lb::CJ), (0x30FD, Lb::ID), (0x3100, Lb::XX), (0x3105, Lb::AL), (0x3130, Lb::ID),
    (0x3190, Lb::AL), (0x31A0, Lb::ID), (0x31F0, Lb::CJ), (0x3200, Lb::ID), (0x4DC0, Lb::AL), (0x4E00, Lb::ID),
    (0xA4D0, Lb::AL), (0xA620, Lb::NU), (0xA62A, Lb::AL), (0xA62C, Lb::XX), (0xA640, Lb::AL), (0xA66F, Lb::CM),
    (0xA673, Lb::AL), (0xA674, Lb::CM), (0xA67E, Lb::AL), (0xA69E, Lb::CM), (0xA6A0, Lb::AL), (0xA6F0, Lb::CM),
    (0xA6F2, Lb::AL), (0xA6F8, Lb::XX), (0xA700, Lb::AL), (0xA7CB, Lb::XX), (0xA7D0, Lb::AL), (0xA7D2, Lb::XX),
    (0xA7D3, Lb::AL), (0xA7D4, Lb::XX), (0xA7D5, Lb::AL), (0xA7DA, Lb::XX), (0xA7F2, Lb::AL), (0xA802, Lb::CM),
    (0xA803, Lb::AL), (0xA806, Lb::CM), (0xA807, Lb::AL), (0xA80B, Lb::CM), (0xA80C, Lb::AL), (0xA823, Lb::CM),
    (0xA828, Lb::AL), (0xA82C, Lb::CM), (0xA82D, Lb::XX), (0xA830, Lb::AL), (0xA838, Lb::PR), (0xA839, Lb::AL),
    (0xA83A, Lb::XX), (0xA840, Lb::AL), (0xA878, Lb::XX), (0xA880, Lb::CM), (0xA882, Lb::AL), (0xA8B4, Lb::CM),
    (0xA8C6, Lb::XX), (0xA8CE, Lb::AL), (0xA8D0, Lb::NU), (0xA8DA, Lb::XX), (0xA8E0, Lb::CM), (0xA8F2, Lb::AL),
    (0xA8FF, Lb::CM), (0xA900, Lb::NU), (0xA90A, Lb::AL), (0xA926, Lb::CM), (0xA92E, Lb::AL), (0xA947, Lb::CM),
    (0xA954, Lb::XX), (0xA95F, Lb::AL), (0xA960, Lb::JL), (0xA97D, Lb::XX), (0xA980, Lb::CM), (0xA984, Lb::AL),
    (0xA9B3, Lb::CM), (0xA9C1, Lb::AL), (0xA9CE, Lb::XX), (0xA9CF, Lb::AL), (0xA9D0, Lb::NU), (0xA9DA, Lb::XX),
    (0xA9DE, Lb::AL), (0xA9E0, Lb::SA), (0xA9E5, Lb::CM), (0xA9E6, Lb::SA), (0xA9F0, Lb::NU), (0xA9FA, Lb::SA),
    (0xAA00, Lb::AL), (0xAA29, Lb::CM), (0xAA37, Lb::XX), (0xAA40, Lb::AL), (0xAA43, Lb::CM), (0xAA44, Lb::AL),
    (0xAA4C, Lb::CM), (0xAA4E, Lb::XX), (0xAA50, Lb::NU), (0xAA5A, Lb::XX), (0xAA5C, Lb::AL), (0xAA60, Lb::SA),
    (0xAA7B, Lb::CM), (0xAA7E, Lb::SA), (0xAAB0, Lb::CM), (0xAAB1, Lb::SA), (0xAAB2, Lb::CM), (0xAAB5, Lb::SA),
    (0xAAB7, Lb::CM), (0xAAB9, Lb::SA), (0xAABE, Lb::CM), (0xAAC0, Lb::SA), (0xAAC1, Lb::CM), (0xAAC2, Lb::SA),
    (0xAAE0, Lb::AL), (0xAAEB, Lb::CM), (0xAAF0, Lb::AL), (0xAAF5, Lb::CM), (0xAAF7, Lb::XX), (0xAB01, Lb::AL),
    (0xAB07, Lb::XX), (0xAB09, Lb::AL), (0xAB0F, Lb::XX), (0xAB11, Lb::AL), (0xAB17, Lb::XX), (0xAB20, Lb::AL),
    (0xAB27, Lb::XX), (0xAB28, Lb::AL), (0xAB2F, Lb::XX), (0xAB30, Lb::AL), (0xAB6C, Lb::XX), (0xAB70, Lb::AL),
    (0xABE3, Lb::CM), (0xABEB, Lb::AL), (0xABEC, Lb::CM), (0xABEE, Lb::XX), (0xABF0, Lb::NU), (0xABFA, Lb::XX),
    (0xAC00, Lb::H2), (0xAC01, Lb::H3), (0xAC1C, Lb::H2), (0xAC1D, Lb::H3), (0xAC38, Lb::H2), (0xAC39, Lb::H3),
    (0xAC54, Lb::H2), (0xAC55, Lb::H3), (0xAC70, Lb::H2), (0xAC71, Lb::H3), (0xAC8C, Lb::H2), (0xAC8D, Lb::H3),
    (0xACA8, Lb::H2), (0xACA9, Lb::H3), (0xACC4, Lb::H2), (0xACC5, Lb::H3), (0xACE0, Lb::H2), (0xACE1, Lb::H3),
    (0xACFC, Lb::H2), (0xACFD, Lb::H3), (0xAD18, Lb::H2), (0xAD19, Lb::H3), (0xAD34, Lb::H2), (0xAD35, Lb::H3),
    (0xAD50, Lb::H2), (0xAD51, Lb::H3), (0xAD6C, Lb::H2), (0xAD6D, Lb::H3), (0xAD88, Lb::H2), (0xAD89, Lb::H3),
    (0xADA4, Lb::H2), (0xADA5, Lb::H3), (0xADC0, Lb::H2), (0xADC1, Lb::H3), (0xADDC, Lb::H2), (0xADDD, Lb::H3),
    (0xADF8, Lb::H2), (0xADF9, Lb::H3), (0xAE14, Lb::H2), (0xAE15, Lb::H3), (0xAE30, Lb::H2), (0xAE31, Lb::H3),
    (0xAE4C, Lb::H2), (0xAE4D, Lb::H3), (0xAE68, Lb::H2), (0xAE69, Lb::H3), (0xAE84, Lb::H2), (0xAE85, Lb::H3),
    (0xAEA0, Lb::H2), (0xAEA1, Lb::H3), (0xAEBC, Lb::H2), (0xAEBD, Lb::H3), (0xAED8, Lb::H2), (0xAED9, Lb::H3),
    (0xAEF4, Lb::H2), (0xAEF5, Lb::H3), (0xAF10, Lb::H2), (0xAF11, Lb::H3), (0xAF2C, Lb::H2), (0xAF2D, Lb::H3),
    (0xAF48, Lb::H2), (0xAF49, Lb::H3), (0xAF64, Lb::H2), (0xAF65, Lb::H3), (0xAF80, Lb::H2), (0xAF81, Lb::H3),
    (0xAF9C, Lb::H2), (0xAF9D, Lb::H3), (0xAFB8, Lb::H2), (0xAFB9, Lb::H3), (0xAFD4, Lb::H2), (0xAFD5, Lb::H3),
    (0xAFF0, Lb::H2), (0xAFF1, Lb::H3), (0xB00C, Lb::H2), (0xB00D, Lb::H3), (0xB028, Lb::H2), (0xB029, Lb::H3),
    (0xB044, Lb::H2), (0xB045, Lb::H3), (0xB060, Lb::H2), (0xB061, Lb::H3), (0xB07C, Lb::H2), (0xB07D, Lb::H3),
    (0xB098, Lb::H2), (0xB099, Lb::H3), (0xB0B4, Lb::H2), (0xB0B5, Lb::H3), (0xB0D0, Lb::H2), (0xB0D1, Lb::H3),
    (0xB0EC, Lb::H2), (0xB0ED, Lb::H3), (0xB108, Lb::H2), (0xB109, Lb::H3), (0xB124, Lb::H2), (0xB125, Lb::H3),
    (0xB140, Lb::H2), (0xB141, Lb::H3), (0xB15C, Lb::H2), (0xB15D, Lb::H3), (0xB178, Lb::H2), (0xB179, Lb::H3),
    (0xB194, Lb::H2), (0xB195, Lb::H3), (0xB1B0, Lb::H2), (0xB1B1, Lb::H3), (0xB1CC, Lb::H2), (0xB1CD, Lb::H3),
    (0xB1E8, Lb::H2), (0xB1E9, Lb::H3), (0xB204, Lb::H2), (0xB205, Lb::H3), (0xB220, Lb::H2), (0xB221, Lb::H3),
    (0xB23C, Lb::H2), (0xB23D, Lb::H3), (0xB258, Lb::H2), (0xB259, Lb::H3), (0xB274, Lb::H2), (0xB275, Lb::H3),
    (0xB290, Lb::H2), (0xB291, Lb::H3), (0xB2AC, Lb::H2), (0xB2AD, Lb::H3), (0xB2C8, Lb::H2), (0xB2C9, Lb::H3),
    (0xB2E4, Lb::H2), (0xB2E5, Lb::H3), (0xB300, Lb::H2), (0xB301, Lb::H3), (0xB31C, Lb::H2), (0xB31D, Lb::H3),
    (0xB338, Lb::H2), (0xB339, Lb::H3), (0xB354, Lb::H2), (0xB355, Lb::H3), (0xB370, Lb::H2), (0xB371, Lb::H3),
    (0xB38C, Lb::H2), (0xB38D, Lb::H3), (0xB3A8, Lb::H2), (0xB3A9, Lb::H3), (0xB3C4, Lb::H2), (0xB3C5, Lb::H3),
    (0xB3E0, Lb::H2), (0xB3E1, Lb::H3), (0xB3FC, Lb::H2), (0xB3FD, Lb::H3), (0xB418, Lb::H2), (0xB419, Lb::H3),
    (0xB434, Lb::H2), (0xB435, Lb::H3), (0xB450, Lb::H2), (0xB451, Lb::H3), (0xB46C, Lb::H2), (0xB46D, Lb::H3),
    (0xB488, Lb::H2), (0xB489, Lb::H3), (0xB4A4, Lb::H2), (0xB4A5, Lb::H3), (0xB4C0, Lb::H2), (0xB4C1, Lb::H3),
    (0xB4DC, Lb::H2), (0xB4DD, Lb::H3), (0xB4F8, Lb::H2), (0xB4F9, Lb::H3), (0xB514, Lb::H2), (0xB515, Lb::H3),
    (0xB530, Lb::H2), (0xB531, Lb::H3), (0xB54C, Lb::H2), (0xB54D, Lb::H3), (0xB568, Lb::H2), (0xB569, Lb::H3),
    (0xB584, Lb::H2), (0xB585, Lb::H3), (0xB5A0, Lb::H2), (0xB5A1, Lb::H3), (0xB5BC, Lb::H2), (0xB5BD, Lb::H3),
    (0xB5D8, Lb::H2), (0xB5D9, Lb::H3), (0xB5F4, Lb::H2), (0xB5F5, Lb::H3), (0xB610, Lb::H2), (0xB611, Lb::H3),
    (0xB62C, Lb::H2), (0xB62D, Lb::H3), (0xB648, Lb::H2), (0xB649, Lb::H3), (0xB664, Lb::H2), (0xB665, Lb::H3),
    (0xB680, Lb::H2), (0xB681, Lb::H3), (0xB69C, Lb::H2), (0xB69D, Lb::H3), (0xB6B8, Lb::H2), (0xB6B9, Lb::H3),
    (0xB6D4, Lb::H2), (0xB6D5, Lb::H3), (0xB6F0, Lb::H2), (0xB6F1, Lb::H3), (0xB70C, Lb::H2), (0xB70D, Lb::H3),
    (0xB728, Lb::H2), (0xB729, Lb::H3), (0xB744, Lb::H2), (0xB745, Lb::H3), (0xB760, Lb::H2), (0xB761, Lb::H3),
    (0xB77C, Lb::H2), (0xB77D, Lb::H3), (0xB798, Lb::H2), (0xB799, Lb::H3), (0xB7B4, Lb::H2), (0xB7B5, Lb::H3),
    (0xB7D0, Lb::H2), (0xB7D1, Lb::H3), (0xB7EC, Lb::H2), (0xB7ED, Lb::H3), (0xB808, Lb::H2), (0xB809, Lb::H3),
    (0xB824, Lb::H2), (0xB825, Lb::H3), (0xB840, Lb::H2), (0xB841, Lb::H3), (0xB85C, Lb::H2), (0xB85D, Lb::H3),
    (0xB878, Lb::H2), (0xB879, Lb::H3), (0xB894, Lb::H2), (0xB895, Lb::H3), (0xB8B0, Lb::H2), (0xB8B1, Lb::H3),
    (0xB8CC, Lb::H2), (0xB8CD, Lb::H3), (0xB8E8, Lb::H2), (0xB8E9, Lb::H3), (0xB904, Lb::H2), (0xB905, Lb::H3),
    (0xB920, Lb::H2), (0xB921, Lb::H3), (0xB93C, Lb::H2), (0xB93D, Lb::H3), (0xB958, Lb::H2), (0xB959, Lb::H3),
    (0xB974, Lb::H2), (0xB975, Lb::H3), (0xB990, Lb::H2), (0xB991, Lb::H3), (0xB9AC, Lb::H2), (0xB9AD, Lb::H3),
    (0xB9C8, Lb::H2), (0xB9C9, Lb::H3), (0xB9E4, Lb::H2), (0xB9E5, Lb::H3), (0xBA00, Lb::H2), (0xBA01, Lb::H3),
    (0xBA1C, Lb::H2), (0xBA1D, Lb::H3), (0xBA38, Lb::H2), (0xBA39, Lb::H3), (0xBA54, Lb::H2), (0xBA55, Lb::H3),
    (0xBA70, Lb::H2), (0xBA71, Lb::H3), (0xBA8C, Lb::H2), (0xBA8D, Lb::H3), (0xBAA8, Lb::H2), (0xBAA9, Lb::H3),
    (0xBAC4, Lb::H2), (0xBAC5, Lb::H3), (0xBAE0, Lb::H2), (0xBAE1, Lb::H3), (0xBAFC, Lb::H2), (0xBAFD, Lb::H3),
    (0xBB18, Lb::H2), (0xBB19, Lb::H3), (0xBB34, Lb::H2), (0xBB35, Lb::H3), (0xBB50, Lb::H2), (0xBB51, Lb::H3),
    (0xBB6C, Lb::H2), (0xBB6D, Lb::H3), (0xBB88, Lb::H2), (0xBB89, Lb::H3), (0xBBA4, Lb::H2), (0xBBA5, Lb::H3),
    (0xBBC0, Lb::H2), (0xBBC1, Lb::H3), (0xBBDC, Lb::H2), (0xBBDD, Lb::H3), (0xBBF8, Lb::H2), (0xBBF9, Lb::H3),
    (0xBC14, Lb::H2), (0xBC15, Lb::H3), (0xBC30, Lb::H2), (0xBC31, Lb::H3), (0xBC4C, Lb::H2), (0xBC4D, Lb::H3),
    (0xBC68, Lb::H2), (0xBC69, Lb::H3), (0xBC84, Lb::H2), (0xBC85, Lb::H3), (0xBCA0, Lb::H2), (0xBCA1, Lb::H3),
    (0xBCBC, Lb::H2), (0xBCBD, Lb::H3), (0xBCD8, Lb::H2), (0xBCD9, Lb::H3), (0xBCF4, Lb::H2), (0xBCF5, Lb::H3),
    (0xBD10, Lb::H2), (0xBD11, Lb::H3), (0xBD2C, Lb::H2), (0xBD2D, Lb::H3), (0xBD48, Lb::H2), (0xBD49, Lb::H3),
    (0xBD64, Lb::H2), (0xBD65, Lb::H3), (0xBD80, Lb::H2), (0xBD81, Lb::H3), (0xBD9C, Lb::H2), (0xBD9D, Lb::H3),
    (0xBDB8, Lb::H2), (0xBDB9, Lb::H3), (0xBDD4, Lb::H2), (0xBDD5, Lb::H3), (0xBDF0, Lb::H2), (0xBDF1, Lb::H3),
    (0xBE0C, Lb::H2), (0xBE0D, Lb::H3), (0xBE28, Lb::H2), (0xBE29, Lb::H3), (0xBE44, Lb::H2), (0xBE45, Lb::H3),
    (0xBE60, Lb::H2), (0xBE61, Lb::H3), (0xBE7C, Lb::H2), (0xBE7D, Lb::H3), (0xBE98, Lb::H2), (0xBE99, Lb::H3),
    (0xBEB4, Lb::H2), (0xBEB5, Lb::H3), (0xBED0, Lb::H2), (0xBED1, Lb::H3), (0xBEEC, Lb::H2), (0xBEED, Lb::H3),
    (0xBF08, Lb::H2), (0xBF09, Lb::H3), (0xBF24, Lb::H2), (0xBF25, Lb::H3), (0xBF40, Lb::H2), (0xBF41, Lb::H3),
    (0xBF5C, Lb::H2), (0xBF5D, Lb::H3), (0xBF78, Lb::H2), (0xBF79, Lb::H3), (0xBF94, Lb::H2), (0xBF95, Lb::H3),
    (0xBFB0, Lb::H2), (0xBFB1, Lb::H3), (0xBFCC, Lb::H2), (0xBFCD, Lb::H3), (0xBFE8, Lb::H2), (0xBFE9, Lb::H3),
    (0xC004, Lb::H2), (0xC005, Lb::H3), (0xC020, Lb::H2), (0xC021, Lb::H3), (0xC03C, Lb::H2), (0xC03D, Lb::H3),
    (0xC058, Lb::H2), (0xC059, Lb::H3), (0xC074, Lb::H2), (0xC075, Lb::H3), (0xC090, Lb::H2), (0xC091, Lb::H3),
    (0xC0AC, Lb::H2), (0xC0AD, Lb::H3), (0xC0C8, Lb::H2), (0xC0C9, Lb::H3), (0xC0E4, Lb::H2), (0xC0E5, Lb::H3),
    (0xC100, Lb::H2), (0xC101, Lb::H3), (0xC11C, Lb::H2), (0xC11D, Lb::H3), (0xC138, Lb::H2), (0xC139, Lb::H3),
    (0xC154, Lb::H2), (0xC155, Lb::H3), (0xC170, Lb::H2), (0xC171, Lb::H3), (0xC18C, Lb::H2), (0xC18D, Lb::H3),
    (0xC1A8, Lb::H2), (0xC1A9, Lb::H3), (0xC1C4, Lb::H2), (0xC1C5, Lb::H3), (0xC1E0, Lb::H2), (0xC1E1, Lb::H3),
    (0xC1FC, Lb::H2), (0xC1FD, Lb::H3), (0xC218, Lb::H2), (0xC219, Lb::H3), (0xC234, Lb::H2), (0xC235, Lb::H3),
    (0xC250, Lb::H2), (0xC251, Lb::H3), (0xC26C, Lb::H2), (0xC26D, Lb::H3), (0xC288, Lb::H2), (0xC289, Lb::H3),
    (0xC2A4, Lb::H2), (0xC2A5, Lb::H3), (0xC2C0, Lb::H2), (0xC2C1, Lb::H3), (0xC2DC, Lb::H2), (0xC2DD, Lb::H3),
    (0xC2F8, Lb::H2), (0xC2F9, Lb::H3), (0xC314, Lb::H2), (0xC315, Lb::H3), (0xC330, Lb::H2), (0xC331, Lb::H3),
    (0xC34C, Lb::H2), (0xC34D, Lb::H3), (0xC368, Lb::H2), (0xC369, Lb::H3), (0xC384, Lb::H2), (0xC385, Lb::H3),
    (0xC3A0, Lb::H2), (0xC3A1, Lb::H3), (0xC3BC, Lb::H2), (0xC3BD, Lb::H3), (0xC3D8, Lb::H2), (0xC3D9, Lb::H3),
    (0xC3F4, Lb::H2), (0xC3F5, Lb::H3), (0xC410, Lb::H2), (0xC411, Lb::H3), (0xC42C, Lb::H2), (0xC42D, Lb::H3),
    (0xC448, Lb::H2), (0xC449, Lb::H3), (0xC464, Lb::H2), (0xC465, Lb::H3), (0xC480, Lb::H2), (0xC481, Lb::H3),
    (0xC49C, Lb::H2), (0xC49D, Lb::H3), (0xC4B8, Lb::H2), (0xC4B9, Lb::H3), (0xC4D4, Lb::H2), (0xC4D5, Lb::H3),
    (0xC4F0, Lb::H2), (0xC4F1, Lb::H3), (0xC50C, Lb::H2), (0xC50D, Lb::H3), (0xC528, Lb::H2), (0xC529, Lb::H3),
    (0xC544, Lb::H2), (0xC545, Lb::H3), (0xC560, Lb::H2), (0xC561, Lb::H3), (0xC57C, Lb::H2), (0xC57D, Lb::H3),
    (0xC598, Lb::H2), (0xC599, Lb::H3), (0xC5B4, Lb::H2), (0xC5B5, Lb::H3), (0xC5D0, Lb::H2), (0xC5D1, Lb::H3),
    (0xC5EC, Lb::H2), (0xC5ED, Lb::H3), (0xC608, Lb::H2), (0xC609, Lb::H3), (0xC624, Lb::H2), (0xC625, Lb::H3),
    (0xC640, Lb::H2), (0xC641, Lb::H3), (0xC65C, Lb::H2), (0xC65D, Lb::H3), (0xC678, Lb::H2), (0xC679, Lb::H3),
    (0xC694, Lb::H2), (0xC695, Lb::H3), (0xC6B0, Lb::H2), (0xC6B1, Lb::H3), (0xC6CC, Lb::H2), (0xC6CD, Lb::H3),
    (0xC6E8, Lb::H2), (0xC6E9, Lb::H3), (0xC704, Lb::H2), (0xC705, Lb::H3), (0xC720, Lb::H2), (0xC721, Lb::H3),
    (0xC73C, Lb::H2), (0xC73D, Lb::H3), (0xC758, Lb::H2), (0xC759, Lb::H3), (0xC774, Lb::H2), (0xC775, Lb::H3),
    (0xC790, Lb::H2), (0xC791, Lb::H3), (0xC7AC, Lb::H2), (0xC7AD, Lb::H3), (0xC7C8, Lb::H2), (0xC7C9, Lb::H3),
    (0xC7E4, Lb::H2), (0xC7E5, Lb::H3), (0xC800, Lb::H2), (0xC801, Lb::H3), (0xC81C, Lb::H2), (0xC81D, Lb::H3),
    (0xC838, Lb::H2), (0xC839, Lb::H3), (0xC854, Lb::H2), (0xC855, Lb::H3), (0xC870, Lb::H2), (0xC871, Lb::H3),
    (0xC88C, Lb::H2), (0xC88D, Lb::H3), (0xC8A8, Lb::H2), (0xC8A9, Lb::H3), (0xC8C4, Lb::H2), (0xC8C5, Lb::H3),
    (0xC8E0, Lb::H2), (0xC8E1, Lb::H3), (0xC8FC, Lb::H2), (0xC8FD, Lb::H3), (0xC918, Lb::H2), (0xC919, Lb::H3),
    (0xC934, Lb::H2), (0xC935, Lb::H3), (0xC950, Lb::H2), (0xC951, Lb::H3), (0xC96C, Lb::H2), (0xC96D, Lb::H3),
    (0xC988, Lb::H2), (0xC989, Lb::H3), (0xC9A4, Lb::H2), (0xC9A5, Lb::H3), (0xC9C0, Lb::H2), (0xC9C1, Lb::H3),
    (0xC9DC, Lb::H2), (0xC9DD, Lb::H3), (0xC9F8, Lb::H2), (0xC9F9, Lb::H3), (0xCA14, Lb::H2), (0xCA15, Lb::H3),
    (0xCA30, Lb::H2), (0xCA31, Lb::H3), (0xCA4C, Lb::H2), (0xCA4D, Lb::H3), (0xCA68, Lb::H2), (0xCA69, Lb::H3),
    (0xCA84, Lb::H2), (0xCA85, Lb::H3), (0xCAA0, Lb::H2), (0xCAA1, Lb::H3), (0xCABC, Lb::H2), (0xCABD, Lb::H3),
    (0xCAD8, Lb::H2), (0xCAD9, Lb::H3), (0xCAF4, Lb::H2), (0xCAF5, Lb::H3), (0xCB10, Lb::H2), (0xCB11, Lb::H3),
    (0xCB2C, Lb::H2), (0xCB2D, Lb::H3), (0xCB48, Lb::H2), (0xCB49, Lb::H3), (0xCB64, Lb::H2), (0xCB65, Lb::H3),
    (0xCB80, Lb::H2), (0xCB81, Lb::H3), (0xCB9C, Lb::H2), (0xCB9D, Lb::H3), (0xCBB8, Lb::H2), (0xCBB9, Lb::H3),
    (0xCBD4, Lb::H2), (0xCBD5, Lb::H3), (0xCBF0, Lb::H2), (0xCBF1, Lb::H3), (0xCC0C, Lb::H2), (0xCC0D, Lb::H3),
    (0xCC28, Lb::H2), (0xCC29, Lb::H3), (0xCC44, Lb::H2), (0xCC45, Lb::H3), (0xCC60, Lb::H2), (0xCC61, Lb::H3),
    (0xCC7C, Lb::H2), (0xCC7D, Lb::H3), (0xCC98, Lb::H2), (0xCC99, Lb::H3), (0xCCB4, Lb::H2), (0xCCB5, Lb::H3),
    (0xCCD0, Lb::H2), (0xCCD1, Lb::H3), (0xCCEC, Lb::H2), (0xCCED, Lb::H3), (0xCD08, Lb::H2), (0xCD09, Lb::H3),
    (0xCD24, Lb::H2), (0xCD25, Lb::H3), (0xCD40, Lb::H2), (0xCD41, Lb::H3), (0xCD5C, Lb::H2), (0xCD5D, Lb::H3),
    (0xCD78, Lb::H2), (0xCD79, Lb::H3), (0xCD94, Lb::H2), (0xCD95, Lb::H3), (0xCDB0, Lb::H2), (0xCDB1, Lb::H3),
    (0xCDCC, Lb::H2), (0xCDCD, Lb::H3), (0xCDE8, Lb::H2), (0xCDE9, Lb::H3), (0xCE04, Lb::H2), (0xCE05, Lb::H3),
    (0xCE20, Lb::H2), (0xCE21, Lb::H3), (0xCE3C, Lb::H2), (0xCE3D, Lb::H3), (0xCE58, Lb::H2), (0xCE59, Lb::H3),
    (0xCE74, Lb::H2), (0xCE75, Lb::H3), (0xCE90, Lb::H2), (0xCE91, Lb::H3), (0xCEAC, Lb::H2), (0xCEAD, Lb::H3),
    (0xCEC8, Lb::H2), (0xCEC9, Lb::H3), (0xCEE4, Lb::H2), (0xCEE5, Lb::H3), (0xCF00, Lb::H2), (0xCF01, Lb::H3),
    (0xCF1C, Lb::H2), (0xCF1D, Lb::H3), (0xCF38, Lb::H2), (0xCF39, Lb::H3), (0xCF54, Lb::H2), (0xCF55, Lb::H3),
    (0xCF70, Lb::H2), (0xCF71, Lb::H3), (0xCF8C, Lb::H2), (0xCF8D, Lb::H3), (0xCFA8, Lb::H2), (0xCFA9, Lb::H3),
    (0xCFC4, Lb::H2), (0xCFC5, Lb::H3), (0xCFE0, Lb::H2), (0xCFE1, Lb::H3), (0xCFFC, Lb::H2), (0xCFFD, Lb::H3),
    (0xD018, Lb::H2), (0xD019, Lb::H3), (0xD034, Lb::H2), (0xD035, Lb::H3), (0xD050, Lb::H2), (0xD051, Lb::H3),
    (0xD06C, Lb::H2), (0xD06D, Lb::H3), (0xD088, Lb::H2), (0xD089, Lb::H3), (0xD0A4, Lb::H2), (0xD0A5, Lb::H3),
    (0xD0C0, Lb::H2), (0xD0C1, Lb::H3), (0xD0DC, Lb::H2), (0xD0DD, Lb::H3), (0xD0F8, Lb::H2), (0xD0F9, Lb::H3),
    (0xD114, Lb::H2), (0xD115, Lb::H3), (0xD130, Lb::H2), (0xD131, Lb::H3), (0xD14C, Lb::H2), (0xD14D, Lb::H3),
    (0xD168, Lb::H2), (0xD169, Lb::H3), (0xD184, Lb::H2), (0xD185, Lb::H3), (0xD1A0, Lb::H2), (0xD1A1, Lb::H3),
    (0xD1BC, Lb::H2), (0xD1BD, Lb::H3), (0xD1D8, Lb::H2), (0xD1D9, Lb::H3), (0xD1F4, Lb::H2), (0xD1F5, Lb::H3),
    (0xD210, Lb::H2), (0xD211, Lb::H3), (0xD22C, Lb::H2), (0xD22D, Lb::H3), (0xD248, Lb::H2), (0xD249, Lb::H3),
    (0xD264, Lb::H2), (0xD265, Lb::H3), (0xD280, Lb::H2), (0xD281, Lb::H3), (0xD29C, Lb::H2), (0xD29D, Lb::H3),
    (0xD2B8, Lb::H2), (0xD2B9, Lb::H3), (0xD2D4, Lb::H2), (0xD2D5, Lb::H3), (0xD2F0, Lb::H2), (0xD2F1, Lb::H3),
    (0xD30C, Lb::H2), (0xD30D, Lb::H3), (0xD328, Lb::H2), (0xD329, Lb::H3), (0xD344, Lb::H2), (0xD345, Lb::H3),
    (0xD360, Lb::H2), (0xD361, Lb::H3), (0xD37C, Lb::H2), (0xD37D, Lb::H3), (0xD398, Lb::H2), (0xD399, Lb::H3),
    (0xD3B4, Lb::H2), (0xD3B5, Lb::H3), (0xD3D0, Lb::H2), (0xD3D1, Lb::H3), (0xD3EC, Lb::H2), (0xD3ED, Lb::H3),
    (0xD408, Lb::H2), (0xD409, Lb::H3), (0xD424, Lb::H2), (0xD425, Lb::H3), (0xD440, Lb::H2), (0xD441, Lb::H3),
    (0xD45C, Lb::H2), (0xD45D, Lb::H3), (0xD478, Lb::H2), (0xD479, Lb::H3), (0xD494, Lb::H2), (0xD495, Lb::H3),
    (0xD4B0, Lb::H2), (0xD4B1, Lb::H3), (0xD4CC, Lb::H2), (0xD4CD, Lb::H3), (0xD4E8, Lb::H2), (0xD4E9, Lb::H3),
    (0xD504, Lb::H2), (0xD505, Lb::H3), (0xD520, Lb::H2), (0xD521, Lb::H3), (0xD53C, Lb::H2), (0xD53D, Lb::H3),
    (0xD558, Lb::H2), (0xD559, Lb::H3), (0xD574, Lb::H2), (0xD575, Lb::H3), (0xD590, Lb::H2), (0xD591, Lb::H3),
    (0xD5AC, Lb::H2), (0xD5AD, Lb::H3), (0xD5C8, Lb::H2), (0xD5C9, Lb::H3), (0xD5E4, Lb::H2), (0xD5E5, Lb::H3),
    (0xD600, Lb::H2), (0xD601, Lb::H3), (0xD61C, Lb::H2), (0xD61D, Lb::H3), (0xD638, Lb::H2), (0xD639, Lb::H3),
    (0xD654, Lb::H2), (0xD655, Lb::H3), (0xD670, Lb::H2), (0xD671, Lb::H3), (0xD68C, Lb::H2), (0xD68D, Lb::H3),
    (0xD6A8, Lb::H2), (0xD6A9, Lb::H3), (0xD6C4, Lb::H2), (0xD6C5, Lb::H3), (0xD6E0, Lb::H2), (0xD6E1, Lb::H3),
    (0xD6FC, Lb::H2), (0xD6FD, Lb::H3), (0xD718, Lb::H2), (0xD719, Lb::H3), (0xD734, Lb::H2), (0xD735, Lb::H3),
    (0xD750, Lb::H2), (0xD751, Lb::H3), (0xD76C, Lb::H2), (0xD76D, Lb::H3), (0xD788, Lb::H2), (0xD789, Lb::H3),
    (0xD7A4, Lb::XX), (0xD7B0, Lb::JV), (0xD7C7, Lb::XX), (0xD7CB, Lb::JT), (0xD7FC, Lb::XX), (0xD800, Lb::SG),
    (0xE000, Lb::XX), (0xF900, Lb::ID), (0xFB00, Lb::AL), (0xFB07, Lb::XX), (0xFB13, Lb::AL), (0xFB18, Lb::XX),
    (0xFB1D, Lb::HL), (0xFB1E, Lb::CM), (0xFB1F, Lb::HL), (0xFB29, Lb::AL), (0xFB2A, Lb::HL), (0xFB37, Lb::XX),
    (0xFB38, Lb::HL), (0xFB3D, Lb::XX), (0xFB3E, Lb::HL), (0xFB3F, Lb::XX), (0xFB40, Lb::HL), (0xFB42, Lb::XX),
    (0xFB43, Lb::HL), (0xFB45, Lb::XX), (0xFB46, Lb::HL), (0xFB50, Lb::AL), (0xFBC3, Lb::XX), (0xFBD3, Lb::AL),
    (0xFD3E, Lb::CL), (0xFD3F, Lb::OP), (0xFD40, Lb::AL), (0xFD90, Lb::XX), (0xFD92, Lb::AL), (0xFDC8, Lb::XX),
    (0xFDCF, Lb::AL), (0xFDD0, Lb::XX), (0xFDF0, Lb::AL), (0xFDFC, Lb::PR), (0xFDFD, Lb::AL), (0xFE00, Lb::CM),
    (0xFE10, Lb::IS), (0xFE11, Lb::AL), (0xFE13, Lb::IS), (0xFE15, Lb::AL), (0xFE17, Lb::OP), (0xFE18, Lb::CL),
    (0xFE19, Lb::AL), (0xFE1A, Lb::XX), (0xFE20, Lb::CM), (0xFE30, Lb::ID), (0xFE35, Lb::OP), (0xFE36, Lb::CL),
    (0xFE37, Lb::OP), (0xFE38, Lb::CL), (0xFE39, Lb::OP), (0xFE3A, Lb::CL), (0xFE3B, Lb::OP), (0xFE3C, Lb::CL),
    (0xFE3D, Lb::OP), (0xFE3E, Lb::CL), (0xFE3F, Lb::OP), (0xFE40, Lb::CL), (0xFE41, Lb::OP), (0xFE42, Lb::CL),
    (0xFE43, Lb::OP), (0xFE44, Lb::CL), (0xFE45, Lb::ID), (0xFE47, Lb::OP), (0xFE48, Lb::CL), (0xFE49, Lb::ID),
    (0xFE50, Lb::CL), (0xFE51, Lb::AL), (0xFE52, Lb::CL), (0xFE53, Lb::XX), (0xFE54, Lb::AL), (0xFE59, Lb::OP),
    (0xFE5A, Lb::CL), (0xFE5B, Lb::OP), (0xFE5C, Lb::CL), (0xFE5D, Lb::OP), (0xFE5E, Lb::CL), (0xFE5F, Lb::AL),
    (0xFE67, Lb::XX), (0xFE68, Lb::AL), (0xFE69, Lb::PR), (0xFE6A, Lb::AL), (0xFE6C, Lb::XX), (0xFE70, Lb::AL),
    (0xFE75, Lb::XX), (0xFE76, Lb::AL), (0xFEFD, Lb::XX), (0xFEFF, Lb::WJ), (0xFF00, Lb::XX), (0xFF01, Lb::EX),
    (0xFF02, Lb::AL), (0xFF04, Lb::PR), (0xFF05, Lb::PO), (0xFF06, Lb::AL), (0xFF08, Lb::OP), (0xFF09, Lb::CL),
    (0xFF0A, Lb::AL), (0xFF0C, Lb::CL), (0xFF0D, Lb::AL), (0xFF0E, Lb::CL), (0xFF0F, Lb::AL), (0xFF10, Lb::NU),
    (0xFF1A, Lb::AL), (0xFF1F, Lb::EX), (0xFF20, Lb::AL), (0xFF3B, Lb::OP), (0xFF3C, Lb::AL), (0xFF3D, Lb::CL),
    (0xFF3E, Lb::AL), (0xFF5B, Lb::OP), (0xFF5C, Lb::AL), (0xFF5D, Lb::CL), (0xFF5E, Lb::AL), (0xFF5F, Lb::OP),
    (0xFF60, Lb::CL), (0xFF62, Lb::OP), (0xFF63, Lb::CL), (0xFF65, Lb::AL), (0xFFBF, Lb::XX), (0xFFC2, Lb::AL),
    (0xFFC8, Lb::XX), (0xFFCA, Lb::AL), (0xFFD0, Lb::XX), (0xFFD2, Lb::AL), (0xFFD8, Lb::XX), (0xFFDA, Lb::AL),
    (0xFFDD, Lb::XX), (0xFFE0, Lb::PR), (0xFFE2, Lb::AL), (0xFFE5, Lb::PR), (0xFFE7, Lb::XX), (0xFFE8, Lb::AL),
    (0xFFEF, Lb::XX), (0xFFF9, Lb::CM), (0xFFFC, Lb::AL), (0xFFFE, Lb::XX), (0x10000, Lb::AL), (0x1000C, Lb::XX),
    (0x1000D, Lb::AL), (0x10027, Lb::XX), (0x10028, Lb::AL), (0x1003B, Lb::XX), (0x1003C, Lb::AL), (0x1003E, Lb::XX),
    (0x1003F, Lb::AL), (0x1004E, Lb::XX), (0x10050, Lb::AL), (0x1005E, Lb::XX), (0x10080, Lb::AL), (0x100FB, Lb::XX),
    (0x10100, Lb::AL), (0x10103, Lb::XX), (0x10107, Lb::AL), (0x10134, Lb::XX), (0x10137, Lb::AL), (0x1018F, Lb::XX),
    (0x10190, Lb::AL), (0x1019D, Lb::XX), (0x101A0, Lb::AL), (0x101A1, Lb::XX), (0x101D0, Lb::AL), (0x101FD, Lb::CM),
    (0x101FE, Lb::XX), (0x10280, Lb::AL), (0x1029D, Lb::XX), (0x102A0, Lb::AL), (0x102D1, Lb::XX), (0x102E0, Lb::CM),
    (0x102E1, Lb::AL), (0x102FC, Lb::XX), (0x10300, Lb::AL), (0x10324, Lb::XX), (0x1032D, Lb::AL), (0x1034B, Lb::XX),
    (0x10350, Lb::AL), (0x10376, Lb::CM), (0x1037B, Lb::XX), (0x10380, Lb::AL), (0x1039E, Lb::XX), (0x1039F, Lb::AL),
    (0x103C4, Lb::XX), (0x103C8, Lb::AL), (0x103D6, Lb::XX), (0x10400, Lb::AL), (0x1049E, Lb::XX), (0x104A0, Lb::NU),
    (0x104AA, Lb::XX), (0x104B0, Lb::AL), (0x104D4, Lb::XX), (0x104D8, Lb::AL), (0x104FC, Lb::XX), (0x10500, Lb::AL),
    (0x10528, Lb::XX), (0x10530, Lb::AL), (0x10564, Lb::XX), (0x1056F, Lb::AL), (0x1057B, Lb::XX), (0x1057C, Lb::AL),
    (0x1058B, Lb::XX), (0x1058C, Lb::AL), (0x10593, Lb::XX), (0x10594, Lb::AL), (0x10596, Lb::XX), (0x10597, Lb::AL),
    (0x105A2, Lb::XX), (0x105A3, Lb::AL), (0x105B2, Lb::XX), (0x105B3, Lb::AL), (0x105BA, Lb::XX), (0x105BB, Lb::AL),
    (0x105BD, Lb::XX), (0x10600, Lb::AL), (0x10737, Lb::XX), (0x10740, Lb::AL), (0x10756, Lb::XX), (0x10760, Lb::AL),
    (0x10768, Lb::XX), (0x10780, Lb::AL), (0x10786, Lb::XX), (0x10787, Lb::AL), (0x107B1, Lb::XX), (0x107B2, Lb::AL),
    (0x107BB, Lb::XX), (0x10800, Lb::AL), (0x10806, Lb::XX), (0x10808, Lb::AL), (0x10809, Lb::XX), (0x1080A, Lb::AL),
    (0x10836, Lb::XX), (0x10837, Lb::AL), (0x10839, Lb::XX), (0x1083C, Lb::AL), (0x1083D, Lb::XX), (0x1083F, Lb::AL),
    (0x10856, Lb::XX), (0x10857, Lb::AL), (0x1089F, Lb::XX), (0x108A7, Lb::AL), (0x108B0, Lb::XX), (0x108E0, Lb::AL),
    (0x108F3, Lb::XX), (0x108F4, Lb::AL), (0x108F6, Lb::XX), (0x108FB, Lb::AL), (0x1091C, Lb::XX), (0x1091F, Lb::AL),
    (0x1093A, Lb::XX), (0x1093F, Lb::AL), (0x10940, Lb::XX), (0x10980, Lb::AL), (0x109B8, Lb::XX), (0x109BC, Lb::AL),
    (0x109D0, Lb::XX), (0x109D2, Lb::AL), (0x10A01, Lb::CM), (0x10A04, Lb::XX), (0x10A05, Lb::CM), (0x10A07, Lb::XX),
    (0x10A0C, Lb::CM), (0x10A10, Lb::AL), (0x10A14, Lb::XX), (0x10A15, Lb::AL), (0x10A18, Lb::XX), (0x10A19, Lb::AL),
    (0x10A36, Lb::XX), (0x10A38, Lb::CM), (0x10A3B, Lb::XX), (0x10A3F, Lb::CM), (0x10A40, Lb::AL), (0x10A49, Lb::XX),
    (0x10A50, Lb::AL), (0x10A59, Lb::XX), (0x10A60, Lb::AL), (0x10AA0, Lb::XX), (0x10AC0, Lb::AL), (0x10AE5, Lb::CM),
    (0x10AE7, Lb::XX), (0x10AEB, Lb::AL), (0x10AF7, Lb::XX), (0x10B00, Lb::AL), (0x10B36, Lb::XX), (0x10B39, Lb::AL),
    (0x10B56, Lb::XX), (0x10B58, Lb::AL), (0x10B73, Lb::XX), (0x10B78, Lb::AL), (0x10B92, Lb::XX), (0x10B99, Lb::AL),
    (0x10B9D, Lb::XX), (0x10BA9, Lb::AL), (0x10BB0, Lb::XX), (0x10C00, Lb::AL), (0x10C49, Lb::XX), (0x10C80, Lb::AL),
    (0x10CB3, Lb::XX), (0x10CC0, Lb::AL), (0x10CF3, Lb::XX), (0x10CFA, Lb::AL), (0x10D24, Lb::CM), (0x10D28, Lb::XX),
    (0x10D30, Lb::NU), (0x10D3A, Lb::XX), (0x10E60, Lb::AL), (0x10E7F, Lb::XX), (0x10E80, Lb::AL), (0x10EAA, Lb::XX),
    (0x10EAB, Lb::CM), (0x10EAD, Lb::AL), (0x10EAE, Lb::XX), (0x10EB0, Lb::AL), (0x10EB2, Lb::XX), (0x10F00, Lb::AL),
    (0x10F28, Lb::XX), (0x10F30, Lb::AL), (0x10F46, Lb::CM), (0x10F51, Lb::AL), (0x10F5A, Lb::XX), (0x10F70, Lb::AL),
    (0x10F82, Lb::CM), (0x10F86, Lb::AL), (0x10F8A, Lb::XX), (0x10FB0, Lb::AL), (0x10FCC, Lb::XX), (0x10FE0, Lb::AL),
    (0x10FF7, Lb::XX), (0x11000, Lb::CM), (0x11003, Lb::AL), (0x11038, Lb::CM), (0x11047, Lb::AL), (0x1104E, Lb::XX),
    (0x11052, Lb::AL), (0x11066, Lb::NU), (0x11070, Lb::CM), (0x11071, Lb::AL), (0x11073, Lb::CM), (0x11075, Lb::AL),
    (0x11076, Lb::XX), (0x1107F, Lb::CM), (0x11083, Lb::AL), (0x110B0, Lb::CM), (0x110BB, Lb::AL), (0x110BD, Lb::CM),
    (0x110BE, Lb::AL), (0x110C2, Lb::CM), (0x110C3, Lb::XX), (0x110CD, Lb::CM), (0x110CE, Lb::XX), (0x110D0, Lb::AL),
    (0x110E9, Lb::XX), (0x110F0, Lb::NU), (0x110FA, Lb::XX), (0x11100, Lb::CM), (0x11103, Lb::AL), (0x11127, Lb::CM),
    (0x11135, Lb::XX), (0x11136, Lb::NU), (0x11140, Lb::AL), (0x11145, Lb::CM), (0x11147, Lb::AL), (0x11148, Lb::XX),
    (0x11150, Lb::AL), (0x11173, Lb::CM), (0x11174, Lb::AL), (0x11177, Lb::XX), (0x11180, Lb::CM), (0x11183, Lb::AL),
    (0x111B3, Lb::CM), (0x111C1, Lb::AL), (0x111C9, Lb::CM), (0x111CD, Lb::AL), (0x111CE, Lb::CM), (0x111D0, Lb::NU),
    (0x111DA, Lb::AL), (0x111E0, Lb::XX), (0x111E1, Lb::AL), (0x111F5, Lb::XX), (0x11200, Lb::AL), (0x11212, Lb::XX),
    (0x11213, Lb::AL), (0x1122C, Lb::CM), (0x11238, Lb::AL), (0x1123E, Lb::CM), (0x1123F, Lb::XX), (0x11280, Lb::AL),
    (0x11287, Lb::XX), (0x11288, Lb::AL), (0x11289, Lb::XX), (0x1128A, Lb::AL), (0x1128E, Lb::XX), (0x1128F, Lb::AL),
    (0x1129E, Lb::XX), (0x1129F, Lb::AL), (0x112AA, Lb::XX), (0x112B0, Lb::AL), (0x112DF, Lb::CM), (0x112EB, Lb::XX),
    (0x112F0, Lb::NU), (0x112FA, Lb::XX), (0x11300, Lb::CM), (0x11304, Lb::XX), (0x11305, Lb::AL), (0x1130D, Lb::XX),
    (0x1130F, Lb::AL), (0x11311, Lb::XX), (0x11313, Lb::AL), (0x11329, Lb::XX), (0x1132A, Lb::AL), (0x11331, Lb::XX),
    (0x11332, Lb::AL), (0x11334, Lb::XX), (0x11335, Lb::AL), (0x1133A, Lb::XX), (0x1133B, Lb::CM), (0x1133D, Lb::AL),
    (0x1133E, Lb::CM), (0x11345, Lb::XX), (0x11347, Lb::CM), (0x11349, Lb::XX), (0x1134B, Lb::CM), (0x1134E, Lb::XX),
    (0x11350, Lb::AL), (0x11351, Lb::XX), (0x11357, Lb::CM), (0x11358, Lb::XX), (0x1135D, Lb::AL), (0x11362, Lb::CM),
    (0x11364, Lb::XX), (0x11366, Lb::CM), (0x1136D, Lb::XX), (0x11370, Lb::CM), (0x11375, Lb::XX), (0x11400, Lb::AL),
    (0x11435, Lb::CM), (0x11447, Lb::AL), (0x11450, Lb::NU), (0x1145A, Lb::AL), (0x1145C, Lb::XX), (0x1145D, Lb::AL),
    (0x1145E, Lb::CM), (0x1145F, Lb::AL), (0x11462, Lb::XX), (0x11480, Lb::AL), (0x114B0, Lb::CM), (0x114C4, Lb::AL),
    (0x114C8, Lb::XX), (0x114D0, Lb::NU), (0x114DA, Lb::XX), (0x11580, Lb::AL), (0x115AF, Lb::CM), (0x115B6, Lb::XX),
    (0x115B8, Lb::CM), (0x115C1, Lb::AL), (0x115DC, Lb::CM), (0x115DE, Lb::XX), (0x11600, Lb::AL), (0x11630, Lb::CM),
    (0x11641, Lb::AL), (0x11645, Lb::XX), (0x11650, Lb::NU), (0x1165A, Lb::XX), (0x11660, Lb::AL), (0x1166D, Lb::XX),
    (0x11680, Lb::AL), (0x116AB, Lb::CM), (0x116B8, Lb::AL), (0x116BA, Lb::XX), (0x116C0, Lb::NU), (0x116CA, Lb::XX),
    (0x11700, Lb::AL), (0x1171B, Lb::XX), (0x1171D, Lb::CM), (0x1172C, Lb::XX), (0x11730, Lb::NU), (0x1173A, Lb::AL),
    (0x11747, Lb::XX), (0x11800, Lb::AL), (0x1182C, Lb::CM), (0x1183B, Lb::AL), (0x1183C, Lb::XX), (0x118A0, Lb::AL),
    (0x118E0, Lb::NU), (0x118EA, Lb::AL), (0x118F3, Lb::XX), (0x118FF, Lb::AL), (0x11907, Lb::XX), (0x11909, Lb::AL),
    (0x1190A, Lb::XX), (0x1190C, Lb::AL), (0x11914, Lb::XX), (0x11915, Lb::AL), (0x11917, Lb::XX), (0x11918, Lb::AL),
    (0x11930, Lb::CM), (0x11936, Lb::XX), (0x11937, Lb::CM), (0x11939, Lb::XX), (0x1193B, Lb::CM), (0x1193F, Lb::AL),
    (0x11940, Lb::CM), (0x11941, Lb::AL), (0x11942, Lb::CM), (0x11944, Lb::AL), (0x11947, Lb::XX), (0x11950, Lb::NU),
    (0x1195A, Lb::XX), (0x119A0, Lb::AL), (0x119A8, Lb::XX), (0x119AA, Lb::AL), (0x119D1, Lb::CM), (0x119D8, Lb::XX),
    (0x119DA, Lb::CM), (0x119E1, Lb::AL), (0x119E4, Lb::CM), (0x119E5, Lb::XX), (0x11A00, Lb::AL), (0x11A01, Lb::CM),
    (0x11A0B, Lb::AL), (0x11A33, Lb::CM), (0x11A3A, Lb::AL), (0x11A3B, Lb::CM), (0x11A3F, Lb::AL), (0x11A47, Lb::CM),
    (0x11A48, Lb::XX), (0x11A50, Lb::AL), (0x11A51, Lb::CM), (0x11A5C, Lb::AL), (0x11A8A, Lb::CM), (0x11A9A, Lb::AL),
    (0x11AA3, Lb::XX), (0x11AB0, Lb::AL), (0x11AF9, Lb::XX), (0x11C00, Lb::AL), (0x11C09, Lb::XX), (0x11C0A, Lb::AL),
    (0x11C2F, Lb::CM), (0x11C37, Lb::XX), (0x11C38, Lb::CM), (0x11C40, Lb::AL), (0x11C46, Lb::XX), (0x11C50, Lb::NU),
    (0x11C5A, Lb::AL), (0x11C6D, Lb::XX), (0x11C70, Lb::AL), (0x11C90, Lb::XX), (0x11C92, Lb::CM), (0x11CA8, Lb::XX),
    (0x11CA9, Lb::CM), (0x11CB7, Lb::XX), (0x11D00, Lb::AL), (0x11D07, Lb::XX), (0x11D08, Lb::AL), (0x11D0A, Lb::XX),
    (0x11D0B, Lb::AL), (0x11D31, Lb::CM), (0x11D37, Lb::XX), (0x11D3A, Lb::CM), (0x11D3B, Lb::XX), (0x11D3C, Lb::CM),
    (0x11D3E, Lb::XX), (0x11D3F, Lb::CM), (0x11D46, Lb::AL), (0x11D47, Lb::CM), (0x11D48, Lb::XX), (0x11D50, Lb::NU),
    (0x11D5A, Lb::XX), (0x11D60, Lb::AL), (0x11D66, Lb::XX), (0x11D67, Lb::AL), (0x11D69, Lb::XX), (0x11D6A, Lb::AL),
    (0x11D8A, Lb::CM), (0x11D8F, Lb::XX), (0x11D90, Lb::CM), (0x11D92, Lb::XX), (0x11D93, Lb::CM), (0x11D98, Lb::AL),
    (0x11D99, Lb::XX), (0x11DA0, Lb::NU), (0x11DAA, Lb::XX), (0x11EE0, Lb::AL), (0x11EF3, Lb::CM), (0x11EF7, Lb::AL),
    (0x11EF9, Lb::XX), (0x11FB0, Lb::AL), (0x11FB1, Lb::XX), (0x11FC0, Lb::AL), (0x11FDD, Lb::PR), (0x11FE1, Lb::AL),
    (0x11FF2, Lb::XX), (0x11FFF, Lb::AL), (0x1239A, Lb::XX), (0x12400, Lb::AL), (0x1246F, Lb::XX), (0x12470, Lb::AL),
    (0x12475, Lb::XX), (0x12480, Lb::AL), (0x12544, Lb::XX), (0x12F90, Lb::AL), (0x12FF3, Lb::XX), (0x13000, Lb::AL),
    (0x1342F, Lb::XX), (0x13430, Lb::CM), (0x13439, Lb::XX), (0x14400, Lb::AL), (0x14647, Lb::XX), (0x16800, Lb::AL),
    (0x16A39, Lb::XX), (0x16A40, Lb::AL), (0x16A5F, Lb::XX), (0x16A60, Lb::NU), (0x16A6A, Lb::XX), (0x16A6E, Lb::AL),
    (0x16ABF, Lb::XX), (0x16AC0, Lb::NU), (0x16ACA, Lb::XX), (0x16AD0, Lb::AL), (0x16AEE, Lb::XX), (0x16AF0, Lb::CM),
    (0x16AF5, Lb::AL), (0x16AF6, Lb::XX), (0x16B00, Lb::AL), (0x16B30, Lb::CM), (0x16B37, Lb::AL), (0x16B46, Lb::XX),
    (0x16B50, Lb::NU), (0x16B5A, Lb::XX), (0x16B5B, Lb::AL), (0x16B62, Lb::XX), (0x16B63, Lb::AL), (0x16B78, Lb::XX),
    (0x16B7D, Lb::AL), (0x16B90, Lb::XX), (0x16E40, Lb::AL), (0x16E9B, Lb::XX), (0x16F00, Lb::AL), (0x16F4B, Lb::XX),
    (0x16F4F, Lb::CM), (0x16F50, Lb::AL), (0x16F51, Lb::CM), (0x16F88, Lb::XX), (0x16F8F, Lb::CM), (0x16F93, Lb::AL),
    (0x16FA0, Lb::XX), (0x16FE0, Lb::AL), (0x16FE4, Lb::CM), (0x16FE5, Lb::XX), (0x16FF0, Lb::CM), (0x16FF2, Lb::XX),
    (0x17000, Lb::ID), (0x18D80, Lb::XX), (0x1AFF0, Lb::AL), (0x1AFF4, Lb::XX), (0x1AFF5, Lb::AL), (0x1AFFC, Lb::XX),
    (0x1AFFD, Lb::AL), (0x1AFFF, Lb::XX), (0x1B000, Lb::ID), (0x1B300, Lb::XX), (0x1BC00, Lb::AL), (0x1BC6B, Lb::XX),
    (0x1BC70, Lb::AL), (0x1BC7D, Lb::XX), (0x1BC80, Lb::AL), (0x1BC89, Lb::XX), (0x1BC90, Lb::AL), (0x1BC9A, Lb::XX),
    (0x1BC9C, Lb::AL), (0x1BC9D, Lb::CM), (0x1BC9F, Lb::AL), (0x1BCA0, Lb::CM), (0x1BCA4, Lb::XX), (0x1CF00, Lb::CM),
    (0x1CF2E, Lb::XX), (0x1CF30, Lb::CM), (0x1CF47, Lb::XX), (0x1CF50, Lb::AL), (0x1CFC4, Lb::XX), (0x1D000, Lb::AL),
    (0x1D0F6, Lb::XX), (0x1D100, Lb::AL), (0x1D127, Lb::XX), (0x1D129, Lb::AL), (0x1D165, Lb::CM), (0x1D16A, Lb::AL),
    (0x1D16D, Lb::CM), (0x1D183, Lb::AL), (0x1D185, Lb::CM), (0x1D18C, Lb::AL), (0x1D1AA, Lb::CM), (0x1D1AE, Lb::AL),
    (0x1D1EB, Lb::XX), (0x1D200, Lb::AL), (0x1D242, Lb::CM), (0x1D245, Lb::AL), (0x1D246, Lb::XX), (0x1D2E0, Lb::AL),
    (0x1D2F4, Lb::XX), (0x1D300, Lb::AL), (0x1D357, Lb::XX), (0x1D360, Lb::AL), (0x1D379, Lb::XX), (0x1D400, Lb::AL),
    (0x1D455, Lb::XX), (0x1D456, Lb::AL), (0x1D49D, Lb::XX), (0x1D49E, Lb::AL), (0x1D4A0, Lb::XX), (0x1D4A2, Lb::AL),
    (0x1D4A3, Lb::XX), (0x1D4A5, Lb::AL), (0x1D4A7, Lb::XX), (0x1D4A9, Lb::AL), (0x1D4AD, Lb::XX), (0x1D4AE, Lb::AL),
    (0x1D4BA, Lb::XX), (0x1D4BB, Lb::AL), (0x1D4BC, Lb::XX), (0x1D4BD, Lb::AL), (0x1D4C4, Lb::XX), (0x1D4C5, Lb::AL),
    (0x1D506, Lb::XX), (0x1D507, Lb::AL), (0x1D50B, Lb::XX), (0x1D50D, Lb::AL), (0x1D515, Lb::XX), (0x1D516, Lb::AL),
    (0x1D51D, Lb::XX), (0x1D51E, Lb::AL), (0x1D53A, Lb::XX), (0x1D53B, Lb::AL), (0x1D53F, Lb::XX), (0x1D540, Lb::AL),
    (0x1D545, Lb::XX), (0x1D546, Lb::AL), (0x1D547, Lb::XX), (0x1D54A, Lb::AL), (0x1D551, Lb::XX), (0x1D552, Lb::AL),
    (0x1D6A6, Lb::XX), (0x1D6A8, Lb::AL), (0x1D7CC, Lb::XX), (0x1D7CE, Lb::NU), (0x1D800, Lb::AL), (0x1DA00, Lb::CM),
    (0x1DA37, Lb::AL), (0x1DA3B, Lb::CM), (0x1DA6D, Lb::AL), (0x1DA75, Lb::CM), (0x1DA76, Lb::AL), (0x1DA84, Lb::CM),
    (0x1DA85, Lb::AL), (0x1DA8C, Lb::XX), (0x1DA9B, Lb::CM), (0x1DAA0, Lb::XX), (0x1DAA1, Lb::CM), (0x1DAB0, Lb::XX),
    (0x1DF00, Lb::AL), (0x1DF1F, Lb::XX), (0x1E000, Lb::CM), (0x1E007, Lb::XX), (0x1E008, Lb::CM), (0x1E019, Lb::XX),
    (0x1E01B, Lb::CM), (0x1E022, Lb::XX), (0x1E023, Lb::CM), (0x1E025, Lb::XX), (0x1E026, Lb::CM), (0x1E02B, Lb::XX),
    (0x1E100, Lb::AL), (0x1E12D, Lb::XX), (0x1E130, Lb::CM), (0x1E137, Lb::AL), (0x1E13E, Lb::XX), (0x1E140, Lb::NU),
    (0x1E14A, Lb::XX), (0x1E14E, Lb::AL), (0x1E150, Lb::XX), (0x1E290, Lb::AL), (0x1E2AE, Lb::CM), (0x1E2AF, Lb::XX),
    (0x1E2C0, Lb::AL), (0x1E2EC, Lb::CM), (0x1E2F0, Lb::NU), (0x1E2FA, Lb::XX), (0x1E2FF, Lb::PR), (0x1E300, Lb::XX),
    (0x1E7E0, Lb::AL), (0x1E7E7, Lb::XX), (0x1E7E8, Lb::AL), (0x1E7EC, Lb::XX), (0x1E7ED, Lb::AL), (0x1E7EF, Lb::XX),
    (0x1E7F0, Lb::AL), (0x1E7FF, Lb::XX), (0x1E800, Lb::AL), (0x1E8C5, Lb::XX), (0x1E8C7, Lb::AL), (0x1E8D0, Lb::CM),
    (0x1E8D7, Lb::XX), (0x1E900, Lb::AL), (0x1E944, Lb::CM), (0x1E94B, Lb::AL), (0x1E94C, Lb::XX), (0x1E950, Lb::NU),
    (0x1E95A, Lb::XX), (0x1E95E, Lb::AL), (0x1E960, Lb::XX), (0x1EC71, Lb::AL), (0x1ECB0, Lb::PR), (0x1ECB1, Lb::AL),
    (0x1ECB5, Lb::XX), (0x1ED01, Lb::AL), (0x1ED3E, Lb::XX), (0x1EE00, Lb::AL), (0x1EE04, Lb::XX), (0x1EE05, Lb::AL),
    (0x1EE20, Lb::XX), (0x1EE21, Lb::AL), (0x1EE23, Lb::XX), (0x1EE24, Lb::AL), (0x1EE25, Lb::XX), (0x1EE27, Lb::AL),
    (0x1EE28, Lb::XX), (0x1EE29, Lb::AL), (0x1EE33, Lb::XX), (0x1EE34, Lb::AL), (0x1EE38, Lb::XX), (0x1EE39, Lb::AL),
    (0x1EE3A, Lb::XX), (0x1EE3B, Lb::AL), (0x1EE3C, Lb::XX), (0x1EE42, Lb::AL), (0x1EE43, Lb::XX), (0x1EE47, Lb::AL),
    (0x1EE48, Lb::XX), (0x1EE49, Lb::AL), (0x1EE4A, Lb::XX), (0x1EE4B, Lb::AL), (0x1EE4C, Lb::XX), (0x1EE4D, Lb::AL),
    (0x1EE50, Lb::XX), (0x1EE51, Lb::AL), (0x1EE53, Lb::XX), (0x1EE54, Lb::AL), (0x1EE55, Lb::XX), (0x1EE57, Lb::AL),
    (0x1EE58, Lb::XX), (0x1EE59, Lb::AL), (0x1EE5A, Lb::XX), (0x1EE5B, Lb::AL), (0x1EE5C, Lb::XX), (0x1EE5D, Lb::AL),
    (0x1EE5E, Lb::XX), (0x1EE5F, Lb::AL), (0x1EE60, Lb::XX), (0x1EE61, Lb::AL), (0x1EE63, Lb::XX), (0x1EE64, Lb::AL),
    (0x1EE65, Lb::XX), (0x1EE67, Lb::AL), (0x1EE6B, Lb::XX), (0x1EE6C, Lb::AL), (0x1EE73, Lb::XX), (0x1EE74, Lb::AL),
    (0x1EE78, Lb::XX), (0x1EE79, Lb::AL), (0x1EE7D, Lb::XX), (0x1EE7E, Lb::AL), (0x1EE7F, Lb::XX), (0x1EE80, Lb::AL),
    (0x1EE8A, Lb::XX), (0x1EE8B, Lb::AL), (0x1EE9C, Lb::XX), (0x1EEA1, Lb::AL), (0x1EEA4, Lb::XX), (0x1EEA5, Lb::AL),
    (0x1EEAA, Lb::XX), (0x1EEAB, Lb::AL), (0x1EEBC, Lb::XX), (0x1EEF0, Lb::AL), (0x1EEF2, Lb::XX), (0x1F000, Lb::AL),
    (0x1F02C, Lb::XX), (0x1F030, Lb::AL), (0x1F094, Lb::XX), (0x1F0A0, Lb::AL), (0x1F0AF, Lb::XX), (0x1F0B1, Lb::AL),
    (0x1F0C0, Lb::XX), (0x1F0C1, Lb::AL), (0x1F0D0, Lb::XX), (0x1F0D1, Lb::AL), (0x1F0F6, Lb::XX), (0x1F100, Lb::AL),
    (0x1F1AE, Lb::XX), (0x1F1E6, Lb::RI), (0x1F200, Lb::AL), (0x1F203, Lb::XX), (0x1F210, Lb::AL), (0x1F23C, Lb::XX),
    (0x1F240, Lb::AL), (0x1F249, Lb::XX), (0x1F250, Lb::AL), (0x1F252, Lb::XX), (0x1F260, Lb::AL), (0x1F266, Lb::XX),
    (0x1F300, Lb::ID), (0x1FBF0, Lb::NU), (0x1FBFA, Lb::ID), (0x1FC00, Lb::XX), (0x20000, Lb::ID), (0x31350, Lb::XX),
    (0xE0001, Lb::CM), (0xE0002, Lb::XX), (0xE0020, Lb::CM), (0xE0080, Lb::XX), (0xE0100, Lb::CM), (0xE01F0, Lb::XX),
];
