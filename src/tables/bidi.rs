// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

use crate::bidi::BracketType as Bt;
use crate::property::BidiClass as Bc;

pub(crate) static BIDI_CLASS: &[(u32, Bc)] = &[
    (0x0, Bc::BN), (0x9, Bc::S), (0xA, Bc::B), (0xB, Bc::S), (0xC, Bc::WS), (0xD, Bc::B),
    (0xE, Bc::BN), (0x1C, Bc::B), (0x1F, Bc::S), (0x20, Bc::WS), (0x21, Bc::ON), (0x23, Bc::ET),
    (0x26, Bc::ON), (0x2B, Bc::ES), (0x2C, Bc::CS), (0x2D, Bc::ES), (0x2E, Bc::CS), (0x30, Bc::EN),
    (0x3A, Bc::CS), (0x3B, Bc::ON), (0x41, Bc::L), (0x5B, Bc::ON), (0x61, Bc::L), (0x7B, Bc::ON),
    (0x7F, Bc::BN), (0x85, Bc::B), (0x86, Bc::BN), (0xA0, Bc::CS), (0xA1, Bc::ON), (0xA2, Bc::ET),
    (0xA6, Bc::ON), (0xAA, Bc::L), (0xAB, Bc::ON), (0xAD, Bc::BN), (0xAE, Bc::ON), (0xB0, Bc::ET),
    (0xB2, Bc::EN), (0xB4, Bc::ON), (0xB5, Bc::L), (0xB6, Bc::ON), (0xB9, Bc::EN), (0xBA, Bc::L),
    (0xBB, Bc::ON), (0xC0, Bc::L), (0xD7, Bc::ON), (0xD8, Bc::L), (0xF7, Bc::ON), (0xF8, Bc::L),
    (0x2B9, Bc::ON), (0x2BB, Bc::L), (0x2C2, Bc::ON), (0x2D0, Bc::L), (0x2D2, Bc::ON), (0x2E0, Bc::L),
    (0x2E5, Bc::ON), (0x2EE, Bc::L), (0x2EF, Bc::ON), (0x300, Bc::NSM), (0x370, Bc::L), (0x374, Bc::ON),
    (0x376, Bc::L), (0x378, Bc::Default), (0x37A, Bc::L), (0x37E, Bc::ON), (0x37F, Bc::L), (0x380, Bc::Default),
    (0x384, Bc::ON), (0x386, Bc::L), (0x387, Bc::ON), (0x388, Bc::L), (0x38B, Bc::Default), (0x38C, Bc::L),
    (0x38D, Bc::Default), (0x38E, Bc::L), (0x3A2, Bc::Default), (0x3A3, Bc::L), (0x3F6, Bc::ON), (0x3F7, Bc::L),
    (0x483, Bc::NSM), (0x48A, Bc::L), (0x530, Bc::Default), (0x531, Bc::L), (0x557, Bc::Default), (0x559, Bc::L),
    (0x58A, Bc::ON), (0x58B, Bc::Default), (0x58D, Bc::ON), (0x58F, Bc::ET), (0x590, Bc::Default), (0x591, Bc::NSM),
    (0x5BE, Bc::R), (0x5BF, Bc::NSM), (0x5C0, Bc::R), (0x5C1, Bc::NSM), (0x5C3, Bc::R), (0x5C4, Bc::NSM),
    (0x5C6, Bc::R), (0x5C7, Bc::NSM), (0x5C8, Bc::Default), (0x5D0, Bc::R), (0x5EB, Bc::Default), (0x5EF, Bc::R),
    (0x5F5, Bc::Default), (0x600, Bc::AN), (0x606, Bc::ON), (0x608, Bc::AL), (0x609, Bc::ET), (0x60B, Bc::AL),
    (0x60C, Bc::CS), (0x60D, Bc::AL), (0x60E, Bc::ON), (0x610, Bc::NSM), (0x61B, Bc::AL), (0x64B, Bc::NSM),
    (0x660, Bc::AN), (0x66A, Bc::ET), (0x66B, Bc::AN), (0x66D, Bc::AL), (0x670, Bc::NSM), (0x671, Bc::AL),
    (0x6D6, Bc::NSM), (0x6DD, Bc::AN), (0x6DE, Bc::ON), (0x6DF, Bc::NSM), (0x6E5, Bc::AL), (0x6E7, Bc::NSM),
    (0x6E9, Bc::ON), (0x6EA, Bc::NSM), (0x6EE, Bc::AL), (0x6F0, Bc::EN), (0x6FA, Bc::AL), (0x70E, Bc::Default),
    (0x70F, Bc::AL), (0x711, Bc::NSM), (0x712, Bc::AL), (0x730, Bc::NSM), (0x74B, Bc::Default), (0x74D, Bc::AL),
    (0x7A6, Bc::NSM), (0x7B1, Bc::AL), (0x7B2, Bc::Default), (0x7C0, Bc::R), (0x7EB, Bc::NSM), (0x7F4, Bc::R),
    (0x7F6, Bc::ON), (0x7FA, Bc::R), (0x7FB, Bc::Default), (0x7FD, Bc::NSM), (0x7FE, Bc::R), (0x816, Bc::NSM),
    (0x81A, Bc::R), (0x81B, Bc::NSM), (0x824, Bc::R), (0x825, Bc::NSM), (0x828, Bc::R), (0x829, Bc::NSM),
    (0x82E, Bc::Default), (0x830, Bc::R), (0x83F, Bc::Default), (0x840, Bc::R), (0x859, Bc::NSM), (0x85C, Bc::Default),
    (0x85E, Bc::R), (0x85F, Bc::Default), (0x860, Bc::AL), (0x86B, Bc::Default), (0x870, Bc::AL), (0x88F, Bc::Default),
    (0x890, Bc::AN), (0x892, Bc::Default), (0x898, Bc::NSM), (0x8A0, Bc::AL), (0x8CA, Bc::NSM), (0x8E2, Bc::AN),
    (0x8E3, Bc::NSM), (0x903, Bc::L), (0x93A, Bc::NSM), (0x93B, Bc::L), (0x93C, Bc::NSM), (0x93D, Bc::L),
    (0x941, Bc::NSM), (0x949, Bc::L), (0x94D, Bc::NSM), (0x94E, Bc::L), (0x951, Bc::NSM), (0x958, Bc::L),
    (0x962, Bc::NSM), (0x964, Bc::L), (0x981, Bc::NSM), (0x982, Bc::L), (0x984, Bc::Default), (0x985, Bc::L),
    (0x98D, Bc::Default), (0x98F, Bc::L), (0x991, Bc::Default), (0x993, Bc::L), (0x9A9, Bc::Default), (0x9AA, Bc::L),
    (0x9B1, Bc::Default), (0x9B2, Bc::L), (0x9B3, Bc::Default), (0x9B6, Bc::L), (0x9BA, Bc::Default), (0x9BC, Bc::NSM),
    (0x9BD, Bc::L), (0x9C1, Bc::NSM), (0x9C5, Bc::Default), (0x9C7, Bc::L), (0x9C9, Bc::Default), (0x9CB, Bc::L),
    (0x9CD, Bc::NSM), (0x9CE, Bc::L), (0x9CF, Bc::Default), (0x9D7, Bc::L), (0x9D8, Bc::Default), (0x9DC, Bc::L),
    (0x9DE, Bc::Default), (0x9DF, Bc::L), (0x9E2, Bc::NSM), (0x9E4, Bc::Default), (0x9E6, Bc::L), (0x9F2, Bc::ET),
    (0x9F4, Bc::L), (0x9FB, Bc::ET), (0x9FC, Bc::L), (0x9FE, Bc::NSM), (0x9FF, Bc::Default), (0xA01, Bc::NSM),
    (0xA03, Bc::L), (0xA04, Bc::Default), (0xA05, Bc::L), (0xA0B, Bc::Default), (0xA0F, Bc::L), (0xA11, Bc::Default),
    (0xA13, Bc::L), (0xA29, Bc::Default), (0xA2A, Bc::L), (0xA31, Bc::Default), (0xA32, Bc::L), (0xA34, Bc::Default),
    (0xA35, Bc::L), (0xA37, Bc::Default), (0xA38, Bc::L), (0xA3A, Bc::Default), (0xA3C, Bc::NSM), (0xA3D, Bc::Default),
    (0xA3E, Bc::L), (0xA41, Bc::NSM), (0xA43, Bc::Default), (0xA47, Bc::NSM), (0xA49, Bc::Default), (0xA4B, Bc::NSM),
    (0xA4E, Bc::Default), (0xA51, Bc::NSM), (0xA52, Bc::Default), (0xA59, Bc::L), (0xA5D, Bc::Default), (0xA5E, Bc::L),
    (0xA5F, Bc::Default), (0xA66, Bc::L), (0xA70, Bc::NSM), (0xA72, Bc::L), (0xA75, Bc::NSM), (0xA76, Bc::L),
    (0xA77, Bc::Default), (0xA81, Bc::NSM), (0xA83, Bc::L), (0xA84, Bc::Default), (0xA85, Bc::L), (0xA8E, Bc::Default),
    (0xA8F, Bc::L), (0xA92, Bc::Default), (0xA93, Bc::L), (0xAA9, Bc::Default), (0xAAA, Bc::L), (0xAB1, Bc::Default),
    (0xAB2, Bc::L), (0xAB4, Bc::Default), (0xAB5, Bc::L), (0xABA, Bc::Default), (0xABC, Bc::NSM), (0xABD, Bc::L),
    (0xAC1, Bc::NSM), (0xAC6, Bc::Default), (0xAC7, Bc::NSM), (0xAC9, Bc::L), (0xACA, Bc::Default), (0xACB, Bc::L),
    (0xACD, Bc::NSM), (0xACE, Bc::Default), (0xAD0, Bc::L), (0xAD1, Bc::Default), (0xAE0, Bc::L), (0xAE2, Bc::NSM),
    (0xAE4, Bc::Default), (0xAE6, Bc::L), (0xAF1, Bc::ET), (0xAF2, Bc::Default), (0xAF9, Bc::L), (0xAFA, Bc::NSM),
    (0xB00, Bc::Default), (0xB01, Bc::NSM), (0xB02, Bc::L), (0xB04, Bc::Default), (0xB05, Bc::L), (0xB0D, Bc::Default),
    (0xB0F, Bc::L), (0xB11, Bc::Default), (0xB13, Bc::L), (0xB29, Bc::Default), (0xB2A, Bc::L), (0xB31, Bc::Default),
    (0xB32, Bc::L), (0xB34, Bc::Default), (0xB35, Bc::L), (0xB3A, Bc::Default), (0xB3C, Bc::NSM), (0xB3D, Bc::L),
    (0xB3F, Bc::NSM), (0xB40, Bc::L), (0xB41, Bc::NSM), (0xB45, Bc::Default), (0xB47, Bc::L), (0xB49, Bc::Default),
    (0xB4B, Bc::L), (0xB4D, Bc::NSM), (0xB4E, Bc::Default), (0xB55, Bc::NSM), (0xB57, Bc::L), (0xB58, Bc::Default),
    (0xB5C, Bc::L), (0xB5E, Bc::Default), (0xB5F, Bc::L), (0xB62, Bc::NSM), (0xB64, Bc::Default), (0xB66, Bc::L),
    (0xB78, Bc::Default), (0xB82, Bc::NSM), (0xB83, Bc::L), (0xB84, Bc::Default), (0xB85, Bc::L), (0xB8B, Bc::Default),
    (0xB8E, Bc::L), (0xB91, Bc::Default), (0xB92, Bc::L), (0xB96, Bc::Default), (0xB99, Bc::L), (0xB9B, Bc::Default),
    (0xB9C, Bc::L), (0xB9D, Bc::Default), (0xB9E, Bc::L), (0xBA0, Bc::Default), (0xBA3, Bc::L), (0xBA5, Bc::Default),
    (0xBA8, Bc::L), (0xBAB, Bc::Default), (0xBAE, Bc::L), (0xBBA, Bc::Default), (0xBBE, Bc::L), (0xBC0, Bc::NSM),
    (0xBC1, Bc::L), (0xBC3, Bc::Default), (0xBC6, Bc::L), (0xBC9, Bc::Default), (0xBCA, Bc::L), (0xBCD, Bc::NSM),
    (0xBCE, Bc::Default), (0xBD0, Bc::L), (0xBD1, Bc::Default), (0xBD7, Bc::L), (0xBD8, Bc::Default), (0xBE6, Bc::L),
    (0xBF3, Bc::ON), (0xBF9, Bc::ET), (0xBFA, Bc::ON), (0xBFB, Bc::Default), (0xC00, Bc::NSM), (0xC01, Bc::L),
    (0xC04, Bc::NSM), (0xC05, Bc::L), (0xC0D, Bc::Default), (0xC0E, Bc::L), (0xC11, Bc::Default), (0xC12, Bc::L),
    (0xC29, Bc::Default), (0xC2A, Bc::L), (0xC3A, Bc::Default), (0xC3C, Bc::NSM), (0xC3D, Bc::L), (0xC3E, Bc::NSM),
    (0xC41, Bc::L), (0xC45, Bc::Default), (0xC46, Bc::NSM), (0xC49, Bc::Default), (0xC4A, Bc::NSM), (0xC4E, Bc::Default),
    (0xC55, Bc::NSM), (0xC57, Bc::Default), (0xC58, Bc::L), (0xC5B, Bc::Default), (0xC5D, Bc::L), (0xC5E, Bc::Default),
    (0xC60, Bc::L), (0xC62, Bc::NSM), (0xC64, Bc::Default), (0xC66, Bc::L), (0xC70, Bc::Default), (0xC77, Bc::L),
    (0xC78, Bc::ON), (0xC7F, Bc::L), (0xC81, Bc::NSM), (0xC82, Bc::L), (0xC8D, Bc::Default), (0xC8E, Bc::L),
    (0xC91, Bc::Default), (0xC92, Bc::L), (0xCA9, Bc::Default), (0xCAA, Bc::L), (0xCB4, Bc::Default), (0xCB5, Bc::L),
    (0xCBA, Bc::Default), (0xCBC, Bc::NSM), (0xCBD, Bc::L), (0xCC5, Bc::Default), (0xCC6, Bc::L), (0xCC9, Bc::Default),
    (0xCCA, Bc::L), (0xCCC, Bc::NSM), (0xCCE, Bc::Default), (0xCD5, Bc::L), (0xCD7, Bc::Default), (0xCDD, Bc::L),
    (0xCDF, Bc::Default), (0xCE0, Bc::L), (0xCE2, Bc::NSM), (0xCE4, Bc::Default), (0xCE6, Bc::L), (0xCF0, Bc::Default),
    (0xCF1, Bc::L), (0xCF3, Bc::Default), (0xD00, Bc::NSM), (0xD02, Bc::L), (0xD0D, Bc::Default), (0xD0E, Bc::L),
    (0xD11, Bc::Default), (0xD12, Bc::L), (0xD3B, Bc::NSM), (0xD3D, Bc::L), (0xD41, Bc::NSM), (0xD45, Bc::Default),
    (0xD46, Bc::L), (0xD49, Bc::Default), (0xD4A, Bc::L), (0xD4D, Bc::NSM), (0xD4E, Bc::L), (0xD50, Bc::Default),
    (0xD54, Bc::L), (0xD62, Bc::NSM), (0xD64, Bc::Default), (0xD66, Bc::L), (0xD80, Bc::Default), (0xD81, Bc::NSM),
    (0xD82, Bc::L), (0xD84, Bc::Default), (0xD85, Bc::L), (0xD97, Bc::Default), (0xD9A, Bc::L), (0xDB2, Bc::Default),
    (0xDB3, Bc::L), (0xDBC, Bc::Default), (0xDBD, Bc::L), (0xDBE, Bc::Default), (0xDC0, Bc::L), (0xDC7, Bc::Default),
    (0xDCA, Bc::NSM), (0xDCB, Bc::Default), (0xDCF, Bc::L), (0xDD2, Bc::NSM), (0xDD5, Bc::Default), (0xDD6, Bc::NSM),
    (0xDD7, Bc::Default), (0xDD8, Bc::L), (0xDE0, Bc::Default), (0xDE6, Bc::L), (0xDF0, Bc::Default), (0xDF2, Bc::L),
    (0xDF5, Bc::Default), (0xE01, Bc::L), (0xE31, Bc::NSM), (0xE32, Bc::L), (0xE34, Bc::NSM), (0xE3B, Bc::Default),
    (0xE3F, Bc::ET), (0xE40, Bc::L), (0xE47, Bc::NSM), (0xE4F, Bc::L), (0xE5C, Bc::Default), (0xE81, Bc::L),
    (0xE83, Bc::Default), (0xE84, Bc::L), (0xE85, Bc::Default), (0xE86, Bc::L), (0xE8B, Bc::Default), (0xE8C, Bc::L),
    (0xEA4, Bc::Default), (0xEA5, Bc::L), (0xEA6, Bc::Default), (0xEA7, Bc::L), (0xEB1, Bc::NSM), (0xEB2, Bc::L),
    (0xEB4, Bc::NSM), (0xEBD, Bc::L), (0xEBE, Bc::Default), (0xEC0, Bc::L), (0xEC5, Bc::Default), (0xEC6, Bc::L),
    (0xEC7, Bc::Default), (0xEC8, Bc::NSM), (0xECE, Bc::Default), (0xED0, Bc::L), (0xEDA, Bc::Default), (0xEDC, Bc::L),
    (0xEE0, Bc::Default), (0xF00, Bc::L), (0xF18, Bc::NSM), (0xF1A, Bc::L), (0xF35, Bc::NSM), (0xF36, Bc::L),
    (0xF37, Bc::NSM), (0xF38, Bc::L), (0xF39, Bc::NSM), (0xF3A, Bc::ON), (0xF3E, Bc::L), (0xF48, Bc::Default),
    (0xF49, Bc::L), (0xF6D, Bc::Default), (0xF71, Bc::NSM), (0xF7F, Bc::L), (0xF80, Bc::NSM), (0xF85, Bc::L),
    (0xF86, Bc::NSM), (0xF88, Bc::L), (0xF8D, Bc::NSM), (0xF98, Bc::Default), (0xF99, Bc::NSM), (0xFBD, Bc::Default),
    (0xFBE, Bc::L), (0xFC6, Bc::NSM), (0xFC7, Bc::L), (0xFCD, Bc::Default), (0xFCE, Bc::L), (0xFDB, Bc::Default),
    (0x1000, Bc::L), (0x102D, Bc::NSM), (0x1031, Bc::L), (0x1032, Bc::NSM), (0x1038, Bc::L), (0x1039, Bc::NSM),
    (0x103B, Bc::L), (0x103D, Bc::NSM), (0x103F, Bc::L), (0x1058, Bc::NSM), (0x105A, Bc::L), (0x105E, Bc::NSM),
    (0x1061, Bc::L), (0x1071, Bc::NSM), (0x1075, Bc::L), (0x1082, Bc::NSM), (0x1083, Bc::L), (0x1085, Bc::NSM),
    (0x1087, Bc::L), (0x108D, Bc::NSM), (0x108E, Bc::L), (0x109D, Bc::NSM), (0x109E, Bc::L), (0x10C6, Bc::Default),
    (0x10C7, Bc::L), (0x10C8, Bc::Default), (0x10CD, Bc::L), (0x10CE, Bc::Default), (0x10D0, Bc::L), (0x1249, Bc::Default),
    (0x124A, Bc::L), (0x124E, Bc::Default), (0x1250, Bc::L), (0x1257, Bc::Default), (0x1258, Bc::L), (0x1259, Bc::Default),
    (0x125A, Bc::L), (0x125E, Bc::Default), (0x1260, Bc::L), (0x1289, Bc::Default), (0x128A, Bc::L), (0x128E, Bc::Default),
    (0x1290, Bc::L), (0x12B1, Bc::Default), (0x12B2, Bc::L), (0x12B6, Bc::Default), (0x12B8, Bc::L), (0x12BF, Bc::Default),
    (0x12C0, Bc::L), (0x12C1, Bc::Default), (0x12C2, Bc::L), (0x12C6, Bc::Default), (0x12C8, Bc::L), (0x12D7, Bc::Default),
    (0x12D8, Bc::L), (0x1311, Bc::Default), (0x1312, Bc::L), (0x1316, Bc::Default), (0x1318, Bc::L), (0x135B, Bc::Default),
    (0x135D, Bc::NSM), (0x1360, Bc::L), (0x137D, Bc::Default), (0x1380, Bc::L), (0x1390, Bc::ON), (0x139A, Bc::Default),
    (0x13A0, Bc::L), (0x13F6, Bc::Default), (0x13F8, Bc::L), (0x13FE, Bc::Default), (0x1400, Bc::ON), (0x1401, Bc::L),
    (0x1680, Bc::WS), (0x1681, Bc::L), (0x169B, Bc::ON), (0x169D, Bc::Default), (0x16A0, Bc::L), (0x16F9, Bc::Default),
    (0x1700, Bc::L), (0x1712, Bc::NSM), (0x1715, Bc::L), (0x1716, Bc::Default), (0x171F, Bc::L), (0x1732, Bc::NSM),
    (0x1734, Bc::L), (0x1737, Bc::Default), (0x1740, Bc::L), (0x1752, Bc::NSM), (0x1754, Bc::Default), (0x1760, Bc::L),
    (0x176D, Bc::Default), (0x176E, Bc::L), (0x1771, Bc::Default), (0x1772, Bc::NSM), (0x1774, Bc::Default), (0x1780, Bc::L),
    (0x17B4, Bc::NSM), (0x17B6, Bc::L), (0x17B7, Bc::NSM), (0x17BE, Bc::L), (0x17C6, Bc::NSM), (0x17C7, Bc::L),
    (0x17C9, Bc::NSM), (0x17D4, Bc::L), (0x17DB, Bc::ET), (0x17DC, Bc::L), (0x17DD, Bc::NSM), (0x17DE, Bc::Default),
    (0x17E0, Bc::L), (0x17EA, Bc::Default), (0x17F0, Bc::ON), (0x17FA, Bc::Default), (0x1800, Bc::ON), (0x180B, Bc::NSM),
    (0x180E, Bc::BN), (0x180F, Bc::NSM), (0x1810, Bc::L), (0x181A, Bc::Default), (0x1820, Bc::L), (0x1879, Bc::Default),
    (0x1880, Bc::L), (0x1885, Bc::NSM), (0x1887, Bc::L), (0x18A9, Bc::NSM), (0x18AA, Bc::L), (0x18AB, Bc::Default),
    (0x18B0, Bc::L), (0x18F6, Bc::Default), (0x1900, Bc::L), (0x191F, Bc::Default), (0x1920, Bc::NSM), (0x1923, Bc::L),
    (0x1927, Bc::NSM), (0x1929, Bc::L), (0x192C, Bc::Default), (0x1930, Bc::L), (0x1932, Bc::NSM), (0x1933, Bc::L),
    (0x1939, Bc::NSM), (0x193C, Bc::Default), (0x1940, Bc::ON), (0x1941, Bc::Default), (0x1944, Bc::ON), (0x1946, Bc::L),
    (0x196E, Bc::Default), (0x1970, Bc::L), (0x1975, Bc::Default), (0x1980, Bc::L), (0x19AC, Bc::Default), (0x19B0, Bc::L),
    (0x19CA, Bc::Default), (0x19D0, Bc::L), (0x19DB, Bc::Default), (0x19DE, Bc::ON), (0x1A00, Bc::L), (0x1A17, Bc::NSM),
    (0x1A19, Bc::L), (0x1A1B, Bc::NSM), (0x1A1C, Bc::Default), (0x1A1E, Bc::L), (0x1A56, Bc::NSM), (0x1A57, Bc::L),
    (0x1A58, Bc::NSM), (0x1A5F, Bc::Default), (0x1A60, Bc::NSM), (0x1A61, Bc::L), (0x1A62, Bc::NSM), (0x1A63, Bc::L),
    (0x1A65, Bc::NSM), (0x1A6D, Bc::L), (0x1A73, Bc::NSM), (0x1A7D, Bc::Default), (0x1A7F, Bc::NSM), (0x1A80, Bc::L),
    (0x1A8A, Bc::Default), (0x1A90, Bc::L), (0x1A9A, Bc::Default), (0x1AA0, Bc::L), (0x1AAE, Bc::Default), (0x1AB0, Bc::NSM),
    (0x1ACF, Bc::Default), (0x1B00, Bc::NSM), (0x1B04, Bc::L), (0x1B34, Bc::NSM), (0x1B35, Bc::L), (0x1B36, Bc::NSM),
    (0x1B3B, Bc::L), (0x1B3C, Bc::NSM), (0x1B3D, Bc::L), (0x1B42, Bc::NSM), (0x1B43, Bc::L), (0x1B4D, Bc::Default),
    (0x1B50, Bc::L), (0x1B6B, Bc::NSM), (0x1B74, Bc::L), (0x1B7F, Bc::Default), (0x1B80, Bc::NSM), (0x1B82, Bc::L),
    (0x1BA2, Bc::NSM), (0x1BA6, Bc::L), (0x1BA8, Bc::NSM), (0x1BAA, Bc::L), (0x1BAB, Bc::NSM), (0x1BAE, Bc::L),
    (0x1BE6, Bc::NSM), (0x1BE7, Bc::L), (0x1BE8, Bc::NSM), (0x1BEA, Bc::L), (0x1BED, Bc::NSM), (0x1BEE, Bc::L),
    (0x1BEF, Bc::NSM), (0x1BF2, Bc::L), (0x1BF4, Bc::Default), (0x1BFC, Bc::L), (0x1C2C, Bc::NSM), (0x1C34, Bc::L),
    (0x1C36, Bc::NSM), (0x1C38, Bc::Default), (0x1C3B, Bc::L), (0x1C4A, Bc::Default), (0x1C4D, Bc::L), (0x1C89, Bc::Default),
    (0x1C90, Bc::L), (0x1CBB, Bc::Default), (0x1CBD, Bc::L), (0x1CC8, Bc::Default), (0x1CD0, Bc::NSM), (0x1CD3, Bc::L),
    (0x1CD4, Bc::NSM), (0x1CE1, Bc::L), (0x1CE2, Bc::NSM), (0x1CE9, Bc::L), (0x1CED, Bc::NSM), (0x1CEE, Bc::L),
    (0x1CF4, Bc::NSM), (0x1CF5, Bc::L), (0x1CF8, Bc::NSM), (0x1CFA, Bc::L), (0x1CFB, Bc::Default), (0x1D00, Bc::L),
    (0x1DC0, Bc::NSM), (0x1E00, Bc::L), (0x1F16, Bc::Default), (0x1F18, Bc::L), (0x1F1E, Bc::Default), (0x1F20, Bc::L),
    (0x1F46, Bc::Default), (0x1F48, Bc::L), (0x1F4E, Bc::Default), (0x1F50, Bc::L), (0x1F58, Bc::Default), (0x1F59, Bc::L),
    (0x1F5A, Bc::Default), (0x1F5B, Bc::L), (0x1F5C, Bc::Default), (0x1F5D, Bc::L), (0x1F5E, Bc::Default), (0x1F5F, Bc::L),
    (0x1F7E, Bc::Default), (0x1F80, Bc::L), (0x1FB5, Bc::Default), (0x1FB6, Bc::L), (0x1FBD, Bc::ON), (0x1FBE, Bc::L),
    (0x1FBF, Bc::ON), (0x1FC2, Bc::L), (0x1FC5, Bc::Default), (0x1FC6, Bc::L), (0x1FCD, Bc::ON), (0x1FD0, Bc::L),
    (0x1FD4, Bc::Default), (0x1FD6, Bc::L), (0x1FDC, Bc::Default), (0x1FDD, Bc::ON), (0x1FE0, Bc::L), (0x1FED, Bc::ON),
    (0x1FF0, Bc::Default), (0x1FF2, Bc::L), (0x1FF5, Bc::Default), (0x1FF6, Bc::L), (0x1FFD, Bc::ON), (0x1FFF, Bc::Default),
    (0x2000, Bc::WS), (0x200B, Bc::BN), (0x200E, Bc::L), (0x200F, Bc::R), (0x2010, Bc::ON), (0x2028, Bc::WS),
    (0x2029, Bc::B), (0x202A, Bc::LRE), (0x202B, Bc::RLE), (0x202C, Bc::PDF), (0x202D, Bc::LRO), (0x202E, Bc::RLO),
    (0x202F, Bc::CS), (0x2030, Bc::ET), (0x2035, Bc::ON), (0x2044, Bc::CS), (0x2045, Bc::ON), (0x205F, Bc::WS),
    (0x2060, Bc::BN), (0x2065, Bc::Default), (0x2066, Bc::LRI), (0x2067, Bc::RLI), (0x2068, Bc::FSI), (0x2069, Bc::PDI),
    (0x206A, Bc::BN), (0x2070, Bc::EN), (0x2071, Bc::L), (0x2072, Bc::Default), (0x2074, Bc::EN), (0x207A, Bc::ES),
    (0x207C, Bc::ON), (0x207F, Bc::L), (0x2080, Bc::EN), (0x208A, Bc::ES), (0x208C, Bc::ON), (0x208F, Bc::Default),
    (0x2090, Bc::L), (0x209D, Bc::Default), (0x20A0, Bc::ET), (0x20C1, Bc::Default), (0x20D0, Bc::NSM), (0x20F1, Bc::Default),
    (0x2100, Bc::ON), (0x2102, Bc::L), (0x2103, Bc::ON), (0x2107, Bc::L), (0x2108, Bc::ON), (0x210A, Bc::L),
    (0x2114, Bc::ON), (0x2115, Bc::L), (0x2116, Bc::ON), (0x2119, Bc::L), (0x211E, Bc::ON), (0x2124, Bc::L),
    (0x2125, Bc::ON), (0x2126, Bc::L), (0x2127, Bc::ON), (0x2128, Bc::L), (0x2129, Bc::ON), (0x212A, Bc::L),
    (0x212E, Bc::ET), (0x212F, Bc::L), (0x213A, Bc::ON), (0x213C, Bc::L), (0x2140, Bc::ON), (0x2145, Bc::L),
    (0x214A, Bc::ON), (0x214E, Bc::L), (0x2150, Bc::ON), (0x2160, Bc::L), (0x2189, Bc::ON), (0x218C, Bc::Default),
    (0x2190, Bc::ON), (0x2212, Bc::ES), (0x2213, Bc::ET), (0x2214, Bc::ON), (0x2336, Bc::L), (0x237B, Bc::ON),
    (0x2395, Bc::L), (0x2396, Bc::ON), (0x2427, Bc::Default), (0x2440, Bc::ON), (0x244B, Bc::Default), (0x2460, Bc::ON),
    (0x2488, Bc::EN), (0x249C, Bc::L), (0x24EA, Bc::ON), (0x26AC, Bc::L), (0x26AD, Bc::ON), (0x2800, Bc::L),
    (0x2900, Bc::ON), (0x2B74, Bc::Default), (0x2B76, Bc::ON), (0x2B96, Bc::Default), (0x2B97, Bc::ON), (0x2C00, Bc::L),
    (0x2CE5, Bc::ON), (0x2CEB, Bc::L), (0x2CEF, Bc::NSM), (0x2CF2, Bc::L), (0x2CF4, Bc::Default), (0x2CF9, Bc::ON),
    (0x2D00, Bc::L), (0x2D26, Bc::Default), (0x2D27, Bc::L), (0x2D28, Bc::Default), (0x2D2D, Bc::L), (0x2D2E, Bc::Default),
    (0x2D30, Bc::L), (0x2D68, Bc::Default), (0x2D6F, Bc::L), (0x2D71, Bc::Default), (0x2D7F, Bc::NSM), (0x2D80, Bc::L),
    (0x2D97, Bc::Default), (0x2DA0, Bc::L), (0x2DA7, Bc::Default), (0x2DA8, Bc::L), (0x2DAF, Bc::Default), (0x2DB0, Bc::L),
    (0x2DB7, Bc::Default), (0x2DB8, Bc::L), (0x2DBF, Bc::Default), (0x2DC0, Bc::L), (0x2DC7, Bc::Default), (0x2DC8, Bc::L),
    (0x2DCF, Bc::Default), (0x2DD0, Bc::L), (0x2DD7, Bc::Default), (0x2DD8, Bc::L), (0x2DDF, Bc::Default), (0x2DE0, Bc::NSM),
    (0x2E00, Bc::ON), (0x2E5E, Bc::Default), (0x2E80, Bc::ON), (0x2E9A, Bc::Default), (0x2E9B, Bc::ON), (0x2EF4, Bc::Default),
    (0x2F00, Bc::ON), (0x2FD6, Bc::Default), (0x2FF0, Bc::ON), (0x2FFC, Bc::Default), (0x3000, Bc::WS), (0x3001, Bc::ON),
    (0x3005, Bc::L), (0x3008, Bc::ON), (0x3021, Bc::L), (0x302A, Bc::NSM), (0x302E, Bc::L), (0x3030, Bc::ON),
    (0x3031, Bc::L), (0x3036, Bc::ON), (0x3038, Bc::L), (0x303D, Bc::ON), (0x3040, Bc::Default), (0x3041, Bc::L),
    (0x3097, Bc::Default), (0x3099, Bc::NSM), (0x309B, Bc::ON), (0x309D, Bc::L), (0x30A0, Bc::ON), (0x30A1, Bc::L),
    (0x30FB, Bc::ON), (0x30FC, Bc::L), (0x3100, Bc::Default), (0x3105, Bc::L), (0x3130, Bc::Default), (0x3131, Bc::L),
    (0x318F, Bc::Default), (0x3190, Bc::L), (0x31C0, Bc::ON), (0x31E4, Bc::Default), (0x31F0, Bc::L), (0x321D, Bc::ON),
    (0x321F, Bc::Default), (0x3220, Bc::L), (0x3250, Bc::ON), (0x3260, Bc::L), (0x327C, Bc::ON), (0x327F, Bc::L),
    (0x32B1, Bc::ON), (0x32C0, Bc::L), (0x32CC, Bc::ON), (0x32D0, Bc::L), (0x3377, Bc::ON), (0x337B, Bc::L),
    (0x33DE, Bc::ON), (0x33E0, Bc::L), (0x33FF, Bc::ON), (0x3400, Bc::L), (0x4DC0, Bc::ON), (0x4E00, Bc::L),
    (0xA48D, Bc::Default), (0xA490, Bc::ON), (0xA4C7, Bc::Default), (0xA4D0, Bc::L), (0xA60D, Bc::ON), (0xA610, Bc::L),
    (0xA62C, Bc::Default), (0xA640, Bc::L), (0xA66F, Bc::NSM), (0xA673, Bc::ON), (0xA674, Bc::NSM), (0xA67E, Bc::ON),
    (0xA680, Bc::L), (0xA69E, Bc::NSM), (0xA6A0, Bc::L), (0xA6F0, Bc::NSM), (0xA6F2, Bc::L), (0xA6F8, Bc::Default),
    (0xA700, Bc::ON), (0xA722, Bc::L), (0xA788, Bc::ON), (0xA789, Bc::L), (0xA7CB, Bc::Default), (0xA7D0, Bc::L),
    (0xA7D2, Bc::Default), (0xA7D3, Bc::L), (0xA7D4, Bc::Default), (0xA7D5, Bc::L), (0xA7DA, Bc::Default), (0xA7F2, Bc::L),
    (0xA802, Bc::NSM), (0xA803, Bc::L), (0xA806, Bc::NSM), (0xA807, Bc::L), (0xA80B, Bc::NSM), (0xA80C, Bc::L),
    (0xA825, Bc::NSM), (0xA827, Bc::L), (0xA828, Bc::ON), (0xA82C, Bc::NSM), (0xA82D, Bc::Default), (0xA830, Bc::L),
    (0xA838, Bc::ET), (0xA83A, Bc::Default), (0xA840, Bc::L), (0xA874, Bc::ON), (0xA878, Bc::Default), (0xA880, Bc::L),
    (0xA8C4, Bc::NSM), (0xA8C6, Bc::Default), (0xA8CE, Bc::L), (0xA8DA, Bc::Default), (0xA8E0, Bc::NSM), (0xA8F2, Bc::L),
    (0xA8FF, Bc::NSM), (0xA900, Bc::L), (0xA926, Bc::NSM), (0xA92E, Bc::L), (0xA947, Bc::NSM), (0xA952, Bc::L),
    (0xA954, Bc::Default), (0xA95F, Bc::L), (0xA97D, Bc::Default), (0xA980, Bc::NSM), (0xA983, Bc::L), (0xA9B3, Bc::NSM),
    (0xA9B4, Bc::L), (0xA9B6, Bc::NSM), (0xA9BA, Bc::L), (0xA9BC, Bc::NSM), (0xA9BE, Bc::L), (0xA9CE, Bc::Default),
    (0xA9CF, Bc::L), (0xA9DA, Bc::Default), (0xA9DE, Bc::L), (0xA9E5, Bc::NSM), (0xA9E6, Bc::L), (0xA9FF, Bc::Default),
    (0xAA00, Bc::L), (0xAA29, Bc::NSM), (0xAA2F, Bc::L), (0xAA31, Bc::NSM), (0xAA33, Bc::L), (0xAA35, Bc::NSM),
    (0xAA37, Bc::Default), (0xAA40, Bc::L), (0xAA43, Bc::NSM), (0xAA44, Bc::L), (0xAA4C, Bc::NSM), (0xAA4D, Bc::L),
    (0xAA4E, Bc::Default), (0xAA50, Bc::L), (0xAA5A, Bc::Default), (0xAA5C, Bc::L), (0xAA7C, Bc::NSM), (0xAA7D, Bc::L),
    (0xAAB0, Bc::NSM), (0xAAB1, Bc::L), (0xAAB2, Bc::NSM), (0xAAB5, Bc::L), (0xAAB7, Bc::NSM), (0xAAB9, Bc::L),
    (0xAABE, Bc::NSM), (0xAAC0, Bc::L), (0xAAC1, Bc::NSM), (0xAAC2, Bc::L), (0xAAC3, Bc::Default), (0xAADB, Bc::L),
    (0xAAEC, Bc::NSM), (0xAAEE, Bc::L), (0xAAF6, Bc::NSM), (0xAAF7, Bc::Default), (0xAB01, Bc::L), (0xAB07, Bc::Default),
    (0xAB09, Bc::L), (0xAB0F, Bc::Default), (0xAB11, Bc::L), (0xAB17, Bc::Default), (0xAB20, Bc::L), (0xAB27, Bc::Default),
    (0xAB28, Bc::L), (0xAB2F, Bc::Default), (0xAB30, Bc::L), (0xAB6A, Bc::ON), (0xAB6C, Bc::Default), (0xAB70, Bc::L),
    (0xABE5, Bc::NSM), (0xABE6, Bc::L), (0xABE8, Bc::NSM), (0xABE9, Bc::L), (0xABED, Bc::NSM), (0xABEE, Bc::Default),
    (0xABF0, Bc::L), (0xABFA, Bc::Default), (0xAC00, Bc::L), (0xD7A4, Bc::Default), (0xD7B0, Bc::L), (0xD7C7, Bc::Default),
    (0xD7CB, Bc::L), (0xD7FC, Bc::Default), (0xD800, Bc::L), (0xFA6E, Bc::Default), (0xFA70, Bc::L), (0xFADA, Bc::Default),
    (0xFB00, Bc::L), (0xFB07, Bc::Default), (0xFB13, Bc::L), (0xFB18, Bc::Default), (0xFB1D, Bc::R), (0xFB1E, Bc::NSM),
    (0xFB1F, Bc::R), (0xFB29, Bc::ES), (0xFB2A, Bc::R), (0xFB37, Bc::Default), (0xFB38, Bc::R), (0xFB3D, Bc::Default),
    (0xFB3E, Bc::R), (0xFB3F, Bc::Default), (0xFB40, Bc::R), (0xFB42, Bc::Default), (0xFB43, Bc::R), (0xFB45, Bc::Default),
    (0xFB46, Bc::R), (0xFB50, Bc::AL), (0xFBC3, Bc::Default), (0xFBD3, Bc::AL), (0xFD3E, Bc::ON), (0xFD50, Bc::AL),
    (0xFD90, Bc::Default), (0xFD92, Bc::AL), (0xFDC8, Bc::Default), (0xFDCF, Bc::ON), (0xFDD0, Bc::Default), (0xFDF0, Bc::AL),
    (0xFDFD, Bc::ON), (0xFE00, Bc::NSM), (0xFE10, Bc::ON), (0xFE1A, Bc::Default), (0xFE20, Bc::NSM), (0xFE30, Bc::ON),
    (0xFE50, Bc::CS), (0xFE51, Bc::ON), (0xFE52, Bc::CS), (0xFE53, Bc::Default), (0xFE54, Bc::ON), (0xFE55, Bc::CS),
    (0xFE56, Bc::ON), (0xFE5F, Bc::ET), (0xFE60, Bc::ON), (0xFE62, Bc::ES), (0xFE64, Bc::ON), (0xFE67, Bc::Default),
    (0xFE68, Bc::ON), (0xFE69, Bc::ET), (0xFE6B, Bc::ON), (0xFE6C, Bc::Default), (0xFE70, Bc::AL), (0xFE75, Bc::Default),
    (0xFE76, Bc::AL), (0xFEFD, Bc::Default), (0xFEFF, Bc::BN), (0xFF00, Bc::Default), (0xFF01, Bc::ON), (0xFF03, Bc::ET),
    (0xFF06, Bc::ON), (0xFF0B, Bc::ES), (0xFF0C, Bc::CS), (0xFF0D, Bc::ES), (0xFF0E, Bc::CS), (0xFF10, Bc::EN),
    (0xFF1A, Bc::CS), (0xFF1B, Bc::ON), (0xFF21, Bc::L), (0xFF3B, Bc::ON), (0xFF41, Bc::L), (0xFF5B, Bc::ON),
    (0xFF66, Bc::L), (0xFFBF, Bc::Default), (0xFFC2, Bc::L), (0xFFC8, Bc::Default), (0xFFCA, Bc::L), (0xFFD0, Bc::Default),
    (0xFFD2, Bc::L), (0xFFD8, Bc::Default), (0xFFDA, Bc::L), (0xFFDD, Bc::Default), (0xFFE0, Bc::ET), (0xFFE2, Bc::ON),
    (0xFFE5, Bc::ET), (0xFFE7, Bc::Default), (0xFFE8, Bc::ON), (0xFFEF, Bc::Default), (0xFFF9, Bc::ON), (0xFFFE, Bc::Default),
    (0x10000, Bc::L), (0x1000C, Bc::Default), (0x1000D, Bc::L), (0x10027, Bc::Default), (0x10028, Bc::L), (0x1003B, Bc::Default),
    (0x1003C, Bc::L), (0x1003E, Bc::Default), (0x1003F, Bc::L), (0x1004E, Bc::Default), (0x10050, Bc::L), (0x1005E, Bc::Default),
    (0x10080, Bc::L), (0x100FB, Bc::Default), (0x10100, Bc::L), (0x10101, Bc::ON), (0x10102, Bc::L), (0x10103, Bc::Default),
    (0x10107, Bc::L), (0x10134, Bc::Default), (0x10137, Bc::L), (0x10140, Bc::ON), (0x1018D, Bc::L), (0x1018F, Bc::Default),
    (0x10190, Bc::ON), (0x1019D, Bc::Default), (0x101A0, Bc::ON), (0x101A1, Bc::Default), (0x101D0, Bc::L), (0x101FD, Bc::NSM),
    (0x101FE, Bc::Default), (0x10280, Bc::L), (0x1029D, Bc::Default), (0x102A0, Bc::L), (0x102D1, Bc::Default), (0x102E0, Bc::NSM),
    (0x102E1, Bc::EN), (0x102FC, Bc::Default), (0x10300, Bc::L), (0x10324, Bc::Default), (0x1032D, Bc::L), (0x1034B, Bc::Default),
    (0x10350, Bc::L), (0x10376, Bc::NSM), (0x1037B, Bc::Default), (0x10380, Bc::L), (0x1039E, Bc::Default), (0x1039F, Bc::L),
    (0x103C4, Bc::Default), (0x103C8, Bc::L), (0x103D6, Bc::Default), (0x10400, Bc::L), (0x1049E, Bc::Default), (0x104A0, Bc::L),
    (0x104AA, Bc::Default), (0x104B0, Bc::L), (0x104D4, Bc::Default), (0x104D8, Bc::L), (0x104FC, Bc::Default), (0x10500, Bc::L),
    (0x10528, Bc::Default), (0x10530, Bc::L), (0x10564, Bc::Default), (0x1056F, Bc::L), (0x1057B, Bc::Default), (0x1057C, Bc::L),
    (0x1058B, Bc::Default), (0x1058C, Bc::L), (0x10593, Bc::Default), (0x10594, Bc::L), (0x10596, Bc::Default), (0x10597, Bc::L),
    (0x105A2, Bc::Default), (0x105A3, Bc::L), (0x105B2, Bc::Default), (0x105B3, Bc::L), (0x105BA, Bc::Default), (0x105BB, Bc::L),
    (0x105BD, Bc::Default), (0x10600, Bc::L), (0x10737, Bc::Default), (0x10740, Bc::L), (0x10756, Bc::Default), (0x10760, Bc::L),
    (0x10768, Bc::Default), (0x10780, Bc::L), (0x10786, Bc::Default), (0x10787, Bc::L), (0x107B1, Bc::Default), (0x107B2, Bc::L),
    (0x107BB, Bc::Default), (0x10800, Bc::R), (0x10806, Bc::Default), (0x10808, Bc::R), (0x10809, Bc::Default), (0x1080A, Bc::R),
    (0x10836, Bc::Default), (0x10837, Bc::R), (0x10839, Bc::Default), (0x1083C, Bc::R), (0x1083D, Bc::Default), (0x1083F, Bc::R),
    (0x10856, Bc::Default), (0x10857, Bc::R), (0x1089F, Bc::Default), (0x108A7, Bc::R), (0x108B0, Bc::Default), (0x108E0, Bc::R),
    (0x108F3, Bc::Default), (0x108F4, Bc::R), (0x108F6, Bc::Default), (0x108FB, Bc::R), (0x1091C, Bc::Default), (0x1091F, Bc::ON),
    (0x10920, Bc::R), (0x1093A, Bc::Default), (0x1093F, Bc::R), (0x10940, Bc::Default), (0x10980, Bc::R), (0x109B8, Bc::Default),
    (0x109BC, Bc::R), (0x109D0, Bc::Default), (0x109D2, Bc::R), (0x10A01, Bc::NSM), (0x10A04, Bc::Default), (0x10A05, Bc::NSM),
    (0x10A07, Bc::Default), (0x10A0C, Bc::NSM), (0x10A10, Bc::R), (0x10A14, Bc::Default), (0x10A15, Bc::R), (0x10A18, Bc::Default),
    (0x10A19, Bc::R), (0x10A36, Bc::Default), (0x10A38, Bc::NSM), (0x10A3B, Bc::Default), (0x10A3F, Bc::NSM), (0x10A40, Bc::R),
    (0x10A49, Bc::Default), (0x10A50, Bc::R), (0x10A59, Bc::Default), (0x10A60, Bc::R), (0x10AA0, Bc::Default), (0x10AC0, Bc::R),
    (0x10AE5, Bc::NSM), (0x10AE7, Bc::Default), (0x10AEB, Bc::R), (0x10AF7, Bc::Default), (0x10B00, Bc::R), (0x10B36, Bc::Default),
    (0x10B39, Bc::ON), (0x10B40, Bc::R), (0x10B56, Bc::Default), (0x10B58, Bc::R), (0x10B73, Bc::Default), (0x10B78, Bc::R),
    (0x10B92, Bc::Default), (0x10B99, Bc::R), (0x10B9D, Bc::Default), (0x10BA9, Bc::R), (0x10BB0, Bc::Default), (0x10C00, Bc::R),
    (0x10C49, Bc::Default), (0x10C80, Bc::R), (0x10CB3, Bc::Default), (0x10CC0, Bc::R), (0x10CF3, Bc::Default), (0x10CFA, Bc::R),
    (0x10D00, Bc::AL), (0x10D24, Bc::NSM), (0x10D28, Bc::Default), (0x10D30, Bc::AN), (0x10D3A, Bc::Default), (0x10E60, Bc::AN),
    (0x10E7F, Bc::Default), (0x10E80, Bc::R), (0x10EAA, Bc::Default), (0x10EAB, Bc::NSM), (0x10EAD, Bc::R), (0x10EAE, Bc::Default),
    (0x10EB0, Bc::R), (0x10EB2, Bc::Default), (0x10F00, Bc::R), (0x10F28, Bc::Default), (0x10F30, Bc::AL), (0x10F46, Bc::NSM),
    (0x10F51, Bc::AL), (0x10F5A, Bc::Default), (0x10F70, Bc::R), (0x10F82, Bc::NSM), (0x10F86, Bc::R), (0x10F8A, Bc::Default),
    (0x10FB0, Bc::R), (0x10FCC, Bc::Default), (0x10FE0, Bc::R), (0x10FF7, Bc::Default), (0x11000, Bc::L), (0x11001, Bc::NSM),
    (0x11002, Bc::L), (0x11038, Bc::NSM), (0x11047, Bc::L), (0x1104E, Bc::Default), (0x11052, Bc::ON), (0x11066, Bc::L),
    (0x11070, Bc::NSM), (0x11071, Bc::L), (0x11073, Bc::NSM), (0x11075, Bc::L), (0x11076, Bc::Default), (0x1107F, Bc::NSM),
    (0x11082, Bc::L), (0x110B3, Bc::NSM), (0x110B7, Bc::L), (0x110B9, Bc::NSM), (0x110BB, Bc::L), (0x110C2, Bc::NSM),
    (0x110C3, Bc::Default), (0x110CD, Bc::L), (0x110CE, Bc::Default), (0x110D0, Bc::L), (0x110E9, Bc::Default), (0x110F0, Bc::L),
    (0x110FA, Bc::Default), (0x11100, Bc::NSM), (0x11103, Bc::L), (0x11127, Bc::NSM), (0x1112C, Bc::L), (0x1112D, Bc::NSM),
    (0x11135, Bc::Default), (0x11136, Bc::L), (0x11148, Bc::Default), (0x11150, Bc::L), (0x11173, Bc::NSM), (0x11174, Bc::L),
    (0x11177, Bc::Default), (0x11180, Bc::NSM), (0x11182, Bc::L), (0x111B6, Bc::NSM), (0x111BF, Bc::L), (0x111C9, Bc::NSM),
    (0x111CD, Bc::L), (0x111CF, Bc::NSM), (0x111D0, Bc::L), (0x111E0, Bc::Default), (0x111E1, Bc::L), (0x111F5, Bc::Default),
    (0x11200, Bc::L), (0x11212, Bc::Default), (0x11213, Bc::L), (0x1122F, Bc::NSM), (0x11232, Bc::L), (0x11234, Bc::NSM),
    (0x11235, Bc::L), (0x11236, Bc::NSM), (0x11238, Bc::L), (0x1123E, Bc::NSM), (0x1123F, Bc::Default), (0x11280, Bc::L),
    (0x11287, Bc::Default), (0x11288, Bc::L), (0x11289, Bc::Default), (0x1128A, Bc::L), (0x1128E, Bc::Default), (0x1128F, Bc::L),
    (0x1129E, Bc::Default), (0x1129F, Bc::L), (0x112AA, Bc::Default), (0x112B0, Bc::L), (0x112DF, Bc::NSM), (0x112E0, Bc::L),
    (0x112E3, Bc::NSM), (0x112EB, Bc::Default), (0x112F0, Bc::L), (0x112FA, Bc::Default), (0x11300, Bc::NSM), (0x11302, Bc::L),
    (0x11304, Bc::Default), (0x11305, Bc::L), (0x1130D, Bc::Default), (0x1130F, Bc::L), (0x11311, Bc::Default), (0x11313, Bc::L),
    (0x11329, Bc::Default), (0x1132A, Bc::L), (0x11331, Bc::Default), (0x11332, Bc::L), (0x11334, Bc::Default), (0x11335, Bc::L),
    (0x1133A, Bc::Default), (0x1133B, Bc::NSM), (0x1133D, Bc::L), (0x11340, Bc::NSM), (0x11341, Bc::L), (0x11345, Bc::Default),
    (0x11347, Bc::L), (0x11349, Bc::Default), (0x1134B, Bc::L), (0x1134E, Bc::Default), (0x11350, Bc::L), (0x11351, Bc::Default),
    (0x11357, Bc::L), (0x11358, Bc::Default), (0x1135D, Bc::L), (0x11364, Bc::Default), (0x11366, Bc::NSM), (0x1136D, Bc::Default),
    (0x11370, Bc::NSM), (0x11375, Bc::Default), (0x11400, Bc::L), (0x11438, Bc::NSM), (0x11440, Bc::L), (0x11442, Bc::NSM),
    (0x11445, Bc::L), (0x11446, Bc::NSM), (0x11447, Bc::L), (0x1145C, Bc::Default), (0x1145D, Bc::L), (0x1145E, Bc::NSM),
    (0x1145F, Bc::L), (0x11462, Bc::Default), (0x11480, Bc::L), (0x114B3, Bc::NSM), (0x114B9, Bc::L), (0x114BA, Bc::NSM),
    (0x114BB, Bc::L), (0x114BF, Bc::NSM), (0x114C1, Bc::L), (0x114C2, Bc::NSM), (0x114C4, Bc::L), (0x114C8, Bc::Default),
    (0x114D0, Bc::L), (0x114DA, Bc::Default), (0x11580, Bc::L), (0x115B2, Bc::NSM), (0x115B6, Bc::Default), (0x115B8, Bc::L),
    (0x115BC, Bc::NSM), (0x115BE, Bc::L), (0x115BF, Bc::NSM), (0x115C1, Bc::L), (0x115DC, Bc::NSM), (0x115DE, Bc::Default),
    (0x11600, Bc::L), (0x11633, Bc::NSM), (0x1163B, Bc::L), (0x1163D, Bc::NSM), (0x1163E, Bc::L), (0x1163F, Bc::NSM),
    (0x11641, Bc::L), (0x11645, Bc::Default), (0x11650, Bc::L), (0x1165A, Bc::Default), (0x11660, Bc::ON), (0x1166D, Bc::Default),
    (0x11680, Bc::L), (0x116AB, Bc::NSM), (0x116AC, Bc::L), (0x116AD, Bc::NSM), (0x116AE, Bc::L), (0x116B0, Bc::NSM),
    (0x116B6, Bc::L), (0x116B7, Bc::NSM), (0x116B8, Bc::L), (0x116BA, Bc::Default), (0x116C0, Bc::L), (0x116CA, Bc::Default),
    (0x11700, Bc::L), (0x1171B, Bc::Default), (0x1171D, Bc::NSM), (0x11720, Bc::L), (0x11722, Bc::NSM), (0x11726, Bc::L),
    (0x11727, Bc::NSM), (0x1172C, Bc::Default), (0x11730, Bc::L), (0x11747, Bc::Default), (0x11800, Bc::L), (0x1182F, Bc::NSM),
    (0x11838, Bc::L), (0x11839, Bc::NSM), (0x1183B, Bc::L), (0x1183C, Bc::Default), (0x118A0, Bc::L), (0x118F3, Bc::Default),
    (0x118FF, Bc::L), (0x11907, Bc::Default), (0x11909, Bc::L), (0x1190A, Bc::Default), (0x1190C, Bc::L), (0x11914, Bc::Default),
    (0x11915, Bc::L), (0x11917, Bc::Default), (0x11918, Bc::L), (0x11936, Bc::Default), (0x11937, Bc::L), (0x11939, Bc::Default),
    (0x1193B, Bc::NSM), (0x1193D, Bc::L), (0x1193E, Bc::NSM), (0x1193F, Bc::L), (0x11943, Bc::NSM), (0x11944, Bc::L),
    (0x11947, Bc::Default), (0x11950, Bc::L), (0x1195A, Bc::Default), (0x119A0, Bc::L), (0x119A8, Bc::Default), (0x119AA, Bc::L),
    (0x119D4, Bc::NSM), (0x119D8, Bc::Default), (0x119DA, Bc::NSM), (0x119DC, Bc::L), (0x119E0, Bc::NSM), (0x119E1, Bc::L),
    (0x119E5, Bc::Default), (0x11A00, Bc::L), (0x11A01, Bc::NSM), (0x11A07, Bc::L), (0x11A09, Bc::NSM), (0x11A0B, Bc::L),
    (0x11A33, Bc::NSM), (0x11A39, Bc::L), (0x11A3B, Bc::NSM), (0x11A3F, Bc::L), (0x11A47, Bc::NSM), (0x11A48, Bc::Default),
    (0x11A50, Bc::L), (0x11A51, Bc::NSM), (0x11A57, Bc::L), (0x11A59, Bc::NSM), (0x11A5C, Bc::L), (0x11A8A, Bc::NSM),
    (0x11A97, Bc::L), (0x11A98, Bc::NSM), (0x11A9A, Bc::L), (0x11AA3, Bc::Default), (0x11AB0, Bc::L), (0x11AF9, Bc::Default),
    (0x11C00, Bc::L), (0x11C09, Bc::Default), (0x11C0A, Bc::L), (0x11C30, Bc::NSM), (0x11C37, Bc::Default), (0x11C38, Bc::NSM),
    (0x11C3E, Bc::L), (0x11C46, Bc::Default), (0x11C50, Bc::L), (0x11C6D, Bc::Default), (0x11C70, Bc::L), (0x11C90, Bc::Default),
    (0x11C92, Bc::NSM), (0x11CA8, Bc::Default), (0x11CA9, Bc::L), (0x11CAA, Bc::NSM), (0x11CB1, Bc::L), (0x11CB2, Bc::NSM),
    (0x11CB4, Bc::L), (0x11CB5, Bc::NSM), (0x11CB7, Bc::Default), (0x11D00, Bc::L), (0x11D07, Bc::Default), (0x11D08, Bc::L),
    (0x11D0A, Bc::Default), (0x11D0B, Bc::L), (0x11D31, Bc::NSM), (0x11D37, Bc::Default), (0x11D3A, Bc::NSM), (0x11D3B, Bc::Default),
    (0x11D3C, Bc::NSM), (0x11D3E, Bc::Default), (0x11D3F, Bc::NSM), (0x11D46, Bc::L), (0x11D47, Bc::NSM), (0x11D48, Bc::Default),
    (0x11D50, Bc::L), (0x11D5A, Bc::Default), (0x11D60, Bc::L), (0x11D66, Bc::Default), (0x11D67, Bc::L), (0x11D69, Bc::Default),
    (0x11D6A, Bc::L), (0x11D8F, Bc::Default), (0x11D90, Bc::NSM), (0x11D92, Bc::Default), (0x11D93, Bc::L), (0x11D95, Bc::NSM),
    (0x11D96, Bc::L), (0x11D97, Bc::NSM), (0x11D98, Bc::L), (0x11D99, Bc::Default), (0x11DA0, Bc::L), (0x11DAA, Bc::Default),
    (0x11EE0, Bc::L), (0x11EF3, Bc::NSM), (0x11EF5, Bc::L), (0x11EF9, Bc::Default), (0x11FB0, Bc::L), (0x11FB1, Bc::Default),
    (0x11FC0, Bc::L), (0x11FD5, Bc::ON), (0x11FDD, Bc::ET), (0x11FE1, Bc::ON), (0x11FF2, Bc::Default), (0x11FFF, Bc::L),
    (0x1239A, Bc::Default), (0x12400, Bc::L), (0x1246F, Bc::Default), (0x12470, Bc::L), (0x12475, Bc::Default), (0x12480, Bc::L),
    (0x12544, Bc::Default), (0x12F90, Bc::L), (0x12FF3, Bc::Default), (0x13000, Bc::L), (0x1342F, Bc::Default), (0x13430, Bc::L),
    (0x13439, Bc::Default), (0x14400, Bc::L), (0x14647, Bc::Default), (0x16800, Bc::L), (0x16A39, Bc::Default), (0x16A40, Bc::L),
    (0x16A5F, Bc::Default), (0x16A60, Bc::L), (0x16A6A, Bc::Default), (0x16A6E, Bc::L), (0x16ABF, Bc::Default), (0x16AC0, Bc::L),
    (0x16ACA, Bc::Default), (0x16AD0, Bc::L), (0x16AEE, Bc::Default), (0x16AF0, Bc::NSM), (0x16AF5, Bc::L), (0x16AF6, Bc::Default),
    (0x16B00, Bc::L), (0x16B30, Bc::NSM), (0x16B37, Bc::L), (0x16B46, Bc::Default), (0x16B50, Bc::L), (0x16B5A, Bc::Default),
    (0x16B5B, Bc::L), (0x16B62, Bc::Default), (0x16B63, Bc::L), (0x16B78, Bc::Default), (0x16B7D, Bc::L), (0x16B90, Bc::Default),
    (0x16E40, Bc::L), (0x16E9B, Bc::Default), (0x16F00, Bc::L), (0x16F4B, Bc::Default), (0x16F4F, Bc::NSM), (0x16F50, Bc::L),
    (0x16F88, Bc::Default), (0x16F8F, Bc::NSM), (0x16F93, Bc::L), (0x16FA0, Bc::Default), (0x16FE0, Bc::L), (0x16FE2, Bc::ON),
    (0x16FE3, Bc::L), (0x16FE4, Bc::NSM), (0x16FE5, Bc::Default), (0x16FF0, Bc::L), (0x16FF2, Bc::Default), (0x17000, Bc::L),
    (0x187F8, Bc::Default), (0x18800, Bc::L), (0x18CD6, Bc::Default), (0x18D00, Bc::L), (0x18D09, Bc::Default), (0x1AFF0, Bc::L),
    (0x1AFF4, Bc::Default), (0x1AFF5, Bc::L), (0x1AFFC, Bc::Default), (0x1AFFD, Bc::L), (0x1AFFF, Bc::Default), (0x1B000, Bc::L),
    (0x1B123, Bc::Default), (0x1B150, Bc::L), (0x1B153, Bc::Default), (0x1B164, Bc::L), (0x1B168, Bc::Default), (0x1B170, Bc::L),
    (0x1B2FC, Bc::Default), (0x1BC00, Bc::L), (0x1BC6B, Bc::Default), (0x1BC70, Bc::L), (0x1BC7D, Bc::Default), (0x1BC80, Bc::L),
    (0x1BC89, Bc::Default), (0x1BC90, Bc::L), (0x1BC9A, Bc::Default), (0x1BC9C, Bc::L), (0x1BC9D, Bc::NSM), (0x1BC9F, Bc::L),
    (0x1BCA0, Bc::BN), (0x1BCA4, Bc::Default), (0x1CF00, Bc::NSM), (0x1CF2E, Bc::Default), (0x1CF30, Bc::NSM), (0x1CF47, Bc::Default),
    (0x1CF50, Bc::L), (0x1CFC4, Bc::Default), (0x1D000, Bc::L), (0x1D0F6, Bc::Default), (0x1D100, Bc::L), (0x1D127, Bc::Default),
    (0x1D129, Bc::L), (0x1D167, Bc::NSM), (0x1D16A, Bc::L), (0x1D173, Bc::BN), (0x1D17B, Bc::NSM), (0x1D183, Bc::L),
    (0x1D185, Bc::NSM), (0x1D18C, Bc::L), (0x1D1AA, Bc::NSM), (0x1D1AE, Bc::L), (0x1D1E9, Bc::ON), (0x1D1EB, Bc::Default),
    (0x1D200, Bc::ON), (0x1D242, Bc::NSM), (0x1D245, Bc::ON), (0x1D246, Bc::Default), (0x1D2E0, Bc::L), (0x1D2F4, Bc::Default),
    (0x1D300, Bc::ON), (0x1D357, Bc::Default), (0x1D360, Bc::L), (0x1D379, Bc::Default), (0x1D400, Bc::L), (0x1D455, Bc::Default),
    (0x1D456, Bc::L), (0x1D49D, Bc::Default), (0x1D49E, Bc::L), (0x1D4A0, Bc::Default), (0x1D4A2, Bc::L), (0x1D4A3, Bc::Default),
    (0x1D4A5, Bc::L), (0x1D4A7, Bc::Default), (0x1D4A9, Bc::L), (0x1D4AD, Bc::Default), (0x1D4AE, Bc::L), (0x1D4BA, Bc::Default),
    (0x1D4BB, Bc::L), (0x1D4BC, Bc::Default), (0x1D4BD, Bc::L), (0x1D4C4, Bc::Default), (0x1D4C5, Bc::L), (0x1D506, Bc::Default),
    (0x1D507, Bc::L), (0x1D50B, Bc::Default), (0x1D50D, Bc::L), (0x1D515, Bc::Default), (0x1D516, Bc::L), (0x1D51D, Bc::Default),
    (0x1D51E, Bc::L), (0x1D53A, Bc::Default), (0x1D53B, Bc::L), (0x1D53F, Bc::Default), (0x1D540, Bc::L), (0x1D545, Bc::Default),
    (0x1D546, Bc::L), (0x1D547, Bc::Default), (0x1D54A, Bc::L), (0x1D551, Bc::Default), (0x1D552, Bc::L), (0x1D6A6, Bc::Default),
    (0x1D6A8, Bc::L), (0x1D6DB, Bc::ON), (0x1D6DC, Bc::L), (0x1D715, Bc::ON), (0x1D716, Bc::L), (0x1D74F, Bc::ON),
    (0x1D750, Bc::L), (0x1D789, Bc::ON), (0x1D78A, Bc::L), (0x1D7C3, Bc::ON), (0x1D7C4, Bc::L), (0x1D7CC, Bc::Default),
    (0x1D7CE, Bc::EN), (0x1D800, Bc::L), (0x1DA00, Bc::NSM), (0x1DA37, Bc::L), (0x1DA3B, Bc::NSM), (0x1DA6D, Bc::L),
    (0x1DA75, Bc::NSM), (0x1DA76, Bc::L), (0x1DA84, Bc::NSM), (0x1DA85, Bc::L), (0x1DA8C, Bc::Default), (0x1DA9B, Bc::NSM),
    (0x1DAA0, Bc::Default), (0x1DAA1, Bc::NSM), (0x1DAB0, Bc::Default), (0x1DF00, Bc::L), (0x1DF1F, Bc::Default), (0x1E000, Bc::NSM),
    (0x1E007, Bc::Default), (0x1E008, Bc::NSM), (0x1E019, Bc::Default), (0x1E01B, Bc::NSM), (0x1E022, Bc::Default), (0x1E023, Bc::NSM),
    (0x1E025, Bc::Default), (0x1E026, Bc::NSM), (0x1E02B, Bc::Default), (0x1E100, Bc::L), (0x1E12D, Bc::Default), (0x1E130, Bc::NSM),
    (0x1E137, Bc::L), (0x1E13E, Bc::Default), (0x1E140, Bc::L), (0x1E14A, Bc::Default), (0x1E14E, Bc::L), (0x1E150, Bc::Default),
    (0x1E290, Bc::L), (0x1E2AE, Bc::NSM), (0x1E2AF, Bc::Default), (0x1E2C0, Bc::L), (0x1E2EC, Bc::NSM), (0x1E2F0, Bc::L),
    (0x1E2FA, Bc::Default), (0x1E2FF, Bc::ET), (0x1E300, Bc::Default), (0x1E7E0, Bc::L), (0x1E7E7, Bc::Default), (0x1E7E8, Bc::L),
    (0x1E7EC, Bc::Default), (0x1E7ED, Bc::L), (0x1E7EF, Bc::Default), (0x1E7F0, Bc::L), (0x1E7FF, Bc::Default), (0x1E800, Bc::R),
    (0x1E8C5, Bc::Default), (0x1E8C7, Bc::R), (0x1E8D0, Bc::NSM), (0x1E8D7, Bc::Default), (0x1E900, Bc::R), (0x1E944, Bc::NSM),
    (0x1E94B, Bc::R), (0x1E94C, Bc::Default), (0x1E950, Bc::R), (0x1E95A, Bc::Default), (0x1E95E, Bc::R), (0x1E960, Bc::Default),
    (0x1EC71, Bc::AL), (0x1ECB5, Bc::Default), (0x1ED01, Bc::AL), (0x1ED3E, Bc::Default), (0x1EE00, Bc::AL), (0x1EE04, Bc::Default),
    (0x1EE05, Bc::AL), (0x1EE20, Bc::Default), (0x1EE21, Bc::AL), (0x1EE23, Bc::Default), (0x1EE24, Bc::AL), (0x1EE25, Bc::Default),
    (0x1EE27, Bc::AL), (0x1EE28, Bc::Default), (0x1EE29, Bc::AL), (0x1EE33, Bc::Default), (0x1EE34, Bc::AL), (0x1EE38, Bc::Default),
    (0x1EE39, Bc::AL), (0x1EE3A, Bc::Default), (0x1EE3B, Bc::AL), (0x1EE3C, Bc::Default), (0x1EE42, Bc::AL), (0x1EE43, Bc::Default),
    (0x1EE47, Bc::AL), (0x1EE48, Bc::Default), (0x1EE49, Bc::AL), (0x1EE4A, Bc::Default), (0x1EE4B, Bc::AL), (0x1EE4C, Bc::Default),
    (0x1EE4D, Bc::AL), (0x1EE50, Bc::Default), (0x1EE51, Bc::AL), (0x1EE53, Bc::Default), (0x1EE54, Bc::AL), (0x1EE55, Bc::Default),
    (0x1EE57, Bc::AL), (0x1EE58, Bc::Default), (0x1EE59, Bc::AL), (0x1EE5A, Bc::Default), (0x1EE5B, Bc::AL), (0x1EE5C, Bc::Default),
    (0x1EE5D, Bc::AL), (0x1EE5E, Bc::Default), (0x1EE5F, Bc::AL), (0x1EE60, Bc::Default), (0x1EE61, Bc::AL), (0x1EE63, Bc::Default),
    (0x1EE64, Bc::AL), (0x1EE65, Bc::Default), (0x1EE67, Bc::AL), (0x1EE6B, Bc::Default), (0x1EE6C, Bc::AL), (0x1EE73, Bc::Default),
    (0x1EE74, Bc::AL), (0x1EE78, Bc::Default), (0x1EE79, Bc::AL), (0x1EE7D, Bc::Default), (0x1EE7E, Bc::AL), (0x1EE7F, Bc::Default),
    (0x1EE80, Bc::AL), (0x1EE8A, Bc::Default), (0x1EE8B, Bc::AL), (0x1EE9C, Bc::Default), (0x1EEA1, Bc::AL), (0x1EEA4, Bc::Default),
    (0x1EEA5, Bc::AL), (0x1EEAA, Bc::Default), (0x1EEAB, Bc::AL), (0x1EEBC, Bc::Default), (0x1EEF0, Bc::ON), (0x1EEF2, Bc::Default),
    (0x1F000, Bc::ON), (0x1F02C, Bc::Default), (0x1F030, Bc::ON), (0x1F094, Bc::Default), (0x1F0A0, Bc::ON), (0x1F0AF, Bc::Default),
    (0x1F0B1, Bc::ON), (0x1F0C0, Bc::Default), (0x1F0C1, Bc::ON), (0x1F0D0, Bc::Default), (0x1F0D1, Bc::ON), (0x1F0F6, Bc::Default),
    (0x1F100, Bc::EN), (0x1F10B, Bc::ON), (0x1F110, Bc::L), (0x1F12F, Bc::ON), (0x1F130, Bc::L), (0x1F16A, Bc::ON),
    (0x1F170, Bc::L), (0x1F1AD, Bc::ON), (0x1F1AE, Bc::Default), (0x1F1E6, Bc::L), (0x1F203, Bc::Default), (0x1F210, Bc::L),
    (0x1F23C, Bc::Default), (0x1F240, Bc::L), (0x1F249, Bc::Default), (0x1F250, Bc::L), (0x1F252, Bc::Default), (0x1F260, Bc::ON),
    (0x1F266, Bc::Default), (0x1F300, Bc::ON), (0x1F6D8, Bc::Default), (0x1F6DD, Bc::ON), (0x1F6ED, Bc::Default), (0x1F6F0, Bc::ON),
    (0x1F6FD, Bc::Default), (0x1F700, Bc::ON), (0x1F774, Bc::Default), (0x1F780, Bc::ON), (0x1F7D9, Bc::Default), (0x1F7E0, Bc::ON),
    (0x1F7EC, Bc::Default), (0x1F7F0, Bc::ON), (0x1F7F1, Bc::Default), (0x1F800, Bc::ON), (0x1F80C, Bc::Default), (0x1F810, Bc::ON),
    (0x1F848, Bc::Default), (0x1F850, Bc::ON), (0x1F85A, Bc::Default), (0x1F860, Bc::ON), (0x1F888, Bc::Default), (0x1F890, Bc::ON),
    (0x1F8AE, Bc::Default), (0x1F8B0, Bc::ON), (0x1F8B2, Bc::Default), (0x1F900, Bc::ON), (0x1FA54, Bc::Default), (0x1FA60, Bc::ON),
    (0x1FA6E, Bc::Default), (0x1FA70, Bc::ON), (0x1FA75, Bc::Default), (0x1FA78, Bc::ON), (0x1FA7D, Bc::Default), (0x1FA80, Bc::ON),
    (0x1FA87, Bc::Default), (0x1FA90, Bc::ON), (0x1FAAD, Bc::Default), (0x1FAB0, Bc::ON), (0x1FABB, Bc::Default), (0x1FAC0, Bc::ON),
    (0x1FAC6, Bc::Default), (0x1FAD0, Bc::ON), (0x1FADA, Bc::Default), (0x1FAE0, Bc::ON), (0x1FAE8, Bc::Default), (0x1FAF0, Bc::ON),
    (0x1FAF7, Bc::Default), (0x1FB00, Bc::ON), (0x1FB93, Bc::Default), (0x1FB94, Bc::ON), (0x1FBCB, Bc::Default), (0x1FBF0, Bc::EN),
    (0x1FBFA, Bc::Default), (0x20000, Bc::L), (0x2A6E0, Bc::Default), (0x2A700, Bc::L), (0x2B739, Bc::Default), (0x2B740, Bc::L),
    (0x2B81E, Bc::Default), (0x2B820, Bc::L), (0x2CEA2, Bc::Default), (0x2CEB0, Bc::L), (0x2EBE1, Bc::Default), (0x2F800, Bc::L),
    (0x2FA1E, Bc::Default), (0x30000, Bc::L), (0x3134B, Bc::Default), (0xE0001, Bc::BN), (0xE0002, Bc::Default), (0xE0020, Bc::BN),
    (0xE0080, Bc::Default), (0xE0100, Bc::NSM), (0xE01F0, Bc::Default), (0xF0000, Bc::L), (0xFFFFE, Bc::Default), (0x100000, Bc::L),
    (0x10FFFE, Bc::Default),
];

pub(crate) static BIDI_MIRRORED: &[u32] = &[
    0x28, 0x29, 0x3C, 0x3E, 0x5B, 0x5D, 0x7B, 0x7D, 0xAB, 0xBB,
    0xF3A, 0xF3B, 0xF3C, 0xF3D, 0x169B, 0x169C, 0x2039, 0x203A, 0x2045, 0x2046,
    0x207D, 0x207E, 0x208D, 0x208E, 0x2140, 0x2201, 0x2202, 0x2203, 0x2204, 0x2208,
    0x2209, 0x220A, 0x220B, 0x220C, 0x220D, 0x2211, 0x2215, 0x2216, 0x221A, 0x221B,
    0x221C, 0x221D, 0x221F, 0x2220, 0x2221, 0x2222, 0x2224, 0x2226, 0x222B, 0x222C,
    0x222D, 0x222E, 0x222F, 0x2230, 0x2231, 0x2232, 0x2233, 0x2239, 0x223B, 0x223C,
    0x223D, 0x223E, 0x223F, 0x2240, 0x2241, 0x2242, 0x2243, 0x2244, 0x2245, 0x2246,
    0x2247, 0x2248, 0x2249, 0x224A, 0x224B, 0x224C, 0x2252, 0x2253, 0x2254, 0x2255,
    0x225F, 0x2260, 0x2262, 0x2264, 0x2265, 0x2266, 0x2267, 0x2268, 0x2269, 0x226A,
    0x226B, 0x226E, 0x226F, 0x2270, 0x2271, 0x2272, 0x2273, 0x2274, 0x2275, 0x2276,
    0x2277, 0x2278, 0x2279, 0x227A, 0x227B, 0x227C, 0x227D, 0x227E, 0x227F, 0x2280,
    0x2281, 0x2282, 0x2283, 0x2284, 0x2285, 0x2286, 0x2287, 0x2288, 0x2289, 0x228A,
    0x228B, 0x228C, 0x228F, 0x2290, 0x2291, 0x2292, 0x2298, 0x22A2, 0x22A3, 0x22A6,
    0x22A7, 0x22A8, 0x22A9, 0x22AA, 0x22AB, 0x22AC, 0x22AD, 0x22AE, 0x22AF, 0x22B0,
    0x22B1, 0x22B2, 0x22B3, 0x22B4, 0x22B5, 0x22B6, 0x22B7, 0x22B8, 0x22BE, 0x22BF,
    0x22C9, 0x22CA, 0x22CB, 0x22CC, 0x22CD, 0x22D0, 0x22D1, 0x22D6, 0x22D7, 0x22D8,
    0x22D9, 0x22DA, 0x22DB, 0x22DC, 0x22DD, 0x22DE, 0x22DF, 0x22E0, 0x22E1, 0x22E2,
    0x22E3, 0x22E4, 0x22E5, 0x22E6, 0x22E7, 0x22E8, 0x22E9, 0x22EA, 0x22EB, 0x22EC,
    0x22ED, 0x22F0, 0x22F1, 0x22F2, 0x22F3, 0x22F4, 0x22F5, 0x22F6, 0x22F7, 0x22F8,
    0x22F9, 0x22FA, 0x22FB, 0x22FC, 0x22FD, 0x22FE, 0x22FF, 0x2308, 0x2309, 0x230A,
    0x230B, 0x2320, 0x2321, 0x2329, 0x232A, 0x2768, 0x2769, 0x276A, 0x276B, 0x276C,
    0x276D, 0x276E, 0x276F, 0x2770, 0x2771, 0x2772, 0x2773, 0x2774, 0x2775, 0x27C0,
    0x27C3, 0x27C4, 0x27C5, 0x27C6, 0x27C8, 0x27C9, 0x27CB, 0x27CC, 0x27CD, 0x27D3,
    0x27D4, 0x27D5, 0x27D6, 0x27DC, 0x27DD, 0x27DE, 0x27E2, 0x27E3, 0x27E4, 0x27E5,
    0x27E6, 0x27E7, 0x27E8, 0x27E9, 0x27EA, 0x27EB, 0x27EC, 0x27ED, 0x27EE, 0x27EF,
    0x2983, 0x2984, 0x2985, 0x2986, 0x2987, 0x2988, 0x2989, 0x298A, 0x298B, 0x298C,
    0x298D, 0x298E, 0x298F, 0x2990, 0x2991, 0x2992, 0x2993, 0x2994, 0x2995, 0x2996,
    0x2997, 0x2998, 0x299B, 0x299C, 0x299D, 0x299E, 0x299F, 0x29A0, 0x29A2, 0x29A3,
    0x29A4, 0x29A5, 0x29A6, 0x29A7, 0x29A8, 0x29A9, 0x29AA, 0x29AB, 0x29AC, 0x29AD,
    0x29AE, 0x29AF, 0x29B8, 0x29C0, 0x29C1, 0x29C2, 0x29C3, 0x29C4, 0x29C5, 0x29C9,
    0x29CE, 0x29CF, 0x29D0, 0x29D1, 0x29D2, 0x29D4, 0x29D5, 0x29D8, 0x29D9, 0x29DA,
    0x29DB, 0x29DC, 0x29E1, 0x29E3, 0x29E4, 0x29E5, 0x29E8, 0x29E9, 0x29F4, 0x29F5,
    0x29F6, 0x29F7, 0x29F8, 0x29F9, 0x29FC, 0x29FD, 0x2A0A, 0x2A0B, 0x2A0C, 0x2A0D,
    0x2A0E, 0x2A0F, 0x2A10, 0x2A11, 0x2A12, 0x2A13, 0x2A14, 0x2A15, 0x2A16, 0x2A17,
    0x2A18, 0x2A19, 0x2A1A, 0x2A1B, 0x2A1C, 0x2A1E, 0x2A1F, 0x2A20, 0x2A21, 0x2A24,
    0x2A26, 0x2A29, 0x2A2B, 0x2A2C, 0x2A2D, 0x2A2E, 0x2A34, 0x2A35, 0x2A3C, 0x2A3D,
    0x2A3E, 0x2A57, 0x2A58, 0x2A64, 0x2A65, 0x2A6A, 0x2A6B, 0x2A6C, 0x2A6D, 0x2A6F,
    0x2A70, 0x2A73, 0x2A74, 0x2A79, 0x2A7A, 0x2A7B, 0x2A7C, 0x2A7D, 0x2A7E, 0x2A7F,
    0x2A80, 0x2A81, 0x2A82, 0x2A83, 0x2A84, 0x2A85, 0x2A86, 0x2A87, 0x2A88, 0x2A89,
    0x2A8A, 0x2A8B, 0x2A8C, 0x2A8D, 0x2A8E, 0x2A8F, 0x2A90, 0x2A91, 0x2A92, 0x2A93,
    0x2A94, 0x2A95, 0x2A96, 0x2A97, 0x2A98, 0x2A99, 0x2A9A, 0x2A9B, 0x2A9C, 0x2A9D,
    0x2A9E, 0x2A9F, 0x2AA0, 0x2AA1, 0x2AA2, 0x2AA3, 0x2AA6, 0x2AA7, 0x2AA8, 0x2AA9,
    0x2AAA, 0x2AAB, 0x2AAC, 0x2AAD, 0x2AAF, 0x2AB0, 0x2AB1, 0x2AB2, 0x2AB3, 0x2AB4,
    0x2AB5, 0x2AB6, 0x2AB7, 0x2AB8, 0x2AB9, 0x2ABA, 0x2ABB, 0x2ABC, 0x2ABD, 0x2ABE,
    0x2ABF, 0x2AC0, 0x2AC1, 0x2AC2, 0x2AC3, 0x2AC4, 0x2AC5, 0x2AC6, 0x2AC7, 0x2AC8,
    0x2AC9, 0x2ACA, 0x2ACB, 0x2ACC, 0x2ACD, 0x2ACE, 0x2ACF, 0x2AD0, 0x2AD1, 0x2AD2,
    0x2AD3, 0x2AD4, 0x2AD5, 0x2AD6, 0x2ADC, 0x2ADE, 0x2AE2, 0x2AE3, 0x2AE4, 0x2AE5,
    0x2AE6, 0x2AEC, 0x2AED, 0x2AEE, 0x2AF3, 0x2AF7, 0x2AF8, 0x2AF9, 0x2AFA, 0x2AFB,
    0x2AFD, 0x2BFE, 0x2E02, 0x2E03, 0x2E04, 0x2E05, 0x2E09, 0x2E0A, 0x2E0C, 0x2E0D,
    0x2E1C, 0x2E1D, 0x2E20, 0x2E21, 0x2E22, 0x2E23, 0x2E24, 0x2E25, 0x2E26, 0x2E27,
    0x2E28, 0x2E29, 0x2E55, 0x2E56, 0x2E57, 0x2E58, 0x2E59, 0x2E5A, 0x2E5B, 0x2E5C,
    0x3008, 0x3009, 0x300A, 0x300B, 0x300C, 0x300D, 0x300E, 0x300F, 0x3010, 0x3011,
    0x3014, 0x3015, 0x3016, 0x3017, 0x3018, 0x3019, 0x301A, 0x301B, 0xFE59, 0xFE5A,
    0xFE5B, 0xFE5C, 0xFE5D, 0xFE5E, 0xFE64, 0xFE65, 0xFF08, 0xFF09, 0xFF1C, 0xFF1E,
    0xFF3B, 0xFF3D, 0xFF5B, 0xFF5D, 0xFF5F, 0xFF60, 0xFF62, 0xFF63, 0x1D6DB, 0x1D715,
    0x1D74F, 0x1D789, 0x1D7C3,
];

pub(crate) static MIRRORING_GLYPH: &[(u32, u32)] = &[
    (0x28, 0x29), (0x29, 0x28), (0x3C, 0x3E), (0x3E, 0x3C), (0x5B, 0x5D), (0x5D, 0x5B),
    (0x7B, 0x7D), (0x7D, 0x7B), (0xAB, 0xBB), (0xBB, 0xAB), (0xF3A, 0xF3B), (0xF3B, 0xF3A),
    (0xF3C, 0xF3D), (0xF3D, 0xF3C), (0x169B, 0x169C), (0x169C, 0x169B), (0x2039, 0x203A), (0x203A, 0x2039),
    (0x2045, 0x2046), (0x2046, 0x2045), (0x207D, 0x207E), (0x207E, 0x207D), (0x208D, 0x208E), (0x208E, 0x208D),
    (0x2208, 0x220B), (0x2209, 0x220C), (0x220A, 0x220D), (0x220B, 0x2208), (0x220C, 0x2209), (0x220D, 0x220A),
    (0x2264, 0x2265), (0x2265, 0x2264), (0x2266, 0x2267), (0x2267, 0x2266), (0x2268, 0x2269), (0x2269, 0x2268),
    (0x226A, 0x226B), (0x226B, 0x226A), (0x226E, 0x226F), (0x226F, 0x226E), (0x2270, 0x2271), (0x2271, 0x2270),
    (0x2272, 0x2273), (0x2273, 0x2272), (0x2276, 0x2277), (0x2277, 0x2276), (0x227A, 0x227B), (0x227B, 0x227A),
    (0x227C, 0x227D), (0x227D, 0x227C), (0x2282, 0x2283), (0x2283, 0x2282), (0x2284, 0x2285), (0x2285, 0x2284),
    (0x2286, 0x2287), (0x2287, 0x2286), (0x2288, 0x2289), (0x2289, 0x2288), (0x228A, 0x228B), (0x228B, 0x228A),
    (0x22D6, 0x22D7), (0x22D7, 0x22D6), (0x22D8, 0x22D9), (0x22D9, 0x22D8), (0x2308, 0x2309), (0x2309, 0x2308),
    (0x230A, 0x230B), (0x230B, 0x230A), (0x2329, 0x232A), (0x232A, 0x2329), (0x2768, 0x2769), (0x2769, 0x2768),
    (0x276A, 0x276B), (0x276B, 0x276A), (0x276C, 0x276D), (0x276D, 0x276C), (0x276E, 0x276F), (0x276F, 0x276E),
    (0x2770, 0x2771), (0x2771, 0x2770), (0x2772, 0x2773), (0x2773, 0x2772), (0x2774, 0x2775), (0x2775, 0x2774),
    (0x27C5, 0x27C6), (0x27C6, 0x27C5), (0x27E6, 0x27E7), (0x27E7, 0x27E6), (0x27E8, 0x27E9), (0x27E9, 0x27E8),
    (0x27EA, 0x27EB), (0x27EB, 0x27EA), (0x27EC, 0x27ED), (0x27ED, 0x27EC), (0x27EE, 0x27EF), (0x27EF, 0x27EE),
    (0x2983, 0x2984), (0x2984, 0x2983), (0x2985, 0x2986), (0x2986, 0x2985), (0x2987, 0x2988), (0x2988, 0x2987),
    (0x2989, 0x298A), (0x298A, 0x2989), (0x298B, 0x298C), (0x298C, 0x298B), (0x298D, 0x2990), (0x298E, 0x298F),
    (0x298F, 0x298E), (0x2990, 0x298D), (0x2991, 0x2992), (0x2992, 0x2991), (0x2993, 0x2994), (0x2994, 0x2993),
    (0x2995, 0x2996), (0x2996, 0x2995), (0x2997, 0x2998), (0x2998, 0x2997), (0x29FC, 0x29FD), (0x29FD, 0x29FC),
    (0x2E22, 0x2E23), (0x2E23, 0x2E22), (0x2E24, 0x2E25), (0x2E25, 0x2E24), (0x2E26, 0x2E27), (0x2E27, 0x2E26),
    (0x2E28, 0x2E29), (0x2E29, 0x2E28), (0x3008, 0x3009), (0x3009, 0x3008), (0x300A, 0x300B), (0x300B, 0x300A),
    (0x3010, 0x3011), (0x3011, 0x3010), (0x3014, 0x3015), (0x3015, 0x3014), (0x3016, 0x3017), (0x3017, 0x3016),
    (0x3018, 0x3019), (0x3019, 0x3018), (0x301A, 0x301B), (0x301B, 0x301A), (0xFE59, 0xFE5A), (0xFE5A, 0xFE59),
    (0xFE5B, 0xFE5C), (0xFE5C, 0xFE5B), (0xFE5D, 0xFE5E), (0xFE5E, 0xFE5D), (0xFE64, 0xFE65), (0xFE65, 0xFE64),
    (0xFF08, 0xFF09), (0xFF09, 0xFF08), (0xFF1C, 0xFF1E), (0xFF1E, 0xFF1C), (0xFF3B, 0xFF3D), (0xFF3D, 0xFF3B),
    (0xFF5B, 0xFF5D), (0xFF5D, 0xFF5B), (0xFF5F, 0xFF60), (0xFF60, 0xFF5F),
];

pub(crate) static PAIRED_BRACKET: &[(u32, u32)] = &[
    (0x28, 0x29), (0x29, 0x28), (0x5B, 0x5D), (0x5D, 0x5B), (0x7B, 0x7D), (0x7D, 0x7B),
    (0xF3A, 0xF3B), (0xF3B, 0xF3A), (0xF3C, 0xF3D), (0xF3D, 0xF3C), (0x169B, 0x169C), (0x169C, 0x169B),
    (0x2045, 0x2046), (0x2046, 0x2045), (0x207D, 0x207E), (0x207E, 0x207D), (0x208D, 0x208E), (0x208E, 0x208D),
    (0x2308, 0x2309), (0x2309, 0x2308), (0x230A, 0x230B), (0x230B, 0x230A), (0x2329, 0x232A), (0x232A, 0x2329),
    (0x2768, 0x2769), (0x2769, 0x2768), (0x276A, 0x276B), (0x276B, 0x276A), (0x276C, 0x276D), (0x276D, 0x276C),
    (0x276E, 0x276F), (0x276F, 0x276E), (0x2770, 0x2771), (0x2771, 0x2770), (0x2772, 0x2773), (0x2773, 0x2772),
    (0x2774, 0x2775), (0x2775, 0x2774), (0x27C5, 0x27C6), (0x27C6, 0x27C5), (0x27E6, 0x27E7), (0x27E7, 0x27E6),
    (0x27E8, 0x27E9), (0x27E9, 0x27E8), (0x27EA, 0x27EB), (0x27EB, 0x27EA), (0x27EC, 0x27ED), (0x27ED, 0x27EC),
    (0x27EE, 0x27EF), (0x27EF, 0x27EE), (0x2983, 0x2984), (0x2984, 0x2983), (0x2985, 0x2986), (0x2986, 0x2985),
    (0x2987, 0x2988), (0x2988, 0x2987), (0x2989, 0x298A), (0x298A, 0x2989), (0x298B, 0x298C), (0x298C, 0x298B),
    (0x298D, 0x2990), (0x298E, 0x298F), (0x298F, 0x298E), (0x2990, 0x298D), (0x2991, 0x2992), (0x2992, 0x2991),
    (0x2993, 0x2994), (0x2994, 0x2993), (0x2995, 0x2996), (0x2996, 0x2995), (0x2997, 0x2998), (0x2998, 0x2997),
    (0x29D8, 0x29D9), (0x29D9, 0x29D8), (0x29DA, 0x29DB), (0x29DB, 0x29DA), (0x29FC, 0x29FD), (0x29FD, 0x29FC),
    (0x2E22, 0x2E23), (0x2E23, 0x2E22), (0x2E24, 0x2E25), (0x2E25, 0x2E24), (0x2E26, 0x2E27), (0x2E27, 0x2E26),
    (0x2E28, 0x2E29), (0x2E29, 0x2E28), (0x3008, 0x3009), (0x3009, 0x3008), (0x300A, 0x300B), (0x300B, 0x300A),
    (0x3010, 0x3011), (0x3011, 0x3010), (0x3014, 0x3015), (0x3015, 0x3014), (0x3016, 0x3017), (0x3017, 0x3016),
    (0x3018, 0x3019), (0x3019, 0x3018), (0x301A, 0x301B), (0x301B, 0x301A), (0xFE59, 0xFE5A), (0xFE5A, 0xFE59),
    (0xFE5B, 0xFE5C), (0xFE5C, 0xFE5B), (0xFE5D, 0xFE5E), (0xFE5E, 0xFE5D), (0xFF08, 0xFF09), (0xFF09, 0xFF08),
    (0xFF3B, 0xFF3D), (0xFF3D, 0xFF3B), (0xFF5B, 0xFF5D), (0xFF5D, 0xFF5B), (0xFF5F, 0xFF60), (0xFF60, 0xFF5F),
];

pub(crate) static PAIRED_BRACKET_TYPE: &[(u32, Bt)] = &[
    (0x28, Bt::Open), (0x29, Bt::Close), (0x5B, Bt::Open), (0x5D, Bt::Close), (0x7B, Bt::Open),
    (0x7D, Bt::Close), (0xF3A, Bt::Open), (0xF3B, Bt::Close), (0xF3C, Bt::Open), (0xF3D, Bt::Close),
    (0x169B, Bt::Open), (0x169C, Bt::Close), (0x2045, Bt::Open), (0x2046, Bt::Close), (0x207D, Bt::Open),
    (0x207E, Bt::Close), (0x208D, Bt::Open), (0x208E, Bt::Close), (0x2308, Bt::Open), (0x2309, Bt::Close),
    (0x230A, Bt::Open), (0x230B, Bt::Close), (0x2329, Bt::Open), (0x232A, Bt::Close), (0x2768, Bt::Open),
    (0x2769, Bt::Close), (0x276A, Bt::Open), (0x276B, Bt::Close), (0x276C, Bt::Open), (0x276D, Bt::Close),
    (0x276E, Bt::Open), (0x276F, Bt::Close), (0x2770, Bt::Open), (0x2771, Bt::Close), (0x2772, Bt::Open),
    (0x2773, Bt::Close), (0x2774, Bt::Open), (0x2775, Bt::Close), (0x27C5, Bt::Open), (0x27C6, Bt::Close),
    (0x27E6, Bt::Open), (0x27E7, Bt::Close), (0x27E8, Bt::Open), (0x27E9, Bt::Close), (0x27EA, Bt::Open),
    (0x27EB, Bt::Close), (0x27EC, Bt::Open), (0x27ED, Bt::Close), (0x27EE, Bt::Open), (0x27EF, Bt::Close),
    (0x2983, Bt::Open), (0x2984, Bt::Close), (0x2985, Bt::Open), (0x2986, Bt::Close), (0x2987, Bt::Open),
    (0x2988, Bt::Close), (0x2989, Bt::Open), (0x298A, Bt::Close), (0x298B, Bt::Open), (0x298C, Bt::Close),
    (0x298D, Bt::Open), (0x298E, Bt::Close), (0x298F, Bt::Open), (0x2990, Bt::Close), (0x2991, Bt::Open),
    (0x2992, Bt::Close), (0x2993, Bt::Open), (0x2994, Bt::Close), (0x2995, Bt::Open), (0x2996, Bt::Close),
    (0x2997, Bt::Open), (0x2998, Bt::Close), (0x29D8, Bt::Open), (0x29D9, Bt::Close), (0x29DA, Bt::Open),
    (0x29DB, Bt::Close), (0x29FC, Bt::Open), (0x29FD, Bt::Close), (0x2E22, Bt::Open), (0x2E23, Bt::Close),
    (0x2E24, Bt::Open), (0x2E25, Bt::Close), (0x2E26, Bt::Open), (0x2E27, Bt::Close), (0x2E28, Bt::Open),
    (0x2E29, Bt::Close), (0x3008, Bt::Open), (0x3009, Bt::Close), (0x300A, Bt::Open), (0x300B, Bt::Close),
    (0x3010, Bt::Open), (0x3011, Bt::Close), (0x3014, Bt::Open), (0x3015, Bt::Close), (0x3016, Bt::Open),
    (0x3017, Bt::Close), (0x3018, Bt::Open), (0x3019, Bt::Close), (0x301A, Bt::Open), (0x301B, Bt::Close),
    (0xFE59, Bt::Open), (0xFE5A, Bt::Close), (0xFE5B, Bt::Open), (0xFE5C, Bt::Close), (0xFE5D, Bt::Open),
    (0xFE5E, Bt::Close), (0xFF08, Bt::Open), (0xFF09, Bt::Close), (0xFF3B, Bt::Open), (0xFF3D, Bt::Close),
    (0xFF5B, Bt::Open), (0xFF5D, Bt::Close), (0xFF5F, Bt::Open), (0xFF60, Bt::Close),
];
