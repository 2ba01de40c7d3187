// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

pub(crate) static COMBINING_CLASS: &[(u32, u8)] = &[
    (0x0, 0), (0x300, 230), (0x315, 232), (0x316, 220), (0x31A, 232), (0x31B, 216), (0x31C, 220), (0x321, 202),
    (0x323, 220), (0x327, 202), (0x329, 220), (0x334, 1), (0x339, 220), (0x33D, 230), (0x345, 240), (0x346, 230),
    (0x347, 220), (0x34A, 230), (0x34D, 220), (0x34F, 0), (0x350, 230), (0x353, 220), (0x357, 230), (0x358, 232),
    (0x359, 220), (0x35B, 230), (0x35C, 233), (0x35D, 234), (0x35F, 233), (0x360, 234), (0x362, 233), (0x363, 230),
    (0x370, 0), (0x483, 230), (0x488, 0), (0x591, 220), (0x592, 230), (0x596, 220), (0x597, 230), (0x59A, 222),
    (0x59B, 220), (0x59C, 230), (0x5A2, 220), (0x5A8, 230), (0x5AA, 220), (0x5AB, 230), (0x5AD, 222), (0x5AE, 228),
    (0x5AF, 230), (0x5B0, 10), (0x5B1, 11), (0x5B2, 12), (0x5B3, 13), (0x5B4, 14), (0x5B5, 15), (0x5B6, 16),
    (0x5B7, 17), (0x5B8, 18), (0x5B9, 19), (0x5BB, 20), (0x5BC, 21), (0x5BD, 22), (0x5BE, 0), (0x5BF, 23),
    (0x5C0, 0), (0x5C1, 24), (0x5C2, 25), (0x5C3, 0), (0x5C4, 230), (0x5C5, 220), (0x5C6, 0), (0x5C7, 18),
    (0x5C8, 0), (0x610, 230), (0x618, 30), (0x619, 31), (0x61A, 32), (0x61B, 0), (0x64B, 27), (0x64C, 28),
    (0x64D, 29), (0x64E, 30), (0x64F, 31), (0x650, 32), (0x651, 33), (0x652, 34), (0x653, 230), (0x655, 220),
    (0x657, 230), (0x65C, 220), (0x65D, 230), (0x65F, 220), (0x660, 0), (0x670, 35), (0x671, 0), (0x6D6, 230),
    (0x6DD, 0), (0x6DF, 230), (0x6E3, 220), (0x6E4, 230), (0x6E5, 0), (0x6E7, 230), (0x6E9, 0), (0x6EA, 220),
    (0x6EB, 230), (0x6ED, 220), (0x6EE, 0), (0x711, 36), (0x712, 0), (0x730, 230), (0x731, 220), (0x732, 230),
    (0x734, 220), (0x735, 230), (0x737, 220), (0x73A, 230), (0x73B, 220), (0x73D, 230), (0x73E, 220), (0x73F, 230),
    (0x742, 220), (0x743, 230), (0x744, 220), (0x745, 230), (0x746, 220), (0x747, 230), (0x748, 220), (0x749, 230),
    (0x74B, 0), (0x7EB, 230), (0x7F2, 220), (0x7F3, 230), (0x7F4, 0), (0x7FD, 220), (0x7FE, 0), (0x816, 230),
    (0x81A, 0), (0x81B, 230), (0x824, 0), (0x825, 230), (0x828, 0), (0x829, 230), (0x82E, 0), (0x859, 220),
    (0x85C, 0), (0x898, 230), (0x899, 220), (0x89C, 230), (0x8A0, 0), (0x8CA, 230), (0x8CF, 220), (0x8D4, 230),
    (0x8E2, 0), (0x8E3, 220), (0x8E4, 230), (0x8E6, 220), (0x8E7, 230), (0x8E9, 220), (0x8EA, 230), (0x8ED, 220),
    (0x8F0, 27), (0x8F1, 28), (0x8F2, 29), (0x8F3, 230), (0x8F6, 220), (0x8F7, 230), (0x8F9, 220), (0x8FB, 230),
    (0x900, 0), (0x93C, 7), (0x93D, 0), (0x94D, 9), (0x94E, 0), (0x951, 230), (0x952, 220), (0x953, 230),
    (0x955, 0), (0x9BC, 7), (0x9BD, 0), (0x9CD, 9), (0x9CE, 0), (0x9FE, 230), (0x9FF, 0), (0xA3C, 7),
    (0xA3D, 0), (0xA4D, 9), (0xA4E, 0), (0xABC, 7), (0xABD, 0), (0xACD, 9), (0xACE, 0), (0xB3C, 7),
    (0xB3D, 0), (0xB4D, 9), (0xB4E, 0), (0xBCD, 9), (0xBCE, 0), (0xC3C, 7), (0xC3D, 0), (0xC4D, 9),
    (0xC4E, 0), (0xC55, 84), (0xC56, 91), (0xC57, 0), (0xCBC, 7), (0xCBD, 0), (0xCCD, 9), (0xCCE, 0),
    (0xD3B, 9), (0xD3D, 0), (0xD4D, 9), (0xD4E, 0), (0xDCA, 9), (0xDCB, 0), (0xE38, 103), (0xE3A, 9),
    (0xE3B, 0), (0xE48, 107), (0xE4C, 0), (0xEB8, 118), (0xEBA, 9), (0xEBB, 0), (0xEC8, 122), (0xECC, 0),
    (0xF18, 220), (0xF1A, 0), (0xF35, 220), (0xF36, 0), (0xF37, 220), (0xF38, 0), (0xF39, 216), (0xF3A, 0),
    (0xF71, 129), (0xF72, 130), (0xF73, 0), (0xF74, 132), (0xF75, 0), (0xF7A, 130), (0xF7E, 0), (0xF80, 130),
    (0xF81, 0), (0xF82, 230), (0xF84, 9), (0xF85, 0), (0xF86, 230), (0xF88, 0), (0xFC6, 220), (0xFC7, 0),
    (0x1037, 7), (0x1038, 0), (0x1039, 9), (0x103B, 0), (0x108D, 220), (0x108E, 0), (0x135D, 230), (0x1360, 0),
    (0x1714, 9), (0x1716, 0), (0x1734, 9), (0x1735, 0), (0x17D2, 9), (0x17D3, 0), (0x17DD, 230), (0x17DE, 0),
    (0x18A9, 228), (0x18AA, 0), (0x1939, 222), (0x193A, 230), (0x193B, 220), (0x193C, 0), (0x1A17, 230), (0x1A18, 220),
    (0x1A19, 0), (0x1A60, 9), (0x1A61, 0), (0x1A75, 230), (0x1A7D, 0), (0x1A7F, 220), (0x1A80, 0), (0x1AB0, 230),
    (0x1AB5, 220), (0x1ABB, 230), (0x1ABD, 220), (0x1ABE, 0), (0x1ABF, 220), (0x1AC1, 230), (0x1AC3, 220), (0x1AC5, 230),
    (0x1ACA, 220), (0x1ACB, 230), (0x1ACF, 0), (0x1B34, 7), (0x1B35, 0), (0x1B44, 9), (0x1B45, 0), (0x1B6B, 230),
    (0x1B6C, 220), (0x1B6D, 230), (0x1B74, 0), (0x1BAA, 9), (0x1BAC, 0), (0x1BE6, 7), (0x1BE7, 0), (0x1BF2, 9),
    (0x1BF4, 0), (0x1C37, 7), (0x1C38, 0), (0x1CD0, 230), (0x1CD3, 0), (0x1CD4, 1), (0x1CD5, 220), (0x1CDA, 230),
    (0x1CDC, 220), (0x1CE0, 230), (0x1CE1, 0), (0x1CE2, 1), (0x1CE9, 0), (0x1CED, 220), (0x1CEE, 0), (0x1CF4, 230),
    (0x1CF5, 0), (0x1CF8, 230), (0x1CFA, 0), (0x1DC0, 230), (0x1DC2, 220), (0x1DC3, 230), (0x1DCA, 220), (0x1DCB, 230),
    (0x1DCD, 234), (0x1DCE, 214), (0x1DCF, 220), (0x1DD0, 202), (0x1DD1, 230), (0x1DF6, 232), (0x1DF7, 228), (0x1DF9, 220),
    (0x1DFA, 218), (0x1DFB, 230), (0x1DFC, 233), (0x1DFD, 220), (0x1DFE, 230), (0x1DFF, 220), (0x1E00, 0), (0x20D0, 230),
    (0x20D2, 1), (0x20D4, 230), (0x20D8, 1), (0x20DB, 230), (0x20DD, 0), (0x20E1, 230), (0x20E2, 0), (0x20E5, 1),
    (0x20E7, 230), (0x20E8, 220), (0x20E9, 230), (0x20EA, 1), (0x20EC, 220), (0x20F0, 230), (0x20F1, 0), (0x2CEF, 230),
    (0x2CF2, 0), (0x2D7F, 9), (0x2D80, 0), (0x2DE0, 230), (0x2E00, 0), (0x302A, 218), (0x302B, 228), (0x302C, 232),
    (0x302D, 222), (0x302E, 224), (0x3030, 0), (0x3099, 8), (0x309B, 0), (0xA66F, 230), (0xA670, 0), (0xA674, 230),
    (0xA67E, 0), (0xA69E, 230), (0xA6A0, 0), (0xA6F0, 230), (0xA6F2, 0), (0xA806, 9), (0xA807, 0), (0xA82C, 9),
    (0xA82D, 0), (0xA8C4, 9), (0xA8C5, 0), (0xA8E0, 230), (0xA8F2, 0), (0xA92B, 220), (0xA92E, 0), (0xA953, 9),
    (0xA954, 0), (0xA9B3, 7), (0xA9B4, 0), (0xA9C0, 9), (0xA9C1, 0), (0xAAB0, 230), (0xAAB1, 0), (0xAAB2, 230),
    (0xAAB4, 220), (0xAAB5, 0), (0xAAB7, 230), (0xAAB9, 0), (0xAABE, 230), (0xAAC0, 0), (0xAAC1, 230), (0xAAC2, 0),
    (0xAAF6, 9), (0xAAF7, 0), (0xABED, 9), (0xABEE, 0), (0xFB1E, 26), (0xFB1F, 0), (0xFE20, 230), (0xFE27, 220),
    (0xFE2E, 230), (0xFE30, 0), (0x101FD, 220), (0x101FE, 0), (0x102E0, 220), (0x102E1, 0), (0x10376, 230), (0x1037B, 0),
    (0x10A0D, 220), (0x10A0E, 0), (0x10A0F, 230), (0x10A10, 0), (0x10A38, 230), (0x10A39, 1), (0x10A3A, 220), (0x10A3B, 0),
    (0x10A3F, 9), (0x10A40, 0), (0x10AE5, 230), (0x10AE6, 220), (0x10AE7, 0), (0x10D24, 230), (0x10D28, 0), (0x10EAB, 230),
    (0x10EAD, 0), (0x10F46, 220), (0x10F48, 230), (0x10F4B, 220), (0x10F4C, 230), (0x10F4D, 220), (0x10F51, 0), (0x10F82, 230),
    (0x10F83, 220), (0x10F84, 230), (0x10F85, 220), (0x10F86, 0), (0x11046, 9), (0x11047, 0), (0x11070, 9), (0x11071, 0),
    (0x1107F, 9), (0x11080, 0), (0x110B9, 9), (0x110BA, 7), (0x110BB, 0), (0x11100, 230), (0x11103, 0), (0x11133, 9),
    (0x11135, 0), (0x11173, 7), (0x11174, 0), (0x111C0, 9), (0x111C1, 0), (0x111CA, 7), (0x111CB, 0), (0x11235, 9),
    (0x11236, 7), (0x11237, 0), (0x112E9, 7), (0x112EA, 9), (0x112EB, 0), (0x1133B, 7), (0x1133D, 0), (0x1134D, 9),
    (0x1134E, 0), (0x11366, 230), (0x1136D, 0), (0x11370, 230), (0x11375, 0), (0x11442, 9), (0x11443, 0), (0x11446, 7),
    (0x11447, 0), (0x1145E, 230), (0x1145F, 0), (0x114C2, 9), (0x114C3, 7), (0x114C4, 0), (0x115BF, 9), (0x115C0, 7),
    (0x115C1, 0), (0x1163F, 9), (0x11640, 0), (0x116B6, 9), (0x116B7, 7), (0x116B8, 0), (0x1172B, 9), (0x1172C, 0),
    (0x11839, 9), (0x1183A, 7), (0x1183B, 0), (0x1193D, 9), (0x1193F, 0), (0x11943, 7), (0x11944, 0), (0x119E0, 9),
    (0x119E1, 0), (0x11A34, 9), (0x11A35, 0), (0x11A47, 9), (0x11A48, 0), (0x11A99, 9), (0x11A9A, 0), (0x11C3F, 9),
    (0x11C40, 0), (0x11D42, 7), (0x11D43, 0), (0x11D44, 9), (0x11D46, 0), (0x11D97, 9), (0x11D98, 0), (0x16AF0, 1),
    (0x16AF5, 0), (0x16B30, 230), (0x16B37, 0), (0x16FF0, 6), (0x16FF2, 0), (0x1BC9E, 1), (0x1BC9F, 0), (0x1D165, 216),
    (0x1D167, 1), (0x1D16A, 0), (0x1D16D, 226), (0x1D16E, 216), (0x1D173, 0), (0x1D17B, 220), (0x1D183, 0), (0x1D185, 230),
    (0x1D18A, 220), (0x1D18C, 0), (0x1D1AA, 230), (0x1D1AE, 0), (0x1D242, 230), (0x1D245, 0), (0x1E000, 230), (0x1E007, 0),
    (0x1E008, 230), (0x1E019, 0), (0x1E01B, 230), (0x1E022, 0), (0x1E023, 230), (0x1E025, 0), (0x1E026, 230), (0x1E02B, 0),
    (0x1E130, 230), (0x1E137, 0), (0x1E2AE, 230), (0x1E2AF, 0), (0x1E2EC, 230), (0x1E2F0, 0), (0x1E8D0, 220), (0x1E8D7, 0),
    (0x1E944, 230), (0x1E94A, 7), (0x1E94B, 0),
];

pub(crate) static CANONICAL: &[[u32; 4]] = &[
    [0xC0, 2, 0x41, 0x300], [0xC1, 2, 0x41, 0x301], [0xC2, 2, 0x41, 0x302],
    [0xC3, 2, 0x41, 0x303], [0xC4, 2, 0x41, 0x308], [0xC5, 2, 0x41, 0x30A],
    [0xC7, 2, 0x43, 0x327], [0xC8, 2, 0x45, 0x300], [0xC9, 2, 0x45, 0x301],
    [0xCA, 2, 0x45, 0x302], [0xCB, 2, 0x45, 0x308], [0xCC, 2, 0x49, 0x300],
    [0xCD, 2, 0x49, 0x301], [0xCE, 2, 0x49, 0x302], [0xCF, 2, 0x49, 0x308],
    [0xD1, 2, 0x4E, 0x303], [0xD2, 2, 0x4F, 0x300], [0xD3, 2, 0x4F, 0x301],
    [0xD4, 2, 0x4F, 0x302], [0xD5, 2, 0x4F, 0x303], [0xD6, 2, 0x4F, 0x308],
    [0xD9, 2, 0x55, 0x300], [0xDA, 2, 0x55, 0x301], [0xDB, 2, 0x55, 0x302],
    [0xDC, 2, 0x55, 0x308], [0xDD, 2, 0x59, 0x301], [0xE0, 2, 0x61, 0x300],
    [0xE1, 2, 0x61, 0x301], [0xE2, 2, 0x61, 0x302], [0xE3, 2, 0x61, 0x303],
    [0xE4, 2, 0x61, 0x308], [0xE5, 2, 0x61, 0x30A], [0xE7, 2, 0x63, 0x327],
    [0xE8, 2, 0x65, 0x300], [0xE9, 2, 0x65, 0x301], [0xEA, 2, 0x65, 0x302],
    [0xEB, 2, 0x65, 0x308], [0xEC, 2, 0x69, 0x300], [0xED, 2, 0x69, 0x301],
    [0xEE, 2, 0x69, 0x302], [0xEF, 2, 0x69, 0x308], [0xF1, 2, 0x6E, 0x303],
    [0xF2, 2, 0x6F, 0x300], [0xF3, 2, 0x6F, 0x301], [0xF4, 2, 0x6F, 0x302],
    [0xF5, 2, 0x6F, 0x303], [0xF6, 2, 0x6F, 0x308], [0xF9, 2, 0x75, 0x300],
    [0xFA, 2, 0x75, 0x301], [0xFB, 2, 0x75, 0x302], [0xFC, 2, 0x75, 0x308],
    [0xFD, 2, 0x79, 0x301], [0xFF, 2, 0x79, 0x308], [0x100, 2, 0x41, 0x304],
    [0x101, 2, 0x61, 0x304], [0x102, 2, 0x41, 0x306], [0x103, 2, 0x61, 0x306],
    [0x104, 2, 0x41, 0x328], [0x105, 2, 0x61, 0x328], [0x106, 2, 0x43, 0x301],
    [0x107, 2, 0x63, 0x301], [0x108, 2, 0x43, 0x302], [0x109, 2, 0x63, 0x302],
    [0x10A, 2, 0x43, 0x307], [0x10B, 2, 0x63, 0x307], [0x10C, 2, 0x43, 0x30C],
    [0x10D, 2, 0x63, 0x30C], [0x10E, 2, 0x44, 0x30C], [0x10F, 2, 0x64, 0x30C],
    [0x112, 2, 0x45, 0x304], [0x113, 2, 0x65, 0x304], [0x114, 2, 0x45, 0x306],
    [0x115, 2, 0x65, 0x306], [0x116, 2, 0x45, 0x307], [0x117, 2, 0x65, 0x307],
    [0x118, 2, 0x45, 0x328], [0x119, 2, 0x65, 0x328], [0x11A, 2, 0x45, 0x30C],
    [0x11B, 2, 0x65, 0x30C], [0x11C, 2, 0x47, 0x302], [0x11D, 2, 0x67, 0x302],
    [0x11E, 2, 0x47, 0x306], [0x11F, 2, 0x67, 0x306], [0x120, 2, 0x47, 0x307],
    [0x121, 2, 0x67, 0x307], [0x122, 2, 0x47, 0x327], [0x123, 2, 0x67, 0x327],
    [0x124, 2, 0x48, 0x302], [0x125, 2, 0x68, 0x302], [0x128, 2, 0x49, 0x303],
    [0x129, 2, 0x69, 0x303], [0x12A, 2, 0x49, 0x304], [0x12B, 2, 0x69, 0x304],
    [0x12C, 2, 0x49, 0x306], [0x12D, 2, 0x69, 0x306], [0x12E, 2, 0x49, 0x328],
    [0x12F, 2, 0x69, 0x328], [0x130, 2, 0x49, 0x307], [0x134, 2, 0x4A, 0x302],
    [0x135, 2, 0x6A, 0x302], [0x136, 2, 0x4B, 0x327], [0x137, 2, 0x6B, 0x327],
    [0x139, 2, 0x4C, 0x301], [0x13A, 2, 0x6C, 0x301], [0x13B, 2, 0x4C, 0x327],
    [0x13C, 2, 0x6C, 0x327], [0x13D, 2, 0x4C, 0x30C], [0x13E, 2, 0x6C, 0x30C],
    [0x143, 2, 0x4E, 0x301], [0x144, 2, 0x6E, 0x301], [0x145, 2, 0x4E, 0x327],
    [0x146, 2, 0x6E, 0x327], [0x147, 2, 0x4E, 0x30C], [0x148, 2, 0x6E, 0x30C],
    [0x14C, 2, 0x4F, 0x304], [0x14D, 2, 0x6F, 0x304], [0x14E, 2, 0x4F, 0x306],
    [0x14F, 2, 0x6F, 0x306], [0x150, 2, 0x4F, 0x30B], [0x151, 2, 0x6F, 0x30B],
    [0x154, 2, 0x52, 0x301], [0x155, 2, 0x72, 0x301], [0x156, 2, 0x52, 0x327],
    [0x157, 2, 0x72, 0x327], [0x158, 2, 0x52, 0x30C], [0x159, 2, 0x72, 0x30C],
    [0x15A, 2, 0x53, 0x301], [0x15B, 2, 0x73, 0x301], [0x15C, 2, 0x53, 0x302],
    [0x15D, 2, 0x73, 0x302], [0x15E, 2, 0x53, 0x327], [0x15F, 2, 0x73, 0x327],
    [0x160, 2, 0x53, 0x30C], [0x161, 2, 0x73, 0x30C], [0x162, 2, 0x54, 0x327],
    [0x163, 2, 0x74, 0x327], [0x164, 2, 0x54, 0x30C], [0x165, 2, 0x74, 0x30C],
    [0x168, 2, 0x55, 0x303], [0x169, 2, 0x75, 0x303], [0x16A, 2, 0x55, 0x304],
    [0x16B, 2, 0x75, 0x304], [0x16C, 2, 0x55, 0x306], [0x16D, 2, 0x75, 0x306],
    [0x16E, 2, 0x55, 0x30A], [0x16F, 2, 0x75, 0x30A], [0x170, 2, 0x55, 0x30B],
    [0x171, 2, 0x75, 0x30B], [0x172, 2, 0x55, 0x328], [0x173, 2, 0x75, 0x328],
    [0x174, 2, 0x57, 0x302], [0x175, 2, 0x77, 0x302], [0x176, 2, 0x59, 0x302],
    [0x177, 2, 0x79, 0x302], [0x178, 2, 0x59, 0x308], [0x179, 2, 0x5A, 0x301],
    [0x17A, 2, 0x7A, 0x301], [0x17B, 2, 0x5A, 0x307], [0x17C, 2, 0x7A, 0x307],
    [0x17D, 2, 0x5A, 0x30C], [0x17E, 2, 0x7A, 0x30C], [0x1A0, 2, 0x4F, 0x31B],
    [0x1A1, 2, 0x6F, 0x31B], [0x1AF, 2, 0x55, 0x31B], [0x1B0, 2, 0x75, 0x31B],
    [0x1CD, 2, 0x41, 0x30C], [0x1CE, 2, 0x61, 0x30C], [0x1CF, 2, 0x49, 0x30C],
    [0x1D0, 2, 0x69, 0x30C], [0x1D1, 2, 0x4F, 0x30C], [0x1D2, 2, 0x6F, 0x30C],
    [0x1D3, 2, 0x55, 0x30C], [0x1D4, 2, 0x75, 0x30C], [0x1D5, 2, 0xDC, 0x304],
    [0x1D6, 2, 0xFC, 0x304], [0x1D7, 2, 0xDC, 0x301], [0x1D8, 2, 0xFC, 0x301],
    [0x1D9, 2, 0xDC, 0x30C], [0x1DA, 2, 0xFC, 0x30C], [0x1DB, 2, 0xDC, 0x300],
    [0x1DC, 2, 0xFC, 0x300], [0x1DE, 2, 0xC4, 0x304], [0x1DF, 2, 0xE4, 0x304],
    [0x1E0, 2, 0x226, 0x304], [0x1E1, 2, 0x227, 0x304], [0x1E2, 2, 0xC6, 0x304],
    [0x1E3, 2, 0xE6, 0x304], [0x1E6, 2, 0x47, 0x30C], [0x1E7, 2, 0x67, 0x30C],
    [0x1E8, 2, 0x4B, 0x30C], [0x1E9, 2, 0x6B, 0x30C], [0x1EA, 2, 0x4F, 0x328],
    [0x1EB, 2, 0x6F, 0x328], [0x1EC, 2, 0x1EA, 0x304], [0x1ED, 2, 0x1EB, 0x304],
    [0x1EE, 2, 0x1B7, 0x30C], [0x1EF, 2, 0x292, 0x30C], [0x1F0, 2, 0x6A, 0x30C],
    [0x1F4, 2, 0x47, 0x301], [0x1F5, 2, 0x67, 0x301], [0x1F8, 2, 0x4E, 0x300],
    [0x1F9, 2, 0x6E, 0x300], [0x1FA, 2, 0xC5, 0x301], [0x1FB, 2, 0xE5, 0x301],
    [0x1FC, 2, 0xC6, 0x301], [0x1FD, 2, 0xE6, 0x301], [0x1FE, 2, 0xD8, 0x301],
    [0x1FF, 2, 0xF8, 0x301], [0x200, 2, 0x41, 0x30F], [0x201, 2, 0x61, 0x30F],
    [0x202, 2, 0x41, 0x311], [0x203, 2, 0x61, 0x311], [0x204, 2, 0x45, 0x30F],
    [0x205, 2, 0x65, 0x30F], [0x206, 2, 0x45, 0x311], [0x207, 2, 0x65, 0x311],
    [0x208, 2, 0x49, 0x30F], [0x209, 2, 0x69, 0x30F], [0x20A, 2, 0x49, 0x311],
    [0x20B, 2, 0x69, 0x311], [0x20C, 2, 0x4F, 0x30F], [0x20D, 2, 0x6F, 0x30F],
    [0x20E, 2, 0x4F, 0x311], [0x20F, 2, 0x6F, 0x311], [0x210, 2, 0x52, 0x30F],
    [0x211, 2, 0x72, 0x30F], [0x212, 2, 0x52, 0x311], [0x213, 2, 0x72, 0x311],
    [0x214, 2, 0x55, 0x30F], [0x215, 2, 0x75, 0x30F], [0x216, 2, 0x55, 0x311],
    [0x217, 2, 0x75, 0x311], [0x218, 2, 0x53, 0x326], [0x219, 2, 0x73, 0x326],
    [0x21A, 2, 0x54, 0x326], [0x21B, 2, 0x74, 0x326], [0x21E, 2, 0x48, 0x30C],
    [0x21F, 2, 0x68, 0x30C], [0x226, 2, 0x41, 0x307], [0x227, 2, 0x61, 0x307],
    [0x228, 2, 0x45, 0x327], [0x229, 2, 0x65, 0x327], [0x22A, 2, 0xD6, 0x304],
    [0x22B, 2, 0xF6, 0x304], [0x22C, 2, 0xD5, 0x304], [0x22D, 2, 0xF5, 0x304],
    [0x22E, 2, 0x4F, 0x307], [0x22F, 2, 0x6F, 0x307], [0x230, 2, 0x22E, 0x304],
    [0x231, 2, 0x22F, 0x304], [0x232, 2, 0x59, 0x304], [0x233, 2, 0x79, 0x304],
    [0x340, 1, 0x300, 0x0], [0x341, 1, 0x301, 0x0], [0x343, 1, 0x313, 0x0],
    [0x344, 2, 0x308, 0x301], [0x374, 1, 0x2B9, 0x0], [0x37E, 1, 0x3B, 0x0],
    [0x385, 2, 0xA8, 0x301], [0x386, 2, 0x391, 0x301], [0x387, 1, 0xB7, 0x0],
    [0x388, 2, 0x395, 0x301], [0x389, 2, 0x397, 0x301], [0x38A, 2, 0x399, 0x301],
    [0x38C, 2, 0x39F, 0x301], [0x38E, 2, 0x3A5, 0x301], [0x38F, 2, 0x3A9, 0x301],
    [0x390, 2, 0x3CA, 0x301], [0x3AA, 2, 0x399, 0x308], [0x3AB, 2, 0x3A5, 0x308],
    [0x3AC, 2, 0x3B1, 0x301], [0x3AD, 2, 0x3B5, 0x301], [0x3AE, 2, 0x3B7, 0x301],
    [0x3AF, 2, 0x3B9, 0x301], [0x3B0, 2, 0x3CB, 0x301], [0x3CA, 2, 0x3B9, 0x308],
    [0x3CB, 2, 0x3C5, 0x308], [0x3CC, 2, 0x3BF, 0x301], [0x3CD, 2, 0x3C5, 0x301],
    [0x3CE, 2, 0x3C9, 0x301], [0x3D3, 2, 0x3D2, 0x301], [0x3D4, 2, 0x3D2, 0x308],
    [0x400, 2, 0x415, 0x300], [0x401, 2, 0x415, 0x308], [0x403, 2, 0x413, 0x301],
    [0x407, 2, 0x406, 0x308], [0x40C, 2, 0x41A, 0x301], [0x40D, 2, 0x418, 0x300],
    [0x40E, 2, 0x423, 0x306], [0x419, 2, 0x418, 0x306], [0x439, 2, 0x438, 0x306],
    [0x450, 2, 0x435, 0x300], [0x451, 2, 0x435, 0x308], [0x453, 2, 0x433, 0x301],
    [0x457, 2, 0x456, 0x308], [0x45C, 2, 0x43A, 0x301], [0x45D, 2, 0x438, 0x300],
    [0x45E, 2, 0x443, 0x306], [0x476, 2, 0x474, 0x30F], [0x477, 2, 0x475, 0x30F],
    [0x4C1, 2, 0x416, 0x306], [0x4C2, 2, 0x436, 0x306], [0x4D0, 2, 0x410, 0x306],
    [0x4D1, 2, 0x430, 0x306], [0x4D2, 2, 0x410, 0x308], [0x4D3, 2, 0x430, 0x308],
    [0x4D6, 2, 0x415, 0x306], [0x4D7, 2, 0x435, 0x306], [0x4DA, 2, 0x4D8, 0x308],
    [0x4DB, 2, 0x4D9, 0x308], [0x4DC, 2, 0x416, 0x308], [0x4DD, 2, 0x436, 0x308],
    [0x4DE, 2, 0x417, 0x308], [0x4DF, 2, 0x437, 0x308], [0x4E2, 2, 0x418, 0x304],
    [0x4E3, 2, 0x438, 0x304], [0x4E4, 2, 0x418, 0x308], [0x4E5, 2, 0x438, 0x308],
    [0x4E6, 2, 0x41E, 0x308], [0x4E7, 2, 0x43E, 0x308], [0x4EA, 2, 0x4E8, 0x308],
    [0x4EB, 2, 0x4E9, 0x308], [0x4EC, 2, 0x42D, 0x308], [0x4ED, 2, 0x44D, 0x308],
    [0x4EE, 2, 0x423, 0x304], [0x4EF, 2, 0x443, 0x304], [0x4F0, 2, 0x423, 0x308],
    [0x4F1, 2, 0x443, 0x308], [0x4F2, 2, 0x423, 0x30B], [0x4F3, 2, 0x443, 0x30B],
    [0x4F4, 2, 0x427, 0x308], [0x4F5, 2, 0x447, 0x308], [0x4F8, 2, 0x42B, 0x308],
    [0x4F9, 2, 0x44B, 0x308], [0x622, 2, 0x627, 0x653], [0x623, 2, 0x627, 0x654],
    [0x624, 2, 0x648, 0x654], [0x625, 2, 0x627, 0x655], [0x626, 2, 0x64A, 0x654],
    [0x6C0, 2, 0x6D5, 0x654], [0x6C2, 2, 0x6C1, 0x654], [0x6D3, 2, 0x6D2, 0x654],
    [0x929, 2, 0x928, 0x93C], [0x931, 2, 0x930, 0x93C], [0x934, 2, 0x933, 0x93C],
    [0x958, 2, 0x915, 0x93C], [0x959, 2, 0x916, 0x93C], [0x95A, 2, 0x917, 0x93C],
    [0x95B, 2, 0x91C, 0x93C], [0x95C, 2, 0x921, 0x93C], [0x95D, 2, 0x922, 0x93C],
    [0x95E, 2, 0x92B, 0x93C], [0x95F, 2, 0x92F, 0x93C], [0x9CB, 2, 0x9C7, 0x9BE],
    [0x9CC, 2, 0x9C7, 0x9D7], [0x9DC, 2, 0x9A1, 0x9BC], [0x9DD, 2, 0x9A2, 0x9BC],
    [0x9DF, 2, 0x9AF, 0x9BC], [0xA33, 2, 0xA32, 0xA3C], [0xA36, 2, 0xA38, 0xA3C],
    [0xA59, 2, 0xA16, 0xA3C], [0xA5A, 2, 0xA17, 0xA3C], [0xA5B, 2, 0xA1C, 0xA3C],
    [0xA5E, 2, 0xA2B, 0xA3C], [0xB48, 2, 0xB47, 0xB56], [0xB4B, 2, 0xB47, 0xB3E],
    [0xB4C, 2, 0xB47, 0xB57], [0xB5C, 2, 0xB21, 0xB3C], [0xB5D, 2, 0xB22, 0xB3C],
    [0xB94, 2, 0xB92, 0xBD7], [0xBCA, 2, 0xBC6, 0xBBE], [0xBCB, 2, 0xBC7, 0xBBE],
    [0xBCC, 2, 0xBC6, 0xBD7], [0xC48, 2, 0xC46, 0xC56], [0xCC0, 2, 0xCBF, 0xCD5],
    [0xCC7, 2, 0xCC6, 0xCD5], [0xCC8, 2, 0xCC6, 0xCD6], [0xCCA, 2, 0xCC6, 0xCC2],
    [0xCCB, 2, 0xCCA, 0xCD5], [0xD4A, 2, 0xD46, 0xD3E], [0xD4B, 2, 0xD47, 0xD3E],
    [0xD4C, 2, 0xD46, 0xD57], [0xDDA, 2, 0xDD9, 0xDCA], [0xDDC, 2, 0xDD9, 0xDCF],
    [0xDDD, 2, 0xDDC, 0xDCA], [0xDDE, 2, 0xDD9, 0xDDF], [0xF43, 2, 0xF42, 0xFB7],
    [0xF4D, 2, 0xF4C, 0xFB7], [0xF52, 2, 0xF51, 0xFB7], [0xF57, 2, 0xF56, 0xFB7],
    [0xF5C, 2, 0xF5B, 0xFB7], [0xF69, 2, 0xF40, 0xFB5], [0xF73, 2, 0xF71, 0xF72],
    [0xF75, 2, 0xF71, 0xF74], [0xF76, 2, 0xFB2, 0xF80], [0xF78, 2, 0xFB3, 0xF80],
    [0xF81, 2, 0xF71, 0xF80], [0xF93, 2, 0xF92, 0xFB7], [0xF9D, 2, 0xF9C, 0xFB7],
    [0xFA2, 2, 0xFA1, 0xFB7], [0xFA7, 2, 0xFA6, 0xFB7], [0xFAC, 2, 0xFAB, 0xFB7],
    [0xFB9, 2, 0xF90, 0xFB5], [0x1026, 2, 0x1025, 0x102E], [0x1B06, 2, 0x1B05, 0x1B35],
    [0x1B08, 2, 0x1B07, 0x1B35], [0x1B0A, 2, 0x1B09, 0x1B35], [0x1B0C, 2, 0x1B0B, 0x1B35],
    [0x1B0E, 2, 0x1B0D, 0x1B35], [0x1B12, 2, 0x1B11, 0x1B35], [0x1B3B, 2, 0x1B3A, 0x1B35],
    [0x1B3D, 2, 0x1B3C, 0x1B35], [0x1B40, 2, 0x1B3E, 0x1B35], [0x1B41, 2, 0x1B3F, 0x1B35],
    [0x1B43, 2, 0x1B42, 0x1B35], [0x1E00, 2, 0x41, 0x325], [0x1E01, 2, 0x61, 0x325],
    [0x1E02, 2, 0x42, 0x307], [0x1E03, 2, 0x62, 0x307], [0x1E04, 2, 0x42, 0x323],
    [0x1E05, 2, 0x62, 0x323], [0x1E06, 2, 0x42, 0x331], [0x1E07, 2, 0x62, 0x331],
    [0x1E08, 2, 0xC7, 0x301], [0x1E09, 2, 0xE7, 0x301], [0x1E0A, 2, 0x44, 0x307],
    [0x1E0B, 2, 0x64, 0x307], [0x1E0C, 2, 0x44, 0x323], [0x1E0D, 2, 0x64, 0x323],
    [0x1E0E, 2, 0x44, 0x331], [0x1E0F, 2, 0x64, 0x331], [0x1E10, 2, 0x44, 0x327],
    [0x1E11, 2, 0x64, 0x327], [0x1E12, 2, 0x44, 0x32D], [0x1E13, 2, 0x64, 0x32D],
    [0x1E14, 2, 0x112, 0x300], [0x1E15, 2, 0x113, 0x300], [0x1E16, 2, 0x112, 0x301],
    [0x1E17, 2, 0x113, 0x301], [0x1E18, 2, 0x45, 0x32D], [0x1E19, 2, 0x65, 0x32D],
    [0x1E1A, 2, 0x45, 0x330], [0x1E1B, 2, 0x65, 0x330], [0x1E1C, 2, 0x228, 0x306],
    [0x1E1D, 2, 0x229, 0x306], [0x1E1E, 2, 0x46, 0x307], [0x1E1F, 2, 0x66, 0x307],
    [0x1E20, 2, 0x47, 0x304], [0x1E21, 2, 0x67, 0x304], [0x1E22, 2, 0x48, 0x307],
    [0x1E23, 2, 0x68, 0x307], [0x1E24, 2, 0x48, 0x323], [0x1E25, 2, 0x68, 0x323],
    [0x1E26, 2, 0x48, 0x308], [0x1E27, 2, 0x68, 0x308], [0x1E28, 2, 0x48, 0x327],
    [0x1E29, 2, 0x68, 0x327], [0x1E2A, 2, 0x48, 0x32E], [0x1E2B, 2, 0x68, 0x32E],
    [0x1E2C, 2, 0x49, 0x330], [0x1E2D, 2, 0x69, 0x330], [0x1E2E, 2, 0xCF, 0x301],
    [0x1E2F, 2, 0xEF, 0x301], [0x1E30, 2, 0x4B, 0x301], [0x1E31, 2, 0x6B, 0x301],
    [0x1E32, 2, 0x4B, 0x323], [0x1E33, 2, 0x6B, 0x323], [0x1E34, 2, 0x4B, 0x331],
    [0x1E35, 2, 0x6B, 0x331], [0x1E36, 2, 0x4C, 0x323], [0x1E37, 2, 0x6C, 0x323],
    [0x1E38, 2, 0x1E36, 0x304], [0x1E39, 2, 0x1E37, 0x304], [0x1E3A, 2, 0x4C, 0x331],
    [0x1E3B, 2, 0x6C, 0x331], [0x1E3C, 2, 0x4C, 0x32D], [0x1E3D, 2, 0x6C, 0x32D],
    [0x1E3E, 2, 0x4D, 0x301], [0x1E3F, 2, 0x6D, 0x301], [0x1E40, 2, 0x4D, 0x307],
    [0x1E41, 2, 0x6D, 0x307], [0x1E42, 2, 0x4D, 0x323], [0x1E43, 2, 0x6D, 0x323],
    [0x1E44, 2, 0x4E, 0x307], [0x1E45, 2, 0x6E, 0x307], [0x1E46, 2, 0x4E, 0x323],
    [0x1E47, 2, 0x6E, 0x323], [0x1E48, 2, 0x4E, 0x331], [0x1E49, 2, 0x6E, 0x331],
    [0x1E4A, 2, 0x4E, 0x32D], [0x1E4B, 2, 0x6E, 0x32D], [0x1E4C, 2, 0xD5, 0x301],
    [0x1E4D, 2, 0xF5, 0x301], [0x1E4E, 2, 0xD5, 0x308], [0x1E4F, 2, 0xF5, 0x308],
    [0x1E50, 2, 0x14C, 0x300], [0x1E51, 2, 0x14D, 0x300], [0x1E52, 2, 0x14C, 0x301],
    [0x1E53, 2, 0x14D, 0x301], [0x1E54, 2, 0x50, 0x301], [0x1E55, 2, 0x70, 0x301],
    [0x1E56, 2, 0x50, 0x307], [0x1E57, 2, 0x70, 0x307], [0x1E58, 2, 0x52, 0x307],
    [0x1E59, 2, 0x72, 0x307], [0x1E5A, 2, 0x52, 0x323], [0x1E5B, 2, 0x72, 0x323],
    [0x1E5C, 2, 0x1E5A, 0x304], [0x1E5D, 2, 0x1E5B, 0x304], [0x1E5E, 2, 0x52, 0x331],
    [0x1E5F, 2, 0x72, 0x331], [0x1E60, 2, 0x53, 0x307], [0x1E61, 2, 0x73, 0x307],
    [0x1E62, 2, 0x53, 0x323], [0x1E63, 2, 0x73, 0x323], [0x1E64, 2, 0x15A, 0x307],
    [0x1E65, 2, 0x15B, 0x307], [0x1E66, 2, 0x160, 0x307], [0x1E67, 2, 0x161, 0x307],
    [0x1E68, 2, 0x1E62, 0x307], [0x1E69, 2, 0x1E63, 0x307], [0x1E6A, 2, 0x54, 0x307],
    [0x1E6B, 2, 0x74, 0x307], [0x1E6C, 2, 0x54, 0x323], [0x1E6D, 2, 0x74, 0x323],
    [0x1E6E, 2, 0x54, 0x331], [0x1E6F, 2, 0x74, 0x331], [0x1E70, 2, 0x54, 0x32D],
    [0x1E71, 2, 0x74, 0x32D], [0x1E72, 2, 0x55, 0x324], [0x1E73, 2, 0x75, 0x324],
    [0x1E74, 2, 0x55, 0x330], [0x1E75, 2, 0x75, 0x330], [0x1E76, 2, 0x55, 0x32D],
    [0x1E77, 2, 0x75, 0x32D], [0x1E78, 2, 0x168, 0x301], [0x1E79, 2, 0x169, 0x301],
    [0x1E7A, 2, 0x16A, 0x308], [0x1E7B, 2, 0x16B, 0x308], [0x1E7C, 2, 0x56, 0x303],
    [0x1E7D, 2, 0x76, 0x303], [0x1E7E, 2, 0x56, 0x323], [0x1E7F, 2, 0x76, 0x323],
    [0x1E80, 2, 0x57, 0x300], [0x1E81, 2, 0x77, 0x300], [0x1E82, 2, 0x57, 0x301],
    [0x1E83, 2, 0x77, 0x301], [0x1E84, 2, 0x57, 0x308], [0x1E85, 2, 0x77, 0x308],
    [0x1E86, 2, 0x57, 0x307], [0x1E87, 2, 0x77, 0x307], [0x1E88, 2, 0x57, 0x323],
    [0x1E89, 2, 0x77, 0x323], [0x1E8A, 2, 0x58, 0x307], [0x1E8B, 2, 0x78, 0x307],
    [0x1E8C, 2, 0x58, 0x308], [0x1E8D, 2, 0x78, 0x308], [0x1E8E, 2, 0x59, 0x307],
    [0x1E8F, 2, 0x79, 0x307], [0x1E90, 2, 0x5A, 0x302], [0x1E91, 2, 0x7A, 0x302],
    [0x1E92, 2, 0x5A, 0x323], [0x1E93, 2, 0x7A, 0x323], [0x1E94, 2, 0x5A, 0x331],
    [0x1E95, 2, 0x7A, 0x331], [0x1E96, 2, 0x68, 0x331], [0x1E97, 2, 0x74, 0x308],
    [0x1E98, 2, 0x77, 0x30A], [0x1E99, 2, 0x79, 0x30A], [0x1E9B, 2, 0x17F, 0x307],
    [0x1EA0, 2, 0x41, 0x323], [0x1EA1, 2, 0x61, 0x323], [0x1EA2, 2, 0x41, 0x309],
    [0x1EA3, 2, 0x61, 0x309], [0x1EA4, 2, 0xC2, 0x301], [0x1EA5, 2, 0xE2, 0x301],
    [0x1EA6, 2, 0xC2, 0x300], [0x1EA7, 2, 0xE2, 0x300], [0x1EA8, 2, 0xC2, 0x309],
    [0x1EA9, 2, 0xE2, 0x309], [0x1EAA, 2, 0xC2, 0x303], [0x1EAB, 2, 0xE2, 0x303],
    [0x1EAC, 2, 0x1EA0, 0x302], [0x1EAD, 2, 0x1EA1, 0x302], [0x1EAE, 2, 0x102, 0x301],
    [0x1EAF, 2, 0x103, 0x301], [0x1EB0, 2, 0x102, 0x300], [0x1EB1, 2, 0x103, 0x300],
    [0x1EB2, 2, 0x102, 0x309], [0x1EB3, 2, 0x103, 0x309], [0x1EB4, 2, 0x102, 0x303],
    [0x1EB5, 2, 0x103, 0x303], [0x1EB6, 2, 0x1EA0, 0x306], [0x1EB7, 2, 0x1EA1, 0x306],
    [0x1EB8, 2, 0x45, 0x323], [0x1EB9, 2, 0x65, 0x323], [0x1EBA, 2, 0x45, 0x309],
    [0x1EBB, 2, 0x65, 0x309], [0x1EBC, 2, 0x45, 0x303], [0x1EBD, 2, 0x65, 0x303],
    [0x1EBE, 2, 0xCA, 0x301], [0x1EBF, 2, 0xEA, 0x301], [0x1EC0, 2, 0xCA, 0x300],
    [0x1EC1, 2, 0xEA, 0x300], [0x1EC2, 2, 0xCA, 0x309], [0x1EC3, 2, 0xEA, 0x309],
    [0x1EC4, 2, 0xCA, 0x303], [0x1EC5, 2, 0xEA, 0x303], [0x1EC6, 2, 0x1EB8, 0x302],
    [0x1EC7, 2, 0x1EB9, 0x302], [0x1EC8, 2, 0x49, 0x309], [0x1EC9, 2, 0x69, 0x309],
    [0x1ECA, 2, 0x49, 0x323], [0x1ECB, 2, 0x69, 0x323], [0x1ECC, 2, 0x4F, 0x323],
    [0x1ECD, 2, 0x6F, 0x323], [0x1ECE, 2, 0x4F, 0x309], [0x1ECF, 2, 0x6F, 0x309],
    [0x1ED0, 2, 0xD4, 0x301], [0x1ED1, 2, 0xF4, 0x301], [0x1ED2, 2, 0xD4, 0x300],
    [0x1ED3, 2, 0xF4, 0x300], [0x1ED4, 2, 0xD4, 0x309], [0x1ED5, 2, 0xF4, 0x309],
    [0x1ED6, 2, 0xD4, 0x303], [0x1ED7, 2, 0xF4, 0x303], [0x1ED8, 2, 0x1ECC, 0x302],
    [0x1ED9, 2, 0x1ECD, 0x302], [0x1EDA, 2, 0x1A0, 0x301], [0x1EDB, 2, 0x1A1, 0x301],
    [0x1EDC, 2, 0x1A0, 0x300], [0x1EDD, 2, 0x1A1, 0x300], [0x1EDE, 2, 0x1A0, 0x309],
    [0x1EDF, 2, 0x1A1, 0x309], [0x1EE0, 2, 0x1A0, 0x303], [0x1EE1, 2, 0x1A1, 0x303],
    [0x1EE2, 2, 0x1A0, 0x323], [0x1EE3, 2, 0x1A1, 0x323], [0x1EE4, 2, 0x55, 0x323],
    [0x1EE5, 2, 0x75, 0x323], [0x1EE6, 2, 0x55, 0x309], [0x1EE7, 2, 0x75, 0x309],
    [0x1EE8, 2, 0x1AF, 0x301], [0x1EE9, 2, 0x1B0, 0x301], [0x1EEA, 2, 0x1AF, 0x300],
    [0x1EEB, 2, 0x1B0, 0x300], [0x1EEC, 2, 0x1AF, 0x309], [0x1EED, 2, 0x1B0, 0x309],
    [0x1EEE, 2, 0x1AF, 0x303], [0x1EEF, 2, 0x1B0, 0x303], [0x1EF0, 2, 0x1AF, 0x323],
    [0x1EF1, 2, 0x1B0, 0x323], [0x1EF2, 2, 0x59, 0x300], [0x1EF3, 2, 0x79, 0x300],
    [0x1EF4, 2, 0x59, 0x323], [0x1EF5, 2, 0x79, 0x323], [0x1EF6, 2, 0x59, 0x309],
    [0x1EF7, 2, 0x79, 0x309], [0x1EF8, 2, 0x59, 0x303], [0x1EF9, 2, 0x79, 0x303],
    [0x1F00, 2, 0x3B1, 0x313], [0x1F01, 2, 0x3B1, 0x314], [0x1F02, 2, 0x1F00, 0x300],
    [0x1F03, 2, 0x1F01, 0x300], [0x1F04, 2, 0x1F00, 0x301], [0x1F05, 2, 0x1F01, 0x301],
    [0x1F06, 2, 0x1F00, 0x342], [0x1F07, 2, 0x1F01, 0x342], [0x1F08, 2, 0x391, 0x313],
    [0x1F09, 2, 0x391, 0x314], [0x1F0A, 2, 0x1F08, 0x300], [0x1F0B, 2, 0x1F09, 0x300],
    [0x1F0C, 2, 0x1F08, 0x301], [0x1F0D, 2, 0x1F09, 0x301], [0x1F0E, 2, 0x1F08, 0x342],
    [0x1F0F, 2, 0x1F09, 0x342], [0x1F10, 2, 0x3B5, 0x313], [0x1F11, 2, 0x3B5, 0x314],
    [0x1F12, 2, 0x1F10, 0x300], [0x1F13, 2, 0x1F11, 0x300], [0x1F14, 2, 0x1F10, 0x301],
    [0x1F15, 2, 0x1F11, 0x301], [0x1F18, 2, 0x395, 0x313], [0x1F19, 2, 0x395, 0x314],
    [0x1F1A, 2, 0x1F18, 0x300], [0x1F1B, 2, 0x1F19, 0x300], [0x1F1C, 2, 0x1F18, 0x301],
    [0x1F1D, 2, 0x1F19, 0x301], [0x1F20, 2, 0x3B7, 0x313], [0x1F21, 2, 0x3B7, 0x314],
    [0x1F22, 2, 0x1F20, 0x300], [0x1F23, 2, 0x1F21, 0x300], [0x1F24, 2, 0x1F20, 0x301],
    [0x1F25, 2, 0x1F21, 0x301], [0x1F26, 2, 0x1F20, 0x342], [0x1F27, 2, 0x1F21, 0x342],
    [0x1F28, 2, 0x397, 0x313], [0x1F29, 2, 0x397, 0x314], [0x1F2A, 2, 0x1F28, 0x300],
    [0x1F2B, 2, 0x1F29, 0x300], [0x1F2C, 2, 0x1F28, 0x301], [0x1F2D, 2, 0x1F29, 0x301],
    [0x1F2E, 2, 0x1F28, 0x342], [0x1F2F, 2, 0x1F29, 0x342], [0x1F30, 2, 0x3B9, 0x313],
    [0x1F31, 2, 0x3B9, 0x314], [0x1F32, 2, 0x1F30, 0x300], [0x1F33, 2, 0x1F31, 0x300],
    [0x1F34, 2, 0x1F30, 0x301], [0x1F35, 2, 0x1F31, 0x301], [0x1F36, 2, 0x1F30, 0x342],
    [0x1F37, 2, 0x1F31, 0x342], [0x1F38, 2, 0x399, 0x313], [0x1F39, 2, 0x399, 0x314],
    [0x1F3A, 2, 0x1F38, 0x300], [0x1F3B, 2, 0x1F39, 0x300], [0x1F3C, 2, 0x1F38, 0x301],
    [0x1F3D, 2, 0x1F39, 0x301], [0x1F3E, 2, 0x1F38, 0x342], [0x1F3F, 2, 0x1F39, 0x342],
    [0x1F40, 2, 0x3BF, 0x313], [0x1F41, 2, 0x3BF, 0x314], [0x1F42, 2, 0x1F40, 0x300],
    [0x1F43, 2, 0x1F41, 0x300], [0x1F44, 2, 0x1F40, 0x301], [0x1F45, 2, 0x1F41, 0x301],
    [0x1F48, 2, 0x39F, 0x313], [0x1F49, 2, 0x39F, 0x314], [0x1F4A, 2, 0x1F48, 0x300],
    [0x1F4B, 2, 0x1F49, 0x300], [0x1F4C, 2, 0x1F48, 0x301], [0x1F4D, 2, 0x1F49, 0x301],
    [0x1F50, 2, 0x3C5, 0x313], [0x1F51, 2, 0x3C5, 0x314], [0x1F52, 2, 0x1F50, 0x300],
    [0x1F53, 2, 0x1F51, 0x300], [0x1F54, 2, 0x1F50, 0x301], [0x1F55, 2, 0x1F51, 0x301],
    [0x1F56, 2, 0x1F50, 0x342], [0x1F57, 2, 0x1F51, 0x342], [0x1F59, 2, 0x3A5, 0x314],
    [0x1F5B, 2, 0x1F59, 0x300], [0x1F5D, 2, 0x1F59, 0x301], [0x1F5F, 2, 0x1F59, 0x342],
    [0x1F60, 2, 0x3C9, 0x313], [0x1F61, 2, 0x3C9, 0x314], [0x1F62, 2, 0x1F60, 0x300],
    [0x1F63, 2, 0x1F61, 0x300], [0x1F64, 2, 0x1F60, 0x301], [0x1F65, 2, 0x1F61, 0x301],
    [0x1F66, 2, 0x1F60, 0x342], [0x1F67, 2, 0x1F61, 0x342], [0x1F68, 2, 0x3A9, 0x313],
    [0x1F69, 2, 0x3A9, 0x314], [0x1F6A, 2, 0x1F68, 0x300], [0x1F6B, 2, 0x1F69, 0x300],
    [0x1F6C, 2, 0x1F68, 0x301], [0x1F6D, 2, 0x1F69, 0x301], [0x1F6E, 2, 0x1F68, 0x342],
    [0x1F6F, 2, 0x1F69, 0x342], [0x1F70, 2, 0x3B1, 0x300], [0x1F71, 1, 0x3AC, 0x0],
    [0x1F72, 2, 0x3B5, 0x300], [0x1F73, 1, 0x3AD, 0x0], [0x1F74, 2, 0x3B7, 0x300],
    [0x1F75, 1, 0x3AE, 0x0], [0x1F76, 2, 0x3B9, 0x300], [0x1F77, 1, 0x3AF, 0x0],
    [0x1F78, 2, 0x3BF, 0x300], [0x1F79, 1, 0x3CC, 0x0], [0x1F7A, 2, 0x3C5, 0x300],
    [0x1F7B, 1, 0x3CD, 0x0], [0x1F7C, 2, 0x3C9, 0x300], [0x1F7D, 1, 0x3CE, 0x0],
    [0x1F80, 2, 0x1F00, 0x345], [0x1F81, 2, 0x1F01, 0x345], [0x1F82, 2, 0x1F02, 0x345],
    [0x1F83, 2, 0x1F03, 0x345], [0x1F84, 2, 0x1F04, 0x345], [0x1F85, 2, 0x1F05, 0x345],
    [0x1F86, 2, 0x1F06, 0x345], [0x1F87, 2, 0x1F07, 0x345], [0x1F88, 2, 0x1F08, 0x345],
    [0x1F89, 2, 0x1F09, 0x345], [0x1F8A, 2, 0x1F0A, 0x345], [0x1F8B, 2, 0x1F0B, 0x345],
    [0x1F8C, 2, 0x1F0C, 0x345], [0x1F8D, 2, 0x1F0D, 0x345], [0x1F8E, 2, 0x1F0E, 0x345],
    [0x1F8F, 2, 0x1F0F, 0x345], [0x1F90, 2, 0x1F20, 0x345], [0x1F91, 2, 0x1F21, 0x345],
    [0x1F92, 2, 0x1F22, 0x345], [0x1F93, 2, 0x1F23, 0x345], [0x1F94, 2, 0x1F24, 0x345],
    [0x1F95, 2, 0x1F25, 0x345], [0x1F96, 2, 0x1F26, 0x345], [0x1F97, 2, 0x1F27, 0x345],
    [0x1F98, 2, 0x1F28, 0x345], [0x1F99, 2, 0x1F29, 0x345], [0x1F9A, 2, 0x1F2A, 0x345],
    [0x1F9B, 2, 0x1F2B, 0x345], [0x1F9C, 2, 0x1F2C, 0x345], [0x1F9D, 2, 0x1F2D, 0x345],
    [0x1F9E, 2, 0x1F2E, 0x345], [0x1F9F, 2, 0x1F2F, 0x345], [0x1FA0, 2, 0x1F60, 0x345],
    [0x1FA1, 2, 0x1F61, 0x345], [0x1FA2, 2, 0x1F62, 0x345], [0x1FA3, 2, 0x1F63, 0x345],
    [0x1FA4, 2, 0x1F64, 0x345], [0x1FA5, 2, 0x1F65, 0x345], [0x1FA6, 2, 0x1F66, 0x345],
    [0x1FA7, 2, 0x1F67, 0x345], [0x1FA8, 2, 0x1F68, 0x345], [0x1FA9, 2, 0x1F69, 0x345],
    [0x1FAA, 2, 0x1F6A, 0x345], [0x1FAB, 2, 0x1F6B, 0x345], [0x1FAC, 2, 0x1F6C, 0x345],
    [0x1FAD, 2, 0x1F6D, 0x345], [0x1FAE, 2, 0x1F6E, 0x345], [0x1FAF, 2, 0x1F6F, 0x345],
    [0x1FB0, 2, 0x3B1, 0x306], [0x1FB1, 2, 0x3B1, 0x304], [0x1FB2, 2, 0x1F70, 0x345],
    [0x1FB3, 2, 0x3B1, 0x345], [0x1FB4, 2, 0x3AC, 0x345], [0x1FB6, 2, 0x3B1, 0x342],
    [0x1FB7, 2, 0x1FB6, 0x345], [0x1FB8, 2, 0x391, 0x306], [0x1FB9, 2, 0x391, 0x304],
    [0x1FBA, 2, 0x391, 0x300], [0x1FBB, 1, 0x386, 0x0], [0x1FBC, 2, 0x391, 0x345],
    [0x1FBE, 1, 0x3B9, 0x0], [0x1FC1, 2, 0xA8, 0x342], [0x1FC2, 2, 0x1F74, 0x345],
    [0x1FC3, 2, 0x3B7, 0x345], [0x1FC4, 2, 0x3AE, 0x345], [0x1FC6, 2, 0x3B7, 0x342],
    [0x1FC7, 2, 0x1FC6, 0x345], [0x1FC8, 2, 0x395, 0x300], [0x1FC9, 1, 0x388, 0x0],
    [0x1FCA, 2, 0x397, 0x300], [0x1FCB, 1, 0x389, 0x0], [0x1FCC, 2, 0x397, 0x345],
    [0x1FCD, 2, 0x1FBF, 0x300], [0x1FCE, 2, 0x1FBF, 0x301], [0x1FCF, 2, 0x1FBF, 0x342],
    [0x1FD0, 2, 0x3B9, 0x306], [0x1FD1, 2, 0x3B9, 0x304], [0x1FD2, 2, 0x3CA, 0x300],
    [0x1FD3, 1, 0x390, 0x0], [0x1FD6, 2, 0x3B9, 0x342], [0x1FD7, 2, 0x3CA, 0x342],
    [0x1FD8, 2, 0x399, 0x306], [0x1FD9, 2, 0x399, 0x304], [0x1FDA, 2, 0x399, 0x300],
    [0x1FDB, 1, 0x38A, 0x0], [0x1FDD, 2, 0x1FFE, 0x300], [0x1FDE, 2, 0x1FFE, 0x301],
    [0x1FDF, 2, 0x1FFE, 0x342], [0x1FE0, 2, 0x3C5, 0x306], [0x1FE1, 2, 0x3C5, 0x304],
    [0x1FE2, 2, 0x3CB, 0x300], [0x1FE3, 1, 0x3B0, 0x0], [0x1FE4, 2, 0x3C1, 0x313],
    [0x1FE5, 2, 0x3C1, 0x314], [0x1FE6, 2, 0x3C5, 0x342], [0x1FE7, 2, 0x3CB, 0x342],
    [0x1FE8, 2, 0x3A5, 0x306], [0x1FE9, 2, 0x3A5, 0x304], [0x1FEA, 2, 0x3A5, 0x300],
    [0x1FEB, 1, 0x38E, 0x0], [0x1FEC, 2, 0x3A1, 0x314], [0x1FED, 2, 0xA8, 0x300],
    [0x1FEE, 1, 0x385, 0x0], [0x1FEF, 1, 0x60, 0x0], [0x1FF2, 2, 0x1F7C, 0x345],
    [0x1FF3, 2, 0x3C9, 0x345], [0x1FF4, 2, 0x3CE, 0x345], [0x1FF6, 2, 0x3C9, 0x342],
    [0x1FF7, 2, 0x1FF6, 0x345], [0x1FF8, 2, 0x39F, 0x300], [0x1FF9, 1, 0x38C, 0x0],
    [0x1FFA, 2, 0x3A9, 0x300], [0x1FFB, 1, 0x38F, 0x0], [0x1FFC, 2, 0x3A9, 0x345],
    [0x1FFD, 1, 0xB4, 0x0], [0x2000, 1, 0x2002, 0x0], [0x2001, 1, 0x2003, 0x0],
    [0x2126, 1, 0x3A9, 0x0], [0x212A, 1, 0x4B, 0x0], [0x212B, 1, 0xC5, 0x0],
    [0x219A, 2, 0x2190, 0x338], [0x219B, 2, 0x2192, 0x338], [0x21AE, 2, 0x2194, 0x338],
    [0x21CD, 2, 0x21D0, 0x338], [0x21CE, 2, 0x21D4, 0x338], [0x21CF, 2, 0x21D2, 0x338],
    [0x2204, 2, 0x2203, 0x338], [0x2209, 2, 0x2208, 0x338], [0x220C, 2, 0x220B, 0x338],
    [0x2224, 2, 0x2223, 0x338], [0x2226, 2, 0x2225, 0x338], [0x2241, 2, 0x223C, 0x338],
    [0x2244, 2, 0x2243, 0x338], [0x2247, 2, 0x2245, 0x338], [0x2249, 2, 0x2248, 0x338],
    [0x2260, 2, 0x3D, 0x338], [0x2262, 2, 0x2261, 0x338], [0x226D, 2, 0x224D, 0x338],
    [0x226E, 2, 0x3C, 0x338], [0x226F, 2, 0x3E, 0x338], [0x2270, 2, 0x2264, 0x338],
    [0x2271, 2, 0x2265, 0x338], [0x2274, 2, 0x2272, 0x338], [0x2275, 2, 0x2273, 0x338],
    [0x2278, 2, 0x2276, 0x338], [0x2279, 2, 0x2277, 0x338], [0x2280, 2, 0x227A, 0x338],
    [0x2281, 2, 0x227B, 0x338], [0x2284, 2, 0x2282, 0x338], [0x2285, 2, 0x2283, 0x338],
    [0x2288, 2, 0x2286, 0x338], [0x2289, 2, 0x2287, 0x338], [0x22AC, 2, 0x22A2, 0x338],
    [0x22AD, 2, 0x22A8, 0x338], [0x22AE, 2, 0x22A9, 0x338], [0x22AF, 2, 0x22AB, 0x338],
    [0x22E0, 2, 0x227C, 0x338], [0x22E1, 2, 0x227D, 0x338], [0x22E2, 2, 0x2291, 0x338],
    [0x22E3, 2, 0x2292, 0x338], [0x22EA, 2, 0x22B2, 0x338], [0x22EB, 2, 0x22B3, 0x338],
    [0x22EC, 2, 0x22B4, 0x338], [0x22ED, 2, 0x22B5, 0x338], [0x2329, 1, 0x3008, 0x0],
    [0x232A, 1, 0x3009, 0x0], [0x2ADC, 2, 0x2ADD, 0x338], [0x304C, 2, 0x304B, 0x3099],
    [0x304E, 2, 0x304D, 0x3099], [0x3050, 2, 0x304F, 0x3099], [0x3052, 2, 0x3051, 0x3099],
    [0x3054, 2, 0x3053, 0x3099], [0x3056, 2, 0x3055, 0x3099], [0x3058, 2, 0x3057, 0x3099],
    [0x305A, 2, 0x3059, 0x3099], [0x305C, 2, 0x305B, 0x3099], [0x305E, 2, 0x305D, 0x3099],
    [0x3060, 2, 0x305F, 0x3099], [0x3062, 2, 0x3061, 0x3099], [0x3065, 2, 0x3064, 0x3099],
    [0x3067, 2, 0x3066, 0x3099], [0x3069, 2, 0x3068, 0x3099], [0x3070, 2, 0x306F, 0x3099],
    [0x3071, 2, 0x306F, 0x309A], [0x3073, 2, 0x3072, 0x3099], [0x3074, 2, 0x3072, 0x309A],
    [0x3076, 2, 0x3075, 0x3099], [0x3077, 2, 0x3075, 0x309A], [0x3079, 2, 0x3078, 0x3099],
    [0x307A, 2, 0x3078, 0x309A], [0x307C, 2, 0x307B, 0x3099], [0x307D, 2, 0x307B, 0x309A],
    [0x3094, 2, 0x3046, 0x3099], [0x309E, 2, 0x309D, 0x3099], [0x30AC, 2, 0x30AB, 0x3099],
    [0x30AE, 2, 0x30AD, 0x3099], [0x30B0, 2, 0x30AF, 0x3099], [0x30B2, 2, 0x30B1, 0x3099],
    [0x30B4, 2, 0x30B3, 0x3099], [0x30B6, 2, 0x30B5, 0x3099], [0x30B8, 2, 0x30B7, 0x3099],
    [0x30BA, 2, 0x30B9, 0x3099], [0x30BC, 2, 0x30BB, 0x3099], [0x30BE, 2, 0x30BD, 0x3099],
    [0x30C0, 2, 0x30BF, 0x3099], [0x30C2, 2, 0x30C1, 0x3099], [0x30C5, 2, 0x30C4, 0x3099],
    [0x30C7, 2, 0x30C6, 0x3099], [0x30C9, 2, 0x30C8, 0x3099], [0x30D0, 2, 0x30CF, 0x3099],
    [0x30D1, 2, 0x30CF, 0x309A], [0x30D3, 2, 0x30D2, 0x3099], [0x30D4, 2, 0x30D2, 0x309A],
    [0x30D6, 2, 0x30D5, 0x3099], [0x30D7, 2, 0x30D5, 0x309A], [0x30D9, 2, 0x30D8, 0x3099],
    [0x30DA, 2, 0x30D8, 0x309A], [0x30DC, 2, 0x30DB, 0x3099], [0x30DD, 2, 0x30DB, 0x309A],
    [0x30F4, 2, 0x30A6, 0x3099], [0x30F7, 2, 0x30EF, 0x3099], [0x30F8, 2, 0x30F0, 0x3099],
    [0x30F9, 2, 0x30F1, 0x3099], [0x30FA, 2, 0x30F2, 0x3099], [0x30FE, 2, 0x30FD, 0x3099],
    [0xF900, 1, 0x8C48, 0x0], [0xF901, 1, 0x66F4, 0x0], [0xF902, 1, 0x8ECA, 0x0],
    [0xF903, 1, 0x8CC8, 0x0], [0xF904, 1, 0x6ED1, 0x0], [0xF905, 1, 0x4E32, 0x0],
    [0xF906, 1, 0x53E5, 0x0], [0xF907, 1, 0x9F9C, 0x0], [0xF908, 1, 0x9F9C, 0x0],
    [0xF909, 1, 0x5951, 0x0], [0xF90A, 1, 0x91D1, 0x0], [0xF90B, 1, 0x5587, 0x0],
    [0xF90C, 1, 0x5948, 0x0], [0xF90D, 1, 0x61F6, 0x0], [0xF90E, 1, 0x7669, 0x0],
    [0xF90F, 1, 0x7F85, 0x0], [0xF910, 1, 0x863F, 0x0], [0xF911, 1, 0x87BA, 0x0],
    [0xF912, 1, 0x88F8, 0x0], [0xF913, 1, 0x908F, 0x0], [0xF914, 1, 0x6A02, 0x0],
    [0xF915, 1, 0x6D1B, 0x0], [0xF916, 1, 0x70D9, 0x0], [0xF917, 1, 0x73DE, 0x0],
    [0xF918, 1, 0x843D, 0x0], [0xF919, 1, 0x916A, 0x0], [0xF91A, 1, 0x99F1, 0x0],
    [0xF91B, 1, 0x4E82, 0x0], [0xF91C, 1, 0x5375, 0x0], [0xF91D, 1, 0x6B04, 0x0],
    [0xF91E, 1, 0x721B, 0x0], [0xF91F, 1, 0x862D, 0x0], [0xF920, 1, 0x9E1E, 0x0],
    [0xF921, 1, 0x5D50, 0x0], [0xF922, 1, 0x6FEB, 0x0], [0xF923, 1, 0x85CD, 0x0],
    [0xF924, 1, 0x8964, 0x0], [0xF925, 1, 0x62C9, 0x0], [0xF926, 1, 0x81D8, 0x0],
    [0xF927, 1, 0x881F, 0x0], [0xF928, 1, 0x5ECA, 0x0], [0xF929, 1, 0x6717, 0x0],
    [0xF92A, 1, 0x6D6A, 0x0], [0xF92B, 1, 0x72FC, 0x0], [0xF92C, 1, 0x90CE, 0x0],
    [0xF92D, 1, 0x4F86, 0x0], [0xF92E, 1, 0x51B7, 0x0], [0xF92F, 1, 0x52DE, 0x0],
    [0xF930, 1, 0x64C4, 0x0], [0xF931, 1, 0x6AD3, 0x0], [0xF932, 1, 0x7210, 0x0],
    [0xF933, 1, 0x76E7, 0x0], [0xF934, 1, 0x8001, 0x0], [0xF935, 1, 0x8606, 0x0],
    [0xF936, 1, 0x865C, 0x0], [0xF937, 1, 0x8DEF, 0x0], [0xF938, 1, 0x9732, 0x0],
    [0xF939, 1, 0x9B6F, 0x0], [0xF93A, 1, 0x9DFA, 0x0], [0xF93B, 1, 0x788C, 0x0],
    [0xF93C, 1, 0x797F, 0x0], [0xF93D, 1, 0x7DA0, 0x0], [0xF93E, 1, 0x83C9, 0x0],
    [0xF93F, 1, 0x9304, 0x0], [0xF940, 1, 0x9E7F, 0x0], [0xF941, 1, 0x8AD6, 0x0],
    [0xF942, 1, 0x58DF, 0x0], [0xF943, 1, 0x5F04, 0x0], [0xF944, 1, 0x7C60, 0x0],
    [0xF945, 1, 0x807E, 0x0], [0xF946, 1, 0x7262, 0x0], [0xF947, 1, 0x78CA, 0x0],
    [0xF948, 1, 0x8CC2, 0x0], [0xF949, 1, 0x96F7, 0x0], [0xF94A, 1, 0x58D8, 0x0],
    [0xF94B, 1, 0x5C62, 0x0], [0xF94C, 1, 0x6A13, 0x0], [0xF94D, 1, 0x6DDA, 0x0],
    [0xF94E, 1, 0x6F0F, 0x0], [0xF94F, 1, 0x7D2F, 0x0], [0xF950, 1, 0x7E37, 0x0],
    [0xF951, 1, 0x964B, 0x0], [0xF952, 1, 0x52D2, 0x0], [0xF953, 1, 0x808B, 0x0],
    [0xF954, 1, 0x51DC, 0x0], [0xF955, 1, 0x51CC, 0x0], [0xF956, 1, 0x7A1C, 0x0],
    [0xF957, 1, 0x7DBE, 0x0], [0xF958, 1, 0x83F1, 0x0], [0xF959, 1, 0x9675, 0x0],
    [0xF95A, 1, 0x8B80, 0x0], [0xF95B, 1, 0x62CF, 0x0], [0xF95C, 1, 0x6A02, 0x0],
    [0xF95D, 1, 0x8AFE, 0x0], [0xF95E, 1, 0x4E39, 0x0], [0xF95F, 1, 0x5BE7, 0x0],
    [0xF960, 1, 0x6012, 0x0], [0xF961, 1, 0x7387, 0x0], [0xF962, 1, 0x7570, 0x0],
    [0xF963, 1, 0x5317, 0x0], [0xF964, 1, 0x78FB, 0x0], [0xF965, 1, 0x4FBF, 0x0],
    [0xF966, 1, 0x5FA9, 0x0], [0xF967, 1, 0x4E0D, 0x0], [0xF968, 1, 0x6CCC, 0x0],
    [0xF969, 1, 0x6578, 0x0], [0xF96A, 1, 0x7D22, 0x0], [0xF96B, 1, 0x53C3, 0x0],
    [0xF96C, 1, 0x585E, 0x0], [0xF96D, 1, 0x7701, 0x0], [0xF96E, 1, 0x8449, 0x0],
    [0xF96F, 1, 0x8AAA, 0x0], [0xF970, 1, 0x6BBA, 0x0], [0xF971, 1, 0x8FB0, 0x0],
    [0xF972, 1, 0x6C88, 0x0], [0xF973, 1, 0x62FE, 0x0], [0xF974, 1, 0x82E5, 0x0],
    [0xF975, 1, 0x63A0, 0x0], [0xF976, 1, 0x7565, 0x0], [0xF977, 1, 0x4EAE, 0x0],
    [0xF978, 1, 0x5169, 0x0], [0xF979, 1, 0x51C9, 0x0], [0xF97A, 1, 0x6881, 0x0],
    [0xF97B, 1, 0x7CE7, 0x0], [0xF97C, 1, 0x826F, 0x0], [0xF97D, 1, 0x8AD2, 0x0],
    [0xF97E, 1, 0x91CF, 0x0], [0xF97F, 1, 0x52F5, 0x0], [0xF980, 1, 0x5442, 0x0],
    [0xF981, 1, 0x5973, 0x0], [0xF982, 1, 0x5EEC, 0x0], [0xF983, 1, 0x65C5, 0x0],
    [0xF984, 1, 0x6FFE, 0x0], [0xF985, 1, 0x792A, 0x0], [0xF986, 1, 0x95AD, 0x0],
    [0xF987, 1, 0x9A6A, 0x0], [0xF988, 1, 0x9E97, 0x0], [0xF989, 1, 0x9ECE, 0x0],
    [0xF98A, 1, 0x529B, 0x0], [0xF98B, 1, 0x66C6, 0x0], [0xF98C, 1, 0x6B77, 0x0],
    [0xF98D, 1, 0x8F62, 0x0], [0xF98E, 1, 0x5E74, 0x0], [0xF98F, 1, 0x6190, 0x0],
    [0xF990, 1, 0x6200, 0x0], [0xF991, 1, 0x649A, 0x0], [0xF992, 1, 0x6F23, 0x0],
    [0xF993, 1, 0x7149, 0x0], [0xF994, 1, 0x7489, 0x0], [0xF995, 1, 0x79CA, 0x0],
    [0xF996, 1, 0x7DF4, 0x0], [0xF997, 1, 0x806F, 0x0], [0xF998, 1, 0x8F26, 0x0],
    [0xF999, 1, 0x84EE, 0x0], [0xF99A, 1, 0x9023, 0x0], [0xF99B, 1, 0x934A, 0x0],
    [0xF99C, 1, 0x5217, 0x0], [0xF99D, 1, 0x52A3, 0x0], [0xF99E, 1, 0x54BD, 0x0],
    [0xF99F, 1, 0x70C8, 0x0], [0xF9A0, 1, 0x88C2, 0x0], [0xF9A1, 1, 0x8AAA, 0x0],
    [0xF9A2, 1, 0x5EC9, 0x0], [0xF9A3, 1, 0x5FF5, 0x0], [0xF9A4, 1, 0x637B, 0x0],
    [0xF9A5, 1, 0x6BAE, 0x0], [0xF9A6, 1, 0x7C3E, 0x0], [0xF9A7, 1, 0x7375, 0x0],
    [0xF9A8, 1, 0x4EE4, 0x0], [0xF9A9, 1, 0x56F9, 0x0], [0xF9AA, 1, 0x5BE7, 0x0],
    [0xF9AB, 1, 0x5DBA, 0x0], [0xF9AC, 1, 0x601C, 0x0], [0xF9AD, 1, 0x73B2, 0x0],
    [0xF9AE, 1, 0x7469, 0x0], [0xF9AF, 1, 0x7F9A, 0x0], [0xF9B0, 1, 0x8046, 0x0],
    [0xF9B1, 1, 0x9234, 0x0], [0xF9B2, 1, 0x96F6, 0x0], [0xF9B3, 1, 0x9748, 0x0],
    [0xF9B4, 1, 0x9818, 0x0], [0xF9B5, 1, 0x4F8B, 0x0], [0xF9B6, 1, 0x79AE, 0x0],
    [0xF9B7, 1, 0x91B4, 0x0], [0xF9B8, 1, 0x96B8, 0x0], [0xF9B9, 1, 0x60E1, 0x0],
    [0xF9BA, 1, 0x4E86, 0x0], [0xF9BB, 1, 0x50DA, 0x0], [0xF9BC, 1, 0x5BEE, 0x0],
    [0xF9BD, 1, 0x5C3F, 0x0], [0xF9BE, 1, 0x6599, 0x0], [0xF9BF, 1, 0x6A02, 0x0],
    [0xF9C0, 1, 0x71CE, 0x0], [0xF9C1, 1, 0x7642, 0x0], [0xF9C2, 1, 0x84FC, 0x0],
    [0xF9C3, 1, 0x907C, 0x0], [0xF9C4, 1, 0x9F8D, 0x0], [0xF9C5, 1, 0x6688, 0x0],
    [0xF9C6, 1, 0x962E, 0x0], [0xF9C7, 1, 0x5289, 0x0], [0xF9C8, 1, 0x677B, 0x0],
    [0xF9C9, 1, 0x67F3, 0x0], [0xF9CA, 1, 0x6D41, 0x0], [0xF9CB, 1, 0x6E9C, 0x0],
    [0xF9CC, 1, 0x7409, 0x0], [0xF9CD, 1, 0x7559, 0x0], [0xF9CE, 1, 0x786B, 0x0],
    [0xF9CF, 1, 0x7D10, 0x0], [0xF9D0, 1, 0x985E, 0x0], [0xF9D1, 1, 0x516D, 0x0],
    [0xF9D2, 1, 0x622E, 0x0], [0xF9D3, 1, 0x9678, 0x0], [0xF9D4, 1, 0x502B, 0x0],
    [0xF9D5, 1, 0x5D19, 0x0], [0xF9D6, 1, 0x6DEA, 0x0], [0xF9D7, 1, 0x8F2A, 0x0],
    [0xF9D8, 1, 0x5F8B, 0x0], [0xF9D9, 1, 0x6144, 0x0], [0xF9DA, 1, 0x6817, 0x0],
    [0xF9DB, 1, 0x7387, 0x0], [0xF9DC, 1, 0x9686, 0x0], [0xF9DD, 1, 0x5229, 0x0],
    [0xF9DE, 1, 0x540F, 0x0], [0xF9DF, 1, 0x5C65, 0x0], [0xF9E0, 1, 0x6613, 0x0],
    [0xF9E1, 1, 0x674E, 0x0], [0xF9E2, 1, 0x68A8, 0x0], [0xF9E3, 1, 0x6CE5, 0x0],
    [0xF9E4, 1, 0x7406, 0x0], [0xF9E5, 1, 0x75E2, 0x0], [0xF9E6, 1, 0x7F79, 0x0],
    [0xF9E7, 1, 0x88CF, 0x0], [0xF9E8, 1, 0x88E1, 0x0], [0xF9E9, 1, 0x91CC, 0x0],
    [0xF9EA, 1, 0x96E2, 0x0], [0xF9EB, 1, 0x533F, 0x0], [0xF9EC, 1, 0x6EBA, 0x0],
    [0xF9ED, 1, 0x541D, 0x0], [0xF9EE, 1, 0x71D0, 0x0], [0xF9EF, 1, 0x7498, 0x0],
    [0xF9F0, 1, 0x85FA, 0x0], [0xF9F1, 1, 0x96A3, 0x0], [0xF9F2, 1, 0x9C57, 0x0],
    [0xF9F3, 1, 0x9E9F, 0x0], [0xF9F4, 1, 0x6797, 0x0], [0xF9F5, 1, 0x6DCB, 0x0],
    [0xF9F6, 1, 0x81E8, 0x0], [0xF9F7, 1, 0x7ACB, 0x0], [0xF9F8, 1, 0x7B20, 0x0],
    [0xF9F9, 1, 0x7C92, 0x0], [0xF9FA, 1, 0x72C0, 0x0], [0xF9FB, 1, 0x7099, 0x0],
    [0xF9FC, 1, 0x8B58, 0x0], [0xF9FD, 1, 0x4EC0, 0x0], [0xF9FE, 1, 0x8336, 0x0],
    [0xF9FF, 1, 0x523A, 0x0], [0xFA00, 1, 0x5207, 0x0], [0xFA01, 1, 0x5EA6, 0x0],
    [0xFA02, 1, 0x62D3, 0x0], [0xFA03, 1, 0x7CD6, 0x0], [0xFA04, 1, 0x5B85, 0x0],
    [0xFA05, 1, 0x6D1E, 0x0], [0xFA06, 1, 0x66B4, 0x0], [0xFA07, 1, 0x8F3B, 0x0],
    [0xFA08, 1, 0x884C, 0x0], [0xFA09, 1, 0x964D, 0x0], [0xFA0A, 1, 0x898B, 0x0],
    [0xFA0B, 1, 0x5ED3, 0x0], [0xFA0C, 1, 0x5140, 0x0], [0xFA0D, 1, 0x55C0, 0x0],
    [0xFA10, 1, 0x585A, 0x0], [0xFA12, 1, 0x6674, 0x0], [0xFA15, 1, 0x51DE, 0x0],
    [0xFA16, 1, 0x732A, 0x0], [0xFA17, 1, 0x76CA, 0x0], [0xFA18, 1, 0x793C, 0x0],
    [0xFA19, 1, 0x795E, 0x0], [0xFA1A, 1, 0x7965, 0x0], [0xFA1B, 1, 0x798F, 0x0],
    [0xFA1C, 1, 0x9756, 0x0], [0xFA1D, 1, 0x7CBE, 0x0], [0xFA1E, 1, 0x7FBD, 0x0],
    [0xFA20, 1, 0x8612, 0x0], [0xFA22, 1, 0x8AF8, 0x0], [0xFA25, 1, 0x9038, 0x0],
    [0xFA26, 1, 0x90FD, 0x0], [0xFA2A, 1, 0x98EF, 0x0], [0xFA2B, 1, 0x98FC, 0x0],
    [0xFA2C, 1, 0x9928, 0x0], [0xFA2D, 1, 0x9DB4, 0x0], [0xFA2E, 1, 0x90DE, 0x0],
    [0xFA2F, 1, 0x96B7, 0x0], [0xFA30, 1, 0x4FAE, 0x0], [0xFA31, 1, 0x50E7, 0x0],
    [0xFA32, 1, 0x514D, 0x0], [0xFA33, 1, 0x52C9, 0x0], [0xFA34, 1, 0x52E4, 0x0],
    [0xFA35, 1, 0x5351, 0x0], [0xFA36, 1, 0x559D, 0x0], [0xFA37, 1, 0x5606, 0x0],
    [0xFA38, 1, 0x5668, 0x0], [0xFA39, 1, 0x5840, 0x0], [0xFA3A, 1, 0x58A8, 0x0],
    [0xFA3B, 1, 0x5C64, 0x0], [0xFA3C, 1, 0x5C6E, 0x0], [0xFA3D, 1, 0x6094, 0x0],
    [0xFA3E, 1, 0x6168, 0x0], [0xFA3F, 1, 0x618E, 0x0], [0xFA40, 1, 0x61F2, 0x0],
    [0xFA41, 1, 0x654F, 0x0], [0xFA42, 1, 0x65E2, 0x0], [0xFA43, 1, 0x6691, 0x0],
    [0xFA44, 1, 0x6885, 0x0], [0xFA45, 1, 0x6D77, 0x0], [0xFA46, 1, 0x6E1A, 0x0],
    [0xFA47, 1, 0x6F22, 0x0], [0xFA48, 1, 0x716E, 0x0], [0xFA49, 1, 0x722B, 0x0],
    [0xFA4A, 1, 0x7422, 0x0], [0xFA4B, 1, 0x7891, 0x0], [0xFA4C, 1, 0x793E, 0x0],
    [0xFA4D, 1, 0x7949, 0x0], [0xFA4E, 1, 0x7948, 0x0], [0xFA4F, 1, 0x7950, 0x0],
    [0xFA50, 1, 0x7956, 0x0], [0xFA51, 1, 0x795D, 0x0], [0xFA52, 1, 0x798D, 0x0],
    [0xFA53, 1, 0x798E, 0x0], [0xFA54, 1, 0x7A40, 0x0], [0xFA55, 1, 0x7A81, 0x0],
    [0xFA56, 1, 0x7BC0, 0x0], [0xFA57, 1, 0x7DF4, 0x0], [0xFA58, 1, 0x7E09, 0x0],
    [0xFA59, 1, 0x7E41, 0x0], [0xFA5A, 1, 0x7F72, 0x0], [0xFA5B, 1, 0x8005, 0x0],
    [0xFA5C, 1, 0x81ED, 0x0], [0xFA5D, 1, 0x8279, 0x0], [0xFA5E, 1, 0x8279, 0x0],
    [0xFA5F, 1, 0x8457, 0x0], [0xFA60, 1, 0x8910, 0x0], [0xFA61, 1, 0x8996, 0x0],
    [0xFA62, 1, 0x8B01, 0x0], [0xFA63, 1, 0x8B39, 0x0], [0xFA64, 1, 0x8CD3, 0x0],
    [0xFA65, 1, 0x8D08, 0x0], [0xFA66, 1, 0x8FB6, 0x0], [0xFA67, 1, 0x9038, 0x0],
    [0xFA68, 1, 0x96E3, 0x0], [0xFA69, 1, 0x97FF, 0x0], [0xFA6A, 1, 0x983B, 0x0],
    [0xFA6B, 1, 0x6075, 0x0], [0xFA6C, 1, 0x242EE, 0x0], [0xFA6D, 1, 0x8218, 0x0],
    [0xFA70, 1, 0x4E26, 0x0], [0xFA71, 1, 0x51B5, 0x0], [0xFA72, 1, 0x5168, 0x0],
    [0xFA73, 1, 0x4F80, 0x0], [0xFA74, 1, 0x5145, 0x0], [0xFA75, 1, 0x5180, 0x0],
    [0xFA76, 1, 0x52C7, 0x0], [0xFA77, 1, 0x52FA, 0x0], [0xFA78, 1, 0x559D, 0x0],
    [0xFA79, 1, 0x5555, 0x0], [0xFA7A, 1, 0x5599, 0x0], [0xFA7B, 1, 0x55E2, 0x0],
    [0xFA7C, 1, 0x585A, 0x0], [0xFA7D, 1, 0x58B3, 0x0], [0xFA7E, 1, 0x5944, 0x0],
    [0xFA7F, 1, 0x5954, 0x0], [0xFA80, 1, 0x5A62, 0x0], [0xFA81, 1, 0x5B28, 0x0],
    [0xFA82, 1, 0x5ED2, 0x0], [0xFA83, 1, 0x5ED9, 0x0], [0xFA84, 1, 0x5F69, 0x0],
    [0xFA85, 1, 0x5FAD, 0x0], [0xFA86, 1, 0x60D8, 0x0], [0xFA87, 1, 0x614E, 0x0],
    [0xFA88, 1, 0x6108, 0x0], [0xFA89, 1, 0x618E, 0x0], [0xFA8A, 1, 0x6160, 0x0],
    [0xFA8B, 1, 0x61F2, 0x0], [0xFA8C, 1, 0x6234, 0x0], [0xFA8D, 1, 0x63C4, 0x0],
    [0xFA8E, 1, 0x641C, 0x0], [0xFA8F, 1, 0x6452, 0x0], [0xFA90, 1, 0x6556, 0x0],
    [0xFA91, 1, 0x6674, 0x0], [0xFA92, 1, 0x6717, 0x0], [0xFA93, 1, 0x671B, 0x0],
    [0xFA94, 1, 0x6756, 0x0], [0xFA95, 1, 0x6B79, 0x0], [0xFA96, 1, 0x6BBA, 0x0],
    [0xFA97, 1, 0x6D41, 0x0], [0xFA98, 1, 0x6EDB, 0x0], [0xFA99, 1, 0x6ECB, 0x0],
    [0xFA9A, 1, 0x6F22, 0x0], [0xFA9B, 1, 0x701E, 0x0], [0xFA9C, 1, 0x716E, 0x0],
    [0xFA9D, 1, 0x77A7, 0x0], [0xFA9E, 1, 0x7235, 0x0], [0xFA9F, 1, 0x72AF, 0x0],
    [0xFAA0, 1, 0x732A, 0x0], [0xFAA1, 1, 0x7471, 0x0], [0xFAA2, 1, 0x7506, 0x0],
    [0xFAA3, 1, 0x753B, 0x0], [0xFAA4, 1, 0x761D, 0x0], [0xFAA5, 1, 0x761F, 0x0],
    [0xFAA6, 1, 0x76CA, 0x0], [0xFAA7, 1, 0x76DB, 0x0], [0xFAA8, 1, 0x76F4, 0x0],
    [0xFAA9, 1, 0x774A, 0x0], [0xFAAA, 1, 0x7740, 0x0], [0xFAAB, 1, 0x78CC, 0x0],
    [0xFAAC, 1, 0x7AB1, 0x0], [0xFAAD, 1, 0x7BC0, 0x0], [0xFAAE, 1, 0x7C7B, 0x0],
    [0xFAAF, 1, 0x7D5B, 0x0], [0xFAB0, 1, 0x7DF4, 0x0], [0xFAB1, 1, 0x7F3E, 0x0],
    [0xFAB2, 1, 0x8005, 0x0], [0xFAB3, 1, 0x8352, 0x0], [0xFAB4, 1, 0x83EF, 0x0],
    [0xFAB5, 1, 0x8779, 0x0], [0xFAB6, 1, 0x8941, 0x0], [0xFAB7, 1, 0x8986, 0x0],
    [0xFAB8, 1, 0x8996, 0x0], [0xFAB9, 1, 0x8ABF, 0x0], [0xFABA, 1, 0x8AF8, 0x0],
    [0xFABB, 1, 0x8ACB, 0x0], [0xFABC, 1, 0x8B01, 0x0], [0xFABD, 1, 0x8AFE, 0x0],
    [0xFABE, 1, 0x8AED, 0x0], [0xFABF, 1, 0x8B39, 0x0], [0xFAC0, 1, 0x8B8A, 0x0],
    [0xFAC1, 1, 0x8D08, 0x0], [0xFAC2, 1, 0x8F38, 0x0], [0xFAC3, 1, 0x9072, 0x0],
    [0xFAC4, 1, 0x9199, 0x0], [0xFAC5, 1, 0x9276, 0x0], [0xFAC6, 1, 0x967C, 0x0],
    [0xFAC7, 1, 0x96E3, 0x0], [0xFAC8, 1, 0x9756, 0x0], [0xFAC9, 1, 0x97DB, 0x0],
    [0xFACA, 1, 0x97FF, 0x0], [0xFACB, 1, 0x980B, 0x0], [0xFACC, 1, 0x983B, 0x0],
    [0xFACD, 1, 0x9B12, 0x0], [0xFACE, 1, 0x9F9C, 0x0], [0xFACF, 1, 0x2284A, 0x0],
    [0xFAD0, 1, 0x22844, 0x0], [0xFAD1, 1, 0x233D5, 0x0], [0xFAD2, 1, 0x3B9D, 0x0],
    [0xFAD3, 1, 0x4018, 0x0], [0xFAD4, 1, 0x4039, 0x0], [0xFAD5, 1, 0x25249, 0x0],
    [0xFAD6, 1, 0x25CD0, 0x0], [0xFAD7, 1, 0x27ED3, 0x0], [0xFAD8, 1, 0x9F43, 0x0],
    [0xFAD9, 1, 0x9F8E, 0x0], [0xFB1D, 2, 0x5D9, 0x5B4], [0xFB1F, 2, 0x5F2, 0x5B7],
    [0xFB2A, 2, 0x5E9, 0x5C1], [0xFB2B, 2, 0x5E9, 0x5C2], [0xFB2C, 2, 0xFB49, 0x5C1],
    [0xFB2D, 2, 0xFB49, 0x5C2], [0xFB2E, 2, 0x5D0, 0x5B7], [0xFB2F, 2, 0x5D0, 0x5B8],
    [0xFB30, 2, 0x5D0, 0x5BC], [0xFB31, 2, 0x5D1, 0x5BC], [0xFB32, 2, 0x5D2, 0x5BC],
    [0xFB33, 2, 0x5D3, 0x5BC], [0xFB34, 2, 0x5D4, 0x5BC], [0xFB35, 2, 0x5D5, 0x5BC],
    [0xFB36, 2, 0x5D6, 0x5BC], [0xFB38, 2, 0x5D8, 0x5BC], [0xFB39, 2, 0x5D9, 0x5BC],
    [0xFB3A, 2, 0x5DA, 0x5BC], [0xFB3B, 2, 0x5DB, 0x5BC], [0xFB3C, 2, 0x5DC, 0x5BC],
    [0xFB3E, 2, 0x5DE, 0x5BC], [0xFB40, 2, 0x5E0, 0x5BC], [0xFB41, 2, 0x5E1, 0x5BC],
    [0xFB43, 2, 0x5E3, 0x5BC], [0xFB44, 2, 0x5E4, 0x5BC], [0xFB46, 2, 0x5E6, 0x5BC],
    [0xFB47, 2, 0x5E7, 0x5BC], [0xFB48, 2, 0x5E8, 0x5BC], [0xFB49, 2, 0x5E9, 0x5BC],
    [0xFB4A, 2, 0x5EA, 0x5BC], [0xFB4B, 2, 0x5D5, 0x5B9], [0xFB4C, 2, 0x5D1, 0x5BF],
    [0xFB4D, 2, 0x5DB, 0x5BF], [0xFB4E, 2, 0x5E4, 0x5BF], [0x1109A, 2, 0x11099, 0x110BA],
    [0x1109C, 2, 0x1109B, 0x110BA], [0x110AB, 2, 0x110A5, 0x110BA], [0x1112E, 2, 0x11131, 0x11127],
    [0x1112F, 2, 0x11132, 0x11127], [0x1134B, 2, 0x11347, 0x1133E], [0x1134C, 2, 0x11347, 0x11357],
    [0x114BB, 2, 0x114B9, 0x114BA], [0x114BC, 2, 0x114B9, 0x114B0], [0x114BE, 2, 0x114B9, 0x114BD],
    [0x115BA, 2, 0x115B8, 0x115AF], [0x115BB, 2, 0x115B9, 0x115AF], [0x11938, 2, 0x11935, 0x11930],
    [0x1D15E, 2, 0x1D157, 0x1D165], [0x1D15F, 2, 0x1D158, 0x1D165], [0x1D160, 2, 0x1D15F, 0x1D16E],
    [0x1D161, 2, 0x1D15F, 0x1D16F], [0x1D162, 2, 0x1D15F, 0x1D170], [0x1D163, 2, 0x1D15F, 0x1D171],
    [0x1D164, 2, 0x1D15F, 0x1D172], [0x1D1BB, 2, 0x1D1B9, 0x1D165], [0x1D1BC, 2, 0x1D1BA, 0x1D165],
    [0x1D1BD, 2, 0x1D1BB, 0x1D16E], [0x1D1BE, 2, 0x1D1BC, 0x1D16E], [0x1D1BF, 2, 0x1D1BB, 0x1D16F],
    [0x1D1C0, 2, 0x1D1BC, 0x1D16F], [0x2F800, 1, 0x4E3D, 0x0], [0x2F801, 1, 0x4E38, 0x0],
    [0x2F802, 1, 0x4E41, 0x0], [0x2F803, 1, 0x20122, 0x0], [0x2F804, 1, 0x4F60, 0x0],
    [0x2F805, 1, 0x4FAE, 0x0], [0x2F806, 1, 0x4FBB, 0x0], [0x2F807, 1, 0x5002, 0x0],
    [0x2F808, 1, 0x507A, 0x0], [0x2F809, 1, 0x5099, 0x0], [0x2F80A, 1, 0x50E7, 0x0],
    [0x2F80B, 1, 0x50CF, 0x0], [0x2F80C, 1, 0x349E, 0x0], [0x2F80D, 1, 0x2063A, 0x0],
    [0x2F80E, 1, 0x514D, 0x0], [0x2F80F, 1, 0x5154, 0x0], [0x2F810, 1, 0x5164, 0x0],
    [0x2F811, 1, 0x5177, 0x0], [0x2F812, 1, 0x2051C, 0x0], [0x2F813, 1, 0x34B9, 0x0],
    [0x2F814, 1, 0x5167, 0x0], [0x2F815, 1, 0x518D, 0x0], [0x2F816, 1, 0x2054B, 0x0],
    [0x2F817, 1, 0x5197, 0x0], [0x2F818, 1, 0x51A4, 0x0], [0x2F819, 1, 0x4ECC, 0x0],
    [0x2F81A, 1, 0x51AC, 0x0], [0x2F81B, 1, 0x51B5, 0x0], [0x2F81C, 1, 0x291DF, 0x0],
    [0x2F81D, 1, 0x51F5, 0x0], [0x2F81E, 1, 0x5203, 0x0], [0x2F81F, 1, 0x34DF, 0x0],
    [0x2F820, 1, 0x523B, 0x0], [0x2F821, 1, 0x5246, 0x0], [0x2F822, 1, 0x5272, 0x0],
    [0x2F823, 1, 0x5277, 0x0], [0x2F824, 1, 0x3515, 0x0], [0x2F825, 1, 0x52C7, 0x0],
    [0x2F826, 1, 0x52C9, 0x0], [0x2F827, 1, 0x52E4, 0x0], [0x2F828, 1, 0x52FA, 0x0],
    [0x2F829, 1, 0x5305, 0x0], [0x2F82A, 1, 0x5306, 0x0], [0x2F82B, 1, 0x5317, 0x0],
    [0x2F82C, 1, 0x5349, 0x0], [0x2F82D, 1, 0x5351, 0x0], [0x2F82E, 1, 0x535A, 0x0],
    [0x2F82F, 1, 0x5373, 0x0], [0x2F830, 1, 0x537D, 0x0], [0x2F831, 1, 0x537F, 0x0],
    [0x2F832, 1, 0x537F, 0x0], [0x2F833, 1, 0x537F, 0x0], [0x2F834, 1, 0x20A2C, 0x0],
    [0x2F835, 1, 0x7070, 0x0], [0x2F836, 1, 0x53CA, 0x0], [0x2F837, 1, 0x53DF, 0x0],
    [0x2F838, 1, 0x20B63, 0x0], [0x2F839, 1, 0x53EB, 0x0], [0x2F83A, 1, 0x53F1, 0x0],
    [0x2F83B, 1, 0x5406, 0x0], [0x2F83C, 1, 0x549E, 0x0], [0x2F83D, 1, 0x5438, 0x0],
    [0x2F83E, 1, 0x5448, 0x0], [0x2F83F, 1, 0x5468, 0x0], [0x2F840, 1, 0x54A2, 0x0],
    [0x2F841, 1, 0x54F6, 0x0], [0x2F842, 1, 0x5510, 0x0], [0x2F843, 1, 0x5553, 0x0],
    [0x2F844, 1, 0x5563, 0x0], [0x2F845, 1, 0x5584, 0x0], [0x2F846, 1, 0x5584, 0x0],
    [0x2F847, 1, 0x5599, 0x0], [0x2F848, 1, 0x55AB, 0x0], [0x2F849, 1, 0x55B3, 0x0],
    [0x2F84A, 1, 0x55C2, 0x0], [0x2F84B, 1, 0x5716, 0x0], [0x2F84C, 1, 0x5606, 0x0],
    [0x2F84D, 1, 0x5717, 0x0], [0x2F84E, 1, 0x5651, 0x0], [0x2F84F, 1, 0x5674, 0x0],
    [0x2F850, 1, 0x5207, 0x0], [0x2F851, 1, 0x58EE, 0x0], [0x2F852, 1, 0x57CE, 0x0],
    [0x2F853, 1, 0x57F4, 0x0], [0x2F854, 1, 0x580D, 0x0], [0x2F855, 1, 0x578B, 0x0],
    [0x2F856, 1, 0x5832, 0x0], [0x2F857, 1, 0x5831, 0x0], [0x2F858, 1, 0x58AC, 0x0],
    [0x2F859, 1, 0x214E4, 0x0], [0x2F85A, 1, 0x58F2, 0x0], [0x2F85B, 1, 0x58F7, 0x0],
    [0x2F85C, 1, 0x5906, 0x0], [0x2F85D, 1, 0x591A, 0x0], [0x2F85E, 1, 0x5922, 0x0],
    [0x2F85F, 1, 0x5962, 0x0], [0x2F860, 1, 0x216A8, 0x0], [0x2F861, 1, 0x216EA, 0x0],
    [0x2F862, 1, 0x59EC, 0x0], [0x2F863, 1, 0x5A1B, 0x0], [0x2F864, 1, 0x5A27, 0x0],
    [0x2F865, 1, 0x59D8, 0x0], [0x2F866, 1, 0x5A66, 0x0], [0x2F867, 1, 0x36EE, 0x0],
    [0x2F868, 1, 0x36FC, 0x0], [0x2F869, 1, 0x5B08, 0x0], [0x2F86A, 1, 0x5B3E, 0x0],
    [0x2F86B, 1, 0x5B3E, 0x0], [0x2F86C, 1, 0x219C8, 0x0], [0x2F86D, 1, 0x5BC3, 0x0],
    [0x2F86E, 1, 0x5BD8, 0x0], [0x2F86F, 1, 0x5BE7, 0x0], [0x2F870, 1, 0x5BF3, 0x0],
    [0x2F871, 1, 0x21B18, 0x0], [0x2F872, 1, 0x5BFF, 0x0], [0x2F873, 1, 0x5C06, 0x0],
    [0x2F874, 1, 0x5F53, 0x0], [0x2F875, 1, 0x5C22, 0x0], [0x2F876, 1, 0x3781, 0x0],
    [0x2F877, 1, 0x5C60, 0x0], [0x2F878, 1, 0x5C6E, 0x0], [0x2F879, 1, 0x5CC0, 0x0],
    [0x2F87A, 1, 0x5C8D, 0x0], [0x2F87B, 1, 0x21DE4, 0x0], [0x2F87C, 1, 0x5D43, 0x0],
    [0x2F87D, 1, 0x21DE6, 0x0], [0x2F87E, 1, 0x5D6E, 0x0], [0x2F87F, 1, 0x5D6B, 0x0],
    [0x2F880, 1, 0x5D7C, 0x0], [0x2F881, 1, 0x5DE1, 0x0], [0x2F882, 1, 0x5DE2, 0x0],
    [0x2F883, 1, 0x382F, 0x0], [0x2F884, 1, 0x5DFD, 0x0], [0x2F885, 1, 0x5E28, 0x0],
    [0x2F886, 1, 0x5E3D, 0x0], [0x2F887, 1, 0x5E69, 0x0], [0x2F888, 1, 0x3862, 0x0],
    [0x2F889, 1, 0x22183, 0x0], [0x2F88A, 1, 0x387C, 0x0], [0x2F88B, 1, 0x5EB0, 0x0],
    [0x2F88C, 1, 0x5EB3, 0x0], [0x2F88D, 1, 0x5EB6, 0x0], [0x2F88E, 1, 0x5ECA, 0x0],
    [0x2F88F, 1, 0x2A392, 0x0], [0x2F890, 1, 0x5EFE, 0x0], [0x2F891, 1, 0x22331, 0x0],
    [0x2F892, 1, 0x22331, 0x0], [0x2F893, 1, 0x8201, 0x0], [0x2F894, 1, 0x5F22, 0x0],
    [0x2F895, 1, 0x5F22, 0x0], [0x2F896, 1, 0x38C7, 0x0], [0x2F897, 1, 0x232B8, 0x0],
    [0x2F898, 1, 0x261DA, 0x0], [0x2F899, 1, 0x5F62, 0x0], [0x2F89A, 1, 0x5F6B, 0x0],
    [0x2F89B, 1, 0x38E3, 0x0], [0x2F89C, 1, 0x5F9A, 0x0], [0x2F89D, 1, 0x5FCD, 0x0],
    [0x2F89E, 1, 0x5FD7, 0x0], [0x2F89F, 1, 0x5FF9, 0x0], [0x2F8A0, 1, 0x6081, 0x0],
    [0x2F8A1, 1, 0x393A, 0x0], [0x2F8A2, 1, 0x391C, 0x0], [0x2F8A3, 1, 0x6094, 0x0],
    [0x2F8A4, 1, 0x226D4, 0x0], [0x2F8A5, 1, 0x60C7, 0x0], [0x2F8A6, 1, 0x6148, 0x0],
    [0x2F8A7, 1, 0x614C, 0x0], [0x2F8A8, 1, 0x614E, 0x0], [0x2F8A9, 1, 0x614C, 0x0],
    [0x2F8AA, 1, 0x617A, 0x0], [0x2F8AB, 1, 0x618E, 0x0], [0x2F8AC, 1, 0x61B2, 0x0],
    [0x2F8AD, 1, 0x61A4, 0x0], [0x2F8AE, 1, 0x61AF, 0x0], [0x2F8AF, 1, 0x61DE, 0x0],
    [0x2F8B0, 1, 0x61F2, 0x0], [0x2F8B1, 1, 0x61F6, 0x0], [0x2F8B2, 1, 0x6210, 0x0],
    [0x2F8B3, 1, 0x621B, 0x0], [0x2F8B4, 1, 0x625D, 0x0], [0x2F8B5, 1, 0x62B1, 0x0],
    [0x2F8B6, 1, 0x62D4, 0x0], [0x2F8B7, 1, 0x6350, 0x0], [0x2F8B8, 1, 0x22B0C, 0x0],
    [0x2F8B9, 1, 0x633D, 0x0], [0x2F8BA, 1, 0x62FC, 0x0], [0x2F8BB, 1, 0x6368, 0x0],
    [0x2F8BC, 1, 0x6383, 0x0], [0x2F8BD, 1, 0x63E4, 0x0], [0x2F8BE, 1, 0x22BF1, 0x0],
    [0x2F8BF, 1, 0x6422, 0x0], [0x2F8C0, 1, 0x63C5, 0x0], [0x2F8C1, 1, 0x63A9, 0x0],
    [0x2F8C2, 1, 0x3A2E, 0x0], [0x2F8C3, 1, 0x6469, 0x0], [0x2F8C4, 1, 0x647E, 0x0],
    [0x2F8C5, 1, 0x649D, 0x0], [0x2F8C6, 1, 0x6477, 0x0], [0x2F8C7, 1, 0x3A6C, 0x0],
    [0x2F8C8, 1, 0x654F, 0x0], [0x2F8C9, 1, 0x656C, 0x0], [0x2F8CA, 1, 0x2300A, 0x0],
    [0x2F8CB, 1, 0x65E3, 0x0], [0x2F8CC, 1, 0x66F8, 0x0], [0x2F8CD, 1, 0x6649, 0x0],
    [0x2F8CE, 1, 0x3B19, 0x0], [0x2F8CF, 1, 0x6691, 0x0], [0x2F8D0, 1, 0x3B08, 0x0],
    [0x2F8D1, 1, 0x3AE4, 0x0], [0x2F8D2, 1, 0x5192, 0x0], [0x2F8D3, 1, 0x5195, 0x0],
    [0x2F8D4, 1, 0x6700, 0x0], [0x2F8D5, 1, 0x669C, 0x0], [0x2F8D6, 1, 0x80AD, 0x0],
    [0x2F8D7, 1, 0x43D9, 0x0], [0x2F8D8, 1, 0x6717, 0x0], [0x2F8D9, 1, 0x671B, 0x0],
    [0x2F8DA, 1, 0x6721, 0x0], [0x2F8DB, 1, 0x675E, 0x0], [0x2F8DC, 1, 0x6753, 0x0],
    [0x2F8DD, 1, 0x233C3, 0x0], [0x2F8DE, 1, 0x3B49, 0x0], [0x2F8DF, 1, 0x67FA, 0x0],
    [0x2F8E0, 1, 0x6785, 0x0], [0x2F8E1, 1, 0x6852, 0x0], [0x2F8E2, 1, 0x6885, 0x0],
    [0x2F8E3, 1, 0x2346D, 0x0], [0x2F8E4, 1, 0x688E, 0x0], [0x2F8E5, 1, 0x681F, 0x0],
    [0x2F8E6, 1, 0x6914, 0x0], [0x2F8E7, 1, 0x3B9D, 0x0], [0x2F8E8, 1, 0x6942, 0x0],
    [0x2F8E9, 1, 0x69A3, 0x0], [0x2F8EA, 1, 0x69EA, 0x0], [0x2F8EB, 1, 0x6AA8, 0x0],
    [0x2F8EC, 1, 0x236A3, 0x0], [0x2F8ED, 1, 0x6ADB, 0x0], [0x2F8EE, 1, 0x3C18, 0x0],
    [0x2F8EF, 1, 0x6B21, 0x0], [0x2F8F0, 1, 0x238A7, 0x0], [0x2F8F1, 1, 0x6B54, 0x0],
    [0x2F8F2, 1, 0x3C4E, 0x0], [0x2F8F3, 1, 0x6B72, 0x0], [0x2F8F4, 1, 0x6B9F, 0x0],
    [0x2F8F5, 1, 0x6BBA, 0x0], [0x2F8F6, 1, 0x6BBB, 0x0], [0x2F8F7, 1, 0x23A8D, 0x0],
    [0x2F8F8, 1, 0x21D0B, 0x0], [0x2F8F9, 1, 0x23AFA, 0x0], [0x2F8FA, 1, 0x6C4E, 0x0],
    [0x2F8FB, 1, 0x23CBC, 0x0], [0x2F8FC, 1, 0x6CBF, 0x0], [0x2F8FD, 1, 0x6CCD, 0x0],
    [0x2F8FE, 1, 0x6C67, 0x0], [0x2F8FF, 1, 0x6D16, 0x0], [0x2F900, 1, 0x6D3E, 0x0],
    [0x2F901, 1, 0x6D77, 0x0], [0x2F902, 1, 0x6D41, 0x0], [0x2F903, 1, 0x6D69, 0x0],
    [0x2F904, 1, 0x6D78, 0x0], [0x2F905, 1, 0x6D85, 0x0], [0x2F906, 1, 0x23D1E, 0x0],
    [0x2F907, 1, 0x6D34, 0x0], [0x2F908, 1, 0x6E2F, 0x0], [0x2F909, 1, 0x6E6E, 0x0],
    [0x2F90A, 1, 0x3D33, 0x0], [0x2F90B, 1, 0x6ECB, 0x0], [0x2F90C, 1, 0x6EC7, 0x0],
    [0x2F90D, 1, 0x23ED1, 0x0], [0x2F90E, 1, 0x6DF9, 0x0], [0x2F90F, 1, 0x6F6E, 0x0],
    [0x2F910, 1, 0x23F5E, 0x0], [0x2F911, 1, 0x23F8E, 0x0], [0x2F912, 1, 0x6FC6, 0x0],
    [0x2F913, 1, 0x7039, 0x0], [0x2F914, 1, 0x701E, 0x0], [0x2F915, 1, 0x701B, 0x0],
    [0x2F916, 1, 0x3D96, 0x0], [0x2F917, 1, 0x704A, 0x0], [0x2F918, 1, 0x707D, 0x0],
    [0x2F919, 1, 0x7077, 0x0], [0x2F91A, 1, 0x70AD, 0x0], [0x2F91B, 1, 0x20525, 0x0],
    [0x2F91C, 1, 0x7145, 0x0], [0x2F91D, 1, 0x24263, 0x0], [0x2F91E, 1, 0x719C, 0x0],
    [0x2F91F, 1, 0x243AB, 0x0], [0x2F920, 1, 0x7228, 0x0], [0x2F921, 1, 0x7235, 0x0],
    [0x2F922, 1, 0x7250, 0x0], [0x2F923, 1, 0x24608, 0x0], [0x2F924, 1, 0x7280, 0x0],
    [0x2F925, 1, 0x7295, 0x0], [0x2F926, 1, 0x24735, 0x0], [0x2F927, 1, 0x24814, 0x0],
    [0x2F928, 1, 0x737A, 0x0], [0x2F929, 1, 0x738B, 0x0], [0x2F92A, 1, 0x3EAC, 0x0],
    [0x2F92B, 1, 0x73A5, 0x0], [0x2F92C, 1, 0x3EB8, 0x0], [0x2F92D, 1, 0x3EB8, 0x0],
    [0x2F92E, 1, 0x7447, 0x0], [0x2F92F, 1, 0x745C, 0x0], [0x2F930, 1, 0x7471, 0x0],
    [0x2F931, 1, 0x7485, 0x0], [0x2F932, 1, 0x74CA, 0x0], [0x2F933, 1, 0x3F1B, 0x0],
    [0x2F934, 1, 0x7524, 0x0], [0x2F935, 1, 0x24C36, 0x0], [0x2F936, 1, 0x753E, 0x0],
    [0x2F937, 1, 0x24C92, 0x0], [0x2F938, 1, 0x7570, 0x0], [0x2F939, 1, 0x2219F, 0x0],
    [0x2F93A, 1, 0x7610, 0x0], [0x2F93B, 1, 0x24FA1, 0x0], [0x2F93C, 1, 0x24FB8, 0x0],
    [0x2F93D, 1, 0x25044, 0x0], [0x2F93E, 1, 0x3FFC, 0x0], [0x2F93F, 1, 0x4008, 0x0],
    [0x2F940, 1, 0x76F4, 0x0], [0x2F941, 1, 0x250F3, 0x0], [0x2F942, 1, 0x250F2, 0x0],
    [0x2F943, 1, 0x25119, 0x0], [0x2F944, 1, 0x25133, 0x0], [0x2F945, 1, 0x771E, 0x0],
    [0x2F946, 1, 0x771F, 0x0], [0x2F947, 1, 0x771F, 0x0], [0x2F948, 1, 0x774A, 0x0],
    [0x2F949, 1, 0x4039, 0x0], [0x2F94A, 1, 0x778B, 0x0], [0x2F94B, 1, 0x4046, 0x0],
    [0x2F94C, 1, 0x4096, 0x0], [0x2F94D, 1, 0x2541D, 0x0], [0x2F94E, 1, 0x784E, 0x0],
    [0x2F94F, 1, 0x788C, 0x0], [0x2F950, 1, 0x78CC, 0x0], [0x2F951, 1, 0x40E3, 0x0],
    [0x2F952, 1, 0x25626, 0x0], [0x2F953, 1, 0x7956, 0x0], [0x2F954, 1, 0x2569A, 0x0],
    [0x2F955, 1, 0x256C5, 0x0], [0x2F956, 1, 0x798F, 0x0], [0x2F957, 1, 0x79EB, 0x0],
    [0x2F958, 1, 0x412F, 0x0], [0x2F959, 1, 0x7A40, 0x0], [0x2F95A, 1, 0x7A4A, 0x0],
    [0x2F95B, 1, 0x7A4F, 0x0], [0x2F95C, 1, 0x2597C, 0x0], [0x2F95D, 1, 0x25AA7, 0x0],
    [0x2F95E, 1, 0x25AA7, 0x0], [0x2F95F, 1, 0x7AEE, 0x0], [0x2F960, 1, 0x4202, 0x0],
    [0x2F961, 1, 0x25BAB, 0x0], [0x2F962, 1, 0x7BC6, 0x0], [0x2F963, 1, 0x7BC9, 0x0],
    [0x2F964, 1, 0x4227, 0x0], [0x2F965, 1, 0x25C80, 0x0], [0x2F966, 1, 0x7CD2, 0x0],
    [0x2F967, 1, 0x42A0, 0x0], [0x2F968, 1, 0x7CE8, 0x0], [0x2F969, 1, 0x7CE3, 0x0],
    [0x2F96A, 1, 0x7D00, 0x0], [0x2F96B, 1, 0x25F86, 0x0], [0x2F96C, 1, 0x7D63, 0x0],
    [0x2F96D, 1, 0x4301, 0x0], [0x2F96E, 1, 0x7DC7, 0x0], [0x2F96F, 1, 0x7E02, 0x0],
    [0x2F970, 1, 0x7E45, 0x0], [0x2F971, 1, 0x4334, 0x0], [0x2F972, 1, 0x26228, 0x0],
    [0x2F973, 1, 0x26247, 0x0], [0x2F974, 1, 0x4359, 0x0], [0x2F975, 1, 0x262D9, 0x0],
    [0x2F976, 1, 0x7F7A, 0x0], [0x2F977, 1, 0x2633E, 0x0], [0x2F978, 1, 0x7F95, 0x0],
    [0x2F979, 1, 0x7FFA, 0x0], [0x2F97A, 1, 0x8005, 0x0], [0x2F97B, 1, 0x264DA, 0x0],
    [0x2F97C, 1, 0x26523, 0x0], [0x2F97D, 1, 0x8060, 0x0], [0x2F97E, 1, 0x265A8, 0x0],
    [0x2F97F, 1, 0x8070, 0x0], [0x2F980, 1, 0x2335F, 0x0], [0x2F981, 1, 0x43D5, 0x0],
    [0x2F982, 1, 0x80B2, 0x0], [0x2F983, 1, 0x8103, 0x0], [0x2F984, 1, 0x440B, 0x0],
    [0x2F985, 1, 0x813E, 0x0], [0x2F986, 1, 0x5AB5, 0x0], [0x2F987, 1, 0x267A7, 0x0],
    [0x2F988, 1, 0x267B5, 0x0], [0x2F989, 1, 0x23393, 0x0], [0x2F98A, 1, 0x2339C, 0x0],
    [0x2F98B, 1, 0x8201, 0x0], [0x2F98C, 1, 0x8204, 0x0], [0x2F98D, 1, 0x8F9E, 0x0],
    [0x2F98E, 1, 0x446B, 0x0], [0x2F98F, 1, 0x8291, 0x0], [0x2F990, 1, 0x828B, 0x0],
    [0x2F991, 1, 0x829D, 0x0], [0x2F992, 1, 0x52B3, 0x0], [0x2F993, 1, 0x82B1, 0x0],
    [0x2F994, 1, 0x82B3, 0x0], [0x2F995, 1, 0x82BD, 0x0], [0x2F996, 1, 0x82E6, 0x0],
    [0x2F997, 1, 0x26B3C, 0x0], [0x2F998, 1, 0x82E5, 0x0], [0x2F999, 1, 0x831D, 0x0],
    [0x2F99A, 1, 0x8363, 0x0], [0x2F99B, 1, 0x83AD, 0x0], [0x2F99C, 1, 0x8323, 0x0],
    [0x2F99D, 1, 0x83BD, 0x0], [0x2F99E, 1, 0x83E7, 0x0], [0x2F99F, 1, 0x8457, 0x0],
    [0x2F9A0, 1, 0x8353, 0x0], [0x2F9A1, 1, 0x83CA, 0x0], [0x2F9A2, 1, 0x83CC, 0x0],
    [0x2F9A3, 1, 0x83DC, 0x0], [0x2F9A4, 1, 0x26C36, 0x0], [0x2F9A5, 1, 0x26D6B, 0x0],
    [0x2F9A6, 1, 0x26CD5, 0x0], [0x2F9A7, 1, 0x452B, 0x0], [0x2F9A8, 1, 0x84F1, 0x0],
    [0x2F9A9, 1, 0x84F3, 0x0], [0x2F9AA, 1, 0x8516, 0x0], [0x2F9AB, 1, 0x273CA, 0x0],
    [0x2F9AC, 1, 0x8564, 0x0], [0x2F9AD, 1, 0x26F2C, 0x0], [0x2F9AE, 1, 0x455D, 0x0],
    [0x2F9AF, 1, 0x4561, 0x0], [0x2F9B0, 1, 0x26FB1, 0x0], [0x2F9B1, 1, 0x270D2, 0x0],
    [0x2F9B2, 1, 0x456B, 0x0], [0x2F9B3, 1, 0x8650, 0x0], [0x2F9B4, 1, 0x865C, 0x0],
    [0x2F9B5, 1, 0x8667, 0x0], [0x2F9B6, 1, 0x8669, 0x0], [0x2F9B7, 1, 0x86A9, 0x0],
    [0x2F9B8, 1, 0x8688, 0x0], [0x2F9B9, 1, 0x870E, 0x0], [0x2F9BA, 1, 0x86E2, 0x0],
    [0x2F9BB, 1, 0x8779, 0x0], [0x2F9BC, 1, 0x8728, 0x0], [0x2F9BD, 1, 0x876B, 0x0],
    [0x2F9BE, 1, 0x8786, 0x0], [0x2F9BF, 1, 0x45D7, 0x0], [0x2F9C0, 1, 0x87E1, 0x0],
    [0x2F9C1, 1, 0x8801, 0x0], [0x2F9C2, 1, 0x45F9, 0x0], [0x2F9C3, 1, 0x8860, 0x0],
    [0x2F9C4, 1, 0x8863, 0x0], [0x2F9C5, 1, 0x27667, 0x0], [0x2F9C6, 1, 0x88D7, 0x0],
    [0x2F9C7, 1, 0x88DE, 0x0], [0x2F9C8, 1, 0x4635, 0x0], [0x2F9C9, 1, 0x88FA, 0x0],
    [0x2F9CA, 1, 0x34BB, 0x0], [0x2F9CB, 1, 0x278AE, 0x0], [0x2F9CC, 1, 0x27966, 0x0],
    [0x2F9CD, 1, 0x46BE, 0x0], [0x2F9CE, 1, 0x46C7, 0x0], [0x2F9CF, 1, 0x8AA0, 0x0],
    [0x2F9D0, 1, 0x8AED, 0x0], [0x2F9D1, 1, 0x8B8A, 0x0], [0x2F9D2, 1, 0x8C55, 0x0],
    [0x2F9D3, 1, 0x27CA8, 0x0], [0x2F9D4, 1, 0x8CAB, 0x0], [0x2F9D5, 1, 0x8CC1, 0x0],
    [0x2F9D6, 1, 0x8D1B, 0x0], [0x2F9D7, 1, 0x8D77, 0x0], [0x2F9D8, 1, 0x27F2F, 0x0],
    [0x2F9D9, 1, 0x20804, 0x0], [0x2F9DA, 1, 0x8DCB, 0x0], [0x2F9DB, 1, 0x8DBC, 0x0],
    [0x2F9DC, 1, 0x8DF0, 0x0], [0x2F9DD, 1, 0x208DE, 0x0], [0x2F9DE, 1, 0x8ED4, 0x0],
    [0x2F9DF, 1, 0x8F38, 0x0], [0x2F9E0, 1, 0x285D2, 0x0], [0x2F9E1, 1, 0x285ED, 0x0],
    [0x2F9E2, 1, 0x9094, 0x0], [0x2F9E3, 1, 0x90F1, 0x0], [0x2F9E4, 1, 0x9111, 0x0],
    [0x2F9E5, 1, 0x2872E, 0x0], [0x2F9E6, 1, 0x911B, 0x0], [0x2F9E7, 1, 0x9238, 0x0],
    [0x2F9E8, 1, 0x92D7, 0x0], [0x2F9E9, 1, 0x92D8, 0x0], [0x2F9EA, 1, 0x927C, 0x0],
    [0x2F9EB, 1, 0x93F9, 0x0], [0x2F9EC, 1, 0x9415, 0x0], [0x2F9ED, 1, 0x28BFA, 0x0],
    [0x2F9EE, 1, 0x958B, 0x0], [0x2F9EF, 1, 0x4995, 0x0], [0x2F9F0, 1, 0x95B7, 0x0],
    [0x2F9F1, 1, 0x28D77, 0x0], [0x2F9F2, 1, 0x49E6, 0x0], [0x2F9F3, 1, 0x96C3, 0x0],
    [0x2F9F4, 1, 0x5DB2, 0x0], [0x2F9F5, 1, 0x9723, 0x0], [0x2F9F6, 1, 0x29145, 0x0],
    [0x2F9F7, 1, 0x2921A, 0x0], [0x2F9F8, 1, 0x4A6E, 0x0], [0x2F9F9, 1, 0x4A76, 0x0],
    [0x2F9FA, 1, 0x97E0, 0x0], [0x2F9FB, 1, 0x2940A, 0x0], [0x2F9FC, 1, 0x4AB2, 0x0],
    [0x2F9FD, 1, 0x29496, 0x0], [0x2F9FE, 1, 0x980B, 0x0], [0x2F9FF, 1, 0x980B, 0x0],
    [0x2FA00, 1, 0x9829, 0x0], [0x2FA01, 1, 0x295B6, 0x0], [0x2FA02, 1, 0x98E2, 0x0],
    [0x2FA03, 1, 0x4B33, 0x0], [0x2FA04, 1, 0x9929, 0x0], [0x2FA05, 1, 0x99A7, 0x0],
    [0x2FA06, 1, 0x99C2, 0x0], [0x2FA07, 1, 0x99FE, 0x0], [0x2FA08, 1, 0x4BCE, 0x0],
    [0x2FA09, 1, 0x29B30, 0x0], [0x2FA0A, 1, 0x9B12, 0x0], [0x2FA0B, 1, 0x9C40, 0x0],
    [0x2FA0C, 1, 0x9CFD, 0x0], [0x2FA0D, 1, 0x4CCE, 0x0], [0x2FA0E, 1, 0x4CED, 0x0],
    [0x2FA0F, 1, 0x9D67, 0x0], [0x2FA10, 1, 0x2A0CE, 0x0], [0x2FA11, 1, 0x4CF8, 0x0],
    [0x2FA12, 1, 0x2A105, 0x0], [0x2FA13, 1, 0x2A20E, 0x0], [0x2FA14, 1, 0x2A291, 0x0],
    [0x2FA15, 1, 0x9EBB, 0x0], [0x2FA16, 1, 0x4D56, 0x0], [0x2FA17, 1, 0x9EF9, 0x0],
    [0x2FA18, 1, 0x9EFE, 0x0], [0x2FA19, 1, 0x9F05, 0x0], [0x2FA1A, 1, 0x9F0F, 0x0],
    [0x2FA1B, 1, 0x9F16, 0x0], [0x2FA1C, 1, 0x9F3B, 0x0], [0x2FA1D, 1, 0x2A600, 0x0],
];

pub(crate) static COMPAT_SHORT: &[[u32; 4]] = &[
    [0xA0, 1, 0x20, 0x0], [0xA8, 2, 0x20, 0x308], [0xAA, 1, 0x61, 0x0],
    [0xAF, 2, 0x20, 0x304], [0xB2, 1, 0x32, 0x0], [0xB3, 1, 0x33, 0x0],
    [0xB4, 2, 0x20, 0x301], [0xB5, 1, 0x3BC, 0x0], [0xB8, 2, 0x20, 0x327],
    [0xB9, 1, 0x31, 0x0], [0xBA, 1, 0x6F, 0x0], [0x132, 2, 0x49, 0x4A],
    [0x133, 2, 0x69, 0x6A], [0x13F, 2, 0x4C, 0xB7], [0x140, 2, 0x6C, 0xB7],
    [0x149, 2, 0x2BC, 0x6E], [0x17F, 1, 0x73, 0x0], [0x1C4, 2, 0x44, 0x17D],
    [0x1C5, 2, 0x44, 0x17E], [0x1C6, 2, 0x64, 0x17E], [0x1C7, 2, 0x4C, 0x4A],
    [0x1C8, 2, 0x4C, 0x6A], [0x1C9, 2, 0x6C, 0x6A], [0x1CA, 2, 0x4E, 0x4A],
    [0x1CB, 2, 0x4E, 0x6A], [0x1CC, 2, 0x6E, 0x6A], [0x1F1, 2, 0x44, 0x5A],
    [0x1F2, 2, 0x44, 0x7A], [0x1F3, 2, 0x64, 0x7A], [0x2B0, 1, 0x68, 0x0],
    [0x2B1, 1, 0x266, 0x0], [0x2B2, 1, 0x6A, 0x0], [0x2B3, 1, 0x72, 0x0],
    [0x2B4, 1, 0x279, 0x0], [0x2B5, 1, 0x27B, 0x0], [0x2B6, 1, 0x281, 0x0],
    [0x2B7, 1, 0x77, 0x0], [0x2B8, 1, 0x79, 0x0], [0x2D8, 2, 0x20, 0x306],
    [0x2D9, 2, 0x20, 0x307], [0x2DA, 2, 0x20, 0x30A], [0x2DB, 2, 0x20, 0x328],
    [0x2DC, 2, 0x20, 0x303], [0x2DD, 2, 0x20, 0x30B], [0x2E0, 1, 0x263, 0x0],
    [0x2E1, 1, 0x6C, 0x0], [0x2E2, 1, 0x73, 0x0], [0x2E3, 1, 0x78, 0x0],
    [0x2E4, 1, 0x295, 0x0], [0x37A, 2, 0x20, 0x345], [0x384, 2, 0x20, 0x301],
    [0x3D0, 1, 0x3B2, 0x0], [0x3D1, 1, 0x3B8, 0x0], [0x3D2, 1, 0x3A5, 0x0],
    [0x3D5, 1, 0x3C6, 0x0], [0x3D6, 1, 0x3C0, 0x0], [0x3F0, 1, 0x3BA, 0x0],
    [0x3F1, 1, 0x3C1, 0x0], [0x3F2, 1, 0x3C2, 0x0], [0x3F4, 1, 0x398, 0x0],
    [0x3F5, 1, 0x3B5, 0x0], [0x3F9, 1, 0x3A3, 0x0], [0x587, 2, 0x565, 0x582],
    [0x675, 2, 0x627, 0x674], [0x676, 2, 0x648, 0x674], [0x677, 2, 0x6C7, 0x674],
    [0x678, 2, 0x64A, 0x674], [0xE33, 2, 0xE4D, 0xE32], [0xEB3, 2, 0xECD, 0xEB2],
    [0xEDC, 2, 0xEAB, 0xE99], [0xEDD, 2, 0xEAB, 0xEA1], [0xF0C, 1, 0xF0B, 0x0],
    [0xF77, 2, 0xFB2, 0xF81], [0xF79, 2, 0xFB3, 0xF81], [0x10FC, 1, 0x10DC, 0x0],
    [0x1D2C, 1, 0x41, 0x0], [0x1D2D, 1, 0xC6, 0x0], [0x1D2E, 1, 0x42, 0x0],
    [0x1D30, 1, 0x44, 0x0], [0x1D31, 1, 0x45, 0x0], [0x1D32, 1, 0x18E, 0x0],
    [0x1D33, 1, 0x47, 0x0], [0x1D34, 1, 0x48, 0x0], [0x1D35, 1, 0x49, 0x0],
    [0x1D36, 1, 0x4A, 0x0], [0x1D37, 1, 0x4B, 0x0], [0x1D38, 1, 0x4C, 0x0],
    [0x1D39, 1, 0x4D, 0x0], [0x1D3A, 1, 0x4E, 0x0], [0x1D3C, 1, 0x4F, 0x0],
    [0x1D3D, 1, 0x222, 0x0], [0x1D3E, 1, 0x50, 0x0], [0x1D3F, 1, 0x52, 0x0],
    [0x1D40, 1, 0x54, 0x0], [0x1D41, 1, 0x55, 0x0], [0x1D42, 1, 0x57, 0x0],
    [0x1D43, 1, 0x61, 0x0], [0x1D44, 1, 0x250, 0x0], [0x1D45, 1, 0x251, 0x0],
    [0x1D46, 1, 0x1D02, 0x0], [0x1D47, 1, 0x62, 0x0], [0x1D48, 1, 0x64, 0x0],
    [0x1D49, 1, 0x65, 0x0], [0x1D4A, 1, 0x259, 0x0], [0x1D4B, 1, 0x25B, 0x0],
    [0x1D4C, 1, 0x25C, 0x0], [0x1D4D, 1, 0x67, 0x0], [0x1D4F, 1, 0x6B, 0x0],
    [0x1D50, 1, 0x6D, 0x0], [0x1D51, 1, 0x14B, 0x0], [0x1D52, 1, 0x6F, 0x0],
    [0x1D53, 1, 0x254, 0x0], [0x1D54, 1, 0x1D16, 0x0], [0x1D55, 1, 0x1D17, 0x0],
    [0x1D56, 1, 0x70, 0x0], [0x1D57, 1, 0x74, 0x0], [0x1D58, 1, 0x75, 0x0],
    [0x1D59, 1, 0x1D1D, 0x0], [0x1D5A, 1, 0x26F, 0x0], [0x1D5B, 1, 0x76, 0x0],
    [0x1D5C, 1, 0x1D25, 0x0], [0x1D5D, 1, 0x3B2, 0x0], [0x1D5E, 1, 0x3B3, 0x0],
    [0x1D5F, 1, 0x3B4, 0x0], [0x1D60, 1, 0x3C6, 0x0], [0x1D61, 1, 0x3C7, 0x0],
    [0x1D62, 1, 0x69, 0x0], [0x1D63, 1, 0x72, 0x0], [0x1D64, 1, 0x75, 0x0],
    [0x1D65, 1, 0x76, 0x0], [0x1D66, 1, 0x3B2, 0x0], [0x1D67, 1, 0x3B3, 0x0],
    [0x1D68, 1, 0x3C1, 0x0], [0x1D69, 1, 0x3C6, 0x0], [0x1D6A, 1, 0x3C7, 0x0],
    [0x1D78, 1, 0x43D, 0x0], [0x1D9B, 1, 0x252, 0x0], [0x1D9C, 1, 0x63, 0x0],
    [0x1D9D, 1, 0x255, 0x0], [0x1D9E, 1, 0xF0, 0x0], [0x1D9F, 1, 0x25C, 0x0],
    [0x1DA0, 1, 0x66, 0x0], [0x1DA1, 1, 0x25F, 0x0], [0x1DA2, 1, 0x261, 0x0],
    [0x1DA3, 1, 0x265, 0x0], [0x1DA4, 1, 0x268, 0x0], [0x1DA5, 1, 0x269, 0x0],
    [0x1DA6, 1, 0x26A, 0x0], [0x1DA7, 1, 0x1D7B, 0x0], [0x1DA8, 1, 0x29D, 0x0],
    [0x1DA9, 1, 0x26D, 0x0], [0x1DAA, 1, 0x1D85, 0x0], [0x1DAB, 1, 0x29F, 0x0],
    [0x1DAC, 1, 0x271, 0x0], [0x1DAD, 1, 0x270, 0x0], [0x1DAE, 1, 0x272, 0x0],
    [0x1DAF, 1, 0x273, 0x0], [0x1DB0, 1, 0x274, 0x0], [0x1DB1, 1, 0x275, 0x0],
    [0x1DB2, 1, 0x278, 0x0], [0x1DB3, 1, 0x282, 0x0], [0x1DB4, 1, 0x283, 0x0],
    [0x1DB5, 1, 0x1AB, 0x0], [0x1DB6, 1, 0x289, 0x0], [0x1DB7, 1, 0x28A, 0x0],
    [0x1DB8, 1, 0x1D1C, 0x0], [0x1DB9, 1, 0x28B, 0x0], [0x1DBA, 1, 0x28C, 0x0],
    [0x1DBB, 1, 0x7A, 0x0], [0x1DBC, 1, 0x290, 0x0], [0x1DBD, 1, 0x291, 0x0],
    [0x1DBE, 1, 0x292, 0x0], [0x1DBF, 1, 0x3B8, 0x0], [0x1E9A, 2, 0x61, 0x2BE],
    [0x1FBD, 2, 0x20, 0x313], [0x1FBF, 2, 0x20, 0x313], [0x1FC0, 2, 0x20, 0x342],
    [0x1FFE, 2, 0x20, 0x314], [0x2002, 1, 0x20, 0x0], [0x2003, 1, 0x20, 0x0],
    [0x2004, 1, 0x20, 0x0], [0x2005, 1, 0x20, 0x0], [0x2006, 1, 0x20, 0x0],
    [0x2007, 1, 0x20, 0x0], [0x2008, 1, 0x20, 0x0], [0x2009, 1, 0x20, 0x0],
    [0x200A, 1, 0x20, 0x0], [0x2011, 1, 0x2010, 0x0], [0x2017, 2, 0x20, 0x333],
    [0x2024, 1, 0x2E, 0x0], [0x2025, 2, 0x2E, 0x2E], [0x202F, 1, 0x20, 0x0],
    [0x2033, 2, 0x2032, 0x2032], [0x2036, 2, 0x2035, 0x2035], [0x203C, 2, 0x21, 0x21],
    [0x203E, 2, 0x20, 0x305], [0x2047, 2, 0x3F, 0x3F], [0x2048, 2, 0x3F, 0x21],
    [0x2049, 2, 0x21, 0x3F], [0x205F, 1, 0x20, 0x0], [0x2070, 1, 0x30, 0x0],
    [0x2071, 1, 0x69, 0x0], [0x2074, 1, 0x34, 0x0], [0x2075, 1, 0x35, 0x0],
    [0x2076, 1, 0x36, 0x0], [0x2077, 1, 0x37, 0x0], [0x2078, 1, 0x38, 0x0],
    [0x2079, 1, 0x39, 0x0], [0x207A, 1, 0x2B, 0x0], [0x207B, 1, 0x2212, 0x0],
    [0x207C, 1, 0x3D, 0x0], [0x207D, 1, 0x28, 0x0], [0x207E, 1, 0x29, 0x0],
    [0x207F, 1, 0x6E, 0x0], [0x2080, 1, 0x30, 0x0], [0x2081, 1, 0x31, 0x0],
    [0x2082, 1, 0x32, 0x0], [0x2083, 1, 0x33, 0x0], [0x2084, 1, 0x34, 0x0],
    [0x2085, 1, 0x35, 0x0], [0x2086, 1, 0x36, 0x0], [0x2087, 1, 0x37, 0x0],
    [0x2088, 1, 0x38, 0x0], [0x2089, 1, 0x39, 0x0], [0x208A, 1, 0x2B, 0x0],
    [0x208B, 1, 0x2212, 0x0], [0x208C, 1, 0x3D, 0x0], [0x208D, 1, 0x28, 0x0],
    [0x208E, 1, 0x29, 0x0], [0x2090, 1, 0x61, 0x0], [0x2091, 1, 0x65, 0x0],
    [0x2092, 1, 0x6F, 0x0], [0x2093, 1, 0x78, 0x0], [0x2094, 1, 0x259, 0x0],
    [0x2095, 1, 0x68, 0x0], [0x2096, 1, 0x6B, 0x0], [0x2097, 1, 0x6C, 0x0],
    [0x2098, 1, 0x6D, 0x0], [0x2099, 1, 0x6E, 0x0], [0x209A, 1, 0x70, 0x0],
    [0x209B, 1, 0x73, 0x0], [0x209C, 1, 0x74, 0x0], [0x20A8, 2, 0x52, 0x73],
    [0x2102, 1, 0x43, 0x0], [0x2103, 2, 0xB0, 0x43], [0x2107, 1, 0x190, 0x0],
    [0x2109, 2, 0xB0, 0x46], [0x210A, 1, 0x67, 0x0], [0x210B, 1, 0x48, 0x0],
    [0x210C, 1, 0x48, 0x0], [0x210D, 1, 0x48, 0x0], [0x210E, 1, 0x68, 0x0],
    [0x210F, 1, 0x127, 0x0], [0x2110, 1, 0x49, 0x0], [0x2111, 1, 0x49, 0x0],
    [0x2112, 1, 0x4C, 0x0], [0x2113, 1, 0x6C, 0x0], [0x2115, 1, 0x4E, 0x0],
    [0x2116, 2, 0x4E, 0x6F], [0x2119, 1, 0x50, 0x0], [0x211A, 1, 0x51, 0x0],
    [0x211B, 1, 0x52, 0x0], [0x211C, 1, 0x52, 0x0], [0x211D, 1, 0x52, 0x0],
    [0x2120, 2, 0x53, 0x4D], [0x2122, 2, 0x54, 0x4D], [0x2124, 1, 0x5A, 0x0],
    [0x2128, 1, 0x5A, 0x0], [0x212C, 1, 0x42, 0x0], [0x212D, 1, 0x43, 0x0],
    [0x212F, 1, 0x65, 0x0], [0x2130, 1, 0x45, 0x0], [0x2131, 1, 0x46, 0x0],
    [0x2133, 1, 0x4D, 0x0], [0x2134, 1, 0x6F, 0x0], [0x2135, 1, 0x5D0, 0x0],
    [0x2136, 1, 0x5D1, 0x0], [0x2137, 1, 0x5D2, 0x0], [0x2138, 1, 0x5D3, 0x0],
    [0x2139, 1, 0x69, 0x0], [0x213C, 1, 0x3C0, 0x0], [0x213D, 1, 0x3B3, 0x0],
    [0x213E, 1, 0x393, 0x0], [0x213F, 1, 0x3A0, 0x0], [0x2140, 1, 0x2211, 0x0],
    [0x2145, 1, 0x44, 0x0], [0x2146, 1, 0x64, 0x0], [0x2147, 1, 0x65, 0x0],
    [0x2148, 1, 0x69, 0x0], [0x2149, 1, 0x6A, 0x0], [0x215F, 2, 0x31, 0x2044],
    [0x2160, 1, 0x49, 0x0], [0x2161, 2, 0x49, 0x49], [0x2163, 2, 0x49, 0x56],
    [0x2164, 1, 0x56, 0x0], [0x2165, 2, 0x56, 0x49], [0x2168, 2, 0x49, 0x58],
    [0x2169, 1, 0x58, 0x0], [0x216A, 2, 0x58, 0x49], [0x216C, 1, 0x4C, 0x0],
    [0x216D, 1, 0x43, 0x0], [0x216E, 1, 0x44, 0x0], [0x216F, 1, 0x4D, 0x0],
    [0x2170, 1, 0x69, 0x0], [0x2171, 2, 0x69, 0x69], [0x2173, 2, 0x69, 0x76],
    [0x2174, 1, 0x76, 0x0], [0x2175, 2, 0x76, 0x69], [0x2178, 2, 0x69, 0x78],
    [0x2179, 1, 0x78, 0x0], [0x217A, 2, 0x78, 0x69], [0x217C, 1, 0x6C, 0x0],
    [0x217D, 1, 0x63, 0x0], [0x217E, 1, 0x64, 0x0], [0x217F, 1, 0x6D, 0x0],
    [0x222C, 2, 0x222B, 0x222B], [0x222F, 2, 0x222E, 0x222E], [0x2460, 1, 0x31, 0x0],
    [0x2461, 1, 0x32, 0x0], [0x2462, 1, 0x33, 0x0], [0x2463, 1, 0x34, 0x0],
    [0x2464, 1, 0x35, 0x0], [0x2465, 1, 0x36, 0x0], [0x2466, 1, 0x37, 0x0],
    [0x2467, 1, 0x38, 0x0], [0x2468, 1, 0x39, 0x0], [0x2469, 2, 0x31, 0x30],
    [0x246A, 2, 0x31, 0x31], [0x246B, 2, 0x31, 0x32], [0x246C, 2, 0x31, 0x33],
    [0x246D, 2, 0x31, 0x34], [0x246E, 2, 0x31, 0x35], [0x246F, 2, 0x31, 0x36],
    [0x2470, 2, 0x31, 0x37], [0x2471, 2, 0x31, 0x38], [0x2472, 2, 0x31, 0x39],
    [0x2473, 2, 0x32, 0x30], [0x2488, 2, 0x31, 0x2E], [0x2489, 2, 0x32, 0x2E],
    [0x248A, 2, 0x33, 0x2E], [0x248B, 2, 0x34, 0x2E], [0x248C, 2, 0x35, 0x2E],
    [0x248D, 2, 0x36, 0x2E], [0x248E, 2, 0x37, 0x2E], [0x248F, 2, 0x38, 0x2E],
    [0x2490, 2, 0x39, 0x2E], [0x24B6, 1, 0x41, 0x0], [0x24B7, 1, 0x42, 0x0],
    [0x24B8, 1, 0x43, 0x0], [0x24B9, 1, 0x44, 0x0], [0x24BA, 1, 0x45, 0x0],
    [0x24BB, 1, 0x46, 0x0], [0x24BC, 1, 0x47, 0x0], [0x24BD, 1, 0x48, 0x0],
    [0x24BE, 1, 0x49, 0x0], [0x24BF, 1, 0x4A, 0x0], [0x24C0, 1, 0x4B, 0x0],
    [0x24C1, 1, 0x4C, 0x0], [0x24C2, 1, 0x4D, 0x0], [0x24C3, 1, 0x4E, 0x0],
    [0x24C4, 1, 0x4F, 0x0], [0x24C5, 1, 0x50, 0x0], [0x24C6, 1, 0x51, 0x0],
    [0x24C7, 1, 0x52, 0x0], [0x24C8, 1, 0x53, 0x0], [0x24C9, 1, 0x54, 0x0],
    [0x24CA, 1, 0x55, 0x0], [0x24CB, 1, 0x56, 0x0], [0x24CC, 1, 0x57, 0x0],
    [0x24CD, 1, 0x58, 0x0], [0x24CE, 1, 0x59, 0x0], [0x24CF, 1, 0x5A, 0x0],
    [0x24D0, 1, 0x61, 0x0], [0x24D1, 1, 0x62, 0x0], [0x24D2, 1, 0x63, 0x0],
    [0x24D3, 1, 0x64, 0x0], [0x24D4, 1, 0x65, 0x0], [0x24D5, 1, 0x66, 0x0],
    [0x24D6, 1, 0x67, 0x0], [0x24D7, 1, 0x68, 0x0], [0x24D8, 1, 0x69, 0x0],
    [0x24D9, 1, 0x6A, 0x0], [0x24DA, 1, 0x6B, 0x0], [0x24DB, 1, 0x6C, 0x0],
    [0x24DC, 1, 0x6D, 0x0], [0x24DD, 1, 0x6E, 0x0], [0x24DE, 1, 0x6F, 0x0],
    [0x24DF, 1, 0x70, 0x0], [0x24E0, 1, 0x71, 0x0], [0x24E1, 1, 0x72, 0x0],
    [0x24E2, 1, 0x73, 0x0], [0x24E3, 1, 0x74, 0x0], [0x24E4, 1, 0x75, 0x0],
    [0x24E5, 1, 0x76, 0x0], [0x24E6, 1, 0x77, 0x0], [0x24E7, 1, 0x78, 0x0],
    [0x24E8, 1, 0x79, 0x0], [0x24E9, 1, 0x7A, 0x0], [0x24EA, 1, 0x30, 0x0],
    [0x2A75, 2, 0x3D, 0x3D], [0x2C7C, 1, 0x6A, 0x0], [0x2C7D, 1, 0x56, 0x0],
    [0x2D6F, 1, 0x2D61, 0x0], [0x2E9F, 1, 0x6BCD, 0x0], [0x2EF3, 1, 0x9F9F, 0x0],
    [0x2F00, 1, 0x4E00, 0x0], [0x2F01, 1, 0x4E28, 0x0], [0x2F02, 1, 0x4E36, 0x0],
    [0x2F03, 1, 0x4E3F, 0x0], [0x2F04, 1, 0x4E59, 0x0], [0x2F05, 1, 0x4E85, 0x0],
    [0x2F06, 1, 0x4E8C, 0x0], [0x2F07, 1, 0x4EA0, 0x0], [0x2F08, 1, 0x4EBA, 0x0],
    [0x2F09, 1, 0x513F, 0x0], [0x2F0A, 1, 0x5165, 0x0], [0x2F0B, 1, 0x516B, 0x0],
    [0x2F0C, 1, 0x5182, 0x0], [0x2F0D, 1, 0x5196, 0x0], [0x2F0E, 1, 0x51AB, 0x0],
    [0x2F0F, 1, 0x51E0, 0x0], [0x2F10, 1, 0x51F5, 0x0], [0x2F11, 1, 0x5200, 0x0],
    [0x2F12, 1, 0x529B, 0x0], [0x2F13, 1, 0x52F9, 0x0], [0x2F14, 1, 0x5315, 0x0],
    [0x2F15, 1, 0x531A, 0x0], [0x2F16, 1, 0x5338, 0x0], [0x2F17, 1, 0x5341, 0x0],
    [0x2F18, 1, 0x535C, 0x0], [0x2F19, 1, 0x5369, 0x0], [0x2F1A, 1, 0x5382, 0x0],
    [0x2F1B, 1, 0x53B6, 0x0], [0x2F1C, 1, 0x53C8, 0x0], [0x2F1D, 1, 0x53E3, 0x0],
    [0x2F1E, 1, 0x56D7, 0x0], [0x2F1F, 1, 0x571F, 0x0], [0x2F20, 1, 0x58EB, 0x0],
    [0x2F21, 1, 0x5902, 0x0], [0x2F22, 1, 0x590A, 0x0], [0x2F23, 1, 0x5915, 0x0],
    [0x2F24, 1, 0x5927, 0x0], [0x2F25, 1, 0x5973, 0x0], [0x2F26, 1, 0x5B50, 0x0],
    [0x2F27, 1, 0x5B80, 0x0], [0x2F28, 1, 0x5BF8, 0x0], [0x2F29, 1, 0x5C0F, 0x0],
    [0x2F2A, 1, 0x5C22, 0x0], [0x2F2B, 1, 0x5C38, 0x0], [0x2F2C, 1, 0x5C6E, 0x0],
    [0x2F2D, 1, 0x5C71, 0x0], [0x2F2E, 1, 0x5DDB, 0x0], [0x2F2F, 1, 0x5DE5, 0x0],
    [0x2F30, 1, 0x5DF1, 0x0], [0x2F31, 1, 0x5DFE, 0x0], [0x2F32, 1, 0x5E72, 0x0],
    [0x2F33, 1, 0x5E7A, 0x0], [0x2F34, 1, 0x5E7F, 0x0], [0x2F35, 1, 0x5EF4, 0x0],
    [0x2F36, 1, 0x5EFE, 0x0], [0x2F37, 1, 0x5F0B, 0x0], [0x2F38, 1, 0x5F13, 0x0],
    [0x2F39, 1, 0x5F50, 0x0], [0x2F3A, 1, 0x5F61, 0x0], [0x2F3B, 1, 0x5F73, 0x0],
    [0x2F3C, 1, 0x5FC3, 0x0], [0x2F3D, 1, 0x6208, 0x0], [0x2F3E, 1, 0x6236, 0x0],
    [0x2F3F, 1, 0x624B, 0x0], [0x2F40, 1, 0x652F, 0x0], [0x2F41, 1, 0x6534, 0x0],
    [0x2F42, 1, 0x6587, 0x0], [0x2F43, 1, 0x6597, 0x0], [0x2F44, 1, 0x65A4, 0x0],
    [0x2F45, 1, 0x65B9, 0x0], [0x2F46, 1, 0x65E0, 0x0], [0x2F47, 1, 0x65E5, 0x0],
    [0x2F48, 1, 0x66F0, 0x0], [0x2F49, 1, 0x6708, 0x0], [0x2F4A, 1, 0x6728, 0x0],
    [0x2F4B, 1, 0x6B20, 0x0], [0x2F4C, 1, 0x6B62, 0x0], [0x2F4D, 1, 0x6B79, 0x0],
    [0x2F4E, 1, 0x6BB3, 0x0], [0x2F4F, 1, 0x6BCB, 0x0], [0x2F50, 1, 0x6BD4, 0x0],
    [0x2F51, 1, 0x6BDB, 0x0], [0x2F52, 1, 0x6C0F, 0x0], [0x2F53, 1, 0x6C14, 0x0],
    [0x2F54, 1, 0x6C34, 0x0], [0x2F55, 1, 0x706B, 0x0], [0x2F56, 1, 0x722A, 0x0],
    [0x2F57, 1, 0x7236, 0x0], [0x2F58, 1, 0x723B, 0x0], [0x2F59, 1, 0x723F, 0x0],
    [0x2F5A, 1, 0x7247, 0x0], [0x2F5B, 1, 0x7259, 0x0], [0x2F5C, 1, 0x725B, 0x0],
    [0x2F5D, 1, 0x72AC, 0x0], [0x2F5E, 1, 0x7384, 0x0], [0x2F5F, 1, 0x7389, 0x0],
    [0x2F60, 1, 0x74DC, 0x0], [0x2F61, 1, 0x74E6, 0x0], [0x2F62, 1, 0x7518, 0x0],
    [0x2F63, 1, 0x751F, 0x0], [0x2F64, 1, 0x7528, 0x0], [0x2F65, 1, 0x7530, 0x0],
    [0x2F66, 1, 0x758B, 0x0], [0x2F67, 1, 0x7592, 0x0], [0x2F68, 1, 0x7676, 0x0],
    [0x2F69, 1, 0x767D, 0x0], [0x2F6A, 1, 0x76AE, 0x0], [0x2F6B, 1, 0x76BF, 0x0],
    [0x2F6C, 1, 0x76EE, 0x0], [0x2F6D, 1, 0x77DB, 0x0], [0x2F6E, 1, 0x77E2, 0x0],
    [0x2F6F, 1, 0x77F3, 0x0], [0x2F70, 1, 0x793A, 0x0], [0x2F71, 1, 0x79B8, 0x0],
    [0x2F72, 1, 0x79BE, 0x0], [0x2F73, 1, 0x7A74, 0x0], [0x2F74, 1, 0x7ACB, 0x0],
    [0x2F75, 1, 0x7AF9, 0x0], [0x2F76, 1, 0x7C73, 0x0], [0x2F77, 1, 0x7CF8, 0x0],
    [0x2F78, 1, 0x7F36, 0x0], [0x2F79, 1, 0x7F51, 0x0], [0x2F7A, 1, 0x7F8A, 0x0],
    [0x2F7B, 1, 0x7FBD, 0x0], [0x2F7C, 1, 0x8001, 0x0], [0x2F7D, 1, 0x800C, 0x0],
    [0x2F7E, 1, 0x8012, 0x0], [0x2F7F, 1, 0x8033, 0x0], [0x2F80, 1, 0x807F, 0x0],
    [0x2F81, 1, 0x8089, 0x0], [0x2F82, 1, 0x81E3, 0x0], [0x2F83, 1, 0x81EA, 0x0],
    [0x2F84, 1, 0x81F3, 0x0], [0x2F85, 1, 0x81FC, 0x0], [0x2F86, 1, 0x820C, 0x0],
    [0x2F87, 1, 0x821B, 0x0], [0x2F88, 1, 0x821F, 0x0], [0x2F89, 1, 0x826E, 0x0],
    [0x2F8A, 1, 0x8272, 0x0], [0x2F8B, 1, 0x8278, 0x0], [0x2F8C, 1, 0x864D, 0x0],
    [0x2F8D, 1, 0x866B, 0x0], [0x2F8E, 1, 0x8840, 0x0], [0x2F8F, 1, 0x884C, 0x0],
    [0x2F90, 1, 0x8863, 0x0], [0x2F91, 1, 0x897E, 0x0], [0x2F92, 1, 0x898B, 0x0],
    [0x2F93, 1, 0x89D2, 0x0], [0x2F94, 1, 0x8A00, 0x0], [0x2F95, 1, 0x8C37, 0x0],
    [0x2F96, 1, 0x8C46, 0x0], [0x2F97, 1, 0x8C55, 0x0], [0x2F98, 1, 0x8C78, 0x0],
    [0x2F99, 1, 0x8C9D, 0x0], [0x2F9A, 1, 0x8D64, 0x0], [0x2F9B, 1, 0x8D70, 0x0],
    [0x2F9C, 1, 0x8DB3, 0x0], [0x2F9D, 1, 0x8EAB, 0x0], [0x2F9E, 1, 0x8ECA, 0x0],
    [0x2F9F, 1, 0x8F9B, 0x0], [0x2FA0, 1, 0x8FB0, 0x0], [0x2FA1, 1, 0x8FB5, 0x0],
    [0x2FA2, 1, 0x9091, 0x0], [0x2FA3, 1, 0x9149, 0x0], [0x2FA4, 1, 0x91C6, 0x0],
    [0x2FA5, 1, 0x91CC, 0x0], [0x2FA6, 1, 0x91D1, 0x0], [0x2FA7, 1, 0x9577, 0x0],
    [0x2FA8, 1, 0x9580, 0x0], [0x2FA9, 1, 0x961C, 0x0], [0x2FAA, 1, 0x96B6, 0x0],
    [0x2FAB, 1, 0x96B9, 0x0], [0x2FAC, 1, 0x96E8, 0x0], [0x2FAD, 1, 0x9751, 0x0],
    [0x2FAE, 1, 0x975E, 0x0], [0x2FAF, 1, 0x9762, 0x0], [0x2FB0, 1, 0x9769, 0x0],
    [0x2FB1, 1, 0x97CB, 0x0], [0x2FB2, 1, 0x97ED, 0x0], [0x2FB3, 1, 0x97F3, 0x0],
    [0x2FB4, 1, 0x9801, 0x0], [0x2FB5, 1, 0x98A8, 0x0], [0x2FB6, 1, 0x98DB, 0x0],
    [0x2FB7, 1, 0x98DF, 0x0], [0x2FB8, 1, 0x9996, 0x0], [0x2FB9, 1, 0x9999, 0x0],
    [0x2FBA, 1, 0x99AC, 0x0], [0x2FBB, 1, 0x9AA8, 0x0], [0x2FBC, 1, 0x9AD8, 0x0],
    [0x2FBD, 1, 0x9ADF, 0x0], [0x2FBE, 1, 0x9B25, 0x0], [0x2FBF, 1, 0x9B2F, 0x0],
    [0x2FC0, 1, 0x9B32, 0x0], [0x2FC1, 1, 0x9B3C, 0x0], [0x2FC2, 1, 0x9B5A, 0x0],
    [0x2FC3, 1, 0x9CE5, 0x0], [0x2FC4, 1, 0x9E75, 0x0], [0x2FC5, 1, 0x9E7F, 0x0],
    [0x2FC6, 1, 0x9EA5, 0x0], [0x2FC7, 1, 0x9EBB, 0x0], [0x2FC8, 1, 0x9EC3, 0x0],
    [0x2FC9, 1, 0x9ECD, 0x0], [0x2FCA, 1, 0x9ED1, 0x0], [0x2FCB, 1, 0x9EF9, 0x0],
    [0x2FCC, 1, 0x9EFD, 0x0], [0x2FCD, 1, 0x9F0E, 0x0], [0x2FCE, 1, 0x9F13, 0x0],
    [0x2FCF, 1, 0x9F20, 0x0], [0x2FD0, 1, 0x9F3B, 0x0], [0x2FD1, 1, 0x9F4A, 0x0],
    [0x2FD2, 1, 0x9F52, 0x0], [0x2FD3, 1, 0x9F8D, 0x0], [0x2FD4, 1, 0x9F9C, 0x0],
    [0x2FD5, 1, 0x9FA0, 0x0], [0x3000, 1, 0x20, 0x0], [0x3036, 1, 0x3012, 0x0],
    [0x3038, 1, 0x5341, 0x0], [0x3039, 1, 0x5344, 0x0], [0x303A, 1, 0x5345, 0x0],
    [0x309B, 2, 0x20, 0x3099], [0x309C, 2, 0x20, 0x309A], [0x309F, 2, 0x3088, 0x308A],
    [0x30FF, 2, 0x30B3, 0x30C8], [0x3131, 1, 0x1100, 0x0], [0x3132, 1, 0x1101, 0x0],
    [0x3133, 1, 0x11AA, 0x0], [0x3134, 1, 0x1102, 0x0], [0x3135, 1, 0x11AC, 0x0],
    [0x3136, 1, 0x11AD, 0x0], [0x3137, 1, 0x1103, 0x0], [0x3138, 1, 0x1104, 0x0],
    [0x3139, 1, 0x1105, 0x0], [0x313A, 1, 0x11B0, 0x0], [0x313B, 1, 0x11B1, 0x0],
    [0x313C, 1, 0x11B2, 0x0], [0x313D, 1, 0x11B3, 0x0], [0x313E, 1, 0x11B4, 0x0],
    [0x313F, 1, 0x11B5, 0x0], [0x3140, 1, 0x111A, 0x0], [0x3141, 1, 0x1106, 0x0],
    [0x3142, 1, 0x1107, 0x0], [0x3143, 1, 0x1108, 0x0], [0x3144, 1, 0x1121, 0x0],
    [0x3145, 1, 0x1109, 0x0], [0x3146, 1, 0x110A, 0x0], [0x3147, 1, 0x110B, 0x0],
    [0x3148, 1, 0x110C, 0x0], [0x3149, 1, 0x110D, 0x0], [0x314A, 1, 0x110E, 0x0],
    [0x314B, 1, 0x110F, 0x0], [0x314C, 1, 0x1110, 0x0], [0x314D, 1, 0x1111, 0x0],
    [0x314E, 1, 0x1112, 0x0], [0x314F, 1, 0x1161, 0x0], [0x3150, 1, 0x1162, 0x0],
    [0x3151, 1, 0x1163, 0x0], [0x3152, 1, 0x1164, 0x0], [0x3153, 1, 0x1165, 0x0],
    [0x3154, 1, 0x1166, 0x0], [0x3155, 1, 0x1167, 0x0], [0x3156, 1, 0x1168, 0x0],
    [0x3157, 1, 0x1169, 0x0], [0x3158, 1, 0x116A, 0x0], [0x3159, 1, 0x116B, 0x0],
    [0x315A, 1, 0x116C, 0x0], [0x315B, 1, 0x116D, 0x0], [0x315C, 1, 0x116E, 0x0],
    [0x315D, 1, 0x116F, 0x0], [0x315E, 1, 0x1170, 0x0], [0x315F, 1, 0x1171, 0x0],
    [0x3160, 1, 0x1172, 0x0], [0x3161, 1, 0x1173, 0x0], [0x3162, 1, 0x1174, 0x0],
    [0x3163, 1, 0x1175, 0x0], [0x3164, 1, 0x1160, 0x0], [0x3165, 1, 0x1114, 0x0],
    [0x3166, 1, 0x1115, 0x0], [0x3167, 1, 0x11C7, 0x0], [0x3168, 1, 0x11C8, 0x0],
    [0x3169, 1, 0x11CC, 0x0], [0x316A, 1, 0x11CE, 0x0], [0x316B, 1, 0x11D3, 0x0],
    [0x316C, 1, 0x11D7, 0x0], [0x316D, 1, 0x11D9, 0x0], [0x316E, 1, 0x111C, 0x0],
    [0x316F, 1, 0x11DD, 0x0], [0x3170, 1, 0x11DF, 0x0], [0x3171, 1, 0x111D, 0x0],
    [0x3172, 1, 0x111E, 0x0], [0x3173, 1, 0x1120, 0x0], [0x3174, 1, 0x1122, 0x0],
    [0x3175, 1, 0x1123, 0x0], [0x3176, 1, 0x1127, 0x0], [0x3177, 1, 0x1129, 0x0],
    [0x3178, 1, 0x112B, 0x0], [0x3179, 1, 0x112C, 0x0], [0x317A, 1, 0x112D, 0x0],
    [0x317B, 1, 0x112E, 0x0], [0x317C, 1, 0x112F, 0x0], [0x317D, 1, 0x1132, 0x0],
    [0x317E, 1, 0x1136, 0x0], [0x317F, 1, 0x1140, 0x0], [0x3180, 1, 0x1147, 0x0],
    [0x3181, 1, 0x114C, 0x0], [0x3182, 1, 0x11F1, 0x0], [0x3183, 1, 0x11F2, 0x0],
    [0x3184, 1, 0x1157, 0x0], [0x3185, 1, 0x1158, 0x0], [0x3186, 1, 0x1159, 0x0],
    [0x3187, 1, 0x1184, 0x0], [0x3188, 1, 0x1185, 0x0], [0x3189, 1, 0x1188, 0x0],
    [0x318A, 1, 0x1191, 0x0], [0x318B, 1, 0x1192, 0x0], [0x318C, 1, 0x1194, 0x0],
    [0x318D, 1, 0x119E, 0x0], [0x318E, 1, 0x11A1, 0x0], [0x3192, 1, 0x4E00, 0x0],
    [0x3193, 1, 0x4E8C, 0x0], [0x3194, 1, 0x4E09, 0x0], [0x3195, 1, 0x56DB, 0x0],
    [0x3196, 1, 0x4E0A, 0x0], [0x3197, 1, 0x4E2D, 0x0], [0x3198, 1, 0x4E0B, 0x0],
    [0x3199, 1, 0x7532, 0x0], [0x319A, 1, 0x4E59, 0x0], [0x319B, 1, 0x4E19, 0x0],
    [0x319C, 1, 0x4E01, 0x0], [0x319D, 1, 0x5929, 0x0], [0x319E, 1, 0x5730, 0x0],
    [0x319F, 1, 0x4EBA, 0x0], [0x3244, 1, 0x554F, 0x0], [0x3245, 1, 0x5E7C, 0x0],
    [0x3246, 1, 0x6587, 0x0], [0x3247, 1, 0x7B8F, 0x0], [0x3251, 2, 0x32, 0x31],
    [0x3252, 2, 0x32, 0x32], [0x3253, 2, 0x32, 0x33], [0x3254, 2, 0x32, 0x34],
    [0x3255, 2, 0x32, 0x35], [0x3256, 2, 0x32, 0x36], [0x3257, 2, 0x32, 0x37],
    [0x3258, 2, 0x32, 0x38], [0x3259, 2, 0x32, 0x39], [0x325A, 2, 0x33, 0x30],
    [0x325B, 2, 0x33, 0x31], [0x325C, 2, 0x33, 0x32], [0x325D, 2, 0x33, 0x33],
    [0x325E, 2, 0x33, 0x34], [0x325F, 2, 0x33, 0x35], [0x3260, 1, 0x1100, 0x0],
    [0x3261, 1, 0x1102, 0x0], [0x3262, 1, 0x1103, 0x0], [0x3263, 1, 0x1105, 0x0],
    [0x3264, 1, 0x1106, 0x0], [0x3265, 1, 0x1107, 0x0], [0x3266, 1, 0x1109, 0x0],
    [0x3267, 1, 0x110B, 0x0], [0x3268, 1, 0x110C, 0x0], [0x3269, 1, 0x110E, 0x0],
    [0x326A, 1, 0x110F, 0x0], [0x326B, 1, 0x1110, 0x0], [0x326C, 1, 0x1111, 0x0],
    [0x326D, 1, 0x1112, 0x0], [0x326E, 2, 0x1100, 0x1161], [0x326F, 2, 0x1102, 0x1161],
    [0x3270, 2, 0x1103, 0x1161], [0x3271, 2, 0x1105, 0x1161], [0x3272, 2, 0x1106, 0x1161],
    [0x3273, 2, 0x1107, 0x1161], [0x3274, 2, 0x1109, 0x1161], [0x3275, 2, 0x110B, 0x1161],
    [0x3276, 2, 0x110C, 0x1161], [0x3277, 2, 0x110E, 0x1161], [0x3278, 2, 0x110F, 0x1161],
    [0x3279, 2, 0x1110, 0x1161], [0x327A, 2, 0x1111, 0x1161], [0x327B, 2, 0x1112, 0x1161],
    [0x327E, 2, 0x110B, 0x116E], [0x3280, 1, 0x4E00, 0x0], [0x3281, 1, 0x4E8C, 0x0],
    [0x3282, 1, 0x4E09, 0x0], [0x3283, 1, 0x56DB, 0x0], [0x3284, 1, 0x4E94, 0x0],
    [0x3285, 1, 0x516D, 0x0], [0x3286, 1, 0x4E03, 0x0], [0x3287, 1, 0x516B, 0x0],
    [0x3288, 1, 0x4E5D, 0x0], [0x3289, 1, 0x5341, 0x0], [0x328A, 1, 0x6708, 0x0],
    [0x328B, 1, 0x706B, 0x0], [0x328C, 1, 0x6C34, 0x0], [0x328D, 1, 0x6728, 0x0],
    [0x328E, 1, 0x91D1, 0x0], [0x328F, 1, 0x571F, 0x0], [0x3290, 1, 0x65E5, 0x0],
    [0x3291, 1, 0x682A, 0x0], [0x3292, 1, 0x6709, 0x0], [0x3293, 1, 0x793E, 0x0],
    [0x3294, 1, 0x540D, 0x0], [0x3295, 1, 0x7279, 0x0], [0x3296, 1, 0x8CA1, 0x0],
    [0x3297, 1, 0x795D, 0x0], [0x3298, 1, 0x52B4, 0x0], [0x3299, 1, 0x79D8, 0x0],
    [0x329A, 1, 0x7537, 0x0], [0x329B, 1, 0x5973, 0x0], [0x329C, 1, 0x9069, 0x0],
    [0x329D, 1, 0x512A, 0x0], [0x329E, 1, 0x5370, 0x0], [0x329F, 1, 0x6CE8, 0x0],
    [0x32A0, 1, 0x9805, 0x0], [0x32A1, 1, 0x4F11, 0x0], [0x32A2, 1, 0x5199, 0x0],
    [0x32A3, 1, 0x6B63, 0x0], [0x32A4, 1, 0x4E0A, 0x0], [0x32A5, 1, 0x4E2D, 0x0],
    [0x32A6, 1, 0x4E0B, 0x0], [0x32A7, 1, 0x5DE6, 0x0], [0x32A8, 1, 0x53F3, 0x0],
    [0x32A9, 1, 0x533B, 0x0], [0x32AA, 1, 0x5B97, 0x0], [0x32AB, 1, 0x5B66, 0x0],
    [0x32AC, 1, 0x76E3, 0x0], [0x32AD, 1, 0x4F01, 0x0], [0x32AE, 1, 0x8CC7, 0x0],
    [0x32AF, 1, 0x5354, 0x0], [0x32B0, 1, 0x591C, 0x0], [0x32B1, 2, 0x33, 0x36],
    [0x32B2, 2, 0x33, 0x37], [0x32B3, 2, 0x33, 0x38], [0x32B4, 2, 0x33, 0x39],
    [0x32B5, 2, 0x34, 0x30], [0x32B6, 2, 0x34, 0x31], [0x32B7, 2, 0x34, 0x32],
    [0x32B8, 2, 0x34, 0x33], [0x32B9, 2, 0x34, 0x34], [0x32BA, 2, 0x34, 0x35],
    [0x32BB, 2, 0x34, 0x36], [0x32BC, 2, 0x34, 0x37], [0x32BD, 2, 0x34, 0x38],
    [0x32BE, 2, 0x34, 0x39], [0x32BF, 2, 0x35, 0x30], [0x32C0, 2, 0x31, 0x6708],
    [0x32C1, 2, 0x32, 0x6708], [0x32C2, 2, 0x33, 0x6708], [0x32C3, 2, 0x34, 0x6708],
    [0x32C4, 2, 0x35, 0x6708], [0x32C5, 2, 0x36, 0x6708], [0x32C6, 2, 0x37, 0x6708],
    [0x32C7, 2, 0x38, 0x6708], [0x32C8, 2, 0x39, 0x6708], [0x32CC, 2, 0x48, 0x67],
    [0x32CE, 2, 0x65, 0x56], [0x32D0, 1, 0x30A2, 0x0], [0x32D1, 1, 0x30A4, 0x0],
    [0x32D2, 1, 0x30A6, 0x0], [0x32D3, 1, 0x30A8, 0x0], [0x32D4, 1, 0x30AA, 0x0],
    [0x32D5, 1, 0x30AB, 0x0], [0x32D6, 1, 0x30AD, 0x0], [0x32D7, 1, 0x30AF, 0x0],
    [0x32D8, 1, 0x30B1, 0x0], [0x32D9, 1, 0x30B3, 0x0], [0x32DA, 1, 0x30B5, 0x0],
    [0x32DB, 1, 0x30B7, 0x0], [0x32DC, 1, 0x30B9, 0x0], [0x32DD, 1, 0x30BB, 0x0],
    [0x32DE, 1, 0x30BD, 0x0], [0x32DF, 1, 0x30BF, 0x0], [0x32E0, 1, 0x30C1, 0x0],
    [0x32E1, 1, 0x30C4, 0x0], [0x32E2, 1, 0x30C6, 0x0], [0x32E3, 1, 0x30C8, 0x0],
    [0x32E4, 1, 0x30CA, 0x0], [0x32E5, 1, 0x30CB, 0x0], [0x32E6, 1, 0x30CC, 0x0],
    [0x32E7, 1, 0x30CD, 0x0], [0x32E8, 1, 0x30CE, 0x0], [0x32E9, 1, 0x30CF, 0x0],
    [0x32EA, 1, 0x30D2, 0x0], [0x32EB, 1, 0x30D5, 0x0], [0x32EC, 1, 0x30D8, 0x0],
    [0x32ED, 1, 0x30DB, 0x0], [0x32EE, 1, 0x30DE, 0x0], [0x32EF, 1, 0x30DF, 0x0],
    [0x32F0, 1, 0x30E0, 0x0], [0x32F1, 1, 0x30E1, 0x0], [0x32F2, 1, 0x30E2, 0x0],
    [0x32F3, 1, 0x30E4, 0x0], [0x32F4, 1, 0x30E6, 0x0], [0x32F5, 1, 0x30E8, 0x0],
    [0x32F6, 1, 0x30E9, 0x0], [0x32F7, 1, 0x30EA, 0x0], [0x32F8, 1, 0x30EB, 0x0],
    [0x32F9, 1, 0x30EC, 0x0], [0x32FA, 1, 0x30ED, 0x0], [0x32FB, 1, 0x30EF, 0x0],
    [0x32FC, 1, 0x30F0, 0x0], [0x32FD, 1, 0x30F1, 0x0], [0x32FE, 1, 0x30F2, 0x0],
    [0x32FF, 2, 0x4EE4, 0x548C], [0x3310, 2, 0x30AE, 0x30AC], [0x3314, 2, 0x30AD, 0x30ED],
    [0x3325, 2, 0x30C7, 0x30B7], [0x3326, 2, 0x30C9, 0x30EB], [0x3327, 2, 0x30C8, 0x30F3],
    [0x3328, 2, 0x30CA, 0x30CE], [0x3330, 2, 0x30D4, 0x30B3], [0x3331, 2, 0x30D3, 0x30EB],
    [0x3337, 2, 0x30DA, 0x30BD], [0x333F, 2, 0x30DB, 0x30F3], [0x3349, 2, 0x30DF, 0x30EA],
    [0x334B, 2, 0x30E1, 0x30AC], [0x3352, 2, 0x30EA, 0x30E9], [0x3355, 2, 0x30EC, 0x30E0],
    [0x3358, 2, 0x30, 0x70B9], [0x3359, 2, 0x31, 0x70B9], [0x335A, 2, 0x32, 0x70B9],
    [0x335B, 2, 0x33, 0x70B9], [0x335C, 2, 0x34, 0x70B9], [0x335D, 2, 0x35, 0x70B9],
    [0x335E, 2, 0x36, 0x70B9], [0x335F, 2, 0x37, 0x70B9], [0x3360, 2, 0x38, 0x70B9],
    [0x3361, 2, 0x39, 0x70B9], [0x3372, 2, 0x64, 0x61], [0x3373, 2, 0x41, 0x55],
    [0x3375, 2, 0x6F, 0x56], [0x3376, 2, 0x70, 0x63], [0x3377, 2, 0x64, 0x6D],
    [0x337A, 2, 0x49, 0x55], [0x337B, 2, 0x5E73, 0x6210], [0x337C, 2, 0x662D, 0x548C],
    [0x337D, 2, 0x5927, 0x6B63], [0x337E, 2, 0x660E, 0x6CBB], [0x3380, 2, 0x70, 0x41],
    [0x3381, 2, 0x6E, 0x41], [0x3382, 2, 0x3BC, 0x41], [0x3383, 2, 0x6D, 0x41],
    [0x3384, 2, 0x6B, 0x41], [0x3385, 2, 0x4B, 0x42], [0x3386, 2, 0x4D, 0x42],
    [0x3387, 2, 0x47, 0x42], [0x338A, 2, 0x70, 0x46], [0x338B, 2, 0x6E, 0x46],
    [0x338C, 2, 0x3BC, 0x46], [0x338D, 2, 0x3BC, 0x67], [0x338E, 2, 0x6D, 0x67],
    [0x338F, 2, 0x6B, 0x67], [0x3390, 2, 0x48, 0x7A], [0x3395, 2, 0x3BC, 0x2113],
    [0x3396, 2, 0x6D, 0x2113], [0x3397, 2, 0x64, 0x2113], [0x3398, 2, 0x6B, 0x2113],
    [0x3399, 2, 0x66, 0x6D], [0x339A, 2, 0x6E, 0x6D], [0x339B, 2, 0x3BC, 0x6D],
    [0x339C, 2, 0x6D, 0x6D], [0x339D, 2, 0x63, 0x6D], [0x339E, 2, 0x6B, 0x6D],
    [0x33A1, 2, 0x6D, 0xB2], [0x33A5, 2, 0x6D, 0xB3], [0x33A9, 2, 0x50, 0x61],
    [0x33B0, 2, 0x70, 0x73], [0x33B1, 2, 0x6E, 0x73], [0x33B2, 2, 0x3BC, 0x73],
    [0x33B3, 2, 0x6D, 0x73], [0x33B4, 2, 0x70, 0x56], [0x33B5, 2, 0x6E, 0x56],
    [0x33B6, 2, 0x3BC, 0x56], [0x33B7, 2, 0x6D, 0x56], [0x33B8, 2, 0x6B, 0x56],
    [0x33B9, 2, 0x4D, 0x56], [0x33BA, 2, 0x70, 0x57], [0x33BB, 2, 0x6E, 0x57],
    [0x33BC, 2, 0x3BC, 0x57], [0x33BD, 2, 0x6D, 0x57], [0x33BE, 2, 0x6B, 0x57],
    [0x33BF, 2, 0x4D, 0x57], [0x33C0, 2, 0x6B, 0x3A9], [0x33C1, 2, 0x4D, 0x3A9],
    [0x33C3, 2, 0x42, 0x71], [0x33C4, 2, 0x63, 0x63], [0x33C5, 2, 0x63, 0x64],
    [0x33C8, 2, 0x64, 0x42], [0x33C9, 2, 0x47, 0x79], [0x33CA, 2, 0x68, 0x61],
    [0x33CB, 2, 0x48, 0x50], [0x33CC, 2, 0x69, 0x6E], [0x33CD, 2, 0x4B, 0x4B],
    [0x33CE, 2, 0x4B, 0x4D], [0x33CF, 2, 0x6B, 0x74], [0x33D0, 2, 0x6C, 0x6D],
    [0x33D1, 2, 0x6C, 0x6E], [0x33D3, 2, 0x6C, 0x78], [0x33D4, 2, 0x6D, 0x62],
    [0x33D7, 2, 0x50, 0x48], [0x33DA, 2, 0x50, 0x52], [0x33DB, 2, 0x73, 0x72],
    [0x33DC, 2, 0x53, 0x76], [0x33DD, 2, 0x57, 0x62], [0x33E0, 2, 0x31, 0x65E5],
    [0x33E1, 2, 0x32, 0x65E5], [0x33E2, 2, 0x33, 0x65E5], [0x33E3, 2, 0x34, 0x65E5],
    [0x33E4, 2, 0x35, 0x65E5], [0x33E5, 2, 0x36, 0x65E5], [0x33E6, 2, 0x37, 0x65E5],
    [0x33E7, 2, 0x38, 0x65E5], [0x33E8, 2, 0x39, 0x65E5], [0xA69C, 1, 0x44A, 0x0],
    [0xA69D, 1, 0x44C, 0x0], [0xA770, 1, 0xA76F, 0x0], [0xA7F2, 1, 0x43, 0x0],
    [0xA7F3, 1, 0x46, 0x0], [0xA7F4, 1, 0x51, 0x0], [0xA7F8, 1, 0x126, 0x0],
    [0xA7F9, 1, 0x153, 0x0], [0xAB5C, 1, 0xA727, 0x0], [0xAB5D, 1, 0xAB37, 0x0],
    [0xAB5E, 1, 0x26B, 0x0], [0xAB5F, 1, 0xAB52, 0x0], [0xAB69, 1, 0x28D, 0x0],
    [0xFB00, 2, 0x66, 0x66], [0xFB01, 2, 0x66, 0x69], [0xFB02, 2, 0x66, 0x6C],
    [0xFB05, 2, 0x17F, 0x74], [0xFB06, 2, 0x73, 0x74], [0xFB13, 2, 0x574, 0x576],
    [0xFB14, 2, 0x574, 0x565], [0xFB15, 2, 0x574, 0x56B], [0xFB16, 2, 0x57E, 0x576],
    [0xFB17, 2, 0x574, 0x56D], [0xFB20, 1, 0x5E2, 0x0], [0xFB21, 1, 0x5D0, 0x0],
    [0xFB22, 1, 0x5D3, 0x0], [0xFB23, 1, 0x5D4, 0x0], [0xFB24, 1, 0x5DB, 0x0],
    [0xFB25, 1, 0x5DC, 0x0], [0xFB26, 1, 0x5DD, 0x0], [0xFB27, 1, 0x5E8, 0x0],
    [0xFB28, 1, 0x5EA, 0x0], [0xFB29, 1, 0x2B, 0x0], [0xFB4F, 2, 0x5D0, 0x5DC],
    [0xFB50, 1, 0x671, 0x0], [0xFB51, 1, 0x671, 0x0], [0xFB52, 1, 0x67B, 0x0],
    [0xFB53, 1, 0x67B, 0x0], [0xFB54, 1, 0x67B, 0x0], [0xFB55, 1, 0x67B, 0x0],
    [0xFB56, 1, 0x67E, 0x0], [0xFB57, 1, 0x67E, 0x0], [0xFB58, 1, 0x67E, 0x0],
    [0xFB59, 1, 0x67E, 0x0], [0xFB5A, 1, 0x680, 0x0], [0xFB5B, 1, 0x680, 0x0],
    [0xFB5C, 1, 0x680, 0x0], [0xFB5D, 1, 0x680, 0x0], [0xFB5E, 1, 0x67A, 0x0],
    [0xFB5F, 1, 0x67A, 0x0], [0xFB60, 1, 0x67A, 0x0], [0xFB61, 1, 0x67A, 0x0],
    [0xFB62, 1, 0x67F, 0x0], [0xFB63, 1, 0x67F, 0x0], [0xFB64, 1, 0x67F, 0x0],
    [0xFB65, 1, 0x67F, 0x0], [0xFB66, 1, 0x679, 0x0], [0xFB67, 1, 0x679, 0x0],
    [0xFB68, 1, 0x679, 0x0], [0xFB69, 1, 0x679, 0x0], [0xFB6A, 1, 0x6A4, 0x0],
    [0xFB6B, 1, 0x6A4, 0x0], [0xFB6C, 1, 0x6A4, 0x0], [0xFB6D, 1, 0x6A4, 0x0],
    [0xFB6E, 1, 0x6A6, 0x0], [0xFB6F, 1, 0x6A6, 0x0], [0xFB70, 1, 0x6A6, 0x0],
    [0xFB71, 1, 0x6A6, 0x0], [0xFB72, 1, 0x684, 0x0], [0xFB73, 1, 0x684, 0x0],
    [0xFB74, 1, 0x684, 0x0], [0xFB75, 1, 0x684, 0x0], [0xFB76, 1, 0x683, 0x0],
    [0xFB77, 1, 0x683, 0x0], [0xFB78, 1, 0x683, 0x0], [0xFB79, 1, 0x683, 0x0],
    [0xFB7A, 1, 0x686, 0x0], [0xFB7B, 1, 0x686, 0x0], [0xFB7C, 1, 0x686, 0x0],
    [0xFB7D, 1, 0x686, 0x0], [0xFB7E, 1, 0x687, 0x0], [0xFB7F, 1, 0x687, 0x0],
    [0xFB80, 1, 0x687, 0x0], [0xFB81, 1, 0x687, 0x0], [0xFB82, 1, 0x68D, 0x0],
    [0xFB83, 1, 0x68D, 0x0], [0xFB84, 1, 0x68C, 0x0], [0xFB85, 1, 0x68C, 0x0],
    [0xFB86, 1, 0x68E, 0x0], [0xFB87, 1, 0x68E, 0x0], [0xFB88, 1, 0x688, 0x0],
    [0xFB89, 1, 0x688, 0x0], [0xFB8A, 1, 0x698, 0x0], [0xFB8B, 1, 0x698, 0x0],
    [0xFB8C, 1, 0x691, 0x0], [0xFB8D, 1, 0x691, 0x0], [0xFB8E, 1, 0x6A9, 0x0],
    [0xFB8F, 1, 0x6A9, 0x0], [0xFB90, 1, 0x6A9, 0x0], [0xFB91, 1, 0x6A9, 0x0],
    [0xFB92, 1, 0x6AF, 0x0], [0xFB93, 1, 0x6AF, 0x0], [0xFB94, 1, 0x6AF, 0x0],
    [0xFB95, 1, 0x6AF, 0x0], [0xFB96, 1, 0x6B3, 0x0], [0xFB97, 1, 0x6B3, 0x0],
    [0xFB98, 1, 0x6B3, 0x0], [0xFB99, 1, 0x6B3, 0x0], [0xFB9A, 1, 0x6B1, 0x0],
    [0xFB9B, 1, 0x6B1, 0x0], [0xFB9C, 1, 0x6B1, 0x0], [0xFB9D, 1, 0x6B1, 0x0],
    [0xFB9E, 1, 0x6BA, 0x0], [0xFB9F, 1, 0x6BA, 0x0], [0xFBA0, 1, 0x6BB, 0x0],
    [0xFBA1, 1, 0x6BB, 0x0], [0xFBA2, 1, 0x6BB, 0x0], [0xFBA3, 1, 0x6BB, 0x0],
    [0xFBA4, 1, 0x6C0, 0x0], [0xFBA5, 1, 0x6C0, 0x0], [0xFBA6, 1, 0x6C1, 0x0],
    [0xFBA7, 1, 0x6C1, 0x0], [0xFBA8, 1, 0x6C1, 0x0], [0xFBA9, 1, 0x6C1, 0x0],
    [0xFBAA, 1, 0x6BE, 0x0], [0xFBAB, 1, 0x6BE, 0x0], [0xFBAC, 1, 0x6BE, 0x0],
    [0xFBAD, 1, 0x6BE, 0x0], [0xFBAE, 1, 0x6D2, 0x0], [0xFBAF, 1, 0x6D2, 0x0],
    [0xFBB0, 1, 0x6D3, 0x0], [0xFBB1, 1, 0x6D3, 0x0], [0xFBD3, 1, 0x6AD, 0x0],
    [0xFBD4, 1, 0x6AD, 0x0], [0xFBD5, 1, 0x6AD, 0x0], [0xFBD6, 1, 0x6AD, 0x0],
    [0xFBD7, 1, 0x6C7, 0x0], [0xFBD8, 1, 0x6C7, 0x0], [0xFBD9, 1, 0x6C6, 0x0],
    [0xFBDA, 1, 0x6C6, 0x0], [0xFBDB, 1, 0x6C8, 0x0], [0xFBDC, 1, 0x6C8, 0x0],
    [0xFBDD, 1, 0x677, 0x0], [0xFBDE, 1, 0x6CB, 0x0], [0xFBDF, 1, 0x6CB, 0x0],
    [0xFBE0, 1, 0x6C5, 0x0], [0xFBE1, 1, 0x6C5, 0x0], [0xFBE2, 1, 0x6C9, 0x0],
    [0xFBE3, 1, 0x6C9, 0x0], [0xFBE4, 1, 0x6D0, 0x0], [0xFBE5, 1, 0x6D0, 0x0],
    [0xFBE6, 1, 0x6D0, 0x0], [0xFBE7, 1, 0x6D0, 0x0], [0xFBE8, 1, 0x649, 0x0],
    [0xFBE9, 1, 0x649, 0x0], [0xFBEA, 2, 0x626, 0x627], [0xFBEB, 2, 0x626, 0x627],
    [0xFBEC, 2, 0x626, 0x6D5], [0xFBED, 2, 0x626, 0x6D5], [0xFBEE, 2, 0x626, 0x648],
    [0xFBEF, 2, 0x626, 0x648], [0xFBF0, 2, 0x626, 0x6C7], [0xFBF1, 2, 0x626, 0x6C7],
    [0xFBF2, 2, 0x626, 0x6C6], [0xFBF3, 2, 0x626, 0x6C6], [0xFBF4, 2, 0x626, 0x6C8],
    [0xFBF5, 2, 0x626, 0x6C8], [0xFBF6, 2, 0x626, 0x6D0], [0xFBF7, 2, 0x626, 0x6D0],
    [0xFBF8, 2, 0x626, 0x6D0], [0xFBF9, 2, 0x626, 0x649], [0xFBFA, 2, 0x626, 0x649],
    [0xFBFB, 2, 0x626, 0x649], [0xFBFC, 1, 0x6CC, 0x0], [0xFBFD, 1, 0x6CC, 0x0],
    [0xFBFE, 1, 0x6CC, 0x0], [0xFBFF, 1, 0x6CC, 0x0], [0xFC00, 2, 0x626, 0x62C],
    [0xFC01, 2, 0x626, 0x62D], [0xFC02, 2, 0x626, 0x645], [0xFC03, 2, 0x626, 0x649],
    [0xFC04, 2, 0x626, 0x64A], [0xFC05, 2, 0x628, 0x62C], [0xFC06, 2, 0x628, 0x62D],
    [0xFC07, 2, 0x628, 0x62E], [0xFC08, 2, 0x628, 0x645], [0xFC09, 2, 0x628, 0x649],
    [0xFC0A, 2, 0x628, 0x64A], [0xFC0B, 2, 0x62A, 0x62C], [0xFC0C, 2, 0x62A, 0x62D],
    [0xFC0D, 2, 0x62A, 0x62E], [0xFC0E, 2, 0x62A, 0x645], [0xFC0F, 2, 0x62A, 0x649],
    [0xFC10, 2, 0x62A, 0x64A], [0xFC11, 2, 0x62B, 0x62C], [0xFC12, 2, 0x62B, 0x645],
    [0xFC13, 2, 0x62B, 0x649], [0xFC14, 2, 0x62B, 0x64A], [0xFC15, 2, 0x62C, 0x62D],
    [0xFC16, 2, 0x62C, 0x645], [0xFC17, 2, 0x62D, 0x62C], [0xFC18, 2, 0x62D, 0x645],
    [0xFC19, 2, 0x62E, 0x62C], [0xFC1A, 2, 0x62E, 0x62D], [0xFC1B, 2, 0x62E, 0x645],
    [0xFC1C, 2, 0x633, 0x62C], [0xFC1D, 2, 0x633, 0x62D], [0xFC1E, 2, 0x633, 0x62E],
    [0xFC1F, 2, 0x633, 0x645], [0xFC20, 2, 0x635, 0x62D], [0xFC21, 2, 0x635, 0x645],
    [0xFC22, 2, 0x636, 0x62C], [0xFC23, 2, 0x636, 0x62D], [0xFC24, 2, 0x636, 0x62E],
    [0xFC25, 2, 0x636, 0x645], [0xFC26, 2, 0x637, 0x62D], [0xFC27, 2, 0x637, 0x645],
    [0xFC28, 2, 0x638, 0x645], [0xFC29, 2, 0x639, 0x62C], [0xFC2A, 2, 0x639, 0x645],
    [0xFC2B, 2, 0x63A, 0x62C], [0xFC2C, 2, 0x63A, 0x645], [0xFC2D, 2, 0x641, 0x62C],
    [0xFC2E, 2, 0x641, 0x62D], [0xFC2F, 2, 0x641, 0x62E], [0xFC30, 2, 0x641, 0x645],
    [0xFC31, 2, 0x641, 0x649], [0xFC32, 2, 0x641, 0x64A], [0xFC33, 2, 0x642, 0x62D],
    [0xFC34, 2, 0x642, 0x645], [0xFC35, 2, 0x642, 0x649], [0xFC36, 2, 0x642, 0x64A],
    [0xFC37, 2, 0x643, 0x627], [0xFC38, 2, 0x643, 0x62C], [0xFC39, 2, 0x643, 0x62D],
    [0xFC3A, 2, 0x643, 0x62E], [0xFC3B, 2, 0x643, 0x644], [0xFC3C, 2, 0x643, 0x645],
    [0xFC3D, 2, 0x643, 0x649], [0xFC3E, 2, 0x643, 0x64A], [0xFC3F, 2, 0x644, 0x62C],
    [0xFC40, 2, 0x644, 0x62D], [0xFC41, 2, 0x644, 0x62E], [0xFC42, 2, 0x644, 0x645],
    [0xFC43, 2, 0x644, 0x649], [0xFC44, 2, 0x644, 0x64A], [0xFC45, 2, 0x645, 0x62C],
    [0xFC46, 2, 0x645, 0x62D], [0xFC47, 2, 0x645, 0x62E], [0xFC48, 2, 0x645, 0x645],
    [0xFC49, 2, 0x645, 0x649], [0xFC4A, 2, 0x645, 0x64A], [0xFC4B, 2, 0x646, 0x62C],
    [0xFC4C, 2, 0x646, 0x62D], [0xFC4D, 2, 0x646, 0x62E], [0xFC4E, 2, 0x646, 0x645],
    [0xFC4F, 2, 0x646, 0x649], [0xFC50, 2, 0x646, 0x64A], [0xFC51, 2, 0x647, 0x62C],
    [0xFC52, 2, 0x647, 0x645], [0xFC53, 2, 0x647, 0x649], [0xFC54, 2, 0x647, 0x64A],
    [0xFC55, 2, 0x64A, 0x62C], [0xFC56, 2, 0x64A, 0x62D], [0xFC57, 2, 0x64A, 0x62E],
    [0xFC58, 2, 0x64A, 0x645], [0xFC59, 2, 0x64A, 0x649], [0xFC5A, 2, 0x64A, 0x64A],
    [0xFC5B, 2, 0x630, 0x670], [0xFC5C, 2, 0x631, 0x670], [0xFC5D, 2, 0x649, 0x670],
    [0xFC64, 2, 0x626, 0x631], [0xFC65, 2, 0x626, 0x632], [0xFC66, 2, 0x626, 0x645],
    [0xFC67, 2, 0x626, 0x646], [0xFC68, 2, 0x626, 0x649], [0xFC69, 2, 0x626, 0x64A],
    [0xFC6A, 2, 0x628, 0x631], [0xFC6B, 2, 0x628, 0x632], [0xFC6C, 2, 0x628, 0x645],
    [0xFC6D, 2, 0x628, 0x646], [0xFC6E, 2, 0x628, 0x649], [0xFC6F, 2, 0x628, 0x64A],
    [0xFC70, 2, 0x62A, 0x631], [0xFC71, 2, 0x62A, 0x632], [0xFC72, 2, 0x62A, 0x645],
    [0xFC73, 2, 0x62A, 0x646], [0xFC74, 2, 0x62A, 0x649], [0xFC75, 2, 0x62A, 0x64A],
    [0xFC76, 2, 0x62B, 0x631], [0xFC77, 2, 0x62B, 0x632], [0xFC78, 2, 0x62B, 0x645],
    [0xFC79, 2, 0x62B, 0x646], [0xFC7A, 2, 0x62B, 0x649], [0xFC7B, 2, 0x62B, 0x64A],
    [0xFC7C, 2, 0x641, 0x649], [0xFC7D, 2, 0x641, 0x64A], [0xFC7E, 2, 0x642, 0x649],
    [0xFC7F, 2, 0x642, 0x64A], [0xFC80, 2, 0x643, 0x627], [0xFC81, 2, 0x643, 0x644],
    [0xFC82, 2, 0x643, 0x645], [0xFC83, 2, 0x643, 0x649], [0xFC84, 2, 0x643, 0x64A],
    [0xFC85, 2, 0x644, 0x645], [0xFC86, 2, 0x644, 0x649], [0xFC87, 2, 0x644, 0x64A],
    [0xFC88, 2, 0x645, 0x627], [0xFC89, 2, 0x645, 0x645], [0xFC8A, 2, 0x646, 0x631],
    [0xFC8B, 2, 0x646, 0x632], [0xFC8C, 2, 0x646, 0x645], [0xFC8D, 2, 0x646, 0x646],
    [0xFC8E, 2, 0x646, 0x649], [0xFC8F, 2, 0x646, 0x64A], [0xFC90, 2, 0x649, 0x670],
    [0xFC91, 2, 0x64A, 0x631], [0xFC92, 2, 0x64A, 0x632], [0xFC93, 2, 0x64A, 0x645],
    [0xFC94, 2, 0x64A, 0x646], [0xFC95, 2, 0x64A, 0x649], [0xFC96, 2, 0x64A, 0x64A],
    [0xFC97, 2, 0x626, 0x62C], [0xFC98, 2, 0x626, 0x62D], [0xFC99, 2, 0x626, 0x62E],
    [0xFC9A, 2, 0x626, 0x645], [0xFC9B, 2, 0x626, 0x647], [0xFC9C, 2, 0x628, 0x62C],
    [0xFC9D, 2, 0x628, 0x62D], [0xFC9E, 2, 0x628, 0x62E], [0xFC9F, 2, 0x628, 0x645],
    [0xFCA0, 2, 0x628, 0x647], [0xFCA1, 2, 0x62A, 0x62C], [0xFCA2, 2, 0x62A, 0x62D],
    [0xFCA3, 2, 0x62A, 0x62E], [0xFCA4, 2, 0x62A, 0x645], [0xFCA5, 2, 0x62A, 0x647],
    [0xFCA6, 2, 0x62B, 0x645], [0xFCA7, 2, 0x62C, 0x62D], [0xFCA8, 2, 0x62C, 0x645],
    [0xFCA9, 2, 0x62D, 0x62C], [0xFCAA, 2, 0x62D, 0x645], [0xFCAB, 2, 0x62E, 0x62C],
    [0xFCAC, 2, 0x62E, 0x645], [0xFCAD, 2, 0x633, 0x62C], [0xFCAE, 2, 0x633, 0x62D],
    [0xFCAF, 2, 0x633, 0x62E], [0xFCB0, 2, 0x633, 0x645], [0xFCB1, 2, 0x635, 0x62D],
    [0xFCB2, 2, 0x635, 0x62E], [0xFCB3, 2, 0x635, 0x645], [0xFCB4, 2, 0x636, 0x62C],
    [0xFCB5, 2, 0x636, 0x62D], [0xFCB6, 2, 0x636, 0x62E], [0xFCB7, 2, 0x636, 0x645],
    [0xFCB8, 2, 0x637, 0x62D], [0xFCB9, 2, 0x638, 0x645], [0xFCBA, 2, 0x639, 0x62C],
    [0xFCBB, 2, 0x639, 0x645], [0xFCBC, 2, 0x63A, 0x62C], [0xFCBD, 2, 0x63A, 0x645],
    [0xFCBE, 2, 0x641, 0x62C], [0xFCBF, 2, 0x641, 0x62D], [0xFCC0, 2, 0x641, 0x62E],
    [0xFCC1, 2, 0x641, 0x645], [0xFCC2, 2, 0x642, 0x62D], [0xFCC3, 2, 0x642, 0x645],
    [0xFCC4, 2, 0x643, 0x62C], [0xFCC5, 2, 0x643, 0x62D], [0xFCC6, 2, 0x643, 0x62E],
    [0xFCC7, 2, 0x643, 0x644], [0xFCC8, 2, 0x643, 0x645], [0xFCC9, 2, 0x644, 0x62C],
    [0xFCCA, 2, 0x644, 0x62D], [0xFCCB, 2, 0x644, 0x62E], [0xFCCC, 2, 0x644, 0x645],
    [0xFCCD, 2, 0x644, 0x647], [0xFCCE, 2, 0x645, 0x62C], [0xFCCF, 2, 0x645, 0x62D],
    [0xFCD0, 2, 0x645, 0x62E], [0xFCD1, 2, 0x645, 0x645], [0xFCD2, 2, 0x646, 0x62C],
    [0xFCD3, 2, 0x646, 0x62D], [0xFCD4, 2, 0x646, 0x62E], [0xFCD5, 2, 0x646, 0x645],
    [0xFCD6, 2, 0x646, 0x647], [0xFCD7, 2, 0x647, 0x62C], [0xFCD8, 2, 0x647, 0x645],
    [0xFCD9, 2, 0x647, 0x670], [0xFCDA, 2, 0x64A, 0x62C], [0xFCDB, 2, 0x64A, 0x62D],
    [0xFCDC, 2, 0x64A, 0x62E], [0xFCDD, 2, 0x64A, 0x645], [0xFCDE, 2, 0x64A, 0x647],
    [0xFCDF, 2, 0x626, 0x645], [0xFCE0, 2, 0x626, 0x647], [0xFCE1, 2, 0x628, 0x645],
    [0xFCE2, 2, 0x628, 0x647], [0xFCE3, 2, 0x62A, 0x645], [0xFCE4, 2, 0x62A, 0x647],
    [0xFCE5, 2, 0x62B, 0x645], [0xFCE6, 2, 0x62B, 0x647], [0xFCE7, 2, 0x633, 0x645],
    [0xFCE8, 2, 0x633, 0x647], [0xFCE9, 2, 0x634, 0x645], [0xFCEA, 2, 0x634, 0x647],
    [0xFCEB, 2, 0x643, 0x644], [0xFCEC, 2, 0x643, 0x645], [0xFCED, 2, 0x644, 0x645],
    [0xFCEE, 2, 0x646, 0x645], [0xFCEF, 2, 0x646, 0x647], [0xFCF0, 2, 0x64A, 0x645],
    [0xFCF1, 2, 0x64A, 0x647], [0xFCF5, 2, 0x637, 0x649], [0xFCF6, 2, 0x637, 0x64A],
    [0xFCF7, 2, 0x639, 0x649], [0xFCF8, 2, 0x639, 0x64A], [0xFCF9, 2, 0x63A, 0x649],
    [0xFCFA, 2, 0x63A, 0x64A], [0xFCFB, 2, 0x633, 0x649], [0xFCFC, 2, 0x633, 0x64A],
    [0xFCFD, 2, 0x634, 0x649], [0xFCFE, 2, 0x634, 0x64A], [0xFCFF, 2, 0x62D, 0x649],
    [0xFD00, 2, 0x62D, 0x64A], [0xFD01, 2, 0x62C, 0x649], [0xFD02, 2, 0x62C, 0x64A],
    [0xFD03, 2, 0x62E, 0x649], [0xFD04, 2, 0x62E, 0x64A], [0xFD05, 2, 0x635, 0x649],
    [0xFD06, 2, 0x635, 0x64A], [0xFD07, 2, 0x636, 0x649], [0xFD08, 2, 0x636, 0x64A],
    [0xFD09, 2, 0x634, 0x62C], [0xFD0A, 2, 0x634, 0x62D], [0xFD0B, 2, 0x634, 0x62E],
    [0xFD0C, 2, 0x634, 0x645], [0xFD0D, 2, 0x634, 0x631], [0xFD0E, 2, 0x633, 0x631],
    [0xFD0F, 2, 0x635, 0x631], [0xFD10, 2, 0x636, 0x631], [0xFD11, 2, 0x637, 0x649],
    [0xFD12, 2, 0x637, 0x64A], [0xFD13, 2, 0x639, 0x649], [0xFD14, 2, 0x639, 0x64A],
    [0xFD15, 2, 0x63A, 0x649], [0xFD16, 2, 0x63A, 0x64A], [0xFD17, 2, 0x633, 0x649],
    [0xFD18, 2, 0x633, 0x64A], [0xFD19, 2, 0x634, 0x649], [0xFD1A, 2, 0x634, 0x64A],
    [0xFD1B, 2, 0x62D, 0x649], [0xFD1C, 2, 0x62D, 0x64A], [0xFD1D, 2, 0x62C, 0x649],
    [0xFD1E, 2, 0x62C, 0x64A], [0xFD1F, 2, 0x62E, 0x649], [0xFD20, 2, 0x62E, 0x64A],
    [0xFD21, 2, 0x635, 0x649], [0xFD22, 2, 0x635, 0x64A], [0xFD23, 2, 0x636, 0x649],
    [0xFD24, 2, 0x636, 0x64A], [0xFD25, 2, 0x634, 0x62C], [0xFD26, 2, 0x634, 0x62D],
    [0xFD27, 2, 0x634, 0x62E], [0xFD28, 2, 0x634, 0x645], [0xFD29, 2, 0x634, 0x631],
    [0xFD2A, 2, 0x633, 0x631], [0xFD2B, 2, 0x635, 0x631], [0xFD2C, 2, 0x636, 0x631],
    [0xFD2D, 2, 0x634, 0x62C], [0xFD2E, 2, 0x634, 0x62D], [0xFD2F, 2, 0x634, 0x62E],
    [0xFD30, 2, 0x634, 0x645], [0xFD31, 2, 0x633, 0x647], [0xFD32, 2, 0x634, 0x647],
    [0xFD33, 2, 0x637, 0x645], [0xFD34, 2, 0x633, 0x62C], [0xFD35, 2, 0x633, 0x62D],
    [0xFD36, 2, 0x633, 0x62E], [0xFD37, 2, 0x634, 0x62C], [0xFD38, 2, 0x634, 0x62D],
    [0xFD39, 2, 0x634, 0x62E], [0xFD3A, 2, 0x637, 0x645], [0xFD3B, 2, 0x638, 0x645],
    [0xFD3C, 2, 0x627, 0x64B], [0xFD3D, 2, 0x627, 0x64B], [0xFE10, 1, 0x2C, 0x0],
    [0xFE11, 1, 0x3001, 0x0], [0xFE12, 1, 0x3002, 0x0], [0xFE13, 1, 0x3A, 0x0],
    [0xFE14, 1, 0x3B, 0x0], [0xFE15, 1, 0x21, 0x0], [0xFE16, 1, 0x3F, 0x0],
    [0xFE17, 1, 0x3016, 0x0], [0xFE18, 1, 0x3017, 0x0], [0xFE19, 1, 0x2026, 0x0],
    [0xFE30, 1, 0x2025, 0x0], [0xFE31, 1, 0x2014, 0x0], [0xFE32, 1, 0x2013, 0x0],
    [0xFE33, 1, 0x5F, 0x0], [0xFE34, 1, 0x5F, 0x0], [0xFE35, 1, 0x28, 0x0],
    [0xFE36, 1, 0x29, 0x0], [0xFE37, 1, 0x7B, 0x0], [0xFE38, 1, 0x7D, 0x0],
    [0xFE39, 1, 0x3014, 0x0], [0xFE3A, 1, 0x3015, 0x0], [0xFE3B, 1, 0x3010, 0x0],
    [0xFE3C, 1, 0x3011, 0x0], [0xFE3D, 1, 0x300A, 0x0], [0xFE3E, 1, 0x300B, 0x0],
    [0xFE3F, 1, 0x3008, 0x0], [0xFE40, 1, 0x3009, 0x0], [0xFE41, 1, 0x300C, 0x0],
    [0xFE42, 1, 0x300D, 0x0], [0xFE43, 1, 0x300E, 0x0], [0xFE44, 1, 0x300F, 0x0],
    [0xFE47, 1, 0x5B, 0x0], [0xFE48, 1, 0x5D, 0x0], [0xFE49, 1, 0x203E, 0x0],
    [0xFE4A, 1, 0x203E, 0x0], [0xFE4B, 1, 0x203E, 0x0], [0xFE4C, 1, 0x203E, 0x0],
    [0xFE4D, 1, 0x5F, 0x0], [0xFE4E, 1, 0x5F, 0x0], [0xFE4F, 1, 0x5F, 0x0],
    [0xFE50, 1, 0x2C, 0x0], [0xFE51, 1, 0x3001, 0x0], [0xFE52, 1, 0x2E, 0x0],
    [0xFE54, 1, 0x3B, 0x0], [0xFE55, 1, 0x3A, 0x0], [0xFE56, 1, 0x3F, 0x0],
    [0xFE57, 1, 0x21, 0x0], [0xFE58, 1, 0x2014, 0x0], [0xFE59, 1, 0x28, 0x0],
    [0xFE5A, 1, 0x29, 0x0], [0xFE5B, 1, 0x7B, 0x0], [0xFE5C, 1, 0x7D, 0x0],
    [0xFE5D, 1, 0x3014, 0x0], [0xFE5E, 1, 0x3015, 0x0], [0xFE5F, 1, 0x23, 0x0],
    [0xFE60, 1, 0x26, 0x0], [0xFE61, 1, 0x2A, 0x0], [0xFE62, 1, 0x2B, 0x0],
    [0xFE63, 1, 0x2D, 0x0], [0xFE64, 1, 0x3C, 0x0], [0xFE65, 1, 0x3E, 0x0],
    [0xFE66, 1, 0x3D, 0x0], [0xFE68, 1, 0x5C, 0x0], [0xFE69, 1, 0x24, 0x0],
    [0xFE6A, 1, 0x25, 0x0], [0xFE6B, 1, 0x40, 0x0], [0xFE70, 2, 0x20, 0x64B],
    [0xFE71, 2, 0x640, 0x64B], [0xFE72, 2, 0x20, 0x64C], [0xFE74, 2, 0x20, 0x64D],
    [0xFE76, 2, 0x20, 0x64E], [0xFE77, 2, 0x640, 0x64E], [0xFE78, 2, 0x20, 0x64F],
    [0xFE79, 2, 0x640, 0x64F], [0xFE7A, 2, 0x20, 0x650], [0xFE7B, 2, 0x640, 0x650],
    [0xFE7C, 2, 0x20, 0x651], [0xFE7D, 2, 0x640, 0x651], [0xFE7E, 2, 0x20, 0x652],
    [0xFE7F, 2, 0x640, 0x652], [0xFE80, 1, 0x621, 0x0], [0xFE81, 1, 0x622, 0x0],
    [0xFE82, 1, 0x622, 0x0], [0xFE83, 1, 0x623, 0x0], [0xFE84, 1, 0x623, 0x0],
    [0xFE85, 1, 0x624, 0x0], [0xFE86, 1, 0x624, 0x0], [0xFE87, 1, 0x625, 0x0],
    [0xFE88, 1, 0x625, 0x0], [0xFE89, 1, 0x626, 0x0], [0xFE8A, 1, 0x626, 0x0],
    [0xFE8B, 1, 0x626, 0x0], [0xFE8C, 1, 0x626, 0x0], [0xFE8D, 1, 0x627, 0x0],
    [0xFE8E, 1, 0x627, 0x0], [0xFE8F, 1, 0x628, 0x0], [0xFE90, 1, 0x628, 0x0],
    [0xFE91, 1, 0x628, 0x0], [0xFE92, 1, 0x628, 0x0], [0xFE93, 1, 0x629, 0x0],
    [0xFE94, 1, 0x629, 0x0], [0xFE95, 1, 0x62A, 0x0], [0xFE96, 1, 0x62A, 0x0],
    [0xFE97, 1, 0x62A, 0x0], [0xFE98, 1, 0x62A, 0x0], [0xFE99, 1, 0x62B, 0x0],
    [0xFE9A, 1, 0x62B, 0x0], [0xFE9B, 1, 0x62B, 0x0], [0xFE9C, 1, 0x62B, 0x0],
    [0xFE9D, 1, 0x62C, 0x0], [0xFE9E, 1, 0x62C, 0x0], [0xFE9F, 1, 0x62C, 0x0],
    [0xFEA0, 1, 0x62C, 0x0], [0xFEA1, 1, 0x62D, 0x0], [0xFEA2, 1, 0x62D, 0x0],
    [0xFEA3, 1, 0x62D, 0x0], [0xFEA4, 1, 0x62D, 0x0], [0xFEA5, 1, 0x62E, 0x0],
    [0xFEA6, 1, 0x62E, 0x0], [0xFEA7, 1, 0x62E, 0x0], [0xFEA8, 1, 0x62E, 0x0],
    [0xFEA9, 1, 0x62F, 0x0], [0xFEAA, 1, 0x62F, 0x0], [0xFEAB, 1, 0x630, 0x0],
    [0xFEAC, 1, 0x630, 0x0], [0xFEAD, 1, 0x631, 0x0], [0xFEAE, 1, 0x631, 0x0],
    [0xFEAF, 1, 0x632, 0x0], [0xFEB0, 1, 0x632, 0x0], [0xFEB1, 1, 0x633, 0x0],
    [0xFEB2, 1, 0x633, 0x0], [0xFEB3, 1, 0x633, 0x0], [0xFEB4, 1, 0x633, 0x0],
    [0xFEB5, 1, 0x634, 0x0], [0xFEB6, 1, 0x634, 0x0], [0xFEB7, 1, 0x634, 0x0],
    [0xFEB8, 1, 0x634, 0x0], [0xFEB9, 1, 0x635, 0x0], [0xFEBA, 1, 0x635, 0x0],
    [0xFEBB, 1, 0x635, 0x0], [0xFEBC, 1, 0x635, 0x0], [0xFEBD, 1, 0x636, 0x0],
    [0xFEBE, 1, 0x636, 0x0], [0xFEBF, 1, 0x636, 0x0], [0xFEC0, 1, 0x636, 0x0],
    [0xFEC1, 1, 0x637, 0x0], [0xFEC2, 1, 0x637, 0x0], [0xFEC3, 1, 0x637, 0x0],
    [0xFEC4, 1, 0x637, 0x0], [0xFEC5, 1, 0x638, 0x0], [0xFEC6, 1, 0x638, 0x0],
    [0xFEC7, 1, 0x638, 0x0], [0xFEC8, 1, 0x638, 0x0], [0xFEC9, 1, 0x639, 0x0],
    [0xFECA, 1, 0x639, 0x0], [0xFECB, 1, 0x639, 0x0], [0xFECC, 1, 0x639, 0x0],
    [0xFECD, 1, 0x63A, 0x0], [0xFECE, 1, 0x63A, 0x0], [0xFECF, 1, 0x63A, 0x0],
    [0xFED0, 1, 0x63A, 0x0], [0xFED1, 1, 0x641, 0x0], [0xFED2, 1, 0x641, 0x0],
    [0xFED3, 1, 0x641, 0x0], [0xFED4, 1, 0x641, 0x0], [0xFED5, 1, 0x642, 0x0],
    [0xFED6, 1, 0x642, 0x0], [0xFED7, 1, 0x642, 0x0], [0xFED8, 1, 0x642, 0x0],
    [0xFED9, 1, 0x643, 0x0], [0xFEDA, 1, 0x643, 0x0], [0xFEDB, 1, 0x643, 0x0],
    [0xFEDC, 1, 0x643, 0x0], [0xFEDD, 1, 0x644, 0x0], [0xFEDE, 1, 0x644, 0x0],
    [0xFEDF, 1, 0x644, 0x0], [0xFEE0, 1, 0x644, 0x0], [0xFEE1, 1, 0x645, 0x0],
    [0xFEE2, 1, 0x645, 0x0], [0xFEE3, 1, 0x645, 0x0], [0xFEE4, 1, 0x645, 0x0],
    [0xFEE5, 1, 0x646, 0x0], [0xFEE6, 1, 0x646, 0x0], [0xFEE7, 1, 0x646, 0x0],
    [0xFEE8, 1, 0x646, 0x0], [0xFEE9, 1, 0x647, 0x0], [0xFEEA, 1, 0x647, 0x0],
    [0xFEEB, 1, 0x647, 0x0], [0xFEEC, 1, 0x647, 0x0], [0xFEED, 1, 0x648, 0x0],
    [0xFEEE, 1, 0x648, 0x0], [0xFEEF, 1, 0x649, 0x0], [0xFEF0, 1, 0x649, 0x0],
    [0xFEF1, 1, 0x64A, 0x0], [0xFEF2, 1, 0x64A, 0x0], [0xFEF3, 1, 0x64A, 0x0],
    [0xFEF4, 1, 0x64A, 0x0], [0xFEF5, 2, 0x644, 0x622], [0xFEF6, 2, 0x644, 0x622],
    [0xFEF7, 2, 0x644, 0x623], [0xFEF8, 2, 0x644, 0x623], [0xFEF9, 2, 0x644, 0x625],
    [0xFEFA, 2, 0x644, 0x625], [0xFEFB, 2, 0x644, 0x627], [0xFEFC, 2, 0x644, 0x627],
    [0xFF01, 1, 0x21, 0x0], [0xFF02, 1, 0x22, 0x0], [0xFF03, 1, 0x23, 0x0],
    [0xFF04, 1, 0x24, 0x0], [0xFF05, 1, 0x25, 0x0], [0xFF06, 1, 0x26, 0x0],
    [0xFF07, 1, 0x27, 0x0], [0xFF08, 1, 0x28, 0x0], [0xFF09, 1, 0x29, 0x0],
    [0xFF0A, 1, 0x2A, 0x0], [0xFF0B, 1, 0x2B, 0x0], [0xFF0C, 1, 0x2C, 0x0],
    [0xFF0D, 1, 0x2D, 0x0], [0xFF0E, 1, 0x2E, 0x0], [0xFF0F, 1, 0x2F, 0x0],
    [0xFF10, 1, 0x30, 0x0], [0xFF11, 1, 0x31, 0x0], [0xFF12, 1, 0x32, 0x0],
    [0xFF13, 1, 0x33, 0x0], [0xFF14, 1, 0x34, 0x0], [0xFF15, 1, 0x35, 0x0],
    [0xFF16, 1, 0x36, 0x0], [0xFF17, 1, 0x37, 0x0], [0xFF18, 1, 0x38, 0x0],
    [0xFF19, 1, 0x39, 0x0], [0xFF1A, 1, 0x3A, 0x0], [0xFF1B, 1, 0x3B, 0x0],
    [0xFF1C, 1, 0x3C, 0x0], [0xFF1D, 1, 0x3D, 0x0], [0xFF1E, 1, 0x3E, 0x0],
    [0xFF1F, 1, 0x3F, 0x0], [0xFF20, 1, 0x40, 0x0], [0xFF21, 1, 0x41, 0x0],
    [0xFF22, 1, 0x42, 0x0], [0xFF23, 1, 0x43, 0x0], [0xFF24, 1, 0x44, 0x0],
    [0xFF25, 1, 0x45, 0x0], [0xFF26, 1, 0x46, 0x0], [0xFF27, 1, 0x47, 0x0],
    [0xFF28, 1, 0x48, 0x0], [0xFF29, 1, 0x49, 0x0], [0xFF2A, 1, 0x4A, 0x0],
    [0xFF2B, 1, 0x4B, 0x0], [0xFF2C, 1, 0x4C, 0x0], [0xFF2D, 1, 0x4D, 0x0],
    [0xFF2E, 1, 0x4E, 0x0], [0xFF2F, 1, 0x4F, 0x0], [0xFF30, 1, 0x50, 0x0],
    [0xFF31, 1, 0x51, 0x0], [0xFF32, 1, 0x52, 0x0], [0xFF33, 1, 0x53, 0x0],
    [0xFF34, 1, 0x54, 0x0], [0xFF35, 1, 0x55, 0x0], [0xFF36, 1, 0x56, 0x0],
    [0xFF37, 1, 0x57, 0x0], [0xFF38, 1, 0x58, 0x0], [0xFF39, 1, 0x59, 0x0],
    [0xFF3A, 1, 0x5A, 0x0], [0xFF3B, 1, 0x5B, 0x0], [0xFF3C, 1, 0x5C, 0x0],
    [0xFF3D, 1, 0x5D, 0x0], [0xFF3E, 1, 0x5E, 0x0], [0xFF3F, 1, 0x5F, 0x0],
    [0xFF40, 1, 0x60, 0x0], [0xFF41, 1, 0x61, 0x0], [0xFF42, 1, 0x62, 0x0],
    [0xFF43, 1, 0x63, 0x0], [0xFF44, 1, 0x64, 0x0], [0xFF45, 1, 0x65, 0x0],
    [0xFF46, 1, 0x66, 0x0], [0xFF47, 1, 0x67, 0x0], [0xFF48, 1, 0x68, 0x0],
    [0xFF49, 1, 0x69, 0x0], [0xFF4A, 1, 0x6A, 0x0], [0xFF4B, 1, 0x6B, 0x0],
    [0xFF4C, 1, 0x6C, 0x0], [0xFF4D, 1, 0x6D, 0x0], [0xFF4E, 1, 0x6E, 0x0],
    [0xFF4F, 1, 0x6F, 0x0], [0xFF50, 1, 0x70, 0x0], [0xFF51, 1, 0x71, 0x0],
    [0xFF52, 1, 0x72, 0x0], [0xFF53, 1, 0x73, 0x0], [0xFF54, 1, 0x74, 0x0],
    [0xFF55, 1, 0x75, 0x0], [0xFF56, 1, 0x76, 0x0], [0xFF57, 1, 0x77, 0x0],
    [0xFF58, 1, 0x78, 0x0], [0xFF59, 1, 0x79, 0x0], [0xFF5A, 1, 0x7A, 0x0],
    [0xFF5B, 1, 0x7B, 0x0], [0xFF5C, 1, 0x7C, 0x0], [0xFF5D, 1, 0x7D, 0x0],
    [0xFF5E, 1, 0x7E, 0x0], [0xFF5F, 1, 0x2985, 0x0], [0xFF60, 1, 0x2986, 0x0],
    [0xFF61, 1, 0x3002, 0x0], [0xFF62, 1, 0x300C, 0x0], [0xFF63, 1, 0x300D, 0x0],
    [0xFF64, 1, 0x3001, 0x0], [0xFF65, 1, 0x30FB, 0x0], [0xFF66, 1, 0x30F2, 0x0],
    [0xFF67, 1, 0x30A1, 0x0], [0xFF68, 1, 0x30A3, 0x0], [0xFF69, 1, 0x30A5, 0x0],
    [0xFF6A, 1, 0x30A7, 0x0], [0xFF6B, 1, 0x30A9, 0x0], [0xFF6C, 1, 0x30E3, 0x0],
    [0xFF6D, 1, 0x30E5, 0x0], [0xFF6E, 1, 0x30E7, 0x0], [0xFF6F, 1, 0x30C3, 0x0],
    [0xFF70, 1, 0x30FC, 0x0], [0xFF71, 1, 0x30A2, 0x0], [0xFF72, 1, 0x30A4, 0x0],
    [0xFF73, 1, 0x30A6, 0x0], [0xFF74, 1, 0x30A8, 0x0], [0xFF75, 1, 0x30AA, 0x0],
    [0xFF76, 1, 0x30AB, 0x0], [0xFF77, 1, 0x30AD, 0x0], [0xFF78, 1, 0x30AF, 0x0],
    [0xFF79, 1, 0x30B1, 0x0], [0xFF7A, 1, 0x30B3, 0x0], [0xFF7B, 1, 0x30B5, 0x0],
    [0xFF7C, 1, 0x30B7, 0x0], [0xFF7D, 1, 0x30B9, 0x0], [0xFF7E, 1, 0x30BB, 0x0],
    [0xFF7F, 1, 0x30BD, 0x0], [0xFF80, 1, 0x30BF, 0x0], [0xFF81, 1, 0x30C1, 0x0],
    [0xFF82, 1, 0x30C4, 0x0], [0xFF83, 1, 0x30C6, 0x0], [0xFF84, 1, 0x30C8, 0x0],
    [0xFF85, 1, 0x30CA, 0x0], [0xFF86, 1, 0x30CB, 0x0], [0xFF87, 1, 0x30CC, 0x0],
    [0xFF88, 1, 0x30CD, 0x0], [0xFF89, 1, 0x30CE, 0x0], [0xFF8A, 1, 0x30CF, 0x0],
    [0xFF8B, 1, 0x30D2, 0x0], [0xFF8C, 1, 0x30D5, 0x0], [0xFF8D, 1, 0x30D8, 0x0],
    [0xFF8E, 1, 0x30DB, 0x0], [0xFF8F, 1, 0x30DE, 0x0], [0xFF90, 1, 0x30DF, 0x0],
    [0xFF91, 1, 0x30E0, 0x0], [0xFF92, 1, 0x30E1, 0x0], [0xFF93, 1, 0x30E2, 0x0],
    [0xFF94, 1, 0x30E4, 0x0], [0xFF95, 1, 0x30E6, 0x0], [0xFF96, 1, 0x30E8, 0x0],
    [0xFF97, 1, 0x30E9, 0x0], [0xFF98, 1, 0x30EA, 0x0], [0xFF99, 1, 0x30EB, 0x0],
    [0xFF9A, 1, 0x30EC, 0x0], [0xFF9B, 1, 0x30ED, 0x0], [0xFF9C, 1, 0x30EF, 0x0],
    [0xFF9D, 1, 0x30F3, 0x0], [0xFF9E, 1, 0x3099, 0x0], [0xFF9F, 1, 0x309A, 0x0],
    [0xFFA0, 1, 0x3164, 0x0], [0xFFA1, 1, 0x3131, 0x0], [0xFFA2, 1, 0x3132, 0x0],
    [0xFFA3, 1, 0x3133, 0x0], [0xFFA4, 1, 0x3134, 0x0], [0xFFA5, 1, 0x3135, 0x0],
    [0xFFA6, 1, 0x3136, 0x0], [0xFFA7, 1, 0x3137, 0x0], [0xFFA8, 1, 0x3138, 0x0],
    [0xFFA9, 1, 0x3139, 0x0], [0xFFAA, 1, 0x313A, 0x0], [0xFFAB, 1, 0x313B, 0x0],
    [0xFFAC, 1, 0x313C, 0x0], [0xFFAD, 1, 0x313D, 0x0], [0xFFAE, 1, 0x313E, 0x0],
    [0xFFAF, 1, 0x313F, 0x0], [0xFFB0, 1, 0x3140, 0x0], [0xFFB1, 1, 0x3141, 0x0],
    [0xFFB2, 1, 0x3142, 0x0], [0xFFB3, 1, 0x3143, 0x0], [0xFFB4, 1, 0x3144, 0x0],
    [0xFFB5, 1, 0x3145, 0x0], [0xFFB6, 1, 0x3146, 0x0], [0xFFB7, 1, 0x3147, 0x0],
    [0xFFB8, 1, 0x3148, 0x0], [0xFFB9, 1, 0x3149, 0x0], [0xFFBA, 1, 0x314A, 0x0],
    [0xFFBB, 1, 0x314B, 0x0], [0xFFBC, 1, 0x314C, 0x0], [0xFFBD, 1, 0x314D, 0x0],
    [0xFFBE, 1, 0x314E, 0x0], [0xFFC2, 1, 0x314F, 0x0], [0xFFC3, 1, 0x3150, 0x0],
    [0xFFC4, 1, 0x3151, 0x0], [0xFFC5, 1, 0x3152, 0x0], [0xFFC6, 1, 0x3153, 0x0],
    [0xFFC7, 1, 0x3154, 0x0], [0xFFCA, 1, 0x3155, 0x0], [0xFFCB, 1, 0x3156, 0x0],
    [0xFFCC, 1, 0x3157, 0x0], [0xFFCD, 1, 0x3158, 0x0], [0xFFCE, 1, 0x3159, 0x0],
    [0xFFCF, 1, 0x315A, 0x0], [0xFFD2, 1, 0x315B, 0x0], [0xFFD3, 1, 0x315C, 0x0],
    [0xFFD4, 1, 0x315D, 0x0], [0xFFD5, 1, 0x315E, 0x0], [0xFFD6, 1, 0x315F, 0x0],
    [0xFFD7, 1, 0x3160, 0x0], [0xFFDA, 1, 0x3161, 0x0], [0xFFDB, 1, 0x3162, 0x0],
    [0xFFDC, 1, 0x3163, 0x0], [0xFFE0, 1, 0xA2, 0x0], [0xFFE1, 1, 0xA3, 0x0],
    [0xFFE2, 1, 0xAC, 0x0], [0xFFE3, 1, 0xAF, 0x0], [0xFFE4, 1, 0xA6, 0x0],
    [0xFFE5, 1, 0xA5, 0x0], [0xFFE6, 1, 0x20A9, 0x0], [0xFFE8, 1, 0x2502, 0x0],
    [0xFFE9, 1, 0x2190, 0x0], [0xFFEA, 1, 0x2191, 0x0], [0xFFEB, 1, 0x2192, 0x0],
    [0xFFEC, 1, 0x2193, 0x0], [0xFFED, 1, 0x25A0, 0x0], [0xFFEE, 1, 0x25CB, 0x0],
    [0x10781, 1, 0x2D0, 0x0], [0x10782, 1, 0x2D1, 0x0], [0x10783, 1, 0xE6, 0x0],
    [0x10784, 1, 0x299, 0x0], [0x10785, 1, 0x253, 0x0], [0x10787, 1, 0x2A3, 0x0],
    [0x10788, 1, 0xAB66, 0x0], [0x10789, 1, 0x2A5, 0x0], [0x1078A, 1, 0x2A4, 0x0],
    [0x1078B, 1, 0x256, 0x0], [0x1078C, 1, 0x257, 0x0], [0x1078D, 1, 0x1D91, 0x0],
    [0x1078E, 1, 0x258, 0x0], [0x1078F, 1, 0x25E, 0x0], [0x10790, 1, 0x2A9, 0x0],
    [0x10791, 1, 0x264, 0x0], [0x10792, 1, 0x262, 0x0], [0x10793, 1, 0x260, 0x0],
    [0x10794, 1, 0x29B, 0x0], [0x10795, 1, 0x127, 0x0], [0x10796, 1, 0x29C, 0x0],
    [0x10797, 1, 0x267, 0x0], [0x10798, 1, 0x284, 0x0], [0x10799, 1, 0x2AA, 0x0],
    [0x1079A, 1, 0x2AB, 0x0], [0x1079B, 1, 0x26C, 0x0], [0x1079C, 1, 0x1DF04, 0x0],
    [0x1079D, 1, 0xA78E, 0x0], [0x1079E, 1, 0x26E, 0x0], [0x1079F, 1, 0x1DF05, 0x0],
    [0x107A0, 1, 0x28E, 0x0], [0x107A1, 1, 0x1DF06, 0x0], [0x107A2, 1, 0xF8, 0x0],
    [0x107A3, 1, 0x276, 0x0], [0x107A4, 1, 0x277, 0x0], [0x107A5, 1, 0x71, 0x0],
    [0x107A6, 1, 0x27A, 0x0], [0x107A7, 1, 0x1DF08, 0x0], [0x107A8, 1, 0x27D, 0x0],
    [0x107A9, 1, 0x27E, 0x0], [0x107AA, 1, 0x280, 0x0], [0x107AB, 1, 0x2A8, 0x0],
    [0x107AC, 1, 0x2A6, 0x0], [0x107AD, 1, 0xAB67, 0x0], [0x107AE, 1, 0x2A7, 0x0],
    [0x107AF, 1, 0x288, 0x0], [0x107B0, 1, 0x2C71, 0x0], [0x107B2, 1, 0x28F, 0x0],
    [0x107B3, 1, 0x2A1, 0x0], [0x107B4, 1, 0x2A2, 0x0], [0x107B5, 1, 0x298, 0x0],
    [0x107B6, 1, 0x1C0, 0x0], [0x107B7, 1, 0x1C1, 0x0], [0x107B8, 1, 0x1C2, 0x0],
    [0x107B9, 1, 0x1DF0A, 0x0], [0x107BA, 1, 0x1DF1E, 0x0], [0x1D400, 1, 0x41, 0x0],
    [0x1D401, 1, 0x42, 0x0], [0x1D402, 1, 0x43, 0x0], [0x1D403, 1, 0x44, 0x0],
    [0x1D404, 1, 0x45, 0x0], [0x1D405, 1, 0x46, 0x0], [0x1D406, 1, 0x47, 0x0],
    [0x1D407, 1, 0x48, 0x0], [0x1D408, 1, 0x49, 0x0], [0x1D409, 1, 0x4A, 0x0],
    [0x1D40A, 1, 0x4B, 0x0], [0x1D40B, 1, 0x4C, 0x0], [0x1D40C, 1, 0x4D, 0x0],
    [0x1D40D, 1, 0x4E, 0x0], [0x1D40E, 1, 0x4F, 0x0], [0x1D40F, 1, 0x50, 0x0],
    [0x1D410, 1, 0x51, 0x0], [0x1D411, 1, 0x52, 0x0], [0x1D412, 1, 0x53, 0x0],
    [0x1D413, 1, 0x54, 0x0], [0x1D414, 1, 0x55, 0x0], [0x1D415, 1, 0x56, 0x0],
    [0x1D416, 1, 0x57, 0x0], [0x1D417, 1, 0x58, 0x0], [0x1D418, 1, 0x59, 0x0],
    [0x1D419, 1, 0x5A, 0x0], [0x1D41A, 1, 0x61, 0x0], [0x1D41B, 1, 0x62, 0x0],
    [0x1D41C, 1, 0x63, 0x0], [0x1D41D, 1, 0x64, 0x0], [0x1D41E, 1, 0x65, 0x0],
    [0x1D41F, 1, 0x66, 0x0], [0x1D420, 1, 0x67, 0x0], [0x1D421, 1, 0x68, 0x0],
    [0x1D422, 1, 0x69, 0x0], [0x1D423, 1, 0x6A, 0x0], [0x1D424, 1, 0x6B, 0x0],
    [0x1D425, 1, 0x6C, 0x0], [0x1D426, 1, 0x6D, 0x0], [0x1D427, 1, 0x6E, 0x0],
    [0x1D428, 1, 0x6F, 0x0], [0x1D429, 1, 0x70, 0x0], [0x1D42A, 1, 0x71, 0x0],
    [0x1D42B, 1, 0x72, 0x0], [0x1D42C, 1, 0x73, 0x0], [0x1D42D, 1, 0x74, 0x0],
    [0x1D42E, 1, 0x75, 0x0], [0x1D42F, 1, 0x76, 0x0], [0x1D430, 1, 0x77, 0x0],
    [0x1D431, 1, 0x78, 0x0], [0x1D432, 1, 0x79, 0x0], [0x1D433, 1, 0x7A, 0x0],
    [0x1D434, 1, 0x41, 0x0], [0x1D435, 1, 0x42, 0x0], [0x1D436, 1, 0x43, 0x0],
    [0x1D437, 1, 0x44, 0x0], [0x1D438, 1, 0x45, 0x0], [0x1D439, 1, 0x46, 0x0],
    [0x1D43A, 1, 0x47, 0x0], [0x1D43B, 1, 0x48, 0x0], [0x1D43C, 1, 0x49, 0x0],
    [0x1D43D, 1, 0x4A, 0x0], [0x1D43E, 1, 0x4B, 0x0], [0x1D43F, 1, 0x4C, 0x0],
    [0x1D440, 1, 0x4D, 0x0], [0x1D441, 1, 0x4E, 0x0], [0x1D442, 1, 0x4F, 0x0],
    [0x1D443, 1, 0x50, 0x0], [0x1D444, 1, 0x51, 0x0], [0x1D445, 1, 0x52, 0x0],
    [0x1D446, 1, 0x53, 0x0], [0x1D447, 1, 0x54, 0x0], [0x1D448, 1, 0x55, 0x0],
    [0x1D449, 1, 0x56, 0x0], [0x1D44A, 1, 0x57, 0x0], [0x1D44B, 1, 0x58, 0x0],
    [0x1D44C, 1, 0x59, 0x0], [0x1D44D, 1, 0x5A, 0x0], [0x1D44E, 1, 0x61, 0x0],
    [0x1D44F, 1, 0x62, 0x0], [0x1D450, 1, 0x63, 0x0], [0x1D451, 1, 0x64, 0x0],
    [0x1D452, 1, 0x65, 0x0], [0x1D453, 1, 0x66, 0x0], [0x1D454, 1, 0x67, 0x0],
    [0x1D456, 1, 0x69, 0x0], [0x1D457, 1, 0x6A, 0x0], [0x1D458, 1, 0x6B, 0x0],
    [0x1D459, 1, 0x6C, 0x0], [0x1D45A, 1, 0x6D, 0x0], [0x1D45B, 1, 0x6E, 0x0],
    [0x1D45C, 1, 0x6F, 0x0], [0x1D45D, 1, 0x70, 0x0], [0x1D45E, 1, 0x71, 0x0],
    [0x1D45F, 1, 0x72, 0x0], [0x1D460, 1, 0x73, 0x0], [0x1D461, 1, 0x74, 0x0],
    [0x1D462, 1, 0x75, 0x0], [0x1D463, 1, 0x76, 0x0], [0x1D464, 1, 0x77, 0x0],
    [0x1D465, 1, 0x78, 0x0], [0x1D466, 1, 0x79, 0x0], [0x1D467, 1, 0x7A, 0x0],
    [0x1D468, 1, 0x41, 0x0], [0x1D469, 1, 0x42, 0x0], [0x1D46A, 1, 0x43, 0x0],
    [0x1D46B, 1, 0x44, 0x0], [0x1D46C, 1, 0x45, 0x0], [0x1D46D, 1, 0x46, 0x0],
    [0x1D46E, 1, 0x47, 0x0], [0x1D46F, 1, 0x48, 0x0], [0x1D470, 1, 0x49, 0x0],
    [0x1D471, 1, 0x4A, 0x0], [0x1D472, 1, 0x4B, 0x0], [0x1D473, 1, 0x4C, 0x0],
    [0x1D474, 1, 0x4D, 0x0], [0x1D475, 1, 0x4E, 0x0], [0x1D476, 1, 0x4F, 0x0],
    [0x1D477, 1, 0x50, 0x0], [0x1D478, 1, 0x51, 0x0], [0x1D479, 1, 0x52, 0x0],
    [0x1D47A, 1, 0x53, 0x0], [0x1D47B, 1, 0x54, 0x0], [0x1D47C, 1, 0x55, 0x0],
    [0x1D47D, 1, 0x56, 0x0], [0x1D47E, 1, 0x57, 0x0], [0x1D47F, 1, 0x58, 0x0],
    [0x1D480, 1, 0x59, 0x0], [0x1D481, 1, 0x5A, 0x0], [0x1D482, 1, 0x61, 0x0],
    [0x1D483, 1, 0x62, 0x0], [0x1D484, 1, 0x63, 0x0], [0x1D485, 1, 0x64, 0x0],
    [0x1D486, 1, 0x65, 0x0], [0x1D487, 1, 0x66, 0x0], [0x1D488, 1, 0x67, 0x0],
    [0x1D489, 1, 0x68, 0x0], [0x1D48A, 1, 0x69, 0x0], [0x1D48B, 1, 0x6A, 0x0],
    [0x1D48C, 1, 0x6B, 0x0], [0x1D48D, 1, 0x6C, 0x0], [0x1D48E, 1, 0x6D, 0x0],
    [0x1D48F, 1, 0x6E, 0x0], [0x1D490, 1, 0x6F, 0x0], [0x1D491, 1, 0x70, 0x0],
    [0x1D492, 1, 0x71, 0x0], [0x1D493, 1, 0x72, 0x0], [0x1D494, 1, 0x73, 0x0],
    [0x1D495, 1, 0x74, 0x0], [0x1D496, 1, 0x75, 0x0], [0x1D497, 1, 0x76, 0x0],
    [0x1D498, 1, 0x77, 0x0], [0x1D499, 1, 0x78, 0x0], [0x1D49A, 1, 0x79, 0x0],
    [0x1D49B, 1, 0x7A, 0x0], [0x1D49C, 1, 0x41, 0x0], [0x1D49E, 1, 0x43, 0x0],
    [0x1D49F, 1, 0x44, 0x0], [0x1D4A2, 1, 0x47, 0x0], [0x1D4A5, 1, 0x4A, 0x0],
    [0x1D4A6, 1, 0x4B, 0x0], [0x1D4A9, 1, 0x4E, 0x0], [0x1D4AA, 1, 0x4F, 0x0],
    [0x1D4AB, 1, 0x50, 0x0], [0x1D4AC, 1, 0x51, 0x0], [0x1D4AE, 1, 0x53, 0x0],
    [0x1D4AF, 1, 0x54, 0x0], [0x1D4B0, 1, 0x55, 0x0], [0x1D4B1, 1, 0x56, 0x0],
    [0x1D4B2, 1, 0x57, 0x0], [0x1D4B3, 1, 0x58, 0x0], [0x1D4B4, 1, 0x59, 0x0],
    [0x1D4B5, 1, 0x5A, 0x0], [0x1D4B6, 1, 0x61, 0x0], [0x1D4B7, 1, 0x62, 0x0],
    [0x1D4B8, 1, 0x63, 0x0], [0x1D4B9, 1, 0x64, 0x0], [0x1D4BB, 1, 0x66, 0x0],
    [0x1D4BD, 1, 0x68, 0x0], [0x1D4BE, 1, 0x69, 0x0], [0x1D4BF, 1, 0x6A, 0x0],
    [0x1D4C0, 1, 0x6B, 0x0], [0x1D4C1, 1, 0x6C, 0x0], [0x1D4C2, 1, 0x6D, 0x0],
    [0x1D4C3, 1, 0x6E, 0x0], [0x1D4C5, 1, 0x70, 0x0], [0x1D4C6, 1, 0x71, 0x0],
    [0x1D4C7, 1, 0x72, 0x0], [0x1D4C8, 1, 0x73, 0x0], [0x1D4C9, 1, 0x74, 0x0],
    [0x1D4CA, 1, 0x75, 0x0], [0x1D4CB, 1, 0x76, 0x0], [0x1D4CC, 1, 0x77, 0x0],
    [0x1D4CD, 1, 0x78, 0x0], [0x1D4CE, 1, 0x79, 0x0], [0x1D4CF, 1, 0x7A, 0x0],
    [0x1D4D0, 1, 0x41, 0x0], [0x1D4D1, 1, 0x42, 0x0], [0x1D4D2, 1, 0x43, 0x0],
    [0x1D4D3, 1, 0x44, 0x0], [0x1D4D4, 1, 0x45, 0x0], [0x1D4D5, 1, 0x46, 0x0],
    [0x1D4D6, 1, 0x47, 0x0], [0x1D4D7, 1, 0x48, 0x0], [0x1D4D8, 1, 0x49, 0x0],
    [0x1D4D9, 1, 0x4A, 0x0], [0x1D4DA, 1, 0x4B, 0x0], [0x1D4DB, 1, 0x4C, 0x0],
    [0x1D4DC, 1, 0x4D, 0x0], [0x1D4DD, 1, 0x4E, 0x0], [0x1D4DE, 1, 0x4F, 0x0],
    [0x1D4DF, 1, 0x50, 0x0], [0x1D4E0, 1, 0x51, 0x0], [0x1D4E1, 1, 0x52, 0x0],
    [0x1D4E2, 1, 0x53, 0x0], [0x1D4E3, 1, 0x54, 0x0], [0x1D4E4, 1, 0x55, 0x0],
    [0x1D4E5, 1, 0x56, 0x0], [0x1D4E6, 1, 0x57, 0x0], [0x1D4E7, 1, 0x58, 0x0],
    [0x1D4E8, 1, 0x59, 0x0], [0x1D4E9, 1, 0x5A, 0x0], [0x1D4EA, 1, 0x61, 0x0],
    [0x1D4EB, 1, 0x62, 0x0], [0x1D4EC, 1, 0x63, 0x0], [0x1D4ED, 1, 0x64, 0x0],
    [0x1D4EE, 1, 0x65, 0x0], [0x1D4EF, 1, 0x66, 0x0], [0x1D4F0, 1, 0x67, 0x0],
    [0x1D4F1, 1, 0x68, 0x0], [0x1D4F2, 1, 0x69, 0x0], [0x1D4F3, 1, 0x6A, 0x0],
    [0x1D4F4, 1, 0x6B, 0x0], [0x1D4F5, 1, 0x6C, 0x0], [0x1D4F6, 1, 0x6D, 0x0],
    [0x1D4F7, 1, 0x6E, 0x0], [0x1D4F8, 1, 0x6F, 0x0], [0x1D4F9, 1, 0x70, 0x0],
    [0x1D4FA, 1, 0x71, 0x0], [0x1D4FB, 1, 0x72, 0x0], [0x1D4FC, 1, 0x73, 0x0],
    [0x1D4FD, 1, 0x74, 0x0], [0x1D4FE, 1, 0x75, 0x0], [0x1D4FF, 1, 0x76, 0x0],
    [0x1D500, 1, 0x77, 0x0], [0x1D501, 1, 0x78, 0x0], [0x1D502, 1, 0x79, 0x0],
    [0x1D503, 1, 0x7A, 0x0], [0x1D504, 1, 0x41, 0x0], [0x1D505, 1, 0x42, 0x0],
    [0x1D507, 1, 0x44, 0x0], [0x1D508, 1, 0x45, 0x0], [0x1D509, 1, 0x46, 0x0],
    [0x1D50A, 1, 0x47, 0x0], [0x1D50D, 1, 0x4A, 0x0], [0x1D50E, 1, 0x4B, 0x0],
    [0x1D50F, 1, 0x4C, 0x0], [0x1D510, 1, 0x4D, 0x0], [0x1D511, 1, 0x4E, 0x0],
    [0x1D512, 1, 0x4F, 0x0], [0x1D513, 1, 0x50, 0x0], [0x1D514, 1, 0x51, 0x0],
    [0x1D516, 1, 0x53, 0x0], [0x1D517, 1, 0x54, 0x0], [0x1D518, 1, 0x55, 0x0],
    [0x1D519, 1, 0x56, 0x0], [0x1D51A, 1, 0x57, 0x0], [0x1D51B, 1, 0x58, 0x0],
    [0x1D51C, 1, 0x59, 0x0], [0x1D51E, 1, 0x61, 0x0], [0x1D51F, 1, 0x62, 0x0],
    [0x1D520, 1, 0x63, 0x0], [0x1D521, 1, 0x64, 0x0], [0x1D522, 1, 0x65, 0x0],
    [0x1D523, 1, 0x66, 0x0], [0x1D524, 1, 0x67, 0x0], [0x1D525, 1, 0x68, 0x0],
    [0x1D526, 1, 0x69, 0x0], [0x1D527, 1, 0x6A, 0x0], [0x1D528, 1, 0x6B, 0x0],
    [0x1D529, 1, 0x6C, 0x0], [0x1D52A, 1, 0x6D, 0x0], [0x1D52B, 1, 0x6E, 0x0],
    [0x1D52C, 1, 0x6F, 0x0], [0x1D52D, 1, 0x70, 0x0], [0x1D52E, 1, 0x71, 0x0],
    [0x1D52F, 1, 0x72, 0x0], [0x1D530, 1, 0x73, 0x0], [0x1D531, 1, 0x74, 0x0],
    [0x1D532, 1, 0x75, 0x0], [0x1D533, 1, 0x76, 0x0], [0x1D534, 1, 0x77, 0x0],
    [0x1D535, 1, 0x78, 0x0], [0x1D536, 1, 0x79, 0x0], [0x1D537, 1, 0x7A, 0x0],
    [0x1D538, 1, 0x41, 0x0], [0x1D539, 1, 0x42, 0x0], [0x1D53B, 1, 0x44, 0x0],
    [0x1D53C, 1, 0x45, 0x0], [0x1D53D, 1, 0x46, 0x0], [0x1D53E, 1, 0x47, 0x0],
    [0x1D540, 1, 0x49, 0x0], [0x1D541, 1, 0x4A, 0x0], [0x1D542, 1, 0x4B, 0x0],
    [0x1D543, 1, 0x4C, 0x0], [0x1D544, 1, 0x4D, 0x0], [0x1D546, 1, 0x4F, 0x0],
    [0x1D54A, 1, 0x53, 0x0], [0x1D54B, 1, 0x54, 0x0], [0x1D54C, 1, 0x55, 0x0],
    [0x1D54D, 1, 0x56, 0x0], [0x1D54E, 1, 0x57, 0x0], [0x1D54F, 1, 0x58, 0x0],
    [0x1D550, 1, 0x59, 0x0], [0x1D552, 1, 0x61, 0x0], [0x1D553, 1, 0x62, 0x0],
    [0x1D554, 1, 0x63, 0x0], [0x1D555, 1, 0x64, 0x0], [0x1D556, 1, 0x65, 0x0],
    [0x1D557, 1, 0x66, 0x0], [0x1D558, 1, 0x67, 0x0], [0x1D559, 1, 0x68, 0x0],
    [0x1D55A, 1, 0x69, 0x0], [0x1D55B, 1, 0x6A, 0x0], [0x1D55C, 1, 0x6B, 0x0],
    [0x1D55D, 1, 0x6C, 0x0], [0x1D55E, 1, 0x6D, 0x0], [0x1D55F, 1, 0x6E, 0x0],
    [0x1D560, 1, 0x6F, 0x0], [0x1D561, 1, 0x70, 0x0], [0x1D562, 1, 0x71, 0x0],
    [0x1D563, 1, 0x72, 0x0], [0x1D564, 1, 0x73, 0x0], [0x1D565, 1, 0x74, 0x0],
    [0x1D566, 1, 0x75, 0x0], [0x1D567, 1, 0x76, 0x0], [0x1D568, 1, 0x77, 0x0],
    [0x1D569, 1, 0x78, 0x0], [0x1D56A, 1, 0x79, 0x0], [0x1D56B, 1, 0x7A, 0x0],
    [0x1D56C, 1, 0x41, 0x0], [0x1D56D, 1, 0x42, 0x0], [0x1D56E, 1, 0x43, 0x0],
    [0x1D56F, 1, 0x44, 0x0], [0x1D570, 1, 0x45, 0x0], [0x1D571, 1, 0x46, 0x0],
    [0x1D572, 1, 0x47, 0x0], [0x1D573, 1, 0x48, 0x0], [0x1D574, 1, 0x49, 0x0],
    [0x1D575, 1, 0x4A, 0x0], [0x1D576, 1, 0x4B, 0x0], [0x1D577, 1, 0x4C, 0x0],
    [0x1D578, 1, 0x4D, 0x0], [0x1D579, 1, 0x4E, 0x0], [0x1D57A, 1, 0x4F, 0x0],
    [0x1D57B, 1, 0x50, 0x0], [0x1D57C, 1, 0x51, 0x0], [0x1D57D, 1, 0x52, 0x0],
    [0x1D57E, 1, 0x53, 0x0], [0x1D57F, 1, 0x54, 0x0], [0x1D580, 1, 0x55, 0x0],
    [0x1D581, 1, 0x56, 0x0], [0x1D582, 1, 0x57, 0x0], [0x1D583, 1, 0x58, 0x0],
    [0x1D584, 1, 0x59, 0x0], [0x1D585, 1, 0x5A, 0x0], [0x1D586, 1, 0x61, 0x0],
    [0x1D587, 1, 0x62, 0x0], [0x1D588, 1, 0x63, 0x0], [0x1D589, 1, 0x64, 0x0],
    [0x1D58A, 1, 0x65, 0x0], [0x1D58B, 1, 0x66, 0x0], [0x1D58C, 1, 0x67, 0x0],
    [0x1D58D, 1, 0x68, 0x0], [0x1D58E, 1, 0x69, 0x0], [0x1D58F, 1, 0x6A, 0x0],
    [0x1D590, 1, 0x6B, 0x0], [0x1D591, 1, 0x6C, 0x0], [0x1D592, 1, 0x6D, 0x0],
    [0x1D593, 1, 0x6E, 0x0], [0x1D594, 1, 0x6F, 0x0], [0x1D595, 1, 0x70, 0x0],
    [0x1D596, 1, 0x71, 0x0], [0x1D597, 1, 0x72, 0x0], [0x1D598, 1, 0x73, 0x0],
    [0x1D599, 1, 0x74, 0x0], [0x1D59A, 1, 0x75, 0x0], [0x1D59B, 1, 0x76, 0x0],
    [0x1D59C, 1, 0x77, 0x0], [0x1D59D, 1, 0x78, 0x0], [0x1D59E, 1, 0x79, 0x0],
    [0x1D59F, 1, 0x7A, 0x0], [0x1D5A0, 1, 0x41, 0x0], [0x1D5A1, 1, 0x42, 0x0],
    [0x1D5A2, 1, 0x43, 0x0], [0x1D5A3, 1, 0x44, 0x0], [0x1D5A4, 1, 0x45, 0x0],
    [0x1D5A5, 1, 0x46, 0x0], [0x1D5A6, 1, 0x47, 0x0], [0x1D5A7, 1, 0x48, 0x0],
    [0x1D5A8, 1, 0x49, 0x0], [0x1D5A9, 1, 0x4A, 0x0], [0x1D5AA, 1, 0x4B, 0x0],
    [0x1D5AB, 1, 0x4C, 0x0], [0x1D5AC, 1, 0x4D, 0x0], [0x1D5AD, 1, 0x4E, 0x0],
    [0x1D5AE, 1, 0x4F, 0x0], [0x1D5AF, 1, 0x50, 0x0], [0x1D5B0, 1, 0x51, 0x0],
    [0x1D5B1, 1, 0x52, 0x0], [0x1D5B2, 1, 0x53, 0x0], [0x1D5B3, 1, 0x54, 0x0],
    [0x1D5B4, 1, 0x55, 0x0], [0x1D5B5, 1, 0x56, 0x0], [0x1D5B6, 1, 0x57, 0x0],
    [0x1D5B7, 1, 0x58, 0x0], [0x1D5B8, 1, 0x59, 0x0], [0x1D5B9, 1, 0x5A, 0x0],
    [0x1D5BA, 1, 0x61, 0x0], [0x1D5BB, 1, 0x62, 0x0], [0x1D5BC, 1, 0x63, 0x0],
    [0x1D5BD, 1, 0x64, 0x0], [0x1D5BE, 1, 0x65, 0x0], [0x1D5BF, 1, 0x66, 0x0],
    [0x1D5C0, 1, 0x67, 0x0], [0x1D5C1, 1, 0x68, 0x0], [0x1D5C2, 1, 0x69, 0x0],
    [0x1D5C3, 1, 0x6A, 0x0], [0x1D5C4, 1, 0x6B, 0x0], [0x1D5C5, 1, 0x6C, 0x0],
    [0x1D5C6, 1, 0x6D, 0x0], [0x1D5C7, 1, 0x6E, 0x0], [0x1D5C8, 1, 0x6F, 0x0],
    [0x1D5C9, 1, 0x70, 0x0], [0x1D5CA, 1, 0x71, 0x0], [0x1D5CB, 1, 0x72, 0x0],
    [0x1D5CC, 1, 0x73, 0x0], [0x1D5CD, 1, 0x74, 0x0], [0x1D5CE, 1, 0x75, 0x0],
    [0x1D5CF, 1, 0x76, 0x0], [0x1D5D0, 1, 0x77, 0x0], [0x1D5D1, 1, 0x78, 0x0],
    [0x1D5D2, 1, 0x79, 0x0], [0x1D5D3, 1, 0x7A, 0x0], [0x1D5D4, 1, 0x41, 0x0],
    [0x1D5D5, 1, 0x42, 0x0], [0x1D5D6, 1, 0x43, 0x0], [0x1D5D7, 1, 0x44, 0x0],
    [0x1D5D8, 1, 0x45, 0x0], [0x1D5D9, 1, 0x46, 0x0], [0x1D5DA, 1, 0x47, 0x0],
    [0x1D5DB, 1, 0x48, 0x0], [0x1D5DC, 1, 0x49, 0x0], [0x1D5DD, 1, 0x4A, 0x0],
    [0x1D5DE, 1, 0x4B, 0x0], [0x1D5DF, 1, 0x4C, 0x0], [0x1D5E0, 1, 0x4D, 0x0],
    [0x1D5E1, 1, 0x4E, 0x0], [0x1D5E2, 1, 0x4F, 0x0], [0x1D5E3, 1, 0x50, 0x0],
    [0x1D5E4, 1, 0x51, 0x0], [0x1D5E5, 1, 0x52, 0x0], [0x1D5E6, 1, 0x53, 0x0],
    [0x1D5E7, 1, 0x54, 0x0], [0x1D5E8, 1, 0x55, 0x0], [0x1D5E9, 1, 0x56, 0x0],
    [0x1D5EA, 1, 0x57, 0x0], [0x1D5EB, 1, 0x58, 0x0], [0x1D5EC, 1, 0x59, 0x0],
    [0x1D5ED, 1, 0x5A, 0x0], [0x1D5EE, 1, 0x61, 0x0], [0x1D5EF, 1, 0x62, 0x0],
    [0x1D5F0, 1, 0x63, 0x0], [0x1D5F1, 1, 0x64, 0x0], [0x1D5F2, 1, 0x65, 0x0],
    [0x1D5F3, 1, 0x66, 0x0], [0x1D5F4, 1, 0x67, 0x0], [0x1D5F5, 1, 0x68, 0x0],
    [0x1D5F6, 1, 0x69, 0x0], [0x1D5F7, 1, 0x6A, 0x0], [0x1D5F8, 1, 0x6B, 0x0],
    [0x1D5F9, 1, 0x6C, 0x0], [0x1D5FA, 1, 0x6D, 0x0], [0x1D5FB, 1, 0x6E, 0x0],
    [0x1D5FC, 1, 0x6F, 0x0], [0x1D5FD, 1, 0x70, 0x0], [0x1D5FE, 1, 0x71, 0x0],
    [0x1D5FF, 1, 0x72, 0x0], [0x1D600, 1, 0x73, 0x0], [0x1D601, 1, 0x74, 0x0],
    [0x1D602, 1, 0x75, 0x0], [0x1D603, 1, 0x76, 0x0], [0x1D604, 1, 0x77, 0x0],
    [0x1D605, 1, 0x78, 0x0], [0x1D606, 1, 0x79, 0x0], [0x1D607, 1, 0x7A, 0x0],
    [0x1D608, 1, 0x41, 0x0], [0x1D609, 1, 0x42, 0x0], [0x1D60A, 1, 0x43, 0x0],
    [0x1D60B, 1, 0x44, 0x0], [0x1D60C, 1, 0x45, 0x0], [0x1D60D, 1, 0x46, 0x0],
    [0x1D60E, 1, 0x47, 0x0], [0x1D60F, 1, 0x48, 0x0], [0x1D610, 1, 0x49, 0x0],
    [0x1D611, 1, 0x4A, 0x0], [0x1D612, 1, 0x4B, 0x0], [0x1D613, 1, 0x4C, 0x0],
    [0x1D614, 1, 0x4D, 0x0], [0x1D615, 1, 0x4E, 0x0], [0x1D616, 1, 0x4F, 0x0],
    [0x1D617, 1, 0x50, 0x0], [0x1D618, 1, 0x51, 0x0], [0x1D619, 1, 0x52, 0x0],
    [0x1D61A, 1, 0x53, 0x0], [0x1D61B, 1, 0x54, 0x0], [0x1D61C, 1, 0x55, 0x0],
    [0x1D61D, 1, 0x56, 0x0], [0x1D61E, 1, 0x57, 0x0], [0x1D61F, 1, 0x58, 0x0],
    [0x1D620, 1, 0x59, 0x0], [0x1D621, 1, 0x5A, 0x0], [0x1D622, 1, 0x61, 0x0],
    [0x1D623, 1, 0x62, 0x0], [0x1D624, 1, 0x63, 0x0], [0x1D625, 1, 0x64, 0x0],
    [0x1D626, 1, 0x65, 0x0], [0x1D627, 1, 0x66, 0x0], [0x1D628, 1, 0x67, 0x0],
    [0x1D629, 1, 0x68, 0x0], [0x1D62A, 1, 0x69, 0x0], [0x1D62B, 1, 0x6A, 0x0],
    [0x1D62C, 1, 0x6B, 0x0], [0x1D62D, 1, 0x6C, 0x0], [0x1D62E, 1, 0x6D, 0x0],
    [0x1D62F, 1, 0x6E, 0x0], [0x1D630, 1, 0x6F, 0x0], [0x1D631, 1, 0x70, 0x0],
    [0x1D632, 1, 0x71, 0x0], [0x1D633, 1, 0x72, 0x0], [0x1D634, 1, 0x73, 0x0],
    [0x1D635, 1, 0x74, 0x0], [0x1D636, 1, 0x75, 0x0], [0x1D637, 1, 0x76, 0x0],
    [0x1D638, 1, 0x77, 0x0], [0x1D639, 1, 0x78, 0x0], [0x1D63A, 1, 0x79, 0x0],
    [0x1D63B, 1, 0x7A, 0x0], [0x1D63C, 1, 0x41, 0x0], [0x1D63D, 1, 0x42, 0x0],
    [0x1D63E, 1, 0x43, 0x0], [0x1D63F, 1, 0x44, 0x0], [0x1D640, 1, 0x45, 0x0],
    [0x1D641, 1, 0x46, 0x0], [0x1D642, 1, 0x47, 0x0], [0x1D643, 1, 0x48, 0x0],
    [0x1D644, 1, 0x49, 0x0], [0x1D645, 1, 0x4A, 0x0], [0x1D646, 1, 0x4B, 0x0],
    [0x1D647, 1, 0x4C, 0x0], [0x1D648, 1, 0x4D, 0x0], [0x1D649, 1, 0x4E, 0x0],
    [0x1D64A, 1, 0x4F, 0x0], [0x1D64B, 1, 0x50, 0x0], [0x1D64C, 1, 0x51, 0x0],
    [0x1D64D, 1, 0x52, 0x0], [0x1D64E, 1, 0x53, 0x0], [0x1D64F, 1, 0x54, 0x0],
    [0x1D650, 1, 0x55, 0x0], [0x1D651, 1, 0x56, 0x0], [0x1D652, 1, 0x57, 0x0],
    [0x1D653, 1, 0x58, 0x0], [0x1D654, 1, 0x59, 0x0], [0x1D655, 1, 0x5A, 0x0],
    [0x1D656, 1, 0x61, 0x0], [0x1D657, 1, 0x62, 0x0], [0x1D658, 1, 0x63, 0x0],
    [0x1D659, 1, 0x64, 0x0], [0x1D65A, 1, 0x65, 0x0], [0x1D65B, 1, 0x66, 0x0],
    [0x1D65C, 1, 0x67, 0x0], [0x1D65D, 1, 0x68, 0x0], [0x1D65E, 1, 0x69, 0x0],
    [0x1D65F, 1, 0x6A, 0x0], [0x1D660, 1, 0x6B, 0x0], [0x1D661, 1, 0x6C, 0x0],
    [0x1D662, 1, 0x6D, 0x0], [0x1D663, 1, 0x6E, 0x0], [0x1D664, 1, 0x6F, 0x0],
    [0x1D665, 1, 0x70, 0x0], [0x1D666, 1, 0x71, 0x0], [0x1D667, 1, 0x72, 0x0],
    [0x1D668, 1, 0x73, 0x0], [0x1D669, 1, 0x74, 0x0], [0x1D66A, 1, 0x75, 0x0],
    [0x1D66B, 1, 0x76, 0x0], [0x1D66C, 1, 0x77, 0x0], [0x1D66D, 1, 0x78, 0x0],
    [0x1D66E, 1, 0x79, 0x0], [0x1D66F, 1, 0x7A, 0x0], [0x1D670, 1, 0x41, 0x0],
    [0x1D671, 1, 0x42, 0x0], [0x1D672, 1, 0x43, 0x0], [0x1D673, 1, 0x44, 0x0],
    [0x1D674, 1, 0x45, 0x0], [0x1D675, 1, 0x46, 0x0], [0x1D676, 1, 0x47, 0x0],
    [0x1D677, 1, 0x48, 0x0], [0x1D678, 1, 0x49, 0x0], [0x1D679, 1, 0x4A, 0x0],
    [0x1D67A, 1, 0x4B, 0x0], [0x1D67B, 1, 0x4C, 0x0], [0x1D67C, 1, 0x4D, 0x0],
    [0x1D67D, 1, 0x4E, 0x0], [0x1D67E, 1, 0x4F, 0x0], [0x1D67F, 1, 0x50, 0x0],
    [0x1D680, 1, 0x51, 0x0], [0x1D681, 1, 0x52, 0x0], [0x1D682, 1, 0x53, 0x0],
    [0x1D683, 1, 0x54, 0x0], [0x1D684, 1, 0x55, 0x0], [0x1D685, 1, 0x56, 0x0],
    [0x1D686, 1, 0x57, 0x0], [0x1D687, 1, 0x58, 0x0], [0x1D688, 1, 0x59, 0x0],
    [0x1D689, 1, 0x5A, 0x0], [0x1D68A, 1, 0x61, 0x0], [0x1D68B, 1, 0x62, 0x0],
    [0x1D68C, 1, 0x63, 0x0], [0x1D68D, 1, 0x64, 0x0], [0x1D68E, 1, 0x65, 0x0],
    [0x1D68F, 1, 0x66, 0x0], [0x1D690, 1, 0x67, 0x0], [0x1D691, 1, 0x68, 0x0],
    [0x1D692, 1, 0x69, 0x0], [0x1D693, 1, 0x6A, 0x0], [0x1D694, 1, 0x6B, 0x0],
    [0x1D695, 1, 0x6C, 0x0], [0x1D696, 1, 0x6D, 0x0], [0x1D697, 1, 0x6E, 0x0],
    [0x1D698, 1, 0x6F, 0x0], [0x1D699, 1, 0x70, 0x0], [0x1D69A, 1, 0x71, 0x0],
    [0x1D69B, 1, 0x72, 0x0], [0x1D69C, 1, 0x73, 0x0], [0x1D69D, 1, 0x74, 0x0],
    [0x1D69E, 1, 0x75, 0x0], [0x1D69F, 1, 0x76, 0x0], [0x1D6A0, 1, 0x77, 0x0],
    [0x1D6A1, 1, 0x78, 0x0], [0x1D6A2, 1, 0x79, 0x0], [0x1D6A3, 1, 0x7A, 0x0],
    [0x1D6A4, 1, 0x131, 0x0], [0x1D6A5, 1, 0x237, 0x0], [0x1D6A8, 1, 0x391, 0x0],
    [0x1D6A9, 1, 0x392, 0x0], [0x1D6AA, 1, 0x393, 0x0], [0x1D6AB, 1, 0x394, 0x0],
    [0x1D6AC, 1, 0x395, 0x0], [0x1D6AD, 1, 0x396, 0x0], [0x1D6AE, 1, 0x397, 0x0],
    [0x1D6AF, 1, 0x398, 0x0], [0x1D6B0, 1, 0x399, 0x0], [0x1D6B1, 1, 0x39A, 0x0],
    [0x1D6B2, 1, 0x39B, 0x0], [0x1D6B3, 1, 0x39C, 0x0], [0x1D6B4, 1, 0x39D, 0x0],
    [0x1D6B5, 1, 0x39E, 0x0], [0x1D6B6, 1, 0x39F, 0x0], [0x1D6B7, 1, 0x3A0, 0x0],
    [0x1D6B8, 1, 0x3A1, 0x0], [0x1D6B9, 1, 0x3F4, 0x0], [0x1D6BA, 1, 0x3A3, 0x0],
    [0x1D6BB, 1, 0x3A4, 0x0], [0x1D6BC, 1, 0x3A5, 0x0], [0x1D6BD, 1, 0x3A6, 0x0],
    [0x1D6BE, 1, 0x3A7, 0x0], [0x1D6BF, 1, 0x3A8, 0x0], [0x1D6C0, 1, 0x3A9, 0x0],
    [0x1D6C1, 1, 0x2207, 0x0], [0x1D6C2, 1, 0x3B1, 0x0], [0x1D6C3, 1, 0x3B2, 0x0],
    [0x1D6C4, 1, 0x3B3, 0x0], [0x1D6C5, 1, 0x3B4, 0x0], [0x1D6C6, 1, 0x3B5, 0x0],
    [0x1D6C7, 1, 0x3B6, 0x0], [0x1D6C8, 1, 0x3B7, 0x0], [0x1D6C9, 1, 0x3B8, 0x0],
    [0x1D6CA, 1, 0x3B9, 0x0], [0x1D6CB, 1, 0x3BA, 0x0], [0x1D6CC, 1, 0x3BB, 0x0],
    [0x1D6CD, 1, 0x3BC, 0x0], [0x1D6CE, 1, 0x3BD, 0x0], [0x1D6CF, 1, 0x3BE, 0x0],
    [0x1D6D0, 1, 0x3BF, 0x0], [0x1D6D1, 1, 0x3C0, 0x0], [0x1D6D2, 1, 0x3C1, 0x0],
    [0x1D6D3, 1, 0x3C2, 0x0], [0x1D6D4, 1, 0x3C3, 0x0], [0x1D6D5, 1, 0x3C4, 0x0],
    [0x1D6D6, 1, 0x3C5, 0x0], [0x1D6D7, 1, 0x3C6, 0x0], [0x1D6D8, 1, 0x3C7, 0x0],
    [0x1D6D9, 1, 0x3C8, 0x0], [0x1D6DA, 1, 0x3C9, 0x0], [0x1D6DB, 1, 0x2202, 0x0],
    [0x1D6DC, 1, 0x3F5, 0x0], [0x1D6DD, 1, 0x3D1, 0x0], [0x1D6DE, 1, 0x3F0, 0x0],
    [0x1D6DF, 1, 0x3D5, 0x0], [0x1D6E0, 1, 0x3F1, 0x0], [0x1D6E1, 1, 0x3D6, 0x0],
    [0x1D6E2, 1, 0x391, 0x0], [0x1D6E3, 1, 0x392, 0x0], [0x1D6E4, 1, 0x393, 0x0],
    [0x1D6E5, 1, 0x394, 0x0], [0x1D6E6, 1, 0x395, 0x0], [0x1D6E7, 1, 0x396, 0x0],
    [0x1D6E8, 1, 0x397, 0x0], [0x1D6E9, 1, 0x398, 0x0], [0x1D6EA, 1, 0x399, 0x0],
    [0x1D6EB, 1, 0x39A, 0x0], [0x1D6EC, 1, 0x39B, 0x0], [0x1D6ED, 1, 0x39C, 0x0],
    [0x1D6EE, 1, 0x39D, 0x0], [0x1D6EF, 1, 0x39E, 0x0], [0x1D6F0, 1, 0x39F, 0x0],
    [0x1D6F1, 1, 0x3A0, 0x0], [0x1D6F2, 1, 0x3A1, 0x0], [0x1D6F3, 1, 0x3F4, 0x0],
    [0x1D6F4, 1, 0x3A3, 0x0], [0x1D6F5, 1, 0x3A4, 0x0], [0x1D6F6, 1, 0x3A5, 0x0],
    [0x1D6F7, 1, 0x3A6, 0x0], [0x1D6F8, 1, 0x3A7, 0x0], [0x1D6F9, 1, 0x3A8, 0x0],
    [0x1D6FA, 1, 0x3A9, 0x0], [0x1D6FB, 1, 0x2207, 0x0], [0x1D6FC, 1, 0x3B1, 0x0],
    [0x1D6FD, 1, 0x3B2, 0x0], [0x1D6FE, 1, 0x3B3, 0x0], [0x1D6FF, 1, 0x3B4, 0x0],
    [0x1D700, 1, 0x3B5, 0x0], [0x1D701, 1, 0x3B6, 0x0], [0x1D702, 1, 0x3B7, 0x0],
    [0x1D703, 1, 0x3B8, 0x0], [0x1D704, 1, 0x3B9, 0x0], [0x1D705, 1, 0x3BA, 0x0],
    [0x1D706, 1, 0x3BB, 0x0], [0x1D707, 1, 0x3BC, 0x0], [0x1D708, 1, 0x3BD, 0x0],
    [0x1D709, 1, 0x3BE, 0x0], [0x1D70A, 1, 0x3BF, 0x0], [0x1D70B, 1, 0x3C0, 0x0],
    [0x1D70C, 1, 0x3C1, 0x0], [0x1D70D, 1, 0x3C2, 0x0], [0x1D70E, 1, 0x3C3, 0x0],
    [0x1D70F, 1, 0x3C4, 0x0], [0x1D710, 1, 0x3C5, 0x0], [0x1D711, 1, 0x3C6, 0x0],
    [0x1D712, 1, 0x3C7, 0x0], [0x1D713, 1, 0x3C8, 0x0], [0x1D714, 1, 0x3C9, 0x0],
    [0x1D715, 1, 0x2202, 0x0], [0x1D716, 1, 0x3F5, 0x0], [0x1D717, 1, 0x3D1, 0x0],
    [0x1D718, 1, 0x3F0, 0x0], [0x1D719, 1, 0x3D5, 0x0], [0x1D71A, 1, 0x3F1, 0x0],
    [0x1D71B, 1, 0x3D6, 0x0], [0x1D71C, 1, 0x391, 0x0], [0x1D71D, 1, 0x392, 0x0],
    [0x1D71E, 1, 0x393, 0x0], [0x1D71F, 1, 0x394, 0x0], [0x1D720, 1, 0x395, 0x0],
    [0x1D721, 1, 0x396, 0x0], [0x1D722, 1, 0x397, 0x0], [0x1D723, 1, 0x398, 0x0],
    [0x1D724, 1, 0x399, 0x0], [0x1D725, 1, 0x39A, 0x0], [0x1D726, 1, 0x39B, 0x0],
    [0x1D727, 1, 0x39C, 0x0], [0x1D728, 1, 0x39D, 0x0], [0x1D729, 1, 0x39E, 0x0],
    [0x1D72A, 1, 0x39F, 0x0], [0x1D72B, 1, 0x3A0, 0x0], [0x1D72C, 1, 0x3A1, 0x0],
    [0x1D72D, 1, 0x3F4, 0x0], [0x1D72E, 1, 0x3A3, 0x0], [0x1D72F, 1, 0x3A4, 0x0],
    [0x1D730, 1, 0x3A5, 0x0], [0x1D731, 1, 0x3A6, 0x0], [0x1D732, 1, 0x3A7, 0x0],
    [0x1D733, 1, 0x3A8, 0x0], [0x1D734, 1, 0x3A9, 0x0], [0x1D735, 1, 0x2207, 0x0],
    [0x1D736, 1, 0x3B1, 0x0], [0x1D737, 1, 0x3B2, 0x0], [0x1D738, 1, 0x3B3, 0x0],
    [0x1D739, 1, 0x3B4, 0x0], [0x1D73A, 1, 0x3B5, 0x0], [0x1D73B, 1, 0x3B6, 0x0],
    [0x1D73C, 1, 0x3B7, 0x0], [0x1D73D, 1, 0x3B8, 0x0], [0x1D73E, 1, 0x3B9, 0x0],
    [0x1D73F, 1, 0x3BA, 0x0], [0x1D740, 1, 0x3BB, 0x0], [0x1D741, 1, 0x3BC, 0x0],
    [0x1D742, 1, 0x3BD, 0x0], [0x1D743, 1, 0x3BE, 0x0], [0x1D744, 1, 0x3BF, 0x0],
    [0x1D745, 1, 0x3C0, 0x0], [0x1D746, 1, 0x3C1, 0x0], [0x1D747, 1, 0x3C2, 0x0],
    [0x1D748, 1, 0x3C3, 0x0], [0x1D749, 1, 0x3C4, 0x0], [0x1D74A, 1, 0x3C5, 0x0],
    [0x1D74B, 1, 0x3C6, 0x0], [0x1D74C, 1, 0x3C7, 0x0], [0x1D74D, 1, 0x3C8, 0x0],
    [0x1D74E, 1, 0x3C9, 0x0], [0x1D74F, 1, 0x2202, 0x0], [0x1D750, 1, 0x3F5, 0x0],
    [0x1D751, 1, 0x3D1, 0x0], [0x1D752, 1, 0x3F0, 0x0], [0x1D753, 1, 0x3D5, 0x0],
    [0x1D754, 1, 0x3F1, 0x0], [0x1D755, 1, 0x3D6, 0x0], [0x1D756, 1, 0x391, 0x0],
    [0x1D757, 1, 0x392, 0x0], [0x1D758, 1, 0x393, 0x0], [0x1D759, 1, 0x394, 0x0],
    [0x1D75A, 1, 0x395, 0x0], [0x1D75B, 1, 0x396, 0x0], [0x1D75C, 1, 0x397, 0x0],
    [0x1D75D, 1, 0x398, 0x0], [0x1D75E, 1, 0x399, 0x0], [0x1D75F, 1, 0x39A, 0x0],
    [0x1D760, 1, 0x39B, 0x0], [0x1D761, 1, 0x39C, 0x0], [0x1D762, 1, 0x39D, 0x0],
    [0x1D763, 1, 0x39E, 0x0], [0x1D764, 1, 0x39F, 0x0], [0x1D765, 1, 0x3A0, 0x0],
    [0x1D766, 1, 0x3A1, 0x0], [0x1D767, 1, 0x3F4, 0x0], [0x1D768, 1, 0x3A3, 0x0],
    [0x1D769, 1, 0x3A4, 0x0], [0x1D76A, 1, 0x3A5, 0x0], [0x1D76B, 1, 0x3A6, 0x0],
    [0x1D76C, 1, 0x3A7, 0x0], [0x1D76D, 1, 0x3A8, 0x0], [0x1D76E, 1, 0x3A9, 0x0],
    [0x1D76F, 1, 0x2207, 0x0], [0x1D770, 1, 0x3B1, 0x0], [0x1D771, 1, 0x3B2, 0x0],
    [0x1D772, 1, 0x3B3, 0x0], [0x1D773, 1, 0x3B4, 0x0], [0x1D774, 1, 0x3B5, 0x0],
    [0x1D775, 1, 0x3B6, 0x0], [0x1D776, 1, 0x3B7, 0x0], [0x1D777, 1, 0x3B8, 0x0],
    [0x1D778, 1, 0x3B9, 0x0], [0x1D779, 1, 0x3BA, 0x0], [0x1D77A, 1, 0x3BB, 0x0],
    [0x1D77B, 1, 0x3BC, 0x0], [0x1D77C, 1, 0x3BD, 0x0], [0x1D77D, 1, 0x3BE, 0x0],
    [0x1D77E, 1, 0x3BF, 0x0], [0x1D77F, 1, 0x3C0, 0x0], [0x1D780, 1, 0x3C1, 0x0],
    [0x1D781, 1, 0x3C2, 0x0], [0x1D782, 1, 0x3C3, 0x0], [0x1D783, 1, 0x3C4, 0x0],
    [0x1D784, 1, 0x3C5, 0x0], [0x1D785, 1, 0x3C6, 0x0], [0x1D786, 1, 0x3C7, 0x0],
    [0x1D787, 1, 0x3C8, 0x0], [0x1D788, 1, 0x3C9, 0x0], [0x1D789, 1, 0x2202, 0x0],
    [0x1D78A, 1, 0x3F5, 0x0], [0x1D78B, 1, 0x3D1, 0x0], [0x1D78C, 1, 0x3F0, 0x0],
    [0x1D78D, 1, 0x3D5, 0x0], [0x1D78E, 1, 0x3F1, 0x0], [0x1D78F, 1, 0x3D6, 0x0],
    [0x1D790, 1, 0x391, 0x0], [0x1D791, 1, 0x392, 0x0], [0x1D792, 1, 0x393, 0x0],
    [0x1D793, 1, 0x394, 0x0], [0x1D794, 1, 0x395, 0x0], [0x1D795, 1, 0x396, 0x0],
    [0x1D796, 1, 0x397, 0x0], [0x1D797, 1, 0x398, 0x0], [0x1D798, 1, 0x399, 0x0],
    [0x1D799, 1, 0x39A, 0x0], [0x1D79A, 1, 0x39B, 0x0], [0x1D79B, 1, 0x39C, 0x0],
    [0x1D79C, 1, 0x39D, 0x0], [0x1D79D, 1, 0x39E, 0x0], [0x1D79E, 1, 0x39F, 0x0],
    [0x1D79F, 1, 0x3A0, 0x0], [0x1D7A0, 1, 0x3A1, 0x0], [0x1D7A1, 1, 0x3F4, 0x0],
    [0x1D7A2, 1, 0x3A3, 0x0], [0x1D7A3, 1, 0x3A4, 0x0], [0x1D7A4, 1, 0x3A5, 0x0],
    [0x1D7A5, 1, 0x3A6, 0x0], [0x1D7A6, 1, 0x3A7, 0x0], [0x1D7A7, 1, 0x3A8, 0x0],
    [0x1D7A8, 1, 0x3A9, 0x0], [0x1D7A9, 1, 0x2207, 0x0], [0x1D7AA, 1, 0x3B1, 0x0],
    [0x1D7AB, 1, 0x3B2, 0x0], [0x1D7AC, 1, 0x3B3, 0x0], [0x1D7AD, 1, 0x3B4, 0x0],
    [0x1D7AE, 1, 0x3B5, 0x0], [0x1D7AF, 1, 0x3B6, 0x0], [0x1D7B0, 1, 0x3B7, 0x0],
    [0x1D7B1, 1, 0x3B8, 0x0], [0x1D7B2, 1, 0x3B9, 0x0], [0x1D7B3, 1, 0x3BA, 0x0],
    [0x1D7B4, 1, 0x3BB, 0x0], [0x1D7B5, 1, 0x3BC, 0x0], [0x1D7B6, 1, 0x3BD, 0x0],
    [0x1D7B7, 1, 0x3BE, 0x0], [0x1D7B8, 1, 0x3BF, 0x0], [0x1D7B9, 1, 0x3C0, 0x0],
    [0x1D7BA, 1, 0x3C1, 0x0], [0x1D7BB, 1, 0x3C2, 0x0], [0x1D7BC, 1, 0x3C3, 0x0],
    [0x1D7BD, 1, 0x3C4, 0x0], [0x1D7BE, 1, 0x3C5, 0x0], [0x1D7BF, 1, 0x3C6, 0x0],
    [0x1D7C0, 1, 0x3C7, 0x0], [0x1D7C1, 1, 0x3C8, 0x0], [0x1D7C2, 1, 0x3C9, 0x0],
    [0x1D7C3, 1, 0x2202, 0x0], [0x1D7C4, 1, 0x3F5, 0x0], [0x1D7C5, 1, 0x3D1, 0x0],
    [0x1D7C6, 1, 0x3F0, 0x0], [0x1D7C7, 1, 0x3D5, 0x0], [0x1D7C8, 1, 0x3F1, 0x0],
    [0x1D7C9, 1, 0x3D6, 0x0], [0x1D7CA, 1, 0x3DC, 0x0], [0x1D7CB, 1, 0x3DD, 0x0],
    [0x1D7CE, 1, 0x30, 0x0], [0x1D7CF, 1, 0x31, 0x0], [0x1D7D0, 1, 0x32, 0x0],
    [0x1D7D1, 1, 0x33, 0x0], [0x1D7D2, 1, 0x34, 0x0], [0x1D7D3, 1, 0x35, 0x0],
    [0x1D7D4, 1, 0x36, 0x0], [0x1D7D5, 1, 0x37, 0x0], [0x1D7D6, 1, 0x38, 0x0],
    [0x1D7D7, 1, 0x39, 0x0], [0x1D7D8, 1, 0x30, 0x0], [0x1D7D9, 1, 0x31, 0x0],
    [0x1D7DA, 1, 0x32, 0x0], [0x1D7DB, 1, 0x33, 0x0], [0x1D7DC, 1, 0x34, 0x0],
    [0x1D7DD, 1, 0x35, 0x0], [0x1D7DE, 1, 0x36, 0x0], [0x1D7DF, 1, 0x37, 0x0],
    [0x1D7E0, 1, 0x38, 0x0], [0x1D7E1, 1, 0x39, 0x0], [0x1D7E2, 1, 0x30, 0x0],
    [0x1D7E3, 1, 0x31, 0x0], [0x1D7E4, 1, 0x32, 0x0], [0x1D7E5, 1, 0x33, 0x0],
    [0x1D7E6, 1, 0x34, 0x0], [0x1D7E7, 1, 0x35, 0x0], [0x1D7E8, 1, 0x36, 0x0],
    [0x1D7E9, 1, 0x37, 0x0], [0x1D7EA, 1, 0x38, 0x0], [0x1D7EB, 1, 0x39, 0x0],
    [0x1D7EC, 1, 0x30, 0x0], [0x1D7ED, 1, 0x31, 0x0], [0x1D7EE, 1, 0x32, 0x0],
    [0x1D7EF, 1, 0x33, 0x0], [0x1D7F0, 1, 0x34, 0x0], [0x1D7F1, 1, 0x35, 0x0],
    [0x1D7F2, 1, 0x36, 0x0], [0x1D7F3, 1, 0x37, 0x0], [0x1D7F4, 1, 0x38, 0x0],
    [0x1D7F5, 1, 0x39, 0x0], [0x1D7F6, 1, 0x30, 0x0], [0x1D7F7, 1, 0x31, 0x0],
    [0x1D7F8, 1, 0x32, 0x0], [0x1D7F9, 1, 0x33, 0x0], [0x1D7FA, 1, 0x34, 0x0],
    [0x1D7FB, 1, 0x35, 0x0], [0x1D7FC, 1, 0x36, 0x0], [0x1D7FD, 1, 0x37, 0x0],
    [0x1D7FE, 1, 0x38, 0x0], [0x1D7FF, 1, 0x39, 0x0], [0x1EE00, 1, 0x627, 0x0],
    [0x1EE01, 1, 0x628, 0x0], [0x1EE02, 1, 0x62C, 0x0], [0x1EE03, 1, 0x62F, 0x0],
    [0x1EE05, 1, 0x648, 0x0], [0x1EE06, 1, 0x632, 0x0], [0x1EE07, 1, 0x62D, 0x0],
    [0x1EE08, 1, 0x637, 0x0], [0x1EE09, 1, 0x64A, 0x0], [0x1EE0A, 1, 0x643, 0x0],
    [0x1EE0B, 1, 0x644, 0x0], [0x1EE0C, 1, 0x645, 0x0], [0x1EE0D, 1, 0x646, 0x0],
    [0x1EE0E, 1, 0x633, 0x0], [0x1EE0F, 1, 0x639, 0x0], [0x1EE10, 1, 0x641, 0x0],
    [0x1EE11, 1, 0x635, 0x0], [0x1EE12, 1, 0x642, 0x0], [0x1EE13, 1, 0x631, 0x0],
    [0x1EE14, 1, 0x634, 0x0], [0x1EE15, 1, 0x62A, 0x0], [0x1EE16, 1, 0x62B, 0x0],
    [0x1EE17, 1, 0x62E, 0x0], [0x1EE18, 1, 0x630, 0x0], [0x1EE19, 1, 0x636, 0x0],
    [0x1EE1A, 1, 0x638, 0x0], [0x1EE1B, 1, 0x63A, 0x0], [0x1EE1C, 1, 0x66E, 0x0],
    [0x1EE1D, 1, 0x6BA, 0x0], [0x1EE1E, 1, 0x6A1, 0x0], [0x1EE1F, 1, 0x66F, 0x0],
    [0x1EE21, 1, 0x628, 0x0], [0x1EE22, 1, 0x62C, 0x0], [0x1EE24, 1, 0x647, 0x0],
    [0x1EE27, 1, 0x62D, 0x0], [0x1EE29, 1, 0x64A, 0x0], [0x1EE2A, 1, 0x643, 0x0],
    [0x1EE2B, 1, 0x644, 0x0], [0x1EE2C, 1, 0x645, 0x0], [0x1EE2D, 1, 0x646, 0x0],
    [0x1EE2E, 1, 0x633, 0x0], [0x1EE2F, 1, 0x639, 0x0], [0x1EE30, 1, 0x641, 0x0],
    [0x1EE31, 1, 0x635, 0x0], [0x1EE32, 1, 0x642, 0x0], [0x1EE34, 1, 0x634, 0x0],
    [0x1EE35, 1, 0x62A, 0x0], [0x1EE36, 1, 0x62B, 0x0], [0x1EE37, 1, 0x62E, 0x0],
    [0x1EE39, 1, 0x636, 0x0], [0x1EE3B, 1, 0x63A, 0x0], [0x1EE42, 1, 0x62C, 0x0],
    [0x1EE47, 1, 0x62D, 0x0], [0x1EE49, 1, 0x64A, 0x0], [0x1EE4B, 1, 0x644, 0x0],
    [0x1EE4D, 1, 0x646, 0x0], [0x1EE4E, 1, 0x633, 0x0], [0x1EE4F, 1, 0x639, 0x0],
    [0x1EE51, 1, 0x635, 0x0], [0x1EE52, 1, 0x642, 0x0], [0x1EE54, 1, 0x634, 0x0],
    [0x1EE57, 1, 0x62E, 0x0], [0x1EE59, 1, 0x636, 0x0], [0x1EE5B, 1, 0x63A, 0x0],
    [0x1EE5D, 1, 0x6BA, 0x0], [0x1EE5F, 1, 0x66F, 0x0], [0x1EE61, 1, 0x628, 0x0],
    [0x1EE62, 1, 0x62C, 0x0], [0x1EE64, 1, 0x647, 0x0], [0x1EE67, 1, 0x62D, 0x0],
    [0x1EE68, 1, 0x637, 0x0], [0x1EE69, 1, 0x64A, 0x0], [0x1EE6A, 1, 0x643, 0x0],
    [0x1EE6C, 1, 0x645, 0x0], [0x1EE6D, 1, 0x646, 0x0], [0x1EE6E, 1, 0x633, 0x0],
    [0x1EE6F, 1, 0x639, 0x0], [0x1EE70, 1, 0x641, 0x0], [0x1EE71, 1, 0x635, 0x0],
    [0x1EE72, 1, 0x642, 0x0], [0x1EE74, 1, 0x634, 0x0], [0x1EE75, 1, 0x62A, 0x0],
    [0x1EE76, 1, 0x62B, 0x0], [0x1EE77, 1, 0x62E, 0x0], [0x1EE79, 1, 0x636, 0x0],
    [0x1EE7A, 1, 0x638, 0x0], [0x1EE7B, 1, 0x63A, 0x0], [0x1EE7C, 1, 0x66E, 0x0],
    [0x1EE7E, 1, 0x6A1, 0x0], [0x1EE80, 1, 0x627, 0x0], [0x1EE81, 1, 0x628, 0x0],
    [0x1EE82, 1, 0x62C, 0x0], [0x1EE83, 1, 0x62F, 0x0], [0x1EE84, 1, 0x647, 0x0],
    [0x1EE85, 1, 0x648, 0x0], [0x1EE86, 1, 0x632, 0x0], [0x1EE87, 1, 0x62D, 0x0],
    [0x1EE88, 1, 0x637, 0x0], [0x1EE89, 1, 0x64A, 0x0], [0x1EE8B, 1, 0x644, 0x0],
    [0x1EE8C, 1, 0x645, 0x0], [0x1EE8D, 1, 0x646, 0x0], [0x1EE8E, 1, 0x633, 0x0],
    [0x1EE8F, 1, 0x639, 0x0], [0x1EE90, 1, 0x641, 0x0], [0x1EE91, 1, 0x635, 0x0],
    [0x1EE92, 1, 0x642, 0x0], [0x1EE93, 1, 0x631, 0x0], [0x1EE94, 1, 0x634, 0x0],
    [0x1EE95, 1, 0x62A, 0x0], [0x1EE96, 1, 0x62B, 0x0], [0x1EE97, 1, 0x62E, 0x0],
    [0x1EE98, 1, 0x630, 0x0], [0x1EE99, 1, 0x636, 0x0], [0x1EE9A, 1, 0x638, 0x0],
    [0x1EE9B, 1, 0x63A, 0x0], [0x1EEA1, 1, 0x628, 0x0], [0x1EEA2, 1, 0x62C, 0x0],
    [0x1EEA3, 1, 0x62F, 0x0], [0x1EEA5, 1, 0x648, 0x0], [0x1EEA6, 1, 0x632, 0x0],
    [0x1EEA7, 1, 0x62D, 0x0], [0x1EEA8, 1, 0x637, 0x0], [0x1EEA9, 1, 0x64A, 0x0],
    [0x1EEAB, 1, 0x644, 0x0], [0x1EEAC, 1, 0x645, 0x0], [0x1EEAD, 1, 0x646, 0x0],
    [0x1EEAE, 1, 0x633, 0x0], [0x1EEAF, 1, 0x639, 0x0], [0x1EEB0, 1, 0x641, 0x0],
    [0x1EEB1, 1, 0x635, 0x0], [0x1EEB2, 1, 0x642, 0x0], [0x1EEB3, 1, 0x631, 0x0],
    [0x1EEB4, 1, 0x634, 0x0], [0x1EEB5, 1, 0x62A, 0x0], [0x1EEB6, 1, 0x62B, 0x0],
    [0x1EEB7, 1, 0x62E, 0x0], [0x1EEB8, 1, 0x630, 0x0], [0x1EEB9, 1, 0x636, 0x0],
    [0x1EEBA, 1, 0x638, 0x0], [0x1EEBB, 1, 0x63A, 0x0], [0x1F100, 2, 0x30, 0x2E],
    [0x1F101, 2, 0x30, 0x2C], [0x1F102, 2, 0x31, 0x2C], [0x1F103, 2, 0x32, 0x2C],
    [0x1F104, 2, 0x33, 0x2C], [0x1F105, 2, 0x34, 0x2C], [0x1F106, 2, 0x35, 0x2C],
    [0x1F107, 2, 0x36, 0x2C], [0x1F108, 2, 0x37, 0x2C], [0x1F109, 2, 0x38, 0x2C],
    [0x1F10A, 2, 0x39, 0x2C], [0x1F12B, 1, 0x43, 0x0], [0x1F12C, 1, 0x52, 0x0],
    [0x1F12D, 2, 0x43, 0x44], [0x1F12E, 2, 0x57, 0x5A], [0x1F130, 1, 0x41, 0x0],
    [0x1F131, 1, 0x42, 0x0], [0x1F132, 1, 0x43, 0x0], [0x1F133, 1, 0x44, 0x0],
    [0x1F134, 1, 0x45, 0x0], [0x1F135, 1, 0x46, 0x0], [0x1F136, 1, 0x47, 0x0],
    [0x1F137, 1, 0x48, 0x0], [0x1F138, 1, 0x49, 0x0], [0x1F139, 1, 0x4A, 0x0],
    [0x1F13A, 1, 0x4B, 0x0], [0x1F13B, 1, 0x4C, 0x0], [0x1F13C, 1, 0x4D, 0x0],
    [0x1F13D, 1, 0x4E, 0x0], [0x1F13E, 1, 0x4F, 0x0], [0x1F13F, 1, 0x50, 0x0],
    [0x1F140, 1, 0x51, 0x0], [0x1F141, 1, 0x52, 0x0], [0x1F142, 1, 0x53, 0x0],
    [0x1F143, 1, 0x54, 0x0], [0x1F144, 1, 0x55, 0x0], [0x1F145, 1, 0x56, 0x0],
    [0x1F146, 1, 0x57, 0x0], [0x1F147, 1, 0x58, 0x0], [0x1F148, 1, 0x59, 0x0],
    [0x1F149, 1, 0x5A, 0x0], [0x1F14A, 2, 0x48, 0x56], [0x1F14B, 2, 0x4D, 0x56],
    [0x1F14C, 2, 0x53, 0x44], [0x1F14D, 2, 0x53, 0x53], [0x1F14F, 2, 0x57, 0x43],
    [0x1F16A, 2, 0x4D, 0x43], [0x1F16B, 2, 0x4D, 0x44], [0x1F16C, 2, 0x4D, 0x52],
    [0x1F190, 2, 0x44, 0x4A], [0x1F200, 2, 0x307B, 0x304B], [0x1F201, 2, 0x30B3, 0x30B3],
    [0x1F202, 1, 0x30B5, 0x0], [0x1F210, 1, 0x624B, 0x0], [0x1F211, 1, 0x5B57, 0x0],
    [0x1F212, 1, 0x53CC, 0x0], [0x1F213, 1, 0x30C7, 0x0], [0x1F214, 1, 0x4E8C, 0x0],
    [0x1F215, 1, 0x591A, 0x0], [0x1F216, 1, 0x89E3, 0x0], [0x1F217, 1, 0x5929, 0x0],
    [0x1F218, 1, 0x4EA4, 0x0], [0x1F219, 1, 0x6620, 0x0], [0x1F21A, 1, 0x7121, 0x0],
    [0x1F21B, 1, 0x6599, 0x0], [0x1F21C, 1, 0x524D, 0x0], [0x1F21D, 1, 0x5F8C, 0x0],
    [0x1F21E, 1, 0x518D, 0x0], [0x1F21F, 1, 0x65B0, 0x0], [0x1F220, 1, 0x521D, 0x0],
    [0x1F221, 1, 0x7D42, 0x0], [0x1F222, 1, 0x751F, 0x0], [0x1F223, 1, 0x8CA9, 0x0],
    [0x1F224, 1, 0x58F0, 0x0], [0x1F225, 1, 0x5439, 0x0], [0x1F226, 1, 0x6F14, 0x0],
    [0x1F227, 1, 0x6295, 0x0], [0x1F228, 1, 0x6355, 0x0], [0x1F229, 1, 0x4E00, 0x0],
    [0x1F22A, 1, 0x4E09, 0x0], [0x1F22B, 1, 0x904A, 0x0], [0x1F22C, 1, 0x5DE6, 0x0],
    [0x1F22D, 1, 0x4E2D, 0x0], [0x1F22E, 1, 0x53F3, 0x0], [0x1F22F, 1, 0x6307, 0x0],
    [0x1F230, 1, 0x8D70, 0x0], [0x1F231, 1, 0x6253, 0x0], [0x1F232, 1, 0x7981, 0x0],
    [0x1F233, 1, 0x7A7A, 0x0], [0x1F234, 1, 0x5408, 0x0], [0x1F235, 1, 0x6E80, 0x0],
    [0x1F236, 1, 0x6709, 0x0], [0x1F237, 1, 0x6708, 0x0], [0x1F238, 1, 0x7533, 0x0],
    [0x1F239, 1, 0x5272, 0x0], [0x1F23A, 1, 0x55B6, 0x0], [0x1F23B, 1, 0x914D, 0x0],
    [0x1F250, 1, 0x5F97, 0x0], [0x1F251, 1, 0x53EF, 0x0], [0x1FBF0, 1, 0x30, 0x0],
    [0x1FBF1, 1, 0x31, 0x0], [0x1FBF2, 1, 0x32, 0x0], [0x1FBF3, 1, 0x33, 0x0],
    [0x1FBF4, 1, 0x34, 0x0], [0x1FBF5, 1, 0x35, 0x0], [0x1FBF6, 1, 0x36, 0x0],
    [0x1FBF7, 1, 0x37, 0x0], [0x1FBF8, 1, 0x38, 0x0], [0x1FBF9, 1, 0x39, 0x0],
];

pub(crate) static COMPAT_LONG: &[[u32; 20]] = &[
    [0xBC, 3, 0x31, 0x2044, 0x34, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xBD, 3, 0x31, 0x2044, 0x32, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xBE, 3, 0x33, 0x2044, 0x34, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2026, 3, 0x2E, 0x2E, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2034, 3, 0x2032, 0x2032, 0x2032, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2037, 3, 0x2035, 0x2035, 0x2035, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2057, 4, 0x2032, 0x2032, 0x2032, 0x2032, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2100, 3, 0x61, 0x2F, 0x63, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2101, 3, 0x61, 0x2F, 0x73, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2105, 3, 0x63, 0x2F, 0x6F, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2106, 3, 0x63, 0x2F, 0x75, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2121, 3, 0x54, 0x45, 0x4C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x213B, 3, 0x46, 0x41, 0x58, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2150, 3, 0x31, 0x2044, 0x37, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2151, 3, 0x31, 0x2044, 0x39, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2152, 4, 0x31, 0x2044, 0x31, 0x30, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2153, 3, 0x31, 0x2044, 0x33, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2154, 3, 0x32, 0x2044, 0x33, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2155, 3, 0x31, 0x2044, 0x35, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2156, 3, 0x32, 0x2044, 0x35, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2157, 3, 0x33, 0x2044, 0x35, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2158, 3, 0x34, 0x2044, 0x35, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2159, 3, 0x31, 0x2044, 0x36, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x215A, 3, 0x35, 0x2044, 0x36, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x215B, 3, 0x31, 0x2044, 0x38, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x215C, 3, 0x33, 0x2044, 0x38, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x215D, 3, 0x35, 0x2044, 0x38, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x215E, 3, 0x37, 0x2044, 0x38, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2162, 3, 0x49, 0x49, 0x49, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2166, 3, 0x56, 0x49, 0x49, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2167, 4, 0x56, 0x49, 0x49, 0x49, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x216B, 3, 0x58, 0x49, 0x49, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2172, 3, 0x69, 0x69, 0x69, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2176, 3, 0x76, 0x69, 0x69, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2177, 4, 0x76, 0x69, 0x69, 0x69, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x217B, 3, 0x78, 0x69, 0x69, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2189, 3, 0x30, 0x2044, 0x33, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x222D, 3, 0x222B, 0x222B, 0x222B, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2230, 3, 0x222E, 0x222E, 0x222E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2474, 3, 0x28, 0x31, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2475, 3, 0x28, 0x32, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2476, 3, 0x28, 0x33, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2477, 3, 0x28, 0x34, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2478, 3, 0x28, 0x35, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2479, 3, 0x28, 0x36, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247A, 3, 0x28, 0x37, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247B, 3, 0x28, 0x38, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247C, 3, 0x28, 0x39, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247D, 4, 0x28, 0x31, 0x30, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247E, 4, 0x28, 0x31, 0x31, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x247F, 4, 0x28, 0x31, 0x32, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2480, 4, 0x28, 0x31, 0x33, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2481, 4, 0x28, 0x31, 0x34, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2482, 4, 0x28, 0x31, 0x35, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2483, 4, 0x28, 0x31, 0x36, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2484, 4, 0x28, 0x31, 0x37, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2485, 4, 0x28, 0x31, 0x38, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2486, 4, 0x28, 0x31, 0x39, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2487, 4, 0x28, 0x32, 0x30, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2491, 3, 0x31, 0x30, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2492, 3, 0x31, 0x31, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2493, 3, 0x31, 0x32, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2494, 3, 0x31, 0x33, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2495, 3, 0x31, 0x34, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2496, 3, 0x31, 0x35, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2497, 3, 0x31, 0x36, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2498, 3, 0x31, 0x37, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2499, 3, 0x31, 0x38, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249A, 3, 0x31, 0x39, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249B, 3, 0x32, 0x30, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249C, 3, 0x28, 0x61, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249D, 3, 0x28, 0x62, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249E, 3, 0x28, 0x63, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x249F, 3, 0x28, 0x64, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A0, 3, 0x28, 0x65, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A1, 3, 0x28, 0x66, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A2, 3, 0x28, 0x67, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A3, 3, 0x28, 0x68, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A4, 3, 0x28, 0x69, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A5, 3, 0x28, 0x6A, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A6, 3, 0x28, 0x6B, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A7, 3, 0x28, 0x6C, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A8, 3, 0x28, 0x6D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24A9, 3, 0x28, 0x6E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AA, 3, 0x28, 0x6F, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AB, 3, 0x28, 0x70, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AC, 3, 0x28, 0x71, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AD, 3, 0x28, 0x72, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AE, 3, 0x28, 0x73, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24AF, 3, 0x28, 0x74, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B0, 3, 0x28, 0x75, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B1, 3, 0x28, 0x76, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B2, 3, 0x28, 0x77, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B3, 3, 0x28, 0x78, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B4, 3, 0x28, 0x79, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x24B5, 3, 0x28, 0x7A, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2A0C, 4, 0x222B, 0x222B, 0x222B, 0x222B, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2A74, 3, 0x3A, 0x3A, 0x3D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x2A76, 3, 0x3D, 0x3D, 0x3D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3200, 3, 0x28, 0x1100, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3201, 3, 0x28, 0x1102, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3202, 3, 0x28, 0x1103, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3203, 3, 0x28, 0x1105, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3204, 3, 0x28, 0x1106, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3205, 3, 0x28, 0x1107, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3206, 3, 0x28, 0x1109, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3207, 3, 0x28, 0x110B, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3208, 3, 0x28, 0x110C, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3209, 3, 0x28, 0x110E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320A, 3, 0x28, 0x110F, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320B, 3, 0x28, 0x1110, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320C, 3, 0x28, 0x1111, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320D, 3, 0x28, 0x1112, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320E, 4, 0x28, 0x1100, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x320F, 4, 0x28, 0x1102, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3210, 4, 0x28, 0x1103, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3211, 4, 0x28, 0x1105, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3212, 4, 0x28, 0x1106, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3213, 4, 0x28, 0x1107, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3214, 4, 0x28, 0x1109, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3215, 4, 0x28, 0x110B, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3216, 4, 0x28, 0x110C, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3217, 4, 0x28, 0x110E, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3218, 4, 0x28, 0x110F, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3219, 4, 0x28, 0x1110, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x321A, 4, 0x28, 0x1111, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x321B, 4, 0x28, 0x1112, 0x1161, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x321C, 4, 0x28, 0x110C, 0x116E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x321D, 7, 0x28, 0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x321E, 6, 0x28, 0x110B, 0x1169, 0x1112, 0x116E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3220, 3, 0x28, 0x4E00, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3221, 3, 0x28, 0x4E8C, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3222, 3, 0x28, 0x4E09, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3223, 3, 0x28, 0x56DB, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3224, 3, 0x28, 0x4E94, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3225, 3, 0x28, 0x516D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3226, 3, 0x28, 0x4E03, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3227, 3, 0x28, 0x516B, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3228, 3, 0x28, 0x4E5D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3229, 3, 0x28, 0x5341, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322A, 3, 0x28, 0x6708, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322B, 3, 0x28, 0x706B, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322C, 3, 0x28, 0x6C34, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322D, 3, 0x28, 0x6728, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322E, 3, 0x28, 0x91D1, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x322F, 3, 0x28, 0x571F, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3230, 3, 0x28, 0x65E5, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3231, 3, 0x28, 0x682A, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3232, 3, 0x28, 0x6709, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3233, 3, 0x28, 0x793E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3234, 3, 0x28, 0x540D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3235, 3, 0x28, 0x7279, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3236, 3, 0x28, 0x8CA1, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3237, 3, 0x28, 0x795D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3238, 3, 0x28, 0x52B4, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3239, 3, 0x28, 0x4EE3, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323A, 3, 0x28, 0x547C, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323B, 3, 0x28, 0x5B66, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323C, 3, 0x28, 0x76E3, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323D, 3, 0x28, 0x4F01, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323E, 3, 0x28, 0x8CC7, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x323F, 3, 0x28, 0x5354, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3240, 3, 0x28, 0x796D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3241, 3, 0x28, 0x4F11, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3242, 3, 0x28, 0x81EA, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3243, 3, 0x28, 0x81F3, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3250, 3, 0x50, 0x54, 0x45, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x327C, 5, 0x110E, 0x1161, 0x11B7, 0x1100, 0x1169, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x327D, 4, 0x110C, 0x116E, 0x110B, 0x1174, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x32C9, 3, 0x31, 0x30, 0x6708, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x32CA, 3, 0x31, 0x31, 0x6708, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x32CB, 3, 0x31, 0x32, 0x6708, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x32CD, 3, 0x65, 0x72, 0x67, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x32CF, 3, 0x4C, 0x54, 0x44, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3300, 4, 0x30A2, 0x30D1, 0x30FC, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3301, 4, 0x30A2, 0x30EB, 0x30D5, 0x30A1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3302, 4, 0x30A2, 0x30F3, 0x30DA, 0x30A2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3303, 3, 0x30A2, 0x30FC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3304, 4, 0x30A4, 0x30CB, 0x30F3, 0x30B0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3305, 3, 0x30A4, 0x30F3, 0x30C1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3306, 3, 0x30A6, 0x30A9, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3307, 5, 0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3308, 4, 0x30A8, 0x30FC, 0x30AB, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3309, 3, 0x30AA, 0x30F3, 0x30B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330A, 3, 0x30AA, 0x30FC, 0x30E0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330B, 3, 0x30AB, 0x30A4, 0x30EA, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330C, 4, 0x30AB, 0x30E9, 0x30C3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330D, 4, 0x30AB, 0x30ED, 0x30EA, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330E, 3, 0x30AC, 0x30ED, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x330F, 3, 0x30AC, 0x30F3, 0x30DE, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3311, 3, 0x30AE, 0x30CB, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3312, 4, 0x30AD, 0x30E5, 0x30EA, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3313, 4, 0x30AE, 0x30EB, 0x30C0, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3315, 5, 0x30AD, 0x30ED, 0x30B0, 0x30E9, 0x30E0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3316, 6, 0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3317, 5, 0x30AD, 0x30ED, 0x30EF, 0x30C3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3318, 3, 0x30B0, 0x30E9, 0x30E0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3319, 5, 0x30B0, 0x30E9, 0x30E0, 0x30C8, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331A, 5, 0x30AF, 0x30EB, 0x30BC, 0x30A4, 0x30ED, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331B, 4, 0x30AF, 0x30ED, 0x30FC, 0x30CD, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331C, 3, 0x30B1, 0x30FC, 0x30B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331D, 3, 0x30B3, 0x30EB, 0x30CA, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331E, 3, 0x30B3, 0x30FC, 0x30DD, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x331F, 4, 0x30B5, 0x30A4, 0x30AF, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3320, 5, 0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3321, 4, 0x30B7, 0x30EA, 0x30F3, 0x30B0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3322, 3, 0x30BB, 0x30F3, 0x30C1, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3323, 3, 0x30BB, 0x30F3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3324, 3, 0x30C0, 0x30FC, 0x30B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3329, 3, 0x30CE, 0x30C3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332A, 3, 0x30CF, 0x30A4, 0x30C4, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332B, 5, 0x30D1, 0x30FC, 0x30BB, 0x30F3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332C, 3, 0x30D1, 0x30FC, 0x30C4, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332D, 4, 0x30D0, 0x30FC, 0x30EC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332E, 5, 0x30D4, 0x30A2, 0x30B9, 0x30C8, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x332F, 3, 0x30D4, 0x30AF, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3332, 5, 0x30D5, 0x30A1, 0x30E9, 0x30C3, 0x30C9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3333, 4, 0x30D5, 0x30A3, 0x30FC, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3334, 5, 0x30D6, 0x30C3, 0x30B7, 0x30A7, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3335, 3, 0x30D5, 0x30E9, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3336, 5, 0x30D8, 0x30AF, 0x30BF, 0x30FC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3338, 3, 0x30DA, 0x30CB, 0x30D2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3339, 3, 0x30D8, 0x30EB, 0x30C4, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x333A, 3, 0x30DA, 0x30F3, 0x30B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x333B, 3, 0x30DA, 0x30FC, 0x30B8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x333C, 3, 0x30D9, 0x30FC, 0x30BF, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x333D, 4, 0x30DD, 0x30A4, 0x30F3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x333E, 3, 0x30DC, 0x30EB, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3340, 3, 0x30DD, 0x30F3, 0x30C9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3341, 3, 0x30DB, 0x30FC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3342, 3, 0x30DB, 0x30FC, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3343, 4, 0x30DE, 0x30A4, 0x30AF, 0x30ED, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3344, 3, 0x30DE, 0x30A4, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3345, 3, 0x30DE, 0x30C3, 0x30CF, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3346, 3, 0x30DE, 0x30EB, 0x30AF, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3347, 5, 0x30DE, 0x30F3, 0x30B7, 0x30E7, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3348, 4, 0x30DF, 0x30AF, 0x30ED, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x334A, 5, 0x30DF, 0x30EA, 0x30D0, 0x30FC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x334C, 4, 0x30E1, 0x30AC, 0x30C8, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x334D, 4, 0x30E1, 0x30FC, 0x30C8, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x334E, 3, 0x30E4, 0x30FC, 0x30C9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x334F, 3, 0x30E4, 0x30FC, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3350, 3, 0x30E6, 0x30A2, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3351, 4, 0x30EA, 0x30C3, 0x30C8, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3353, 3, 0x30EB, 0x30D4, 0x30FC, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3354, 4, 0x30EB, 0x30FC, 0x30D6, 0x30EB, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3356, 5, 0x30EC, 0x30F3, 0x30C8, 0x30B2, 0x30F3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3357, 3, 0x30EF, 0x30C3, 0x30C8, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3362, 3, 0x31, 0x30, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3363, 3, 0x31, 0x31, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3364, 3, 0x31, 0x32, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3365, 3, 0x31, 0x33, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3366, 3, 0x31, 0x34, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3367, 3, 0x31, 0x35, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3368, 3, 0x31, 0x36, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3369, 3, 0x31, 0x37, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336A, 3, 0x31, 0x38, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336B, 3, 0x31, 0x39, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336C, 3, 0x32, 0x30, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336D, 3, 0x32, 0x31, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336E, 3, 0x32, 0x32, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x336F, 3, 0x32, 0x33, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3370, 3, 0x32, 0x34, 0x70B9, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3371, 3, 0x68, 0x50, 0x61, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3374, 3, 0x62, 0x61, 0x72, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3378, 3, 0x64, 0x6D, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3379, 3, 0x64, 0x6D, 0xB3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x337F, 4, 0x682A, 0x5F0F, 0x4F1A, 0x793E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3388, 3, 0x63, 0x61, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3389, 4, 0x6B, 0x63, 0x61, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3391, 3, 0x6B, 0x48, 0x7A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3392, 3, 0x4D, 0x48, 0x7A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3393, 3, 0x47, 0x48, 0x7A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x3394, 3, 0x54, 0x48, 0x7A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x339F, 3, 0x6D, 0x6D, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A0, 3, 0x63, 0x6D, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A2, 3, 0x6B, 0x6D, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A3, 3, 0x6D, 0x6D, 0xB3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A4, 3, 0x63, 0x6D, 0xB3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A6, 3, 0x6B, 0x6D, 0xB3, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A7, 3, 0x6D, 0x2215, 0x73, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33A8, 4, 0x6D, 0x2215, 0x73, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AA, 3, 0x6B, 0x50, 0x61, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AB, 3, 0x4D, 0x50, 0x61, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AC, 3, 0x47, 0x50, 0x61, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AD, 3, 0x72, 0x61, 0x64, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AE, 5, 0x72, 0x61, 0x64, 0x2215, 0x73, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33AF, 6, 0x72, 0x61, 0x64, 0x2215, 0x73, 0xB2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33C2, 4, 0x61, 0x2E, 0x6D, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33C6, 4, 0x43, 0x2215, 0x6B, 0x67, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33C7, 3, 0x43, 0x6F, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33D2, 3, 0x6C, 0x6F, 0x67, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33D5, 3, 0x6D, 0x69, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33D6, 3, 0x6D, 0x6F, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33D8, 4, 0x70, 0x2E, 0x6D, 0x2E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33D9, 3, 0x50, 0x50, 0x4D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33DE, 3, 0x56, 0x2215, 0x6D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33DF, 3, 0x41, 0x2215, 0x6D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33E9, 3, 0x31, 0x30, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33EA, 3, 0x31, 0x31, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33EB, 3, 0x31, 0x32, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33EC, 3, 0x31, 0x33, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33ED, 3, 0x31, 0x34, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33EE, 3, 0x31, 0x35, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33EF, 3, 0x31, 0x36, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F0, 3, 0x31, 0x37, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F1, 3, 0x31, 0x38, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F2, 3, 0x31, 0x39, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F3, 3, 0x32, 0x30, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F4, 3, 0x32, 0x31, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F5, 3, 0x32, 0x32, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F6, 3, 0x32, 0x33, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F7, 3, 0x32, 0x34, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F8, 3, 0x32, 0x35, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33F9, 3, 0x32, 0x36, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FA, 3, 0x32, 0x37, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FB, 3, 0x32, 0x38, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FC, 3, 0x32, 0x39, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FD, 3, 0x33, 0x30, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FE, 3, 0x33, 0x31, 0x65E5, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x33FF, 3, 0x67, 0x61, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFB03, 3, 0x66, 0x66, 0x69, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFB04, 3, 0x66, 0x66, 0x6C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC5E, 3, 0x20, 0x64C, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC5F, 3, 0x20, 0x64D, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC60, 3, 0x20, 0x64E, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC61, 3, 0x20, 0x64F, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC62, 3, 0x20, 0x650, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFC63, 3, 0x20, 0x651, 0x670, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFCF2, 3, 0x640, 0x64E, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFCF3, 3, 0x640, 0x64F, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFCF4, 3, 0x640, 0x650, 0x651, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD50, 3, 0x62A, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD51, 3, 0x62A, 0x62D, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD52, 3, 0x62A, 0x62D, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD53, 3, 0x62A, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD54, 3, 0x62A, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD55, 3, 0x62A, 0x645, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD56, 3, 0x62A, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD57, 3, 0x62A, 0x645, 0x62E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD58, 3, 0x62C, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD59, 3, 0x62C, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5A, 3, 0x62D, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5B, 3, 0x62D, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5C, 3, 0x633, 0x62D, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5D, 3, 0x633, 0x62C, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5E, 3, 0x633, 0x62C, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD5F, 3, 0x633, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD60, 3, 0x633, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD61, 3, 0x633, 0x645, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD62, 3, 0x633, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD63, 3, 0x633, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD64, 3, 0x635, 0x62D, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD65, 3, 0x635, 0x62D, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD66, 3, 0x635, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD67, 3, 0x634, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD68, 3, 0x634, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD69, 3, 0x634, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6A, 3, 0x634, 0x645, 0x62E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6B, 3, 0x634, 0x645, 0x62E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6C, 3, 0x634, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6D, 3, 0x634, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6E, 3, 0x636, 0x62D, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD6F, 3, 0x636, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD70, 3, 0x636, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD71, 3, 0x637, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD72, 3, 0x637, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD73, 3, 0x637, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD74, 3, 0x637, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD75, 3, 0x639, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD76, 3, 0x639, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD77, 3, 0x639, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD78, 3, 0x639, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD79, 3, 0x63A, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7A, 3, 0x63A, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7B, 3, 0x63A, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7C, 3, 0x641, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7D, 3, 0x641, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7E, 3, 0x642, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD7F, 3, 0x642, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD80, 3, 0x644, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD81, 3, 0x644, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD82, 3, 0x644, 0x62D, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD83, 3, 0x644, 0x62C, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD84, 3, 0x644, 0x62C, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD85, 3, 0x644, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD86, 3, 0x644, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD87, 3, 0x644, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD88, 3, 0x644, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD89, 3, 0x645, 0x62D, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8A, 3, 0x645, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8B, 3, 0x645, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8C, 3, 0x645, 0x62C, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8D, 3, 0x645, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8E, 3, 0x645, 0x62E, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD8F, 3, 0x645, 0x62E, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD92, 3, 0x645, 0x62C, 0x62E, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD93, 3, 0x647, 0x645, 0x62C, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD94, 3, 0x647, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD95, 3, 0x646, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD96, 3, 0x646, 0x62D, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD97, 3, 0x646, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD98, 3, 0x646, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD99, 3, 0x646, 0x62C, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9A, 3, 0x646, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9B, 3, 0x646, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9C, 3, 0x64A, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9D, 3, 0x64A, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9E, 3, 0x628, 0x62E, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFD9F, 3, 0x62A, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA0, 3, 0x62A, 0x62C, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA1, 3, 0x62A, 0x62E, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA2, 3, 0x62A, 0x62E, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA3, 3, 0x62A, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA4, 3, 0x62A, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA5, 3, 0x62C, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA6, 3, 0x62C, 0x62D, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA7, 3, 0x62C, 0x645, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA8, 3, 0x633, 0x62E, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDA9, 3, 0x635, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAA, 3, 0x634, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAB, 3, 0x636, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAC, 3, 0x644, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAD, 3, 0x644, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAE, 3, 0x64A, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDAF, 3, 0x64A, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB0, 3, 0x64A, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB1, 3, 0x645, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB2, 3, 0x642, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB3, 3, 0x646, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB4, 3, 0x642, 0x645, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB5, 3, 0x644, 0x62D, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB6, 3, 0x639, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB7, 3, 0x643, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB8, 3, 0x646, 0x62C, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDB9, 3, 0x645, 0x62E, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBA, 3, 0x644, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBB, 3, 0x643, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBC, 3, 0x644, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBD, 3, 0x646, 0x62C, 0x62D, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBE, 3, 0x62C, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDBF, 3, 0x62D, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC0, 3, 0x645, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC1, 3, 0x641, 0x645, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC2, 3, 0x628, 0x62D, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC3, 3, 0x643, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC4, 3, 0x639, 0x62C, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC5, 3, 0x635, 0x645, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC6, 3, 0x633, 0x62E, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDC7, 3, 0x646, 0x62C, 0x64A, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF0, 3, 0x635, 0x644, 0x6D2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF1, 3, 0x642, 0x644, 0x6D2, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF2, 4, 0x627, 0x644, 0x644, 0x647, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF3, 4, 0x627, 0x643, 0x628, 0x631, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF4, 4, 0x645, 0x62D, 0x645, 0x62F, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF5, 4, 0x635, 0x644, 0x639, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF6, 4, 0x631, 0x633, 0x648, 0x644, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF7, 4, 0x639, 0x644, 0x64A, 0x647, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF8, 4, 0x648, 0x633, 0x644, 0x645, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDF9, 3, 0x635, 0x644, 0x649, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDFA, 18, 0x635, 0x644, 0x649, 0x20, 0x627, 0x644, 0x644, 0x647, 0x20, 0x639, 0x644, 0x64A, 0x647, 0x20, 0x648, 0x633, 0x644, 0x645],
    [0xFDFB, 8, 0x62C, 0x644, 0x20, 0x62C, 0x644, 0x627, 0x644, 0x647, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0xFDFC, 4, 0x631, 0x6CC, 0x627, 0x644, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F110, 3, 0x28, 0x41, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F111, 3, 0x28, 0x42, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F112, 3, 0x28, 0x43, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F113, 3, 0x28, 0x44, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F114, 3, 0x28, 0x45, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F115, 3, 0x28, 0x46, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F116, 3, 0x28, 0x47, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F117, 3, 0x28, 0x48, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F118, 3, 0x28, 0x49, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F119, 3, 0x28, 0x4A, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11A, 3, 0x28, 0x4B, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11B, 3, 0x28, 0x4C, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11C, 3, 0x28, 0x4D, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11D, 3, 0x28, 0x4E, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11E, 3, 0x28, 0x4F, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F11F, 3, 0x28, 0x50, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F120, 3, 0x28, 0x51, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F121, 3, 0x28, 0x52, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F122, 3, 0x28, 0x53, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F123, 3, 0x28, 0x54, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F124, 3, 0x28, 0x55, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F125, 3, 0x28, 0x56, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F126, 3, 0x28, 0x57, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F127, 3, 0x28, 0x58, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F128, 3, 0x28, 0x59, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F129, 3, 0x28, 0x5A, 0x29, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F12A, 3, 0x3014, 0x53, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F14E, 3, 0x50, 0x50, 0x56, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F240, 3, 0x3014, 0x672C, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F241, 3, 0x3014, 0x4E09, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F242, 3, 0x3014, 0x4E8C, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F243, 3, 0x3014, 0x5B89, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F244, 3, 0x3014, 0x70B9, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F245, 3, 0x3014, 0x6253, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F246, 3, 0x3014, 0x76D7, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F247, 3, 0x3014, 0x52DD, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
    [0x1F248, 3, 0x3014, 0x6557, 0x3015, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0, 0x0],
];

pub(crate) static COMPOSITION: &[(u32, u32, u32)] = &[
    (0x3C, 0x338, 0x226E), (0x3D, 0x338, 0x2260), (0x3E, 0x338, 0x226F), (0x41, 0x300, 0xC0),
    (0x41, 0x301, 0xC1), (0x41, 0x302, 0xC2), (0x41, 0x303, 0xC3), (0x41, 0x304, 0x100),
    (0x41, 0x306, 0x102), (0x41, 0x307, 0x226), (0x41, 0x308, 0xC4), (0x41, 0x309, 0x1EA2),
    (0x41, 0x30A, 0xC5), (0x41, 0x30C, 0x1CD), (0x41, 0x30F, 0x200), (0x41, 0x311, 0x202),
    (0x41, 0x323, 0x1EA0), (0x41, 0x325, 0x1E00), (0x41, 0x328, 0x104), (0x42, 0x307, 0x1E02),
    (0x42, 0x323, 0x1E04), (0x42, 0x331, 0x1E06), (0x43, 0x301, 0x106), (0x43, 0x302, 0x108),
    (0x43, 0x307, 0x10A), (0x43, 0x30C, 0x10C), (0x43, 0x327, 0xC7), (0x44, 0x307, 0x1E0A),
    (0x44, 0x30C, 0x10E), (0x44, 0x323, 0x1E0C), (0x44, 0x327, 0x1E10), (0x44, 0x32D, 0x1E12),
    (0x44, 0x331, 0x1E0E), (0x45, 0x300, 0xC8), (0x45, 0x301, 0xC9), (0x45, 0x302, 0xCA),
    (0x45, 0x303, 0x1EBC), (0x45, 0x304, 0x112), (0x45, 0x306, 0x114), (0x45, 0x307, 0x116),
    (0x45, 0x308, 0xCB), (0x45, 0x309, 0x1EBA), (0x45, 0x30C, 0x11A), (0x45, 0x30F, 0x204),
    (0x45, 0x311, 0x206), (0x45, 0x323, 0x1EB8), (0x45, 0x327, 0x228), (0x45, 0x328, 0x118),
    (0x45, 0x32D, 0x1E18), (0x45, 0x330, 0x1E1A), (0x46, 0x307, 0x1E1E), (0x47, 0x301, 0x1F4),
    (0x47, 0x302, 0x11C), (0x47, 0x304, 0x1E20), (0x47, 0x306, 0x11E), (0x47, 0x307, 0x120),
    (0x47, 0x30C, 0x1E6), (0x47, 0x327, 0x122), (0x48, 0x302, 0x124), (0x48, 0x307, 0x1E22),
    (0x48, 0x308, 0x1E26), (0x48, 0x30C, 0x21E), (0x48, 0x323, 0x1E24), (0x48, 0x327, 0x1E28),
    (0x48, 0x32E, 0x1E2A), (0x49, 0x300, 0xCC), (0x49, 0x301, 0xCD), (0x49, 0x302, 0xCE),
    (0x49, 0x303, 0x128), (0x49, 0x304, 0x12A), (0x49, 0x306, 0x12C), (0x49, 0x307, 0x130),
    (0x49, 0x308, 0xCF), (0x49, 0x309, 0x1EC8), (0x49, 0x30C, 0x1CF), (0x49, 0x30F, 0x208),
    (0x49, 0x311, 0x20A), (0x49, 0x323, 0x1ECA), (0x49, 0x328, 0x12E), (0x49, 0x330, 0x1E2C),
    (0x4A, 0x302, 0x134), (0x4B, 0x301, 0x1E30), (0x4B, 0x30C, 0x1E8), (0x4B, 0x323, 0x1E32),
    (0x4B, 0x327, 0x136), (0x4B, 0x331, 0x1E34), (0x4C, 0x301, 0x139), (0x4C, 0x30C, 0x13D),
    (0x4C, 0x323, 0x1E36), (0x4C, 0x327, 0x13B), (0x4C, 0x32D, 0x1E3C), (0x4C, 0x331, 0x1E3A),
    (0x4D, 0x301, 0x1E3E), (0x4D, 0x307, 0x1E40), (0x4D, 0x323, 0x1E42), (0x4E, 0x300, 0x1F8),
    (0x4E, 0x301, 0x143), (0x4E, 0x303, 0xD1), (0x4E, 0x307, 0x1E44), (0x4E, 0x30C, 0x147),
    (0x4E, 0x323, 0x1E46), (0x4E, 0x327, 0x145), (0x4E, 0x32D, 0x1E4A), (0x4E, 0x331, 0x1E48),
    (0x4F, 0x300, 0xD2), (0x4F, 0x301, 0xD3), (0x4F, 0x302, 0xD4), (0x4F, 0x303, 0xD5),
    (0x4F, 0x304, 0x14C), (0x4F, 0x306, 0x14E), (0x4F, 0x307, 0x22E), (0x4F, 0x308, 0xD6),
    (0x4F, 0x309, 0x1ECE), (0x4F, 0x30B, 0x150), (0x4F, 0x30C, 0x1D1), (0x4F, 0x30F, 0x20C),
    (0x4F, 0x311, 0x20E), (0x4F, 0x31B, 0x1A0), (0x4F, 0x323, 0x1ECC), (0x4F, 0x328, 0x1EA),
    (0x50, 0x301, 0x1E54), (0x50, 0x307, 0x1E56), (0x52, 0x301, 0x154), (0x52, 0x307, 0x1E58),
    (0x52, 0x30C, 0x158), (0x52, 0x30F, 0x210), (0x52, 0x311, 0x212), (0x52, 0x323, 0x1E5A),
    (0x52, 0x327, 0x156), (0x52, 0x331, 0x1E5E), (0x53, 0x301, 0x15A), (0x53, 0x302, 0x15C),
    (0x53, 0x307, 0x1E60), (0x53, 0x30C, 0x160), (0x53, 0x323, 0x1E62), (0x53, 0x326, 0x218),
    (0x53, 0x327, 0x15E), (0x54, 0x307, 0x1E6A), (0x54, 0x30C, 0x164), (0x54, 0x323, 0x1E6C),
    (0x54, 0x326, 0x21A), (0x54, 0x327, 0x162), (0x54, 0x32D, 0x1E70), (0x54, 0x331, 0x1E6E),
    (0x55, 0x300, 0xD9), (0x55, 0x301, 0xDA), (0x55, 0x302, 0xDB), (0x55, 0x303, 0x168),
    (0x55, 0x304, 0x16A), (0x55, 0x306, 0x16C), (0x55, 0x308, 0xDC), (0x55, 0x309, 0x1EE6),
    (0x55, 0x30A, 0x16E), (0x55, 0x30B, 0x170), (0x55, 0x30C, 0x1D3), (0x55, 0x30F, 0x214),
    (0x55, 0x311, 0x216), (0x55, 0x31B, 0x1AF), (0x55, 0x323, 0x1EE4), (0x55, 0x324, 0x1E72),
    (0x55, 0x328, 0x172), (0x55, 0x32D, 0x1E76), (0x55, 0x330, 0x1E74), (0x56, 0x303, 0x1E7C),
    (0x56, 0x323, 0x1E7E), (0x57, 0x300, 0x1E80), (0x57, 0x301, 0x1E82), (0x57, 0x302, 0x174),
    (0x57, 0x307, 0x1E86), (0x57, 0x308, 0x1E84), (0x57, 0x323, 0x1E88), (0x58, 0x307, 0x1E8A),
    (0x58, 0x308, 0x1E8C), (0x59, 0x300, 0x1EF2), (0x59, 0x301, 0xDD), (0x59, 0x302, 0x176),
    (0x59, 0x303, 0x1EF8), (0x59, 0x304, 0x232), (0x59, 0x307, 0x1E8E), (0x59, 0x308, 0x178),
    (0x59, 0x309, 0x1EF6), (0x59, 0x323, 0x1EF4), (0x5A, 0x301, 0x179), (0x5A, 0x302, 0x1E90),
    (0x5A, 0x307, 0x17B), (0x5A, 0x30C, 0x17D), (0x5A, 0x323, 0x1E92), (0x5A, 0x331, 0x1E94),
    (0x61, 0x300, 0xE0), (0x61, 0x301, 0xE1), (0x61, 0x302, 0xE2), (0x61, 0x303, 0xE3),
    (0x61, 0x304, 0x101), (0x61, 0x306, 0x103), (0x61, 0x307, 0x227), (0x61, 0x308, 0xE4),
    (0x61, 0x309, 0x1EA3), (0x61, 0x30A, 0xE5), (0x61, 0x30C, 0x1CE), (0x61, 0x30F, 0x201),
    (0x61, 0x311, 0x203), (0x61, 0x323, 0x1EA1), (0x61, 0x325, 0x1E01), (0x61, 0x328, 0x105),
    (0x62, 0x307, 0x1E03), (0x62, 0x323, 0x1E05), (0x62, 0x331, 0x1E07), (0x63, 0x301, 0x107),
    (0x63, 0x302, 0x109), (0x63, 0x307, 0x10B), (0x63, 0x30C, 0x10D), (0x63, 0x327, 0xE7),
    (0x64, 0x307, 0x1E0B), (0x64, 0x30C, 0x10F), (0x64, 0x323, 0x1E0D), (0x64, 0x327, 0x1E11),
    (0x64, 0x32D, 0x1E13), (0x64, 0x331, 0x1E0F), (0x65, 0x300, 0xE8), (0x65, 0x301, 0xE9),
    (0x65, 0x302, 0xEA), (0x65, 0x303, 0x1EBD), (0x65, 0x304, 0x113), (0x65, 0x306, 0x115),
    (0x65, 0x307, 0x117), (0x65, 0x308, 0xEB), (0x65, 0x309, 0x1EBB), (0x65, 0x30C, 0x11B),
    (0x65, 0x30F, 0x205), (0x65, 0x311, 0x207), (0x65, 0x323, 0x1EB9), (0x65, 0x327, 0x229),
    (0x65, 0x328, 0x119), (0x65, 0x32D, 0x1E19), (0x65, 0x330, 0x1E1B), (0x66, 0x307, 0x1E1F),
    (0x67, 0x301, 0x1F5), (0x67, 0x302, 0x11D), (0x67, 0x304, 0x1E21), (0x67, 0x306, 0x11F),
    (0x67, 0x307, 0x121), (0x67, 0x30C, 0x1E7), (0x67, 0x327, 0x123), (0x68, 0x302, 0x125),
    (0x68, 0x307, 0x1E23), (0x68, 0x308, 0x1E27), (0x68, 0x30C, 0x21F), (0x68, 0x323, 0x1E25),
    (0x68, 0x327, 0x1E29), (0x68, 0x32E, 0x1E2B), (0x68, 0x331, 0x1E96), (0x69, 0x300, 0xEC),
    (0x69, 0x301, 0xED), (0x69, 0x302, 0xEE), (0x69, 0x303, 0x129), (0x69, 0x304, 0x12B),
    (0x69, 0x306, 0x12D), (0x69, 0x308, 0xEF), (0x69, 0x309, 0x1EC9), (0x69, 0x30C, 0x1D0),
    (0x69, 0x30F, 0x209), (0x69, 0x311, 0x20B), (0x69, 0x323, 0x1ECB), (0x69, 0x328, 0x12F),
    (0x69, 0x330, 0x1E2D), (0x6A, 0x302, 0x135), (0x6A, 0x30C, 0x1F0), (0x6B, 0x301, 0x1E31),
    (0x6B, 0x30C, 0x1E9), (0x6B, 0x323, 0x1E33), (0x6B, 0x327, 0x137), (0x6B, 0x331, 0x1E35),
    (0x6C, 0x301, 0x13A), (0x6C, 0x30C, 0x13E), (0x6C, 0x323, 0x1E37), (0x6C, 0x327, 0x13C),
    (0x6C, 0x32D, 0x1E3D), (0x6C, 0x331, 0x1E3B), (0x6D, 0x301, 0x1E3F), (0x6D, 0x307, 0x1E41),
    (0x6D, 0x323, 0x1E43), (0x6E, 0x300, 0x1F9), (0x6E, 0x301, 0x144), (0x6E, 0x303, 0xF1),
    (0x6E, 0x307, 0x1E45), (0x6E, 0x30C, 0x148), (0x6E, 0x323, 0x1E47), (0x6E, 0x327, 0x146),
    (0x6E, 0x32D, 0x1E4B), (0x6E, 0x331, 0x1E49), (0x6F, 0x300, 0xF2), (0x6F, 0x301, 0xF3),
    (0x6F, 0x302, 0xF4), (0x6F, 0x303, 0xF5), (0x6F, 0x304, 0x14D), (0x6F, 0x306, 0x14F),
    (0x6F, 0x307, 0x22F), (0x6F, 0x308, 0xF6), (0x6F, 0x309, 0x1ECF), (0x6F, 0x30B, 0x151),
    (0x6F, 0x30C, 0x1D2), (0x6F, 0x30F, 0x20D), (0x6F, 0x311, 0x20F), (0x6F, 0x31B, 0x1A1),
    (0x6F, 0x323, 0x1ECD), (0x6F, 0x328, 0x1EB), (0x70, 0x301, 0x1E55), (0x70, 0x307, 0x1E57),
    (0x72, 0x301, 0x155), (0x72, 0x307, 0x1E59), (0x72, 0x30C, 0x159), (0x72, 0x30F, 0x211),
    (0x72, 0x311, 0x213), (0x72, 0x323, 0x1E5B), (0x72, 0x327, 0x157), (0x72, 0x331, 0x1E5F),
    (0x73, 0x301, 0x15B), (0x73, 0x302, 0x15D), (0x73, 0x307, 0x1E61), (0x73, 0x30C, 0x161),
    (0x73, 0x323, 0x1E63), (0x73, 0x326, 0x219), (0x73, 0x327, 0x15F), (0x74, 0x307, 0x1E6B),
    (0x74, 0x308, 0x1E97), (0x74, 0x30C, 0x165), (0x74, 0x323, 0x1E6D), (0x74, 0x326, 0x21B),
    (0x74, 0x327, 0x163), (0x74, 0x32D, 0x1E71), (0x74, 0x331, 0x1E6F), (0x75, 0x300, 0xF9),
    (0x75, 0x301, 0xFA), (0x75, 0x302, 0xFB), (0x75, 0x303, 0x169), (0x75, 0x304, 0x16B),
    (0x75, 0x306, 0x16D), (0x75, 0x308, 0xFC), (0x75, 0x309, 0x1EE7), (0x75, 0x30A, 0x16F),
    (0x75, 0x30B, 0x171), (0x75, 0x30C, 0x1D4), (0x75, 0x30F, 0x215), (0x75, 0x311, 0x217),
    (0x75, 0x31B, 0x1B0), (0x75, 0x323, 0x1EE5), (0x75, 0x324, 0x1E73), (0x75, 0x328, 0x173),
    (0x75, 0x32D, 0x1E77), (0x75, 0x330, 0x1E75), (0x76, 0x303, 0x1E7D), (0x76, 0x323, 0x1E7F),
    (0x77, 0x300, 0x1E81), (0x77, 0x301, 0x1E83), (0x77, 0x302, 0x175), (0x77, 0x307, 0x1E87),
    (0x77, 0x308, 0x1E85), (0x77, 0x30A, 0x1E98), (0x77, 0x323, 0x1E89), (0x78, 0x307, 0x1E8B),
    (0x78, 0x308, 0x1E8D), (0x79, 0x300, 0x1EF3), (0x79, 0x301, 0xFD), (0x79, 0x302, 0x177),
    (0x79, 0x303, 0x1EF9), (0x79, 0x304, 0x233), (0x79, 0x307, 0x1E8F), (0x79, 0x308, 0xFF),
    (0x79, 0x309, 0x1EF7), (0x79, 0x30A, 0x1E99), (0x79, 0x323, 0x1EF5), (0x7A, 0x301, 0x17A),
    (0x7A, 0x302, 0x1E91), (0x7A, 0x307, 0x17C), (0x7A, 0x30C, 0x17E), (0x7A, 0x323, 0x1E93),
    (0x7A, 0x331, 0x1E95), (0xA8, 0x300, 0x1FED), (0xA8, 0x301, 0x385), (0xA8, 0x342, 0x1FC1),
    (0xC2, 0x300, 0x1EA6), (0xC2, 0x301, 0x1EA4), (0xC2, 0x303, 0x1EAA), (0xC2, 0x309, 0x1EA8),
    (0xC4, 0x304, 0x1DE), (0xC5, 0x301, 0x1FA), (0xC6, 0x301, 0x1FC), (0xC6, 0x304, 0x1E2),
    (0xC7, 0x301, 0x1E08), (0xCA, 0x300, 0x1EC0), (0xCA, 0x301, 0x1EBE), (0xCA, 0x303, 0x1EC4),
    (0xCA, 0x309, 0x1EC2), (0xCF, 0x301, 0x1E2E), (0xD4, 0x300, 0x1ED2), (0xD4, 0x301, 0x1ED0),
    (0xD4, 0x303, 0x1ED6), (0xD4, 0x309, 0x1ED4), (0xD5, 0x301, 0x1E4C), (0xD5, 0x304, 0x22C),
    (0xD5, 0x308, 0x1E4E), (0xD6, 0x304, 0x22A), (0xD8, 0x301, 0x1FE), (0xDC, 0x300, 0x1DB),
    (0xDC, 0x301, 0x1D7), (0xDC, 0x304, 0x1D5), (0xDC, 0x30C, 0x1D9), (0xE2, 0x300, 0x1EA7),
    (0xE2, 0x301, 0x1EA5), (0xE2, 0x303, 0x1EAB), (0xE2, 0x309, 0x1EA9), (0xE4, 0x304, 0x1DF),
    (0xE5, 0x301, 0x1FB), (0xE6, 0x301, 0x1FD), (0xE6, 0x304, 0x1E3), (0xE7, 0x301, 0x1E09),
    (0xEA, 0x300, 0x1EC1), (0xEA, 0x301, 0x1EBF), (0xEA, 0x303, 0x1EC5), (0xEA, 0x309, 0x1EC3),
    (0xEF, 0x301, 0x1E2F), (0xF4, 0x300, 0x1ED3), (0xF4, 0x301, 0x1ED1), (0xF4, 0x303, 0x1ED7),
    (0xF4, 0x309, 0x1ED5), (0xF5, 0x301, 0x1E4D), (0xF5, 0x304, 0x22D), (0xF5, 0x308, 0x1E4F),
    (0xF6, 0x304, 0x22B), (0xF8, 0x301, 0x1FF), (0xFC, 0x300, 0x1DC), (0xFC, 0x301, 0x1D8),
    (0xFC, 0x304, 0x1D6), (0xFC, 0x30C, 0x1DA), (0x102, 0x300, 0x1EB0), (0x102, 0x301, 0x1EAE),
    (0x102, 0x303, 0x1EB4), (0x102, 0x309, 0x1EB2), (0x103, 0x300, 0x1EB1), (0x103, 0x301, 0x1EAF),
    (0x103, 0x303, 0x1EB5), (0x103, 0x309, 0x1EB3), (0x112, 0x300, 0x1E14), (0x112, 0x301, 0x1E16),
    (0x113, 0x300, 0x1E15), (0x113, 0x301, 0x1E17), (0x14C, 0x300, 0x1E50), (0x14C, 0x301, 0x1E52),
    (0x14D, 0x300, 0x1E51), (0x14D, 0x301, 0x1E53), (0x15A, 0x307, 0x1E64), (0x15B, 0x307, 0x1E65),
    (0x160, 0x307, 0x1E66), (0x161, 0x307, 0x1E67), (0x168, 0x301, 0x1E78), (0x169, 0x301, 0x1E79),
    (0x16A, 0x308, 0x1E7A), (0x16B, 0x308, 0x1E7B), (0x17F, 0x307, 0x1E9B), (0x1A0, 0x300, 0x1EDC),
    (0x1A0, 0x301, 0x1EDA), (0x1A0, 0x303, 0x1EE0), (0x1A0, 0x309, 0x1EDE), (0x1A0, 0x323, 0x1EE2),
    (0x1A1, 0x300, 0x1EDD), (0x1A1, 0x301, 0x1EDB), (0x1A1, 0x303, 0x1EE1), (0x1A1, 0x309, 0x1EDF),
    (0x1A1, 0x323, 0x1EE3), (0x1AF, 0x300, 0x1EEA), (0x1AF, 0x301, 0x1EE8), (0x1AF, 0x303, 0x1EEE),
    (0x1AF, 0x309, 0x1EEC), (0x1AF, 0x323, 0x1EF0), (0x1B0, 0x300, 0x1EEB), (0x1B0, 0x301, 0x1EE9),
    (0x1B0, 0x303, 0x1EEF), (0x1B0, 0x309, 0x1EED), (0x1B0, 0x323, 0x1EF1), (0x1B7, 0x30C, 0x1EE),
    (0x1EA, 0x304, 0x1EC), (0x1EB, 0x304, 0x1ED), (0x226, 0x304, 0x1E0), (0x227, 0x304, 0x1E1),
    (0x228, 0x306, 0x1E1C), (0x229, 0x306, 0x1E1D), (0x22E, 0x304, 0x230), (0x22F, 0x304, 0x231),
    (0x292, 0x30C, 0x1EF), (0x391, 0x300, 0x1FBA), (0x391, 0x301, 0x386), (0x391, 0x304, 0x1FB9),
    (0x391, 0x306, 0x1FB8), (0x391, 0x313, 0x1F08), (0x391, 0x314, 0x1F09), (0x391, 0x345, 0x1FBC),
    (0x395, 0x300, 0x1FC8), (0x395, 0x301, 0x388), (0x395, 0x313, 0x1F18), (0x395, 0x314, 0x1F19),
    (0x397, 0x300, 0x1FCA), (0x397, 0x301, 0x389), (0x397, 0x313, 0x1F28), (0x397, 0x314, 0x1F29),
    (0x397, 0x345, 0x1FCC), (0x399, 0x300, 0x1FDA), (0x399, 0x301, 0x38A), (0x399, 0x304, 0x1FD9),
    (0x399, 0x306, 0x1FD8), (0x399, 0x308, 0x3AA), (0x399, 0x313, 0x1F38), (0x399, 0x314, 0x1F39),
    (0x39F, 0x300, 0x1FF8), (0x39F, 0x301, 0x38C), (0x39F, 0x313, 0x1F48), (0x39F, 0x314, 0x1F49),
    (0x3A1, 0x314, 0x1FEC), (0x3A5, 0x300, 0x1FEA), (0x3A5, 0x301, 0x38E), (0x3A5, 0x304, 0x1FE9),
    (0x3A5, 0x306, 0x1FE8), (0x3A5, 0x308, 0x3AB), (0x3A5, 0x314, 0x1F59), (0x3A9, 0x300, 0x1FFA),
    (0x3A9, 0x301, 0x38F), (0x3A9, 0x313, 0x1F68), (0x3A9, 0x314, 0x1F69), (0x3A9, 0x345, 0x1FFC),
    (0x3AC, 0x345, 0x1FB4), (0x3AE, 0x345, 0x1FC4), (0x3B1, 0x300, 0x1F70), (0x3B1, 0x301, 0x3AC),
    (0x3B1, 0x304, 0x1FB1), (0x3B1, 0x306, 0x1FB0), (0x3B1, 0x313, 0x1F00), (0x3B1, 0x314, 0x1F01),
    (0x3B1, 0x342, 0x1FB6), (0x3B1, 0x345, 0x1FB3), (0x3B5, 0x300, 0x1F72), (0x3B5, 0x301, 0x3AD),
    (0x3B5, 0x313, 0x1F10), (0x3B5, 0x314, 0x1F11), (0x3B7, 0x300, 0x1F74), (0x3B7, 0x301, 0x3AE),
    (0x3B7, 0x313, 0x1F20), (0x3B7, 0x314, 0x1F21), (0x3B7, 0x342, 0x1FC6), (0x3B7, 0x345, 0x1FC3),
    (0x3B9, 0x300, 0x1F76), (0x3B9, 0x301, 0x3AF), (0x3B9, 0x304, 0x1FD1), (0x3B9, 0x306, 0x1FD0),
    (0x3B9, 0x308, 0x3CA), (0x3B9, 0x313, 0x1F30), (0x3B9, 0x314, 0x1F31), (0x3B9, 0x342, 0x1FD6),
    (0x3BF, 0x300, 0x1F78), (0x3BF, 0x301, 0x3CC), (0x3BF, 0x313, 0x1F40), (0x3BF, 0x314, 0x1F41),
    (0x3C1, 0x313, 0x1FE4), (0x3C1, 0x314, 0x1FE5), (0x3C5, 0x300, 0x1F7A), (0x3C5, 0x301, 0x3CD),
    (0x3C5, 0x304, 0x1FE1), (0x3C5, 0x306, 0x1FE0), (0x3C5, 0x308, 0x3CB), (0x3C5, 0x313, 0x1F50),
    (0x3C5, 0x314, 0x1F51), (0x3C5, 0x342, 0x1FE6), (0x3C9, 0x300, 0x1F7C), (0x3C9, 0x301, 0x3CE),
    (0x3C9, 0x313, 0x1F60), (0x3C9, 0x314, 0x1F61), (0x3C9, 0x342, 0x1FF6), (0x3C9, 0x345, 0x1FF3),
    (0x3CA, 0x300, 0x1FD2), (0x3CA, 0x301, 0x390), (0x3CA, 0x342, 0x1FD7), (0x3CB, 0x300, 0x1FE2),
    (0x3CB, 0x301, 0x3B0), (0x3CB, 0x342, 0x1FE7), (0x3CE, 0x345, 0x1FF4), (0x3D2, 0x301, 0x3D3),
    (0x3D2, 0x308, 0x3D4), (0x406, 0x308, 0x407), (0x410, 0x306, 0x4D0), (0x410, 0x308, 0x4D2),
    (0x413, 0x301, 0x403), (0x415, 0x300, 0x400), (0x415, 0x306, 0x4D6), (0x415, 0x308, 0x401),
    (0x416, 0x306, 0x4C1), (0x416, 0x308, 0x4DC), (0x417, 0x308, 0x4DE), (0x418, 0x300, 0x40D),
    (0x418, 0x304, 0x4E2), (0x418, 0x306, 0x419), (0x418, 0x308, 0x4E4), (0x41A, 0x301, 0x40C),
    (0x41E, 0x308, 0x4E6), (0x423, 0x304, 0x4EE), (0x423, 0x306, 0x40E), (0x423, 0x308, 0x4F0),
    (0x423, 0x30B, 0x4F2), (0x427, 0x308, 0x4F4), (0x42B, 0x308, 0x4F8), (0x42D, 0x308, 0x4EC),
    (0x430, 0x306, 0x4D1), (0x430, 0x308, 0x4D3), (0x433, 0x301, 0x453), (0x435, 0x300, 0x450),
    (0x435, 0x306, 0x4D7), (0x435, 0x308, 0x451), (0x436, 0x306, 0x4C2), (0x436, 0x308, 0x4DD),
    (0x437, 0x308, 0x4DF), (0x438, 0x300, 0x45D), (0x438, 0x304, 0x4E3), (0x438, 0x306, 0x439),
    (0x438, 0x308, 0x4E5), (0x43A, 0x301, 0x45C), (0x43E, 0x308, 0x4E7), (0x443, 0x304, 0x4EF),
    (0x443, 0x306, 0x45E), (0x443, 0x308, 0x4F1), (0x443, 0x30B, 0x4F3), (0x447, 0x308, 0x4F5),
    (0x44B, 0x308, 0x4F9), (0x44D, 0x308, 0x4ED), (0x456, 0x308, 0x457), (0x474, 0x30F, 0x476),
    (0x475, 0x30F, 0x477), (0x4D8, 0x308, 0x4DA), (0x4D9, 0x308, 0x4DB), (0x4E8, 0x308, 0x4EA),
    (0x4E9, 0x308, 0x4EB), (0x627, 0x653, 0x622), (0x627, 0x654, 0x623), (0x627, 0x655, 0x625),
    (0x648, 0x654, 0x624), (0x64A, 0x654, 0x626), (0x6C1, 0x654, 0x6C2), (0x6D2, 0x654, 0x6D3),
    (0x6D5, 0x654, 0x6C0), (0x928, 0x93C, 0x929), (0x930, 0x93C, 0x931), (0x933, 0x93C, 0x934),
    (0x9C7, 0x9BE, 0x9CB), (0x9C7, 0x9D7, 0x9CC), (0xB47, 0xB3E, 0xB4B), (0xB47, 0xB56, 0xB48),
    (0xB47, 0xB57, 0xB4C), (0xB92, 0xBD7, 0xB94), (0xBC6, 0xBBE, 0xBCA), (0xBC6, 0xBD7, 0xBCC),
    (0xBC7, 0xBBE, 0xBCB), (0xC46, 0xC56, 0xC48), (0xCBF, 0xCD5, 0xCC0), (0xCC6, 0xCC2, 0xCCA),
    (0xCC6, 0xCD5, 0xCC7), (0xCC6, 0xCD6, 0xCC8), (0xCCA, 0xCD5, 0xCCB), (0xD46, 0xD3E, 0xD4A),
    (0xD46, 0xD57, 0xD4C), (0xD47, 0xD3E, 0xD4B), (0xDD9, 0xDCA, 0xDDA), (0xDD9, 0xDCF, 0xDDC),
    (0xDD9, 0xDDF, 0xDDE), (0xDDC, 0xDCA, 0xDDD), (0x1025, 0x102E, 0x1026), (0x1B05, 0x1B35, 0x1B06),
    (0x1B07, 0x1B35, 0x1B08), (0x1B09, 0x1B35, 0x1B0A), (0x1B0B, 0x1B35, 0x1B0C), (0x1B0D, 0x1B35, 0x1B0E),
    (0x1B11, 0x1B35, 0x1B12), (0x1B3A, 0x1B35, 0x1B3B), (0x1B3C, 0x1B35, 0x1B3D), (0x1B3E, 0x1B35, 0x1B40),
    (0x1B3F, 0x1B35, 0x1B41), (0x1B42, 0x1B35, 0x1B43), (0x1E36, 0x304, 0x1E38), (0x1E37, 0x304, 0x1E39),
    (0x1E5A, 0x304, 0x1E5C), (0x1E5B, 0x304, 0x1E5D), (0x1E62, 0x307, 0x1E68), (0x1E63, 0x307, 0x1E69),
    (0x1EA0, 0x302, 0x1EAC), (0x1EA0, 0x306, 0x1EB6), (0x1EA1, 0x302, 0x1EAD), (0x1EA1, 0x306, 0x1EB7),
    (0x1EB8, 0x302, 0x1EC6), (0x1EB9, 0x302, 0x1EC7), (0x1ECC, 0x302, 0x1ED8), (0x1ECD, 0x302, 0x1ED9),
    (0x1F00, 0x300, 0x1F02), (0x1F00, 0x301, 0x1F04), (0x1F00, 0x342, 0x1F06), (0x1F00, 0x345, 0x1F80),
    (0x1F01, 0x300, 0x1F03), (0x1F01, 0x301, 0x1F05), (0x1F01, 0x342, 0x1F07), (0x1F01, 0x345, 0x1F81),
    (0x1F02, 0x345, 0x1F82), (0x1F03, 0x345, 0x1F83), (0x1F04, 0x345, 0x1F84), (0x1F05, 0x345, 0x1F85),
    (0x1F06, 0x345, 0x1F86), (0x1F07, 0x345, 0x1F87), (0x1F08, 0x300, 0x1F0A), (0x1F08, 0x301, 0x1F0C),
    (0x1F08, 0x342, 0x1F0E), (0x1F08, 0x345, 0x1F88), (0x1F09, 0x300, 0x1F0B), (0x1F09, 0x301, 0x1F0D),
    (0x1F09, 0x342, 0x1F0F), (0x1F09, 0x345, 0x1F89), (0x1F0A, 0x345, 0x1F8A), (0x1F0B, 0x345, 0x1F8B),
    (0x1F0C, 0x345, 0x1F8C), (0x1F0D, 0x345, 0x1F8D), (0x1F0E, 0x345, 0x1F8E), (0x1F0F, 0x345, 0x1F8F),
    (0x1F10, 0x300, 0x1F12), (0x1F10, 0x301, 0x1F14), (0x1F11, 0x300, 0x1F13), (0x1F11, 0x301, 0x1F15),
    (0x1F18, 0x300, 0x1F1A), (0x1F18, 0x301, 0x1F1C), (0x1F19, 0x300, 0x1F1B), (0x1F19, 0x301, 0x1F1D),
    (0x1F20, 0x300, 0x1F22), (0x1F20, 0x301, 0x1F24), (0x1F20, 0x342, 0x1F26), (0x1F20, 0x345, 0x1F90),
    (0x1F21, 0x300, 0x1F23), (0x1F21, 0x301, 0x1F25), (0x1F21, 0x342, 0x1F27), (0x1F21, 0x345, 0x1F91),
    (0x1F22, 0x345, 0x1F92), (0x1F23, 0x345, 0x1F93), (0x1F24, 0x345, 0x1F94), (0x1F25, 0x345, 0x1F95),
    (0x1F26, 0x345, 0x1F96), (0x1F27, 0x345, 0x1F97), (0x1F28, 0x300, 0x1F2A), (0x1F28, 0x301, 0x1F2C),
    (0x1F28, 0x342, 0x1F2E), (0x1F28, 0x345, 0x1F98), (0x1F29, 0x300, 0x1F2B), (0x1F29, 0x301, 0x1F2D),
    (0x1F29, 0x342, 0x1F2F), (0x1F29, 0x345, 0x1F99), (0x1F2A, 0x345, 0x1F9A), (0x1F2B, 0x345, 0x1F9B),
    (0x1F2C, 0x345, 0x1F9C), (0x1F2D, 0x345, 0x1F9D), (0x1F2E, 0x345, 0x1F9E), (0x1F2F, 0x345, 0x1F9F),
    (0x1F30, 0x300, 0x1F32), (0x1F30, 0x301, 0x1F34), (0x1F30, 0x342, 0x1F36), (0x1F31, 0x300, 0x1F33),
    (0x1F31, 0x301, 0x1F35), (0x1F31, 0x342, 0x1F37), (0x1F38, 0x300, 0x1F3A), (0x1F38, 0x301, 0x1F3C),
    (0x1F38, 0x342, 0x1F3E), (0x1F39, 0x300, 0x1F3B), (0x1F39, 0x301, 0x1F3D), (0x1F39, 0x342, 0x1F3F),
    (0x1F40, 0x300, 0x1F42), (0x1F40, 0x301, 0x1F44), (0x1F41, 0x300, 0x1F43), (0x1F41, 0x301, 0x1F45),
    (0x1F48, 0x300, 0x1F4A), (0x1F48, 0x301, 0x1F4C), (0x1F49, 0x300, 0x1F4B), (0x1F49, 0x301, 0x1F4D),
    (0x1F50, 0x300, 0x1F52), (0x1F50, 0x301, 0x1F54), (0x1F50, 0x342, 0x1F56), (0x1F51, 0x300, 0x1F53),
    (0x1F51, 0x301, 0x1F55), (0x1F51, 0x342, 0x1F57), (0x1F59, 0x300, 0x1F5B), (0x1F59, 0x301, 0x1F5D),
    (0x1F59, 0x342, 0x1F5F), (0x1F60, 0x300, 0x1F62), (0x1F60, 0x301, 0x1F64), (0x1F60, 0x342, 0x1F66),
    (0x1F60, 0x345, 0x1FA0), (0x1F61, 0x300, 0x1F63), (0x1F61, 0x301, 0x1F65), (0x1F61, 0x342, 0x1F67),
    (0x1F61, 0x345, 0x1FA1), (0x1F62, 0x345, 0x1FA2), (0x1F63, 0x345, 0x1FA3), (0x1F64, 0x345, 0x1FA4),
    (0x1F65, 0x345, 0x1FA5), (0x1F66, 0x345, 0x1FA6), (0x1F67, 0x345, 0x1FA7), (0x1F68, 0x300, 0x1F6A),
    (0x1F68, 0x301, 0x1F6C), (0x1F68, 0x342, 0x1F6E), (0x1F68, 0x345, 0x1FA8), (0x1F69, 0x300, 0x1F6B),
    (0x1F69, 0x301, 0x1F6D), (0x1F69, 0x342, 0x1F6F), (0x1F69, 0x345, 0x1FA9), (0x1F6A, 0x345, 0x1FAA),
    (0x1F6B, 0x345, 0x1FAB), (0x1F6C, 0x345, 0x1FAC), (0x1F6D, 0x345, 0x1FAD), (0x1F6E, 0x345, 0x1FAE),
    (0x1F6F, 0x345, 0x1FAF), (0x1F70, 0x345, 0x1FB2), (0x1F74, 0x345, 0x1FC2), (0x1F7C, 0x345, 0x1FF2),
    (0x1FB6, 0x345, 0x1FB7), (0x1FBF, 0x300, 0x1FCD), (0x1FBF, 0x301, 0x1FCE), (0x1FBF, 0x342, 0x1FCF),
    (0x1FC6, 0x345, 0x1FC7), (0x1FF6, 0x345, 0x1FF7), (0x1FFE, 0x300, 0x1FDD), (0x1FFE, 0x301, 0x1FDE),
    (0x1FFE, 0x342, 0x1FDF), (0x2190, 0x338, 0x219A), (0x2192, 0x338, 0x219B), (0x2194, 0x338, 0x21AE),
    (0x21D0, 0x338, 0x21CD), (0x21D2, 0x338, 0x21CF), (0x21D4, 0x338, 0x21CE), (0x2203, 0x338, 0x2204),
    (0x2208, 0x338, 0x2209), (0x220B, 0x338, 0x220C), (0x2223, 0x338, 0x2224), (0x2225, 0x338, 0x2226),
    (0x223C, 0x338, 0x2241), (0x2243, 0x338, 0x2244), (0x2245, 0x338, 0x2247), (0x2248, 0x338, 0x2249),
    (0x224D, 0x338, 0x226D), (0x2261, 0x338, 0x2262), (0x2264, 0x338, 0x2270), (0x2265, 0x338, 0x2271),
    (0x2272, 0x338, 0x2274), (0x2273, 0x338, 0x2275), (0x2276, 0x338, 0x2278), (0x2277, 0x338, 0x2279),
    (0x227A, 0x338, 0x2280), (0x227B, 0x338, 0x2281), (0x227C, 0x338, 0x22E0), (0x227D, 0x338, 0x22E1),
    (0x2282, 0x338, 0x2284), (0x2283, 0x338, 0x2285), (0x2286, 0x338, 0x2288), (0x2287, 0x338, 0x2289),
    (0x2291, 0x338, 0x22E2), (0x2292, 0x338, 0x22E3), (0x22A2, 0x338, 0x22AC), (0x22A8, 0x338, 0x22AD),
    (0x22A9, 0x338, 0x22AE), (0x22AB, 0x338, 0x22AF), (0x22B2, 0x338, 0x22EA), (0x22B3, 0x338, 0x22EB),
    (0x22B4, 0x338, 0x22EC), (0x22B5, 0x338, 0x22ED), (0x3046, 0x3099, 0x3094), (0x304B, 0x3099, 0x304C),
    (0x304D, 0x3099, 0x304E), (0x304F, 0x3099, 0x3050), (0x3051, 0x3099, 0x3052), (0x3053, 0x3099, 0x3054),
    (0x3055, 0x3099, 0x3056), (0x3057, 0x3099, 0x3058), (0x3059, 0x3099, 0x305A), (0x305B, 0x3099, 0x305C),
    (0x305D, 0x3099, 0x305E), (0x305F, 0x3099, 0x3060), (0x3061, 0x3099, 0x3062), (0x3064, 0x3099, 0x3065),
    (0x3066, 0x3099, 0x3067), (0x3068, 0x3099, 0x3069), (0x306F, 0x3099, 0x3070), (0x306F, 0x309A, 0x3071),
    (0x3072, 0x3099, 0x3073), (0x3072, 0x309A, 0x3074), (0x3075, 0x3099, 0x3076), (0x3075, 0x309A, 0x3077),
    (0x3078, 0x3099, 0x3079), (0x3078, 0x309A, 0x307A), (0x307B, 0x3099, 0x307C), (0x307B, 0x309A, 0x307D),
    (0x309D, 0x3099, 0x309E), (0x30A6, 0x3099, 0x30F4), (0x30AB, 0x3099, 0x30AC), (0x30AD, 0x3099, 0x30AE),
    (0x30AF, 0x3099, 0x30B0), (0x30B1, 0x3099, 0x30B2), (0x30B3, 0x3099, 0x30B4), (0x30B5, 0x3099, 0x30B6),
    (0x30B7, 0x3099, 0x30B8), (0x30B9, 0x3099, 0x30BA), (0x30BB, 0x3099, 0x30BC), (0x30BD, 0x3099, 0x30BE),
    (0x30BF, 0x3099, 0x30C0), (0x30C1, 0x3099, 0x30C2), (0x30C4, 0x3099, 0x30C5), (0x30C6, 0x3099, 0x30C7),
    (0x30C8, 0x3099, 0x30C9), (0x30CF, 0x3099, 0x30D0), (0x30CF, 0x309A, 0x30D1), (0x30D2, 0x3099, 0x30D3),
    (0x30D2, 0x309A, 0x30D4), (0x30D5, 0x3099, 0x30D6), (0x30D5, 0x309A, 0x30D7), (0x30D8, 0x3099, 0x30D9),
    (0x30D8, 0x309A, 0x30DA), (0x30DB, 0x3099, 0x30DC), (0x30DB, 0x309A, 0x30DD), (0x30EF, 0x3099, 0x30F7),
    (0x30F0, 0x3099, 0x30F8), (0x30F1, 0x3099, 0x30F9), (0x30F2, 0x3099, 0x30FA), (0x30FD, 0x3099, 0x30FE),
    (0x11099, 0x110BA, 0x1109A), (0x1109B, 0x110BA, 0x1109C), (0x110A5, 0x110BA, 0x110AB), (0x11131, 0x11127, 0x1112E),
    (0x11132, 0x11127, 0x1112F), (0x11347, 0x1133E, 0x1134B), (0x11347, 0x11357, 0x1134C), (0x114B9, 0x114B0, 0x114BC),
    (0x114B9, 0x114BA, 0x114BB), (0x114B9, 0x114BD, 0x114BE), (0x115B8, 0x115AF, 0x115BA), (0x115B9, 0x115AF, 0x115BB),
    (0x11935, 0x11930, 0x11938),
];
