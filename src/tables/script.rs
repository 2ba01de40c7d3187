// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

use crate::script::sc;

pub(crate) static BLOCKS: &[(u32, &str)] = &[
    (0x0, "Basic Latin"), (0x80, "Latin-1 Supplement"),
    (0x100, "Latin Extended-A"), (0x180, "Latin Extended-B"),
    (0x250, "IPA Extensions"), (0x2B0, "Spacing Modifier Letters"),
    (0x300, "Combining Diacritical Marks"), (0x370, "Greek and Coptic"),
    (0x400, "Cyrillic"), (0x500, "Cyrillic Supplement"),
    (0x530, "Armenian"), (0x590, "Hebrew"),
    (0x600, "Arabic"), (0x700, "Syriac"),
    (0x750, "Arabic Supplement"), (0x780, "Thaana"),
    (0x7C0, "NKo"), (0x800, "Samaritan"),
    (0x840, "Mandaic"), (0x860, "Syriac Supplement"),
    (0x870, "Arabic Extended-B"), (0x8A0, "Arabic Extended-A"),
    (0x900, "Devanagari"), (0x980, "Bengali"),
    (0xA00, "Gurmukhi"), (0xA80, "Gujarati"),
    (0xB00, "Oriya"), (0xB80, "Tamil"),
    (0xC00, "Telugu"), (0xC80, "Kannada"),
    (0xD00, "Malayalam"), (0xD80, "Sinhala"),
    (0xE00, "Thai"), (0xE80, "Lao"),
    (0xF00, "Tibetan"), (0x1000, "Myanmar"),
    (0x10A0, "Georgian"), (0x1100, "Hangul Jamo"),
    (0x1200, "Ethiopic"), (0x1380, "Ethiopic Supplement"),
    (0x13A0, "Cherokee"), (0x1400, "Unified Canadian Aboriginal Syllabics"),
    (0x1680, "Ogham"), (0x16A0, "Runic"),
    (0x1700, "Tagalog"), (0x1720, "Hanunoo"),
    (0x1740, "Buhid"), (0x1760, "Tagbanwa"),
    (0x1780, "Khmer"), (0x1800, "Mongolian"),
    (0x18B0, "Unified Canadian Aboriginal Syllabics Extended"), (0x1900, "Limbu"),
    (0x1950, "Tai Le"), (0x1980, "New Tai Lue"),
    (0x19E0, "Khmer Symbols"), (0x1A00, "Buginese"),
    (0x1A20, "Tai Tham"), (0x1AB0, "Combining Diacritical Marks Extended"),
    (0x1B00, "Balinese"), (0x1B80, "Sundanese"),
    (0x1BC0, "Batak"), (0x1C00, "Lepcha"),
    (0x1C50, "Ol Chiki"), (0x1C80, "Cyrillic Extended-C"),
    (0x1C90, "Georgian Extended"), (0x1CC0, "Sundanese Supplement"),
    (0x1CD0, "Vedic Extensions"), (0x1D00, "Phonetic Extensions"),
    (0x1D80, "Phonetic Extensions Supplement"), (0x1DC0, "Combining Diacritical Marks Supplement"),
    (0x1E00, "Latin Extended Additional"), (0x1F00, "Greek Extended"),
    (0x2000, "General Punctuation"), (0x2070, "Superscripts and Subscripts"),
    (0x20A0, "Currency Symbols"), (0x20D0, "Combining Diacritical Marks for Symbols"),
    (0x2100, "Letterlike Symbols"), (0x2150, "Number Forms"),
    (0x2190, "Arrows"), (0x2200, "Mathematical Operators"),
    (0x2300, "Miscellaneous Technical"), (0x2400, "Control Pictures"),
    (0x2440, "Optical Character Recognition"), (0x2460, "Enclosed Alphanumerics"),
    (0x2500, "Box Drawing"), (0x2580, "Block Elements"),
    (0x25A0, "Geometric Shapes"), (0x2600, "Miscellaneous Symbols"),
    (0x2700, "Dingbats"), (0x27C0, "Miscellaneous Mathematical Symbols-A"),
    (0x27F0, "Supplemental Arrows-A"), (0x2800, "Braille Patterns"),
    (0x2900, "Supplemental Arrows-B"), (0x2980, "Miscellaneous Mathematical Symbols-B"),
    (0x2A00, "Supplemental Mathematical Operators"), (0x2B00, "Miscellaneous Symbols and Arrows"),
    (0x2C00, "Glagolitic"), (0x2C60, "Latin Extended-C"),
    (0x2C80, "Coptic"), (0x2D00, "Georgian Supplement"),
    (0x2D30, "Tifinagh"), (0x2D80, "Ethiopic Extended"),
    (0x2DE0, "Cyrillic Extended-A"), (0x2E00, "Supplemental Punctuation"),
    (0x2E80, "CJK Radicals Supplement"), (0x2F00, "Kangxi Radicals"),
    (0x2FE0, ""), (0x2FF0, "Ideographic Description Characters"),
    (0x3000, "CJK Symbols and Punctuation"), (0x3040, "Hiragana"),
    (0x30A0, "Katakana"), (0x3100, "Bopomofo"),
    (0x3130, "Hangul Compatibility Jamo"), (0x3190, "Kanbun"),
    (0x31A0, "Bopomofo Extended"), (0x31C0, "CJK Strokes"),
    (0x31F0, "Katakana Phonetic Extensions"), (0x3200, "Enclosed CJK Letters and Months"),
    (0x3300, "CJK Compatibility"), (0x3400, "CJK Unified Ideographs Extension A"),
    (0x4DC0, "Yijing Hexagram Symbols"), (0x4E00, "CJK Unified Ideographs"),
    (0xA000, "Yi Syllables"), (0xA490, "Yi Radicals"),
    (0xA4D0, "Lisu"), (0xA500, "Vai"),
    (0xA640, "Cyrillic Extended-B"), (0xA6A0, "Bamum"),
    (0xA700, "Modifier Tone Letters"), (0xA720, "Latin Extended-D"),
    (0xA800, "Syloti Nagri"), (0xA830, "Common Indic Number Forms"),
    (0xA840, "Phags-pa"), (0xA880, "Saurashtra"),
    (0xA8E0, "Devanagari Extended"), (0xA900, "Kayah Li"),
    (0xA930, "Rejang"), (0xA960, "Hangul Jamo Extended-A"),
    (0xA980, "Javanese"), (0xA9E0, "Myanmar Extended-B"),
    (0xAA00, "Cham"), (0xAA60, "Myanmar Extended-A"),
    (0xAA80, "Tai Viet"), (0xAAE0, "Meetei Mayek Extensions"),
    (0xAB00, "Ethiopic Extended-A"), (0xAB30, "Latin Extended-E"),
    (0xAB70, "Cherokee Supplement"), (0xABC0, "Meetei Mayek"),
    (0xAC00, "Hangul Syllables"), (0xD7B0, "Hangul Jamo Extended-B"),
    (0xD800, "High Surrogates"), (0xDB80, "High Private Use Surrogates"),
    (0xDC00, "Low Surrogates"), (0xE000, "Private Use Area"),
    (0xF900, "CJK Compatibility Ideographs"), (0xFB00, "Alphabetic Presentation Forms"),
    (0xFB50, "Arabic Presentation Forms-A"), (0xFE00, "Variation Selectors"),
    (0xFE10, "Vertical Forms"), (0xFE20, "Combining Half Marks"),
    (0xFE30, "CJK Compatibility Forms"), (0xFE50, "Small Form Variants"),
    (0xFE70, "Arabic Presentation Forms-B"), (0xFF00, "Halfwidth and Fullwidth Forms"),
    (0xFFF0, "Specials"), (0x10000, "Linear B Syllabary"),
    (0x10080, "Linear B Ideograms"), (0x10100, "Aegean Numbers"),
    (0x10140, "Ancient Greek Numbers"), (0x10190, "Ancient Symbols"),
    (0x101D0, "Phaistos Disc"), (0x10200, ""),
    (0x10280, "Lycian"), (0x102A0, "Carian"),
    (0x102E0, "Coptic Epact Numbers"), (0x10300, "Old Italic"),
    (0x10330, "Gothic"), (0x10350, "Old Permic"),
    (0x10380, "Ugaritic"), (0x103A0, "Old Persian"),
    (0x103E0, ""), (0x10400, "Deseret"),
    (0x10450, "Shavian"), (0x10480, "Osmanya"),
    (0x104B0, "Osage"), (0x10500, "Elbasan"),
    (0x10530, "Caucasian Albanian"), (0x10570, "Vithkuqi"),
    (0x105C0, ""), (0x10600, "Linear A"),
    (0x10780, "Latin Extended-F"), (0x107C0, ""),
    (0x10800, "Cypriot Syllabary"), (0x10840, "Imperial Aramaic"),
    (0x10860, "Palmyrene"), (0x10880, "Nabataean"),
    (0x108B0, ""), (0x108E0, "Hatran"),
    (0x10900, "Phoenician"), (0x10920, "Lydian"),
    (0x10940, ""), (0x10980, "Meroitic Hieroglyphs"),
    (0x109A0, "Meroitic Cursive"), (0x10A00, "Kharoshthi"),
    (0x10A60, "Old South Arabian"), (0x10A80, "Old North Arabian"),
    (0x10AA0, ""), (0x10AC0, "Manichaean"),
    (0x10B00, "Avestan"), (0x10B40, "Inscriptional Parthian"),
    (0x10B60, "Inscriptional Pahlavi"), (0x10B80, "Psalter Pahlavi"),
    (0x10BB0, ""), (0x10C00, "Old Turkic"),
    (0x10C50, ""), (0x10C80, "Old Hungarian"),
    (0x10D00, "Hanifi Rohingya"), (0x10D40, ""),
    (0x10E60, "Rumi Numeral Symbols"), (0x10E80, "Yezidi"),
    (0x10EC0, ""), (0x10F00, "Old Sogdian"),
    (0x10F30, "Sogdian"), (0x10F70, "Old Uyghur"),
    (0x10FB0, "Chorasmian"), (0x10FE0, "Elymaic"),
    (0x11000, "Brahmi"), (0x11080, "Kaithi"),
    (0x110D0, "Sora Sompeng"), (0x11100, "Chakma"),
    (0x11150, "Mahajani"), (0x11180, "Sharada"),
    (0x111E0, "Sinhala Archaic Numbers"), (0x11200, "Khojki"),
    (0x11250, ""), (0x11280, "Multani"),
    (0x112B0, "Khudawadi"), (0x11300, "Grantha"),
    (0x11380, ""), (0x11400, "Newa"),
    (0x11480, "Tirhuta"), (0x114E0, ""),
    (0x11580, "Siddham"), (0x11600, "Modi"),
    (0x11660, "Mongolian Supplement"), (0x11680, "Takri"),
    (0x116D0, ""), (0x11700, "Ahom"),
    (0x11750, ""), (0x11800, "Dogra"),
    (0x11850, ""), (0x118A0, "Warang Citi"),
    (0x11900, "Dives Akuru"), (0x11960, ""),
    (0x119A0, "Nandinagari"), (0x11A00, "Zanabazar Square"),
    (0x11A50, "Soyombo"), (0x11AB0, "Unified Canadian Aboriginal Syllabics Extended-A"),
    (0x11AC0, "Pau Cin Hau"), (0x11B00, ""),
    (0x11C00, "Bhaiksuki"), (0x11C70, "Marchen"),
    (0x11CC0, ""), (0x11D00, "Masaram Gondi"),
    (0x11D60, "Gunjala Gondi"), (0x11DB0, ""),
    (0x11EE0, "Makasar"), (0x11F00, ""),
    (0x11FB0, "Lisu Supplement"), (0x11FC0, "Tamil Supplement"),
    (0x12000, "Cuneiform"), (0x12400, "Cuneiform Numbers and Punctuation"),
    (0x12480, "Early Dynastic Cuneiform"), (0x12550, ""),
    (0x12F90, "Cypro-Minoan"), (0x13000, "Egyptian Hieroglyphs"),
    (0x13430, "Egyptian Hieroglyph Format Controls"), (0x13440, ""),
    (0x14400, "Anatolian Hieroglyphs"), (0x14680, ""),
    (0x16800, "Bamum Supplement"), (0x16A40, "Mro"),
    (0x16A70, "Tangsa"), (0x16AD0, "Bassa Vah"),
    (0x16B00, "Pahawh Hmong"), (0x16B90, ""),
    (0x16E40, "Medefaidrin"), (0x16EA0, ""),
    (0x16F00, "Miao"), (0x16FA0, ""),
    (0x16FE0, "Ideographic Symbols and Punctuation"), (0x17000, "Tangut"),
    (0x18800, "Tangut Components"), (0x18B00, "Khitan Small Script"),
    (0x18D00, "Tangut Supplement"), (0x18D80, ""),
    (0x1AFF0, "Kana Extended-B"), (0x1B000, "Kana Supplement"),
    (0x1B100, "Kana Extended-A"), (0x1B130, "Small Kana Extension"),
    (0x1B170, "Nushu"), (0x1B300, ""),
    (0x1BC00, "Duployan"), (0x1BCA0, "Shorthand Format Controls"),
    (0x1BCB0, ""), (0x1CF00, "Znamenny Musical Notation"),
    (0x1CFD0, ""), (0x1D000, "Byzantine Musical Symbols"),
    (0x1D100, "Musical Symbols"), (0x1D200, "Ancient Greek Musical Notation"),
    (0x1D250, ""), (0x1D2E0, "Mayan Numerals"),
    (0x1D300, "Tai Xuan Jing Symbols"), (0x1D360, "Counting Rod Numerals"),
    (0x1D380, ""), (0x1D400, "Mathematical Alphanumeric Symbols"),
    (0x1D800, "Sutton SignWriting"), (0x1DAB0, ""),
    (0x1DF00, "Latin Extended-G"), (0x1E000, "Glagolitic Supplement"),
    (0x1E030, ""), (0x1E100, "Nyiakeng Puachue Hmong"),
    (0x1E150, ""), (0x1E290, "Toto"),
    (0x1E2C0, "Wancho"), (0x1E300, ""),
    (0x1E7E0, "Ethiopic Extended-B"), (0x1E800, "Mende Kikakui"),
    (0x1E8E0, ""), (0x1E900, "Adlam"),
    (0x1E960, ""), (0x1EC70, "Indic Siyaq Numbers"),
    (0x1ECC0, ""), (0x1ED00, "Ottoman Siyaq Numbers"),
    (0x1ED50, ""), (0x1EE00, "Arabic Mathematical Alphabetic Symbols"),
    (0x1EF00, ""), (0x1F000, "Mahjong Tiles"),
    (0x1F030, "Domino Tiles"), (0x1F0A0, "Playing Cards"),
    (0x1F100, "Enclosed Alphanumeric Supplement"), (0x1F200, "Enclosed Ideographic Supplement"),
    (0x1F300, "Miscellaneous Symbols and Pictographs"), (0x1F600, "Emoticons"),
    (0x1F650, "Ornamental Dingbats"), (0x1F680, "Transport and Map Symbols"),
    (0x1F700, "Alchemical Symbols"), (0x1F780, "Geometric Shapes Extended"),
    (0x1F800, "Supplemental Arrows-C"), (0x1F900, "Supplemental Symbols and Pictographs"),
    (0x1FA00, "Chess Symbols"), (0x1FA70, "Symbols and Pictographs Extended-A"),
    (0x1FB00, "Symbols for Legacy Computing"), (0x1FC00, ""),
    (0x20000, "CJK Unified Ideographs Extension B"), (0x2A6E0, ""),
    (0x2A700, "CJK Unified Ideographs Extension C"), (0x2B740, "CJK Unified Ideographs Extension D"),
    (0x2B820, "CJK Unified Ideographs Extension E"), (0x2CEB0, "CJK Unified Ideographs Extension F"),
    (0x2EBF0, ""), (0x2F800, "CJK Compatibility Ideographs Supplement"),
    (0x2FA20, ""), (0x30000, "CJK Unified Ideographs Extension G"),
    (0x31350, ""), (0xE0000, "Tags"),
    (0xE0080, ""), (0xE0100, "Variation Selectors Supplement"),
    (0xE01F0, ""), (0xF0000, "Supplementary Private Use Area-A"),
    (0x100000, "Supplementary Private Use Area-B"),
];

pub(crate) static SCRIPTS: &[(u32, u32)] = &[
    (0x0, sc(b"zyyy")), (0x41, sc(b"latn")), (0x5B, sc(b"zyyy")), (0x61, sc(b"latn")),
    (0x7B, sc(b"zyyy")), (0xAA, sc(b"latn")), (0xAB, sc(b"zyyy")), (0xBA, sc(b"latn")),
    (0xBB, sc(b"zyyy")), (0xC0, sc(b"latn")), (0xD7, sc(b"zyyy")), (0xD8, sc(b"latn")),
    (0xF7, sc(b"zyyy")), (0xF8, sc(b"latn")), (0x2B9, sc(b"zyyy")), (0x2E0, sc(b"latn")),
    (0x2E5, sc(b"zyyy")), (0x300, sc(b"zinh")), (0x370, sc(b"grek")), (0x374, sc(b"zyyy")),
    (0x375, sc(b"grek")), (0x378, sc(b"zzzz")), (0x37A, sc(b"grek")), (0x37E, sc(b"zyyy")),
    (0x37F, sc(b"grek")), (0x385, sc(b"zyyy")), (0x386, sc(b"grek")), (0x3E2, sc(b"copt")),
    (0x3F0, sc(b"grek")), (0x400, sc(b"cyrl")), (0x485, sc(b"zinh")), (0x487, sc(b"cyrl")),
    (0x530, sc(b"armn")), (0x590, sc(b"hebr")), (0x600, sc(b"arab")), (0x60C, sc(b"zyyy")),
    (0x60D, sc(b"arab")), (0x61B, sc(b"zyyy")), (0x61C, sc(b"arab")), (0x61F, sc(b"zyyy")),
    (0x620, sc(b"arab")), (0x640, sc(b"zyyy")), (0x641, sc(b"arab")), (0x700, sc(b"syrc")),
    (0x750, sc(b"arab")), (0x780, sc(b"thaa")), (0x7C0, sc(b"nkoo")), (0x800, sc(b"samr")),
    (0x840, sc(b"mand")), (0x860, sc(b"syrc")), (0x870, sc(b"arab")), (0x900, sc(b"deva")),
    (0x951, sc(b"zinh")), (0x953, sc(b"deva")), (0x964, sc(b"zyyy")), (0x966, sc(b"deva")),
    (0x980, sc(b"beng")), (0xA00, sc(b"guru")), (0xA80, sc(b"gujr")), (0xB00, sc(b"orya")),
    (0xB80, sc(b"taml")), (0xC00, sc(b"telu")), (0xC80, sc(b"knda")), (0xD00, sc(b"mlym")),
    (0xD80, sc(b"sinh")), (0xE00, sc(b"thai")), (0xE3F, sc(b"zyyy")), (0xE40, sc(b"thai")),
    (0xE80, sc(b"laoo")), (0xF00, sc(b"tibt")), (0x1000, sc(b"mymr")), (0x10A0, sc(b"geor")),
    (0x10FB, sc(b"zyyy")), (0x10FC, sc(b"geor")), (0x1100, sc(b"hang")), (0x1200, sc(b"ethi")),
    (0x13A0, sc(b"cher")), (0x1400, sc(b"cans")), (0x1680, sc(b"ogam")), (0x16A0, sc(b"runr")),
    (0x16EB, sc(b"zyyy")), (0x16EE, sc(b"runr")), (0x1700, sc(b"tglg")), (0x1720, sc(b"hano")),
    (0x1735, sc(b"zyyy")), (0x1737, sc(b"zzzz")), (0x1740, sc(b"buhd")), (0x1760, sc(b"tagb")),
    (0x1780, sc(b"khmr")), (0x1800, sc(b"mong")), (0x1802, sc(b"zyyy")), (0x1804, sc(b"mong")),
    (0x1805, sc(b"zyyy")), (0x1806, sc(b"mong")), (0x18B0, sc(b"cans")), (0x1900, sc(b"limb")),
    (0x1950, sc(b"tale")), (0x1980, sc(b"talu")), (0x19E0, sc(b"khmr")), (0x1A00, sc(b"bugi")),
    (0x1A20, sc(b"lana")), (0x1AB0, sc(b"zinh")), (0x1B00, sc(b"bali")), (0x1B80, sc(b"sund")),
    (0x1BC0, sc(b"batk")), (0x1C00, sc(b"lepc")), (0x1C50, sc(b"olck")), (0x1C80, sc(b"cyrl")),
    (0x1C90, sc(b"geor")), (0x1CC0, sc(b"sund")), (0x1CD0, sc(b"zinh")), (0x1D00, sc(b"latn")),
    (0x1D26, sc(b"grek")), (0x1D2B, sc(b"cyrl")), (0x1D2C, sc(b"latn")), (0x1D5D, sc(b"grek")),
    (0x1D62, sc(b"latn")), (0x1D66, sc(b"grek")), (0x1D6B, sc(b"latn")), (0x1D78, sc(b"cyrl")),
    (0x1D79, sc(b"latn")), (0x1DBF, sc(b"grek")), (0x1DC0, sc(b"zinh")), (0x1E00, sc(b"latn")),
    (0x1F00, sc(b"grek")), (0x2000, sc(b"zyyy")), (0x200C, sc(b"zinh")), (0x200E, sc(b"zyyy")),
    (0x2071, sc(b"latn")), (0x2072, sc(b"zyyy")), (0x207F, sc(b"latn")), (0x2080, sc(b"zyyy")),
    (0x2090, sc(b"latn")), (0x209D, sc(b"zzzz")), (0x20A0, sc(b"zyyy")), (0x20D0, sc(b"zinh")),
    (0x2100, sc(b"zyyy")), (0x2126, sc(b"grek")), (0x2127, sc(b"zyyy")), (0x212A, sc(b"latn")),
    (0x212C, sc(b"zyyy")), (0x2132, sc(b"latn")), (0x2133, sc(b"zyyy")), (0x214E, sc(b"latn")),
    (0x214F, sc(b"zyyy")), (0x2160, sc(b"latn")), (0x2189, sc(b"zyyy")), (0x2800, sc(b"brai")),
    (0x2900, sc(b"zyyy")), (0x2C00, sc(b"glag")), (0x2C60, sc(b"latn")), (0x2C80, sc(b"copt")),
    (0x2D00, sc(b"geor")), (0x2D30, sc(b"tfng")), (0x2D80, sc(b"ethi")), (0x2DE0, sc(b"cyrl")),
    (0x2E00, sc(b"zyyy")), (0x2E80, sc(b"hani")), (0x2FE0, sc(b"zzzz")), (0x2FF0, sc(b"zyyy")),
    (0x3005, sc(b"hani")), (0x3006, sc(b"zyyy")), (0x3007, sc(b"hani")), (0x3008, sc(b"zyyy")),
    (0x3021, sc(b"hani")), (0x302A, sc(b"zinh")), (0x302E, sc(b"hang")), (0x3030, sc(b"zyyy")),
    (0x3038, sc(b"hani")), (0x303C, sc(b"zyyy")), (0x3040, sc(b"hira")), (0x3099, sc(b"zinh")),
    (0x309B, sc(b"zyyy")), (0x309D, sc(b"hira")), (0x30A0, sc(b"zyyy")), (0x30A1, sc(b"kana")),
    (0x30FB, sc(b"zyyy")), (0x30FD, sc(b"kana")), (0x3100, sc(b"bopo")), (0x3130, sc(b"hang")),
    (0x3190, sc(b"zyyy")), (0x31A0, sc(b"bopo")), (0x31C0, sc(b"zyyy")), (0x31F0, sc(b"kana")),
    (0x3200, sc(b"hang")), (0x321F, sc(b"zzzz")), (0x3220, sc(b"zyyy")), (0x3260, sc(b"hang")),
    (0x327F, sc(b"zyyy")), (0x32D0, sc(b"kana")), (0x3358, sc(b"zyyy")), (0x3400, sc(b"hani")),
    (0x4DC0, sc(b"zyyy")), (0x4E00, sc(b"hani")), (0xA000, sc(b"yiii")), (0xA4D0, sc(b"lisu")),
    (0xA500, sc(b"vaii")), (0xA640, sc(b"cyrl")), (0xA6A0, sc(b"bamu")), (0xA700, sc(b"zyyy")),
    (0xA722, sc(b"latn")), (0xA788, sc(b"zyyy")), (0xA78B, sc(b"latn")), (0xA800, sc(b"sylo")),
    (0xA830, sc(b"zyyy")), (0xA840, sc(b"phag")), (0xA880, sc(b"saur")), (0xA8E0, sc(b"deva")),
    (0xA900, sc(b"kali")), (0xA92E, sc(b"zyyy")), (0xA92F, sc(b"kali")), (0xA930, sc(b"rjng")),
    (0xA960, sc(b"hang")), (0xA980, sc(b"java")), (0xA9E0, sc(b"mymr")), (0xAA00, sc(b"cham")),
    (0xAA60, sc(b"mymr")), (0xAA80, sc(b"tavt")), (0xAAE0, sc(b"mtei")), (0xAB00, sc(b"ethi")),
    (0xAB30, sc(b"latn")), (0xAB65, sc(b"grek")), (0xAB66, sc(b"latn")), (0xAB70, sc(b"cher")),
    (0xABC0, sc(b"mtei")), (0xAC00, sc(b"hang")), (0xD800, sc(b"zzzz")), (0xF900, sc(b"hani")),
    (0xFB00, sc(b"latn")), (0xFB07, sc(b"zzzz")), (0xFB13, sc(b"armn")), (0xFB18, sc(b"zzzz")),
    (0xFB1D, sc(b"hebr")), (0xFB50, sc(b"arab")), (0xFD3E, sc(b"zyyy")), (0xFD40, sc(b"arab")),
    (0xFE00, sc(b"zinh")), (0xFE10, sc(b"zyyy")), (0xFE20, sc(b"zinh")), (0xFE2E, sc(b"cyrl")),
    (0xFE30, sc(b"zyyy")), (0xFE70, sc(b"arab")), (0xFEFF, sc(b"zyyy")), (0xFF21, sc(b"latn")),
    (0xFF3B, sc(b"zyyy")), (0xFF41, sc(b"latn")), (0xFF5B, sc(b"zyyy")), (0xFF66, sc(b"kana")),
    (0xFF70, sc(b"zyyy")), (0xFF71, sc(b"kana")), (0xFF9E, sc(b"zyyy")), (0xFFA0, sc(b"hang")),
    (0xFFE0, sc(b"zyyy")), (0x10000, sc(b"linb")), (0x10100, sc(b"zyyy")), (0x10140, sc(b"grek")),
    (0x10190, sc(b"zyyy")), (0x101FD, sc(b"zinh")), (0x101FE, sc(b"zzzz")), (0x10280, sc(b"lyci")),
    (0x102A0, sc(b"cari")), (0x102E0, sc(b"zinh")), (0x102E1, sc(b"zyyy")), (0x10300, sc(b"ital")),
    (0x10330, sc(b"goth")), (0x10350, sc(b"perm")), (0x10380, sc(b"ugar")), (0x103A0, sc(b"xpeo")),
    (0x103E0, sc(b"zzzz")), (0x10400, sc(b"dsrt")), (0x10450, sc(b"shaw")), (0x10480, sc(b"osma")),
    (0x104B0, sc(b"osge")), (0x10500, sc(b"elba")), (0x10530, sc(b"aghb")), (0x10570, sc(b"vith")),
    (0x105C0, sc(b"zzzz")), (0x10600, sc(b"lina")), (0x10780, sc(b"latn")), (0x107C0, sc(b"zzzz")),
    (0x10800, sc(b"cprt")), (0x10840, sc(b"armi")), (0x10860, sc(b"palm")), (0x10880, sc(b"nbat")),
    (0x108B0, sc(b"zzzz")), (0x108E0, sc(b"hatr")), (0x10900, sc(b"phnx")), (0x10920, sc(b"lydi")),
    (0x10940, sc(b"zzzz")), (0x10980, sc(b"mero")), (0x109A0, sc(b"merc")), (0x10A00, sc(b"khar")),
    (0x10A60, sc(b"sarb")), (0x10A80, sc(b"narb")), (0x10AA0, sc(b"zzzz")), (0x10AC0, sc(b"mani")),
    (0x10B00, sc(b"avst")), (0x10B40, sc(b"prti")), (0x10B60, sc(b"phli")), (0x10B80, sc(b"phlp")),
    (0x10BB0, sc(b"zzzz")), (0x10C00, sc(b"orkh")), (0x10C50, sc(b"zzzz")), (0x10C80, sc(b"hung")),
    (0x10D00, sc(b"rohg")), (0x10D40, sc(b"zzzz")), (0x10E60, sc(b"arab")), (0x10E80, sc(b"yezi")),
    (0x10EC0, sc(b"zzzz")), (0x10F00, sc(b"sogo")), (0x10F30, sc(b"sogd")), (0x10F70, sc(b"ougr")),
    (0x10FB0, sc(b"chrs")), (0x10FE0, sc(b"elym")), (0x11000, sc(b"brah")), (0x11080, sc(b"kthi")),
    (0x110D0, sc(b"sora")), (0x11100, sc(b"cakm")), (0x11150, sc(b"mahj")), (0x11180, sc(b"shrd")),
    (0x111E0, sc(b"sinh")), (0x11200, sc(b"khoj")), (0x11250, sc(b"zzzz")), (0x11280, sc(b"mult")),
    (0x112B0, sc(b"sind")), (0x11300, sc(b"gran")), (0x11380, sc(b"zzzz")), (0x11400, sc(b"newa")),
    (0x11480, sc(b"tirh")), (0x114E0, sc(b"zzzz")), (0x11580, sc(b"sidd")), (0x11600, sc(b"modi")),
    (0x11660, sc(b"mong")), (0x11680, sc(b"takr")), (0x116D0, sc(b"zzzz")), (0x11700, sc(b"ahom")),
    (0x11750, sc(b"zzzz")), (0x11800, sc(b"dogr")), (0x11850, sc(b"zzzz")), (0x118A0, sc(b"wara")),
    (0x11900, sc(b"diak")), (0x11960, sc(b"zzzz")), (0x119A0, sc(b"nand")), (0x11A00, sc(b"zanb")),
    (0x11A50, sc(b"soyo")), (0x11AB0, sc(b"cans")), (0x11AC0, sc(b"pauc")), (0x11B00, sc(b"zzzz")),
    (0x11C00, sc(b"bhks")), (0x11C70, sc(b"marc")), (0x11CC0, sc(b"zzzz")), (0x11D00, sc(b"gonm")),
    (0x11D60, sc(b"gong")), (0x11DB0, sc(b"zzzz")), (0x11EE0, sc(b"maka")), (0x11F00, sc(b"zzzz")),
    (0x11FB0, sc(b"lisu")), (0x11FC0, sc(b"taml")), (0x12000, sc(b"xsux")), (0x12550, sc(b"zzzz")),
    (0x12F90, sc(b"cpmn")), (0x13000, sc(b"egyp")), (0x13440, sc(b"zzzz")), (0x14400, sc(b"hluw")),
    (0x14680, sc(b"zzzz")), (0x16800, sc(b"bamu")), (0x16A40, sc(b"mroo")), (0x16A70, sc(b"tnsa")),
    (0x16AD0, sc(b"bass")), (0x16B00, sc(b"hmng")), (0x16B90, sc(b"zzzz")), (0x16E40, sc(b"medf")),
    (0x16EA0, sc(b"zzzz")), (0x16F00, sc(b"plrd")), (0x16FA0, sc(b"zzzz")), (0x16FE0, sc(b"tang")),
    (0x16FE1, sc(b"nshu")), (0x16FE2, sc(b"zyyy")), (0x16FE4, sc(b"kits")), (0x16FE5, sc(b"zzzz")),
    (0x16FF0, sc(b"hani")), (0x16FF2, sc(b"zzzz")), (0x17000, sc(b"tang")), (0x18B00, sc(b"kits")),
    (0x18D00, sc(b"tang")), (0x18D80, sc(b"zzzz")), (0x1AFF0, sc(b"kana")), (0x1B001, sc(b"hira")),
    (0x1B120, sc(b"kana")), (0x1B130, sc(b"hira")), (0x1B170, sc(b"nshu")), (0x1B300, sc(b"zzzz")),
    (0x1BC00, sc(b"dupl")), (0x1BCA0, sc(b"zyyy")), (0x1BCB0, sc(b"zzzz")), (0x1CF00, sc(b"zyyy")),
    (0x1CFD0, sc(b"zzzz")), (0x1D000, sc(b"zyyy")), (0x1D167, sc(b"zinh")), (0x1D16A, sc(b"zyyy")),
    (0x1D17B, sc(b"zinh")), (0x1D183, sc(b"zyyy")), (0x1D185, sc(b"zinh")), (0x1D18C, sc(b"zyyy")),
    (0x1D1AA, sc(b"zinh")), (0x1D1AE, sc(b"zyyy")), (0x1D200, sc(b"grek")), (0x1D250, sc(b"zzzz")),
    (0x1D2E0, sc(b"zyyy")), (0x1D380, sc(b"zzzz")), (0x1D400, sc(b"zyyy")), (0x1D800, sc(b"sgnw")),
    (0x1DAB0, sc(b"zzzz")), (0x1DF00, sc(b"latn")), (0x1E000, sc(b"glag")), (0x1E030, sc(b"zzzz")),
    (0x1E100, sc(b"hmnp")), (0x1E150, sc(b"zzzz")), (0x1E290, sc(b"toto")), (0x1E2C0, sc(b"wcho")),
    (0x1E300, sc(b"zzzz")), (0x1E7E0, sc(b"ethi")), (0x1E800, sc(b"mend")), (0x1E8E0, sc(b"zzzz")),
    (0x1E900, sc(b"adlm")), (0x1E960, sc(b"zzzz")), (0x1EC70, sc(b"zyyy")), (0x1ECC0, sc(b"zzzz")),
    (0x1ED00, sc(b"zyyy")), (0x1ED50, sc(b"zzzz")), (0x1EE00, sc(b"arab")), (0x1EF00, sc(b"zzzz")),
    (0x1F000, sc(b"zyyy")), (0x1FC00, sc(b"zzzz")), (0x20000, sc(b"hani")), (0x31350, sc(b"zzzz")),
    (0xE0000, sc(b"zyyy")), (0xE0080, sc(b"zzzz")), (0xE0100, sc(b"zinh")), (0xE01F0, sc(b"zzzz")),
];

// Script extensions follow ScriptExtensions.txt 8.0.0.
pub(crate) static SCRIPT_EXTENSIONS: &[(u32, Option<&str>)] = &[
    (0x0, None), (0x342, Some("Grek")),
    (0x343, None), (0x345, Some("Grek")),
    (0x346, None), (0x363, Some("Latn")),
    (0x370, None), (0x483, Some("Cyrl Perm")),
    (0x484, Some("Cyrl Glag")), (0x485, Some("Cyrl Latn")),
    (0x487, Some("Cyrl Glag")), (0x488, None),
    (0x589, Some("Armn Geor")), (0x58A, None),
    (0x60C, Some("Arab Syrc Thaa")), (0x60D, None),
    (0x61B, Some("Arab Syrc Thaa")), (0x61D, None),
    (0x61F, Some("Arab Syrc Thaa")), (0x620, None),
    (0x640, Some("Arab Mand Mani Phlp Syrc")), (0x641, None),
    (0x64B, Some("Arab Syrc")), (0x656, None),
    (0x660, Some("Arab Thaa")), (0x66A, None),
    (0x670, Some("Arab Syrc")), (0x671, None),
    (0x951, Some("Beng Deva Gran Gujr Guru Knda Latn Mlym Orya Taml Telu Tirh")), (0x953, None),
    (0x964, Some("Beng Deva Gran Gujr Guru Knda Mahj Mlym Orya Sind Sinh Sylo Takr Taml Telu Tirh")), (0x966, None),
    (0x9E6, Some("Beng Cakm Sylo")), (0x9F0, None),
    (0xA66, Some("Guru Mult")), (0xA70, None),
    (0xBE6, Some("Gran Taml")), (0xBF4, None),
    (0x1040, Some("Cakm Mymr Tale")), (0x104A, None),
    (0x10FB, Some("Geor Latn")), (0x10FC, None),
    (0x1735, Some("Buhd Hano Tagb Tglg")), (0x1737, None),
    (0x1802, Some("Mong Phag")), (0x1804, None),
    (0x1805, Some("Mong Phag")), (0x1806, None),
    (0x1CD0, Some("Deva Gran")), (0x1CD3, None),
    (0x3001, Some("Bopo Hang Hani Hira Kana Yiii")), (0x3004, None),
    (0x3008, Some("Bopo Hang Hani Hira Kana Yiii")), (0x3012, None),
    (0x3013, Some("Bopo Hang Hani Hira Kana Yiii")), (0x3020, None),
    (0x3031, Some("Hira Kana")), (0x3036, None),
    (0x303C, Some("Hani Hira Kana")), (0x303E, None),
    (0x3099, Some("Hira Kana")), (0x309D, None),
    (0x30A0, Some("Hira Kana")), (0x30A1, None),
    (0x30FB, Some("Hira Kana")), (0x30FD, None),
    (0xA66F, Some("Cyrl Glag")), (0xA670, None),
    (0xA830, Some("Deva Gujr Guru Khoj Knda Kthi Mahj Mlym Modi Sind Takr Tirh")), (0xA83A, None),
    (0xFF61, Some("Bopo Hang Hani Hira Kana Yiii")), (0xFF66, None),
    (0xFF70, Some("Hira Kana")), (0xFF71, None),
    (0xFF9E, Some("Hira Kana")), (0xFFA0, None),
    (0x10100, Some("Cprt Linb")), (0x10103, None),
    (0x10107, Some("Cprt Lina Linb")), (0x10134, None),
];

pub(crate) static ISO_SCRIPT_NAMES: phf::Map<u32, &'static str> = phf::phf_map! {
    0x61646c6du32 => "Adlam", 0x6166616bu32 => "Afaka",
    0x61676862u32 => "Caucasian Albanian", 0x61686f6du32 => "Ahom",
    0x61726162u32 => "Arabic", 0x61726d69u32 => "Imperial Aramaic",
    0x61726d6eu32 => "Armenian", 0x61767374u32 => "Avestan",
    0x62616c69u32 => "Balinese", 0x62616d75u32 => "Bamum",
    0x62617373u32 => "Bassa Vah", 0x6261746bu32 => "Batak",
    0x62656e67u32 => "Bengali", 0x62686b73u32 => "Bhaiksuki",
    0x626c6973u32 => "Blissymbols", 0x626f706fu32 => "Bopomofo",
    0x62726168u32 => "Brahmi", 0x62726169u32 => "Braille",
    0x62756769u32 => "Buginese", 0x62756864u32 => "Buhid",
    0x63616b6du32 => "Chakma", 0x63616e73u32 => "Unified Canadian Aboriginal Syllabics",
    0x63617269u32 => "Carian", 0x6368616du32 => "Cham",
    0x63686572u32 => "Cherokee", 0x63687273u32 => "Chorasmian",
    0x63697274u32 => "Cirth", 0x636f7074u32 => "Coptic",
    0x63706d6eu32 => "Cypro-Minoan", 0x63707274u32 => "Cypriot",
    0x6379726cu32 => "Cyrillic", 0x63797273u32 => "Cyrillic (Old Church Slavonic variant)",
    0x64657661u32 => "Devanagari", 0x6469616bu32 => "Dives Akuru",
    0x646f6772u32 => "Dogra", 0x64737274u32 => "Deseret",
    0x6475706cu32 => "Duployan shorthand", 0x65677964u32 => "Egyptian demotic",
    0x65677968u32 => "Egyptian hieratic", 0x65677970u32 => "Egyptian hieroglyphs",
    0x656c6261u32 => "Elbasan", 0x656c796du32 => "Elymaic",
    0x65746869u32 => "Ethiopic", 0x67656f6bu32 => "Khutsuri",
    0x67656f72u32 => "Georgian", 0x676c6167u32 => "Glagolitic",
    0x676f6e67u32 => "Gunjala Gondi", 0x676f6e6du32 => "Masaram Gondi",
    0x676f7468u32 => "Gothic", 0x6772616eu32 => "Grantha",
    0x6772656bu32 => "Greek", 0x67756a72u32 => "Gujarati",
    0x67757275u32 => "Gurmukhi", 0x68616e67u32 => "Hangul",
    0x68616e69u32 => "Han", 0x68616e6fu32 => "Hanunoo",
    0x68616e73u32 => "Han (Simplified variant)", 0x68616e74u32 => "Han (Traditional variant)",
    0x68617472u32 => "Hatran", 0x68656272u32 => "Hebrew",
    0x68697261u32 => "Hiragana", 0x686c7577u32 => "Anatolian Hieroglyphs",
    0x686d6e67u32 => "Pahawh Hmong", 0x686d6e70u32 => "Nyiakeng Puachue Hmong",
    0x68726b74u32 => "Japanese syllabaries", 0x68756e67u32 => "Old Hungarian",
    0x696e6473u32 => "Indus", 0x6974616cu32 => "Old Italic",
    0x6a617661u32 => "Javanese", 0x6a70616eu32 => "Japanese",
    0x6b616c69u32 => "Kayah Li", 0x6b616e61u32 => "Katakana",
    0x6b686172u32 => "Kharoshthi", 0x6b686d72u32 => "Khmer",
    0x6b686f6au32 => "Khojki", 0x6b697473u32 => "Khitan small script",
    0x6b6e6461u32 => "Kannada", 0x6b6f7265u32 => "Korean",
    0x6b746869u32 => "Kaithi", 0x6c616e61u32 => "Tai Tham",
    0x6c616f6fu32 => "Lao", 0x6c617466u32 => "Latin (Fraktur variant)",
    0x6c617467u32 => "Latin (Gaelic variant)", 0x6c61746eu32 => "Latin",
    0x6c657063u32 => "Lepcha", 0x6c696d62u32 => "Limbu",
    0x6c696e61u32 => "Linear A", 0x6c696e62u32 => "Linear B",
    0x6c697375u32 => "Lisu", 0x6c796369u32 => "Lycian",
    0x6c796469u32 => "Lydian", 0x6d61686au32 => "Mahajani",
    0x6d616b61u32 => "Makasar", 0x6d616e64u32 => "Mandaic",
    0x6d616e69u32 => "Manichaean", 0x6d617263u32 => "Marchen",
    0x6d617961u32 => "Mayan hieroglyphs", 0x6d656466u32 => "Medefaidrin",
    0x6d656e64u32 => "Mende Kikakui", 0x6d657263u32 => "Meroitic Cursive",
    0x6d65726fu32 => "Meroitic Hieroglyphs", 0x6d6c796du32 => "Malayalam",
    0x6d6f6469u32 => "Modi", 0x6d6f6e67u32 => "Mongolian",
    0x6d6f6f6eu32 => "Moon", 0x6d726f6fu32 => "Mro",
    0x6d746569u32 => "Meitei Mayek", 0x6d756c74u32 => "Multani",
    0x6d796d72u32 => "Myanmar", 0x6e616e64u32 => "Nandinagari",
    0x6e617262u32 => "Old North Arabian", 0x6e626174u32 => "Nabataean",
    0x6e657761u32 => "Newa", 0x6e6b6f6fu32 => "NKo",
    0x6e736875u32 => "Nushu", 0x6f67616du32 => "Ogham",
    0x6f6c636bu32 => "Ol Chiki", 0x6f726b68u32 => "Old Turkic",
    0x6f727961u32 => "Oriya", 0x6f736765u32 => "Osage",
    0x6f736d61u32 => "Osmanya", 0x6f756772u32 => "Old Uyghur",
    0x70616c6du32 => "Palmyrene", 0x70617563u32 => "Pau Cin Hau",
    0x7065726du32 => "Old Permic", 0x70686167u32 => "Phags-pa",
    0x70686c69u32 => "Inscriptional Pahlavi", 0x70686c70u32 => "Psalter Pahlavi",
    0x70686c76u32 => "Book Pahlavi", 0x70686e78u32 => "Phoenician",
    0x706c7264u32 => "Miao", 0x70727469u32 => "Inscriptional Parthian",
    0x726a6e67u32 => "Rejang", 0x726f6867u32 => "Hanifi Rohingya",
    0x726f726fu32 => "Rongorongo", 0x72756e72u32 => "Runic",
    0x73616d72u32 => "Samaritan", 0x73617261u32 => "Sarati",
    0x73617262u32 => "Old South Arabian", 0x73617572u32 => "Saurashtra",
    0x73676e77u32 => "SignWriting", 0x73686177u32 => "Shavian",
    0x73687264u32 => "Sharada", 0x73696464u32 => "Siddham",
    0x73696e64u32 => "Khudawadi", 0x73696e68u32 => "Sinhala",
    0x736f6764u32 => "Sogdian", 0x736f676fu32 => "Old Sogdian",
    0x736f7261u32 => "Sora Sompeng", 0x736f796fu32 => "Soyombo",
    0x73756e64u32 => "Sundanese", 0x73796c6fu32 => "Syloti Nagri",
    0x73797263u32 => "Syriac", 0x73797265u32 => "Syriac (Estrangelo variant)",
    0x7379726au32 => "Syriac (Western variant)", 0x7379726eu32 => "Syriac (Eastern variant)",
    0x74616762u32 => "Tagbanwa", 0x74616b72u32 => "Takri",
    0x74616c65u32 => "Tai Le", 0x74616c75u32 => "New Tai Lue",
    0x74616d6cu32 => "Tamil", 0x74616e67u32 => "Tangut",
    0x74617674u32 => "Tai Viet", 0x74656c75u32 => "Telugu",
    0x74656e67u32 => "Tengwar", 0x74666e67u32 => "Tifinagh",
    0x74676c67u32 => "Tagalog", 0x74686161u32 => "Thaana",
    0x74686169u32 => "Thai", 0x74696274u32 => "Tibetan",
    0x74697268u32 => "Tirhuta", 0x746e7361u32 => "Tangsa",
    0x746f746fu32 => "Toto", 0x75676172u32 => "Ugaritic",
    0x76616969u32 => "Vai", 0x76697370u32 => "Visible Speech",
    0x76697468u32 => "Vithkuqi", 0x77617261u32 => "Warang Citi",
    0x7763686fu32 => "Wancho", 0x7870656fu32 => "Old Persian",
    0x78737578u32 => "Cuneiform", 0x79657a69u32 => "Yezidi",
    0x79696969u32 => "Yi", 0x7a616e62u32 => "Zanabazar Square",
    0x7a696e68u32 => "Inherited", 0x7a6d7468u32 => "Mathematical notation",
    0x7a73796du32 => "Symbols", 0x7a787878u32 => "Code for unwritten documents",
    0x7a797979u32 => "Common", 0x7a7a7a7au32 => "Unknown",
};
