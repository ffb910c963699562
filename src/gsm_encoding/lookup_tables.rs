//! The GSM 03.38 character tables.
//!
//! Mappings checked against the Wikipedia GSM 03.38 article. Note that 0x09 is CAPITAL C with
//! cedilla (some references wrongly list the small letter).

/// The default alphabet: every single-byte code unit except 0x1B (escape to extension table).
pub static GSM_ENCODING_TABLE: [(char, u8); 127] = [
    ('@', 0x00),
    ('\u{00A3}', 0x01),
    ('$', 0x02),
    ('\u{00A5}', 0x03),
    ('\u{00E8}', 0x04),
    ('\u{00E9}', 0x05),
    ('\u{00F9}', 0x06),
    ('\u{00EC}', 0x07),
    ('\u{00F2}', 0x08),
    ('\u{00C7}', 0x09),
    ('\n', 0x0A),
    ('\u{00D8}', 0x0B),
    ('\u{00F8}', 0x0C),
    ('\r', 0x0D),
    ('\u{00C5}', 0x0E),
    ('\u{00E5}', 0x0F),
    ('\u{0394}', 0x10),
    ('_', 0x11),
    ('\u{03A6}', 0x12),
    ('\u{0393}', 0x13),
    ('\u{039B}', 0x14),
    ('\u{03A9}', 0x15),
    ('\u{03A0}', 0x16),
    ('\u{03A8}', 0x17),
    ('\u{03A3}', 0x18),
    ('\u{0398}', 0x19),
    ('\u{039E}', 0x1A),
    ('\u{00C6}', 0x1C),
    ('\u{00E6}', 0x1D),
    ('\u{00DF}', 0x1E),
    ('\u{00C9}', 0x1F),
    (' ', 0x20),
    ('!', 0x21),
    ('"', 0x22),
    ('#', 0x23),
    ('\u{00A4}', 0x24),
    ('%', 0x25),
    ('&', 0x26),
    ('\'', 0x27),
    ('(', 0x28),
    (')', 0x29),
    ('*', 0x2A),
    ('+', 0x2B),
    (',', 0x2C),
    ('-', 0x2D),
    ('.', 0x2E),
    ('/', 0x2F),
    ('0', 0x30),
    ('1', 0x31),
    ('2', 0x32),
    ('3', 0x33),
    ('4', 0x34),
    ('5', 0x35),
    ('6', 0x36),
    ('7', 0x37),
    ('8', 0x38),
    ('9', 0x39),
    (':', 0x3A),
    (';', 0x3B),
    ('<', 0x3C),
    ('=', 0x3D),
    ('>', 0x3E),
    ('?', 0x3F),
    ('\u{00A1}', 0x40),
    ('A', 0x41),
    ('B', 0x42),
    ('C', 0x43),
    ('D', 0x44),
    ('E', 0x45),
    ('F', 0x46),
    ('G', 0x47),
    ('H', 0x48),
    ('I', 0x49),
    ('J', 0x4A),
    ('K', 0x4B),
    ('L', 0x4C),
    ('M', 0x4D),
    ('N', 0x4E),
    ('O', 0x4F),
    ('P', 0x50),
    ('Q', 0x51),
    ('R', 0x52),
    ('S', 0x53),
    ('T', 0x54),
    ('U', 0x55),
    ('V', 0x56),
    ('W', 0x57),
    ('X', 0x58),
    ('Y', 0x59),
    ('Z', 0x5A),
    ('\u{00C4}', 0x5B),
    ('\u{00D6}', 0x5C),
    ('\u{00D1}', 0x5D),
    ('\u{00DC}', 0x5E),
    ('\u{00A7}', 0x5F),
    ('\u{00BF}', 0x60),
    ('a', 0x61),
    ('b', 0x62),
    ('c', 0x63),
    ('d', 0x64),
    ('e', 0x65),
    ('f', 0x66),
    ('g', 0x67),
    ('h', 0x68),
    ('i', 0x69),
    ('j', 0x6A),
    ('k', 0x6B),
    ('l', 0x6C),
    ('m', 0x6D),
    ('n', 0x6E),
    ('o', 0x6F),
    ('p', 0x70),
    ('q', 0x71),
    ('r', 0x72),
    ('s', 0x73),
    ('t', 0x74),
    ('u', 0x75),
    ('v', 0x76),
    ('w', 0x77),
    ('x', 0x78),
    ('y', 0x79),
    ('z', 0x7A),
    ('\u{00E4}', 0x7B),
    ('\u{00F6}', 0x7C),
    ('\u{00F1}', 0x7D),
    ('\u{00FC}', 0x7E),
    ('\u{00E0}', 0x7F)
];
/// The extension table, reached via the escape byte 0x1B.
///
/// 1B0D (CR2) and 1B1B (SS2) are control codes, and are deliberately left out.
pub static GSM_EXTENDED_ENCODING_TABLE: [(char, u8); 10] = [
    ('\u{000C}', 0x0A),
    ('^', 0x14),
    ('{', 0x28),
    ('}', 0x29),
    ('\\', 0x2F),
    ('[', 0x3C),
    ('~', 0x3D),
    (']', 0x3E),
    ('|', 0x40),
    ('\u{20AC}', 0x65)
];
/// Substitutes for characters outside the GSM charset. Every substitute must itself be in the
/// default alphabet or the extension table.
pub static TRANSLITERATION_TABLE: [(char, &str); 140] = [
    // latin1; entries marked (*) are rough approximations
    ('`', "'"),
    ('\u{00A0}', " "),
    ('\u{00A2}', "c"),
    ('\u{00A6}', "|"),
    ('\u{00A8}', "\""), // (*)
    ('\u{00A9}', "(c)"),
    ('\u{00AA}', "a"),
    ('\u{00AB}', "\""),
    ('\u{00AC}', "-"), // (*)
    ('\u{00AD}', "-"),
    ('\u{00AE}', "(r)"),
    ('\u{00AF}', "_"), // (*)
    ('\u{00B0}', "o"), // (*)
    ('\u{00B1}', "+/-"),
    ('\u{00B2}', "2"),
    ('\u{00B3}', "3"),
    ('\u{00B4}', "'"),
    ('\u{00B5}', "u"),
    ('\u{00B6}', "§"), // (*)
    ('\u{00B7}', "."),
    ('\u{00B8}', ","), // (*)
    ('\u{00B9}', "1"),
    ('\u{00BA}', "o"), // (*)
    ('\u{00BB}', "\""),
    ('\u{00BC}', "1/4"),
    ('\u{00BD}', "1/2"),
    ('\u{00BE}', "3/4"),
    ('\u{00C0}', "A"),
    ('\u{00C1}', "A"),
    ('\u{00C2}', "A"),
    ('\u{00C3}', "A"),
    ('\u{00C8}', "E"),
    ('\u{00CA}', "E"),
    ('\u{00CB}', "E"),
    ('\u{00CC}', "I"),
    ('\u{00CD}', "I"),
    ('\u{00CE}', "I"),
    ('\u{00CF}', "I"),
    ('\u{00D0}', "D"),
    ('\u{00D2}', "O"),
    ('\u{00D3}', "O"),
    ('\u{00D4}', "O"),
    ('\u{00D5}', "O"),
    ('\u{00D7}', "x"),
    ('\u{00D9}', "U"),
    ('\u{00DA}', "U"),
    ('\u{00DB}', "U"),
    ('\u{00DD}', "Y"),
    ('\u{00DE}', "TH"),
    ('\u{00E1}', "a"),
    ('\u{00E2}', "a"),
    ('\u{00E3}', "a"),
    ('\u{00E7}', "c"),
    ('\u{00EA}', "e"),
    ('\u{00EB}', "e"),
    ('\u{00ED}', "i"),
    ('\u{00EE}', "i"),
    ('\u{00EF}', "i"),
    ('\u{00F0}', "d"),
    ('\u{00F3}', "o"),
    ('\u{00F4}', "o"),
    ('\u{00F5}', "o"),
    ('\u{00F7}', "/"),
    ('\u{00FA}', "u"),
    ('\u{00FB}', "u"),
    ('\u{00FD}', "y"),
    ('\u{00FE}', "th"),
    ('\u{00FF}', "y"),
    // apostrophe look-alikes
    ('\u{2019}', "'"),
    ('\u{02BC}', "'"),
    ('\u{275C}', "'"),
    // French
    ('\u{0152}', "OE"),
    ('\u{0153}', "oe"),
    ('\u{0178}', "Y"),
    // Polish
    ('\u{0105}', "a"),
    ('\u{0104}', "A"),
    ('\u{0107}', "c"),
    ('\u{0106}', "C"),
    ('\u{0119}', "e"),
    ('\u{0118}', "E"),
    ('\u{0142}', "l"),
    ('\u{0141}', "L"),
    ('\u{0144}', "n"),
    ('\u{0143}', "N"),
    ('\u{015B}', "s"),
    ('\u{015A}', "S"),
    ('\u{017A}', "z"),
    ('\u{0179}', "Z"),
    ('\u{017C}', "z"),
    ('\u{017B}', "Z"),
    // Romanian
    ('\u{0218}', "S"),
    ('\u{0219}', "s"),
    ('\u{021A}', "T"),
    ('\u{021B}', "t"),
    ('\u{0102}', "A"),
    ('\u{0103}', "a"),
    // Greek capitals that look like latin ones
    ('\u{0391}', "A"),
    ('\u{0386}', "A"),
    ('\u{0392}', "B"),
    ('\u{0395}', "E"),
    ('\u{0388}', "E"),
    ('\u{0396}', "Z"),
    ('\u{0397}', "H"),
    ('\u{0389}', "H"),
    ('\u{0399}', "I"),
    ('\u{038A}', "I"),
    ('\u{039A}', "K"),
    ('\u{039C}', "M"),
    ('\u{039D}', "N"),
    ('\u{039F}', "O"),
    ('\u{038C}', "O"),
    ('\u{03A1}', "P"),
    ('\u{03A4}', "T"),
    ('\u{03A5}', "Y"),
    ('\u{038E}', "Y"),
    ('\u{03A7}', "X"),
    ('\u{038F}', "Ω"),
    // Czech and Slovak
    ('\u{010C}', "C"),
    ('\u{010D}', "c"),
    ('\u{0160}', "S"),
    ('\u{0161}', "s"),
    ('\u{0164}', "T"),
    ('\u{0165}', "t"),
    ('\u{017D}', "Z"),
    ('\u{017E}', "z"),
    ('\u{013D}', "L"),
    ('\u{013E}', "l"),
    ('\u{0147}', "N"),
    ('\u{0148}', "n"),
    ('\u{010E}', "D"),
    ('\u{010F}', "d"),
    ('\u{0139}', "L"),
    ('\u{013A}', "l"),
    ('\u{0155}', "r"),
    ('\u{011A}', "E"),
    ('\u{011B}', "e"),
    ('\u{0158}', "R"),
    ('\u{0159}', "r"),
    ('\u{016E}', "U"),
    ('\u{016F}', "u")
];
