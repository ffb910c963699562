use crate::gsm_encoding::CodeUnit;
use crate::util::HexBuf;

/// Reasons a buffer of unpacked septets can't be decoded as GSM 03.38.
#[derive(Fail, Debug, Clone, PartialEq, Eq, is_enum_variant)]
pub enum Malformation {
    #[fail(display = "it contains an ESC char at the end of the input")]
    EscapeAtEnd,
    #[fail(display = "char {} is unknown", _0)]
    UnknownCharacter(CodeUnit)
}
#[derive(Fail, Debug, Clone, PartialEq, Eq, is_enum_variant)]
pub enum GsmError {
    #[fail(display = "The input is not valid GSM 03.38: {}", _0)]
    MalformedInput(#[cause] Malformation),
    #[fail(display = "The input is not valid UTF-8: invalid sequence {}", _0)]
    InvalidText(HexBuf),
    #[fail(display = "Replacement must contain only GSM 03.38 compatible chars; UTF-8 character {} is not", utf8)]
    InvalidReplacement {
        character: char,
        utf8: HexBuf
    },
    #[fail(display = "UTF-8 character {} cannot be converted, and no replacement has been provided", utf8)]
    UnconvertibleCharacter {
        character: char,
        utf8: HexBuf
    },
    #[fail(display = "Septet {:02X} has its high bit set", _0)]
    InvalidSeptet(u8),
    #[fail(display = "Invalid lookup table entry for U+{:04X}: {}", code_point, reason)]
    InvalidTable {
        code_point: u32,
        reason: &'static str
    }
}
impl From<Malformation> for GsmError {
    fn from(e: Malformation) -> GsmError {
        GsmError::MalformedInput(e)
    }
}
pub type GsmResult<T> = Result<T, GsmError>;
