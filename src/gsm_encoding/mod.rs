//! Conversion between the (annoying) GSM 7-bit encoding (GSM 03.38) and Unicode text.
//!
//! "The annoying GSM 7-bit encoding" is otherwise known as [GSM
//! 03.38](https://en.wikipedia.org/wiki/GSM_03.38), and that Wikipedia article is pretty
//! informative.
//!
//! Everything in this module works on **unpacked** septets: one byte per septet, high bit clear,
//! with characters from the extension table taking two septets (`0x1B` and the extension byte).
//! Use the `packing` module to get to and from the packed form that goes over the air.
//!
//! Text that isn't representable in GSM 03.38 can optionally be transliterated (e.g. `À` becomes
//! `A`, `½` becomes `1/2`), and anything still left over can be swapped for a replacement string.
use std::fmt;
use crate::errors::*;
use crate::util::{self, HexBuf};

mod charset;
pub mod lookup_tables;

pub use self::charset::{CharsetTable, TransliterationTable};
use self::lookup_tables::*;

/// The escape byte, which switches to the extension table for the next septet.
pub const ESCAPE: u8 = 0x1B;

/// One GSM 03.38 character, as encoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, is_enum_variant)]
pub enum CodeUnit {
    /// A character from the default alphabet, encoded as a single septet.
    Basic(u8),
    /// A character from the extension table, encoded as `0x1B` followed by this septet.
    Extended(u8)
}
impl CodeUnit {
    /// Number of septets this code unit takes up.
    pub fn len(&self) -> usize {
        match *self {
            CodeUnit::Basic(_) => 1,
            CodeUnit::Extended(_) => 2
        }
    }
    /// Append the septets for this code unit to `dest`.
    pub fn push_to(&self, dest: &mut Vec<u8>) {
        match *self {
            CodeUnit::Basic(b) => dest.push(b),
            CodeUnit::Extended(b) => {
                dest.push(ESCAPE);
                dest.push(b);
            }
        }
    }
    /// The septets for this code unit.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(2);
        self.push_to(&mut ret);
        ret
    }
    /// Read the code unit at the start of `input`, returning it along with the number of bytes
    /// consumed, or `None` if `input` is empty.
    ///
    /// This doesn't check that the code unit is actually in any charset table.
    pub fn read(input: &[u8]) -> GsmResult<Option<(CodeUnit, usize)>> {
        match input.get(0) {
            None => Ok(None),
            Some(&ESCAPE) => {
                let ext = input.get(1).ok_or(Malformation::EscapeAtEnd)?;
                Ok(Some((CodeUnit::Extended(*ext), 2)))
            },
            Some(&b) => Ok(Some((CodeUnit::Basic(b), 1)))
        }
    }
}
impl fmt::Display for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CodeUnit::Basic(b) => write!(f, "{:02X}", b),
            CodeUnit::Extended(b) => write!(f, "{:02X}{:02X}", ESCAPE, b)
        }
    }
}
/// Converts text between GSM 03.38 septets and Unicode.
///
/// Building one of these derives the reverse lookup and transliteration tables, so you'll want
/// to do it once and reuse it; `crate::converter()` hands out a shared instance built from the
/// default tables. A `Converter` is immutable once built, so it can be shared between threads
/// freely.
#[derive(Debug, Clone)]
pub struct Converter {
    charset: CharsetTable,
    transliterations: TransliterationTable
}
impl Converter {
    /// Build a converter from the default GSM 03.38 tables.
    pub fn new() -> GsmResult<Self> {
        Self::from_tables(&GSM_ENCODING_TABLE, &GSM_EXTENDED_ENCODING_TABLE, &TRANSLITERATION_TABLE)
    }
    /// Build a converter from custom tables.
    ///
    /// `basic` and `extended` are `(character, septet)` pairs for the default alphabet and the
    /// extension table respectively; `transliterations` maps characters to their substitutes.
    /// Fails with `InvalidTable` if the tables are inconsistent (see `CharsetTable::new` and
    /// `TransliterationTable::new`).
    pub fn from_tables(basic: &[(char, u8)], extended: &[(char, u8)], transliterations: &[(char, &str)]) -> GsmResult<Self> {
        let charset = CharsetTable::new(basic, extended)?;
        let transliterations = TransliterationTable::new(transliterations, &charset)?;
        debug!("built GSM 03.38 tables: {} code units, {} transliterations",
               charset.len(), transliterations.len());
        Ok(Self { charset, transliterations })
    }
    /// Get the underlying charset table.
    pub fn charset(&self) -> &CharsetTable {
        &self.charset
    }
    /// Get the code units `c` is transliterated to, if it has a transliteration.
    pub fn transliteration(&self, c: char) -> Option<&[CodeUnit]> {
        self.transliterations.get(c)
    }
    /// Decode a buffer of unpacked GSM 03.38 septets into a string.
    ///
    /// **Warning:** You need to unpack the data first; this method operates on unpacked septets,
    /// not packed septets. See the `packing` module for more.
    ///
    /// Fails with `MalformedInput` if the buffer ends with an escape byte, or contains a code unit
    /// that isn't in the charset table.
    pub fn decode(&self, input: &[u8]) -> GsmResult<String> {
        let mut ret = String::with_capacity(input.len());
        let mut offset = 0;
        while let Some((cu, len)) = CodeUnit::read(&input[offset..])? {
            let ch = self.charset.char_for(cu)
                .ok_or(Malformation::UnknownCharacter(cu))?;
            ret.push(ch);
            offset += len;
        }
        Ok(ret)
    }
    /// Tries to encode a character into the given destination buffer, returning `true` if the
    /// character was successfully encoded, and `false` if the character cannot be represented in
    /// the GSM 7-bit encoding (in which case `dest` is left alone).
    ///
    /// If `transliterate` is set, characters outside the charset are swapped for their
    /// transliteration, where one exists.
    pub fn try_encode_char(&self, c: char, transliterate: bool, dest: &mut Vec<u8>) -> bool {
        if let Some(cu) = self.charset.code_unit_for(c) {
            cu.push_to(dest);
            return true;
        }
        if transliterate {
            if let Some(cus) = self.transliterations.get(c) {
                trace!("transliterating {:?}", c);
                for cu in cus {
                    cu.push_to(dest);
                }
                return true;
            }
        }
        false
    }
    /// Checks whether `text` can be encoded without resorting to a replacement string; if this
    /// returns `false`, the text will have to be sent as UCS-2 to avoid losing anything.
    pub fn is_gsm_compatible(&self, text: &str, transliterate: bool) -> bool {
        text.chars().all(|c| {
            self.charset.code_unit_for(c).is_some()
                || (transliterate && self.transliterations.get(c).is_some())
        })
    }
    /// Encode a string as GSM 03.38, returning a buffer of **unpacked** septets.
    ///
    /// Characters are encoded directly if they're in the charset; failing that, transliterated
    /// (if `transliterate` is set and a transliteration exists); failing that, swapped for
    /// `replacement` (which may be empty, to drop the character). If there's no replacement,
    /// the conversion fails with `UnconvertibleCharacter`.
    ///
    /// The replacement is never transliterated: every character in it must be in the charset,
    /// or the conversion fails with `InvalidReplacement` before looking at `text`.
    ///
    /// **Warning:** The output of this function is unsuitable for transmission across the
    /// network; you need to pack the septets first! See the `packing` module for more.
    pub fn encode(&self, text: &str, transliterate: bool, replacement: Option<&str>) -> GsmResult<Vec<u8>> {
        let replacement = match replacement {
            Some(r) => Some(self.encode_replacement(r.chars())?),
            None => None
        };
        self.encode_chars(text.chars(), transliterate, replacement.as_ref().map(Vec::as_slice))
    }
    /// Like `encode`, but takes the text and replacement as raw bytes, which must be valid
    /// UTF-8 (or the conversion fails with `InvalidText`).
    pub fn encode_utf8(&self, text: &[u8], transliterate: bool, replacement: Option<&[u8]>) -> GsmResult<Vec<u8>> {
        let replacement = match replacement {
            Some(r) => Some(self.encode_replacement(util::scalars(r)?)?),
            None => None
        };
        self.encode_chars(util::scalars(text)?, transliterate, replacement.as_ref().map(Vec::as_slice))
    }
    /// Normalizes `text` to its closest GSM 03.38-representable form, while staying in Unicode.
    ///
    /// This is useful if your SMS gateway accepts UTF-8, but provides no way to force the GSM
    /// charset, and you want to avoid the message getting sent as UCS-2. It's just `encode`
    /// followed by `decode`.
    pub fn roundtrip(&self, text: &str, transliterate: bool, replacement: Option<&str>) -> GsmResult<String> {
        self.decode(&self.encode(text, transliterate, replacement)?)
    }
    /// Like `roundtrip`, but takes the text and replacement as raw bytes.
    pub fn roundtrip_utf8(&self, text: &[u8], transliterate: bool, replacement: Option<&[u8]>) -> GsmResult<String> {
        self.decode(&self.encode_utf8(text, transliterate, replacement)?)
    }
    fn encode_replacement<I>(&self, replacement: I) -> GsmResult<Vec<u8>>
        where I: Iterator<Item = char> {
        let mut ret = vec![];
        for c in replacement {
            let cu = self.charset.code_unit_for(c)
                .ok_or_else(|| GsmError::InvalidReplacement {
                    character: c,
                    utf8: HexBuf::from_char(c)
                })?;
            cu.push_to(&mut ret);
        }
        Ok(ret)
    }
    fn encode_chars<I>(&self, text: I, transliterate: bool, replacement: Option<&[u8]>) -> GsmResult<Vec<u8>>
        where I: Iterator<Item = char> {
        let mut ret = vec![];
        for c in text {
            if self.try_encode_char(c, transliterate, &mut ret) {
                continue;
            }
            match replacement {
                Some(r) => {
                    trace!("replacing unconvertible character {:?}", c);
                    ret.extend_from_slice(r);
                },
                None => Err(GsmError::UnconvertibleCharacter {
                    character: c,
                    utf8: HexBuf::from_char(c)
                })?
            }
        }
        Ok(ret)
    }
}
