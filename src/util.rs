//! Small helpers shared by the converter and the error types: hex rendering of byte buffers, and
//! walking UTF-8 input one Unicode scalar at a time.
use std::fmt;
use std::str::{self, Chars};
use crate::errors::*;

/// Displays a byte buffer as uppercase hex, without separators (e.g. `1B65`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HexData<'a>(pub &'a [u8]);
impl<'a> fmt::Display for HexData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
       for b in self.0.iter() {
           write!(f, "{:02X}", b)?;
       }
       Ok(())
    }
}
impl<'a> HexData<'a> {
    /// Parse a hex string (two digits per byte, either case) back into bytes.
    pub fn decode(data: &str) -> GsmResult<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(GsmError::InvalidText(HexBuf(data.as_bytes().to_owned())));
        }
        data.as_bytes()
            .chunks(2)
            .map(|x| {
                str::from_utf8(x).ok()
                    .and_then(|x| u8::from_str_radix(x, 16).ok())
                    .ok_or_else(|| GsmError::InvalidText(HexBuf(x.to_owned())))
            })
            .collect()
    }
}
/// Owned counterpart of `HexData`, carried inside errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HexBuf(pub Vec<u8>);
impl fmt::Display for HexBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        HexData(&self.0).fmt(f)
    }
}
impl HexBuf {
    /// The UTF-8 encoding of a single character.
    pub fn from_char(c: char) -> Self {
        let mut buf = [0; 4];
        HexBuf(c.encode_utf8(&mut buf).as_bytes().to_owned())
    }
}
/// Validate `input` as UTF-8 and iterate over its Unicode scalars.
///
/// Fails with `InvalidText`, carrying the first invalid byte sequence, if the input isn't valid
/// UTF-8. Text has to be walked this way (and not byte by byte) so that multi-byte characters are
/// looked up whole.
pub fn scalars(input: &[u8]) -> GsmResult<Chars> {
    match str::from_utf8(input) {
        Ok(s) => Ok(s.chars()),
        Err(e) => {
            let start = e.valid_up_to();
            let end = match e.error_len() {
                Some(len) => start + len,
                // truncated sequence at the end of the input
                None => input.len()
            };
            Err(GsmError::InvalidText(HexBuf(input[start..end].to_owned())))
        }
    }
}
