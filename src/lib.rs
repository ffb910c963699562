//! The `gsm-charset` library converts text between the GSM 03.38 7-bit SMS alphabet and Unicode,
//! and packs GSM septets into octets (and back) the way they're sent over the air.
//!
//! Outgoing text goes through `encode` and then `pack`; incoming data goes through `unpack` and
//! then `decode`. The two halves are independent: the `gsm_encoding` module deals with
//! characters, and the `packing` module deals with bits.
//!
//! ```rust,ignore
//! let septets = gsm_charset::encode("À bientôt!", true, Some("?"))?;
//! let octets = gsm_charset::pack(&septets)?;
//! // ...and on the other end:
//! let text = gsm_charset::decode(&gsm_charset::unpack(&octets))?;
//! assert_eq!(text, "A bientot!");
//! ```
//!
//! SMS transport, PDU framing and splitting messages into concatenated parts are out of scope;
//! `Converter::is_gsm_compatible` is the hook for deciding between GSM 7-bit and UCS-2.

#[macro_use] extern crate log;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate derive_is_enum_variant;
#[macro_use] extern crate lazy_static;

pub mod errors;
pub mod gsm_encoding;
pub mod packing;
pub mod util;

pub use crate::errors::{GsmError, GsmResult};
pub use crate::gsm_encoding::{CodeUnit, Converter};
pub use crate::packing::{pack, unpack};

lazy_static! {
    static ref CONVERTER: Converter = Converter::new()
        .expect("the built-in GSM 03.38 tables should be consistent!");
}

/// Get the shared converter, built from the default tables on first use.
pub fn converter() -> &'static Converter {
    &CONVERTER
}
/// Decode unpacked GSM 03.38 septets into a string, using the shared converter.
///
/// See `Converter::decode`.
pub fn decode(input: &[u8]) -> GsmResult<String> {
    CONVERTER.decode(input)
}
/// Encode a string into unpacked GSM 03.38 septets, using the shared converter.
///
/// See `Converter::encode`.
pub fn encode(text: &str, transliterate: bool, replacement: Option<&str>) -> GsmResult<Vec<u8>> {
    CONVERTER.encode(text, transliterate, replacement)
}
/// Normalize a string to its closest GSM 03.38-representable form, using the shared converter.
///
/// See `Converter::roundtrip`.
pub fn roundtrip(text: &str, transliterate: bool, replacement: Option<&str>) -> GsmResult<String> {
    CONVERTER.roundtrip(text, transliterate, replacement)
}
