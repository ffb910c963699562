//! Packing GSM 7-bit septets into octets, and back again.
//!
//! Over the air, GSM 03.38 text isn't sent one septet per byte: the low 7 bits of every septet
//! are laid end to end (least significant bit first) and the resulting bitstream is chopped up
//! into octets, so that 8 septets fit into 7 octets. If the septet count isn't a multiple of 8,
//! the last octet is padded with zero bits.
//!
//! **NB:** Because of that padding, a message ending in a zero septet (`@`, in GSM 03.38) packs
//! to exactly the same octets as the message without it, whenever the septet count is a multiple
//! of 8. `unpack` always picks the shorter interpretation; if you need to tell the two apart,
//! you'll have to keep track of the septet count yourself (SMS PDUs carry it in the user data
//! length field).
use crate::errors::*;

/// Number of octets `septets` septets pack into.
pub fn packed_len(septets: usize) -> usize {
    (septets * 7 + 7) / 8
}
/// Pack a buffer of septets into octets.
///
/// Fails with `InvalidSeptet` if any byte has its high bit set. The output is always
/// `packed_len(septets.len())` bytes long; the final octet is zero-padded if need be.
pub fn pack(septets: &[u8]) -> GsmResult<Vec<u8>> {
    let mut ret = Vec::with_capacity(packed_len(septets.len()));
    // Bits that haven't been written out yet, and how many of them there are (0-7, between
    // septets).
    let mut carry: u16 = 0;
    let mut bits = 0;
    for &septet in septets.iter() {
        if septet & 0b1000_0000 != 0 {
            return Err(GsmError::InvalidSeptet(septet));
        }
        carry |= (septet as u16) << bits;
        bits += 7;
        if bits >= 8 {
            ret.push(carry as u8);
            carry >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 {
        ret.push(carry as u8);
    }
    Ok(ret)
}
/// Unpack a buffer of octets into septets.
///
/// Every input is valid. Leftover bits at the end that don't make up a whole septet are padding,
/// and are dropped. If the last octet completes a whole extra septet (i.e. the input length is a
/// multiple of 7) and that septet is zero, it's dropped too: see the module docs.
pub fn unpack(octets: &[u8]) -> Vec<u8> {
    let mut ret = Vec::with_capacity(octets.len() * 8 / 7);
    let mut carry: u16 = 0;
    // Number of bits in `carry` (0-6, between octets).
    let mut bits = 0;
    for (i, &octet) in octets.iter().enumerate() {
        carry |= (octet as u16) << bits;
        ret.push((carry & 0b0111_1111) as u8);
        carry >>= 7;
        bits += 1;
        if bits == 7 {
            // Every 7th octet leaves a whole septet in the carry.
            if i + 1 < octets.len() || carry != 0 {
                ret.push(carry as u8);
            }
            else {
                trace!("dropping ambiguous trailing zero septet");
            }
            carry = 0;
            bits = 0;
        }
    }
    ret
}
