//! Lookup structures built once from the static tables in `lookup_tables`.
use std::collections::HashMap;
use crate::errors::*;
use super::{CodeUnit, ESCAPE};

fn invalid(ch: char, reason: &'static str) -> GsmError {
    GsmError::InvalidTable {
        code_point: ch as u32,
        reason
    }
}
/// A bidirectional GSM 03.38 charset table: code unit to character, and back.
///
/// Both directions are total over the table's entries, since building the table fails if a code
/// unit or a character appears twice.
#[derive(Debug, Clone)]
pub struct CharsetTable {
    basic: [Option<char>; 128],
    extended: [Option<char>; 128],
    inverse: HashMap<char, CodeUnit>
}
impl CharsetTable {
    /// Build a table from the default alphabet (`basic`) and extension table (`extended`), given
    /// as `(character, byte)` pairs.
    pub fn new(basic: &[(char, u8)], extended: &[(char, u8)]) -> GsmResult<Self> {
        let mut ret = CharsetTable {
            basic: [None; 128],
            extended: [None; 128],
            inverse: HashMap::with_capacity(basic.len() + extended.len())
        };
        for &(ch, val) in basic.iter() {
            if val == ESCAPE {
                return Err(invalid(ch, "0x1B is reserved for the escape byte"));
            }
            ret.insert(ch, CodeUnit::Basic(val))?;
        }
        for &(ch, val) in extended.iter() {
            ret.insert(ch, CodeUnit::Extended(val))?;
        }
        Ok(ret)
    }
    fn insert(&mut self, ch: char, cu: CodeUnit) -> GsmResult<()> {
        let slot = match cu {
            CodeUnit::Basic(b) => self.basic.get_mut(b as usize),
            CodeUnit::Extended(b) => self.extended.get_mut(b as usize)
        };
        let slot = slot.ok_or_else(|| invalid(ch, "code unit has its high bit set"))?;
        if slot.is_some() {
            return Err(invalid(ch, "code unit is mapped more than once"));
        }
        if self.inverse.insert(ch, cu).is_some() {
            return Err(invalid(ch, "character is mapped more than once"));
        }
        *slot = Some(ch);
        Ok(())
    }
    /// Look up the character for a code unit.
    pub fn char_for(&self, cu: CodeUnit) -> Option<char> {
        match cu {
            CodeUnit::Basic(b) => self.basic.get(b as usize).cloned().and_then(|x| x),
            CodeUnit::Extended(b) => self.extended.get(b as usize).cloned().and_then(|x| x)
        }
    }
    /// Look up the code unit for a character.
    pub fn code_unit_for(&self, ch: char) -> Option<CodeUnit> {
        self.inverse.get(&ch).cloned()
    }
    /// Number of code units in the table (both the default alphabet and the extension table).
    pub fn len(&self) -> usize {
        self.inverse.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inverse.is_empty()
    }
    /// Iterate over all entries: the default alphabet first, then the extension table, each in
    /// code order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (CodeUnit, char)> + 'a {
        let basic = self.basic.iter()
            .enumerate()
            .filter_map(|(i, ch)| ch.map(|ch| (CodeUnit::Basic(i as u8), ch)));
        let extended = self.extended.iter()
            .enumerate()
            .filter_map(|(i, ch)| ch.map(|ch| (CodeUnit::Extended(i as u8), ch)));
        basic.chain(extended)
    }
}
/// Transliterations, resolved through a `CharsetTable` into code unit sequences.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    map: HashMap<char, Vec<CodeUnit>>
}
impl TransliterationTable {
    /// Resolve `(character, substitutes)` pairs against `charset`.
    ///
    /// Substitution is one level deep: every substitute must be directly in `charset`, and no
    /// transliterated character may itself be in `charset`.
    pub fn new(table: &[(char, &str)], charset: &CharsetTable) -> GsmResult<Self> {
        let mut map = HashMap::with_capacity(table.len());
        for &(ch, substitutes) in table.iter() {
            if charset.code_unit_for(ch).is_some() {
                return Err(invalid(ch, "transliterated character is already in the charset"));
            }
            if substitutes.is_empty() {
                return Err(invalid(ch, "transliteration has no substitutes"));
            }
            let cus = substitutes.chars()
                .map(|sub| charset.code_unit_for(sub)
                     .ok_or_else(|| invalid(sub, "substitute is not in the charset")))
                .collect::<GsmResult<Vec<_>>>()?;
            if map.insert(ch, cus).is_some() {
                return Err(invalid(ch, "character is transliterated more than once"));
            }
        }
        Ok(Self { map })
    }
    /// The code units to substitute for `ch`, if it has a transliteration.
    pub fn get(&self, ch: char) -> Option<&[CodeUnit]> {
        self.map.get(&ch).map(Vec::as_slice)
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::gsm_encoding::lookup_tables::*;

    fn charset() -> CharsetTable {
        CharsetTable::new(&GSM_ENCODING_TABLE, &GSM_EXTENDED_ENCODING_TABLE).unwrap()
    }
    #[test]
    fn default_alphabet_is_complete() {
        let cs = charset();
        for b in 0..0x80u8 {
            if b == ESCAPE {
                assert_eq!(cs.char_for(CodeUnit::Basic(b)), None);
            }
            else {
                assert!(cs.char_for(CodeUnit::Basic(b)).is_some(), "char {:02X} is missing", b);
            }
        }
        for &b in [0x0A, 0x14, 0x28, 0x29, 0x2F, 0x3C, 0x3D, 0x3E, 0x40, 0x65].iter() {
            assert!(cs.char_for(CodeUnit::Extended(b)).is_some(), "char 1B{:02X} is missing", b);
        }
        assert_eq!(cs.len(), 127 + 10);
        assert_eq!(cs.iter().count(), cs.len());
    }
    #[test]
    fn table_is_a_bijection() {
        let cs = charset();
        for (cu, ch) in cs.iter() {
            assert_eq!(cs.code_unit_for(ch), Some(cu));
            assert_eq!(cs.char_for(cu), Some(ch));
        }
    }
    #[test]
    fn out_of_range_lookups() {
        let cs = charset();
        assert_eq!(cs.char_for(CodeUnit::Basic(0x80)), None);
        assert_eq!(cs.char_for(CodeUnit::Extended(0xFF)), None);
        assert_eq!(cs.char_for(CodeUnit::Extended(0x00)), None);
        assert_eq!(cs.code_unit_for('汉'), None);
    }
    #[test]
    fn coverage() {
        let cs = charset();
        let tr = TransliterationTable::new(&TRANSLITERATION_TABLE, &cs).unwrap();
        let expected = [0x0A, 0x0C, 0x0D].iter().cloned()
            .chain(0x20..=0x7E)
            .chain(0xA0..=0xFF)
            .chain([0x0393, 0x0394, 0x0398, 0x039B, 0x039E, 0x03A0,
                    0x03A3, 0x03A6, 0x03A8, 0x03A9, 0x20AC].iter().cloned());
        for cp in expected {
            let ch = ::std::char::from_u32(cp).unwrap();
            assert!(cs.code_unit_for(ch).is_some() || tr.get(ch).is_some(),
                    "char U+{:04X} is missing", cp);
        }
    }
    #[test]
    fn greek_and_euro_are_direct() {
        let cs = charset();
        for &ch in ['Γ', 'Δ', 'Θ', 'Λ', 'Ξ', 'Π', 'Σ', 'Φ', 'Ψ', 'Ω', '€', '\n', '\u{000C}', '\r'].iter() {
            assert!(cs.code_unit_for(ch).is_some(), "{:?} is not in the charset", ch);
        }
    }
    #[test]
    fn transliterations_resolve() {
        let cs = charset();
        let tr = TransliterationTable::new(&TRANSLITERATION_TABLE, &cs).unwrap();
        assert_eq!(tr.len(), TRANSLITERATION_TABLE.len());
        assert_eq!(tr.get('½').unwrap(),
                   &[CodeUnit::Basic(0x31), CodeUnit::Basic(0x2F), CodeUnit::Basic(0x32)]);
        assert_eq!(tr.get('¦').unwrap(), &[CodeUnit::Extended(0x40)]);
        assert_eq!(tr.get('Ώ').unwrap(), &[CodeUnit::Basic(0x15)]);
        assert_eq!(tr.get('A'), None);
    }
    #[test]
    fn rejects_escape_in_default_alphabet() {
        let err = CharsetTable::new(&[('x', 0x1B)], &[]).unwrap_err();
        assert!(err.is_invalid_table());
    }
    #[test]
    fn rejects_high_bit() {
        let err = CharsetTable::new(&[('x', 0x80)], &[]).unwrap_err();
        assert!(err.is_invalid_table());
        let err = CharsetTable::new(&[], &[('x', 0xC0)]).unwrap_err();
        assert!(err.is_invalid_table());
    }
    #[test]
    fn rejects_duplicates() {
        let err = CharsetTable::new(&[('x', 0x01), ('y', 0x01)], &[]).unwrap_err();
        assert_eq!(err, GsmError::InvalidTable {
            code_point: 'y' as u32,
            reason: "code unit is mapped more than once"
        });
        let err = CharsetTable::new(&[('x', 0x01)], &[('x', 0x01)]).unwrap_err();
        assert_eq!(err, GsmError::InvalidTable {
            code_point: 'x' as u32,
            reason: "character is mapped more than once"
        });
        // the same byte in both tables is fine; they're different code units
        let cs = CharsetTable::new(&[('x', 0x01)], &[('y', 0x01)]).unwrap();
        assert_eq!(cs.len(), 2);
    }
    #[test]
    fn rejects_bad_transliterations() {
        let cs = CharsetTable::new(&[('a', 0x61), ('b', 0x62)], &[]).unwrap();
        assert!(TransliterationTable::new(&[('à', "a"), ('ß', "bb")], &cs).is_ok());
        assert!(TransliterationTable::new(&[('a', "b")], &cs).unwrap_err().is_invalid_table());
        assert!(TransliterationTable::new(&[('à', "")], &cs).unwrap_err().is_invalid_table());
        assert_eq!(TransliterationTable::new(&[('à', "ac")], &cs).unwrap_err(),
                   GsmError::InvalidTable {
                       code_point: 'c' as u32,
                       reason: "substitute is not in the charset"
                   });
        assert!(TransliterationTable::new(&[('à', "a"), ('à', "b")], &cs)
                .unwrap_err().is_invalid_table());
    }
}
