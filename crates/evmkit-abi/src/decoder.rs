//! Head/tail ABI decoder.
//!
//! Mirrors [`crate::encoder`]: a cursor over the input buffer exposes
//! `take_word`/`take_u32`/`take_indirection` for reading head values and
//! following offset pointers, plus `take_slice` for tail payloads. Offsets
//! are validated against the buffer bounds; this decoder does not re-encode
//! to check for canonical round-tripping (the teacher's `validate` flag),
//! since the contract here is "extract a value tree", not "verify a byte
//! string is canonical ABI".

use crate::{DecodingError, EVMValue, TypeTemplate};
use alloc::{string::String, vec::Vec};
use evmkit_primitives::{Address, Function, B256};

type Word = B256;

/// A cursor over an ABI-encoded byte string.
///
/// `offset` is the live read cursor, advanced word by word as head values
/// are consumed. `base` is the start of the *enclosing* head/tail sequence
/// currently being read (the top-level argument tuple, or the tail region a
/// dynamic value's own offset word pointed into) — every indirection is
/// resolved against `base`, never against the moving `offset`, per the ABI
/// rule that a dynamic head offset is measured from the start of its
/// enclosing sequence.
#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    offset: usize,
    base: usize,
}

impl<'a> Decoder<'a> {
    /// Wraps `buf` with a cursor starting at offset zero.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0, base: 0 }
    }

    /// A child decoder over the same buffer, rebased so its own offset zero
    /// is `self`'s enclosing sequence start (`base`) plus `at` bytes.
    fn child(&self, at: usize) -> Result<Decoder<'a>, DecodingError> {
        let base = self.base.checked_add(at).ok_or(DecodingError::OffsetOutOfRange)?;
        if base > self.buf.len() {
            return Err(DecodingError::OffsetOutOfRange);
        }
        Ok(Self { buf: self.buf, offset: base, base })
    }

    fn peek(&self, len: usize) -> Result<&'a [u8], DecodingError> {
        let end = self.offset.checked_add(len).ok_or(DecodingError::Truncated)?;
        self.buf.get(self.offset..end).ok_or(DecodingError::Truncated)
    }

    /// Reads the next 32-byte word without advancing.
    pub fn peek_word(&self) -> Result<Word, DecodingError> {
        let bytes = self.peek(32)?;
        let mut word = [0u8; 32];
        word.copy_from_slice(bytes);
        Ok(Word::from(word))
    }

    /// Reads the next 32-byte word and advances past it.
    pub fn take_word(&mut self) -> Result<Word, DecodingError> {
        let word = self.peek_word()?;
        self.offset += 32;
        Ok(word)
    }

    /// Reads the next word as a length/offset `u32`, rejecting values that
    /// could not possibly index into this buffer.
    pub fn take_u32(&mut self) -> Result<u32, DecodingError> {
        let word = self.take_word()?;
        let bytes = word.as_slice();
        if bytes[..28].iter().any(|&b| b != 0) {
            return Err(DecodingError::LengthOutOfRange);
        }
        Ok(u32::from_be_bytes(bytes[28..].try_into().unwrap()))
    }

    /// Consumes a head offset word and returns a child decoder positioned at
    /// the tail content it points to.
    pub fn take_indirection(&mut self) -> Result<Decoder<'a>, DecodingError> {
        let ptr = self.take_u32()? as usize;
        self.child(ptr)
    }

    /// Consumes `len` raw bytes, skipping the zero-padding up to the next
    /// 32-byte boundary.
    pub fn take_slice(&mut self, len: usize) -> Result<&'a [u8], DecodingError> {
        let bytes = self.peek(len)?;
        let padded = len.div_ceil(32) * 32;
        if self.offset + padded > self.buf.len() {
            return Err(DecodingError::Truncated);
        }
        self.offset += padded;
        Ok(bytes)
    }
}

/// Decodes `data` against `template`, an ordered tuple of types (the
/// top-level function-argument or return-value sequence).
pub fn decode(data: &[u8], template: &[TypeTemplate]) -> Result<Vec<EVMValue>, DecodingError> {
    let mut dec = Decoder::new(data);
    decode_sequence(&mut dec, template)
}

/// Decodes one head/tail sequence (a function's argument tuple, a `Tuple`
/// value, or the element list of an `Array`/`FixedArray`).
///
/// Rebases `dec`'s indirection anchor to the sequence's own head start for
/// the duration of the call, then restores the caller's anchor — so a
/// dynamic element's offset word, wherever it's read from, resolves against
/// *this* sequence's start rather than the enclosing one's.
fn decode_sequence(dec: &mut Decoder<'_>, types: &[TypeTemplate]) -> Result<Vec<EVMValue>, DecodingError> {
    let outer_base = dec.base;
    dec.base = dec.offset;
    let mut values = Vec::with_capacity(types.len());
    for ty in types {
        values.push(decode_value(dec, ty)?);
    }
    dec.base = outer_base;
    Ok(values)
}

fn decode_value(dec: &mut Decoder<'_>, ty: &TypeTemplate) -> Result<EVMValue, DecodingError> {
    if ty.is_dynamic() {
        let mut child = dec.take_indirection()?;
        return decode_dynamic(&mut child, ty);
    }
    match ty {
        TypeTemplate::Tuple(types) => Ok(EVMValue::Tuple(decode_sequence(dec, types)?)),
        TypeTemplate::FixedArray(elem, n) => {
            let types: Vec<_> = core::iter::repeat_with(|| (**elem).clone()).take(*n).collect();
            Ok(EVMValue::FixedArray(decode_sequence(dec, &types)?))
        }
        _ => decode_word(dec, ty),
    }
}

fn decode_dynamic(dec: &mut Decoder<'_>, ty: &TypeTemplate) -> Result<EVMValue, DecodingError> {
    match ty {
        TypeTemplate::Bytes => Ok(EVMValue::Bytes(decode_bytes(dec)?)),
        TypeTemplate::String => {
            let bytes = decode_bytes(dec)?;
            let s = String::from_utf8(bytes).map_err(|_| DecodingError::BadUtf8)?;
            Ok(EVMValue::String(s))
        }
        TypeTemplate::Array(elem) => {
            let len = dec.take_u32()? as usize;
            let types: Vec<_> = core::iter::repeat_with(|| (**elem).clone()).take(len).collect();
            Ok(EVMValue::Array(decode_sequence(dec, &types)?))
        }
        TypeTemplate::FixedArray(elem, n) => {
            let types: Vec<_> = core::iter::repeat_with(|| (**elem).clone()).take(*n).collect();
            Ok(EVMValue::FixedArray(decode_sequence(dec, &types)?))
        }
        TypeTemplate::Tuple(types) => Ok(EVMValue::Tuple(decode_sequence(dec, types)?)),
        _ => unreachable!("is_dynamic() only returns true for the variants handled above"),
    }
}

fn decode_bytes(dec: &mut Decoder<'_>) -> Result<Vec<u8>, DecodingError> {
    let len = dec.take_u32()? as usize;
    Ok(dec.take_slice(len)?.to_vec())
}

fn decode_word(dec: &mut Decoder<'_>, ty: &TypeTemplate) -> Result<EVMValue, DecodingError> {
    let word = dec.take_word()?;
    let bytes = word.as_slice();
    let value = match ty {
        TypeTemplate::Address => {
            let mut addr = [0u8; 20];
            addr.copy_from_slice(&bytes[12..]);
            EVMValue::Address(Address::from(addr))
        }
        TypeTemplate::Bool => EVMValue::Bool(bytes[31] != 0),
        TypeTemplate::Uint(w) => {
            let v = crate::value::U256::from_be_bytes::<32>(bytes.try_into().unwrap());
            EVMValue::Uint(v, *w)
        }
        TypeTemplate::Int(w) => {
            // the sign comes from the word's most significant bit, the
            // remaining bits are interpreted as two's-complement regardless
            // of the template's declared width.
            let raw = crate::value::U256::from_be_bytes::<32>(bytes.try_into().unwrap());
            let signed = crate::value::I256::from_raw(raw);
            EVMValue::Int(signed, *w)
        }
        TypeTemplate::FixedBytes(n) => {
            if *n == 0 || *n > 32 {
                return Err(DecodingError::LengthOutOfRange);
            }
            let mut buf = [0u8; 32];
            buf[..*n].copy_from_slice(&bytes[..*n]);
            EVMValue::FixedBytes(buf, *n)
        }
        TypeTemplate::Function => {
            let mut buf = [0u8; 24];
            buf.copy_from_slice(&bytes[..24]);
            EVMValue::Function(Function::from(buf))
        }
        _ => unreachable!("decode_word is only called for static scalar templates"),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_uint_via_encoder() {
        let values = [EVMValue::Uint(crate::value::U256::from(1234u64), 256)];
        let types = [TypeTemplate::Uint(256)];
        let bytes = crate::encoder::encode(&values, &types).unwrap();
        let decoded = decode(&bytes, &types).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn roundtrips_dynamic_strings() {
        let values = [
            EVMValue::String("hello".into()),
            EVMValue::String("world, this is a longer string".into()),
        ];
        let types = [TypeTemplate::String, TypeTemplate::String];
        let bytes = crate::encoder::encode(&values, &types).unwrap();
        let decoded = decode(&bytes, &types).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn roundtrips_array_of_dynamic_strings() {
        let values = [EVMValue::Array(alloc::vec![
            EVMValue::String("a".into()),
            EVMValue::String("longer second element".into()),
        ])];
        let types = [TypeTemplate::Array(alloc::boxed::Box::new(TypeTemplate::String))];
        let bytes = crate::encoder::encode(&values, &types).unwrap();
        let decoded = decode(&bytes, &types).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn roundtrips_tuple_mixing_static_and_dynamic_fields() {
        let values = [EVMValue::Tuple(alloc::vec![
            EVMValue::Uint(crate::value::U256::from(7u64), 256),
            EVMValue::String("tail payload".into()),
        ])];
        let types = [TypeTemplate::Tuple(alloc::vec![TypeTemplate::Uint(256), TypeTemplate::String])];
        let bytes = crate::encoder::encode(&values, &types).unwrap();
        let decoded = decode(&bytes, &types).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn rejects_offset_past_buffer_end() {
        // offset word = 0xffffffff, nowhere near the 32-byte buffer
        let mut bad = [0u8; 32];
        bad[28..].copy_from_slice(&0xffff_ffffu32.to_be_bytes());
        let mut dec = Decoder::new(&bad);
        assert!(dec.take_indirection().is_err());
    }

    #[test]
    fn rejects_invalid_utf8() {
        // length = 4, payload = invalid utf-8 bytes, matching the teacher's
        // "decode_broken_utf8" fixture shape but expecting a hard error
        // here instead of lossy replacement.
        let mut data = Vec::new();
        data.extend_from_slice(&[0u8; 31]);
        data.push(4);
        data.extend_from_slice(&[0xe4, 0xb8, 0x8d, 0xe5]);
        data.extend_from_slice(&[0u8; 28]);
        let types = [TypeTemplate::String];
        assert!(matches!(decode(&data, &types), Err(DecodingError::BadUtf8)));
    }
}
