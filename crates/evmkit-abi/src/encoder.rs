//! Head/tail ABI encoder.
//!
//! Values are appended through an offset-stack, matching the algorithm
//! Solidity's Contract ABI spec describes: for an ordered sequence of
//! values, all heads are appended first (in order), then all tails, and a
//! dynamic element's head is a `uint256` offset counted from the *start of
//! the enclosing sequence* — never globally. [`Encoder::push_offset`] opens
//! a new counter scope for that sequence; [`Encoder::bump_offset`] advances
//! it as each element's tail length becomes known; [`Encoder::pop_offset`]
//! closes the scope once the sequence is fully appended.

use crate::{EncodingError, EVMValue, TypeTemplate};
use alloc::vec::Vec;
use evmkit_primitives::B256;

type Word = B256;

/// Accumulates 32-byte words into an ABI-encoded byte string.
#[derive(Debug, Default)]
pub struct Encoder {
    words: Vec<Word>,
    offsets: Vec<u32>,
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single 32-byte word verbatim.
    pub fn append_word(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Appends the current offset (top of the open scope) as a `uint256`
    /// head word, for a dynamic element whose tail will be written later.
    pub fn append_indirection(&mut self) {
        let offset = *self.offsets.last().expect("append_indirection outside a sequence scope");
        self.append_u32(offset);
    }

    /// Appends a `uint256` length prefix for a dynamic sequence's tail.
    pub fn append_seq_len(&mut self, len: usize) {
        self.append_u32(len as u32);
    }

    /// Appends a length-prefixed, zero-right-padded packed byte sequence
    /// (the tail of a `bytes`/`string` value).
    pub fn append_packed_seq(&mut self, bytes: &[u8]) {
        self.append_seq_len(bytes.len());
        for chunk in bytes.chunks(32) {
            let mut word = [0u8; 32];
            word[..chunk.len()].copy_from_slice(chunk);
            self.words.push(Word::from(word));
        }
        if bytes.is_empty() {
            // zero-length payloads still need no extra word: the length
            // prefix already rounds up to a full (empty) tail.
        }
    }

    fn append_u32(&mut self, value: u32) {
        let mut word = [0u8; 32];
        word[28..].copy_from_slice(&value.to_be_bytes());
        self.words.push(Word::from(word));
    }

    /// Opens a new offset-counter scope for a sequence whose heads occupy
    /// `head_words` words; the counter starts at that many words' worth of
    /// bytes, since the first dynamic tail begins right after all heads.
    pub fn push_offset(&mut self, head_words: usize) {
        self.offsets.push((head_words as u32) * 32);
    }

    /// Advances the current scope's offset counter by `tail_words` words.
    pub fn bump_offset(&mut self, tail_words: usize) {
        if let Some(top) = self.offsets.last_mut() {
            *top += (tail_words as u32) * 32;
        }
    }

    /// Closes the current offset-counter scope.
    pub fn pop_offset(&mut self) {
        self.offsets.pop();
    }

    /// Consumes the encoder, returning the encoded byte string.
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.words.len() * 32);
        for word in &self.words {
            out.extend_from_slice(word.as_slice());
        }
        out
    }
}

/// Number of tail words a value contributes once encoded: `0` for a static
/// value (it has no tail, its content lives entirely in the head), and the
/// sequence's own head-plus-tail word count for a dynamic one.
fn tail_words(value: &EVMValue, ty: &TypeTemplate) -> Result<usize, EncodingError> {
    if !ty.is_dynamic() {
        return Ok(0);
    }
    Ok(match (ty, value) {
        (TypeTemplate::Bytes, EVMValue::Bytes(b)) => 1 + b.len().div_ceil(32),
        (TypeTemplate::String, EVMValue::String(s)) => 1 + s.len().div_ceil(32),
        (TypeTemplate::Array(elem), EVMValue::Array(values)) => {
            let mut words = 1;
            for v in values {
                words += elem.head_words() + tail_words(v, elem)?;
            }
            words
        }
        (TypeTemplate::FixedArray(elem, n), EVMValue::FixedArray(values)) if *n == values.len() => {
            let mut words = 0;
            for v in values {
                words += elem.head_words() + tail_words(v, elem)?;
            }
            words
        }
        (TypeTemplate::Tuple(types), EVMValue::Tuple(values)) if types.len() == values.len() => {
            let mut words = 0;
            for (t, v) in types.iter().zip(values) {
                words += t.head_words() + tail_words(v, t)?;
            }
            words
        }
        _ => return Err(EncodingError::Shape("value does not match dynamic type template".into())),
    })
}

/// `true` if a big-endian 32-byte unsigned value has no significant bits
/// above position `w`.
fn fits_unsigned_width(raw: &[u8; 32], w: usize) -> bool {
    let nbytes = w / 8;
    raw[..32 - nbytes].iter().all(|&b| b == 0)
}

/// `true` if a big-endian 32-byte two's-complement value is the correct
/// sign-extension of its low `w` bits, i.e. it round-trips through a `w`-bit
/// two's-complement representation.
fn fits_signed_width(raw: &[u8; 32], w: usize) -> bool {
    let nbytes = w / 8;
    let boundary = 32 - nbytes;
    let fill = if raw[boundary] & 0x80 != 0 { 0xFF } else { 0x00 };
    raw[..boundary].iter().all(|&b| b == fill)
}

fn encode_word(value: &EVMValue, ty: &TypeTemplate) -> Result<Word, EncodingError> {
    let mut word = [0u8; 32];
    match (ty, value) {
        (TypeTemplate::Address, EVMValue::Address(addr)) => {
            word[12..].copy_from_slice(addr.as_bytes());
        }
        (TypeTemplate::Bool, EVMValue::Bool(b)) => {
            word[31] = u8::from(*b);
        }
        (TypeTemplate::Uint(w), EVMValue::Uint(v, vw)) if w == vw => {
            let bytes = v.to_be_bytes::<32>();
            if *w < 256 && !fits_unsigned_width(&bytes, *w) {
                return Err(EncodingError::RangeOverflow);
            }
            word.copy_from_slice(&bytes);
        }
        (TypeTemplate::Int(w), EVMValue::Int(v, vw)) if w == vw => {
            let bytes = v.into_raw().to_be_bytes::<32>();
            if *w < 256 && !fits_signed_width(&bytes, *w) {
                return Err(EncodingError::RangeOverflow);
            }
            word.copy_from_slice(&bytes);
        }
        (TypeTemplate::FixedBytes(n), EVMValue::FixedBytes(bytes, vn)) if n == vn => {
            if *n == 0 || *n > 32 {
                return Err(EncodingError::BytesLength);
            }
            word[..*n].copy_from_slice(&bytes[..*n]);
        }
        (TypeTemplate::Function, EVMValue::Function(func)) => {
            word[..24].copy_from_slice(func.as_bytes());
        }
        _ => return Err(EncodingError::Shape("value does not match word type template".into())),
    }
    Ok(Word::from(word))
}

/// Encodes `values` against `template`, treating them as an ordered tuple
/// (the top-level function-argument or return-value sequence). Returns the
/// ABI calldata tail, without any selector.
pub fn encode(values: &[EVMValue], template: &[TypeTemplate]) -> Result<Vec<u8>, EncodingError> {
    if values.len() != template.len() {
        return Err(EncodingError::Shape("tuple arity mismatch".into()));
    }
    let mut enc = Encoder::new();
    encode_sequence(&mut enc, values, template)?;
    Ok(enc.finish())
}

fn encode_sequence(
    enc: &mut Encoder,
    values: &[EVMValue],
    types: &[TypeTemplate],
) -> Result<(), EncodingError> {
    let head_words: usize = types.iter().map(TypeTemplate::head_words).sum();
    enc.push_offset(head_words);
    let mut tails = Vec::with_capacity(values.len());
    for (v, t) in values.iter().zip(types) {
        if !t.matches(v) {
            return Err(EncodingError::Shape(format!(
                "value does not match template {}",
                t.canonical()
            )));
        }
        if t.is_dynamic() {
            enc.append_indirection();
        } else {
            encode_value(enc, v, t)?;
        }
        let tw = tail_words(v, t)?;
        enc.bump_offset(tw);
        tails.push(tw);
    }
    for (v, t) in values.iter().zip(types) {
        if t.is_dynamic() {
            encode_value(enc, v, t)?;
        }
    }
    enc.pop_offset();
    Ok(())
}

fn encode_value(enc: &mut Encoder, value: &EVMValue, ty: &TypeTemplate) -> Result<(), EncodingError> {
    match (ty, value) {
        (TypeTemplate::Bytes, EVMValue::Bytes(b)) => {
            enc.append_packed_seq(b);
        }
        (TypeTemplate::String, EVMValue::String(s)) => {
            enc.append_packed_seq(s.as_bytes());
        }
        (TypeTemplate::Array(elem), EVMValue::Array(values)) => {
            enc.append_seq_len(values.len());
            let types: Vec<_> = core::iter::repeat_with(|| (**elem).clone()).take(values.len()).collect();
            encode_sequence(enc, values, &types)?;
        }
        (TypeTemplate::FixedArray(elem, n), EVMValue::FixedArray(values)) if *n == values.len() => {
            let types: Vec<_> = core::iter::repeat_with(|| (**elem).clone()).take(values.len()).collect();
            if ty.is_dynamic() {
                encode_sequence(enc, values, &types)?;
            } else {
                for (v, t) in values.iter().zip(&types) {
                    encode_value(enc, v, t)?;
                }
            }
        }
        (TypeTemplate::Tuple(types), EVMValue::Tuple(values)) if types.len() == values.len() => {
            if ty.is_dynamic() {
                encode_sequence(enc, values, types)?;
            } else {
                for (v, t) in values.iter().zip(types) {
                    encode_value(enc, v, t)?;
                }
            }
        }
        _ => enc.append_word(encode_word(value, ty)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evmkit_primitives::Address;

    #[test]
    fn encodes_simple_static_tuple() {
        let values = [EVMValue::Uint(crate::value::U256::from(1u64), 256)];
        let types = [TypeTemplate::Uint(256)];
        let out = encode(&values, &types).unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(out[31], 1);
    }

    #[test]
    fn offsets_are_relative_to_enclosing_tuple() {
        // (string, string): offsets must be 0x40 and 0x80 relative to the
        // start of this 2-element tuple, not any enclosing one.
        let values = [
            EVMValue::String("hi".into()),
            EVMValue::String("bye".into()),
        ];
        let types = [TypeTemplate::String, TypeTemplate::String];
        let out = encode(&values, &types).unwrap();
        let first_offset = u64::from_be_bytes(out[24..32].try_into().unwrap());
        assert_eq!(first_offset, 0x40);
    }

    #[test]
    fn rejects_uint_overflow() {
        let values = [EVMValue::Uint(crate::value::U256::from(256u64), 8)];
        let types = [TypeTemplate::Uint(8)];
        assert!(matches!(
            encode(&values, &types),
            Err(EncodingError::RangeOverflow)
        ));
    }

    #[test]
    fn rejects_oversized_fixed_bytes_width() {
        // a template/value pair agreeing on n = 40 must still be rejected:
        // bytesN only exists for 1 <= N <= 32.
        let values = [EVMValue::FixedBytes([0u8; 32], 40)];
        let types = [TypeTemplate::FixedBytes(40)];
        assert!(matches!(
            encode(&values, &types),
            Err(EncodingError::BytesLength)
        ));
    }

    #[test]
    fn encodes_address_left_zero_padded() {
        let addr = Address::from([0x11u8; 20]);
        let values = [EVMValue::Address(addr)];
        let types = [TypeTemplate::Address];
        let out = encode(&values, &types).unwrap();
        assert_eq!(&out[..12], &[0u8; 12]);
        assert_eq!(&out[12..], addr.as_bytes());
    }
}
