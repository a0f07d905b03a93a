use crate::TypeTemplate;
use alloc::{boxed::Box, format, string::String, vec::Vec};
use evmkit_primitives::{Address, Function, Signed, Uint};

/// 256-bit unsigned integer, the widest a Solidity `uintW` can be.
pub type U256 = Uint<256, 4>;
/// 256-bit signed integer, the widest a Solidity `intW` can be.
pub type I256 = Signed<256, 4>;

/// The library's user-facing representation of a Solidity value: a tagged
/// tree mirroring [`TypeTemplate`]'s shape, but carrying data instead of
/// type information.
///
/// Every numeric leaf stores its full-width magnitude alongside a bit width;
/// the width is validated against the surrounding [`TypeTemplate`] at encode
/// time and is preserved (not collapsed to a canonical width) through
/// decode, so a value decoded from a `uint40` template round-trips as a
/// `Uint(_, 40)`, not a `Uint(_, 256)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EVMValue {
    /// A 20-byte address.
    Address(Address),
    /// An unsigned integer with its declared bit width (`8..=256`, a multiple of 8).
    Uint(U256, usize),
    /// A signed integer with its declared bit width (`8..=256`, a multiple of 8).
    Int(I256, usize),
    /// A boolean.
    Bool(bool),
    /// A fixed-length byte string, `N <= 32`, right-padded to 32 bytes internally.
    FixedBytes([u8; 32], usize),
    /// A 24-byte Solidity `function` value (20-byte address, 4-byte selector).
    Function(Function),
    /// A dynamic-length byte string.
    Bytes(Vec<u8>),
    /// A UTF-8 string.
    String(String),
    /// An ordered tuple of values, optionally field-named by the originating template.
    Tuple(Vec<EVMValue>),
    /// A dynamically-sized homogeneous array.
    Array(Vec<EVMValue>),
    /// A fixed-size homogeneous array; the count is part of the type.
    FixedArray(Vec<EVMValue>),
}

impl EVMValue {
    /// Returns the [`TypeTemplate`] this value was shaped against, if it can
    /// be determined unambiguously. Returns `None` for an empty `Array`,
    /// whose element type cannot be recovered from the value alone.
    pub fn type_template(&self) -> Option<TypeTemplate> {
        let ty = match self {
            Self::Address(_) => TypeTemplate::Address,
            Self::Uint(_, w) => TypeTemplate::Uint(*w),
            Self::Int(_, w) => TypeTemplate::Int(*w),
            Self::Bool(_) => TypeTemplate::Bool,
            Self::FixedBytes(_, n) => TypeTemplate::FixedBytes(*n),
            Self::Function(_) => TypeTemplate::Function,
            Self::Bytes(_) => TypeTemplate::Bytes,
            Self::String(_) => TypeTemplate::String,
            Self::Tuple(members) => {
                TypeTemplate::Tuple(members.iter().map(Self::type_template).collect::<Option<_>>()?)
            }
            Self::Array(elems) => TypeTemplate::Array(Box::new(elems.first()?.type_template()?)),
            Self::FixedArray(elems) => {
                TypeTemplate::FixedArray(Box::new(elems.first()?.type_template()?), elems.len())
            }
        };
        Some(ty)
    }

    /// `true` if this value encodes to a single 32-byte word.
    pub const fn is_word(&self) -> bool {
        matches!(
            self,
            Self::Address(_)
                | Self::Uint(_, _)
                | Self::Int(_, _)
                | Self::Bool(_)
                | Self::FixedBytes(_, _)
                | Self::Function(_)
        )
    }

    /// The canonical Solidity type name for this value, e.g. `uint256` or
    /// `(address,uint256)[]`. `None` under the same conditions as
    /// [`Self::type_template`].
    pub fn sol_type_name(&self) -> Option<String> {
        self.type_template().map(|t| t.canonical())
    }

    /// Returns the inner tuple members, for either a `Tuple` or a
    /// `CustomStruct`-shaped value; `None` otherwise.
    pub fn as_tuple(&self) -> Option<&[EVMValue]> {
        match self {
            Self::Tuple(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Address> for EVMValue {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<bool> for EVMValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<u8>> for EVMValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<String> for EVMValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl core::fmt::Display for EVMValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Address(a) => write!(f, "{a}"),
            Self::Uint(v, _) => write!(f, "{v}"),
            Self::Int(v, _) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::FixedBytes(bytes, n) => write!(f, "0x{}", hex::encode(&bytes[..*n])),
            Self::Function(func) => write!(f, "{func}"),
            Self::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Self::String(s) => f.write_str(s),
            Self::Tuple(v) | Self::Array(v) | Self::FixedArray(v) => {
                write!(f, "(")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_template_roundtrips_scalars() {
        let v = EVMValue::Uint(U256::from(42u64), 64);
        assert_eq!(v.type_template(), Some(TypeTemplate::Uint(64)));
    }

    #[test]
    fn type_template_none_for_empty_array() {
        let v = EVMValue::Array(Vec::new());
        assert_eq!(v.type_template(), None);
    }

    #[test]
    fn type_template_recurses_into_tuple() {
        let v = EVMValue::Tuple(alloc::vec![
            EVMValue::Address(Address::ZERO),
            EVMValue::Bool(true),
        ]);
        assert_eq!(
            v.type_template(),
            Some(TypeTemplate::Tuple(alloc::vec![
                TypeTemplate::Address,
                TypeTemplate::Bool,
            ]))
        );
    }
}
