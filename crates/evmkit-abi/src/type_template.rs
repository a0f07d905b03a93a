use crate::EVMValue;
use alloc::{boxed::Box, format, string::String, vec::Vec};

/// Describes the expected shape of an [`EVMValue`] without carrying data:
/// widths, element counts, and nesting. Produced by the ABI-JSON parser,
/// consumed by the encoder (to validate a value tree before encoding) and
/// the decoder (to drive extraction from a byte string).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTemplate {
    /// `address`.
    Address,
    /// `uintW`, `8 <= W <= 256`, `W % 8 == 0`.
    Uint(usize),
    /// `intW`, `8 <= W <= 256`, `W % 8 == 0`.
    Int(usize),
    /// `bool`.
    Bool,
    /// `bytesN`, `1 <= N <= 32`.
    FixedBytes(usize),
    /// `function`.
    Function,
    /// `bytes`.
    Bytes,
    /// `string`.
    String,
    /// `(t1,t2,...)`.
    Tuple(Vec<TypeTemplate>),
    /// `T[]`.
    Array(Box<TypeTemplate>),
    /// `T[K]`.
    FixedArray(Box<TypeTemplate>, usize),
}

impl TypeTemplate {
    /// Whether this type occupies variable-length tail storage rather than
    /// a fixed number of head slots.
    ///
    /// Dynamic iff: `Bytes`, `String`, a dynamic `Array`, a `FixedArray`
    /// whose element is dynamic, or a `Tuple` containing any dynamic member.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::Bytes | Self::String | Self::Array(_) => true,
            Self::FixedArray(elem, _) => elem.is_dynamic(),
            Self::Tuple(members) => members.iter().any(Self::is_dynamic),
            Self::Address
            | Self::Uint(_)
            | Self::Int(_)
            | Self::Bool
            | Self::FixedBytes(_)
            | Self::Function => false,
        }
    }

    /// The number of 32-byte head slots this type occupies: `1` for a
    /// dynamic type (the offset word), and the sum of its elements' head
    /// slots for a static tuple/fixed-array, `1` for any other static type.
    pub fn head_words(&self) -> usize {
        if self.is_dynamic() {
            return 1;
        }
        match self {
            Self::Tuple(members) => members.iter().map(Self::head_words).sum(),
            Self::FixedArray(elem, n) => elem.head_words() * n,
            _ => 1,
        }
    }

    /// `true` if `value`'s shape matches this template: same variant,
    /// matching widths/lengths, and recursively matching members.
    pub fn matches(&self, value: &EVMValue) -> bool {
        match (self, value) {
            (Self::Address, EVMValue::Address(_))
            | (Self::Bool, EVMValue::Bool(_))
            | (Self::Bytes, EVMValue::Bytes(_))
            | (Self::String, EVMValue::String(_))
            | (Self::Function, EVMValue::Function(_)) => true,
            (Self::Uint(w), EVMValue::Uint(_, vw)) => w == vw,
            (Self::Int(w), EVMValue::Int(_, vw)) => w == vw,
            (Self::FixedBytes(n), EVMValue::FixedBytes(_, vn)) => n == vn,
            (Self::Tuple(types), EVMValue::Tuple(values)) => {
                types.len() == values.len()
                    && types.iter().zip(values).all(|(t, v)| t.matches(v))
            }
            (Self::Array(elem), EVMValue::Array(values)) => values.iter().all(|v| elem.matches(v)),
            (Self::FixedArray(elem, n), EVMValue::FixedArray(values)) => {
                values.len() == *n && values.iter().all(|v| elem.matches(v))
            }
            _ => false,
        }
    }

    /// Renders the canonical Solidity type string used in selector
    /// preimages, e.g. `uint256`, `address`, or `(address,uint256)[]`.
    pub fn canonical(&self) -> String {
        match self {
            Self::Address => "address".into(),
            Self::Uint(w) => format!("uint{w}"),
            Self::Int(w) => format!("int{w}"),
            Self::Bool => "bool".into(),
            Self::FixedBytes(n) => format!("bytes{n}"),
            Self::Function => "function".into(),
            Self::Bytes => "bytes".into(),
            Self::String => "string".into(),
            Self::Tuple(members) => {
                let inner = members
                    .iter()
                    .map(Self::canonical)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("({inner})")
            }
            Self::Array(elem) => format!("{}[]", elem.canonical()),
            Self::FixedArray(elem, n) => format!("{}[{n}]", elem.canonical()),
        }
    }

    /// `true` if this is a well-formed numeric width: `8 <= w <= 256` and a
    /// multiple of `8`. The ABI-JSON parser rejects `Uint`/`Int` templates
    /// that fail this check before they ever reach the codec.
    pub const fn is_valid_numeric_width(w: usize) -> bool {
        w > 0 && w <= 256 && w % 8 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_scalars_are_not_dynamic() {
        assert!(!TypeTemplate::Uint(256).is_dynamic());
        assert!(!TypeTemplate::Address.is_dynamic());
        assert!(!TypeTemplate::FixedBytes(32).is_dynamic());
    }

    #[test]
    fn bytes_and_string_are_dynamic() {
        assert!(TypeTemplate::Bytes.is_dynamic());
        assert!(TypeTemplate::String.is_dynamic());
    }

    #[test]
    fn fixed_array_of_dynamic_is_dynamic() {
        let t = TypeTemplate::FixedArray(Box::new(TypeTemplate::String), 3);
        assert!(t.is_dynamic());
    }

    #[test]
    fn tuple_with_dynamic_member_is_dynamic() {
        let t = TypeTemplate::Tuple(alloc::vec![TypeTemplate::Uint(256), TypeTemplate::Bytes]);
        assert!(t.is_dynamic());
    }

    #[test]
    fn head_words_sums_static_tuple() {
        let t = TypeTemplate::Tuple(alloc::vec![TypeTemplate::Address, TypeTemplate::Bool]);
        assert_eq!(t.head_words(), 2);
    }

    #[test]
    fn head_words_is_one_for_dynamic() {
        assert_eq!(TypeTemplate::Bytes.head_words(), 1);
        let t = TypeTemplate::Tuple(alloc::vec![TypeTemplate::Uint(8), TypeTemplate::String]);
        assert_eq!(t.head_words(), 1);
    }

    #[test]
    fn canonical_rendering_matches_solidity() {
        let t = TypeTemplate::Array(Box::new(TypeTemplate::Tuple(alloc::vec![
            TypeTemplate::Address,
            TypeTemplate::Uint(256),
        ])));
        assert_eq!(t.canonical(), "(address,uint256)[]");
    }

    #[test]
    fn numeric_width_validation() {
        assert!(TypeTemplate::is_valid_numeric_width(8));
        assert!(TypeTemplate::is_valid_numeric_width(256));
        assert!(!TypeTemplate::is_valid_numeric_width(7));
        assert!(!TypeTemplate::is_valid_numeric_width(264));
        assert!(!TypeTemplate::is_valid_numeric_width(0));
    }
}
