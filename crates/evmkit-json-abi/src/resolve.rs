//! Resolves a [`Param`]'s `type` string (plus, for tuples, its `components`)
//! into an [`evmkit_abi::TypeTemplate`].
//!
//! Grammar (spec §4.3):
//! ```text
//! base   := address | bool | string | function | bytes | bytesN | uintW | intW
//! type   := base | base'[]' | base'['K']' | tuple | tuple'[]' | tuple'['K']'
//! ```
//! `tuple` (and its array forms) defer to the accompanying `components` list
//! rather than being parsed from the string itself.

use crate::{AbiParseError, Param};
use alloc::{boxed::Box, string::ToString, vec::Vec};
use evmkit_abi::TypeTemplate;

/// Parses `param.ty`/`param.components` into a [`TypeTemplate`].
pub fn resolve(param: &Param) -> Result<TypeTemplate, AbiParseError> {
    let (base, suffixes) = split_array_suffixes(&param.ty)?;

    let mut ty = if base == "tuple" {
        let members = param
            .components
            .iter()
            .map(resolve)
            .collect::<Result<Vec<_>, _>>()?;
        TypeTemplate::Tuple(members)
    } else {
        parse_base(base)?
    };

    // suffixes were collected innermost-last (string order); apply them
    // from the last one parsed (closest to the base) outward.
    for suffix in suffixes.into_iter().rev() {
        ty = match suffix {
            Some(n) => TypeTemplate::FixedArray(Box::new(ty), n),
            None => TypeTemplate::Array(Box::new(ty)),
        };
    }
    Ok(ty)
}

/// Splits repeated trailing `[]`/`[K]` groups off a type string, returning
/// the base string and the suffixes in the order they appear (outermost
/// array last), e.g. `"uint256[2][]"` -> `("uint256", [Some(2), None])`.
fn split_array_suffixes(ty: &str) -> Result<(&str, Vec<Option<usize>>), AbiParseError> {
    let mut rest = ty;
    let mut suffixes = Vec::new();
    while let Some(stripped) = rest.strip_suffix(']') {
        let open = stripped
            .rfind('[')
            .ok_or_else(|| AbiParseError::BadType(ty.to_string()))?;
        let (base, count) = (&stripped[..open], &stripped[open + 1..]);
        let n = if count.is_empty() {
            None
        } else {
            Some(
                count
                    .parse::<usize>()
                    .map_err(|_| AbiParseError::BadType(ty.to_string()))?,
            )
        };
        suffixes.push(n);
        rest = base;
    }
    Ok((rest, suffixes))
}

fn parse_base(base: &str) -> Result<TypeTemplate, AbiParseError> {
    match base {
        "address" => Ok(TypeTemplate::Address),
        "bool" => Ok(TypeTemplate::Bool),
        "string" => Ok(TypeTemplate::String),
        "function" => Ok(TypeTemplate::Function),
        "bytes" => Ok(TypeTemplate::Bytes),
        _ => {
            if let Some(n) = base.strip_prefix("bytes") {
                let n: usize = n.parse().map_err(|_| AbiParseError::BadType(base.to_string()))?;
                if n == 0 || n > 32 {
                    return Err(AbiParseError::BadType(base.to_string()));
                }
                return Ok(TypeTemplate::FixedBytes(n));
            }
            if let Some(w) = base.strip_prefix("uint") {
                return parse_width(base, w).map(TypeTemplate::Uint);
            }
            if let Some(w) = base.strip_prefix("int") {
                return parse_width(base, w).map(TypeTemplate::Int);
            }
            Err(AbiParseError::BadType(base.to_string()))
        }
    }
}

fn parse_width(full: &str, digits: &str) -> Result<usize, AbiParseError> {
    let w: usize = digits.parse().map_err(|_| AbiParseError::BadType(full.to_string()))?;
    if TypeTemplate::is_valid_numeric_width(w) {
        Ok(w)
    } else {
        Err(AbiParseError::BadType(full.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: &str, components: Vec<Param>) -> Param {
        Param { name: String::new(), ty: ty.into(), components }
    }

    #[test]
    fn resolves_scalars() {
        assert_eq!(resolve(&param("address", vec![])).unwrap(), TypeTemplate::Address);
        assert_eq!(resolve(&param("uint256", vec![])).unwrap(), TypeTemplate::Uint(256));
        assert_eq!(resolve(&param("int8", vec![])).unwrap(), TypeTemplate::Int(8));
        assert_eq!(resolve(&param("bytes32", vec![])).unwrap(), TypeTemplate::FixedBytes(32));
    }

    #[test]
    fn rejects_invalid_width() {
        assert!(resolve(&param("uint7", vec![])).is_err());
        assert!(resolve(&param("bytes33", vec![])).is_err());
    }

    #[test]
    fn resolves_multi_dim_arrays() {
        let t = resolve(&param("uint256[2][]", vec![])).unwrap();
        assert_eq!(
            t,
            TypeTemplate::Array(Box::new(TypeTemplate::FixedArray(Box::new(TypeTemplate::Uint(256)), 2)))
        );
    }

    #[test]
    fn resolves_tuple_with_components() {
        let inner = vec![param("address", vec![]), param("uint256", vec![])];
        let t = resolve(&param("tuple[]", inner)).unwrap();
        assert_eq!(
            t,
            TypeTemplate::Array(Box::new(TypeTemplate::Tuple(vec![
                TypeTemplate::Address,
                TypeTemplate::Uint(256),
            ])))
        );
    }
}
