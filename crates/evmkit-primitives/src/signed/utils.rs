use ruint::Uint;

/// Computes the two's complement of `value`: bitwise NOT, plus one, wrapping
/// within the type's bit width. Applying this twice returns the original
/// value; applied once it flips a value's effective sign within the fixed
/// width representation.
#[inline]
pub(crate) fn twos_complement<const BITS: usize, const LIMBS: usize>(
    value: Uint<BITS, LIMBS>,
) -> Uint<BITS, LIMBS> {
    if BITS == 0 || value.is_zero() {
        return value;
    }
    (!value).wrapping_add(Uint::<BITS, LIMBS>::from(1u64))
}

/// Plain equality helper used where pulling in `PartialEq` would create a
/// circular bound; just forwards to `==` on the limb arrays.
#[inline]
pub fn const_eq<const BITS: usize, const LIMBS: usize>(
    a: Uint<BITS, LIMBS>,
    b: Uint<BITS, LIMBS>,
) -> bool {
    a.as_limbs() == b.as_limbs()
}
