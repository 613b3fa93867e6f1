//! Conversion utilities.

use num::BigUint;

/// Converts a `BigUint` to a `u64`. Returns `None` if the value does not fit
/// into 64 bits.
pub fn biguint_to_u64(i: &BigUint) -> Option<u64> {
    u64::try_from(i).ok()
}

pub fn u64_to_biguint(i: u64) -> BigUint {
    BigUint::from(i)
}
