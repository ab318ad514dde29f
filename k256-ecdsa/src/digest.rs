//! Message hashing.
//!
//! Messages are hashed with SHA-512 and the digest is truncated to the bit
//! length of the group order by keeping its most significant bits. The same
//! rule must be applied when signing and verifying.

use crate::{CurveParameters, curve_parameters};
use num_bigint::BigUint;
use sha2::{Digest, Sha512};

impl CurveParameters {
    /// Returns the truncated SHA-512 hash of `message` as an integer.
    pub fn hash_message(&self, message: &[u8]) -> BigUint {
        let e = BigUint::from_bytes_be(&Sha512::digest(message));
        self.truncate_digest(&e)
    }

    /// Truncate a digest interpreted as a big endian integer `e`, keeping its
    /// top `bits(n)` significant bits:
    ///
    /// ```text
    /// z = e >> (bits(e) - bits(n))
    /// ```
    ///
    /// Digests no longer than the order are returned unchanged.
    pub fn truncate_digest(&self, e: &BigUint) -> BigUint {
        let z = match e.bits().checked_sub(self.order_bits()) {
            Some(shift) if shift > 0 => e >> shift,
            _ => e.clone(),
        };

        debug_assert!(z.bits() <= self.order_bits());
        z
    }
}

/// Returns the truncated SHA-512 hash of `message` for secp256k1.
///
/// See [`CurveParameters::hash_message`].
pub fn hash_message(message: &[u8]) -> BigUint {
    curve_parameters().hash_message(message)
}
