//! Deterministic nonce generation as described in [RFC6979 § 3.2], using
//! HMAC-SHA-512 as the HMAC_DRBG.
//!
//! The message input is the truncated hash `z` produced by
//! [`hash_message`](crate::hash_message), so `bits2octets(h1)` is the 32-byte
//! big endian encoding of `z mod n`. Optional additional data is appended to
//! the seed as described in [RFC6979 § 3.6].
//!
//! [RFC6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2
//! [RFC6979 § 3.6]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.6

use crate::curve_parameters;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha512;
use zeroize::Zeroize;

type HmacSha512 = Hmac<Sha512>;

/// Size of an HMAC-SHA-512 output in bytes.
const HASH_SIZE: usize = 64;

/// Size of a serialized scalar in bytes.
const SCALAR_SIZE: usize = 32;

/// HMAC_DRBG instance producing the nonce candidates for one
/// (private key, message) pair.
///
/// Successive calls to [`NonceGenerator::next_nonce`] continue the RFC6979
/// sequence, which is what a signer must do when an attempt yields `r = 0`
/// or `s = 0`.
pub struct NonceGenerator {
    k: [u8; HASH_SIZE],
    v: [u8; HASH_SIZE],
    started: bool,
}

impl NonceGenerator {
    /// Seed the generator from a private scalar `x`, a truncated message hash
    /// `z` and optional additional data.
    pub fn new(x: &BigUint, z: &BigUint, additional_data: &[u8]) -> Self {
        let n = &curve_parameters().n;
        let mut x = int2octets(x);
        let h = int2octets(&(z % n));

        let mut generator = Self {
            k: [0x00; HASH_SIZE],
            v: [0x01; HASH_SIZE],
            started: false,
        };

        for separator in [0x00u8, 0x01] {
            generator.k = hmac(
                &generator.k,
                &[&generator.v, &[separator], &x, &h, additional_data],
            );
            generator.v = hmac(&generator.k, &[&generator.v]);
        }

        x.zeroize();
        generator
    }

    /// Returns the next nonce candidate in `[1, n-1]`.
    pub fn next_nonce(&mut self) -> BigUint {
        let curve = curve_parameters();

        loop {
            if self.started {
                self.k = hmac(&self.k, &[&self.v, &[0x00]]);
                self.v = hmac(&self.k, &[&self.v]);
            }
            self.started = true;

            // A single HMAC output covers the 256 bits of `n`; bits2int
            // keeps its leftmost bytes.
            self.v = hmac(&self.k, &[&self.v]);
            let k = BigUint::from_bytes_be(&self.v[..SCALAR_SIZE]);

            if curve.is_valid_scalar(&k) {
                return k;
            }

            trace!("RFC6979 nonce candidate out of range");
        }
    }
}

impl Drop for NonceGenerator {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

/// Big endian encoding of `x` left-padded to the size of a scalar.
fn int2octets(x: &BigUint) -> [u8; SCALAR_SIZE] {
    let bytes = x.to_bytes_be();
    let mut out = [0u8; SCALAR_SIZE];
    out[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// HMAC-SHA-512 of the concatenation of `parts`.
fn hmac(key: &[u8], parts: &[&[u8]]) -> [u8; HASH_SIZE] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any size");

    for part in parts {
        mac.update(part);
    }

    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}
