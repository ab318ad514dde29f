//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! This module contains support for computing and verifying ECDSA signatures
//! over secp256k1 with the message digest described in [`crate::digest`].
//!
//! ## Signing and verifying
//!
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use k256_ecdsa::ecdsa::{KeyPair, Verification};
//! use k256_ecdsa::rand_core::{OsRng, TryRngCore};
//!
//! let keypair = KeyPair::generate(&mut OsRng.unwrap_err());
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! let signature = keypair.private_key().sign(message);
//! assert_eq!(
//!     keypair.public_key().verify(message, &signature),
//!     Verification::Accepted
//! );
//! ```

pub mod hazmat;
#[cfg(feature = "rfc6979")]
pub mod rfc6979;

mod signing;
mod verifying;

pub use self::{
    signing::{KeyPair, PrivateKey},
    verifying::{PublicKey, Verification, verify_signature},
};

#[cfg(feature = "getrandom")]
pub use self::signing::{make_keypair, sign_message};

use crate::{Error, Result, curve_parameters};
use num_bigint::BigUint;

/// ECDSA/secp256k1 signature `(r, s)`.
///
/// Signatures produced by this crate always have both components in
/// `[1, n-1]`. Signatures built from caller-supplied integers may be out of
/// range; verification rejects them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components without range checks.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Create a signature from its components, returning
    /// [`Error::MalformedSignature`] unless both are in `[1, n-1]`.
    pub fn from_scalars(r: BigUint, s: BigUint) -> Result<Self> {
        let signature = Self::new(r, s);
        signature.validate()?;
        Ok(signature)
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Check that both components are in `[1, n-1]`.
    pub fn validate(&self) -> Result<()> {
        let curve = curve_parameters();

        if curve.is_valid_scalar(&self.r) && curve.is_valid_scalar(&self.s) {
            Ok(())
        } else {
            Err(Error::MalformedSignature)
        }
    }

    /// Is `s` in the upper half of `[1, n-1]`?
    pub fn is_high_s(&self) -> bool {
        let n = &curve_parameters().n;
        self.s > n >> 1u32
    }

    /// Normalize the signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Returns `None` if the signature is already normalized.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self) -> Option<Self> {
        if self.is_high_s() {
            let n = &curve_parameters().n;

            Some(Self {
                r: self.r.clone(),
                s: n - &self.s,
            })
        } else {
            None
        }
    }
}

impl From<Signature> for (BigUint, BigUint) {
    fn from(signature: Signature) -> (BigUint, BigUint) {
        signature.split_scalars()
    }
}
