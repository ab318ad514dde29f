//! ECDSA signing and key generation.

use super::{PublicKey, Signature, hazmat};
use crate::{Error, Result, curve_parameters};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRng;
use zeroize::Zeroize;

#[cfg(feature = "getrandom")]
use rand_core::{OsRng, TryRngCore};

/// Size of a serialized scalar in bytes.
const SCALAR_SIZE: usize = 32;

/// ECDSA/secp256k1 private key: a secret scalar `d` in `[1, n-1]`.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey {
    d: BigUint,
}

impl PrivateKey {
    /// Initialize a private key from a scalar, returning
    /// [`Error::ScalarOutOfRange`] unless it is in `[1, n-1]`.
    pub fn new(d: BigUint) -> Result<Self> {
        if curve_parameters().is_valid_scalar(&d) {
            Ok(Self { d })
        } else {
            Err(Error::ScalarOutOfRange)
        }
    }

    /// Generate a random private key, drawn uniformly from `[1, n-1]`.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            d: random_scalar(rng),
        }
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material. Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Compute the [`PublicKey`] `d×G` which corresponds to this key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point_unchecked(curve_parameters().mul_by_generator(&self.d))
    }

    /// Sign `message` with nonces drawn from the operating system's random
    /// number generator.
    #[cfg(feature = "getrandom")]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.sign_with_rng(&mut OsRng.unwrap_err(), message)
    }

    /// Sign `message` with nonces drawn from `rng`.
    pub fn sign_with_rng<R: CryptoRng + ?Sized>(&self, rng: &mut R, message: &[u8]) -> Signature {
        let z = curve_parameters().hash_message(message);
        self.sign_prehash_with_rng(rng, &z)
    }

    /// Sign a truncated message hash `z` with nonces drawn from `rng`.
    ///
    /// A fresh nonce is drawn for every attempt; attempts yielding `r = 0` or
    /// `s = 0` are retried.
    pub fn sign_prehash_with_rng<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        z: &BigUint,
    ) -> Signature {
        loop {
            let k = random_scalar(rng);

            if let Ok(signature) = hazmat::sign_prehashed(&self.d, &k, z) {
                return signature;
            }

            debug!("degenerate signature, retrying with a fresh nonce");
        }
    }

    /// Sign `message` using a deterministic nonce derived from the private key
    /// and the message as described in RFC6979.
    #[cfg(feature = "rfc6979")]
    pub fn sign_deterministic(&self, message: &[u8]) -> Signature {
        self.sign_deterministic_with_data(message, &[])
    }

    /// Sign `message` using an RFC6979 nonce seeded with additional data
    /// (e.g. extra entropy).
    #[cfg(feature = "rfc6979")]
    pub fn sign_deterministic_with_data(&self, message: &[u8], additional_data: &[u8]) -> Signature {
        let z = curve_parameters().hash_message(message);
        let mut nonces = super::rfc6979::NonceGenerator::new(&self.d, &z, additional_data);

        loop {
            let k = nonces.next_nonce();

            if let Ok(signature) = hazmat::sign_prehashed(&self.d, &k, &z) {
                return signature;
            }

            debug!("degenerate signature, continuing RFC6979 nonce sequence");
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// A private key together with its public key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a random key pair.
    pub fn generate<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self::from(PrivateKey::random(rng))
    }

    /// Generate a random key pair using the operating system's random number
    /// generator.
    #[cfg(feature = "getrandom")]
    pub fn random() -> Self {
        Self::generate(&mut OsRng.unwrap_err())
    }

    /// The private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Split into `(private_key, public_key)`.
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private_key, self.public_key)
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private_key: PrivateKey) -> KeyPair {
        let public_key = private_key.public_key();

        KeyPair {
            private_key,
            public_key,
        }
    }
}

/// Generate a random key pair using the operating system's random number
/// generator.
#[cfg(feature = "getrandom")]
pub fn make_keypair() -> (PrivateKey, PublicKey) {
    let keypair = KeyPair::random();
    debug!("generated secp256k1 key pair");
    keypair.into_parts()
}

/// Sign `message` with `private_key`, drawing nonces from the operating
/// system's random number generator.
#[cfg(feature = "getrandom")]
pub fn sign_message(private_key: &PrivateKey, message: &[u8]) -> Signature {
    private_key.sign(message)
}

/// Draw a scalar uniformly from `[1, n-1]` by rejection sampling.
fn random_scalar<R: CryptoRng + ?Sized>(rng: &mut R) -> BigUint {
    let curve = curve_parameters();
    let mut bytes = [0u8; SCALAR_SIZE];

    loop {
        rng.fill_bytes(&mut bytes);
        let k = BigUint::from_bytes_be(&bytes);

        if curve.is_valid_scalar(&k) {
            bytes.zeroize();
            return k;
        }

        trace!("scalar candidate out of range, resampling");
    }
}
