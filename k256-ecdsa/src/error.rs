//! Error type

use core::fmt::{self, Display};

/// Result type with the `k256-ecdsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by curve arithmetic and ECDSA operations.
///
/// None of the variants carry secret material.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Modular inverse of a value congruent to zero.
    DivisionByZero,

    /// Affine coordinates which do not satisfy the curve equation.
    PointNotOnCurve,

    /// The identity element where a non-identity point is required
    /// (e.g. a public key).
    PointAtInfinity,

    /// A private key or nonce outside of `[1, n-1]`.
    ScalarOutOfRange,

    /// A signing attempt produced `r = 0` or `s = 0`; retry with a fresh
    /// nonce.
    DegenerateSignature,

    /// A signature component outside of `[1, n-1]`.
    MalformedSignature,

    /// The signature does not match the message and public key.
    VerificationFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero: value has no inverse modulo p",
            Error::PointNotOnCurve => "point is not on the secp256k1 curve",
            Error::PointAtInfinity => "point at infinity is not a valid public key",
            Error::ScalarOutOfRange => "scalar is outside of [1, n-1]",
            Error::DegenerateSignature => "signing attempt produced r = 0 or s = 0",
            Error::MalformedSignature => "signature component is outside of [1, n-1]",
            Error::VerificationFailed => "signature verification failed",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
