//! ECDSA verifier

use super::{Signature, hazmat};
use crate::{CurvePoint, Error, Result, curve_parameters};
use num_bigint::BigUint;

/// Outcome of verifying a signature.
///
/// A mismatch is an ordinary result rather than an error.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Verification {
    /// The signature is valid for the message and public key.
    Accepted,

    /// The signature is malformed or does not match.
    Rejected,
}

impl Verification {
    /// Was the signature accepted?
    pub fn is_accepted(self) -> bool {
        self == Verification::Accepted
    }
}

impl From<Result<()>> for Verification {
    fn from(result: Result<()>) -> Verification {
        match result {
            Ok(()) => Verification::Accepted,
            Err(_) => Verification::Rejected,
        }
    }
}

/// ECDSA/secp256k1 public key: the point `Q = d×G`.
///
/// Never the point at infinity.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Initialize a public key from affine coordinates.
    pub fn from_affine(x: BigUint, y: BigUint) -> Result<Self> {
        CurvePoint::checked(x, y).map(Self::from_point_unchecked)
    }

    /// Initialize a public key from a curve point, rejecting the identity and
    /// off-curve points.
    pub fn from_point(point: CurvePoint) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::PointAtInfinity);
        }

        if !curve_parameters().is_on_curve(&point) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self { point })
    }

    pub(super) fn from_point_unchecked(point: CurvePoint) -> Self {
        debug_assert!(!point.is_identity());
        Self { point }
    }

    /// Borrow the underlying curve point.
    pub fn as_point(&self) -> &CurvePoint {
        &self.point
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigUint {
        match &self.point {
            CurvePoint::Affine { x, .. } => x,
            CurvePoint::Infinity => unreachable!("public key is never the identity"),
        }
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigUint {
        match &self.point {
            CurvePoint::Affine { y, .. } => y,
            CurvePoint::Infinity => unreachable!("public key is never the identity"),
        }
    }

    /// Verify `signature` over `message`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Verification {
        self.try_verify(message, signature).into()
    }

    /// Verify `signature` over `message`, returning
    /// [`Error::MalformedSignature`] or [`Error::VerificationFailed`] on
    /// failure.
    pub fn try_verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        let z = curve_parameters().hash_message(message);
        self.verify_prehash(&z, signature)
    }

    /// Verify `signature` over a truncated message hash `z`.
    pub fn verify_prehash(&self, z: &BigUint, signature: &Signature) -> Result<()> {
        hazmat::verify_prehashed(&self.point, z, signature)
    }
}

impl From<PublicKey> for CurvePoint {
    fn from(public_key: PublicKey) -> CurvePoint {
        public_key.point
    }
}

impl TryFrom<CurvePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: CurvePoint) -> Result<Self> {
        Self::from_point(point)
    }
}

/// Verify `signature` over `message` against `public_key`.
pub fn verify_signature(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Verification {
    public_key.verify(message, signature)
}
