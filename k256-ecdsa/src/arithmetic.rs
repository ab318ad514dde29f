//! A pure-Rust implementation of group operations on secp256k1 using
//! arbitrary-precision integers.
//!
//! Points are kept in affine coordinates. All functions assume the process-wide
//! [`CurveParameters`](crate::CurveParameters); the group law itself lives on
//! that type (see [`point`]) so callers can hold a single `&'static` reference.

pub mod field;
pub mod mul;
pub mod point;

use crate::{Error, Result, curve_parameters};
use num_bigint::BigUint;

/// A secp256k1 point: either the point at infinity or affine coordinates.
///
/// Affine coordinates are always in `[0, p)`. Values returned by the group
/// operations always satisfy the curve equation; values supplied by callers
/// should go through [`CurvePoint::checked`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum CurvePoint {
    /// Additive identity of the group.
    #[default]
    Infinity,

    /// Affine point `(x, y)`.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl CurvePoint {
    /// Create an affine point, returning [`Error::PointNotOnCurve`] if `(x, y)`
    /// does not satisfy `y² = x³ + 7 (mod p)`.
    pub fn checked(x: BigUint, y: BigUint) -> Result<Self> {
        let point = CurvePoint::Affine { x, y };

        if curve_parameters().is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Base point of secp256k1.
    pub fn generator() -> Self {
        curve_parameters().g.clone()
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { y, .. } => Some(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CurvePoint;
    use crate::{Error, curve_parameters};
    use num_bigint::BigUint;

    #[test]
    fn checked_rejects_off_curve() {
        let curve = curve_parameters();
        let x = curve.g.x().cloned().unwrap_or_default();
        let y = curve.g.y().cloned().unwrap_or_default() + 1u8;
        assert_eq!(CurvePoint::checked(x, y), Err(Error::PointNotOnCurve));
    }

    #[test]
    fn checked_rejects_unreduced_coordinates() {
        let curve = curve_parameters();
        let x = curve.g.x().cloned().unwrap_or_default() + &curve.p;
        let y = curve.g.y().cloned().unwrap_or_default();
        assert_eq!(CurvePoint::checked(x, y), Err(Error::PointNotOnCurve));
    }

    #[test]
    fn checked_accepts_generator() {
        let curve = curve_parameters();
        let (x, y) = match &curve.g {
            CurvePoint::Affine { x, y } => (x.clone(), y.clone()),
            CurvePoint::Infinity => unreachable!(),
        };
        assert_eq!(CurvePoint::checked(x, y), Ok(CurvePoint::generator()));
    }

    #[test]
    fn identity_accessors() {
        assert!(CurvePoint::default().is_identity());
        assert_eq!(CurvePoint::Infinity.x(), None);
        assert!(!CurvePoint::generator().is_identity());
        assert_eq!(
            CurvePoint::generator().x().map(BigUint::bits),
            Some(255)
        );
    }
}
