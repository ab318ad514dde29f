//! Affine group law.

#![allow(clippy::many_single_char_names)]

use super::{
    CurvePoint,
    field::{inverse_mod, reduce, signed},
};
use crate::CurveParameters;
use num_bigint::BigInt;

impl CurveParameters {
    /// Does `point` satisfy `y² = x³ + ax + b (mod p)`?
    ///
    /// The point at infinity is always on the curve. Coordinates outside of
    /// `[0, p)` are rejected.
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }

                let lhs = y * y % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Returns `-point`.
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        debug_assert!(self.is_on_curve(point));

        match point {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => {
                let result = CurvePoint::Affine {
                    x: x.clone(),
                    y: reduce(&-signed(y), &self.p),
                };

                debug_assert!(self.is_on_curve(&result));
                result
            }
        }
    }

    /// Returns `point1 + point2` according to the group law.
    ///
    /// Both operands must be on the curve.
    pub fn add(&self, point1: &CurvePoint, point2: &CurvePoint) -> CurvePoint {
        debug_assert!(self.is_on_curve(point1));
        debug_assert!(self.is_on_curve(point2));

        let ((x1, y1), (x2, y2)) = match (point1, point2) {
            // 0 + point2 = point2
            (CurvePoint::Infinity, _) => return point2.clone(),
            // point1 + 0 = point1
            (_, CurvePoint::Infinity) => return point1.clone(),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                ((signed(x1), signed(y1)), (signed(x2), signed(y2)))
            }
        };

        let (numerator, denominator) = if x1 == x2 {
            if y1 != y2 {
                // point1 + (-point1) = 0
                return CurvePoint::Infinity;
            }

            // Tangent slope
            (
                BigInt::from(3) * &x1 * &x1 + signed(&self.a),
                BigInt::from(2) * &y1,
            )
        } else {
            // Chord slope
            (&y1 - &y2, &x1 - &x2)
        };

        // A zero denominator here means a vertical tangent at a point of
        // order two, whose double is the identity.
        let Ok(inv) = inverse_mod(&denominator, &self.p) else {
            return CurvePoint::Infinity;
        };
        let m = reduce(&(numerator * signed(&inv)), &self.p);
        let m = signed(&m);

        let x3 = &m * &m - &x1 - &x2;
        let y3 = &y1 + &m * (&x3 - &x1);

        let result = CurvePoint::Affine {
            x: reduce(&x3, &self.p),
            y: reduce(&-y3, &self.p),
        };

        debug_assert!(self.is_on_curve(&result));
        result
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &CurvePoint) -> CurvePoint {
        self.add(point, point)
    }
}
