//! Scalar multiplication.
//!
//! Two strategies are provided:
//!
//! - [`CurveParameters::scalar_mult`]: textbook double-and-add over the bits
//!   of the scalar. The sequence of group operations depends on the scalar,
//!   so it is only used with public scalars (signature verification).
//! - [`CurveParameters::scalar_mult_ladder`]: Montgomery ladder performing one
//!   addition and one doubling per bit of `n`, whatever the scalar. Used for
//!   private keys and nonces.
//!
//! Note that the underlying big integer arithmetic is not constant time; the
//! ladder only removes the scalar-dependent operation schedule.

use super::{CurvePoint, field::reduce};
use crate::{CurveParameters, curve_parameters};
use core::mem;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

impl CurveParameters {
    /// Returns `k * point` using double-and-add.
    ///
    /// `k` is reduced modulo `n` first; negative scalars are handled using
    /// `k * point = -k * (-point)`.
    pub fn scalar_mult(&self, k: &BigInt, point: &CurvePoint) -> CurvePoint {
        debug_assert!(self.is_on_curve(point));

        if reduce(k, &self.n).is_zero() || point.is_identity() {
            return CurvePoint::Infinity;
        }

        if k.is_negative() {
            // k * point = -k * (-point)
            return self.scalar_mult(&-k, &self.negate(point));
        }

        let mut k = k.magnitude() % &self.n;
        let mut result = CurvePoint::Infinity;
        let mut addend = point.clone();

        while !k.is_zero() {
            if k.bit(0) {
                // Add
                result = self.add(&result, &addend);
            }

            // Double
            addend = self.double(&addend);

            k >>= 1u32;
        }

        debug_assert!(self.is_on_curve(&result));
        result
    }

    /// Returns `k * point` using a Montgomery ladder over a fixed number of
    /// bits (the bit length of `n`).
    ///
    /// Agrees with [`CurveParameters::scalar_mult`] for every input.
    pub fn scalar_mult_ladder(&self, k: &BigUint, point: &CurvePoint) -> CurvePoint {
        debug_assert!(self.is_on_curve(point));

        let k = k % &self.n;

        // Invariant: r1 - r0 == point
        let mut r0 = CurvePoint::Infinity;
        let mut r1 = point.clone();

        for i in (0..self.order_bits()).rev() {
            let bit = k.bit(i);

            conditional_swap(&mut r0, &mut r1, bit);
            r1 = self.add(&r0, &r1);
            r0 = self.double(&r0);
            conditional_swap(&mut r0, &mut r1, bit);
        }

        debug_assert!(self.is_on_curve(&r0));
        r0
    }

    /// Returns `k * G` for a secret scalar `k`.
    pub fn mul_by_generator(&self, k: &BigUint) -> CurvePoint {
        self.scalar_mult_ladder(k, &self.g)
    }
}

/// Swap `a` and `b` if `choice` is set.
fn conditional_swap(a: &mut CurvePoint, b: &mut CurvePoint, choice: bool) {
    if choice {
        mem::swap(a, b);
    }
}

/// Returns `k * point` on secp256k1 using double-and-add.
///
/// See [`CurveParameters::scalar_mult`].
pub fn scalar_mult(k: &BigInt, point: &CurvePoint) -> CurvePoint {
    curve_parameters().scalar_mult(k, point)
}
