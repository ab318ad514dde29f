//! Modular arithmetic over a prime modulus.
//!
//! Field elements and scalars are plain [`BigUint`]s in `[0, m)`; signed
//! [`BigInt`]s only appear as intermediates and are brought back with
//! [`reduce`].

use crate::{Error, Result};
use core::mem;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

/// Returns the least non-negative residue of `x` modulo `m`.
pub fn reduce(x: &BigInt, m: &BigUint) -> BigUint {
    let m = BigInt::from(m.clone());
    let r = x % &m;

    if r.is_negative() {
        (r + m).into_parts().1
    } else {
        r.into_parts().1
    }
}

/// Returns the inverse of `k` modulo `p`.
///
/// This is the unique `x` in `[0, p)` such that `(x * k) % p == 1`. `p` must
/// be prime and `k` must not be a multiple of `p`, otherwise
/// [`Error::DivisionByZero`] is returned.
///
/// Negative `k` is supported using `k⁻¹ = p - (-k)⁻¹ (mod p)`.
pub fn inverse_mod(k: &BigInt, p: &BigUint) -> Result<BigUint> {
    if (k % BigInt::from(p.clone())).is_zero() {
        return Err(Error::DivisionByZero);
    }

    if k.is_negative() {
        let inv = inverse_mod(&-k, p)?;
        return Ok(p - inv);
    }

    // Extended Euclidean algorithm; `t` tracks the coefficient of `p` and is
    // only needed for the gcd check below.
    let (mut s, mut old_s) = (BigInt::zero(), BigInt::one());
    let (mut t, mut old_t) = (BigInt::one(), BigInt::zero());
    let (mut r, mut old_r) = (BigInt::from(p.clone()), k.clone());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    let (gcd, x) = (old_r, old_s);
    debug_assert!(gcd.is_one(), "modulus is not prime");
    debug_assert_eq!(
        &old_t * BigInt::from(p.clone()) + &x * k,
        gcd,
        "Bézout identity violated"
    );

    let x = reduce(&x, p);
    debug_assert!((&x * k.magnitude() % p).is_one());
    Ok(x)
}

/// Convert a non-negative field element or scalar into a signed integer.
pub(crate) fn signed(x: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, x.clone())
}
