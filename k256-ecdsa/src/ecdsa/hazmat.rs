//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces: the caller is
//! responsible for hashing the message and, when signing, for choosing a
//! secret nonce that is never reused under the same private key. Reusing a
//! nonce for two different messages reveals the private key.

use super::Signature;
use crate::{
    CurvePoint, Error, Result,
    arithmetic::field::{inverse_mod, signed},
    curve_parameters,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Compute a single ECDSA signature attempt over a truncated message hash `z`
/// with private key `d` and nonce `k`.
///
/// Returns [`Error::ScalarOutOfRange`] if `d` or `k` are outside `[1, n-1]`
/// and [`Error::DegenerateSignature`] if `r` or `s` is zero, in which case
/// the caller must retry with a different nonce.
#[allow(clippy::many_single_char_names)]
pub fn sign_prehashed(d: &BigUint, k: &BigUint, z: &BigUint) -> Result<Signature> {
    let curve = curve_parameters();

    if !curve.is_valid_scalar(d) || !curve.is_valid_scalar(k) {
        return Err(Error::ScalarOutOfRange);
    }

    // Compute `x`-coordinate of affine point 𝑘×𝑮, then reduce it to an
    // element of the scalar field
    let x = match curve.mul_by_generator(k) {
        CurvePoint::Affine { x, .. } => x,
        CurvePoint::Infinity => return Err(Error::DegenerateSignature),
    };
    let r = x % &curve.n;

    if r.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    // Compute `s` as a signature over `r` and `z`
    let k_inv = inverse_mod(&signed(k), &curve.n)?;
    let s = (z + &r * d) * k_inv % &curve.n;

    if s.is_zero() {
        return Err(Error::DegenerateSignature);
    }

    Ok(Signature { r, s })
}

/// Verify an ECDSA signature over a truncated message hash `z` against the
/// public point `q`.
///
/// Returns [`Error::MalformedSignature`] if `r` or `s` are outside `[1, n-1]`
/// and [`Error::VerificationFailed`] if the signature does not match.
pub fn verify_prehashed(q: &CurvePoint, z: &BigUint, signature: &Signature) -> Result<()> {
    let curve = curve_parameters();

    if let Err(error) = signature.validate() {
        debug!("rejecting signature with a component outside of [1, n-1]");
        return Err(error);
    }

    let (r, s) = (signature.r(), signature.s());
    let w = inverse_mod(&signed(s), &curve.n)?;
    let u1 = z * &w % &curve.n;
    let u2 = r * &w % &curve.n;

    // Both scalars are public here, so the variable-time multiplication is
    // acceptable.
    let sum = curve.add(
        &curve.scalar_mult(&signed(&u1), &curve.g),
        &curve.scalar_mult(&signed(&u2), q),
    );

    match sum {
        CurvePoint::Affine { x, .. } if &(&x % &curve.n) == r => Ok(()),
        _ => {
            debug!("signature does not match message and public key");
            Err(Error::VerificationFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sign_prehashed, verify_prehashed};
    use crate::{CurvePoint, Error, curve_parameters, hash_message};
    use hex_literal::hex;
    use num_bigint::BigUint;

    fn uint(bytes: [u8; 32]) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }

    /// secp256k1 ECDSA test vector (`z` is a 256-bit prehash).
    #[test]
    fn known_answer() {
        let d = uint(hex!(
            "EBB2C082FD7727890A28AC82F6BDF97BAD8DE9F5D7C9028692DE1A255CAD3E0F"
        ));
        let k = uint(hex!(
            "49A0D7B786EC9CDE0D0721D72804BEFD06571C974B191EFB42ECF322BA9DDD9A"
        ));
        let z = uint(hex!(
            "4B688DF40BCEDBE641DDB16FF0A1842D9C67EA1C3BF63F3E0471BAA664531D1A"
        ));
        let q = CurvePoint::checked(
            uint(hex!(
                "779DD197A5DF977ED2CF6CB31D82D43328B790DC6B3B7D4437A427BD5847DFCD"
            )),
            uint(hex!(
                "E94B724A555B6D017BB7607C3E3281DAF5B1699D6EF4124975C9237B917D426F"
            )),
        )
        .unwrap();

        let signature = sign_prehashed(&d, &k, &z).unwrap();
        assert_eq!(
            signature.r(),
            &uint(hex!(
                "241097EFBF8B63BF145C8961DBDF10C310EFBB3B2676BBC0F8B08505C9E2F795"
            ))
        );
        assert_eq!(
            signature.s(),
            &uint(hex!(
                "021006B7838609339E8B415A7F9ACB1B661828131AEF1ECBC7955DFB01F3CA0E"
            ))
        );
        assert_eq!(verify_prehashed(&q, &z, &signature), Ok(()));
    }

    #[test]
    fn unit_private_key_and_nonce() {
        let curve = curve_parameters();
        let one = BigUint::from(1u8);
        let z = hash_message(b"Hello!");

        let signature = sign_prehashed(&one, &one, &z).unwrap();
        let gx = curve.g.x().cloned().unwrap_or_default();

        assert_eq!(signature.r(), &(&gx % &curve.n));
        assert_eq!(signature.s(), &((&z + &gx) % &curve.n));
        assert_eq!(
            signature.s(),
            &uint(hex!(
                "6408910A2ACC85F2E7365703160A8D27C6B49A7601A7FD1F77CE47DD8FFB9B11"
            ))
        );
        assert_eq!(verify_prehashed(&curve.g, &z, &signature), Ok(()));
    }

    #[test]
    fn nonce_out_of_range() {
        let curve = curve_parameters();
        let d = BigUint::from(5u8);
        let z = BigUint::from(1u8);

        assert_eq!(
            sign_prehashed(&d, &BigUint::default(), &z),
            Err(Error::ScalarOutOfRange)
        );
        assert_eq!(
            sign_prehashed(&d, &curve.n, &z),
            Err(Error::ScalarOutOfRange)
        );
        assert_eq!(
            sign_prehashed(&BigUint::default(), &d, &z),
            Err(Error::ScalarOutOfRange)
        );
    }

    #[test]
    fn degenerate_s() {
        // With d = 1 and z = n - r, s = (z + r) / k = 0 (mod n).
        let curve = curve_parameters();
        let one = BigUint::from(1u8);
        let gx = curve.g.x().cloned().unwrap_or_default();
        let z = &curve.n - (&gx % &curve.n);

        assert_eq!(
            sign_prehashed(&one, &one, &z),
            Err(Error::DegenerateSignature)
        );
    }

    #[test]
    fn malformed_signature() {
        let curve = curve_parameters();
        let z = BigUint::from(1u8);

        for (r, s) in [
            (BigUint::default(), BigUint::from(1u8)),
            (BigUint::from(1u8), BigUint::default()),
            (curve.n.clone(), BigUint::from(1u8)),
            (BigUint::from(1u8), &curve.n + 1u8),
        ] {
            assert_eq!(
                verify_prehashed(&curve.g, &z, &super::Signature::new(r, s)),
                Err(Error::MalformedSignature)
            );
        }
    }
}
