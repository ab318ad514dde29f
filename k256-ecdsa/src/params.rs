//! secp256k1 domain parameters.

use crate::arithmetic::CurvePoint;
use alloc::boxed::Box;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::race::OnceBox;

/// Field modulus serialized as big endian bytes.
///
/// ```text
/// p = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
/// ```
const FIELD_MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order of the base point serialized as big endian bytes.
///
/// ```text
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
/// ```
const ORDER: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Base point coordinates.
///
/// ```text
/// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
/// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
/// ```
const GENERATOR_X: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
const GENERATOR_Y: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// `a` coefficient of `y² = x³ + ax + b`.
const EQUATION_A: u32 = 0;

/// `b` coefficient of `y² = x³ + ax + b`.
const EQUATION_B: u32 = 7;

/// Elliptic curve domain parameters `(p, a, b, G, n, h)`.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
/// Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// There is exactly one instance, obtained through [`curve_parameters`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    /// Curve name.
    pub name: &'static str,

    /// Prime modulus of the base field.
    pub p: BigUint,

    /// Curve equation coefficient `a`.
    pub a: BigUint,

    /// Curve equation coefficient `b`.
    pub b: BigUint,

    /// Base point.
    pub g: CurvePoint,

    /// Prime order of the subgroup generated by `g`.
    pub n: BigUint,

    /// Cofactor.
    pub h: u32,
}

impl CurveParameters {
    fn secp256k1() -> Self {
        Self {
            name: "secp256k1",
            p: BigUint::from_bytes_be(&FIELD_MODULUS),
            a: BigUint::from(EQUATION_A),
            b: BigUint::from(EQUATION_B),
            g: CurvePoint::Affine {
                x: BigUint::from_bytes_be(&GENERATOR_X),
                y: BigUint::from_bytes_be(&GENERATOR_Y),
            },
            n: BigUint::from_bytes_be(&ORDER),
            h: 1,
        }
    }

    /// Size of a scalar in bits (the bit length of `n`).
    pub fn order_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Is `k` a valid non-zero scalar, i.e. within `[1, n-1]`?
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        k.bits() != 0 && k < &self.n
    }
}

/// Returns the process-wide secp256k1 parameters.
///
/// The value is built on first use and is immutable afterwards.
pub fn curve_parameters() -> &'static CurveParameters {
    static PARAMS: OnceBox<CurveParameters> = OnceBox::new();
    PARAMS.get_or_init(|| Box::new(CurveParameters::secp256k1()))
}
