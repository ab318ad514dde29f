#![no_main]
use k256_ecdsa::{BigInt, BigUint, CurvePoint, curve_parameters};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let curve = curve_parameters();
    let a = BigUint::from_bytes_be(&data[0..32]);
    let b = BigUint::from_bytes_be(&data[32..64]);

    let p1 = curve.mul_by_generator(&a);
    let p2 = curve.mul_by_generator(&b);
    assert!(curve.is_on_curve(&p1));

    // Test that addition and doubling are consistent
    assert_eq!(curve.double(&p1), curve.add(&p1, &p1));

    // Test that negation works correctly
    let sum = curve.add(&p1, &p2);
    assert_eq!(curve.add(&sum, &curve.negate(&sum)), CurvePoint::Infinity);

    // Test scalar multiplication distributive property
    assert_eq!(sum, curve.mul_by_generator(&(&a + &b)));

    // Double-and-add and the ladder agree, also for negative scalars
    let k = BigInt::from(a.clone()) - BigInt::from(b.clone());
    let expected = curve.scalar_mult(&k, &curve.g);
    assert_eq!(expected, curve.add(&p1, &curve.negate(&p2)));
});
