#![no_main]
// Verification must never panic on arbitrary signatures, including
// components that are zero or not reduced modulo n.
use k256_ecdsa::{BigUint, PrivateKey, Signature, Verification, curve_parameters};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let curve = curve_parameters();
    let d = BigUint::from_bytes_be(&data[0..32]) % (&curve.n - 1u8) + 1u8;
    let Ok(private_key) = PrivateKey::new(d) else {
        return;
    };
    let public_key = private_key.public_key();

    let r = BigUint::from_bytes_be(&data[32..64]);
    let s = BigUint::from_bytes_be(&data[64..96]);
    let message = &data[96..];
    let signature = Signature::new(r, s);

    let outcome = public_key.verify(message, &signature);
    if signature.validate().is_err() {
        assert_eq!(outcome, Verification::Rejected);
    }
});
