//! ECDSA tests.

use hex_literal::hex;
use k256_ecdsa::{
    BigUint, CurvePoint, KeyPair, PrivateKey, PublicKey, Signature, Verification,
    curve_parameters, ecdsa::hazmat, hash_message, verify_signature,
};
use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

prop_compose! {
    fn any_keypair()(seed in any::<u64>()) -> KeyPair {
        KeyPair::generate(&mut ChaCha8Rng::seed_from_u64(seed))
    }
}

fn sign(keypair: &KeyPair, message: &[u8], seed: u64) -> Signature {
    keypair
        .private_key()
        .sign_with_rng(&mut ChaCha8Rng::seed_from_u64(seed), message)
}

#[test]
fn unit_private_key_and_nonce() {
    let curve = curve_parameters();
    let message = b"Hello!";
    let z = hash_message(message);
    let one = BigUint::from(1u8);

    let signature = hazmat::sign_prehashed(&one, &one, &z).unwrap();
    let gx = curve.g.x().cloned().unwrap_or_default();

    assert_eq!(signature.r(), &(&gx % &curve.n));
    assert_eq!(signature.s(), &((&z + &gx) % &curve.n));

    let public_key = PrivateKey::new(one).unwrap().public_key();
    assert_eq!(public_key.as_point(), &curve.g);
    assert_eq!(
        verify_signature(&public_key, message, &signature),
        Verification::Accepted
    );
}

#[test]
fn known_public_key() {
    let private_key = PrivateKey::new(BigUint::from_bytes_be(&hex!(
        "EBB2C082FD7727890A28AC82F6BDF97BAD8DE9F5D7C9028692DE1A255CAD3E0F"
    )))
    .unwrap();

    let expected = PublicKey::from_affine(
        BigUint::from_bytes_be(&hex!(
            "779DD197A5DF977ED2CF6CB31D82D43328B790DC6B3B7D4437A427BD5847DFCD"
        )),
        BigUint::from_bytes_be(&hex!(
            "E94B724A555B6D017BB7607C3E3281DAF5B1699D6EF4124975C9237B917D426F"
        )),
    )
    .unwrap();

    assert_eq!(private_key.public_key(), expected);
}

#[test]
fn signature_from_other_key_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (private_key, public_key) = KeyPair::generate(&mut rng).into_parts();
    let (_, other_public_key) = KeyPair::generate(&mut rng).into_parts();

    let signature = private_key.sign_with_rng(&mut rng, b"Hello!");
    assert_eq!(
        verify_signature(&public_key, b"Hello!", &signature),
        Verification::Accepted
    );
    assert_eq!(
        verify_signature(&public_key, b"H!", &signature),
        Verification::Rejected
    );
    assert_eq!(
        verify_signature(&other_public_key, b"Hello!", &signature),
        Verification::Rejected
    );
}

#[test]
fn low_s_normalized_signature_verifies() {
    let keypair = KeyPair::generate(&mut ChaCha8Rng::seed_from_u64(7));

    // Find a signature with a high `s`; about half of them are.
    let (seed, signature) = (0..64)
        .map(|seed| (seed, sign(&keypair, b"malleable", seed)))
        .find(|(_, signature)| signature.is_high_s())
        .unwrap();

    let normalized = signature.normalize_s().unwrap();
    assert_ne!(normalized, signature, "seed {seed}");
    assert!(!normalized.is_high_s());
    assert!(keypair.public_key().verify(b"malleable", &signature).is_accepted());
    assert!(keypair.public_key().verify(b"malleable", &normalized).is_accepted());
}

#[test]
fn public_key_validation() {
    let g = CurvePoint::generator();
    assert!(PublicKey::try_from(g).is_ok());
    assert!(PublicKey::try_from(CurvePoint::Infinity).is_err());
}

#[cfg(feature = "getrandom")]
#[test]
fn os_rng_round_trip() {
    let (private_key, public_key) = k256_ecdsa::make_keypair();
    let signature = k256_ecdsa::sign_message(&private_key, b"Hello!");

    assert!(signature.validate().is_ok());
    assert_eq!(
        verify_signature(&public_key, b"Hello!", &signature),
        Verification::Accepted
    );
}

#[cfg(feature = "rfc6979")]
#[test]
fn deterministic_round_trip() {
    let keypair = KeyPair::generate(&mut ChaCha8Rng::seed_from_u64(9));
    let signature = keypair.private_key().sign_deterministic(b"sample");

    assert_eq!(keypair.private_key().sign_deterministic(b"sample"), signature);
    assert!(keypair.public_key().verify(b"sample", &signature).is_accepted());
    assert!(!keypair.public_key().verify(b"Sample", &signature).is_accepted());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_verify_round_trip(
        keypair in any_keypair(),
        message in proptest::collection::vec(any::<u8>(), 1..256),
        seed in any::<u64>(),
    ) {
        let signature = sign(&keypair, &message, seed);
        prop_assert!(signature.validate().is_ok());
        prop_assert_eq!(
            verify_signature(keypair.public_key(), &message, &signature),
            Verification::Accepted
        );
    }

    #[test]
    fn tampered_message_is_rejected(
        keypair in any_keypair(),
        message in proptest::collection::vec(any::<u8>(), 1..64),
        bit in any::<prop::sample::Index>(),
        seed in any::<u64>(),
    ) {
        let signature = sign(&keypair, &message, seed);

        let mut tampered = message.clone();
        let bit = bit.index(tampered.len() * 8);
        tampered[bit / 8] ^= 1 << (bit % 8);

        prop_assert_eq!(
            verify_signature(keypair.public_key(), &tampered, &signature),
            Verification::Rejected
        );
    }

    #[test]
    fn tampered_signature_is_rejected(keypair in any_keypair(), seed in any::<u64>()) {
        let n = &curve_parameters().n;
        let (r, s) = sign(&keypair, b"message", seed).split_scalars();
        let tampered = Signature::new(r, (s + 1u8) % n);

        prop_assert_eq!(
            verify_signature(keypair.public_key(), b"message", &tampered),
            Verification::Rejected
        );
    }
}
