//! Generate a key pair, sign a message and check the signature against a
//! tampered message and an unrelated public key.

use k256_ecdsa::{
    PublicKey, Signature, curve_parameters, make_keypair, sign_message, verify_signature,
};

fn print_public_key(label: &str, public_key: &PublicKey) {
    println!("{label}: (0x{:x}, 0x{:x})", public_key.x(), public_key.y());
}

fn print_verification(public_key: &PublicKey, message: &[u8], signature: &Signature) {
    println!("message: {:?}", String::from_utf8_lossy(message));
    println!(
        "verification: {:?}",
        verify_signature(public_key, message, signature)
    );
}

fn main() {
    println!("curve: {}", curve_parameters().name);

    let (private_key, public_key) = make_keypair();
    println!("private key: 0x{:x}", private_key.as_scalar());
    print_public_key("public key", &public_key);

    let message = b"Hello!";
    let signature = sign_message(&private_key, message);
    println!();
    println!("signature: (0x{:x}, 0x{:x})", signature.r(), signature.s());
    print_verification(&public_key, message, &signature);

    println!();
    print_verification(&public_key, b"H!", &signature);

    let (_, other_public_key) = make_keypair();
    println!();
    print_public_key("other public key", &other_public_key);
    print_verification(&other_public_key, message, &signature);
}
