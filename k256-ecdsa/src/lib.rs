#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use k256_ecdsa::{make_keypair, sign_message, verify_signature, Verification};
//!
//! let (private_key, public_key) = make_keypair();
//! let signature = sign_message(&private_key, b"Hello!");
//!
//! assert_eq!(
//!     verify_signature(&public_key, b"Hello!", &signature),
//!     Verification::Accepted
//! );
//! assert_eq!(
//!     verify_signature(&public_key, b"H!", &signature),
//!     Verification::Rejected
//! );
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod arithmetic;
pub mod digest;
pub mod ecdsa;

mod error;
mod params;

pub use crate::{
    arithmetic::{CurvePoint, field::inverse_mod, mul::scalar_mult},
    digest::hash_message,
    ecdsa::{KeyPair, PrivateKey, PublicKey, Signature, Verification, verify_signature},
    error::{Error, Result},
    params::{CurveParameters, curve_parameters},
};

#[cfg(feature = "getrandom")]
pub use crate::ecdsa::{make_keypair, sign_message};

pub use num_bigint::{self, BigInt, BigUint};
pub use rand_core;
