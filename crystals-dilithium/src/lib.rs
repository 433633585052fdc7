//! # CRYSTALS-Dilithium (round 3)
//!
//! Implementation of the Dilithium signature scheme as submitted to round 3
//! of the NIST post-quantum standardization process (v3.1), with both the
//! SHAKE and the AES-256-CTR matrix and secret expansion.
//!
//! ## Parameter Sets
//!
//! | Parameter Set | Security Level | Public Key | Secret Key | Signature  |
//! |---------------|----------------|------------|------------|------------|
//! | Dilithium2    | 2              | 1312 bytes | 2528 bytes | 2420 bytes |
//! | Dilithium3    | 3              | 1952 bytes | 4000 bytes | 3293 bytes |
//! | Dilithium5    | 5              | 2592 bytes | 4864 bytes | 4595 bytes |
//!
//! `Dilithium2Aes`, `Dilithium3Aes` and `Dilithium5Aes` have the same sizes.
//!
//! ## Example
//!
//! ```ignore
//! use crystals_dilithium::{Dilithium3, Signer};
//! use rand::rngs::OsRng;
//!
//! let (sk, pk) = Dilithium3::keygen(&mut OsRng)?;
//! let sig = Dilithium3::sign(&sk, b"message")?;
//! assert!(Dilithium3::verify(&pk, b"message", &sig));
//! ```
//!
//! [`Signer::sign`] is deterministic; [`Signer::sign_randomized`] draws a
//! fresh masking seed. Sets chosen at runtime go through [`ParameterSet`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod ntt;
mod packing;
mod parameter_set;
mod params;
mod poly;
mod polyvec;
mod reduce;
mod rounding;
mod sample;
mod sign;
mod symmetric;
mod types;

#[cfg(feature = "dilithium2")]
pub mod dilithium2;
#[cfg(feature = "dilithium3")]
pub mod dilithium3;
#[cfg(feature = "dilithium5")]
pub mod dilithium5;
#[cfg(feature = "dilithium2-aes")]
pub mod dilithium2_aes;
#[cfg(feature = "dilithium3-aes")]
pub mod dilithium3_aes;
#[cfg(feature = "dilithium5-aes")]
pub mod dilithium5_aes;

pub use crystals_core::{Error, Result, Signer};
pub use parameter_set::ParameterSet;
pub use symmetric::{Aes, Shake, Symmetric};

#[cfg(feature = "dilithium2")]
pub use dilithium2::Dilithium2;
#[cfg(feature = "dilithium3")]
pub use dilithium3::Dilithium3;
#[cfg(feature = "dilithium5")]
pub use dilithium5::Dilithium5;
#[cfg(feature = "dilithium2-aes")]
pub use dilithium2_aes::Dilithium2Aes;
#[cfg(feature = "dilithium3-aes")]
pub use dilithium3_aes::Dilithium3Aes;
#[cfg(feature = "dilithium5-aes")]
pub use dilithium5_aes::Dilithium5Aes;
