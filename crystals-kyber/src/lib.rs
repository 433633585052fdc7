//! # CRYSTALS-Kyber (round 3)
//!
//! Implementation of the Kyber key encapsulation mechanism as submitted to
//! round 3 of the NIST post-quantum standardization process (v3.02), with
//! both the SHAKE and the AES-256-CTR / SHA-2 ("90s") symmetric primitives.
//!
//! ## Parameter Sets
//!
//! | Parameter Set | Security Level | Public Key | Ciphertext | Shared Secret |
//! |---------------|----------------|------------|------------|---------------|
//! | Kyber512      | 1 (128-bit)    | 800 bytes  | 768 bytes  | 32 bytes      |
//! | Kyber768      | 3 (192-bit)    | 1184 bytes | 1088 bytes | 32 bytes      |
//! | Kyber1024     | 5 (256-bit)    | 1568 bytes | 1568 bytes | 32 bytes      |
//!
//! `Kyber512Aes`, `Kyber768Aes` and `Kyber1024Aes` have the same sizes.
//!
//! ## Example
//!
//! ```ignore
//! use crystals_kyber::{Kyber768, Kem};
//! use rand::rngs::OsRng;
//!
//! let (dk, ek) = Kyber768::keygen(&mut OsRng)?;
//! let (ct, ss_sender) = Kyber768::encaps(&ek, &mut OsRng)?;
//! let ss_receiver = Kyber768::decaps(&dk, &ct)?;
//!
//! assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
//! ```
//!
//! Sets chosen at runtime go through [`ParameterSet`]:
//!
//! ```ignore
//! let set: ParameterSet = "KYBER768-AES".parse()?;
//! let (pk, sk) = set.keypair(&mut rng)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod encode;
mod indcpa;
mod kem;
mod matrix;
mod ntt;
mod params;
mod parameter_set;
mod poly;
mod polyvec;
mod reduce;
mod sample;
mod symmetric;
mod types;

#[cfg(feature = "kyber512")]
pub mod kyber512;
#[cfg(feature = "kyber768")]
pub mod kyber768;
#[cfg(feature = "kyber1024")]
pub mod kyber1024;
#[cfg(feature = "kyber512-aes")]
pub mod kyber512_aes;
#[cfg(feature = "kyber768-aes")]
pub mod kyber768_aes;
#[cfg(feature = "kyber1024-aes")]
pub mod kyber1024_aes;

pub use crystals_core::{Error, Kem, Result};
pub use parameter_set::ParameterSet;
pub use symmetric::{Aes90s, Shake, Symmetric};

#[cfg(feature = "kyber512")]
pub use kyber512::Kyber512;
#[cfg(feature = "kyber768")]
pub use kyber768::Kyber768;
#[cfg(feature = "kyber1024")]
pub use kyber1024::Kyber1024;
#[cfg(feature = "kyber512-aes")]
pub use kyber512_aes::Kyber512Aes;
#[cfg(feature = "kyber768-aes")]
pub use kyber768_aes::Kyber768Aes;
#[cfg(feature = "kyber1024-aes")]
pub use kyber1024_aes::Kyber1024Aes;
