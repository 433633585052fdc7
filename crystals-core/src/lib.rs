//! # Crystals Core
//!
//! Shared building blocks for the CRYSTALS lattice schemes.
//!
//! This crate provides:
//! - The common [`Error`] type
//! - The [`Kem`] and [`Signer`] traits implemented by every parameter set
//! - Modular arithmetic and NTT generator macros, instantiated once per ring
//! - [`Aes256Ctr`], the AES-256-CTR keystream used by the `-AES` variants
//! - Logging macros that compile away unless the `tracing` feature is enabled

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod ctr;
mod error;
mod log;
mod ntt;
mod reduce;
mod traits;

pub use ctr::Aes256Ctr;
pub use error::{Error, Result};
pub use traits::{Kem, Signer};

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop};

/// Re-export subtle for constant-time operations.
pub use subtle;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
