//! Kyber512-AES (NIST security level 1).
//!
//! Symmetric primitives: AES-256-CTR/SHA-2.

use crate::params::kyber512::*;
use crate::symmetric::Aes90s;

crate::types::define_kyber_variant! {
    /// Kyber512-AES key encapsulation mechanism.
    ///
    /// Provides NIST Security Level 1.
    name: Kyber512Aes,
    symmetric: Aes90s
}
