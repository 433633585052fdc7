//! Kyber1024-AES (NIST security level 5).
//!
//! Symmetric primitives: AES-256-CTR/SHA-2.

use crate::params::kyber1024::*;
use crate::symmetric::Aes90s;

crate::types::define_kyber_variant! {
    /// Kyber1024-AES key encapsulation mechanism.
    ///
    /// Provides NIST Security Level 5.
    name: Kyber1024Aes,
    symmetric: Aes90s
}
