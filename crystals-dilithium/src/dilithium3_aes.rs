//! Dilithium3-AES (NIST security level 3).
//!
//! Symmetric primitives: AES-256-CTR for expansion, SHAKE256 elsewhere.

use crate::params::dilithium3::*;
use crate::symmetric::Aes;

crate::types::define_dilithium_variant! {
    /// Dilithium3-AES signature scheme.
    ///
    /// Provides NIST Security Level 3.
    name: Dilithium3Aes,
    symmetric: Aes
}
