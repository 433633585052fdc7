//! Dilithium5-AES (NIST security level 5).
//!
//! Symmetric primitives: AES-256-CTR for expansion, SHAKE256 elsewhere.

use crate::params::dilithium5::*;
use crate::symmetric::Aes;

crate::types::define_dilithium_variant! {
    /// Dilithium5-AES signature scheme.
    ///
    /// Provides NIST Security Level 5.
    name: Dilithium5Aes,
    symmetric: Aes
}
