//! Dilithium2-AES (NIST security level 2).
//!
//! Symmetric primitives: AES-256-CTR for expansion, SHAKE256 elsewhere.

use crate::params::dilithium2::*;
use crate::symmetric::Aes;

crate::types::define_dilithium_variant! {
    /// Dilithium2-AES signature scheme.
    ///
    /// Provides NIST Security Level 2.
    name: Dilithium2Aes,
    symmetric: Aes
}
