//! Dilithium3 (NIST security level 3).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::dilithium3::*;
use crate::symmetric::Shake;

crate::types::define_dilithium_variant! {
    /// Dilithium3 signature scheme.
    ///
    /// Provides NIST Security Level 3.
    name: Dilithium3,
    symmetric: Shake
}
