//! Kyber512 (NIST security level 1).
//!
//! Symmetric primitives: SHA-3/SHAKE.

use crate::params::kyber512::*;
use crate::symmetric::Shake;

crate::types::define_kyber_variant! {
    /// Kyber512 key encapsulation mechanism.
    ///
    /// Provides NIST Security Level 1.
    name: Kyber512,
    symmetric: Shake
}
