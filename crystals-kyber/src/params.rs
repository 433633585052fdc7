//! Kyber round-3 parameter sets.
//!
//! The `-AES` variants share their lattice parameters with the SHAKE
//! variant of the same rank; only the symmetric primitives differ.

/// Parameters common to every Kyber variant.
#[allow(dead_code)]
pub mod common {
    /// Polynomial ring dimension (n).
    pub const N: usize = 256;

    /// Modulus (q).
    pub const Q: i16 = 3329;

    /// Size of seeds, hashes and messages.
    pub const SYMBYTES: usize = 32;

    /// Shared secret size in bytes.
    pub const SHARED_SECRET_SIZE: usize = 32;

    /// Bytes of a 12-bit packed polynomial.
    pub const POLYBYTES: usize = 384;
}

macro_rules! kyber_params {
    (
        $(#[$meta:meta])*
        $module:ident {
            k: $k:expr,
            eta1: $eta1:expr,
            du: $du:expr,
            dv: $dv:expr
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            use super::common::{POLYBYTES, SYMBYTES};

            /// Module rank (k).
            pub const K: usize = $k;

            /// Noise parameter for the secret and keygen error (eta1).
            pub const ETA1: usize = $eta1;

            /// Noise parameter for the encryption error (eta2).
            pub const ETA2: usize = 2;

            /// Compression width for `u` (du).
            pub const DU: usize = $du;

            /// Compression width for `v` (dv).
            pub const DV: usize = $dv;

            /// Encapsulation key size in bytes: `t || rho`.
            pub const ENCAPSULATION_KEY_SIZE: usize = K * POLYBYTES + SYMBYTES;

            /// Decapsulation key size in bytes: `s || pk || H(pk) || z`.
            pub const DECAPSULATION_KEY_SIZE: usize =
                K * POLYBYTES + ENCAPSULATION_KEY_SIZE + 2 * SYMBYTES;

            /// Ciphertext size in bytes.
            pub const CIPHERTEXT_SIZE: usize = 32 * (K * DU + DV);

            /// Shared secret size in bytes.
            pub const SHARED_SECRET_SIZE: usize = super::common::SHARED_SECRET_SIZE;
        }
    };
}

kyber_params! {
    /// Kyber512 parameters (NIST Security Level 1).
    #[cfg(any(feature = "kyber512", feature = "kyber512-aes"))]
    kyber512 { k: 2, eta1: 3, du: 10, dv: 4 }
}

kyber_params! {
    /// Kyber768 parameters (NIST Security Level 3).
    #[cfg(any(feature = "kyber768", feature = "kyber768-aes"))]
    kyber768 { k: 3, eta1: 2, du: 10, dv: 4 }
}

kyber_params! {
    /// Kyber1024 parameters (NIST Security Level 5).
    #[cfg(any(feature = "kyber1024", feature = "kyber1024-aes"))]
    kyber1024 { k: 4, eta1: 2, du: 11, dv: 5 }
}
