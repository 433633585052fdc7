//! Dilithium round-3 parameter sets.
//!
//! Defines constants for DILITHIUM2, DILITHIUM3 and DILITHIUM5. The `-AES`
//! variants reuse the lattice parameters of the same mode and only swap the
//! expansion streams.

/// Parameters common to every Dilithium variant.
#[allow(dead_code)]
pub mod common {
    /// Ring dimension
    pub const N: usize = 256;

    /// Modulus q = 8380417 = 2^23 - 2^13 + 1
    pub const Q: i32 = 8_380_417;

    /// Dropped bits of t (Power2Round)
    pub const D: u32 = 13;

    /// Size of rho, key and tr in bytes
    pub const SEEDBYTES: usize = 32;

    /// Size of rho', mu in bytes
    pub const CRHBYTES: usize = 64;

    /// Encoded polynomial size (t1, 10 bits per coefficient)
    pub const POLYT1_PACKEDBYTES: usize = 320;

    /// Encoded polynomial size (t0, 13 bits per coefficient)
    pub const POLYT0_PACKEDBYTES: usize = 416;
}

macro_rules! dilithium_params {
    (
        $(#[$meta:meta])*
        $module:ident {
            k: $k:expr,
            l: $l:expr,
            eta: $eta:expr,
            tau: $tau:expr,
            gamma1: $gamma1:expr,
            gamma2: $gamma2:expr,
            omega: $omega:expr
        }
    ) => {
        $(#[$meta])*
        #[allow(dead_code)]
        pub mod $module {
            use super::common::{POLYT0_PACKEDBYTES, POLYT1_PACKEDBYTES, Q, SEEDBYTES};

            /// Number of rows in matrix A
            pub const K: usize = $k;
            /// Number of columns in matrix A
            pub const L: usize = $l;
            /// Noise bound of the secret vectors
            pub const ETA: usize = $eta;
            /// Number of +/-1 coefficients in the challenge
            pub const TAU: usize = $tau;
            /// Norm slack (tau * eta)
            pub const BETA: i32 = (TAU * ETA) as i32;
            /// Masking range for y
            pub const GAMMA1: i32 = $gamma1;
            /// Low-order rounding range
            pub const GAMMA2: i32 = $gamma2;
            /// Maximum number of hint ones
            pub const OMEGA: usize = $omega;

            /// Encoded polynomial size (eta)
            pub const POLYETA_PACKEDBYTES: usize = if ETA == 2 { 96 } else { 128 };
            /// Encoded polynomial size (z)
            pub const POLYZ_PACKEDBYTES: usize = if GAMMA1 == (1 << 17) { 576 } else { 640 };
            /// Encoded polynomial size (w1)
            pub const POLYW1_PACKEDBYTES: usize = if GAMMA2 == (Q - 1) / 88 { 192 } else { 128 };
            /// Encoded hint size
            pub const POLYVECH_PACKEDBYTES: usize = OMEGA + K;

            /// Public key size in bytes: `rho || t1`
            pub const VERIFICATION_KEY_SIZE: usize = SEEDBYTES + K * POLYT1_PACKEDBYTES;
            /// Secret key size in bytes: `rho || key || tr || s1 || s2 || t0`
            pub const SIGNING_KEY_SIZE: usize = 3 * SEEDBYTES
                + L * POLYETA_PACKEDBYTES
                + K * POLYETA_PACKEDBYTES
                + K * POLYT0_PACKEDBYTES;
            /// Signature size in bytes: `c~ || z || h`
            pub const SIGNATURE_SIZE: usize =
                SEEDBYTES + L * POLYZ_PACKEDBYTES + POLYVECH_PACKEDBYTES;
        }
    };
}

dilithium_params! {
    /// Dilithium2 parameters (NIST Level 2)
    #[cfg(any(feature = "dilithium2", feature = "dilithium2-aes"))]
    dilithium2 {
        k: 4,
        l: 4,
        eta: 2,
        tau: 39,
        gamma1: 1 << 17,
        gamma2: 95_232, // (q - 1) / 88
        omega: 80
    }
}

dilithium_params! {
    /// Dilithium3 parameters (NIST Level 3)
    #[cfg(any(feature = "dilithium3", feature = "dilithium3-aes"))]
    dilithium3 {
        k: 6,
        l: 5,
        eta: 4,
        tau: 49,
        gamma1: 1 << 19,
        gamma2: 261_888, // (q - 1) / 32
        omega: 55
    }
}

dilithium_params! {
    /// Dilithium5 parameters (NIST Level 5)
    #[cfg(any(feature = "dilithium5", feature = "dilithium5-aes"))]
    dilithium5 {
        k: 8,
        l: 7,
        eta: 2,
        tau: 60,
        gamma1: 1 << 19,
        gamma2: 261_888, // (q - 1) / 32
        omega: 75
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "dilithium2")]
    #[test]
    fn test_dilithium2_sizes() {
        use super::dilithium2::*;
        assert_eq!(BETA, 78);
        assert_eq!(GAMMA2, 95_232);
        assert_eq!(VERIFICATION_KEY_SIZE, 1312);
        assert_eq!(SIGNING_KEY_SIZE, 2528);
        assert_eq!(SIGNATURE_SIZE, 2420);
    }

    #[cfg(feature = "dilithium3")]
    #[test]
    fn test_dilithium3_sizes() {
        use super::dilithium3::*;
        assert_eq!(BETA, 196);
        assert_eq!(GAMMA2, 261_888);
        assert_eq!(VERIFICATION_KEY_SIZE, 1952);
        assert_eq!(SIGNING_KEY_SIZE, 4000);
        assert_eq!(SIGNATURE_SIZE, 3293);
    }

    #[cfg(feature = "dilithium5")]
    #[test]
    fn test_dilithium5_sizes() {
        use super::dilithium5::*;
        assert_eq!(BETA, 120);
        assert_eq!(VERIFICATION_KEY_SIZE, 2592);
        assert_eq!(SIGNING_KEY_SIZE, 4864);
        assert_eq!(SIGNATURE_SIZE, 4595);
    }
}
