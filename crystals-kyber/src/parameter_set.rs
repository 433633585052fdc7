//! Runtime selection of a Kyber parameter set.
//!
//! The typed variants (`Kyber512`, `Kyber768Aes`, ...) are the primary API.
//! [`ParameterSet`] is for callers that learn the set at runtime, e.g. from
//! a negotiated name, and exchange keys as plain byte slices.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::str::FromStr;
use crystals_core::{log_debug, Error, Result};
use rand_core::CryptoRng;
use zeroize::Zeroizing;

/// One of the six Kyber parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    /// KYBER512
    Kyber512,
    /// KYBER768
    Kyber768,
    /// KYBER1024
    Kyber1024,
    /// KYBER512-AES
    Kyber512Aes,
    /// KYBER768-AES
    Kyber768Aes,
    /// KYBER1024-AES
    Kyber1024Aes,
}

/// Run `$body` with `$v` bound to the variant type of `$set`, or fail with
/// [`Error::UnsupportedParameterSet`] if that variant is compiled out.
macro_rules! dispatch {
    ($set:expr, $v:ident => $body:expr) => {
        match $set {
            #[cfg(feature = "kyber512")]
            ParameterSet::Kyber512 => {
                use crate::kyber512::Kyber512 as $v;
                $body
            }
            #[cfg(feature = "kyber768")]
            ParameterSet::Kyber768 => {
                use crate::kyber768::Kyber768 as $v;
                $body
            }
            #[cfg(feature = "kyber1024")]
            ParameterSet::Kyber1024 => {
                use crate::kyber1024::Kyber1024 as $v;
                $body
            }
            #[cfg(feature = "kyber512-aes")]
            ParameterSet::Kyber512Aes => {
                use crate::kyber512_aes::Kyber512Aes as $v;
                $body
            }
            #[cfg(feature = "kyber768-aes")]
            ParameterSet::Kyber768Aes => {
                use crate::kyber768_aes::Kyber768Aes as $v;
                $body
            }
            #[cfg(feature = "kyber1024-aes")]
            ParameterSet::Kyber1024Aes => {
                use crate::kyber1024_aes::Kyber1024Aes as $v;
                $body
            }
            #[allow(unreachable_patterns)]
            other => {
                log_debug!(set = %other, "parameter set not compiled in");
                let _ = other;
                Err(Error::UnsupportedParameterSet)
            }
        }
    };
}

impl ParameterSet {
    /// Every parameter set, SHAKE variants first.
    pub const ALL: [ParameterSet; 6] = [
        ParameterSet::Kyber512,
        ParameterSet::Kyber768,
        ParameterSet::Kyber1024,
        ParameterSet::Kyber512Aes,
        ParameterSet::Kyber768Aes,
        ParameterSet::Kyber1024Aes,
    ];

    /// Canonical name, e.g. `"KYBER768-AES"`.
    pub const fn name(self) -> &'static str {
        match self {
            ParameterSet::Kyber512 => "KYBER512",
            ParameterSet::Kyber768 => "KYBER768",
            ParameterSet::Kyber1024 => "KYBER1024",
            ParameterSet::Kyber512Aes => "KYBER512-AES",
            ParameterSet::Kyber768Aes => "KYBER768-AES",
            ParameterSet::Kyber1024Aes => "KYBER1024-AES",
        }
    }

    /// Whether this set uses the AES-256-CTR / SHA-2 primitives.
    pub const fn is_aes(self) -> bool {
        matches!(
            self,
            ParameterSet::Kyber512Aes | ParameterSet::Kyber768Aes | ParameterSet::Kyber1024Aes
        )
    }

    /// Module rank k.
    pub const fn rank(self) -> usize {
        match self {
            ParameterSet::Kyber512 | ParameterSet::Kyber512Aes => 2,
            ParameterSet::Kyber768 | ParameterSet::Kyber768Aes => 3,
            ParameterSet::Kyber1024 | ParameterSet::Kyber1024Aes => 4,
        }
    }

    /// Public (encapsulation) key size in bytes.
    pub const fn public_key_bytes(self) -> usize {
        self.rank() * 384 + 32
    }

    /// Secret (decapsulation) key size in bytes.
    pub const fn secret_key_bytes(self) -> usize {
        self.rank() * 384 + self.public_key_bytes() + 64
    }

    /// Ciphertext size in bytes.
    pub const fn ciphertext_bytes(self) -> usize {
        match self.rank() {
            4 => 32 * (4 * 11 + 5),
            k => 32 * (k * 10 + 4),
        }
    }

    /// Shared secret size in bytes.
    pub const fn shared_secret_bytes(self) -> usize {
        32
    }

    /// Generate a key pair, returned as `(public_key, secret_key)` bytes.
    ///
    /// # Errors
    /// [`Error::UnsupportedParameterSet`] if the variant's feature is disabled.
    pub fn keypair(self, rng: &mut impl CryptoRng) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        dispatch!(self, V => {
            use crystals_core::Kem;
            let (dk, ek) = V::keygen(rng)?;
            Ok((ek.as_bytes().to_vec(), Zeroizing::new(dk.as_bytes().to_vec())))
        })
    }

    /// Encapsulate against a serialized public key.
    ///
    /// Returns `(ciphertext, shared_secret)`.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `public_key` has the wrong length
    /// - [`Error::UnsupportedParameterSet`] if the variant's feature is disabled
    pub fn encaps(
        self,
        public_key: &[u8],
        rng: &mut impl CryptoRng,
    ) -> Result<(Vec<u8>, Zeroizing<[u8; 32]>)> {
        dispatch!(self, V => {
            use crystals_core::Kem;
            let ek = <V as Kem>::EncapsulationKey::from_bytes(public_key)?;
            let (ct, ss) = V::encaps(&ek, rng)?;
            let mut out = Zeroizing::new([0u8; 32]);
            out.copy_from_slice(ss.as_ref());
            Ok((ct.as_bytes().to_vec(), out))
        })
    }

    /// Decapsulate a serialized ciphertext with a serialized secret key.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `secret_key` has the wrong length
    /// - [`Error::InvalidCiphertextLength`] if `ciphertext` has the wrong length
    /// - [`Error::UnsupportedParameterSet`] if the variant's feature is disabled
    pub fn decaps(self, secret_key: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<[u8; 32]>> {
        dispatch!(self, V => {
            use crystals_core::Kem;
            let dk = <V as Kem>::DecapsulationKey::from_bytes(secret_key)?;
            let ct = <V as Kem>::Ciphertext::from_bytes(ciphertext)?;
            let ss = V::decaps(&dk, &ct)?;
            let mut out = Zeroizing::new([0u8; 32]);
            out.copy_from_slice(ss.as_ref());
            Ok(out)
        })
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    /// Parse a canonical name. Matching is case-insensitive and accepts `_`
    /// in place of `-`.
    fn from_str(s: &str) -> Result<Self> {
        ParameterSet::ALL
            .into_iter()
            .find(|set| {
                let name = set.name();
                name.len() == s.len()
                    && name.bytes().zip(s.bytes()).all(|(a, b)| {
                        let b = if b == b'_' { b'-' } else { b.to_ascii_uppercase() };
                        a == b
                    })
            })
            .ok_or_else(|| {
                log_debug!(name = s, "unknown parameter set name");
                Error::UnsupportedParameterSet
            })
    }
}
