//! Runtime selection of a Dilithium parameter set.
//!
//! The typed variants (`Dilithium2`, `Dilithium3Aes`, ...) are the primary
//! API. [`ParameterSet`] is for callers that learn the set at runtime and
//! exchange keys and signatures as plain byte slices.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::str::FromStr;
use crystals_core::{log_debug, Error, Result};
use rand_core::CryptoRng;
use zeroize::Zeroizing;

/// One of the six Dilithium parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    /// DILITHIUM2
    Dilithium2,
    /// DILITHIUM3
    Dilithium3,
    /// DILITHIUM5
    Dilithium5,
    /// DILITHIUM2-AES
    Dilithium2Aes,
    /// DILITHIUM3-AES
    Dilithium3Aes,
    /// DILITHIUM5-AES
    Dilithium5Aes,
}

/// Run `$body` with `$v` bound to the variant type of `$set`, or fail with
/// [`Error::UnsupportedParameterSet`] if that variant is compiled out.
macro_rules! dispatch {
    ($set:expr, $v:ident => $body:expr) => {
        match $set {
            #[cfg(feature = "dilithium2")]
            ParameterSet::Dilithium2 => {
                use crate::dilithium2::Dilithium2 as $v;
                $body
            }
            #[cfg(feature = "dilithium3")]
            ParameterSet::Dilithium3 => {
                use crate::dilithium3::Dilithium3 as $v;
                $body
            }
            #[cfg(feature = "dilithium5")]
            ParameterSet::Dilithium5 => {
                use crate::dilithium5::Dilithium5 as $v;
                $body
            }
            #[cfg(feature = "dilithium2-aes")]
            ParameterSet::Dilithium2Aes => {
                use crate::dilithium2_aes::Dilithium2Aes as $v;
                $body
            }
            #[cfg(feature = "dilithium3-aes")]
            ParameterSet::Dilithium3Aes => {
                use crate::dilithium3_aes::Dilithium3Aes as $v;
                $body
            }
            #[cfg(feature = "dilithium5-aes")]
            ParameterSet::Dilithium5Aes => {
                use crate::dilithium5_aes::Dilithium5Aes as $v;
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
        ParameterSet::Dilithium2,
        ParameterSet::Dilithium3,
        ParameterSet::Dilithium5,
        ParameterSet::Dilithium2Aes,
        ParameterSet::Dilithium3Aes,
        ParameterSet::Dilithium5Aes,
    ];

    /// Canonical name, e.g. `"DILITHIUM3-AES"`.
    pub const fn name(self) -> &'static str {
        match self {
            ParameterSet::Dilithium2 => "DILITHIUM2",
            ParameterSet::Dilithium3 => "DILITHIUM3",
            ParameterSet::Dilithium5 => "DILITHIUM5",
            ParameterSet::Dilithium2Aes => "DILITHIUM2-AES",
            ParameterSet::Dilithium3Aes => "DILITHIUM3-AES",
            ParameterSet::Dilithium5Aes => "DILITHIUM5-AES",
        }
    }

    /// Whether this set expands with AES-256-CTR instead of SHAKE.
    pub const fn is_aes(self) -> bool {
        matches!(
            self,
            ParameterSet::Dilithium2Aes | ParameterSet::Dilithium3Aes | ParameterSet::Dilithium5Aes
        )
    }

    /// Mode number: 2, 3 or 5.
    pub const fn mode(self) -> u8 {
        match self {
            ParameterSet::Dilithium2 | ParameterSet::Dilithium2Aes => 2,
            ParameterSet::Dilithium3 | ParameterSet::Dilithium3Aes => 3,
            ParameterSet::Dilithium5 | ParameterSet::Dilithium5Aes => 5,
        }
    }

    /// Public (verification) key size in bytes.
    pub const fn public_key_bytes(self) -> usize {
        match self.mode() {
            2 => 1312,
            3 => 1952,
            _ => 2592,
        }
    }

    /// Secret (signing) key size in bytes.
    pub const fn secret_key_bytes(self) -> usize {
        match self.mode() {
            2 => 2528,
            3 => 4000,
            _ => 4864,
        }
    }

    /// Signature size in bytes.
    pub const fn signature_bytes(self) -> usize {
        match self.mode() {
            2 => 2420,
            3 => 3293,
            _ => 4595,
        }
    }

    /// Generate a key pair, returned as `(public_key, secret_key)` bytes.
    ///
    /// # Errors
    /// [`Error::UnsupportedParameterSet`] if the variant's feature is disabled.
    pub fn keypair(self, rng: &mut impl CryptoRng) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        dispatch!(self, V => {
            use crystals_core::Signer;
            let (sk, pk) = V::keygen(rng)?;
            Ok((pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec())))
        })
    }

    /// Deterministically sign `message` with a serialized secret key.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `secret_key` has the wrong length
    /// - [`Error::UnsupportedParameterSet`] if the variant's feature is disabled
    pub fn sign(self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        dispatch!(self, V => {
            use crystals_core::Signer;
            let sk = <V as Signer>::SigningKey::from_bytes(secret_key)?;
            Ok(V::sign(&sk, message)?.as_bytes().to_vec())
        })
    }

    /// Sign `message` with a fresh masking seed drawn from `rng`.
    ///
    /// # Errors
    /// Same as [`ParameterSet::sign`].
    pub fn sign_randomized(
        self,
        secret_key: &[u8],
        message: &[u8],
        rng: &mut impl CryptoRng,
    ) -> Result<Vec<u8>> {
        dispatch!(self, V => {
            use crystals_core::Signer;
            let sk = <V as Signer>::SigningKey::from_bytes(secret_key)?;
            Ok(V::sign_randomized(&sk, message, rng)?.as_bytes().to_vec())
        })
    }

    /// Verify a serialized signature against a serialized public key.
    ///
    /// Returns `Ok(false)` for a well-sized signature that does not verify.
    ///
    /// # Errors
    /// - [`Error::InvalidKeyLength`] if `public_key` has the wrong length
    /// - [`Error::InvalidSignatureLength`] if `signature` has the wrong length
    /// - [`Error::UnsupportedParameterSet`] if the variant's feature is disabled
    pub fn verify(self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        dispatch!(self, V => {
            use crystals_core::Signer;
            let pk = <V as Signer>::VerificationKey::from_bytes(public_key)?;
            let sig = <V as Signer>::Signature::from_bytes(signature)?;
            Ok(V::verify(&pk, message, &sig))
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
