//! Variant generator for Dilithium.
//!
//! Each mode module brings its `params` constants into scope and invokes
//! [`define_dilithium_variant!`] with the marker type name and the
//! expansion streams. The macro emits the fixed-size key and signature
//! wrappers, the seeded entry points and the [`Signer`] implementation.
//!
//! [`Signer`]: crystals_core::Signer

macro_rules! define_dilithium_variant {
    (
        $(#[$meta:meta])*
        name: $name:ident,
        symmetric: $sym:ty
    ) => {
        use crystals_core::{Error, Result, Signer};
        use rand_core::CryptoRng;
        use zeroize::{Zeroize, ZeroizeOnDrop};

        /// Signing key (secret key).
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct SigningKey {
            bytes: [u8; SIGNING_KEY_SIZE],
        }

        impl SigningKey {
            /// Create a signing key from bytes.
            ///
            /// Writes directly into the struct to avoid intermediate buffers
            /// that could leave sensitive data on the stack.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != SIGNING_KEY_SIZE {
                    crystals_core::log_debug!(
                        expected = SIGNING_KEY_SIZE,
                        actual = bytes.len(),
                        "rejecting signing key"
                    );
                    return Err(Error::InvalidKeyLength {
                        expected: SIGNING_KEY_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; SIGNING_KEY_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the key as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Verification key (public key).
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct VerificationKey {
            bytes: [u8; VERIFICATION_KEY_SIZE],
        }

        impl VerificationKey {
            /// Create a verification key from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != VERIFICATION_KEY_SIZE {
                    crystals_core::log_debug!(
                        expected = VERIFICATION_KEY_SIZE,
                        actual = bytes.len(),
                        "rejecting verification key"
                    );
                    return Err(Error::InvalidKeyLength {
                        expected: VERIFICATION_KEY_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; VERIFICATION_KEY_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the key as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Detached signature `c~ || z || h`.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Signature {
            bytes: [u8; SIGNATURE_SIZE],
        }

        impl Signature {
            /// Create a signature from bytes.
            ///
            /// Only the length is checked here; the hint encoding is
            /// validated by [`Signer::verify`].
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != SIGNATURE_SIZE {
                    crystals_core::log_debug!(
                        expected = SIGNATURE_SIZE,
                        actual = bytes.len(),
                        "rejecting signature"
                    );
                    return Err(Error::InvalidSignatureLength {
                        expected: SIGNATURE_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; SIGNATURE_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the signature as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            /// Deterministic key generation from the 32-byte seed that
            /// [`Signer::keygen`] would draw.
            pub fn keygen_from_seed(seed: &[u8; 32]) -> (SigningKey, VerificationKey) {
                let mut sk = SigningKey {
                    bytes: [0u8; SIGNING_KEY_SIZE],
                };
                let mut pk = VerificationKey {
                    bytes: [0u8; VERIFICATION_KEY_SIZE],
                };
                $crate::sign::keypair::<$sym, K, L, ETA>(seed, &mut pk.bytes, &mut sk.bytes);
                (sk, pk)
            }

            /// Sign with an explicit 64-byte masking seed, as
            /// [`Signer::sign_randomized`] does with bytes from its RNG.
            pub fn sign_with_seed(sk: &SigningKey, message: &[u8], rnd: &[u8; 64]) -> Signature {
                Self::sign_inner(sk, message, Some(rnd))
            }

            fn sign_inner(sk: &SigningKey, message: &[u8], rnd: Option<&[u8; 64]>) -> Signature {
                let mut sig = Signature {
                    bytes: [0u8; SIGNATURE_SIZE],
                };
                $crate::sign::sign::<$sym, K, L, ETA, TAU, BETA, GAMMA1, GAMMA2, OMEGA>(
                    &sk.bytes,
                    message,
                    rnd,
                    &mut sig.bytes,
                );
                sig
            }
        }

        impl Signer for $name {
            type SigningKey = SigningKey;
            type VerificationKey = VerificationKey;
            type Signature = Signature;

            const SIGNING_KEY_SIZE: usize = SIGNING_KEY_SIZE;
            const VERIFICATION_KEY_SIZE: usize = VERIFICATION_KEY_SIZE;
            const SIGNATURE_SIZE: usize = SIGNATURE_SIZE;

            fn keygen(
                rng: &mut impl CryptoRng,
            ) -> Result<(Self::SigningKey, Self::VerificationKey)> {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                let keys = Self::keygen_from_seed(&seed);
                seed.zeroize();
                Ok(keys)
            }

            fn sign(sk: &Self::SigningKey, message: &[u8]) -> Result<Self::Signature> {
                Ok(Self::sign_inner(sk, message, None))
            }

            fn sign_randomized(
                sk: &Self::SigningKey,
                message: &[u8],
                rng: &mut impl CryptoRng,
            ) -> Result<Self::Signature> {
                let mut rnd = [0u8; 64];
                rng.fill_bytes(&mut rnd);
                let sig = Self::sign_inner(sk, message, Some(&rnd));
                rnd.zeroize();
                Ok(sig)
            }

            fn verify(
                pk: &Self::VerificationKey,
                message: &[u8],
                signature: &Self::Signature,
            ) -> bool {
                $crate::sign::verify::<$sym, K, L, TAU, BETA, GAMMA1, GAMMA2, OMEGA>(
                    &pk.bytes,
                    message,
                    &signature.bytes,
                )
            }
        }
    };
}

pub(crate) use define_dilithium_variant;
