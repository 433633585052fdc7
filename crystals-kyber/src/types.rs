//! Variant generator for Kyber.
//!
//! Each parameter-set module brings its `params` constants into scope and
//! invokes [`define_kyber_variant!`] with the marker type name and the
//! symmetric provider. The macro emits the fixed-size key, ciphertext and
//! shared-secret wrappers, the derandomized entry points and the [`Kem`]
//! implementation.
//!
//! [`Kem`]: crystals_core::Kem

macro_rules! define_kyber_variant {
    (
        $(#[$meta:meta])*
        name: $name:ident,
        symmetric: $sym:ty
    ) => {
        use crystals_core::{Error, Kem, Result};
        use rand_core::CryptoRng;
        use zeroize::{Zeroize, ZeroizeOnDrop};

        /// Decapsulation key (secret key).
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct DecapsulationKey {
            bytes: [u8; DECAPSULATION_KEY_SIZE],
        }

        impl DecapsulationKey {
            /// Create a decapsulation key from bytes.
            ///
            /// Writes directly into the struct to avoid intermediate buffers
            /// that could leave sensitive data on the stack.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != DECAPSULATION_KEY_SIZE {
                    crystals_core::log_debug!(
                        expected = DECAPSULATION_KEY_SIZE,
                        actual = bytes.len(),
                        "rejecting decapsulation key"
                    );
                    return Err(Error::InvalidKeyLength {
                        expected: DECAPSULATION_KEY_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; DECAPSULATION_KEY_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the key as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Encapsulation key (public key).
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct EncapsulationKey {
            bytes: [u8; ENCAPSULATION_KEY_SIZE],
        }

        impl EncapsulationKey {
            /// Create an encapsulation key from bytes.
            ///
            /// Only the length is checked; the packed coefficients are used
            /// as-is.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != ENCAPSULATION_KEY_SIZE {
                    crystals_core::log_debug!(
                        expected = ENCAPSULATION_KEY_SIZE,
                        actual = bytes.len(),
                        "rejecting encapsulation key"
                    );
                    return Err(Error::InvalidKeyLength {
                        expected: ENCAPSULATION_KEY_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; ENCAPSULATION_KEY_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the key as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Ciphertext.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Ciphertext {
            bytes: [u8; CIPHERTEXT_SIZE],
        }

        impl Ciphertext {
            /// Create a ciphertext from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != CIPHERTEXT_SIZE {
                    crystals_core::log_debug!(
                        expected = CIPHERTEXT_SIZE,
                        actual = bytes.len(),
                        "rejecting ciphertext"
                    );
                    return Err(Error::InvalidCiphertextLength {
                        expected: CIPHERTEXT_SIZE,
                        actual: bytes.len(),
                    });
                }
                let mut result = Self {
                    bytes: [0u8; CIPHERTEXT_SIZE],
                };
                result.bytes.copy_from_slice(bytes);
                Ok(result)
            }

            /// Get the ciphertext as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }

        /// Shared secret.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct SharedSecret {
            bytes: [u8; SHARED_SECRET_SIZE],
        }

        impl AsRef<[u8]> for SharedSecret {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            /// Deterministic key generation from the two 32-byte seeds that
            /// [`Kem::keygen`] would draw: `d` for the key pair and `z` for
            /// implicit rejection.
            pub fn keygen_from_seed(
                d: &[u8; 32],
                z: &[u8; 32],
            ) -> (DecapsulationKey, EncapsulationKey) {
                let mut dk = DecapsulationKey {
                    bytes: [0u8; DECAPSULATION_KEY_SIZE],
                };
                let mut ek = EncapsulationKey {
                    bytes: [0u8; ENCAPSULATION_KEY_SIZE],
                };
                $crate::kem::kem_keypair::<$sym, K, ETA1>(d, z, &mut ek.bytes, &mut dk.bytes);
                (dk, ek)
            }

            /// Deterministic encapsulation from the 32 bytes that
            /// [`Kem::encaps`] would draw.
            pub fn encaps_from_seed(
                ek: &EncapsulationKey,
                seed: &[u8; 32],
            ) -> (Ciphertext, SharedSecret) {
                let mut ct = Ciphertext {
                    bytes: [0u8; CIPHERTEXT_SIZE],
                };
                let mut ss = SharedSecret {
                    bytes: [0u8; SHARED_SECRET_SIZE],
                };
                let mut bytes = $crate::kem::kem_encaps::<$sym, K, ETA1, ETA2, DU, DV>(
                    &ek.bytes,
                    seed,
                    &mut ct.bytes,
                );
                ss.bytes.copy_from_slice(&bytes);
                bytes.zeroize();
                (ct, ss)
            }
        }

        impl Kem for $name {
            type DecapsulationKey = DecapsulationKey;
            type EncapsulationKey = EncapsulationKey;
            type Ciphertext = Ciphertext;
            type SharedSecret = SharedSecret;

            const DECAPSULATION_KEY_SIZE: usize = DECAPSULATION_KEY_SIZE;
            const ENCAPSULATION_KEY_SIZE: usize = ENCAPSULATION_KEY_SIZE;
            const CIPHERTEXT_SIZE: usize = CIPHERTEXT_SIZE;
            const SHARED_SECRET_SIZE: usize = SHARED_SECRET_SIZE;

            fn keygen(
                rng: &mut impl CryptoRng,
            ) -> Result<(Self::DecapsulationKey, Self::EncapsulationKey)> {
                let mut d = [0u8; 32];
                let mut z = [0u8; 32];
                rng.fill_bytes(&mut d);
                rng.fill_bytes(&mut z);
                let keys = Self::keygen_from_seed(&d, &z);
                d.zeroize();
                z.zeroize();
                Ok(keys)
            }

            fn encaps(
                ek: &Self::EncapsulationKey,
                rng: &mut impl CryptoRng,
            ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
                let mut seed = [0u8; 32];
                rng.fill_bytes(&mut seed);
                let out = Self::encaps_from_seed(ek, &seed);
                seed.zeroize();
                Ok(out)
            }

            fn decaps(
                dk: &Self::DecapsulationKey,
                ct: &Self::Ciphertext,
            ) -> Result<Self::SharedSecret> {
                let mut bytes =
                    $crate::kem::kem_decaps::<$sym, K, ETA1, ETA2, DU, DV>(&dk.bytes, &ct.bytes)?;
                let ss = SharedSecret { bytes };
                bytes.zeroize();
                Ok(ss)
            }
        }
    };
}

pub(crate) use define_kyber_variant;
