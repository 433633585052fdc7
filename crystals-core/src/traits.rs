//! Cryptographic primitive traits.

use crate::Result;
use rand_core::CryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key Encapsulation Mechanism (KEM) trait.
///
/// Implemented by every Kyber parameter set. Secret-bearing associated
/// types must wipe themselves on drop.
///
/// # Example
///
/// ```ignore
/// use crystals_core::Kem;
///
/// let (dk, ek) = MyKem::keygen(&mut rng)?;
/// let (ct, ss_sender) = MyKem::encaps(&ek, &mut rng)?;
/// let ss_receiver = MyKem::decaps(&dk, &ct)?;
/// ```
pub trait Kem {
    /// Decapsulation key (private key).
    type DecapsulationKey: Zeroize + ZeroizeOnDrop;

    /// Encapsulation key (public key).
    type EncapsulationKey: Clone;

    /// Ciphertext produced by encapsulation.
    type Ciphertext: Clone;

    /// Shared secret produced by encapsulation/decapsulation.
    type SharedSecret: Zeroize + ZeroizeOnDrop + AsRef<[u8]>;

    /// Size of the decapsulation key in bytes.
    const DECAPSULATION_KEY_SIZE: usize;

    /// Size of the encapsulation key in bytes.
    const ENCAPSULATION_KEY_SIZE: usize;

    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_SIZE: usize;

    /// Size of the shared secret in bytes.
    const SHARED_SECRET_SIZE: usize;

    /// Generate a new key pair.
    ///
    /// Draws 64 bytes from `rng`: the key-generation seed followed by the
    /// implicit-rejection secret `z`.
    ///
    /// # Returns
    ///
    /// A tuple of (decapsulation_key, encapsulation_key).
    fn keygen(
        rng: &mut impl CryptoRng,
    ) -> Result<(Self::DecapsulationKey, Self::EncapsulationKey)>;

    /// Encapsulate a shared secret using the encapsulation key.
    ///
    /// # Returns
    ///
    /// A tuple of (ciphertext, shared_secret).
    fn encaps(
        ek: &Self::EncapsulationKey,
        rng: &mut impl CryptoRng,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the decapsulation key.
    ///
    /// # Security
    ///
    /// Implementations use implicit rejection: a ciphertext that fails the
    /// re-encryption check yields a pseudorandom secret derived from the
    /// key's `z` value and the ciphertext, never an error.
    fn decaps(dk: &Self::DecapsulationKey, ct: &Self::Ciphertext) -> Result<Self::SharedSecret>;
}

/// Digital signature trait.
///
/// # Example
///
/// ```ignore
/// use crystals_core::Signer;
///
/// let (sk, pk) = MySigner::keygen(&mut rng)?;
/// let sig = MySigner::sign(&sk, message)?;
/// assert!(MySigner::verify(&pk, message, &sig));
/// ```
pub trait Signer {
    /// Signing key (private key).
    type SigningKey: Zeroize + ZeroizeOnDrop;

    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature produced by signing.
    type Signature: Clone;

    /// Size of the signing key in bytes.
    const SIGNING_KEY_SIZE: usize;

    /// Size of the verification key in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Size of the signature in bytes.
    const SIGNATURE_SIZE: usize;

    /// Generate a new key pair from a 32-byte seed drawn from `rng`.
    ///
    /// # Returns
    ///
    /// A tuple of (signing_key, verification_key).
    fn keygen(rng: &mut impl CryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Sign a message deterministically.
    ///
    /// The masking seed is derived from the key and the message, so the same
    /// key and message always give the same signature.
    fn sign(sk: &Self::SigningKey, message: &[u8]) -> Result<Self::Signature>;

    /// Sign a message with a fresh 64-byte masking seed drawn from `rng`.
    fn sign_randomized(
        sk: &Self::SigningKey,
        message: &[u8],
        rng: &mut impl CryptoRng,
    ) -> Result<Self::Signature>;

    /// Verify a signature.
    ///
    /// Returns `true` only for a well-formed signature over `message` under
    /// `pk`. Malformed hints, out-of-range responses and challenge mismatches
    /// all return `false`.
    fn verify(pk: &Self::VerificationKey, message: &[u8], signature: &Self::Signature) -> bool;
}
