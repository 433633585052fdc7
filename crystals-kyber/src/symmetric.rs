//! Symmetric primitives for Kyber.
//!
//! Every parameter set picks one provider:
//!
//! | role | [`Shake`] | [`Aes90s`] |
//! |------|-----------|------------|
//! | H    | SHA3-256  | SHA-256    |
//! | G    | SHA3-512  | SHA-512    |
//! | XOF  | SHAKE128(seed \|\| x \|\| y) | AES-256-CTR, nonce `x \|\| y \|\| 0^10` |
//! | PRF  | SHAKE256(key \|\| n) | AES-256-CTR, nonce `n \|\| 0^11` |
//! | KDF  | SHAKE256, 32 bytes | SHA-256 |
//!
//! The XOF is returned as a streaming [`XofReader`] so rejection sampling
//! consumes exactly the bytes the reference block-wise implementation would.

use crystals_core::Aes256Ctr;
use sha3::digest::{Digest, ExtendableOutput, Update, XofReader};
use sha3::{Sha3_256, Sha3_512, Shake128, Shake256};

/// Symmetric primitives consumed by the Kyber engine.
pub trait Symmetric {
    /// Streaming reader returned by [`Symmetric::xof`].
    type Xof: XofReader;

    /// Hash function H (32-byte output).
    fn hash_h(input: &[u8]) -> [u8; 32];

    /// Hash function G (64-byte output).
    fn hash_g(input: &[u8]) -> [u8; 64];

    /// Extendable output seeded with `seed` and two domain bytes.
    fn xof(seed: &[u8; 32], x: u8, y: u8) -> Self::Xof;

    /// Fill `out` with pseudorandom bytes keyed by `key` and `nonce`.
    fn prf(key: &[u8; 32], nonce: u8, out: &mut [u8]);

    /// Key derivation for the final shared secret.
    fn kdf(input: &[u8]) -> [u8; 32];
}

/// SHA-3 / SHAKE provider used by KYBER512, KYBER768 and KYBER1024.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake;

impl Symmetric for Shake {
    type Xof = sha3::Shake128Reader;

    #[inline]
    fn hash_h(input: &[u8]) -> [u8; 32] {
        Sha3_256::digest(input).into()
    }

    #[inline]
    fn hash_g(input: &[u8]) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&Sha3_512::digest(input));
        out
    }

    fn xof(seed: &[u8; 32], x: u8, y: u8) -> Self::Xof {
        let mut hasher = Shake128::default();
        Update::update(&mut hasher, seed);
        Update::update(&mut hasher, &[x, y]);
        hasher.finalize_xof()
    }

    fn prf(key: &[u8; 32], nonce: u8, out: &mut [u8]) {
        let mut hasher = Shake256::default();
        Update::update(&mut hasher, key);
        Update::update(&mut hasher, &[nonce]);
        hasher.finalize_xof().read(out);
    }

    fn kdf(input: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        Shake256::digest_xof(input, &mut out);
        out
    }
}

/// AES-256-CTR / SHA-2 provider used by the `-AES` ("90s") variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes90s;

impl Symmetric for Aes90s {
    type Xof = Aes256Ctr;

    #[inline]
    fn hash_h(input: &[u8]) -> [u8; 32] {
        sha2::Sha256::digest(input).into()
    }

    #[inline]
    fn hash_g(input: &[u8]) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&sha2::Sha512::digest(input));
        out
    }

    fn xof(seed: &[u8; 32], x: u8, y: u8) -> Self::Xof {
        let mut nonce = [0u8; 12];
        nonce[0] = x;
        nonce[1] = y;
        Aes256Ctr::new(seed, &nonce)
    }

    fn prf(key: &[u8; 32], nonce: u8, out: &mut [u8]) {
        let mut iv = [0u8; 12];
        iv[0] = nonce;
        Aes256Ctr::new(key, &iv).read(out);
    }

    #[inline]
    fn kdf(input: &[u8]) -> [u8; 32] {
        sha2::Sha256::digest(input).into()
    }
}
