//! Symmetric primitives for Dilithium.
//!
//! Matrix expansion and secret/mask sampling read from one of two seeded
//! streams, selected per parameter set:
//!
//! | stream | [`Shake`] | [`Aes`] |
//! |--------|-----------|---------|
//! | `stream128` | SHAKE128(rho \|\| nonce) | AES-256-CTR, key `rho` |
//! | `stream256` | SHAKE256(rho' \|\| nonce) | AES-256-CTR, key `rho'[..32]` |
//!
//! The nonce is a little-endian `u16`. For AES it occupies the first two
//! bytes of the 96-bit IV and the remaining ten are zero.
//!
//! Seed expansion, `tr`, `mu`, the challenge seed and the challenge itself
//! always use SHAKE256 via [`shake256`].

use crystals_core::Aes256Ctr;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake256};

/// Seeded streams consumed by the Dilithium engine.
pub trait Symmetric {
    /// Reader returned by [`Symmetric::stream128`].
    type Stream128: XofReader;

    /// Reader returned by [`Symmetric::stream256`].
    type Stream256: XofReader;

    /// Stream for uniform sampling of the public matrix.
    fn stream128(seed: &[u8; 32], nonce: u16) -> Self::Stream128;

    /// Stream for eta and gamma1 sampling.
    fn stream256(seed: &[u8; 64], nonce: u16) -> Self::Stream256;
}

/// SHAKE provider used by DILITHIUM2, DILITHIUM3 and DILITHIUM5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shake;

impl Symmetric for Shake {
    type Stream128 = sha3::Shake128Reader;
    type Stream256 = sha3::Shake256Reader;

    fn stream128(seed: &[u8; 32], nonce: u16) -> Self::Stream128 {
        let mut hasher = Shake128::default();
        hasher.update(seed);
        hasher.update(&nonce.to_le_bytes());
        hasher.finalize_xof()
    }

    fn stream256(seed: &[u8; 64], nonce: u16) -> Self::Stream256 {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        hasher.update(&nonce.to_le_bytes());
        hasher.finalize_xof()
    }
}

/// AES-256-CTR provider used by the `-AES` variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes;

fn aes_stream(key: &[u8], nonce: u16) -> Aes256Ctr {
    let mut k = [0u8; 32];
    k.copy_from_slice(&key[..32]);
    let mut iv = [0u8; 12];
    iv[..2].copy_from_slice(&nonce.to_le_bytes());
    let ctr = Aes256Ctr::new(&k, &iv);
    zeroize::Zeroize::zeroize(&mut k);
    ctr
}

impl Symmetric for Aes {
    type Stream128 = Aes256Ctr;
    type Stream256 = Aes256Ctr;

    fn stream128(seed: &[u8; 32], nonce: u16) -> Self::Stream128 {
        aes_stream(seed, nonce)
    }

    fn stream256(seed: &[u8; 64], nonce: u16) -> Self::Stream256 {
        aes_stream(seed, nonce)
    }
}

/// SHAKE256 over the concatenation of `parts`, squeezed into `out`.
pub fn shake256(parts: &[&[u8]], out: &mut [u8]) {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize_xof().read(out);
}

/// SHAKE256 reader over the concatenation of `parts`.
pub fn shake256_reader(parts: &[&[u8]]) -> sha3::Shake256Reader {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize_xof()
}
