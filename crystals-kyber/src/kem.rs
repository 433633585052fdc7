//! Kyber key encapsulation (round 3, IND-CCA2).
//!
//! A Fujisaki-Okamoto transform over [`crate::indcpa`] with implicit
//! rejection: a ciphertext that fails re-encryption decapsulates to
//! `KDF(z || H(c))` instead of producing an error.

use crate::indcpa::{indcpa_dec, indcpa_enc, indcpa_keypair};
use crate::params::common::{POLYBYTES, SYMBYTES};
use crate::symmetric::Symmetric;
use crystals_core::{log_debug, Error, Result};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Largest ciphertext of any parameter set (Kyber1024).
const MAX_CIPHERTEXT_SIZE: usize = 1568;

const fn pk_size(k: usize) -> usize {
    k * POLYBYTES + SYMBYTES
}

const fn sk_size(k: usize) -> usize {
    k * POLYBYTES + pk_size(k) + 2 * SYMBYTES
}

const fn ct_size(k: usize, du: usize, dv: usize) -> usize {
    32 * (k * du + dv)
}

/// Key generation from explicit seeds.
///
/// # Arguments
/// * `d` - 32-byte seed for the IND-CPA key pair
/// * `z` - 32-byte implicit-rejection secret
/// * `pk` - Output public key
/// * `sk` - Output secret key: `sk_cpa || pk || H(pk) || z`
pub fn kem_keypair<S: Symmetric, const K: usize, const ETA1: usize>(
    d: &[u8; 32],
    z: &[u8; 32],
    pk: &mut [u8],
    sk: &mut [u8],
) {
    debug_assert_eq!(pk.len(), pk_size(K));
    debug_assert_eq!(sk.len(), sk_size(K));

    let (sk_cpa, rest) = sk.split_at_mut(K * POLYBYTES);
    indcpa_keypair::<S, K, ETA1>(d, pk, sk_cpa);

    let (sk_pk, rest) = rest.split_at_mut(pk_size(K));
    let (sk_h, sk_z) = rest.split_at_mut(SYMBYTES);
    sk_pk.copy_from_slice(pk);
    sk_h.copy_from_slice(&S::hash_h(pk));
    sk_z.copy_from_slice(z);
}

/// Encapsulation from an explicit 32-byte seed.
///
/// Infallible: `pk` must be `K * 384 + 32` bytes, which the fixed-size
/// `EncapsulationKey` wrappers guarantee at construction.
///
/// # Arguments
/// * `pk` - Public key
/// * `seed` - Encapsulation randomness; hashed before use
/// * `ct` - Output ciphertext
///
/// # Returns
/// The 32-byte shared secret.
///
/// # Algorithm
/// 1. m = H(seed)
/// 2. (K_bar, r) = G(m || H(pk))
/// 3. c = Enc(pk, m, r)
/// 4. ss = KDF(K_bar || H(c))
pub fn kem_encaps<
    S: Symmetric,
    const K: usize,
    const ETA1: usize,
    const ETA2: usize,
    const DU: usize,
    const DV: usize,
>(
    pk: &[u8],
    seed: &[u8; 32],
    ct: &mut [u8],
) -> [u8; 32] {
    debug_assert_eq!(pk.len(), pk_size(K));
    debug_assert_eq!(ct.len(), ct_size(K, DU, DV));

    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(&S::hash_h(seed));
    buf[32..].copy_from_slice(&S::hash_h(pk));
    let mut kr = S::hash_g(&buf);

    let mut m = [0u8; 32];
    let mut coins = [0u8; 32];
    m.copy_from_slice(&buf[..32]);
    coins.copy_from_slice(&kr[32..]);
    indcpa_enc::<S, K, ETA1, ETA2, DU, DV>(pk, &m, &coins, ct);

    kr[32..].copy_from_slice(&S::hash_h(ct));
    let ss = S::kdf(&kr);

    buf.zeroize();
    kr.zeroize();
    m.zeroize();
    coins.zeroize();
    ss
}

/// Decapsulation with implicit rejection.
///
/// # Errors
/// - [`Error::InvalidKeyLength`] if `sk` is not `K * 768 + 96` bytes
/// - [`Error::InvalidCiphertextLength`] if `ct` is not `32 * (K * DU + DV)` bytes
///
/// A well-formed ciphertext that fails the re-encryption check is not an
/// error; it yields `KDF(z || H(ct))`.
///
/// # Algorithm
/// 1. m' = Dec(sk_cpa, c)
/// 2. (K_bar', r') = G(m' || h)
/// 3. c' = Enc(pk, m', r')
/// 4. ss = KDF((c == c' ? K_bar' : z) || H(c)), selected in constant time
pub fn kem_decaps<
    S: Symmetric,
    const K: usize,
    const ETA1: usize,
    const ETA2: usize,
    const DU: usize,
    const DV: usize,
>(
    sk: &[u8],
    ct: &[u8],
) -> Result<[u8; 32]> {
    if sk.len() != sk_size(K) {
        log_debug!(expected = sk_size(K), actual = sk.len(), "decaps: bad secret key length");
        return Err(Error::InvalidKeyLength {
            expected: sk_size(K),
            actual: sk.len(),
        });
    }
    let ct_len = ct_size(K, DU, DV);
    if ct.len() != ct_len {
        log_debug!(expected = ct_len, actual = ct.len(), "decaps: bad ciphertext length");
        return Err(Error::InvalidCiphertextLength {
            expected: ct_len,
            actual: ct.len(),
        });
    }

    let (sk_cpa, rest) = sk.split_at(K * POLYBYTES);
    let (pk, rest) = rest.split_at(pk_size(K));
    let (h, z) = rest.split_at(SYMBYTES);

    let mut buf = [0u8; 64];
    let mut m = indcpa_dec::<K, DU, DV>(sk_cpa, ct);
    buf[..32].copy_from_slice(&m);
    buf[32..].copy_from_slice(h);
    let mut kr = S::hash_g(&buf);

    let mut coins = [0u8; 32];
    coins.copy_from_slice(&kr[32..]);
    let mut cmp = [0u8; MAX_CIPHERTEXT_SIZE];
    indcpa_enc::<S, K, ETA1, ETA2, DU, DV>(pk, &m, &coins, &mut cmp[..ct_len]);

    let fail = !ct.ct_eq(&cmp[..ct_len]);
    for (k, z) in kr[..32].iter_mut().zip(z.iter()) {
        k.conditional_assign(z, fail);
    }

    kr[32..].copy_from_slice(&S::hash_h(ct));
    let ss = S::kdf(&kr);

    buf.zeroize();
    kr.zeroize();
    m.zeroize();
    coins.zeroize();
    cmp.zeroize();
    Ok(ss)
}
