//! IND-CPA-secure public-key encryption underlying the Kyber KEM.
//!
//! The KEM in [`crate::kem`] wraps these three functions with a
//! Fujisaki-Okamoto transform and implicit rejection.
//!
//! All outputs are written into caller-provided slices whose lengths are
//! checked by the caller; this module only debug-asserts them.

use crate::encode::{msg_to_poly, poly_to_msg};
use crate::matrix::{gen_matrix, matrix_vec_mul};
use crate::ntt::inv_ntt_tomont;
use crate::params::common::{POLYBYTES, SYMBYTES};
use crate::poly::{
    poly_add_assign, poly_compress, poly_decompress, poly_reduce, poly_sub, poly_tomont,
};
use crate::polyvec::PolyVec;
use crate::sample::poly_getnoise;
use crate::symmetric::Symmetric;
use zeroize::Zeroize;

/// Key generation.
///
/// # Arguments
/// * `coins` - 32-byte seed `d`
/// * `pk` - Output, `K * 384 + 32` bytes: `enc(t) || rho`
/// * `sk` - Output, `K * 384` bytes: `enc(s)`
///
/// # Algorithm
/// 1. (rho, sigma) = G(d)
/// 2. s, e sampled from sigma with nonces `0..2K`
/// 3. t = tomont(A * s) + e, all in the NTT domain
pub fn indcpa_keypair<S: Symmetric, const K: usize, const ETA1: usize>(
    coins: &[u8; 32],
    pk: &mut [u8],
    sk: &mut [u8],
) {
    debug_assert_eq!(pk.len(), K * POLYBYTES + SYMBYTES);
    debug_assert_eq!(sk.len(), K * POLYBYTES);

    let mut seeds = S::hash_g(coins);
    let mut rho = [0u8; 32];
    let mut sigma = [0u8; 32];
    rho.copy_from_slice(&seeds[..32]);
    sigma.copy_from_slice(&seeds[32..]);
    seeds.zeroize();

    let a = gen_matrix::<S, K>(&rho, false);

    let mut s: PolyVec<K> = PolyVec::new();
    let mut e: PolyVec<K> = PolyVec::new();
    for i in 0..K {
        s.polys[i] = poly_getnoise::<S, ETA1>(&sigma, i as u8);
    }
    for i in 0..K {
        e.polys[i] = poly_getnoise::<S, ETA1>(&sigma, (K + i) as u8);
    }
    sigma.zeroize();

    s.ntt();
    e.ntt();

    let mut t = matrix_vec_mul(&a, &s);
    for poly in &mut t.polys {
        poly_tomont(poly);
    }
    t.add_assign(&e);
    t.reduce();

    let (t_bytes, rho_bytes) = pk.split_at_mut(K * POLYBYTES);
    t.to_bytes(t_bytes);
    rho_bytes.copy_from_slice(&rho);
    s.to_bytes(sk);

    s.zeroize();
    e.zeroize();
}

/// Encryption of a 32-byte message under explicit randomness.
///
/// # Arguments
/// * `pk` - Public key, `K * 384 + 32` bytes
/// * `m` - Message
/// * `coins` - 32-byte randomness; noise nonces `0..2K+1` are derived from it
/// * `ct` - Output, `32 * (K * DU + DV)` bytes: `compress(u) || compress(v)`
///
/// The packed `t` is taken as-is, without reducing modulo q.
pub fn indcpa_enc<
    S: Symmetric,
    const K: usize,
    const ETA1: usize,
    const ETA2: usize,
    const DU: usize,
    const DV: usize,
>(
    pk: &[u8],
    m: &[u8; 32],
    coins: &[u8; 32],
    ct: &mut [u8],
) {
    debug_assert_eq!(pk.len(), K * POLYBYTES + SYMBYTES);
    debug_assert_eq!(ct.len(), 32 * (K * DU + DV));

    let (t_bytes, rho_bytes) = pk.split_at(K * POLYBYTES);
    let t: PolyVec<K> = PolyVec::from_bytes(t_bytes);
    let mut rho = [0u8; 32];
    rho.copy_from_slice(rho_bytes);

    let mut k = msg_to_poly(m);
    let at = gen_matrix::<S, K>(&rho, true);

    let mut r: PolyVec<K> = PolyVec::new();
    let mut e1: PolyVec<K> = PolyVec::new();
    for i in 0..K {
        r.polys[i] = poly_getnoise::<S, ETA1>(coins, i as u8);
    }
    for i in 0..K {
        e1.polys[i] = poly_getnoise::<S, ETA2>(coins, (K + i) as u8);
    }
    let mut e2 = poly_getnoise::<S, ETA2>(coins, (2 * K) as u8);

    r.ntt();

    let mut u = matrix_vec_mul(&at, &r);
    let mut v = t.basemul_acc_montgomery(&r);

    u.inv_ntt_tomont();
    inv_ntt_tomont(&mut v);

    u.add_assign(&e1);
    poly_add_assign(&mut v, &e2);
    poly_add_assign(&mut v, &k);
    u.reduce();
    poly_reduce(&mut v);

    let (c1, c2) = ct.split_at_mut(K * 32 * DU);
    u.compress::<DU>(c1);
    poly_compress::<DV>(&v, c2);

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    k.zeroize();
    v.zeroize();
    u.zeroize();
}

/// Decryption.
///
/// # Arguments
/// * `sk` - Secret key, `K * 384` bytes
/// * `ct` - Ciphertext, `32 * (K * DU + DV)` bytes
///
/// # Returns
/// The 32-byte message `encode(v - invntt(s * ntt(u)))`.
pub fn indcpa_dec<const K: usize, const DU: usize, const DV: usize>(
    sk: &[u8],
    ct: &[u8],
) -> [u8; 32] {
    debug_assert_eq!(sk.len(), K * POLYBYTES);
    debug_assert_eq!(ct.len(), 32 * (K * DU + DV));

    let (c1, c2) = ct.split_at(K * 32 * DU);
    let mut u: PolyVec<K> = PolyVec::decompress::<DU>(c1);
    let v = poly_decompress::<DV>(c2);
    let mut s: PolyVec<K> = PolyVec::from_bytes(sk);

    u.ntt();
    let mut mp = s.basemul_acc_montgomery(&u);
    inv_ntt_tomont(&mut mp);

    let mut w = poly_sub(&v, &mp);
    poly_reduce(&mut w);
    let m = poly_to_msg(&w);

    s.zeroize();
    mp.zeroize();
    w.zeroize();
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetric::{Aes90s, Shake};

    fn roundtrip<S: Symmetric, const K: usize, const ETA1: usize, const DU: usize, const DV: usize>() {
        let d = [0x42u8; 32];
        let mut pk = vec![0u8; K * POLYBYTES + SYMBYTES];
        let mut sk = vec![0u8; K * POLYBYTES];
        indcpa_keypair::<S, K, ETA1>(&d, &mut pk, &mut sk);

        let msg: [u8; 32] = core::array::from_fn(|i| (i * 29 + 3) as u8);
        let coins = [0xAAu8; 32];
        let mut ct = vec![0u8; 32 * (K * DU + DV)];
        indcpa_enc::<S, K, ETA1, 2, DU, DV>(&pk, &msg, &coins, &mut ct);

        assert_eq!(indcpa_dec::<K, DU, DV>(&sk, &ct), msg);
    }

    #[test]
    fn test_indcpa_roundtrip_all_shapes() {
        roundtrip::<Shake, 2, 3, 10, 4>();
        roundtrip::<Shake, 3, 2, 10, 4>();
        roundtrip::<Shake, 4, 2, 11, 5>();
        roundtrip::<Aes90s, 2, 3, 10, 4>();
        roundtrip::<Aes90s, 3, 2, 10, 4>();
        roundtrip::<Aes90s, 4, 2, 11, 5>();
    }

    #[test]
    fn test_indcpa_keypair_deterministic() {
        let d = [0x11u8; 32];
        let mut pk1 = [0u8; 3 * POLYBYTES + SYMBYTES];
        let mut sk1 = [0u8; 3 * POLYBYTES];
        let mut pk2 = [0u8; 3 * POLYBYTES + SYMBYTES];
        let mut sk2 = [0u8; 3 * POLYBYTES];
        indcpa_keypair::<Shake, 3, 2>(&d, &mut pk1, &mut sk1);
        indcpa_keypair::<Shake, 3, 2>(&d, &mut pk2, &mut sk2);
        assert_eq!(pk1, pk2);
        assert_eq!(sk1, sk2);
    }

    #[test]
    fn test_indcpa_pk_ends_with_rho() {
        let d = [0x11u8; 32];
        let mut pk = [0u8; 2 * POLYBYTES + SYMBYTES];
        let mut sk = [0u8; 2 * POLYBYTES];
        indcpa_keypair::<Aes90s, 2, 3>(&d, &mut pk, &mut sk);
        let g = Aes90s::hash_g(&d);
        assert_eq!(&pk[2 * POLYBYTES..], &g[..32]);
    }

    #[test]
    fn test_indcpa_packed_keys_are_canonical() {
        let d = [0x99u8; 32];
        let mut pk = [0u8; 4 * POLYBYTES + SYMBYTES];
        let mut sk = [0u8; 4 * POLYBYTES];
        indcpa_keypair::<Shake, 4, 2>(&d, &mut pk, &mut sk);
        let t: PolyVec<4> = PolyVec::from_bytes(&pk[..4 * POLYBYTES]);
        let s: PolyVec<4> = PolyVec::from_bytes(&sk);
        for poly in t.polys.iter().chain(s.polys.iter()) {
            assert!(poly.coeffs.iter().all(|&c| (0..crate::params::common::Q).contains(&c)));
        }
    }

    #[test]
    fn test_indcpa_coins_change_ciphertext() {
        let d = [0x01u8; 32];
        let mut pk = [0u8; 2 * POLYBYTES + SYMBYTES];
        let mut sk = [0u8; 2 * POLYBYTES];
        indcpa_keypair::<Shake, 2, 3>(&d, &mut pk, &mut sk);

        let msg = [0u8; 32];
        let mut c1 = [0u8; 768];
        let mut c2 = [0u8; 768];
        indcpa_enc::<Shake, 2, 3, 2, 10, 4>(&pk, &msg, &[1u8; 32], &mut c1);
        indcpa_enc::<Shake, 2, 3, 2, 10, 4>(&pk, &msg, &[2u8; 32], &mut c2);
        assert_ne!(c1, c2);
        assert_eq!(indcpa_dec::<2, 10, 4>(&sk, &c1), msg);
        assert_eq!(indcpa_dec::<2, 10, 4>(&sk, &c2), msg);
    }

    #[test]
    fn test_zero_ciphertext_decrypts_to_zero() {
        let sk = [0u8; 2 * POLYBYTES];
        let ct = [0u8; 768];
        assert_eq!(indcpa_dec::<2, 10, 4>(&sk, &ct), [0u8; 32]);
    }
}
