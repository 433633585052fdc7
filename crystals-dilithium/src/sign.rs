//! Dilithium key generation, signing and verification.
//!
//! The engine is generic over the expansion streams (`S`) and the lattice
//! parameters; each variant instantiates it with its own constants.
//! Keys and signatures are written into caller-provided slices of the
//! exact encoded length.

use crate::packing::{
    pack_pk, pack_sig, pack_sk, pack_w1, polyw1_packed_bytes, signature_size, signing_key_size,
    unpack_pk, unpack_sig, unpack_sk, verification_key_size, SecretKeyParts,
};
use crate::params::common::{CRHBYTES, SEEDBYTES};
use crate::polyvec::{expand_matrix, matrix_mul, PolyVec};
use crate::sample::sample_challenge;
use crate::symmetric::{shake256, Symmetric};
use crystals_core::{log_debug, log_trace};
use zeroize::Zeroizing;

/// Largest packed w1 vector (K = 8, 4 bits per coefficient).
const MAX_W1_BYTES: usize = 1024;

/// Pack `w1` and hash it with `mu` into the challenge seed.
fn challenge_seed<const K: usize, const GAMMA2: i32>(
    mu: &[u8; CRHBYTES],
    w1: &PolyVec<K>,
) -> [u8; SEEDBYTES] {
    let poly_bytes = polyw1_packed_bytes(GAMMA2);
    let mut buf = [0u8; MAX_W1_BYTES];
    let packed = &mut buf[..K * poly_bytes];
    for (poly, chunk) in w1.polys.iter().zip(packed.chunks_exact_mut(poly_bytes)) {
        pack_w1::<GAMMA2>(poly, chunk);
    }
    let mut c_tilde = [0u8; SEEDBYTES];
    shake256(&[mu, packed], &mut c_tilde);
    c_tilde
}

/// Deterministic key generation from a 32-byte seed.
///
/// Writes `rho || t1` into `pk` and `rho || key || tr || s1 || s2 || t0`
/// into `sk`.
pub fn keypair<S: Symmetric, const K: usize, const L: usize, const ETA: usize>(
    seed: &[u8; SEEDBYTES],
    pk: &mut [u8],
    sk: &mut [u8],
) {
    debug_assert_eq!(pk.len(), verification_key_size(K));
    debug_assert_eq!(sk.len(), signing_key_size(K, L, ETA));

    // (rho, rho', key) = SHAKE256(seed)
    let mut seedbuf = Zeroizing::new([0u8; 2 * SEEDBYTES + CRHBYTES]);
    shake256(&[seed], &mut seedbuf[..]);
    let mut rho = [0u8; SEEDBYTES];
    let mut rhoprime = Zeroizing::new([0u8; CRHBYTES]);
    rho.copy_from_slice(&seedbuf[..SEEDBYTES]);
    rhoprime.copy_from_slice(&seedbuf[SEEDBYTES..SEEDBYTES + CRHBYTES]);

    let mat = expand_matrix::<S, K, L>(&rho);

    let mut parts = Zeroizing::new(SecretKeyParts::<K, L> {
        rho,
        key: [0u8; SEEDBYTES],
        tr: [0u8; SEEDBYTES],
        s1: PolyVec::uniform_eta::<S, ETA>(&rhoprime, 0),
        s2: PolyVec::uniform_eta::<S, ETA>(&rhoprime, L as u16),
        t0: PolyVec::default(),
    });
    parts.key.copy_from_slice(&seedbuf[SEEDBYTES + CRHBYTES..]);

    // t = A * s1 + s2
    let mut s1_hat = Zeroizing::new(parts.s1.clone());
    s1_hat.ntt();
    let mut t = Zeroizing::new(matrix_mul(&mat, &s1_hat));
    t.reduce();
    t.inv_ntt_tomont();
    t.add_assign(&parts.s2);
    t.caddq();

    let (t1, t0) = t.power2round();
    parts.t0 = t0;

    pack_pk::<K>(&rho, &t1, pk);
    shake256(&[pk], &mut parts.tr);
    pack_sk::<K, L, ETA>(&parts, sk);
}

/// Sign `message` with the packed secret key `sk`, writing `c~ || z || h`
/// into `sig`.
///
/// With `rnd` absent the masking seed is `SHAKE256(key || mu)` and the
/// signature is deterministic; otherwise `rnd` is used as the seed.
///
/// The rejection loop has no iteration limit. Each attempt samples a fresh
/// mask with the next nonce.
///
/// `sk` must be exactly the packed signing key size; the fixed-size
/// `SigningKey` wrappers guarantee it at construction.
pub fn sign<
    S: Symmetric,
    const K: usize,
    const L: usize,
    const ETA: usize,
    const TAU: usize,
    const BETA: i32,
    const GAMMA1: i32,
    const GAMMA2: i32,
    const OMEGA: usize,
>(
    sk: &[u8],
    message: &[u8],
    rnd: Option<&[u8; CRHBYTES]>,
    sig: &mut [u8],
) {
    debug_assert_eq!(sk.len(), signing_key_size(K, L, ETA));
    debug_assert_eq!(sig.len(), signature_size(K, L, GAMMA1, OMEGA));

    let mut parts = Zeroizing::new(unpack_sk::<K, L, ETA>(sk));

    // mu = CRH(tr || M)
    let mut mu = [0u8; CRHBYTES];
    shake256(&[&parts.tr, message], &mut mu);

    let mut rhoprime = Zeroizing::new([0u8; CRHBYTES]);
    match rnd {
        Some(seed) => rhoprime.copy_from_slice(seed),
        None => shake256(&[&parts.key, &mu], &mut rhoprime[..]),
    }

    let mat = expand_matrix::<S, K, L>(&parts.rho);
    parts.s1.ntt();
    parts.s2.ntt();
    parts.t0.ntt();

    let mut nonce: u16 = 0;
    loop {
        let y = Zeroizing::new(PolyVec::<L>::uniform_gamma1::<S, GAMMA1>(&rhoprime, nonce));
        nonce = nonce.wrapping_add(1);

        // w = A * y
        let mut y_hat = Zeroizing::new((*y).clone());
        y_hat.ntt();
        let mut w = Zeroizing::new(matrix_mul(&mat, &y_hat));
        w.reduce();
        w.inv_ntt_tomont();
        w.caddq();

        let (w1, w0) = w.decompose::<GAMMA2>();
        let mut w0 = Zeroizing::new(w0);
        let c_tilde = challenge_seed::<K, GAMMA2>(&mu, &w1);
        let mut cp = sample_challenge::<TAU>(&c_tilde);
        cp.ntt();

        // z = y + c * s1
        let mut z = Zeroizing::new(parts.s1.pointwise_poly_montgomery(&cp));
        z.inv_ntt_tomont();
        z.add_assign(&y);
        z.reduce();
        if z.exceeds_norm(GAMMA1 - BETA) {
            log_trace!(attempt = nonce, reason = "z", "signing attempt rejected");
            continue;
        }

        // Subtracting c * s2 must not change the high bits of w.
        let mut cs2 = Zeroizing::new(parts.s2.pointwise_poly_montgomery(&cp));
        cs2.inv_ntt_tomont();
        w0.sub_assign(&cs2);
        w0.reduce();
        if w0.exceeds_norm(GAMMA2 - BETA) {
            log_trace!(attempt = nonce, reason = "w0", "signing attempt rejected");
            continue;
        }

        let mut ct0 = Zeroizing::new(parts.t0.pointwise_poly_montgomery(&cp));
        ct0.inv_ntt_tomont();
        ct0.reduce();
        if ct0.exceeds_norm(GAMMA2) {
            log_trace!(attempt = nonce, reason = "ct0", "signing attempt rejected");
            continue;
        }

        w0.add_assign(&ct0);
        let (h, ones) = PolyVec::<K>::make_hint::<GAMMA2>(&w0, &w1);
        if ones > OMEGA {
            log_trace!(attempt = nonce, reason = "hint", "signing attempt rejected");
            continue;
        }

        log_trace!(attempts = nonce, "signature accepted");
        pack_sig::<K, L, GAMMA1, OMEGA>(&c_tilde, &z, &h, sig);
        return;
    }
}

/// Verify `sig` on `message` under the packed public key `pk`.
///
/// Wrong lengths, a non-canonical hint, an oversized `z` and a challenge
/// mismatch all yield `false`.
pub fn verify<
    S: Symmetric,
    const K: usize,
    const L: usize,
    const TAU: usize,
    const BETA: i32,
    const GAMMA1: i32,
    const GAMMA2: i32,
    const OMEGA: usize,
>(
    pk: &[u8],
    message: &[u8],
    sig: &[u8],
) -> bool {
    if pk.len() != verification_key_size(K) {
        log_debug!(expected = verification_key_size(K), actual = pk.len(), "rejecting verification key");
        return false;
    }
    if sig.len() != signature_size(K, L, GAMMA1, OMEGA) {
        log_debug!(
            expected = signature_size(K, L, GAMMA1, OMEGA),
            actual = sig.len(),
            "rejecting signature length"
        );
        return false;
    }

    let (rho, mut t1) = unpack_pk::<K>(pk);
    let Some((c_tilde, mut z, h)) = unpack_sig::<K, L, GAMMA1, OMEGA>(sig) else {
        log_debug!("rejecting non-canonical hint encoding");
        return false;
    };
    if z.exceeds_norm(GAMMA1 - BETA) {
        return false;
    }

    // mu = CRH(H(pk) || M)
    let mut tr = [0u8; SEEDBYTES];
    shake256(&[pk], &mut tr);
    let mut mu = [0u8; CRHBYTES];
    shake256(&[&tr, message], &mut mu);

    // w1' = UseHint(h, A * z - c * t1 * 2^D)
    let mat = expand_matrix::<S, K, L>(&rho);
    z.ntt();
    let mut w = matrix_mul(&mat, &z);

    let mut cp = sample_challenge::<TAU>(&c_tilde);
    cp.ntt();
    t1.shift_left();
    t1.ntt();
    w.sub_assign(&t1.pointwise_poly_montgomery(&cp));
    w.reduce();
    w.inv_ntt_tomont();
    w.caddq();
    let w1 = w.use_hint::<GAMMA2>(&h);

    challenge_seed::<K, GAMMA2>(&mu, &w1) == c_tilde
}
