//! Packing functions for Dilithium.
//!
//! Every polynomial encoding is a little-endian bit stream of fixed-width
//! fields, so one pair of helpers covers t1, t0, eta, z and w1; the
//! per-type functions only choose the width and the offset mapping.
//! Keys and signatures concatenate these encodings:
//!
//! - pk  = `rho || t1`
//! - sk  = `rho || key || tr || s1 || s2 || t0`
//! - sig = `c~ || z || h`

use crate::params::common::{D, N, POLYT0_PACKEDBYTES, POLYT1_PACKEDBYTES, Q, SEEDBYTES};
use crate::poly::Poly;
use crate::polyvec::PolyVec;
use zeroize::Zeroize;

/// Packed size of a polynomial with coefficients in `[-eta, eta]`.
pub const fn polyeta_packed_bytes(eta: usize) -> usize {
    if eta == 2 {
        96
    } else {
        128
    }
}

/// Packed size of a `z` polynomial.
pub const fn polyz_packed_bytes(gamma1: i32) -> usize {
    if gamma1 == 1 << 17 {
        576
    } else {
        640
    }
}

/// Packed size of a `w1` polynomial.
pub const fn polyw1_packed_bytes(gamma2: i32) -> usize {
    if gamma2 == (Q - 1) / 88 {
        192
    } else {
        128
    }
}

/// Verification key size for rank `k`.
pub const fn verification_key_size(k: usize) -> usize {
    SEEDBYTES + k * POLYT1_PACKEDBYTES
}

/// Signing key size.
pub const fn signing_key_size(k: usize, l: usize, eta: usize) -> usize {
    3 * SEEDBYTES + (k + l) * polyeta_packed_bytes(eta) + k * POLYT0_PACKEDBYTES
}

/// Signature size.
pub const fn signature_size(k: usize, l: usize, gamma1: i32, omega: usize) -> usize {
    SEEDBYTES + l * polyz_packed_bytes(gamma1) + omega + k
}

// ============================================================================
// Bit streams
// ============================================================================

/// Write `map(c)` for every coefficient as a `bits`-wide little-endian field.
fn pack_bits(poly: &Poly, bits: u32, map: impl Fn(i32) -> u32, out: &mut [u8]) {
    debug_assert_eq!(out.len(), N * bits as usize / 8);
    let mask = (1u64 << bits) - 1;
    let mut acc = 0u64;
    let mut acc_bits = 0u32;
    let mut pos = 0;

    for &c in &poly.coeffs {
        acc |= (u64::from(map(c)) & mask) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
}

/// Read `N` fields of `bits` bits each and map them to coefficients.
fn unpack_bits(input: &[u8], bits: u32, map: impl Fn(u32) -> i32) -> Poly {
    debug_assert_eq!(input.len(), N * bits as usize / 8);
    let mask = (1u64 << bits) - 1;
    let mut poly = Poly::zero();
    let mut acc = 0u64;
    let mut acc_bits = 0u32;
    let mut pos = 0;

    for c in poly.coeffs.iter_mut() {
        while acc_bits < bits {
            acc |= u64::from(input[pos]) << acc_bits;
            pos += 1;
            acc_bits += 8;
        }
        *c = map((acc & mask) as u32);
        acc >>= bits;
        acc_bits -= bits;
    }
    poly
}

// ============================================================================
// Polynomials
// ============================================================================

/// Pack t1, coefficients in `[0, 2^10)`.
pub fn pack_t1(poly: &Poly, out: &mut [u8]) {
    pack_bits(poly, 10, |c| c as u32, out);
}

/// Unpack t1.
pub fn unpack_t1(input: &[u8]) -> Poly {
    unpack_bits(input, 10, |t| t as i32)
}

/// Pack t0, coefficients in `(-2^(D-1), 2^(D-1)]`, stored as `2^(D-1) - c`.
pub fn pack_t0(poly: &Poly, out: &mut [u8]) {
    pack_bits(poly, D, |c| ((1 << (D - 1)) - c) as u32, out);
}

/// Unpack t0.
pub fn unpack_t0(input: &[u8]) -> Poly {
    unpack_bits(input, D, |t| (1 << (D - 1)) - t as i32)
}

/// Pack a polynomial with coefficients in `[-ETA, ETA]`, stored as `ETA - c`.
pub fn pack_eta<const ETA: usize>(poly: &Poly, out: &mut [u8]) {
    let bits = if ETA == 2 { 3 } else { 4 };
    pack_bits(poly, bits, |c| (ETA as i32 - c) as u32, out);
}

/// Unpack a polynomial with coefficients in `[-ETA, ETA]`.
pub fn unpack_eta<const ETA: usize>(input: &[u8]) -> Poly {
    let bits = if ETA == 2 { 3 } else { 4 };
    unpack_bits(input, bits, |t| ETA as i32 - t as i32)
}

/// Pack z, coefficients in `[-GAMMA1 + 1, GAMMA1]`, stored as `GAMMA1 - c`.
pub fn pack_z<const GAMMA1: i32>(poly: &Poly, out: &mut [u8]) {
    let bits = if GAMMA1 == 1 << 17 { 18 } else { 20 };
    pack_bits(poly, bits, |c| (GAMMA1 - c) as u32, out);
}

/// Unpack z.
pub fn unpack_z<const GAMMA1: i32>(input: &[u8]) -> Poly {
    let bits = if GAMMA1 == 1 << 17 { 18 } else { 20 };
    unpack_bits(input, bits, |t| GAMMA1 - t as i32)
}

/// Pack w1, coefficients in `[0, 44)` or `[0, 16)`.
pub fn pack_w1<const GAMMA2: i32>(poly: &Poly, out: &mut [u8]) {
    let bits = if GAMMA2 == (Q - 1) / 88 { 6 } else { 4 };
    pack_bits(poly, bits, |c| c as u32, out);
}

// ============================================================================
// Keys
// ============================================================================

/// Write `rho || t1` into `pk`.
pub fn pack_pk<const K: usize>(rho: &[u8; SEEDBYTES], t1: &PolyVec<K>, pk: &mut [u8]) {
    debug_assert_eq!(pk.len(), verification_key_size(K));
    pk[..SEEDBYTES].copy_from_slice(rho);
    for (poly, chunk) in t1.polys.iter().zip(pk[SEEDBYTES..].chunks_exact_mut(POLYT1_PACKEDBYTES)) {
        pack_t1(poly, chunk);
    }
}

/// Split `pk` into `rho` and t1.
pub fn unpack_pk<const K: usize>(pk: &[u8]) -> ([u8; SEEDBYTES], PolyVec<K>) {
    debug_assert_eq!(pk.len(), verification_key_size(K));
    let mut rho = [0u8; SEEDBYTES];
    rho.copy_from_slice(&pk[..SEEDBYTES]);
    let mut t1 = PolyVec::<K>::default();
    for (poly, chunk) in t1.polys.iter_mut().zip(pk[SEEDBYTES..].chunks_exact(POLYT1_PACKEDBYTES)) {
        *poly = unpack_t1(chunk);
    }
    (rho, t1)
}

/// Secret key components.
pub struct SecretKeyParts<const K: usize, const L: usize> {
    /// Matrix seed
    pub rho: [u8; SEEDBYTES],
    /// Key for deterministic masking
    pub key: [u8; SEEDBYTES],
    /// SHAKE256(pk), 32 bytes
    pub tr: [u8; SEEDBYTES],
    /// Secret vector s1
    pub s1: PolyVec<L>,
    /// Secret vector s2
    pub s2: PolyVec<K>,
    /// Low bits of t
    pub t0: PolyVec<K>,
}

impl<const K: usize, const L: usize> Zeroize for SecretKeyParts<K, L> {
    fn zeroize(&mut self) {
        self.rho.zeroize();
        self.key.zeroize();
        self.tr.zeroize();
        self.s1.zeroize();
        self.s2.zeroize();
        self.t0.zeroize();
    }
}

/// Write `rho || key || tr || s1 || s2 || t0` into `sk`.
pub fn pack_sk<const K: usize, const L: usize, const ETA: usize>(
    parts: &SecretKeyParts<K, L>,
    sk: &mut [u8],
) {
    debug_assert_eq!(sk.len(), signing_key_size(K, L, ETA));
    let eta_bytes = polyeta_packed_bytes(ETA);
    let (seeds, rest) = sk.split_at_mut(3 * SEEDBYTES);
    seeds[..SEEDBYTES].copy_from_slice(&parts.rho);
    seeds[SEEDBYTES..2 * SEEDBYTES].copy_from_slice(&parts.key);
    seeds[2 * SEEDBYTES..].copy_from_slice(&parts.tr);

    let (s1_bytes, rest) = rest.split_at_mut(L * eta_bytes);
    let (s2_bytes, t0_bytes) = rest.split_at_mut(K * eta_bytes);
    for (poly, chunk) in parts.s1.polys.iter().zip(s1_bytes.chunks_exact_mut(eta_bytes)) {
        pack_eta::<ETA>(poly, chunk);
    }
    for (poly, chunk) in parts.s2.polys.iter().zip(s2_bytes.chunks_exact_mut(eta_bytes)) {
        pack_eta::<ETA>(poly, chunk);
    }
    for (poly, chunk) in parts.t0.polys.iter().zip(t0_bytes.chunks_exact_mut(POLYT0_PACKEDBYTES)) {
        pack_t0(poly, chunk);
    }
}

/// Inverse of [`pack_sk`].
pub fn unpack_sk<const K: usize, const L: usize, const ETA: usize>(
    sk: &[u8],
) -> SecretKeyParts<K, L> {
    debug_assert_eq!(sk.len(), signing_key_size(K, L, ETA));
    let eta_bytes = polyeta_packed_bytes(ETA);
    let mut parts = SecretKeyParts {
        rho: [0u8; SEEDBYTES],
        key: [0u8; SEEDBYTES],
        tr: [0u8; SEEDBYTES],
        s1: PolyVec::default(),
        s2: PolyVec::default(),
        t0: PolyVec::default(),
    };
    parts.rho.copy_from_slice(&sk[..SEEDBYTES]);
    parts.key.copy_from_slice(&sk[SEEDBYTES..2 * SEEDBYTES]);
    parts.tr.copy_from_slice(&sk[2 * SEEDBYTES..3 * SEEDBYTES]);

    let (s1_bytes, rest) = sk[3 * SEEDBYTES..].split_at(L * eta_bytes);
    let (s2_bytes, t0_bytes) = rest.split_at(K * eta_bytes);
    for (poly, chunk) in parts.s1.polys.iter_mut().zip(s1_bytes.chunks_exact(eta_bytes)) {
        *poly = unpack_eta::<ETA>(chunk);
    }
    for (poly, chunk) in parts.s2.polys.iter_mut().zip(s2_bytes.chunks_exact(eta_bytes)) {
        *poly = unpack_eta::<ETA>(chunk);
    }
    for (poly, chunk) in parts.t0.polys.iter_mut().zip(t0_bytes.chunks_exact(POLYT0_PACKEDBYTES)) {
        *poly = unpack_t0(chunk);
    }
    parts
}

// ============================================================================
// Signatures
// ============================================================================

/// Write `c~ || z || h` into `sig`.
///
/// `h` has 0/1 coefficients with at most `OMEGA` ones in total. The hint is
/// stored as the positions of the ones, row after row, followed by the
/// running count after each row.
pub fn pack_sig<const K: usize, const L: usize, const GAMMA1: i32, const OMEGA: usize>(
    c_tilde: &[u8; SEEDBYTES],
    z: &PolyVec<L>,
    h: &PolyVec<K>,
    sig: &mut [u8],
) {
    debug_assert_eq!(sig.len(), signature_size(K, L, GAMMA1, OMEGA));
    let z_bytes = polyz_packed_bytes(GAMMA1);
    let (c_out, rest) = sig.split_at_mut(SEEDBYTES);
    let (z_out, h_out) = rest.split_at_mut(L * z_bytes);

    c_out.copy_from_slice(c_tilde);
    for (poly, chunk) in z.polys.iter().zip(z_out.chunks_exact_mut(z_bytes)) {
        pack_z::<GAMMA1>(poly, chunk);
    }

    h_out.fill(0);
    let mut k = 0;
    for (i, poly) in h.polys.iter().enumerate() {
        for (j, &c) in poly.coeffs.iter().enumerate() {
            if c != 0 {
                h_out[k] = j as u8;
                k += 1;
            }
        }
        h_out[OMEGA + i] = k as u8;
    }
}

/// Inverse of [`pack_sig`], or `None` for a non-canonical hint encoding.
///
/// Per-row counts must be non-decreasing and at most `OMEGA`, positions
/// within a row strictly increasing, and unused position slots zero. This
/// makes the encoding of a given hint unique.
pub fn unpack_sig<const K: usize, const L: usize, const GAMMA1: i32, const OMEGA: usize>(
    sig: &[u8],
) -> Option<([u8; SEEDBYTES], PolyVec<L>, PolyVec<K>)> {
    debug_assert_eq!(sig.len(), signature_size(K, L, GAMMA1, OMEGA));
    let z_bytes = polyz_packed_bytes(GAMMA1);
    let (c_in, rest) = sig.split_at(SEEDBYTES);
    let (z_in, h_in) = rest.split_at(L * z_bytes);

    let mut c_tilde = [0u8; SEEDBYTES];
    c_tilde.copy_from_slice(c_in);

    let mut z = PolyVec::<L>::default();
    for (poly, chunk) in z.polys.iter_mut().zip(z_in.chunks_exact(z_bytes)) {
        *poly = unpack_z::<GAMMA1>(chunk);
    }

    let mut h = PolyVec::<K>::default();
    let mut k = 0usize;
    for (i, poly) in h.polys.iter_mut().enumerate() {
        let end = usize::from(h_in[OMEGA + i]);
        if end < k || end > OMEGA {
            return None;
        }
        for j in k..end {
            if j > k && h_in[j] <= h_in[j - 1] {
                return None;
            }
            poly.coeffs[usize::from(h_in[j])] = 1;
        }
        k = end;
    }
    if h_in[k..OMEGA].iter().any(|&b| b != 0) {
        return None;
    }

    Some((c_tilde, z, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly_from(f: impl Fn(usize) -> i32) -> Poly {
        let mut p = Poly::zero();
        for (i, c) in p.coeffs.iter_mut().enumerate() {
            *c = f(i);
        }
        p
    }

    #[test]
    fn test_t1_roundtrip_and_layout() {
        let p = poly_from(|i| ((i * 37) % 1024) as i32);
        let mut buf = [0u8; POLYT1_PACKEDBYTES];
        pack_t1(&p, &mut buf);
        assert_eq!(unpack_t1(&buf).coeffs, p.coeffs);

        let mut one = Poly::zero();
        one.coeffs[1] = 1;
        pack_t1(&one, &mut buf);
        // second 10-bit field starts at bit 10
        assert_eq!(buf[1], 0b100);
    }

    #[test]
    fn test_t0_roundtrip() {
        let p = poly_from(|i| (i as i32 * 31) % 8192 - 4095);
        let mut buf = [0u8; POLYT0_PACKEDBYTES];
        pack_t0(&p, &mut buf);
        assert_eq!(unpack_t0(&buf).coeffs, p.coeffs);
    }

    #[test]
    fn test_eta_roundtrip() {
        let p = poly_from(|i| (i % 5) as i32 - 2);
        let mut buf = [0u8; 96];
        pack_eta::<2>(&p, &mut buf);
        assert_eq!(unpack_eta::<2>(&buf).coeffs, p.coeffs);

        let p = poly_from(|i| (i % 9) as i32 - 4);
        let mut buf = [0u8; 128];
        pack_eta::<4>(&p, &mut buf);
        assert_eq!(unpack_eta::<4>(&buf).coeffs, p.coeffs);
    }

    #[test]
    fn test_eta2_layout() {
        // eta - c = 2 - (-2) = 4 = 0b100 in the first 3-bit field
        let mut p = Poly::zero();
        p.coeffs.fill(2);
        p.coeffs[0] = -2;
        let mut buf = [0u8; 96];
        pack_eta::<2>(&p, &mut buf);
        assert_eq!(buf[0], 0b100);
        assert!(buf[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_z_roundtrip() {
        const G17: i32 = 1 << 17;
        const G19: i32 = 1 << 19;
        let p = poly_from(|i| G17 - (i as i32 * 1021) % (2 * G17));
        let mut buf = [0u8; 576];
        pack_z::<G17>(&p, &mut buf);
        assert_eq!(unpack_z::<G17>(&buf).coeffs, p.coeffs);

        let p = poly_from(|i| G19 - (i as i32 * 4093) % (2 * G19));
        let mut buf = [0u8; 640];
        pack_z::<G19>(&p, &mut buf);
        assert_eq!(unpack_z::<G19>(&buf).coeffs, p.coeffs);
    }

    #[test]
    fn test_w1_widths() {
        let p = poly_from(|i| (i % 44) as i32);
        let mut buf = [0u8; 192];
        pack_w1::<{ (Q - 1) / 88 }>(&p, &mut buf);
        assert_eq!(unpack_bits(&buf, 6, |t| t as i32).coeffs, p.coeffs);

        let p = poly_from(|i| (i % 16) as i32);
        let mut buf = [0u8; 128];
        pack_w1::<{ (Q - 1) / 32 }>(&p, &mut buf);
        assert_eq!(buf[0], 0x10);
        assert_eq!(buf[1], 0x32);
    }

    #[test]
    fn test_codec_endpoints() {
        let mut buf = [0u8; POLYT0_PACKEDBYTES];
        let p = poly_from(|i| if i % 2 == 0 { 4096 } else { -4095 });
        pack_t0(&p, &mut buf);
        assert_eq!(unpack_t0(&buf).coeffs, p.coeffs);
        // 2^12 - 4096 = 0 in the first 13-bit field
        assert_eq!(buf[0], 0);

        let mut buf = [0u8; POLYT1_PACKEDBYTES];
        let p = poly_from(|i| if i % 2 == 0 { 0 } else { 1023 });
        pack_t1(&p, &mut buf);
        assert_eq!(unpack_t1(&buf).coeffs, p.coeffs);

        const G17: i32 = 1 << 17;
        const G19: i32 = 1 << 19;
        let p = poly_from(|i| if i % 2 == 0 { -G17 + 1 } else { G17 });
        let mut buf = [0u8; 576];
        pack_z::<G17>(&p, &mut buf);
        assert_eq!(unpack_z::<G17>(&buf).coeffs, p.coeffs);
        let p = poly_from(|i| if i % 2 == 0 { -G19 + 1 } else { G19 });
        let mut buf = [0u8; 640];
        pack_z::<G19>(&p, &mut buf);
        assert_eq!(unpack_z::<G19>(&buf).coeffs, p.coeffs);

        let p = poly_from(|i| if i % 2 == 0 { -4 } else { 4 });
        let mut buf = [0u8; 128];
        pack_eta::<4>(&p, &mut buf);
        assert_eq!(buf[0], 0x08);
        assert_eq!(unpack_eta::<4>(&buf).coeffs, p.coeffs);

        let p = poly_from(|_| 43);
        let mut buf = [0u8; 192];
        pack_w1::<{ (Q - 1) / 88 }>(&p, &mut buf);
        assert_eq!(unpack_bits(&buf, 6, |t| t as i32).coeffs, p.coeffs);
    }

    mod codec_properties {
        use super::super::*;
        use proptest::prelude::*;

        fn arb_poly(range: core::ops::RangeInclusive<i32>) -> impl Strategy<Value = Poly> {
            prop::collection::vec(range, N).prop_map(|v| {
                let mut p = Poly::zero();
                p.coeffs.copy_from_slice(&v);
                p
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn t1_roundtrip(p in arb_poly(0..=1023)) {
                let mut buf = [0u8; POLYT1_PACKEDBYTES];
                pack_t1(&p, &mut buf);
                prop_assert_eq!(unpack_t1(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn t0_roundtrip(p in arb_poly(-4095..=4096)) {
                let mut buf = [0u8; POLYT0_PACKEDBYTES];
                pack_t0(&p, &mut buf);
                prop_assert_eq!(unpack_t0(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn eta2_roundtrip(p in arb_poly(-2..=2)) {
                let mut buf = [0u8; 96];
                pack_eta::<2>(&p, &mut buf);
                prop_assert_eq!(unpack_eta::<2>(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn eta4_roundtrip(p in arb_poly(-4..=4)) {
                let mut buf = [0u8; 128];
                pack_eta::<4>(&p, &mut buf);
                prop_assert_eq!(unpack_eta::<4>(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn z17_roundtrip(p in arb_poly(-(1 << 17) + 1..=1 << 17)) {
                let mut buf = [0u8; 576];
                pack_z::<{ 1 << 17 }>(&p, &mut buf);
                prop_assert_eq!(unpack_z::<{ 1 << 17 }>(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn z19_roundtrip(p in arb_poly(-(1 << 19) + 1..=1 << 19)) {
                let mut buf = [0u8; 640];
                pack_z::<{ 1 << 19 }>(&p, &mut buf);
                prop_assert_eq!(unpack_z::<{ 1 << 19 }>(&buf).coeffs, p.coeffs);
            }

            #[test]
            fn w1_4bit_roundtrip(p in arb_poly(0..=15)) {
                let mut buf = [0u8; 128];
                pack_w1::<{ (Q - 1) / 32 }>(&p, &mut buf);
                prop_assert_eq!(unpack_bits(&buf, 4, |t| t as i32).coeffs, p.coeffs);
            }

            #[test]
            fn w1_6bit_roundtrip(p in arb_poly(0..=43)) {
                let mut buf = [0u8; 192];
                pack_w1::<{ (Q - 1) / 88 }>(&p, &mut buf);
                prop_assert_eq!(unpack_bits(&buf, 6, |t| t as i32).coeffs, p.coeffs);
            }
        }
    }

    #[test]
    fn test_sk_roundtrip() {
        let mut parts = SecretKeyParts::<4, 4> {
            rho: [1u8; 32],
            key: [2u8; 32],
            tr: [3u8; 32],
            s1: PolyVec::default(),
            s2: PolyVec::default(),
            t0: PolyVec::default(),
        };
        parts.s1.polys[3] = poly_from(|i| (i % 5) as i32 - 2);
        parts.s2.polys[0] = poly_from(|i| 2 - (i % 5) as i32);
        parts.t0.polys[1] = poly_from(|i| i as i32 * 3 - 384);

        let mut sk = [0u8; 2528];
        pack_sk::<4, 4, 2>(&parts, &mut sk);
        let back = unpack_sk::<4, 4, 2>(&sk);
        assert_eq!(back.rho, parts.rho);
        assert_eq!(back.key, parts.key);
        assert_eq!(back.tr, parts.tr);
        assert_eq!(back.s1.polys[3].coeffs, parts.s1.polys[3].coeffs);
        assert_eq!(back.s2.polys[0].coeffs, parts.s2.polys[0].coeffs);
        assert_eq!(back.t0.polys[1].coeffs, parts.t0.polys[1].coeffs);
    }

    const K: usize = 4;
    const L: usize = 4;
    const G1: i32 = 1 << 17;
    const OMEGA: usize = 80;
    const SIG: usize = signature_size(K, L, G1, OMEGA);

    fn sample_sig() -> [u8; SIG] {
        let mut h = PolyVec::<K>::default();
        h.polys[0].coeffs[5] = 1;
        h.polys[0].coeffs[200] = 1;
        h.polys[2].coeffs[0] = 1;
        let z = PolyVec::<L>::default();
        let mut sig = [0u8; SIG];
        pack_sig::<K, L, G1, OMEGA>(&[9u8; 32], &z, &h, &mut sig);
        sig
    }

    #[test]
    fn test_sig_hint_layout_and_roundtrip() {
        let sig = sample_sig();
        let h_off = SIG - OMEGA - K;
        assert_eq!(&sig[h_off..h_off + 3], &[5, 200, 0]);
        assert_eq!(&sig[SIG - K..], &[2, 2, 3, 3]);

        let (c, _, h) = unpack_sig::<K, L, G1, OMEGA>(&sig).unwrap();
        assert_eq!(c, [9u8; 32]);
        assert_eq!(h.polys[0].coeffs[200], 1);
        assert_eq!(h.polys[2].coeffs[0], 1);
        assert_eq!(h.polys.iter().map(|p| p.coeffs.iter().sum::<i32>()).sum::<i32>(), 3);
    }

    #[test]
    fn test_sig_rejects_unsorted_hint() {
        let mut sig = sample_sig();
        let h_off = SIG - OMEGA - K;
        sig.swap(h_off, h_off + 1);
        assert!(unpack_sig::<K, L, G1, OMEGA>(&sig).is_none());
    }

    #[test]
    fn test_sig_rejects_decreasing_count() {
        let mut sig = sample_sig();
        sig[SIG - K + 1] = 1;
        assert!(unpack_sig::<K, L, G1, OMEGA>(&sig).is_none());
    }

    #[test]
    fn test_sig_rejects_count_above_omega() {
        let mut sig = sample_sig();
        sig[SIG - 1] = (OMEGA + 1) as u8;
        assert!(unpack_sig::<K, L, G1, OMEGA>(&sig).is_none());
    }

    #[test]
    fn test_sig_rejects_nonzero_padding() {
        let mut sig = sample_sig();
        let h_off = SIG - OMEGA - K;
        sig[h_off + OMEGA - 1] = 1;
        assert!(unpack_sig::<K, L, G1, OMEGA>(&sig).is_none());
    }
}
