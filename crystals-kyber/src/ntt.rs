//! Number Theoretic Transform for Kyber.
//!
//! Seven layers split `X^256 + 1` into 128 quadratic factors
//! `X^2 - zeta^(2 brv(i) + 1)`, so multiplication in the NTT domain is a
//! degree-one product per pair ([`basemul`]).

#![allow(clippy::manual_range_contains)]

use crate::params::common::N;
use crate::poly::Poly;
use crate::reduce::{barrett_reduce, montgomery_mul, INV_N_MONT};
use crystals_core::{define_ntt_forward, define_ntt_inverse};

/// Precomputed zetas (twiddle factors) in Montgomery form.
///
/// zetas[i] = 17^(brv(i)) * 2^16 mod q, where brv is 7-bit bit-reversal.
pub const ZETAS: [i16; 128] = [
    2285, 2571, 2970, 1812, 1493, 1422, 287, 202, 3158, 622, 1577, 182, 962, 2127, 1855, 1468, 573,
    2004, 264, 383, 2500, 1458, 1727, 3199, 2648, 1017, 732, 608, 1787, 411, 3124, 1758, 1223, 652,
    2777, 1015, 2036, 1491, 3047, 1785, 516, 3321, 3009, 2663, 1711, 2167, 126, 1469, 2476, 3239,
    3058, 830, 107, 1908, 3082, 2378, 2931, 961, 1821, 2604, 448, 2264, 677, 2054, 2226, 430, 555,
    843, 2078, 871, 1550, 105, 422, 587, 177, 3094, 3038, 2869, 1574, 1653, 3083, 778, 1159, 3182,
    2552, 1483, 2727, 1119, 1739, 644, 2457, 349, 418, 329, 3173, 3254, 817, 1097, 603, 610, 1322,
    2044, 1864, 384, 2114, 3193, 1218, 1994, 2455, 220, 2142, 1670, 2144, 1799, 2051, 794, 1819,
    2475, 2459, 478, 3221, 3021, 996, 991, 958, 1869, 1522, 1628,
];

define_ntt_forward! {
    name: ntt_layers,
    coeff: i16,
    n: N,
    len_min: 2,
    zetas: ZETAS,
    montgomery_mul: montgomery_mul
}

#[inline]
fn inv_ntt_sum(t: i16, x: i16) -> i16 {
    barrett_reduce(t.wrapping_add(x))
}

#[inline]
fn inv_ntt_diff(t: i16, x: i16) -> i16 {
    t.wrapping_sub(x)
}

define_ntt_inverse! {
    name: inv_ntt_layers,
    coeff: i16,
    n: N,
    k_start: N / 2,
    len_start: 2,
    zetas: ZETAS,
    montgomery_mul: montgomery_mul,
    inv_n_mont: INV_N_MONT,
    butterfly_sum: inv_ntt_sum,
    butterfly_diff: inv_ntt_diff
}

/// Forward NTT followed by a Barrett reduction of every coefficient.
///
/// Input coefficients must be bounded by q in absolute value; the output
/// is in bit-reversed order with coefficients in `[-(q-1)/2, (q-1)/2]`.
pub fn ntt(poly: &mut Poly) {
    ntt_layers(&mut poly.coeffs);
    for c in poly.coeffs.iter_mut() {
        *c = barrett_reduce(*c);
    }
}

/// Inverse NTT, multiplied by the Montgomery factor `2^16`.
///
/// Applied to the output of a pointwise product this yields the plain
/// (non-Montgomery) result, with coefficients bounded by q.
pub fn inv_ntt_tomont(poly: &mut Poly) {
    inv_ntt_layers(&mut poly.coeffs);
}

/// Multiplication of `a0 + a1 X` and `b0 + b1 X` modulo `X^2 - zeta`.
///
/// The result carries an extra factor `2^-16`.
#[inline]
pub fn basemul(r: &mut [i16], a: &[i16], b: &[i16], zeta: i16) {
    r[0] = montgomery_mul(a[1], b[1]);
    r[0] = montgomery_mul(r[0], zeta);
    r[0] += montgomery_mul(a[0], b[0]);

    r[1] = montgomery_mul(a[0], b[1]);
    r[1] += montgomery_mul(a[1], b[0]);
}
