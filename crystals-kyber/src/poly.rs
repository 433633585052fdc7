//! Polynomial operations for Kyber.
//!
//! This module provides the `Poly` struct representing polynomials in the ring
//! R_q = Z_q\[X\]/(X^256 + 1), along with arithmetic, compression and
//! centered binomial sampling.

#![allow(clippy::needless_range_loop)]

use crate::ntt::{basemul, ZETAS};
use crate::params::common::{N, Q};
use crate::reduce::{barrett_reduce, caddq, montgomery_reduce, MONT_R2};
use zeroize::Zeroize;

/// A polynomial in R_q = Z_q\[X\]/(X^256 + 1).
///
/// Coefficients are signed and not necessarily reduced; each operation
/// documents the range it produces.
#[derive(Clone, Zeroize)]
pub struct Poly {
    /// 256 coefficients of the polynomial.
    pub coeffs: [i16; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self { coeffs: [0i16; N] }
    }
}

impl Poly {
    /// Create a new zero polynomial.
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Polynomial Arithmetic
// ============================================================================

/// Add polynomial `b` to `a` in place. No reduction.
pub fn poly_add_assign(a: &mut Poly, b: &Poly) {
    for i in 0..N {
        a.coeffs[i] = a.coeffs[i].wrapping_add(b.coeffs[i]);
    }
}

/// Compute `r = a - b`. No reduction.
pub fn poly_sub(a: &Poly, b: &Poly) -> Poly {
    let mut r = Poly::default();
    for i in 0..N {
        r.coeffs[i] = a.coeffs[i].wrapping_sub(b.coeffs[i]);
    }
    r
}

/// Pointwise product of two polynomials in the NTT domain.
///
/// The result carries a factor `2^-16`.
pub fn poly_basemul_montgomery(a: &Poly, b: &Poly) -> Poly {
    let mut r = Poly::default();
    for i in 0..N / 4 {
        let zeta = ZETAS[64 + i];
        basemul(
            &mut r.coeffs[4 * i..4 * i + 2],
            &a.coeffs[4 * i..4 * i + 2],
            &b.coeffs[4 * i..4 * i + 2],
            zeta,
        );
        basemul(
            &mut r.coeffs[4 * i + 2..4 * i + 4],
            &a.coeffs[4 * i + 2..4 * i + 4],
            &b.coeffs[4 * i + 2..4 * i + 4],
            -zeta,
        );
    }
    r
}

/// Barrett-reduce every coefficient into `[-(q-1)/2, (q-1)/2]`.
pub fn poly_reduce(poly: &mut Poly) {
    for c in poly.coeffs.iter_mut() {
        *c = barrett_reduce(*c);
    }
}

/// Multiply every coefficient by the Montgomery factor `2^16 mod q`.
pub fn poly_tomont(poly: &mut Poly) {
    for c in poly.coeffs.iter_mut() {
        *c = montgomery_reduce(*c as i32 * MONT_R2);
    }
}

// ============================================================================
// Compression and Decompression
// ============================================================================

/// Compress a single coefficient to `d` bits.
///
/// Computes `round(2^d / q * x) mod 2^d` for `x` in `(-q, q)`.
#[inline]
pub fn compress(x: i16, d: u32) -> u16 {
    let x = caddq(x) as u32;
    let shifted = (x << d) + (Q as u32 / 2);
    let result = shifted / (Q as u32);
    (result & ((1 << d) - 1)) as u16
}

/// Decompress a single `d`-bit value: `round(q / 2^d * y)`.
#[inline]
pub fn decompress(y: u16, d: u32) -> i16 {
    let y = y as u32;
    let result = ((y * (Q as u32)) + (1 << (d - 1))) >> d;
    result as i16
}

/// Compress a polynomial to `D` bits per coefficient and write `32 * D`
/// bytes to `out`.
///
/// `D` is one of 4, 5, 10 or 11. Coefficients must lie in `(-q, q)`.
pub fn poly_compress<const D: usize>(poly: &Poly, out: &mut [u8]) {
    match D {
        4 => poly_compress_4(poly, out),
        5 => poly_compress_5(poly, out),
        10 => poly_compress_10(poly, out),
        11 => poly_compress_11(poly, out),
        _ => debug_assert!(false, "unsupported compression width {D}"),
    }
}

/// Decompress `32 * D` bytes into a polynomial with coefficients in `[0, q)`.
pub fn poly_decompress<const D: usize>(bytes: &[u8]) -> Poly {
    match D {
        4 => poly_decompress_4(bytes),
        5 => poly_decompress_5(bytes),
        10 => poly_decompress_10(bytes),
        11 => poly_decompress_11(bytes),
        _ => {
            debug_assert!(false, "unsupported compression width {D}");
            Poly::default()
        }
    }
}

// d=4: 128 bytes
fn poly_compress_4(poly: &Poly, out: &mut [u8]) {
    for i in 0..128 {
        let t0 = compress(poly.coeffs[2 * i], 4) as u8;
        let t1 = compress(poly.coeffs[2 * i + 1], 4) as u8;
        out[i] = t0 | (t1 << 4);
    }
}

fn poly_decompress_4(bytes: &[u8]) -> Poly {
    let mut poly = Poly::default();
    for i in 0..128 {
        poly.coeffs[2 * i] = decompress((bytes[i] & 0x0F) as u16, 4);
        poly.coeffs[2 * i + 1] = decompress((bytes[i] >> 4) as u16, 4);
    }
    poly
}

// d=5: 160 bytes
fn poly_compress_5(poly: &Poly, out: &mut [u8]) {
    for i in 0..32 {
        let mut t = [0u8; 8];
        for j in 0..8 {
            t[j] = compress(poly.coeffs[8 * i + j], 5) as u8;
        }
        out[5 * i] = t[0] | (t[1] << 5);
        out[5 * i + 1] = (t[1] >> 3) | (t[2] << 2) | (t[3] << 7);
        out[5 * i + 2] = (t[3] >> 1) | (t[4] << 4);
        out[5 * i + 3] = (t[4] >> 4) | (t[5] << 1) | (t[6] << 6);
        out[5 * i + 4] = (t[6] >> 2) | (t[7] << 3);
    }
}

fn poly_decompress_5(bytes: &[u8]) -> Poly {
    let mut poly = Poly::default();
    for i in 0..32 {
        let b = &bytes[5 * i..5 * i + 5];
        poly.coeffs[8 * i] = decompress((b[0] & 0x1F) as u16, 5);
        poly.coeffs[8 * i + 1] = decompress(((b[0] >> 5) | ((b[1] & 0x03) << 3)) as u16, 5);
        poly.coeffs[8 * i + 2] = decompress(((b[1] >> 2) & 0x1F) as u16, 5);
        poly.coeffs[8 * i + 3] = decompress(((b[1] >> 7) | ((b[2] & 0x0F) << 1)) as u16, 5);
        poly.coeffs[8 * i + 4] = decompress(((b[2] >> 4) | ((b[3] & 0x01) << 4)) as u16, 5);
        poly.coeffs[8 * i + 5] = decompress(((b[3] >> 1) & 0x1F) as u16, 5);
        poly.coeffs[8 * i + 6] = decompress(((b[3] >> 6) | ((b[4] & 0x07) << 2)) as u16, 5);
        poly.coeffs[8 * i + 7] = decompress((b[4] >> 3) as u16, 5);
    }
    poly
}

// d=10: 320 bytes
fn poly_compress_10(poly: &Poly, out: &mut [u8]) {
    for i in 0..64 {
        let mut t = [0u16; 4];
        for j in 0..4 {
            t[j] = compress(poly.coeffs[4 * i + j], 10);
        }
        out[5 * i] = t[0] as u8;
        out[5 * i + 1] = ((t[0] >> 8) | (t[1] << 2)) as u8;
        out[5 * i + 2] = ((t[1] >> 6) | (t[2] << 4)) as u8;
        out[5 * i + 3] = ((t[2] >> 4) | (t[3] << 6)) as u8;
        out[5 * i + 4] = (t[3] >> 2) as u8;
    }
}

fn poly_decompress_10(bytes: &[u8]) -> Poly {
    let mut poly = Poly::default();
    for i in 0..64 {
        let b = &bytes[5 * i..5 * i + 5];
        poly.coeffs[4 * i] = decompress((b[0] as u16) | ((b[1] as u16 & 0x03) << 8), 10);
        poly.coeffs[4 * i + 1] = decompress(((b[1] >> 2) as u16) | ((b[2] as u16 & 0x0F) << 6), 10);
        poly.coeffs[4 * i + 2] = decompress(((b[2] >> 4) as u16) | ((b[3] as u16 & 0x3F) << 4), 10);
        poly.coeffs[4 * i + 3] = decompress(((b[3] >> 6) as u16) | ((b[4] as u16) << 2), 10);
    }
    poly
}

// d=11: 352 bytes
fn poly_compress_11(poly: &Poly, out: &mut [u8]) {
    for i in 0..32 {
        let mut t = [0u16; 8];
        for j in 0..8 {
            t[j] = compress(poly.coeffs[8 * i + j], 11);
        }
        out[11 * i] = t[0] as u8;
        out[11 * i + 1] = ((t[0] >> 8) | (t[1] << 3)) as u8;
        out[11 * i + 2] = ((t[1] >> 5) | (t[2] << 6)) as u8;
        out[11 * i + 3] = (t[2] >> 2) as u8;
        out[11 * i + 4] = ((t[2] >> 10) | (t[3] << 1)) as u8;
        out[11 * i + 5] = ((t[3] >> 7) | (t[4] << 4)) as u8;
        out[11 * i + 6] = ((t[4] >> 4) | (t[5] << 7)) as u8;
        out[11 * i + 7] = (t[5] >> 1) as u8;
        out[11 * i + 8] = ((t[5] >> 9) | (t[6] << 2)) as u8;
        out[11 * i + 9] = ((t[6] >> 6) | (t[7] << 5)) as u8;
        out[11 * i + 10] = (t[7] >> 3) as u8;
    }
}

fn poly_decompress_11(bytes: &[u8]) -> Poly {
    let mut poly = Poly::default();
    for i in 0..32 {
        let b = &bytes[11 * i..11 * i + 11];
        poly.coeffs[8 * i] = decompress((b[0] as u16) | ((b[1] as u16 & 0x07) << 8), 11);
        poly.coeffs[8 * i + 1] = decompress(((b[1] >> 3) as u16) | ((b[2] as u16 & 0x3F) << 5), 11);
        poly.coeffs[8 * i + 2] = decompress(
            ((b[2] >> 6) as u16) | ((b[3] as u16) << 2) | ((b[4] as u16 & 0x01) << 10),
            11,
        );
        poly.coeffs[8 * i + 3] = decompress(((b[4] >> 1) as u16) | ((b[5] as u16 & 0x0F) << 7), 11);
        poly.coeffs[8 * i + 4] = decompress(((b[5] >> 4) as u16) | ((b[6] as u16 & 0x7F) << 4), 11);
        poly.coeffs[8 * i + 5] = decompress(
            ((b[6] >> 7) as u16) | ((b[7] as u16) << 1) | ((b[8] as u16 & 0x03) << 9),
            11,
        );
        poly.coeffs[8 * i + 6] = decompress(((b[8] >> 2) as u16) | ((b[9] as u16 & 0x1F) << 6), 11);
        poly.coeffs[8 * i + 7] = decompress(((b[9] >> 5) as u16) | ((b[10] as u16) << 3), 11);
    }
    poly
}

// ============================================================================
// Centered binomial sampling
// ============================================================================

/// Sample a polynomial from the centered binomial distribution `B_ETA`.
///
/// Consumes `64 * ETA` bytes; each coefficient is the difference of two
/// popcounts of `ETA` bits, read little-endian.
pub fn poly_cbd<const ETA: usize>(bytes: &[u8]) -> Poly {
    let mut poly = Poly::default();
    match ETA {
        2 => poly_cbd2(&mut poly, bytes),
        3 => poly_cbd3(&mut poly, bytes),
        _ => debug_assert!(false, "unsupported eta {ETA}"),
    }
    poly
}

/// 4 bits per coefficient: 128 bytes.
fn poly_cbd2(poly: &mut Poly, bytes: &[u8]) {
    for i in 0..128 {
        let t = bytes[i] as u32;
        let d = (t & 0x55) + ((t >> 1) & 0x55);

        let a = (d & 0x3) as i16;
        let b = ((d >> 2) & 0x3) as i16;
        poly.coeffs[2 * i] = a - b;

        let a = ((d >> 4) & 0x3) as i16;
        let b = ((d >> 6) & 0x3) as i16;
        poly.coeffs[2 * i + 1] = a - b;
    }
}

/// 6 bits per coefficient: 192 bytes.
fn poly_cbd3(poly: &mut Poly, bytes: &[u8]) {
    for i in 0..64 {
        let t = (bytes[3 * i] as u32)
            | ((bytes[3 * i + 1] as u32) << 8)
            | ((bytes[3 * i + 2] as u32) << 16);

        let d = (t & 0x249249) + ((t >> 1) & 0x249249) + ((t >> 2) & 0x249249);

        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            poly.coeffs[4 * i + j] = a - b;
        }
    }
}
