//! Lossless byte encodings for Kyber polynomials.
//!
//! Key polynomials are serialized with 12 bits per coefficient (384 bytes),
//! and the 32-byte message maps to a polynomial with one bit per
//! coefficient. Lossy compression lives in [`crate::poly`].

#![allow(clippy::needless_range_loop)]

use crate::params::common::{N, POLYBYTES, Q};
use crate::poly::Poly;
use crate::reduce::caddq;

/// Serialize a polynomial with 12 bits per coefficient.
///
/// Coefficients must lie in `(-q, q)`; they are mapped to `[0, q)` first.
pub fn poly_to_bytes(poly: &Poly, out: &mut [u8]) {
    debug_assert!(out.len() >= POLYBYTES);
    for i in 0..N / 2 {
        let c0 = caddq(poly.coeffs[2 * i]) as u16;
        let c1 = caddq(poly.coeffs[2 * i + 1]) as u16;

        out[3 * i] = c0 as u8;
        out[3 * i + 1] = ((c0 >> 8) | (c1 << 4)) as u8;
        out[3 * i + 2] = (c1 >> 4) as u8;
    }
}

/// Deserialize 384 bytes into a polynomial.
///
/// Each coefficient is taken as the raw 12-bit value in `[0, 4095]`; no
/// reduction modulo q is applied.
pub fn poly_from_bytes(bytes: &[u8]) -> Poly {
    let mut poly = Poly::new();

    for (i, chunk) in bytes.chunks_exact(3).take(N / 2).enumerate() {
        let b0 = chunk[0] as u16;
        let b1 = chunk[1] as u16;
        let b2 = chunk[2] as u16;
        poly.coeffs[2 * i] = (b0 | (b1 << 8)) as i16 & 0xFFF;
        poly.coeffs[2 * i + 1] = ((b1 >> 4) | (b2 << 4)) as i16 & 0xFFF;
    }

    poly
}

/// Map a 32-byte message to a polynomial: bit `1` becomes `(q+1)/2`.
///
/// Runs in constant time with respect to the message bits.
pub fn msg_to_poly(m: &[u8; 32]) -> Poly {
    let mut poly = Poly::new();
    let half_q = (Q + 1) / 2;

    for i in 0..N / 8 {
        for j in 0..8 {
            let mask = -(((m[i] >> j) & 1) as i16);
            poly.coeffs[8 * i + j] = mask & half_q;
        }
    }

    poly
}

/// Decode a polynomial to a 32-byte message by rounding every coefficient
/// to the nearer of `0` and `q/2`.
///
/// Coefficients must lie in `(-q, q)`.
pub fn poly_to_msg(poly: &Poly) -> [u8; 32] {
    let mut m = [0u8; 32];

    for i in 0..N / 8 {
        for j in 0..8 {
            let t = caddq(poly.coeffs[8 * i + j]) as u32;
            let bit = (((t << 1) + (Q as u32 / 2)) / (Q as u32)) & 1;
            m[i] |= (bit as u8) << j;
        }
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_bytes_roundtrip() {
        let mut poly = Poly::new();
        for i in 0..N {
            poly.coeffs[i] = ((i * 7) % Q as usize) as i16;
        }

        let mut bytes = [0u8; POLYBYTES];
        poly_to_bytes(&poly, &mut bytes);
        let decoded = poly_from_bytes(&bytes);

        assert_eq!(poly.coeffs, decoded.coeffs);
    }

    #[test]
    fn test_poly_to_bytes_normalizes_negative() {
        let mut neg = Poly::new();
        let mut pos = Poly::new();
        for i in 0..N {
            neg.coeffs[i] = -((i % 1664) as i16);
            pos.coeffs[i] = caddq(neg.coeffs[i]);
        }
        let mut a = [0u8; POLYBYTES];
        let mut b = [0u8; POLYBYTES];
        poly_to_bytes(&neg, &mut a);
        poly_to_bytes(&pos, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_poly_from_bytes_keeps_raw_12_bits() {
        let bytes = [0xFFu8; POLYBYTES];
        let poly = poly_from_bytes(&bytes);
        assert!(poly.coeffs.iter().all(|&c| c == 4095));
    }

    #[test]
    fn test_msg_roundtrip() {
        let m: [u8; 32] = core::array::from_fn(|i| (i * 37 + 11) as u8);
        assert_eq!(poly_to_msg(&msg_to_poly(&m)), m);
    }

    #[test]
    fn test_msg_to_poly_values() {
        let poly = msg_to_poly(&[0xFFu8; 32]);
        assert!(poly.coeffs.iter().all(|&c| c == 1665));
        let poly = msg_to_poly(&[0u8; 32]);
        assert!(poly.coeffs.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_poly_to_msg_decision_boundaries() {
        let mut poly = Poly::new();
        // 832 is the last value rounding to 0; 833 the first rounding to 1.
        poly.coeffs[0] = 832;
        poly.coeffs[1] = 833;
        poly.coeffs[2] = 2496;
        poly.coeffs[3] = 2497;
        poly.coeffs[4] = -832;
        let m = poly_to_msg(&poly);
        assert_eq!(m[0] & 0x1F, 0b00110);
    }

    #[test]
    fn test_poly_bytes_endpoints() {
        let mut poly = Poly::new();
        for i in 0..N {
            poly.coeffs[i] = if i % 2 == 0 { 0 } else { Q - 1 };
        }
        let mut bytes = [0u8; POLYBYTES];
        poly_to_bytes(&poly, &mut bytes);
        // 0x000 then 0xD00 packed as 00 | 00 D0
        assert_eq!(&bytes[..3], &[0x00, 0x00, 0xD0]);
        assert_eq!(poly_from_bytes(&bytes).coeffs, poly.coeffs);
    }

    mod codec_properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn poly_bytes_roundtrip(v in prop::collection::vec(0..Q, N)) {
                let mut poly = Poly::new();
                poly.coeffs.copy_from_slice(&v);
                let mut bytes = [0u8; POLYBYTES];
                poly_to_bytes(&poly, &mut bytes);
                prop_assert_eq!(poly_from_bytes(&bytes).coeffs, poly.coeffs);
            }

            #[test]
            fn msg_roundtrip(m in prop::array::uniform32(any::<u8>())) {
                prop_assert_eq!(poly_to_msg(&msg_to_poly(&m)), m);
            }
        }
    }
}
