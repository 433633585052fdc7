//! Sampling functions for Kyber.
//!
//! Uniform rejection sampling of matrix entries from the XOF and centered
//! binomial noise from the PRF. Both are pure functions of their seed and
//! domain-separation bytes.

use crate::params::common::{N, Q};
use crate::poly::{poly_cbd, Poly};
use crate::symmetric::Symmetric;
use sha3::digest::XofReader;
use zeroize::Zeroize;

/// Bytes squeezed per refill. A multiple of 3, so no candidate straddles
/// two reads.
const XOF_CHUNK: usize = 168;

/// Sample a polynomial with coefficients uniform in `[0, q)` from a stream.
///
/// Every 3 bytes give two 12-bit candidates; a candidate is kept iff it is
/// below q. The stream is read until exactly 256 coefficients are accepted.
///
/// # Note
/// The output is interpreted directly as an NTT-domain polynomial.
pub fn sample_uniform<X: XofReader>(xof: &mut X) -> Poly {
    let mut poly = Poly::new();
    let mut buf = [0u8; XOF_CHUNK];
    let mut j = 0;

    while j < N {
        xof.read(&mut buf);

        for chunk in buf.chunks_exact(3) {
            let d1 = (chunk[0] as u16) | (((chunk[1] as u16) & 0x0F) << 8);
            let d2 = ((chunk[1] as u16) >> 4) | ((chunk[2] as u16) << 4);

            if d1 < Q as u16 {
                poly.coeffs[j] = d1 as i16;
                j += 1;
            }
            if j < N && d2 < Q as u16 {
                poly.coeffs[j] = d2 as i16;
                j += 1;
            }
            if j == N {
                break;
            }
        }
    }

    poly
}

/// Sample a noise polynomial from `CBD_ETA(PRF(seed, nonce))`.
pub fn poly_getnoise<S: Symmetric, const ETA: usize>(seed: &[u8; 32], nonce: u8) -> Poly {
    let mut buf = [0u8; 64 * 3];
    let len = 64 * ETA;
    S::prf(seed, nonce, &mut buf[..len]);
    let poly = poly_cbd::<ETA>(&buf[..len]);
    buf.zeroize();
    poly
}
