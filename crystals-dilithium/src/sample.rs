//! Sampling functions for Dilithium.
//!
//! Every sampler reads from a seeded [`XofReader`] until its polynomial is
//! full. Reading the stream continuously gives exactly the coefficients the
//! reference block-wise samplers produce, including the AES case where a
//! 3-byte candidate straddles two 64-byte blocks.

use crate::packing::unpack_z;
use crate::params::common::{N, Q};
use crate::poly::Poly;
use crate::symmetric::shake256_reader;
use sha3::digest::XofReader;
use zeroize::Zeroize;

/// SHAKE128 rate; matrix sampling reads this many bytes at a time.
const UNIFORM_CHUNK: usize = 168;

/// SHAKE256 rate; eta sampling and the challenge read this many bytes at a time.
const ETA_CHUNK: usize = 136;

/// Largest packed `z` polynomial (gamma1 = 2^19).
const MAX_POLYZ_BYTES: usize = 640;

/// Uniform polynomial with coefficients in `[0, q)`.
///
/// Each 3-byte group gives a 23-bit candidate, accepted iff below q.
pub fn sample_uniform<X: XofReader>(xof: &mut X) -> Poly {
    let mut poly = Poly::zero();
    let mut buf = [0u8; UNIFORM_CHUNK];
    let mut ctr = 0;

    while ctr < N {
        xof.read(&mut buf);
        for chunk in buf.chunks_exact(3) {
            let t = (u32::from(chunk[0]) | (u32::from(chunk[1]) << 8) | (u32::from(chunk[2]) << 16))
                & 0x7F_FFFF;
            if t < Q as u32 {
                poly.coeffs[ctr] = t as i32;
                ctr += 1;
                if ctr == N {
                    break;
                }
            }
        }
    }

    poly
}

/// Map a nibble to a coefficient in `[-ETA, ETA]`, or `None` to reject it.
#[inline]
fn eta_from_nibble<const ETA: usize>(t: u8) -> Option<i32> {
    let t = i32::from(t);
    match ETA {
        2 if t < 15 => Some(2 - (t - ((205 * t) >> 10) * 5)),
        4 if t < 9 => Some(4 - t),
        _ => None,
    }
}

/// Secret polynomial with coefficients in `[-ETA, ETA]`, ETA in {2, 4}.
///
/// Low nibble first; a nibble that would complete the polynomial ends the
/// sampling and the rest of its byte is discarded.
pub fn sample_eta<X: XofReader, const ETA: usize>(xof: &mut X) -> Poly {
    debug_assert!(ETA == 2 || ETA == 4);
    let mut poly = Poly::zero();
    let mut buf = [0u8; ETA_CHUNK];
    let mut ctr = 0;

    'outer: while ctr < N {
        xof.read(&mut buf);
        for &byte in &buf {
            for nibble in [byte & 0x0F, byte >> 4] {
                if let Some(c) = eta_from_nibble::<ETA>(nibble) {
                    poly.coeffs[ctr] = c;
                    ctr += 1;
                    if ctr == N {
                        break 'outer;
                    }
                }
            }
        }
    }

    buf.zeroize();
    poly
}

/// Masking polynomial with coefficients in `[-GAMMA1 + 1, GAMMA1]`.
///
/// Reads one packed `z` polynomial from the stream and unpacks it.
pub fn sample_gamma1<X: XofReader, const GAMMA1: i32>(xof: &mut X) -> Poly {
    let len = crate::packing::polyz_packed_bytes(GAMMA1);
    let mut buf = [0u8; MAX_POLYZ_BYTES];
    xof.read(&mut buf[..len]);
    let poly = unpack_z::<GAMMA1>(&buf[..len]);
    buf.zeroize();
    poly
}

/// Challenge polynomial with exactly `TAU` nonzero coefficients, all +/-1.
///
/// Expands `SHAKE256(seed)`: the first 8 bytes (little-endian) give the
/// signs, then an inside-out Fisher-Yates shuffle places the +/-1 entries.
pub fn sample_challenge<const TAU: usize>(seed: &[u8; 32]) -> Poly {
    let mut xof = shake256_reader(&[seed]);
    let mut buf = [0u8; ETA_CHUNK];
    xof.read(&mut buf);

    let mut sign_bytes = [0u8; 8];
    sign_bytes.copy_from_slice(&buf[..8]);
    let mut signs = u64::from_le_bytes(sign_bytes);
    let mut pos = 8;

    let mut c = Poly::zero();
    for i in N - TAU..N {
        let b = loop {
            if pos == buf.len() {
                xof.read(&mut buf);
                pos = 0;
            }
            let b = usize::from(buf[pos]);
            pos += 1;
            if b <= i {
                break b;
            }
        };
        c.coeffs[i] = c.coeffs[b];
        c.coeffs[b] = 1 - 2 * (signs & 1) as i32;
        signs >>= 1;
    }

    c
}
