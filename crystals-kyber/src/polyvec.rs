//! Polynomial vector operations for Kyber.
//!
//! This module provides the `PolyVec` type representing a vector of K polynomials,
//! along with NTT transforms, the NTT-domain inner product, and serialization.

#![allow(clippy::wrong_self_convention)]

use crate::encode::{poly_from_bytes, poly_to_bytes};
use crate::ntt::{inv_ntt_tomont, ntt};
use crate::params::common::POLYBYTES;
use crate::poly::{
    poly_add_assign, poly_basemul_montgomery, poly_compress, poly_decompress, poly_reduce, Poly,
};
use zeroize::Zeroize;

/// A vector of K polynomials.
///
/// Used to represent the vectors s, e, t, r, e1 and u.
#[derive(Clone)]
pub struct PolyVec<const K: usize> {
    /// The K polynomials in the vector.
    pub polys: [Poly; K],
}

impl<const K: usize> Default for PolyVec<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> Zeroize for PolyVec<K> {
    fn zeroize(&mut self) {
        for poly in &mut self.polys {
            poly.zeroize();
        }
    }
}

impl<const K: usize> PolyVec<K> {
    /// Create a new zero polynomial vector.
    pub fn new() -> Self {
        Self {
            polys: core::array::from_fn(|_| Poly::new()),
        }
    }

    /// Apply forward NTT (with reduction) to all polynomials.
    pub fn ntt(&mut self) {
        for poly in &mut self.polys {
            ntt(poly);
        }
    }

    /// Apply the Montgomery-scaled inverse NTT to all polynomials.
    pub fn inv_ntt_tomont(&mut self) {
        for poly in &mut self.polys {
            inv_ntt_tomont(poly);
        }
    }

    /// Barrett-reduce all coefficients.
    pub fn reduce(&mut self) {
        for poly in &mut self.polys {
            poly_reduce(poly);
        }
    }

    /// Add another polynomial vector to self in place.
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            poly_add_assign(a, b);
        }
    }

    /// Inner product in the NTT domain, reduced.
    ///
    /// Returns `sum_i self[i] * other[i]` with the `2^-16` factor of the
    /// pointwise product.
    pub fn basemul_acc_montgomery(&self, other: &Self) -> Poly {
        let mut result = Poly::new();
        for i in 0..K {
            let t = poly_basemul_montgomery(&self.polys[i], &other.polys[i]);
            poly_add_assign(&mut result, &t);
        }
        poly_reduce(&mut result);
        result
    }

    /// Serialize with 12 bits per coefficient into `K * 384` bytes.
    pub fn to_bytes(&self, out: &mut [u8]) {
        for (poly, chunk) in self.polys.iter().zip(out.chunks_exact_mut(POLYBYTES)) {
            poly_to_bytes(poly, chunk);
        }
    }

    /// Deserialize `K * 384` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut result = Self::new();
        for (poly, chunk) in result.polys.iter_mut().zip(bytes.chunks_exact(POLYBYTES)) {
            *poly = poly_from_bytes(chunk);
        }
        result
    }

    /// Compress every polynomial to `D` bits into `K * 32 * D` bytes.
    pub fn compress<const D: usize>(&self, out: &mut [u8]) {
        for (poly, chunk) in self.polys.iter().zip(out.chunks_exact_mut(32 * D)) {
            poly_compress::<D>(poly, chunk);
        }
    }

    /// Decompress `K * 32 * D` bytes.
    pub fn decompress<const D: usize>(bytes: &[u8]) -> Self {
        let mut result = Self::new();
        for (poly, chunk) in result.polys.iter_mut().zip(bytes.chunks_exact(32 * D)) {
            *poly = poly_decompress::<D>(chunk);
        }
        result
    }
}
