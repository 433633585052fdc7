//! Vectors and matrices of polynomials.
//!
//! Dilithium uses vectors of length L (s1, y, z) and K (s2, t, w, h) and
//! the K x L public matrix A, which is only ever held in the NTT domain.

use crate::params::common::{N, SEEDBYTES};
use crate::poly::Poly;
use crate::rounding::{decompose, make_hint, power2round, use_hint};
use crate::sample::{sample_eta, sample_gamma1, sample_uniform};
use crate::symmetric::Symmetric;
use zeroize::Zeroize;

/// Vector of `M` polynomials.
#[derive(Clone)]
pub struct PolyVec<const M: usize> {
    /// The polynomials
    pub polys: [Poly; M],
}

impl<const M: usize> Default for PolyVec<M> {
    fn default() -> Self {
        Self {
            polys: core::array::from_fn(|_| Poly::zero()),
        }
    }
}

impl<const M: usize> Zeroize for PolyVec<M> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<const M: usize> PolyVec<M> {
    /// Secret vector with coefficients in `[-ETA, ETA]`; polynomial `i`
    /// is sampled with nonce `nonce + i`.
    pub fn uniform_eta<S: Symmetric, const ETA: usize>(seed: &[u8; 64], nonce: u16) -> Self {
        let mut v = Self::default();
        for (i, p) in v.polys.iter_mut().enumerate() {
            let mut stream = S::stream256(seed, nonce.wrapping_add(i as u16));
            *p = sample_eta::<_, ETA>(&mut stream);
        }
        v
    }

    /// Masking vector for attempt `nonce`; polynomial `i` is sampled with
    /// nonce `M * nonce + i`.
    pub fn uniform_gamma1<S: Symmetric, const GAMMA1: i32>(seed: &[u8; 64], nonce: u16) -> Self {
        let mut v = Self::default();
        let base = nonce.wrapping_mul(M as u16);
        for (i, p) in v.polys.iter_mut().enumerate() {
            let mut stream = S::stream256(seed, base.wrapping_add(i as u16));
            *p = sample_gamma1::<_, GAMMA1>(&mut stream);
        }
        v
    }

    /// Forward NTT on each polynomial.
    pub fn ntt(&mut self) {
        for p in self.polys.iter_mut() {
            p.ntt();
        }
    }

    /// Inverse NTT with Montgomery factor on each polynomial.
    pub fn inv_ntt_tomont(&mut self) {
        for p in self.polys.iter_mut() {
            p.inv_ntt_tomont();
        }
    }

    /// Reduce each polynomial.
    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// Conditionally add q to each coefficient.
    pub fn caddq(&mut self) {
        for p in self.polys.iter_mut() {
            p.caddq();
        }
    }

    /// self += other.
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    /// self -= other.
    pub fn sub_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.sub_assign(b);
        }
    }

    /// Multiply every coefficient by 2^D.
    pub fn shift_left(&mut self) {
        for p in self.polys.iter_mut() {
            p.shift_left();
        }
    }

    /// Multiply each polynomial by `c` in the NTT domain.
    #[must_use]
    pub fn pointwise_poly_montgomery(&self, c: &Poly) -> Self {
        let mut r = Self::default();
        for (out, p) in r.polys.iter_mut().zip(self.polys.iter()) {
            *out = c.pointwise_montgomery(p);
        }
        r
    }

    /// Inner product in the NTT domain, carrying a factor `2^-32`.
    #[must_use]
    pub fn pointwise_acc_montgomery(&self, other: &Self) -> Poly {
        let mut r = Poly::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            r.add_assign(&a.pointwise_montgomery(b));
        }
        r
    }

    /// Whether any coefficient of any polynomial has `|c| >= bound`.
    ///
    /// All polynomials are inspected.
    pub fn exceeds_norm(&self, bound: i32) -> bool {
        self.polys
            .iter()
            .fold(false, |acc, p| acc | p.exceeds_norm(bound))
    }

    /// Split every coefficient with Power2Round into `(t1, t0)`.
    ///
    /// Coefficients must be in `[0, q)`.
    pub fn power2round(&self) -> (Self, Self) {
        let mut t1 = Self::default();
        let mut t0 = Self::default();
        for i in 0..M {
            for j in 0..N {
                let (a1, a0) = power2round(self.polys[i].coeffs[j]);
                t1.polys[i].coeffs[j] = a1;
                t0.polys[i].coeffs[j] = a0;
            }
        }
        (t1, t0)
    }

    /// Split every coefficient with Decompose into `(w1, w0)`.
    ///
    /// Coefficients must be in `[0, q)`.
    pub fn decompose<const GAMMA2: i32>(&self) -> (Self, Self) {
        let mut w1 = Self::default();
        let mut w0 = Self::default();
        for i in 0..M {
            for j in 0..N {
                let (a1, a0) = decompose::<GAMMA2>(self.polys[i].coeffs[j]);
                w1.polys[i].coeffs[j] = a1;
                w0.polys[i].coeffs[j] = a0;
            }
        }
        (w1, w0)
    }

    /// Hint vector for low parts `w0` and high parts `w1`, with the number
    /// of ones it contains.
    pub fn make_hint<const GAMMA2: i32>(w0: &Self, w1: &Self) -> (Self, usize) {
        let mut h = Self::default();
        let mut count = 0usize;
        for i in 0..M {
            for j in 0..N {
                let bit = make_hint::<GAMMA2>(w0.polys[i].coeffs[j], w1.polys[i].coeffs[j]);
                h.polys[i].coeffs[j] = bit as i32;
                count += bit as usize;
            }
        }
        (h, count)
    }

    /// High parts of `self` corrected by hint vector `h`.
    ///
    /// Coefficients must be in `[0, q)`.
    #[must_use]
    pub fn use_hint<const GAMMA2: i32>(&self, h: &Self) -> Self {
        let mut w1 = Self::default();
        for i in 0..M {
            for j in 0..N {
                w1.polys[i].coeffs[j] =
                    use_hint::<GAMMA2>(self.polys[i].coeffs[j], h.polys[i].coeffs[j] as u32);
            }
        }
        w1
    }
}

/// The public matrix A, K rows of length L, in the NTT domain.
pub type Matrix<const K: usize, const L: usize> = [PolyVec<L>; K];

/// Expand `rho` into A; entry `(i, j)` is sampled with nonce `(i << 8) + j`.
pub fn expand_matrix<S: Symmetric, const K: usize, const L: usize>(
    rho: &[u8; SEEDBYTES],
) -> Matrix<K, L> {
    core::array::from_fn(|i| {
        let mut row = PolyVec::<L>::default();
        for (j, p) in row.polys.iter_mut().enumerate() {
            let mut stream = S::stream128(rho, ((i << 8) + j) as u16);
            *p = sample_uniform(&mut stream);
        }
        row
    })
}

/// `A * v` in the NTT domain, carrying a factor `2^-32`.
pub fn matrix_mul<const K: usize, const L: usize>(a: &Matrix<K, L>, v: &PolyVec<L>) -> PolyVec<K> {
    let mut r = PolyVec::<K>::default();
    for (out, row) in r.polys.iter_mut().zip(a.iter()) {
        *out = row.pointwise_acc_montgomery(v);
    }
    r
}
