//! Polynomial arithmetic for Dilithium.
//!
//! Polynomials are elements of the ring R_q = Z_q\[X\] / (X^256 + 1)
//! where q = 8380417.

#![allow(clippy::needless_range_loop)]

use crate::ntt;
use crate::params::common::{D, N, Q};
use crate::reduce::{caddq, montgomery_mul, reduce32};
use subtle::{Choice, ConstantTimeGreater};
use zeroize::Zeroize;

/// A polynomial in R_q with 256 coefficients.
#[derive(Clone, Zeroize)]
#[cfg_attr(test, derive(Debug))]
pub struct Poly {
    /// Coefficients, not necessarily reduced
    pub coeffs: [i32; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    /// Create a zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Bring every coefficient into `[-6283009, 6283007]`.
    pub fn reduce(&mut self) {
        for c in &mut self.coeffs {
            *c = reduce32(*c);
        }
    }

    /// Add q to negative coefficients.
    pub fn caddq(&mut self) {
        for c in &mut self.coeffs {
            *c = caddq(*c);
        }
    }

    /// self += other, no reduction.
    pub fn add_assign(&mut self, other: &Self) {
        for i in 0..N {
            self.coeffs[i] += other.coeffs[i];
        }
    }

    /// self -= other, no reduction.
    pub fn sub_assign(&mut self, other: &Self) {
        for i in 0..N {
            self.coeffs[i] -= other.coeffs[i];
        }
    }

    /// Multiply by 2^D without reduction.
    pub fn shift_left(&mut self) {
        for c in &mut self.coeffs {
            *c <<= D;
        }
    }

    /// Forward NTT (in place).
    pub fn ntt(&mut self) {
        ntt::ntt(self);
    }

    /// Inverse NTT with Montgomery factor (in place).
    pub fn inv_ntt_tomont(&mut self) {
        ntt::inv_ntt_tomont(self);
    }

    /// Pointwise product in the NTT domain, carrying a factor `2^-32`.
    #[must_use]
    pub fn pointwise_montgomery(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N {
            r.coeffs[i] = montgomery_mul(self.coeffs[i], other.coeffs[i]);
        }
        r
    }

    /// Whether some coefficient has `|c| >= bound`.
    ///
    /// Coefficients must have been reduced by [`Poly::reduce`]. Any bound
    /// above `(q-1)/8` is rejected outright. Every coefficient is inspected
    /// regardless of earlier results, and the absolute value is computed
    /// without branching on the sign, so timing does not depend on where a
    /// large coefficient sits.
    pub fn exceeds_norm(&self, bound: i32) -> bool {
        if bound > (Q - 1) / 8 {
            return true;
        }

        let limit = (bound - 1) as u32;
        let mut fail = Choice::from(0u8);
        for &a in &self.coeffs {
            let t = a - ((a >> 31) & (2 * a));
            fail |= (t as u32).ct_gt(&limit);
        }
        bool::from(fail)
    }
}
