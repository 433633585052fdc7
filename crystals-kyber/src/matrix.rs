//! Matrix operations for Kyber.
//!
//! The public matrix A is expanded from `rho` on every use and never stored.

#![allow(clippy::needless_range_loop)]

use crate::polyvec::PolyVec;
use crate::sample::sample_uniform;
use crate::symmetric::Symmetric;

/// K x K matrix of NTT-domain polynomials, one [`PolyVec`] per row.
pub type Matrix<const K: usize> = [PolyVec<K>; K];

/// Expand the matrix A (or its transpose) from the public seed.
///
/// Entry `A[i][j]` is sampled from `XOF(rho, j, i)`; the transpose swaps the
/// two domain bytes.
pub fn gen_matrix<S: Symmetric, const K: usize>(rho: &[u8; 32], transposed: bool) -> Matrix<K> {
    let mut a: Matrix<K> = core::array::from_fn(|_| PolyVec::new());

    for i in 0..K {
        for j in 0..K {
            let mut xof = if transposed {
                S::xof(rho, i as u8, j as u8)
            } else {
                S::xof(rho, j as u8, i as u8)
            };
            a[i].polys[j] = sample_uniform(&mut xof);
        }
    }

    a
}

/// Multiply `a` by an NTT-domain vector: `result[i] = <a[i], v>`.
///
/// Each row carries the `2^-16` factor of the pointwise product.
pub fn matrix_vec_mul<const K: usize>(a: &Matrix<K>, v: &PolyVec<K>) -> PolyVec<K> {
    let mut result = PolyVec::new();
    for i in 0..K {
        result.polys[i] = a[i].basemul_acc_montgomery(v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::common::{N, Q};
    use crate::symmetric::{Aes90s, Shake};

    #[test]
    fn test_gen_matrix_deterministic() {
        let rho = [0x42u8; 32];
        let a1: Matrix<3> = gen_matrix::<Shake, 3>(&rho, false);
        let a2: Matrix<3> = gen_matrix::<Shake, 3>(&rho, false);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(a1[i].polys[j].coeffs, a2[i].polys[j].coeffs);
            }
        }
    }

    #[test]
    fn test_gen_matrix_coefficients_in_range() {
        let rho = [0x42u8; 32];
        let a: Matrix<2> = gen_matrix::<Aes90s, 2>(&rho, false);
        for row in &a {
            for poly in &row.polys {
                assert!(poly.coeffs.iter().all(|&c| (0..Q).contains(&c)));
            }
        }
    }

    #[test]
    fn test_gen_matrix_transpose() {
        fn check<S: Symmetric>() {
            let rho = [0x17u8; 32];
            let a: Matrix<3> = gen_matrix::<S, 3>(&rho, false);
            let at: Matrix<3> = gen_matrix::<S, 3>(&rho, true);
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(at[i].polys[j].coeffs, a[j].polys[i].coeffs, "[{i},{j}]");
                }
            }
        }
        check::<Shake>();
        check::<Aes90s>();
    }

    #[test]
    fn test_entry_uses_column_then_row() {
        let rho = [0x05u8; 32];
        let a: Matrix<2> = gen_matrix::<Shake, 2>(&rho, false);
        let expected = sample_uniform(&mut Shake::xof(&rho, 1, 0));
        assert_eq!(a[0].polys[1].coeffs, expected.coeffs);
    }

    #[test]
    fn test_matrix_vec_mul_zero() {
        let rho = [0x42u8; 32];
        let a: Matrix<2> = gen_matrix::<Shake, 2>(&rho, false);
        let v: PolyVec<2> = PolyVec::new();
        let r = matrix_vec_mul(&a, &v);
        for poly in &r.polys {
            assert_eq!(poly.coeffs, [0i16; N]);
        }
    }
}
