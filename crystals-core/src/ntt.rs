//! NTT (Number Theoretic Transform) generator macros.
//!
//! Kyber and Dilithium share the butterfly structure (Cooley-Tukey forward,
//! Gentleman-Sande inverse) but differ in coefficient type, modulus, depth
//! and twiddle table. Kyber stops at degree-2 factors (`len_min: 2`, 7
//! layers); Dilithium splits completely (`len_min: 1`, 8 layers).
//!
//! Both twiddle tables hold `zeta^brv(i) * 2^R mod q` in bit-reversed order
//! and are read from index 1 upwards by the forward transform and from the
//! top down by the inverse.
//!
//! In the inverse transform the sum branch `a + b` is never multiplied, so
//! its magnitude can double on every layer while the difference branch is
//! brought back below `q` by the Montgomery multiply. Kyber works in `i16`:
//! after seven unreduced layers a sum of inputs near `q = 3329` would reach
//! `2^7 * q`, far past `i16::MAX`, so Kyber Barrett-reduces the sum on every
//! layer. Dilithium's `i32` coefficients have room for all eight doublings
//! (`2^8 * 8380417 < 2^31`), so it uses plain addition and reduces once in
//! the final scaling pass.

/// Generate a forward NTT function (Cooley-Tukey, decimation-in-time).
///
/// # Parameters
/// - `$name`: Function name
/// - `$coeff`: Coefficient type (`i16` or `i32`)
/// - `$n`: Polynomial degree (256)
/// - `$len_min`: Smallest butterfly distance
/// - `$zetas`: Twiddle table in Montgomery form
/// - `$mont_mul`: Montgomery multiplication function
///
/// The output is in bit-reversed order. No reduction is applied, so
/// coefficients grow by at most `q` per layer.
#[macro_export]
macro_rules! define_ntt_forward {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        n: $n:expr,
        len_min: $len_min:expr,
        zetas: $zetas:expr,
        montgomery_mul: $mont_mul:ident
    ) => {
        /// Forward NTT: Cooley-Tukey butterfly (decimation-in-time).
        pub(crate) fn $name(coeffs: &mut [$coeff; $n]) {
            let mut k: usize = 1;
            let mut len: usize = $n / 2;

            while len >= $len_min {
                let mut start: usize = 0;
                while start < $n {
                    let zeta = $zetas[k];
                    k += 1;

                    for j in start..(start + len) {
                        let t = $mont_mul(zeta, coeffs[j + len]);
                        let u = coeffs[j];
                        coeffs[j] = u + t;
                        coeffs[j + len] = u - t;
                    }
                    start += 2 * len;
                }
                len >>= 1;
            }
        }
    };
}

/// Generate an inverse NTT function (Gentleman-Sande, decimation-in-frequency).
///
/// The final pass multiplies every coefficient by `$inv_n_mont`. Choosing
/// `mont^2 / n` there leaves the result multiplied by the Montgomery factor,
/// which cancels the `R^-1` picked up by a preceding pointwise product.
///
/// # Parameters
/// - `$name`: Function name
/// - `$coeff`: Coefficient type (`i16` or `i32`)
/// - `$n`: Polynomial degree (256)
/// - `$k_start`: One past the last twiddle index used (Kyber 128, Dilithium 256)
/// - `$len_start`: Smallest butterfly distance (Kyber 2, Dilithium 1)
/// - `$zetas`: Twiddle table
/// - `$mont_mul`: Montgomery multiplication function
/// - `$inv_n_mont`: Final scaling factor
/// - `$sum_fn`: Butterfly sum, `fn($coeff, $coeff) -> $coeff`
/// - `$diff_fn`: Butterfly difference, `fn($coeff, $coeff) -> $coeff`
///
/// Kyber Barrett-reduces the sum branch; Dilithium uses plain addition,
/// which stays below `2^31` for inputs under `q`.
#[macro_export]
macro_rules! define_ntt_inverse {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        n: $n:expr,
        k_start: $k_start:expr,
        len_start: $len_start:expr,
        zetas: $zetas:expr,
        montgomery_mul: $mont_mul:ident,
        inv_n_mont: $inv_n_mont:expr,
        butterfly_sum: $sum_fn:ident,
        butterfly_diff: $diff_fn:ident
    ) => {
        /// Inverse NTT: Gentleman-Sande butterfly (decimation-in-frequency).
        pub(crate) fn $name(coeffs: &mut [$coeff; $n]) {
            let mut k: usize = $k_start;
            let mut len: usize = $len_start;

            while len <= $n / 2 {
                let mut start: usize = 0;
                while start < $n {
                    k -= 1;
                    let neg_zeta = -$zetas[k];

                    for j in start..(start + len) {
                        let t = coeffs[j];
                        let x = coeffs[j + len];
                        coeffs[j] = $sum_fn(t, x);
                        coeffs[j + len] = $mont_mul(neg_zeta, $diff_fn(t, x));
                    }
                    start += 2 * len;
                }
                len <<= 1;
            }

            for c in coeffs.iter_mut() {
                *c = $mont_mul(*c, $inv_n_mont);
            }
        }
    };
}
