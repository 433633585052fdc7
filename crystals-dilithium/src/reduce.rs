//! Modular arithmetic for Dilithium (q = 8380417, R = 2^32).

use crate::params::common::Q;
use crystals_core::{
    define_caddq, define_montgomery_mul, define_montgomery_reduce, define_shift_reduce,
};

/// q^(-1) mod 2^32
pub const QINV: i32 = 58_728_449;

/// Inverse NTT scaling: mont^2 / 256 mod q
pub const INV_N_MONT: i32 = 41_978;

/// R^2 mod q, for conversion into Montgomery form
#[cfg(test)]
pub const MONT_R2: i64 = 2_365_951;

define_montgomery_reduce! {
    name: montgomery_reduce,
    coeff: i32,
    wide: i64,
    q: Q,
    qinv: QINV,
    shift: 32
}

define_montgomery_mul! {
    name: montgomery_mul,
    coeff: i32,
    wide: i64,
    montgomery_reduce: montgomery_reduce
}

define_shift_reduce! {
    name: reduce32,
    coeff: i32,
    q: Q,
    shift: 23
}

define_caddq! {
    name: caddq,
    coeff: i32,
    q: Q
}

/// Canonical representative in `[0, q)`.
#[cfg(test)]
#[inline]
pub const fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}
