//! Modular arithmetic for Kyber (q = 3329, R = 2^16).

#![allow(clippy::let_and_return)]

use crate::params::common::Q;
use crystals_core::{
    define_barrett_reduce_rounded, define_caddq, define_montgomery_mul, define_montgomery_reduce,
};

/// Q inverse mod 2^16: q^(-1) mod 2^16 = -3327
pub const QINV: i32 = -3327;

/// Montgomery constant: 2^16 mod q = 2285
pub const MONT: i16 = 2285;

/// R^2 mod q for Montgomery: (2^16)^2 mod q = 1353
pub const MONT_R2: i32 = 1353;

/// Barrett constant: round(2^26 / q) = 20159
pub const BARRETT_MUL: i32 = 20159;

/// Inverse NTT scaling: mont^2 / 128 mod q = 1441
pub const INV_N_MONT: i16 = 1441;

define_barrett_reduce_rounded! {
    name: barrett_reduce,
    coeff: i16,
    wide: i32,
    q: Q,
    barrett_mul: BARRETT_MUL,
    shift: 26
}

define_montgomery_reduce! {
    name: montgomery_reduce,
    coeff: i16,
    wide: i32,
    q: Q,
    qinv: QINV,
    shift: 16
}

define_montgomery_mul! {
    name: montgomery_mul,
    coeff: i16,
    wide: i32,
    montgomery_reduce: montgomery_reduce
}

define_caddq! {
    name: caddq,
    coeff: i16,
    q: Q
}

/// Convert a value to Montgomery form: a -> a * R mod q
#[inline]
pub const fn to_mont(a: i16) -> i16 {
    montgomery_reduce((a as i32) * MONT_R2)
}

/// Canonical representative in [0, q-1].
#[inline]
pub const fn freeze(a: i16) -> i16 {
    caddq(barrett_reduce(a))
}
