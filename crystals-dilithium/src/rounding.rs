//! Rounding functions for Dilithium.
//!
//! Implements Power2Round, Decompose, MakeHint and UseHint on single
//! coefficients. `GAMMA2` is either `(q-1)/88` or `(q-1)/32`; the
//! high part then ranges over `0..44` or `0..16` respectively.

use crate::params::common::{D, Q};

const GAMMA2_88: i32 = (Q - 1) / 88;

/// Power2Round: split `a` into `(a1, a0)` with `a = a1 * 2^D + a0`.
///
/// Input: a in [0, q-1]. Output: a0 in (-2^(D-1), 2^(D-1)].
#[inline]
pub const fn power2round(a: i32) -> (i32, i32) {
    let a1 = (a + (1 << (D - 1)) - 1) >> D;
    let a0 = a - (a1 << D);
    (a1, a0)
}

/// Decompose: split `a` into `(a1, a0)` with `a = a1 * 2 * GAMMA2 + a0 mod q`.
///
/// Input: a in [0, q-1]. Output: a0 in (-GAMMA2, GAMMA2], except that the
/// top residue class maps to `a1 = 0` with `a0 = a - q`.
///
/// The division by `2 * GAMMA2` is a multiply-shift on `ceil(a / 128)`:
/// by 1025 / 2^22 for (q-1)/32 and by 11275 / 2^24 for (q-1)/88.
#[inline]
pub const fn decompose<const GAMMA2: i32>(a: i32) -> (i32, i32) {
    let mut a1 = (a + 127) >> 7;
    if GAMMA2 == GAMMA2_88 {
        a1 = (a1 * 11275 + (1 << 23)) >> 24;
        // 44 wraps to 0
        a1 ^= ((43 - a1) >> 31) & a1;
    } else {
        a1 = (a1 * 1025 + (1 << 21)) >> 22;
        a1 &= 15;
    }

    let mut a0 = a - a1 * 2 * GAMMA2;
    a0 -= (((Q - 1) / 2 - a0) >> 31) & Q;
    (a1, a0)
}

/// MakeHint: 1 if the low part `a0` overflows into the high part `a1`.
#[inline]
pub const fn make_hint<const GAMMA2: i32>(a0: i32, a1: i32) -> u32 {
    (a0 > GAMMA2 || a0 < -GAMMA2 || (a0 == -GAMMA2 && a1 != 0)) as u32
}

/// UseHint: correct the high bits of `a` according to `hint`.
#[inline]
pub const fn use_hint<const GAMMA2: i32>(a: i32, hint: u32) -> i32 {
    let (a1, a0) = decompose::<GAMMA2>(a);
    if hint == 0 {
        return a1;
    }

    if GAMMA2 == GAMMA2_88 {
        if a0 > 0 {
            if a1 == 43 {
                0
            } else {
                a1 + 1
            }
        } else if a1 == 0 {
            43
        } else {
            a1 - 1
        }
    } else if a0 > 0 {
        (a1 + 1) & 15
    } else {
        (a1 - 1) & 15
    }
}
