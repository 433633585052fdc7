//! Modular arithmetic generator macros.
//!
//! Kyber works with `i16` coefficients modulo 3329 and Dilithium with `i32`
//! coefficients modulo 8380417. The reductions are the same shape in both
//! rings, so each crate instantiates these macros with its own types and
//! constants. Every generated function is branch-free.

/// Generate a rounded Barrett reduction.
///
/// Computes the centered representative of `a mod q` in
/// `[-(q-1)/2, (q-1)/2]` as `a - round(a * barrett_mul / 2^shift) * q`.
///
/// # Parameters
/// - `$name`: Function name (e.g., `barrett_reduce`)
/// - `$coeff`: Coefficient type
/// - `$wide`: Wide type for intermediate computations
/// - `$q`: The prime modulus
/// - `$barrett_mul`: `round(2^shift / q)`
/// - `$shift`: Bit shift amount
#[macro_export]
macro_rules! define_barrett_reduce_rounded {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        q: $q:expr,
        barrett_mul: $barrett_mul:expr,
        shift: $shift:expr
    ) => {
        /// Barrett reduction to the centered representative mod q.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let a = a as $wide;
            let half = 1 as $wide << ($shift - 1);
            let t = ((a * $barrett_mul + half) >> $shift) as $coeff;
            (a - (t as $wide) * ($q as $wide)) as $coeff
        }
    };
}

/// Generate a shift-based approximate reduction.
///
/// For a modulus close to a power of two, `a - ((a + 2^(shift-1)) >> shift) * q`
/// brings `a` into a small range around zero without a multiplication by a
/// Barrett constant. Dilithium uses this with `shift = 23`, which maps any
/// `a <= 2^31 - 2^22 - 1` into `[-6283009, 6283007]`.
#[macro_export]
macro_rules! define_shift_reduce {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        q: $q:expr,
        shift: $shift:expr
    ) => {
        /// Reduce to a representative congruent mod q near zero.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let t = (a + (1 << ($shift - 1))) >> $shift;
            a - t * $q
        }
    };
}

/// Generate Montgomery reduction function.
///
/// Montgomery reduction computes `a * R^(-1) mod q` where R is a power of 2.
///
/// # Parameters
/// - `$name`: Function name (e.g., `montgomery_reduce`)
/// - `$coeff`: Coefficient type (i16 or i32)
/// - `$wide`: Wide type for input (i32 or i64)
/// - `$q`: The prime modulus
/// - `$qinv`: q^(-1) mod R (as signed integer for wrapping mul)
/// - `$shift`: log2(R), 16 for Kyber and 32 for Dilithium
#[macro_export]
macro_rules! define_montgomery_reduce {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        q: $q:expr,
        qinv: $qinv:expr,
        shift: $shift:expr
    ) => {
        /// Montgomery reduction: compute a * R^(-1) mod q.
        #[inline]
        pub const fn $name(a: $wide) -> $coeff {
            // t = (a mod R) * qinv mod R
            let t = (a as $coeff).wrapping_mul($qinv as $coeff);
            // (a - t*q) / R
            ((a - (t as $wide) * ($q as $wide)) >> $shift) as $coeff
        }
    };
}

/// Generate Montgomery multiplication function.
///
/// Computes `a * b * R^(-1) mod q`.
#[macro_export]
macro_rules! define_montgomery_mul {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        montgomery_reduce: $mont_reduce:ident
    ) => {
        /// Montgomery multiplication: compute a * b * R^(-1) mod q.
        #[inline]
        pub const fn $name(a: $coeff, b: $coeff) -> $coeff {
            $mont_reduce((a as $wide) * (b as $wide))
        }
    };
}

/// Generate conditional add of q.
///
/// Maps a value in `(-q, q)` into `[0, q)`.
#[macro_export]
macro_rules! define_caddq {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        q: $q:expr
    ) => {
        /// Conditional add q: add q if a is negative.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            // mask is -1 (all 1s) if a < 0, else 0
            let mask = a >> (core::mem::size_of::<$coeff>() * 8 - 1);
            a + ($q & mask)
        }
    };
}
