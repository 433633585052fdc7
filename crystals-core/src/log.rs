//! Logging macros.
//!
//! The `cfg` inside each expansion is evaluated in the invoking crate, so
//! every crate that logs must declare a `tracing` feature that forwards to
//! `crystals-core/tracing`. With the feature off, the macros expand to
//! nothing and `tracing` is not linked.
//!
//! Never pass secret material or the outcome of a decapsulation
//! re-encryption check to these macros.

/// Emit a `tracing::trace!` event when the `tracing` feature is enabled.
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::trace!($($arg)*);
    };
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        $crate::__tracing::debug!($($arg)*);
    };
}
