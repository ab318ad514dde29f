//! Diagnostic event macros.
//!
//! These forward to [`tracing`](https://docs.rs/tracing) when the `tracing`
//! feature is enabled and expand to nothing otherwise. Never pass secret
//! scalars (private keys, nonces) to them.

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}
