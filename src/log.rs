//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, this re-exports the `tracing`
//! macro. When disabled, it expands to a no-op for zero runtime overhead.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
