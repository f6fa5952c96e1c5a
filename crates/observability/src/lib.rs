//! Tracing setup shared by native tools and tests.
//!
//! The browser build logs through the console via `tracing`'s default
//! machinery; this crate only configures the native side.

/// Tracing configuration (filters, format).
pub mod tracing;

pub use self::tracing::init;
