//! Browser console for the Warden management API.
//!
//! The Leptos frontend only builds for `wasm32`; the table/paging/cookie
//! helpers are plain Rust so they stay testable on the host.

pub mod access;
pub mod cookie;
pub mod format;
pub mod paging;
pub mod sort;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
