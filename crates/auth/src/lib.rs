//! `warden-auth` — client-side authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the network
//! seam is the [`AuthBackend`] trait and the persistence seam is the
//! [`TokenStore`] trait. The console wires both to real implementations; the
//! tests wire them to scripted mocks.

pub mod context;
pub mod permissions;
pub mod role;
pub mod session;
pub mod user;

pub use context::{AuthBackend, AuthContext, AuthPhase, Credentials, LoginResponse};
pub use permissions::Permission;
pub use role::Role;
pub use session::{MemoryTokenStore, SESSION_COOKIE, SESSION_TTL_SECS, Session, TokenStore};
pub use user::{UserAccount, UserStatus};
