//! `warden-client` — the console's API gateway.
//!
//! A single HTTP client wraps every backend call: it attaches the bearer
//! token, classifies error responses, invalidates the session on 401, and
//! surfaces errors as transient notifications through the [`GatewayEvents`]
//! seam while still propagating them to the caller.

pub mod audit;
pub mod auth;
pub mod clients;
pub mod dto;
pub mod gateway;
pub mod tasks;
pub mod users;

pub use audit::audit_export_filename;
pub use dto::{AuditFilter, NewTask, NewUser, UpdateClient, UpdateUser, UserStats};
pub use gateway::{ApiClient, GatewayEvents, Notice, NoticeLevel, NullEvents};
