//! `warden-core` — shared client-side primitives.
//!
//! This crate contains **pure, WASM-compatible** building blocks shared by the
//! API gateway and the console frontend: typed identifiers, the client error
//! taxonomy, the pagination envelope, read models, and startup configuration.
//! No IO, no HTTP, no browser APIs.

pub mod audit;
pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod id;
pub mod page;
pub mod task;

pub use audit::{AuditLog, AuditStats, SecurityAlert, Severity};
pub use client::{ClientStats, ClientStatus, ManagedClient};
pub use config::{ConsoleConfig, FeatureFlags};
pub use error::{ApiError, ApiResult};
pub use health::HealthStatus;
pub use id::{AlertId, AuditLogId, ClientId, TaskId, UserId};
pub use page::{DEFAULT_PAGE_SIZE, Page, PageRequest};
pub use task::{Task, TaskStats, TaskStatus};
