//! Routed pages.

pub mod audit;
pub mod clients;
pub mod login;
pub mod overview;
pub mod security;
pub mod tasks;
pub mod users;
