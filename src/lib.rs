//! Annuaire - a small JSON HTTP gateway over an external user directory
//!
//! Annuaire exposes a handful of stateless JSON endpoints:
//! - A welcome message and a health check
//! - Read-only proxies over an external user-directory API
//! - A stateless addition endpoint
//!
//! Every request is independent; nothing is persisted or cached.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod types;

pub use error::{Error, Result};
