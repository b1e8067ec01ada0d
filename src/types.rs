//! Wire types for the external user directory
//!
//! These mirror the upstream JSON shape; unknown fields are ignored and
//! nothing here outlives a single request.

use serde::{Deserialize, Serialize};

/// A user as served by the upstream directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: DirectoryAddress,
}

/// Postal address attached to a directory user. Only the city is projected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryAddress {
    pub city: String,
}
