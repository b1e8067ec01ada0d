//! Outbound client for the external user directory
//!
//! The collaborator sits behind the narrow [`UserDirectory`] trait so the API
//! layer (and its tests) never depend on a live network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::types::DirectoryUser;

/// Read-only view over the external user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full user list.
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>>;

    /// Fetch one user by id. Returns [`Error::UserNotFound`] when the
    /// directory answers 404.
    async fn fetch_user(&self, id: u64) -> Result<DirectoryUser>;
}

/// reqwest-backed implementation talking to a JSON REST directory.
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!(%url, "Fetching user list from directory");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn fetch_user(&self, id: u64) -> Result<DirectoryUser> {
        let url = format!("{}/users/{}", self.base_url, id);
        tracing::debug!(%url, "Fetching user from directory");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // An explicit 404 is a distinct outcome, not a generic failure.
        if status == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound);
        }
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
