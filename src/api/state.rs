//! API server state

use std::sync::Arc;

use crate::directory::UserDirectory;

/// API server state
///
/// Holds the only collaborator the handlers need. Cloned per request by axum;
/// no mutable state is shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external user directory
    pub directory: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }
}
