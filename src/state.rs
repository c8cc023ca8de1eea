use std::sync::Arc;

use crate::clients::ItemsBackend;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ItemsBackend>,
    pub api_server_url: String,
    pub debug: bool,
}

impl AppState {
    pub fn new(backend: Arc<dyn ItemsBackend>, api_server_url: String, debug: bool) -> Self {
        Self {
            backend,
            api_server_url,
            debug,
        }
    }
}
