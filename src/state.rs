use crate::config::Config;
use crate::store::DocumentStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: DocumentStore::from_config(&config),
            config: Arc::new(config),
        }
    }
}
