//! Application state for the worker tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::WorkerStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the worker record store and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<WorkerStore>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    ///
    /// The store starts empty, using the configured default daily rate.
    pub fn new(config: AppConfig) -> Self {
        let store = WorkerStore::new(config.default_daily_rate);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the worker record store.
    pub fn store(&self) -> &WorkerStore {
        &self.store
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
