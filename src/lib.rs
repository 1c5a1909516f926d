pub mod analytics;
pub mod charts;
pub mod config;
pub mod controllers;
pub mod error;
pub mod loader;
pub mod models;
pub mod reports;
pub mod views;

use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self { config })
    }
}
