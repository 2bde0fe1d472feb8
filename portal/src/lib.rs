pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod schema;
pub mod web;

use std::sync::Arc;

use client::CustomerApi;
use web::registry::FormRegistry;

/// Shared application state available to all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CustomerApi>,
    pub forms: Arc<FormRegistry>,
}
