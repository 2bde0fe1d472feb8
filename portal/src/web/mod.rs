pub mod customers;
pub mod dashboard;
pub mod registry;
pub mod render;
pub mod settings;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::show))
        // Create customer
        .route("/create-customer", get(customers::new_form))
        .route("/create-customer/:id", get(customers::show).post(customers::submit))
        .route("/settings", get(settings::show))
        .with_state(state)
}
