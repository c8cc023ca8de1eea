use crate::{handlers, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the browser-facing routes
pub fn create_app_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_items))
        .route("/add", get(handlers::show_add_form).post(handlers::submit_add_form))
        .route(
            "/edit/:id",
            get(handlers::show_edit_form).post(handlers::submit_edit_form),
        )
        .route("/delete/:id", get(handlers::delete_item))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
