use axum::{extract::State, response::Response};
use tracing::{error, warn};

use crate::{
    handlers::connection_error,
    services::flash_service::FlashContext,
    state::AppState,
    views::{self, Page},
};

/// Show every item. Backend trouble degrades to an empty list plus a flash.
pub async fn list_items(State(state): State<AppState>, mut flash: FlashContext) -> Response {
    let items = match state.backend.list_items().await {
        Ok(reply) => match reply.body {
            Some(items) => items,
            None => {
                warn!("Backend answered {} when listing items", reply.status);
                flash.error(format!("Error fetching items: {}", reply.status.as_u16()));
                Vec::new()
            }
        },
        Err(e) => {
            error!("Failed to list items: {}", e);
            flash.error(connection_error(&state, &e));
            Vec::new()
        }
    };

    views::render(&state, flash, Page::List(items))
}
