use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use tracing::{error, info, warn};

use crate::{
    handlers::{connection_error, ItemId},
    services::flash_service::FlashContext,
    state::AppState,
    views,
};

/// Delete the item and always return to the list
pub async fn delete_item(
    State(state): State<AppState>,
    mut flash: FlashContext,
    ItemId(id): ItemId,
) -> Response {
    match state.backend.delete_item(id).await {
        Ok(reply) => match reply.status {
            StatusCode::NO_CONTENT => {
                info!("Deleted item {}", id);
                flash.success("Item deleted successfully");
            }
            StatusCode::NOT_FOUND => {
                warn!("Item {} not found", id);
                flash.error("Item not found");
            }
            status => {
                warn!("Backend answered {} when deleting item {}", status, id);
                flash.error(format!("Error deleting item: {}", status.as_u16()));
            }
        },
        Err(e) => {
            error!("Failed to delete item {}: {}", id, e);
            flash.error(connection_error(&state, &e));
        }
    }

    views::redirect(flash, "/")
}
