use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Form,
};
use tracing::{error, info, warn};

use crate::{
    handlers::{connection_error, ItemId},
    models::{ItemDraft, ItemForm},
    services::flash_service::FlashContext,
    state::AppState,
    views::{self, Page},
};

/// Fetch the item and show it pre-filled, or go back to the list
pub async fn show_edit_form(
    State(state): State<AppState>,
    mut flash: FlashContext,
    ItemId(id): ItemId,
) -> Response {
    match state.backend.get_item(id).await {
        Ok(reply) => match (reply.status, reply.body) {
            (StatusCode::OK, Some(item)) => {
                return views::render(&state, flash, Page::Edit(ItemDraft::from(item)));
            }
            (StatusCode::NOT_FOUND, _) => {
                warn!("Item {} not found", id);
                flash.error("Item not found");
            }
            (status, _) => {
                warn!("Backend answered {} when fetching item {}", status, id);
                flash.error(format!("Error fetching item: {}", status.as_u16()));
            }
        },
        Err(e) => {
            error!("Failed to fetch item {}: {}", id, e);
            flash.error(connection_error(&state, &e));
        }
    }

    views::redirect(flash, "/")
}

/// Validate the submission and update the item on the backend
pub async fn submit_edit_form(
    State(state): State<AppState>,
    mut flash: FlashContext,
    ItemId(id): ItemId,
    Form(form): Form<ItemForm>,
) -> Response {
    let new_item = match form.validate() {
        Ok(new_item) => new_item,
        Err(e) => {
            flash.error(e.to_string());
            return views::redirect(flash, &format!("/edit/{}", id));
        }
    };

    match state.backend.update_item(id, &new_item).await {
        Ok(reply) if reply.status == StatusCode::OK => {
            info!("Updated item {}", id);
            flash.success("Item updated successfully");
            return views::redirect(flash, "/");
        }
        Ok(reply) if reply.status == StatusCode::NOT_FOUND => {
            warn!("Item {} not found", id);
            flash.error("Item not found");
            return views::redirect(flash, "/");
        }
        Ok(reply) => {
            warn!("Backend answered {} when updating item {}", reply.status, id);
            flash.error(format!("Error updating item: {}", reply.status.as_u16()));
        }
        Err(e) => {
            error!("Failed to update item {}: {}", id, e);
            flash.error(connection_error(&state, &e));
        }
    }

    // Redisplay what the user typed rather than re-fetching the item
    views::render(&state, flash, Page::Edit(form.to_draft(Some(id))))
}
