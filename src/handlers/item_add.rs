use axum::{extract::State, http::StatusCode, response::Response, Form};
use tracing::{error, info, warn};

use crate::{
    handlers::connection_error,
    models::{ItemDraft, ItemForm},
    services::flash_service::FlashContext,
    state::AppState,
    views::{self, Page},
};

/// Empty add form
pub async fn show_add_form(State(state): State<AppState>, flash: FlashContext) -> Response {
    views::render(&state, flash, Page::Add(ItemDraft::default()))
}

/// Validate the submission and create the item on the backend
pub async fn submit_add_form(
    State(state): State<AppState>,
    mut flash: FlashContext,
    Form(form): Form<ItemForm>,
) -> Response {
    let new_item = match form.validate() {
        Ok(new_item) => new_item,
        Err(e) => {
            flash.error(e.to_string());
            return views::redirect(flash, "/add");
        }
    };

    match state.backend.create_item(&new_item).await {
        // The backend merges a new item into an existing one of the same name
        Ok(reply) if reply.status == StatusCode::OK => {
            info!("Merged '{}' into an existing item", new_item.name);
            flash.success("Item updated successfully");
            return views::redirect(flash, "/");
        }
        Ok(reply) if reply.status == StatusCode::CREATED => {
            info!("Created item '{}'", new_item.name);
            flash.success("Item added successfully");
            return views::redirect(flash, "/");
        }
        Ok(reply) => {
            warn!("Backend answered {} when creating '{}'", reply.status, new_item.name);
            flash.error(format!("Error adding item: {}", reply.status.as_u16()));
        }
        Err(e) => {
            error!("Failed to create item '{}': {}", new_item.name, e);
            flash.error(connection_error(&state, &e));
        }
    }

    views::render(&state, flash, Page::Add(form.to_draft(None)))
}
