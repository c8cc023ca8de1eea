pub mod health;
pub mod items_list;
pub mod item_add;
pub mod item_edit;
pub mod item_delete;
pub mod item_id;


pub use health::*;
pub use items_list::*;
pub use item_add::*;
pub use item_edit::*;
pub use item_delete::*;
pub use item_id::*;

use crate::{clients::BackendError, state::AppState};

/// Flash text for a backend that could not be reached or gave garbage back
pub(crate) fn connection_error(state: &AppState, e: &BackendError) -> String {
    if state.debug {
        return format!("Connection error: {}", e);
    }
    match e {
        BackendError::Transport(_) => "Connection error: unable to reach the item service".to_string(),
        BackendError::Decode(_) => "Connection error: invalid response from the item service".to_string(),
    }
}
