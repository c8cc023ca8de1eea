use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::Response,
};
use tracing::warn;

use crate::{services::flash_service::FlashContext, views};

/// Item id taken from the path. An id that is not an integer can never
/// name a stored item, so it is answered like a missing one: flash and
/// back to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ItemId(id)),
            Err(e) => {
                warn!("Rejected item id in {}: {}", parts.uri.path(), e);
                let mut flash = FlashContext::from_headers(&parts.headers);
                flash.error("Item not found");
                Err(views::redirect(flash, "/"))
            }
        }
    }
}
