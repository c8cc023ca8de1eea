use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use cookie::{Cookie, SameSite};
use std::convert::Infallible;
use tracing::debug;

use crate::models::FlashMessage;

pub const FLASH_COOKIE: &str = "flash";

/// Flash messages belonging to one request.
///
/// `incoming` holds what the previous response left in the flash cookie,
/// `queued` what this request added. The context is consumed either by a
/// render, which shows everything and clears the cookie, or by a redirect,
/// which carries everything forward to the next request.
#[derive(Debug, Default)]
pub struct FlashContext {
    incoming: Vec<FlashMessage>,
    queued: Vec<FlashMessage>,
    has_cookie: bool,
}

impl FlashContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookie = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| Cookie::split_parse(value.to_string()))
            .filter_map(Result::ok)
            .find(|c| c.name() == FLASH_COOKIE);

        Self {
            incoming: cookie.as_ref().map(|c| decode_messages(c.value())).unwrap_or_default(),
            queued: Vec::new(),
            has_cookie: cookie.is_some(),
        }
    }

    pub fn push(&mut self, message: FlashMessage) {
        self.queued.push(message);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(FlashMessage::success(text));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(FlashMessage::error(text));
    }

    /// Release every pending message for display. The returned cookie, if
    /// any, must be sent so the browser drops the messages it carried in.
    pub fn into_render(self) -> (Vec<FlashMessage>, Option<Cookie<'static>>) {
        let removal = self.has_cookie.then(|| {
            let mut cookie = base_cookie(String::new());
            cookie.make_removal();
            cookie
        });

        let mut messages = self.incoming;
        messages.extend(self.queued);
        (messages, removal)
    }

    /// Hand every pending message to the next request
    pub fn into_redirect(self) -> Option<Cookie<'static>> {
        if self.queued.is_empty() {
            return None;
        }

        let mut messages = self.incoming;
        messages.extend(self.queued);
        Some(base_cookie(encode_messages(&messages)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FlashContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(FlashContext::from_headers(&parts.headers))
    }
}

fn base_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn encode_messages(messages: &[FlashMessage]) -> String {
    // Serializing plain strings and enums cannot fail
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

fn decode_messages(value: &str) -> Vec<FlashMessage> {
    let decoded = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| e.to_string())
        .and_then(|bytes| serde_json::from_slice(&bytes).map_err(|e| e.to_string()));

    match decoded {
        Ok(messages) => messages,
        Err(e) => {
            debug!("Ignoring unreadable flash cookie: {}", e);
            Vec::new()
        }
    }
}
