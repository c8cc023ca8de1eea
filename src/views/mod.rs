use askama::Template;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use cookie::Cookie;
use tracing::{error, warn};

use crate::{
    models::{FlashMessage, Item, ItemDraft},
    services::flash_service::FlashContext,
    state::AppState,
};

/// The three views the shopping list can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    List(Vec<Item>),
    Add(ItemDraft),
    Edit(ItemDraft),
}

#[derive(Template)]
#[template(path = "shopping.html")]
struct ShoppingTemplate<'a> {
    flashes: Vec<FlashMessage>,
    page: Page,
    api_server_url: &'a str,
}

/// Render a page, showing and clearing every pending flash message
pub fn render(state: &AppState, flash: FlashContext, page: Page) -> Response {
    let (flashes, removal) = flash.into_render();
    let template = ShoppingTemplate {
        flashes,
        page,
        api_server_url: &state.api_server_url,
    };

    let mut response = match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            let message = if state.debug {
                format!("Failed to render page: {}", e)
            } else {
                "Failed to render page".to_string()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    };

    if let Some(cookie) = removal {
        set_cookie(&mut response, &cookie);
    }
    response
}

/// Redirect with 303, carrying pending flash messages to the next render
pub fn redirect(flash: FlashContext, to: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    if let Some(cookie) = flash.into_redirect() {
        set_cookie(&mut response, &cookie);
    }
    response
}

fn set_cookie(response: &mut Response, cookie: &Cookie<'_>) {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => warn!("Dropping unencodable flash cookie: {}", e),
    }
}
