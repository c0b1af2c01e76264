use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

/// One-shot notice carried across a redirect in a cookie and consumed by
/// the next rendered page.
pub const FLASH_COOKIE: &str = "dojo_flash";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

fn encode(flash: &Flash) -> String {
    URL_SAFE_NO_PAD.encode(serde_json::to_vec(flash).unwrap_or_default())
}

fn decode(value: &str) -> Option<Flash> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn flash_cookie(kind: FlashKind, message: &str) -> Cookie<'static> {
    let payload = encode(&Flash { kind, message: message.to_string() });
    let mut cookie = Cookie::new(FLASH_COOKIE, payload);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

pub fn set_flash(cookies: &Cookies, kind: FlashKind, message: &str) {
    cookies.add(flash_cookie(kind, message));
}

/// Reads and removes the pending notice, if any.
pub fn take_flash(cookies: &Cookies) -> Option<Flash> {
    let cookie = cookies.get(FLASH_COOKIE)?;
    let flash = decode(cookie.value());
    cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").into());
    flash
}

/// Redirect carrying a notice, for contexts without a cookie jar handle
/// (notably `AppError::into_response`).
pub fn redirect_with_flash(target: &str, kind: FlashKind, message: &str) -> Response {
    let mut response = Redirect::to(target).into_response();
    if let Ok(value) = HeaderValue::from_str(&flash_cookie(kind, message).to_string()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}
