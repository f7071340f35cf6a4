//! Thin wrappers over the browser globals the app touches.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Storage, Window};

/// Global `window` object.
///
/// # Panics
/// Panics outside a browser context.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("window should exist in a browser context")
}

/// Best-effort readable text for a JavaScript error value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{value:?}"), |err| String::from(err.message()))
}

/// Write an error line to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Resolve after `duration_ms` milliseconds.
///
/// # Errors
/// Errors when the timer cannot be scheduled.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms)
        {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

/// Fetch `url` and read the response body as text.
///
/// # Errors
/// Errors when the request fails or the body cannot be read.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`.
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let fetched = JsFuture::from(window().fetch_with_str(url)).await?;
    let response: Response = fetched.dyn_into()?;
    let body = JsFuture::from(response.text()?).await?;
    Ok(body.as_string().unwrap_or_default())
}

/// Browser `localStorage` handle.
///
/// # Errors
/// Errors when storage is blocked or missing.
pub fn local_storage() -> Result<Storage, JsValue> {
    match window().local_storage()? {
        Some(storage) => Ok(storage),
        None => Err(JsValue::from_str("localStorage is not available")),
    }
}
