//! Browser capability bridge for `redirect_host_web` service adapters.
//!
//! Capabilities that `web-sys` does not expose uniformly across browsers (clipboard writes with an
//! `execCommand` fallback) go through inline JS in `interop`; everything else is plain `web-sys`.

mod interop;

pub async fn copy_text(text: &str) -> Result<(), String> {
    interop::copy_text(text).await
}

#[cfg(target_arch = "wasm32")]
pub fn js_error_to_string(err: wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsValue;

    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

#[cfg(target_arch = "wasm32")]
pub fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .ok_or_else(|| "window is unavailable".to_string())?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn unsupported() -> String {
    "Browser page APIs are only available when compiled for wasm32".to_string()
}
