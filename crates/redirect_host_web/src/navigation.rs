//! Navigation adapter backed by `setTimeout` and `location.replace`.

use redirect_host::NavigationService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn replace_after(&self, url: &str, delay_ms: u32) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
            let url = url.to_string();
            let callback = Closure::once_into_js(move || {
                if let Some(window) = web_sys::window() {
                    // Nothing is left to report to once the timer fires.
                    let _ = window.location().replace(&url);
                }
            });
            let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            return window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    timeout,
                )
                .map(|_| ())
                .map_err(crate::bridge::js_error_to_string);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (url, delay_ms);
            Err(crate::bridge::unsupported())
        }
    }
}
