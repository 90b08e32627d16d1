//! Page environment adapter backed by `window.location` and `navigator`.

use redirect_host::PageEnvironment;

#[derive(Debug, Clone, Copy, Default)]
/// Browser page environment adapter.
pub struct WebPageEnvironment;

impl PageEnvironment for WebPageEnvironment {
    fn query_string(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.location().search().ok())
                .unwrap_or_default();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn user_agent(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.navigator().user_agent().ok())
                .filter(|ua| !ua.trim().is_empty());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}
