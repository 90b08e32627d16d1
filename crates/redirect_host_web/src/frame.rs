//! Frame adapter that injects a full-viewport `<iframe>` and locks document scrolling.

use redirect_host::{FrameErrorHandler, FrameRequest, FrameService};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::bridge::{document, js_error_to_string};
#[cfg(target_arch = "wasm32")]
use crate::{FULL_VIEWPORT_FRAME_CSS, SCROLL_LOCK_CSS};

#[derive(Debug, Clone, Copy, Default)]
/// Browser frame adapter.
pub struct WebFrameService;

#[cfg(target_arch = "wasm32")]
fn html_element_by_id(id: &str) -> Result<web_sys::HtmlElement, String> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("element `#{id}` not found"))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| format!("element `#{id}` is not an HTML element"))
}

impl FrameService for WebFrameService {
    fn set_element_visible(&self, element_id: &str, visible: bool) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = html_element_by_id(element_id)?;
            let display = if visible { "flex" } else { "none" };
            return element
                .style()
                .set_property("display", display)
                .map_err(js_error_to_string);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (element_id, visible);
            Err(crate::bridge::unsupported())
        }
    }

    fn embed_full_viewport(
        &self,
        request: &FrameRequest,
        on_error: FrameErrorHandler,
    ) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = document()?;
            let frame = document
                .create_element("iframe")
                .map_err(js_error_to_string)?
                .dyn_into::<web_sys::HtmlIFrameElement>()
                .map_err(|_| "created element is not an iframe".to_string())?;
            frame.set_id(&request.frame_id);
            frame.set_src(&request.src);
            frame.style().set_css_text(FULL_VIEWPORT_FRAME_CSS);
            let handler = Closure::once_into_js(move || on_error());
            frame.set_onerror(Some(handler.unchecked_ref()));

            let body = document
                .body()
                .ok_or_else(|| "document body is unavailable".to_string())?;
            return body
                .append_child(&frame)
                .map(|_| ())
                .map_err(js_error_to_string);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (request, on_error);
            Err(crate::bridge::unsupported())
        }
    }

    fn remove_element(&self, element_id: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = document()?.get_element_by_id(element_id) {
                element.remove();
            }
            return Ok(());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = element_id;
            Err(crate::bridge::unsupported())
        }
    }

    fn lock_document_scroll(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            return set_document_css_text(SCROLL_LOCK_CSS);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(crate::bridge::unsupported())
        }
    }

    fn unlock_document_scroll(&self) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            return set_document_css_text("");
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(crate::bridge::unsupported())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn set_document_css_text(css: &str) -> Result<(), String> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;
    body.style().set_css_text(css);
    let root = document
        .document_element()
        .ok_or_else(|| "document root element is unavailable".to_string())?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| "document root is not an HTML element".to_string())?;
    root.style().set_css_text(css);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_reject_dom_mutation() {
        let frames = WebFrameService;
        assert!(frames.lock_document_scroll().is_err());
        assert!(frames.unlock_document_scroll().is_err());
        assert!(frames.remove_element("contentFrame").is_err());
        assert!(frames.set_element_visible("app", false).is_err());
        assert!(frames
            .embed_full_viewport(
                &FrameRequest {
                    frame_id: "contentFrame".to_string(),
                    src: "https://example.com/".to_string(),
                },
                Box::new(|| {}),
            )
            .is_err());
    }
}
