//! Document-readiness hook used to defer boot until the DOM is parsed.

/// Runs `run` once the document's structure is parsed.
///
/// Runs immediately when the document has already left the `loading` state; otherwise waits for
/// `DOMContentLoaded`. Native builds run immediately.
pub fn when_document_ready(run: impl FnOnce() + 'static) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let document = crate::bridge::document()?;
        if document.ready_state() != "loading" {
            run();
            return Ok(());
        }
        let callback = Closure::once_into_js(run);
        return document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .map_err(crate::bridge::js_error_to_string);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        run();
        Ok(())
    }
}
