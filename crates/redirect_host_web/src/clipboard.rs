//! Clipboard adapter backed by the async Clipboard API with an `execCommand` fallback.

use redirect_host::{ClipboardFuture, ClipboardService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter backed by the bridge interop layer.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::copy_text(text).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_report_clipboard_as_unsupported() {
        let err = block_on(WebClipboardService.write_text("https://example.com/"))
            .expect_err("native clipboard");
        assert!(err.contains("wasm32"));
    }
}
