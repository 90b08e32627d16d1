use crate::{WebClipboardService, WebFrameService, WebNavigationService, WebPageEnvironment};

/// Inline style applied to the embedded frame so it covers the whole viewport without chrome.
pub const FULL_VIEWPORT_FRAME_CSS: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
border:none;margin:0;padding:0;overflow:hidden;z-index:9999;";

/// Inline style applied to `<body>` and `<html>` while a frame is active.
pub const SCROLL_LOCK_CSS: &str = "margin:0;padding:0;overflow:hidden;";

/// Returns the browser page environment adapter.
pub fn page_environment() -> WebPageEnvironment {
    WebPageEnvironment
}

/// Returns the browser navigation adapter.
pub fn navigation_service() -> WebNavigationService {
    WebNavigationService
}

/// Returns the browser frame adapter.
pub fn frame_service() -> WebFrameService {
    WebFrameService
}

/// Returns the browser clipboard adapter.
pub fn clipboard_service() -> WebClipboardService {
    WebClipboardService
}
