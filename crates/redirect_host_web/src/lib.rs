//! Browser (`wasm32`) implementations of [`redirect_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the page environment, delayed
//! navigation, frame embedding, clipboard, and document-readiness hooks. Non-wasm builds compile
//! against a fallback shim so the workspace can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories used by runtime wiring.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod environment;
pub mod frame;
pub mod navigation;
pub mod ready;

pub use adapters::{
    clipboard_service, frame_service, navigation_service, page_environment, FULL_VIEWPORT_FRAME_CSS,
    SCROLL_LOCK_CSS,
};
pub use clipboard::WebClipboardService;
pub use environment::WebPageEnvironment;
pub use frame::WebFrameService;
pub use navigation::WebNavigationService;
pub use ready::when_document_ready;
