//! Typed host-service contracts shared by the redirect runtime and browser adapters.
//!
//! This crate is the API boundary for page capabilities the redirector touches: the page
//! environment (query string and client identification), delayed navigation replacement,
//! full-viewport frame embedding, and clipboard writes. Concrete browser adapters live in
//! `redirect_host_web`; the in-memory implementations here back tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod environment;
pub mod frame;
pub mod navigation;

pub use clipboard::{ClipboardFuture, ClipboardService, MemoryClipboardService};
pub use environment::{PageEnvironment, StaticPageEnvironment};
pub use frame::{FrameErrorHandler, FrameRequest, FrameService, MemoryFrameService};
pub use navigation::{MemoryNavigationService, NavigationService};
