//! Redirector runtime: configuration, target decoding, client classification, dispatch planning,
//! effect execution, and the Leptos views rendered into the page.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod config;
pub mod decoder;
pub mod environment;
pub mod error;
pub mod host;
pub mod plan;
pub mod target;

pub use components::{
    copy_target, CopyStatus, ErrorView, LoadingView, RedirectApp, TipMarkup, TipView,
};
pub use config::{PresentationMode, RedirectConfig};
pub use decoder::{build_redirect_link, decode_from_query, decode_target, encode_target, find_param};
pub use environment::{classify_client, ClientEnvironment, ClientPlatform};
pub use error::{ConfigError, RedirectError};
pub use host::{RedirectHostContext, ViewSink};
pub use plan::{
    plan_redirect, PageEffect, PageView, RedirectPlan, RedirectState, TipContent,
    CONTENT_FRAME_ID,
};
pub use target::TargetUrl;
