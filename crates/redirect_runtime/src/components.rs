//! Leptos views rendered into the redirector's root container.

mod tip;

use std::rc::Rc;

use leptos::*;

pub use self::tip::{copy_target, CopyStatus, TipMarkup, TipView};

use crate::{
    config::RedirectConfig,
    error::RedirectError,
    host::{RedirectHostContext, ViewSink},
    plan::PageView,
};

const ERROR_HINT: &str = "Please check that the link is correct.";

/// Root component: dispatches once on construction and renders whichever view dispatch selects.
#[component]
pub fn RedirectApp(
    /// Configuration loaded at startup.
    config: RedirectConfig,
    /// Host services used to execute the dispatch plan.
    host: RedirectHostContext,
) -> impl IntoView {
    let page_view = create_rw_signal(PageView::Loading);
    let show_view: ViewSink = Rc::new(move |next| page_view.set(next));

    let plan = host.dispatch(&config, &show_view);
    logging::log!(
        "redirect dispatch: state={} platform={}",
        plan.state.as_str(),
        plan.environment
            .map_or("unclassified", |environment| environment.platform.as_str())
    );

    let clipboard = host.clipboard_service();
    view! {
        {move || match page_view.get() {
            PageView::Loading => view! { <LoadingView /> }.into_view(),
            PageView::Error(error) => view! { <ErrorView error=error /> }.into_view(),
            PageView::Tip(tip) => {
                view! { <TipView tip=tip clipboard=clipboard.clone() /> }.into_view()
            }
            PageView::Hidden => ().into_view(),
        }}
    }
}

/// Spinner shown until dispatch replaces it or the direct navigation fires.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" aria-hidden="true"></div>
            <p>"Redirecting…"</p>
        </div>
    }
}

/// Generic error template shared by every terminal failure.
#[component]
pub fn ErrorView(
    /// Terminal failure to describe.
    error: RedirectError,
) -> impl IntoView {
    view! {
        <div class="error" role="alert">
            <h3>"⚠️ " {error.headline()}</h3>
            <p>{ERROR_HINT}</p>
        </div>
    }
}
