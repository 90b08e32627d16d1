use leptos::*;
use leptos_meta::*;
use redirect_runtime::{RedirectApp, RedirectConfig, RedirectHostContext};

#[component]
pub fn SiteApp(config: RedirectConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Redirecting…" />
        <Meta name="robots" content="noindex, nofollow" />
        <Meta name="referrer" content="no-referrer" />

        <RedirectApp config=config host=RedirectHostContext::default() />
    }
}
