mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use leptos::logging;
    use redirect_runtime::RedirectConfig;

    console_error_panic_hook::set_once();
    let config = RedirectConfig::built_in();
    if let Err(err) = redirect_host_web::when_document_ready(move || mount_into_root(config)) {
        logging::warn!("redirector boot deferred hook failed: {err}");
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn mount_into_root(config: redirect_runtime::RedirectConfig) {
    use leptos::logging;
    use wasm_bindgen::JsCast;

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.root_element_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(root) = root else {
        logging::warn!("root container `#{}` not found", config.root_element_id);
        return;
    };

    // Replace the static loading markup shipped in index.html.
    root.set_inner_html("");
    leptos::mount_to(root, move || leptos::view! { <SiteApp config=config /> })
}
