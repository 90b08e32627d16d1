//! Host-side execution of planned page effects.
//!
//! The planner stays pure; this module owns the service bundle that turns [`PageEffect`]s into
//! DOM mutations, timers, and clipboard writes. Tests swap in the in-memory services from
//! `redirect_host`.

use std::rc::Rc;

use leptos::logging;
use redirect_host::{ClipboardService, FrameService, NavigationService, PageEnvironment};
use redirect_host_web::{clipboard_service, frame_service, navigation_service, page_environment};

use crate::{
    config::RedirectConfig,
    error::RedirectError,
    plan::{plan_redirect, PageEffect, PageView, RedirectPlan},
};

/// Receives every view change requested by an executing plan.
pub type ViewSink = Rc<dyn Fn(PageView)>;

#[derive(Clone)]
/// Host service bundle for one page load.
pub struct RedirectHostContext {
    environment: Rc<dyn PageEnvironment>,
    navigation: Rc<dyn NavigationService>,
    frames: Rc<dyn FrameService>,
    clipboard: Rc<dyn ClipboardService>,
}

impl Default for RedirectHostContext {
    fn default() -> Self {
        Self {
            environment: Rc::new(page_environment()),
            navigation: Rc::new(navigation_service()),
            frames: Rc::new(frame_service()),
            clipboard: Rc::new(clipboard_service()),
        }
    }
}

impl RedirectHostContext {
    /// Builds a context from explicit services.
    pub fn new(
        environment: Rc<dyn PageEnvironment>,
        navigation: Rc<dyn NavigationService>,
        frames: Rc<dyn FrameService>,
        clipboard: Rc<dyn ClipboardService>,
    ) -> Self {
        Self {
            environment,
            navigation,
            frames,
            clipboard,
        }
    }

    /// Returns the configured clipboard service.
    pub fn clipboard_service(&self) -> Rc<dyn ClipboardService> {
        self.clipboard.clone()
    }

    /// Plans dispatch from the current page environment.
    pub fn plan(&self, config: &RedirectConfig) -> RedirectPlan {
        let query = self.environment.query_string();
        let user_agent = self.environment.user_agent();
        plan_redirect(config, &query, user_agent.as_deref())
    }

    /// Executes every effect of `plan` in order.
    pub fn execute_plan(
        &self,
        config: &RedirectConfig,
        plan: RedirectPlan,
        show_view: &ViewSink,
    ) {
        for effect in plan.effects {
            self.run_page_effect(config, effect, show_view);
        }
    }

    /// Plans and executes dispatch for the current page load, returning the executed plan.
    pub fn dispatch(&self, config: &RedirectConfig, show_view: &ViewSink) -> RedirectPlan {
        let plan = self.plan(config);
        self.execute_plan(config, plan.clone(), show_view);
        plan
    }

    /// Executes one effect. Host failures are logged and, where the visitor would otherwise be
    /// left on a blank page, mapped to the generic frame failure view.
    pub fn run_page_effect(
        &self,
        config: &RedirectConfig,
        effect: PageEffect,
        show_view: &ViewSink,
    ) {
        match effect {
            PageEffect::ShowView(view) => show_view(view),
            PageEffect::SetRootVisible(visible) => {
                if let Err(err) = self
                    .frames
                    .set_element_visible(&config.root_element_id, visible)
                {
                    logging::warn!("root container visibility update failed: {err}");
                }
            }
            PageEffect::EmbedFrame(request) => {
                let on_error = frame_failure_handler(
                    self.frames.clone(),
                    request.frame_id.clone(),
                    config.root_element_id.clone(),
                    show_view.clone(),
                );
                let handler = on_error.clone();
                if let Err(err) = self
                    .frames
                    .embed_full_viewport(&request, Box::new(move || handler()))
                {
                    logging::warn!("content frame injection failed for `{}`: {err}", request.src);
                    on_error();
                }
            }
            PageEffect::LockDocumentScroll => {
                if let Err(err) = self.frames.lock_document_scroll() {
                    logging::warn!("document scroll lock failed: {err}");
                }
            }
            PageEffect::ReplaceAfter { url, delay_ms } => {
                if let Err(err) = self.navigation.replace_after(&url, delay_ms) {
                    logging::warn!("navigation to `{url}` could not be scheduled: {err}");
                }
            }
        }
    }
}

/// Tears down the frame presentation so the error view is visible and scrollable.
fn frame_failure_handler(
    frames: Rc<dyn FrameService>,
    frame_id: String,
    root_element_id: String,
    show_view: ViewSink,
) -> Rc<dyn Fn()> {
    Rc::new(move || {
        if let Err(err) = frames.remove_element(&frame_id) {
            logging::warn!("content frame could not be removed: {err}");
        }
        if let Err(err) = frames.unlock_document_scroll() {
            logging::warn!("document scroll lock could not be released: {err}");
        }
        if let Err(err) = frames.set_element_visible(&root_element_id, true) {
            logging::warn!("root container could not be restored: {err}");
        }
        show_view(PageView::Error(RedirectError::FrameLoadFailed));
    })
}
