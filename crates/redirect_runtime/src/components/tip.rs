use std::rc::Rc;

use leptos::*;
use redirect_host::ClipboardService;

use crate::{environment::ClientPlatform, plan::TipContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of the tip's copy control.
pub enum CopyStatus {
    /// No copy attempted yet.
    Idle,
    /// The target was written to the clipboard.
    Copied,
    /// The clipboard rejected the write.
    Failed,
}

impl CopyStatus {
    /// Acknowledgment shown under the copy control.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Copied => "Link copied. Paste it into your browser's address bar.",
            Self::Failed => "Copy failed. Press and hold the link above to copy it manually.",
        }
    }
}

const TIP_HEADLINE: &str = "Open this link in your browser";
const COPY_LABEL: &str = "Copy link";

fn tip_instruction(platform: ClientPlatform) -> &'static str {
    match platform {
        ClientPlatform::Ios => {
            "Tap ··· in the top-right corner, then choose \"Open in Safari\"."
        }
        ClientPlatform::Android | ClientPlatform::Desktop => {
            "Tap ··· in the top-right corner, then choose \"Open in Browser\"."
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text and attributes rendered by [`TipView`].
pub struct TipMarkup {
    /// Heading above the instructions.
    pub headline: &'static str,
    /// Platform-specific menu steps.
    pub instruction: &'static str,
    /// `href` of the target link.
    pub link_href: String,
    /// Visible text of the target link; the decoded URL verbatim.
    pub link_text: String,
    /// Label of the copy button.
    pub copy_label: &'static str,
}

impl TipMarkup {
    /// Builds the markup for `tip`.
    pub fn new(tip: &TipContent) -> Self {
        Self {
            headline: TIP_HEADLINE,
            instruction: tip_instruction(tip.platform),
            link_href: tip.target.clone(),
            link_text: tip.target.clone(),
            copy_label: COPY_LABEL,
        }
    }
}

/// Writes `target` to `clipboard` and reports the acknowledgment to show.
pub async fn copy_target(clipboard: &dyn ClipboardService, target: &str) -> CopyStatus {
    match clipboard.write_text(target).await {
        Ok(()) => CopyStatus::Copied,
        Err(err) => {
            logging::warn!("copy to clipboard failed: {err}");
            CopyStatus::Failed
        }
    }
}

/// In-app escape instructions with the raw target link and a copy control.
#[component]
pub fn TipView(
    /// Decoded target and client platform.
    tip: TipContent,
    /// Clipboard used by the copy button.
    clipboard: Rc<dyn ClipboardService>,
) -> impl IntoView {
    let markup = TipMarkup::new(&tip);
    let status = create_rw_signal(CopyStatus::Idle);
    let target = tip.target;
    let on_copy = move |_| {
        let clipboard = clipboard.clone();
        let target = target.clone();
        spawn_local(async move {
            status.set(copy_target(clipboard.as_ref(), &target).await);
        });
    };

    view! {
        <div class="tip">
            <h3>{markup.headline}</h3>
            <p class="tip-steps">{markup.instruction}</p>
            <a class="tip-link" href=markup.link_href rel="noreferrer">
                {markup.link_text}
            </a>
            <button type="button" class="tip-copy" on:click=on_copy>
                {markup.copy_label}
            </button>
            <p class="tip-status" role="status">
                {move || status.get().message()}
            </p>
        </div>
    }
}
