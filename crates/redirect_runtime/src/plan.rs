//! Dispatch states, page views, and side-effect intents for one page load.

use redirect_host::FrameRequest;

use crate::{
    config::{PresentationMode, RedirectConfig},
    decoder::decode_from_query,
    environment::{classify_client, ClientEnvironment, ClientPlatform},
    error::RedirectError,
};

/// DOM id of the embedded content frame.
pub const CONTENT_FRAME_ID: &str = "contentFrame";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Terminal dispatch state reached for a page load.
pub enum RedirectState {
    /// The configured parameter was absent.
    NoParam,
    /// The parameter did not decode to a valid URL.
    InvalidUrl,
    /// The client is an in-app browser; the value is the configured presentation.
    InApp(PresentationMode),
    /// Ordinary client; navigate after the configured delay.
    Direct,
}

impl RedirectState {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoParam => "no-param",
            Self::InvalidUrl => "invalid-url",
            Self::InApp(PresentationMode::Frame) => "in-app-frame",
            Self::InApp(PresentationMode::Tip) => "in-app-tip",
            Self::Direct => "direct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Content of the "open in an external browser" tip.
pub struct TipContent {
    /// Decoded target URL, shown verbatim as the link text.
    pub target: String,
    /// Device family used to word the menu instructions.
    pub platform: ClientPlatform,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the root container shows.
pub enum PageView {
    /// Initial spinner while dispatch runs or the direct navigation is pending.
    Loading,
    /// Terminal error template.
    Error(RedirectError),
    /// In-app escape instructions.
    Tip(TipContent),
    /// Nothing; the content frame covers the page.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents executed in order by [`crate::RedirectHostContext`].
pub enum PageEffect {
    /// Replace the root container's contents.
    ShowView(PageView),
    /// Show or hide the root container element.
    SetRootVisible(bool),
    /// Inject the full-viewport content frame.
    EmbedFrame(FrameRequest),
    /// Disable scrolling on the document body and root element.
    LockDocumentScroll,
    /// Replace the current history entry with `url` after `delay_ms`.
    ReplaceAfter {
        /// Navigation target.
        url: String,
        /// Delay before navigating.
        delay_ms: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of planning a page load.
pub struct RedirectPlan {
    /// Terminal state reached.
    pub state: RedirectState,
    /// Classified client, when a target was decoded.
    pub environment: Option<ClientEnvironment>,
    /// Effects to execute, in order.
    pub effects: Vec<PageEffect>,
}

impl RedirectPlan {
    fn terminal_error(error: RedirectError) -> Self {
        let state = match error {
            RedirectError::MissingParameter => RedirectState::NoParam,
            RedirectError::InvalidTarget { .. } | RedirectError::FrameLoadFailed => {
                RedirectState::InvalidUrl
            }
        };
        Self {
            state,
            environment: None,
            effects: vec![PageEffect::ShowView(PageView::Error(error))],
        }
    }
}

/// Plans the single dispatch for a page load.
///
/// Decoding failures short-circuit before the client is classified. Every successful decode
/// produces exactly one presentation: a content frame, a tip view, or one delayed navigation.
/// Frame embedding comes last so a failed injection can undo the preceding effects.
pub fn plan_redirect(
    config: &RedirectConfig,
    query: &str,
    user_agent: Option<&str>,
) -> RedirectPlan {
    let target = match decode_from_query(query, config) {
        Ok(target) => target,
        Err(err) => return RedirectPlan::terminal_error(err),
    };

    let environment = classify_client(user_agent, &config.in_app_markers);
    let (state, effects) = if environment.in_app {
        match config.presentation {
            PresentationMode::Frame => (
                RedirectState::InApp(PresentationMode::Frame),
                vec![
                    PageEffect::SetRootVisible(false),
                    PageEffect::ShowView(PageView::Hidden),
                    PageEffect::LockDocumentScroll,
                    PageEffect::EmbedFrame(FrameRequest {
                        frame_id: CONTENT_FRAME_ID.to_string(),
                        src: target.into_string(),
                    }),
                ],
            ),
            PresentationMode::Tip => (
                RedirectState::InApp(PresentationMode::Tip),
                vec![PageEffect::ShowView(PageView::Tip(TipContent {
                    target: target.into_string(),
                    platform: environment.platform,
                }))],
            ),
        }
    } else {
        (
            RedirectState::Direct,
            vec![PageEffect::ReplaceAfter {
                url: target.into_string(),
                delay_ms: config.redirect_delay_ms,
            }],
        )
    };

    RedirectPlan {
        state,
        environment: Some(environment),
        effects,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::decoder::encode_target;

    const WECHAT: &str = "Mozilla/5.0 (iPhone) Mobile MicroMessenger/8.0.40";
    const SAFARI: &str = "Mozilla/5.0 (Macintosh) Version/17.0 Safari/605.1.15";

    fn query_for(target: &str) -> String {
        format!("?u={}", encode_target(target))
    }

    #[test]
    fn missing_parameter_shows_error_only() {
        let plan = plan_redirect(&RedirectConfig::default(), "", Some(WECHAT));
        assert_eq!(plan.state, RedirectState::NoParam);
        assert_eq!(plan.environment, None);
        assert_eq!(
            plan.effects,
            vec![PageEffect::ShowView(PageView::Error(
                RedirectError::MissingParameter
            ))]
        );
    }

    #[test]
    fn non_url_payload_is_invalid() {
        let plan = plan_redirect(&RedirectConfig::default(), &query_for("not a url"), None);
        assert_eq!(plan.state, RedirectState::InvalidUrl);
        assert!(matches!(
            plan.effects.as_slice(),
            [PageEffect::ShowView(PageView::Error(
                RedirectError::InvalidTarget { .. }
            ))]
        ));
    }

    #[test]
    fn ordinary_client_gets_one_delayed_replace() {
        let config = RedirectConfig::default().with_redirect_delay_ms(250);
        let plan = plan_redirect(&config, &query_for("https://example.com/path?x=1"), Some(SAFARI));
        assert_eq!(plan.state, RedirectState::Direct);
        assert_eq!(
            plan.effects,
            vec![PageEffect::ReplaceAfter {
                url: "https://example.com/path?x=1".to_string(),
                delay_ms: 250,
            }]
        );
    }

    #[test]
    fn in_app_frame_mode_embeds_and_locks_scroll() {
        let config = RedirectConfig::default().with_presentation(PresentationMode::Frame);
        let plan = plan_redirect(&config, &query_for("https://example.com/"), Some(WECHAT));
        assert_eq!(plan.state, RedirectState::InApp(PresentationMode::Frame));
        assert_eq!(
            plan.effects,
            vec![
                PageEffect::SetRootVisible(false),
                PageEffect::ShowView(PageView::Hidden),
                PageEffect::LockDocumentScroll,
                PageEffect::EmbedFrame(FrameRequest {
                    frame_id: CONTENT_FRAME_ID.to_string(),
                    src: "https://example.com/".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn in_app_tip_mode_carries_target_and_platform() {
        let config = RedirectConfig::default().with_presentation(PresentationMode::Tip);
        let plan = plan_redirect(&config, &query_for("https://例子.测试/路径"), Some(WECHAT));
        assert_eq!(plan.state, RedirectState::InApp(PresentationMode::Tip));
        assert_eq!(
            plan.effects,
            vec![PageEffect::ShowView(PageView::Tip(TipContent {
                target: "https://例子.测试/路径".to_string(),
                platform: ClientPlatform::Ios,
            }))]
        );
    }

    #[test]
    fn absent_user_agent_redirects_directly() {
        let plan = plan_redirect(
            &RedirectConfig::default(),
            &query_for("https://example.com/"),
            None,
        );
        assert_eq!(plan.state, RedirectState::Direct);
        assert_eq!(plan.state.as_str(), "direct");
    }
}
