//! User-visible redirect failures and configuration errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Terminal failure states shown to the visitor. None of them is retried.
pub enum RedirectError {
    /// The configured query parameter was absent or empty.
    #[error("missing redirect parameter")]
    MissingParameter,
    /// The parameter was present but did not decode to a well-formed absolute URL.
    #[error("invalid link: {reason}")]
    InvalidTarget {
        /// Decoder or URL parser diagnostic.
        reason: String,
    },
    /// The embedded frame reported a load failure.
    #[error("embedded page failed to load")]
    FrameLoadFailed,
}

impl RedirectError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    /// Short message rendered in the error template.
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::MissingParameter => "Missing redirect parameter",
            Self::InvalidTarget { .. } => "Invalid link",
            Self::FrameLoadFailed => "Page failed to load",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections raised while loading [`crate::RedirectConfig`].
pub enum ConfigError {
    /// Raw configuration text was not valid JSON for the config schema.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// The parameter key was empty.
    #[error("param_key must not be empty")]
    EmptyParamKey,
    /// The parameter key contains characters that cannot appear unescaped in a query key.
    #[error("param_key `{0}` contains reserved query characters")]
    ReservedParamKey(String),
    /// No usable in-app marker was configured.
    #[error("in_app_markers needs at least one non-empty marker")]
    NoInAppMarkers,
    /// The redirect delay exceeded the supported maximum.
    #[error(
        "redirect_delay_ms {0} exceeds the {max} ms maximum",
        max = crate::config::MAX_REDIRECT_DELAY_MS
    )]
    DelayTooLong(u32),
    /// The root container id was empty.
    #[error("root_element_id must not be empty")]
    EmptyRootElementId,
}
