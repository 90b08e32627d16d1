//! Immutable redirector configuration, compiled in from `redirect.toml`.

use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

include!(concat!(env!("OUT_DIR"), "/redirect_config_generated.rs"));

/// Upper bound on the pre-navigation delay.
pub const MAX_REDIRECT_DELAY_MS: u32 = 10_000;

/// Query parameter used when none is configured.
pub const DEFAULT_PARAM_KEY: &str = "u";

/// In-app browser marker used when none is configured.
pub const DEFAULT_IN_APP_MARKER: &str = "MicroMessenger";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Presentation used when the visitor is inside an in-app browser.
pub enum PresentationMode {
    /// Embed the target in a full-viewport frame.
    #[default]
    Frame,
    /// Explain how to open the page in an external browser.
    Tip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Redirector settings. Built once at startup and passed explicitly to the dispatcher.
pub struct RedirectConfig {
    /// Query parameter carrying the encoded target URL.
    pub param_key: String,
    /// In-app presentation strategy.
    pub presentation: PresentationMode,
    /// Delay before the direct navigation replacement.
    pub redirect_delay_ms: u32,
    /// Case-insensitive user-agent markers identifying an in-app browser.
    pub in_app_markers: Vec<String>,
    /// Id of the container element the views render into.
    pub root_element_id: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            param_key: DEFAULT_PARAM_KEY.to_string(),
            presentation: PresentationMode::Frame,
            redirect_delay_ms: 100,
            in_app_markers: vec![DEFAULT_IN_APP_MARKER.to_string()],
            root_element_id: "app".to_string(),
        }
    }
}

impl RedirectConfig {
    /// Returns the configuration compiled in from `redirect.toml`.
    ///
    /// Falls back to [`RedirectConfig::default`] with a warning if the embedded JSON is rejected.
    pub fn built_in() -> Self {
        match Self::from_json(REDIRECT_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("built-in redirect config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Parses and validates configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON does not match the schema or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the dispatcher relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.param_key.is_empty() {
            return Err(ConfigError::EmptyParamKey);
        }
        if self
            .param_key
            .chars()
            .any(|c| matches!(c, '&' | '=' | '#' | '+' | '%') || c.is_whitespace())
        {
            return Err(ConfigError::ReservedParamKey(self.param_key.clone()));
        }
        if self.in_app_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(ConfigError::NoInAppMarkers);
        }
        if self.redirect_delay_ms > MAX_REDIRECT_DELAY_MS {
            return Err(ConfigError::DelayTooLong(self.redirect_delay_ms));
        }
        if self.root_element_id.trim().is_empty() {
            return Err(ConfigError::EmptyRootElementId);
        }
        Ok(())
    }

    /// Returns a copy using `presentation` for in-app browsers.
    pub fn with_presentation(mut self, presentation: PresentationMode) -> Self {
        self.presentation = presentation;
        self
    }

    /// Returns a copy reading the target from `param_key`.
    pub fn with_param_key(mut self, param_key: impl Into<String>) -> Self {
        self.param_key = param_key.into();
        self
    }

    /// Returns a copy waiting `delay_ms` before direct navigation.
    pub fn with_redirect_delay_ms(mut self, delay_ms: u32) -> Self {
        self.redirect_delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn built_in_config_matches_checked_in_toml() {
        let config = RedirectConfig::from_json(REDIRECT_CONFIG_JSON).expect("built-in config");
        assert_eq!(config.param_key, "u");
        assert_eq!(config.presentation, PresentationMode::Frame);
        assert_eq!(config.redirect_delay_ms, 100);
        assert_eq!(config.in_app_markers, vec!["MicroMessenger".to_string()]);
        assert_eq!(config.root_element_id, "app");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = RedirectConfig::from_json(r#"{"param_key":"go","presentation":"tip"}"#)
            .expect("partial config");
        assert_eq!(
            config,
            RedirectConfig::default()
                .with_param_key("go")
                .with_presentation(PresentationMode::Tip)
        );
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            RedirectConfig::from_json(r#"{"show_tip":true}"#),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            RedirectConfig::from_json(r#"{"param_key":""}"#),
            Err(ConfigError::EmptyParamKey)
        );
        assert_eq!(
            RedirectConfig::from_json(r#"{"param_key":"a&b"}"#),
            Err(ConfigError::ReservedParamKey("a&b".to_string()))
        );
        assert_eq!(
            RedirectConfig::from_json(r#"{"in_app_markers":[" "]}"#),
            Err(ConfigError::NoInAppMarkers)
        );
        assert_eq!(
            RedirectConfig::from_json(r#"{"redirect_delay_ms":60000}"#),
            Err(ConfigError::DelayTooLong(60_000))
        );
        assert_eq!(
            RedirectConfig::from_json(r#"{"root_element_id":""}"#),
            Err(ConfigError::EmptyRootElementId)
        );
    }
}
