//! Validated redirect targets.

use url::Url;

use crate::error::RedirectError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded absolute URL with a scheme and an authority.
///
/// The original decoded text is kept as-is so navigation and display use exactly what the link
/// carried; parsing only gates well-formedness.
pub struct TargetUrl(String);

impl TargetUrl {
    /// Validates `raw` as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`RedirectError::InvalidTarget`] for relative or malformed URLs, URLs without a
    /// host, and values with surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, RedirectError> {
        if raw.trim() != raw {
            return Err(RedirectError::invalid("surrounding whitespace"));
        }
        let parsed = Url::parse(raw).map_err(|err| RedirectError::invalid(err.to_string()))?;
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(RedirectError::invalid(format!(
                "`{}` URL has no authority",
                parsed.scheme()
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the decoded URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the target and returns the decoded URL text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls_verbatim() {
        for raw in [
            "https://example.com/path?x=1",
            "http://127.0.0.1:8080/",
            "https://例子.测试/路径?q=中文",
            "HTTPS://Example.COM",
        ] {
            assert_eq!(TargetUrl::parse(raw).expect(raw).as_str(), raw);
        }
    }

    #[test]
    fn rejects_non_urls_and_hostless_urls() {
        for raw in [
            "not a url",
            "",
            "/relative/path",
            "example.com",
            "https://",
            "mailto:someone@example.com",
            "javascript:alert(1)",
            " https://example.com",
        ] {
            assert!(
                matches!(TargetUrl::parse(raw), Err(RedirectError::InvalidTarget { .. })),
                "{raw:?} should be rejected"
            );
        }
    }
}
