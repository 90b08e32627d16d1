//! Query-parameter lookup and the base64-over-UTF-8 target encoding.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurposeConfig, STANDARD},
        DecodePaddingMode, GeneralPurpose,
    },
    Engine as _,
};
use url::{form_urlencoded, Url};

use crate::{config::RedirectConfig, error::RedirectError, target::TargetUrl};

// Padding optional and trailing bits ignored, like the browser's `atob`.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Returns the first value of `key` in a form-encoded query string.
///
/// Accepts the query with or without its leading `?`. Percent escapes and `+` are decoded the way
/// `URLSearchParams` decodes them.
pub fn find_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Encodes a target URL as base64 over its UTF-8 bytes.
pub fn encode_target(target: &str) -> String {
    STANDARD.encode(target.as_bytes())
}

/// Decodes base64 text back into the original UTF-8 string.
///
/// Form decoding turns `+` into a space before this runs, so spaces are read back as `+`. Other
/// ASCII whitespace is ignored and the URL-safe alphabet is accepted.
///
/// # Errors
///
/// Returns [`RedirectError::InvalidTarget`] for malformed base64 or bytes that are not UTF-8.
pub fn decode_target(encoded: &str) -> Result<String, RedirectError> {
    let normalized: String = encoded
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('+'),
            '_' => Some('/'),
            '\t' | '\n' | '\r' | '\x0c' => None,
            other => Some(other),
        })
        .collect();
    let bytes = FORGIVING
        .decode(normalized)
        .map_err(|err| RedirectError::invalid(format!("malformed encoding: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|err| RedirectError::invalid(format!("decoded text is not UTF-8: {err}")))
}

/// Extracts, decodes, and validates the redirect target from a page query string.
///
/// # Errors
///
/// Returns [`RedirectError::MissingParameter`] when the configured key is absent or empty, and
/// [`RedirectError::InvalidTarget`] when the value does not decode to an absolute URL.
pub fn decode_from_query(
    query: &str,
    config: &RedirectConfig,
) -> Result<TargetUrl, RedirectError> {
    let encoded = find_param(query, &config.param_key)
        .filter(|value| !value.is_empty())
        .ok_or(RedirectError::MissingParameter)?;
    let decoded = decode_target(&encoded)?;
    TargetUrl::parse(&decoded)
}

/// Builds a redirector link for `target` on the page at `redirector_base`.
///
/// Existing query pairs on the base are kept; the encoded target is appended under the configured
/// key.
///
/// # Errors
///
/// Returns an error when `redirector_base` is not an absolute URL.
pub fn build_redirect_link(
    redirector_base: &str,
    target: &str,
    config: &RedirectConfig,
) -> Result<String, url::ParseError> {
    let mut link = Url::parse(redirector_base)?;
    link.query_pairs_mut()
        .append_pair(&config.param_key, &encode_target(target));
    Ok(link.into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn encodes_the_documented_example() {
        assert_eq!(
            encode_target("https://example.com/path?x=1"),
            "aHR0cHM6Ly9leGFtcGxlLmNvbS9wYXRoP3g9MQ=="
        );
    }

    #[test]
    fn round_trips_ascii_and_multi_byte_text() {
        for target in [
            "https://example.com/path?x=1",
            "https://例子.测试/路径?q=中文",
            "https://example.com/?emoji=🚀&name=Zoë",
            "",
        ] {
            assert_eq!(decode_target(&encode_target(target)).expect(target), target);
        }
    }

    #[test]
    fn decode_tolerates_missing_padding_and_url_safe_alphabet() {
        assert_eq!(
            decode_target("aHR0cHM6Ly9leGFtcGxlLmNvbS9wYXRoP3g9MQ").expect("unpadded"),
            "https://example.com/path?x=1"
        );
        assert_eq!(
            decode_target("aHR0cHM6Ly9leGFtcGxlLmNvbS8_cT0-Pj4_").expect("url-safe"),
            "https://example.com/?q=>>>?"
        );
    }

    #[test]
    fn decode_rejects_garbage_and_non_utf8() {
        assert!(matches!(
            decode_target("@@not base64@@"),
            Err(RedirectError::InvalidTarget { .. })
        ));
        // 0xff 0xfe 0xfd
        assert!(matches!(
            decode_target("//79"),
            Err(RedirectError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn find_param_uses_form_decoding_and_first_match() {
        assert_eq!(find_param("?u=a%2Bb&u=second", "u").as_deref(), Some("a+b"));
        assert_eq!(find_param("u=a+b", "u").as_deref(), Some("a b"));
        assert_eq!(find_param("?x=1", "u"), None);
        assert_eq!(find_param("", "u"), None);
    }

    #[test]
    fn unescaped_plus_in_query_survives_decoding() {
        // base64 of `https://a.b/~~~` ends in `+`, which form decoding turns into a space.
        let config = RedirectConfig::default();
        let target = decode_from_query("?u=aHR0cHM6Ly9hLmIvfn5+", &config).expect("target");
        assert_eq!(target.as_str(), "https://a.b/~~~");
    }

    #[test]
    fn decode_from_query_reports_missing_and_invalid() {
        let config = RedirectConfig::default();
        assert_eq!(
            decode_from_query("", &config),
            Err(RedirectError::MissingParameter)
        );
        assert_eq!(
            decode_from_query("?u=", &config),
            Err(RedirectError::MissingParameter)
        );
        assert_eq!(
            decode_from_query("?other=aHR0cHM6Ly9leGFtcGxlLmNvbS9wYXRoP3g9MQ", &config),
            Err(RedirectError::MissingParameter)
        );
        // `bm90IGEgdXJs` is `not a url`.
        assert!(matches!(
            decode_from_query("?u=bm90IGEgdXJs", &config),
            Err(RedirectError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn decode_from_query_honors_configured_key() {
        let config = RedirectConfig::default().with_param_key("go");
        let query = format!("?u=ignored&go={}", encode_target("https://example.com/"));
        assert_eq!(
            decode_from_query(&query, &config).expect("target").as_str(),
            "https://example.com/"
        );
    }

    #[test]
    fn built_links_decode_back_to_the_target() {
        let config = RedirectConfig::default();
        let target = "https://例子.测试/路径?q=中文";
        let link = build_redirect_link("https://go.example.org/?ref=chat", target, &config)
            .expect("link");
        assert!(link.starts_with("https://go.example.org/?ref=chat&u="));
        let query = Url::parse(&link).expect("link url").query().map(str::to_string);
        let decoded =
            decode_from_query(query.as_deref().unwrap_or_default(), &config).expect("decode");
        assert_eq!(decoded.as_str(), target);
    }
}
