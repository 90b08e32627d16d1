//! Client environment classification from the self-reported user agent.
//!
//! Detection is a case-insensitive substring match on a spoofable string. An absent user agent is
//! "not in-app".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse device family, used to word in-app escape instructions.
pub enum ClientPlatform {
    /// iPhone, iPad, or iPod.
    Ios,
    /// Android phones and tablets.
    Android,
    /// Anything else.
    Desktop,
}

impl ClientPlatform {
    /// Returns whether this is a handheld platform.
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }

    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classified client environment for one page load.
pub struct ClientEnvironment {
    /// The user agent carries a configured in-app browser marker.
    pub in_app: bool,
    /// Device family.
    pub platform: ClientPlatform,
}

/// Classifies a user agent against the configured in-app markers.
pub fn classify_client(user_agent: Option<&str>, in_app_markers: &[String]) -> ClientEnvironment {
    let Some(user_agent) = user_agent else {
        return ClientEnvironment {
            in_app: false,
            platform: ClientPlatform::Desktop,
        };
    };
    let lowered = user_agent.to_lowercase();
    let in_app = in_app_markers
        .iter()
        .map(|marker| marker.trim())
        .filter(|marker| !marker.is_empty())
        .any(|marker| lowered.contains(&marker.to_lowercase()));
    let platform = if ["iphone", "ipad", "ipod"]
        .iter()
        .any(|token| lowered.contains(token))
    {
        ClientPlatform::Ios
    } else if lowered.contains("android") {
        ClientPlatform::Android
    } else {
        ClientPlatform::Desktop
    };
    ClientEnvironment { in_app, platform }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WECHAT_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 MicroMessenger/8.0.40(0x18002831) \
NetType/WIFI Language/zh_CN";
    const WECHAT_ANDROID: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/116.0 Mobile Safari/537.36 MicroMessenger/8.0.42.2460(0x28002A58)";
    const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    fn markers() -> Vec<String> {
        vec!["MicroMessenger".to_string()]
    }

    #[test]
    fn detects_marker_case_insensitively() {
        let env = classify_client(Some(WECHAT_IOS), &markers());
        assert!(env.in_app);
        assert_eq!(env.platform, ClientPlatform::Ios);

        let env = classify_client(Some("foo MICROMESSENGER bar"), &markers());
        assert!(env.in_app);
        assert_eq!(env.platform, ClientPlatform::Desktop);

        let env = classify_client(Some(WECHAT_ANDROID), &markers());
        assert!(env.in_app);
        assert_eq!(env.platform, ClientPlatform::Android);
        assert!(env.platform.is_mobile());
    }

    #[test]
    fn ordinary_and_absent_agents_are_not_in_app() {
        assert!(!classify_client(Some(DESKTOP_CHROME), &markers()).in_app);
        let absent = classify_client(None, &markers());
        assert!(!absent.in_app);
        assert_eq!(absent.platform, ClientPlatform::Desktop);
    }

    #[test]
    fn blank_markers_never_match() {
        let env = classify_client(Some(DESKTOP_CHROME), &["  ".to_string(), String::new()]);
        assert!(!env.in_app);
    }
}
