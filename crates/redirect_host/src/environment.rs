//! Page environment contracts: the inputs a redirect decision is made from.

/// Read-only view of the current page load.
pub trait PageEnvironment {
    /// Returns the raw query string of the current page, including the leading `?` when present.
    fn query_string(&self) -> String;

    /// Returns the client's self-reported identification string, if any.
    ///
    /// An empty identification string is reported as `None`.
    fn user_agent(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fixed page environment for non-browser targets and tests.
pub struct StaticPageEnvironment {
    query: String,
    user_agent: Option<String>,
}

impl StaticPageEnvironment {
    /// Creates an environment with the given query string and identification string.
    pub fn new(query: impl Into<String>, user_agent: Option<&str>) -> Self {
        Self {
            query: query.into(),
            user_agent: user_agent.map(str::to_string),
        }
    }
}

impl PageEnvironment for StaticPageEnvironment {
    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent
            .as_deref()
            .filter(|ua| !ua.trim().is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_user_agent_reads_as_absent() {
        let env = StaticPageEnvironment::new("?u=abc", Some("   "));
        assert_eq!(env.user_agent(), None);
        assert_eq!(env.query_string(), "?u=abc");
    }
}
