// Bearer token carried over from the login redirect
use std::fmt;

const ACCESS_TOKEN_KEY: &str = "access_token=";

#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extract the token from a URL fragment such as `#access_token=abc&state=xyz`.
    ///
    /// The token is whatever sits between the first `access_token=` and the next `&`
    /// (or the end of the input). A raw query string works the same way. An empty
    /// token is treated as absent.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (_, rest) = fragment.split_once(ACCESS_TOKEN_KEY)?;
        let rest = rest.split(ACCESS_TOKEN_KEY).next().unwrap_or_default();
        let token = rest.split('&').next().unwrap_or_default();

        if token.is_empty() {
            return None;
        }
        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in request logs otherwise
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
