use std::env;

/// One day, matching the lifetime of the session cookie.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

const DEV_SECRET: &str = "appsynex-dev-secret-change-me";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds a session token stays valid.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.to_string()),
            access_token_expiry: parse_ttl(env::var("JWT_ACCESS_EXPIRY").ok().as_deref()),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

/// Positive whole seconds, or the default.
fn parse_ttl(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_SESSION_TTL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl() {
        assert_eq!(parse_ttl(Some("3600")), 3600);
        assert_eq!(parse_ttl(Some(" 60 ")), 60);
        assert_eq!(parse_ttl(Some("0")), DEFAULT_SESSION_TTL_SECS);
        assert_eq!(parse_ttl(Some("soon")), DEFAULT_SESSION_TTL_SECS);
        assert_eq!(parse_ttl(None), DEFAULT_SESSION_TTL_SECS);
    }
}
