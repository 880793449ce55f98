use std::time::Duration;

use log::warn;

pub const LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql/";
pub const LEETCODE_REFERER: &str = "https://leetcode.com";

/// Fallback for local development, matches the front end's default endpoint.
pub const DEFAULT_PORT: u16 = 5000;

/// Upper bound on one upstream exchange, headers and body together.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub referer: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_port(std::env::var("PORT").ok().as_deref())
    }

    fn with_port(raw: Option<&str>) -> Self {
        let port = match raw {
            Some(p) => p.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value {:?}, using {}", p, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            port,
            upstream_url: LEETCODE_GRAPHQL_URL.to_string(),
            referer: LEETCODE_REFERER.to_string(),
            upstream_timeout: UPSTREAM_TIMEOUT,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
