//! Proxy configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub backend_url: String,
    pub port: u16,
    pub timeouts: BackendTimeouts,
    pub max_upload_bytes: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_API_URL.to_owned(),
            port: DEFAULT_PORT,
            timeouts: BackendTimeouts {
                request_secs: DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ProxyConfig {
    /// Build typed proxy config from environment variables.
    ///
    /// All optional:
    /// - `BACKEND_API_URL` (falls back to `NEXT_PUBLIC_API_URL`): default `http://localhost:8000`
    /// - `PORT`: default 3000
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 120
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAX_UPLOAD_BYTES`: default 10 MiB
    ///
    /// Unparseable numbers fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let backend_url = std::env::var("BACKEND_API_URL")
            .or_else(|_| std::env::var("NEXT_PUBLIC_API_URL"))
            .ok()
            .filter(|url| !url.trim().is_empty());
        let backend_url = normalize_base_url(backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_API_URL));

        Self {
            backend_url,
            port: env_parse("PORT", DEFAULT_PORT),
            timeouts: BackendTimeouts {
                request_secs: env_parse("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
            },
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
