use anyhow::{Context, Result};

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Backend base URL without a trailing slash. Empty means same-origin.
    pub backend_url: String,
    /// Origin this site is served from, used as the API base when no
    /// backend URL is configured. Never taken from request headers.
    pub public_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("Invalid PORT")?;
        let backend_url = normalize_base_url(&std::env::var("BACKEND_URL").unwrap_or_default());
        let public_origin = match normalize_base_url(&std::env::var("PUBLIC_ORIGIN").unwrap_or_default()) {
            origin if origin.is_empty() => local_origin(&host, port),
            origin => origin,
        };

        Ok(Self { host, port, backend_url, public_origin })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Where API calls go: the configured backend, else this site's own origin
    pub fn api_base_url(&self) -> &str {
        if self.backend_url.is_empty() {
            &self.public_origin
        } else {
            &self.backend_url
        }
    }
}

/// "https://api.example.com/" -> "https://api.example.com"
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Origin for reaching this server from itself; wildcard binds map to loopback
pub fn local_origin(host: &str, port: u16) -> String {
    let host = match host {
        "" | "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        host => host,
    };
    format!("http://{}:{}", host, port)
}
