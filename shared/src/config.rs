use tracing::warn;

pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub allowed_origin: String,
    pub provider_url: String,
    pub pacing_ms: u64,
    pub provider_timeout_secs: u64,
}

impl Config {
    const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
    const DEFAULT_PROVIDER_URL: &str = "https://translate.googleapis.com";

    pub fn from_env() -> Self {
        Self {
            host: std::env::var("LINGO_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            http_port: std::env::var("LINGO_HTTP_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .unwrap_or(8000),
            allowed_origin: std::env::var("LINGO_ALLOWED_ORIGIN").unwrap_or_else(|_| {
                warn!(
                    "LINGO_ALLOWED_ORIGIN not set, allowing only {}",
                    Self::DEFAULT_ALLOWED_ORIGIN
                );
                Self::DEFAULT_ALLOWED_ORIGIN.to_string()
            }),
            provider_url: std::env::var("LINGO_PROVIDER_URL")
                .unwrap_or_else(|_| Self::DEFAULT_PROVIDER_URL.to_string()),
            pacing_ms: std::env::var("LINGO_PACING_MS")
                .unwrap_or_else(|_| "200".to_string())
                .parse::<u64>()
                .unwrap_or(200),
            provider_timeout_secs: std::env::var("LINGO_PROVIDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .unwrap_or(10),
        }
    }
}
