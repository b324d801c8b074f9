use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_timeout_seconds: u64,
    pub max_upload_bytes: usize,
    pub max_source_chars: usize,
    pub session_ttl_seconds: u64,
    pub max_sessions: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo-1106".to_string()),
            openai_timeout_seconds: env::var("OPENAI_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
            max_source_chars: env::var("MAX_SOURCE_CHARS")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(12_000),
            session_ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60 * 60),
            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(1_000),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        }
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_base: "http://127.0.0.1:9".to_string(),
            openai_model: "test-model".to_string(),
            openai_timeout_seconds: 1,
            max_upload_bytes: 1024 * 1024,
            max_source_chars: 500,
            session_ttl_seconds: 60,
            max_sessions: 16,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
