use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origins: Vec<String>,
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
            allowed_origins: allowed_origins_from_env(),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Reads the browser origins allowed by CORS. `ALLOWED_ORIGINS` takes a
/// comma-separated list; `FRONTEND_URL` names a single origin as a fallback.
fn allowed_origins_from_env() -> Vec<String> {
    if let Ok(raw) = env::var("ALLOWED_ORIGINS") {
        let mut origins: Vec<String> = Vec::new();
        for entry in raw.split(',') {
            let origin = normalize_origin(entry);
            if !origin.is_empty() && !origins.contains(&origin) {
                origins.push(origin);
            }
        }
        if !origins.is_empty() {
            return origins;
        }
    }
    let single = env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    vec![normalize_origin(&single)]
}

/// Origins compare case-insensitively and never carry a trailing slash.
fn normalize_origin(value: &str) -> String {
    value.trim().trim_end_matches('/').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_origin() {
        assert_eq!(
            normalize_origin(" HTTP://Example.COM/ "),
            "http://example.com"
        );
        assert_eq!(
            normalize_origin("http://localhost:3000"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(config.web_server_port > 0);
        assert!(!config.allowed_origins.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }
}
