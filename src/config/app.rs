use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Retry on `port + 1` when the configured port is already bound.
    pub port_fallback: bool,
    pub public_dir: PathBuf,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            port_fallback: true,
            public_dir: PathBuf::from("public"),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so tests never
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.port);
        let port_fallback = lookup("PORT_FALLBACK")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(defaults.port_fallback);
        let public_dir = lookup("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);
        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);
        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        AppConfig {
            host,
            port,
            port_fallback,
            public_dir,
            environment,
            log_level,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address tried when the primary port is taken, `None` if disabled or
    /// the port has no successor.
    pub fn fallback_address(&self) -> Option<String> {
        if !self.port_fallback {
            return None;
        }
        let next = self.port.checked_add(1)?;
        Some(format!("{}:{}", self.host, next))
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.port_fallback);
        assert!(config.is_development());
    }

    #[test]
    fn test_port_is_read_from_environment() {
        let config = config_from(&[("PORT", "8080"), ("HOST", "127.0.0.1")]);

        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert_eq!(config.fallback_address().as_deref(), Some("127.0.0.1:8081"));
    }

    #[test]
    fn test_unparseable_port_uses_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let config = config_from(&[("PORT_FALLBACK", "false")]);
        assert_eq!(config.fallback_address(), None);
    }

    #[test]
    fn test_no_fallback_past_last_port() {
        let config = config_from(&[("PORT", "65535")]);
        assert_eq!(config.fallback_address(), None);
    }
}
