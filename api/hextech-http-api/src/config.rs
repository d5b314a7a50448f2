use thiserror::Error;

pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: parse_allowed_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl HttpConfig {
    /// Reads `HEXTECH_HTTP_HOST`, `HEXTECH_HTTP_PORT` and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HEXTECH_HTTP_HOST").unwrap_or(defaults.host);
        let port = match lookup("HEXTECH_HTTP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    name: "HEXTECH_HTTP_PORT",
                    expected: "a valid u16",
                    value,
                })?,
            None => defaults.port,
        };
        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_allowed_origins(&raw),
            None => defaults.allowed_origins,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }
}

/// Splits a comma separated origin list, trimming entries and dropping empty ones.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_allowed_origins() {
        assert_eq!(
            parse_allowed_origins(" http://localhost:5173 ,,http://example.com, "),
            vec!["http://localhost:5173", "http://example.com"]
        );
        assert!(parse_allowed_origins(" , ,").is_empty());
        assert!(parse_allowed_origins("").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = HttpConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_overrides() {
        let config = HttpConfig::from_lookup(lookup(&[
            ("HEXTECH_HTTP_HOST", "0.0.0.0"),
            ("HEXTECH_HTTP_PORT", "9000"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:4173"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.allowed_origins, vec!["http://localhost:4173"]);
    }

    #[test]
    fn test_invalid_port() {
        let err = HttpConfig::from_lookup(lookup(&[("HEXTECH_HTTP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "HEXTECH_HTTP_PORT",
                ..
            }
        ));
    }
}
