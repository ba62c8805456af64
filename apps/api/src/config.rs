use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON gazetteer for entity recognition. Absent means keyword-only extraction.
    pub entity_gazetteer_path: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            entity_gazetteer_path: lookup("ENTITY_GAZETTEER_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_body_bytes: match lookup("MAX_BODY_BYTES") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_BODY_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.entity_gazetteer_path.is_none());
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("ENTITY_GAZETTEER_PATH", "/etc/resumatch/entities.json"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(
            config.entity_gazetteer_path,
            Some(PathBuf::from("/etc/resumatch/entities.json"))
        );
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_blank_gazetteer_path_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("ENTITY_GAZETTEER_PATH", "  ")])).unwrap();
        assert!(config.entity_gazetteer_path.is_none());
    }

    #[test]
    fn test_invalid_port_fails() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn test_invalid_body_limit_fails() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_BODY_BYTES", "-1")])).is_err());
    }
}
