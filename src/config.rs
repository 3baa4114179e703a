use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::generation_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::search_client::DEFAULT_EXA_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub exa_api_key: String,
    pub exa_base_url: String,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = get_or_default(&lookup, "PORT", "5000");
        let port = port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: {port}"))?;

        Ok(Config {
            host: get_or_default(&lookup, "HOST", "0.0.0.0"),
            port,
            gemini_api_key: get_required(&lookup, "GEMINI_API_KEY")?,
            gemini_model: get_or_default(&lookup, "GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get_or_default(&lookup, "GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            exa_api_key: get_required(&lookup, "EXA_API_KEY")?,
            exa_base_url: get_or_default(&lookup, "EXA_BASE_URL", DEFAULT_EXA_BASE_URL),
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

fn get_required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .with_context(|| format!("Missing required environment variable: {key}"))
}

fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("EXA_API_KEY", "e-key"),
        ]))
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.exa_base_url, "https://api.exa.ai");
        assert!(config.static_dir.is_none());
        assert_eq!(config.listen_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("EXA_API_KEY", "e-key"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("STATIC_DIR", "dist"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "g-key")])).unwrap_err();
        assert!(err.to_string().contains("EXA_API_KEY"));
    }

    #[test]
    fn test_bad_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "g-key"),
            ("EXA_API_KEY", "e-key"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
