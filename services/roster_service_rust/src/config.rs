//! Configuration for roster_service_rust

use anyhow::{anyhow, Result};
use pokeroster_rust_core::PokeApiConfig;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RosterServiceConfig {
    // HTTP listener
    pub host: String,
    pub port: u16,

    // PokeAPI
    pub pokeapi_base_url: String,
    pub pokeapi_limit: u32,
    pub pokeapi_timeout_secs: u64,
}

impl RosterServiceConfig {
    pub fn from_env() -> Result<Self> {
        let pokeapi_base_url = env::var("POKEAPI_BASE_URL")
            .unwrap_or_else(|_| "https://pokeapi.co/api/v2".to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        let pokeapi_limit = parse_u32("POKEAPI_LIMIT", 151)?;
        let pokeapi_timeout_secs = parse_u64("POKEAPI_TIMEOUT_SECS", 10)?;

        if pokeapi_base_url.is_empty() {
            return Err(anyhow!("POKEAPI_BASE_URL must not be empty"));
        }
        if pokeapi_limit == 0 {
            return Err(anyhow!("POKEAPI_LIMIT must be > 0"));
        }
        if pokeapi_timeout_secs == 0 {
            return Err(anyhow!("POKEAPI_TIMEOUT_SECS must be > 0"));
        }

        Ok(Self {
            host: env::var("ROSTER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_u16("ROSTER_PORT", 8080)?,
            pokeapi_base_url,
            pokeapi_limit,
            pokeapi_timeout_secs,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow!("invalid listen address {}:{}: {}", self.host, self.port, e))
    }

    pub fn pokeapi(&self) -> PokeApiConfig {
        PokeApiConfig {
            base_url: self.pokeapi_base_url.clone(),
            limit: self.pokeapi_limit,
            timeout: Duration::from_secs(self.pokeapi_timeout_secs),
        }
    }
}

/// Parse environment variable as u16 with default fallback
fn parse_u16(var_name: &str, default: u16) -> Result<u16> {
    match env::var(var_name) {
        Ok(val) => val.parse().map_err(|_| anyhow!("{} must be a valid u16", var_name)),
        Err(_) => Ok(default),
    }
}

/// Parse environment variable as u32 with default fallback
fn parse_u32(var_name: &str, default: u32) -> Result<u32> {
    match env::var(var_name) {
        Ok(val) => val.parse().map_err(|_| anyhow!("{} must be a valid u32", var_name)),
        Err(_) => Ok(default),
    }
}

/// Parse environment variable as u64 with default fallback
fn parse_u64(var_name: &str, default: u64) -> Result<u64> {
    match env::var(var_name) {
        Ok(val) => val.parse().map_err(|_| anyhow!("{} must be a valid u64", var_name)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-mutating tests race each other; only unset variables are used here.

    #[test]
    fn test_parse_u32_with_default() {
        assert_eq!(parse_u32("NON_EXISTENT_VAR_POKE_LIMIT", 151).unwrap(), 151);
    }

    #[test]
    fn test_parse_u16_with_default() {
        assert_eq!(parse_u16("NON_EXISTENT_VAR_POKE_PORT", 8080).unwrap(), 8080);
    }

    #[test]
    fn test_bind_addr_and_pokeapi_settings() {
        let config = RosterServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            pokeapi_base_url: "http://localhost:9000/api/v2".to_string(),
            pokeapi_limit: 20,
            pokeapi_timeout_secs: 5,
        };

        assert_eq!(config.bind_addr().unwrap().port(), 3000);
        let pokeapi = config.pokeapi();
        assert_eq!(pokeapi.limit, 20);
        assert_eq!(pokeapi.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_host_is_rejected() {
        let config = RosterServiceConfig {
            host: "not a host".to_string(),
            port: 3000,
            pokeapi_base_url: "http://localhost".to_string(),
            pokeapi_limit: 1,
            pokeapi_timeout_secs: 1,
        };
        assert!(config.bind_addr().is_err());
    }
}
