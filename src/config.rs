use anyhow::{Context, Result};
use std::env;

use crate::constants::{
    API_KEY_PREFIX, DEFAULT_GAS_LIMIT, MAX_FILE_SIZE, MAX_GAS_PRICE_GWEI, SUPPORTED_NETWORKS,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub files: FileConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "json" or "text"
    pub format: String,
    pub service_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub api_key_prefix: String,
}

#[derive(Debug, Clone)]
pub struct FileConfig {
    pub max_size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub default_network: String,
    pub supported_networks: Vec<String>,
    pub default_gas_limit: u64,
    pub max_gas_price_gwei: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            logging: LoggingConfig::from_env()?,
            security: SecurityConfig::from_env(),
            files: FileConfig::from_env()?,
            network: NetworkConfig::from_env()?,
        })
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        let format = env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
        if format != "json" && format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text', got '{format}'");
        }

        Ok(LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format,
            service_name: env::var("LOG_SERVICE_NAME").ok(),
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
            service_name: None,
        }
    }
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        SecurityConfig {
            api_key_prefix: env::var("SECURITY_API_KEY_PREFIX")
                .unwrap_or_else(|_| API_KEY_PREFIX.to_string()),
        }
    }
}

impl FileConfig {
    pub fn from_env() -> Result<Self> {
        Ok(FileConfig {
            max_size_bytes: env::var("FILE_MAX_SIZE")
                .unwrap_or_else(|_| MAX_FILE_SIZE.to_string())
                .parse()
                .context("FILE_MAX_SIZE must be a valid number of bytes")?,
        })
    }
}

impl NetworkConfig {
    pub fn from_env() -> Result<Self> {
        let default_network =
            env::var("NETWORK_DEFAULT").unwrap_or_else(|_| "polygon".to_string());
        let supported_networks: Vec<String> =
            SUPPORTED_NETWORKS.iter().map(|s| s.to_string()).collect();
        if !supported_networks.contains(&default_network) {
            anyhow::bail!(
                "NETWORK_DEFAULT must be one of [{}], got '{default_network}'",
                supported_networks.join(", ")
            );
        }

        Ok(NetworkConfig {
            default_network,
            supported_networks,
            default_gas_limit: env::var("NETWORK_DEFAULT_GAS_LIMIT")
                .unwrap_or_else(|_| DEFAULT_GAS_LIMIT.to_string())
                .parse()
                .context("NETWORK_DEFAULT_GAS_LIMIT must be a valid number")?,
            max_gas_price_gwei: env::var("NETWORK_MAX_GAS_PRICE_GWEI")
                .unwrap_or_else(|_| MAX_GAS_PRICE_GWEI.to_string())
                .parse()
                .context("NETWORK_MAX_GAS_PRICE_GWEI must be a valid number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
        assert!(config.service_name.is_none());
    }

    #[test]
    fn test_file_config_default_ceiling() {
        let config = FileConfig {
            max_size_bytes: MAX_FILE_SIZE,
        };
        assert_eq!(config.max_size_bytes, 100 * 1024 * 1024);
    }

    #[test]
    fn test_network_defaults_are_supported() {
        let config = NetworkConfig {
            default_network: "polygon".to_string(),
            supported_networks: SUPPORTED_NETWORKS.iter().map(|s| s.to_string()).collect(),
            default_gas_limit: DEFAULT_GAS_LIMIT,
            max_gas_price_gwei: MAX_GAS_PRICE_GWEI,
        };
        assert!(config
            .supported_networks
            .contains(&config.default_network));
    }
}
