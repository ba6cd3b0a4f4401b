use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::mealdb::DEFAULT_BASE_URL;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mealdb: MealDbConfig,
    #[serde(default)]
    pub print: PrintConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// TheMealDB client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MealDbConfig {
    /// API base URL (default: https://www.themealdb.com/api/json/v1/1)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Printable plan configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrintConfig {
    /// Name shown in the footer of printed plans
    #[serde(default = "default_brand")]
    pub brand: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
        }
    }
}

fn default_brand() -> String {
    "Whats for Supper".to_string()
}
