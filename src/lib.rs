//! Transfermarkt query service
//!
//! Fetches pages from transfermarkt.com and extracts player, club and squad
//! data into JSON-ready records. Three pipelines: player search, club search,
//! and club profile with its full squad.

pub mod api;
pub mod fetch;
pub mod scrape;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A player row from the quick-search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedPlayer {
    pub name: String,
    /// Comma-joined country labels; empty when the row shows no flags.
    pub nationality: String,
    pub age: String,
    pub club: String,
    pub market_value: String,
}

/// A player row from a club's squad table.
///
/// Distinct from [`SearchedPlayer`]: the squad page lays its rows out
/// differently (single nationality, contract column instead of club).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadPlayer {
    pub name: String,
    pub nationality: String,
    pub age: String,
    pub contract_end: String,
    pub value: String,
}

/// A club row from the quick-search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchedTeam {
    pub name: String,
    /// Absolute link to the club's profile page.
    pub url: String,
    pub logo: Option<String>,
}

/// A club's profile page: header info plus the squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubProfile {
    pub name: String,
    pub total_market_value: String,
    pub players: Vec<SquadPlayer>,
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum MercatoError {
    #[error("missing query")]
    MissingQuery,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("invalid URL: {0}")]
    Url(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MercatoError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream site root, without a trailing slash.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "https://www.transfermarkt.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MercatoError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| MercatoError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MercatoError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
