use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_ROSTER_SIZE: usize = 50;

/// Application configuration loaded from environment variables.
/// Every variable is optional; bad values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Largest roster accepted by the team analysis endpoint.
    pub max_roster_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_roster_size: DEFAULT_MAX_ROSTER_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let max_roster_size = match lookup("MAX_ROSTER_SIZE") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_ROSTER_SIZE must be a positive integer")?,
            None => defaults.max_roster_size,
        };
        if max_roster_size == 0 {
            bail!("MAX_ROSTER_SIZE must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_roster_size,
        })
    }
}
